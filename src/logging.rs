use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use crate::error::{QuizError, Result};

/// Installs the JSON subscriber. `directives` takes `EnvFilter` syntax,
/// e.g. `info` or `warn,bilingual_quiz_bot=debug`.
pub fn init(directives: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directives)
        .map_err(|e| QuizError::Config(format!("LOG_LEVEL can't be parsed: {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_span_events(FmtSpan::ENTER)
        .log_internal_errors(true)
        .with_line_number(true)
        .with_target(false)
        .try_init()
        .map_err(|e| QuizError::Config(format!("logging already initialised: {e}")))
}
