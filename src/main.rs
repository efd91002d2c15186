use std::error::Error;
use std::sync::Arc;

use bilingual_quiz_bot::{
    commands::Command, config::Config, engine::QuizEngine, logging,
    repository::JsonFileRepository, schema::schema,
};
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::update_listeners::webhooks::{self, Options};
use teloxide::utils::command::BotCommands;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = Config::from_env()?;
    logging::init(&config.log_level)?;

    let repository = JsonFileRepository::new(&config.questions_path);
    info!("Questions are read from {}", repository.path().display());
    let engine = Arc::new(QuizEngine::new(repository));

    let bot = Bot::new(config.token.clone());
    bot.set_my_commands(Command::bot_commands()).await?;
    info!("Starting bot...");

    let mut dispatcher = Dispatcher::builder(bot.clone(), schema::<JsonFileRepository>())
        .dependencies(dptree::deps![engine])
        .enable_ctrlc_handler()
        .build();

    if let Some(webhook) = config.webhook {
        info!("Listening for webhook updates on {}", webhook.addr);
        let listener = webhooks::axum(bot, Options::new(webhook.addr, webhook.url)).await?;
        dispatcher
            .dispatch_with_listener(
                listener,
                LoggingErrorHandler::with_custom_text("An error from the update listener"),
            )
            .await;
    } else {
        dispatcher.dispatch().await;
    }

    Ok(())
}
