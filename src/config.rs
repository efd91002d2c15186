use std::{net::SocketAddr, path::PathBuf};

use url::Url;

use crate::error::{QuizError, Result};

pub const DEFAULT_QUESTIONS_PATH: &str = "questions.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Runtime settings, read from the environment (and `.env` if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub questions_path: PathBuf,
    pub log_level: String,
    pub webhook: Option<WebhookConfig>,
}

/// Where Telegram should push updates instead of being polled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    pub url: Url,
    pub addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = lookup("TELOXIDE_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| QuizError::Config("TELOXIDE_TOKEN should be set".into()))?;

        let questions_path = lookup("QUESTIONS_PATH")
            .unwrap_or_else(|| DEFAULT_QUESTIONS_PATH.into())
            .into();
        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.into());

        let webhook = match (lookup("WEBHOOK_URL"), lookup("WEBHOOK_ADDR")) {
            (Some(url), Some(addr)) => Some(WebhookConfig {
                url: url
                    .parse()
                    .map_err(|e| QuizError::Config(format!("WEBHOOK_URL can't be parsed: {e}")))?,
                addr: addr
                    .parse()
                    .map_err(|e| QuizError::Config(format!("WEBHOOK_ADDR can't be parsed: {e}")))?,
            }),
            (None, None) => None,
            _ => {
                return Err(QuizError::Config(
                    "WEBHOOK_URL and WEBHOOK_ADDR must be set together".into(),
                ))
            }
        };

        Ok(Self {
            token,
            questions_path,
            log_level,
            webhook,
        })
    }
}
