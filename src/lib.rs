pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod keyboard;
pub mod logging;
pub mod presentation;
pub mod question;
pub mod repository;
pub mod runner;
pub mod schema;
pub mod session;

pub use error::{QuizError, Result};

type HandlerResult = std::result::Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>;
