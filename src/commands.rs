use std::sync::Arc;

use teloxide::{types::Message, utils::command::BotCommands, Bot};
use tracing::instrument;

use crate::{
    engine::{QuizEngine, QuizEvent},
    repository::LoadQuestions,
    runner::send_rendered,
    session::ConversationId,
    HandlerResult,
};

#[derive(Debug, Clone, BotCommands)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    #[command(description = "Start the quiz")]
    Start,
    #[command(description = "Stop the bot")]
    Stop,
    #[command(description = "Get help")]
    Help,
}

impl Command {
    pub fn event(&self) -> QuizEvent {
        match self {
            Command::Start => QuizEvent::Start,
            Command::Stop => QuizEvent::Stop,
            Command::Help => QuizEvent::HelpRequested,
        }
    }
}

async fn dispatch<R: LoadQuestions>(
    bot: &Bot,
    msg: &Message,
    engine: &QuizEngine<R>,
    command: Command,
) -> HandlerResult {
    let reply = engine.handle(ConversationId(msg.chat.id.0), command.event());
    send_rendered(bot, msg.chat.id, reply.message).await
}

#[instrument(level = "info", skip_all, fields(chat = msg.chat.id.0))]
pub(crate) async fn start<R: LoadQuestions>(
    bot: Bot,
    msg: Message,
    engine: Arc<QuizEngine<R>>,
) -> HandlerResult {
    dispatch(&bot, &msg, &engine, Command::Start).await
}

#[instrument(level = "info", skip_all, fields(chat = msg.chat.id.0))]
pub(crate) async fn stop<R: LoadQuestions>(
    bot: Bot,
    msg: Message,
    engine: Arc<QuizEngine<R>>,
) -> HandlerResult {
    dispatch(&bot, &msg, &engine, Command::Stop).await
}

#[instrument(level = "debug", skip_all, fields(chat = msg.chat.id.0))]
pub(crate) async fn help<R: LoadQuestions>(
    bot: Bot,
    msg: Message,
    engine: Arc<QuizEngine<R>>,
) -> HandlerResult {
    dispatch(&bot, &msg, &engine, Command::Help).await
}
