use std::sync::Arc;

use teloxide::{
    dispatching::dialogue::GetChatId,
    payloads::SendMessageSetters,
    prelude::Requester,
    types::{CallbackQuery, ChatId, Message},
    Bot,
};
use tracing::{debug, instrument, warn};

use crate::{
    engine::{QuizEngine, QuizEvent},
    keyboard::choices_keyboard,
    presentation::{Rendered, UNEXPECTED_INPUT},
    repository::LoadQuestions,
    session::ConversationId,
    HandlerResult,
};

/// Sends a rendered message, attaching its choices as inline buttons.
pub(crate) async fn send_rendered(bot: &Bot, chat_id: ChatId, rendered: Rendered) -> HandlerResult {
    if rendered.choices.is_empty() {
        bot.send_message(chat_id, rendered.text).await?;
    } else {
        bot.send_message(chat_id, rendered.text)
            .reply_markup(choices_keyboard(&rendered.choices))
            .await?;
    }
    Ok(())
}

#[instrument(level = "info", skip_all, fields(data = ?q.data))]
pub(crate) async fn take_answer<R: LoadQuestions>(
    bot: Bot,
    q: CallbackQuery,
    engine: Arc<QuizEngine<R>>,
) -> HandlerResult {
    if let Err(e) = bot.answer_callback_query(&q.id).await {
        warn!("failed to acknowledge callback {}: {}", q.id, e);
    }

    let (Some(chat_id), Some(choice)) = (q.chat_id(), q.data.clone()) else {
        debug!("callback without chat or data, ignoring");
        return Ok(());
    };

    let reply = engine.handle(
        ConversationId(chat_id.0),
        QuizEvent::AnswerSelected(choice),
    );

    if let (Some(feedback), Some(message)) = (reply.feedback, &q.message) {
        bot.edit_message_text(chat_id, message.id(), feedback)
            .await?;
    }

    send_rendered(&bot, chat_id, reply.message).await
}

#[instrument(level = "info", skip_all, fields(chat = msg.chat.id.0))]
pub(crate) async fn invalid_input(bot: Bot, msg: Message) -> HandlerResult {
    debug!("unexpected message {:?}", msg.text());
    bot.send_message(msg.chat.id, UNEXPECTED_INPUT).await?;
    Ok(())
}
