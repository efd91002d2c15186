use teloxide::{
    dispatching::{UpdateFilterExt, UpdateHandler},
    dptree,
    types::Update,
};

use crate::{
    commands::{self, Command},
    repository::LoadQuestions,
    runner,
};

/// Routes every Telegram update to the engine: commands and button presses
/// map to quiz events, any other message gets the unexpected-input notice.
pub fn schema<R>() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>>
where
    R: LoadQuestions + Send + Sync + 'static,
{
    use dptree::case;

    let command_handler = teloxide::filter_command::<Command, _>()
        .branch(case![Command::Start].endpoint(commands::start::<R>))
        .branch(case![Command::Stop].endpoint(commands::stop::<R>))
        .branch(case![Command::Help].endpoint(commands::help::<R>));

    let message_handler = Update::filter_message()
        .branch(command_handler)
        .endpoint(runner::invalid_input);

    let callback_handler =
        Update::filter_callback_query().endpoint(runner::take_answer::<R>);

    dptree::entry()
        .branch(message_handler)
        .branch(callback_handler)
}
