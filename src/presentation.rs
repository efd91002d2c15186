use crate::question::Question;

/// One entry of the command listing shown by `/help`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
}

/// Every listed command, in display order. `language` and `score` are listed
/// but have no handler yet.
pub const COMMAND_TABLE: [CommandEntry; 5] = [
    CommandEntry {
        name: "start",
        description: "Start the quiz",
    },
    CommandEntry {
        name: "stop",
        description: "Stop the bot",
    },
    CommandEntry {
        name: "help",
        description: "Get help",
    },
    CommandEntry {
        name: "language",
        description: "Change language (Hindi/English)",
    },
    CommandEntry {
        name: "score",
        description: "Check your score",
    },
];

pub const STOPPED: &str = "Quiz stopped. Thank you for playing!";
pub const UNEXPECTED_INPUT: &str = "Please use the commands or answer the quiz.";
pub const DATA_FAILURE: &str =
    "Sorry, the quiz questions could not be loaded. Please try again later.";

/// A selectable option: what the user sees and what comes back when pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub token: String,
}

/// Transport-agnostic message: text plus an ordered, possibly empty, list of
/// choices to render as buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub choices: Vec<Choice>,
}

impl Rendered {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            choices: Vec::new(),
        }
    }
}

pub fn render_question(question: &Question, index: usize, _total: usize) -> Rendered {
    let text = format!(
        "Q{}: {} ({})",
        index + 1,
        question.prompt_secondary(),
        question.prompt_primary()
    );
    let choices = question
        .options()
        .iter()
        .zip(question.options_localized())
        .map(|(token, label)| Choice {
            label: label.clone(),
            token: token.clone(),
        })
        .collect();

    Rendered { text, choices }
}

pub fn render_outcome(correct: bool, correct_answer: &str, correct_answer_localized: &str) -> String {
    if correct {
        "✅ Correct!".to_string()
    } else {
        format!("❌ Incorrect! Correct answer: {correct_answer_localized} ({correct_answer})")
    }
}

pub fn render_summary(score: usize, total: usize) -> Rendered {
    Rendered::text(format!("🎉 Quiz finished! Your score is {score} / {total}"))
}

pub fn render_help(commands: &[CommandEntry]) -> Rendered {
    let mut text = String::from("Here are the available commands:\n");
    for command in commands {
        text.push_str(&format!("/{}: {}\n", command.name, command.description));
    }
    Rendered::text(text)
}
