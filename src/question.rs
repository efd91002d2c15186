use serde::Deserialize;
use thiserror::Error;

/// Telegram rejects callback data longer than this many bytes.
pub const MAX_TOKEN_BYTES: usize = 64;

/// Why a question record was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidQuestion {
    #[error("{options} options but {localized} localized options")]
    OptionCountMismatch { options: usize, localized: usize },
    #[error("correct answer '{0}' is not one of the options")]
    UnknownCorrectAnswer(String),
    #[error("option '{token}' is {bytes} bytes, more than fits in a button")]
    TokenTooLong { token: String, bytes: usize },
}

/// A single bilingual multiple-choice question.
///
/// Constructed only through [`Question::new`], so every value upholds
/// `options.len() == options_localized.len()`, `correct_answer ∈ options`
/// and every option fits in [`MAX_TOKEN_BYTES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt_primary: String,
    prompt_secondary: String,
    options: Vec<String>,
    options_localized: Vec<String>,
    correct_answer: String,
    correct_answer_localized: String,
}

/// Shape of one entry in the questions file.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub question_hindi: String,
    pub options: Vec<String>,
    pub options_hindi: Vec<String>,
    pub correct_answer: String,
    pub correct_answer_hindi: String,
}

impl Question {
    pub fn new(
        prompt_primary: impl Into<String>,
        prompt_secondary: impl Into<String>,
        options: Vec<String>,
        options_localized: Vec<String>,
        correct_answer: impl Into<String>,
        correct_answer_localized: impl Into<String>,
    ) -> Result<Self, InvalidQuestion> {
        if options.len() != options_localized.len() {
            return Err(InvalidQuestion::OptionCountMismatch {
                options: options.len(),
                localized: options_localized.len(),
            });
        }

        if let Some(token) = options.iter().find(|o| o.len() > MAX_TOKEN_BYTES) {
            return Err(InvalidQuestion::TokenTooLong {
                token: token.clone(),
                bytes: token.len(),
            });
        }

        let correct_answer = correct_answer.into();
        if !options.contains(&correct_answer) {
            return Err(InvalidQuestion::UnknownCorrectAnswer(correct_answer));
        }

        Ok(Self {
            prompt_primary: prompt_primary.into(),
            prompt_secondary: prompt_secondary.into(),
            options,
            options_localized,
            correct_answer,
            correct_answer_localized: correct_answer_localized.into(),
        })
    }

    pub fn prompt_primary(&self) -> &str {
        &self.prompt_primary
    }

    pub fn prompt_secondary(&self) -> &str {
        &self.prompt_secondary
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn options_localized(&self) -> &[String] {
        &self.options_localized
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    pub fn correct_answer_localized(&self) -> &str {
        &self.correct_answer_localized
    }

    /// Exact, case-sensitive comparison against the canonical token.
    pub fn is_correct(&self, choice: &str) -> bool {
        self.correct_answer == choice
    }
}

impl TryFrom<QuestionRecord> for Question {
    type Error = InvalidQuestion;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        Question::new(
            record.question,
            record.question_hindi,
            record.options,
            record.options_hindi,
            record.correct_answer,
            record.correct_answer_hindi,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn accepts_consistent_record() {
        let question = Question::new(
            "Capital of France?",
            "फ्रांस की राजधानी?",
            strings(&["Paris", "Rome"]),
            strings(&["पेरिस", "रोम"]),
            "Paris",
            "पेरिस",
        )
        .unwrap();

        assert_eq!(question.options(), ["Paris", "Rome"]);
        assert_eq!(question.correct_answer_localized(), "पेरिस");
    }

    #[test]
    fn rejects_mismatched_option_lists() {
        let err = Question::new(
            "q",
            "q",
            strings(&["a", "b"]),
            strings(&["a"]),
            "a",
            "a",
        )
        .unwrap_err();

        assert_eq!(
            err,
            InvalidQuestion::OptionCountMismatch {
                options: 2,
                localized: 1
            }
        );
    }

    #[test]
    fn rejects_correct_answer_outside_options() {
        let err = Question::new("q", "q", strings(&["a"]), strings(&["x"]), "b", "y").unwrap_err();
        assert_eq!(err, InvalidQuestion::UnknownCorrectAnswer("b".into()));
    }

    #[test]
    fn rejects_options_too_long_for_a_button() {
        let long = "x".repeat(MAX_TOKEN_BYTES + 4);
        let err = Question::new(
            "q",
            "q",
            strings(&["short", long.as_str()]),
            strings(&["a", "b"]),
            "short",
            "a",
        )
        .unwrap_err();

        assert_eq!(
            err,
            InvalidQuestion::TokenTooLong {
                token: long,
                bytes: 68
            }
        );
    }

    #[test]
    fn accepts_option_at_the_byte_limit() {
        // Devanagari is three bytes per char in UTF-8.
        let exact = "क".repeat(MAX_TOKEN_BYTES / 3) + "x";
        assert_eq!(exact.len(), MAX_TOKEN_BYTES);
        assert!(Question::new("q", "q", vec![exact.clone()], strings(&["a"]), exact, "a").is_ok());

        let over = "क".repeat(MAX_TOKEN_BYTES / 3 + 1);
        let err = Question::new("q", "q", vec![over.clone()], strings(&["a"]), over, "a");
        assert!(matches!(err, Err(InvalidQuestion::TokenTooLong { bytes: 66, .. })));
    }

    #[test]
    fn grading_is_exact_and_case_sensitive() {
        let question = Question::new(
            "q",
            "q",
            strings(&["Blue", "Green"]),
            strings(&["नीला", "हरा"]),
            "Blue",
            "नीला",
        )
        .unwrap();

        assert!(question.is_correct("Blue"));
        assert!(!question.is_correct("blue"));
        assert!(!question.is_correct("नीला"));
        assert!(!question.is_correct(""));
    }
}
