use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};

use crate::{
    error::{QuizError, Result},
    question::{Question, QuestionRecord},
};

/// Source of the ordered question list.
///
/// Each call returns a fresh snapshot; implementors are not expected to cache.
pub trait LoadQuestions {
    fn load(&self) -> Result<Vec<Question>>;
}

/// Reads a JSON array of question records from disk on every load.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LoadQuestions for JsonFileRepository {
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Vec<Question>> {
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            QuizError::DataUnavailable(format!("{}: {}", self.path.display(), e))
        })?;
        let questions = parse_questions(&raw)?;
        debug!("loaded {} questions", questions.len());
        Ok(questions)
    }
}

/// In-memory question list, handed out as a clone on every load.
#[derive(Debug, Clone, Default)]
pub struct StaticQuestions {
    questions: Vec<Question>,
}

impl StaticQuestions {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }
}

impl LoadQuestions for StaticQuestions {
    fn load(&self) -> Result<Vec<Question>> {
        Ok(self.questions.clone())
    }
}

/// Parses the questions file format, validating every record.
pub fn parse_questions(raw: &str) -> Result<Vec<Question>> {
    let records: Vec<QuestionRecord> = serde_json::from_str(raw)
        .map_err(|e| QuizError::DataUnavailable(format!("malformed questions: {e}")))?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Question::try_from(record).map_err(|reason| QuizError::DataInvalid { index, reason })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::InvalidQuestion;

    const TWO_QUESTIONS: &str = r#"[
        {
            "question": "Capital of France?",
            "question_hindi": "फ्रांस की राजधानी क्या है?",
            "options": ["Paris", "Rome"],
            "options_hindi": ["पेरिस", "रोम"],
            "correct_answer": "Paris",
            "correct_answer_hindi": "पेरिस"
        },
        {
            "question": "How many days in a week?",
            "question_hindi": "एक सप्ताह में कितने दिन होते हैं?",
            "options": ["5", "7"],
            "options_hindi": ["पाँच", "सात"],
            "correct_answer": "7",
            "correct_answer_hindi": "सात"
        }
    ]"#;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("quiz-{}-{}.json", name, std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn parses_records_in_file_order() {
        let questions = parse_questions(TWO_QUESTIONS).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].correct_answer(), "Paris");
        assert_eq!(questions[1].prompt_primary(), "How many days in a week?");
        assert_eq!(questions[1].options_localized(), ["पाँच", "सात"]);
    }

    #[test]
    fn empty_array_is_a_valid_source() {
        assert!(parse_questions("[]").unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_unavailable() {
        let err = parse_questions("{ not json").unwrap_err();
        assert!(matches!(err, QuizError::DataUnavailable(_)));
    }

    #[test]
    fn missing_field_is_unavailable() {
        let err = parse_questions(r#"[{ "question": "q" }]"#).unwrap_err();
        assert!(matches!(err, QuizError::DataUnavailable(_)));
    }

    #[test]
    fn invariant_violation_names_the_record() {
        let raw = r#"[
            {
                "question": "ok",
                "question_hindi": "ok",
                "options": ["a"],
                "options_hindi": ["अ"],
                "correct_answer": "a",
                "correct_answer_hindi": "अ"
            },
            {
                "question": "broken",
                "question_hindi": "broken",
                "options": ["a", "b"],
                "options_hindi": ["अ", "ब"],
                "correct_answer": "c",
                "correct_answer_hindi": "स"
            }
        ]"#;

        match parse_questions(raw).unwrap_err() {
            QuizError::DataInvalid { index, reason } => {
                assert_eq!(index, 1);
                assert_eq!(reason, InvalidQuestion::UnknownCorrectAnswer("c".into()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn oversized_option_token_is_invalid() {
        let long = "y".repeat(70);
        let raw = format!(
            r#"[{{
                "question": "q",
                "question_hindi": "q",
                "options": ["ok", "{long}"],
                "options_hindi": ["a", "b"],
                "correct_answer": "ok",
                "correct_answer_hindi": "a"
            }}]"#
        );

        match parse_questions(&raw).unwrap_err() {
            QuizError::DataInvalid { index, reason } => {
                assert_eq!(index, 0);
                assert!(matches!(reason, InvalidQuestion::TokenTooLong { bytes: 70, .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn file_repository_reads_on_every_load() {
        let path = temp_file("reload", "[]");
        let repository = JsonFileRepository::new(&path);
        assert!(repository.load().unwrap().is_empty());

        fs::write(&path, TWO_QUESTIONS).unwrap();
        assert_eq!(repository.load().unwrap().len(), 2);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_unavailable() {
        let repository = JsonFileRepository::new("/nonexistent/quiz/questions.json");
        assert!(matches!(
            repository.load(),
            Err(QuizError::DataUnavailable(_))
        ));
    }
}
