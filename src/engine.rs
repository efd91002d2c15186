use tracing::{error, info, instrument, warn};

use crate::{
    error::{QuizError, Result},
    presentation::{self, Rendered, COMMAND_TABLE},
    repository::LoadQuestions,
    session::{ConversationId, SessionStore},
};

/// Where a conversation stands in the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Idle,
    AwaitingAnswer,
    Finished,
}

/// Inbound event kinds a transport can deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    Start,
    AnswerSelected(String),
    Stop,
    HelpRequested,
}

/// What the transport should show in response to an event.
///
/// `feedback` is the grading verdict for the question just answered; the
/// transport shows it in place of that question before sending `message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub feedback: Option<String>,
    pub message: Rendered,
}

impl From<Rendered> for Reply {
    fn from(message: Rendered) -> Self {
        Self {
            feedback: None,
            message,
        }
    }
}

/// Drives every conversation through start, grading and summary.
#[derive(Debug)]
pub struct QuizEngine<Repository> {
    repository: Repository,
    sessions: SessionStore,
}

impl<Repository: LoadQuestions> QuizEngine<Repository> {
    pub fn new(repository: Repository) -> Self {
        Self {
            repository,
            sessions: SessionStore::new(),
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn phase(&self, id: ConversationId) -> QuizPhase {
        match self.sessions.get(id) {
            Some(session) if session.is_active() => QuizPhase::AwaitingAnswer,
            Some(session) if session.is_complete() => QuizPhase::Finished,
            _ => QuizPhase::Idle,
        }
    }

    /// Dispatch table: one engine operation per event kind. Errors become
    /// user-visible notices here so the transport only ever sees a reply.
    pub fn handle(&self, id: ConversationId, event: QuizEvent) -> Reply {
        let result = match event {
            QuizEvent::Start => self.start(id),
            QuizEvent::AnswerSelected(choice) => self.submit(id, &choice),
            QuizEvent::Stop => Ok(self.stop(id).into()),
            QuizEvent::HelpRequested => Ok(self.help().into()),
        };

        result.unwrap_or_else(|e| {
            match &e {
                QuizError::UnexpectedInput => {
                    warn!("chat {}: answer outside of a running quiz", id);
                    Rendered::text(presentation::UNEXPECTED_INPUT).into()
                }
                _ => {
                    error!("chat {}: {}", id, e);
                    Rendered::text(presentation::DATA_FAILURE).into()
                }
            }
        })
    }

    /// Loads a fresh question snapshot and (re)starts the conversation at
    /// the first question, whatever state it was in before.
    #[instrument(level = "info", skip(self))]
    pub fn start(&self, id: ConversationId) -> Result<Reply> {
        let questions = match self.repository.load() {
            Ok(questions) => questions,
            Err(e) => {
                self.sessions.discard(id);
                return Err(e);
            }
        };

        let session = self.sessions.create_or_reset(id, questions);
        info!("chat {}: quiz started with {} questions", id, session.total());

        match session.current_question() {
            Some(question) => {
                Ok(presentation::render_question(question, 0, session.total()).into())
            }
            None => {
                self.sessions.deactivate(id);
                info!("chat {}: quiz finished immediately, no questions", id);
                Ok(presentation::render_summary(0, 0).into())
            }
        }
    }

    /// Grades `choice` against the awaited question and advances.
    #[instrument(level = "info", skip(self))]
    pub fn submit(&self, id: ConversationId, choice: &str) -> Result<Reply> {
        let graded = self.sessions.update(id, |session| {
            if !session.is_active() {
                return None;
            }
            let question = session.current_question()?.clone();
            let correct = session.grade(choice)?;
            let next = match session.current_question() {
                Some(next) => {
                    presentation::render_question(next, session.current_index(), session.total())
                }
                None => {
                    session.deactivate();
                    presentation::render_summary(session.score(), session.total())
                }
            };
            Some((question, correct, next, session.score(), session.total()))
        });

        let Some((question, correct, message, score, total)) = graded.flatten() else {
            return Err(QuizError::UnexpectedInput);
        };

        info!(
            "chat {}: answered '{}' to '{}', correct: {}",
            id,
            choice,
            question.prompt_primary(),
            correct
        );
        if message.choices.is_empty() {
            info!("chat {}: quiz finished with {}/{}", id, score, total);
        }

        Ok(Reply {
            feedback: Some(presentation::render_outcome(
                correct,
                question.correct_answer(),
                question.correct_answer_localized(),
            )),
            message,
        })
    }

    /// Ends the conversation's quiz; later answers are unexpected input.
    #[instrument(level = "info", skip(self))]
    pub fn stop(&self, id: ConversationId) -> Rendered {
        if self.sessions.discard(id).is_some() {
            info!("chat {}: quiz stopped", id);
        }
        Rendered::text(presentation::STOPPED)
    }

    pub fn help(&self) -> Rendered {
        presentation::render_help(&COMMAND_TABLE)
    }
}
