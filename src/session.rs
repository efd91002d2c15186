use std::{
    collections::HashMap,
    fmt,
    sync::{Mutex, MutexGuard, PoisonError},
};

use crate::question::Question;

/// Opaque key of one chat, supplied by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConversationId(pub i64);

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Progress of one conversation through its question snapshot.
///
/// `score <= current_index <= questions.len()` holds for every value the
/// store hands out.
#[derive(Debug, Clone)]
pub struct Session {
    questions: Vec<Question>,
    current_index: usize,
    score: usize,
    active: bool,
}

impl Session {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current_index: 0,
            score: 0,
            active: true,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_complete(&self) -> bool {
        self.current_index == self.questions.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    /// Grades `choice` against the current question and moves past it,
    /// whether or not it was right. Returns `None` once every question
    /// has been answered.
    pub(crate) fn grade(&mut self, choice: &str) -> Option<bool> {
        let correct = self.current_question()?.is_correct(choice);
        if correct {
            self.score += 1;
        }
        self.current_index += 1;
        Some(correct)
    }

    pub(crate) fn deactivate(&mut self) {
        self.active = false;
    }
}

/// All sessions of the process, one per conversation.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<ConversationId, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<ConversationId, Session>> {
        // No mutation can panic halfway, so a poisoned map is still consistent.
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces whatever the conversation had with a fresh, active session.
    pub fn create_or_reset(&self, id: ConversationId, questions: Vec<Question>) -> Session {
        let session = Session::new(questions);
        self.lock().insert(id, session.clone());
        session
    }

    pub fn get(&self, id: ConversationId) -> Option<Session> {
        self.lock().get(&id).cloned()
    }

    pub fn deactivate(&self, id: ConversationId) {
        if let Some(session) = self.lock().get_mut(&id) {
            session.deactivate();
        }
    }

    /// Drops the conversation's session entirely.
    pub fn discard(&self, id: ConversationId) -> Option<Session> {
        self.lock().remove(&id)
    }

    /// Runs `f` against the conversation's session while holding the lock.
    pub(crate) fn update<T>(
        &self,
        id: ConversationId,
        f: impl FnOnce(&mut Session) -> T,
    ) -> Option<T> {
        self.lock().get_mut(&id).map(f)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
