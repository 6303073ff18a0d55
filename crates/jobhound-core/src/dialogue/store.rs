//! In-memory session store, one session at most per chat.
//!
//! The store is the only shared mutable state in the system. Per-key
//! atomicity comes from the DashMap shard locks; callers never hold a guard
//! across an await point -- long operations snapshot the session, do their
//! I/O, then come back with `update` or `end`.

use dashmap::DashMap;

use jobhound_types::event::ChatId;
use jobhound_types::session::Session;

/// Process-wide map of chat id to live session. No persistence, no expiry:
/// a session lives until searched, cancelled, or superseded.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<ChatId, Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Create a fresh session for `chat`, discarding any existing one.
    ///
    /// Restart semantics: a new search always supersedes a stale one, and
    /// the insert is atomic so a concurrent reader sees either the old
    /// session or the new one, never a torn state.
    pub fn start(&self, chat: ChatId) {
        self.sessions.insert(chat, Session::new());
        tracing::debug!(chat, live_sessions = self.sessions.len(), "session started");
    }

    /// Clone of the current session, if one exists.
    pub fn snapshot(&self, chat: ChatId) -> Option<Session> {
        self.sessions.get(&chat).map(|s| s.clone())
    }

    /// Run `f` against the live session under the shard lock.
    ///
    /// Returns `None` when no session exists; the closure must not block.
    pub fn update<R>(&self, chat: ChatId, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        self.sessions.get_mut(&chat).map(|mut s| f(&mut s))
    }

    /// Remove the session. Returns whether one existed.
    pub fn end(&self, chat: ChatId) -> bool {
        self.sessions.remove(&chat).is_some()
    }

    /// Whether `chat` is currently mid-flow.
    pub fn contains(&self, chat: ChatId) -> bool {
        self.sessions.contains_key(&chat)
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
