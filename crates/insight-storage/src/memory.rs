//! In-memory [`Storage`] implementation.
//!
//! Each entity kind lives in its own mutex-guarded table. Operations that
//! touch two tables (the session delete cascade) always lock sessions before
//! queries.

use std::sync::Mutex;

use chrono::Utc;
use tracing::debug;

use insight_core::error::Result;
use insight_core::types::{
    ChatSession, NewChatSession, NewQuery, NewUser, Query, User, DEFAULT_SESSION_ID,
    DEFAULT_USER_ID,
};

use crate::storage::Storage;
use crate::table::{lock, Table};

/// Process-lifetime record store.
///
/// Construct one per server (or per test) and share it behind an `Arc`.
#[derive(Debug)]
pub struct MemStorage {
    users: Mutex<Table<User>>,
    sessions: Mutex<Table<ChatSession>>,
    queries: Mutex<Table<Query>>,
}

impl MemStorage {
    /// Create an empty store. All id counters start at 1.
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Table::new()),
            sessions: Mutex::new(Table::new()),
            queries: Mutex::new(Table::new()),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemStorage {
    fn create_user(&self, input: NewUser) -> Result<User> {
        let mut users = lock(&self.users, "users")?;
        let user = users.insert_with(|id| User {
            id,
            username: input.username,
            password: input.password,
        });
        Ok(user.clone())
    }

    fn get_user(&self, id: u64) -> Result<Option<User>> {
        let users = lock(&self.users, "users")?;
        Ok(users.get(id).cloned())
    }

    fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let users = lock(&self.users, "users")?;
        let found = users.values().find(|u| u.username == username).cloned();
        Ok(found)
    }

    fn create_chat_session(&self, input: NewChatSession) -> Result<ChatSession> {
        let now = Utc::now();
        let mut sessions = lock(&self.sessions, "sessions")?;
        let session = sessions.insert_with(|id| ChatSession {
            id,
            user_id: input.user_id.filter(|&owner| owner != 0).unwrap_or(DEFAULT_USER_ID),
            title: input.title.filter(|t| !t.is_empty()),
            created_at: now,
            updated_at: now,
        });
        Ok(session.clone())
    }

    fn get_chat_session(&self, id: u64) -> Result<Option<ChatSession>> {
        let sessions = lock(&self.sessions, "sessions")?;
        Ok(sessions.get(id).cloned())
    }

    fn get_chat_sessions_by_user_id(&self, user_id: u64) -> Result<Vec<ChatSession>> {
        let sessions = lock(&self.sessions, "sessions")?;
        Ok(sessions
            .values()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect())
    }

    fn delete_chat_session(&self, id: u64) -> Result<()> {
        let mut sessions = lock(&self.sessions, "sessions")?;
        let mut queries = lock(&self.queries, "queries")?;
        let existed = sessions.remove(id).is_some();
        let orphans = queries.remove_where(|q| q.session_id == id);
        debug!(session_id = id, existed, orphans, "Chat session deleted");
        Ok(())
    }

    fn create_query(&self, input: NewQuery) -> Result<Query> {
        let now = Utc::now();
        let mut queries = lock(&self.queries, "queries")?;
        let query = queries.insert_with(|id| Query {
            id,
            session_id: input
                .session_id
                .filter(|&session| session != 0)
                .unwrap_or(DEFAULT_SESSION_ID),
            query: input.query,
            response: input.response.filter(|r| !r.is_empty()),
            is_voice_input: input.is_voice_input.unwrap_or(false),
            data_sources: input.data_sources,
            created_at: now,
        });
        Ok(query.clone())
    }

    fn get_queries_by_session_id(&self, session_id: u64) -> Result<Vec<Query>> {
        let queries = lock(&self.queries, "queries")?;
        Ok(queries
            .values()
            .filter(|q| q.session_id == session_id)
            .cloned()
            .collect())
    }

    fn get_all_queries(&self) -> Result<Vec<Query>> {
        let queries = lock(&self.queries, "queries")?;
        Ok(queries.values().cloned().collect())
    }

    fn clear_all_queries(&self) -> Result<usize> {
        let mut queries = lock(&self.queries, "queries")?;
        Ok(queries.clear())
    }

    fn query_count(&self) -> Result<usize> {
        Ok(lock(&self.queries, "queries")?.len())
    }

    fn session_count(&self) -> Result<usize> {
        Ok(lock(&self.sessions, "sessions")?.len())
    }
}
