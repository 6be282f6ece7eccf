//! The storage abstraction shared by all entity kinds.

use insight_core::error::Result;
use insight_core::types::{ChatSession, NewChatSession, NewQuery, NewUser, Query, User};

/// Create/get/delete capabilities for users, chat sessions and queries.
///
/// Lookups signal absence with `Ok(None)`; an `Err` always means an internal
/// store fault. List operations return records in insertion order.
pub trait Storage: Send + Sync {
    // Users

    fn create_user(&self, input: NewUser) -> Result<User>;

    fn get_user(&self, id: u64) -> Result<Option<User>>;

    /// Usernames are not unique; the earliest created match wins.
    fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;

    // Chat sessions

    fn create_chat_session(&self, input: NewChatSession) -> Result<ChatSession>;

    fn get_chat_session(&self, id: u64) -> Result<Option<ChatSession>>;

    fn get_chat_sessions_by_user_id(&self, user_id: u64) -> Result<Vec<ChatSession>>;

    /// Remove a session and every query that references it.
    ///
    /// Deleting an unknown id is a no-op.
    fn delete_chat_session(&self, id: u64) -> Result<()>;

    // Queries

    fn create_query(&self, input: NewQuery) -> Result<Query>;

    fn get_queries_by_session_id(&self, session_id: u64) -> Result<Vec<Query>>;

    fn get_all_queries(&self) -> Result<Vec<Query>>;

    /// Remove every query, returning how many were dropped. Users and
    /// sessions are untouched and ids are not recycled.
    fn clear_all_queries(&self) -> Result<usize>;

    /// The full query set for export. Same contents as [`get_all_queries`].
    ///
    /// [`get_all_queries`]: Storage::get_all_queries
    fn export_queries(&self) -> Result<Vec<Query>> {
        self.get_all_queries()
    }

    // Stats

    fn query_count(&self) -> Result<usize>;

    fn session_count(&self) -> Result<usize>;
}
