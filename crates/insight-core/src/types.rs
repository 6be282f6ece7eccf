use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User id assumed when a session is created without an owner.
pub const DEFAULT_USER_ID: u64 = 1;

/// Session id assumed when a query is submitted without one.
pub const DEFAULT_SESSION_ID: u64 = 1;

// =============================================================================
// User
// =============================================================================

/// A registered user. Never mutated once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    /// Credential as supplied at creation. Never written to outbound payloads.
    #[serde(skip_serializing, default)]
    pub password: String,
}

/// Input for creating a [`User`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

// =============================================================================
// ChatSession
// =============================================================================

/// A logical grouping of queries under one nominal user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub id: u64,
    pub user_id: u64,
    pub title: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a [`ChatSession`]. Omitted fields take the store defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewChatSession {
    pub user_id: Option<u64>,
    pub title: Option<String>,
}

// =============================================================================
// Query
// =============================================================================

/// A submitted question with its synthesized answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    pub id: u64,
    pub session_id: u64,
    pub query: String,
    pub response: Option<String>,
    pub is_voice_input: bool,
    /// Source identifiers in the order the caller selected them.
    pub data_sources: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a [`Query`]. Omitted fields take the store defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewQuery {
    pub session_id: Option<u64>,
    pub query: String,
    pub response: Option<String>,
    pub is_voice_input: Option<bool>,
    pub data_sources: Vec<String>,
}

// =============================================================================
// Export
// =============================================================================

/// The projection of a [`Query`] written to history exports.
///
/// `sessionId` and `dataSources` are not part of the export format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedQuery {
    pub id: u64,
    pub query: String,
    pub response: Option<String>,
    pub is_voice_input: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Query> for ExportedQuery {
    fn from(q: &Query) -> Self {
        Self {
            id: q.id,
            query: q.query.clone(),
            response: q.response.clone(),
            is_voice_input: q.is_voice_input,
            created_at: q.created_at,
        }
    }
}

/// Wrapper returned by the history export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportEnvelope {
    pub export_date: DateTime<Utc>,
    pub total_queries: usize,
    pub queries: Vec<ExportedQuery>,
}

impl ExportEnvelope {
    /// Build an envelope stamped with `export_date` from the given queries.
    pub fn new(export_date: DateTime<Utc>, queries: &[Query]) -> Self {
        Self {
            export_date,
            total_queries: queries.len(),
            queries: queries.iter().map(ExportedQuery::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_query(id: u64) -> Query {
        Query {
            id,
            session_id: 3,
            query: "What is the SLA?".to_string(),
            response: Some("answer".to_string()),
            is_voice_input: true,
            data_sources: vec!["jira".to_string(), "confluence".to_string()],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_query_serializes_camel_case() {
        let json = serde_json::to_value(make_query(7)).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["sessionId"], 3);
        assert_eq!(json["isVoiceInput"], true);
        assert_eq!(json["dataSources"][1], "confluence");
        assert!(json["createdAt"].is_string());
        assert!(json.get("session_id").is_none());
    }

    #[test]
    fn test_null_response_serializes_as_null() {
        let mut q = make_query(1);
        q.response = None;
        let json = serde_json::to_value(q).unwrap();
        assert!(json["response"].is_null());
    }

    #[test]
    fn test_user_password_never_serialized() {
        let user = User {
            id: 1,
            username: "demo".to_string(),
            password: "hunter2".to_string(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("demo"));
        assert!(!json.contains("hunter2"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn test_session_title_nullable() {
        let session = ChatSession {
            id: 2,
            user_id: 1,
            title: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(session).unwrap();
        assert!(json["title"].is_null());
        assert_eq!(json["userId"], 1);
        assert!(json["updatedAt"].is_string());
    }

    #[test]
    fn test_export_projection_drops_session_and_sources() {
        let json = serde_json::to_value(ExportedQuery::from(&make_query(4))).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 5);
        for key in ["id", "query", "response", "isVoiceInput", "createdAt"] {
            assert!(obj.contains_key(key), "missing {}", key);
        }
        assert!(!obj.contains_key("sessionId"));
        assert!(!obj.contains_key("dataSources"));
    }

    #[test]
    fn test_export_envelope_counts_queries() {
        let queries = vec![make_query(1), make_query(2), make_query(3)];
        let envelope = ExportEnvelope::new(Utc::now(), &queries);
        assert_eq!(envelope.total_queries, 3);
        assert_eq!(envelope.queries.len(), 3);
        assert_eq!(envelope.queries[2].id, 3);

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["totalQueries"], 3);
        assert!(json["exportDate"].is_string());
    }

    #[test]
    fn test_export_envelope_empty() {
        let envelope = ExportEnvelope::new(Utc::now(), &[]);
        assert_eq!(envelope.total_queries, 0);
        assert!(envelope.queries.is_empty());
    }
}
