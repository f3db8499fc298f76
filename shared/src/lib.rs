use serde::{Deserialize, Serialize};

// ── Auth ──

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// The registered account record, also used as the login payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

// ── Threads ──

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ThreadCategory {
    #[default]
    Thread,
    Qna,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    /// Creation-time millisecond timestamp, unique per thread.
    pub id: i64,
    pub title: String,
    pub category: ThreadCategory,
    pub created_at: String,
    pub description: String,
    pub creator: User,
    /// Derived cache: number of top-level comments for this thread.
    /// Recomputed by the store on every load.
    pub comment_count: i64,
    #[serde(default)]
    pub locked: bool,
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub answered: bool,
    #[serde(default)]
    pub answer_comment_id: Option<i64>,
}

/// Payload for creating a thread. Tag ids are minted by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateThread {
    pub title: String,
    pub category: ThreadCategory,
    pub description: String,
    pub tags: Vec<String>,
}

// ── Comments ──

/// A comment on a thread. Replies are full comments themselves, so each
/// top-level comment is the root of a tree of unbounded depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    /// Id of the owning thread; equal for every node in a reply subtree.
    pub thread: i64,
    pub content: String,
    pub creator: User,
    pub created_at: String,
    #[serde(default)]
    pub is_answer: bool,
    #[serde(default)]
    pub parent_comment_id: Option<i64>,
    #[serde(default)]
    pub replies: Vec<Comment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&ThreadCategory::Qna).unwrap(),
            "\"QNA\""
        );
        assert_eq!(
            serde_json::from_str::<ThreadCategory>("\"THREAD\"").unwrap(),
            ThreadCategory::Thread
        );
    }

    #[test]
    fn missing_optional_thread_fields_default() {
        let json = r#"{
            "id": 1,
            "title": "t",
            "category": "THREAD",
            "created_at": "2024-01-01T00:00:00Z",
            "description": "d",
            "creator": { "username": "alice" },
            "comment_count": 0,
            "tags": []
        }"#;
        let thread: Thread = serde_json::from_str(json).unwrap();
        assert!(!thread.locked);
        assert!(!thread.answered);
        assert_eq!(thread.answer_comment_id, None);
    }

    #[test]
    fn missing_optional_comment_fields_default() {
        let json = r#"{
            "id": 2,
            "thread": 1,
            "content": "hello",
            "creator": { "username": "bob" },
            "created_at": "2024-01-01T00:00:00Z"
        }"#;
        let comment: Comment = serde_json::from_str(json).unwrap();
        assert!(!comment.is_answer);
        assert_eq!(comment.parent_comment_id, None);
        assert!(comment.replies.is_empty());
    }
}
