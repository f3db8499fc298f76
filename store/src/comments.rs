//! Comment operations: posting, replying, editing, and QNA answer marking.
//!
//! The stored collection is the flat list of top-level comments across all
//! threads; replies live nested inside their parent. Comment ids are unique
//! across the whole store, so the tree operations can run over the full
//! collection.

use raddit_shared::{Comment, Thread};
use tracing::{debug, info};

use crate::error::{Result, StoreError};
use crate::{fresh_id, now, tree, Forum, COMMENTS_KEY};

impl Forum {
    /// Load the full comment collection. A missing key is an empty
    /// collection.
    pub fn load_comments(&self) -> Result<Vec<Comment>> {
        let comments: Vec<Comment> = match self.backend().get(COMMENTS_KEY)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };
        debug!(count = comments.len(), "loaded comments");
        Ok(comments)
    }

    /// Replace the whole stored comment collection.
    pub fn save_comments(&self, comments: &[Comment]) -> Result<()> {
        let raw = serde_json::to_string(comments)?;
        self.backend().set(COMMENTS_KEY, &raw)
    }

    /// Top-level comments belonging to one thread, in stored order.
    pub fn comments_for_thread(&self, thread_id: i64) -> Result<Vec<Comment>> {
        Ok(self
            .load_comments()?
            .into_iter()
            .filter(|c| c.thread == thread_id)
            .collect())
    }

    /// Post a top-level comment on a thread.
    pub fn add_comment(&self, thread_id: i64, content: &str) -> Result<Comment> {
        let creator = self.current_user()?.ok_or(StoreError::NotLoggedIn)?;
        let content = ammonia::clean(content).trim().to_string();
        if content.is_empty() {
            return Err(StoreError::EmptyField { field: "comment" });
        }
        self.writable_thread(thread_id)?;

        let comment = Comment {
            id: fresh_id(),
            thread: thread_id,
            content,
            creator,
            created_at: now(),
            is_answer: false,
            parent_comment_id: None,
            replies: Vec::new(),
        };

        let mut comments = self.load_comments()?;
        comments.push(comment.clone());
        self.save_comments(&comments)?;
        info!(id = comment.id, thread_id, "comment added");
        Ok(comment)
    }

    /// Reply to an existing comment anywhere in the thread's reply tree.
    pub fn add_reply(&self, thread_id: i64, parent_id: i64, content: &str) -> Result<Comment> {
        let creator = self.current_user()?.ok_or(StoreError::NotLoggedIn)?;
        let content = ammonia::clean(content).trim().to_string();
        if content.is_empty() {
            return Err(StoreError::EmptyField { field: "reply" });
        }
        self.writable_thread(thread_id)?;

        let comments = self.load_comments()?;
        match tree::find(&comments, parent_id) {
            Some(parent) if parent.thread == thread_id => {}
            _ => return Err(StoreError::CommentNotFound { id: parent_id }),
        }

        let updated = tree::append_reply(comments, parent_id, &content, &creator);
        let reply = tree::find(&updated, parent_id)
            .and_then(|parent| parent.replies.last())
            .cloned()
            .ok_or(StoreError::CommentNotFound { id: parent_id })?;
        self.save_comments(&updated)?;
        info!(id = reply.id, parent_id, thread_id, "reply added");
        Ok(reply)
    }

    /// Replace a comment anywhere in the stored forest by its id.
    pub fn update_comment(&self, comment: Comment) -> Result<()> {
        let comments = self.load_comments()?;
        if !tree::contains(&comments, comment.id) {
            return Err(StoreError::CommentNotFound { id: comment.id });
        }
        let id = comment.id;
        let updated = tree::find_and_replace(comments, id, |_| comment.clone());
        self.save_comments(&updated)?;
        debug!(id, "comment updated");
        Ok(())
    }

    /// Mark a comment as the answer of a QNA thread. Clears the flag on the
    /// thread's other top-level comments and moves the answer first; also
    /// records the answer on the thread record itself.
    pub fn mark_answer(&self, thread_id: i64, comment_id: i64) -> Result<()> {
        let mut threads = self.load_threads()?;
        let thread = threads
            .iter_mut()
            .find(|t| t.id == thread_id)
            .ok_or(StoreError::ThreadNotFound { id: thread_id })?;
        if thread.category != raddit_shared::ThreadCategory::Qna {
            return Err(StoreError::NotQna { id: thread_id });
        }

        let (thread_comments, mut others): (Vec<Comment>, Vec<Comment>) = self
            .load_comments()?
            .into_iter()
            .partition(|c| c.thread == thread_id);
        if !tree::contains(&thread_comments, comment_id) {
            return Err(StoreError::CommentNotFound { id: comment_id });
        }

        let toggled = tree::toggle_answer(thread_comments, comment_id);
        others.extend(toggled);

        thread.answered = true;
        thread.answer_comment_id = Some(comment_id);

        self.save_threads(&threads)?;
        self.save_comments(&others)?;
        info!(thread_id, comment_id, "answer marked");
        Ok(())
    }

    /// The thread must exist and accept new posts.
    fn writable_thread(&self, id: i64) -> Result<Thread> {
        let thread = self
            .load_threads()?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or(StoreError::ThreadNotFound { id })?;
        if thread.locked {
            return Err(StoreError::ThreadLocked { id });
        }
        Ok(thread)
    }
}
