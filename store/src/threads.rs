//! Thread operations: listing, searching, creation, locking, deletion.

use raddit_shared::{Comment, CreateThread, Tag, Thread};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Result, StoreError};
use crate::{fresh_id, now, Forum, THREADS_KEY};

/// A thread together with its top-level comments.
#[derive(Debug, Clone, Serialize)]
pub struct ThreadDetail {
    pub thread: Thread,
    pub comments: Vec<Comment>,
}

impl Forum {
    /// Load the full thread collection. A missing key is an empty
    /// collection. `comment_count` is recomputed from the comment
    /// collection on every load, and `locked` defaults to unlocked.
    pub fn load_threads(&self) -> Result<Vec<Thread>> {
        let mut threads: Vec<Thread> = match self.backend().get(THREADS_KEY)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };

        let comments = self.load_comments()?;
        for thread in &mut threads {
            thread.comment_count = comments.iter().filter(|c| c.thread == thread.id).count() as i64;
        }
        debug!(count = threads.len(), "loaded threads");
        Ok(threads)
    }

    /// Replace the whole stored thread collection.
    pub fn save_threads(&self, threads: &[Thread]) -> Result<()> {
        let raw = serde_json::to_string(threads)?;
        self.backend().set(THREADS_KEY, &raw)
    }

    /// All threads, newest first.
    pub fn list_threads(&self) -> Result<Vec<Thread>> {
        let mut threads = self.load_threads()?;
        threads.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(threads)
    }

    /// Threads whose title, description, or tag names contain `query`,
    /// case-insensitively. Newest first.
    pub fn search_threads(&self, query: &str) -> Result<Vec<Thread>> {
        let query = query.to_lowercase();
        let mut threads: Vec<Thread> = self
            .load_threads()?
            .into_iter()
            .filter(|thread| {
                thread.title.to_lowercase().contains(&query)
                    || thread.description.to_lowercase().contains(&query)
                    || thread
                        .tags
                        .iter()
                        .any(|tag| tag.name.to_lowercase().contains(&query))
            })
            .collect();
        threads.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(threads)
    }

    /// Create a thread for the logged-in user. Title and description must
    /// be non-empty after trimming; nothing is written on failure.
    pub fn create_thread(&self, payload: CreateThread) -> Result<Thread> {
        let creator = self.current_user()?.ok_or(StoreError::NotLoggedIn)?;

        let title = ammonia::clean(&payload.title).trim().to_string();
        let description = ammonia::clean(&payload.description).trim().to_string();
        if title.is_empty() {
            return Err(StoreError::EmptyField { field: "title" });
        }
        if description.is_empty() {
            return Err(StoreError::EmptyField { field: "description" });
        }

        let id = fresh_id();
        let tags = payload
            .tags
            .iter()
            .map(|name| ammonia::clean(name).trim().to_string())
            .filter(|name| !name.is_empty())
            .enumerate()
            .map(|(i, name)| Tag {
                id: id + 1 + i as i64,
                name,
            })
            .collect();

        let thread = Thread {
            id,
            title,
            category: payload.category,
            created_at: now(),
            description,
            creator,
            comment_count: 0,
            locked: false,
            tags,
            answered: false,
            answer_comment_id: None,
        };

        let mut threads = self.load_threads()?;
        threads.push(thread.clone());
        self.save_threads(&threads)?;
        info!(id = thread.id, "thread created");
        Ok(thread)
    }

    /// A thread plus its top-level comments.
    pub fn thread_detail(&self, id: i64) -> Result<ThreadDetail> {
        let thread = self
            .load_threads()?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or(StoreError::ThreadNotFound { id })?;
        let comments = self.comments_for_thread(id)?;
        Ok(ThreadDetail { thread, comments })
    }

    pub fn lock_thread(&self, id: i64) -> Result<()> {
        self.set_locked(id, true)
    }

    pub fn unlock_thread(&self, id: i64) -> Result<()> {
        self.set_locked(id, false)
    }

    fn set_locked(&self, id: i64, locked: bool) -> Result<()> {
        let mut threads = self.load_threads()?;
        let thread = threads
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::ThreadNotFound { id })?;
        thread.locked = locked;
        self.save_threads(&threads)?;
        info!(id, locked, "thread lock state changed");
        Ok(())
    }

    /// Delete a thread and, cascading, every comment that belongs to it.
    /// Comments of other threads are untouched.
    pub fn delete_thread(&self, id: i64) -> Result<()> {
        let threads = self.load_threads()?;
        if !threads.iter().any(|t| t.id == id) {
            return Err(StoreError::ThreadNotFound { id });
        }

        let remaining: Vec<Thread> = threads.into_iter().filter(|t| t.id != id).collect();
        self.save_threads(&remaining)?;

        let comments: Vec<Comment> = self
            .load_comments()?
            .into_iter()
            .filter(|c| c.thread != id)
            .collect();
        self.save_comments(&comments)?;
        info!(id, "thread deleted");
        Ok(())
    }
}
