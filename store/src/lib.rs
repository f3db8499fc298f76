//! Persistence and business rules for the raddit forum.
//!
//! Everything lives in two serialized collections — threads and comments —
//! stored as JSON text under fixed keys in a [`StorageBackend`]. There is no
//! atomicity across the two keys: operations read-modify-write them in
//! sequence, which is acceptable for the single-process, single-user design
//! target.

pub mod auth;
pub mod backend;
pub mod comments;
pub mod error;
pub mod threads;
pub mod tree;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use error::{Result, StoreError};
pub use threads::ThreadDetail;

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Storage key for the serialized thread collection.
pub const THREADS_KEY: &str = "forum_threads";
/// Storage key for the serialized comment collection.
pub const COMMENTS_KEY: &str = "forum_comments";
/// Storage key for the registered account record.
pub const USER_KEY: &str = "forum_user";

/// Handle to the forum state behind an injected storage backend.
pub struct Forum {
    backend: Box<dyn StorageBackend>,
}

impl Forum {
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    pub(crate) fn backend(&self) -> &dyn StorageBackend {
        self.backend.as_ref()
    }
}

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Millisecond timestamp used as a record identifier, bumped past the last
/// issued id so two records minted in the same millisecond still get
/// distinct ids.
pub(crate) fn fresh_id() -> i64 {
    let now = Utc::now().timestamp_millis();
    loop {
        let last = LAST_ID.load(Ordering::SeqCst);
        let next = (last + 1).max(now);
        if LAST_ID
            .compare_exchange(last, next, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            return next;
        }
    }
}

/// Current time as an RFC 3339 string, the format stored in `created_at`.
pub(crate) fn now() -> String {
    Utc::now().to_rfc3339()
}
