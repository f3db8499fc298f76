//! Pure operations over the nested comment/reply tree.
//!
//! Each function takes the full ordered sequence of top-level comments for a
//! thread and returns a new tree, leaving every node it does not touch
//! unchanged. A target id that does not exist anywhere in the tree is a
//! tolerated no-op: the input tree comes back as-is. Every function visits
//! each node at most once, so all of them are linear in tree size.

use raddit_shared::{Comment, User};

use crate::{fresh_id, now};

/// Replace the node with id `target_id` by `update(node)`, rebuilding the
/// ancestors around the updated reply list and leaving all other nodes
/// unchanged.
pub fn find_and_replace<F>(tree: Vec<Comment>, target_id: i64, update: F) -> Vec<Comment>
where
    F: Fn(Comment) -> Comment,
{
    replace_in(tree, target_id, &update)
}

fn replace_in<F>(tree: Vec<Comment>, target_id: i64, update: &F) -> Vec<Comment>
where
    F: Fn(Comment) -> Comment,
{
    tree.into_iter()
        .map(|mut comment| {
            if comment.id == target_id {
                update(comment)
            } else {
                if !comment.replies.is_empty() {
                    let replies = std::mem::take(&mut comment.replies);
                    comment.replies = replace_in(replies, target_id, update);
                }
                comment
            }
        })
        .collect()
}

/// Append a freshly constructed reply to the reply list of the comment with
/// id `parent_id`. The reply inherits the located parent's thread id, so the
/// thread invariant holds for the whole subtree by construction.
pub fn append_reply(tree: Vec<Comment>, parent_id: i64, content: &str, creator: &User) -> Vec<Comment> {
    tree.into_iter()
        .map(|mut comment| {
            if comment.id == parent_id {
                comment.replies.push(Comment {
                    id: fresh_id(),
                    thread: comment.thread,
                    content: content.to_string(),
                    creator: creator.clone(),
                    created_at: now(),
                    is_answer: false,
                    parent_comment_id: Some(parent_id),
                    replies: Vec::new(),
                });
                comment
            } else {
                if !comment.replies.is_empty() {
                    let replies = std::mem::take(&mut comment.replies);
                    comment.replies = append_reply(replies, parent_id, content, creator);
                }
                comment
            }
        })
        .collect()
}

/// Mark the comment with id `target_id` as the answer, clearing the flag on
/// all *top-level* siblings (nested flags are left alone), then reorder the
/// top-level sequence so answers sort first. The sort is stable and only
/// distinguishes answer from non-answer, so relative order is otherwise
/// preserved. An absent target id leaves the tree unchanged.
pub fn toggle_answer(tree: Vec<Comment>, target_id: i64) -> Vec<Comment> {
    if !contains(&tree, target_id) {
        return tree;
    }

    let cleared: Vec<Comment> = tree
        .into_iter()
        .map(|mut comment| {
            if comment.id != target_id {
                comment.is_answer = false;
            }
            comment
        })
        .collect();
    let mut tree = find_and_replace(cleared, target_id, |mut c| {
        c.is_answer = true;
        c
    });

    tree.sort_by_key(|c| !c.is_answer);
    tree
}

/// Find a comment by id anywhere in the tree.
pub fn find(tree: &[Comment], id: i64) -> Option<&Comment> {
    for comment in tree {
        if comment.id == id {
            return Some(comment);
        }
        if let Some(found) = find(&comment.replies, id) {
            return Some(found);
        }
    }
    None
}

/// Whether a comment with `id` exists anywhere in the tree.
pub fn contains(tree: &[Comment], id: i64) -> bool {
    find(tree, id).is_some()
}

/// Total number of nodes in the tree, replies included.
pub fn count(tree: &[Comment]) -> usize {
    tree.iter().map(|c| 1 + count(&c.replies)).sum()
}
