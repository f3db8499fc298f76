//! Comment commands, tree rendering, and display-time censoring.

use colored::Colorize;
use raddit_shared::Comment;
use raddit_store::Forum;

use crate::cli::{AnswerArgs, CommentArgs, ReplyArgs};
use crate::forum::time_ago;

pub fn cmd_comment(forum: &Forum, args: CommentArgs) -> anyhow::Result<()> {
    let comment = forum.add_comment(args.thread_id, &args.content)?;
    println!(
        "{} Comment {} added",
        "✓".green(),
        comment.id.to_string().yellow()
    );
    Ok(())
}

pub fn cmd_reply(forum: &Forum, args: ReplyArgs) -> anyhow::Result<()> {
    let reply = forum.add_reply(args.thread_id, args.parent_id, &args.content)?;
    println!(
        "{} Reply {} added under {}",
        "✓".green(),
        reply.id.to_string().yellow(),
        args.parent_id.to_string().dimmed()
    );
    Ok(())
}

pub fn cmd_answer(forum: &Forum, args: AnswerArgs) -> anyhow::Result<()> {
    forum.mark_answer(args.thread_id, args.comment_id)?;
    println!(
        "{} Comment {} marked as answer",
        "✓".green().bold(),
        args.comment_id.to_string().yellow()
    );
    Ok(())
}

/// Render a comment and, indented, its reply subtree.
pub fn print_comment(comment: &Comment, depth: usize, censored: bool) {
    let indent = "  ".repeat(depth);
    let marker = if comment.is_answer {
        " ✓ answer".green().bold().to_string()
    } else {
        String::new()
    };
    println!(
        "{indent}u/{} • {} • {}{marker}",
        comment.creator.username,
        time_ago(&comment.created_at),
        comment.id.to_string().dimmed()
    );

    let content = if censored && requires_censorship(&comment.content) {
        censor_text(&comment.content)
    } else {
        comment.content.clone()
    };
    println!("{indent}{content}");

    for reply in &comment.replies {
        print_comment(reply, depth + 1, censored);
    }
}

// ── Censoring ──

const INAPPROPRIATE_WORDS: &[&str] = &["damn", "hell", "crap", "bastard", "idiot", "stupid"];

fn is_inappropriate(word: &str) -> bool {
    INAPPROPRIATE_WORDS.contains(&word.to_lowercase().as_str())
}

/// Mask inappropriate words with `****`, leaving everything else intact.
pub fn censor_text(text: &str) -> String {
    text.split(' ')
        .map(|word| if is_inappropriate(word) { "****" } else { word })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn requires_censorship(text: &str) -> bool {
    text.split(' ').any(is_inappropriate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn censors_whole_words_only() {
        assert_eq!(censor_text("what the hell happened"), "what the **** happened");
        // Substrings inside larger words are left alone.
        assert_eq!(censor_text("hello there"), "hello there");
    }

    #[test]
    fn censoring_is_case_insensitive() {
        assert!(requires_censorship("STUPID idea"));
        assert_eq!(censor_text("Damn right"), "**** right");
    }

    #[test]
    fn clean_text_needs_no_censoring() {
        assert!(!requires_censorship("a perfectly fine sentence"));
    }
}
