//! Thread-level commands and rendering.

use anyhow::bail;
use chrono::{DateTime, Utc};
use colored::Colorize;
use raddit_shared::{Thread, ThreadCategory};
use raddit_store::Forum;

use crate::cli::{CreateArgs, ShowArgs, ThreadIdArgs, ThreadsArgs};
use crate::comments;

pub fn cmd_threads(forum: &Forum, args: ThreadsArgs) -> anyhow::Result<()> {
    let threads = match args.search {
        Some(query) => forum.search_threads(&query)?,
        None => forum.list_threads()?,
    };

    if threads.is_empty() {
        println!("No threads yet.");
        return Ok(());
    }
    for thread in &threads {
        print_thread_card(thread);
    }
    Ok(())
}

pub fn cmd_create(forum: &Forum, args: CreateArgs) -> anyhow::Result<()> {
    let category = parse_category(&args.category)?;
    let thread = forum.create_thread(raddit_shared::CreateThread {
        title: args.title,
        category,
        description: args.description,
        tags: args.tags,
    })?;
    println!(
        "{} Created thread {} ({})",
        "✓".green().bold(),
        thread.title.bold(),
        thread.id.to_string().yellow()
    );
    Ok(())
}

pub fn cmd_show(forum: &Forum, args: ShowArgs) -> anyhow::Result<()> {
    let detail = forum.thread_detail(args.thread_id)?;
    let thread = &detail.thread;

    println!("{}  {}", category_label(thread.category), thread.title.bold());
    println!(
        "  u/{} • {} • {} comments",
        thread.creator.username,
        time_ago(&thread.created_at),
        thread.comment_count
    );
    if !thread.tags.is_empty() {
        let names: Vec<&str> = thread.tags.iter().map(|t| t.name.as_str()).collect();
        println!("  tags: {}", names.join(", ").cyan());
    }
    println!("\n{}\n", thread.description);
    if thread.locked {
        println!(
            "{}",
            "This thread is locked. No further interactions are allowed.".red()
        );
    }

    if detail.comments.is_empty() {
        println!("{}", "No comments yet.".dimmed());
    } else {
        for comment in &detail.comments {
            comments::print_comment(comment, 0, !args.uncensored);
        }
    }
    Ok(())
}

pub fn cmd_lock(forum: &Forum, args: ThreadIdArgs, lock: bool) -> anyhow::Result<()> {
    if lock {
        forum.lock_thread(args.thread_id)?;
        println!("{} Thread {} locked", "✓".green(), args.thread_id.to_string().yellow());
    } else {
        forum.unlock_thread(args.thread_id)?;
        println!("{} Thread {} unlocked", "✓".green(), args.thread_id.to_string().yellow());
    }
    Ok(())
}

pub fn cmd_delete(forum: &Forum, args: ThreadIdArgs) -> anyhow::Result<()> {
    forum.delete_thread(args.thread_id)?;
    println!(
        "{} Thread {} and its comments deleted",
        "✓".green(),
        args.thread_id.to_string().yellow()
    );
    Ok(())
}

fn print_thread_card(thread: &Thread) {
    let lock = if thread.locked { " 🔒" } else { "" };
    println!(
        "{}  {}{}  {}",
        category_label(thread.category),
        thread.title.bold(),
        lock,
        thread.id.to_string().dimmed()
    );
    println!(
        "  u/{} • {} • {} comments",
        thread.creator.username,
        time_ago(&thread.created_at),
        thread.comment_count
    );
}

fn category_label(category: ThreadCategory) -> colored::ColoredString {
    match category {
        ThreadCategory::Qna => "r/QNA".magenta().bold(),
        ThreadCategory::Thread => "r/THREAD".green().bold(),
    }
}

fn parse_category(raw: &str) -> anyhow::Result<ThreadCategory> {
    match raw.to_uppercase().as_str() {
        "THREAD" => Ok(ThreadCategory::Thread),
        "QNA" => Ok(ThreadCategory::Qna),
        other => bail!("unknown category {other:?}, expected THREAD or QNA"),
    }
}

/// Rough "3 minutes ago" rendering of an RFC 3339 timestamp.
pub fn time_ago(created_at: &str) -> String {
    match DateTime::parse_from_rfc3339(created_at) {
        Ok(then) => humanize_secs((Utc::now() - then.with_timezone(&Utc)).num_seconds()),
        Err(_) => created_at.to_string(),
    }
}

fn humanize_secs(secs: i64) -> String {
    match secs {
        i64::MIN..=59 => "just now".to_string(),
        60..=3599 => format!("{} minutes ago", secs / 60),
        3600..=86_399 => format!("{} hours ago", secs / 3600),
        _ => format!("{} days ago", secs / 86_400),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanize_buckets() {
        assert_eq!(humanize_secs(5), "just now");
        assert_eq!(humanize_secs(61), "1 minutes ago");
        assert_eq!(humanize_secs(7200), "2 hours ago");
        assert_eq!(humanize_secs(200_000), "2 days ago");
    }

    #[test]
    fn parse_category_accepts_both_cases() {
        assert_eq!(parse_category("qna").unwrap(), ThreadCategory::Qna);
        assert_eq!(parse_category("THREAD").unwrap(), ThreadCategory::Thread);
        assert!(parse_category("nope").is_err());
    }
}
