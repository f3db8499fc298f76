use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "raddit", about = "A local-first discussion forum", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List threads, newest first
    Threads(ThreadsArgs),
    /// Create a new thread
    Create(CreateArgs),
    /// Show a thread and its comment tree
    Show(ShowArgs),
    /// Lock a thread against further comments
    Lock(ThreadIdArgs),
    /// Unlock a thread
    Unlock(ThreadIdArgs),
    /// Delete a thread and all its comments
    Delete(ThreadIdArgs),
    /// Post a top-level comment on a thread
    Comment(CommentArgs),
    /// Reply to an existing comment
    Reply(ReplyArgs),
    /// Mark a comment as the answer (QNA threads only)
    Answer(AnswerArgs),
    /// Register an account (and log in)
    Register(CredentialsArgs),
    /// Log in with an existing account
    Login(CredentialsArgs),
    /// Log out
    Logout,
    /// Show the logged-in user
    Whoami,
}

#[derive(Args)]
pub struct ThreadsArgs {
    /// Filter by title, description, or tag name
    #[arg(short, long)]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct CreateArgs {
    #[arg(short, long)]
    pub title: String,
    #[arg(short, long)]
    pub description: String,
    /// THREAD or QNA
    #[arg(short, long, default_value = "THREAD")]
    pub category: String,
    /// Comma-separated tag names
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    pub thread_id: i64,
    /// Show inappropriate words unmasked
    #[arg(long)]
    pub uncensored: bool,
}

#[derive(Args)]
pub struct ThreadIdArgs {
    pub thread_id: i64,
}

#[derive(Args)]
pub struct CommentArgs {
    pub thread_id: i64,
    pub content: String,
}

#[derive(Args)]
pub struct ReplyArgs {
    pub thread_id: i64,
    pub parent_id: i64,
    pub content: String,
}

#[derive(Args)]
pub struct AnswerArgs {
    pub thread_id: i64,
    pub comment_id: i64,
}

#[derive(Args)]
pub struct CredentialsArgs {
    pub username: String,
    pub password: String,
}
