mod auth;
mod cli;
mod comments;
mod forum;

use clap::Parser;
use raddit_store::{FileBackend, Forum};

use crate::cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let data_dir = std::env::var("RADDIT_DATA").unwrap_or_else(|_| ".raddit".to_string());
    let forum = Forum::new(FileBackend::open(data_dir)?);

    match cli.command {
        Command::Threads(args) => forum::cmd_threads(&forum, args),
        Command::Create(args) => forum::cmd_create(&forum, args),
        Command::Show(args) => forum::cmd_show(&forum, args),
        Command::Lock(args) => forum::cmd_lock(&forum, args, true),
        Command::Unlock(args) => forum::cmd_lock(&forum, args, false),
        Command::Delete(args) => forum::cmd_delete(&forum, args),
        Command::Comment(args) => comments::cmd_comment(&forum, args),
        Command::Reply(args) => comments::cmd_reply(&forum, args),
        Command::Answer(args) => comments::cmd_answer(&forum, args),
        Command::Register(args) => auth::cmd_register(&forum, args),
        Command::Login(args) => auth::cmd_login(&forum, args),
        Command::Logout => auth::cmd_logout(&forum),
        Command::Whoami => auth::cmd_whoami(&forum),
    }
}
