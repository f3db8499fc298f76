//! Auth commands for the single-account stub.

use colored::Colorize;
use raddit_store::Forum;

use crate::cli::CredentialsArgs;

pub fn cmd_register(forum: &Forum, args: CredentialsArgs) -> anyhow::Result<()> {
    let user = forum.register(&args.username, &args.password)?;
    println!(
        "{} Registered and logged in as u/{}",
        "✓".green().bold(),
        user.username.bold()
    );
    Ok(())
}

pub fn cmd_login(forum: &Forum, args: CredentialsArgs) -> anyhow::Result<()> {
    let user = forum.login(&args.username, &args.password)?;
    println!("{} Logged in as u/{}", "✓".green().bold(), user.username.bold());
    Ok(())
}

pub fn cmd_logout(forum: &Forum) -> anyhow::Result<()> {
    forum.logout()?;
    println!("Logged out.");
    Ok(())
}

pub fn cmd_whoami(forum: &Forum) -> anyhow::Result<()> {
    match forum.current_user()? {
        Some(user) => println!("u/{}", user.username.bold()),
        None => println!("Not logged in."),
    }
    Ok(())
}
