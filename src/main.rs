mod alias;
mod cli;
mod error;
mod git;
mod mode;
mod session;
mod settings;
mod ui;
mod validation;

use clap::Parser;
use colored::Colorize;

use crate::alias::AliasStore;
use crate::cli::{Cli, Commands};
use crate::error::AppError;
use crate::git::{CommandRunner, GitRunner, work_commit_args};
use crate::mode::WorkCommitMode;
use crate::settings::Settings;
use crate::ui::{InquireUi, Ui};

// Main
fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .init();

    if let Err(err) = run(cli) {
        println!("{}", err.to_string().red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let store = AliasStore::global()?;
    let settings = Settings::load()?;

    match cli.command {
        None | Some(Commands::Toggle) => toggle_mode(&store, &settings),
        Some(Commands::Add {
            name,
            user_name,
            user_email,
        }) => add_alias(&store, &name, &user_name, &user_email),
        Some(Commands::List) => list_aliases(&store),
        Some(Commands::Status) => show_status(&store),
        Some(Commands::Commit { message }) => plain_commit(&settings, message),
    }
}

/// Drives one interactive work-commit session
fn toggle_mode(store: &AliasStore, settings: &Settings) -> Result<(), AppError> {
    if !git::is_inside_git_repo()? {
        return Err(AppError::NotInGitRepository);
    }

    let mut ui = InquireUi;
    let mut runner = GitRunner;
    let mut mode = WorkCommitMode::new();
    mode.toggle(store, settings, &mut ui, &mut runner);
    Ok(())
}

/// Records an alias from command-line arguments
fn add_alias(
    store: &AliasStore,
    name: &str,
    user_name: &str,
    user_email: &str,
) -> Result<(), AppError> {
    let aliases = store.load();
    validation::validate_alias_name_input(name, &aliases)?;
    validation::validate_user_name_input(user_name)?;
    validation::validate_user_email_input(user_email)?;

    let entry = store.create(name, user_name, user_email)?;
    println!(
        "{} {} -> {} <{}>",
        "alias added:".green(),
        entry.name,
        entry.user_name,
        entry.user_email
    );
    Ok(())
}

fn list_aliases(store: &AliasStore) -> Result<(), AppError> {
    let aliases = store.load();
    if aliases.is_empty() {
        println!(
            "{}",
            format!("no aliases recorded in {}", store.path().display()).red()
        );
        return Ok(());
    }

    for (name, definition) in &aliases {
        println!("{} {}", format!("{name} =").blue(), definition);
    }
    Ok(())
}

fn show_status(store: &AliasStore) -> Result<(), AppError> {
    let mut ui = InquireUi;
    let (text, style) = mode::indicator(false, store.load().len());
    ui.set_indicator(&text, style);
    Ok(())
}

/// Work commit under the current Git identity
fn plain_commit(settings: &Settings, message: Option<String>) -> Result<(), AppError> {
    if !git::is_inside_git_repo()? {
        return Err(AppError::NotInGitRepository);
    }

    let message = message.unwrap_or_else(|| settings.default_commit_message.clone());
    let mut runner = GitRunner;
    runner.run("git", &work_commit_args(None, &message))?;
    println!("{} {}", "work commit created:".green(), message);
    Ok(())
}
