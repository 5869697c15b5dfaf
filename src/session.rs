use crate::alias::AliasStore;
use crate::error::AppError;
use crate::git::{CommandRunner, work_commit_args};
use crate::settings::Settings;
use crate::ui::{Choice, Ui};
use crate::validation::{
    prompt_until_valid, validate_alias_name_input, validate_user_email_input,
    validate_user_name_input,
};

/// Synthetic choice offered alongside the existing aliases
const CREATE_NEW_LABEL: &str = "create new alias";

/// How a session ended
#[derive(Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    Completed { alias: String },
    Cancelled,
}

/// One step of the workflow. Each prompt owns a state, so every
/// cancellation edge is explicit and independently reachable.
enum Step {
    ChooseAlias,
    CreateName,
    CreateUserName { name: String },
    CreateEmail { name: String, user_name: String },
    PromptMessage { alias: String },
    Emit { alias: String, message: String },
}

/// A single interactive work-commit workflow over an alias store.
///
/// The session only sequences prompts; mode bookkeeping and error reporting
/// belong to the caller.
pub struct WorkCommitSession<'a> {
    store: &'a AliasStore,
    settings: &'a Settings,
}

impl<'a> WorkCommitSession<'a> {
    pub fn new(store: &'a AliasStore, settings: &'a Settings) -> Self {
        WorkCommitSession { store, settings }
    }

    /// Runs the workflow to a terminal state.
    ///
    /// Dismissing any prompt ends the session as [`SessionOutcome::Cancelled`];
    /// alias-store and dispatch failures bubble up to the caller.
    pub fn run(
        &self,
        ui: &mut dyn Ui,
        runner: &mut dyn CommandRunner,
    ) -> Result<SessionOutcome, AppError> {
        let mut step = Step::ChooseAlias;
        loop {
            step = match step {
                Step::ChooseAlias => {
                    let names: Vec<String> = self.store.load().into_keys().collect();
                    let mut items: Vec<Choice> =
                        names.iter().map(|name| Choice::new(name.as_str())).collect();
                    items.push(Choice::with_description(
                        CREATE_NEW_LABEL,
                        "define a new identity alias",
                    ));

                    match ui.prompt_choice("select identity alias", items)? {
                        None => return Ok(SessionOutcome::Cancelled),
                        Some(index) if index == names.len() => Step::CreateName,
                        Some(index) => Step::PromptMessage {
                            alias: names[index].clone(),
                        },
                    }
                }
                Step::CreateName => {
                    let aliases = self.store.load();
                    let name = prompt_until_valid(ui, "enter alias name:", |input| {
                        validate_alias_name_input(input, &aliases)
                    })?;
                    match name {
                        None => return Ok(SessionOutcome::Cancelled),
                        Some(name) => Step::CreateUserName { name },
                    }
                }
                Step::CreateUserName { name } => {
                    match prompt_until_valid(ui, "enter git username:", validate_user_name_input)? {
                        None => return Ok(SessionOutcome::Cancelled),
                        Some(user_name) => Step::CreateEmail { name, user_name },
                    }
                }
                Step::CreateEmail { name, user_name } => {
                    match prompt_until_valid(ui, "enter git email:", validate_user_email_input)? {
                        None => return Ok(SessionOutcome::Cancelled),
                        Some(user_email) => {
                            let entry = self.store.create(&name, &user_name, &user_email)?;
                            ui.notify_info(&format!(
                                "alias '{}' recorded for {} <{}>",
                                entry.name, entry.user_name, entry.user_email
                            ));
                            Step::PromptMessage { alias: entry.name }
                        }
                    }
                }
                Step::PromptMessage { alias } => {
                    let initial = self.settings.default_commit_message.as_str();
                    match ui.prompt_text("commit message:", Some(initial))? {
                        None => return Ok(SessionOutcome::Cancelled),
                        // an empty submission reads as a dismissal
                        Some(message) if message.is_empty() => {
                            return Ok(SessionOutcome::Cancelled);
                        }
                        Some(message) => Step::Emit { alias, message },
                    }
                }
                Step::Emit { alias, message } => {
                    runner.run("git", &work_commit_args(Some(&alias), &message))?;
                    ui.notify_info(&format!("work commit created under '{alias}'"));
                    return Ok(SessionOutcome::Completed { alias });
                }
            };
        }
    }
}
