use tracing::debug;

use crate::alias::AliasStore;
use crate::git::CommandRunner;
use crate::session::{SessionOutcome, WorkCommitSession};
use crate::settings::Settings;
use crate::ui::{IndicatorStyle, Ui};

/// Renders the mode indicator for the given state.
///
/// The alias count only shows while the mode is off.
pub fn indicator(mode_on: bool, alias_count: usize) -> (String, IndicatorStyle) {
    if mode_on {
        ("Stop Work Commit".to_string(), IndicatorStyle::Warning)
    } else {
        (
            format!("Start Work Commit ({alias_count} aliases)"),
            IndicatorStyle::Neutral,
        )
    }
}

/// Owns the on/off state of work-commit mode.
///
/// Turning the mode on drives a single [`WorkCommitSession`] to a terminal
/// state; the flag drops back to off when the session ends, whatever the
/// outcome, and the indicator is recomputed from a fresh store read.
#[derive(Default)]
pub struct WorkCommitMode {
    active: bool,
}

impl WorkCommitMode {
    pub fn new() -> Self {
        WorkCommitMode { active: false }
    }

    /// Flips the mode.
    ///
    /// Turning it on runs one commit workflow; cancellation is reported as
    /// information and session errors as errors, and neither leaves the
    /// flag set.
    pub fn toggle(
        &mut self,
        store: &AliasStore,
        settings: &Settings,
        ui: &mut dyn Ui,
        runner: &mut dyn CommandRunner,
    ) {
        if self.active {
            self.active = false;
            self.refresh_indicator(store, ui);
            return;
        }

        self.active = true;
        self.refresh_indicator(store, ui);

        let session = WorkCommitSession::new(store, settings);
        match session.run(ui, runner) {
            Ok(SessionOutcome::Completed { alias }) => {
                debug!("work commit completed under '{alias}'");
            }
            Ok(SessionOutcome::Cancelled) => ui.notify_info("work commit cancelled"),
            Err(err) => ui.notify_error(&format!("work commit failed: {err}")),
        }

        self.active = false;
        self.refresh_indicator(store, ui);
    }

    fn refresh_indicator(&self, store: &AliasStore, ui: &mut dyn Ui) {
        let (text, style) = indicator(self.active, store.load().len());
        ui.set_indicator(&text, style);
    }
}
