//! Shell state, dispatch, and error reporting.

use std::path::Path;

use dialoguer::Confirm;
use strsim::levenshtein;

use crate::{
    cli::{
        commands, output,
        registry::{CommandEntry, CommandRegistry},
        render::Money,
    },
    config::{Config, ConfigManager},
    core::LedgerSession,
    errors::{CliError, CommandError, LedgerError},
    storage::JsonStorage,
    utils::paths::app_data_dir,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

const MAX_SUGGESTION_DISTANCE: usize = 3;

pub struct ShellContext {
    mode: CliMode,
    registry: CommandRegistry,
    session: LedgerSession,
    config: Config,
    config_manager: Option<ConfigManager>,
    pub(crate) running: bool,
}

impl ShellContext {
    /// Opens the ledger and config stored under the application data directory.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let base = app_data_dir();
        let manager = ConfigManager::with_base_dir(base.clone())?;
        let config = manager.load()?;
        let storage = JsonStorage::new(Some(base))?;
        let session = LedgerSession::open(Box::new(storage));
        let mut context = Self::with_session(mode, session, config);
        context.config_manager = Some(manager);
        Ok(context)
    }

    pub fn with_session(mode: CliMode, session: LedgerSession, config: Config) -> Self {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        Self {
            mode,
            registry,
            session,
            config,
            config_manager: None,
            running: true,
        }
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn session(&self) -> &LedgerSession {
        &self.session
    }

    pub(crate) fn session_mut(&mut self) -> &mut LedgerSession {
        &mut self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Where the config is saved. `None` for sessions built without a data dir.
    pub(crate) fn config_path(&self) -> Option<&Path> {
        self.config_manager.as_ref().map(ConfigManager::path)
    }

    /// Applies `key = value`, saving first so a failed write changes nothing.
    pub(crate) fn set_config_value(&mut self, key: &str, value: &str) -> Result<(), CommandError> {
        let updated = self.config.with_value(key, value)?;
        if let Some(manager) = &self.config_manager {
            manager.save(&updated)?;
        }
        self.config = updated;
        Ok(())
    }

    pub(crate) fn money(&self) -> Money {
        Money::new(self.config.currency_code(), self.config.locale_config())
    }

    pub(crate) fn progress_width(&self) -> usize {
        self.config.progress_width.max(1)
    }

    pub(crate) fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names_with_aliases().collect()
    }

    pub(crate) fn usage_error(&self, command: &str) -> CommandError {
        self.registry.usage_error(command)
    }

    pub(crate) fn prompt(&self) -> String {
        let ledger = self.session.ledger();
        format!(
            "spend [{}]> ",
            self.money().format(ledger.balance())
        )
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= MAX_SUGGESTION_DISTANCE {
                output::hint(format!("Did you mean `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(Confirm::new()
            .with_prompt("Exit shell?")
            .default(true)
            .interact()?)
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            CommandError::Validation(err) | CommandError::Ledger(LedgerError::Validation(err)) => {
                output::error(err);
            }
            CommandError::Config(err) => {
                output::error(err);
                output::hint("Use `help config` for the accepted keys.");
            }
            CommandError::Ledger(err) => {
                output::error(format!("Could not save changes: {err}"));
                output::hint("The change was not applied.");
            }
        }
    }
}
