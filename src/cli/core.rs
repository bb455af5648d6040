//! Shell context, dispatch, and error reporting for the CLI.

use std::{io, sync::Arc};

use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;
use thiserror::Error;
use tracing::warn;
use tracker_config::{Config, ConfigError, ConfigManager};
use tracker_core::{Clock, FinanceSession, ValidationError};

use crate::cli::{commands, io as cli_io, output};
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::system_clock::SystemClock;
use crate::currency::format_amount;
use crate::errors::{CliError, TrackerError};

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

/// Errors raised by a single command; reported to the user without ending the shell.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] TrackerError),
    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<ConfigError> for CommandError {
    fn from(err: ConfigError) -> Self {
        CommandError::Core(TrackerError::Config(err))
    }
}

/// Runtime state of the shell: the engine session plus presentation settings.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub session: FinanceSession,
    pub theme: ColorfulTheme,
    pub config_manager: ConfigManager,
    pub config: Config,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::default_location()?;
        Ok(Self::with_clock(mode, config_manager, Arc::new(SystemClock)))
    }

    /// Builds a context with an explicit config location and clock.
    pub fn with_clock(
        mode: CliMode,
        config_manager: ConfigManager,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let config = config_manager.load().unwrap_or_else(|err| {
            warn!(
                error = %err,
                path = %config_manager.config_path().display(),
                "using default configuration"
            );
            Config::default()
        });
        output::set_color_enabled(config.ui_color_enabled && mode == CliMode::Interactive);

        let session = FinanceSession::with_categories(clock, config.seed_categories.clone());
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        Self {
            mode,
            registry,
            session,
            theme: ColorfulTheme::default(),
            config_manager,
            config,
        }
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn prompt(&self) -> String {
        format!("finance [{}]> ", self.format_amount(self.session.balance()))
    }

    pub fn format_amount(&self, amount: rust_decimal::Decimal) -> String {
        format_amount(amount, &self.config.currency_symbol)
    }

    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.handler(command) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|key| (levenshtein(key, &needle), key))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = best {
            if distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(message);
                cli_io::print_info("Use `help <command>` for usage details.");
            }
            CommandError::Validation(err) => {
                cli_io::print_error(format!("Rejected: {err}"));
            }
            other => {
                warn!(error = %other, "command failed");
                cli_io::print_error(other);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;
    use tracker_core::FixedClock;

    fn context() -> (ShellContext, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let clock = Arc::new(FixedClock::new(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()));
        (ShellContext::with_clock(CliMode::Script, manager, clock), dir)
    }

    #[test]
    fn dispatch_runs_registered_commands() {
        let (mut ctx, _dir) = context();
        let control = ctx.dispatch("income", "income", &["1000.00", "Salary"]).unwrap();

        assert_eq!(control, LoopControl::Continue);
        assert_eq!(ctx.session.transaction_count(), 1);
        assert_eq!(ctx.prompt(), "finance [$1000.00]> ");
    }

    #[test]
    fn unknown_commands_continue_the_loop() {
        let (mut ctx, _dir) = context();
        let control = ctx.dispatch("balanse", "balanse", &[]).unwrap();
        assert_eq!(control, LoopControl::Continue);
    }

    #[test]
    fn exit_command_stops_the_loop() {
        let (mut ctx, _dir) = context();
        assert_eq!(ctx.dispatch("exit", "exit", &[]).unwrap(), LoopControl::Exit);
    }

    #[test]
    fn validation_failures_surface_as_command_errors() {
        let (mut ctx, _dir) = context();
        let err = ctx.dispatch("expense", "expense", &["abc", "Groceries"]).unwrap_err();

        assert!(matches!(err, CommandError::Validation(ValidationError::NotANumber(_))));
        assert_eq!(ctx.session.transaction_count(), 0);
    }
}
