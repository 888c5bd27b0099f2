//! Shell command dispatch and session context.

use std::path::PathBuf;
use std::time::Duration;

use strsim::levenshtein;
use thiserror::Error;

use crate::application::{
    AdoptionWizard, Navigator, SimulatedGateway, WizardError, CONFIRMATION_DESTINATION,
};
use crate::catalog::Catalog;
use crate::cli::forms::{run_wizard, ConsoleInteraction, WizardRunResult};
use crate::cli::io as cli_io;
use crate::cli::output::{self, OutputPreferences};
use crate::config::{Config, ConfigManager};
use crate::errors::AdoptionError;
use crate::storage::JsonStorage;

/// How the shell consumes input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Failures that end the shell itself.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Core(#[from] AdoptionError),
}

/// Failures scoped to a single command; reported, never fatal.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    Core(#[from] AdoptionError),
    #[error(transparent)]
    Wizard(#[from] WizardError),
    #[error("input error: {0}")]
    Input(#[from] dialoguer::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type CommandResult = Result<LoopControl, CommandError>;

/// Navigator used by the shell: renders routes instead of switching pages.
#[derive(Debug, Default)]
pub struct ShellNavigator;

impl Navigator for ShellNavigator {
    fn back(&mut self) {
        // The shell's prompt is the history; nothing to unwind.
    }

    fn goto(&mut self, destination: &str) {
        if destination == CONFIRMATION_DESTINATION {
            output::section("Thank You for Your Application!");
            cli_io::print_success(
                "Our adoption team will review it and reach out within 3-5 business days.",
            );
        } else {
            cli_io::print_info(format!("Navigating to {destination}."));
        }
    }
}

/// Shared CLI runtime state: configuration, catalog, and storage handles.
pub struct ShellContext {
    pub mode: CliMode,
    pub running: bool,
    pub last_command: Option<String>,
    config: Config,
    config_manager: ConfigManager,
    catalog: Catalog,
    storage: JsonStorage,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        if mode == CliMode::Script {
            colored::control::set_override(false);
            output::set_preferences(OutputPreferences { plain_mode: true });
        }

        let storage = JsonStorage::new_default()?;
        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;

        let catalog = match &config.catalog_path {
            Some(path) if path.exists() => match JsonStorage::load_catalog(path) {
                Ok(catalog) => catalog,
                Err(err) => {
                    cli_io::print_warning(format!(
                        "Could not load catalog from {}: {err}",
                        path.display()
                    ));
                    Catalog::default()
                }
            },
            _ => Catalog::default(),
        };

        Ok(Self {
            mode,
            running: true,
            last_command: None,
            config,
            config_manager,
            catalog,
            storage,
        })
    }

    pub fn prompt(&self) -> String {
        "adopt> ".to_string()
    }

    pub fn command_names() -> Vec<&'static str> {
        vec![
            "puppies", "puppy", "stories", "process", "apply", "catalog", "delay", "help", "exit",
        ]
    }

    pub fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        let theme = dialoguer::theme::ColorfulTheme::default();
        match cli_io::confirm_action(&theme, "Exit the shell?", true) {
            Ok(answer) => Ok(answer),
            Err(_) => Ok(true),
        }
    }

    pub fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        cli_io::print_error(err.to_string());
        Ok(())
    }

    pub fn dispatch(&mut self, command: &str, raw: &str, args: &[&str]) -> CommandResult {
        match command {
            "puppies" => self.cmd_puppies(),
            "puppy" => self.cmd_puppy(args),
            "stories" => self.cmd_stories(),
            "process" => self.cmd_process(),
            "apply" => self.cmd_apply(args),
            "catalog" => self.cmd_catalog(args),
            "delay" => self.cmd_delay(args),
            "help" => self.cmd_help(),
            "exit" | "quit" => Ok(LoopControl::Exit),
            _ => {
                self.unknown_command(raw);
                Ok(LoopControl::Continue)
            }
        }
    }

    fn unknown_command(&self, raw: &str) {
        let lowered = raw.to_lowercase();
        let suggestion = Self::command_names()
            .into_iter()
            .map(|name| (levenshtein(&lowered, name), name))
            .filter(|(distance, _)| *distance <= 2)
            .min_by_key(|(distance, _)| *distance);
        match suggestion {
            Some((_, name)) => cli_io::print_warning(format!(
                "Unknown command `{raw}`. Did you mean `{name}`?"
            )),
            None => cli_io::print_warning(format!(
                "Unknown command `{raw}`. Type `help` for the command list."
            )),
        }
    }

    fn cmd_help(&self) -> CommandResult {
        output::section("Commands");
        let entries = [
            ("puppies", "List the puppies in the loaded catalog"),
            ("puppy <id>", "Show one listing in detail"),
            ("stories", "Show adoption success stories"),
            ("process", "Show the published adoption process"),
            ("apply [puppy-id]", "Start an adoption application"),
            ("catalog <path>", "Load a catalog JSON file"),
            ("delay <ms>", "Set the simulated submission delay"),
            ("help", "Show this list"),
            ("exit", "Leave the shell"),
        ];
        for (name, summary) in entries {
            println!("  {name:<18} {summary}");
        }
        Ok(LoopControl::Continue)
    }

    fn cmd_puppies(&self) -> CommandResult {
        if self.catalog.puppies.is_empty() {
            cli_io::print_info("No puppies in the catalog. Load one with `catalog <path>`.");
            return Ok(LoopControl::Continue);
        }
        output::section("Puppies");
        for puppy in &self.catalog.puppies {
            println!(
                "  [{}] {} ({}, {}) - {}",
                puppy.id, puppy.name, puppy.breed, puppy.age, puppy.status
            );
        }
        let available = self.catalog.available_puppies().count();
        cli_io::print_info(format!(
            "{} listed, {} available for application.",
            self.catalog.puppies.len(),
            available
        ));
        Ok(LoopControl::Continue)
    }

    fn cmd_puppy(&self, args: &[&str]) -> CommandResult {
        let id = args
            .first()
            .ok_or_else(|| CommandError::Invalid("Usage: puppy <id>".into()))?;
        let puppy = self.catalog.puppy(id).ok_or_else(|| {
            CommandError::Core(AdoptionError::InvalidRef(format!("puppy `{id}` not found")))
        })?;

        output::section(&puppy.name);
        println!("  Breed: {}", puppy.breed);
        println!("  Age: {}", puppy.age);
        println!("  Gender: {}", puppy.gender);
        println!("  Size: {}", puppy.size);
        println!("  Status: {}", puppy.status);
        if !puppy.description.is_empty() {
            println!("  About: {}", puppy.description);
        }
        if !puppy.characteristics.is_empty() {
            println!("  Traits: {}", puppy.characteristics.join(", "));
        }
        Ok(LoopControl::Continue)
    }

    fn cmd_stories(&self) -> CommandResult {
        if self.catalog.success_stories.is_empty() {
            cli_io::print_info("No success stories in the catalog yet.");
            return Ok(LoopControl::Continue);
        }
        output::section("Success Stories");
        for story in &self.catalog.success_stories {
            println!(
                "  {} & the {} family ({})",
                story.puppy_name, story.family_name, story.date
            );
            println!("    {}", story.story);
        }
        Ok(LoopControl::Continue)
    }

    fn cmd_process(&self) -> CommandResult {
        if self.catalog.adoption_steps.is_empty() {
            cli_io::print_info("No adoption process loaded.");
            return Ok(LoopControl::Continue);
        }
        output::section("How Adoption Works");
        let mut steps = self.catalog.adoption_steps.clone();
        steps.sort_by_key(|step| step.id);
        for step in steps {
            println!("  {}. {} - {}", step.id, step.title, step.description);
        }
        Ok(LoopControl::Continue)
    }

    fn cmd_catalog(&mut self, args: &[&str]) -> CommandResult {
        let path = args
            .first()
            .ok_or_else(|| CommandError::Invalid("Usage: catalog <path>".into()))?;
        let path = PathBuf::from(*path);
        let catalog = JsonStorage::load_catalog(&path)?;

        cli_io::print_success(format!(
            "Loaded {} puppies, {} stories, {} process steps from {}.",
            catalog.puppies.len(),
            catalog.success_stories.len(),
            catalog.adoption_steps.len(),
            path.display()
        ));

        self.catalog = catalog;
        self.config.catalog_path = Some(path);
        self.persist_config()?;
        Ok(LoopControl::Continue)
    }

    fn cmd_delay(&mut self, args: &[&str]) -> CommandResult {
        let raw = args
            .first()
            .ok_or_else(|| CommandError::Invalid("Usage: delay <ms>".into()))?;
        let delay_ms: u64 = raw
            .parse()
            .map_err(|_| CommandError::Invalid("Delay must be a whole number of ms".into()))?;

        self.config.submission_delay_ms = delay_ms;
        self.persist_config()?;
        cli_io::print_success(format!("Simulated submission delay set to {delay_ms} ms."));
        Ok(LoopControl::Continue)
    }

    fn cmd_apply(&mut self, args: &[&str]) -> CommandResult {
        let puppy_id = match args.first() {
            Some(id) => {
                let puppy = self.catalog.puppy(id).ok_or_else(|| {
                    CommandError::Core(AdoptionError::InvalidRef(format!(
                        "puppy `{id}` not found"
                    )))
                })?;
                if !puppy.is_available() {
                    cli_io::print_warning(format!(
                        "{} already has a pending or completed adoption.",
                        puppy.name
                    ));
                }
                cli_io::print_info(format!("Applying to adopt {}.", puppy.name));
                Some(puppy.id.clone())
            }
            None => None,
        };

        let mut wizard = AdoptionWizard::for_puppy(puppy_id);
        let gateway =
            SimulatedGateway::with_delay(Duration::from_millis(self.config.submission_delay_ms));
        let mut navigator = ShellNavigator;
        let mut interaction = ConsoleInteraction::new();

        match run_wizard(&mut wizard, &mut interaction, &gateway, &mut navigator)? {
            WizardRunResult::Submitted {
                receipt,
                application,
            } => {
                if self.config.archive_applications {
                    let path = self.storage.archive_application(&application)?;
                    cli_io::print_info(format!("Application archived to {}.", path.display()));
                }
                tracing::info!(
                    application_id = %receipt.application_id,
                    "Adoption application submitted."
                );
            }
            WizardRunResult::Cancelled => {
                cli_io::print_warning("Application cancelled. No answers were kept.");
            }
        }
        Ok(LoopControl::Continue)
    }

    fn persist_config(&self) -> Result<(), CommandError> {
        self.config_manager
            .save(&self.config)
            .map_err(CommandError::from)
    }
}
