//! Interactive front end for the application wizard.
//!
//! The state machine lives in [`crate::application::wizard`]; this module
//! drives it through a [`WizardInteraction`], so the console flow and the
//! scripted flow used by tests share one engine.

use std::io::{self, Write};

use crossterm::{
    cursor,
    terminal::{self, ClearType},
    ExecutableCommand,
};
use dialoguer::theme::ColorfulTheme;

use crate::application::{
    rules::{step_rules, FieldKind, FieldRule},
    validate::{validate_field, FieldError},
    AdoptionWizard, DraftField, Navigator, ReviewSummary, Step, SubmissionError,
    SubmissionGateway, SubmissionReceipt, SubmitOutcome, SubmittedApplication, WizardError,
};
use crate::cli::io as cli_io;
use crate::cli::output;
use crate::cli::script_input;

/// Outcome of a full wizard run.
#[derive(Debug)]
pub enum WizardRunResult {
    Submitted {
        receipt: SubmissionReceipt,
        application: SubmittedApplication,
    },
    Cancelled,
}

/// How the user answered a single field prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldResponse {
    /// A concrete value for the field.
    Value(String),
    /// Keep the current value.
    Keep,
    /// Abort the whole wizard.
    Cancel,
}

/// Navigation choice offered after a step's fields are answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    Next,
    Previous,
    Cancel,
}

/// Choice offered on the review screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    SetTerms(bool),
    Submit,
    Previous,
    Cancel,
}

/// Rendering and prompting seam between the wizard engine and a front end.
pub trait WizardInteraction {
    /// A new step became active. The console front end resets the screen
    /// here, mirroring a page's scroll-to-top on step change.
    fn step_started(&mut self, step: Step, progress: f32);

    fn prompt_field(&mut self, rule: &FieldRule, current: &str) -> FieldResponse;

    fn show_errors(&mut self, errors: &[FieldError]);

    fn step_action(&mut self, step: Step) -> StepAction;

    fn review(&mut self, summary: &ReviewSummary, terms_accepted: bool) -> ReviewAction;

    fn submission_started(&mut self);

    fn submission_finished(&mut self, receipt: &SubmissionReceipt);

    fn submission_failed(&mut self, error: &SubmissionError);
}

/// Drives a wizard to completion or cancellation.
pub fn run_wizard<I, G, N>(
    wizard: &mut AdoptionWizard,
    interaction: &mut I,
    gateway: &G,
    navigator: &mut N,
) -> Result<WizardRunResult, WizardError>
where
    I: WizardInteraction,
    G: SubmissionGateway,
    N: Navigator,
{
    loop {
        let step = wizard.step();
        interaction.step_started(step, wizard.progress());

        if step == Step::ReviewSubmit {
            let summary = ReviewSummary::from_draft(wizard.draft());
            match interaction.review(&summary, wizard.draft().terms_accepted) {
                ReviewAction::SetTerms(accepted) => {
                    let value = if accepted { "true" } else { "false" };
                    wizard.set_field(DraftField::TermsAccepted, value);
                }
                ReviewAction::Previous => {
                    wizard.go_previous();
                }
                ReviewAction::Cancel => {
                    navigator.back();
                    return Ok(WizardRunResult::Cancelled);
                }
                ReviewAction::Submit => {
                    interaction.submission_started();
                    match wizard.submit(gateway, navigator) {
                        Ok(SubmitOutcome::Submitted {
                            receipt,
                            application,
                        }) => {
                            interaction.submission_finished(&receipt);
                            return Ok(WizardRunResult::Submitted {
                                receipt,
                                application,
                            });
                        }
                        Ok(SubmitOutcome::AlreadyPending) => {}
                        Err(WizardError::TermsNotAccepted) => {
                            interaction.show_errors(&[FieldError::new(
                                DraftField::TermsAccepted,
                                "The terms must be accepted before submitting",
                            )]);
                        }
                        Err(WizardError::StepBlocked(errors)) => {
                            interaction.show_errors(&errors);
                        }
                        Err(WizardError::Submission(err)) => {
                            interaction.submission_failed(&err);
                        }
                        Err(other) => return Err(other),
                    }
                }
            }
            continue;
        }

        for rule in step_rules(step) {
            if !rule.is_visible(wizard.draft()) {
                continue;
            }
            loop {
                let current = wizard.draft().value(rule.field);
                match interaction.prompt_field(rule, &current) {
                    FieldResponse::Cancel => {
                        navigator.back();
                        return Ok(WizardRunResult::Cancelled);
                    }
                    FieldResponse::Value(value) => wizard.set_field(rule.field, &value),
                    FieldResponse::Keep => {}
                }
                match validate_field(rule, wizard.draft()) {
                    None => break,
                    Some(err) => interaction.show_errors(&[err]),
                }
            }
        }

        match interaction.step_action(step) {
            StepAction::Next => match wizard.go_next() {
                Ok(_) => {}
                Err(WizardError::StepBlocked(errors)) => interaction.show_errors(&errors),
                Err(other) => return Err(other),
            },
            StepAction::Previous => {
                wizard.go_previous();
            }
            StepAction::Cancel => {
                navigator.back();
                return Ok(WizardRunResult::Cancelled);
            }
        }
    }
}

/// Console front end backed by dialoguer prompts.
pub struct ConsoleInteraction {
    theme: ColorfulTheme,
}

impl ConsoleInteraction {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    fn clear_screen(&self) {
        if script_input::is_enabled() {
            return;
        }
        let mut stdout = io::stdout();
        let _ = stdout.execute(terminal::Clear(ClearType::All));
        let _ = stdout.execute(cursor::MoveTo(0, 0));
        let _ = stdout.flush();
    }

    fn choice_default(options: &[&str], current: &str) -> usize {
        options
            .iter()
            .position(|candidate| candidate.eq_ignore_ascii_case(current))
            .unwrap_or(0)
    }
}

impl Default for ConsoleInteraction {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardInteraction for ConsoleInteraction {
    fn step_started(&mut self, step: Step, progress: f32) {
        self.clear_screen();
        output::section(format!(
            "Step {} of {} — {}",
            step.number(),
            Step::ALL.len(),
            step.title()
        ));
        cli_io::print_info(format!("Progress: {}%", (progress * 100.0).round()));
    }

    fn prompt_field(&mut self, rule: &FieldRule, current: &str) -> FieldResponse {
        if let Some(entry) = script_input::next_input() {
            return interpret_field_entry(&entry);
        }

        match rule.kind {
            FieldKind::Choice(options) => {
                let default = Self::choice_default(options, current);
                match cli_io::prompt_select(&self.theme, rule.field.label(), options, default) {
                    Ok(index) => FieldResponse::Value(options[index].to_string()),
                    Err(_) => FieldResponse::Cancel,
                }
            }
            FieldKind::Flag => {
                match cli_io::confirm_action(&self.theme, rule.field.label(), current == "true") {
                    Ok(true) => FieldResponse::Value("true".into()),
                    Ok(false) => FieldResponse::Value("false".into()),
                    Err(_) => FieldResponse::Cancel,
                }
            }
            _ => {
                let initial = if current.is_empty() { None } else { Some(current) };
                match cli_io::prompt_text(&self.theme, rule.field.label(), initial) {
                    Ok(value) => FieldResponse::Value(value),
                    Err(_) => FieldResponse::Cancel,
                }
            }
        }
    }

    fn show_errors(&mut self, errors: &[FieldError]) {
        for error in errors {
            cli_io::print_warning(error.to_string());
        }
    }

    fn step_action(&mut self, step: Step) -> StepAction {
        if let Some(entry) = script_input::next_input() {
            return interpret_step_entry(&entry);
        }

        let mut items = vec!["Next"];
        if step != Step::FIRST {
            items.push("Previous");
        }
        items.push("Cancel application");

        match cli_io::prompt_select(&self.theme, "Continue?", &items, 0) {
            Ok(index) => match items[index] {
                "Next" => StepAction::Next,
                "Previous" => StepAction::Previous,
                _ => StepAction::Cancel,
            },
            Err(_) => StepAction::Cancel,
        }
    }

    fn review(&mut self, summary: &ReviewSummary, terms_accepted: bool) -> ReviewAction {
        output::section("Application Summary");
        for line in summary.lines() {
            println!("  {line}");
        }
        println!();

        if let Some(entry) = script_input::next_input() {
            return interpret_review_entry(&entry);
        }

        if !terms_accepted {
            let items = [
                "Accept: I certify that all information provided is true and accurate",
                "Previous",
                "Cancel application",
            ];
            return match cli_io::prompt_select(&self.theme, "Before submitting", &items, 0) {
                Ok(0) => ReviewAction::SetTerms(true),
                Ok(1) => ReviewAction::Previous,
                _ => ReviewAction::Cancel,
            };
        }

        let items = ["Submit application", "Previous", "Cancel application"];
        match cli_io::prompt_select(&self.theme, "Ready?", &items, 0) {
            Ok(0) => ReviewAction::Submit,
            Ok(1) => ReviewAction::Previous,
            _ => ReviewAction::Cancel,
        }
    }

    fn submission_started(&mut self) {
        cli_io::print_info("Submitting application...");
    }

    fn submission_finished(&mut self, receipt: &SubmissionReceipt) {
        cli_io::print_success(format!(
            "Application received. Confirmation id: {}",
            receipt.application_id
        ));
    }

    fn submission_failed(&mut self, error: &SubmissionError) {
        cli_io::print_error(format!("Submission failed: {error}"));
    }
}

fn interpret_field_entry(entry: &str) -> FieldResponse {
    match entry {
        "" | ":keep" => FieldResponse::Keep,
        ":cancel" => FieldResponse::Cancel,
        value => FieldResponse::Value(value.to_string()),
    }
}

fn interpret_step_entry(entry: &str) -> StepAction {
    match entry {
        ":previous" => StepAction::Previous,
        ":cancel" => StepAction::Cancel,
        _ => StepAction::Next,
    }
}

fn interpret_review_entry(entry: &str) -> ReviewAction {
    match entry {
        ":accept" => ReviewAction::SetTerms(true),
        ":withdraw" => ReviewAction::SetTerms(false),
        ":submit" => ReviewAction::Submit,
        ":previous" => ReviewAction::Previous,
        _ => ReviewAction::Cancel,
    }
}

/// Interaction fed from a queue of scripted entries; used by tests.
pub struct ScriptedInteraction {
    entries: std::collections::VecDeque<String>,
    pub errors: Vec<String>,
    pub visited: Vec<Step>,
    pub submissions: usize,
}

impl ScriptedInteraction {
    pub fn new(entries: Vec<&str>) -> Self {
        Self {
            entries: entries.into_iter().map(str::to_string).collect(),
            errors: Vec::new(),
            visited: Vec::new(),
            submissions: 0,
        }
    }

    fn next_entry(&mut self) -> String {
        self.entries.pop_front().unwrap_or_else(|| ":cancel".into())
    }
}

impl WizardInteraction for ScriptedInteraction {
    fn step_started(&mut self, step: Step, _progress: f32) {
        self.visited.push(step);
    }

    fn prompt_field(&mut self, _rule: &FieldRule, _current: &str) -> FieldResponse {
        let entry = self.next_entry();
        interpret_field_entry(&entry)
    }

    fn show_errors(&mut self, errors: &[FieldError]) {
        for error in errors {
            self.errors.push(error.to_string());
        }
    }

    fn step_action(&mut self, _step: Step) -> StepAction {
        let entry = self.next_entry();
        interpret_step_entry(&entry)
    }

    fn review(&mut self, _summary: &ReviewSummary, _terms_accepted: bool) -> ReviewAction {
        let entry = self.next_entry();
        interpret_review_entry(&entry)
    }

    fn submission_started(&mut self) {
        self.submissions += 1;
    }

    fn submission_finished(&mut self, _receipt: &SubmissionReceipt) {}

    fn submission_failed(&mut self, error: &SubmissionError) {
        self.errors.push(error.to_string());
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::application::SimulatedGateway;

    #[derive(Default)]
    struct RecordingNavigator {
        destinations: Vec<String>,
        back_calls: usize,
    }

    impl Navigator for RecordingNavigator {
        fn back(&mut self) {
            self.back_calls += 1;
        }

        fn goto(&mut self, destination: &str) {
            self.destinations.push(destination.to_string());
        }
    }

    fn full_application_entries() -> Vec<&'static str> {
        vec![
            // Personal Information
            "Jordan",
            "Reyes",
            "jordan@example.com",
            "555-0102",
            "12 Alder Way",
            "Denver",
            "CO",
            "80202",
            ":next",
            // Home Environment
            "house",
            "own",
            "yes",
            "partial",
            "3",
            "yes",
            "Two cats, both easygoing.",
            ":next",
            // Experience & Expectations
            "past",
            "Companionship for our kids.",
            "Morning walks and a daily run.",
            "Weekly obedience classes.",
            "Hybrid, home three days a week.",
            "A neighbour covers travel days.",
            ":next",
            // Review & Submit
            ":accept",
            ":submit",
        ]
    }

    #[test]
    fn scripted_run_submits_and_navigates_once() {
        let mut wizard = AdoptionWizard::new();
        let mut interaction = ScriptedInteraction::new(full_application_entries());
        let gateway = SimulatedGateway::with_delay(Duration::ZERO);
        let mut navigator = RecordingNavigator::default();

        let result = run_wizard(&mut wizard, &mut interaction, &gateway, &mut navigator).unwrap();
        match result {
            WizardRunResult::Submitted { application, .. } => {
                assert_eq!(application.answers.first_name, "Jordan");
                assert_eq!(application.answers.pets_details, "Two cats, both easygoing.");
                assert!(application.answers.terms_accepted);
            }
            other => panic!("Unexpected result: {:?}", other),
        }
        assert_eq!(navigator.destinations, vec!["adoption-confirmation"]);
        assert_eq!(navigator.back_calls, 0);
        assert_eq!(interaction.submissions, 1);
        assert!(interaction.errors.is_empty());
    }

    #[test]
    fn invalid_answers_reprompt_without_advancing() {
        let mut entries = vec![
            "Jordan", "Reyes", "not-an-email", // rejected, field re-prompts
            "jordan@example.com",
        ];
        entries.extend([
            "555-0102",
            "12 Alder Way",
            "Denver",
            "CO",
            "80202",
            ":cancel",
        ]);

        let mut wizard = AdoptionWizard::new();
        let mut interaction = ScriptedInteraction::new(entries);
        let gateway = SimulatedGateway::with_delay(Duration::ZERO);
        let mut navigator = RecordingNavigator::default();

        let result = run_wizard(&mut wizard, &mut interaction, &gateway, &mut navigator).unwrap();
        assert!(matches!(result, WizardRunResult::Cancelled));
        assert_eq!(interaction.errors, vec!["Enter a valid email address"]);
        assert_eq!(wizard.draft().email, "jordan@example.com");
        assert!(navigator.destinations.is_empty());
        assert_eq!(navigator.back_calls, 1);
    }

    #[test]
    fn previous_revisits_a_step_and_keeps_answers() {
        let entries = vec![
            // Personal Information
            "Jordan",
            "Reyes",
            "jordan@example.com",
            "555-0102",
            "12 Alder Way",
            "Denver",
            "CO",
            "80202",
            ":next",
            // Home Environment (no yard, no other pets: five visible fields)
            "apartment",
            "rent",
            "no",
            "2",
            "no",
            ":previous",
            // Personal Information again, keeping every answer
            ":keep",
            ":keep",
            ":keep",
            ":keep",
            ":keep",
            ":keep",
            ":keep",
            ":keep",
            ":next",
            // Home Environment again
            ":keep",
            ":keep",
            ":keep",
            ":keep",
            ":keep",
            ":cancel",
        ];

        let mut wizard = AdoptionWizard::new();
        let mut interaction = ScriptedInteraction::new(entries);
        let gateway = SimulatedGateway::with_delay(Duration::ZERO);
        let mut navigator = RecordingNavigator::default();

        let result = run_wizard(&mut wizard, &mut interaction, &gateway, &mut navigator).unwrap();
        assert!(matches!(result, WizardRunResult::Cancelled));
        assert_eq!(
            interaction.visited,
            vec![
                Step::PersonalInfo,
                Step::HomeEnvironment,
                Step::PersonalInfo,
                Step::HomeEnvironment,
            ]
        );
        assert_eq!(wizard.draft().city, "Denver");
        assert_eq!(wizard.draft().home_type, "apartment");
    }

    #[test]
    fn submit_without_terms_is_blocked() {
        let mut entries = full_application_entries();
        // Try to submit before accepting the terms, then give up.
        let accept_position = entries.iter().position(|e| *e == ":accept").unwrap();
        entries[accept_position] = ":submit";
        entries.truncate(accept_position + 1);
        entries.push(":cancel");

        let mut wizard = AdoptionWizard::new();
        let mut interaction = ScriptedInteraction::new(entries);
        let gateway = SimulatedGateway::with_delay(Duration::ZERO);
        let mut navigator = RecordingNavigator::default();

        let result = run_wizard(&mut wizard, &mut interaction, &gateway, &mut navigator).unwrap();
        assert!(matches!(result, WizardRunResult::Cancelled));
        assert!(interaction
            .errors
            .iter()
            .any(|err| err.contains("terms must be accepted")));
        assert!(navigator.destinations.is_empty());
    }
}
