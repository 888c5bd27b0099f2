use thiserror::Error;

use super::draft::{ApplicationDraft, DraftField};
use super::step::Step;
use super::submission::{
    Navigator, SubmissionError, SubmissionGateway, SubmissionReceipt, SubmittedApplication,
    CONFIRMATION_DESTINATION,
};
use super::validate::{validate_draft, validate_step, FieldError};

/// Controller-level failures surfaced to the front end.
#[derive(Debug, Error)]
pub enum WizardError {
    /// The current step has missing or invalid answers.
    #[error("{} field(s) need attention", .0.len())]
    StepBlocked(Vec<FieldError>),
    #[error("submission requires the review step")]
    NotOnReviewStep,
    #[error("the terms must be accepted before submitting")]
    TermsNotAccepted,
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

/// Result of a full submit round trip.
#[derive(Debug)]
pub enum SubmitOutcome {
    Submitted {
        receipt: SubmissionReceipt,
        application: SubmittedApplication,
    },
    /// A submission was already pending; nothing happened.
    AlreadyPending,
}

/// Four-step application wizard.
///
/// Owns the draft, the step pointer, and the submission gate. Steps move
/// strictly by one, clamped at both ends; answer content never skips a step,
/// it only hides conditional fields within one.
#[derive(Debug, Clone)]
pub struct AdoptionWizard {
    step: Step,
    draft: ApplicationDraft,
    puppy_id: Option<String>,
    submitting: bool,
}

impl AdoptionWizard {
    pub fn new() -> Self {
        Self::for_puppy(None)
    }

    /// Wizard pre-linked to a specific listing.
    pub fn for_puppy(puppy_id: Option<String>) -> Self {
        Self {
            step: Step::FIRST,
            draft: ApplicationDraft::new(),
            puppy_id,
            submitting: false,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    pub fn puppy_id(&self) -> Option<&str> {
        self.puppy_id.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Fraction of the wizard completed, for progress rendering.
    pub fn progress(&self) -> f32 {
        self.step.progress()
    }

    /// Replaces a single draft answer, leaving all others untouched.
    pub fn set_field(&mut self, field: DraftField, value: &str) {
        self.draft = self.draft.with_field(field, value);
    }

    /// Advances one step after validating the current one. Clamped no-op on
    /// the review step.
    pub fn go_next(&mut self) -> Result<Step, WizardError> {
        if self.step == Step::LAST {
            return Ok(self.step);
        }
        let errors = validate_step(self.step, &self.draft);
        if !errors.is_empty() {
            return Err(WizardError::StepBlocked(errors));
        }
        self.step = self.step.next();
        tracing::debug!(step = self.step.number(), "Wizard advanced.");
        Ok(self.step)
    }

    /// Retreats one step; clamped no-op on the first. Backward movement never
    /// validates.
    pub fn go_previous(&mut self) -> Step {
        self.step = self.step.previous();
        self.step
    }

    /// Marks the wizard submitting and returns the snapshot to deliver.
    ///
    /// `Ok(None)` means a submission is already pending and nothing changed.
    pub fn begin_submit(&mut self) -> Result<Option<SubmittedApplication>, WizardError> {
        if self.submitting {
            return Ok(None);
        }
        if self.step != Step::LAST {
            return Err(WizardError::NotOnReviewStep);
        }
        if !self.draft.terms_accepted {
            return Err(WizardError::TermsNotAccepted);
        }
        let errors = validate_draft(&self.draft);
        if !errors.is_empty() {
            return Err(WizardError::StepBlocked(errors));
        }
        self.submitting = true;
        Ok(Some(SubmittedApplication::new(
            self.draft.clone(),
            self.puppy_id.clone(),
        )))
    }

    /// Ends a pending submission and hands control to the navigator.
    pub fn complete_submit<N: Navigator>(&mut self, navigator: &mut N) {
        self.submitting = false;
        navigator.goto(CONFIRMATION_DESTINATION);
    }

    /// Clears the pending flag after a gateway failure. The wizard stays on
    /// the review step so the applicant can retry.
    pub fn abort_submit(&mut self) {
        self.submitting = false;
    }

    /// Full submission round trip against a gateway and navigator.
    pub fn submit<G, N>(
        &mut self,
        gateway: &G,
        navigator: &mut N,
    ) -> Result<SubmitOutcome, WizardError>
    where
        G: SubmissionGateway,
        N: Navigator,
    {
        let Some(application) = self.begin_submit()? else {
            return Ok(SubmitOutcome::AlreadyPending);
        };
        match gateway.deliver(&application) {
            Ok(receipt) => {
                self.complete_submit(navigator);
                Ok(SubmitOutcome::Submitted {
                    receipt,
                    application,
                })
            }
            Err(err) => {
                self.abort_submit();
                Err(WizardError::Submission(err))
            }
        }
    }
}

impl Default for AdoptionWizard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::application::submission::SimulatedGateway;

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

    struct RejectingGateway;

    impl SubmissionGateway for RejectingGateway {
        fn deliver(
            &self,
            _application: &SubmittedApplication,
        ) -> Result<SubmissionReceipt, SubmissionError> {
            Err(SubmissionError::Rejected("household already applied".into()))
        }
    }

    fn fill_step(wizard: &mut AdoptionWizard, entries: &[(DraftField, &str)]) {
        for (field, value) in entries {
            wizard.set_field(*field, value);
        }
    }

    fn completed_wizard() -> AdoptionWizard {
        let mut wizard = AdoptionWizard::new();
        fill_step(
            &mut wizard,
            &[
                (DraftField::FirstName, "Jordan"),
                (DraftField::LastName, "Reyes"),
                (DraftField::Email, "jordan@example.com"),
                (DraftField::Phone, "555-0102"),
                (DraftField::Address, "12 Alder Way"),
                (DraftField::City, "Denver"),
                (DraftField::State, "CO"),
                (DraftField::ZipCode, "80202"),
            ],
        );
        wizard.go_next().unwrap();
        fill_step(
            &mut wizard,
            &[
                (DraftField::HomeType, "house"),
                (DraftField::OwnRent, "own"),
                (DraftField::HasYard, "yes"),
                (DraftField::FencedYard, "partial"),
                (DraftField::HouseholdMembers, "3"),
                (DraftField::OtherPets, "no"),
            ],
        );
        wizard.go_next().unwrap();
        fill_step(
            &mut wizard,
            &[
                (DraftField::PreviousDogs, "past"),
                (DraftField::ReasonForAdopting, "Companionship for our kids."),
                (DraftField::ExercisePlan, "Morning walks and a daily run."),
                (DraftField::TrainingPlan, "Weekly obedience classes."),
                (DraftField::WorkSchedule, "Hybrid, home three days a week."),
                (DraftField::CareArrangements, "Neighbour covers travel days."),
            ],
        );
        wizard.go_next().unwrap();
        assert_eq!(wizard.step(), Step::ReviewSubmit);
        wizard
    }

    #[test]
    fn navigation_stays_within_the_four_steps() {
        let mut wizard = completed_wizard();
        // Clamped at the review step.
        assert_eq!(wizard.go_next().unwrap(), Step::ReviewSubmit);

        assert_eq!(wizard.go_previous(), Step::Experience);
        assert_eq!(wizard.go_previous(), Step::HomeEnvironment);
        assert_eq!(wizard.go_previous(), Step::PersonalInfo);
        // Clamped at the first step.
        assert_eq!(wizard.go_previous(), Step::PersonalInfo);
    }

    #[test]
    fn go_next_blocks_on_an_invalid_step() {
        let mut wizard = AdoptionWizard::new();
        match wizard.go_next() {
            Err(WizardError::StepBlocked(errors)) => {
                assert!(errors.iter().any(|err| err.field == DraftField::FirstName));
            }
            other => panic!("Unexpected result: {:?}", other),
        }
        assert_eq!(wizard.step(), Step::PersonalInfo);
    }

    #[test]
    fn go_previous_never_validates() {
        let mut wizard = completed_wizard();
        wizard.set_field(DraftField::Email, "broken");
        assert_eq!(wizard.go_previous(), Step::Experience);
    }

    #[test]
    fn submit_requires_the_review_step() {
        let mut wizard = AdoptionWizard::new();
        assert!(matches!(
            wizard.begin_submit(),
            Err(WizardError::NotOnReviewStep)
        ));
    }

    #[test]
    fn submit_requires_accepted_terms() {
        let mut wizard = completed_wizard();
        let gateway = SimulatedGateway::with_delay(Duration::ZERO);
        let mut navigator = RecordingNavigator::default();

        let result = wizard.submit(&gateway, &mut navigator);
        assert!(matches!(result, Err(WizardError::TermsNotAccepted)));
        assert!(!wizard.is_submitting());
        assert!(navigator.destinations.is_empty());
    }

    #[test]
    fn begin_submit_is_idempotent_while_pending() {
        let mut wizard = completed_wizard();
        wizard.set_field(DraftField::TermsAccepted, "yes");

        let first = wizard.begin_submit().unwrap();
        assert!(first.is_some());
        assert!(wizard.is_submitting());

        let second = wizard.begin_submit().unwrap();
        assert!(second.is_none());
        assert!(wizard.is_submitting());

        let mut navigator = RecordingNavigator::default();
        wizard.complete_submit(&mut navigator);
        assert!(!wizard.is_submitting());
        assert_eq!(navigator.destinations, vec![CONFIRMATION_DESTINATION]);
    }

    #[test]
    fn successful_submit_navigates_to_the_confirmation_exactly_once() {
        let mut wizard = completed_wizard();
        wizard.set_field(DraftField::TermsAccepted, "yes");
        let gateway = SimulatedGateway::with_delay(Duration::ZERO);
        let mut navigator = RecordingNavigator::default();

        match wizard.submit(&gateway, &mut navigator).unwrap() {
            SubmitOutcome::Submitted {
                receipt,
                application,
            } => {
                assert_eq!(receipt.application_id, application.id);
                assert_eq!(application.answers.city, "Denver");
            }
            other => panic!("Unexpected outcome: {:?}", other),
        }
        assert!(!wizard.is_submitting());
        assert_eq!(navigator.destinations, vec![CONFIRMATION_DESTINATION]);
        assert_eq!(navigator.back_calls, 0);
    }

    #[test]
    fn rejected_submission_keeps_the_wizard_on_the_review_step() {
        let mut wizard = completed_wizard();
        wizard.set_field(DraftField::TermsAccepted, "yes");
        let mut navigator = RecordingNavigator::default();

        let result = wizard.submit(&RejectingGateway, &mut navigator);
        assert!(matches!(result, Err(WizardError::Submission(_))));
        assert!(!wizard.is_submitting());
        assert_eq!(wizard.step(), Step::ReviewSubmit);
        assert!(navigator.destinations.is_empty());
    }

    #[test]
    fn submit_revalidates_the_whole_draft() {
        let mut wizard = completed_wizard();
        wizard.set_field(DraftField::TermsAccepted, "yes");
        // Invalidate an earlier step after reaching the review screen.
        wizard.set_field(DraftField::Email, "broken");

        match wizard.begin_submit() {
            Err(WizardError::StepBlocked(errors)) => {
                assert!(errors.iter().any(|err| err.field == DraftField::Email));
            }
            other => panic!("Unexpected result: {:?}", other),
        }
        assert!(!wizard.is_submitting());
    }

    #[test]
    fn linked_listing_travels_with_the_application() {
        let wizard = completed_wizard();
        let mut linked = AdoptionWizard::for_puppy(Some("p-001".into()));
        for field in DraftField::ALL {
            let value = wizard.draft().value(field);
            linked.set_field(field, &value);
        }
        while linked.step() != Step::ReviewSubmit {
            linked.go_next().unwrap();
        }
        linked.set_field(DraftField::TermsAccepted, "yes");
        let application = linked.begin_submit().unwrap().unwrap();
        assert_eq!(application.puppy_id.as_deref(), Some("p-001"));
    }
}
