//! Application-wizard domain: the draft record, the step machine, field
//! rules, validation, the review projection, and the submission hand-off.

pub mod draft;
pub mod review;
pub mod rules;
pub mod step;
pub mod submission;
pub mod validate;
pub mod wizard;

pub use draft::{ApplicationDraft, DraftField};
pub use review::ReviewSummary;
pub use rules::{rule_for, step_rules, FieldKind, FieldRule, Requirement};
pub use step::Step;
pub use submission::{
    Navigator, SimulatedGateway, SubmissionError, SubmissionGateway, SubmissionReceipt,
    SubmittedApplication, CONFIRMATION_DESTINATION, DEFAULT_SUBMISSION_DELAY_MS,
};
pub use validate::{validate_draft, validate_field, validate_step, FieldError};
pub use wizard::{AdoptionWizard, SubmitOutcome, WizardError};
