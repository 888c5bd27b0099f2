//! Declarative per-step field rules.
//!
//! Visibility and requiredness live in one table keyed by step and by draft
//! predicate, so the rule set is testable independently of any rendering.

use super::draft::{ApplicationDraft, DraftField};
use super::step::Step;

pub const HOME_TYPES: &[&str] = &["house", "apartment", "condo", "mobile", "other"];
pub const OWN_RENT: &[&str] = &["own", "rent", "other"];
pub const YES_NO: &[&str] = &["yes", "no"];
pub const FENCING: &[&str] = &["yes", "partial", "no"];
pub const PREVIOUS_DOGS: &[&str] = &["current", "past", "never"];

/// When a field participates in its step.
#[derive(Debug, Clone, Copy)]
pub enum Requirement {
    Always,
    /// Shown and required only while the predicate holds.
    When(fn(&ApplicationDraft) -> bool),
}

/// Input widget the front end should render for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Number { min: u32 },
    Choice(&'static [&'static str]),
    Narrative,
    Flag,
}

/// Declarative description of a single wizard field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: DraftField,
    pub kind: FieldKind,
    pub requirement: Requirement,
}

impl FieldRule {
    pub fn is_visible(&self, draft: &ApplicationDraft) -> bool {
        match self.requirement {
            Requirement::Always => true,
            Requirement::When(predicate) => predicate(draft),
        }
    }

    pub fn is_required(&self, draft: &ApplicationDraft) -> bool {
        self.is_visible(draft)
    }
}

fn has_yard(draft: &ApplicationDraft) -> bool {
    draft.has_yard == "yes"
}

fn has_other_pets(draft: &ApplicationDraft) -> bool {
    draft.other_pets == "yes"
}

static PERSONAL_INFO: [FieldRule; 8] = [
    FieldRule {
        field: DraftField::FirstName,
        kind: FieldKind::Text,
        requirement: Requirement::Always,
    },
    FieldRule {
        field: DraftField::LastName,
        kind: FieldKind::Text,
        requirement: Requirement::Always,
    },
    FieldRule {
        field: DraftField::Email,
        kind: FieldKind::Email,
        requirement: Requirement::Always,
    },
    FieldRule {
        field: DraftField::Phone,
        kind: FieldKind::Phone,
        requirement: Requirement::Always,
    },
    FieldRule {
        field: DraftField::Address,
        kind: FieldKind::Text,
        requirement: Requirement::Always,
    },
    FieldRule {
        field: DraftField::City,
        kind: FieldKind::Text,
        requirement: Requirement::Always,
    },
    FieldRule {
        field: DraftField::State,
        kind: FieldKind::Text,
        requirement: Requirement::Always,
    },
    FieldRule {
        field: DraftField::ZipCode,
        kind: FieldKind::Text,
        requirement: Requirement::Always,
    },
];

static HOME_ENVIRONMENT: [FieldRule; 7] = [
    FieldRule {
        field: DraftField::HomeType,
        kind: FieldKind::Choice(HOME_TYPES),
        requirement: Requirement::Always,
    },
    FieldRule {
        field: DraftField::OwnRent,
        kind: FieldKind::Choice(OWN_RENT),
        requirement: Requirement::Always,
    },
    FieldRule {
        field: DraftField::HasYard,
        kind: FieldKind::Choice(YES_NO),
        requirement: Requirement::Always,
    },
    FieldRule {
        field: DraftField::FencedYard,
        kind: FieldKind::Choice(FENCING),
        requirement: Requirement::When(has_yard),
    },
    FieldRule {
        field: DraftField::HouseholdMembers,
        kind: FieldKind::Number { min: 1 },
        requirement: Requirement::Always,
    },
    FieldRule {
        field: DraftField::OtherPets,
        kind: FieldKind::Choice(YES_NO),
        requirement: Requirement::Always,
    },
    FieldRule {
        field: DraftField::PetsDetails,
        kind: FieldKind::Narrative,
        requirement: Requirement::When(has_other_pets),
    },
];

static EXPERIENCE: [FieldRule; 6] = [
    FieldRule {
        field: DraftField::PreviousDogs,
        kind: FieldKind::Choice(PREVIOUS_DOGS),
        requirement: Requirement::Always,
    },
    FieldRule {
        field: DraftField::ReasonForAdopting,
        kind: FieldKind::Narrative,
        requirement: Requirement::Always,
    },
    FieldRule {
        field: DraftField::ExercisePlan,
        kind: FieldKind::Narrative,
        requirement: Requirement::Always,
    },
    FieldRule {
        field: DraftField::TrainingPlan,
        kind: FieldKind::Narrative,
        requirement: Requirement::Always,
    },
    FieldRule {
        field: DraftField::WorkSchedule,
        kind: FieldKind::Narrative,
        requirement: Requirement::Always,
    },
    FieldRule {
        field: DraftField::CareArrangements,
        kind: FieldKind::Narrative,
        requirement: Requirement::Always,
    },
];

static REVIEW_SUBMIT: [FieldRule; 1] = [FieldRule {
    field: DraftField::TermsAccepted,
    kind: FieldKind::Flag,
    requirement: Requirement::Always,
}];

/// Fields belonging to a step, in prompt order.
pub fn step_rules(step: Step) -> &'static [FieldRule] {
    match step {
        Step::PersonalInfo => &PERSONAL_INFO,
        Step::HomeEnvironment => &HOME_ENVIRONMENT,
        Step::Experience => &EXPERIENCE,
        Step::ReviewSubmit => &REVIEW_SUBMIT,
    }
}

/// Rule for a field, wherever it lives in the wizard.
pub fn rule_for(field: DraftField) -> Option<&'static FieldRule> {
    Step::ALL
        .iter()
        .flat_map(|step| step_rules(*step))
        .find(|rule| rule.field == field)
}
