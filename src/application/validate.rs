//! Pure validators over the draft.
//!
//! The wizard evaluates these before `go_next` and `submit`; no host UI gate
//! is trusted.

use std::fmt;

use super::draft::{ApplicationDraft, DraftField};
use super::rules::{step_rules, FieldKind, FieldRule};
use super::step::Step;

/// Field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: DraftField,
    pub message: String,
}

impl FieldError {
    pub fn new(field: DraftField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Validates every visible field of a step, returning all failures.
pub fn validate_step(step: Step, draft: &ApplicationDraft) -> Vec<FieldError> {
    step_rules(step)
        .iter()
        .filter(|rule| rule.is_visible(draft))
        .filter_map(|rule| validate_field(rule, draft))
        .collect()
}

/// Validates the whole draft in wizard order.
pub fn validate_draft(draft: &ApplicationDraft) -> Vec<FieldError> {
    Step::ALL
        .iter()
        .flat_map(|step| validate_step(*step, draft))
        .collect()
}

/// Validates a single field against its rule.
pub fn validate_field(rule: &FieldRule, draft: &ApplicationDraft) -> Option<FieldError> {
    if let FieldKind::Flag = rule.kind {
        if rule.is_required(draft) && !draft.terms_accepted {
            return Some(FieldError::new(
                rule.field,
                "The terms must be accepted before submitting",
            ));
        }
        return None;
    }

    let value = draft.value(rule.field);
    let trimmed = value.trim();

    if trimmed.is_empty() {
        if rule.is_required(draft) {
            return Some(FieldError::new(
                rule.field,
                format!("{} is required", rule.field.name()),
            ));
        }
        return None;
    }

    match rule.kind {
        FieldKind::Email => {
            if looks_like_email(trimmed) {
                None
            } else {
                Some(FieldError::new(rule.field, "Enter a valid email address"))
            }
        }
        FieldKind::Number { min } => match trimmed.parse::<u32>() {
            Ok(count) if count >= min => None,
            _ => Some(FieldError::new(
                rule.field,
                format!("Enter a whole number ({} or greater)", min),
            )),
        },
        FieldKind::Choice(options) => {
            if options
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(trimmed))
            {
                None
            } else {
                Some(FieldError::new(
                    rule.field,
                    format!("Value must be one of: {}", options.join(", ")),
                ))
            }
        }
        FieldKind::Text | FieldKind::Phone | FieldKind::Narrative | FieldKind::Flag => None,
    }
}

fn looks_like_email(value: &str) -> bool {
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && !value.contains(char::is_whitespace)
        }
        _ => false,
    }
}
