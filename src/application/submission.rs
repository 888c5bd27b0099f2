//! Submission hand-off: navigator and gateway seams plus the simulated
//! backend used until a real one exists.

use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::draft::ApplicationDraft;

/// Destination token handed to the navigator after a successful submission.
pub const CONFIRMATION_DESTINATION: &str = "adoption-confirmation";

/// Delay applied by the stock simulated gateway.
pub const DEFAULT_SUBMISSION_DELAY_MS: u64 = 1500;

/// Failure modes a real submission backend can surface.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("application rejected: {0}")]
    Rejected(String),
    #[error("submission timed out after {0} ms")]
    TimedOut(u64),
}

/// Routing collaborator. Fire-and-forget: no result flows back to the wizard.
pub trait Navigator {
    /// Go back one history entry.
    fn back(&mut self);
    /// Navigate to a named destination.
    fn goto(&mut self, destination: &str);
}

/// Finalized application snapshot handed to the submission backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedApplication {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub puppy_id: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub answers: ApplicationDraft,
}

impl SubmittedApplication {
    pub fn new(answers: ApplicationDraft, puppy_id: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            puppy_id,
            submitted_at: Utc::now(),
            answers,
        }
    }
}

/// Acknowledgement returned by a gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub application_id: Uuid,
    pub confirmed_at: DateTime<Utc>,
}

/// Backend that carries a finalized application.
pub trait SubmissionGateway {
    fn deliver(
        &self,
        application: &SubmittedApplication,
    ) -> Result<SubmissionReceipt, SubmissionError>;
}

/// Stand-in backend: waits a fixed delay and always accepts.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    pub fn new() -> Self {
        Self::with_delay(Duration::from_millis(DEFAULT_SUBMISSION_DELAY_MS))
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionGateway for SimulatedGateway {
    fn deliver(
        &self,
        application: &SubmittedApplication,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        tracing::info!(application_id = %application.id, "Simulated submission accepted.");
        Ok(SubmissionReceipt {
            application_id: application.id,
            confirmed_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulated_gateway_echoes_the_application_id() {
        let application = SubmittedApplication::new(ApplicationDraft::new(), None);
        let gateway = SimulatedGateway::with_delay(Duration::ZERO);
        let receipt = gateway.deliver(&application).unwrap();
        assert_eq!(receipt.application_id, application.id);
    }

    #[test]
    fn archive_shape_uses_source_field_spellings() {
        let draft = ApplicationDraft::new();
        let application = SubmittedApplication::new(draft, Some("p-001".into()));
        let json = serde_json::to_string(&application).unwrap();
        assert!(json.contains("\"puppyId\":\"p-001\""));
        assert!(json.contains("\"submittedAt\""));
        assert!(json.contains("\"firstName\""));
    }
}
