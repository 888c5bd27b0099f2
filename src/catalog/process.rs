use serde::{Deserialize, Serialize};

/// One step of the published adoption process, shown on the how-it-works page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdoptionStep {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub icon: String,
}
