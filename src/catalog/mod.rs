//! Catalog domain models: puppy listings, testimonials, and process steps.

pub mod process;
pub mod puppy;
pub mod story;

pub use process::AdoptionStep;
pub use puppy::{Gender, Puppy, PuppySize, PuppyStatus};
pub use story::SuccessStory;

use serde::{Deserialize, Serialize};

/// Aggregate of the display collections supplied by the external data source.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Catalog {
    pub puppies: Vec<Puppy>,
    pub success_stories: Vec<SuccessStory>,
    pub adoption_steps: Vec<AdoptionStep>,
}

impl Catalog {
    /// Finds a listing by its id.
    pub fn puppy(&self, id: &str) -> Option<&Puppy> {
        self.puppies.iter().find(|puppy| puppy.id == id)
    }

    /// Listings still open for applications.
    pub fn available_puppies(&self) -> impl Iterator<Item = &Puppy> {
        self.puppies.iter().filter(|puppy| puppy.is_available())
    }

    pub fn is_empty(&self) -> bool {
        self.puppies.is_empty() && self.success_stories.is_empty() && self.adoption_steps.is_empty()
    }
}
