use std::fmt;

use serde::{Deserialize, Serialize};

/// Sex of a listed puppy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

/// Expected adult size bracket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PuppySize {
    Small,
    Medium,
    Large,
}

impl fmt::Display for PuppySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuppySize::Small => write!(f, "small"),
            PuppySize::Medium => write!(f, "medium"),
            PuppySize::Large => write!(f, "large"),
        }
    }
}

/// Where a listing sits in the adoption pipeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PuppyStatus {
    Available,
    Pending,
    Adopted,
}

impl fmt::Display for PuppyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuppyStatus::Available => write!(f, "available"),
            PuppyStatus::Pending => write!(f, "pending"),
            PuppyStatus::Adopted => write!(f, "adopted"),
        }
    }
}

/// A single adoptable-puppy listing supplied by the catalog data source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Puppy {
    pub id: String,
    pub name: String,
    pub breed: String,
    pub age: String,
    pub gender: Gender,
    pub size: PuppySize,
    pub description: String,
    pub characteristics: Vec<String>,
    pub image_url: String,
    pub status: PuppyStatus,
}

impl Puppy {
    pub fn is_available(&self) -> bool {
        self.status == PuppyStatus::Available
    }
}
