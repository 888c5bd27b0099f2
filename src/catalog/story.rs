use serde::{Deserialize, Serialize};

/// A family's post-adoption testimonial, rendered as-is on the site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SuccessStory {
    pub id: String,
    pub puppy_name: String,
    pub family_name: String,
    pub date: String,
    pub story: String,
    pub image_url: String,
}
