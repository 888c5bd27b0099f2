use super::draft::ApplicationDraft;

/// Read-only projection of a draft for the Review & Submit screen.
///
/// Recomputed from the draft on every render; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSummary {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub street: String,
    pub locality: String,
    pub home_type: String,
    pub own_rent: String,
    pub yard: String,
    pub household_members: String,
    pub previous_dogs: String,
    pub reason_for_adopting: String,
}

impl ReviewSummary {
    pub fn from_draft(draft: &ApplicationDraft) -> Self {
        Self {
            full_name: format!("{} {}", draft.first_name, draft.last_name),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            street: draft.address.clone(),
            locality: format!("{}, {} {}", draft.city, draft.state, draft.zip_code),
            home_type: draft.home_type.clone(),
            own_rent: draft.own_rent.clone(),
            yard: yard_summary(draft),
            household_members: draft.household_members.clone(),
            previous_dogs: draft.previous_dogs.clone(),
            reason_for_adopting: draft.reason_for_adopting.clone(),
        }
    }

    /// Lines rendered under the application-summary heading.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Name: {}", self.full_name),
            format!("Email: {}", self.email),
            format!("Phone: {}", self.phone),
            format!("Address: {}", self.street),
            format!("Locality: {}", self.locality),
            format!("Home type: {}", self.home_type),
            format!("Own/Rent: {}", self.own_rent),
            format!("Yard: {}", self.yard),
            format!("Household members: {}", self.household_members),
            format!("Previous dog ownership: {}", self.previous_dogs),
            format!("Reason for adopting: {}", self.reason_for_adopting),
        ]
    }
}

fn yard_summary(draft: &ApplicationDraft) -> String {
    if draft.has_yard == "yes" {
        format!("Yes ({})", fencing_phrase(&draft.fenced_yard))
    } else {
        "No".to_string()
    }
}

fn fencing_phrase(fenced_yard: &str) -> &'static str {
    match fenced_yard {
        "yes" => "Fully fenced",
        "partial" => "Partially fenced",
        _ => "Not fenced",
    }
}
