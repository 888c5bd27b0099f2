use serde::{Deserialize, Serialize};

/// Closed set of answer fields collected by the application wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    City,
    State,
    ZipCode,
    HomeType,
    OwnRent,
    HasYard,
    FencedYard,
    HouseholdMembers,
    OtherPets,
    PetsDetails,
    PreviousDogs,
    ReasonForAdopting,
    ExercisePlan,
    TrainingPlan,
    WorkSchedule,
    CareArrangements,
    TermsAccepted,
}

impl DraftField {
    pub const ALL: [DraftField; 22] = [
        DraftField::FirstName,
        DraftField::LastName,
        DraftField::Email,
        DraftField::Phone,
        DraftField::Address,
        DraftField::City,
        DraftField::State,
        DraftField::ZipCode,
        DraftField::HomeType,
        DraftField::OwnRent,
        DraftField::HasYard,
        DraftField::FencedYard,
        DraftField::HouseholdMembers,
        DraftField::OtherPets,
        DraftField::PetsDetails,
        DraftField::PreviousDogs,
        DraftField::ReasonForAdopting,
        DraftField::ExercisePlan,
        DraftField::TrainingPlan,
        DraftField::WorkSchedule,
        DraftField::CareArrangements,
        DraftField::TermsAccepted,
    ];

    /// Stable key used by external input bindings and the archive format.
    pub fn key(self) -> &'static str {
        match self {
            DraftField::FirstName => "firstName",
            DraftField::LastName => "lastName",
            DraftField::Email => "email",
            DraftField::Phone => "phone",
            DraftField::Address => "address",
            DraftField::City => "city",
            DraftField::State => "state",
            DraftField::ZipCode => "zipCode",
            DraftField::HomeType => "homeType",
            DraftField::OwnRent => "ownRent",
            DraftField::HasYard => "hasYard",
            DraftField::FencedYard => "fencedYard",
            DraftField::HouseholdMembers => "householdMembers",
            DraftField::OtherPets => "otherPets",
            DraftField::PetsDetails => "petsDetails",
            DraftField::PreviousDogs => "previousDogs",
            DraftField::ReasonForAdopting => "reasonForAdopting",
            DraftField::ExercisePlan => "exercisePlan",
            DraftField::TrainingPlan => "trainingPlan",
            DraftField::WorkSchedule => "workSchedule",
            DraftField::CareArrangements => "careArrangements",
            DraftField::TermsAccepted => "termsAccepted",
        }
    }

    /// Resolves a binding key. Unknown keys yield `None`; callers treat the
    /// edit as a no-op.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().find(|field| field.key() == key).copied()
    }

    /// Short name used in validation messages.
    pub fn name(self) -> &'static str {
        match self {
            DraftField::FirstName => "First name",
            DraftField::LastName => "Last name",
            DraftField::Email => "Email",
            DraftField::Phone => "Phone number",
            DraftField::Address => "Street address",
            DraftField::City => "City",
            DraftField::State => "State",
            DraftField::ZipCode => "ZIP code",
            DraftField::HomeType => "Home type",
            DraftField::OwnRent => "Own/rent answer",
            DraftField::HasYard => "Yard answer",
            DraftField::FencedYard => "Yard fencing answer",
            DraftField::HouseholdMembers => "Household size",
            DraftField::OtherPets => "Other-pets answer",
            DraftField::PetsDetails => "Current-pets details",
            DraftField::PreviousDogs => "Previous-dogs answer",
            DraftField::ReasonForAdopting => "Reason for adopting",
            DraftField::ExercisePlan => "Exercise plan",
            DraftField::TrainingPlan => "Training plan",
            DraftField::WorkSchedule => "Work schedule",
            DraftField::CareArrangements => "Care arrangements",
            DraftField::TermsAccepted => "Terms agreement",
        }
    }

    /// Question shown when prompting for the field.
    pub fn label(self) -> &'static str {
        match self {
            DraftField::FirstName => "First Name",
            DraftField::LastName => "Last Name",
            DraftField::Email => "Email",
            DraftField::Phone => "Phone Number",
            DraftField::Address => "Street Address",
            DraftField::City => "City",
            DraftField::State => "State",
            DraftField::ZipCode => "ZIP Code",
            DraftField::HomeType => "What type of home do you live in?",
            DraftField::OwnRent => "Do you own or rent your home?",
            DraftField::HasYard => "Do you have a yard?",
            DraftField::FencedYard => "Is your yard fully fenced?",
            DraftField::HouseholdMembers => {
                "How many people live in your household (including yourself)?"
            }
            DraftField::OtherPets => "Do you have other pets?",
            DraftField::PetsDetails => {
                "Please tell us about your current pets (type, age, temperament)"
            }
            DraftField::PreviousDogs => "Have you owned dogs before?",
            DraftField::ReasonForAdopting => "Why do you want to adopt a puppy?",
            DraftField::ExercisePlan => "How do you plan to exercise your puppy?",
            DraftField::TrainingPlan => "What are your plans for training your new puppy?",
            DraftField::WorkSchedule => "Describe your typical work schedule or routine",
            DraftField::CareArrangements => {
                "How will you care for the puppy when you're away from home (work, travel, etc.)?"
            }
            DraftField::TermsAccepted => {
                "I certify that all information provided is true and accurate"
            }
        }
    }
}

/// One in-progress adoption application.
///
/// Every field defaults to the empty string (`false` for the terms flag);
/// absence is always the empty value, never an `Option`. Updates go through
/// [`ApplicationDraft::with_field`], which replaces exactly one field and
/// returns a fresh value, so callers relying on identity see each edit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub home_type: String,
    pub own_rent: String,
    pub has_yard: String,
    pub fenced_yard: String,
    pub household_members: String,
    pub other_pets: String,
    pub pets_details: String,
    pub previous_dogs: String,
    pub reason_for_adopting: String,
    pub exercise_plan: String,
    pub training_plan: String,
    pub work_schedule: String,
    pub care_arrangements: String,
    pub terms_accepted: bool,
}

impl ApplicationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with exactly one field replaced.
    ///
    /// The terms flag accepts yes/no, true/false, and 1/0 spellings; anything
    /// else reads as `false`.
    #[must_use]
    pub fn with_field(&self, field: DraftField, value: &str) -> Self {
        let mut next = self.clone();
        match field {
            DraftField::FirstName => next.first_name = value.to_string(),
            DraftField::LastName => next.last_name = value.to_string(),
            DraftField::Email => next.email = value.to_string(),
            DraftField::Phone => next.phone = value.to_string(),
            DraftField::Address => next.address = value.to_string(),
            DraftField::City => next.city = value.to_string(),
            DraftField::State => next.state = value.to_string(),
            DraftField::ZipCode => next.zip_code = value.to_string(),
            DraftField::HomeType => next.home_type = value.to_string(),
            DraftField::OwnRent => next.own_rent = value.to_string(),
            DraftField::HasYard => next.has_yard = value.to_string(),
            DraftField::FencedYard => next.fenced_yard = value.to_string(),
            DraftField::HouseholdMembers => next.household_members = value.to_string(),
            DraftField::OtherPets => next.other_pets = value.to_string(),
            DraftField::PetsDetails => next.pets_details = value.to_string(),
            DraftField::PreviousDogs => next.previous_dogs = value.to_string(),
            DraftField::ReasonForAdopting => next.reason_for_adopting = value.to_string(),
            DraftField::ExercisePlan => next.exercise_plan = value.to_string(),
            DraftField::TrainingPlan => next.training_plan = value.to_string(),
            DraftField::WorkSchedule => next.work_schedule = value.to_string(),
            DraftField::CareArrangements => next.care_arrangements = value.to_string(),
            DraftField::TermsAccepted => next.terms_accepted = parse_flag(value),
        }
        next
    }

    /// Current value for a field, booleans spelled `true`/`false`.
    pub fn value(&self, field: DraftField) -> String {
        match field {
            DraftField::FirstName => self.first_name.clone(),
            DraftField::LastName => self.last_name.clone(),
            DraftField::Email => self.email.clone(),
            DraftField::Phone => self.phone.clone(),
            DraftField::Address => self.address.clone(),
            DraftField::City => self.city.clone(),
            DraftField::State => self.state.clone(),
            DraftField::ZipCode => self.zip_code.clone(),
            DraftField::HomeType => self.home_type.clone(),
            DraftField::OwnRent => self.own_rent.clone(),
            DraftField::HasYard => self.has_yard.clone(),
            DraftField::FencedYard => self.fenced_yard.clone(),
            DraftField::HouseholdMembers => self.household_members.clone(),
            DraftField::OtherPets => self.other_pets.clone(),
            DraftField::PetsDetails => self.pets_details.clone(),
            DraftField::PreviousDogs => self.previous_dogs.clone(),
            DraftField::ReasonForAdopting => self.reason_for_adopting.clone(),
            DraftField::ExercisePlan => self.exercise_plan.clone(),
            DraftField::TrainingPlan => self.training_plan.clone(),
            DraftField::WorkSchedule => self.work_schedule.clone(),
            DraftField::CareArrangements => self.care_arrangements.clone(),
            DraftField::TermsAccepted => self.terms_accepted.to_string(),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "true" | "1"
    )
}
