use adoption_core::application::{AdoptionWizard, DraftField, Navigator, Step};

/// Navigator double that records every routing call.
#[derive(Default)]
pub struct RecordingNavigator {
    pub destinations: Vec<String>,
    pub back_calls: usize,
}

impl Navigator for RecordingNavigator {
    fn back(&mut self) {
        self.back_calls += 1;
    }

    fn goto(&mut self, destination: &str) {
        self.destinations.push(destination.to_string());
    }
}

/// Wizard advanced to the review step with a complete, valid draft.
pub fn wizard_on_review_step() -> AdoptionWizard {
    let mut wizard = AdoptionWizard::new();
    let answers = [
        (DraftField::FirstName, "Jordan"),
        (DraftField::LastName, "Reyes"),
        (DraftField::Email, "jordan@example.com"),
        (DraftField::Phone, "555-0102"),
        (DraftField::Address, "12 Alder Way"),
        (DraftField::City, "Denver"),
        (DraftField::State, "CO"),
        (DraftField::ZipCode, "80202"),
        (DraftField::HomeType, "house"),
        (DraftField::OwnRent, "own"),
        (DraftField::HasYard, "yes"),
        (DraftField::FencedYard, "partial"),
        (DraftField::HouseholdMembers, "3"),
        (DraftField::OtherPets, "no"),
        (DraftField::PreviousDogs, "past"),
        (DraftField::ReasonForAdopting, "Companionship for our kids."),
        (DraftField::ExercisePlan, "Morning walks and a daily run."),
        (DraftField::TrainingPlan, "Weekly obedience classes."),
        (DraftField::WorkSchedule, "Hybrid, home three days a week."),
        (DraftField::CareArrangements, "A neighbour covers travel days."),
    ];
    for (field, value) in answers {
        wizard.set_field(field, value);
    }
    for _ in 0..3 {
        wizard.go_next().expect("each filled step should validate");
    }
    assert_eq!(wizard.step(), Step::ReviewSubmit);
    wizard
}
