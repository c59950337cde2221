use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use skyvoyage_shared::Masked;
use std::fmt;
use std::str::FromStr;

use crate::CoreError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl FromStr for Gender {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(CoreError::UnknownValue {
                kind: "gender",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum MealPreference {
    #[default]
    Regular,
    Vegetarian,
    Vegan,
    Kosher,
    Halal,
    #[serde(rename = "Gluten Free")]
    GlutenFree,
}

impl fmt::Display for MealPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MealPreference::Regular => "Regular",
            MealPreference::Vegetarian => "Vegetarian",
            MealPreference::Vegan => "Vegan",
            MealPreference::Kosher => "Kosher",
            MealPreference::Halal => "Halal",
            MealPreference::GlutenFree => "Gluten Free",
        };
        f.write_str(label)
    }
}

/// In-progress passenger record collected by the booking form.
///
/// Position 0 in a draft list is the primary contact.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PassengerDraft {
    /// Zero-based position in the draft list
    pub index: usize,
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<NaiveDate>,
    pub passport_number: Option<Masked<String>>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub special_assistance: bool,
    pub meal_preference: MealPreference,
}

/// Single-field edit coming from the passenger form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassengerField {
    FirstName(String),
    LastName(String),
    Gender(Option<Gender>),
    DateOfBirth(Option<NaiveDate>),
    PassportNumber(Option<String>),
    Email(String),
    Phone(String),
    SpecialAssistance(bool),
    MealPreference(MealPreference),
}

impl PassengerDraft {
    /// Empty draft. Only the primary contact starts with (empty) contact fields.
    pub fn blank(index: usize) -> Self {
        let contact = if index == 0 { Some(String::new()) } else { None };
        Self {
            index,
            email: contact.clone(),
            phone: contact,
            ..Default::default()
        }
    }

    pub fn is_primary_contact(&self) -> bool {
        self.index == 0
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    pub fn apply(&mut self, field: PassengerField) {
        match field {
            PassengerField::FirstName(value) => self.first_name = value,
            PassengerField::LastName(value) => self.last_name = value,
            PassengerField::Gender(value) => self.gender = value,
            PassengerField::DateOfBirth(value) => self.date_of_birth = value,
            PassengerField::PassportNumber(value) => {
                self.passport_number = value.filter(|v| !v.trim().is_empty()).map(Masked::new)
            }
            PassengerField::Email(value) => self.email = Some(value),
            PassengerField::Phone(value) => self.phone = Some(value),
            PassengerField::SpecialAssistance(value) => self.special_assistance = value,
            PassengerField::MealPreference(value) => self.meal_preference = value,
        }
    }
}

/// `count` blank drafts indexed from zero
pub fn blank_drafts(count: usize) -> Vec<PassengerDraft> {
    (0..count).map(PassengerDraft::blank).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_drafts_contact_only_on_primary() {
        let drafts = blank_drafts(3);
        assert_eq!(drafts.len(), 3);
        assert!(drafts[0].is_primary_contact());
        assert_eq!(drafts[0].email.as_deref(), Some(""));
        assert_eq!(drafts[0].phone.as_deref(), Some(""));
        assert!(drafts[1].email.is_none());
        assert!(drafts[2].phone.is_none());
        assert_eq!(drafts[2].index, 2);
        assert_eq!(drafts[1].meal_preference, MealPreference::Regular);
    }

    #[test]
    fn test_apply_field_updates() {
        let mut draft = PassengerDraft::blank(0);
        draft.apply(PassengerField::FirstName("Ada".to_string()));
        draft.apply(PassengerField::LastName("Lovelace".to_string()));
        draft.apply(PassengerField::Gender(Some(Gender::Female)));
        draft.apply(PassengerField::DateOfBirth(NaiveDate::from_ymd_opt(1990, 12, 10)));
        draft.apply(PassengerField::PassportNumber(Some("X1234567".to_string())));
        draft.apply(PassengerField::SpecialAssistance(true));
        draft.apply(PassengerField::MealPreference(MealPreference::GlutenFree));

        assert_eq!(draft.full_name(), "Ada Lovelace");
        assert_eq!(draft.gender, Some(Gender::Female));
        assert_eq!(draft.passport_number.as_ref().map(|p| p.expose().as_str()), Some("X1234567"));
        assert!(draft.special_assistance);
        assert_eq!(draft.meal_preference, MealPreference::GlutenFree);

        draft.apply(PassengerField::PassportNumber(Some("  ".to_string())));
        assert!(draft.passport_number.is_none());
    }

    #[test]
    fn test_debug_masks_passport() {
        let mut draft = PassengerDraft::blank(1);
        draft.apply(PassengerField::PassportNumber(Some("X1234567".to_string())));
        let debug = format!("{:?}", draft);
        assert!(!debug.contains("X1234567"));
    }

    #[test]
    fn test_minimal_json_draft() {
        let draft: PassengerDraft = serde_json::from_str(
            r#"{"index": 1, "first_name": "Lin", "last_name": "Chen", "gender": "other",
                "date_of_birth": "1988-04-02", "meal_preference": "Gluten Free"}"#,
        )
        .unwrap();
        assert_eq!(draft.index, 1);
        assert_eq!(draft.gender, Some(Gender::Other));
        assert_eq!(draft.meal_preference, MealPreference::GlutenFree);
        assert!(draft.email.is_none());
        assert!(!draft.special_assistance);
    }

    #[test]
    fn test_gender_parsing() {
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
        assert!("".parse::<Gender>().is_err());
    }
}
