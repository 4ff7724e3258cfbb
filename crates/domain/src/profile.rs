//! Learner profile types and submission normalization.
//!
//! The questionnaire edits a [`ProfileDraft`]; submission resolves it into an
//! immutable [`UserProfile`] whose serde field names match the wire contract
//! of the scenario service exactly.

use serde::{Deserialize, Serialize};

/// Visa categories offered by the questionnaire, in display order.
pub const VISA_TYPES: &[&str] = &[
    "C4", "D2", "D3", "D4", "D10", "E4", "E7", "E8", "E9", "H2", "F1", "F2", "F3", "F4", "F6",
    "G1", "Others",
];

/// The visa option that switches the form to free-text entry.
pub const VISA_OTHERS: &str = "Others";

/// Sentinel persisted as the stay duration for learners living abroad.
pub const STAY_NOT_APPLICABLE: &str = "n/a";

/// Whether the learner currently lives in Korea.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Residency {
    Yes,
    #[default]
    No,
}

impl Residency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Residency::Yes => "Yes",
            Residency::No => "No",
        }
    }

    /// Parse a form select value. Anything other than "Yes" means "No".
    pub fn from_select(value: &str) -> Self {
        if value == "Yes" {
            Residency::Yes
        } else {
            Residency::No
        }
    }
}

/// The resolved learner profile, created once per session at form submission
/// and immutable afterward.
///
/// Serde names are the wire names the scenario service expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Nationality")]
    pub nationality: String,
    #[serde(rename = "NativeLanguage")]
    pub native_language: String,
    #[serde(rename = "Living_in_Korea")]
    pub living_in_korea: Residency,
    #[serde(rename = "Duration_of_Stay")]
    pub stay_duration: String,
    #[serde(rename = "Visa_Type")]
    pub visa_type: String,
    #[serde(rename = "Industry")]
    pub industry: String,
    #[serde(rename = "Work_Experience")]
    pub work_experience: String,
    #[serde(rename = "Korean_Test_Score")]
    pub korean_test_score: String,
    #[serde(rename = "Duration_of_Korean_Study")]
    pub korean_study_duration: String,
    #[serde(rename = "Interests")]
    pub interests: String,
    #[serde(rename = "Hobbies")]
    pub hobbies: String,
}

/// Mutable questionnaire record. Every field edit updates exactly one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub nationality: String,
    pub native_language: String,
    pub living_in_korea: Residency,
    pub stay_duration: String,
    pub visa_type: String,
    pub custom_visa: String,
    pub industry: String,
    pub work_experience: String,
    pub korean_test_score: String,
    pub korean_study_duration: String,
    pub interests: String,
    pub hobbies: String,
    /// Data-collection consent. Defaults to set; submission is dropped
    /// without it.
    pub consented: bool,
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            nationality: String::new(),
            native_language: String::new(),
            living_in_korea: Residency::No,
            stay_duration: String::new(),
            visa_type: String::new(),
            custom_visa: String::new(),
            industry: String::new(),
            work_experience: String::new(),
            korean_test_score: String::new(),
            korean_study_duration: String::new(),
            interests: String::new(),
            hobbies: String::new(),
            consented: true,
        }
    }
}

impl ProfileDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the draft into the profile that gets submitted.
    ///
    /// Returns `None` when consent is unset (the submission is silently
    /// dropped). Otherwise applies the two substitutions the form promises:
    /// the "Others" visa choice resolves to the free-text override, and the
    /// stay duration is forced to [`STAY_NOT_APPLICABLE`] for learners who
    /// do not live in Korea, regardless of what was typed.
    pub fn resolve(&self) -> Option<UserProfile> {
        if !self.consented {
            return None;
        }

        let visa_type = if self.visa_type == VISA_OTHERS {
            self.custom_visa.clone()
        } else {
            self.visa_type.clone()
        };

        let stay_duration = match self.living_in_korea {
            Residency::Yes => self.stay_duration.clone(),
            Residency::No => STAY_NOT_APPLICABLE.to_string(),
        };

        Some(UserProfile {
            name: self.name.clone(),
            nationality: self.nationality.clone(),
            native_language: self.native_language.clone(),
            living_in_korea: self.living_in_korea,
            stay_duration,
            visa_type,
            industry: self.industry.clone(),
            work_experience: self.work_experience.clone(),
            korean_test_score: self.korean_test_score.clone(),
            korean_study_duration: self.korean_study_duration.clone(),
            interests: self.interests.clone(),
            hobbies: self.hobbies.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> ProfileDraft {
        ProfileDraft {
            name: "Minji".to_string(),
            nationality: "Vietnam".to_string(),
            native_language: "Vietnamese".to_string(),
            living_in_korea: Residency::Yes,
            stay_duration: "2 years".to_string(),
            visa_type: "E7".to_string(),
            industry: "IT".to_string(),
            work_experience: "3 years".to_string(),
            korean_test_score: "TOPIK 3".to_string(),
            korean_study_duration: "1 year".to_string(),
            interests: "Travel".to_string(),
            hobbies: "Soccer".to_string(),
            ..ProfileDraft::default()
        }
    }

    mod consent_tests {
        use super::*;

        #[test]
        fn consent_defaults_to_set() {
            assert!(ProfileDraft::new().consented);
        }

        #[test]
        fn withdrawn_consent_drops_the_submission() {
            let mut draft = filled_draft();
            draft.consented = false;
            assert_eq!(draft.resolve(), None);
        }
    }

    mod stay_duration_tests {
        use super::*;

        #[test]
        fn living_abroad_forces_the_sentinel() {
            let mut draft = filled_draft();
            draft.living_in_korea = Residency::No;
            draft.stay_duration = "5 years".to_string();

            let profile = draft.resolve().expect("consented draft resolves");
            assert_eq!(profile.stay_duration, STAY_NOT_APPLICABLE);
        }

        #[test]
        fn living_in_korea_keeps_the_typed_duration() {
            let profile = filled_draft().resolve().expect("consented draft resolves");
            assert_eq!(profile.stay_duration, "2 years");
        }
    }

    mod visa_tests {
        use super::*;

        #[test]
        fn others_resolves_to_the_free_text_override() {
            let mut draft = filled_draft();
            draft.visa_type = VISA_OTHERS.to_string();
            draft.custom_visa = "Trainee".to_string();

            let profile = draft.resolve().expect("consented draft resolves");
            assert_eq!(profile.visa_type, "Trainee");
        }

        #[test]
        fn enumerated_visa_is_kept_verbatim() {
            let profile = filled_draft().resolve().expect("consented draft resolves");
            assert_eq!(profile.visa_type, "E7");
        }

        #[test]
        fn others_is_the_last_listed_option() {
            assert_eq!(VISA_TYPES.last(), Some(&VISA_OTHERS));
        }
    }

    #[test]
    fn abroad_with_custom_visa_resolves_both_substitutions() {
        let mut draft = filled_draft();
        draft.living_in_korea = Residency::No;
        draft.visa_type = VISA_OTHERS.to_string();
        draft.custom_visa = "Trainee".to_string();

        let profile = draft.resolve().expect("consented draft resolves");
        assert_eq!(profile.stay_duration, "n/a");
        assert_eq!(profile.visa_type, "Trainee");
    }

    #[test]
    fn profile_serializes_with_wire_field_names() {
        let profile = filled_draft().resolve().expect("consented draft resolves");
        let json = serde_json::to_value(&profile).expect("profile serializes");

        assert_eq!(json["Name"], "Minji");
        assert_eq!(json["NativeLanguage"], "Vietnamese");
        assert_eq!(json["Living_in_Korea"], "Yes");
        assert_eq!(json["Duration_of_Stay"], "2 years");
        assert_eq!(json["Visa_Type"], "E7");
        assert_eq!(json["Duration_of_Korean_Study"], "1 year");
    }
}
