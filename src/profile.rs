//! # User Profile
//!
//! The flat record collected by the onboarding wizard.
//!
//! [`ProfileDraft`] is the in-progress form state: every field starts unset
//! (or as empty text) and is filled step by step. Once the wizard finishes,
//! the draft is frozen into a [`UserProfile`].
//!
//! Numeric fields (age, height, weight) are kept as the raw text the user
//! typed. No range checks are applied, so a negative age is accepted as-is.

use serde::{Deserialize, Serialize};

/// What the user wants to get out of training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    Maintain,
    Activity,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Lose, Goal::Maintain, Goal::Activity];

    pub fn label(self) -> &'static str {
        match self {
            Goal::Lose => "Похудеть",
            Goal::Maintain => "Поддерживать форму",
            Goal::Activity => "Больше двигаться",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Goal::Lose => "📉",
            Goal::Maintain => "🎯",
            Goal::Activity => "⚡",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Мужчина",
            Gender::Female => "Женщина",
        }
    }
}

/// Self-reported everyday activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Low,
    Medium,
    High,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 3] = [
        ActivityLevel::Low,
        ActivityLevel::Medium,
        ActivityLevel::High,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Low => "Почти не двигаюсь",
            ActivityLevel::Medium => "Иногда хожу пешком",
            ActivityLevel::High => "Регулярно активен",
        }
    }
}

/// How much time per day the user is willing to spend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkoutTime {
    #[serde(rename = "5 мин")]
    Five,
    #[serde(rename = "10 мин")]
    Ten,
    #[serde(rename = "15 мин")]
    Fifteen,
}

impl WorkoutTime {
    pub const ALL: [WorkoutTime; 3] = [WorkoutTime::Five, WorkoutTime::Ten, WorkoutTime::Fifteen];

    pub fn label(self) -> &'static str {
        match self {
            WorkoutTime::Five => "5 мин",
            WorkoutTime::Ten => "10 мин",
            WorkoutTime::Fifteen => "15 мин",
        }
    }

    pub fn minutes(self) -> u32 {
        match self {
            WorkoutTime::Five => 5,
            WorkoutTime::Ten => 10,
            WorkoutTime::Fifteen => 15,
        }
    }
}

/// Completed onboarding answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub goal: Goal,
    pub gender: Gender,
    /// Raw numeric input, unvalidated
    pub age: String,
    /// Raw numeric input in centimetres, unvalidated
    pub height: String,
    /// Raw numeric input in kilograms, unvalidated
    pub weight: String,
    pub activity_level: ActivityLevel,
    pub workout_time: WorkoutTime,
    pub agreed_to_disclaimer: bool,
}

impl UserProfile {
    pub fn age_years(&self) -> Option<i32> {
        self.age.trim().parse().ok()
    }

    pub fn height_cm(&self) -> Option<i32> {
        self.height.trim().parse().ok()
    }

    pub fn weight_kg(&self) -> Option<i32> {
        self.weight.trim().parse().ok()
    }
}

/// In-progress answers while the wizard is running.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub goal: Option<Goal>,
    pub gender: Option<Gender>,
    pub age: String,
    pub height: String,
    pub weight: String,
    pub activity_level: Option<ActivityLevel>,
    pub workout_time: Option<WorkoutTime>,
    pub agreed_to_disclaimer: bool,
}

impl ProfileDraft {
    /// Freeze the draft into a profile. Returns `None` while any answer is
    /// still missing.
    pub fn build(&self) -> Option<UserProfile> {
        if self.age.is_empty() || self.height.is_empty() || self.weight.is_empty() {
            return None;
        }
        if !self.agreed_to_disclaimer {
            return None;
        }

        Some(UserProfile {
            goal: self.goal?,
            gender: self.gender?,
            age: self.age.clone(),
            height: self.height.clone(),
            weight: self.weight.clone(),
            activity_level: self.activity_level?,
            workout_time: self.workout_time?,
            agreed_to_disclaimer: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> ProfileDraft {
        ProfileDraft {
            goal: Some(Goal::Maintain),
            gender: Some(Gender::Male),
            age: "41".to_string(),
            height: "180".to_string(),
            weight: "82".to_string(),
            activity_level: Some(ActivityLevel::High),
            workout_time: Some(WorkoutTime::Fifteen),
            agreed_to_disclaimer: true,
        }
    }

    #[test]
    fn test_build_complete_draft() {
        let profile = filled_draft().build().expect("complete draft builds");
        assert_eq!(profile.goal, Goal::Maintain);
        assert_eq!(profile.age_years(), Some(41));
        assert_eq!(profile.height_cm(), Some(180));
        assert_eq!(profile.weight_kg(), Some(82));
        assert!(profile.agreed_to_disclaimer);
    }

    #[test]
    fn test_build_requires_every_answer() {
        let mut draft = filled_draft();
        draft.workout_time = None;
        assert!(draft.build().is_none());

        let mut draft = filled_draft();
        draft.weight.clear();
        assert!(draft.build().is_none());

        let mut draft = filled_draft();
        draft.agreed_to_disclaimer = false;
        assert!(draft.build().is_none());
    }

    #[test]
    fn test_negative_numbers_are_accepted() {
        let mut draft = filled_draft();
        draft.age = "-3".to_string();
        let profile = draft.build().expect("no range validation");
        assert_eq!(profile.age_years(), Some(-3));
    }

    #[test]
    fn test_malformed_number_parses_to_none() {
        let mut draft = filled_draft();
        draft.height = "1-8".to_string();
        let profile = draft.build().expect("raw text is kept");
        assert_eq!(profile.height_cm(), None);
        assert_eq!(profile.height, "1-8");
    }

    #[test]
    fn test_profile_serializes_with_original_keys() {
        let profile = filled_draft().build().expect("complete draft builds");
        let json = serde_json::to_value(&profile).expect("serialize");
        assert_eq!(json["goal"], "maintain");
        assert_eq!(json["activityLevel"], "high");
        assert_eq!(json["workoutTime"], "15 мин");
        assert_eq!(json["agreedToDisclaimer"], true);
    }

    #[test]
    fn test_workout_time_minutes() {
        let minutes: Vec<u32> = WorkoutTime::ALL.iter().map(|t| t.minutes()).collect();
        assert_eq!(minutes, vec![5, 10, 15]);
    }
}
