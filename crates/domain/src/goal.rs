use std::str::FromStr;

use log::{debug, warn};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use crate::{Difficulty, Mode};

/// Profile data entered by the user. Only the age category affects plan generation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub age_category: Option<String>,
}

/// Goals as collected by the questionnaire.
///
/// The values are kept as entered. Unknown or missing values are not rejected, they fall back to
/// defaults when the plan is generated.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GoalConfig {
    pub training_style: String,
    pub workout_frequency: String,
    pub experience_level: String,
    pub primary_goal: String,
    pub available_equipment: String,
    pub workout_duration: String,
    pub health_limitations: String,
}

#[derive(
    AsRefStr, Display, EnumIter, EnumString, Clone, Copy, Debug, Default, Eq, Hash, PartialEq,
)]
pub enum Frequency {
    #[strum(to_string = "2-3")]
    TwoToThree,
    #[default]
    #[strum(to_string = "4-5")]
    FourToFive,
    #[strum(to_string = "6-7")]
    SixToSeven,
}

impl Frequency {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Frequency::TwoToThree => "2-3x týždenne",
            Frequency::FourToFive => "4-5x týždenne",
            Frequency::SixToSeven => "6-7x týždenne",
        }
    }
}

#[derive(
    AsRefStr, Display, EnumIter, EnumString, Clone, Copy, Debug, Default, Eq, Hash, PartialEq,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Goal {
    LoseWeight,
    #[default]
    BuildMuscle,
    GetFit,
    StayHealthy,
    Strength,
}

impl Goal {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Goal::LoseWeight => "Chudnutie",
            Goal::BuildMuscle => "Naberanie svalov",
            Goal::GetFit => "Lepšia kondícia",
            Goal::StayHealthy => "Zdravý životný štýl",
            Goal::Strength => "Sila",
        }
    }
}

#[derive(AsRefStr, Display, Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[strum(serialize_all = "kebab-case")]
pub enum EquipmentTier {
    None,
    HomeBasic,
    #[default]
    FullGym,
}

impl EquipmentTier {
    /// Anything other than `none` and `home-basic` means unrestricted equipment.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "none" => EquipmentTier::None,
            "home-basic" => EquipmentTier::HomeBasic,
            _ => EquipmentTier::FullGym,
        }
    }
}

#[derive(AsRefStr, Display, EnumIter, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SessionLength {
    #[strum(to_string = "15-20", serialize = "15-20min")]
    VeryShort,
    #[strum(to_string = "30-45", serialize = "30-45min")]
    Short,
    #[strum(to_string = "45-60", serialize = "45-60min")]
    Medium,
    #[strum(to_string = "60+", serialize = "60+min")]
    Long,
}

#[derive(
    AsRefStr, Display, EnumIter, EnumString, Clone, Copy, Debug, Default, Eq, Hash, PartialEq,
)]
#[strum(serialize_all = "lowercase")]
pub enum HealthLimitation {
    #[default]
    None,
    Back,
    Knees,
    Shoulders,
}

#[derive(AsRefStr, Display, EnumIter, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AgeCategory {
    #[strum(to_string = "under-18")]
    Under18,
    #[strum(to_string = "18-30")]
    From18To30,
    #[strum(to_string = "30-40")]
    From30To40,
    #[strum(to_string = "40-50")]
    From40To50,
    #[strum(to_string = "50+")]
    Over50,
}

/// Goals and profile resolved into typed settings, with all fallbacks applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanSettings {
    /// `None` if the training style is unknown. No exercise is selectable then.
    pub mode: Option<Mode>,
    pub frequency: Frequency,
    /// `None` if the experience level is unknown. Exercises keep their catalog order then.
    pub difficulty: Option<Difficulty>,
    pub goal: Goal,
    pub equipment: EquipmentTier,
    pub session_length: Option<SessionLength>,
    pub limitation: HealthLimitation,
    pub age: Option<AgeCategory>,
}

impl PlanSettings {
    #[must_use]
    pub fn resolve(profile: &UserProfile, goals: &GoalConfig) -> Self {
        let frequency = goals.workout_frequency.parse().unwrap_or_else(|_| {
            warn!(
                "unknown workout frequency \"{}\", using {} split",
                goals.workout_frequency,
                Frequency::default()
            );
            Frequency::default()
        });
        let goal = goals.primary_goal.parse().unwrap_or_else(|_| {
            warn!(
                "unknown primary goal \"{}\", using {} configuration",
                goals.primary_goal,
                Goal::default()
            );
            Goal::default()
        });
        let limitation = if goals.health_limitations.is_empty() {
            HealthLimitation::None
        } else {
            parse_or_warn(&goals.health_limitations, "health limitation").unwrap_or_default()
        };
        let equipment = EquipmentTier::from_key(&goals.available_equipment);
        debug!(
            "equipment \"{}\" resolved to {equipment}",
            goals.available_equipment
        );

        Self {
            mode: match_or_warn(&goals.training_style, "training style"),
            frequency,
            difficulty: match_or_warn(&goals.experience_level, "experience level"),
            goal,
            equipment,
            session_length: parse_or_warn(&goals.workout_duration, "workout duration"),
            limitation,
            age: profile
                .age_category
                .as_deref()
                .and_then(|age| parse_or_warn(age, "age category")),
        }
    }
}

fn parse_or_warn<T: FromStr>(key: &str, field: &str) -> Option<T> {
    match T::from_str(key) {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("unknown {field} \"{key}\"");
            None
        }
    }
}

/// Questionnaire keys are matched exactly, unlike catalog values.
fn match_or_warn<T: IntoEnumIterator + AsRef<str>>(key: &str, field: &str) -> Option<T> {
    let value = T::iter().find(|value| value.as_ref() == key);
    if value.is_none() {
        warn!("unknown {field} \"{key}\"");
    }
    value
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn goals() -> GoalConfig {
        GoalConfig {
            training_style: String::from("bodybuilding"),
            workout_frequency: String::from("6-7"),
            experience_level: String::from("intermediate"),
            primary_goal: String::from("build-muscle"),
            available_equipment: String::from("full"),
            workout_duration: String::from("45-60"),
            health_limitations: String::from("none"),
        }
    }

    #[test]
    fn test_resolve() {
        let profile = UserProfile {
            name: String::from("Alice"),
            age_category: Some(String::from("40-50")),
        };
        assert_eq!(
            PlanSettings::resolve(&profile, &goals()),
            PlanSettings {
                mode: Some(Mode::Bodybuilding),
                frequency: Frequency::SixToSeven,
                difficulty: Some(Difficulty::Intermediate),
                goal: Goal::BuildMuscle,
                equipment: EquipmentTier::FullGym,
                session_length: Some(SessionLength::Medium),
                limitation: HealthLimitation::None,
                age: Some(AgeCategory::From40To50),
            }
        );
    }

    #[test]
    fn test_resolve_defaults() {
        assert_eq!(
            PlanSettings::resolve(&UserProfile::default(), &GoalConfig::default()),
            PlanSettings {
                mode: None,
                frequency: Frequency::FourToFive,
                difficulty: None,
                goal: Goal::BuildMuscle,
                equipment: EquipmentTier::FullGym,
                session_length: None,
                limitation: HealthLimitation::None,
                age: None,
            }
        );
    }

    #[rstest]
    #[case("none", EquipmentTier::None)]
    #[case("home-basic", EquipmentTier::HomeBasic)]
    #[case("full-gym", EquipmentTier::FullGym)]
    #[case("", EquipmentTier::FullGym)]
    fn test_equipment_tier_from_key(#[case] key: &str, #[case] expected: EquipmentTier) {
        assert_eq!(EquipmentTier::from_key(key), expected);
    }

    #[rstest]
    #[case("15-20", SessionLength::VeryShort)]
    #[case("15-20min", SessionLength::VeryShort)]
    #[case("30-45", SessionLength::Short)]
    #[case("60+", SessionLength::Long)]
    fn test_session_length_from_str(#[case] key: &str, #[case] expected: SessionLength) {
        assert_eq!(SessionLength::from_str(key), Ok(expected));
    }

    #[rstest]
    #[case("lose-weight", Goal::LoseWeight)]
    #[case("build-muscle", Goal::BuildMuscle)]
    #[case("get-fit", Goal::GetFit)]
    #[case("stay-healthy", Goal::StayHealthy)]
    #[case("strength", Goal::Strength)]
    fn test_goal_from_str(#[case] key: &str, #[case] expected: Goal) {
        assert_eq!(Goal::from_str(key), Ok(expected));
        assert_eq!(expected.to_string(), key);
    }

    #[test]
    fn test_unknown_limitation_is_none() {
        let goals = GoalConfig {
            health_limitations: String::from("wrists"),
            ..goals()
        };
        assert_eq!(
            PlanSettings::resolve(&UserProfile::default(), &goals).limitation,
            HealthLimitation::None
        );
    }

    #[rstest]
    #[case("PILATES", "Beginner")]
    #[case("Bodybuilding", "ADVANCED")]
    #[case(" pilates", "beginner ")]
    fn test_resolve_keys_are_case_sensitive(#[case] style: &str, #[case] experience: &str) {
        let goals = GoalConfig {
            training_style: style.to_string(),
            experience_level: experience.to_string(),
            ..goals()
        };
        let settings = PlanSettings::resolve(&UserProfile::default(), &goals);
        assert_eq!(settings.mode, None);
        assert_eq!(settings.difficulty, None);
    }

    #[rstest]
    #[case("3-4", "bulk")]
    #[case("", "")]
    fn test_resolve_unknown_frequency_and_goal(#[case] frequency: &str, #[case] goal: &str) {
        let goals = GoalConfig {
            workout_frequency: frequency.to_string(),
            primary_goal: goal.to_string(),
            ..goals()
        };
        let settings = PlanSettings::resolve(&UserProfile::default(), &goals);
        assert_eq!(settings.frequency, Frequency::FourToFive);
        assert_eq!(settings.goal, Goal::BuildMuscle);
    }
}
