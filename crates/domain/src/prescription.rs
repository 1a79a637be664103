use crate::{AgeCategory, Difficulty, Goal, Mode, SessionLength};

pub const MIN_SETS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetsReps {
    pub sets: u32,
    pub reps: &'static str,
    pub rest: &'static str,
}

impl Goal {
    #[must_use]
    pub fn base_sets_reps(self) -> SetsReps {
        match self {
            Goal::LoseWeight => SetsReps {
                sets: 3,
                reps: "12-15",
                rest: "30-45s",
            },
            Goal::BuildMuscle => SetsReps {
                sets: 4,
                reps: "8-12",
                rest: "60-90s",
            },
            Goal::GetFit => SetsReps {
                sets: 3,
                reps: "10-12",
                rest: "45-60s",
            },
            Goal::StayHealthy => SetsReps {
                sets: 2,
                reps: "12-15",
                rest: "45-60s",
            },
            Goal::Strength => SetsReps {
                sets: 5,
                reps: "3-6",
                rest: "120-180s",
            },
        }
    }
}

/// Sets, reps and rest for one training day.
///
/// Beginners do one set less and older users get fewer sets. Never less than [`MIN_SETS`].
/// Reps and rest are taken from the goal unchanged.
#[must_use]
pub fn sets_reps(
    goal: Goal,
    experience: Option<Difficulty>,
    age: Option<AgeCategory>,
) -> SetsReps {
    let base = goal.base_sets_reps();

    let mut sets = base.sets;
    if experience == Some(Difficulty::Beginner) {
        sets = sets.saturating_sub(1).max(MIN_SETS);
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let sets = ((f64::from(sets) * age_modifier(age).sets).round() as u32).max(MIN_SETS);

    SetsReps { sets, ..base }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeModifier {
    pub sets: f64,
    /// Not applied to the rest ranges yet.
    pub rest: f64,
}

#[must_use]
pub fn age_modifier(age: Option<AgeCategory>) -> AgeModifier {
    match age {
        Some(AgeCategory::Over50) => AgeModifier {
            sets: 0.7,
            rest: 1.5,
        },
        Some(AgeCategory::From40To50) => AgeModifier {
            sets: 0.85,
            rest: 1.25,
        },
        _ => AgeModifier {
            sets: 1.0,
            rest: 1.0,
        },
    }
}

#[must_use]
pub fn duration_modifier(session_length: Option<SessionLength>) -> f64 {
    match session_length {
        Some(SessionLength::VeryShort) => 0.5,
        Some(SessionLength::Short) => 0.75,
        Some(SessionLength::Medium) | None => 1.0,
        Some(SessionLength::Long) => 1.25,
    }
}

/// Maximum number of exercises selected per muscle and day.
#[must_use]
pub fn exercise_quota(mode: Mode, session_length: Option<SessionLength>) -> usize {
    #[allow(clippy::match_same_arms)]
    let base = match mode {
        Mode::Pilates => 2.0,
        Mode::Bodybuilding | Mode::Calisthenics => 2.0,
    };

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let quota = (base * duration_modifier(session_length)).round() as usize;

    quota.max(1)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;

    #[rstest]
    #[case(Goal::BuildMuscle, Some(Difficulty::Intermediate), None, 4)]
    #[case(Goal::BuildMuscle, Some(Difficulty::Beginner), None, 3)]
    #[case(Goal::BuildMuscle, Some(Difficulty::Intermediate), Some(AgeCategory::From40To50), 3)]
    #[case(Goal::BuildMuscle, Some(Difficulty::Intermediate), Some(AgeCategory::Over50), 3)]
    #[case(Goal::Strength, Some(Difficulty::Advanced), Some(AgeCategory::From40To50), 4)]
    #[case(Goal::Strength, Some(Difficulty::Advanced), Some(AgeCategory::Over50), 4)]
    #[case(Goal::Strength, Some(Difficulty::Beginner), Some(AgeCategory::From18To30), 4)]
    #[case(Goal::StayHealthy, Some(Difficulty::Beginner), None, 2)]
    #[case(Goal::StayHealthy, Some(Difficulty::Beginner), Some(AgeCategory::Over50), 2)]
    #[case(Goal::LoseWeight, None, Some(AgeCategory::Over50), 2)]
    fn test_sets_reps_sets(
        #[case] goal: Goal,
        #[case] experience: Option<Difficulty>,
        #[case] age: Option<AgeCategory>,
        #[case] expected: u32,
    ) {
        assert_eq!(sets_reps(goal, experience, age).sets, expected);
    }

    #[test]
    fn test_sets_reps_never_below_minimum() {
        for goal in Goal::iter() {
            for experience in Difficulty::iter().map(Some).chain([None]) {
                for age in AgeCategory::iter().map(Some).chain([None]) {
                    assert!(sets_reps(goal, experience, age).sets >= MIN_SETS);
                }
            }
        }
    }

    #[test]
    fn test_sets_reps_keeps_reps_and_rest() {
        for goal in Goal::iter() {
            let base = goal.base_sets_reps();
            let result = sets_reps(goal, Some(Difficulty::Beginner), Some(AgeCategory::Over50));
            assert_eq!((result.reps, result.rest), (base.reps, base.rest));
        }
    }

    #[test]
    fn test_build_muscle_base() {
        assert_eq!(
            Goal::BuildMuscle.base_sets_reps(),
            SetsReps {
                sets: 4,
                reps: "8-12",
                rest: "60-90s"
            }
        );
    }

    #[rstest]
    #[case(Some(AgeCategory::Over50), 0.7, 1.5)]
    #[case(Some(AgeCategory::From40To50), 0.85, 1.25)]
    #[case(Some(AgeCategory::From30To40), 1.0, 1.0)]
    #[case(None, 1.0, 1.0)]
    fn test_age_modifier(
        #[case] age: Option<AgeCategory>,
        #[case] sets: f64,
        #[case] rest: f64,
    ) {
        assert_eq!(age_modifier(age), AgeModifier { sets, rest });
    }

    #[rstest]
    #[case(Some(SessionLength::VeryShort), 1)]
    #[case(Some(SessionLength::Short), 2)]
    #[case(Some(SessionLength::Medium), 2)]
    #[case(Some(SessionLength::Long), 3)]
    #[case(None, 2)]
    fn test_exercise_quota(#[case] session_length: Option<SessionLength>, #[case] expected: usize) {
        for mode in Mode::iter() {
            assert_eq!(exercise_quota(mode, session_length), expected);
        }
    }
}
