use crate::{Frequency, Muscle};

pub const REST_DAY: &str = "rest";

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MuscleGroup {
    Push,
    Pull,
    Legs,
    Core,
    Upper,
    Lower,
    FullBody,
}

impl MuscleGroup {
    #[must_use]
    pub fn muscles(self) -> &'static [Muscle] {
        match self {
            MuscleGroup::Push => &[Muscle::Chest, Muscle::Shoulders, Muscle::Triceps],
            MuscleGroup::Pull => &[Muscle::Back, Muscle::Biceps],
            MuscleGroup::Legs => &[
                Muscle::Quads,
                Muscle::Hamstrings,
                Muscle::Glutes,
                Muscle::Calves,
            ],
            MuscleGroup::Core => &[Muscle::Abs, Muscle::Obliques, Muscle::LowerBack],
            MuscleGroup::Upper => &[
                Muscle::Chest,
                Muscle::Back,
                Muscle::Shoulders,
                Muscle::Biceps,
                Muscle::Triceps,
            ],
            MuscleGroup::Lower => &[
                Muscle::Quads,
                Muscle::Hamstrings,
                Muscle::Glutes,
                Muscle::Calves,
                Muscle::Abs,
            ],
            MuscleGroup::FullBody => &[
                Muscle::Chest,
                Muscle::Back,
                Muscle::Shoulders,
                Muscle::Quads,
                Muscle::Hamstrings,
                Muscle::Abs,
            ],
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct DayTemplate {
    pub name: &'static str,
    pub groups: &'static [MuscleGroup],
}

impl DayTemplate {
    /// Muscles of all groups in order, each muscle once.
    #[must_use]
    pub fn muscles(&self) -> Vec<Muscle> {
        let mut muscles: Vec<Muscle> = vec![];
        for muscle in self.groups.iter().flat_map(|g| g.muscles()) {
            if !muscles.contains(muscle) {
                muscles.push(*muscle);
            }
        }
        muscles
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct SplitTemplate {
    pub name: &'static str,
    pub days: &'static [DayTemplate],
    pub rotation: [&'static str; 7],
}

impl SplitTemplate {
    /// Training day labels of the weekly rotation, rest days skipped.
    pub fn training_days(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rotation.iter().copied().filter(|day| *day != REST_DAY)
    }
}

impl Frequency {
    #[must_use]
    pub fn split(self) -> &'static SplitTemplate {
        match self {
            Frequency::TwoToThree => &FULL_BODY,
            Frequency::FourToFive => &UPPER_LOWER,
            Frequency::SixToSeven => &PUSH_PULL_LEGS,
        }
    }
}

const FULL_BODY_DAY: &[MuscleGroup] = &[MuscleGroup::FullBody];
const UPPER_DAY: &[MuscleGroup] = &[MuscleGroup::Upper];
const LOWER_DAY: &[MuscleGroup] = &[MuscleGroup::Lower, MuscleGroup::Core];
const PUSH_DAY: &[MuscleGroup] = &[MuscleGroup::Push];
const PULL_DAY: &[MuscleGroup] = &[MuscleGroup::Pull, MuscleGroup::Core];
const LEGS_DAY: &[MuscleGroup] = &[MuscleGroup::Legs];

pub static FULL_BODY: SplitTemplate = SplitTemplate {
    name: "Full Body",
    days: &[
        DayTemplate {
            name: "Full Body A",
            groups: FULL_BODY_DAY,
        },
        DayTemplate {
            name: "Full Body B",
            groups: FULL_BODY_DAY,
        },
        DayTemplate {
            name: "Full Body C",
            groups: FULL_BODY_DAY,
        },
    ],
    rotation: [
        "Full Body A",
        REST_DAY,
        "Full Body B",
        REST_DAY,
        "Full Body C",
        REST_DAY,
        REST_DAY,
    ],
};

pub static UPPER_LOWER: SplitTemplate = SplitTemplate {
    name: "Upper/Lower",
    days: &[
        DayTemplate {
            name: "Upper",
            groups: UPPER_DAY,
        },
        DayTemplate {
            name: "Lower",
            groups: LOWER_DAY,
        },
        DayTemplate {
            name: "Upper",
            groups: UPPER_DAY,
        },
        DayTemplate {
            name: "Lower",
            groups: LOWER_DAY,
        },
        DayTemplate {
            name: "Full Body",
            groups: FULL_BODY_DAY,
        },
    ],
    rotation: [
        "Upper",
        "Lower",
        REST_DAY,
        "Upper",
        "Lower",
        "Full Body",
        REST_DAY,
    ],
};

pub static PUSH_PULL_LEGS: SplitTemplate = SplitTemplate {
    name: "Push/Pull/Legs",
    days: &[
        DayTemplate {
            name: "Push",
            groups: PUSH_DAY,
        },
        DayTemplate {
            name: "Pull",
            groups: PULL_DAY,
        },
        DayTemplate {
            name: "Legs",
            groups: LEGS_DAY,
        },
        DayTemplate {
            name: "Push",
            groups: PUSH_DAY,
        },
        DayTemplate {
            name: "Pull",
            groups: PULL_DAY,
        },
        DayTemplate {
            name: "Legs",
            groups: LEGS_DAY,
        },
    ],
    rotation: ["Push", "Pull", "Legs", "Push", "Pull", "Legs", REST_DAY],
};
