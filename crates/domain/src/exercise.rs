use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseRecord {
    pub name: String,
    pub muscle: Muscle,
    pub equipment: Option<Equipment>,
    pub difficulty: Difficulty,
    pub modes: Vec<Mode>,
    pub tips: Vec<String>,
}

impl ExerciseRecord {
    /// An exercise without any declared mode is not available in any mode.
    #[must_use]
    pub fn supports(&self, mode: Mode) -> bool {
        self.modes.contains(&mode)
    }
}

#[derive(
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Muscle {
    // Chest
    Chest,
    // Shoulders
    Shoulders,
    // Upper arms
    Biceps,
    Triceps,
    // Forearms
    Forearms,
    // Back
    Back,
    LowerBack,
    // Waist
    Abs,
    Obliques,
    // Hips
    Glutes,
    // Thighs
    Quads,
    Hamstrings,
    // Calves
    Calves,
}

impl Muscle {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Muscle::Chest => "Hrudník",
            Muscle::Shoulders => "Ramená",
            Muscle::Biceps => "Biceps",
            Muscle::Triceps => "Triceps",
            Muscle::Forearms => "Predlaktia",
            Muscle::Back => "Chrbát",
            Muscle::LowerBack => "Spodný chrbát",
            Muscle::Abs => "Brucho",
            Muscle::Obliques => "Šikmé svaly",
            Muscle::Glutes => "Zadok",
            Muscle::Quads => "Predné stehná",
            Muscle::Hamstrings => "Zadné stehná",
            Muscle::Calves => "Lýtka",
        }
    }
}

#[derive(
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
)]
#[strum(ascii_case_insensitive)]
pub enum Equipment {
    #[strum(to_string = "none")]
    None,
    #[strum(to_string = "bodyweight")]
    Bodyweight,
    #[strum(to_string = "barbell")]
    Barbell,
    #[strum(to_string = "dumbbell", serialize = "dumbbells")]
    Dumbbell,
    #[strum(to_string = "cable")]
    Cable,
    #[strum(to_string = "machine")]
    Machine,
    #[strum(to_string = "pullup bar", serialize = "pull-up bar")]
    PullUpBar,
    #[strum(to_string = "mat")]
    Mat,
    #[strum(to_string = "ball")]
    Ball,
    #[strum(to_string = "kettlebell")]
    Kettlebell,
    #[strum(to_string = "resistance band", serialize = "band")]
    ResistanceBand,
    #[strum(to_string = "box")]
    Box,
    #[strum(to_string = "bench")]
    Bench,
    #[strum(to_string = "parallel bars")]
    ParallelBars,
}

impl Equipment {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Equipment::None => "Bez náradia",
            Equipment::Bodyweight => "Vlastná váha",
            Equipment::Barbell => "Veľká činka",
            Equipment::Dumbbell => "Jednoručky",
            Equipment::Cable => "Kladka",
            Equipment::Machine => "Stroj",
            Equipment::PullUpBar => "Hrazda",
            Equipment::Mat => "Podložka",
            Equipment::Ball => "Lopta",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::ResistanceBand => "Odporová guma",
            Equipment::Box => "Box",
            Equipment::Bench => "Lavička",
            Equipment::ParallelBars => "Bradlá",
        }
    }
}

#[derive(
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    Beginner = 1,
    Intermediate = 2,
    Advanced = 3,
}

impl Difficulty {
    #[must_use]
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn distance(self, other: Difficulty) -> u8 {
        self.ordinal().abs_diff(other.ordinal())
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Začiatočník",
            Difficulty::Intermediate => "Mierne pokročilý",
            Difficulty::Advanced => "Pokročilý",
        }
    }
}

#[derive(
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Mode {
    Bodybuilding,
    Calisthenics,
    Pilates,
}

impl Mode {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Mode::Bodybuilding => "Kulturistika",
            Mode::Calisthenics => "Kalistenika",
            Mode::Pilates => "Pilates",
        }
    }
}
