use crate::{
    Catalog, Difficulty, Equipment, EquipmentTier, ExerciseRecord, HealthLimitation, Mode, Muscle,
};

/// Exercises of a muscle available in the given mode, closest difficulty first.
///
/// Exercises with the same distance to the target difficulty keep their catalog order. Without a
/// target difficulty the catalog order is kept.
#[must_use]
pub fn exercises_for_muscle<C: Catalog + ?Sized>(
    catalog: &C,
    muscle: Muscle,
    mode: Mode,
    difficulty: Option<Difficulty>,
) -> Vec<&ExerciseRecord> {
    let mut exercises = browse(catalog, muscle, mode);
    if let Some(difficulty) = difficulty {
        exercises.sort_by_key(|e| e.difficulty.distance(difficulty));
    }
    exercises
}

/// Exercises of a muscle available in the given mode, in catalog order.
#[must_use]
pub fn browse<C: Catalog + ?Sized>(
    catalog: &C,
    muscle: Muscle,
    mode: Mode,
) -> Vec<&ExerciseRecord> {
    catalog
        .lookup(muscle)
        .iter()
        .filter(|e| e.supports(mode))
        .collect()
}

const BODYWEIGHT_EQUIPMENT: &[Equipment] = &[
    Equipment::Bodyweight,
    Equipment::Mat,
    Equipment::None,
    Equipment::PullUpBar,
];

const HOME_EQUIPMENT: &[Equipment] = &[
    Equipment::Bodyweight,
    Equipment::Mat,
    Equipment::None,
    Equipment::PullUpBar,
    Equipment::Dumbbell,
    Equipment::Kettlebell,
    Equipment::ResistanceBand,
    Equipment::Ball,
];

/// Allowed equipment, or `None` if any equipment may be used.
#[must_use]
pub fn equipment_filter(tier: EquipmentTier) -> Option<&'static [Equipment]> {
    match tier {
        EquipmentTier::None => Some(BODYWEIGHT_EQUIPMENT),
        EquipmentTier::HomeBasic => Some(HOME_EQUIPMENT),
        EquipmentTier::FullGym => None,
    }
}

#[must_use]
pub fn is_equipment_allowed(exercise: &ExerciseRecord, allowed: Option<&[Equipment]>) -> bool {
    match (allowed, exercise.equipment) {
        (Some(allowed), Some(equipment)) => allowed.contains(&equipment),
        (None, _) | (_, None) => true,
    }
}

#[must_use]
pub fn avoided_keywords(limitation: HealthLimitation) -> &'static [&'static str] {
    match limitation {
        HealthLimitation::None => &[],
        HealthLimitation::Back => &[
            "deadlift",
            "mŕtvy ťah",
            "bent over",
            "v predklone",
            "good morning",
            "hyperextension",
            "hyperextenzia",
        ],
        HealthLimitation::Knees => &[
            "squat",
            "drep",
            "lunge",
            "výpad",
            "leg press",
            "leg extension",
            "jump",
            "skok",
        ],
        HealthLimitation::Shoulders => &[
            "overhead press",
            "military press",
            "tlak nad hlavu",
            "upright row",
            "behind neck",
            "za hlavu",
            "dips",
            "handstand",
            "stojka",
        ],
    }
}

/// Coarse check whether an exercise strains the limited body part, based on its name only.
#[must_use]
pub fn should_avoid(exercise: &ExerciseRecord, limitation: HealthLimitation) -> bool {
    let keywords = avoided_keywords(limitation);
    if keywords.is_empty() {
        return false;
    }
    let name = exercise.name.to_lowercase();
    keywords.iter().any(|keyword| name.contains(keyword))
}
