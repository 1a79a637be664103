use std::collections::BTreeMap;

use crate::{Difficulty, Equipment, ExerciseRecord, Mode, Muscle};

pub trait Catalog {
    fn lookup(&self, muscle: Muscle) -> &[ExerciseRecord];
}

impl Catalog for BTreeMap<Muscle, Vec<ExerciseRecord>> {
    fn lookup(&self, muscle: Muscle) -> &[ExerciseRecord] {
        self.get(&muscle).map(Vec::as_slice).unwrap_or_default()
    }
}

/// The exercise catalog shipped with the application.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticCatalog;

impl Catalog for StaticCatalog {
    fn lookup(&self, muscle: Muscle) -> &[ExerciseRecord] {
        EXERCISES.lookup(muscle)
    }
}

impl StaticCatalog {
    #[must_use]
    pub fn exercises(&self) -> &'static BTreeMap<Muscle, Vec<ExerciseRecord>> {
        &EXERCISES
    }
}

struct Entry {
    name: &'static str,
    equipment: Option<Equipment>,
    difficulty: Difficulty,
    modes: &'static [Mode],
    tips: &'static [&'static str],
}

pub(crate) static EXERCISES: std::sync::LazyLock<BTreeMap<Muscle, Vec<ExerciseRecord>>> =
    std::sync::LazyLock::new(|| {
        ENTRIES
            .iter()
            .map(|(muscle, entries)| {
                (
                    *muscle,
                    entries
                        .iter()
                        .map(|e| ExerciseRecord {
                            name: e.name.to_string(),
                            muscle: *muscle,
                            equipment: e.equipment,
                            difficulty: e.difficulty,
                            modes: e.modes.to_vec(),
                            tips: e.tips.iter().map(ToString::to_string).collect(),
                        })
                        .collect(),
                )
            })
            .collect()
    });

const BB: &[Mode] = &[Mode::Bodybuilding];
const CAL: &[Mode] = &[Mode::Calisthenics];
const PIL: &[Mode] = &[Mode::Pilates];
const BB_CAL: &[Mode] = &[Mode::Bodybuilding, Mode::Calisthenics];
const CAL_PIL: &[Mode] = &[Mode::Calisthenics, Mode::Pilates];
const ALL: &[Mode] = &[Mode::Bodybuilding, Mode::Calisthenics, Mode::Pilates];

const ENTRIES: [(Muscle, &[Entry]); 13] = [
    (Muscle::Chest, CHEST),
    (Muscle::Shoulders, SHOULDERS),
    (Muscle::Biceps, BICEPS),
    (Muscle::Triceps, TRICEPS),
    (Muscle::Forearms, FOREARMS),
    (Muscle::Back, BACK),
    (Muscle::LowerBack, LOWER_BACK),
    (Muscle::Abs, ABS),
    (Muscle::Obliques, OBLIQUES),
    (Muscle::Glutes, GLUTES),
    (Muscle::Quads, QUADS),
    (Muscle::Hamstrings, HAMSTRINGS),
    (Muscle::Calves, CALVES),
];

const CHEST: &[Entry] = &[
    Entry {
        name: "Bench Press",
        equipment: Some(Equipment::Barbell),
        difficulty: Difficulty::Intermediate,
        modes: BB,
        tips: &[
            "Lopatky stiahnuté k sebe",
            "Činku spúšťaj k spodnej časti hrudníka",
        ],
    },
    Entry {
        name: "Incline Dumbbell Press",
        equipment: Some(Equipment::Dumbbell),
        difficulty: Difficulty::Intermediate,
        modes: BB,
        tips: &["Lavička na 30 až 45 stupňov", "Lakte mierne pod úrovňou ramien"],
    },
    Entry {
        name: "Cable Crossover",
        equipment: Some(Equipment::Cable),
        difficulty: Difficulty::Beginner,
        modes: BB,
        tips: &["Ruky vedie oblúkom pred telo"],
    },
    Entry {
        name: "Machine Chest Press",
        equipment: Some(Equipment::Machine),
        difficulty: Difficulty::Beginner,
        modes: BB,
        tips: &["Sedadlo nastav tak, aby rukoväte boli v úrovni hrudníka"],
    },
    Entry {
        name: "Push-up",
        equipment: Some(Equipment::Bodyweight),
        difficulty: Difficulty::Beginner,
        modes: ALL,
        tips: &["Telo drž v jednej línii", "Lakte smerujú šikmo dozadu"],
    },
    Entry {
        name: "Kliky s nohami na vyvýšení",
        equipment: Some(Equipment::Bodyweight),
        difficulty: Difficulty::Intermediate,
        modes: CAL,
        tips: &["Čím vyššie nohy, tým viac zapojíš horný hrudník"],
    },
    Entry {
        name: "Archer Push-up",
        equipment: Some(Equipment::Bodyweight),
        difficulty: Difficulty::Advanced,
        modes: CAL,
        tips: &["Váhu presúvaj nad pokrčenú ruku"],
    },
    Entry {
        name: "Chest Opener",
        equipment: Some(Equipment::Mat),
        difficulty: Difficulty::Beginner,
        modes: PIL,
        tips: &["Dýchaj do hrudníka pri roztváraní rúk"],
    },
];

const SHOULDERS: &[Entry] = &[
    Entry {
        name: "Overhead Press",
        equipment: Some(Equipment::Barbell),
        difficulty: Difficulty::Intermediate,
        modes: BB,
        tips: &["Zaťaž brucho a zadok", "Hlavu posuň dopredu, keď činka prejde čelom"],
    },
    Entry {
        name: "Lateral Raise",
        equipment: Some(Equipment::Dumbbell),
        difficulty: Difficulty::Beginner,
        modes: BB,
        tips: &["Lakte mierne pokrčené", "Dvíhaj len do výšky ramien"],
    },
    Entry {
        name: "Upright Row",
        equipment: Some(Equipment::Barbell),
        difficulty: Difficulty::Advanced,
        modes: BB,
        tips: &["Úzky úchop zvyšuje záťaž ramenného kĺbu"],
    },
    Entry {
        name: "Face Pull",
        equipment: Some(Equipment::Cable),
        difficulty: Difficulty::Beginner,
        modes: BB,
        tips: &["Ťahaj lano k čelu a roztváraj ruky"],
    },
    Entry {
        name: "Pike Push-up",
        equipment: Some(Equipment::Bodyweight),
        difficulty: Difficulty::Intermediate,
        modes: CAL,
        tips: &["Boky drž vysoko nad hlavou"],
    },
    Entry {
        name: "Handstand Push-up",
        equipment: Some(Equipment::Bodyweight),
        difficulty: Difficulty::Advanced,
        modes: CAL,
        tips: &["Začni pri stene", "Hlava smeruje medzi dlane"],
    },
    Entry {
        name: "Band Pull Apart",
        equipment: Some(Equipment::ResistanceBand),
        difficulty: Difficulty::Beginner,
        modes: BB_CAL,
        tips: &["Lopatky sťahuj k sebe"],
    },
    Entry {
        name: "Arm Circles",
        equipment: None,
        difficulty: Difficulty::Beginner,
        modes: PIL,
        tips: &["Malé a kontrolované kruhy"],
    },
];

const BICEPS: &[Entry] = &[
    Entry {
        name: "Barbell Curl",
        equipment: Some(Equipment::Barbell),
        difficulty: Difficulty::Beginner,
        modes: BB,
        tips: &["Lakte drž pri tele"],
    },
    Entry {
        name: "Hammer Curl",
        equipment: Some(Equipment::Dumbbell),
        difficulty: Difficulty::Beginner,
        modes: BB,
        tips: &["Neutrálny úchop, palce hore"],
    },
    Entry {
        name: "Preacher Curl",
        equipment: Some(Equipment::Machine),
        difficulty: Difficulty::Intermediate,
        modes: BB,
        tips: &["Nespúšťaj úplne do vystretia"],
    },
    Entry {
        name: "Chin-up",
        equipment: Some(Equipment::PullUpBar),
        difficulty: Difficulty::Intermediate,
        modes: BB_CAL,
        tips: &["Podhmat na šírku ramien", "Brada nad hrazdu"],
    },
    Entry {
        name: "Australian Chin-up",
        equipment: Some(Equipment::PullUpBar),
        difficulty: Difficulty::Beginner,
        modes: CAL,
        tips: &["Čím vodorovnejšie telo, tým ťažšie"],
    },
];

const TRICEPS: &[Entry] = &[
    Entry {
        name: "Triceps Pushdown",
        equipment: Some(Equipment::Cable),
        difficulty: Difficulty::Beginner,
        modes: BB,
        tips: &["Lakte sú pevne pri tele"],
    },
    Entry {
        name: "Skull Crusher",
        equipment: Some(Equipment::Barbell),
        difficulty: Difficulty::Intermediate,
        modes: BB,
        tips: &["Činku spúšťaj za hlavu, nie na čelo"],
    },
    Entry {
        name: "Overhead Triceps Extension",
        equipment: Some(Equipment::Dumbbell),
        difficulty: Difficulty::Beginner,
        modes: BB,
        tips: &["Lakte smerujú k stropu"],
    },
    Entry {
        name: "Dips",
        equipment: Some(Equipment::ParallelBars),
        difficulty: Difficulty::Intermediate,
        modes: BB_CAL,
        tips: &["Trup vzpriamený pre dôraz na triceps"],
    },
    Entry {
        name: "Diamond Push-up",
        equipment: Some(Equipment::Bodyweight),
        difficulty: Difficulty::Intermediate,
        modes: CAL,
        tips: &["Dlane tvoria pod hrudníkom kosoštvorec"],
    },
    Entry {
        name: "Bench Dip",
        equipment: Some(Equipment::Bench),
        difficulty: Difficulty::Beginner,
        modes: CAL,
        tips: &["Zadok drž blízko lavičky"],
    },
];

const FOREARMS: &[Entry] = &[
    Entry {
        name: "Wrist Curl",
        equipment: Some(Equipment::Dumbbell),
        difficulty: Difficulty::Beginner,
        modes: BB,
        tips: &["Predlaktia opri o stehná"],
    },
    Entry {
        name: "Farmer's Walk",
        equipment: Some(Equipment::Kettlebell),
        difficulty: Difficulty::Intermediate,
        modes: BB,
        tips: &["Ramená dole, krátke rýchle kroky"],
    },
    Entry {
        name: "Dead Hang",
        equipment: Some(Equipment::PullUpBar),
        difficulty: Difficulty::Beginner,
        modes: CAL,
        tips: &["Vis celou váhou, ramená aktívne"],
    },
];

const BACK: &[Entry] = &[
    Entry {
        name: "Deadlift",
        equipment: Some(Equipment::Barbell),
        difficulty: Difficulty::Advanced,
        modes: BB,
        tips: &["Chrbát neutrálny", "Činka sa pohybuje tesne pri nohách"],
    },
    Entry {
        name: "Bent Over Row",
        equipment: Some(Equipment::Barbell),
        difficulty: Difficulty::Intermediate,
        modes: BB,
        tips: &["Trup takmer vodorovne", "Ťahaj k pupku"],
    },
    Entry {
        name: "Lat Pulldown",
        equipment: Some(Equipment::Cable),
        difficulty: Difficulty::Beginner,
        modes: BB,
        tips: &["Ťahaj k hornej časti hrudníka"],
    },
    Entry {
        name: "Seated Cable Row",
        equipment: Some(Equipment::Cable),
        difficulty: Difficulty::Beginner,
        modes: BB,
        tips: &["Na konci pohybu stiahni lopatky"],
    },
    Entry {
        name: "Pull-up",
        equipment: Some(Equipment::PullUpBar),
        difficulty: Difficulty::Intermediate,
        modes: BB_CAL,
        tips: &["Nadhmat mierne širší ako ramená", "Bez hojdania"],
    },
    Entry {
        name: "Inverted Row",
        equipment: Some(Equipment::PullUpBar),
        difficulty: Difficulty::Beginner,
        modes: CAL,
        tips: &["Telo drž rovné ako pri planku"],
    },
    Entry {
        name: "Muscle-up",
        equipment: Some(Equipment::PullUpBar),
        difficulty: Difficulty::Advanced,
        modes: CAL,
        tips: &["Výbušný ťah až k pásu"],
    },
    Entry {
        name: "Swimming",
        equipment: Some(Equipment::Mat),
        difficulty: Difficulty::Intermediate,
        modes: PIL,
        tips: &["Striedaj opačnú ruku a nohu", "Krk predĺžený"],
    },
];

const LOWER_BACK: &[Entry] = &[
    Entry {
        name: "Good Morning",
        equipment: Some(Equipment::Barbell),
        difficulty: Difficulty::Advanced,
        modes: BB,
        tips: &["Pohyb vychádza z bokov"],
    },
    Entry {
        name: "Hyperextenzia",
        equipment: Some(Equipment::Machine),
        difficulty: Difficulty::Beginner,
        modes: BB,
        tips: &["Nezakláňaj sa za neutrálnu polohu"],
    },
    Entry {
        name: "Superman",
        equipment: Some(Equipment::Mat),
        difficulty: Difficulty::Beginner,
        modes: ALL,
        tips: &["Ruky a nohy dvíhaj súčasne"],
    },
    Entry {
        name: "Swan Dive",
        equipment: Some(Equipment::Mat),
        difficulty: Difficulty::Advanced,
        modes: PIL,
        tips: &["Hrudník dvíhaj postupne, stavec po stavci"],
    },
];

const ABS: &[Entry] = &[
    Entry {
        name: "Cable Crunch",
        equipment: Some(Equipment::Cable),
        difficulty: Difficulty::Intermediate,
        modes: BB,
        tips: &["Krúť sa, nepritahuj rukami"],
    },
    Entry {
        name: "Plank",
        equipment: Some(Equipment::Mat),
        difficulty: Difficulty::Beginner,
        modes: ALL,
        tips: &["Boky nepadajú ani nestúpajú"],
    },
    Entry {
        name: "Hanging Leg Raise",
        equipment: Some(Equipment::PullUpBar),
        difficulty: Difficulty::Advanced,
        modes: BB_CAL,
        tips: &["Bez hojdania", "Panvu podsúvaj dopredu"],
    },
    Entry {
        name: "Hollow Body Hold",
        equipment: None,
        difficulty: Difficulty::Intermediate,
        modes: CAL_PIL,
        tips: &["Spodný chrbát pritlačený k zemi"],
    },
    Entry {
        name: "The Hundred",
        equipment: Some(Equipment::Mat),
        difficulty: Difficulty::Beginner,
        modes: PIL,
        tips: &["Päť nádychov, päť výdychov"],
    },
    Entry {
        name: "Roll Up",
        equipment: Some(Equipment::Mat),
        difficulty: Difficulty::Intermediate,
        modes: PIL,
        tips: &["Chrbticu odvíjaj stavec po stavci"],
    },
    Entry {
        name: "Teaser",
        equipment: Some(Equipment::Mat),
        difficulty: Difficulty::Advanced,
        modes: PIL,
        tips: &["Rovnováha na sedacích kostiach"],
    },
];

const OBLIQUES: &[Entry] = &[
    Entry {
        name: "Russian Twist",
        equipment: Some(Equipment::Ball),
        difficulty: Difficulty::Beginner,
        modes: BB,
        tips: &["Rotuj z hrudníka, nie z rúk"],
    },
    Entry {
        name: "Cable Woodchopper",
        equipment: Some(Equipment::Cable),
        difficulty: Difficulty::Intermediate,
        modes: BB,
        tips: &["Boky zostávajú na mieste"],
    },
    Entry {
        name: "Side Plank",
        equipment: Some(Equipment::Mat),
        difficulty: Difficulty::Beginner,
        modes: ALL,
        tips: &["Boky v jednej línii s ramenami"],
    },
    Entry {
        name: "Windshield Wiper",
        equipment: Some(Equipment::PullUpBar),
        difficulty: Difficulty::Advanced,
        modes: CAL,
        tips: &["Nohy drž spolu a vystreté"],
    },
    Entry {
        name: "Criss Cross",
        equipment: Some(Equipment::Mat),
        difficulty: Difficulty::Intermediate,
        modes: PIL,
        tips: &["Lakeť smeruje ku kolenu, nie hlava"],
    },
];

const GLUTES: &[Entry] = &[
    Entry {
        name: "Hip Thrust",
        equipment: Some(Equipment::Barbell),
        difficulty: Difficulty::Intermediate,
        modes: BB,
        tips: &["Brada pritiahnutá", "V hornej polohe stiahni zadok"],
    },
    Entry {
        name: "Cable Kickback",
        equipment: Some(Equipment::Cable),
        difficulty: Difficulty::Beginner,
        modes: BB,
        tips: &["Nezakláňaj sa v bedrovej chrbtici"],
    },
    Entry {
        name: "Glute Bridge",
        equipment: Some(Equipment::Mat),
        difficulty: Difficulty::Beginner,
        modes: ALL,
        tips: &["Tlač cez päty"],
    },
    Entry {
        name: "Bulharský výpad",
        equipment: Some(Equipment::Bench),
        difficulty: Difficulty::Intermediate,
        modes: BB_CAL,
        tips: &["Predné koleno nad členkom"],
    },
    Entry {
        name: "Side Kick",
        equipment: Some(Equipment::Mat),
        difficulty: Difficulty::Beginner,
        modes: PIL,
        tips: &["Trup stabilný, pohybuje sa len noha"],
    },
];

const QUADS: &[Entry] = &[
    Entry {
        name: "Barbell Back Squat",
        equipment: Some(Equipment::Barbell),
        difficulty: Difficulty::Intermediate,
        modes: BB,
        tips: &["Kolená sledujú špičky", "Hrudník hore"],
    },
    Entry {
        name: "Leg Press",
        equipment: Some(Equipment::Machine),
        difficulty: Difficulty::Beginner,
        modes: BB,
        tips: &["Kolená nezamykaj v hornej polohe"],
    },
    Entry {
        name: "Leg Extension",
        equipment: Some(Equipment::Machine),
        difficulty: Difficulty::Beginner,
        modes: BB,
        tips: &["Pomalé spúšťanie"],
    },
    Entry {
        name: "Walking Lunge",
        equipment: Some(Equipment::Dumbbell),
        difficulty: Difficulty::Intermediate,
        modes: BB,
        tips: &["Zadné koleno takmer k zemi"],
    },
    Entry {
        name: "Drepy s vlastnou váhou",
        equipment: Some(Equipment::Bodyweight),
        difficulty: Difficulty::Beginner,
        modes: CAL,
        tips: &["Váha na celých chodidlách"],
    },
    Entry {
        name: "Pistol Squat",
        equipment: Some(Equipment::Bodyweight),
        difficulty: Difficulty::Advanced,
        modes: CAL,
        tips: &["Začni s oporou o zárubňu"],
    },
    Entry {
        name: "Wall Sit",
        equipment: None,
        difficulty: Difficulty::Beginner,
        modes: CAL_PIL,
        tips: &["Stehná rovnobežne so zemou"],
    },
    Entry {
        name: "Step-up",
        equipment: Some(Equipment::Box),
        difficulty: Difficulty::Intermediate,
        modes: CAL,
        tips: &["Odraz len z nohy na boxe"],
    },
];

const HAMSTRINGS: &[Entry] = &[
    Entry {
        name: "Romanian Deadlift",
        equipment: Some(Equipment::Barbell),
        difficulty: Difficulty::Intermediate,
        modes: BB,
        tips: &["Kolená mierne pokrčené", "Boky tlač dozadu"],
    },
    Entry {
        name: "Lying Leg Curl",
        equipment: Some(Equipment::Machine),
        difficulty: Difficulty::Beginner,
        modes: BB,
        tips: &["Boky drž pritlačené k lavici"],
    },
    Entry {
        name: "Kettlebell Swing",
        equipment: Some(Equipment::Kettlebell),
        difficulty: Difficulty::Intermediate,
        modes: BB,
        tips: &["Pohyb z bokov, nie z rúk"],
    },
    Entry {
        name: "Nordic Curl",
        equipment: None,
        difficulty: Difficulty::Advanced,
        modes: CAL,
        tips: &["Spúšťaj sa čo najpomalšie"],
    },
    Entry {
        name: "Single Leg Bridge",
        equipment: Some(Equipment::Mat),
        difficulty: Difficulty::Beginner,
        modes: CAL_PIL,
        tips: &["Panva zostáva vodorovne"],
    },
    Entry {
        name: "Mŕtvy ťah na jednej nohe",
        equipment: Some(Equipment::Bodyweight),
        difficulty: Difficulty::Intermediate,
        modes: CAL,
        tips: &["Chrbát rovný, ruky k zemi"],
    },
];

const CALVES: &[Entry] = &[
    Entry {
        name: "Standing Calf Raise",
        equipment: Some(Equipment::Machine),
        difficulty: Difficulty::Beginner,
        modes: BB,
        tips: &["Plný rozsah, pauza hore"],
    },
    Entry {
        name: "Seated Calf Raise",
        equipment: Some(Equipment::Machine),
        difficulty: Difficulty::Beginner,
        modes: BB,
        tips: &["Kolená v pravom uhle"],
    },
    Entry {
        name: "Single Leg Calf Raise",
        equipment: Some(Equipment::Bodyweight),
        difficulty: Difficulty::Intermediate,
        modes: CAL,
        tips: &["Stoj na okraji schodu"],
    },
    Entry {
        name: "Výpony na špičky",
        equipment: None,
        difficulty: Difficulty::Beginner,
        modes: CAL_PIL,
        tips: &["Päty spolu, kolená vystreté"],
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_every_muscle_has_exercises() {
        for muscle in Muscle::iter() {
            assert!(
                !StaticCatalog.lookup(muscle).is_empty(),
                "no exercises for {muscle}"
            );
        }
    }

    #[test]
    fn test_records_carry_their_muscle() {
        for (muscle, exercises) in StaticCatalog.exercises() {
            for exercise in exercises {
                assert_eq!(exercise.muscle, *muscle);
                assert!(!exercise.modes.is_empty(), "{} has no modes", exercise.name);
            }
        }
    }

    #[test]
    fn test_names_unique_per_muscle() {
        for exercises in StaticCatalog.exercises().values() {
            let names = exercises.iter().map(|e| &e.name).collect::<HashSet<_>>();
            assert_eq!(names.len(), exercises.len());
        }
    }

    #[test]
    fn test_names_comma_free() {
        for exercises in StaticCatalog.exercises().values() {
            for exercise in exercises {
                assert!(!exercise.name.contains(','), "{}", exercise.name);
            }
        }
    }

    #[test]
    fn test_lookup_preserves_catalog_order() {
        let names = StaticCatalog
            .lookup(Muscle::Calves)
            .iter()
            .map(|e| e.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                "Standing Calf Raise",
                "Seated Calf Raise",
                "Single Leg Calf Raise",
                "Výpony na špičky",
            ]
        );
    }

    #[test]
    fn test_lookup_missing_muscle() {
        let catalog: BTreeMap<Muscle, Vec<ExerciseRecord>> = BTreeMap::new();
        assert!(catalog.lookup(Muscle::Chest).is_empty());
    }
}
