use chrono::{DateTime, Utc};
use derive_more::{Deref, Display};
use log::{debug, info};
use uuid::Uuid;

use crate::{
    AgeCategory, Catalog, CreateError, DayTemplate, DeleteError, Difficulty, Equipment,
    EquipmentTier, Frequency, Goal, GoalConfig, HealthLimitation, Mode, Muscle, PlanSettings,
    ReadError, SessionLength, UserProfile, equipment_filter, exercise_quota, exercises_for_muscle,
    is_equipment_allowed, sets_reps, should_avoid,
};

/// Estimated minutes per set, work and rest included.
pub const MINUTES_PER_SET: f64 = 2.5;

pub trait PlanRepository {
    fn read_plans(&self) -> Result<Vec<SavedPlan>, ReadError>;
    fn read_plan(&self, id: PlanID) -> Result<SavedPlan, ReadError>;
    fn create_plan(&self, plan: GeneratedPlan) -> Result<SavedPlan, CreateError>;
    fn delete_plan(&self, id: PlanID) -> Result<PlanID, DeleteError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct SavedPlan {
    pub id: PlanID,
    pub plan: GeneratedPlan,
}

#[derive(Deref, Display, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct PlanID(Uuid);

impl PlanID {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for PlanID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for PlanID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPlan {
    pub name: String,
    pub style_name: String,
    pub frequency_name: String,
    pub split_type: String,
    pub schedule: Vec<DayPlan>,
    pub weekly_rotation: Vec<String>,
    pub stats: PlanStats,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPlan {
    pub name: String,
    pub exercises: Vec<PlannedExercise>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedExercise {
    pub name: String,
    pub muscle: Muscle,
    pub equipment: Option<Equipment>,
    pub difficulty: Difficulty,
    pub sets: u32,
    pub reps: String,
    pub rest: String,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanStats {
    pub total_exercises: usize,
    pub total_sets: u32,
    /// Minutes
    pub estimated_duration: u32,
    pub muscles: Vec<Muscle>,
    pub days_per_week: usize,
}

impl PlanStats {
    #[must_use]
    pub fn from_schedule(schedule: &[DayPlan]) -> Self {
        let exercises = || schedule.iter().flat_map(|day| &day.exercises);

        let total_sets = exercises().map(|e| e.sets).sum::<u32>();
        let mut muscles: Vec<Muscle> = vec![];
        for exercise in exercises() {
            if !muscles.contains(&exercise.muscle) {
                muscles.push(exercise.muscle);
            }
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let estimated_duration = (f64::from(total_sets) * MINUTES_PER_SET).round() as u32;

        Self {
            total_exercises: exercises().count(),
            total_sets,
            estimated_duration,
            muscles,
            days_per_week: schedule.len(),
        }
    }
}

/// Options that are the same for every day of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayOptions {
    pub age: Option<AgeCategory>,
    pub equipment: EquipmentTier,
    pub session_length: Option<SessionLength>,
    pub limitation: HealthLimitation,
}

impl From<&PlanSettings> for DayOptions {
    fn from(value: &PlanSettings) -> Self {
        Self {
            age: value.age,
            equipment: value.equipment,
            session_length: value.session_length,
            limitation: value.limitation,
        }
    }
}

/// Generate a training plan for the given goals.
///
/// The result depends only on the catalog and the inputs, except for the creation time.
pub fn generate_plan<C: Catalog + ?Sized>(
    catalog: &C,
    profile: &UserProfile,
    goals: &GoalConfig,
) -> GeneratedPlan {
    let settings = PlanSettings::resolve(profile, goals);
    let split = settings.frequency.split();

    let options = DayOptions::from(&settings);
    let schedule = split
        .days
        .iter()
        .map(|day| match settings.mode {
            Some(mode) => generate_day_workout(
                catalog,
                day,
                mode,
                settings.difficulty,
                settings.goal,
                &options,
            ),
            None => DayPlan {
                name: day.name.to_string(),
                exercises: vec![],
            },
        })
        .collect::<Vec<_>>();
    let stats = PlanStats::from_schedule(&schedule);

    let style_name = settings
        .mode
        .map_or_else(|| goals.training_style.clone(), |m| m.name().to_string());
    let frequency_name = goals
        .workout_frequency
        .parse::<Frequency>()
        .map_or_else(|_| goals.workout_frequency.clone(), |f| f.name().to_string());

    info!(
        "generated {} plan with {} exercises on {} days",
        split.name, stats.total_exercises, stats.days_per_week
    );

    GeneratedPlan {
        name: plan_name(&style_name, split.name),
        style_name,
        frequency_name,
        split_type: split.name.to_string(),
        schedule,
        weekly_rotation: split.rotation.iter().map(ToString::to_string).collect(),
        stats,
        created_at: Utc::now(),
    }
}

fn plan_name(style_name: &str, split_type: &str) -> String {
    if style_name.is_empty() {
        format!("Tréningový plán {split_type}")
    } else {
        format!("{style_name} {split_type}")
    }
}

/// Select the exercises of one training day.
///
/// Muscles are processed in the order of the template. For every muscle the best ranked
/// exercises passing the equipment and health filters are taken, up to the exercise quota.
pub fn generate_day_workout<C: Catalog + ?Sized>(
    catalog: &C,
    day: &DayTemplate,
    mode: Mode,
    difficulty: Option<Difficulty>,
    goal: Goal,
    options: &DayOptions,
) -> DayPlan {
    let prescription = sets_reps(goal, difficulty, options.age);
    let allowed_equipment = equipment_filter(options.equipment);
    let quota = exercise_quota(mode, options.session_length);

    let mut exercises = vec![];

    for muscle in day.muscles() {
        let selected = exercises_for_muscle(catalog, muscle, mode, difficulty)
            .into_iter()
            .filter(|e| is_equipment_allowed(e, allowed_equipment))
            .filter(|e| !should_avoid(e, options.limitation))
            .take(quota)
            .collect::<Vec<_>>();

        if selected.is_empty() {
            debug!("no {mode} exercises for {muscle} on {}", day.name);
        }

        exercises.extend(selected.into_iter().map(|e| PlannedExercise {
            name: e.name.clone(),
            muscle,
            equipment: e.equipment,
            difficulty: e.difficulty,
            sets: prescription.sets,
            reps: prescription.reps.to_string(),
            rest: prescription.rest.to_string(),
            tips: e.tips.clone(),
        }));
    }

    DayPlan {
        name: day.name.to_string(),
        exercises,
    }
}
