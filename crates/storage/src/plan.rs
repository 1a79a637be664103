use chrono::{DateTime, Utc};
use fitplan_domain as domain;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SavedPlan {
    pub id: Uuid,
    #[serde(flatten)]
    pub plan: Plan,
}

impl From<&domain::SavedPlan> for SavedPlan {
    fn from(value: &domain::SavedPlan) -> Self {
        Self {
            id: *value.id,
            plan: Plan::from(&value.plan),
        }
    }
}

impl TryFrom<SavedPlan> for domain::SavedPlan {
    type Error = PlanError;

    fn try_from(value: SavedPlan) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            plan: value.plan.try_into()?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub name: String,
    pub style_name: String,
    pub frequency_name: String,
    pub split_type: String,
    pub schedule: Vec<Day>,
    pub weekly_rotation: Vec<String>,
    pub stats: Stats,
    pub created_at: DateTime<Utc>,
}

impl From<domain::GeneratedPlan> for Plan {
    fn from(value: domain::GeneratedPlan) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::GeneratedPlan> for Plan {
    fn from(value: &domain::GeneratedPlan) -> Self {
        Self {
            name: value.name.clone(),
            style_name: value.style_name.clone(),
            frequency_name: value.frequency_name.clone(),
            split_type: value.split_type.clone(),
            schedule: value.schedule.iter().map(Day::from).collect(),
            weekly_rotation: value.weekly_rotation.clone(),
            stats: Stats::from(&value.stats),
            created_at: value.created_at,
        }
    }
}

impl TryFrom<Plan> for domain::GeneratedPlan {
    type Error = PlanError;

    fn try_from(value: Plan) -> Result<Self, Self::Error> {
        Ok(Self {
            name: value.name,
            style_name: value.style_name,
            frequency_name: value.frequency_name,
            split_type: value.split_type,
            schedule: value
                .schedule
                .into_iter()
                .map(domain::DayPlan::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            weekly_rotation: value.weekly_rotation,
            stats: value.stats.try_into()?,
            created_at: value.created_at,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Day {
    pub name: String,
    pub exercises: Vec<Exercise>,
}

impl From<&domain::DayPlan> for Day {
    fn from(value: &domain::DayPlan) -> Self {
        Self {
            name: value.name.clone(),
            exercises: value.exercises.iter().map(Exercise::from).collect(),
        }
    }
}

impl TryFrom<Day> for domain::DayPlan {
    type Error = PlanError;

    fn try_from(value: Day) -> Result<Self, Self::Error> {
        Ok(Self {
            name: value.name,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::PlannedExercise::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub name: String,
    pub muscle: String,
    pub equipment: Option<String>,
    pub difficulty: String,
    pub sets: u32,
    pub reps: String,
    pub rest: String,
    pub tips: Vec<String>,
}

impl From<&domain::PlannedExercise> for Exercise {
    fn from(value: &domain::PlannedExercise) -> Self {
        Self {
            name: value.name.clone(),
            muscle: value.muscle.to_string(),
            equipment: value.equipment.map(|e| e.to_string()),
            difficulty: value.difficulty.to_string(),
            sets: value.sets,
            reps: value.reps.clone(),
            rest: value.rest.clone(),
            tips: value.tips.clone(),
        }
    }
}

impl TryFrom<Exercise> for domain::PlannedExercise {
    type Error = PlanError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(Self {
            muscle: parse_muscle(&value.muscle)?,
            equipment: value
                .equipment
                .map(|e| {
                    e.parse::<domain::Equipment>()
                        .map_err(|_| PlanError::Equipment(e))
                })
                .transpose()?,
            difficulty: value
                .difficulty
                .parse::<domain::Difficulty>()
                .map_err(|_| PlanError::Difficulty(value.difficulty))?,
            name: value.name,
            sets: value.sets,
            reps: value.reps,
            rest: value.rest,
            tips: value.tips,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_exercises: usize,
    pub total_sets: u32,
    pub estimated_duration: u32,
    pub muscles: Vec<String>,
    pub days_per_week: usize,
}

impl From<&domain::PlanStats> for Stats {
    fn from(value: &domain::PlanStats) -> Self {
        Self {
            total_exercises: value.total_exercises,
            total_sets: value.total_sets,
            estimated_duration: value.estimated_duration,
            muscles: value.muscles.iter().map(ToString::to_string).collect(),
            days_per_week: value.days_per_week,
        }
    }
}

impl TryFrom<Stats> for domain::PlanStats {
    type Error = PlanError;

    fn try_from(value: Stats) -> Result<Self, Self::Error> {
        Ok(Self {
            total_exercises: value.total_exercises,
            total_sets: value.total_sets,
            estimated_duration: value.estimated_duration,
            muscles: value
                .muscles
                .iter()
                .map(|m| parse_muscle(m))
                .collect::<Result<Vec<_>, _>>()?,
            days_per_week: value.days_per_week,
        })
    }
}

fn parse_muscle(key: &str) -> Result<domain::Muscle, PlanError> {
    key.parse()
        .map_err(|_| PlanError::Muscle(key.to_string()))
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PlanError {
    #[error("unknown muscle \"{0}\"")]
    Muscle(String),
    #[error("unknown equipment \"{0}\"")]
    Equipment(String),
    #[error("unknown difficulty \"{0}\"")]
    Difficulty(String),
}

impl From<PlanError> for domain::StorageError {
    fn from(value: PlanError) -> Self {
        domain::StorageError::Corrupt(value.to_string())
    }
}
