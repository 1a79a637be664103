use std::{fs, path::Path};

use anyhow::Context;
use clap::Args;
use fitplan_domain::{GoalConfig, UserProfile};
use serde::Deserialize;

/// Questionnaire answers given on the command line. Values override those of the goals file.
#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct GoalArgs {
    /// JSON file with `profile` and `goals` objects
    #[arg(long, value_name = "FILE")]
    pub goals: Option<std::path::PathBuf>,

    /// Training style (bodybuilding, calisthenics, pilates)
    #[arg(long)]
    pub style: Option<String>,

    /// Workouts per week (2-3, 4-5, 6-7)
    #[arg(long)]
    pub frequency: Option<String>,

    /// Experience level (beginner, intermediate, advanced)
    #[arg(long)]
    pub experience: Option<String>,

    /// Primary goal (lose-weight, build-muscle, get-fit, stay-healthy, strength)
    #[arg(long)]
    pub goal: Option<String>,

    /// Available equipment (none, home-basic, full)
    #[arg(long)]
    pub equipment: Option<String>,

    /// Workout duration in minutes (15-20, 30-45, 45-60, 60+)
    #[arg(long)]
    pub duration: Option<String>,

    /// Health limitation (none, back, knees, shoulders)
    #[arg(long)]
    pub limitation: Option<String>,

    /// Name of the user
    #[arg(long)]
    pub name: Option<String>,

    /// Age category (under-18, 18-30, 30-40, 40-50, 50+)
    #[arg(long)]
    pub age: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
struct Input {
    profile: Profile,
    goals: Goals,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
struct Profile {
    name: String,
    age_category: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
struct Goals {
    training_style: String,
    workout_frequency: String,
    experience_level: String,
    primary_goal: String,
    available_equipment: String,
    workout_duration: String,
    health_limitations: String,
}

impl Input {
    fn into_parts(self) -> (UserProfile, GoalConfig) {
        (
            UserProfile {
                name: self.profile.name,
                age_category: self.profile.age_category,
            },
            GoalConfig {
                training_style: self.goals.training_style,
                workout_frequency: self.goals.workout_frequency,
                experience_level: self.goals.experience_level,
                primary_goal: self.goals.primary_goal,
                available_equipment: self.goals.available_equipment,
                workout_duration: self.goals.workout_duration,
                health_limitations: self.goals.health_limitations,
            },
        )
    }
}

pub fn parse_input(json: &str) -> Result<(UserProfile, GoalConfig), serde_json::Error> {
    Ok(serde_json::from_str::<Input>(json)?.into_parts())
}

impl GoalArgs {
    pub fn resolve(&self) -> anyhow::Result<(UserProfile, GoalConfig)> {
        let (mut profile, mut goals) = match &self.goals {
            Some(path) => read_input(path)?,
            None => (UserProfile::default(), GoalConfig::default()),
        };

        let overrides = [
            (&self.style, &mut goals.training_style),
            (&self.frequency, &mut goals.workout_frequency),
            (&self.experience, &mut goals.experience_level),
            (&self.goal, &mut goals.primary_goal),
            (&self.equipment, &mut goals.available_equipment),
            (&self.duration, &mut goals.workout_duration),
            (&self.limitation, &mut goals.health_limitations),
            (&self.name, &mut profile.name),
        ];
        for (value, field) in overrides {
            if let Some(value) = value {
                value.clone_into(field);
            }
        }
        if self.age.is_some() {
            profile.age_category.clone_from(&self.age);
        }

        Ok((profile, goals))
    }
}

fn read_input(path: &Path) -> anyhow::Result<(UserProfile, GoalConfig)> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read goals from {}", path.display()))?;
    parse_input(&json).with_context(|| format!("invalid goals in {}", path.display()))
}
