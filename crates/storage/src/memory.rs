use std::sync::{Mutex, MutexGuard};

use fitplan_domain as domain;

/// Plan repository that keeps plans only for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    plans: Mutex<Vec<domain::SavedPlan>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn plans(&self) -> Result<MutexGuard<'_, Vec<domain::SavedPlan>>, domain::StorageError> {
        self.plans
            .lock()
            .map_err(|err| domain::StorageError::Unavailable(err.to_string()))
    }
}

impl domain::PlanRepository for MemoryStorage {
    fn read_plans(&self) -> Result<Vec<domain::SavedPlan>, domain::ReadError> {
        Ok(self.plans()?.clone())
    }

    fn read_plan(&self, id: domain::PlanID) -> Result<domain::SavedPlan, domain::ReadError> {
        self.plans()?
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(domain::ReadError::NotFound)
    }

    fn create_plan(
        &self,
        plan: domain::GeneratedPlan,
    ) -> Result<domain::SavedPlan, domain::CreateError> {
        let mut plans = self.plans()?;
        let saved_plan = domain::SavedPlan {
            id: domain::PlanID::new(),
            plan,
        };
        if plans.iter().any(|p| p.id == saved_plan.id) {
            return Err(domain::CreateError::Conflict);
        }
        plans.push(saved_plan.clone());
        Ok(saved_plan)
    }

    fn delete_plan(&self, id: domain::PlanID) -> Result<domain::PlanID, domain::DeleteError> {
        let mut plans = self.plans()?;
        let len = plans.len();
        plans.retain(|p| p.id != id);
        if plans.len() == len {
            return Err(domain::DeleteError::NotFound);
        }
        Ok(id)
    }
}
