//! Append-only plan catalog

use crate::error::ErrorCode;
use crate::states::{Plan, PlanAdded, StakeConfig};
use anchor_lang::prelude::*;

pub struct PlanRegistry;

impl PlanRegistry {
    /// Writes a new plan into `plan` under the next dense id.
    ///
    /// Only the configured owner may register plans. Nothing is written when
    /// a check fails.
    pub fn register(
        config: &mut StakeConfig,
        plan: &mut Plan,
        caller: &Pubkey,
        name: String,
        rate: u64,
        lock_duration_units: u64,
        now: i64,
    ) -> Result<PlanAdded> {
        require!(config.is_owner(caller), ErrorCode::Unauthorized);
        Plan::validate_name(&name)?;

        let plan_id = config.allocate_plan_id()?;
        plan.id = plan_id;
        plan.name = name.clone();
        plan.rate = rate;
        plan.lock_duration_units = lock_duration_units;
        plan.created_at = now;

        Ok(PlanAdded {
            plan_id,
            name,
            rate,
            lock_duration_units,
        })
    }

    /// Resolves `plan_id` to the loaded plan account.
    pub fn resolve<'p>(config: &StakeConfig, plan: &'p Plan, plan_id: u64) -> Result<&'p Plan> {
        config.check_plan_index(plan_id)?;
        require_eq!(plan.id, plan_id, ErrorCode::InvalidPlanIndex);
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::testing::{assert_error, owned_config};

    #[test]
    fn ids_are_dense_from_zero() {
        let owner = Pubkey::new_unique();
        let mut config = owned_config(owner);
        for expected in 0..4u64 {
            let mut plan = Plan::default();
            let added = PlanRegistry::register(
                &mut config,
                &mut plan,
                &owner,
                format!("plan-{expected}"),
                10,
                1,
                0,
            )
            .unwrap();
            assert_eq!(added.plan_id, expected);
            assert_eq!(plan.id, expected);
        }
        assert_eq!(config.plan_count, 4);
    }

    #[test]
    fn non_owner_cannot_register() {
        let owner = Pubkey::new_unique();
        let mut config = owned_config(owner);
        let mut plan = Plan::default();
        let err = PlanRegistry::register(
            &mut config,
            &mut plan,
            &Pubkey::new_unique(),
            "diamond".to_string(),
            15,
            1,
            0,
        )
        .unwrap_err();
        assert_error(err, ErrorCode::Unauthorized);
        assert_eq!(config.plan_count, 0);
        assert_eq!(plan, Plan::default());
    }

    #[test]
    fn bad_name_allocates_nothing() {
        let owner = Pubkey::new_unique();
        let mut config = owned_config(owner);
        let mut plan = Plan::default();
        let err = PlanRegistry::register(&mut config, &mut plan, &owner, String::new(), 15, 1, 0)
            .unwrap_err();
        assert_error(err, ErrorCode::EmptyPlanName);
        assert_eq!(config.plan_count, 0);
    }

    #[test]
    fn resolve_rejects_out_of_range_ids() {
        let owner = Pubkey::new_unique();
        let mut config = owned_config(owner);
        let mut plan = Plan::default();
        PlanRegistry::register(&mut config, &mut plan, &owner, "diamond".into(), 15, 1, 0)
            .unwrap();

        assert_eq!(PlanRegistry::resolve(&config, &plan, 0).unwrap().name, "diamond");
        assert_error(
            PlanRegistry::resolve(&config, &plan, 3).unwrap_err(),
            ErrorCode::InvalidPlanIndex,
        );
        assert_error(
            PlanRegistry::resolve(&config, &plan, u64::MAX).unwrap_err(),
            ErrorCode::InvalidPlanIndex,
        );
    }
}
