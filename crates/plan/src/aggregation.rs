use std::collections::BTreeMap;

use tiffin_shared::{AggregateSummary, MealType, Plan};

/// Summarises a batch of plans, one customer per plan.
///
/// Returns `None` for an empty batch. Plans are counted as given, with no
/// dedup and no shape checks.
pub fn combine_plans(plans: &[Plan]) -> Option<AggregateSummary> {
    if plans.is_empty() {
        tracing::debug!("no plans to combine");
        return None;
    }

    let total_revenue: f64 = plans.iter().map(|plan| plan.total_cost).sum();

    let mut meal_breakdown: BTreeMap<MealType, u32> = BTreeMap::new();
    for plan in plans {
        *meal_breakdown.entry(plan.meal_type).or_insert(0) += 1;
    }

    tracing::trace!(
        total_customers = plans.len(),
        total_revenue,
        "plans combined"
    );

    Some(AggregateSummary {
        total_customers: plans.len(),
        total_revenue,
        meal_breakdown,
    })
}
