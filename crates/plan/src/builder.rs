use std::str::FromStr;

use tiffin_shared::{MealType, Plan, PlanInput};
use validator::Validate;

use crate::{PlanError, Result};

pub const DEFAULT_DAYS: u32 = 30;

/// Builds a priced plan from customer input.
///
/// The name is checked before the meal type. A missing input behaves like an
/// empty one. The returned name is kept exactly as given, trimming only
/// applies to the blank check.
pub fn try_create_plan(input: Option<PlanInput>) -> Result<Plan> {
    let input = input.unwrap_or_default();

    if input.validate().is_err() {
        tracing::debug!("rejected plan input with blank name");
        return Err(PlanError::MissingName);
    }

    let Some(name) = input.name else {
        tracing::debug!("rejected plan input without name");
        return Err(PlanError::MissingName);
    };

    let meal_type = match input.meal_type {
        Some(meal_type) => MealType::from_str(&meal_type).map_err(|_| {
            tracing::debug!(meal_type = %meal_type, "rejected unknown meal type");
            PlanError::UnknownMealType(meal_type)
        })?,
        None => MealType::default(),
    };

    let days = input.days.unwrap_or(DEFAULT_DAYS);
    let daily_rate = meal_type.daily_rate();
    let plan = Plan {
        name,
        meal_type,
        days,
        daily_rate,
        total_cost: daily_rate * f64::from(days),
        extra: Default::default(),
    };

    tracing::trace!(name = %plan.name, total_cost = plan.total_cost, "plan created");

    Ok(plan)
}

/// Same as [`try_create_plan`], with every rejection collapsed to `None`.
pub fn create_tiffin_plan(input: Option<PlanInput>) -> Option<Plan> {
    try_create_plan(input).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_veg_for_thirty_days() {
        let plan = create_tiffin_plan(Some(PlanInput::named("Rahul"))).unwrap();

        assert_eq!(
            plan,
            Plan {
                name: "Rahul".to_owned(),
                meal_type: MealType::Veg,
                days: 30,
                daily_rate: 80.0,
                total_cost: 2400.0,
                extra: Default::default(),
            }
        );
    }

    #[test]
    fn test_name_is_checked_before_meal_type() {
        let input = PlanInput::named("  ").meal_type("vegan");

        assert_eq!(try_create_plan(Some(input)), Err(PlanError::MissingName));
    }

    #[test]
    fn test_unknown_meal_type_is_reported() {
        let input = PlanInput::named("X").meal_type("vegan");

        assert_eq!(
            try_create_plan(Some(input)),
            Err(PlanError::UnknownMealType("vegan".to_owned()))
        );
    }

    #[test]
    fn test_name_is_kept_verbatim() {
        let plan = create_tiffin_plan(Some(PlanInput::named("  Priya "))).unwrap();

        assert_eq!(plan.name, "  Priya ");
    }

    #[test]
    fn test_zero_days_costs_nothing() {
        let input = PlanInput::named("Z").meal_type("jain").days(0);
        let plan = create_tiffin_plan(Some(input)).unwrap();

        assert_eq!(plan.daily_rate, 90.0);
        assert_eq!(plan.total_cost, 0.0);
    }
}
