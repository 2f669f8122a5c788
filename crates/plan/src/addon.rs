use tiffin_shared::{ADDON_NAMES_FIELD, AddonInput, AugmentedPlan, Plan};

/// Derives a new plan with add-on prices added to the daily rate.
///
/// Malformed add-ons are skipped silently. Names of applied add-ons keep their
/// input order. The given plan is only read, the result is a patched clone
/// that keeps every extra field of the plan except a stale `addonNames`.
///
/// Prices are summed as `f64` without bounds, so huge prices can push the rate
/// to infinity. JSON output renders a non-finite rate as `null`.
pub fn apply_addons(plan: Option<&Plan>, addons: &[AddonInput]) -> Option<AugmentedPlan> {
    let Some(plan) = plan else {
        tracing::debug!("no plan to apply add-ons to");
        return None;
    };

    let mut addon_price = 0.0;
    let mut addon_names = Vec::new();

    for input in addons {
        let Some(addon) = input.to_addon() else {
            tracing::debug!(addon = %input.0, "skipped malformed add-on");
            continue;
        };

        addon_price += addon.price;
        addon_names.push(addon.name);
    }

    let daily_rate = plan.daily_rate + addon_price;
    if !daily_rate.is_finite() {
        tracing::warn!(name = %plan.name, "daily rate overflowed after add-ons");
    }

    let mut patched = Plan {
        daily_rate,
        total_cost: daily_rate * f64::from(plan.days),
        ..plan.clone()
    };
    patched.extra.remove(ADDON_NAMES_FIELD);

    let augmented = AugmentedPlan {
        plan: patched,
        addon_names,
    };

    tracing::trace!(
        name = %augmented.plan.name,
        daily_rate,
        addons = augmented.addon_names.len(),
        "add-ons applied"
    );

    Some(augmented)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tiffin_shared::{Addon, MealType};

    use super::*;

    fn base() -> Plan {
        Plan {
            name: "A".to_owned(),
            meal_type: MealType::Veg,
            days: 10,
            daily_rate: 80.0,
            total_cost: 800.0,
            extra: Default::default(),
        }
    }

    #[test]
    fn test_no_plan() {
        let addons = [AddonInput(json!({ "name": "raita", "price": 15 }))];

        assert_eq!(apply_addons(None, &addons), None);
    }

    #[test]
    fn test_no_addons_keeps_pricing() {
        let plan = base();
        let augmented = apply_addons(Some(&plan), &[]).unwrap();

        assert_eq!(augmented.plan, plan);
        assert!(augmented.addon_names.is_empty());
    }

    #[test]
    fn test_extra_fields_survive_and_old_addon_names_are_replaced() {
        let mut plan = base();
        plan.extra.insert("phone".to_owned(), json!("98xx"));
        plan.extra.insert(ADDON_NAMES_FIELD.to_owned(), json!(["curd"]));

        let raita = AddonInput::from(json!({ "name": "raita", "price": 15 }));
        let augmented = apply_addons(Some(&plan), &[raita]).unwrap();

        assert_eq!(augmented.plan.extra.get("phone"), Some(&json!("98xx")));
        assert!(!augmented.plan.extra.contains_key(ADDON_NAMES_FIELD));
        assert_eq!(augmented.addon_names, ["raita"]);
        assert_eq!(plan.extra.len(), 2);

        let value = serde_json::to_value(&augmented).unwrap();
        assert_eq!(value[ADDON_NAMES_FIELD], json!(["raita"]));
    }

    #[test]
    fn test_negative_price_lowers_rate() {
        let discount = Addon {
            name: "no rice".to_owned(),
            price: -5.0,
        };

        let augmented = apply_addons(Some(&base()), &[AddonInput::from(discount)]).unwrap();

        assert_eq!(augmented.plan.daily_rate, 75.0);
        assert_eq!(augmented.plan.total_cost, 750.0);
        assert_eq!(augmented.addon_names, ["no rice"]);
    }

    #[test]
    fn test_huge_prices_overflow_to_infinity() {
        let addons: Vec<AddonInput> = vec![
            json!({ "name": "gold leaf", "price": 1e308 }).into(),
            json!({ "name": "silver leaf", "price": 1e308 }).into(),
        ];

        let augmented = apply_addons(Some(&base()), &addons).unwrap();

        assert!(augmented.plan.daily_rate.is_infinite());
        assert!(augmented.plan.total_cost.is_infinite());
        assert_eq!(augmented.addon_names.len(), 2);
    }

    #[test]
    fn test_names_keep_input_order() {
        let addons = [
            AddonInput(json!({ "name": "sweet", "price": 20 })),
            AddonInput(json!(null)),
            AddonInput(json!({ "name": "raita", "price": 15 })),
            AddonInput(json!({ "name": "papad", "price": 5 })),
        ];

        let augmented = apply_addons(Some(&base()), &addons).unwrap();

        assert_eq!(augmented.addon_names, ["sweet", "raita", "papad"]);
        assert_eq!(augmented.plan.daily_rate, 120.0);
        assert_eq!(augmented.plan.total_cost, 1200.0);
    }
}
