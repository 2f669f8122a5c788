use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    #[default]
    Veg,
    Nonveg,
    Jain,
}

impl MealType {
    /// Per-day price of one tiffin of this type.
    pub fn daily_rate(&self) -> f64 {
        match self {
            MealType::Veg => 80.0,
            MealType::Nonveg => 120.0,
            MealType::Jain => 90.0,
        }
    }
}

/// Customer input for a new plan. Absent fields fall back to `veg` and 30 days.
#[derive(Validate, Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanInput {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: Option<String>,
    pub meal_type: Option<String>,
    pub days: Option<u32>,
}

impl PlanInput {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn meal_type(mut self, meal_type: impl Into<String>) -> Self {
        self.meal_type = Some(meal_type.into());
        self
    }

    pub fn days(mut self, days: u32) -> Self {
        self.days = Some(days);
        self
    }
}

fn validate_not_blank(name: &str) -> Result<(), validator::ValidationError> {
    if name.trim().is_empty() {
        return Err(validator::ValidationError::new("blank_name")
            .with_message("Customer name must not be blank".into()));
    }

    Ok(())
}

/// A priced subscription for one customer.
///
/// `total_cost` is always `daily_rate * days`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub name: String,
    pub meal_type: MealType,
    pub days: u32,
    pub daily_rate: f64,
    pub total_cost: f64,
    /// Caller fields outside the priced record, carried along untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AggregateSummary {
    pub total_customers: usize,
    pub total_revenue: f64,
    /// Only meal types that occur in the input appear as keys.
    pub meal_breakdown: BTreeMap<MealType, u32>,
}
