use anyhow::Result;
use std::collections::BTreeMap;
use std::io::Write;
use strum::VariantArray;
use tiffin_shared::{MealType, PlanInput};

use super::Output;

pub fn plan(input: PlanInput, output: &Output, out: &mut impl Write) -> Result<()> {
    let plan = match tiffin_plan::try_create_plan(Some(input)) {
        Ok(plan) => Some(plan),
        Err(e) => {
            tracing::warn!("no plan created: {e}");
            None
        }
    };

    output.write(out, &plan)
}

pub fn rates(output: &Output, out: &mut impl Write) -> Result<()> {
    let table = MealType::VARIANTS
        .iter()
        .map(|meal_type| (*meal_type, meal_type.daily_rate()))
        .collect::<BTreeMap<_, _>>();

    output.write(out, &table)
}
