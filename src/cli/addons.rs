use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::io::Write;
use tiffin_shared::{AddonInput, Plan};

use super::{Output, STDIN, read_source};

/// Apply the add-ons array at `addons_source` to the plan at `plan_source`.
///
/// A plan document that is `null` or not a plan record yields `null`.
pub fn addons(
    plan_source: &str,
    addons_source: &str,
    output: &Output,
    out: &mut impl Write,
) -> Result<()> {
    if plan_source == STDIN && addons_source == STDIN {
        bail!("plan and add-ons cannot both be read from stdin");
    }

    let plan: Value = serde_json::from_str(&read_source(plan_source)?)
        .with_context(|| format!("{plan_source} is not valid JSON"))?;
    let plan = match serde_json::from_value::<Plan>(plan) {
        Ok(plan) => Some(plan),
        Err(e) => {
            tracing::warn!("{plan_source} does not hold a plan: {e}");
            None
        }
    };

    let addons: Vec<AddonInput> = serde_json::from_str(&read_source(addons_source)?)
        .with_context(|| format!("{addons_source} is not a JSON array"))?;

    output.write(out, &tiffin_plan::apply_addons(plan.as_ref(), &addons))
}
