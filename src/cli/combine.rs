use anyhow::{Context, Result};
use std::io::Write;
use tiffin_shared::Plan;

use super::{Output, read_source};

/// Summarise the JSON array of plans found at `source`.
pub fn combine(source: &str, output: &Output, out: &mut impl Write) -> Result<()> {
    let plans: Vec<Plan> = serde_json::from_str(&read_source(source)?)
        .with_context(|| format!("{source} is not a JSON array of plans"))?;

    tracing::info!(count = plans.len(), "combining plans");

    output.write(out, &tiffin_plan::combine_plans(&plans))
}
