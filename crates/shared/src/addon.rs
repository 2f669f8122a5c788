use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Plan;

/// JSON key under which an augmented plan lists its add-on names.
pub const ADDON_NAMES_FIELD: &str = "addonNames";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Addon {
    pub name: String,
    pub price: f64,
}

/// Loosely shaped add-on as supplied by a caller.
///
/// Anything can arrive here. Use [`AddonInput::to_addon`] to check it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct AddonInput(pub Value);

impl AddonInput {
    /// Returns the add-on when the value is an object with a non-empty string
    /// `name` and a numeric `price`.
    pub fn to_addon(&self) -> Option<Addon> {
        let fields = self.0.as_object()?;
        let name = fields.get("name")?.as_str().filter(|name| !name.is_empty())?;
        let price = fields.get("price")?.as_f64()?;

        Some(Addon {
            name: name.to_owned(),
            price,
        })
    }
}

impl From<Value> for AddonInput {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<Addon> for AddonInput {
    fn from(addon: Addon) -> Self {
        Self(serde_json::json!({
            "name": addon.name,
            "price": addon.price,
        }))
    }
}

/// A plan with add-on prices folded into its daily rate.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AugmentedPlan {
    #[serde(flatten)]
    pub plan: Plan,
    pub addon_names: Vec<String>,
}
