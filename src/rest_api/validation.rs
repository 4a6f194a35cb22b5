//! # Request Validation
//!
//! Presence checks on request bodies. A field counts as present only when it
//! holds a truthy value: `null`, `false`, `""` and `0` are treated as missing.
//!
//! Text fields accept a non-empty string, a non-zero number (kept as its
//! decimal text) or `true` (kept as "1"). `cost` accepts a non-zero number,
//! a string holding one, or `true` as 1; fractional costs are truncated
//! toward zero. Any other value is treated as missing. A body that is not a
//! JSON object supplies no fields.

use serde_json::{Map, Value};

use crate::store::{NewRecipe, RecipePatch};

use super::errors::{ApiError, ApiResult};

/// Fields a creation body must carry, as reported to clients
pub const REQUIRED_FIELDS: &str = "title, making_time, serves, ingredients, cost";

/// Presence-checked view of the five recipe fields
#[derive(Debug, Default)]
struct Fields {
    title: Option<String>,
    making_time: Option<String>,
    serves: Option<String>,
    ingredients: Option<String>,
    cost: Option<i64>,
}

impl Fields {
    fn extract(body: Option<&Value>) -> Self {
        let Some(obj) = body.and_then(Value::as_object) else {
            return Self::default();
        };

        Self {
            title: text_field(obj, "title"),
            making_time: text_field(obj, "making_time"),
            serves: text_field(obj, "serves"),
            ingredients: text_field(obj, "ingredients"),
            cost: cost_field(obj, "cost"),
        }
    }
}

fn text_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        // SQLite binds `true` as 1
        Value::Bool(true) => Some("1".to_string()),
        _ => None,
    }
}

fn cost_field(obj: &Map<String, Value>, key: &str) -> Option<i64> {
    match obj.get(key)? {
        Value::Number(n) => n
            .as_i64()
            .filter(|cost| *cost != 0)
            .or_else(|| n.as_f64().and_then(float_cost)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .filter(|cost| *cost != 0)
                .or_else(|| s.parse::<f64>().ok().and_then(float_cost))
        }
        // SQLite binds `true` as 1
        Value::Bool(true) => Some(1),
        _ => None,
    }
}

/// Non-zero finite floats are truthy. Fractions are truncated toward zero.
fn float_cost(f: f64) -> Option<i64> {
    // 2^63, the first value past i64::MAX
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    (f.is_finite() && f != 0.0 && f.abs() < LIMIT).then(|| f.trunc() as i64)
}

/// Check a creation body. Every field must be present.
pub fn validate_create(body: Option<&Value>) -> ApiResult<NewRecipe> {
    let fields = Fields::extract(body);

    match fields {
        Fields {
            title: Some(title),
            making_time: Some(making_time),
            serves: Some(serves),
            ingredients: Some(ingredients),
            cost: Some(cost),
        } => Ok(NewRecipe {
            title,
            making_time,
            serves,
            ingredients,
            cost,
        }),
        _ => Err(ApiError::MissingRequiredFields),
    }
}

/// Check a patch body. At least one field must be present.
pub fn validate_update(body: Option<&Value>) -> ApiResult<RecipePatch> {
    let Fields {
        title,
        making_time,
        serves,
        ingredients,
        cost,
    } = Fields::extract(body);

    let patch = RecipePatch {
        title,
        making_time,
        serves,
        ingredients,
        cost,
    };

    if patch.is_empty() {
        return Err(ApiError::NoFieldsToUpdate);
    }
    Ok(patch)
}

/// Parse a path id. Anything that is not an integer matches no record.
pub fn parse_recipe_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}
