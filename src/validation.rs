use crate::data_source::player::PlayerDraft;
use serde_json::{Map, Value};
use thiserror::Error;

const NAME_MIN_CHARS: usize = 2;
const POINTS_SCALE: f64 = 100.0;
const KNOWN_FIELDS: [&str; 3] = ["name", "state", "points"];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("\"value\" must be of type object")]
    NotAnObject,

    #[error("\"{0}\" is required")]
    Required(&'static str),

    #[error("\"{0}\" must be a string")]
    NotAString(&'static str),

    #[error("\"{0}\" is not allowed to be empty")]
    Empty(&'static str),

    #[error("\"{field}\" length must be at least {min} characters long")]
    TooShort { field: &'static str, min: usize },

    #[error("\"{field}\" with value \"{value}\" fails to match the required pattern: /^[A-Z]{{3}}$/")]
    BadStateCode { field: &'static str, value: String },

    #[error("\"{0}\" must be a number")]
    NotANumber(&'static str),

    #[error("\"{0}\" must be a positive number")]
    NotPositive(&'static str),

    #[error("\"{0}\" is not allowed")]
    NotAllowed(String),
}

impl ValidationError {
    /// The offending field, or `None` when the body itself is rejected.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::NotAnObject => None,
            ValidationError::Required(f)
            | ValidationError::NotAString(f)
            | ValidationError::Empty(f)
            | ValidationError::NotANumber(f)
            | ValidationError::NotPositive(f) => Some(*f),
            ValidationError::TooShort { field, .. }
            | ValidationError::BadStateCode { field, .. } => Some(*field),
            ValidationError::NotAllowed(f) => Some(f.as_str()),
        }
    }
}

/// Checks an incoming player body and returns the first failing rule.
///
/// Fields are checked in the order name, state, points; unknown keys last.
pub fn validate_player(body: &Value) -> Result<PlayerDraft, ValidationError> {
    let fields = body.as_object().ok_or(ValidationError::NotAnObject)?;

    let name = validate_name(fields)?;
    let state = validate_state(fields)?;
    let points = validate_points(fields)?;

    if let Some(key) = fields.keys().find(|k| !KNOWN_FIELDS.contains(&k.as_str())) {
        return Err(ValidationError::NotAllowed(key.clone()));
    }

    Ok(PlayerDraft {
        name,
        state,
        points,
    })
}

fn validate_name(fields: &Map<String, Value>) -> Result<String, ValidationError> {
    let name = match fields.get("name") {
        None => return Err(ValidationError::Required("name")),
        Some(Value::String(s)) => s,
        Some(_) => return Err(ValidationError::NotAString("name")),
    };

    if name.is_empty() {
        return Err(ValidationError::Empty("name"));
    }
    if name.chars().count() < NAME_MIN_CHARS {
        return Err(ValidationError::TooShort {
            field: "name",
            min: NAME_MIN_CHARS,
        });
    }

    Ok(name.clone())
}

fn validate_state(fields: &Map<String, Value>) -> Result<Option<String>, ValidationError> {
    let state = match fields.get("state") {
        None => return Ok(None),
        Some(Value::String(s)) => s,
        Some(_) => return Err(ValidationError::NotAString("state")),
    };

    if state.is_empty() {
        return Err(ValidationError::Empty("state"));
    }
    if !is_state_code(state) {
        return Err(ValidationError::BadStateCode {
            field: "state",
            value: state.clone(),
        });
    }

    Ok(Some(state.clone()))
}

fn is_state_code(s: &str) -> bool {
    s.len() == 3 && s.bytes().all(|b| b.is_ascii_uppercase())
}

fn validate_points(fields: &Map<String, Value>) -> Result<f64, ValidationError> {
    // Form submissions send numbers as strings.
    let points = match fields.get("points") {
        None => return Err(ValidationError::Required("points")),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    let points = match points {
        Some(p) if p.is_finite() => round_points(p),
        _ => return Err(ValidationError::NotANumber("points")),
    };

    // Checked after rounding, so 0.001 is not positive.
    if points <= 0.0 {
        return Err(ValidationError::NotPositive("points"));
    }

    Ok(points)
}

/// Rounds to 2 decimal places.
fn round_points(value: f64) -> f64 {
    (value * POINTS_SCALE).round() / POINTS_SCALE
}
