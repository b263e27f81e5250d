//! Field rules shared by `food` and `inventory`.
use crate::errors::ModelError;

pub const NAME_MAX_LEN: usize = 255;
pub const UNIT_MAX_LEN: usize = 64;

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(ModelError::Validation(format!("name must be at most {NAME_MAX_LEN} characters")));
    }
    Ok(())
}

pub fn validate_unit(unit: Option<&str>) -> Result<(), ModelError> {
    match unit {
        Some(u) if u.chars().count() > UNIT_MAX_LEN => Err(ModelError::Validation(format!(
            "unit must be at most {UNIT_MAX_LEN} characters"
        ))),
        _ => Ok(()),
    }
}

/// `field` is the wire name used in the error message.
pub fn validate_amount(field: &str, value: Option<f64>) -> Result<(), ModelError> {
    match value {
        Some(v) if !v.is_finite() => Err(ModelError::Validation(format!("{field} must be a finite number"))),
        Some(v) if v < 0.0 => Err(ModelError::Validation(format!("{field} must be >= 0"))),
        _ => Ok(()),
    }
}
