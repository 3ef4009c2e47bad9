//! Input validation helpers

use crate::error::{AppError, AppResult};

/// Reject NaN and infinities.
///
/// JSON numbers are always finite, but numeric strings such as "NaN" or
/// "inf" parse as floats and must not reach the store.
pub fn require_finite(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "field `{}` must be a finite number",
            field
        )))
    }
}

/// Validate several named values at once, reporting the first failure
pub fn require_all_finite(fields: &[(&str, f64)]) -> AppResult<()> {
    fields
        .iter()
        .try_for_each(|(field, value)| require_finite(field, *value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_finite() {
        assert!(require_finite("weight", 70.0).is_ok());
        assert!(require_finite("weight", -1.0).is_ok());
        assert!(require_finite("weight", f64::NAN).is_err());
        assert!(require_finite("weight", f64::INFINITY).is_err());
    }

    #[test]
    fn test_require_all_finite_names_field() {
        let err = require_all_finite(&[("weight", 70.0), ("height", f64::NAN)]).unwrap_err();
        assert!(err.to_string().contains("`height`"));
    }
}
