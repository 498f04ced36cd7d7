//! Pure record validators
//!
//! Identity-document and e-mail checks plus the required-field helper used
//! by every insert path. Uniqueness checks live in the record store, next
//! to the collections they inspect.

pub mod cpf;
pub mod email;

pub use cpf::{normalize_cpf, validate_cpf};
pub use email::validate_email;

use crate::domain::{HospitalError, Result};

/// Rejects an empty or whitespace-only required field
///
/// # Errors
///
/// Returns `HospitalError::Validation` naming the missing field.
pub fn require_field(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HospitalError::Validation(format!(
            "Campo obrigatório ausente: {field}"
        )));
    }
    Ok(())
}

/// Validates an optional e-mail field: empty passes, malformed fails
///
/// # Errors
///
/// Returns `HospitalError::Validation` when a non-empty value does not
/// look like an e-mail address.
pub fn check_optional_email(email: &str) -> Result<()> {
    if !email.trim().is_empty() && !validate_email(email.trim()) {
        return Err(HospitalError::Validation(format!("E-mail inválido: {email}")));
    }
    Ok(())
}
