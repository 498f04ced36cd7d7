//! Result type alias for VidaPlus
//!
//! This module provides a convenient Result type alias that uses
//! HospitalError as the error type.

use super::errors::HospitalError;

/// Result type alias for VidaPlus operations
///
/// This is a convenience type alias that uses `HospitalError` as the error
/// type. Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use vidaplus::domain::result::Result;
/// use vidaplus::domain::errors::HospitalError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(HospitalError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, HospitalError>;
