//! Result type alias for anonlog

use super::errors::AnonError;

/// Result type alias for anonlog operations
///
/// # Examples
///
/// ```
/// use anonlog::domain::result::Result;
/// use anonlog::domain::errors::AnonError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(AnonError::Configuration("Invalid delimiter".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, AnonError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::AnonError;

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(AnonError::Configuration("test error".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
