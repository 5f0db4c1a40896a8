use thiserror::Error;

/// Errors raised by the indicator core.
///
/// Both variants are integration errors from the host; none are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndicatorError {
    /// A page was selected outside `[0, count)`
    #[error("page {position} is out of range for {count} indicator(s)")]
    InvalidPosition { position: usize, count: usize },

    /// A cap that is neither the unlimited sentinel nor a positive count
    #[error("invalid indicator cap {0}: expected -1 (unlimited) or a positive count")]
    InvalidCap(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = IndicatorError::InvalidPosition {
            position: 7,
            count: 5,
        };
        assert_eq!(
            err.to_string(),
            "page 7 is out of range for 5 indicator(s)"
        );
        assert!(IndicatorError::InvalidCap(0).to_string().contains("cap 0"));
    }
}
