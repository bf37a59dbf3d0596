use thiserror::Error;

/// Why a search ended without a path. Both kinds are ordinary values the caller
/// can recover from; neither is fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The frontier ran dry before the target was reached.
    #[error("no available path found")]
    NoPathFound,
    /// A bounded run stopped before the search was decided.
    #[error("ran out of available steps after {steps} steps")]
    StepBudgetExhausted { steps: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(SearchError::NoPathFound.to_string(), "no available path found");
        assert_eq!(
            SearchError::StepBudgetExhausted { steps: 12 }.to_string(),
            "ran out of available steps after 12 steps"
        );
    }
}
