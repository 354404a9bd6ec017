use thiserror::Error;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum CalcError {
    #[error("life expectancy ({life_expectancy}) must be greater than current age ({age})")]
    InvalidHorizon { age: u32, life_expectancy: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_horizon_names_both_ages() {
        let err = CalcError::InvalidHorizon {
            age: 70,
            life_expectancy: 70,
        };
        assert_eq!(
            err.to_string(),
            "life expectancy (70) must be greater than current age (70)"
        );
    }
}
