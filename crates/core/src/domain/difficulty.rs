use super::DomainError;

/// Question difficulty rating. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Difficulty(i32);

impl Difficulty {
    pub const MIN: i32 = 1;

    pub fn new(value: i64) -> Result<Self, DomainError> {
        match i32::try_from(value) {
            Ok(v) if v >= Self::MIN => Ok(Self(v)),
            _ => Err(DomainError::InvalidDifficulty(value)),
        }
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

impl TryFrom<i64> for Difficulty {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i32> for Difficulty {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Difficulty> for i32 {
    fn from(value: Difficulty) -> Self {
        value.value()
    }
}

#[cfg(test)]
mod tests {
    use super::Difficulty;

    #[test]
    fn positive_difficulty_is_created() {
        let difficulty = Difficulty::new(5).expect("5 should be valid");

        assert_eq!(difficulty.value(), 5);
    }

    #[test]
    fn zero_difficulty_is_rejected() {
        let err = Difficulty::new(0).expect_err("0 should be rejected");

        assert_eq!(
            err.to_string(),
            "invalid difficulty: 0. difficulty must be a positive integer"
        );
    }

    #[test]
    fn out_of_range_difficulty_is_rejected() {
        assert!(Difficulty::new(i64::from(i32::MAX) + 1).is_err());
        assert!(Difficulty::new(-3).is_err());
    }
}
