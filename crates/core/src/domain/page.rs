use super::DomainError;

/// One-based page number for listing endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Page(u64);

impl Page {
    pub const FIRST: Page = Page(1);

    pub fn new(value: i64) -> Result<Self, DomainError> {
        match u64::try_from(value) {
            Ok(v) if v >= 1 => Ok(Self(v)),
            _ => Err(DomainError::InvalidPage(value)),
        }
    }

    /// Parses a raw query value. Anything that is not an integer falls back to the first page;
    /// integers below 1 are still rejected so callers can answer with not-found.
    pub fn parse_lenient(raw: Option<&str>) -> Result<Self, DomainError> {
        match raw.map(str::trim).and_then(|s| s.parse::<i64>().ok()) {
            Some(value) => Self::new(value),
            None => Ok(Self::FIRST),
        }
    }

    pub fn number(self) -> u64 {
        self.0
    }

    /// Zero-based index, as expected by the ORM paginator.
    pub fn index(self) -> u64 {
        self.0 - 1
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}
