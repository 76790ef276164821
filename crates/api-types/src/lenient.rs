use serde::{Deserialize, Deserializer};

// Browser clients send numeric form values either as JSON numbers or as strings ("3").
#[derive(Deserialize)]
#[serde(untagged)]
enum RawInt {
    Number(i64),
    Text(String),
}

/// An integer that may arrive as a JSON number or a numeric string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LenientInt(i64);

impl LenientInt {
    pub fn value(self) -> i64 {
        self.0
    }

    /// Narrows to `i32`, the width of database ids.
    pub fn as_i32(self) -> Option<i32> {
        i32::try_from(self.0).ok()
    }
}

impl From<i64> for LenientInt {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for LenientInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawInt::deserialize(deserializer)? {
            RawInt::Number(v) => Ok(Self(v)),
            RawInt::Text(s) => s.trim().parse::<i64>().map(Self).map_err(|_| {
                serde::de::Error::custom(format!("Wrong value {s}, can not parse to integer"))
            }),
        }
    }
}
