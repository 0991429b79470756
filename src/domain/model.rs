use crate::utils::error::Rejection;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of digits in a squawk code.
pub const CODE_LEN: usize = 4;

/// Size of the digit alphabet (`0`..=`7`).
pub const OCTAL_RADIX: u8 = 8;

/// Codes that may never be handed out for routine assignment.
pub const RESERVED_CODES: [&str; 3] = ["7500", "7600", "7700"];

/// Meaning of a reserved code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Emergency {
    Hijack,
    RadioFailure,
    General,
}

impl Emergency {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "7500" => Some(Emergency::Hijack),
            "7600" => Some(Emergency::RadioFailure),
            "7700" => Some(Emergency::General),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Emergency::Hijack => "7500",
            Emergency::RadioFailure => "7600",
            Emergency::General => "7700",
        }
    }
}

impl fmt::Display for Emergency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Emergency::Hijack => "hijack",
            Emergency::RadioFailure => "radio failure",
            Emergency::General => "general emergency",
        };
        write!(f, "{} ({})", self.code(), label)
    }
}

/// A well-formed four digit octal code.
///
/// Holds ASCII digits so leading zeros survive: `"0000"` and `"0"` are not
/// the same thing. A reserved code is still well formed; use
/// [`SquawkCode::is_assignable`] to ask whether it may be issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SquawkCode([u8; CODE_LEN]);

impl SquawkCode {
    /// Builds a code from digit values. Every value must be below 8.
    pub(crate) fn from_digits(digits: [u8; CODE_LEN]) -> Self {
        debug_assert!(digits.iter().all(|d| *d < OCTAL_RADIX));
        Self(digits.map(|d| b'0' + d))
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII '0'..='7' is ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    pub fn emergency(&self) -> Option<Emergency> {
        Emergency::from_code(self.as_str())
    }

    pub fn is_reserved(&self) -> bool {
        RESERVED_CODES.contains(&self.as_str())
    }

    pub fn is_assignable(&self) -> bool {
        !self.is_reserved()
    }
}

impl FromStr for SquawkCode {
    type Err = Rejection;

    /// Checks length and alphabet only. Reservation is not a format error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let found = s.chars().count();
        if found != CODE_LEN {
            return Err(Rejection::Length { found });
        }

        let mut digits = [0u8; CODE_LEN];
        for (index, ch) in s.chars().enumerate() {
            match ch {
                '0'..='7' => digits[index] = ch as u8 - b'0',
                found => return Err(Rejection::Digit { index, found }),
            }
        }

        Ok(Self::from_digits(digits))
    }
}

impl fmt::Display for SquawkCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for SquawkCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Serialize for SquawkCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SquawkCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
