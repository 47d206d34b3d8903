//! Station types.

use std::fmt;

/// Error returned when parsing an invalid station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStationName {
    reason: &'static str,
}

/// Maximum length of a station name, in characters.
const MAX_NAME_CHARS: usize = 255;

/// Unique identifier of a station.
///
/// Assigned by the station store on creation. Identifiers increase
/// monotonically from 1 and are never reused within a process lifetime,
/// so a deleted station's id stays dangling rather than pointing at a
/// later record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub u64);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated station name.
///
/// Station names are caller-supplied display text. This type guarantees
/// that any `StationName` value is non-blank and at most 255 characters.
/// Leading and trailing whitespace is trimmed on parse.
///
/// # Examples
///
/// ```
/// use subway_server::domain::StationName;
///
/// let name = StationName::parse("강남역").unwrap();
/// assert_eq!(name.as_str(), "강남역");
///
/// // Blank names are rejected
/// assert!(StationName::parse("").is_err());
/// assert!(StationName::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StationName(String);

impl StationName {
    /// Parse a station name from a string.
    ///
    /// The input is trimmed; the trimmed name must be non-empty and at
    /// most 255 characters.
    pub fn parse(s: &str) -> Result<Self, InvalidStationName> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidStationName {
                reason: "must not be blank",
            });
        }

        if trimmed.chars().count() > MAX_NAME_CHARS {
            return Err(InvalidStationName {
                reason: "must be at most 255 characters",
            });
        }

        Ok(StationName(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A subway station record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    /// Identifier assigned by the store on creation
    pub id: StationId,

    /// Display name provided by the caller
    pub name: StationName,
}
