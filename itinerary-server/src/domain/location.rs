//! Location identifier type.

use std::fmt;

/// Error returned when a location name is unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid location: {reason}")]
pub struct InvalidLocation {
    reason: &'static str,
}

/// A place named on a travel card.
///
/// Locations are identified by name. Surrounding whitespace is dropped at
/// construction and the remaining name must be non-empty. Two locations are
/// equal when their trimmed names are byte-for-byte equal.
///
/// # Examples
///
/// ```
/// use itinerary_server::domain::Location;
///
/// let madrid = Location::parse("  Madrid ").unwrap();
/// assert_eq!(madrid.as_str(), "Madrid");
///
/// // Blank names are rejected
/// assert!(Location::parse("").is_err());
/// assert!(Location::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location(String);

impl Location {
    /// Parse a location from its name.
    pub fn parse(s: &str) -> Result<Self, InvalidLocation> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidLocation {
                reason: "name cannot be empty",
            });
        }
        Ok(Location(trimmed.to_string()))
    }

    /// Returns the location name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the Location and returns the inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location({})", self.0)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_names() {
        assert!(Location::parse("Madrid").is_ok());
        assert!(Location::parse("Gerona Airport").is_ok());
        assert!(Location::parse("Stockholm").is_ok());
        assert!(Location::parse("New York JFK").is_ok());
    }

    #[test]
    fn trims_whitespace() {
        let loc = Location::parse("\tBarcelona \n").unwrap();
        assert_eq!(loc.as_str(), "Barcelona");
        assert_eq!(loc, Location::parse("Barcelona").unwrap());
    }

    #[test]
    fn reject_blank() {
        assert!(Location::parse("").is_err());
        assert!(Location::parse(" ").is_err());
        assert!(Location::parse("\t\n").is_err());
    }

    #[test]
    fn case_sensitive() {
        assert_ne!(
            Location::parse("madrid").unwrap(),
            Location::parse("Madrid").unwrap()
        );
    }

    #[test]
    fn display() {
        let loc = Location::parse("Stockholm").unwrap();
        assert_eq!(format!("{}", loc), "Stockholm");
    }

    #[test]
    fn debug() {
        let loc = Location::parse("Stockholm").unwrap();
        assert_eq!(format!("{:?}", loc), "Location(Stockholm)");
    }

    #[test]
    fn into_inner() {
        let loc = Location::parse("Madrid").unwrap();
        assert_eq!(loc.into_inner(), "Madrid".to_string());
    }

    #[test]
    fn error_display() {
        let err = Location::parse("").unwrap_err();
        assert_eq!(err.to_string(), "invalid location: name cannot be empty");
    }
}
