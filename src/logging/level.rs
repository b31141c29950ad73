//! Severity levels and their ordering

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Log severity, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
}

impl Level {
    /// All levels in ascending order
    pub const ALL: [Level; 4] = [Level::Debug, Level::Info, Level::Warning, Level::Error];

    /// Canonical upper-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        }
    }
}

/// True if `candidate` is at or above `threshold`
///
/// A sink with minimum level `threshold` accepts exactly these messages.
pub fn is_at_least(candidate: Level, threshold: Level) -> bool {
    threshold <= candidate
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a canonical level name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level {0:?}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    // Case-sensitive on purpose: "debug" is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);
    }

    #[test]
    fn test_is_at_least_every_pair() {
        for threshold in Level::ALL {
            for candidate in Level::ALL {
                let expected = Level::ALL.iter().position(|l| *l == threshold)
                    <= Level::ALL.iter().position(|l| *l == candidate);
                assert_eq!(
                    is_at_least(candidate, threshold),
                    expected,
                    "candidate {} threshold {}",
                    candidate,
                    threshold
                );
            }
        }
    }

    #[test]
    fn test_parse_canonical_names() {
        for level in Level::ALL {
            assert_eq!(level.as_str().parse::<Level>(), Ok(level));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("debug".parse::<Level>().is_err());
        assert!("Warning".parse::<Level>().is_err());
        assert_eq!(
            "WARN".parse::<Level>(),
            Err(ParseLevelError("WARN".to_string()))
        );
    }
}
