use std::{fmt, str::FromStr};

/// A part category.
///
/// Categories form a closed set; parsing an unrecognised category fails
/// loudly rather than silently producing an empty parts view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Engine internals and forced induction.
    Engine,
    /// Springs, dampers, and chassis bracing.
    Suspension,
    /// Exhaust systems and downpipes.
    Exhaust,
    /// Brake kits and pads.
    Brakes,
    /// Wheels and wheel hardware.
    Wheels,
}

impl Category {
    /// All known categories, in display order.
    pub const ALL: [Self; 5] = [
        Self::Engine,
        Self::Suspension,
        Self::Exhaust,
        Self::Brakes,
        Self::Wheels,
    ];

    /// Returns the lowercase name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Engine => "engine",
            Self::Suspension => "suspension",
            Self::Exhaust => "exhaust",
            Self::Brakes => "brakes",
            Self::Wheels => "wheels",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == lowered)
            .ok_or_else(|| UnknownCategoryError(s.to_string()))
    }
}

impl TryFrom<&str> for Category {
    type Error = UnknownCategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_str(value)
    }
}

/// Error returned when a string names no known part category.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown part category '{0}': expected one of engine, suspension, exhaust, brakes, wheels")]
pub struct UnknownCategoryError(String);
