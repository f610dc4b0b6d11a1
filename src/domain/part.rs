use std::{fmt, ops::Deref, str::FromStr};

use non_empty_string::NonEmptyString;

use super::{Price, Vehicle};

/// A validated, non-empty part name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PartName(NonEmptyString);

impl PartName {
    /// Creates a new `PartName` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyNameError`] if the string is empty.
    pub fn new(s: String) -> Result<Self, EmptyNameError> {
        NonEmptyString::new(s).map(Self).map_err(|_| EmptyNameError)
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<&str> for PartName {
    type Error = EmptyNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl FromStr for PartName {
    type Err = EmptyNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

impl AsRef<str> for PartName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Deref for PartName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl fmt::Display for PartName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a part name is empty.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("part name cannot be empty")]
pub struct EmptyNameError;

/// Rules restricting which vehicles a part applies to.
///
/// Every sub-rule is optional and vacuously true when absent. A part with a
/// rule set is compatible only when all present sub-rules pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Compatibility {
    /// Engine layouts the part fits, e.g. `["Inline-4", "V6"]`.
    pub engine_types: Option<Vec<String>>,
    /// Inclusive `(min, max)` model-year range.
    pub year_range: Option<(u16, u16)>,
    /// Whether the part needs a factory turbocharged vehicle.
    ///
    /// A `Some(false)` value is a no-op rather than a "must not have a
    /// turbo" rule: the flag only ever gates a positive requirement.
    pub requires_turbo: Option<bool>,
}

impl Compatibility {
    /// Whether all present sub-rules pass for the given vehicle.
    #[must_use]
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        let engine_ok = self.engine_types.as_ref().is_none_or(|types| {
            vehicle
                .engine_type
                .as_deref()
                .is_some_and(|engine| types.iter().any(|t| t == engine))
        });

        let year_ok = self
            .year_range
            .is_none_or(|(min, max)| (min..=max).contains(&vehicle.year));

        let turbo_ok = match self.requires_turbo {
            Some(true) => vehicle.turbo == Some(true),
            _ => true,
        };

        engine_ok && year_ok && turbo_ok
    }
}

/// An aftermarket part. Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    name: PartName,
    brand: String,
    price: Price,
    description: String,
    compatibility: Option<Compatibility>,
}

impl Part {
    /// Creates a new part.
    #[must_use]
    pub fn new(
        name: PartName,
        brand: impl Into<String>,
        price: Price,
        description: impl Into<String>,
        compatibility: Option<Compatibility>,
    ) -> Self {
        Self {
            name,
            brand: brand.into(),
            price,
            description: description.into(),
            compatibility,
        }
    }

    /// The part's name.
    #[must_use]
    pub const fn name(&self) -> &PartName {
        &self.name
    }

    /// The manufacturer brand.
    #[must_use]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// The part's price.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// A one-line description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The compatibility rule set, if any.
    #[must_use]
    pub const fn compatibility(&self) -> Option<&Compatibility> {
        self.compatibility.as_ref()
    }

    /// Whether this part fits the given vehicle.
    ///
    /// A part with no compatibility rules fits every vehicle. This is a pure
    /// predicate; it never fails and never touches the data source.
    #[must_use]
    pub fn is_compatible(&self, vehicle: &Vehicle) -> bool {
        self.compatibility
            .as_ref()
            .is_none_or(|rules| rules.matches(vehicle))
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn vehicle(year: u16, engine_type: Option<&str>, turbo: Option<bool>) -> Vehicle {
        Vehicle {
            make: "TOYOTA".to_string(),
            model: "Supra".to_string(),
            year,
            manufacturer_id: 448,
            model_id: 2212,
            engine_type: engine_type.map(ToString::to_string),
            turbo,
        }
    }

    fn part(compatibility: Option<Compatibility>) -> Part {
        Part::new(
            PartName::try_from("Test Part").unwrap(),
            "Acme",
            Price::new(100.0).unwrap(),
            "a part",
            compatibility,
        )
    }

    #[test]
    fn part_name_rejects_empty_string() {
        assert_eq!(PartName::new(String::new()), Err(EmptyNameError));
    }

    #[test]
    fn part_name_preserves_content() {
        let name: PartName = "Coilover Kit".parse().unwrap();
        assert_eq!(name.as_str(), "Coilover Kit");
        assert_eq!(name.to_string(), "Coilover Kit");
    }

    #[test]
    fn no_rules_is_always_compatible() {
        let part = part(None);
        assert!(part.is_compatible(&vehicle(2023, Some("V6"), Some(true))));
        assert!(part.is_compatible(&vehicle(1960, None, None)));
    }

    #[test]
    fn empty_rule_set_is_always_compatible() {
        let part = part(Some(Compatibility::default()));
        assert!(part.is_compatible(&vehicle(1960, None, None)));
    }

    // Year-range rule in isolation: true iff min <= year <= max.
    #[test_case(1989, false; "below range")]
    #[test_case(1990, true; "lower bound inclusive")]
    #[test_case(2005, true; "inside range")]
    #[test_case(2024, true; "upper bound inclusive")]
    #[test_case(2025, false; "above range")]
    fn year_range_rule(year: u16, expected: bool) {
        let part = part(Some(Compatibility {
            year_range: Some((1990, 2024)),
            ..Compatibility::default()
        }));
        assert_eq!(part.is_compatible(&vehicle(year, None, None)), expected);
    }

    #[test]
    fn engine_type_rule_requires_membership() {
        let part = part(Some(Compatibility {
            engine_types: Some(vec!["Inline-4".to_string(), "V6".to_string()]),
            ..Compatibility::default()
        }));

        assert!(part.is_compatible(&vehicle(2023, Some("V6"), None)));
        assert!(!part.is_compatible(&vehicle(2023, Some("V8"), None)));
    }

    #[test]
    fn engine_type_rule_fails_when_vehicle_engine_unknown() {
        let part = part(Some(Compatibility {
            engine_types: Some(vec!["V6".to_string()]),
            ..Compatibility::default()
        }));

        assert!(!part.is_compatible(&vehicle(2023, None, None)));
    }

    #[test]
    fn requires_turbo_gates_on_turbo_vehicles() {
        let part = part(Some(Compatibility {
            requires_turbo: Some(true),
            ..Compatibility::default()
        }));

        assert!(part.is_compatible(&vehicle(2023, None, Some(true))));
        assert!(!part.is_compatible(&vehicle(2023, None, Some(false))));
        assert!(!part.is_compatible(&vehicle(2023, None, None)));
    }

    #[test]
    fn requires_turbo_false_is_a_no_op() {
        // The flag only gates a positive requirement; `false` never excludes.
        let part = part(Some(Compatibility {
            requires_turbo: Some(false),
            ..Compatibility::default()
        }));

        assert!(part.is_compatible(&vehicle(2023, None, Some(true))));
        assert!(part.is_compatible(&vehicle(2023, None, Some(false))));
        assert!(part.is_compatible(&vehicle(2023, None, None)));
    }

    #[test]
    fn all_present_rules_must_pass() {
        let part = part(Some(Compatibility {
            engine_types: Some(vec!["Inline-6".to_string()]),
            year_range: Some((1990, 2024)),
            requires_turbo: Some(true),
        }));

        assert!(part.is_compatible(&vehicle(2023, Some("Inline-6"), Some(true))));
        // Engine matches and year matches, but no turbo.
        assert!(!part.is_compatible(&vehicle(2023, Some("Inline-6"), Some(false))));
        // Turbo and engine match, but the year is out of range.
        assert!(!part.is_compatible(&vehicle(1985, Some("Inline-6"), Some(true))));
    }
}
