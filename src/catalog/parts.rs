//! The static parts catalog.
//!
//! Parts are a constant fixture loaded once at startup; they are never
//! edited at runtime.

use std::collections::BTreeMap;

use crate::domain::{Category, Compatibility, Part, PartName, Price, Vehicle};

/// The catalog of parts, grouped by category.
#[derive(Debug, Clone, PartialEq)]
pub struct PartsDb {
    categories: BTreeMap<Category, Vec<Part>>,
}

impl PartsDb {
    /// The built-in stock catalog.
    #[must_use]
    pub fn stock() -> Self {
        let mut categories = BTreeMap::new();

        categories.insert(
            Category::Engine,
            vec![
                part(
                    "High-Flow Turbocharger",
                    "Garrett",
                    3500.0,
                    "Boost pressure up to 25 PSI",
                    Some(Compatibility {
                        engine_types: Some(strings(&["Inline-4", "Inline-6", "V6"])),
                        year_range: Some((1990, 2024)),
                        requires_turbo: Some(false),
                    }),
                ),
                part(
                    "Cold Air Intake",
                    "K&N",
                    350.0,
                    "Free-flowing intake with washable filter",
                    Some(Compatibility {
                        year_range: Some((1985, 2024)),
                        ..Compatibility::default()
                    }),
                ),
                part(
                    "Performance Camshaft",
                    "COMP Cams",
                    890.0,
                    "Aggressive lift profile for high-rpm power",
                    Some(Compatibility {
                        engine_types: Some(strings(&["V6", "V8"])),
                        ..Compatibility::default()
                    }),
                ),
                part(
                    "Electronic Boost Controller",
                    "HKS",
                    420.0,
                    "Precise boost targets by gear",
                    Some(Compatibility {
                        year_range: Some((1995, 2024)),
                        requires_turbo: Some(true),
                        ..Compatibility::default()
                    }),
                ),
            ],
        );

        categories.insert(
            Category::Suspension,
            vec![
                part(
                    "Coilover Kit",
                    "KW",
                    2200.0,
                    "Adjustable height and damping",
                    Some(Compatibility {
                        year_range: Some((1990, 2024)),
                        ..Compatibility::default()
                    }),
                ),
                part(
                    "Adjustable Sway Bar Set",
                    "Whiteline",
                    480.0,
                    "Front and rear bars with three stiffness settings",
                    Some(Compatibility {
                        year_range: Some((1995, 2024)),
                        ..Compatibility::default()
                    }),
                ),
                part(
                    "Polyurethane Bushing Kit",
                    "Energy Suspension",
                    260.0,
                    "Full-chassis bushing refresh",
                    None,
                ),
            ],
        );

        categories.insert(
            Category::Exhaust,
            vec![
                part(
                    "Cat-Back Exhaust",
                    "Borla",
                    1250.0,
                    "Stainless system with polished tips",
                    Some(Compatibility {
                        year_range: Some((1990, 2024)),
                        ..Compatibility::default()
                    }),
                ),
                part(
                    "Stainless Downpipe",
                    "Invidia",
                    540.0,
                    "3-inch downpipe with high-flow cat",
                    Some(Compatibility {
                        requires_turbo: Some(true),
                        ..Compatibility::default()
                    }),
                ),
            ],
        );

        categories.insert(
            Category::Brakes,
            vec![
                part(
                    "Big Brake Kit",
                    "Brembo",
                    2800.0,
                    "6-piston calipers with 380mm rotors",
                    Some(Compatibility {
                        year_range: Some((2000, 2024)),
                        ..Compatibility::default()
                    }),
                ),
                part(
                    "Performance Brake Pads",
                    "Hawk",
                    180.0,
                    "High-torque street and track pads",
                    None,
                ),
            ],
        );

        categories.insert(
            Category::Wheels,
            vec![
                part(
                    "Forged Wheel Set",
                    "BBS",
                    3200.0,
                    "18x9.5 forged monoblock, set of four",
                    None,
                ),
                part(
                    "Titanium Lug Nuts",
                    "Project Kics",
                    160.0,
                    "Lightweight open-ended lug nuts",
                    None,
                ),
            ],
        );

        Self { categories }
    }

    /// All parts in a category, unfiltered.
    #[must_use]
    pub fn parts_in(&self, category: Category) -> &[Part] {
        self.categories
            .get(&category)
            .map_or(&[], Vec::as_slice)
    }

    /// Parts in a category that fit the given vehicle.
    #[must_use]
    pub fn compatible_parts(&self, category: Category, vehicle: &Vehicle) -> Vec<&Part> {
        self.parts_in(category)
            .iter()
            .filter(|part| part.is_compatible(vehicle))
            .collect()
    }

    /// The total number of parts across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// Whether the catalog holds no parts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for PartsDb {
    fn default() -> Self {
        Self::stock()
    }
}

fn part(
    name: &str,
    brand: &str,
    price: f64,
    description: &str,
    compatibility: Option<Compatibility>,
) -> Part {
    // Stock literals are non-empty names with finite, non-negative prices;
    // the tests construct the whole fixture and would catch a bad entry.
    let (Ok(name), Ok(price)) = (PartName::try_from(name), Price::new(price)) else {
        unreachable!("invalid stock catalog literal: {name} at {price}");
    };
    Part::new(name, brand, price, description, compatibility)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
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

    #[test]
    fn stock_covers_every_category() {
        let db = PartsDb::stock();
        for category in Category::ALL {
            assert!(
                !db.parts_in(category).is_empty(),
                "category {category} has no stock parts"
            );
        }
    }

    #[test]
    fn stock_contains_the_reference_parts() {
        let db = PartsDb::stock();

        let turbo = db
            .parts_in(Category::Engine)
            .iter()
            .find(|p| p.name().as_str() == "High-Flow Turbocharger")
            .unwrap();
        assert_eq!(turbo.brand(), "Garrett");
        assert!((turbo.price().get() - 3500.0).abs() < f64::EPSILON);

        let coilovers = db
            .parts_in(Category::Suspension)
            .iter()
            .find(|p| p.name().as_str() == "Coilover Kit")
            .unwrap();
        assert_eq!(coilovers.brand(), "KW");
        assert!((coilovers.price().get() - 2200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn compatible_parts_filters_by_vehicle() {
        let db = PartsDb::stock();
        let non_turbo_v8 = vehicle(2023, Some("V8"), Some(false));

        let names: Vec<&str> = db
            .compatible_parts(Category::Engine, &non_turbo_v8)
            .iter()
            .map(|p| p.name().as_str())
            .collect();

        // The turbocharger requires a listed engine type; the boost
        // controller requires a turbo.
        assert!(!names.contains(&"High-Flow Turbocharger"));
        assert!(!names.contains(&"Electronic Boost Controller"));
        assert!(names.contains(&"Cold Air Intake"));
        assert!(names.contains(&"Performance Camshaft"));
    }

    #[test]
    fn unrestricted_parts_fit_everything() {
        let db = PartsDb::stock();
        let ancient = vehicle(1950, None, None);

        let wheels = db.compatible_parts(Category::Wheels, &ancient);
        assert_eq!(wheels.len(), db.parts_in(Category::Wheels).len());
    }

    #[test]
    fn len_counts_all_categories() {
        let db = PartsDb::stock();
        let by_category: usize = Category::ALL
            .into_iter()
            .map(|c| db.parts_in(c).len())
            .sum();
        assert_eq!(db.len(), by_category);
        assert!(!db.is_empty());
    }

    #[test]
    fn stock_constructs_every_fixture_entry() {
        // Pins the fixture size so a literal that fails validation cannot
        // silently shrink the catalog.
        assert_eq!(PartsDb::stock().len(), 13);
    }
}
