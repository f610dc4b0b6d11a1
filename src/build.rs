//! The build accumulator.
//!
//! A build is the user's in-progress selection of parts and its running
//! total cost. Entries keep insertion order, duplicates by name are allowed,
//! and removal by name removes every matching entry; that remove-all
//! behavior is the deliberate, tested contract.

use crate::domain::{Category, Part, Price};

/// One selected part in a build.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// The category the part was selected from.
    pub category: Category,
    /// The part's name.
    pub name: String,
    /// The part's price at selection time.
    pub price: Price,
}

/// An ordered list of selected parts with a running total.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BuildList {
    selections: Vec<Selection>,
}

impl BuildList {
    /// Creates an empty build.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selections: Vec::new(),
        }
    }

    /// Appends a selection unconditionally.
    ///
    /// No uniqueness check and no compatibility re-validation happen here;
    /// callers decide what is offered.
    pub fn add(&mut self, category: Category, name: impl Into<String>, price: Price) {
        self.selections.push(Selection {
            category,
            name: name.into(),
            price,
        });
    }

    /// Appends a part as a selection.
    pub fn add_part(&mut self, category: Category, part: &Part) {
        self.add(category, part.name().as_str(), part.price());
    }

    /// Removes every selection whose name matches exactly.
    ///
    /// A name with no matches is a no-op.
    pub fn remove_by_name(&mut self, name: &str) {
        self.selections.retain(|selection| selection.name != name);
    }

    /// The sum of all selected prices; zero for an empty build.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.selections
            .iter()
            .map(|selection| selection.price.get())
            .sum()
    }

    /// The selections, in insertion order.
    #[must_use]
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    /// The number of selections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    /// Whether the build is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Removes every selection.
    pub fn clear(&mut self) {
        self.selections.clear();
    }
}
