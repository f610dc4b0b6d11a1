//! Session state for a browsing run.
//!
//! A [`Session`] owns the catalog store, the parts catalog, the specs cache,
//! the current build, and the user's selection. It is the explicit
//! replacement for the ambient globals the presentation layer would
//! otherwise reach for, which keeps every operation testable without a UI.

use crate::{
    build::BuildList,
    catalog::{
        CatalogStore, LoadError, LoadOptions, Page, PartsDb, SpecsCache, VehicleSource, paginate,
    },
    domain::{Category, Part, Vehicle, VehicleId, VehicleSpecs},
};

/// Errors from session commands.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    /// A command needing a selected vehicle ran before any selection.
    #[error("no vehicle selected: select a vehicle first")]
    NoVehicleSelected,

    /// The requested vehicle is not in the catalog.
    #[error("no vehicle in the catalog matches {0}")]
    UnknownVehicle(VehicleId),

    /// The named part does not exist in the category.
    #[error("no part named '{name}' in the {category} category")]
    UnknownPart {
        /// The category that was searched.
        category: Category,
        /// The requested part name.
        name: String,
    },
}

/// Errors when fetching specs for the selected vehicle.
#[derive(Debug, thiserror::Error)]
pub enum SpecsError {
    /// No vehicle is selected.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The data source failed.
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// All mutable state for one browsing run.
#[derive(Debug)]
pub struct Session {
    store: CatalogStore,
    parts: PartsDb,
    specs: SpecsCache,
    build: BuildList,
    selected: Option<VehicleId>,
    page: usize,
    page_size: usize,
}

impl Session {
    /// Creates a session over the given parts catalog.
    #[must_use]
    pub fn new(parts: PartsDb, page_size: usize) -> Self {
        Self {
            store: CatalogStore::new(),
            parts,
            specs: SpecsCache::new(),
            build: BuildList::new(),
            selected: None,
            page: 0,
            page_size,
        }
    }

    /// Loads the vehicle catalog, resetting the selection and page.
    ///
    /// The build is kept: reloading the catalog does not discard parts the
    /// user already picked.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the source fails; the catalog is empty
    /// afterwards.
    pub fn load_catalog(
        &mut self,
        source: &dyn VehicleSource,
        options: &LoadOptions,
    ) -> Result<usize, LoadError> {
        self.selected = None;
        self.page = 0;
        self.store.load(source, options)
    }

    /// The underlying vehicle store.
    #[must_use]
    pub const fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// The parts catalog.
    #[must_use]
    pub const fn parts(&self) -> &PartsDb {
        &self.parts
    }

    /// The current page of vehicles.
    #[must_use]
    pub fn current_page(&self) -> Page<'_, Vehicle> {
        paginate(self.store.vehicles(), self.page, self.page_size)
    }

    /// The current 0-indexed page number.
    #[must_use]
    pub const fn page_number(&self) -> usize {
        self.page
    }

    /// Advances to the next page if one exists. Returns whether it moved.
    pub fn next_page(&mut self) -> bool {
        if self.current_page().has_next {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Steps back to the previous page if one exists. Returns whether it
    /// moved.
    pub fn prev_page(&mut self) -> bool {
        if self.current_page().has_prev {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Searches vehicles by display name.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&Vehicle> {
        self.store.search(term)
    }

    /// Selects a vehicle by identity.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownVehicle`] if the catalog has no such
    /// vehicle.
    pub fn select(&mut self, id: VehicleId) -> Result<&Vehicle, SessionError> {
        let Some(vehicle) = self.store.find(&id) else {
            return Err(SessionError::UnknownVehicle(id));
        };
        self.selected = Some(vehicle.id());
        Ok(vehicle)
    }

    /// The currently selected vehicle, if any.
    #[must_use]
    pub fn selected_vehicle(&self) -> Option<&Vehicle> {
        self.selected.as_ref().and_then(|id| self.store.find(id))
    }

    /// Specs for the selected vehicle, fetched on first view.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoVehicleSelected`] with no selection, or the
    /// source's [`LoadError`] if the fetch fails.
    pub fn specs_for_selected(
        &mut self,
        source: &dyn VehicleSource,
    ) -> Result<&VehicleSpecs, SpecsError> {
        let vehicle = self
            .selected
            .as_ref()
            .and_then(|id| self.store.find(id))
            .ok_or(SessionError::NoVehicleSelected)?
            .clone();
        Ok(self.specs.get_or_fetch(&vehicle, source)?)
    }

    /// Parts in a category that fit the selected vehicle.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoVehicleSelected`] with no selection.
    pub fn compatible_parts(&self, category: Category) -> Result<Vec<&Part>, SessionError> {
        let vehicle = self
            .selected_vehicle()
            .ok_or(SessionError::NoVehicleSelected)?;
        Ok(self.parts.compatible_parts(category, vehicle))
    }

    /// Adds a part to the build by category and name.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownPart`] if no part in the category has
    /// that name.
    pub fn add_to_build(&mut self, category: Category, name: &str) -> Result<(), SessionError> {
        let Some(part) = self
            .parts
            .parts_in(category)
            .iter()
            .find(|part| part.name().as_str() == name)
        else {
            return Err(SessionError::UnknownPart {
                category,
                name: name.to_string(),
            });
        };
        let (name, price) = (part.name().as_str().to_string(), part.price());
        self.build.add(category, name, price);
        Ok(())
    }

    /// Removes every build entry with the given name.
    pub fn remove_from_build(&mut self, name: &str) {
        self.build.remove_by_name(name);
    }

    /// The current build.
    #[must_use]
    pub const fn build(&self) -> &BuildList {
        &self.build
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DEFAULT_PAGE_SIZE, MakeRecord, ModelRecord, StaticSource};

    /// A source that fails when listing models.
    struct FailingSource;

    impl VehicleSource for FailingSource {
        fn all_makes(&self) -> Result<Vec<MakeRecord>, LoadError> {
            Ok(vec![MakeRecord {
                id: 1,
                name: "TOYOTA".to_string(),
            }])
        }

        fn models_for_make(&self, _make_id: u32) -> Result<Vec<ModelRecord>, LoadError> {
            let bad = serde_json::from_str::<Vec<ModelRecord>>("not json").unwrap_err();
            Err(bad.into())
        }

        fn vehicle_type_for_make(&self, _make_id: u32) -> Result<Option<String>, LoadError> {
            Ok(None)
        }
    }

    fn loaded_session() -> Session {
        let mut session = Session::new(PartsDb::stock(), DEFAULT_PAGE_SIZE);
        session
            .load_catalog(&StaticSource::sample(), &LoadOptions {
                model_year: 2023,
                make_limit: 5,
            })
            .unwrap();
        session
    }

    fn supra_id(session: &Session) -> VehicleId {
        session.search("supra")[0].id()
    }

    #[test]
    fn load_resets_selection_and_page() {
        let mut session = loaded_session();
        let id = supra_id(&session);
        session.select(id).unwrap();
        session.next_page();

        session
            .load_catalog(&StaticSource::sample(), &LoadOptions {
                model_year: 2023,
                make_limit: 5,
            })
            .unwrap();

        assert!(session.selected_vehicle().is_none());
        assert_eq!(session.page_number(), 0);
    }

    #[test]
    fn failed_catalog_load_surfaces_the_error_and_empties_the_session() {
        let mut session = loaded_session();
        let id = supra_id(&session);
        session.select(id).unwrap();

        let result = session.load_catalog(&FailingSource, &LoadOptions {
            model_year: 2023,
            make_limit: 5,
        });

        assert!(matches!(result, Err(LoadError::Malformed(_))));
        assert!(session.store().is_empty());
        assert!(session.selected_vehicle().is_none());
    }

    #[test]
    fn select_validates_against_the_catalog() {
        let mut session = loaded_session();
        let bogus = VehicleId {
            manufacturer_id: 0,
            model_id: 0,
            year: 1900,
        };

        assert_eq!(
            session.select(bogus.clone()),
            Err(SessionError::UnknownVehicle(bogus))
        );
        assert!(session.selected_vehicle().is_none());
    }

    #[test]
    fn select_then_query_compatible_parts() {
        let mut session = loaded_session();
        let id = supra_id(&session);
        session.select(id).unwrap();

        let parts = session.compatible_parts(Category::Wheels).unwrap();
        assert!(!parts.is_empty());
    }

    #[test]
    fn compatible_parts_requires_a_selection() {
        let session = loaded_session();
        assert_eq!(
            session.compatible_parts(Category::Engine),
            Err(SessionError::NoVehicleSelected)
        );
    }

    #[test]
    fn add_to_build_looks_up_the_price() {
        let mut session = loaded_session();
        session
            .add_to_build(Category::Suspension, "Coilover Kit")
            .unwrap();
        session
            .add_to_build(Category::Engine, "High-Flow Turbocharger")
            .unwrap();

        assert!((session.build().total() - 5700.0).abs() < f64::EPSILON);
    }

    #[test]
    fn add_unknown_part_fails_fast() {
        let mut session = loaded_session();
        let error = session
            .add_to_build(Category::Engine, "Flux Capacitor")
            .unwrap_err();
        assert_eq!(error, SessionError::UnknownPart {
            category: Category::Engine,
            name: "Flux Capacitor".to_string(),
        });
        assert!(session.build().is_empty());
    }

    #[test]
    fn remove_from_build_removes_all_matching() {
        let mut session = loaded_session();
        session
            .add_to_build(Category::Brakes, "Performance Brake Pads")
            .unwrap();
        session
            .add_to_build(Category::Brakes, "Performance Brake Pads")
            .unwrap();

        session.remove_from_build("Performance Brake Pads");
        assert!(session.build().is_empty());
    }

    #[test]
    fn build_survives_a_catalog_reload() {
        let mut session = loaded_session();
        session
            .add_to_build(Category::Wheels, "Forged Wheel Set")
            .unwrap();

        session
            .load_catalog(&StaticSource::sample(), &LoadOptions {
                model_year: 2023,
                make_limit: 5,
            })
            .unwrap();

        assert_eq!(session.build().len(), 1);
    }

    #[test]
    fn pagination_walks_forward_and_back() {
        let mut session = Session::new(PartsDb::stock(), 3);
        session
            .load_catalog(&StaticSource::sample(), &LoadOptions {
                model_year: 2023,
                make_limit: 5,
            })
            .unwrap();

        // 7 sample vehicles, 3 per page.
        assert_eq!(session.current_page().visible.len(), 3);
        assert!(session.next_page());
        assert!(session.next_page());
        assert_eq!(session.current_page().visible.len(), 1);
        assert!(!session.next_page());
        assert!(session.prev_page());
        assert_eq!(session.page_number(), 1);
    }

    #[test]
    fn specs_for_selected_uses_the_cache() {
        let mut session = loaded_session();
        let id = supra_id(&session);
        session.select(id).unwrap();

        let source = StaticSource::sample();
        let specs = session.specs_for_selected(&source).unwrap().clone();
        assert_eq!(specs.vehicle_type, "Passenger Car");
    }

    #[test]
    fn specs_without_selection_is_an_error() {
        let mut session = loaded_session();
        let source = StaticSource::sample();
        assert!(matches!(
            session.specs_for_selected(&source),
            Err(SpecsError::Session(SessionError::NoVehicleSelected))
        ));
    }
}
