//! Section registry: which controller owns which section.
//!
//! The registry keeps bindings in registration order plus an optional default
//! controller for everything left unbound. Lookups walk the bindings, so they
//! are linear in the number of registrations; a table rarely has more than a
//! handful.

use sectional_core::{
    ControllerRef, IndexPath, Numbering, RouterError, SectionBinding, SectionRange,
    SharedController, TableView, Translation,
};
use std::fmt;

/// How a section was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Through the binding at this position in registration order.
    Binding(usize),
    /// Through the default controller.
    Default,
}

/// The outcome of resolving a widget section.
pub struct Resolved<T: TableView + ?Sized> {
    controller: SharedController<T>,
    section: usize,
    translation: Translation,
    route: Route,
}

impl<T: TableView + ?Sized> Resolved<T> {
    /// The controller owning the section, kept alive for the call.
    pub fn controller(&self) -> &SharedController<T> {
        &self.controller
    }

    /// Consume the resolution, keeping only the controller.
    pub fn into_controller(self) -> SharedController<T> {
        self.controller
    }

    /// The widget section that was resolved.
    pub fn section(&self) -> usize {
        self.section
    }

    /// The section as the controller numbers it.
    pub fn local_section(&self) -> usize {
        self.translation.to_local(self.section)
    }

    /// Translation between the widget's numbering and the controller's.
    pub fn translation(&self) -> Translation {
        self.translation
    }

    /// Which registration answered.
    pub fn route(&self) -> Route {
        self.route
    }

    /// Returns `true` if both sections are served by the same registration.
    pub fn same_route(&self, other: &Resolved<T>) -> bool {
        self.route == other.route
    }

    /// Widget index path to controller index path.
    pub fn local_path(&self, index: IndexPath) -> IndexPath {
        self.translation.local_path(index)
    }

    /// Controller index path back to widget index path.
    pub fn global_path(&self, index: IndexPath) -> IndexPath {
        self.translation.global_path(index)
    }
}

impl<T: TableView + ?Sized> fmt::Debug for Resolved<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolved")
            .field("section", &self.section)
            .field("local_section", &self.local_section())
            .field("route", &self.route)
            .finish_non_exhaustive()
    }
}

/// Ordered section bindings plus an optional default controller.
///
/// # Overlapping Bindings
///
/// Overlap is never rejected. When several bindings cover a section the most
/// recently registered one owns it.
///
/// # Sizing
///
/// Without a default controller the widget has exactly the explicit section
/// count, and sections outside it never resolve. With a default controller the
/// count is the width of every binding plus whatever the default controller
/// reports, and the explicit count is ignored.
pub struct SectionRegistry<T: TableView + ?Sized> {
    bindings: Vec<SectionBinding<T>>,
    default_controller: Option<ControllerRef<T>>,
    section_count: usize,
}

impl<T: TableView + ?Sized> Default for SectionRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TableView + ?Sized> SectionRegistry<T> {
    /// Create a registry sized for a single section.
    pub fn new() -> Self {
        Self::with_section_count(1)
    }

    /// Create a registry sized for `section_count` sections.
    pub fn with_section_count(section_count: usize) -> Self {
        Self {
            bindings: Vec::new(),
            default_controller: None,
            section_count,
        }
    }

    /// Set the controller serving every section no binding covers.
    pub fn set_default_controller(&mut self, controller: impl Into<ControllerRef<T>>) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            replaced = self.default_controller.is_some(),
            "default section controller set"
        );
        self.default_controller = Some(controller.into());
    }

    /// Bind `controller` to sections `start..=stop`, numbered from zero.
    pub fn add_binding(
        &mut self,
        controller: impl Into<ControllerRef<T>>,
        start: usize,
        stop: usize,
    ) -> Result<(), RouterError> {
        self.add_binding_with(controller, start, stop, Numbering::Local)
    }

    /// Bind `controller` to a single section.
    pub fn add_binding_for_section(
        &mut self,
        controller: impl Into<ControllerRef<T>>,
        section: usize,
    ) {
        self.push(SectionBinding::new(
            SectionRange::single(section),
            Numbering::Local,
            controller.into(),
        ));
    }

    /// Bind `controller` to sections `start..=stop` with an explicit numbering.
    pub fn add_binding_with(
        &mut self,
        controller: impl Into<ControllerRef<T>>,
        start: usize,
        stop: usize,
        numbering: Numbering,
    ) -> Result<(), RouterError> {
        let range = SectionRange::new(start, stop)?;
        self.push(SectionBinding::new(range, numbering, controller.into()));
        Ok(())
    }

    fn push(&mut self, binding: SectionBinding<T>) {
        #[cfg(feature = "tracing")]
        {
            let range = binding.range();
            if let Some(existing) = self.bindings.iter().find(|b| b.range().overlaps(&range)) {
                tracing::warn!(
                    new = %range,
                    existing = %existing.range(),
                    "section binding overlaps an earlier one; the newer binding wins"
                );
            }
            tracing::debug!(
                range = %range,
                numbering = ?binding.numbering(),
                "section controller bound"
            );
        }
        self.bindings.push(binding);
    }

    /// Find the controller owning `section` and its translation.
    pub fn resolve(&self, section: usize) -> Result<Resolved<T>, RouterError> {
        let result = self.lookup(section);

        #[cfg(feature = "tracing")]
        {
            match &result {
                Ok(resolved) => tracing::trace!(
                    section,
                    local = resolved.local_section(),
                    route = ?resolved.route(),
                    "section resolved"
                ),
                Err(error) => tracing::debug!(section, %error, "section failed to resolve"),
            }
        }

        result
    }

    fn lookup(&self, section: usize) -> Result<Resolved<T>, RouterError> {
        if self.default_controller.is_none() && section >= self.section_count {
            return Err(RouterError::UnresolvedSection { section });
        }

        // Newest registration wins on overlap.
        let bound = self
            .bindings
            .iter()
            .enumerate()
            .rev()
            .find(|(_, binding)| binding.range().contains(section));

        let (handle, translation, route) = match (bound, &self.default_controller) {
            (Some((position, binding)), _) => (
                binding.controller(),
                binding.translation(),
                Route::Binding(position),
            ),
            (None, Some(default)) => (default, Translation::Identity, Route::Default),
            (None, None) => return Err(RouterError::UnresolvedSection { section }),
        };

        let controller = handle
            .upgrade()
            .ok_or(RouterError::ReleasedController { section })?;

        Ok(Resolved {
            controller,
            section,
            translation,
            route,
        })
    }

    /// Total number of sections the widget should display.
    ///
    /// Asks the default controller for its own count when one is set. The sum
    /// saturates at `usize::MAX`.
    pub fn total_section_count(&self, table: &T) -> Result<usize, RouterError> {
        let Some(default) = &self.default_controller else {
            return Ok(self.section_count);
        };
        let default = default.upgrade().ok_or(RouterError::DefaultReleased)?;
        let bound = self
            .bindings
            .iter()
            .fold(0usize, |total, b| total.saturating_add(b.range().width()));
        Ok(bound.saturating_add(default.number_of_sections(table)))
    }

    /// Resolve every section the widget will ask about.
    ///
    /// Returns the first failure, which is exactly the error a dispatch to that
    /// section would produce.
    pub fn validate(&self, table: &T) -> Result<(), RouterError> {
        let total = self.total_section_count(table)?;
        for section in 0..total {
            self.resolve(section)?;
        }
        Ok(())
    }

    /// Registration positions of every pair of overlapping bindings.
    pub fn overlapping_bindings(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (i, a) in self.bindings.iter().enumerate() {
            for (j, b) in self.bindings.iter().enumerate().skip(i + 1) {
                if a.range().overlaps(&b.range()) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    /// Bindings in registration order.
    pub fn bindings(&self) -> &[SectionBinding<T>] {
        &self.bindings
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if nothing has been bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// The default controller, if set.
    pub fn default_controller(&self) -> Option<&ControllerRef<T>> {
        self.default_controller.as_ref()
    }

    /// Returns `true` if a default controller is set.
    pub fn has_default(&self) -> bool {
        self.default_controller.is_some()
    }

    /// The section count given at construction.
    pub fn explicit_section_count(&self) -> usize {
        self.section_count
    }
}

impl<T: TableView + ?Sized> Clone for SectionRegistry<T> {
    fn clone(&self) -> Self {
        Self {
            bindings: self.bindings.clone(),
            default_controller: self.default_controller.clone(),
            section_count: self.section_count,
        }
    }
}

impl<T: TableView + ?Sized> fmt::Debug for SectionRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionRegistry")
            .field("bindings", &self.bindings)
            .field("default_controller", &self.default_controller)
            .field("section_count", &self.section_count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FixedController, RecordingController, TestTable};
    use std::rc::Rc;

    #[test]
    fn test_binding_translates_to_local_sections() {
        let c = Rc::new(RecordingController::new("c"));
        let mut registry = SectionRegistry::<TestTable>::with_section_count(5);
        registry.add_binding(&c, 2, 4).unwrap();

        for (section, local) in [(2, 0), (3, 1), (4, 2)] {
            let resolved = registry.resolve(section).unwrap();
            assert!(Rc::ptr_eq(
                resolved.controller(),
                &(c.clone() as SharedController<TestTable>)
            ));
            assert_eq!(resolved.local_section(), local);
            assert_eq!(resolved.route(), Route::Binding(0));
        }
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let c = Rc::new(RecordingController::new("c"));
        let mut registry = SectionRegistry::<TestTable>::new();
        assert_eq!(
            registry.add_binding(&c, 5, 3),
            Err(RouterError::InvalidRange { start: 5, stop: 3 })
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_default_controller_sizing() {
        let c = Rc::new(RecordingController::new("c"));
        let d = Rc::new(FixedController::new(vec![4, 6]));
        let mut registry = SectionRegistry::<TestTable>::new();
        registry.set_default_controller(&d);
        registry.add_binding(&c, 0, 0).unwrap();

        assert_eq!(registry.total_section_count(&TestTable), Ok(3));

        let first = registry.resolve(0).unwrap();
        assert_eq!(first.route(), Route::Binding(0));
        assert_eq!(first.local_section(), 0);

        for section in [1, 2] {
            let resolved = registry.resolve(section).unwrap();
            assert_eq!(resolved.route(), Route::Default);
            assert_eq!(resolved.local_section(), section);
        }
    }

    #[test]
    fn test_explicit_count_does_not_route() {
        let registry = SectionRegistry::<TestTable>::with_section_count(5);
        assert_eq!(registry.total_section_count(&TestTable), Ok(5));
        assert_eq!(
            registry.resolve(3).unwrap_err(),
            RouterError::UnresolvedSection { section: 3 }
        );
        assert_eq!(
            registry.validate(&TestTable),
            Err(RouterError::UnresolvedSection { section: 0 })
        );
    }

    #[test]
    fn test_default_registry_has_one_section() {
        let registry = SectionRegistry::<TestTable>::default();
        assert_eq!(registry.explicit_section_count(), 1);
        assert_eq!(registry.total_section_count(&TestTable), Ok(1));
        assert!(!registry.has_default());
    }

    #[test]
    fn test_sections_past_explicit_count_never_resolve() {
        let c = Rc::new(RecordingController::new("c"));
        let mut registry = SectionRegistry::<TestTable>::with_section_count(2);
        registry.add_binding(&c, 0, 4).unwrap();

        assert!(registry.resolve(1).is_ok());
        assert_eq!(
            registry.resolve(2).unwrap_err(),
            RouterError::UnresolvedSection { section: 2 }
        );
    }

    #[test]
    fn test_last_registration_wins_on_overlap() {
        let first = Rc::new(RecordingController::new("first"));
        let second = Rc::new(RecordingController::new("second"));
        let mut registry = SectionRegistry::<TestTable>::with_section_count(6);
        registry.add_binding(&first, 0, 3).unwrap();
        registry.add_binding(&second, 2, 5).unwrap();

        let resolved = registry.resolve(1).unwrap();
        assert_eq!(resolved.route(), Route::Binding(0));
        assert_eq!(resolved.local_section(), 1);

        let resolved = registry.resolve(3).unwrap();
        assert_eq!(resolved.route(), Route::Binding(1));
        assert_eq!(resolved.local_section(), 1);

        assert_eq!(registry.overlapping_bindings(), vec![(0, 1)]);
    }

    #[test]
    fn test_global_numbering_passes_sections_through() {
        let c = Rc::new(RecordingController::new("c"));
        let mut registry = SectionRegistry::<TestTable>::with_section_count(4);
        registry.add_binding_with(&c, 2, 3, Numbering::Global).unwrap();

        let resolved = registry.resolve(3).unwrap();
        assert_eq!(resolved.local_section(), 3);
        assert_eq!(resolved.translation(), Translation::Identity);
    }

    #[test]
    fn test_released_controller_is_reported() {
        let c = Rc::new(RecordingController::new("c"));
        let mut registry = SectionRegistry::<TestTable>::with_section_count(1);
        registry.add_binding_for_section(&c, 0);
        drop(c);

        assert_eq!(
            registry.resolve(0).unwrap_err(),
            RouterError::ReleasedController { section: 0 }
        );
    }

    #[test]
    fn test_released_default_is_reported() {
        let d = Rc::new(FixedController::new(vec![1]));
        let mut registry = SectionRegistry::<TestTable>::new();
        registry.set_default_controller(&d);
        drop(d);

        assert_eq!(
            registry.total_section_count(&TestTable),
            Err(RouterError::DefaultReleased)
        );
        assert_eq!(
            registry.resolve(0).unwrap_err(),
            RouterError::ReleasedController { section: 0 }
        );
    }

    #[test]
    fn test_validate_accepts_full_coverage() {
        let a = Rc::new(RecordingController::new("a"));
        let b = Rc::new(RecordingController::new("b"));
        let mut registry = SectionRegistry::<TestTable>::with_section_count(3);
        registry.add_binding_for_section(&a, 0);
        registry.add_binding(&b, 1, 2).unwrap();

        assert_eq!(registry.validate(&TestTable), Ok(()));
        assert_eq!(registry.len(), 2);
        assert!(registry.overlapping_bindings().is_empty());
    }

    #[test]
    fn test_section_count_saturates() {
        let a = Rc::new(RecordingController::new("a"));
        let b = Rc::new(RecordingController::new("b"));
        let d = Rc::new(RecordingController::new("d").with_sections(3));
        let mut registry = SectionRegistry::<TestTable>::new();
        registry.set_default_controller(&d);
        registry.add_binding(&a, 0, usize::MAX - 1).unwrap();
        registry.add_binding(&b, 5, 9).unwrap();

        assert_eq!(registry.total_section_count(&TestTable), Ok(usize::MAX));
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn test_overlap_is_logged_as_warning() {
        use std::{
            io,
            sync::{Arc, Mutex},
        };

        #[derive(Clone, Default)]
        struct Capture(Arc<Mutex<Vec<u8>>>);

        impl io::Write for Capture {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let early = Rc::new(RecordingController::new("early"));
        let late = Rc::new(RecordingController::new("late"));
        tracing::subscriber::with_default(subscriber, || {
            let mut registry = SectionRegistry::<TestTable>::with_section_count(4);
            registry.add_binding(&early, 0, 3).unwrap();
            registry.add_binding_for_section(&late, 2);
            assert_eq!(registry.resolve(2).unwrap().route(), Route::Binding(1));
        });

        let output = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert_eq!(output.matches("WARN").count(), 1);
        assert!(output.contains("overlaps an earlier one"));
        assert!(output.contains("new=2"));
        assert!(output.contains("existing=0..=3"));
    }
}
