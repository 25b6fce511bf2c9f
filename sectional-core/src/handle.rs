//! Non-owning controller handles.

use crate::controller::{SectionController, TableView};
use std::{
    fmt,
    rc::{Rc, Weak},
};

/// A shared controller as handed out by the router.
pub type SharedController<T> = Rc<dyn SectionController<T>>;

/// A non-owning reference to a section controller.
///
/// The host owns its controllers; the router only keeps weak handles to them.
/// Once the host drops a controller, its handle no longer upgrades and any
/// section it owned fails to resolve.
pub struct ControllerRef<T: TableView + ?Sized> {
    inner: Weak<dyn SectionController<T>>,
}

impl<T: TableView + ?Sized> ControllerRef<T> {
    /// Create a handle to a concrete controller.
    pub fn new<C>(controller: &Rc<C>) -> Self
    where
        C: SectionController<T> + 'static,
    {
        let inner: Weak<C> = Rc::downgrade(controller);
        Self { inner }
    }

    /// Create a handle to an already type-erased controller.
    pub fn from_shared(controller: &SharedController<T>) -> Self {
        Self {
            inner: Rc::downgrade(controller),
        }
    }

    /// Get a strong reference for the duration of a call.
    pub fn upgrade(&self) -> Option<SharedController<T>> {
        self.inner.upgrade()
    }

    /// Returns `true` once the host has dropped the controller.
    pub fn is_released(&self) -> bool {
        self.inner.strong_count() == 0
    }

    /// Returns `true` if this handle points at `controller`.
    pub fn refers_to<C: ?Sized>(&self, controller: &Rc<C>) -> bool {
        std::ptr::addr_eq(self.inner.as_ptr(), Rc::as_ptr(controller))
    }

    /// Returns `true` if both handles point at the same controller.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(self.inner.as_ptr(), other.inner.as_ptr())
    }
}

impl<T, C> From<&Rc<C>> for ControllerRef<T>
where
    T: TableView + ?Sized,
    C: SectionController<T> + 'static,
{
    fn from(controller: &Rc<C>) -> Self {
        Self::new(controller)
    }
}

impl<T: TableView + ?Sized> Clone for ControllerRef<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<T: TableView + ?Sized> fmt::Debug for ControllerRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllerRef")
            .field("ptr", &self.inner.as_ptr().cast::<()>())
            .field("released", &self.is_released())
            .finish()
    }
}
