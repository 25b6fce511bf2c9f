//! Section ranges, bindings and index translation.
//!
//! Translation is a pure function of a binding: it never looks at the widget
//! or the controller, so the mapping between the widget's section indices and
//! a controller's own numbering can be reasoned about (and tested) in isolation.

use crate::{
    controller::TableView, error::RouterError, handle::ControllerRef, index::IndexPath,
};
use std::{fmt, ops::RangeInclusive};

/// An inclusive, non-empty range of widget sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionRange {
    start: usize,
    stop: usize,
}

impl SectionRange {
    /// Create a range covering `start..=stop`.
    ///
    /// Fails with [`RouterError::InvalidRange`] when `start > stop`.
    pub const fn new(start: usize, stop: usize) -> Result<Self, RouterError> {
        if start > stop {
            return Err(RouterError::InvalidRange { start, stop });
        }
        Ok(Self { start, stop })
    }

    /// A range covering exactly one section.
    pub const fn single(section: usize) -> Self {
        Self {
            start: section,
            stop: section,
        }
    }

    /// First section of the range.
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Last section of the range (inclusive).
    pub const fn stop(&self) -> usize {
        self.stop
    }

    /// Number of sections covered.
    ///
    /// A range spanning every `usize` section saturates at `usize::MAX`.
    pub const fn width(&self) -> usize {
        (self.stop - self.start).saturating_add(1)
    }

    /// Returns `true` if `section` lies inside the range.
    pub const fn contains(&self, section: usize) -> bool {
        self.start <= section && section <= self.stop
    }

    /// Returns `true` if both ranges share at least one section.
    pub const fn overlaps(&self, other: &SectionRange) -> bool {
        self.start <= other.stop && other.start <= self.stop
    }
}

impl TryFrom<RangeInclusive<usize>> for SectionRange {
    type Error = RouterError;

    fn try_from(range: RangeInclusive<usize>) -> Result<Self, Self::Error> {
        Self::new(*range.start(), *range.end())
    }
}

impl fmt::Display for SectionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.stop {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}..={}", self.start, self.stop)
        }
    }
}

/// Which section numbers a bound controller receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Numbering {
    /// Sections are renumbered from zero at the start of the range.
    #[default]
    Local,
    /// Sections are passed through with the widget's numbering.
    Global,
}

/// Mapping between the widget's section numbers and a controller's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Translation {
    /// Local section = widget section - offset.
    Offset(usize),
    /// Sections are passed through unchanged.
    Identity,
}

impl Translation {
    /// Widget section to controller section.
    ///
    /// Sections below the offset saturate at zero; a binding only translates
    /// sections inside its own range, which never hits that case.
    pub const fn to_local(self, section: usize) -> usize {
        match self {
            Translation::Offset(offset) => section.saturating_sub(offset),
            Translation::Identity => section,
        }
    }

    /// Controller section back to widget section.
    ///
    /// Saturates at `usize::MAX` rather than wrapping.
    pub const fn to_global(self, section: usize) -> usize {
        match self {
            Translation::Offset(offset) => section.saturating_add(offset),
            Translation::Identity => section,
        }
    }

    /// Widget index path to controller index path.
    pub const fn local_path(self, index: IndexPath) -> IndexPath {
        index.with_section(self.to_local(index.section))
    }

    /// Controller index path back to widget index path.
    pub const fn global_path(self, index: IndexPath) -> IndexPath {
        index.with_section(self.to_global(index.section))
    }
}

/// One registration: a range of sections owned by a controller.
pub struct SectionBinding<T: TableView + ?Sized> {
    range: SectionRange,
    numbering: Numbering,
    controller: ControllerRef<T>,
}

impl<T: TableView + ?Sized> SectionBinding<T> {
    /// Create a binding.
    pub fn new(range: SectionRange, numbering: Numbering, controller: ControllerRef<T>) -> Self {
        Self {
            range,
            numbering,
            controller,
        }
    }

    /// Sections owned by this binding.
    pub fn range(&self) -> SectionRange {
        self.range
    }

    /// Numbering the controller expects.
    pub fn numbering(&self) -> Numbering {
        self.numbering
    }

    /// The bound controller.
    pub fn controller(&self) -> &ControllerRef<T> {
        &self.controller
    }

    /// Translation applied to sections routed through this binding.
    pub fn translation(&self) -> Translation {
        match self.numbering {
            Numbering::Local => Translation::Offset(self.range.start),
            Numbering::Global => Translation::Identity,
        }
    }
}

impl<T: TableView + ?Sized> Clone for SectionBinding<T> {
    fn clone(&self) -> Self {
        Self {
            range: self.range,
            numbering: self.numbering,
            controller: self.controller.clone(),
        }
    }
}

impl<T: TableView + ?Sized> fmt::Debug for SectionBinding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionBinding")
            .field("range", &self.range)
            .field("numbering", &self.numbering)
            .field("controller", &self.controller)
            .finish()
    }
}
