//! Property tests for resolution and sizing.

use proptest::prelude::*;
use sectional::{
    Route, RouterError, SectionRegistry,
    testing::{RecordingController, TestTable},
};
use std::rc::Rc;

/// Widths of consecutive bindings that tile `[0, sum)` without gaps.
fn arb_widths() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1usize..5, 1..6)
}

fn tiled(widths: &[usize]) -> (SectionRegistry<TestTable>, Vec<Rc<RecordingController>>) {
    let total: usize = widths.iter().sum();
    let mut registry = SectionRegistry::<TestTable>::with_section_count(total);
    let mut controllers = Vec::new();
    let mut start = 0;
    for (i, width) in widths.iter().enumerate() {
        let controller = Rc::new(RecordingController::new(format!("c{i}")));
        registry
            .add_binding(&controller, start, start + width - 1)
            .unwrap();
        controllers.push(controller);
        start += width;
    }
    (registry, controllers)
}

proptest! {
    /// Every section in range resolves to the binding tiling it, relative to
    /// the binding's start; everything past the end is unresolved.
    #[test]
    fn prop_tiled_bindings_resolve(widths in arb_widths(), past in 0usize..8) {
        let (registry, _controllers) = tiled(&widths);
        let total = registry.total_section_count(&TestTable).unwrap();
        prop_assert_eq!(total, widths.iter().sum::<usize>());

        let mut start = 0;
        for (position, width) in widths.iter().enumerate() {
            for section in start..start + width {
                let resolved = registry.resolve(section).unwrap();
                prop_assert_eq!(resolved.route(), Route::Binding(position));
                prop_assert_eq!(resolved.local_section(), section - start);
            }
            start += width;
        }

        prop_assert_eq!(
            registry.resolve(total + past).unwrap_err(),
            RouterError::UnresolvedSection { section: total + past }
        );
        prop_assert!(registry.validate(&TestTable).is_ok());
    }

    /// Translating into a binding and back is the identity.
    #[test]
    fn prop_translation_round_trips(widths in arb_widths(), row in 0usize..100) {
        let (registry, _controllers) = tiled(&widths);
        let total = registry.total_section_count(&TestTable).unwrap();
        for section in 0..total {
            let resolved = registry.resolve(section).unwrap();
            let index = sectional::IndexPath::new(section, row);
            let local = resolved.local_path(index);
            prop_assert_eq!(local.row, row);
            prop_assert_eq!(resolved.global_path(local), index);
        }
    }

    /// Reversed ranges are always rejected and never registered.
    #[test]
    fn prop_reversed_ranges_rejected(stop in 0usize..50, gap in 1usize..50) {
        let start = stop + gap;
        let controller = Rc::new(RecordingController::new("c"));
        let mut registry = SectionRegistry::<TestTable>::new();
        prop_assert_eq!(
            registry.add_binding(&controller, start, stop),
            Err(RouterError::InvalidRange { start, stop })
        );
        prop_assert!(registry.is_empty());
    }

    /// With a default controller the count is the bound widths plus its own.
    #[test]
    fn prop_default_count_adds_up(widths in arb_widths(), own in 0usize..6) {
        let (mut registry, _controllers) = tiled(&widths);
        let default = Rc::new(RecordingController::new("d").with_sections(own));
        registry.set_default_controller(&default);

        let first = registry.total_section_count(&TestTable).unwrap();
        let second = registry.total_section_count(&TestTable).unwrap();
        prop_assert_eq!(first, widths.iter().sum::<usize>() + own);
        prop_assert_eq!(first, second);
    }
}
