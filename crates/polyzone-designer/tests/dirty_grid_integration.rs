//! Dirty-cell reports for regions built through gestures

use polyzone_core::{DisplayBounds, PointerEvent, ShapeVariant};
use polyzone_designer::InteractionEngine;
use polyzone_settings::GridSettings;

fn span(variant: ShapeVariant, from: (i32, i32), to: (i32, i32)) -> InteractionEngine {
    let bounds = DisplayBounds::new(0, 0, 1000, 800).unwrap();
    let mut engine = InteractionEngine::with_variant(variant, bounds).unwrap();
    engine.handle(PointerEvent::down(from.0, from.1));
    engine.handle(PointerEvent::moved(to.0, to.1));
    engine.handle(PointerEvent::up(to.0, to.1));
    engine
}

#[test]
fn test_rect_dirty_cells() {
    let engine = span(ShapeVariant::Rect, (30, 30), (110, 80));
    assert_eq!(
        engine.dirty_cells(0, 22, 25, 25),
        Some(vec![47, 48, 49, 69, 70, 71, 91, 92, 93])
    );
}

#[test]
fn test_default_grid_settings() {
    let engine = span(ShapeVariant::Rect, (30, 30), (110, 80));
    assert_eq!(
        engine.dirty_cells_in(0, &GridSettings::default()),
        engine.dirty_cells(0, 22, 25, 25)
    );
}

#[test]
fn test_span_toward_origin() {
    // spanning up-left gives the same box as spanning down-right
    let engine = span(ShapeVariant::Rect, (110, 80), (30, 30));
    assert_eq!(
        engine.dirty_cells(0, 22, 25, 25),
        Some(vec![47, 48, 49, 69, 70, 71, 91, 92, 93])
    );
}

#[test]
fn test_small_region_reports_no_cells() {
    let engine = span(ShapeVariant::Rect, (0, 0), (10, 10));
    assert_eq!(engine.dirty_cells(0, 22, 25, 25), Some(vec![]));
}

#[test]
fn test_untouched_slot_reports_nothing() {
    let engine = span(ShapeVariant::Rect, (30, 30), (110, 80));
    assert_eq!(engine.dirty_cells(1, 22, 25, 25), None);
}

#[test]
fn test_invalid_cell_size_reports_nothing() {
    let engine = span(ShapeVariant::Rect, (30, 30), (110, 80));
    assert_eq!(engine.dirty_cells(0, 22, 0, 25), None);
}

#[test]
fn test_circle_region_uses_its_defining_vertex() {
    let bounds = DisplayBounds::new(0, 0, 1000, 800).unwrap();
    let engine = InteractionEngine::with_variant(ShapeVariant::Circle, bounds).unwrap();
    // single vertex (650, 400): x1 = 27, x2 = 26, so the column range is empty
    assert_eq!(engine.dirty_cells(0, 22, 25, 25), Some(vec![]));
}

#[test]
fn test_wide_grid_from_settings_reports_nothing() {
    let engine = span(ShapeVariant::Rect, (0, 0), (100, 100));
    let grid = GridSettings {
        columns: i32::MAX / 2,
        ..GridSettings::default()
    };
    assert_eq!(engine.dirty_cells_in(0, &grid), None);
}
