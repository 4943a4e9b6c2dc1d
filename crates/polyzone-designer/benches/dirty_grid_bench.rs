use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polyzone_core::{BoundingBox, DisplayBounds, PointerEvent, ShapeVariant};
use polyzone_designer::{sorted_dirty_cells, InteractionEngine};

fn bench_dirty_cells(c: &mut Criterion) {
    let small = BoundingBox::new(30, 30, 110, 80);
    let full = BoundingBox::new(-10, -10, 1080, 720);

    c.bench_function("dirty_cells_small_box", |b| {
        b.iter(|| sorted_dirty_cells(black_box(Some(small)), 22, 25, 25))
    });
    c.bench_function("dirty_cells_full_display", |b| {
        b.iter(|| sorted_dirty_cells(black_box(Some(full)), 44, 25, 25))
    });
}

fn bench_drag_gesture(c: &mut Criterion) {
    let bounds = DisplayBounds::new(0, 0, 1080, 720).unwrap();
    let engine = InteractionEngine::with_variant(ShapeVariant::Rect, bounds).unwrap();

    c.bench_function("rect_span_and_drag", |b| {
        b.iter(|| {
            let mut engine = engine.clone();
            engine.handle(PointerEvent::down(100, 100));
            for step in 0..50 {
                engine.handle(PointerEvent::moved(100 + step * 4, 100 + step * 3));
            }
            engine.handle(PointerEvent::up(300, 250));
            engine.handle(PointerEvent::down(300, 250));
            for step in 0..50 {
                engine.handle(PointerEvent::moved(300 + step, 250 + step));
            }
            engine.handle(PointerEvent::up(350, 300));
            black_box(engine.dirty_cells(0, 22, 25, 25))
        })
    });
}

criterion_group!(benches, bench_dirty_cells, bench_drag_gesture);
criterion_main!(benches);
