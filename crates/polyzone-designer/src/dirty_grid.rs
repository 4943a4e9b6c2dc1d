//! Dirty-grid rasterizer.
//!
//! Maps a bounding box onto the cells of a coarse overlay grid so the host
//! can limit redraw to the cells a region touches. Cell indices are
//! `column + row * columns`.
//!
//! The mapping is kept bit-compatible with existing grid consumers rather
//! than geometrically tight:
//!
//! ```text
//! x1 = min_x < 0 ? 0 : min_x / w + 1
//! y1 = min_y < 0 ? 0 : min_y / h + 1
//! x2 = (max_x % w > 0 || max_x / w == 0) ? max_x / w + 1 : max_x / w
//! y2 = (max_y % h > 0 || max_y / h == 0) ? max_y / h + 1 : max_y / h
//! columns x1+1 ..= x2, rows y1 ..= y2
//! ```
//!
//! Note the column range starts one past `x1` while the row range starts at
//! `y1`. Division and remainder truncate toward zero.

use polyzone_core::BoundingBox;

/// Cell indices overlapped by `bbox`, in emission order (column-major,
/// unsorted, duplicates kept).
///
/// Returns `None` when there is no bounding box, when the cell size is not
/// positive, or when a cell index does not fit in an `i32`.
pub fn dirty_cells(
    bbox: Option<BoundingBox>,
    columns: i32,
    cell_width: i32,
    cell_height: i32,
) -> Option<Vec<i32>> {
    let bbox = bbox?;
    if cell_width <= 0 || cell_height <= 0 {
        tracing::warn!(
            "Ignoring dirty-cell query with cell size {}x{}",
            cell_width,
            cell_height
        );
        return None;
    }

    // i64 keeps every intermediate exact; cells past the i32 range are rejected
    let x1 = start_cell(bbox.min_x, cell_width);
    let y1 = start_cell(bbox.min_y, cell_height);
    let x2 = end_cell(bbox.max_x, cell_width);
    let y2 = end_cell(bbox.max_y, cell_height);
    let columns = i64::from(columns);

    tracing::trace!(
        "dirty grid for {:?}: columns {}..={}, rows {}..={}",
        bbox,
        x1 + 1,
        x2,
        y1,
        y2
    );

    let cells: Option<Vec<i32>> = ((x1 + 1)..=x2)
        .flat_map(|i| (y1..=y2).map(move |j| i32::try_from(i + j * columns).ok()))
        .collect();
    if cells.is_none() {
        tracing::warn!(
            "Dirty cells for {:?} exceed the cell index range with {} columns",
            bbox,
            columns
        );
    }
    cells
}

/// Same as [`dirty_cells`] but sorted ascending.
pub fn sorted_dirty_cells(
    bbox: Option<BoundingBox>,
    columns: i32,
    cell_width: i32,
    cell_height: i32,
) -> Option<Vec<i32>> {
    let mut cells = dirty_cells(bbox, columns, cell_width, cell_height)?;
    cells.sort_unstable();
    Some(cells)
}

fn start_cell(min: i32, size: i32) -> i64 {
    if min < 0 {
        0
    } else {
        i64::from(min / size) + 1
    }
}

fn end_cell(max: i32, size: i32) -> i64 {
    let whole = i64::from(max / size);
    if max % size > 0 || whole == 0 {
        whole + 1
    } else {
        whole
    }
}
