// Host-side tests for the grid model: dot positions are multiples of the
// spacing, strictly inside the canvas.

use dots_web::core::constants::DOT_SPACING;
use dots_web::core::grid::DotGrid;

#[test]
fn full_hd_viewport_is_47_by_26() {
    let grid = DotGrid::new(1920.0, 1080.0);
    assert_eq!(grid.cols(), 47);
    assert_eq!(grid.rows(), 26);
    assert_eq!(grid.len(), 47 * 26);
}

#[test]
fn dot_count_matches_fencepost_formula() {
    // Count of positions `spacing, 2*spacing, ..` strictly below the
    // extent is floor((extent - 1) / spacing) for integral sizes.
    for (w, h) in [
        (1920u32, 1080u32),
        (1366, 768),
        (1000, 1000),
        (992, 600),
        (1601, 901),
        (2560, 1440),
    ] {
        let grid = DotGrid::new(w as f32, h as f32);
        let expected_cols = ((w - 1) / DOT_SPACING as u32) as usize;
        let expected_rows = ((h - 1) / DOT_SPACING as u32) as usize;
        assert_eq!(grid.cols(), expected_cols, "cols for width {w}");
        assert_eq!(grid.rows(), expected_rows, "rows for height {h}");
        assert_eq!(grid.len(), expected_cols * expected_rows);
    }
}

#[test]
fn exact_multiple_of_spacing_excludes_the_edge() {
    // 1920 = 48 * 40; position 1920 itself is not strictly below the
    // width, so the last column sits at 1880.
    let grid = DotGrid::new(1920.0, 1080.0);
    let last = grid.position(grid.cols() - 1);
    assert_eq!(last.x, 1880.0);
}

#[test]
fn positions_start_at_spacing_and_step_by_spacing() {
    let grid = DotGrid::new(500.0, 300.0);
    let first = grid.position(0);
    assert_eq!(first.x, DOT_SPACING);
    assert_eq!(first.y, DOT_SPACING);

    for (i, pos) in grid.positions().enumerate() {
        assert_eq!(pos, grid.position(i));
        assert_eq!(pos.x % DOT_SPACING, 0.0);
        assert_eq!(pos.y % DOT_SPACING, 0.0);
        assert!(pos.x >= DOT_SPACING && pos.x < 500.0);
        assert!(pos.y >= DOT_SPACING && pos.y < 300.0);
    }
}

#[test]
fn row_major_indexing_round_trips() {
    let grid = DotGrid::new(500.0, 300.0);
    let cols = grid.cols();
    for row in 0..grid.rows() {
        for col in 0..cols {
            let pos = grid.position(row * cols + col);
            assert_eq!(pos.x, DOT_SPACING * (col + 1) as f32);
            assert_eq!(pos.y, DOT_SPACING * (row + 1) as f32);
        }
    }
}

#[test]
fn degenerate_viewports_yield_empty_grids() {
    assert!(DotGrid::new(40.0, 1080.0).is_empty());
    assert!(DotGrid::new(1920.0, 0.0).is_empty());
    assert!(DotGrid::new(0.0, 0.0).is_empty());
    assert_eq!(DotGrid::new(41.0, 41.0).len(), 1);
}

#[test]
fn custom_spacing_is_respected() {
    let grid = DotGrid::with_spacing(100.0, 100.0, 25.0);
    assert_eq!(grid.cols(), 3);
    assert_eq!(grid.rows(), 3);
    assert_eq!(grid.position(0).x, 25.0);
}
