use crate::core::constants::DOT_SPACING;
use glam::Vec2;

/// Dot positions derived once from the canvas dimensions: multiples of the
/// spacing constant starting at `spacing`, strictly less than each
/// dimension. Shared by reference between the hover and sparkle
/// subsystems, which key cells by flat index (row-major).
#[derive(Debug, Clone, PartialEq)]
pub struct DotGrid {
    spacing: f32,
    cols: usize,
    rows: usize,
}

impl DotGrid {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_spacing(width, height, DOT_SPACING)
    }

    pub fn with_spacing(width: f32, height: f32, spacing: f32) -> Self {
        Self {
            spacing,
            cols: axis_steps(width, spacing),
            rows: axis_steps(height, spacing),
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.cols * self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Canvas position of the cell at `index`.
    ///
    /// Valid for `index < len()`; both coordinates are non-zero multiples
    /// of the spacing.
    pub fn position(&self, index: usize) -> Vec2 {
        debug_assert!(index < self.len());
        let col = index % self.cols;
        let row = index / self.cols;
        Vec2::new(
            self.spacing * (col + 1) as f32,
            self.spacing * (row + 1) as f32,
        )
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        (0..self.len()).map(|i| self.position(i))
    }
}

// Count of k >= 1 with k * spacing strictly below `extent`.
fn axis_steps(extent: f32, spacing: f32) -> usize {
    if spacing <= 0.0 || extent <= spacing {
        return 0;
    }
    ((extent / spacing).ceil() as usize).saturating_sub(1)
}
