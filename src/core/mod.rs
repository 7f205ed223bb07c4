//! Pure per-frame logic for the dot-grid effect. No DOM types here, so the
//! whole module tree compiles and tests natively.

pub mod constants;
pub mod ease;
pub mod grid;
pub mod hover;
pub mod influence;
pub mod scene;
pub mod sparkle;
pub mod tween;

pub use ease::Easing;
pub use grid::DotGrid;
pub use hover::HoverRegistry;
pub use influence::HeaderBounds;
pub use scene::{DotRender, Scene};
pub use sparkle::SparkleField;
pub use tween::Tween;
