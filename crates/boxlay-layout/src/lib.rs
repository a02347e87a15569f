// crates/boxlay-layout/src/lib.rs

use boxlay_core::{Element, Theme};
use glam::Vec2;

pub mod box_layout;
pub mod overrides;

pub use box_layout::*;
pub use overrides::*;

/// Arranges the children of a single container.
///
/// Implementations borrow the children for one pass and communicate results
/// only through `Element::move_to` and `Element::resize`.
pub trait Layout {
    /// Positions and sizes `elements` inside a container of `size`.
    fn layout(&self, elements: &mut [Box<dyn Element>], size: Vec2, theme: &Theme);

    /// Smallest container size that fits `elements`.
    fn min_size(&self, elements: &[Box<dyn Element>], theme: &Theme) -> Vec2;
}
