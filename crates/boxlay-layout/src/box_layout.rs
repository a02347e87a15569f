// crates/boxlay-layout/src/box_layout.rs
//! Single row / single column layout with spacer support.

use std::sync::Arc;

use boxlay_core::{Element, Orientation, Theme};
use glam::Vec2;
use tracing::{debug, trace};

use crate::{Layout, SizeOverrides};

/// Stacks children along one axis and stretches them across the other.
///
/// Visible spacers split whatever main-axis space the other children leave
/// over. Every child is sized to its minimum along the main axis except the
/// last one in the input, which takes its registered size override when one
/// exists.
#[derive(Debug, Clone)]
pub struct BoxLayout {
    orientation: Orientation,
    overrides: Arc<SizeOverrides>,
}

impl BoxLayout {
    /// Layout backed by the process-wide override table.
    pub fn new(orientation: Orientation) -> Self {
        Self::with_overrides(orientation, SizeOverrides::global())
    }

    pub fn with_overrides(orientation: Orientation, overrides: Arc<SizeOverrides>) -> Self {
        Self {
            orientation,
            overrides,
        }
    }

    /// Children stacked left to right.
    pub fn hbox() -> Self {
        Self::new(Orientation::Horizontal)
    }

    /// Children stacked top to bottom.
    pub fn vbox() -> Self {
        Self::new(Orientation::Vertical)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn overrides(&self) -> &Arc<SizeOverrides> {
        &self.overrides
    }

    /// True for visible spacers that expand along this layout's main axis.
    pub fn is_spacer(&self, element: &dyn Element) -> bool {
        // Hidden spacers take no part in the layout.
        if !element.visible() {
            return false;
        }

        match element.as_spacer() {
            Some(spacer) => match self.orientation {
                Orientation::Horizontal => spacer.expand_horizontal(),
                Orientation::Vertical => spacer.expand_vertical(),
            },
            None => false,
        }
    }
}

impl Layout for BoxLayout {
    fn layout(&self, elements: &mut [Box<dyn Element>], size: Vec2, theme: &Theme) {
        let axis = self.orientation;
        let padding = theme.padding;

        let mut spacers = 0usize;
        let mut total = 0.0f32;
        for child in elements.iter() {
            if !child.visible() {
                continue;
            }
            if self.is_spacer(child.as_ref()) {
                spacers += 1;
                continue;
            }
            total += axis.main(child.min_size());
        }

        // Gaps are counted over the whole input, hidden children included.
        let gaps = elements.len() as f32 - spacers as f32 - 1.0;
        let extra = axis.main(size) - total - padding * gaps;
        let extra_per_spacer = if spacers > 0 {
            extra / spacers as f32
        } else {
            0.0
        };

        debug!(
            "Box layout {:?}: {} children, {} spacers, total={}, extra={}, container={:?}",
            axis,
            elements.len(),
            spacers,
            total,
            extra,
            size
        );

        let last = elements.len().saturating_sub(1);
        let cross = axis.cross(size);
        let mut cursor = 0.0f32;

        for (index, child) in elements.iter_mut().enumerate() {
            if !child.visible() {
                continue;
            }

            if self.is_spacer(child.as_ref()) {
                cursor += extra_per_spacer;
                continue;
            }

            let min = child.min_size();
            let position = axis.compose(cursor, 0.0);
            child.move_to(position);

            let main = if index == last {
                let preferred = self.overrides.get(child.id()).unwrap_or(min);
                debug!(
                    "Trailing child {} sized from {:?} (min {:?})",
                    child.id(),
                    preferred,
                    min
                );
                axis.main(preferred)
            } else {
                axis.main(min)
            };
            let child_size = axis.compose(main, cross);
            child.resize(child_size);

            trace!(
                "Placed child {} at {:?} with size {:?}",
                child.id(),
                position,
                child_size
            );

            cursor += padding + axis.main(min);
        }
    }

    fn min_size(&self, elements: &[Box<dyn Element>], theme: &Theme) -> Vec2 {
        let axis = self.orientation;
        let mut main = 0.0f32;
        let mut cross = 0.0f32;
        let mut add_padding = false;

        for child in elements {
            if !child.visible() || self.is_spacer(child.as_ref()) {
                continue;
            }

            cross = cross.max(axis.cross(child.min_size()));
            // Uses the size the child currently occupies rather than its
            // minimum, so children that were never arranged contribute zero.
            main += axis.main(child.size());
            if add_padding {
                main += theme.padding;
            }
            add_padding = true;
        }

        axis.compose(main, cross)
    }
}
