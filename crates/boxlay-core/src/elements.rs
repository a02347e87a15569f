// crates/boxlay-core/src/elements.rs
use glam::Vec2;
use serde::{Deserialize, Serialize};

pub type ElementId = u32;

/// Axis along which a box layout stacks its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Extent of `v` along the stacking axis.
    pub fn main(self, v: Vec2) -> f32 {
        match self {
            Orientation::Horizontal => v.x,
            Orientation::Vertical => v.y,
        }
    }

    /// Extent of `v` across the stacking axis.
    pub fn cross(self, v: Vec2) -> f32 {
        match self {
            Orientation::Horizontal => v.y,
            Orientation::Vertical => v.x,
        }
    }

    /// Builds a vector from a main-axis and a cross-axis component.
    pub fn compose(self, main: f32, cross: f32) -> Vec2 {
        match self {
            Orientation::Horizontal => Vec2::new(main, cross),
            Orientation::Vertical => Vec2::new(cross, main),
        }
    }
}

/// Anything a box layout can position.
///
/// Layouts only borrow elements for the duration of a pass; they never own
/// or drop them.
pub trait Element {
    fn id(&self) -> ElementId;

    /// Smallest size the element can be shown at.
    fn min_size(&self) -> Vec2;

    /// Size the element currently occupies, as last set by `resize`.
    fn size(&self) -> Vec2;

    /// Position last set by `move_to`, relative to the container.
    fn position(&self) -> Vec2;

    fn visible(&self) -> bool;

    fn move_to(&mut self, position: Vec2);

    fn resize(&mut self, size: Vec2);

    /// Capability query for elements that fill leftover space.
    fn as_spacer(&self) -> Option<&dyn Spacer> {
        None
    }
}

pub trait Spacer {
    fn expand_horizontal(&self) -> bool;
    fn expand_vertical(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    pub id: ElementId,
    pub min_size: Vec2,
    pub position: Vec2,
    pub size: Vec2,
    pub visible: bool,
}

impl Widget {
    pub fn new(id: ElementId, min_size: Vec2) -> Self {
        Self {
            id,
            min_size,
            position: Vec2::ZERO,
            size: Vec2::ZERO,
            visible: true,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }
}

impl Element for Widget {
    fn id(&self) -> ElementId {
        self.id
    }

    fn min_size(&self) -> Vec2 {
        self.min_size
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn move_to(&mut self, position: Vec2) {
        self.position = position;
    }

    fn resize(&mut self, size: Vec2) {
        self.size = size;
    }
}

/// Invisible filler that soaks up the space left over in a box layout.
#[derive(Debug, Clone, PartialEq)]
pub struct SpacerElement {
    pub id: ElementId,
    pub expand_horizontal: bool,
    pub expand_vertical: bool,
    pub position: Vec2,
    pub size: Vec2,
    pub visible: bool,
}

impl SpacerElement {
    /// A spacer that expands along both axes.
    pub fn new(id: ElementId) -> Self {
        Self {
            id,
            expand_horizontal: true,
            expand_vertical: true,
            position: Vec2::ZERO,
            size: Vec2::ZERO,
            visible: true,
        }
    }

    pub fn horizontal(id: ElementId) -> Self {
        Self {
            expand_vertical: false,
            ..Self::new(id)
        }
    }

    pub fn vertical(id: ElementId) -> Self {
        Self {
            expand_horizontal: false,
            ..Self::new(id)
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

impl Spacer for SpacerElement {
    fn expand_horizontal(&self) -> bool {
        self.expand_horizontal
    }

    fn expand_vertical(&self) -> bool {
        self.expand_vertical
    }
}

impl Element for SpacerElement {
    fn id(&self) -> ElementId {
        self.id
    }

    fn min_size(&self) -> Vec2 {
        Vec2::ZERO
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn move_to(&mut self, position: Vec2) {
        self.position = position;
    }

    fn resize(&mut self, size: Vec2) {
        self.size = size;
    }

    fn as_spacer(&self) -> Option<&dyn Spacer> {
        Some(self)
    }
}
