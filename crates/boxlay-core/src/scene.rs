// crates/boxlay-core/src/scene.rs
//! JSON description of a single box container and its children.

use std::collections::HashSet;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{BoxlayError, Element, ElementId, Orientation, Result, SpacerElement, Theme, Widget};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub orientation: Orientation,
    pub container: [f32; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    pub elements: Vec<SceneElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SceneElement {
    Widget {
        id: ElementId,
        min: [f32; 2],
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<[f32; 2]>,
        #[serde(default = "default_visible")]
        visible: bool,
        #[serde(default, rename = "override", skip_serializing_if = "Option::is_none")]
        size_override: Option<[f32; 2]>,
    },
    Spacer {
        id: ElementId,
        #[serde(default)]
        expand: Expand,
        #[serde(default = "default_visible")]
        visible: bool,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expand {
    #[default]
    Both,
    Horizontal,
    Vertical,
}

fn default_visible() -> bool {
    true
}

/// Elements and size overrides materialised from a [`Scene`].
pub struct SceneContents {
    pub elements: Vec<Box<dyn Element>>,
    pub overrides: Vec<(ElementId, Vec2)>,
}

impl SceneElement {
    pub fn id(&self) -> ElementId {
        match self {
            SceneElement::Widget { id, .. } | SceneElement::Spacer { id, .. } => *id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SceneElement::Widget { .. } => "widget",
            SceneElement::Spacer { .. } => "spacer",
        }
    }
}

impl Scene {
    pub fn from_json(json: &str) -> Result<Self> {
        let scene: Scene = serde_json::from_str(json)?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn container_size(&self) -> Vec2 {
        Vec2::from(self.container)
    }

    /// Theme for this scene, falling back to `fallback` when no padding is set.
    pub fn theme(&self, fallback: Theme) -> Theme {
        self.padding.map(Theme::with_padding).unwrap_or(fallback)
    }

    pub fn validate(&self) -> Result<()> {
        check_size("container", self.container)?;
        if let Some(padding) = self.padding {
            check_size("padding", [padding, 0.0])?;
        }

        let mut seen = HashSet::new();
        for element in &self.elements {
            let id = element.id();
            if !seen.insert(id) {
                return Err(BoxlayError::DuplicateElement(id));
            }

            if let SceneElement::Widget {
                min,
                size,
                size_override,
                ..
            } = element
            {
                check_size(&format!("element {} min", id), *min)?;
                if let Some(size) = size {
                    check_size(&format!("element {} size", id), *size)?;
                }
                if let Some(size_override) = size_override {
                    check_size(&format!("element {} override", id), *size_override)?;
                }
            }
        }

        Ok(())
    }

    pub fn build(&self) -> SceneContents {
        let mut elements: Vec<Box<dyn Element>> = Vec::with_capacity(self.elements.len());
        let mut overrides = Vec::new();

        for element in &self.elements {
            match element {
                SceneElement::Widget {
                    id,
                    min,
                    size,
                    visible,
                    size_override,
                } => {
                    let mut widget = Widget::new(*id, Vec2::from(*min));
                    widget.visible = *visible;
                    if let Some(size) = size {
                        widget.size = Vec2::from(*size);
                    }
                    if let Some(size_override) = size_override {
                        overrides.push((*id, Vec2::from(*size_override)));
                    }
                    elements.push(Box::new(widget));
                }
                SceneElement::Spacer { id, expand, visible } => {
                    let spacer = match expand {
                        Expand::Both => SpacerElement::new(*id),
                        Expand::Horizontal => SpacerElement::horizontal(*id),
                        Expand::Vertical => SpacerElement::vertical(*id),
                    };
                    let spacer = if *visible { spacer } else { spacer.hidden() };
                    elements.push(Box::new(spacer));
                }
            }
        }

        SceneContents { elements, overrides }
    }
}

fn check_size(what: &str, [width, height]: [f32; 2]) -> Result<()> {
    let valid = |v: f32| v.is_finite() && v >= 0.0;
    if valid(width) && valid(height) {
        Ok(())
    } else {
        Err(BoxlayError::InvalidSize {
            what: what.to_string(),
            width,
            height,
        })
    }
}

pub fn load_scene_file(path: impl AsRef<Path>) -> Result<Scene> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)?;
    let scene = Scene::from_json(&data)?;

    debug!(
        "Loaded scene {}: orientation={:?}, container={:?}, {} elements",
        path.display(),
        scene.orientation,
        scene.container,
        scene.elements.len()
    );

    Ok(scene)
}
