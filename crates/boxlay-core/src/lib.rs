// crates/boxlay-core/src/lib.rs
pub mod elements;
pub mod scene;
pub mod theme;

pub use elements::*;
pub use scene::*;
pub use theme::*;

#[derive(Debug, thiserror::Error)]
pub enum BoxlayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid scene file: {0}")]
    InvalidScene(#[from] serde_json::Error),

    #[error("Duplicate element id: {0}")]
    DuplicateElement(ElementId),

    #[error("Invalid size for {what}: ({width}, {height})")]
    InvalidSize {
        what: String,
        width: f32,
        height: f32,
    },
}

pub type Result<T> = std::result::Result<T, BoxlayError>;
