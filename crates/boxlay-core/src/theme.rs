// crates/boxlay-core/src/theme.rs

/// Padding the host toolkit's stock theme puts between stacked elements.
pub const DEFAULT_PADDING: f32 = 4.0;

/// Visual settings a layout reads at call time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub padding: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
        }
    }
}

impl Theme {
    pub fn with_padding(padding: f32) -> Self {
        Self { padding }
    }
}
