use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Default dashboard palette, cycled when datasets outnumber colors.
const DEFAULT_COLORS: [Color; 8] = [
    Color::rgb8(0x63, 0x66, 0xf1),
    Color::rgb8(0x8b, 0x5c, 0xf6),
    Color::rgb8(0xec, 0x48, 0x99),
    Color::rgb8(0xf5, 0x9e, 0x0b),
    Color::rgb8(0x10, 0xb9, 0x81),
    Color::rgb8(0x3b, 0x82, 0xf6),
    Color::rgb8(0xef, 0x44, 0x44),
    Color::rgb8(0x14, 0xb8, 0xa6),
];

/// Ordered color list with deterministic cyclic assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> ChartResult<Self> {
        if colors.is_empty() {
            return Err(ChartError::InvalidConfig(
                "palette must contain at least one color".to_owned(),
            ));
        }
        for color in &colors {
            color.validate().map_err(|_| {
                ChartError::InvalidConfig("palette colors must be valid".to_owned())
            })?;
        }
        Ok(Self { colors })
    }

    /// Color at `index % len`, so any dataset count maps deterministically.
    #[must_use]
    pub fn color(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.to_vec(),
        }
    }
}
