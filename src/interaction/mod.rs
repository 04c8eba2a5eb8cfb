//! Pointer-driven chart interaction: hit regions and tooltip placement.
//!
//! Charts publish one hit region per bar/point/slice; hosts forward pointer
//! coordinates and the owning chart raises or tears down the tooltip.

use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::render::Color;

/// Gap kept between the pointer and the tooltip box.
pub const TOOLTIP_MARGIN: f64 = 10.0;

/// One swatch + label + formatted value row inside a tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipEntry {
    pub swatch: Color,
    pub label: String,
    pub value: String,
}

/// Tooltip payload: a title line plus one entry per hovered datum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub title: String,
    pub entries: Vec<TooltipEntry>,
}

impl TooltipContent {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_entry(mut self, swatch: Color, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push(TooltipEntry {
            swatch,
            label: label.into(),
            value: value.into(),
        });
        self
    }
}

/// Places a tooltip box of `width` x `height` near a pointer anchor.
///
/// Default position is above-right of the pointer. A box that would overflow
/// the right edge is shifted left by its own width plus the margin; one that
/// would overflow the top is flipped below the pointer. The result is finally
/// clamped so the box never leaves the viewport.
#[must_use]
pub fn place_tooltip(
    anchor_x: f64,
    anchor_y: f64,
    width: f64,
    height: f64,
    viewport: Viewport,
) -> (f64, f64) {
    let bounds_w = f64::from(viewport.width);
    let bounds_h = f64::from(viewport.height);

    let mut x = anchor_x + TOOLTIP_MARGIN;
    let mut y = anchor_y - height - TOOLTIP_MARGIN;

    if x + width > bounds_w {
        x = anchor_x - width - TOOLTIP_MARGIN;
    }
    if y < 0.0 {
        y = anchor_y + TOOLTIP_MARGIN;
    }

    (
        x.clamp(0.0, (bounds_w - width).max(0.0)),
        y.clamp(0.0, (bounds_h - height).max(0.0)),
    )
}

/// Pointer-testable footprint of one rendered datum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HitShape {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
    },
    /// Annular sector in the pie angle convention (degrees, clockwise).
    Sector {
        cx: f64,
        cy: f64,
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        sweep_angle: f64,
    },
}

impl HitShape {
    #[must_use]
    pub fn contains(self, px: f64, py: f64) -> bool {
        match self {
            Self::Rect {
                x,
                y,
                width,
                height,
            } => px >= x && px <= x + width && py >= y && py <= y + height,
            Self::Circle { cx, cy, radius } => {
                let dx = px - cx;
                let dy = py - cy;
                dx * dx + dy * dy <= radius * radius
            }
            Self::Sector {
                cx,
                cy,
                inner_radius,
                outer_radius,
                start_angle,
                sweep_angle,
            } => {
                let dx = px - cx;
                let dy = py - cy;
                let distance = (dx * dx + dy * dy).sqrt();
                if distance < inner_radius || distance > outer_radius {
                    return false;
                }
                let angle = dy.atan2(dx).to_degrees();
                (angle - start_angle).rem_euclid(360.0) <= sweep_angle
            }
        }
    }
}

/// Hit shape plus the tooltip raised when the pointer lands on it.
#[derive(Debug, Clone, PartialEq)]
pub struct HitRegion {
    pub shape: HitShape,
    pub content: TooltipContent,
}

/// Topmost region under the pointer (regions are pushed in paint order).
#[must_use]
pub fn resolve_hit(regions: &[HitRegion], x: f64, y: f64) -> Option<&HitRegion> {
    regions.iter().rev().find(|region| region.shape.contains(x, y))
}
