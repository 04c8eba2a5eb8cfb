use crate::render::Color;

/// One legend row: swatch color, visibility flag, optional annotation
/// rendered after the label (pie charts annotate the percentage share).
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub color: Color,
    pub active: bool,
    pub annotation: Option<String>,
}

/// Item fed into a legend rebuild.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendItem {
    pub label: String,
    pub color: Color,
    pub annotation: Option<String>,
}

impl LegendItem {
    #[must_use]
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
            annotation: None,
        }
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
struct LegendRow {
    label: String,
    entry: LegendEntry,
}

/// Ordered legend state, one entry per dataset/slice.
///
/// Identity is positional: the entry index is the series index the owning
/// chart filters on, so duplicate labels stay distinct. Toggles survive
/// re-renders by carrying `active` flags over from the previous entry at the
/// same position (falling back to a label match when positions shift).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Legend {
    rows: Vec<LegendRow>,
}

impl Legend {
    /// Replaces all entries, carrying `active` flags over from the old state.
    pub fn rebuild(&mut self, items: impl IntoIterator<Item = LegendItem>) {
        let old = std::mem::take(&mut self.rows);
        self.rows = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let active = old
                    .get(index)
                    .filter(|row| row.label == item.label)
                    .or_else(|| old.iter().find(|row| row.label == item.label))
                    .is_none_or(|row| row.entry.active);
                LegendRow {
                    label: item.label,
                    entry: LegendEntry {
                        color: item.color,
                        active,
                        annotation: item.annotation,
                    },
                }
            })
            .collect();
    }

    /// Flips the entry at `index`; returns its new state, `None` out of range.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let entry = &mut self.rows.get_mut(index)?.entry;
        entry.active = !entry.active;
        Some(entry.active)
    }

    /// Entries not yet known to the legend default to visible.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.rows.get(index).is_none_or(|row| row.entry.active)
    }

    /// Per-index visibility flags for `count` series.
    #[must_use]
    pub fn active_flags(&self, count: usize) -> Vec<bool> {
        (0..count).map(|index| self.is_active(index)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LegendEntry)> {
        self.rows.iter().map(|row| (row.label.as_str(), &row.entry))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }
}
