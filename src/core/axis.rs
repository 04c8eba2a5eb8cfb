use crate::core::ValueScale;

/// One value-axis tick: a label value and its pixel offset from the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueTick {
    pub value: f64,
    pub offset: f64,
}

/// Evenly spaced ticks spanning `0..=max`.
///
/// `count` is the number of intervals, so `count + 1` ticks are produced.
/// A degenerate scale collapses to the single baseline tick.
#[must_use]
pub fn value_ticks(scale: ValueScale, count: usize) -> Vec<ValueTick> {
    if scale.is_degenerate() || count == 0 {
        return vec![ValueTick {
            value: 0.0,
            offset: 0.0,
        }];
    }

    (0..=count)
        .map(|step| {
            let value = scale.max() * step as f64 / count as f64;
            ValueTick {
                value,
                offset: scale.offset(value),
            }
        })
        .collect()
}

/// Axis/data-label number format: integers bare, fractions with one decimal.
#[must_use]
pub fn format_value(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{:.0}", value.round())
    } else {
        format!("{value:.1}")
    }
}
