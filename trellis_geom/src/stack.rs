// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data records, cumulative stacking and percentage normalization.
//!
//! Stacking walks the caller's series keys in order, accumulating a running
//! total per x-position; series `i` occupies the band between the total
//! before it and the total including it. Inputs are never mutated — every
//! operation returns freshly built values.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

/// Identifies one data series within a [`DataPoint`] set.
///
/// Series key order is significant and always caller-controlled: stack and
/// ring order follow the key slice passed to each operation, never the
/// iteration order of the per-point value map.
pub type SeriesKey = String;

/// The x-key of a data point: a category label or a plain number.
#[derive(Clone, Debug, PartialEq)]
pub enum Category {
    /// A numeric x value.
    Number(f64),
    /// A categorical x label.
    Label(String),
}

impl Category {
    /// Returns the label form used by categorical scales.
    ///
    /// Numbers are formatted with `Display`.
    pub fn label(&self) -> String {
        match self {
            Self::Number(v) => alloc::format!("{v}"),
            Self::Label(s) => s.clone(),
        }
    }
}

impl From<f64> for Category {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self::Label(String::from(value))
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Self::Label(value)
    }
}

/// One input record: an x-key plus named numeric series values.
///
/// Records are read-only inputs; no engine operation mutates them.
#[derive(Clone, Debug)]
pub struct DataPoint {
    /// The x-key for this record.
    pub x: Category,
    /// Series values keyed by series name.
    pub values: HashMap<SeriesKey, f64>,
}

impl DataPoint {
    /// Creates a data point from an x-key and `(key, value)` pairs.
    pub fn new(
        x: impl Into<Category>,
        values: impl IntoIterator<Item = (SeriesKey, f64)>,
    ) -> Self {
        Self {
            x: x.into(),
            values: values.into_iter().collect(),
        }
    }

    /// Reads one series value.
    ///
    /// A missing key reads as `0.0`; this accessor is the single place the
    /// default-to-zero rule is applied. Values that are present are
    /// returned as stored — non-finite values propagate through downstream
    /// arithmetic rather than being special-cased.
    pub fn value(&self, key: &str) -> f64 {
        self.values.get(key).copied().unwrap_or(0.0)
    }
}

/// The cumulative band occupied by one series at one x-position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StackFrame {
    /// Bottom of the band: the sum of the preceding series.
    pub base: f64,
    /// Top of the band: `base` plus this series' value.
    pub top: f64,
}

/// Computes cumulative stack bands, one row per key in `series` order.
///
/// `out[i][j]` is series `i`'s band at data point `j`. The top of the last
/// series at any point equals the sum of all series values there.
pub fn stack(data: &[DataPoint], series: &[SeriesKey]) -> Vec<Vec<StackFrame>> {
    let mut out: Vec<Vec<StackFrame>> = series
        .iter()
        .map(|_| Vec::with_capacity(data.len()))
        .collect();
    for point in data {
        let mut running = 0.0;
        for (row, key) in out.iter_mut().zip(series) {
            let v = point.value(key);
            row.push(StackFrame {
                base: running,
                top: running + v,
            });
            running += v;
        }
    }
    out
}

/// Rescales each point's series values so they sum to 100.
///
/// A point whose values across `series` sum to zero is passed through
/// unchanged (documented edge case: there is no meaningful share of an
/// empty total). The x-key and any values outside `series` are always
/// preserved.
pub fn normalize_to_percentage(data: &[DataPoint], series: &[SeriesKey]) -> Vec<DataPoint> {
    data.iter()
        .map(|point| {
            let sum: f64 = series.iter().map(|key| point.value(key)).sum();
            if sum == 0.0 {
                return point.clone();
            }
            let mut values = point.values.clone();
            for key in series {
                values.insert(key.clone(), point.value(key) / sum * 100.0);
            }
            DataPoint {
                x: point.x.clone(),
                values,
            }
        })
        .collect()
}

/// Returns the maximum per-category cumulative total across `series`.
///
/// This is the stacked y-domain top: the largest sum of all series at any
/// single x-position, not the largest individual value. Empty input
/// returns `0.0`.
pub fn stacked_max(data: &[DataPoint], series: &[SeriesKey]) -> f64 {
    data.iter()
        .map(|point| series.iter().map(|key| point.value(key)).sum::<f64>())
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use super::*;

    fn keys() -> Vec<SeriesKey> {
        vec!["mobile".to_string(), "desktop".to_string(), "tablet".to_string()]
    }

    fn sample() -> Vec<DataPoint> {
        vec![
            DataPoint::new(
                "jan",
                [
                    ("mobile".to_string(), 20.0),
                    ("desktop".to_string(), 50.0),
                    ("tablet".to_string(), 30.0),
                ],
            ),
            DataPoint::new(
                "feb",
                [
                    ("mobile".to_string(), 10.0),
                    ("desktop".to_string(), 0.0),
                    ("tablet".to_string(), 5.0),
                ],
            ),
        ]
    }

    #[test]
    fn last_series_top_equals_the_point_total() {
        let data = sample();
        let frames = stack(&data, &keys());
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[2][0].top, 100.0);
        assert_eq!(frames[2][1].top, 15.0);
    }

    #[test]
    fn bands_are_contiguous_in_series_order() {
        let data = sample();
        let frames = stack(&data, &keys());
        assert_eq!(frames[0][0], StackFrame { base: 0.0, top: 20.0 });
        assert_eq!(frames[1][0], StackFrame { base: 20.0, top: 70.0 });
        assert_eq!(frames[2][0], StackFrame { base: 70.0, top: 100.0 });
    }

    #[test]
    fn reordering_series_keys_reorders_bands() {
        let data = sample();
        let reversed: Vec<SeriesKey> = keys().into_iter().rev().collect();
        let frames = stack(&data, &reversed);
        assert_eq!(frames[0][0], StackFrame { base: 0.0, top: 30.0 });
        assert_eq!(frames[2][0].top, 100.0);
    }

    #[test]
    fn missing_series_keys_read_as_zero() {
        let data = vec![DataPoint::new("x", [("a".to_string(), 3.0)])];
        let frames = stack(&data, &["a".to_string(), "ghost".to_string()]);
        assert_eq!(frames[1][0], StackFrame { base: 3.0, top: 3.0 });
    }

    #[test]
    fn normalized_values_sum_to_one_hundred() {
        let data = sample();
        let keys = keys();
        for point in normalize_to_percentage(&data, &keys) {
            let sum: f64 = keys.iter().map(|k| point.value(k)).sum();
            assert!((sum - 100.0).abs() < 1e-9, "sum was {sum}");
        }
    }

    #[test]
    fn zero_total_point_passes_through_unchanged() {
        let data = vec![DataPoint::new(
            "empty",
            [("a".to_string(), 0.0), ("b".to_string(), 0.0)],
        )];
        let out = normalize_to_percentage(&data, &["a".to_string(), "b".to_string()]);
        assert_eq!(out[0].value("a"), 0.0);
        assert_eq!(out[0].value("b"), 0.0);
        assert_eq!(out[0].x, Category::Label("empty".to_string()));
    }

    #[test]
    fn normalization_preserves_unlisted_values_and_x() {
        let data = vec![DataPoint::new(
            7.0,
            [("a".to_string(), 1.0), ("other".to_string(), 42.0)],
        )];
        let out = normalize_to_percentage(&data, &["a".to_string()]);
        assert_eq!(out[0].value("a"), 100.0);
        assert_eq!(out[0].value("other"), 42.0);
        assert_eq!(out[0].x, Category::Number(7.0));
    }

    #[test]
    fn stacked_max_is_the_largest_category_sum() {
        let data = sample();
        assert_eq!(stacked_max(&data, &keys()), 100.0);
        assert_eq!(stacked_max(&[], &keys()), 0.0);
    }
}
