//! # Graduation Scales
//!
//! Generators for evenly spaced marks. Counts are derived by integer index
//! (`k · step`) rather than by repeated addition so that long scales do not
//! accumulate rounding drift.

/// Slack when comparing a generated mark against the end of its span
const SPAN_TOLERANCE: f64 = 1e-9;

/// Marks `0, step, 2·step, …` up to `end`.
///
/// With `include_end` the last mark may equal `end`; without it the scale
/// stops short (used for full circles, where 360° is the 0° mark).
pub fn uniform_scale(step: f64, end: f64, include_end: bool) -> Vec<f64> {
    let count = (end / step + SPAN_TOLERANCE).floor() as usize;
    let mut marks: Vec<f64> = (0..=count).map(|k| k as f64 * step).collect();
    if !include_end && marks.last().is_some_and(|&m| m >= end - SPAN_TOLERANCE) {
        marks.pop();
    }
    marks
}

/// Marks around a full circle: `0, step, …` strictly below 360°.
pub fn full_circle(step: f64) -> Vec<f64> {
    uniform_scale(step, 360.0, false)
}

/// Marks `step, 2·step, …` up to and including `limit`, with `limit` itself
/// appended when it is not a multiple of `step`. Zero is omitted.
pub fn stepped_to_limit(step: f64, limit: f64) -> Vec<f64> {
    let mut marks: Vec<f64> = uniform_scale(step, limit, true).into_iter().skip(1).collect();
    if marks.last().map_or(true, |&m| m < limit - SPAN_TOLERANCE) {
        marks.push(limit);
    }
    marks
}

/// Marks `0, step, 2·step, …` ending exactly at `limit`, which is appended
/// when it is not a multiple of `step`.
pub fn closed_scale(step: f64, limit: f64) -> Vec<f64> {
    std::iter::once(0.0).chain(stepped_to_limit(step, limit)).collect()
}

/// Marks `step, 2·step, …` strictly between 0 and `limit`.
pub fn open_interval(step: f64, limit: f64) -> Vec<f64> {
    uniform_scale(step, limit, false).into_iter().skip(1).collect()
}
