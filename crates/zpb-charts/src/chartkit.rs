//! # chartkit
//!
//! Core chart primitives: scales, path builders, axis generators.
//! Implements Strategy pattern for flexible scale and rendering behaviors.

use std::fmt::Write;

/// Upper bound on generated ticks, whatever the domain
const MAX_TICKS: usize = 1_000;

// ============================================================================
// STRATEGY PATTERN: Scale Trait
// ============================================================================

/// Strategy trait for scales (maps domain values to range values)
pub trait Scale: Send + Sync {
    /// Scale a value from domain to range
    fn scale(&self, value: f64) -> f64;

    /// Inverse scale (range to domain)
    fn invert(&self, value: f64) -> f64;

    /// Generate tick values
    fn ticks(&self, count: usize) -> Vec<f64>;

    /// Labels for a set of ticks produced by [`Scale::ticks`]
    fn tick_labels(&self, ticks: &[f64]) -> Vec<String>;

    fn domain_bounds(&self) -> (f64, f64);

    fn range_bounds(&self) -> (f64, f64);

    fn set_domain(&mut self, min: f64, max: f64);
}

// ============================================================================
// LINEAR SCALE
// ============================================================================

/// Linear scale (D3-style continuous scale)
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
        }
    }

    pub fn domain(mut self, min: f64, max: f64) -> Self {
        self.domain = (min, max);
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

    /// Generate "nice" tick values (rounded to clean numbers)
    pub fn nice_ticks(&self, count: usize) -> Vec<f64> {
        let (min, max) = ordered(self.domain);
        let range = max - min;
        if !range.is_finite() {
            return Vec::new();
        }
        if range == 0.0 || count == 0 {
            return vec![min];
        }

        let step = nice_step(range / count as f64);
        if !step.is_finite() || step <= 0.0 {
            return Vec::new();
        }
        let nice_min = (min / step).floor() * step;
        let nice_max = (max / step).ceil() * step;
        if !nice_min.is_finite() || !nice_max.is_finite() {
            return Vec::new();
        }

        // Multiply rather than accumulate to avoid drift
        let mut ticks: Vec<f64> = (0..=MAX_TICKS)
            .map(|i| nice_min + i as f64 * step)
            .take_while(|tick| *tick <= nice_max + step * 0.5)
            .filter(|tick| *tick >= min && *tick <= max)
            .collect();
        ticks.dedup();
        ticks
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new()
    }
}

impl Scale for LinearScale {
    fn scale(&self, value: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        let span = d_max - d_min;
        if !span.is_finite() || span.abs() < f64::EPSILON {
            return (r_min + r_max) / 2.0;
        }

        let normalized = (value - d_min) / span;
        r_min + normalized * (r_max - r_min)
    }

    fn invert(&self, value: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        if (r_max - r_min).abs() < f64::EPSILON {
            return (d_min + d_max) / 2.0;
        }

        let normalized = (value - r_min) / (r_max - r_min);
        d_min + normalized * (d_max - d_min)
    }

    fn ticks(&self, count: usize) -> Vec<f64> {
        self.nice_ticks(count)
    }

    fn tick_labels(&self, ticks: &[f64]) -> Vec<String> {
        let step = match ticks {
            [a, b, ..] => (b - a).abs(),
            _ => 1.0,
        };
        let decimals = if step > 0.0 && step < 1.0 {
            (-step.log10().floor()) as usize
        } else {
            0
        };
        ticks.iter().map(|t| format_number(*t, decimals)).collect()
    }

    fn domain_bounds(&self) -> (f64, f64) {
        self.domain
    }

    fn range_bounds(&self) -> (f64, f64) {
        self.range
    }

    fn set_domain(&mut self, min: f64, max: f64) {
        self.domain = (min, max);
    }
}

// ============================================================================
// TIME SCALE
// ============================================================================

const SECOND: f64 = 1_000.0;
const MINUTE: f64 = 60.0 * SECOND;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;
const YEAR: f64 = 365.0 * DAY;

/// Candidate tick intervals in milliseconds, smallest first
const TIME_STEPS: &[f64] = &[
    1.0,
    2.0,
    5.0,
    10.0,
    20.0,
    50.0,
    100.0,
    200.0,
    500.0,
    SECOND,
    5.0 * SECOND,
    15.0 * SECOND,
    30.0 * SECOND,
    MINUTE,
    5.0 * MINUTE,
    15.0 * MINUTE,
    30.0 * MINUTE,
    HOUR,
    3.0 * HOUR,
    6.0 * HOUR,
    12.0 * HOUR,
    DAY,
    2.0 * DAY,
    7.0 * DAY,
    30.0 * DAY,
    90.0 * DAY,
    YEAR,
];

/// Time scale (maps millisecond timestamps to pixel positions)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeScale {
    inner: LinearScale,
}

impl TimeScale {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn domain(mut self, min: f64, max: f64) -> Self {
        self.inner = self.inner.domain(min, max);
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.inner = self.inner.range(min, max);
        self
    }

    /// Tick interval for roughly `count` ticks across the domain
    fn tick_step(&self, count: usize) -> Option<f64> {
        let (min, max) = ordered(self.inner.domain);
        let span = max - min;
        if !span.is_finite() || span <= 0.0 || count == 0 {
            return None;
        }

        let target = span / count as f64;
        let step = TIME_STEPS
            .iter()
            .copied()
            .find(|s| *s >= target)
            .unwrap_or_else(|| nice_step(target / YEAR) * YEAR);
        Some(step)
    }
}

impl Scale for TimeScale {
    fn scale(&self, value: f64) -> f64 {
        self.inner.scale(value)
    }

    fn invert(&self, value: f64) -> f64 {
        self.inner.invert(value)
    }

    fn ticks(&self, count: usize) -> Vec<f64> {
        let (min, max) = ordered(self.inner.domain);
        let Some(step) = self.tick_step(count) else {
            return if min == max && min.is_finite() {
                vec![min]
            } else {
                Vec::new()
            };
        };

        let first = (min / step).ceil();
        let last = (max / step).floor();
        if !first.is_finite() || !last.is_finite() || last < first {
            return Vec::new();
        }

        // Past 2^53 neighbouring multiples collapse; dedup keeps ticks distinct
        let count = ((last - first) as usize).min(MAX_TICKS);
        let mut ticks: Vec<f64> = (0..=count)
            .map(|n| (first + n as f64) * step)
            .filter(|tick| *tick >= min && *tick <= max)
            .collect();
        ticks.dedup();
        ticks
    }

    fn tick_labels(&self, ticks: &[f64]) -> Vec<String> {
        ticks.iter().map(|t| format_time_tick(*t)).collect()
    }

    fn domain_bounds(&self) -> (f64, f64) {
        self.inner.domain_bounds()
    }

    fn range_bounds(&self) -> (f64, f64) {
        self.inner.range_bounds()
    }

    fn set_domain(&mut self, min: f64, max: f64) {
        self.inner.set_domain(min, max);
    }
}

fn ordered((a, b): (f64, f64)) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Round a raw step to 1, 2, 5 or 10 times a power of ten
fn nice_step(rough_step: f64) -> f64 {
    let magnitude = 10.0_f64.powf(rough_step.log10().floor());
    let residual = rough_step / magnitude;

    if residual <= 1.0 {
        magnitude
    } else if residual <= 2.0 {
        2.0 * magnitude
    } else if residual <= 5.0 {
        5.0 * magnitude
    } else {
        10.0 * magnitude
    }
}

// ============================================================================
// STRATEGY PATTERN: Path Generator Trait
// ============================================================================

/// Strategy trait for path generation
pub trait PathGenerator: Send + Sync {
    fn generate(&self, points: &[(f64, f64)]) -> String;
}

/// Line path generator
#[derive(Debug, Clone, Default)]
pub struct LinePath;

impl PathGenerator for LinePath {
    fn generate(&self, points: &[(f64, f64)]) -> String {
        let Some(&(x, y)) = points.first() else {
            return String::new();
        };

        let mut builder = PathBuilder::new().move_to(x, y);
        for &(x, y) in &points[1..] {
            builder = builder.line_to(x, y);
        }
        builder.build()
    }
}

/// Cardinal spline path generator (D3 `interpolate('cardinal')`)
#[derive(Debug, Clone)]
pub struct CardinalLine {
    pub tension: f64,
}

impl Default for CardinalLine {
    fn default() -> Self {
        Self { tension: 0.7 }
    }
}

impl CardinalLine {
    fn tangents(&self, points: &[(f64, f64)]) -> Vec<(f64, f64)> {
        let a = (1.0 - self.tension) / 2.0;
        points
            .windows(3)
            .map(|w| (a * (w[2].0 - w[0].0), a * (w[2].1 - w[0].1)))
            .collect()
    }
}

impl PathGenerator for CardinalLine {
    fn generate(&self, points: &[(f64, f64)]) -> String {
        if points.len() < 3 {
            return LinePath.generate(points);
        }

        let tangents = self.tangents(points);
        let (p0x, p0y) = points[0];
        let mut builder = PathBuilder::new().move_to(p0x, p0y);

        // Hermite segments: quadratic lead-in, cubic body, quadratic lead-out
        let t0 = tangents[0];
        let p1 = points[1];
        builder = builder.quadratic_to(p1.0 - t0.0 * 2.0 / 3.0, p1.1 - t0.1 * 2.0 / 3.0, p1.0, p1.1);

        let mut p = p1;
        let mut t = t0;
        let mut pi = 2;

        if tangents.len() > 1 {
            let p_prev = p1;
            t = tangents[1];
            p = points[pi];
            pi += 1;
            builder = builder.cubic_to(
                p_prev.0 + t0.0,
                p_prev.1 + t0.1,
                p.0 - t.0,
                p.1 - t.1,
                p.0,
                p.1,
            );

            for &tangent in &tangents[2..] {
                p = points[pi];
                t = tangent;
                pi += 1;
                builder = builder.smooth_cubic_to(p.0 - t.0, p.1 - t.1, p.0, p.1);
            }
        }

        let last = points[pi];
        builder
            .quadratic_to(p.0 + t.0 * 2.0 / 3.0, p.1 + t.1 * 2.0 / 3.0, last.0, last.1)
            .build()
    }
}

// ============================================================================
// PATH BUILDER (fluent API)
// ============================================================================

/// SVG path builder with fluent API
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    commands: String,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            commands: String::with_capacity(256),
        }
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        let _ = write!(self.commands, "M{:.2},{:.2}", x, y);
        self
    }

    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        let _ = write!(self.commands, "L{:.2},{:.2}", x, y);
        self
    }

    pub fn horizontal_to(mut self, x: f64) -> Self {
        let _ = write!(self.commands, "H{:.2}", x);
        self
    }

    pub fn vertical_to(mut self, y: f64) -> Self {
        let _ = write!(self.commands, "V{:.2}", y);
        self
    }

    pub fn cubic_to(mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> Self {
        let _ = write!(
            self.commands,
            "C{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            x1, y1, x2, y2, x, y
        );
        self
    }

    pub fn smooth_cubic_to(mut self, x2: f64, y2: f64, x: f64, y: f64) -> Self {
        let _ = write!(self.commands, "S{:.2},{:.2},{:.2},{:.2}", x2, y2, x, y);
        self
    }

    pub fn quadratic_to(mut self, x1: f64, y1: f64, x: f64, y: f64) -> Self {
        let _ = write!(self.commands, "Q{:.2},{:.2},{:.2},{:.2}", x1, y1, x, y);
        self
    }

    pub fn build(self) -> String {
        self.commands
    }
}

// ============================================================================
// AXIS GENERATOR
// ============================================================================

/// Which side of the plot an axis is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

/// D3-style axis guide. Holds only presentation settings; the scale is
/// borrowed at render time so domain changes show up on the next render.
#[derive(Debug, Clone)]
pub struct Axis {
    pub orient: AxisOrient,
    /// Tick length; negative values draw inward across the plot (grid lines)
    pub tick_size: f64,
    pub tick_padding: f64,
    pub tick_count: usize,
}

impl Axis {
    pub fn bottom() -> Self {
        Self {
            orient: AxisOrient::Bottom,
            tick_size: 6.0,
            tick_padding: 3.0,
            tick_count: 10,
        }
    }

    pub fn left() -> Self {
        Self {
            orient: AxisOrient::Left,
            ..Self::bottom()
        }
    }

    pub fn tick_size(mut self, size: f64) -> Self {
        self.tick_size = size;
        self
    }

    pub fn tick_padding(mut self, padding: f64) -> Self {
        self.tick_padding = padding;
        self
    }

    /// Tick positions and labels for the scale's current domain
    pub fn ticks<S: Scale>(&self, scale: &S) -> Vec<AxisTick> {
        let ticks = scale.ticks(self.tick_count);
        let labels = scale.tick_labels(&ticks);
        ticks
            .iter()
            .zip(labels)
            .map(|(&tick, label)| AxisTick {
                position: scale.scale(tick),
                label,
            })
            .collect()
    }

    /// Outer domain path, with end ticks of `tick_size`
    pub fn domain_path<S: Scale>(&self, scale: &S) -> String {
        let (r0, r1) = scale.range_bounds();
        let size = self.tick_size;
        match self.orient {
            AxisOrient::Bottom => PathBuilder::new()
                .move_to(r0, size)
                .vertical_to(0.0)
                .horizontal_to(r1)
                .vertical_to(size),
            AxisOrient::Left => PathBuilder::new()
                .move_to(-size, r0)
                .horizontal_to(0.0)
                .vertical_to(r1)
                .horizontal_to(-size),
        }
        .build()
    }

    /// Transform of the tick group at `position`
    pub fn tick_transform(&self, position: f64) -> String {
        match self.orient {
            AxisOrient::Bottom => format!("translate({},0)", position),
            AxisOrient::Left => format!("translate(0,{})", position),
        }
    }

    /// End point `(x2, y2)` of a tick line drawn from the tick origin
    pub fn tick_end(&self) -> (f64, f64) {
        match self.orient {
            AxisOrient::Bottom => (0.0, self.tick_size),
            AxisOrient::Left => (-self.tick_size, 0.0),
        }
    }

    /// Where a tick label sits relative to its tick
    pub fn label_placement(&self) -> LabelPlacement {
        let offset = self.tick_size.max(0.0) + self.tick_padding;
        match self.orient {
            AxisOrient::Bottom => LabelPlacement {
                x: 0.0,
                y: offset,
                dy: ".71em",
                anchor: "middle",
            },
            AxisOrient::Left => LabelPlacement {
                x: -offset,
                y: 0.0,
                dy: ".32em",
                anchor: "end",
            },
        }
    }
}

/// One tick of an axis, in pixels along the axis
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    pub x: f64,
    pub y: f64,
    pub dy: &'static str,
    pub anchor: &'static str,
}

// ============================================================================
// FORMATTERS
// ============================================================================

/// Format a tick value with a fixed number of decimals
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals);
    // Avoid "-0"
    if formatted.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        formatted.trim_start_matches('-').to_string()
    } else {
        formatted
    }
}

/// Format a millisecond timestamp at the coarsest unit it is aligned to
pub fn format_time_tick(timestamp_ms: f64) -> String {
    use chrono::{Datelike, TimeZone, Timelike, Utc};

    let Some(dt) = Utc.timestamp_millis_opt(timestamp_ms as i64).single() else {
        return String::new();
    };

    if dt.timestamp_subsec_millis() != 0 {
        dt.format("%.3f").to_string()
    } else if dt.second() != 0 {
        dt.format(":%S").to_string()
    } else if dt.minute() != 0 {
        dt.format("%I:%M").to_string()
    } else if dt.hour() != 0 {
        dt.format("%I %p").to_string()
    } else if dt.day() != 1 {
        dt.format("%a %d").to_string()
    } else if dt.month() != 1 {
        dt.format("%B").to_string()
    } else {
        dt.format("%Y").to_string()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new().domain(0.0, 100.0).range(0.0, 500.0);

        assert_eq!(scale.scale(0.0), 0.0);
        assert_eq!(scale.scale(50.0), 250.0);
        assert_eq!(scale.scale(100.0), 500.0);
    }

    #[test]
    fn test_linear_scale_invert() {
        let scale = LinearScale::new().domain(0.0, 100.0).range(0.0, 500.0);

        assert_eq!(scale.invert(250.0), 50.0);
    }

    #[test]
    fn test_inverted_range() {
        let scale = LinearScale::new().domain(0.0, 5.0).range(200.0, 0.0);

        assert_eq!(scale.scale(0.0), 200.0);
        assert_eq!(scale.scale(5.0), 0.0);
        assert_eq!(scale.invert(100.0), 2.5);
    }

    #[test]
    fn test_undefined_domain_maps_to_range_middle() {
        let scale = LinearScale::new().domain(f64::NAN, f64::NAN).range(0.0, 100.0);

        assert_eq!(scale.scale(42.0), 50.0);
        assert!(scale.ticks(10).is_empty());
    }

    #[test]
    fn test_nice_ticks() {
        let scale = LinearScale::new().domain(0.0, 8.0);
        assert_eq!(scale.ticks(4), vec![0.0, 2.0, 4.0, 6.0, 8.0]);
        assert_eq!(scale.tick_labels(&[0.0, 0.5, 1.0]), vec!["0.0", "0.5", "1.0"]);
    }

    #[test]
    fn test_nice_ticks_overflowing_span() {
        // Both bounds finite, but max - min overflows to infinity
        let scale = LinearScale::new().domain(-1e308, 1e308).range(220.0, 0.0);
        assert!(scale.nice_ticks(10).is_empty());
        assert_eq!(scale.scale(0.0), 110.0);

        let scale = LinearScale::new().domain(f64::MAX, -f64::MAX);
        assert!(scale.ticks(10).is_empty());
    }

    #[test]
    fn test_nice_ticks_are_bounded_and_distinct() {
        // Step far below the precision of the bounds
        let scale = LinearScale::new().domain(1e20, 1e20 + 1e5);
        let ticks = scale.nice_ticks(10);

        assert!(ticks.len() <= MAX_TICKS);
        assert!(ticks.windows(2).all(|w| w[0] < w[1]));
        assert!(ticks.iter().all(|t| *t >= 1e20 && *t <= 1e20 + 1e5));
    }

    #[test]
    fn test_time_ticks_far_from_epoch_terminate() {
        // min / step exceeds 2^53: consecutive multiples are not representable
        let (min, max) = (1e21, 1e21 + 3e5);
        let scale = TimeScale::new().domain(min, max).range(0.0, 850.0);
        let ticks = scale.ticks(10);

        assert!(ticks.len() <= MAX_TICKS + 1);
        assert!(ticks.windows(2).all(|w| w[0] < w[1]));
        assert!(ticks.iter().all(|t| *t >= min && *t <= max));

        let scale = TimeScale::new().domain(-1e308, 1e308);
        assert!(scale.ticks(10).is_empty());
    }

    #[test]
    fn test_time_ticks_pick_calendar_steps() {
        let scale = TimeScale::new().domain(0.0, 6.0 * HOUR).range(0.0, 600.0);
        let ticks = scale.ticks(6);

        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&(6.0 * HOUR)));
        assert!(ticks.windows(2).all(|w| w[1] - w[0] == HOUR));
    }

    #[test]
    fn test_format_time_tick() {
        assert_eq!(format_time_tick(0.0), "1970");
        assert_eq!(format_time_tick(3.0 * HOUR), "03 AM");
        assert_eq!(format_time_tick(90.0 * MINUTE), "01:30");
        assert_eq!(format_time_tick(250.0), ".250");
    }

    #[test]
    fn test_path_builder() {
        let path = PathBuilder::new()
            .move_to(0.0, 0.0)
            .line_to(100.0, 100.0)
            .smooth_cubic_to(1.0, 2.0, 3.0, 4.0)
            .build();

        assert!(path.contains("M0.00,0.00"));
        assert!(path.contains("L100.00,100.00"));
        assert!(path.contains("S1.00,2.00,3.00,4.00"));
    }

    #[test]
    fn test_line_path_generator() {
        let generator = LinePath;
        let path = generator.generate(&[(0.0, 0.0), (50.0, 50.0), (100.0, 0.0)]);

        assert!(path.starts_with("M0.00,0.00"));
        assert!(path.contains("L50.00,50.00"));
    }

    #[test]
    fn test_cardinal_falls_back_to_linear() {
        let path = CardinalLine::default().generate(&[(0.0, 0.0), (10.0, 5.0)]);
        assert_eq!(path, "M0.00,0.00L10.00,5.00");
        assert_eq!(CardinalLine::default().generate(&[]), "");
    }

    #[test]
    fn test_cardinal_three_points() {
        // tension 0.7 -> a = 0.15, single tangent (0.15 * 20, 0) = (3, 0)
        let path = CardinalLine::default().generate(&[(0.0, 0.0), (10.0, 10.0), (20.0, 0.0)]);
        assert_eq!(path, "M0.00,0.00Q8.00,10.00,10.00,10.00Q12.00,10.00,20.00,0.00");
    }

    #[test]
    fn test_cardinal_many_points_ends_on_last_point() {
        let points: Vec<(f64, f64)> = (0..6).map(|i| (i as f64 * 10.0, (i % 2) as f64)).collect();
        let path = CardinalLine::default().generate(&points);

        assert!(path.starts_with("M0.00,0.00Q"));
        assert!(path.contains('C'));
        assert_eq!(path.matches('S').count(), 2);
        assert!(path.ends_with("50.00,1.00"));
    }

    #[test]
    fn test_axis_ticks_and_domain() {
        let scale = LinearScale::new().domain(0.0, 10.0).range(100.0, 0.0);
        let axis = Axis::left().tick_size(-300.0);

        let ticks = axis.ticks(&scale);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[0].position, 100.0);
        assert_eq!(ticks[10].label, "10");
        assert_eq!(axis.tick_transform(ticks[0].position), "translate(0,100)");
        assert_eq!(axis.tick_end(), (300.0, 0.0));
        assert_eq!(axis.label_placement().x, -3.0);
        assert_eq!(axis.domain_path(&scale), "M300.00,100.00H0.00V0.00H300.00");
    }

    #[test]
    fn test_bottom_axis_label_below_outward_ticks() {
        let axis = Axis::bottom().tick_padding(8.0);
        let placement = axis.label_placement();
        assert_eq!(placement.y, 14.0);
        assert_eq!(placement.anchor, "middle");
        assert_eq!(axis.tick_end(), (0.0, 6.0));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(2.0, 0), "2");
        assert_eq!(format_number(-0.0001, 1), "0.0");
        assert_eq!(format_number(1.25, 2), "1.25");
    }
}
