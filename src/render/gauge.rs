//! Range gauge geometry — a half-donut showing where a value falls
//! relative to its reference range.
//!
//! The scale is expanded past the range on both sides so the needle is
//! never pinned at the extreme edge: the green zone sits centrally with
//! alert zones on either side, and the gauge grows asymmetrically toward
//! whichever side an out-of-range value falls on. Pure geometry — no
//! side effects; `to_svg` serializes the computed shape.

use std::fmt::Write as _;

use serde::Serialize;

use super::GaugeError;

/// Default rendering width in px, matching the table cell size.
pub const DEFAULT_WIDTH: f64 = 120.0;

/// Fraction of the reference range added as scale padding on each side.
const SCALE_PADDING_FACTOR: f64 = 0.75;

/// Fraction of the range added past an out-of-range value.
const OVERSHOOT_MARGIN_FACTOR: f64 = 0.1;

/// The gauge sweeps a half circle, left to right.
const SWEEP_START_DEG: f64 = 180.0;
const SWEEP_END_DEG: f64 = 360.0;

const ARC_STROKE_WIDTH: f64 = 8.0;
const ALERT_COLOR: &str = "#ef4444";
const NORMAL_COLOR: &str = "#10b981";

/// Which zone an arc segment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GaugeZone {
    Alert,
    Normal,
}

/// One arc of the gauge, in degrees on the 180°..360° sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcSegment {
    pub start_deg: f64,
    pub end_deg: f64,
    pub zone: GaugeZone,
}

/// Computed gauge shape for one metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeGeometry {
    pub value: f64,
    pub min: f64,
    pub max: f64,
    /// Expanded scale bounds; always contain `value`, `min`, and `max`.
    pub gauge_min: f64,
    pub gauge_max: f64,
    pub min_angle_deg: f64,
    pub max_angle_deg: f64,
    pub needle_angle_deg: f64,
    pub width: f64,
}

impl GaugeGeometry {
    /// Compute gauge geometry at the default width.
    pub fn compute(value: f64, min: f64, max: f64) -> Result<Self, GaugeError> {
        Self::with_width(value, min, max, DEFAULT_WIDTH)
    }

    /// Compute gauge geometry at an explicit rendering width.
    ///
    /// `min` must be strictly below `max`; a collapsed range would make
    /// the value-to-angle mapping divide by zero, so it is rejected here
    /// and callers fall back to the status badge.
    pub fn with_width(value: f64, min: f64, max: f64, width: f64) -> Result<Self, GaugeError> {
        if !(min < max) {
            return Err(GaugeError::DegenerateRange { min, max });
        }

        let range = max - min;
        let padding = SCALE_PADDING_FACTOR * range;
        let overshoot = OVERSHOOT_MARGIN_FACTOR * range;

        let gauge_min = f64::min(
            min - padding,
            if value < min { value - overshoot } else { min - padding },
        );
        let gauge_max = f64::max(
            max + padding,
            if value > max { value + overshoot } else { max + padding },
        );

        let mut gauge = Self {
            value,
            min,
            max,
            gauge_min,
            gauge_max,
            min_angle_deg: 0.0,
            max_angle_deg: 0.0,
            needle_angle_deg: 0.0,
            width,
        };
        gauge.min_angle_deg = gauge.angle_of(min);
        gauge.max_angle_deg = gauge.angle_of(max);
        gauge.needle_angle_deg = gauge.angle_of(value);
        Ok(gauge)
    }

    /// Map a value to its angle on the sweep, in degrees.
    ///
    /// Values outside the scale clamp to the gauge edges; monotonic
    /// non-decreasing in `v`.
    pub fn angle_of(&self, v: f64) -> f64 {
        let clamped = v.clamp(self.gauge_min, self.gauge_max);
        let percent = (clamped - self.gauge_min) / (self.gauge_max - self.gauge_min);
        SWEEP_START_DEG + percent * (SWEEP_END_DEG - SWEEP_START_DEG)
    }

    /// The three arcs drawn in order: alert, normal, alert.
    pub fn arcs(&self) -> [ArcSegment; 3] {
        [
            ArcSegment {
                start_deg: SWEEP_START_DEG,
                end_deg: self.min_angle_deg,
                zone: GaugeZone::Alert,
            },
            ArcSegment {
                start_deg: self.min_angle_deg,
                end_deg: self.max_angle_deg,
                zone: GaugeZone::Normal,
            },
            ArcSegment {
                start_deg: self.max_angle_deg,
                end_deg: SWEEP_END_DEG,
                zone: GaugeZone::Alert,
            },
        ]
    }

    /// Serialize the gauge as a standalone SVG element.
    ///
    /// Layout mirrors the dashboard cell: half-circle arcs, a rotated
    /// needle with arrowhead, a center pivot, and min/max labels at the
    /// visual extremes. The needle inherits `currentColor`.
    pub fn to_svg(&self) -> String {
        let width = self.width;
        let height = width / 2.0;
        let cx = width / 2.0;
        let cy = height;
        let radius = width / 2.0 - 10.0;

        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<svg width="{width}" height="{h}" viewBox="0 0 {width} {h}" xmlns="http://www.w3.org/2000/svg" style="overflow: visible">"#,
            h = height + 14.0,
        );

        for arc in self.arcs() {
            let color = match arc.zone {
                GaugeZone::Alert => ALERT_COLOR,
                GaugeZone::Normal => NORMAL_COLOR,
            };
            let _ = write!(
                svg,
                r#"<path d="{d}" fill="none" stroke="{color}" stroke-width="{ARC_STROKE_WIDTH}" stroke-linecap="butt"/>"#,
                d = arc_path(cx, cy, radius, arc.start_deg, arc.end_deg),
            );
        }

        // Needle: a line with an arrowhead, rotated about the pivot.
        let _ = write!(
            svg,
            r#"<g transform="rotate({angle:.2}, {cx}, {cy})">"#,
            angle = self.needle_angle_deg,
        );
        let _ = write!(
            svg,
            r#"<line x1="{x1:.2}" y1="{cy}" x2="{x2:.2}" y2="{cy}" stroke="currentColor" stroke-width="2"/>"#,
            x1 = cx - radius - 5.0,
            x2 = cx - radius + 15.0,
        );
        let _ = write!(
            svg,
            r#"<polygon points="{tip:.2},{cy} {base:.2},{up:.2} {base:.2},{down:.2}" fill="currentColor"/>"#,
            tip = cx - radius + 15.0,
            base = cx - radius + 5.0,
            up = cy - 4.0,
            down = cy + 4.0,
        );
        svg.push_str("</g>");
        let _ = write!(svg, r#"<circle cx="{cx}" cy="{cy}" r="4" fill="currentColor"/>"#);

        // Min/max labels at the gauge's visual extremes.
        let _ = write!(
            svg,
            r##"<text x="{x:.2}" y="{y:.2}" font-size="10" fill="#94a3b8" text-anchor="middle">{label}</text>"##,
            x = cx - radius,
            y = cy + 12.0,
            label = format_scale_value(self.min),
        );
        let _ = write!(
            svg,
            r##"<text x="{x:.2}" y="{y:.2}" font-size="10" fill="#94a3b8" text-anchor="middle">{label}</text>"##,
            x = cx + radius,
            y = cy + 12.0,
            label = format_scale_value(self.max),
        );

        svg.push_str("</svg>");
        svg
    }
}

/// SVG arc path between two angles on a circle, sweeping clockwise.
fn arc_path(cx: f64, cy: f64, radius: f64, start_deg: f64, end_deg: f64) -> String {
    let start = start_deg.to_radians();
    let end = end_deg.to_radians();
    let x1 = cx + radius * start.cos();
    let y1 = cy + radius * start.sin();
    let x2 = cx + radius * end.cos();
    let y2 = cy + radius * end.sin();
    format!("M {x1:.2} {y1:.2} A {radius:.2} {radius:.2} 0 0 1 {x2:.2} {y2:.2}")
}

/// Compact numeric label: no trailing ".0", limited precision otherwise.
fn format_scale_value(v: f64) -> String {
    if v == v.trunc() {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}
