//! # Diagram Samples
//!
//! Sampled shear and moment diagrams as ordered `(x, value)` points, plus the
//! extreme values a front end usually reports next to the plot.
//!
//! ```rust
//! use beam_core::diagrams::{DiagramPoint, DiagramSample};
//!
//! let moment = DiagramSample::new(vec![
//!     DiagramPoint::new(0.0, 0.0),
//!     DiagramPoint::new(5.0, 250.0),
//!     DiagramPoint::new(10.0, 0.0),
//! ]);
//!
//! let peak = moment.max().unwrap();
//! assert_eq!(peak.x, 5.0);
//! ```

use serde::{Deserialize, Serialize};

/// One sampled value at position `x`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramPoint {
    /// Distance from the left support
    pub x: f64,
    /// Shear or moment at `x`
    pub value: f64,
}

impl DiagramPoint {
    /// Create a point
    pub fn new(x: f64, value: f64) -> Self {
        DiagramPoint { x, value }
    }
}

impl From<(f64, f64)> for DiagramPoint {
    fn from((x, value): (f64, f64)) -> Self {
        DiagramPoint { x, value }
    }
}

/// Ordered samples of one diagram, `x` ascending from 0 to the span length
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiagramSample {
    points: Vec<DiagramPoint>,
}

impl DiagramSample {
    /// Wrap points already ordered by ascending `x`
    pub fn new(points: Vec<DiagramPoint>) -> Self {
        DiagramSample { points }
    }

    /// All samples, in order
    pub fn points(&self) -> &[DiagramPoint] {
        &self.points
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when nothing was sampled
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sample positions, in order
    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.x)
    }

    /// Sample values, in order
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    /// Sample at the left support
    pub fn first(&self) -> Option<DiagramPoint> {
        self.points.first().copied()
    }

    /// Sample at the right support
    pub fn last(&self) -> Option<DiagramPoint> {
        self.points.last().copied()
    }

    /// Largest signed value. Ties keep the leftmost point.
    pub fn max(&self) -> Option<DiagramPoint> {
        self.pick(|candidate, best| candidate.value > best.value)
    }

    /// Smallest signed value. Ties keep the leftmost point.
    pub fn min(&self) -> Option<DiagramPoint> {
        self.pick(|candidate, best| candidate.value < best.value)
    }

    /// Largest magnitude, returned with its sign. Ties keep the leftmost point.
    pub fn max_abs(&self) -> Option<DiagramPoint> {
        self.pick(|candidate, best| candidate.value.abs() > best.value.abs())
    }

    /// Copy the samples out as plain tuples for plotting libraries
    pub fn to_pairs(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.x, p.value)).collect()
    }

    fn pick(&self, better: impl Fn(&DiagramPoint, &DiagramPoint) -> bool) -> Option<DiagramPoint> {
        let mut iter = self.points.iter();
        let mut best = *iter.next()?;
        for point in iter {
            if better(point, &best) {
                best = *point;
            }
        }
        Some(best)
    }
}

impl FromIterator<DiagramPoint> for DiagramSample {
    fn from_iter<I: IntoIterator<Item = DiagramPoint>>(iter: I) -> Self {
        DiagramSample {
            points: iter.into_iter().collect(),
        }
    }
}

/// Extreme values read off a pair of sampled diagrams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramSummary {
    /// Shear of largest magnitude (signed) and where it occurs
    pub max_shear: DiagramPoint,
    /// Largest (sagging) moment and where it occurs
    pub max_moment: DiagramPoint,
    /// Smallest moment and where it occurs. Negative only under upward loads.
    pub min_moment: DiagramPoint,
}

impl DiagramSummary {
    /// Summarize two diagrams. `None` if either is empty.
    pub fn from_diagrams(shear: &DiagramSample, moment: &DiagramSample) -> Option<Self> {
        Some(DiagramSummary {
            max_shear: shear.max_abs()?,
            max_moment: moment.max()?,
            min_moment: moment.min()?,
        })
    }
}
