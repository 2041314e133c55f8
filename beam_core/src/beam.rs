//! # Beam and Load Definitions
//!
//! Value types describing one statics problem: the span, the point loads on
//! it, and a serializable [`BeamProblem`] bundling both for front ends.
//!
//! Supports sit at `x = 0` (left) and `x = length_m` (right). Positions are
//! measured from the left support. Positive load magnitudes act downward.
//!
//! ## JSON Format
//!
//! ```json
//! {
//!   "label": "B-1",
//!   "beam": { "length_m": 10.0 },
//!   "loads": [
//!     { "position_m": 2.0, "magnitude_kn": 60.0 },
//!     { "position_m": 5.0, "magnitude_kn": 100.0 }
//!   ],
//!   "settings": { "sample_count": 201 }
//! }
//! ```
//!
//! The unit suffixes name what a front end displays. No conversion happens
//! anywhere in the solver, so any consistent unit system gives correct results.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::settings::SolverSettings;

/// A simply supported span
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    /// Distance between the two supports
    pub length_m: f64,
}

impl Beam {
    /// Create a beam. Validation happens when the beam is solved.
    pub fn new(length_m: f64) -> Self {
        Beam { length_m }
    }

    /// Check that the span is positive and finite
    pub fn validate(&self) -> CalcResult<()> {
        // Written so NaN fails too
        if !(self.length_m > 0.0) || !self.length_m.is_finite() {
            return Err(CalcError::invalid_input(
                "length_m",
                self.length_m.to_string(),
                "Beam length must be a positive, finite number",
            ));
        }
        Ok(())
    }

    /// True when `position_m` lies on the span, supports included
    pub fn contains(&self, position_m: f64) -> bool {
        (0.0..=self.length_m).contains(&position_m)
    }
}

/// A concentrated force at a single position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Distance from the left support
    pub position_m: f64,
    /// Force, positive downward
    pub magnitude_kn: f64,
}

impl PointLoad {
    /// Create a point load
    pub fn new(position_m: f64, magnitude_kn: f64) -> Self {
        PointLoad {
            position_m,
            magnitude_kn,
        }
    }

    /// Share of this load carried by the right support.
    ///
    /// The lever ratio `position / length` lies in `[0, 1]`, so the result
    /// never exceeds the load itself even when `P * a` would overflow.
    pub fn right_support_share(&self, length_m: f64) -> f64 {
        self.magnitude_kn * (self.position_m / length_m)
    }
}

/// Validate a beam together with the loads placed on it.
///
/// Fails on the first problem found, reporting the load index in the field
/// name (e.g. `loads[1].position_m`).
pub fn validate_problem(beam: &Beam, loads: &[PointLoad]) -> CalcResult<()> {
    beam.validate()?;

    for (i, load) in loads.iter().enumerate() {
        if !beam.contains(load.position_m) {
            return Err(CalcError::invalid_input(
                format!("loads[{}].position_m", i),
                load.position_m.to_string(),
                format!("Load position must be within [0, {}]", beam.length_m),
            ));
        }
        if !load.magnitude_kn.is_finite() {
            return Err(CalcError::invalid_input(
                format!("loads[{}].magnitude_kn", i),
                load.magnitude_kn.to_string(),
                "Load magnitude must be a finite number",
            ));
        }
    }

    Ok(())
}

/// Sum of all load magnitudes
pub fn total_load(loads: &[PointLoad]) -> f64 {
    loads.iter().map(|load| load.magnitude_kn).sum()
}

/// Collapse loads that share an exact position into one load.
///
/// Magnitudes are summed algebraically. Output keeps the order in which each
/// position first appears.
pub fn merge_coincident_loads(loads: &[PointLoad]) -> Vec<PointLoad> {
    let mut merged: Vec<PointLoad> = Vec::with_capacity(loads.len());

    for load in loads {
        match merged.iter_mut().find(|m| m.position_m == load.position_m) {
            Some(existing) => existing.magnitude_kn += load.magnitude_kn,
            None => merged.push(*load),
        }
    }

    merged
}

/// One complete solver input as collected by a front end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamProblem {
    /// User-provided label
    #[serde(default)]
    pub label: String,

    /// The span
    pub beam: Beam,

    /// Point loads in input order
    #[serde(default)]
    pub loads: Vec<PointLoad>,

    /// Solver configuration
    #[serde(default)]
    pub settings: SolverSettings,
}

impl BeamProblem {
    /// Create an unloaded problem with default settings
    pub fn new(label: impl Into<String>, length_m: f64) -> Self {
        BeamProblem {
            label: label.into(),
            beam: Beam::new(length_m),
            loads: Vec::new(),
            settings: SolverSettings::default(),
        }
    }

    /// Add a point load and return self (builder pattern)
    pub fn with_load(mut self, position_m: f64, magnitude_kn: f64) -> Self {
        self.loads.push(PointLoad::new(position_m, magnitude_kn));
        self
    }

    /// Replace the settings and return self (builder pattern)
    pub fn with_settings(mut self, settings: SolverSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Validate beam, loads and settings
    pub fn validate(&self) -> CalcResult<()> {
        validate_problem(&self.beam, &self.loads)?;
        self.settings.validate()
    }
}
