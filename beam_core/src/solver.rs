//! # Statics Solver
//!
//! Reactions, shear and bending moment for a simply supported beam under
//! point loads. Everything here is a pure function of its arguments.
//!
//! ## Method
//!
//! Two unknown reactions, two equilibrium equations:
//!
//! ```text
//! ΣFy = 0:   R_left + R_right = Σ P_i
//! ΣM_0 = 0:  R_right · L      = Σ P_i · a_i
//! ```
//!
//! Along the span:
//!
//! ```text
//! V(x) = R_left     - Σ_{a_i <= x} P_i
//! M(x) = R_left · x - Σ_{a_i <= x} P_i · (x - a_i)
//! ```
//!
//! ## Sign Convention
//! - Loads positive downward, reactions positive upward
//! - Positive shear: left side up, right side down
//! - Positive moment: sagging (tension on bottom fiber)
//!
//! ## Example
//! ```rust
//! use beam_core::beam::{Beam, PointLoad};
//! use beam_core::solver::{compute_diagrams, compute_reactions};
//!
//! let beam = Beam::new(10.0);
//! let loads = [PointLoad::new(2.0, 60.0)];
//!
//! let reactions = compute_reactions(&beam, &loads).unwrap();
//! assert!((reactions.left - 48.0).abs() < 1e-9);
//! assert!((reactions.right - 12.0).abs() < 1e-9);
//!
//! let (shear, moment) = compute_diagrams(&beam, &loads, &reactions, 11).unwrap();
//! assert_eq!(shear.len(), 11);
//! assert!((moment.points()[2].value - 96.0).abs() < 1e-9);
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::beam::{merge_coincident_loads, total_load, validate_problem, Beam, BeamProblem, PointLoad};
use crate::diagrams::{DiagramPoint, DiagramSample, DiagramSummary};
use crate::errors::{CalcError, CalcResult};
use crate::settings::{validate_sample_count, DEFAULT_TOLERANCE};

/// Support reactions, positive upward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReactionPair {
    /// Reaction at the left support (x = 0)
    pub left: f64,
    /// Reaction at the right support (x = length)
    pub right: f64,
}

impl ReactionPair {
    /// Sum of both reactions
    pub fn total(&self) -> f64 {
        self.left + self.right
    }

    /// Force equilibrium check against the applied loads, relative to `tolerance`
    pub fn balances(&self, loads: &[PointLoad], tolerance: f64) -> bool {
        let applied = total_load(loads);
        let scale = loads
            .iter()
            .map(|load| load.magnitude_kn.abs())
            .sum::<f64>()
            .max(1.0);
        (self.total() - applied).abs() <= tolerance * scale
    }
}

/// Solve the two support reactions.
///
/// Fails with [`CalcError::InvalidInput`] when the span is not positive or a
/// load lies outside `[0, length]`.
pub fn compute_reactions(beam: &Beam, loads: &[PointLoad]) -> CalcResult<ReactionPair> {
    validate_problem(beam, loads)?;

    // Σ P·(a/L) rather than Σ P·a / L keeps every term bounded by |P|
    let right: f64 = loads
        .iter()
        .map(|load| load.right_support_share(beam.length_m))
        .sum();
    let left = total_load(loads) - right;

    debug!(
        "reactions for L={} with {} load(s): left={}, right={}",
        beam.length_m,
        loads.len(),
        left,
        right
    );

    Ok(ReactionPair { left, right })
}

/// Sample shear and moment at `sample_count` evenly spaced positions.
///
/// `reactions` must come from [`compute_reactions`] for the same beam and
/// loads; they are not re-derived. Loads sharing a position are summed before
/// being applied. Both diagrams use the grid from [`sample_positions`].
pub fn compute_diagrams(
    beam: &Beam,
    loads: &[PointLoad],
    reactions: &ReactionPair,
    sample_count: usize,
) -> CalcResult<(DiagramSample, DiagramSample)> {
    sample_diagrams(beam, loads, reactions, sample_count, DEFAULT_TOLERANCE)
}

fn sample_diagrams(
    beam: &Beam,
    loads: &[PointLoad],
    reactions: &ReactionPair,
    sample_count: usize,
    tolerance: f64,
) -> CalcResult<(DiagramSample, DiagramSample)> {
    validate_problem(beam, loads)?;
    validate_sample_count(sample_count)?;

    let merged = merge_coincident_loads(loads);
    let positions = sample_positions(beam.length_m, sample_count);

    let shear: DiagramSample = positions
        .iter()
        .map(|&x| DiagramPoint::new(x, shear_at(x, &merged, reactions)))
        .collect();
    let moment: DiagramSample = positions
        .iter()
        .map(|&x| DiagramPoint::new(x, moment_at(x, &merged, reactions)))
        .collect();

    check_moment_closure(beam, &merged, &moment, tolerance);

    Ok((shear, moment))
}

/// Evenly spaced positions from 0 to `length`, both ends exact.
///
/// A single sample is the left support, `[0.0]`. Zero samples give an empty grid.
pub fn sample_positions(length: f64, sample_count: usize) -> Vec<f64> {
    let last = sample_count.saturating_sub(1);
    (0..sample_count)
        .map(|i| {
            if i == 0 {
                0.0
            } else if i == last {
                length
            } else {
                length * i as f64 / last as f64
            }
        })
        .collect()
}

/// Shear at `x`. A load at exactly `x` has already been applied.
pub fn shear_at(x: f64, loads: &[PointLoad], reactions: &ReactionPair) -> f64 {
    let applied: f64 = loads
        .iter()
        .filter(|load| load.position_m <= x)
        .map(|load| load.magnitude_kn)
        .sum();
    reactions.left - applied
}

/// Bending moment at `x`
pub fn moment_at(x: f64, loads: &[PointLoad], reactions: &ReactionPair) -> f64 {
    let applied: f64 = loads
        .iter()
        .filter(|load| load.position_m <= x)
        .map(|load| load.magnitude_kn * (x - load.position_m))
        .sum();
    reactions.left * x - applied
}

// A simply supported beam with only transverse loads has zero moment at the
// right support. Anything else means the reactions were wrong.
fn check_moment_closure(beam: &Beam, loads: &[PointLoad], moment: &DiagramSample, tolerance: f64) {
    let Some(end) = moment.last() else {
        return;
    };

    let scale = loads
        .iter()
        .map(|load| load.magnitude_kn.abs())
        .sum::<f64>()
        .max(1.0)
        * beam.length_m.max(1.0);

    if end.value.abs() > tolerance * scale {
        warn!(
            "moment at right support is {} (expected 0 within {}); reactions do not match the loads",
            end.value,
            tolerance * scale
        );
    }
}

/// Everything a front end needs to report one solved problem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamAnalysis {
    /// Label copied from the problem
    pub label: String,
    /// Span that was solved
    pub beam: Beam,
    /// Support reactions
    pub reactions: ReactionPair,
    /// Sampled shear force
    pub shear: DiagramSample,
    /// Sampled bending moment
    pub moment: DiagramSample,
    /// Extreme values of both diagrams
    pub summary: DiagramSummary,
}

/// Solve a complete problem using its own settings.
///
/// Runs [`compute_reactions`] once and samples both diagrams from the result.
pub fn analyze(problem: &BeamProblem) -> CalcResult<BeamAnalysis> {
    problem.validate()?;

    let reactions = compute_reactions(&problem.beam, &problem.loads)?;
    if !reactions.balances(&problem.loads, problem.settings.tolerance) {
        warn!(
            "reactions {} + {} do not balance applied load {}",
            reactions.left,
            reactions.right,
            total_load(&problem.loads)
        );
    }

    let (shear, moment) = sample_diagrams(
        &problem.beam,
        &problem.loads,
        &reactions,
        problem.settings.sample_count,
        problem.settings.tolerance,
    )?;

    let summary = DiagramSummary::from_diagrams(&shear, &moment).ok_or_else(|| {
        CalcError::invalid_input(
            "settings.sample_count",
            problem.settings.sample_count.to_string(),
            "No samples were produced",
        )
    })?;

    Ok(BeamAnalysis {
        label: problem.label.clone(),
        beam: problem.beam,
        reactions,
        shear,
        moment,
        summary,
    })
}
