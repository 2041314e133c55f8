//! # beam_core - Simply Supported Beam Statics
//!
//! `beam_core` computes support reactions and sampled shear-force and
//! bending-moment diagrams for a simply supported beam carrying point loads.
//! Inputs and outputs are plain value types that serialize to JSON, so any
//! front end (CLI, GUI, web service) can drive it.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Fail Fast**: Invalid input is rejected with a structured error
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::{analyze, BeamProblem};
//!
//! let problem = BeamProblem::new("B-1", 10.0).with_load(5.0, 100.0);
//! let analysis = analyze(&problem).unwrap();
//!
//! assert!((analysis.reactions.left - 50.0).abs() < 1e-9);
//! assert!((analysis.summary.max_moment.value - 250.0).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`beam`] - Beam, point loads and the problem container
//! - [`solver`] - Reactions, shear and moment
//! - [`diagrams`] - Sampled diagrams and their extremes
//! - [`settings`] - Sample count and tolerance
//! - [`errors`] - Structured error types

pub mod beam;
pub mod diagrams;
pub mod errors;
pub mod settings;
pub mod solver;

// Re-export commonly used types at crate root for convenience
pub use beam::{Beam, BeamProblem, PointLoad};
pub use diagrams::{DiagramPoint, DiagramSample, DiagramSummary};
pub use errors::{CalcError, CalcResult};
pub use settings::SolverSettings;
pub use solver::{analyze, compute_diagrams, compute_reactions, BeamAnalysis, ReactionPair};
