//! Normative phase calculation for elemental mass-fraction analyses.
//!
//! Converts per-sample element mass fractions (SEM/EDS style tables)
//! into mass fractions of an ordered list of target compounds via
//! sequential greedy limiting-reagent apportionment.

pub mod chem;
pub mod domain;
pub mod phases;
pub mod table;

pub use chem::{AtomicWeights, Compound};
pub use domain::{NormError, NormResult};
pub use phases::{PhaseSpecification, PhasedResult, PhasedRow, allocate_row, allocate_table};
pub use table::{AnalysisRow, ElementalAnalysisTable, RawTable};
