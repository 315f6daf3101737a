mod allocate;
mod result;
mod spec;

pub use allocate::{allocate_row, allocate_table};
pub use result::{PhasedResult, PhasedRow};
pub use spec::PhaseSpecification;
