mod errors;

pub use errors::{NormError, NormResult};
