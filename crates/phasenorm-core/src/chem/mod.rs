mod compound;
mod formula;
mod periodic;

pub use compound::Compound;
pub use formula::tokenize_formula;
pub use periodic::AtomicWeights;
