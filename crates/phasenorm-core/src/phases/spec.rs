use crate::chem::{AtomicWeights, Compound};
use crate::domain::{NormError, NormResult};
use std::collections::BTreeSet;

/// An ordered list of target compounds plus the set of element
/// symbols excluded from limiting and depletion.
///
/// Order is caller-supplied and semantic: earlier compounds claim
/// their stoichiometric share of shared elements first. Reordering
/// means building a new specification; allocation never observes an
/// in-place mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseSpecification {
    compounds: Vec<Compound>,
    ignored: BTreeSet<String>,
}

impl PhaseSpecification {
    /// Validates and captures a specification.
    ///
    /// Duplicate formula strings are rejected; every ignored symbol
    /// must resolve in the weight table. An empty compound list is
    /// representable here and rejected by the engine at allocation
    /// start.
    pub fn new<I, S>(compounds: Vec<Compound>, ignored: I, weights: &AtomicWeights) -> NormResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = BTreeSet::new();
        for compound in &compounds {
            if !seen.insert(compound.formula().to_string()) {
                return Err(NormError::DuplicateCompound {
                    formula: compound.formula().to_string(),
                });
            }
        }

        let mut ignored_set = BTreeSet::new();
        for symbol in ignored {
            let symbol = symbol.into();
            if !weights.is_element(&symbol) {
                return Err(NormError::unknown_element(symbol));
            }
            ignored_set.insert(symbol);
        }

        Ok(Self {
            compounds,
            ignored: ignored_set,
        })
    }

    /// Parses formula strings in caller order into a specification.
    pub fn from_formulas(
        formulas: &[&str],
        ignored: &[&str],
        weights: &AtomicWeights,
    ) -> NormResult<Self> {
        let compounds = formulas
            .iter()
            .map(|formula| Compound::parse(formula, weights))
            .collect::<NormResult<Vec<_>>>()?;
        Self::new(compounds, ignored.iter().copied(), weights)
    }

    pub fn compounds(&self) -> &[Compound] {
        &self.compounds
    }

    pub fn ignored(&self) -> &BTreeSet<String> {
        &self.ignored
    }

    pub fn is_ignored(&self, symbol: &str) -> bool {
        self.ignored.contains(symbol)
    }
}
