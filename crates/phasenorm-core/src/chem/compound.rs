use super::formula::tokenize_formula;
use super::periodic::AtomicWeights;
use crate::domain::NormResult;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// A parsed compound: formula text, element multiplicities, and the
/// derived molar mass.
///
/// Identity is the formula string as written. Two chemically
/// equivalent spellings ("FeO2" vs "O2Fe") are distinct compounds; the
/// engine never normalizes formula equivalence.
#[derive(Debug, Clone)]
pub struct Compound {
    formula: String,
    composition: BTreeMap<String, u32>,
    molar_mass: f64,
}

impl Compound {
    /// Parses a flat formula and resolves every symbol against the
    /// weight table. The molar mass is computed here, once.
    pub fn parse(text: &str, weights: &AtomicWeights) -> NormResult<Self> {
        let tokens = tokenize_formula(text)?;

        let mut composition: BTreeMap<String, u32> = BTreeMap::new();
        let mut molar_mass = 0.0_f64;
        for (symbol, count) in tokens {
            let weight = weights.weight_of(&symbol)?;
            molar_mass += f64::from(count) * weight;
            *composition.entry(symbol).or_insert(0) += count;
        }

        Ok(Self {
            formula: text.trim().to_string(),
            composition,
            molar_mass,
        })
    }

    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// Element symbol to stoichiometric count; counts are never zero.
    pub fn composition(&self) -> &BTreeMap<String, u32> {
        &self.composition
    }

    pub fn molar_mass(&self) -> f64 {
        self.molar_mass
    }
}

impl PartialEq for Compound {
    fn eq(&self, other: &Self) -> bool {
        self.formula == other.formula
    }
}

impl Eq for Compound {}

impl Hash for Compound {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.formula.hash(state);
    }
}

impl PartialOrd for Compound {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Compound {
    fn cmp(&self, other: &Self) -> Ordering {
        self.formula.cmp(&other.formula)
    }
}

impl Display for Compound {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formula)
    }
}
