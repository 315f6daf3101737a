use crate::domain::{NormError, NormResult};
use std::collections::BTreeMap;

// Standard atomic weights, elements 1 through 118, indexed parallel to
// ATOMIC_SYMBOLS.
const ATOMIC_WEIGHTS: [f64; 118] = [
    1.008, 4.0026, 6.94, 9.0122, 10.81, 12.011, 14.007, 15.999, 18.998, 20.180, // 1-10
    22.990, 24.305, 26.982, 28.085, 30.974, 32.06, 35.45, 39.948, 39.098, 40.078, // 11-20
    44.956, 47.867, 50.942, 51.996, 54.938, 55.845, 58.933, 58.693, 63.546, 65.38, // 21-30
    69.723, 72.630, 74.922, 78.971, 79.904, 83.798, 85.468, 87.62, 88.906, 91.224, // 31-40
    92.906, 95.95, 97.0, 101.07, 102.91, 106.42, 107.87, 112.41, 114.82, 118.71, // 41-50
    121.76, 127.60, 126.90, 131.29, 132.91, 137.33, 138.91, 140.12, 140.91, 144.24, // 51-60
    145.0, 150.36, 151.96, 157.25, 158.93, 162.50, 164.93, 167.26, 168.93, 173.05, // 61-70
    174.97, 178.49, 180.95, 183.84, 186.21, 190.23, 192.22, 195.08, 196.97, 200.59, // 71-80
    204.38, 207.2, 208.98, 209.0, 210.0, 222.0, 223.0, 226.0, 227.0, 232.04, // 81-90
    231.04, 238.03, 237.0, 244.0, 243.0, 247.0, 247.0, 251.0, 252.0, 257.0, // 91-100
    258.0, 259.0, 262.0, 267.0, 270.0, 269.0, 270.0, 270.0, 278.0, 281.0, // 101-110
    281.0, 285.0, 286.0, 289.0, 289.0, 293.0, 293.0, 294.0, // 111-118
];

const ATOMIC_SYMBOLS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn",
    "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Read-only element-symbol to atomic-weight lookup (g/mol).
///
/// Constructed once and passed to the components that need it, so the
/// engine stays testable against synthetic weight tables.
#[derive(Debug, Clone)]
pub struct AtomicWeights {
    weights: BTreeMap<String, f64>,
}

impl AtomicWeights {
    /// The reference periodic table.
    pub fn reference() -> Self {
        let weights = ATOMIC_SYMBOLS
            .iter()
            .zip(ATOMIC_WEIGHTS.iter())
            .map(|(symbol, weight)| (symbol.to_string(), *weight))
            .collect();
        Self { weights }
    }

    /// Synthetic table from explicit symbol/weight pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let weights = pairs
            .into_iter()
            .map(|(symbol, weight)| (symbol.into(), weight))
            .collect();
        Self { weights }
    }

    pub fn weight_of(&self, symbol: &str) -> NormResult<f64> {
        self.weights
            .get(symbol)
            .copied()
            .ok_or_else(|| NormError::unknown_element(symbol))
    }

    pub fn is_element(&self, symbol: &str) -> bool {
        self.weights.contains_key(symbol)
    }

    /// Symbols in lexicographic order.
    pub fn symbols(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights
            .iter()
            .map(|(symbol, weight)| (symbol.as_str(), *weight))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
