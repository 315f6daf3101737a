use super::result::{PhasedResult, PhasedRow};
use super::spec::PhaseSpecification;
use crate::chem::{AtomicWeights, Compound};
use crate::domain::{NormError, NormResult};
use crate::table::{AnalysisRow, ElementalAnalysisTable};
use std::collections::BTreeMap;

/// Apportions one sample's elemental mass budget across the ordered
/// compound list.
///
/// Sequential greedy pass: each compound forms as many moles as its
/// scarcest non-ignored constituent allows, consumes that mass from
/// the shared pool, and later compounds see the depleted pool. Ignored
/// elements never limit formation and are never depleted. Whatever the
/// pass leaves unclaimed, including the full mass of ignored elements,
/// is the residual, so allocations plus residual always equal the
/// row's total input mass.
pub fn allocate_row(
    row: &AnalysisRow,
    spec: &PhaseSpecification,
    weights: &AtomicWeights,
) -> NormResult<PhasedRow> {
    validate_spec(spec, weights)?;
    Ok(allocate_checked(row, spec, weights))
}

/// Runs the engine over every row of a table with one specification.
pub fn allocate_table(
    table: &ElementalAnalysisTable,
    spec: &PhaseSpecification,
    weights: &AtomicWeights,
) -> NormResult<PhasedResult> {
    validate_spec(spec, weights)?;

    let compounds = spec
        .compounds()
        .iter()
        .map(|compound| compound.formula().to_string())
        .collect();
    let rows = table
        .rows()
        .iter()
        .map(|row| allocate_checked(row, spec, weights))
        .collect();

    Ok(PhasedResult::new(compounds, rows))
}

/// Rejects invalid specifications before any row is touched: an empty
/// compound list, or a compound whose element no longer resolves in
/// the injected weight table. The latter is normally impossible after
/// `Compound::parse`, but the table is caller-supplied and re-checked
/// here.
fn validate_spec(spec: &PhaseSpecification, weights: &AtomicWeights) -> NormResult<()> {
    if spec.compounds().is_empty() {
        return Err(NormError::EmptySpecification);
    }

    for compound in spec.compounds() {
        for symbol in compound.composition().keys() {
            if !weights.is_element(symbol) {
                return Err(NormError::UnresolvedCompound {
                    formula: compound.formula().to_string(),
                    symbol: symbol.clone(),
                });
            }
        }
    }

    Ok(())
}

fn allocate_checked(
    row: &AnalysisRow,
    spec: &PhaseSpecification,
    weights: &AtomicWeights,
) -> PhasedRow {
    let mut remaining: BTreeMap<String, f64> = row.fractions().clone();
    let mut allocations = Vec::with_capacity(spec.compounds().len());

    for compound in spec.compounds() {
        let moles = achievable_moles(compound, spec, weights, &remaining);
        let allocated = moles * compound.molar_mass();

        if moles > 0.0 {
            for (symbol, count) in compound.composition() {
                if spec.is_ignored(symbol) {
                    continue;
                }
                // weight_of cannot fail here, validate_spec resolved
                // every compound element already.
                let weight = weights.weight_of(symbol).unwrap_or(0.0);
                let entry = remaining.entry(symbol.clone()).or_insert(0.0);
                *entry = (*entry - moles * f64::from(*count) * weight).max(0.0);
            }
        }

        allocations.push(allocated);
    }

    // Ignored elements were never depleted, so summing the whole pool
    // covers both the non-ignored leftovers and the ignored mass.
    let residual: f64 = remaining.values().sum();

    PhasedRow::new(row.sample(), allocations, residual)
}

/// Limiting-reagent rule over the compound's non-ignored elements: the
/// scarcest constituent caps the mole count. A compound whose every
/// element is ignored forms zero moles; nothing meaningfully limits
/// it, so it cannot anchor a phase.
fn achievable_moles(
    compound: &Compound,
    spec: &PhaseSpecification,
    weights: &AtomicWeights,
    remaining: &BTreeMap<String, f64>,
) -> f64 {
    let mut moles: Option<f64> = None;

    for (symbol, count) in compound.composition() {
        if spec.is_ignored(symbol) {
            continue;
        }

        let available = remaining.get(symbol).copied().unwrap_or(0.0);
        let weight = weights.weight_of(symbol).unwrap_or(0.0);
        let from_element = if available > 0.0 && weight > 0.0 {
            available / (f64::from(*count) * weight)
        } else {
            0.0
        };

        moles = Some(match moles {
            Some(current) => current.min(from_element),
            None => from_element,
        });
    }

    moles.unwrap_or(0.0)
}
