pub type NormResult<T> = Result<T, NormError>;

/// Error taxonomy for table import, specification building, and
/// allocation. Every variant is raised at construction time or at the
/// start of an allocation run; a caller never observes a partially
/// computed result row.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NormError {
    #[error("unknown element symbol '{symbol}'")]
    UnknownElement { symbol: String },

    #[error("invalid formula '{formula}': {reason}")]
    InvalidFormula { formula: String, reason: String },

    #[error("sample '{sample}', column '{column}': cannot parse '{value}' as a number")]
    MalformedValue {
        sample: String,
        column: String,
        value: String,
    },

    #[error("phase specification contains no compounds")]
    EmptySpecification,

    #[error("duplicate compound '{formula}' in phase specification")]
    DuplicateCompound { formula: String },

    #[error("compound '{formula}' references element '{symbol}' absent from the weight table")]
    UnresolvedCompound { formula: String, symbol: String },

    #[error("column '{column}' not present in the imported table")]
    MissingColumn { column: String },
}

impl NormError {
    pub fn unknown_element(symbol: impl Into<String>) -> Self {
        Self::UnknownElement {
            symbol: symbol.into(),
        }
    }

    pub fn invalid_formula(formula: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormula {
            formula: formula.into(),
            reason: reason.into(),
        }
    }

    /// True for errors a shell should present as bad user input rather
    /// than an internal failure.
    pub const fn is_input_error(&self) -> bool {
        !matches!(self, Self::UnresolvedCompound { .. })
    }
}
