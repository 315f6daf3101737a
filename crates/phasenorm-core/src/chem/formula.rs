use crate::domain::{NormError, NormResult};

/// Splits a flat formula string into (symbol, count) tokens.
///
/// Grammar: a sequence of element symbols, each one uppercase letter
/// optionally followed by one lowercase letter, each optionally
/// followed by a positive integer count (absent count means 1).
/// Parenthesized groups and hydrate dots are rejected.
pub fn tokenize_formula(text: &str) -> NormResult<Vec<(String, u32)>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(NormError::invalid_formula(text, "formula is empty"));
    }

    let mut tokens = Vec::new();
    let mut chars = trimmed.chars().peekable();

    while let Some(first) = chars.next() {
        if !first.is_ascii_uppercase() {
            return Err(NormError::invalid_formula(
                trimmed,
                format!("expected an element symbol, found '{first}'"),
            ));
        }

        let mut symbol = String::from(first);
        if let Some(second) = chars.peek().copied()
            && second.is_ascii_lowercase()
        {
            symbol.push(second);
            chars.next();
        }

        let mut digits = String::new();
        while let Some(digit) = chars.peek().copied() {
            if digit.is_ascii_digit() {
                digits.push(digit);
                chars.next();
            } else {
                break;
            }
        }

        let count = if digits.is_empty() {
            1
        } else {
            digits.parse::<u32>().map_err(|_| {
                NormError::invalid_formula(
                    trimmed,
                    format!("count '{digits}' for '{symbol}' is out of range"),
                )
            })?
        };

        if count == 0 {
            return Err(NormError::invalid_formula(
                trimmed,
                format!("zero count for '{symbol}'"),
            ));
        }

        tokens.push((symbol, count));
    }

    if tokens.is_empty() {
        return Err(NormError::invalid_formula(trimmed, "formula has no atoms"));
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::tokenize_formula;
    use crate::domain::NormError;

    fn owned(tokens: &[(&str, u32)]) -> Vec<(String, u32)> {
        tokens
            .iter()
            .map(|(symbol, count)| (symbol.to_string(), *count))
            .collect()
    }

    #[test]
    fn plain_oxide_formulas_tokenize() {
        assert_eq!(
            tokenize_formula("Al2O3").unwrap(),
            owned(&[("Al", 2), ("O", 3)])
        );
        assert_eq!(tokenize_formula("CaO").unwrap(), owned(&[("Ca", 1), ("O", 1)]));
        assert_eq!(tokenize_formula("S").unwrap(), owned(&[("S", 1)]));
    }

    #[test]
    fn counts_default_to_one_and_may_repeat_symbols() {
        assert_eq!(
            tokenize_formula("CH3COOH").unwrap(),
            owned(&[("C", 1), ("H", 3), ("C", 1), ("O", 1), ("O", 1), ("H", 1)])
        );
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert_eq!(
            tokenize_formula(" K2O ").unwrap(),
            owned(&[("K", 2), ("O", 1)])
        );
    }

    #[test]
    fn empty_text_is_rejected() {
        assert!(matches!(
            tokenize_formula(""),
            Err(NormError::InvalidFormula { .. })
        ));
        assert!(matches!(
            tokenize_formula("   "),
            Err(NormError::InvalidFormula { .. })
        ));
    }

    #[test]
    fn unexpected_tokens_are_rejected() {
        for bad in ["Ca(OH)2", "aO", "2O", "Ca-O", "CaO·H2O"] {
            assert!(
                matches!(tokenize_formula(bad), Err(NormError::InvalidFormula { .. })),
                "'{bad}' should be rejected"
            );
        }
    }

    #[test]
    fn explicit_zero_count_is_rejected() {
        assert!(matches!(
            tokenize_formula("Al0"),
            Err(NormError::InvalidFormula { .. })
        ));
    }
}
