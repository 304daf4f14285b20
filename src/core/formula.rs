//! Processing-time formula evaluation
//!
//! A formula is a `+`-separated list of numeric literals, e.g. `"1.5 + 2 + 0.25"`.
//! Segments that are not numbers are ignored.

/// Evaluate a time formula into a total number of hours.
///
/// Never fails: blank input yields `0.0` and malformed segments contribute nothing.
pub fn evaluate(formula: &str) -> f64 {
    if formula.trim().is_empty() {
        return 0.0;
    }

    formula
        .split('+')
        .filter_map(|part| part.trim().parse::<f64>().ok())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_blank() {
        assert_eq!(evaluate(""), 0.0);
        assert_eq!(evaluate("   "), 0.0);
        assert_eq!(evaluate("\t\n"), 0.0);
    }

    #[test]
    fn test_evaluate_single_value() {
        assert_eq!(evaluate("2.5"), 2.5);
        assert_eq!(evaluate("  3 "), 3.0);
    }

    #[test]
    fn test_evaluate_sum() {
        assert_eq!(evaluate("1+2+3"), 6.0);
        assert_eq!(evaluate("1.5 + 2.5"), 4.0);
        assert_eq!(evaluate("0.25+0.25+0.5"), 1.0);
    }

    #[test]
    fn test_evaluate_skips_malformed_segments() {
        assert_eq!(evaluate("1.5+abc+2.5"), 4.0);
        assert_eq!(evaluate("abc"), 0.0);
        assert_eq!(evaluate("1++2"), 3.0);
        assert_eq!(evaluate("+4+"), 4.0);
        assert_eq!(evaluate("1,5+2"), 2.0);
    }

    #[test]
    fn test_evaluate_signed_literals() {
        // Only `+` separates terms; a leading minus belongs to the literal.
        assert_eq!(evaluate("5+-2"), 3.0);
        assert_eq!(evaluate("5-2"), 0.0);
    }

    #[test]
    fn test_evaluate_matches_sum_of_tokens() {
        let tokens = [0.5, 1.25, 10.0, 3.75];
        let formula = tokens
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" + ");
        assert_eq!(evaluate(&formula), tokens.iter().sum::<f64>());
    }
}
