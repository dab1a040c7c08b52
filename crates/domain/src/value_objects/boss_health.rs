//! Boss health expressions like "8xC" (8 times the party's character count)

/// A parsed boss health expression of the exact shape `<digits> x C`.
///
/// The `x` and `C` letters are case-insensitive and whitespace around the
/// `x` is allowed; nothing else is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BossHealthExpr {
    coefficient: i32,
}

impl BossHealthExpr {
    /// Parse `"10xC"`, `"10 x c"`, etc.
    ///
    /// Returns `None` for any other shape: missing coefficient, wrong
    /// trailing letter, reversed order, or a non-numeric coefficient.
    /// Parsed manually to keep regex out of the domain layer.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let digits_end = input.find(|c: char| !c.is_ascii_digit())?;
        if digits_end == 0 {
            return None;
        }
        let (digits, rest) = input.split_at(digits_end);
        let coefficient: i32 = digits.parse().ok()?;
        let rest = rest.trim_start().strip_prefix(['x', 'X'])?;
        let rest = rest.trim_start().strip_prefix(['c', 'C'])?;
        rest.is_empty().then_some(Self { coefficient })
    }

    pub fn coefficient(&self) -> i32 {
        self.coefficient
    }

    /// Scale the coefficient by party size.
    ///
    /// Party counts of zero or below are floored to 1 so a boss never
    /// enters play with zero health. An absurdly large coefficient
    /// saturates rather than overflowing.
    pub fn evaluate(&self, party_count: i32) -> i32 {
        self.coefficient.saturating_mul(party_count.max(1))
    }
}

/// `"10xC"` with a party of 4 -> 40.
///
/// Falls back to `0` when the expression does not parse; callers treat
/// that as an ordinary "nothing to do" value, not an error.
pub fn compute_boss_health(expr: &str, party_count: i32) -> i32 {
    BossHealthExpr::parse(expr).map_or(0, |e| e.evaluate(party_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_scales_by_party_count() {
        assert_eq!(compute_boss_health("8xC", 4), 32);
        assert_eq!(compute_boss_health("10xC", 6), 60);
        assert_eq!(compute_boss_health("6xC", 3), 18);
    }

    #[test]
    fn test_party_count_floors_at_one() {
        assert_eq!(compute_boss_health("10xC", 0), 10);
        assert_eq!(compute_boss_health("8xC", -5), 8);
        assert_eq!(compute_boss_health("8xC", 1), 8);
    }

    #[test]
    fn test_whitespace_and_case_are_tolerated() {
        assert_eq!(compute_boss_health("10 x C", 4), 40);
        assert_eq!(compute_boss_health("10X c", 4), 40);
        assert_eq!(compute_boss_health("  7xc  ", 2), 14);
    }

    #[test]
    fn test_malformed_expressions_fall_back_to_zero() {
        assert_eq!(compute_boss_health("invalid", 4), 0);
        assert_eq!(compute_boss_health("10", 4), 0); // missing xC
        assert_eq!(compute_boss_health("", 4), 0);
        assert_eq!(compute_boss_health("xC", 4), 0); // missing coefficient
        assert_eq!(compute_boss_health("10xD", 4), 0); // wrong trailing letter
        assert_eq!(compute_boss_health("Cx10", 4), 0); // reversed
        assert_eq!(compute_boss_health("10xCC", 4), 0); // trailing junk
        assert_eq!(compute_boss_health("3.5xC", 4), 0); // non-integer coefficient
    }

    #[test]
    fn test_huge_coefficient_saturates() {
        assert_eq!(compute_boss_health("2000000000xC", 4), i32::MAX);
        assert_eq!(compute_boss_health("2000000000xC", 1), 2_000_000_000);
        // Coefficients past i32 range never parse at all.
        assert_eq!(compute_boss_health("9999999999xC", 4), 0);
    }

    #[test]
    fn test_parse_exposes_coefficient() {
        let expr = BossHealthExpr::parse("12xC").expect("valid expression");
        assert_eq!(expr.coefficient(), 12);
        assert_eq!(expr.evaluate(5), 60);
    }
}
