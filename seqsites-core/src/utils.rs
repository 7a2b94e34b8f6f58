/// Number of decimal digits needed to write `n`.
pub fn decimal_width(n: u32) -> usize {
    n.to_string().len()
}

/// Number of unordered pairs of distinct states among `n`.
pub fn number_of_pairs(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// `ln(n!)`, summed term by term so that large counts do not overflow.
pub fn ln_factorial(n: usize) -> f64 {
    (2..=n).map(|i| (i as f64).ln()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(1, 1)]
    #[case(9, 1)]
    #[case(10, 2)]
    #[case(120, 3)]
    fn test_decimal_width(#[case] n: u32, #[case] width: usize) {
        assert_eq!(decimal_width(n), width);
    }

    #[rstest]
    fn test_number_of_pairs() {
        assert_eq!(number_of_pairs(0), 0);
        assert_eq!(number_of_pairs(1), 0);
        assert_eq!(number_of_pairs(4), 6);
        assert_eq!(number_of_pairs(20), 190);
    }

    #[rstest]
    fn test_ln_factorial() {
        assert_eq!(ln_factorial(0), 0.0);
        assert_eq!(ln_factorial(1), 0.0);
        assert!((ln_factorial(5) - 120f64.ln()).abs() < 1e-12);
    }
}
