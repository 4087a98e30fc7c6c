//! Floating-point tolerance shared by every approximate comparison.

/// Two floats closer than this are considered equal (five decimal places).
pub const EPSILON: f32 = 0.00001;

/// Are `a` and `b` approximately equal?
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_within_epsilon_are_equal() {
        assert!(approx_eq(1.0, 1.000_001));
        assert!(approx_eq(-3.5, -3.500_009));
    }

    #[test]
    fn values_at_or_beyond_epsilon_differ() {
        assert!(!approx_eq(1.0, 1.0001));
        assert!(!approx_eq(0.0, 0.00002));
    }
}
