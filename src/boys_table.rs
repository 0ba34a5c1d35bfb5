//! Precomputed Boys-function tables F_0(T)..F_L(T), the external input the
//! Coulomb-R evaluator consumes.
//!
//! Only the top order is evaluated directly; the rest follow from the
//! downward recursion (upward recursion is numerically unstable):
//!
//!   F_n(x) = (2x F_{n+1}(x) + exp(-x)) / (2n + 1)
//!
//! See Helgaker, Jorgensen, Olsen, 2000, p. 367.

use boys::micb25::boys;

/// F_0(T)..F_{max_order}(T) via top-order evaluation plus downward recursion.
pub fn boys_table(max_order: i32, boys_inp: f64) -> Vec<f64> {
    assert!(max_order >= 0, "Boys order must be non-negative");
    assert!(boys_inp >= 0.0, "Boys argument must be non-negative");

    let capacity = max_order as usize + 1;
    let mut boys_values = vec![0.0; capacity];
    boys_values[capacity - 1] = boys((capacity - 1) as u64, boys_inp);
    for ang_mom in (1..capacity).rev() {
        boys_values[ang_mom - 1] = calc_boys_down_recur(boys_values[ang_mom], ang_mom, boys_inp);
    }
    boys_values
}

/// Table of (-2p)^N F_N(T): the scaled base-case values used when assembling
/// true Coulomb integrals from R_{tuv} shells.
pub fn boys_table_scaled(max_order: i32, boys_inp: f64, alph_p: f64) -> Vec<f64> {
    boys_table(max_order, boys_inp)
        .into_iter()
        .enumerate()
        .map(|(n, f_n)| (-2.0 * alph_p).powi(n as i32) * f_n)
        .collect()
}

/// One step of the downward recursion (see Helgaker, Jorgensen, Olsen, 2000)
/// (p. 367, bottom)
///
/// ## Formula
/// $ F_n(x) = \frac{2x\,F_{n+1}(x) + \exp(-x)}{2n+1} $
#[inline(always)]
fn calc_boys_down_recur(current_boys_val: f64, ang_mom: usize, boys_inp: f64) -> f64 {
    (2.0 * boys_inp * current_boys_val + (-boys_inp).exp()) / ((2 * (ang_mom - 1)) as f64 + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_table_matches_direct_evaluation() {
        for &boys_inp in &[0.05, 1.3, 7.9, 24.0] {
            let table = boys_table(6, boys_inp);
            for (n, &f_n) in table.iter().enumerate() {
                assert_relative_eq!(f_n, boys(n as u64, boys_inp), max_relative = 1e-10);
            }
        }
    }

    #[test]
    fn test_f0_at_zero_argument() {
        // F_n(0) = 1/(2n+1)
        let table = boys_table(4, 0.0);
        for (n, &f_n) in table.iter().enumerate() {
            assert_abs_diff_eq!(f_n, 1.0 / (2 * n + 1) as f64, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_scaled_table_factors() {
        let boys_inp = 1.7;
        let alph_p = 2.5;
        let plain = boys_table(3, boys_inp);
        let scaled = boys_table_scaled(3, boys_inp, alph_p);
        for n in 0..=3usize {
            assert_relative_eq!(
                scaled[n],
                (-2.0 * alph_p).powi(n as i32) * plain[n],
                max_relative = 1e-14
            );
        }
        // Alternating sign from the (-2p)^N factor
        assert!(scaled[1] < 0.0 && scaled[2] > 0.0);
    }

    #[test]
    fn test_table_length() {
        assert_eq!(boys_table(8, 0.4).len(), 9);
    }
}
