//! Brute-force recursive reference evaluators.
//!
//! These follow the defining recurrences top-down, one requested value at a
//! time, with no reuse of shared subterms. Exponential in the total index,
//! so only suitable as the correctness reference the layered sweeps are
//! tested against (and for one-off low-order evaluations).

use super::e_layer::EHermCoeff1D;
use super::r_layer::RHermAuxInt;
use crate::cartesian_comp::{CC_X, CC_Y, CC_Z};

impl EHermCoeff1D {
    /// E^{nA,nB}_t by unmemoized recursion.
    ///
    /// Out-of-range indices (t < 0, t > nA+nB, negative angular momenta)
    /// are the boundary of the expansion and evaluate to zero.
    pub fn calc_recurr_rel(&self, n_a: i32, n_b: i32, t: i32) -> f64 {
        // Early return on the expansion boundary
        if t < 0 || t > n_a + n_b || n_a < 0 || n_b < 0 {
            return 0.0;
        }

        match (n_a, n_b, t) {
            // Base case
            (0, 0, 0) => 1.0,
            // B-side recurrence (nA = 0): decrement nB
            (0, _, 0) => {
                self.pb() * self.calc_recurr_rel(0, n_b - 1, 0) + self.calc_recurr_rel(0, n_b - 1, 1)
            }
            (0, _, _) => {
                self.one_over_2p() * self.calc_recurr_rel(0, n_b - 1, t - 1)
                    + self.pb() * self.calc_recurr_rel(0, n_b - 1, t)
                    + (t + 1) as f64 * self.calc_recurr_rel(0, n_b - 1, t + 1)
            }
            // A-side recurrence: decrement nA, nB held fixed
            (_, _, 0) => {
                self.pa() * self.calc_recurr_rel(n_a - 1, n_b, 0)
                    + self.calc_recurr_rel(n_a - 1, n_b, 1)
            }
            (_, _, _) => {
                self.one_over_2p() * self.calc_recurr_rel(n_a - 1, n_b, t - 1)
                    + self.pa() * self.calc_recurr_rel(n_a - 1, n_b, t)
                    + (t + 1) as f64 * self.calc_recurr_rel(n_a - 1, n_b, t + 1)
            }
        }
    }
}

impl RHermAuxInt {
    /// R_{tuv}^{(N)} by unmemoized recursion against the same Boys table
    /// the layered sweep consumes.
    pub fn calc_recurr_rel(&self, t: i32, u: i32, v: i32, boys_order: i32, boys: &[f64]) -> f64 {
        // Early return on the expansion boundary
        if t < 0 || u < 0 || v < 0 {
            return 0.0;
        }

        let vec_pc = self.vec_pc();
        match (t, u, v) {
            (0, 0, 0) => boys[boys_order as usize],
            (t, _, _) if t > 0 => {
                vec_pc[CC_X] * self.calc_recurr_rel(t - 1, u, v, boys_order + 1, boys)
                    + (t - 1) as f64 * self.calc_recurr_rel(t - 2, u, v, boys_order + 1, boys)
            }
            (_, u, _) if u > 0 => {
                vec_pc[CC_Y] * self.calc_recurr_rel(t, u - 1, v, boys_order + 1, boys)
                    + (u - 1) as f64 * self.calc_recurr_rel(t, u - 2, v, boys_order + 1, boys)
            }
            _ => {
                vec_pc[CC_Z] * self.calc_recurr_rel(t, u, v - 1, boys_order + 1, boys)
                    + (v - 1) as f64 * self.calc_recurr_rel(t, u, v - 2, boys_order + 1, boys)
            }
        }
    }
}
