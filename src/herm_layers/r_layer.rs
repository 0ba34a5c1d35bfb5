//! Layer-by-layer evaluation of the Hermite-Coulomb auxiliary integrals
//! R_{tuv}^{(N)}.
//!
//! Base case: R_{000}^{(N)} = Boys[N]. Each Cartesian index is reduced
//! against the next Boys order,
//!
//!   R_{tuv}^{(N)} = PC_x R_{t-1,u,v}^{(N+1)} + (t-1) R_{t-2,u,v}^{(N+1)}
//!
//! and analogously for u (PC_y) and v (PC_z). The sweep starts from the
//! single value R_{000}^{(L_total)} and walks N downward to 0, deriving at
//! each N the whole shell {t+u+v <= L_total - N} from the N+1 shell. Two
//! shell buffers are swapped between iterations; only the N = 0 shell
//! survives. Total cost is O(L_total^3) versus exponential for naive
//! per-value recursion.
//!
//! See: McMurchie & Davidson, J. Comput. Phys. 26 (1978) 218;
//! Molecular Electronic-Structure Theory, Helgaker, Jorgensen, Olsen, 2000, Ch. 9

use crate::cartesian_comp::{CC_X, CC_Y, CC_Z};
use crate::herm_idx::{r_index, tetrahedral, MAX_R_L, MAX_R_SIZE};
use getset::Getters;
use ndarray::Array1;

/// Geometry of a Coulomb auxiliary evaluation: the vector from C to the
/// Gaussian product centre P. The Boys table is caller-owned and passed per
/// call, so one value can serve many tables (e.g. different exponents).
#[derive(Debug, Default, Clone, Getters)]
pub struct RHermAuxInt {
    #[getset(get = "pub")]
    vec_pc: Array1<f64>, // Vector from C to P (P - C)
}

/// The complete N = 0 shell: R_{tuv}^{(0)} for every t+u+v <= l_total,
/// addressed through [`r_index`].
#[derive(Debug, Clone)]
pub struct RHermShell {
    vals: [f64; MAX_R_SIZE],
    l_total: i32,
}

impl RHermAuxInt {
    pub fn new(vec_pc: Array1<f64>) -> Self {
        assert_eq!(vec_pc.len(), 3, "PC displacement must have 3 components");
        Self { vec_pc }
    }

    /// Boys-function argument T = p |PC|^2 for combined exponent `alph_p`.
    pub fn boys_input(&self, alph_p: f64) -> f64 {
        alph_p * self.vec_pc.dot(&self.vec_pc)
    }

    /// Compute every R_{tuv}^{(0)} with t+u+v <= `l_total` in one sweep.
    ///
    /// `boys` must hold F_0(T)..F_{l_total}(T); a shorter table is a
    /// precondition violation and panics.
    pub fn calc_shell(&self, l_total: i32, boys: &[f64]) -> RHermShell {
        assert!(
            (0..=MAX_R_L).contains(&l_total),
            "total angular momentum {l_total} outside supported range 0..={MAX_R_L}"
        );
        assert!(
            boys.len() > l_total as usize,
            "Boys table holds {} values, need {}",
            boys.len(),
            l_total + 1
        );

        let pcx = self.vec_pc[CC_X];
        let pcy = self.vec_pc[CC_Y];
        let pcz = self.vec_pc[CC_Z];

        let mut buf_a = [0.0_f64; MAX_R_SIZE];
        let mut buf_b = [0.0_f64; MAX_R_SIZE];
        let (mut prev, mut curr) = (&mut buf_a, &mut buf_b);
        prev[0] = boys[l_total as usize]; // R_{000}^{(L_total)}

        for n in (0..l_total).rev() {
            // shell at order n covers t+u+v <= l_total - n
            let l_max = l_total - n;
            curr[..tetrahedral(l_max)].fill(0.0);
            curr[0] = boys[n as usize]; // R_{000}^{(n)}

            // z-recurrence: R_{00v}, reads only the base case of prev
            for v in 1..=l_max {
                let term2 = if v > 1 {
                    (v - 1) as f64 * prev[r_index(0, 0, v - 2)]
                } else {
                    0.0
                };
                curr[r_index(0, 0, v)] = pcz * prev[r_index(0, 0, v - 1)] + term2;
            }

            // y-recurrence: R_{0uv} from the u-1/u-2 rows already in prev
            for u in 1..=l_max {
                for v in 0..=(l_max - u) {
                    let term2 = if u > 1 {
                        (u - 1) as f64 * prev[r_index(0, u - 2, v)]
                    } else {
                        0.0
                    };
                    curr[r_index(0, u, v)] = pcy * prev[r_index(0, u - 1, v)] + term2;
                }
            }

            // x-recurrence last: everything it reads exists in prev
            for t in 1..=l_max {
                for u in 0..=(l_max - t) {
                    for v in 0..=(l_max - t - u) {
                        let term2 = if t > 1 {
                            (t - 1) as f64 * prev[r_index(t - 2, u, v)]
                        } else {
                            0.0
                        };
                        curr[r_index(t, u, v)] = pcx * prev[r_index(t - 1, u, v)] + term2;
                    }
                }
            }

            std::mem::swap(&mut prev, &mut curr);
        }

        RHermShell {
            vals: *prev,
            l_total,
        }
    }
}

impl RHermShell {
    pub fn l_total(&self) -> i32 {
        self.l_total
    }

    /// Number of stored values: tetrahedral(l_total).
    pub fn len(&self) -> usize {
        tetrahedral(self.l_total)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// R_{tuv}^{(0)}. Triples with t+u+v > l_total are a programming error.
    pub fn get(&self, t: i32, u: i32, v: i32) -> f64 {
        assert!(
            t >= 0 && u >= 0 && v >= 0 && t + u + v <= self.l_total,
            "({t},{u},{v}) outside shell with L_total={}",
            self.l_total
        );
        self.vals[r_index(t, u, v)]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.vals[..self.len()]
    }
}
