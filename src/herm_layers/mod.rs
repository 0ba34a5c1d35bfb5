#![allow(non_snake_case)]
//! Layered evaluators for the Hermite expansion coefficients E^{nA,nB}_t and
//! the Hermite-Coulomb auxiliary integrals R_{tuv}^{(N)}.
//!
//! Each submodule materializes one whole layer/shell per call, reusing the
//! previous layer exactly once. `naive` holds the brute-force recursive
//! evaluators the layered results are validated against.

pub mod e_layer;
pub mod grad;
pub mod naive;
pub mod r_layer;

use crate::cartesian_comp::{CC_X, CC_Y, CC_Z};
use e_layer::{EHermCoeff1D, EHermLayer};

/// Hermite expansion coefficients for a 3D Cartesian Gaussian product, one
/// 1D evaluator per direction.
///
/// The 3D coefficient factorizes as E_t E_u E_v, so a shell of 3D values is
/// three independent 1D layers.
/// See: Molecular Electronic-Structure Theory, Helgaker, Jorgensen, Olsen, 2000
#[derive(Debug, Default, Clone, Copy)]
pub struct EHermCoeff3D {
    e_ij: EHermCoeff1D, // x comp
    e_kl: EHermCoeff1D, // y comp
    e_mn: EHermCoeff1D, // z comp
}

impl EHermCoeff3D {
    /// ### Note:
    /// `vec_BA` is the vector from B to A, i.e. A - B (not B - A) => BA_x = A_x - B_x
    ///
    /// ### Arguments
    /// ----------
    /// - `alpha1` : Exponent of the first Gaussian function.
    /// - `alpha2` : Exponent of the second Gaussian function.
    /// - `vec_BA` : Vector from B to A, i.e. A - B (not B - A) => BA_x = A_x - B_x
    pub fn new(alpha1: f64, alpha2: f64, vec_BA: &[f64; 3]) -> Self {
        let e_ij = EHermCoeff1D::from_exponents(alpha1, alpha2, vec_BA[CC_X]);
        let e_kl = EHermCoeff1D::from_exponents(alpha1, alpha2, vec_BA[CC_Y]);
        let e_mn = EHermCoeff1D::from_exponents(alpha1, alpha2, vec_BA[CC_Z]);

        Self { e_ij, e_kl, e_mn }
    }

    /// Compute the three per-direction layers for angular momenta `l1`, `l2`
    /// in one pass each.
    pub fn calc_layers(
        &self,
        l1: &[i32; 3],
        l2: &[i32; 3],
    ) -> (EHermLayer, EHermLayer, EHermLayer) {
        let lay_x = self.e_ij.calc_layer(l1[CC_X], l2[CC_X]);
        let lay_y = self.e_kl.calc_layer(l1[CC_Y], l2[CC_Y]);
        let lay_z = self.e_mn.calc_layer(l1[CC_Z], l2[CC_Z]);
        (lay_x, lay_y, lay_z)
    }

    /// Single 3D coefficient E_t E_u E_v for Hermite indices `tuv`.
    pub fn calc_coeff(&self, l1: &[i32; 3], l2: &[i32; 3], tuv: &[i32; 3]) -> f64 {
        let (lay_x, lay_y, lay_z) = self.calc_layers(l1, l2);
        lay_x.get(tuv[CC_X]) * lay_y.get(tuv[CC_Y]) * lay_z.get(tuv[CC_Z])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_3d_coeff_factorizes() {
        let vec_ba = [0.1, 0.2, 0.3];
        let e_ab = EHermCoeff3D::new(15.5, 10.3, &vec_ba);
        let l1 = [2, 1, 0];
        let l2 = [1, 1, 2];

        let ex = EHermCoeff1D::from_exponents(15.5, 10.3, vec_ba[0]);
        let ey = EHermCoeff1D::from_exponents(15.5, 10.3, vec_ba[1]);
        let ez = EHermCoeff1D::from_exponents(15.5, 10.3, vec_ba[2]);

        let val = e_ab.calc_coeff(&l1, &l2, &[1, 0, 2]);
        let re = ex.calc_layer(2, 1).get(1) * ey.calc_layer(1, 1).get(0) * ez.calc_layer(0, 2).get(2);
        assert_relative_eq!(val, re, max_relative = 1e-14);
    }

    #[test]
    fn test_3d_s_functions_are_unity() {
        let e_ab = EHermCoeff3D::new(0.5, 0.5, &[1.0, 2.0, 3.0]);
        // (ss) pair: every direction is the E^{0,0}_0 = 1 base case
        assert_eq!(e_ab.calc_coeff(&[0; 3], &[0; 3], &[0; 3]), 1.0);
    }
}
