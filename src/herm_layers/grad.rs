//! Position gradients of the Hermite expansion coefficients.
//!
//! The derivatives have direct closed forms (Helgaker-Taylor):
//!
//!   dE^{nA,nB}_t/dPA = nA E^{nA-1,nB}_t
//!   dE^{nA,nB}_t/dPB = nB E^{nA,nB-1}_t
//!
//! so a gradient layer costs one extra coefficient layer. Nuclear-position
//! derivatives follow by chain rule from PA = (alphaB/p)(B - A) and
//! PB = (alphaA/p)(A - B):
//!
//!   dPA/dA = -alphaB/p   dPA/dB = +alphaB/p
//!   dPB/dA = +alphaA/p   dPB/dB = -alphaA/p
//!
//! which makes dE/dA + dE/dB = 0 hold identically (translational
//! invariance), not just to truncation error.

use super::e_layer::{EHermCoeff1D, EHermLayer};
use crate::herm_idx::{e_layer_len, MAX_T};
use getset::CopyGetters;

/// Gradient evaluator for one Cartesian direction. Keeps the exponents
/// alongside the coefficient geometry since the chain rule needs them.
#[derive(Debug, Default, Clone, Copy, CopyGetters)]
pub struct EHermGrad1D {
    coeffs: EHermCoeff1D,
    #[getset(get_copy = "pub")]
    alpha1: f64,
    #[getset(get_copy = "pub")]
    alpha2: f64,
    one_over_p: f64,
}

impl EHermGrad1D {
    /// `vec_BA_comp` is one component of the vector from B to A (A_i - B_i).
    pub fn new(alpha1: f64, alpha2: f64, vec_BA_comp: f64) -> Self {
        Self {
            coeffs: EHermCoeff1D::from_exponents(alpha1, alpha2, vec_BA_comp),
            alpha1,
            alpha2,
            one_over_p: (alpha1 + alpha2).recip(),
        }
    }

    pub fn coeffs(&self) -> &EHermCoeff1D {
        &self.coeffs
    }

    /// dE^{nA,nB}_t/dPA = nA E^{nA-1,nB}_t for every t in the layer.
    pub fn calc_deriv_pa_layer(&self, n_a: i32, n_b: i32) -> EHermLayer {
        let mut vals = [0.0_f64; MAX_T];
        if n_a > 0 {
            let sub = self.coeffs.calc_layer(n_a - 1, n_b);
            for (t, e_val) in sub.as_slice().iter().enumerate() {
                vals[t] = n_a as f64 * e_val;
            }
        }
        // t = nA+nB sits past the sub-layer's degree and stays zero
        EHermLayer::from_parts(vals, e_layer_len(n_a, n_b))
    }

    /// dE^{nA,nB}_t/dPB = nB E^{nA,nB-1}_t for every t in the layer.
    pub fn calc_deriv_pb_layer(&self, n_a: i32, n_b: i32) -> EHermLayer {
        let mut vals = [0.0_f64; MAX_T];
        if n_b > 0 {
            let sub = self.coeffs.calc_layer(n_a, n_b - 1);
            for (t, e_val) in sub.as_slice().iter().enumerate() {
                vals[t] = n_b as f64 * e_val;
            }
        }
        EHermLayer::from_parts(vals, e_layer_len(n_a, n_b))
    }

    /// dE^{nA,nB}_t/dA via chain rule over PA and PB.
    pub fn calc_deriv_a_layer(&self, n_a: i32, n_b: i32) -> EHermLayer {
        let d_pa_d_a = -self.alpha2 * self.one_over_p;
        let d_pb_d_a = self.alpha1 * self.one_over_p;
        self.chain_rule_layer(n_a, n_b, d_pa_d_a, d_pb_d_a)
    }

    /// dE^{nA,nB}_t/dB via chain rule over PA and PB; equals -dE/dA.
    pub fn calc_deriv_b_layer(&self, n_a: i32, n_b: i32) -> EHermLayer {
        let d_pa_d_b = self.alpha2 * self.one_over_p;
        let d_pb_d_b = -self.alpha1 * self.one_over_p;
        self.chain_rule_layer(n_a, n_b, d_pa_d_b, d_pb_d_b)
    }

    pub fn calc_deriv_pa(&self, n_a: i32, n_b: i32, t: i32) -> f64 {
        self.calc_deriv_pa_layer(n_a, n_b).get(t)
    }

    pub fn calc_deriv_pb(&self, n_a: i32, n_b: i32, t: i32) -> f64 {
        self.calc_deriv_pb_layer(n_a, n_b).get(t)
    }

    pub fn calc_deriv_a(&self, n_a: i32, n_b: i32, t: i32) -> f64 {
        self.calc_deriv_a_layer(n_a, n_b).get(t)
    }

    pub fn calc_deriv_b(&self, n_a: i32, n_b: i32, t: i32) -> f64 {
        self.calc_deriv_b_layer(n_a, n_b).get(t)
    }

    fn chain_rule_layer(&self, n_a: i32, n_b: i32, w_pa: f64, w_pb: f64) -> EHermLayer {
        let d_pa = self.calc_deriv_pa_layer(n_a, n_b);
        let d_pb = self.calc_deriv_pb_layer(n_a, n_b);
        let mut vals = [0.0_f64; MAX_T];
        for t in 0..d_pa.len() {
            vals[t] = w_pa * d_pa.as_slice()[t] + w_pb * d_pb.as_slice()[t];
        }
        EHermLayer::from_parts(vals, e_layer_len(n_a, n_b))
    }
}
