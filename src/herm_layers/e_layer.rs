//! Layer-by-layer evaluation of the Hermite expansion coefficients
//! E^{nA,nB}_t (Helgaker-Taylor two-term Gaussian product expansion).
//!
//! A "layer" is the complete row of coefficients for one (nA,nB):
//! t = 0..=nA+nB. Layers obey
//!
//!   E^{nA,nB}_t = 1/(2p) E^{nA-1,nB}_{t-1} + PA E^{nA-1,nB}_t
//!               + (t+1) E^{nA-1,nB}_{t+1}
//!
//! (with PB and nB-1 when nA = 0), terminating in E^{0,0}_0 = 1. The sweep
//! below walks (0,0) -> (0,nB) -> (nA,nB) with two fixed-size buffers, so
//! each intermediate layer is computed exactly once no matter how many t
//! values the caller reads. Total cost is O((nA+nB)^2) multiply-adds; the
//! unmemoized recursion over the same index space is exponential.

use crate::herm_idx::{e_layer_len, MAX_L, MAX_T};
use getset::CopyGetters;

/// Per-direction geometry of a Gaussian product: displacements PA = P - A,
/// PB = P - B and the combined exponent p entering as 1/(2p).
///
/// 1/(2p) is computed once at construction and reused by every recurrence
/// step, keeping repeated evaluations bit-identical across call sites.
#[derive(Debug, Default, Clone, Copy, CopyGetters)]
pub struct EHermCoeff1D {
    #[getset(get_copy = "pub")]
    pa: f64,
    #[getset(get_copy = "pub")]
    pb: f64,
    #[getset(get_copy = "pub")]
    one_over_2p: f64,
}

/// One complete coefficient layer: E^{nA,nB}_t for t = 0..len-1.
///
/// Entries beyond `len` are zero and never meaningful; the buffer lives on
/// the call stack and carries no heap allocation.
#[derive(Debug, Default, Clone, Copy)]
pub struct EHermLayer {
    vals: [f64; MAX_T],
    len: usize,
}

impl EHermCoeff1D {
    pub fn new(pa: f64, pb: f64, alph_p: f64) -> Self {
        Self {
            pa,
            pb,
            one_over_2p: 0.5 / alph_p,
        }
    }

    /// Build the displacements from the Gaussian exponents and one component
    /// of the vector from B to A (A_i - B_i):
    /// PA = -(alpha2/p) BA, PB = +(alpha1/p) BA.
    pub fn from_exponents(alpha1: f64, alpha2: f64, vec_BA_comp: f64) -> Self {
        let alph_p = alpha1 + alpha2;
        let one_over_p = alph_p.recip();
        let pa = -(alpha2 * one_over_p) * vec_BA_comp;
        let pb = alpha1 * one_over_p * vec_BA_comp;
        Self::new(pa, pb, alph_p)
    }

    /// Compute the full layer E^{nA,nB}_t for t = 0..=nA+nB in one pass.
    ///
    /// The previous layer is materialized exactly once per raising step;
    /// reads past its degree fall on zero entries (the natural boundary of
    /// the Hermite expansion).
    pub fn calc_layer(&self, n_a: i32, n_b: i32) -> EHermLayer {
        assert!(
            (0..=MAX_L).contains(&n_a) && (0..=MAX_L).contains(&n_b),
            "angular momenta ({n_a},{n_b}) outside supported range 0..={MAX_L}"
        );

        let mut buf_a = [0.0_f64; MAX_T];
        let mut buf_b = [0.0_f64; MAX_T];
        let (mut prev, mut curr) = (&mut buf_a, &mut buf_b);
        prev[0] = 1.0; // E^{0,0}_0

        // Raise nB first (PB recurrence), then nA on top (PA recurrence).
        for j in 1..=n_b {
            Self::raise_layer(curr, prev, self.pb, self.one_over_2p, j);
            std::mem::swap(&mut prev, &mut curr);
        }
        for i in 1..=n_a {
            Self::raise_layer(curr, prev, self.pa, self.one_over_2p, n_b + i);
            std::mem::swap(&mut prev, &mut curr);
        }

        EHermLayer {
            vals: *prev,
            len: e_layer_len(n_a, n_b),
        }
    }

    /// Convenience accessor for a single coefficient. When several t values
    /// are needed, use [`calc_layer`](Self::calc_layer) and read them from
    /// the returned layer instead.
    pub fn calc_coeff(&self, n_a: i32, n_b: i32, t: i32) -> f64 {
        self.calc_layer(n_a, n_b).get(t)
    }

    /// One raising step: derive the degree-`n` layer from the degree-`n-1`
    /// layer, where `x` is PA (A-side) or PB (B-side).
    fn raise_layer(out: &mut [f64; MAX_T], prev: &[f64; MAX_T], x: f64, one_over_2p: f64, n: i32) {
        let n = n as usize;
        // t = 0: no t-1 term, coefficient of the t+1 term is 1
        out[0] = x * prev[0] + prev[1];
        for t in 1..n {
            out[t] = one_over_2p * prev[t - 1] + x * prev[t] + (t + 1) as f64 * prev[t + 1];
        }
        // t = n: the t+1 term does not exist
        out[n] = one_over_2p * prev[n - 1] + x * prev[n];
    }
}

impl EHermLayer {
    pub(crate) fn from_parts(vals: [f64; MAX_T], len: usize) -> Self {
        Self { vals, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// E^{nA,nB}_t for this layer. Indices outside 0..=nA+nB are a
    /// programming error.
    pub fn get(&self, t: i32) -> f64 {
        assert!(
            t >= 0 && (t as usize) < self.len,
            "Hermite index t={t} outside layer of {} values",
            self.len
        );
        self.vals[t as usize]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.vals[..self.len]
    }
}
