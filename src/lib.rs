//! Layered evaluators for the McMurchie-Davidson auxiliary quantities:
//! Hermite expansion coefficients E^{nA,nB}_t (with position gradients) and
//! Hermite-Coulomb auxiliary integrals R_{tuv}^{(N)}.
//!
//! Each family obeys a linear recurrence that terminates in a closed-form
//! base case. The evaluators here materialize a whole "layer" (all t for a
//! fixed (nA,nB)) or "shell" (all (t,u,v) with t+u+v <= L) in one bottom-up
//! sweep, so every lower layer is computed exactly once instead of once per
//! requested value.
//!
//! See: Molecular Electronic-Structure Theory, Helgaker, Jorgensen, Olsen, 2000,
//! Ch. 9; McMurchie & Davidson, J. Comput. Phys. 26 (1978) 218.

pub mod batch;
pub mod boys_table;
pub mod cartesian_comp;
pub mod herm_idx;
pub mod herm_layers;

pub use herm_layers::e_layer::{EHermCoeff1D, EHermLayer};
pub use herm_layers::grad::EHermGrad1D;
pub use herm_layers::r_layer::{RHermAuxInt, RHermShell};
pub use herm_layers::EHermCoeff3D;
