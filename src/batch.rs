//! Parallel helpers over independent geometries.
//!
//! The evaluators are pure functions of their inputs, so batches of
//! geometries shard trivially across threads. The caller keeps ownership of
//! all inputs; Boys tables are only read.

use crate::herm_layers::e_layer::{EHermCoeff1D, EHermLayer};
use crate::herm_layers::r_layer::{RHermAuxInt, RHermShell};
use rayon::prelude::*;

/// Compute the (nA,nB) layer for every geometry in parallel.
pub fn calc_e_layers_par(coeffs: &[EHermCoeff1D], n_a: i32, n_b: i32) -> Vec<EHermLayer> {
    coeffs
        .par_iter()
        .map(|e_ab| e_ab.calc_layer(n_a, n_b))
        .collect()
}

/// Compute the N = 0 shell for every (geometry, Boys table) pair in parallel.
///
/// `aux_ints` and `boys_tables` are matched by position and must have equal
/// length.
pub fn calc_r_shells_par(
    aux_ints: &[RHermAuxInt],
    boys_tables: &[Vec<f64>],
    l_total: i32,
) -> Vec<RHermShell> {
    assert_eq!(
        aux_ints.len(),
        boys_tables.len(),
        "one Boys table per geometry required"
    );
    aux_ints
        .par_iter()
        .zip(boys_tables.par_iter())
        .map(|(aux, boys)| aux.calc_shell(l_total, boys))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boys_table::boys_table;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_parallel_e_layers_match_sequential() {
        let coeffs: Vec<_> = [(0.5, -0.3, 2.0), (0.1, 0.2, 25.8), (-1.3, 0.7, 0.9)]
            .iter()
            .map(|&(pa, pb, p)| EHermCoeff1D::new(pa, pb, p))
            .collect();
        let layers = calc_e_layers_par(&coeffs, 3, 2);
        for (e_ab, layer) in coeffs.iter().zip(&layers) {
            let seq = e_ab.calc_layer(3, 2);
            for t in 0..=5 {
                assert_abs_diff_eq!(layer.get(t), seq.get(t), epsilon = 0.0);
            }
        }
    }

    #[test]
    fn test_parallel_r_shells_match_sequential() {
        let aux_ints = vec![
            RHermAuxInt::new(array![0.1, 0.2, 0.3]),
            RHermAuxInt::new(array![-0.4, 0.05, 0.7]),
        ];
        let l_total = 4;
        let boys_tables: Vec<_> = aux_ints
            .iter()
            .map(|aux| boys_table(l_total, aux.boys_input(3.7)))
            .collect();
        let shells = calc_r_shells_par(&aux_ints, &boys_tables, l_total);
        for ((aux, boys), shell) in aux_ints.iter().zip(&boys_tables).zip(&shells) {
            let seq = aux.calc_shell(l_total, boys);
            for (idx, val) in shell.as_slice().iter().enumerate() {
                assert_abs_diff_eq!(*val, seq.as_slice()[idx], epsilon = 0.0);
            }
        }
    }

    #[test]
    #[should_panic(expected = "one Boys table per geometry")]
    fn test_mismatched_batch_panics() {
        let aux_ints = vec![RHermAuxInt::new(array![0.1, 0.2, 0.3])];
        calc_r_shells_par(&aux_ints, &[], 2);
    }
}
