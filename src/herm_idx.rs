//! Dense linear indexing for the bounded multi-indices used by the layer
//! evaluators.
//!
//! The 3-index scheme groups first by total degree L = t+u+v (tetrahedral
//! offset), then by u+v within the degree (triangular offset), then by v.
//! It maps the set {(t,u,v) : t+u+v <= L} bijectively onto
//! [0, tetrahedral(L)); the sizing functions below and the offset function
//! agree on this layout, which the tests verify exhaustively.

/// Maximum per-centre angular momentum supported by the E evaluators (g functions).
pub const MAX_L: i32 = 4;
/// Largest Hermite index t plus one: t ranges over 0..=nA+nB with nA,nB <= MAX_L.
pub const MAX_T: usize = (2 * MAX_L + 1) as usize;

/// Maximum total angular momentum for R shells, e.g. (gg|gg) -> 4*4 = 16.
pub const MAX_R_L: i32 = 16;
/// Capacity of a shell buffer holding every (t,u,v) with t+u+v <= MAX_R_L.
pub const MAX_R_SIZE: usize = tetrahedral(MAX_R_L);

/// Number of (u,v) pairs with u+v <= l; zero for negative l.
#[inline]
pub const fn triangular(l: i32) -> usize {
    if l < 0 {
        0
    } else {
        ((l + 1) * (l + 2) / 2) as usize
    }
}

/// Number of (t,u,v) triples with t+u+v <= l; zero for negative l.
#[inline]
pub const fn tetrahedral(l: i32) -> usize {
    if l < 0 {
        0
    } else {
        ((l + 1) * (l + 2) * (l + 3) / 6) as usize
    }
}

/// Offset of (t,u,v) in a dense shell buffer.
///
/// Grouping: total degree first, then u+v, then v. The triple (0,0,0) maps
/// to 0 and the image of {t+u+v <= L} is exactly [0, tetrahedral(L)).
#[inline]
pub const fn r_index(t: i32, u: i32, v: i32) -> usize {
    tetrahedral(t + u + v - 1) + triangular(u + v - 1) + v as usize
}

/// Number of valid Hermite indices t for a fixed (nA,nB) layer.
#[inline]
pub const fn e_layer_len(n_a: i32, n_b: i32) -> usize {
    (n_a + n_b + 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counting_formulas() {
        assert_eq!(triangular(-1), 0);
        assert_eq!(triangular(0), 1);
        assert_eq!(triangular(2), 6);
        assert_eq!(tetrahedral(-1), 0);
        assert_eq!(tetrahedral(0), 1);
        assert_eq!(tetrahedral(2), 10);
        assert_eq!(tetrahedral(MAX_R_L), 969);
    }

    #[test]
    fn test_r_index_origin() {
        assert_eq!(r_index(0, 0, 0), 0);
    }

    /// Every shell [0, tetrahedral(L)) must be covered exactly once.
    #[test]
    fn test_r_index_bijective_up_to_l8() {
        for l_max in 0..=8 {
            let count = tetrahedral(l_max);
            let mut seen = vec![false; count];
            for t in 0..=l_max {
                for u in 0..=(l_max - t) {
                    for v in 0..=(l_max - t - u) {
                        let idx = r_index(t, u, v);
                        assert!(idx < count, "index {idx} out of range for L={l_max}");
                        assert!(!seen[idx], "collision at ({t},{u},{v}) for L={l_max}");
                        seen[idx] = true;
                    }
                }
            }
            assert!(seen.iter().all(|&s| s), "gap in shell L={l_max}");
        }
    }

    /// Triples of equal total degree occupy one contiguous block.
    #[test]
    fn test_r_index_degree_blocks() {
        for l in 0..=6 {
            let lo = tetrahedral(l - 1);
            let hi = tetrahedral(l);
            for t in 0..=l {
                for u in 0..=(l - t) {
                    let v = l - t - u;
                    let idx = r_index(t, u, v);
                    assert!(lo <= idx && idx < hi);
                }
            }
        }
    }
}
