//! Convergence and direction-replacement tests for Powell's method.
//!
//! Both operate on transformed objectives, where smaller is always better.

/// Guards the relative convergence test when both objectives are near zero.
const TINY: f64 = 1e-8;

/// Returns true if an outer iteration improved the objective by less than
/// `tolerance` relative to its magnitude.
pub(super) fn is_converged(f_prev: f64, f_val: f64, tolerance: f64) -> bool {
    2.0 * (f_prev - f_val).abs() <= tolerance * (f_prev.abs() + f_val.abs() + TINY)
}

/// Powell's safeguard for replacing the direction of largest drop.
///
/// `f_prev` is the objective at the start of the cycle, `f_val` at its end,
/// and `f_ext` at the point extrapolated by the cycle's net displacement.
/// `biggest_drop` is the largest decrease achieved by a single line search.
pub(super) fn accepts_new_direction(
    f_prev: f64,
    f_val: f64,
    f_ext: f64,
    biggest_drop: f64,
) -> bool {
    if f_ext >= f_prev {
        return false;
    }

    let t1 = (f_prev - f_val - biggest_drop).powi(2);
    let t2 = (f_prev - f_ext).powi(2);

    2.0 * (f_prev - 2.0 * f_val + f_ext) * t1 < biggest_drop * t2
}

/// Largest single line-search decrease within a cycle and its direction.
///
/// Starts at a zero drop on direction 0. Only a strictly larger drop replaces
/// the record, so ties keep the earliest direction.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(super) struct BiggestDrop {
    pub(super) drop: f64,
    pub(super) index: usize,
}

impl BiggestDrop {
    pub(super) fn record(&mut self, index: usize, drop: f64) {
        if drop > self.drop {
            self.drop = drop;
            self.index = index;
        }
    }
}
