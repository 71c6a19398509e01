/// The set of `N` search directions maintained by Powell's method.
///
/// Starts as the coordinate axes. Each stored direction has finite, non-zero
/// norm; replacements are only accepted through [`DirectionSet::replace`],
/// which takes an already-normalized vector.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct DirectionSet<const N: usize> {
    directions: [[f64; N]; N],
}

impl<const N: usize> DirectionSet<N> {
    /// Creates the identity basis.
    pub(super) fn identity() -> Self {
        let directions =
            std::array::from_fn(|i| std::array::from_fn(|j| if i == j { 1.0 } else { 0.0 }));
        Self { directions }
    }

    /// Returns the direction at `index`.
    pub(super) fn get(&self, index: usize) -> &[f64; N] {
        &self.directions[index]
    }

    /// Replaces the direction at `index` with a unit vector.
    pub(super) fn replace(&mut self, index: usize, unit: [f64; N]) {
        debug_assert!(unit.iter().all(|v| v.is_finite()));
        self.directions[index] = unit;
    }

    pub(super) fn into_inner(self) -> [[f64; N]; N] {
        self.directions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_as_identity() {
        let set = DirectionSet::<3>::identity();

        assert_eq!(set.get(0), &[1.0, 0.0, 0.0]);
        assert_eq!(set.get(1), &[0.0, 1.0, 0.0]);
        assert_eq!(set.get(2), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn replace_only_touches_one_slot() {
        let mut set = DirectionSet::<2>::identity();
        set.replace(0, [0.6, 0.8]);

        assert_eq!(set.into_inner(), [[0.6, 0.8], [0.0, 1.0]]);
    }
}
