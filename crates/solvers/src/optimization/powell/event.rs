/// Events emitted by Powell's method.
///
/// Every event carries the solver's current point and its objective, so an
/// observer that records `x()` from each event reproduces the iteration trace:
/// the start point, one point per direction cycle, and one point per accepted
/// extrapolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<'a, const N: usize> {
    /// The start point was evaluated.
    Started {
        /// The start point.
        x: &'a [f64; N],

        /// The objective at the start point.
        objective: f64,
    },

    /// A line search was completed along every direction in the set.
    Cycled {
        /// Outer iteration (1-based).
        iter: usize,

        /// The point after the cycle.
        x: &'a [f64; N],

        /// The objective after the cycle.
        objective: f64,

        /// Largest decrease achieved by a single line search in this cycle.
        biggest_drop: f64,

        /// Index of the direction that achieved `biggest_drop`.
        drop_index: usize,
    },

    /// The safeguard accepted a move along the cycle's net displacement.
    Extrapolated {
        /// Outer iteration (1-based).
        iter: usize,

        /// The point after the move.
        x: &'a [f64; N],

        /// The objective after the move.
        objective: f64,

        /// Index of the replaced direction, or `None` if the displacement
        /// had no usable length and the direction set was left unchanged.
        replaced: Option<usize>,
    },
}

impl<const N: usize> Event<'_, N> {
    /// Returns the current point.
    #[must_use]
    pub fn x(&self) -> &[f64; N] {
        match self {
            Self::Started { x, .. } | Self::Cycled { x, .. } | Self::Extrapolated { x, .. } => *x,
        }
    }

    /// Returns the objective at the current point.
    #[must_use]
    pub fn objective(&self) -> f64 {
        match self {
            Self::Started { objective, .. }
            | Self::Cycled { objective, .. }
            | Self::Extrapolated { objective, .. } => *objective,
        }
    }

    /// Returns the outer iteration, with `0` for the start point.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Started { .. } => 0,
            Self::Cycled { iter, .. } | Self::Extrapolated { iter, .. } => *iter,
        }
    }
}
