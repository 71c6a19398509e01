/// The shrinking interval of steps searched by the ternary line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Interval {
    low: f64,
    high: f64,
}

impl Interval {
    /// Creates an interval from a validated `[low, high]` bracket.
    pub(super) fn new(bracket: [f64; 2]) -> Self {
        let [low, high] = bracket;
        Self { low, high }
    }

    /// Returns the width of the interval.
    pub(super) fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Returns the interior points at the one-third and two-thirds marks.
    pub(super) fn thirds(&self) -> [f64; 2] {
        let width = self.width();
        [self.low + width / 3.0, self.high - width / 3.0]
    }

    /// Returns the midpoint of the interval.
    pub(super) fn midpoint(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    /// Discards the upper third, keeping `[low, upper_third]`.
    pub(super) fn discard_upper(&mut self, upper_third: f64) {
        self.high = upper_third;
    }

    /// Discards the lower third, keeping `[lower_third, high]`.
    pub(super) fn discard_lower(&mut self, lower_third: f64) {
        self.low = lower_third;
    }
}
