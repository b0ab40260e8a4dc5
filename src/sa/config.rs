//! Geometric cooling schedule.

/// Starting temperature of every run.
pub const INITIAL_TEMPERATURE: f64 = 1000.0;

/// Temperature at or below which the schedule is frozen.
pub const MIN_TEMPERATURE: f64 = 0.01;

/// Geometric cooling: `T_{k+1} = c * T_k`.
///
/// A factor of 1 or more never freezes the schedule; the run then ends only
/// through the no-improvement rule.
///
/// # Examples
///
/// ```
/// use u_makespan::sa::AnnealingSchedule;
///
/// let mut schedule = AnnealingSchedule::new(0.5);
/// schedule.cool();
/// assert_eq!(schedule.temperature(), 500.0);
/// assert!(!schedule.is_frozen());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnealingSchedule {
    temperature: f64,
    min_temperature: f64,
    cooling_factor: f64,
}

impl AnnealingSchedule {
    /// Schedule from [`INITIAL_TEMPERATURE`] down to [`MIN_TEMPERATURE`].
    pub fn new(cooling_factor: f64) -> Self {
        Self {
            temperature: INITIAL_TEMPERATURE,
            min_temperature: MIN_TEMPERATURE,
            cooling_factor,
        }
    }

    /// Current temperature.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Multiplicative factor applied by [`cool`](Self::cool).
    pub fn cooling_factor(&self) -> f64 {
        self.cooling_factor
    }

    /// True once the temperature has dropped to the minimum.
    pub fn is_frozen(&self) -> bool {
        self.temperature <= self.min_temperature
    }

    /// Multiplies the temperature by the cooling factor.
    pub fn cool(&mut self) {
        self.temperature *= self.cooling_factor;
    }

    /// Metropolis probability of accepting a change of `delta`.
    pub fn acceptance_probability(&self, delta: f64) -> f64 {
        if delta < 0.0 {
            1.0
        } else {
            (-delta / self.temperature).exp()
        }
    }
}
