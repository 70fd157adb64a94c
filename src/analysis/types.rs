//! Defines the complexity ladder & report types shared by this crate's functions.

use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Possible growth classification results, in big-O notation, from best to worst.\
/// The "Between" grades cover observations that clearly exceed one class but fall
/// short of the next within the configured tolerance.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ComplexityClass {
    BetterThanO1,
    O1,
    BetweenO1AndOLogN,
    OLogN,
    BetweenOLogNAndON,
    ON,
    BetweenONAndONLogN,
    ONLogN,
    BetweenONLogNAndON2,
    ON2,
    BetweenON2AndON3,
    ON3,
    BetweenON3AndON4,
    ON4,
    BetweenON4AndOkN,
    OkN,
    WorseThanExponential,
}
impl ComplexityClass {
    /// verbose description for each enum element
    pub fn as_pretty_str(&self) -> &'static str {
        match self {
            Self::BetterThanO1         => "Better than O(1)",
            Self::O1                   => "O(1)",
            Self::BetweenO1AndOLogN    => "Worse than O(1) but better than O(log(n))",
            Self::OLogN                => "O(log(n))",
            Self::BetweenOLogNAndON    => "Worse than O(log(n)) but better than O(n)",
            Self::ON                   => "O(n)",
            Self::BetweenONAndONLogN   => "Worse than O(n) but better than O(n.log(n))",
            Self::ONLogN               => "O(n.log(n))",
            Self::BetweenONLogNAndON2  => "Worse than O(n.log(n)) but better than O(n²)",
            Self::ON2                  => "O(n²)",
            Self::BetweenON2AndON3     => "Worse than O(n²) but better than O(n³)",
            Self::ON3                  => "O(n³)",
            Self::BetweenON3AndON4     => "Worse than O(n³) but better than O(n⁴)",
            Self::ON4                  => "O(n⁴)",
            Self::BetweenON4AndOkN     => "Worse than O(n⁴) but better than O(k^n)",
            Self::OkN                  => "O(k^n)",
            Self::WorseThanExponential => "Worse than O(k^n)",
        }
    }
    /// same as [Self::as_pretty_str()], with additional info for wall-clock measurements
    pub fn as_time_pretty_str(&self) -> &'static str {
        match self {
            Self::BetterThanO1         => "Better than O(1) -- aren't the machines idle? too many threads? too little RAM?",
            Self::WorseThanExponential => "Worse than O(k^n) -- really bad algorithm or is the machine too busy for measurements?",
            _ => self.as_pretty_str(),
        }
    }
}
impl Display for ComplexityClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_pretty_str())
    }
}

/// The input sizes the two passes of a classification ran on\
/// -- the `n` in `O(n)`, `O(log(n))`, `O(n²)`, etc.
#[derive(Debug, Clone, Copy)]
pub struct PassesInfo {
    /// elements processed on the first pass
    pub pass1_n: u32,
    /// elements processed on the second pass (usually at least the double of the first)
    pub pass2_n: u32,
}

/// The elapsed times measured for the two passes of a wall-clock classification.
#[derive(Debug, Clone, Copy)]
pub struct TimeMeasurements {
    pub pass_1_elapsed: Duration,
    pub pass_2_elapsed: Duration,
}

/// Everything a [crate::runner] verification observed for an algorithm -- the pass
/// sizes, the measured times and the growth classification inferred from them.
pub struct ComplexityReport<'a> {
    /// a name for these measurements, for presentation purposes
    pub algorithm_name:    &'a str,
    pub passes_info:       PassesInfo,
    pub time_measurements: TimeMeasurements,
    pub time_complexity:   ComplexityClass,
}
impl Display for ComplexityReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // placing those in string variables since {:>12} seem not to work on Debug-formatted Durations
        let pass_1_time = format!("{:?}", self.time_measurements.pass_1_elapsed);
        let pass_2_time = format!("{:?}", self.time_measurements.pass_2_elapsed);
        write!(f, "'{}' measurements:\n\
                   pass            Δt             n\n\
                   1) {:>13}  {:>12}\n\
                   2) {:>13}  {:>12}\n\
                   --> time complexity: {}\n",
               self.algorithm_name,
               pass_1_time, self.passes_info.pass1_n,
               pass_2_time, self.passes_info.pass2_n,
               self.time_complexity.as_time_pretty_str())
    }
}
