// Fourth-down decision engine: expected-points curve, probability tables,
// action values, selection policy, and breakeven thresholds.

pub mod cubic;
pub mod curve;
pub mod engine;
pub mod select;
pub mod situation;
pub mod tables;
pub mod threshold;
pub mod values;
