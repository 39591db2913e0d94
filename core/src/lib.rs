//! Pure evaluation layer: metric calculators and the decision
//! classifier. No I/O happens in this crate.

pub mod decision;
pub mod metrics;
