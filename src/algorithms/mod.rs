//! The five demonstration algorithms, one module per complexity class.\
//! They are deliberately textbook-shaped: each is an independent, stateless leaf with
//! no composition between them -- the interesting part is how their operation count
//! grows with the input size, which the [crate::analysis] module can classify.
//!
//! Besides the plain function, each module exports a `counting_*` sibling that also
//! returns the number of dominant operations performed (probes, multiplications,
//! comparisons, recursive calls...) -- the deterministic "resource utilization"
//! fed to the growth classifier.

pub mod constant;
pub mod linear;
pub mod logarithmic;
pub mod quadratic;
pub mod exponential;
