//! Elementwise operator families.
//!
//! Each family comes in three shapes: vector-scalar, scalar-vector and
//! vector-vector. Vector-vector shapes require equal lengths and panic
//! otherwise; nothing is truncated or padded.
mod arith;
mod compare;
mod logical;

pub use compare::ElementwiseCmp;
