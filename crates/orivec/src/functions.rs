//! Elementwise math functions.
//!
//! Each function is a thin wrapper over [`apply`]: the scalar primitive runs
//! once per element, in index order, and the result keeps the input's
//! orientation and element type.
use num_traits::{Float, Pow, Signed};

use crate::element::Element;
use crate::orientation::Orientation;
use crate::vector::OrientedVec;

/// Free-function form of [`OrientedVec::apply`].
pub fn apply<O, T, U, F>(v: &OrientedVec<O, T>, f: F) -> OrientedVec<O, U>
where
    O: Orientation,
    T: Element,
    U: Element,
    F: FnMut(T) -> U,
{
    v.apply(f)
}

pub fn abs<O: Orientation, T: Element + Signed>(v: &OrientedVec<O, T>) -> OrientedVec<O, T> {
    v.apply(|x| x.abs())
}

pub fn signum<O: Orientation, T: Element + Signed>(v: &OrientedVec<O, T>) -> OrientedVec<O, T> {
    v.apply(|x| x.signum())
}

/// Raises every element to `exponent`.
///
/// Works for any exponent type the element implements [`Pow`] for, e.g.
/// `f64` by `f64` or `i32`, and integers by `u32`.
pub fn pow<O, T, E>(v: &OrientedVec<O, T>, exponent: E) -> OrientedVec<O, T>
where
    O: Orientation,
    T: Element + Pow<E, Output = T>,
    E: Copy,
{
    v.apply(|x| x.pow(exponent))
}

pub fn powi<O: Orientation, T: Element + Float>(v: &OrientedVec<O, T>, n: i32) -> OrientedVec<O, T> {
    v.apply(|x| x.powi(n))
}

pub fn sqrt<O: Orientation, T: Element + Float>(v: &OrientedVec<O, T>) -> OrientedVec<O, T> {
    v.apply(|x| x.sqrt())
}

pub fn exp<O: Orientation, T: Element + Float>(v: &OrientedVec<O, T>) -> OrientedVec<O, T> {
    v.apply(|x| x.exp())
}

/// Natural logarithm.
pub fn log<O: Orientation, T: Element + Float>(v: &OrientedVec<O, T>) -> OrientedVec<O, T> {
    v.apply(|x| x.ln())
}

pub fn log10<O: Orientation, T: Element + Float>(v: &OrientedVec<O, T>) -> OrientedVec<O, T> {
    v.apply(|x| x.log10())
}

pub fn ceil<O: Orientation, T: Element + Float>(v: &OrientedVec<O, T>) -> OrientedVec<O, T> {
    v.apply(|x| x.ceil())
}

pub fn floor<O: Orientation, T: Element + Float>(v: &OrientedVec<O, T>) -> OrientedVec<O, T> {
    v.apply(|x| x.floor())
}

/// Rounds half away from zero.
pub fn round<O: Orientation, T: Element + Float>(v: &OrientedVec<O, T>) -> OrientedVec<O, T> {
    v.apply(|x| x.round())
}
