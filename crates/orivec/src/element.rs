//! Element type families.
//!
//! `Element` covers every primitive a vector may hold (booleans included, so
//! comparison results are ordinary vectors). `Arithmetic` narrows that to the
//! numeric primitives that the operator family is defined over.
use std::fmt::{Debug, Display};

use num_traits::{Num, NumCast};

pub trait Element: Copy + PartialEq + Debug + Display + Default + 'static {}

pub trait Arithmetic: Element + Num + NumCast + PartialOrd {}

macro_rules! impl_element {
    ($($t:ty),* $(,)?) => {
        $(impl Element for $t {})*
    };
}

macro_rules! impl_arithmetic {
    ($($t:ty),* $(,)?) => {
        $(impl Arithmetic for $t {})*
    };
}

impl_element!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool);
impl_arithmetic!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
