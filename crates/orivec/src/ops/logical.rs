use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::orientation::Orientation;
use crate::vector::OrientedVec;

macro_rules! impl_logical_op {
    ($trait:ident, $method:ident, $op:tt, $name:literal) => {
        impl<'a, 'b, O: Orientation> $trait<&'b OrientedVec<O, bool>> for &'a OrientedVec<O, bool> {
            type Output = OrientedVec<O, bool>;

            fn $method(self, rhs: &'b OrientedVec<O, bool>) -> Self::Output {
                self.zip_with(rhs, $name, |a, b| a $op b)
            }
        }

        impl<'b, O: Orientation> $trait<&'b OrientedVec<O, bool>> for OrientedVec<O, bool> {
            type Output = OrientedVec<O, bool>;

            fn $method(self, rhs: &'b OrientedVec<O, bool>) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl<'a, O: Orientation> $trait<OrientedVec<O, bool>> for &'a OrientedVec<O, bool> {
            type Output = OrientedVec<O, bool>;

            fn $method(self, rhs: OrientedVec<O, bool>) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl<O: Orientation> $trait<OrientedVec<O, bool>> for OrientedVec<O, bool> {
            type Output = OrientedVec<O, bool>;

            fn $method(self, rhs: OrientedVec<O, bool>) -> Self::Output {
                (&self).$method(&rhs)
            }
        }

        impl<'a, O: Orientation> $trait<bool> for &'a OrientedVec<O, bool> {
            type Output = OrientedVec<O, bool>;

            fn $method(self, rhs: bool) -> Self::Output {
                self.apply(|a| a $op rhs)
            }
        }

        impl<O: Orientation> $trait<bool> for OrientedVec<O, bool> {
            type Output = OrientedVec<O, bool>;

            fn $method(self, rhs: bool) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl<'b, O: Orientation> $trait<&'b OrientedVec<O, bool>> for bool {
            type Output = OrientedVec<O, bool>;

            fn $method(self, rhs: &'b OrientedVec<O, bool>) -> Self::Output {
                rhs.apply(|b| self $op b)
            }
        }

        impl<O: Orientation> $trait<OrientedVec<O, bool>> for bool {
            type Output = OrientedVec<O, bool>;

            fn $method(self, rhs: OrientedVec<O, bool>) -> Self::Output {
                self.$method(&rhs)
            }
        }
    };
}

impl_logical_op!(BitAnd, bitand, &&, "logical and");
impl_logical_op!(BitOr, bitor, ||, "logical or");
impl_logical_op!(BitXor, bitxor, ^, "logical xor");

impl<'a, O: Orientation> Not for &'a OrientedVec<O, bool> {
    type Output = OrientedVec<O, bool>;

    fn not(self) -> Self::Output {
        self.apply(|b| !b)
    }
}

impl<O: Orientation> Not for OrientedVec<O, bool> {
    type Output = OrientedVec<O, bool>;

    fn not(self) -> Self::Output {
        !&self
    }
}
