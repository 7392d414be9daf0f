use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::element::Arithmetic;
use crate::orientation::Orientation;
use crate::vector::{ColVec, OrientedVec, RowVec};

macro_rules! impl_arith_op {
    ($trait:ident, $method:ident, $op:tt, $name:literal) => {
        impl<'a, 'b, O: Orientation, T: Arithmetic> $trait<&'b OrientedVec<O, T>>
            for &'a OrientedVec<O, T>
        {
            type Output = OrientedVec<O, T>;

            fn $method(self, rhs: &'b OrientedVec<O, T>) -> Self::Output {
                self.zip_with(rhs, $name, |a, b| a $op b)
            }
        }

        impl<'b, O: Orientation, T: Arithmetic> $trait<&'b OrientedVec<O, T>> for OrientedVec<O, T> {
            type Output = OrientedVec<O, T>;

            fn $method(self, rhs: &'b OrientedVec<O, T>) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl<'a, O: Orientation, T: Arithmetic> $trait<OrientedVec<O, T>> for &'a OrientedVec<O, T> {
            type Output = OrientedVec<O, T>;

            fn $method(self, rhs: OrientedVec<O, T>) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl<O: Orientation, T: Arithmetic> $trait<OrientedVec<O, T>> for OrientedVec<O, T> {
            type Output = OrientedVec<O, T>;

            fn $method(self, rhs: OrientedVec<O, T>) -> Self::Output {
                (&self).$method(&rhs)
            }
        }

        impl<'a, O: Orientation, T: Arithmetic> $trait<T> for &'a OrientedVec<O, T> {
            type Output = OrientedVec<O, T>;

            fn $method(self, rhs: T) -> Self::Output {
                self.apply(|a| a $op rhs)
            }
        }

        impl<O: Orientation, T: Arithmetic> $trait<T> for OrientedVec<O, T> {
            type Output = OrientedVec<O, T>;

            fn $method(self, rhs: T) -> Self::Output {
                (&self).$method(rhs)
            }
        }
    };
}

impl_arith_op!(Add, add, +, "add");
impl_arith_op!(Sub, sub, -, "sub");
impl_arith_op!(Mul, mul, *, "mul");
impl_arith_op!(Div, div, /, "div");

// The scalar sits on the left of every element: `s - v` is `s - v[i]`.
macro_rules! impl_scalar_lhs_op {
    ($t:ty, $trait:ident, $method:ident, $op:tt) => {
        impl<'a, O: Orientation> $trait<&'a OrientedVec<O, $t>> for $t {
            type Output = OrientedVec<O, $t>;

            fn $method(self, rhs: &'a OrientedVec<O, $t>) -> Self::Output {
                rhs.apply(|v| self $op v)
            }
        }

        impl<O: Orientation> $trait<OrientedVec<O, $t>> for $t {
            type Output = OrientedVec<O, $t>;

            fn $method(self, rhs: OrientedVec<O, $t>) -> Self::Output {
                self.$method(&rhs)
            }
        }
    };
}

macro_rules! impl_scalar_lhs {
    ($($t:ty),* $(,)?) => {
        $(
            impl_scalar_lhs_op!($t, Add, add, +);
            impl_scalar_lhs_op!($t, Sub, sub, -);
            impl_scalar_lhs_op!($t, Mul, mul, *);
            impl_scalar_lhs_op!($t, Div, div, /);
        )*
    };
}

impl_scalar_lhs!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

// Row * Column is the dot product; same-orientation `*` above is Hadamard.

impl<'a, 'b, T: Arithmetic> Mul<&'b ColVec<T>> for &'a RowVec<T> {
    type Output = T;

    fn mul(self, rhs: &'b ColVec<T>) -> T {
        self.dot(rhs)
    }
}

impl<'b, T: Arithmetic> Mul<&'b ColVec<T>> for RowVec<T> {
    type Output = T;

    fn mul(self, rhs: &'b ColVec<T>) -> T {
        self.dot(rhs)
    }
}

impl<'a, T: Arithmetic> Mul<ColVec<T>> for &'a RowVec<T> {
    type Output = T;

    fn mul(self, rhs: ColVec<T>) -> T {
        self.dot(&rhs)
    }
}

impl<T: Arithmetic> Mul<ColVec<T>> for RowVec<T> {
    type Output = T;

    fn mul(self, rhs: ColVec<T>) -> T {
        self.dot(&rhs)
    }
}

impl<'a, O: Orientation, T: Arithmetic + Neg<Output = T>> Neg for &'a OrientedVec<O, T> {
    type Output = OrientedVec<O, T>;

    fn neg(self) -> Self::Output {
        self.apply(|v| -v)
    }
}

impl<O: Orientation, T: Arithmetic + Neg<Output = T>> Neg for OrientedVec<O, T> {
    type Output = OrientedVec<O, T>;

    fn neg(self) -> Self::Output {
        -&self
    }
}

#[cfg(test)]
mod tests {
    use crate::vector::{ColVec, RowVec};

    #[test]
    fn chained_expression_round_trips() {
        let r = RowVec::from_vec(vec![0.0_f64, 1.0, 2.0, 3.0, 4.0]);
        let out = (((2.0 * &r) / 2.0) + 1.0) - 1.0;
        assert_eq!(out, r);
    }

    #[test]
    fn hadamard_keeps_orientation() {
        let c = ColVec::from_vec(vec![1i32, 2, 3]);
        let h = &c * &c;
        assert_eq!(h.to_vec(), vec![1, 4, 9]);
        assert_eq!(h.orientation(), c.orientation());
    }

    #[test]
    fn negation() {
        let v = RowVec::from_vec(vec![1i32, -2, 0]);
        assert_eq!((-v).to_vec(), vec![-1, 2, 0]);
    }
}
