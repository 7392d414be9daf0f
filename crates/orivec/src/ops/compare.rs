use crate::element::Arithmetic;
use crate::orientation::Orientation;
use crate::vector::OrientedVec;

/// Elementwise comparisons producing boolean vectors.
///
/// Implemented for `vector ~ scalar`, `vector ~ &vector` and, for every
/// numeric primitive, `scalar ~ &vector`. The result always carries the
/// orientation of the vector operand(s).
///
/// ```
/// use orivec::{ElementwiseCmp, RowVec};
///
/// let v = RowVec::from_vec(vec![0, 1, 2, 3, 4]);
/// let mask = &v.greater(1) & &v.less(4);
/// assert_eq!(v.masked_select(&mask).to_vec(), vec![2, 3]);
/// ```
pub trait ElementwiseCmp<Rhs> {
    type Elem: Arithmetic;
    type Output;

    /// Evaluates `f(lhs[i], rhs[i])` for every position.
    fn compare_with<F>(&self, rhs: Rhs, f: F) -> Self::Output
    where
        F: Fn(Self::Elem, Self::Elem) -> bool;

    fn greater(&self, rhs: Rhs) -> Self::Output {
        self.compare_with(rhs, |a, b| a > b)
    }

    fn greater_equal(&self, rhs: Rhs) -> Self::Output {
        self.compare_with(rhs, |a, b| a >= b)
    }

    fn less(&self, rhs: Rhs) -> Self::Output {
        self.compare_with(rhs, |a, b| a < b)
    }

    fn less_equal(&self, rhs: Rhs) -> Self::Output {
        self.compare_with(rhs, |a, b| a <= b)
    }

    fn equal(&self, rhs: Rhs) -> Self::Output {
        self.compare_with(rhs, |a, b| a == b)
    }

    fn not_equal(&self, rhs: Rhs) -> Self::Output {
        self.compare_with(rhs, |a, b| a != b)
    }
}

impl<O: Orientation, T: Arithmetic> ElementwiseCmp<T> for OrientedVec<O, T> {
    type Elem = T;
    type Output = OrientedVec<O, bool>;

    fn compare_with<F>(&self, rhs: T, f: F) -> Self::Output
    where
        F: Fn(T, T) -> bool,
    {
        self.apply(|a| f(a, rhs))
    }
}

impl<'b, O: Orientation, T: Arithmetic> ElementwiseCmp<&'b OrientedVec<O, T>> for OrientedVec<O, T> {
    type Elem = T;
    type Output = OrientedVec<O, bool>;

    fn compare_with<F>(&self, rhs: &'b OrientedVec<O, T>, f: F) -> Self::Output
    where
        F: Fn(T, T) -> bool,
    {
        self.zip_with(rhs, "comparison", f)
    }
}

macro_rules! impl_scalar_lhs_cmp {
    ($($t:ty),* $(,)?) => {
        $(
            impl<'b, O: Orientation> ElementwiseCmp<&'b OrientedVec<O, $t>> for $t {
                type Elem = $t;
                type Output = OrientedVec<O, bool>;

                fn compare_with<F>(&self, rhs: &'b OrientedVec<O, $t>, f: F) -> Self::Output
                where
                    F: Fn($t, $t) -> bool,
                {
                    let lhs = *self;
                    rhs.apply(|b| f(lhs, b))
                }
            }
        )*
    };
}

impl_scalar_lhs_cmp!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::ElementwiseCmp;
    use crate::vector::RowVec;

    #[test]
    fn scalar_left_mirrors_vector_left() {
        let v = RowVec::from_vec(vec![1.0_f64, 2.0, 3.0]);
        assert_eq!(2.0_f64.greater(&v), v.less(2.0));
        assert_eq!(2.0_f64.less_equal(&v), v.greater_equal(2.0));
    }
}
