//! The oriented vector container.
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};
use std::vec::IntoIter;

use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};

use crate::element::{Arithmetic, Element};
use crate::orientation::{Column, Orientation, OrientationKind, Row};

/// A dense, fixed-length vector whose orientation `O` is part of its type.
///
/// Every operator returns a fresh vector; the only in-place mutation path is
/// element access through [`IndexMut`] / [`OrientedVec::get_mut`].
///
/// ```
/// use orivec::{ColVec, RowVec};
///
/// let r = RowVec::from_vec(vec![0.0_f64, 1.0, 2.0, 3.0, 4.0]);
/// let c: ColVec<f64> = r.transpose();
/// assert_eq!(&r * &c, 30.0);
/// ```
///
/// Elements are restricted to [`Element`] types, so non-numeric payloads
/// are rejected at compile time:
///
/// ```compile_fail
/// use orivec::RowVec;
///
/// let words = RowVec::from_vec(vec!["a".to_string(), "b".to_string()]);
/// ```
///
/// Pairing two vectors goes through the operator families; the raw
/// elementwise zipper is internal:
///
/// ```compile_fail
/// use orivec::RowVec;
///
/// let r = RowVec::from_vec(vec![1, 2, 3]);
/// let _ = r.zip_with(&r, "add", |a: i32, b: i32| a + b);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    transparent,
    bound(
        serialize = "T: Element + Serialize",
        deserialize = "T: Element + Deserialize<'de>"
    )
)]
pub struct OrientedVec<O, T> {
    data: Vec<T>,
    #[serde(skip)]
    orientation: PhantomData<O>,
}

pub type RowVec<T> = OrientedVec<Row, T>;
pub type ColVec<T> = OrientedVec<Column, T>;

impl<O: Orientation, T: Element> OrientedVec<O, T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            data,
            orientation: PhantomData,
        }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self::new(data)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn orientation(&self) -> OrientationKind {
        O::KIND
    }

    /// `(1, n)` for a row vector, `(n, 1)` for a column vector.
    pub fn shape(&self) -> (usize, usize) {
        match O::KIND {
            OrientationKind::Row => (1, self.len()),
            OrientationKind::Column => (self.len(), 1),
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }

    /// Copies the elements into a vector of the opposite orientation.
    pub fn transpose(&self) -> OrientedVec<O::Transposed, T> {
        OrientedVec::new(self.data.clone())
    }

    /// Retags the vector with the opposite orientation without copying.
    pub fn into_transposed(self) -> OrientedVec<O::Transposed, T> {
        OrientedVec::new(self.data)
    }

    /// Gathers the elements at `indices`, in the order given.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range.
    pub fn select(&self, indices: &[usize]) -> OrientedVec<O, T> {
        let mut selected = Vec::with_capacity(indices.len());
        for &idx in indices {
            selected.push(self.data[idx]);
        }
        OrientedVec::new(selected)
    }

    /// Keeps the elements whose mask entry is `true`, preserving order.
    ///
    /// # Panics
    ///
    /// Panics if the mask length differs from the vector length.
    pub fn masked_select(&self, mask: &OrientedVec<O, bool>) -> OrientedVec<O, T> {
        assert_eq!(
            self.len(),
            mask.len(),
            "Masked selection requires a mask of equal length"
        );
        self.data
            .iter()
            .zip(mask.iter())
            .filter(|(_, keep)| **keep)
            .map(|(&value, _)| value)
            .collect()
    }

    /// Applies `f` to each element once, in index order.
    pub fn apply<U, F>(&self, mut f: F) -> OrientedVec<O, U>
    where
        U: Element,
        F: FnMut(T) -> U,
    {
        OrientedVec::new(self.data.iter().map(|&v| f(v)).collect())
    }

    /// Pairs elements of two equal-length vectors through `f`.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ; `op` names the operation in the message.
    pub(crate) fn zip_with<U, R, F>(
        &self,
        rhs: &OrientedVec<O, U>,
        op: &str,
        mut f: F,
    ) -> OrientedVec<O, R>
    where
        U: Element,
        R: Element,
        F: FnMut(T, U) -> R,
    {
        assert_eq!(
            self.len(),
            rhs.len(),
            "Elementwise {} requires vectors of equal length",
            op
        );
        OrientedVec::new(
            self.data
                .iter()
                .zip(rhs.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        )
    }

    /// Explicit element type conversion (`as` semantics).
    pub fn cast<U>(&self) -> OrientedVec<O, U>
    where
        T: AsPrimitive<U>,
        U: Element,
    {
        self.apply(|v| v.as_())
    }

    pub fn from_slice(data: &[T]) -> Self {
        Self::new(data.to_vec())
    }

    /// `len` copies of `value`.
    pub fn from_elem(len: usize, value: T) -> Self {
        Self::new(vec![value; len])
    }
}

impl<O: Orientation, T: Arithmetic> OrientedVec<O, T> {
    pub fn zeros(len: usize) -> Self {
        Self::from_elem(len, T::zero())
    }

    pub fn ones(len: usize) -> Self {
        Self::from_elem(len, T::one())
    }

    /// # Panics
    ///
    /// Integer overflow follows the build profile: it panics with debug
    /// assertions enabled and wraps otherwise.
    pub fn sum(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &v| acc + v)
    }

    pub fn mean(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        let total = self.data.iter().map(|v| v.to_f64()).sum::<Option<f64>>()?;
        Some(total / self.len() as f64)
    }

    /// Sum of elementwise products with a vector of the opposite orientation.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ. Integer overflow behaves as in
    /// [`sum`](Self::sum).
    ///
    /// Two vectors of the same orientation have no dot product:
    ///
    /// ```compile_fail
    /// use orivec::RowVec;
    ///
    /// let r = RowVec::from_vec(vec![1, 2, 3]);
    /// let _ = r.dot(&r);
    /// ```
    pub fn dot(&self, other: &OrientedVec<O::Transposed, T>) -> T {
        assert_eq!(
            self.len(),
            other.len(),
            "Dot product requires equal length vectors"
        );
        self.data
            .iter()
            .zip(other.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Greatest element, `None` when empty. NaN entries only win when first.
    pub fn try_max(&self) -> Option<T> {
        let mut values = self.data.iter().copied();
        let first = values.next()?;
        Some(values.fold(first, |acc, v| if v > acc { v } else { acc }))
    }

    pub fn try_min(&self) -> Option<T> {
        let mut values = self.data.iter().copied();
        let first = values.next()?;
        Some(values.fold(first, |acc, v| if v < acc { v } else { acc }))
    }

    /// # Panics
    ///
    /// Panics on an empty vector.
    pub fn max(&self) -> T {
        self.try_max()
            .unwrap_or_else(|| panic!("max() called on an empty vector"))
    }

    /// # Panics
    ///
    /// Panics on an empty vector.
    pub fn min(&self) -> T {
        self.try_min()
            .unwrap_or_else(|| panic!("min() called on an empty vector"))
    }
}

impl<O: Orientation> OrientedVec<O, bool> {
    pub fn count_true(&self) -> usize {
        self.data.iter().filter(|&&b| b).count()
    }

    pub fn true_indices(&self) -> Vec<usize> {
        self.data
            .iter()
            .enumerate()
            .filter_map(|(idx, &b)| if b { Some(idx) } else { None })
            .collect()
    }

    pub fn any(&self) -> bool {
        self.data.iter().any(|&b| b)
    }

    pub fn all(&self) -> bool {
        self.data.iter().all(|&b| b)
    }
}

impl<O: Orientation, T: Element> From<Vec<T>> for OrientedVec<O, T> {
    fn from(value: Vec<T>) -> Self {
        OrientedVec::new(value)
    }
}

impl<O: Orientation, T> From<OrientedVec<O, T>> for Vec<T> {
    fn from(value: OrientedVec<O, T>) -> Self {
        value.data
    }
}

// Opposite-orientation copy construction.

impl<T: Element> From<ColVec<T>> for RowVec<T> {
    fn from(value: ColVec<T>) -> Self {
        value.into_transposed()
    }
}

impl<T: Element> From<RowVec<T>> for ColVec<T> {
    fn from(value: RowVec<T>) -> Self {
        value.into_transposed()
    }
}

impl<T: Element> From<&ColVec<T>> for RowVec<T> {
    fn from(value: &ColVec<T>) -> Self {
        value.transpose()
    }
}

impl<T: Element> From<&RowVec<T>> for ColVec<T> {
    fn from(value: &RowVec<T>) -> Self {
        value.transpose()
    }
}

impl<O: Orientation, T: Element> FromIterator<T> for OrientedVec<O, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        OrientedVec::new(iter.into_iter().collect())
    }
}

impl<O: Orientation, T> IntoIterator for OrientedVec<O, T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, O: Orientation, T> IntoIterator for &'a OrientedVec<O, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<O: Orientation, T> Index<usize> for OrientedVec<O, T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<O: Orientation, T> IndexMut<usize> for OrientedVec<O, T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}
