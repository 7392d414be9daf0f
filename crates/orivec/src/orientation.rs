//! Type-level orientation tags.
//!
//! A vector's orientation is part of its type: `OrientedVec<Row, T>` and
//! `OrientedVec<Column, T>` are distinct types and only meet through an
//! explicit transpose or `From` conversion.
use std::fmt;
use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Row {}
    impl Sealed for super::Column {}
}

/// Runtime view of an orientation tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrientationKind {
    Row,
    Column,
}

impl OrientationKind {
    pub fn transposed(self) -> Self {
        match self {
            OrientationKind::Row => OrientationKind::Column,
            OrientationKind::Column => OrientationKind::Row,
        }
    }
}

impl fmt::Display for OrientationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrientationKind::Row => write!(f, "row"),
            OrientationKind::Column => write!(f, "column"),
        }
    }
}

/// Marker trait implemented by [`Row`] and [`Column`] only.
pub trait Orientation:
    sealed::Sealed + Copy + Clone + Debug + Default + PartialEq + Eq + Hash + 'static
{
    /// The co-orientation.
    type Transposed: Orientation<Transposed = Self>;

    const KIND: OrientationKind;
}

/// Row orientation tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Row;

/// Column orientation tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Column;

impl Orientation for Row {
    type Transposed = Column;
    const KIND: OrientationKind = OrientationKind::Row;
}

impl Orientation for Column {
    type Transposed = Row;
    const KIND: OrientationKind = OrientationKind::Column;
}
