//! orivec: row and column vectors over numeric element types.
//!
//! Orientation is a type parameter, so `RowVec<T>` and `ColVec<T>` never mix
//! by accident. Arithmetic, comparison and logical operators work elementwise
//! against scalars or equal-length vectors of the same orientation; the one
//! exception is `RowVec * ColVec`, which is the dot product. Comparisons give
//! boolean vectors that feed [`OrientedVec::masked_select`].
//!
//! Length mismatches between vector operands are programming errors and
//! panic. The only recoverable error is parsing text back into a vector.
//!
//! ```
//! use orivec::{functions, rvec, cvec};
//!
//! let r = rvec![0.0_f64, 1.0, 2.0, 3.0, 4.0];
//! let c = cvec![0.0_f64, 1.0, 2.0, 3.0, 4.0];
//! assert_eq!(&r * &c, 30.0);
//! assert_eq!(format!("{}", 3.0 / &r.select(&[1, 2])), "[3, 1.5]");
//! assert_eq!(functions::sqrt(&rvec![0.0_f64, 4.0]).to_vec(), vec![0.0, 2.0]);
//! ```
mod macros;

pub mod element;
pub mod error;
mod format;
pub mod functions;
pub mod ops;
pub mod orientation;
pub mod vector;

pub use element::{Arithmetic, Element};
pub use error::ParseVecError;
pub use ops::ElementwiseCmp;
pub use orientation::{Column, Orientation, OrientationKind, Row};
pub use vector::{ColVec, OrientedVec, RowVec};
