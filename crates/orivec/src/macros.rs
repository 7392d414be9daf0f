/// Builds a [`RowVec`](crate::RowVec) like `vec!`.
///
/// ```
/// let r = orivec::rvec![1, 2, 3];
/// assert_eq!(r.to_string(), "[1, 2, 3]");
/// let z = orivec::rvec![0.5; 2];
/// assert_eq!(z.len(), 2);
/// ```
#[macro_export]
macro_rules! rvec {
    () => {
        $crate::RowVec::from_vec(::std::vec::Vec::new())
    };
    ($value:expr; $len:expr) => {
        $crate::RowVec::from_elem($len, $value)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::RowVec::from_vec(::std::vec![$($x),+])
    };
}

/// Builds a [`ColVec`](crate::ColVec) like `vec!`.
#[macro_export]
macro_rules! cvec {
    () => {
        $crate::ColVec::from_vec(::std::vec::Vec::new())
    };
    ($value:expr; $len:expr) => {
        $crate::ColVec::from_elem($len, $value)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::ColVec::from_vec(::std::vec![$($x),+])
    };
}
