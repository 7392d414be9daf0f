//! Integration tests for building, accessing and transposing vectors.

use orivec::{cvec, rvec, ColVec, OrientationKind, RowVec};

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn from_vec_and_len() {
    let r = RowVec::from_vec(vec![1.0f32, 2.0, 3.0]);
    assert_eq!(r.len(), 3);
    assert!(!r.is_empty());
    assert_eq!(r.orientation(), OrientationKind::Row);
}

#[test]
fn from_elem_fills() {
    let c = ColVec::from_elem(4, 7u8);
    assert_eq!(c.to_vec(), vec![7, 7, 7, 7]);
}

#[test]
fn zeros_and_ones() {
    let z: RowVec<i64> = RowVec::zeros(3);
    let o: ColVec<f64> = ColVec::ones(2);
    assert_eq!(z.to_vec(), vec![0, 0, 0]);
    assert_eq!(o.to_vec(), vec![1.0, 1.0]);
}

#[test]
fn macros_match_constructors() {
    assert_eq!(rvec![1, 2, 3], RowVec::from_vec(vec![1, 2, 3]));
    assert_eq!(cvec![0.5; 3], ColVec::from_elem(3, 0.5));
    let empty: RowVec<i32> = rvec![];
    assert!(empty.is_empty());
}

#[test]
fn collect_from_iterator() {
    let r: RowVec<u32> = (1..=4).collect();
    assert_eq!(r.as_slice(), &[1, 2, 3, 4]);
}

#[test]
fn clone_is_independent() {
    let a = rvec![1, 2, 3];
    let mut b = a.clone();
    b[0] = 100;
    assert_eq!(a[0], 1);
    assert_eq!(b[0], 100);
}

#[test]
fn opposite_orientation_copy_construct() {
    let c = cvec![1, 2, 3];
    let r = RowVec::from(&c);
    assert_eq!(r.to_vec(), c.to_vec());
    assert_eq!(r.orientation(), OrientationKind::Row);

    let back: ColVec<i32> = r.into();
    assert_eq!(back, c);
}

// ---------------------------------------------------------------------------
// Access
// ---------------------------------------------------------------------------

#[test]
fn index_write_patches_single_element() {
    let mut r = rvec![1.0, 2.0, 3.0];
    r[1] = 9.0;
    assert_eq!(r.to_vec(), vec![1.0, 9.0, 3.0]);
}

#[test]
fn checked_access() {
    let mut c = cvec![5, 6];
    assert_eq!(c.get(1), Some(&6));
    assert_eq!(c.get(2), None);
    if let Some(v) = c.get_mut(0) {
        *v = 50;
    }
    assert_eq!(c[0], 50);
}

#[test]
#[should_panic]
fn index_out_of_range_panics() {
    let r = rvec![1, 2, 3];
    let _ = r[3];
}

// ---------------------------------------------------------------------------
// Transpose
// ---------------------------------------------------------------------------

#[test]
fn double_transpose_restores() {
    let r = rvec![0.0, 1.1, 2.2];
    let c = r.transpose();
    assert_eq!(c.orientation(), OrientationKind::Column);
    let rr = c.transpose();
    assert_eq!(rr, r);
}

#[test]
fn transpose_copies_data() {
    let r = rvec![1, 2, 3];
    let mut c = r.transpose();
    c[0] = -1;
    assert_eq!(r[0], 1);
}

// ---------------------------------------------------------------------------
// Reductions and selection
// ---------------------------------------------------------------------------

#[test]
fn max_min_sum_mean() {
    let r = rvec![3, -1, 7, 2];
    assert_eq!(r.max(), 7);
    assert_eq!(r.min(), -1);
    assert_eq!(r.sum(), 11);
    assert_eq!(r.mean(), Some(2.75));
}

#[test]
#[should_panic(expected = "empty vector")]
fn min_on_empty_panics() {
    let r: ColVec<u8> = cvec![];
    let _ = r.min();
}

#[test]
fn masked_select_keeps_true_positions_in_order() {
    let r = rvec![0, 1, 2, 3, 4];
    let mask = rvec![false, true, true, true, false];
    let picked = r.masked_select(&mask);
    assert_eq!(picked.to_vec(), vec![1, 2, 3]);
    assert_eq!(picked.len(), mask.count_true());
}

#[test]
fn masked_select_all_false_is_empty() {
    let c = cvec![1.0, 2.0];
    let picked = c.masked_select(&cvec![false, false]);
    assert!(picked.is_empty());
}

#[test]
#[should_panic(expected = "equal length")]
fn masked_select_length_mismatch_panics() {
    let r = rvec![0, 1, 2, 3, 4];
    let mask = rvec![false, true, true, true];
    let _ = r.masked_select(&mask);
}

#[test]
fn select_by_indices() {
    let r = rvec![10, 20, 30, 40, 50];
    assert_eq!(r.select(&[0, 2, 4]).to_vec(), vec![10, 30, 50]);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn select_out_of_range_panics() {
    let r = rvec![10, 20, 30];
    let _ = r.select(&[0, 3]);
}

#[test]
fn boolean_helpers() {
    let m = rvec![true, false, true];
    assert_eq!(m.true_indices(), vec![0, 2]);
    assert!(m.any());
    assert!(!m.all());
}

#[test]
fn serializes_as_plain_sequence() {
    let r = rvec![1, 2, 3];
    let json = serde_json::to_string(&r).unwrap();
    assert_eq!(json, "[1,2,3]");
    let c: ColVec<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(c.to_vec(), r.to_vec());
}
