//! Property-based tests using proptest.
//!
//! These tests verify invariants and properties of the matrix and vector
//! primitives through the public API.

use matriz::prelude::*;
use proptest::prelude::*;

// Strategy for generating matrices with finite elements
fn matrix_strategy(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<f64>> {
    proptest::collection::vec(-100.0f64..100.0, rows * cols).prop_map(move |data| {
        Matrix::from_vec(rows, cols, data).expect("Test data should be valid")
    })
}

// Smaller elements keep cofactor determinants well inside f64 range
fn small_square_strategy(n: usize) -> impl Strategy<Value = Matrix<f64>> {
    proptest::collection::vec(-10.0f64..10.0, n * n)
        .prop_map(move |data| Matrix::from_vec(n, n, data).expect("Test data should be valid"))
}

// Strategy for generating vectors
fn vector_strategy(len: usize) -> impl Strategy<Value = Vector<f64>> {
    proptest::collection::vec(-100.0f64..100.0, len).prop_map(Vector::from_vec)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Transpose properties

    #[test]
    fn transpose_involution(m in matrix_strategy(3, 4)) {
        let round_trip = m.transpose().transpose();
        prop_assert_eq!(round_trip, m);
    }

    #[test]
    fn transpose_swaps_shape(m in matrix_strategy(2, 5)) {
        prop_assert_eq!(m.transpose().shape(), (5, 2));
    }

    // Multiplication properties

    #[test]
    fn matmul_identity_is_neutral(m in matrix_strategy(4, 4)) {
        let eye = Matrix::identity(4);
        let right = m.matmul(&eye).expect("compatible");
        let left = eye.matmul(&m).expect("compatible");
        for i in 0..4 {
            for j in 0..4 {
                prop_assert!((right.get(i, j) - m.get(i, j)).abs() < 1e-9);
                prop_assert!((left.get(i, j) - m.get(i, j)).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn matvec_matches_matmul_by_column(m in matrix_strategy(3, 4), v in vector_strategy(4)) {
        let as_column = Matrix::from_vec(4, 1, v.as_slice().to_vec()).expect("valid");
        let product = m.matmul(&as_column).expect("compatible");
        let direct = m.matvec(&v).expect("compatible");
        for i in 0..3 {
            prop_assert!((product.get(i, 0) - direct[i]).abs() < 1e-9);
        }
    }

    // Addition properties

    #[test]
    fn add_is_commutative(a in matrix_strategy(3, 3), b in matrix_strategy(3, 3)) {
        let ab = a.add(&b).expect("same shape");
        let ba = b.add(&a).expect("same shape");
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn sub_self_is_zero(m in matrix_strategy(2, 4)) {
        let zero = m.sub(&m).expect("same shape");
        prop_assert!(zero.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn scalar_ops_scale_the_sum(m in matrix_strategy(3, 3), k in -10.0f64..10.0) {
        let total: f64 = m.as_slice().iter().sum();
        let scaled: f64 = m.mul_scalar(k).as_slice().iter().sum();
        prop_assert!((scaled - total * k).abs() < 1e-6);

        let shifted: f64 = m.add_scalar(k).as_slice().iter().sum();
        prop_assert!((shifted - (total + 9.0 * k)).abs() < 1e-6);
    }

    // Determinant properties

    #[test]
    fn determinant_of_identity_is_one(n in 1..=5usize) {
        let det = Matrix::identity(n).determinant().expect("square");
        prop_assert!((det - 1.0).abs() < 1e-12);
    }

    #[test]
    fn determinant_scales_by_cube_for_3x3(m in small_square_strategy(3), k in -3.0f64..3.0) {
        let det = m.determinant().expect("square");
        let det_scaled = m.mul_scalar(k).determinant().expect("square");
        prop_assert!((det_scaled - k.powi(3) * det).abs() < 1e-6);
    }

    #[test]
    fn determinant_of_transpose_is_unchanged(m in small_square_strategy(3)) {
        let det = m.determinant().expect("square");
        let det_t = m.transpose().determinant().expect("square");
        prop_assert!((det - det_t).abs() < 1e-6);
    }

    // Structural properties

    #[test]
    fn add_then_delete_row_restores(
        m in matrix_strategy(3, 4),
        row in proptest::collection::vec(-100.0f64..100.0, 4),
    ) {
        let mut edited = m.clone();
        edited.add_row(&row).expect("length matches");
        prop_assert_eq!(edited.shape(), (4, 4));
        edited.delete_row(4).expect("not the last row");
        prop_assert_eq!(edited, m);
    }

    #[test]
    fn add_then_delete_column_restores(
        m in matrix_strategy(4, 3),
        column in proptest::collection::vec(-100.0f64..100.0, 4),
    ) {
        let mut edited = m.clone();
        edited.add_column(&column).expect("length matches");
        prop_assert_eq!(edited.shape(), (4, 4));
        edited.delete_column(4).expect("not the last column");
        prop_assert_eq!(edited, m);
    }

    #[test]
    fn storage_stays_rectangular(
        m in matrix_strategy(3, 3),
        row in proptest::collection::vec(-100.0f64..100.0, 3),
    ) {
        let mut edited = m.clone();
        edited.add_row(&row).expect("length matches");
        edited.delete_column(2).expect("not the last column");
        let (rows, cols) = edited.shape();
        prop_assert_eq!(edited.as_slice().len(), rows * cols);
    }

    // Indexing properties

    #[test]
    fn one_indexed_value_matches_get(m in matrix_strategy(3, 4)) {
        for i in 0..3 {
            for j in 0..4 {
                let checked = m.value(i + 1, j + 1).expect("in bounds");
                prop_assert!((checked - m.get(i, j)).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn out_of_bounds_value_fails(m in matrix_strategy(2, 2)) {
        prop_assert!(m.value(0, 1).is_err());
        prop_assert!(m.value(1, 0).is_err());
        prop_assert!(m.value(3, 1).is_err());
        prop_assert!(m.value(1, 3).is_err());
    }

    // Rendering properties

    #[test]
    fn display_is_a_rectangular_grid(m in matrix_strategy(3, 4)) {
        let rendered = m.to_string();
        let lines: Vec<&str> = rendered.split('\n').collect();
        prop_assert_eq!(lines.len(), 3);

        let width = lines[0].len();
        for line in &lines {
            prop_assert_eq!(line.len(), width);
            prop_assert_eq!(line.split_whitespace().count(), 4);
        }
        prop_assert!(!rendered.ends_with('\n'));
    }

    // Serialization properties

    #[test]
    fn serde_round_trip_preserves_matrix(m in matrix_strategy(3, 3)) {
        let json = serde_json::to_string(&m).expect("serializes");
        let back: Matrix<f64> = serde_json::from_str(&json).expect("deserializes");
        prop_assert_eq!(back, m);
    }
}
