// =========================================================================
// FALSIFY-MX: Matrix primitives contract (matriz primitives)
//
// Five-Whys:
//   Why 1: matriz had no inline FALSIFY-MX-* tests for Matrix
//   Why 2: matrix tests exist but lack contract-mapped FALSIFY naming
//   Why 3: structural editing and algebra share one invariant set
//   Why 4: the 1-indexed surface predates the FALSIFY convention
//   Why 5: Matrix algebra was "obviously correct" (basic linear algebra)
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
// =========================================================================

use super::*;

/// FALSIFY-MX-001: Transpose involution: (A^T)^T = A
#[test]
fn falsify_mx_001_transpose_involution() {
    let a = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).expect("valid");
    let att = a.transpose().transpose();

    assert_eq!(att.shape(), a.shape(), "FALSIFIED MX-001: shape mismatch");
    for i in 0..2 {
        for j in 0..3 {
            assert!(
                (att.get(i, j) - a.get(i, j)).abs() < 1e-12,
                "FALSIFIED MX-001: (A^T)^T[{i},{j}] != A[{i},{j}]"
            );
        }
    }
}

/// FALSIFY-MX-002: Transpose swaps shape: (m×n)^T = (n×m)
#[test]
fn falsify_mx_002_transpose_swaps_shape() {
    let a = Matrix::zeros(3, 5);
    let at = a.transpose();

    assert_eq!(
        at.shape(),
        (5, 3),
        "FALSIFIED MX-002: transpose shape={:?}, expected (5,3)",
        at.shape()
    );
}

/// FALSIFY-MX-003: Matmul shape: (m×k) * (k×n) = (m×n)
#[test]
fn falsify_mx_003_matmul_shape() {
    let a = Matrix::ones(2, 3);
    let b = Matrix::ones(3, 4);
    let c = a.matmul(&b).expect("compatible dims");

    assert_eq!(
        c.shape(),
        (2, 4),
        "FALSIFIED MX-003: (2x3)*(3x4) shape={:?}, expected (2,4)",
        c.shape()
    );
}

/// FALSIFY-MX-004: Identity is a two-sided multiplicative unit:
/// A * I = A and I * A = A
#[test]
fn falsify_mx_004_identity_matmul() {
    let a = Matrix::from_rows(&[
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
        vec![7.0, 8.0, 9.0],
    ])
    .expect("valid");
    let eye = Matrix::identity(3);
    let right = a.matmul(&eye).expect("compatible dims");
    let left = eye.matmul(&a).expect("compatible dims");

    for i in 0..3 {
        for j in 0..3 {
            assert!(
                (right.get(i, j) - a.get(i, j)).abs() < 1e-12,
                "FALSIFIED MX-004: (A*I)[{i},{j}]={} != A[{i},{j}]={}",
                right.get(i, j),
                a.get(i, j)
            );
            assert!(
                (left.get(i, j) - a.get(i, j)).abs() < 1e-12,
                "FALSIFIED MX-004: (I*A)[{i},{j}]={} != A[{i},{j}]={}",
                left.get(i, j),
                a.get(i, j)
            );
        }
    }
}

/// FALSIFY-MX-005: det(I_k) = 1 for every k >= 1
#[test]
fn falsify_mx_005_determinant_of_identity() {
    for k in 1..=6 {
        let det = Matrix::identity(k).determinant().expect("square");
        assert!(
            (det - 1.0).abs() < 1e-12,
            "FALSIFIED MX-005: det(I_{k})={det}, expected 1.0"
        );
    }
}

/// FALSIFY-MX-006: Swapping two rows negates the determinant
#[test]
fn falsify_mx_006_row_swap_negates_determinant() {
    let a = Matrix::from_rows(&[
        vec![2.0, 1.0, 0.0],
        vec![1.0, 3.0, 4.0],
        vec![0.0, 5.0, 6.0],
    ])
    .expect("valid");
    let swapped = Matrix::from_rows(&[
        vec![1.0, 3.0, 4.0],
        vec![2.0, 1.0, 0.0],
        vec![0.0, 5.0, 6.0],
    ])
    .expect("valid");

    let det_a = a.determinant().expect("square");
    let det_swapped = swapped.determinant().expect("square");

    assert!(
        (det_a + det_swapped).abs() < 1e-12,
        "FALSIFIED MX-006: det={det_a}, after swap={det_swapped}, expected negation"
    );
}

/// FALSIFY-MX-007: Determinant is multiplicative: det(A*B) = det(A)*det(B)
#[test]
fn falsify_mx_007_determinant_multiplicative() {
    let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).expect("valid");
    let b = Matrix::from_rows(&[vec![5.0, 6.0], vec![7.0, 8.0]]).expect("valid");

    let det_ab = a
        .matmul(&b)
        .expect("compatible")
        .determinant()
        .expect("square");
    let det_a = a.determinant().expect("square");
    let det_b = b.determinant().expect("square");

    assert!(
        (det_ab - det_a * det_b).abs() < 1e-9,
        "FALSIFIED MX-007: det(AB)={det_ab} != det(A)*det(B)={}",
        det_a * det_b
    );
}

/// FALSIFY-MX-008: Structural edits keep the storage rectangular
#[test]
fn falsify_mx_008_structural_edits_keep_shape() {
    let mut m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).expect("valid");

    m.add_row(&[5.0, 6.0]).expect("compatible");
    m.add_column(&[7.0, 8.0, 9.0]).expect("compatible");
    m.delete_row(1).expect("not the last row");
    m.delete_column(2).expect("not the last column");

    let (rows, cols) = m.shape();
    assert_eq!(
        m.as_slice().len(),
        rows * cols,
        "FALSIFIED MX-008: storage length diverged from {rows}x{cols}"
    );
    assert_eq!((rows, cols), (2, 2), "FALSIFIED MX-008: unexpected shape");
}

mod matrix_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    /// FALSIFY-MX-001-prop: Transpose involution for random matrices
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_mx_001_prop_transpose_involution(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let data: Vec<f64> = (0..rows * cols)
                .map(|i| (f64::from(i as u32 + seed) * 0.37).sin() * 10.0)
                .collect();
            let a = Matrix::from_vec(rows, cols, data).expect("valid");
            let att = a.transpose().transpose();

            prop_assert_eq!(att.shape(), a.shape(), "FALSIFIED MX-001-prop: shape mismatch");
            for i in 0..rows {
                for j in 0..cols {
                    prop_assert!(
                        (att.get(i, j) - a.get(i, j)).abs() < 1e-12,
                        "FALSIFIED MX-001-prop: (A^T)^T[{},{}] != A[{},{}]",
                        i, j, i, j
                    );
                }
            }
        }
    }

    /// FALSIFY-MX-004-prop: Identity matmul for random square matrices
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn falsify_mx_004_prop_identity_matmul(
            n in 1..=6usize,
            seed in 0..500u32,
        ) {
            let data: Vec<f64> = (0..n * n)
                .map(|i| (f64::from(i as u32 + seed) * 0.37).sin() * 10.0)
                .collect();
            let a = Matrix::from_vec(n, n, data).expect("valid");
            let eye = Matrix::identity(n);
            let result = a.matmul(&eye).expect("compatible");

            for i in 0..n {
                for j in 0..n {
                    prop_assert!(
                        (result.get(i, j) - a.get(i, j)).abs() < 1e-9,
                        "FALSIFIED MX-004-prop: (A*I)[{},{}] != A[{},{}]",
                        i, j, i, j
                    );
                }
            }
        }
    }

    /// FALSIFY-MX-006-prop: Row swap negates determinant for random 3x3
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn falsify_mx_006_prop_row_swap_negates_determinant(
            seed in 0..500u32,
            first in 0..3usize,
            second in 0..3usize,
        ) {
            prop_assume!(first != second);

            let rows: Vec<Vec<f64>> = (0..3)
                .map(|i| {
                    (0..3)
                        .map(|j| (f64::from((i * 3 + j) as u32 + seed) * 0.73).sin() * 5.0)
                        .collect()
                })
                .collect();
            let mut swapped_rows = rows.clone();
            swapped_rows.swap(first, second);

            let det = Matrix::from_rows(&rows).expect("valid").determinant().expect("square");
            let det_swapped = Matrix::from_rows(&swapped_rows)
                .expect("valid")
                .determinant()
                .expect("square");

            prop_assert!(
                (det + det_swapped).abs() < 1e-9,
                "FALSIFIED MX-006-prop: det={}, after swap={}",
                det, det_swapped
            );
        }
    }
}
