use qwalk::core::matrix::{self, ComplexMatrix};
use qwalk::core::vector;
use qwalk::{Complex, MathError};

fn c(re: f64, im: f64) -> Complex {
    Complex::new(re, im)
}

fn m(rows: &[Vec<(f64, f64)>]) -> ComplexMatrix {
    ComplexMatrix::from_pairs(rows).expect("rectangular")
}

fn pauli_y() -> ComplexMatrix {
    m(&[
        vec![(0.0, 0.0), (0.0, -1.0)],
        vec![(0.0, 1.0), (0.0, 0.0)],
    ])
}

#[test]
fn vector_sum_and_mismatch() {
    let v1 = [c(1.0, 2.0), c(0.0, -1.0)];
    let v2 = [c(3.0, 0.0), c(1.0, 1.0)];
    assert_eq!(vector::add(&v1, &v2).unwrap(), vec![c(4.0, 2.0), c(1.0, 0.0)]);

    let err = vector::add(&v1, &[c(1.0, 0.0)]).unwrap_err();
    assert_eq!(err, MathError::VectorLengthMismatch { left: 2, right: 1 });
}

#[test]
fn scalar_multiple_and_inverse() {
    let v = [c(1.0, 1.0), c(2.0, 0.0)];
    assert_eq!(
        vector::scalar_multiply(c(0.0, 1.0), &v),
        vec![c(-1.0, 1.0), c(0.0, 2.0)]
    );
    assert_eq!(vector::additive_inverse(&v), vec![c(-1.0, -1.0), c(-2.0, 0.0)]);
}

#[test]
fn norm_of_integer_ket() {
    let v = [c(-3.0, -1.0), c(0.0, -2.0), c(0.0, 1.0), c(2.0, 0.0)];
    assert_eq!(vector::norm(&v), 19f64.sqrt());
    assert_eq!(vector::norm(&[]), 0.0);
}

#[test]
fn normalize_gives_unit_vector() {
    let v = [c(3.0, 4.0), c(0.0, -1.0), c(2.0, 2.0)];
    let unit = vector::normalize(&v).unwrap();
    assert!((vector::norm(&unit) - 1.0).abs() < 1e-12);

    let err = vector::normalize(&[Complex::ZERO, Complex::ZERO]).unwrap_err();
    assert_eq!(err, MathError::DivisionByZero);
}

#[test]
fn inner_product_conjugates_first_argument() {
    let i = [c(0.0, 1.0)];
    let one = [c(1.0, 0.0)];
    assert_eq!(vector::inner_product(&i, &i).unwrap(), c(1.0, 0.0));
    assert_eq!(vector::inner_product(&i, &one).unwrap(), c(0.0, -1.0));
    assert_eq!(vector::inner_product(&one, &i).unwrap(), c(0.0, 1.0));
    assert!(vector::inner_product(&i, &[]).is_err());
}

#[test]
fn distance_between_vectors() {
    let v1 = [c(3.0, 0.0), c(0.0, 0.0)];
    let v2 = [c(0.0, 0.0), c(4.0, 0.0)];
    assert_eq!(vector::distance(&v1, &v2).unwrap(), 5.0);
    assert_eq!(vector::distance(&v1, &v1).unwrap(), 0.0);

    let err = vector::distance(&v1, &[c(1.0, 0.0)]).unwrap_err();
    assert_eq!(err, MathError::VectorLengthMismatch { left: 2, right: 1 });
}

#[test]
fn basis_and_display() {
    assert_eq!(vector::basis(3, 1), vec![Complex::ZERO, Complex::ONE, Complex::ZERO]);
    assert_eq!(
        vector::display_string(&[c(1.0, 2.0), c(1.0, -2.0), c(0.0, 0.0), c(0.0, 3.5)]),
        "{1.0+2.0i,1.0-2.0i,0.0,3.5i}"
    );
}

#[test]
fn ragged_rows_rejected() {
    let err = ComplexMatrix::from_pairs(&[vec![(1.0, 0.0), (2.0, 0.0)], vec![(3.0, 0.0)]])
        .unwrap_err();
    assert_eq!(
        err,
        MathError::RaggedRows {
            row: 1,
            expected: 2,
            found: 1
        }
    );

    let parsed: Result<ComplexMatrix, _> = serde_json::from_str("[[[1,0],[2,0]],[[3,0]]]");
    assert!(parsed.is_err());
}

#[test]
fn matrix_json_is_nested_pairs() {
    let parsed: ComplexMatrix = serde_json::from_str("[[[1,0],[0,-1]],[[0,1],[2,0]]]").unwrap();
    assert_eq!(parsed.shape(), (2, 2));
    assert_eq!(parsed[(0, 1)], c(0.0, -1.0));
    assert_eq!(
        serde_json::to_string(&matrix::identity(1)).unwrap(),
        "[[[1.0,0.0]]]"
    );
}

#[test]
fn matrix_sum_mismatch() {
    let a = matrix::identity(2);
    let b = ComplexMatrix::zeros(2, 3);
    let err = matrix::add(&a, &b).unwrap_err();
    assert_eq!(
        err,
        MathError::MatrixSumDimensionMismatch {
            left: (2, 2),
            right: (2, 3)
        }
    );
    assert_eq!(matrix::add(&a, &a).unwrap(), matrix::scalar_multiply(c(2.0, 0.0), &a));
}

#[test]
fn product_of_real_and_imaginary_matrices() {
    let a = m(&[vec![(1.0, 0.0), (2.0, 0.0)], vec![(3.0, 0.0), (4.0, 0.0)]]);
    let b = m(&[vec![(5.0, 0.0), (6.0, 0.0)], vec![(7.0, 0.0), (8.0, 0.0)]]);
    let expected = m(&[vec![(19.0, 0.0), (22.0, 0.0)], vec![(43.0, 0.0), (50.0, 0.0)]]);
    assert_eq!(matrix::multiply(&a, &b).unwrap(), expected);

    let i_diag = m(&[vec![(0.0, 1.0), (0.0, 0.0)], vec![(0.0, 0.0), (0.0, 1.0)]]);
    let minus_identity = m(&[vec![(-1.0, 0.0), (0.0, 0.0)], vec![(0.0, 0.0), (-1.0, 0.0)]]);
    assert_eq!(matrix::multiply(&i_diag, &i_diag).unwrap(), minus_identity);
}

#[test]
fn product_dimension_mismatch() {
    let err = matrix::multiply(&ComplexMatrix::zeros(2, 3), &ComplexMatrix::zeros(2, 3)).unwrap_err();
    assert_eq!(err, MathError::MatrixProductDimensionMismatch { cols: 3, rows: 2 });
    assert_eq!(
        matrix::multiply(&ComplexMatrix::zeros(2, 3), &ComplexMatrix::zeros(3, 4))
            .unwrap()
            .shape(),
        (2, 4)
    );
}

#[test]
fn identity_action_keeps_vector() {
    let v = vec![c(1.0, 2.0), c(-3.0, 0.5), c(0.0, -1.0)];
    assert_eq!(matrix::action(&matrix::identity(3), &v).unwrap(), v);

    let err = matrix::action(&matrix::identity(3), &v[..2]).unwrap_err();
    assert_eq!(err, MathError::MatrixProductDimensionMismatch { cols: 3, rows: 2 });
}

#[test]
fn transpose_and_adjoint() {
    let a = m(&[vec![(1.0, 1.0), (2.0, 0.0), (0.0, 3.0)]]);
    let t = matrix::transpose(&a);
    assert_eq!(t.shape(), (3, 1));
    assert_eq!(t[(2, 0)], c(0.0, 3.0));
    assert_eq!(matrix::adjoint(&a)[(0, 0)], c(1.0, -1.0));
    assert_eq!(matrix::adjoint(&matrix::adjoint(&a)), a);
}

#[test]
fn trace_including_partial() {
    assert_eq!(matrix::trace(&matrix::identity(4)), c(4.0, 0.0));
    let wide = m(&[
        vec![(1.0, 0.0), (2.0, 0.0), (3.0, 0.0)],
        vec![(4.0, 0.0), (5.0, 1.0), (6.0, 0.0)],
    ]);
    assert_eq!(matrix::trace(&wide), c(6.0, 1.0));
    assert_eq!(
        matrix::matrix_inner_product(&matrix::identity(2), &matrix::identity(2)).unwrap(),
        c(2.0, 0.0)
    );
}

#[test]
fn hermitian_checks() {
    let h = m(&[vec![(1.0, 0.0), (0.0, -1.0)], vec![(0.0, 1.0), (2.0, 0.0)]]);
    assert!(matrix::is_hermitian(&h).unwrap());
    assert!(matrix::is_hermitian(&pauli_y()).unwrap());
    assert!(matrix::is_hermitian(&matrix::identity(3)).unwrap());

    let not_h = m(&[vec![(1.0, 0.0), (0.0, 1.0)], vec![(0.0, 1.0), (2.0, 0.0)]]);
    assert!(!matrix::is_hermitian(&not_h).unwrap());

    let err = matrix::is_hermitian(&ComplexMatrix::zeros(2, 3)).unwrap_err();
    assert_eq!(err, MathError::NotSquare { rows: 2, cols: 3 });
}

#[test]
fn unitary_checks() {
    let x = m(&[vec![(0.0, 0.0), (1.0, 0.0)], vec![(1.0, 0.0), (0.0, 0.0)]]);
    let phase = m(&[vec![(0.0, 1.0), (0.0, 0.0)], vec![(0.0, 0.0), (1.0, 0.0)]]);
    assert!(matrix::is_unitary(&x).unwrap());
    assert!(matrix::is_unitary(&pauli_y()).unwrap());
    assert!(matrix::is_unitary(&phase).unwrap());

    let shear = m(&[vec![(1.0, 0.0), (1.0, 0.0)], vec![(0.0, 0.0), (1.0, 0.0)]]);
    assert!(!matrix::is_unitary(&shear).unwrap());
    assert!(matrix::is_unitary(&ComplexMatrix::zeros(3, 2)).is_err());
}

#[test]
fn tensor_product_blocks() {
    assert_eq!(
        matrix::tensor_product(&matrix::identity(2), &matrix::identity(2)),
        matrix::identity(4)
    );

    let row = m(&[vec![(1.0, 0.0), (2.0, 0.0)]]);
    let swap = m(&[vec![(0.0, 0.0), (1.0, 0.0)], vec![(1.0, 0.0), (0.0, 0.0)]]);
    let expected = m(&[
        vec![(0.0, 0.0), (1.0, 0.0), (0.0, 0.0), (2.0, 0.0)],
        vec![(1.0, 0.0), (0.0, 0.0), (2.0, 0.0), (0.0, 0.0)],
    ]);
    assert_eq!(matrix::tensor_product(&row, &swap), expected);

    let shape = matrix::tensor_product(&ComplexMatrix::zeros(2, 3), &ComplexMatrix::zeros(3, 2)).shape();
    assert_eq!(shape, (6, 6));
}

#[test]
fn equality_requires_same_shape() {
    let err = matrix::equals(&ComplexMatrix::zeros(2, 2), &ComplexMatrix::zeros(2, 3)).unwrap_err();
    assert_eq!(
        err,
        MathError::MatrixSumDimensionMismatch {
            left: (2, 2),
            right: (2, 3)
        }
    );
    assert!(matrix::equals(&ComplexMatrix::zeros(2, 2), &ComplexMatrix::zeros(2, 2)).unwrap());
    assert!(!matrix::equals(&matrix::identity(2), &ComplexMatrix::zeros(2, 2)).unwrap());
}

#[test]
fn empty_matrices_have_no_columns() {
    let tall = ComplexMatrix::zeros(3, 0);
    let t = matrix::transpose(&tall);
    assert_eq!(t.shape(), (0, 0));
    assert_eq!(t, ComplexMatrix::from_rows(vec![]).unwrap());
    assert_eq!(ComplexMatrix::zeros(0, 4).shape(), (0, 0));
}

#[test]
fn display_string_format() {
    let a = m(&[vec![(-1.0, 0.0), (0.0, -1.0)], vec![(0.0, 1.0), (1.0, 0.0)]]);
    assert_eq!(matrix::to_display_string(&a), "{{-1.0,-1.0i},{1.0i,1.0}}");

    let b = m(&[vec![(1.5, 2.0), (0.5, -0.25)]]);
    assert_eq!(matrix::to_display_string(&b), "{{1.5+2.0i,0.5-0.25i}}");
}
