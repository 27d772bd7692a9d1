use dakota::interpreter::{
    evaluator::binary::comparison,
    value::{Matrix, Value, core::format_float},
};

fn square(values: &[f64]) -> Matrix {
    let n = (values.len() as f64).sqrt() as usize;
    Matrix::from_data(n, n, values.to_vec()).expect("square data")
}

#[test]
fn transpose_is_an_involution() {
    let m = Matrix::from_data(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    assert_eq!(m.transpose().transpose(), m);
}

#[test]
fn determinant_of_known_matrices() {
    assert_eq!(square(&[5.0]).determinant().unwrap(), 5.0);
    assert_eq!(square(&[1.0, 2.0, 3.0, 4.0]).determinant().unwrap(), -2.0);

    // Singular 3x3: rows are linearly dependent.
    let det = square(&[1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 1.0, 0.0, 1.0]).determinant()
                                                                    .unwrap();
    assert!(det.abs() < 1e-12, "{det}");
}

#[test]
fn determinant_of_identity_is_one() {
    assert_eq!(Matrix::identity(4).determinant().unwrap(), 1.0);
}

#[test]
fn inverse_times_original_is_identity() {
    let m = square(&[4.0, 7.0, 2.0, 6.0]);
    let product = m.inverse().unwrap().multiply(&m).unwrap();
    let eye = Matrix::identity(2);

    let mut frobenius = 0.0;
    for i in 0..2 {
        for j in 0..2 {
            let diff = product.get(i, j) - eye.get(i, j);
            frobenius += diff * diff;
        }
    }
    assert!(frobenius.sqrt() < 1e-9, "Frobenius distance {}", frobenius.sqrt());
}

#[test]
fn inverse_rejects_singular_matrices() {
    assert!(square(&[1.0, 2.0, 2.0, 4.0]).inverse().is_err());
}

#[test]
fn non_square_matrices_have_no_determinant_or_inverse() {
    let m = Matrix::from_data(2, 3, vec![0.0; 6]).unwrap();
    assert!(m.determinant().is_err());
    assert!(m.inverse().is_err());
}

#[test]
fn matmul_shapes() {
    let a = Matrix::from_data(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    let b = Matrix::from_data(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).unwrap();

    let product = a.multiply(&b).unwrap();
    assert_eq!((product.rows(), product.cols()), (2, 2));
    assert_eq!(product.get(0, 0), 58.0);
    assert_eq!(product.get(1, 1), 154.0);

    assert!(b.multiply(&b).is_err());
}

#[test]
fn row_extraction() {
    let m = Matrix::from_data(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let row = m.row(1).unwrap();
    assert_eq!((row.rows(), row.cols()), (1, 2));
    assert_eq!(row.get(0, 1), 4.0);

    assert!(m.row(2).is_err());
    assert!(m.row(-1).is_err());
}

#[test]
fn float_formatting_contract() {
    assert_eq!(format_float(4.0), "4");
    assert_eq!(format_float(3.14), "3.14");
    assert_eq!(format_float(3.140000), "3.14");
    assert_eq!(format_float(0.5), "0.5");
    assert_eq!(format_float(-2.0), "-2");
    assert_eq!(format_float(100.0), "100");
    assert_eq!(format_float(0.000001), "0.000001");
}

#[test]
fn matrix_display_format() {
    let m = Matrix::from_data(2, 2, vec![3.0, 2.0, 4.0, 6.0]).unwrap();
    assert_eq!(Value::Matrix(m).to_string(), "[3,2;4,6]");
    assert_eq!(Value::Matrix(Matrix::zeros(0, 0)).to_string(), "[]");
}

#[test]
fn float_equality_tolerance() {
    assert!(comparison::equal(&Value::Float(0.1 + 0.2), &Value::Float(0.3)));
    assert!(comparison::equal(&Value::Integer(2), &Value::Float(2.0)));
    assert!(!comparison::equal(&Value::Float(1.0), &Value::Float(1.001)));
    assert!(!comparison::equal(&Value::Integer(1), &Value::Str("1".to_string())));
}

#[test]
fn truthiness_rules() {
    assert!(Value::Integer(-3).is_truthy());
    assert!(!Value::Integer(0).is_truthy());
    assert!(!Value::Float(0.0).is_truthy());
    assert!(Value::Str("x".to_string()).is_truthy());
    assert!(!Value::Str(String::new()).is_truthy());
    assert!(Value::Matrix(Matrix::zeros(1, 1)).is_truthy());
    assert!(!Value::Matrix(Matrix::zeros(0, 0)).is_truthy());
    assert!(!Value::None.is_truthy());
}
