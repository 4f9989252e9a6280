//! Error propagation through `anyhow`, as an application using this crate would do it.

use anyhow::{bail, Context};
use vecmat::{vec3, LinalgError, Mat3d, Matrix, Vector};

fn solve(rows: [[f64; 2]; 2], rhs: [f64; 2]) -> anyhow::Result<Vector<f64>> {
    let mat = Matrix::try_from(rows)?;
    let inv = mat.inverse().context("cannot solve linear system")?;
    Ok(inv.times_vector(&Vector::new(rhs)?)?)
}

#[test]
fn solves_system() -> anyhow::Result<()> {
    let x = solve([[2.0, 1.0], [1.0, 3.0]], [3.0, 5.0])?;
    vecmat::assert_approx_eq!(x, Vector::new([0.8, 1.4])?).abs(1e-12);
    Ok(())
}

#[test]
fn singular_system() {
    let err = solve([[1.0, 2.0], [2.0, 4.0]], [1.0, 1.0]).unwrap_err();
    assert_eq!(err.to_string(), "cannot solve linear system");
    assert_eq!(
        err.root_cause().downcast_ref::<LinalgError>(),
        Some(&LinalgError::NotInvertible)
    );
}

#[test]
fn error_messages() {
    let cases = [
        (
            Vector::new([1, 2]).unwrap().dot(&Vector::new([1, 2, 3]).unwrap()).unwrap_err(),
            "dimension mismatch: expected 2, got 3",
        ),
        (
            Vector::new([1, 2]).unwrap().cross(&Vector::new([3, 4]).unwrap()).unwrap_err(),
            "operation is only defined for 3-dimensional vectors, got 2 dimensions",
        ),
        (
            Matrix::try_from([[0.0, 0.0], [0.0, 0.0]]).unwrap().inverse().unwrap_err(),
            "matrix is not invertible",
        ),
        (
            Matrix::<i32>::from_rows(Vec::new()).unwrap_err(),
            "vectors and matrices need at least one element",
        ),
        (
            Vector::new([0.0, 0.0]).unwrap().normalize().unwrap_err(),
            "vector has zero length and no direction",
        ),
    ];
    for (err, msg) in cases {
        assert_eq!(err.to_string(), msg);
    }
}

#[test]
fn errors_are_returned_not_raised() -> anyhow::Result<()> {
    let zero = vec3(0.0, 0.0, 0.0);
    match zero.rotate_about_axis(zero, 1.0) {
        Err(LinalgError::DegenerateVector) => {}
        other => bail!("unexpected result: {other:?}"),
    }

    let singular = Mat3d::from_rows(vec3(1.0, 2.0, 3.0), vec3(4.0, 5.0, 6.0), vec3(7.0, 8.0, 9.0));
    assert_eq!(singular.inverse(), Err(LinalgError::NotInvertible));

    // The operands survive a failed operation unchanged.
    let a = Vector::new([1.0, 2.0, 3.0])?;
    let b = Vector::new([1.0])?;
    assert!(a.plus(&b).is_err());
    assert_eq!(a, [1.0, 2.0, 3.0]);
    Ok(())
}
