//! Miscellaneous linear-algebra tools.

use ndarray as nd;
use ndarray_linalg::{ SVD, error::LinalgError };
use crate::Arr2;

/// Compute an orthonormal basis (as rows) of the null space of `a` via the
/// singular value decomposition.
///
/// Singular values below `smax · max(m, n) · ε` are treated as zero, so the
/// null space of an all-zero matrix is the full row space. Every returned
/// row is a unit vector orthogonal to every row of `a` and to every other
/// returned row.
pub fn null_space<S>(a: &Arr2<S>) -> Result<nd::Array2<f64>, LinalgError>
where S: nd::Data<Elem = f64>
{
    let (m, n) = a.dim();
    let (_, s, vt) = a.svd(false, true)?;
    let vt = vt.expect("svd: missing right singular vectors");
    let smax = s.iter().copied().fold(0.0_f64, f64::max);
    let tol = smax * m.max(n) as f64 * f64::EPSILON;
    let rank = s.iter().filter(|&&sk| sk > tol).count();
    Ok(vt.slice(nd::s![rank.., ..]).to_owned())
}

#[cfg(test)]
mod test {
    use ndarray as nd;
    use super::null_space;

    fn assert_orthonormal(basis: &nd::Array2<f64>) {
        let gram = basis.dot(&basis.t());
        for ((i, j), gij) in gram.indexed_iter() {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert!(
                (gij - expected).abs() < 1e-10,
                "gram[{}, {}] = {}", i, j, gij,
            );
        }
    }

    #[test]
    fn zero_matrix_spans_everything() {
        let a: nd::Array2<f64> = nd::Array2::zeros((1, 12));
        let basis = null_space(&a).unwrap();
        assert_eq!(basis.dim(), (12, 12));
        assert_orthonormal(&basis);
    }

    #[test]
    fn single_row_excluded() {
        let mut a: nd::Array2<f64> = nd::Array2::zeros((1, 8));
        a[[0, 3]] = 1.0;
        let basis = null_space(&a).unwrap();
        assert_eq!(basis.nrows(), 7);
        assert_orthonormal(&basis);
        for row in basis.rows() {
            assert!(row.dot(&a.row(0)).abs() < 1e-12);
        }
    }

    #[test]
    fn two_rows_excluded() {
        let mut a: nd::Array2<f64> = nd::Array2::zeros((2, 6));
        a[[0, 0]] = 1.0;
        a[[0, 1]] = 1.0;
        a[[1, 1]] = 1.0;
        a[[1, 2]] = -1.0;
        let basis = null_space(&a).unwrap();
        assert_eq!(basis.nrows(), 4);
        assert_orthonormal(&basis);
        for row in basis.rows() {
            assert!(row.dot(&a.row(0)).abs() < 1e-10);
            assert!(row.dot(&a.row(1)).abs() < 1e-10);
        }
    }
}
