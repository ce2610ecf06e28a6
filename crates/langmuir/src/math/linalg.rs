//! Small dense linear algebra for least-squares normal equations.
//!
//! Systems here are at most 3x3, so plain Gaussian elimination with partial
//! pivoting is both exact enough and allocation-free.

// External dependencies
use num_traits::Float;

// Solve `a * x = b` for a square system of order `N`.
//
// Returns `None` when a pivot falls below `tol` times the largest absolute
// entry of `a`.
pub fn solve<T: Float, const N: usize>(a: &[[T; N]; N], b: &[T; N], tol: T) -> Option<[T; N]> {
    let mut m = *a;
    let mut rhs = *b;

    let scale = m
        .iter()
        .flat_map(|row| row.iter())
        .fold(T::zero(), |acc, v| acc.max(v.abs()));
    if scale <= T::zero() || !scale.is_finite() {
        return None;
    }
    let floor = tol * scale;

    for col in 0..N {
        // Partial pivoting
        let mut pivot = col;
        for row in (col + 1)..N {
            if m[row][col].abs() > m[pivot][col].abs() {
                pivot = row;
            }
        }
        if m[pivot][col].abs() <= floor {
            return None;
        }
        m.swap(col, pivot);
        rhs.swap(col, pivot);

        for row in (col + 1)..N {
            let factor = m[row][col] / m[col][col];
            for k in col..N {
                m[row][k] = m[row][k] - factor * m[col][k];
            }
            rhs[row] = rhs[row] - factor * rhs[col];
        }
    }

    // Back substitution
    let mut x = [T::zero(); N];
    for row in (0..N).rev() {
        let mut acc = rhs[row];
        for k in (row + 1)..N {
            acc = acc - m[row][k] * x[k];
        }
        x[row] = acc / m[row][row];
    }

    Some(x)
}

// Invert a square matrix of order `N` column by column.
pub fn invert<T: Float, const N: usize>(a: &[[T; N]; N], tol: T) -> Option<[[T; N]; N]> {
    let mut inv = [[T::zero(); N]; N];
    for col in 0..N {
        let mut e = [T::zero(); N];
        e[col] = T::one();
        let x = solve(a, &e, tol)?;
        for row in 0..N {
            inv[row][col] = x[row];
        }
    }
    Some(inv)
}
