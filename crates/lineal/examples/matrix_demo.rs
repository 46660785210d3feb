use anyhow::Result;

use lineal::{DetMethod, DetOptions, Matrix, PivotRule, SquareMatrix, Vector2};

fn main() -> Result<()> {
    env_logger::init();

    // Elementwise arithmetic on two 2 x 2 matrices.
    let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
    let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]])?;

    println!("a ({}):\n{}", a.format_shape(), a);
    println!("a + b:\n{}", a.try_add(&b)?);
    println!("a - b:\n{}", a.try_sub(&b)?);
    println!("a * b:\n{}", a.matmul(&b)?);

    // The classic singular 3 x 3 example: both determinant paths agree on 0.
    let singular = SquareMatrix::from_rows(vec![
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
        vec![7.0, 8.0, 9.0],
    ])?;
    println!("singular:\n{}", singular);
    println!("sarrus          = {}", singular.sarrus()?);
    println!("laplace         = {}", singular.laplace_determinant());
    println!("trace           = {}", singular.trace());
    println!("transposed:\n{}", singular.transpose());

    // A larger determinant via cofactor expansion, with and without the
    // zero-counting pivot rule.
    let block = SquareMatrix::from_rows(vec![
        vec![1.0, 2.0, 0.0, 0.0],
        vec![3.0, 4.0, 0.0, 0.0],
        vec![0.0, 0.0, 5.0, 6.0],
        vec![0.0, 0.0, 7.0, 8.0],
    ])?;
    let most_zeros = DetOptions::new(DetMethod::Laplace, PivotRule::MostZeros);
    println!("block determinant (default)    = {}", block.determinant());
    println!(
        "block determinant (most zeros) = {}",
        block.determinant_with(&most_zeros)
    );

    // The identity matrix is both triangular and has determinant 1.
    let eye = SquareMatrix::identity(4);
    println!(
        "identity: trace = {}, det = {}, triangular = {}",
        eye.trace(),
        eye.determinant(),
        eye.is_triangular()
    );

    // Vectors.
    let v = Vector2::new(3.0, 4.0);
    println!("v = {}, |v| = {}, normalized = {}", v, v.norm(), v.normalized());

    Ok(())
}
