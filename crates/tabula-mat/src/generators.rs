//! Static factory functions.
//!
//! The integer factories mirror the construction surface callers reach
//! for most often; `unit` is the generic identity used wherever a
//! multiplicative unit of the element type is needed.

use std::time::{SystemTime, UNIX_EPOCH};

use num_traits::{One, Zero};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::matrix::Matrix;

impl<T: Zero + One> Matrix<T> {
    /// Builds the `n x n` identity over any element type with a zero
    /// and a one; `unit(0)` is the empty matrix.
    #[must_use]
    pub fn unit(n: usize) -> Self {
        let mut data = Vec::with_capacity(n * n);
        for row in 0..n {
            for col in 0..n {
                data.push(if row == col { T::one() } else { T::zero() });
            }
        }
        Self::from_parts(data, n, n)
    }
}

impl Matrix<i32> {
    /// Builds a `rows x cols` integer matrix of zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self::from_parts(vec![0; num_rows * num_cols], num_rows, num_cols)
    }

    /// Builds the `n x n` integer identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self::unit(n)
    }

    /// Builds a `rows x cols` matrix of uniformly distributed integers
    /// in `[min, max]`, both bounds inclusive.
    ///
    /// The same seed always produces the same matrix. Without a seed
    /// the generator is seeded from the wall clock, so two unseeded
    /// calls within the same clock second produce the same sequence.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    #[must_use]
    pub fn randint(
        num_rows: usize,
        num_cols: usize,
        min: i32,
        max: i32,
        seed: Option<u64>,
    ) -> Self {
        assert!(min <= max, "empty range: min {min} > max {max}");
        let seed = seed.unwrap_or_else(|| {
            let clock = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0, |d| d.as_secs());
            log::debug!("randint: seeding from the wall clock ({clock})");
            clock
        });
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let data = (0..num_rows * num_cols)
            .map(|_| rng.gen_range(min..=max))
            .collect();
        Self::from_parts(data, num_rows, num_cols)
    }
}
