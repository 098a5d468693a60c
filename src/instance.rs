//! Problem instance.

use crate::error::InstanceError;

/// Immutable snapshot of the double-tour pickup-and-delivery problem.
///
/// Node `0` is the depot; nodes `1..=n` are the items. `dp`/`dd` are the
/// pickup-tour and delivery-tour distance matrices, both `(n + 1) x (n + 1)`,
/// symmetric, with a zero diagonal.
#[derive(Debug, Clone)]
pub struct Instance {
    n: usize,
    l: usize,
    h: i64,
    dp: Vec<Vec<i64>>,
    dd: Vec<Vec<i64>>,
}

impl Instance {
    /// Validates and builds an instance.
    ///
    /// `dp` and `dd` are taken as-is (not re-rounded); callers building them
    /// from Euclidean point sets are expected to round beforehand, as the
    /// reference data loader does.
    pub fn new(
        n: usize,
        l: usize,
        h: i64,
        dp: Vec<Vec<i64>>,
        dd: Vec<Vec<i64>>,
    ) -> Result<Self, InstanceError> {
        if n == 0 {
            return Err(InstanceError::ZeroItems);
        }
        let expected = n + 1;

        if dp.len() != expected {
            return Err(InstanceError::PickupMatrixWrongSize {
                expected,
                actual: dp.len(),
            });
        }
        if dd.len() != expected {
            return Err(InstanceError::DeliveryMatrixWrongSize {
                expected,
                actual: dd.len(),
            });
        }
        for (row, vals) in dp.iter().enumerate() {
            if vals.len() != expected {
                return Err(InstanceError::PickupRowWrongLength {
                    row,
                    expected,
                    actual: vals.len(),
                });
            }
        }
        for (row, vals) in dd.iter().enumerate() {
            if vals.len() != expected {
                return Err(InstanceError::DeliveryRowWrongLength {
                    row,
                    expected,
                    actual: vals.len(),
                });
            }
        }
        for i in 0..expected {
            if dp[i][i] != 0 {
                return Err(InstanceError::PickupDiagonalNonZero {
                    i,
                    value: dp[i][i],
                });
            }
            if dd[i][i] != 0 {
                return Err(InstanceError::DeliveryDiagonalNonZero {
                    i,
                    value: dd[i][i],
                });
            }
            for j in (i + 1)..expected {
                if dp[i][j] != dp[j][i] {
                    return Err(InstanceError::PickupMatrixAsymmetric {
                        i,
                        j,
                        a: dp[i][j],
                        b: dp[j][i],
                    });
                }
                if dd[i][j] != dd[j][i] {
                    return Err(InstanceError::DeliveryMatrixAsymmetric {
                        i,
                        j,
                        a: dd[i][j],
                        b: dd[j][i],
                    });
                }
            }
        }

        Ok(Self { n, l, h, dp, dd })
    }

    /// Number of items, `N >= 1`.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Reloading depth, `L >= 0`.
    pub fn l(&self) -> usize {
        self.l
    }

    /// Unit relocation cost.
    pub fn h(&self) -> i64 {
        self.h
    }

    /// Pickup-tour distance matrix.
    pub fn dp(&self) -> &[Vec<i64>] {
        &self.dp
    }

    /// Delivery-tour distance matrix.
    pub fn dd(&self) -> &[Vec<i64>] {
        &self.dd
    }

    /// `Dp[i][j] + Dd[i][j]`, the matrix a [`crate::tour_oracle::TourOracle`]
    /// warm-start solves over.
    pub fn combined_distance(&self) -> Vec<Vec<i64>> {
        let expected = self.n + 1;
        (0..expected)
            .map(|i| (0..expected).map(|j| self.dp[i][j] + self.dd[i][j]).collect())
            .collect()
    }
}
