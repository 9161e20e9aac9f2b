//! Day 1: distance and similarity between two columns of location ids.

use std::collections::HashMap;

use lib::input::IStr;
use log::{debug, warn};

/// Errors raised when comparing columns.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("columns differ in length (left: {left}, right: {right})")]
    LengthMismatch { left: usize, right: usize },
    #[error("arithmetic overflow while summing")]
    Overflow,
}

/// Two columns of integers read side by side.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Columns {
    pub left: Vec<i64>,
    pub right: Vec<i64>,
}

impl Columns {
    /// Construct columns out of existing values.
    pub fn new(left: Vec<i64>, right: Vec<i64>) -> Self {
        Self { left, right }
    }

    /// Parse two whitespace-separated integers per line.
    ///
    /// Lines which do not start with two integers are skipped with a warning.
    /// Fields past the first two are ignored.
    pub fn parse(mut input: IStr) -> Self {
        let mut columns = Self::default();

        for (n, mut line) in input.lines().enumerate() {
            if line.is_blank() {
                continue;
            }

            let text = line.as_bstr();

            match line.try_next::<(i64, i64)>() {
                Ok(Some((left, right))) => {
                    columns.left.push(left);
                    columns.right.push(right);
                }
                Ok(None) => {
                    warn!("line {}: expected two integers in `{text}`, skipping", n + 1);
                }
                Err(error) => {
                    warn!("line {}: {}, skipping", n + 1, error.kind());
                }
            }
        }

        if columns.left.len() != columns.right.len() {
            warn!(
                "mismatched lengths between left ({}) and right ({})",
                columns.left.len(),
                columns.right.len()
            );
        }

        debug!("parsed {} pairs", columns.left.len());
        columns
    }

    /// Sum of distances between the values of equal rank in each column.
    ///
    /// Sorts both columns in place.
    pub fn total_distance(&mut self) -> Result<u64, Error> {
        if self.left.len() != self.right.len() {
            return Err(Error::LengthMismatch {
                left: self.left.len(),
                right: self.right.len(),
            });
        }

        self.left.sort_unstable();
        self.right.sort_unstable();

        self.left
            .iter()
            .zip(&self.right)
            .try_fold(0u64, |sum, (l, r)| sum.checked_add(l.abs_diff(*r)))
            .ok_or(Error::Overflow)
    }

    /// Sum of each left value weighted by how often it occurs on the right.
    ///
    /// Fails with [Error::Overflow] if the sum doesn't fit in an `i64`.
    pub fn similarity(&self) -> Result<i64, Error> {
        let mut counts = HashMap::<i64, i64>::with_capacity(self.right.len());

        for &value in &self.right {
            *counts.entry(value).or_default() += 1;
        }

        self.left
            .iter()
            .try_fold(0i64, |sum, value| {
                let count = counts.get(value).copied().unwrap_or_default();
                sum.checked_add(value.checked_mul(count)?)
            })
            .ok_or(Error::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use lib::input::IStr;

    use super::{Columns, Error};

    const EXAMPLE: &[u8] = b"3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";

    #[test]
    fn test_parse() {
        let columns = Columns::parse(IStr::from_static(EXAMPLE));
        assert_eq!(columns.left, [3, 4, 2, 1, 3, 3]);
        assert_eq!(columns.right, [4, 3, 5, 3, 9, 3]);
    }

    #[test]
    fn test_example() {
        let mut columns = Columns::parse(IStr::from_static(EXAMPLE));
        assert_eq!(columns.total_distance().unwrap(), 11);
        assert_eq!(columns.similarity().unwrap(), 31);
    }

    #[test]
    fn test_similarity_ignores_order() {
        let columns = Columns::new(vec![3, 4, 2, 1, 3, 3], vec![4, 3, 5, 3, 9, 3]);
        let mut sorted = columns.clone();
        sorted.left.sort();
        sorted.right.sort();
        assert_eq!(columns.similarity().unwrap(), sorted.similarity().unwrap());
    }

    #[test]
    fn test_skips_malformed_lines() {
        let input = IStr::from_static(b"1 2\n\nonly\n3 x\n4 5 6\n7\t8\n");
        let columns = Columns::parse(input);
        assert_eq!(columns.left, [1, 4, 7]);
        assert_eq!(columns.right, [2, 5, 8]);
    }

    #[test]
    fn test_negative_distance() {
        let mut columns = Columns::new(vec![-5, 10], vec![5, -10]);
        assert_eq!(columns.total_distance().unwrap(), 10);
    }

    #[test]
    fn test_length_mismatch() {
        let mut columns = Columns::new(vec![1, 2, 3], vec![1, 2]);

        assert!(matches!(
            columns.total_distance(),
            Err(Error::LengthMismatch { left: 3, right: 2 })
        ));

        assert_eq!(columns.similarity().unwrap(), 3);
    }

    #[test]
    fn test_sorting_is_stable() {
        let mut columns = Columns::parse(IStr::from_static(EXAMPLE));
        let first = columns.total_distance().unwrap();
        let sorted = columns.clone();
        let second = columns.total_distance().unwrap();
        assert_eq!(first, second);
        assert_eq!(columns, sorted);
    }

    #[test]
    fn test_empty() {
        let mut columns = Columns::parse(IStr::from_static(b""));
        assert_eq!(columns.total_distance().unwrap(), 0);
        assert_eq!(columns.similarity().unwrap(), 0);
    }

    #[test]
    fn test_similarity_overflow() {
        let columns = Columns::new(vec![i64::MAX], vec![i64::MAX, i64::MAX]);
        assert!(matches!(columns.similarity(), Err(Error::Overflow)));

        let columns = Columns::new(vec![i64::MAX, i64::MAX], vec![i64::MAX]);
        assert!(matches!(columns.similarity(), Err(Error::Overflow)));

        let columns = Columns::new(vec![i64::MIN], vec![i64::MIN]);
        assert_eq!(columns.similarity().unwrap(), i64::MIN);
    }

    #[test]
    fn test_distance_extremes() {
        let mut columns = Columns::new(vec![i64::MIN], vec![i64::MAX]);
        assert_eq!(columns.total_distance().unwrap(), u64::MAX);

        let mut columns = Columns::new(vec![i64::MIN, i64::MIN], vec![i64::MAX, i64::MAX]);
        assert!(matches!(columns.total_distance(), Err(Error::Overflow)));
    }
}
