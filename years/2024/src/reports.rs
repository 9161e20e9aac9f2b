//! Day 2: safety of level reports.

use std::iter::from_fn;

use lib::input::IStr;
use log::{debug, warn};

/// Parse one report per line.
///
/// Blank lines are skipped, as are lines with a field that is not an
/// integer, the latter with a warning.
pub fn parse(mut input: IStr) -> Vec<Vec<i64>> {
    let mut reports = Vec::new();

    for (n, mut line) in input.lines().enumerate() {
        if line.is_blank() {
            continue;
        }

        match line.next::<Vec<i64>>() {
            Ok(levels) => reports.push(levels),
            Err(error) => {
                warn!("line {}: {}, skipping", n + 1, error.kind());
            }
        }
    }

    debug!("parsed {} reports", reports.len());
    reports
}

/// Test if levels are either all increasing or all decreasing, by at least
/// one and at most three.
///
/// A report with fewer than two levels is safe. A step which doesn't fit in an
/// `i64` is never safe.
pub fn is_safe(report: &[i64]) -> bool {
    safe(report.iter().copied())
}

/// Test if a report is safe, or becomes safe once a single level is removed.
pub fn can_be_safe(report: &[i64]) -> bool {
    is_safe(report) || (0..report.len()).any(|n| safe(skip(report.iter().copied(), n)))
}

/// Count reports which are safe.
pub fn count_safe(reports: &[Vec<i64>]) -> usize {
    reports.iter().filter(|report| is_safe(report)).count()
}

/// Count reports which are safe with at most one level removed.
pub fn count_tolerable(reports: &[Vec<i64>]) -> usize {
    reports.iter().filter(|report| can_be_safe(report)).count()
}

fn safe(levels: impl IntoIterator<Item = i64>) -> bool {
    let mut inc = true;
    let mut dec = true;

    for (a, b) in pairs(levels) {
        let d = b.checked_sub(a);
        inc &= matches!(d, Some(1..=3));
        dec &= matches!(d, Some(-3..=-1));

        if !inc && !dec {
            return false;
        }
    }

    true
}

/// Iterate over adjacent pairs.
#[inline]
fn pairs(it: impl IntoIterator<Item = i64>) -> impl Iterator<Item = (i64, i64)> {
    let mut it = it.into_iter();
    let mut buf = it.next();

    from_fn(move || {
        let a = buf.take()?;
        let b = it.next()?;
        buf = Some(b);
        Some((a, b))
    })
}

/// Leave out the element at index `redact`.
#[inline]
fn skip(it: impl IntoIterator<Item = i64>, redact: usize) -> impl Iterator<Item = i64> {
    it.into_iter()
        .enumerate()
        .filter(move |&(i, _)| redact != i)
        .map(|(_, v)| v)
}
