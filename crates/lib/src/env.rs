//! Loading of puzzle input and mapping offsets back into it.

use core::fmt;
use core::ops::Range;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{anyhow, Context};

use crate::cli::{LineCol, Opts};
use crate::input::{IStr, NL};

/// A byte offset into the input.
#[repr(transparent)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Size(usize);

impl Size {
    /// Default zero value.
    pub const ZERO: Self = Self(0);

    #[inline]
    pub(crate) fn new(n: usize) -> Self {
        Self(n)
    }

    /// The offset as a `usize`.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    #[inline]
    pub(crate) fn checked_add(self, b: Size) -> Option<Self> {
        Some(Self(self.0.checked_add(b.0)?))
    }

    #[inline]
    pub(crate) fn advance(&mut self, n: usize) {
        self.0 = self.0.saturating_add(n);
    }

    #[inline]
    pub(crate) fn saturating_add(self, n: Size) -> Self {
        Self(self.0.saturating_add(n.0))
    }
}

impl fmt::Display for Size {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Get the line and column where the given span starts.
pub(crate) fn pos_from(data: &[u8], span: Range<Size>) -> LineCol {
    let start = span.start.get();

    let Some(before) = data.get(..start) else {
        return LineCol::EMPTY;
    };

    let line = memchr::memchr_iter(NL, before).count();

    let column = match memchr::memrchr(NL, before) {
        Some(n) => start - n - 1,
        None => start,
    };

    LineCol::new(line, column)
}

/// Puzzle input kept alive for the remainder of the process.
#[doc(hidden)]
pub struct Loaded {
    path: String,
    data: Vec<u8>,
}

/// Load the puzzle input.
///
/// Reads `read_path` unless an `--input` override was given, in which case
/// the override is read and reported as the path of the input.
#[doc(hidden)]
pub fn input(
    opts: &Opts,
    path: &'static str,
    read_path: &'static str,
    storage: &'static OnceLock<Loaded>,
) -> anyhow::Result<(IStr, &'static str)> {
    let (path, read_path) = match opts.input_path() {
        Some(custom) => (custom.display().to_string(), custom),
        None => (path.to_owned(), Path::new(read_path)),
    };

    let data = fs::read(read_path).with_context(|| anyhow!("{path}"))?;
    log::debug!("{path}: read {} bytes", data.len());

    let loaded = storage.get_or_init(move || Loaded { path, data });
    Ok((IStr::from_static(&loaded.data), loaded.path.as_str()))
}

/// Prepare an input processor.
///
/// This declares static storage for the processed input because it's much
/// easier to deal with than lifetimes and memory for it will be freed once the
/// process exits *anyway*.
///
/// Evaluates to the input and the path it was read from.
#[macro_export]
macro_rules! input {
    ($opts:expr, $path:literal) => {{
        static STORAGE: ::std::sync::OnceLock<$crate::env::Loaded> =
            ::std::sync::OnceLock::new();
        let path = concat!("inputs/", $path);
        let read_path = concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path);
        $crate::env::input(&$opts, path, read_path, &STORAGE)?
    }};
}
