use core::fmt;
use std::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{Error, Result};

use crate::cli::{Output, Opts, Report};

/// Default warmup period in milliseconds.
const DEFAULT_WARMUP: u64 = 100;

/// Default bench period in milliseconds.
const DEFAULT_TIME_LIMIT: u64 = 400;

#[derive(Default)]
pub struct Bencher {
    samples: Vec<Duration>,
}

impl Bencher {
    /// Construct a new bencher.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bench the given fn.
    ///
    /// Errors raised by the fn are reported as messages rather than
    /// propagated.
    pub fn iter<T, O, E>(&mut self, opts: &Opts, iter: T) -> Result<()>
    where
        T: FnMut() -> Result<O, E>,
        O: fmt::Debug,
        Error: From<E>,
    {
        let stdout = std::io::stdout();
        let mut o = opts.output(stdout.lock());

        if let Err(e) = self.inner_iter(&mut o, opts, iter) {
            o.error(format_args!("{e:#}"))?;
        }

        Ok(())
    }

    fn inner_iter<T, O, E>(
        &mut self,
        o: &mut Output<impl Write>,
        opts: &Opts,
        mut iter: T,
    ) -> Result<()>
    where
        T: FnMut() -> Result<O, E>,
        O: fmt::Debug,
        Error: From<E>,
    {
        let warmup = Duration::from_millis(opts.warmup.unwrap_or(DEFAULT_WARMUP));
        let time_limit = Duration::from_millis(opts.time_limit.unwrap_or(DEFAULT_TIME_LIMIT));

        self.samples.clear();

        if !warmup.is_zero() {
            o.info(format_args!("warming up ({warmup:?})..."))?;

            let start = Instant::now();

            while start.elapsed() < warmup {
                black_box(iter()?);
            }
        }

        if let Some(count) = opts.count {
            let count = count.max(1);
            o.info(format_args!("running benches {count} time(s)..."))?;

            for _ in 0..count {
                self.sample(&mut iter)?;
            }
        } else {
            o.info(format_args!("running benches ({time_limit:?})..."))?;

            let start = Instant::now();

            loop {
                self.sample(&mut iter)?;

                if start.elapsed() >= time_limit {
                    break;
                }
            }
        }

        self.samples.sort();
        o.report(&Report::from_sorted(&self.samples))?;
        Ok(())
    }

    /// Time a single run.
    #[inline]
    fn sample<T, O, E>(&mut self, iter: &mut T) -> Result<()>
    where
        T: FnMut() -> Result<O, E>,
        Error: From<E>,
    {
        let before = Instant::now();
        let value = iter()?;
        let after = Instant::now();

        black_box(value);
        self.samples.push(after.duration_since(before));
        Ok(())
    }
}
