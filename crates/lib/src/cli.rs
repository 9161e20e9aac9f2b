//! CLI helpers.

mod bencher;
mod error;
mod output;
mod output_eq;
mod stdout_logger;

use core::fmt;
use core::ops::AddAssign;
use core::time::Duration;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, ensure, Context, Result};
use serde::{Deserialize, Serialize};

pub use self::bencher::Bencher;
pub use self::error::{error_context, LineCol};
pub(self) use self::output::{Output, OutputKind};
pub use self::output::Answers;
pub use self::output_eq::OutputEq;

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Run mode.
#[derive(Default)]
pub enum Mode {
    /// Default run mode.
    #[default]
    Default,
    /// Run as benchmark.
    Bench,
}

/// Input options.
#[derive(Default)]
pub struct Opts {
    /// Run as a benchmark.
    pub mode: Mode,
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON lines.
    json: bool,
    /// Read input from this path instead of the default.
    input: Option<PathBuf>,
    /// Warmup period.
    warmup: Option<u64>,
    /// Bench period.
    time_limit: Option<u64>,
    /// Number of times to run benches.
    count: Option<usize>,
}

impl Opts {
    /// Parse CLI options and install the logger.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args_os().skip(1))?;

        if !opts.json {
            log::set_max_level(if opts.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            });

            log::set_logger(&STDOUT_LOGGER)
                .map_err(|error| anyhow!("failed to set log: {error}"))?;
        }

        Ok(opts)
    }

    /// Parse options from the given arguments.
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter().map(Into::<OsString>::into);

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--bench" => {
                    if !matches!(opts.mode, Mode::Default) {
                        bail!("duplicate `--bench` arguments");
                    }

                    opts.mode = Mode::Bench;
                }
                "--verbose" => {
                    opts.verbose = true;
                }
                "--json" => {
                    opts.json = true;
                }
                "--input" => {
                    let input = it.next().context("missing argument to `--input`")?;
                    opts.input = Some(PathBuf::from(input));
                }
                "--warmup" => {
                    opts.warmup = Some(value(it.next(), "--warmup")?);
                }
                "--time-limit" => {
                    opts.time_limit = Some(value(it.next(), "--time-limit")?);
                }
                "--count" => {
                    opts.count = Some(value(it.next(), "--count")?);
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        Ok(opts)
    }

    /// Custom input path, if one was given.
    pub fn input_path(&self) -> Option<&Path> {
        self.input.as_deref()
    }

    /// Test if the puzzle input is read from its default location.
    pub fn is_default_input(&self) -> bool {
        self.input.is_none()
    }

    fn output<O>(&self, out: O) -> Output<O>
    where
        O: Write,
    {
        let kind = if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        };

        Output::new(out, kind)
    }
}

fn value<T>(arg: Option<OsString>, name: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let arg = arg.with_context(|| anyhow!("missing argument to `{name}`"))?;

    let arg = arg
        .to_str()
        .with_context(|| anyhow!("missing string argument to `{name}`"))?;

    arg.parse()
        .with_context(|| anyhow!("bad argument to `{name}`"))
}

/// Print the answers of a solution.
pub fn answers<O>(opts: &Opts, value: &O) -> Result<()>
where
    O: Answers,
{
    let stdout = std::io::stdout();
    let mut o = opts.output(stdout.lock());

    for (n, part) in value.parts().into_iter().enumerate() {
        o.answer(n + 1, part)?;
    }

    Ok(())
}

/// Compare answers against what they are expected to be.
pub fn check_expected<O, C>(value: &O, expected: &C) -> Result<()>
where
    O: fmt::Debug + OutputEq<C>,
    C: fmt::Debug,
{
    ensure!(
        value.output_eq(expected),
        "{value:?} (value) != {expected:?} (expected)"
    );

    Ok(())
}

/// Timing report of a benchmark.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Report {
    pub p50: Duration,
    pub p95: Duration,
    pub p99: Duration,
    pub count: usize,
    pub min: Duration,
    pub max: Duration,
    pub avg: Duration,
}

impl Report {
    /// Construct a report out of sorted samples.
    fn from_sorted(samples: &[Duration]) -> Self {
        let count = samples.len();

        let avg = if count == 0 {
            Duration::default()
        } else {
            let sum = samples.iter().copied().sum::<Duration>();
            Duration::from_nanos(u64::try_from(sum.as_nanos() / count as u128).unwrap_or_default())
        };

        Self {
            p50: percentile(samples, 50),
            p95: percentile(samples, 95),
            p99: percentile(samples, 99),
            count,
            min: samples.first().copied().unwrap_or_default(),
            max: samples.last().copied().unwrap_or_default(),
            avg,
        }
    }
}

fn percentile(samples: &[Duration], p: usize) -> Duration {
    let Some(last) = samples.len().checked_sub(1) else {
        return Duration::default();
    };

    samples[(last * p) / 100]
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report {
            p50,
            p95,
            p99,
            count,
            min,
            max,
            avg,
        } = self;

        write!(f, "count: {count}, min: {min:?}, max: {max:?}, avg: {avg:?}, 50th: {p50:?}, 95th: {p95:?}, 99th: {p99:?}")
    }
}

impl AddAssign<&Report> for Report {
    fn add_assign(&mut self, rhs: &Report) {
        self.p50 += rhs.p50;
        self.p95 += rhs.p95;
        self.p99 += rhs.p99;
        self.count += rhs.count;
        self.min += rhs.min;
        self.max += rhs.max;
        self.avg += rhs.avg;
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use super::{check_expected, Mode, Opts, Report};

    #[test]
    fn test_parse_opts() {
        let opts = Opts::parse_from(["--bench", "--count", "3", "--input", "day.txt"]).unwrap();
        assert!(matches!(opts.mode, Mode::Bench));
        assert_eq!(opts.count, Some(3));
        assert_eq!(opts.input_path().and_then(|p| p.to_str()), Some("day.txt"));
        assert!(!opts.is_default_input());
    }

    #[test]
    fn test_parse_opts_errors() {
        assert!(Opts::parse_from(["--bench", "--bench"]).is_err());
        assert!(Opts::parse_from(["--count"]).is_err());
        assert!(Opts::parse_from(["--count", "many"]).is_err());
        assert!(Opts::parse_from(["--frobnicate"]).is_err());
        assert!(Opts::parse_from(["--", "--frobnicate"]).is_ok());
    }

    #[test]
    fn test_check_expected() {
        assert!(check_expected(&(11u64, 31i64), &(11, 31)).is_ok());
        assert!(check_expected(&(11u64, 31i64), &(11, 30)).is_err());
    }

    #[test]
    fn test_report_from_sorted() {
        let samples = (1..=100).map(Duration::from_millis).collect::<Vec<_>>();
        let report = Report::from_sorted(&samples);
        assert_eq!(report.count, 100);
        assert_eq!(report.min, Duration::from_millis(1));
        assert_eq!(report.max, Duration::from_millis(100));
        assert_eq!(report.p50, Duration::from_millis(50));
        assert_eq!(report.p99, Duration::from_millis(99));
        assert_eq!(report.avg, Duration::from_micros(50_500));
    }

    #[test]
    fn test_empty_report() {
        let report = Report::from_sorted(&[]);
        assert_eq!(report.count, 0);
        assert_eq!(report.avg, Duration::default());
    }
}
