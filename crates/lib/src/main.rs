//! Builds a year of solutions and runs every day in it, collecting their
//! answers and benchmark reports.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};
use lib::cli::Report;
use serde::{de::IntoDeserializer, Deserialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct Target {
    name: String,
    kind: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Artifact {
    target: Target,
    executable: Option<PathBuf>,
}

struct Day {
    name: String,
    path: PathBuf,
}

struct Opts {
    quiet: bool,
    verbose: bool,
    year: String,
    args: Vec<OsString>,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            quiet: false,
            verbose: false,
            year: String::from("2024"),
            args: Vec::new(),
        }
    }
}

impl Opts {
    fn parse_from<I>(args: I) -> Result<Self>
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
                "-q" | "--quiet" => {
                    opts.quiet = true;
                }
                "-V" | "--verbose" => {
                    opts.verbose = true;
                }
                "--year" => {
                    let year = it.next().context("missing argument to `--year`")?;
                    let year = year.to_str().context("bad argument to `--year`")?;

                    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
                        bail!("bad argument to `--year`: {year}");
                    }

                    opts.year = year.to_owned();
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        opts.args.extend(it);
        Ok(opts)
    }

    fn is_verbose(&self) -> bool {
        self.verbose && !self.quiet
    }

    /// Arguments passed to each day.
    ///
    /// `--json` goes first, since a forwarded `--` ends option parsing in the
    /// day itself.
    fn day_args(&self) -> Vec<OsString> {
        let mut args = Vec::with_capacity(self.args.len() + 1);
        args.push(OsString::from("--json"));
        args.extend(self.args.iter().cloned());
        args
    }
}

fn main() -> Result<()> {
    let opts = Opts::parse_from(std::env::args_os().skip(1))?;
    let days = build(&opts.year)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut total = Report::default();

    for day in days {
        let mut cmd = Command::new(&day.path);
        cmd.stdout(Stdio::piped());
        cmd.args(opts.day_args());

        let mut child = cmd.spawn()?;
        let output = child.stdout.take().context("missing stdout")?;

        for value in serde_json::Deserializer::from_reader(output).into_iter::<Value>() {
            let value = value.with_context(|| format!("{}: bad output", day.name))?;

            if let Some(report) = dispatch(&mut out, &opts, &day.name, value)? {
                total += &report;
            }
        }

        let status = child.wait()?;

        if opts.is_verbose() || !status.success() {
            writeln!(out, "{name}: {status}", name = day.name)?;
        }
    }

    writeln!(out, "total: {total}")?;
    Ok(())
}

/// Build the crate of the given year, returning its days sorted by name.
fn build(year: &str) -> Result<Vec<Day>> {
    let package = format!("y{year}");

    let mut cmd = Command::new("cargo");
    cmd.stdout(Stdio::piped());
    cmd.arg("build");
    cmd.arg("--release");
    cmd.args(["-p", package.as_str()]);
    cmd.args(["--message-format", "json"]);

    let mut child = cmd.spawn()?;
    let output = child.stdout.take().context("missing stdout")?;

    let mut days = Vec::new();

    for value in serde_json::Deserializer::from_reader(output).into_iter::<Value>() {
        if let Some(day) = day_from_artifact(value?)? {
            days.push(day);
        }
    }

    let status = child.wait()?;

    if !status.success() {
        bail!("building {package} failed: {status}");
    }

    days.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(days)
}

/// Pick out binaries from cargo's build messages.
fn day_from_artifact(value: Value) -> Result<Option<Day>> {
    if !matches!(
        value.get("reason").and_then(Value::as_str),
        Some("compiler-artifact")
    ) {
        return Ok(None);
    }

    let artifact = Artifact::deserialize(value.into_deserializer())?;

    let [kind] = &artifact.target.kind[..] else {
        return Ok(None);
    };

    if kind != "bin" {
        return Ok(None);
    }

    let path = artifact.executable.context("missing executable")?;

    Ok(Some(Day {
        name: artifact.target.name,
        path,
    }))
}

/// Print a single line of output from a day, returning its report if it is
/// one.
fn dispatch<O>(out: &mut O, opts: &Opts, name: &str, value: Value) -> Result<Option<Report>>
where
    O: Write,
{
    match value.get("type").and_then(Value::as_str) {
        Some("answer") => {
            let answer = Data::<Answer>::deserialize(value.into_deserializer())?.data;

            if !opts.quiet {
                writeln!(out, "{name}: part {}: {}", answer.part, answer.value)?;
            }
        }
        Some("report") => {
            let report = Data::<Report>::deserialize(value.into_deserializer())?.data;

            if !opts.quiet {
                writeln!(out, "{name}: {report}")?;
            }

            return Ok(Some(report));
        }
        Some("message") => {
            let message = Data::<Message>::deserialize(value.into_deserializer())?.data;

            if opts.is_verbose() || message.is_error() {
                writeln!(out, "{name}: {}: {}", message.kind, message.output)?;
            }
        }
        _ => {}
    }

    Ok(None)
}

#[derive(Deserialize)]
struct Data<T> {
    data: T,
}

#[derive(Deserialize)]
struct Answer {
    part: usize,
    value: String,
}

#[derive(Deserialize)]
struct Message {
    kind: String,
    output: String,
}

impl Message {
    fn is_error(&self) -> bool {
        self.kind == "error"
    }
}
