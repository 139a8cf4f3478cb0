mod app;
mod calendar;
mod canvas;
mod help;
mod sessions;
mod theme;
use crate::app::App;
use crate::calendar::{AnchorWindow, DateWindow, OffsetWindow};
use crate::sessions::Seed;
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Mutex;
use thiserror::Error;
use time::{format_description::FormatItem, macros::format_description, Date, OffsetDateTime};
use tracing::info;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run(RunOptions),
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut opts = RunOptions::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('s') | Arg::Long("strategy") => {
                    opts.strategy = parser.value()?.parse()?;
                }
                Arg::Short('e') | Arg::Long("empty") => opts.seed = Seed::Empty,
                Arg::Short('l') | Arg::Long("log-file") => {
                    opts.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Value(value) if opts.date.is_none() => {
                    let value = value.string()?;
                    match Date::parse(&value, &YMD_FMT) {
                        Ok(d) => opts.date = Some(d),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(opts))
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run(opts) => opts.run(),
            Command::Help => {
                println!("Usage: tallyweek [OPTIONS] [YYYY-MM-DD]");
                println!();
                println!("Track a day's sessions under a one-week calendar strip");
                println!();
                println!("Options:");
                println!("  -s, --strategy <week|day>");
                println!("                    Move the calendar a week or a day at a time");
                println!("                    [default: week]");
                println!("  -e, --empty       Start with no sessions instead of the demo set");
                println!("  -l, --log-file <PATH>");
                println!("                    Write log events to the given file");
                println!("  -h, --help        Display this help message and exit");
                println!("  -V, --version     Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct RunOptions {
    date: Option<Date>,
    strategy: Strategy,
    seed: Seed,
    log_file: Option<PathBuf>,
}

impl RunOptions {
    fn run(self) -> anyhow::Result<()> {
        if let Some(path) = &self.log_file {
            init_logging(path)?;
        }
        let today = OffsetDateTime::now_local()
            .context("failed to determine local date")?
            .date();
        let start = self.date.unwrap_or(today);
        info!(%today, %start, strategy = %self.strategy, seed = ?self.seed, "starting tallyweek");
        match self.strategy {
            Strategy::Week => run_app(OffsetWindow::new(start), today, self.seed),
            Strategy::Day => run_app(AnchorWindow::new(start), today, self.seed),
        }
    }
}

/// How the calendar strip picks its seven days
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum Strategy {
    /// Sunday-to-Saturday weeks, paged a week at a time
    #[default]
    Week,
    /// The Monday-to-Sunday week around the selected day, moved a day at a
    /// time
    Day,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Week => write!(f, "week"),
            Strategy::Day => write!(f, "day"),
        }
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Strategy, ParseStrategyError> {
        match s {
            "week" => Ok(Strategy::Week),
            "day" => Ok(Strategy::Day),
            _ => Err(ParseStrategyError),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error(r#"expected "week" or "day""#)]
struct ParseStrategyError;

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn run_app<W: DateWindow>(window: W, today: Date, seed: Seed) -> anyhow::Result<()> {
    with_terminal(|mut terminal| {
        terminal.hide_cursor().context("failed to hide cursor")?;
        App::new(window, today, seed).run(terminal)?;
        Ok(())
    })
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}

// The terminal owns stdout, so events only go to a file
fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&directives))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Filter events by `RUST_LOG`-style directives, letting through `info` and
/// above for anything the directives don't mention
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}
