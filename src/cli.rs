use std::path::PathBuf;

use clap::builder::{styling::AnsiColor, Styles};
use clap::{Parser, Subcommand};

const ABOUT: &str = "Text weather reports from AccuWeather JSON exports";

const LONG_ABOUT: &str = "
Turns AccuWeather JSON documents saved on disk into plain-text weather
reports.

`forecast` takes a daily-forecast document (an object with a `DailyForecasts`
key) and prints a multi-day overview followed by one block per day.
`history` takes a document holding a bare array of hourly observations and
prints a five-line summary of the recorded period.

Reports always go to stdout; pass --output to also save them to a file.
";

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default())
    .usage(AnsiColor::Green.on_default())
    .literal(AnsiColor::Green.on_default())
    .placeholder(AnsiColor::Green.on_default());

#[derive(Parser, Debug)]
#[command(version, styles=STYLES, about=ABOUT, long_about = LONG_ABOUT)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Summarize a daily-forecast document
    Forecast {
        #[arg(help = "Path to the forecast JSON document")]
        file: PathBuf,

        #[arg(short, long, help = "Also save the report to this file")]
        output: Option<PathBuf>,
    },

    /// Summarize an hourly-observations document
    History {
        #[arg(help = "Path to the observations JSON document")]
        file: PathBuf,

        #[arg(short, long, help = "Also save the report to this file")]
        output: Option<PathBuf>,
    },
}
