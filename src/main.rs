mod cli;

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use wxreport::accuweather::forecast::Forecast;
use wxreport::accuweather::observation::Observations;
use wxreport::export::export;
use wxreport::report;

use crate::cli::{Args, Command};

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Forecast { file, output } => {
            let forecast = Forecast::from_file(&file)?;
            let text = report::forecast_report(&forecast.daily_forecasts)?;
            // The report already ends in a blank line.
            print!("{text}");
            save(&text, output.as_deref())
        }
        Command::History { file, output } => {
            let observations = Observations::from_file(&file)?;
            let text = report::historical_summary(&observations.hours)?;
            println!("{text}");
            save(&text, output.as_deref())
        }
    }
}

fn save(text: &str, output: Option<&Path>) -> Result<()> {
    if let Some(path) = output {
        export(text, path)?;
        println!("Report saved to `{}`", path.display());
    }
    Ok(())
}
