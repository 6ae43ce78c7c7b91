use quantlib::errors::ConfigError;
use quantlib::logging;
use quantlib::render;
use quantlib::util::Scenario;
use quantlib::SignalSeries;

use std::env;
use std::error::Error;
use std::io::Write;

// Prints the banner followed by one line per observation, in insertion order.
fn print_series<W: Write>(title: &str, series: &SignalSeries, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "_".repeat(50))?;
    render::write_series(series, out)?;
    out.flush()
}

// Without a scenario file, run the built-in BTC/USD illustration
fn load_scenario(path: Option<&str>) -> Result<Scenario, ConfigError> {
    match path {
        Some(path) => Scenario::load(path),
        None => Ok(Scenario::default()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [scenario.json]", args[0]);
        std::process::exit(1);
    }

    let scenario = match load_scenario(args.get(1).map(String::as_str)) {
        Ok(scenario) => {
            let _handle = match &scenario.log_file {
                Some(path) => logging::configure_logger(path)?,
                None => logging::configure_console_logger(log::LevelFilter::Info)?,
            };
            scenario
        }
        Err(err) => {
            logging::configure_console_logger(log::LevelFilter::Info)?;
            log::error!("Failed to read scenario: {}", err);
            std::process::exit(1);
        }
    };

    let series = scenario.series();

    let stdout = std::io::stdout();
    print_series(&scenario.title, &series, &mut stdout.lock())?;

    log::info!("Observations: {}", series.cardinality());
    log::info!(
        "Weighted signal ({}): {:.2}",
        scenario.risk_level,
        series.weighted_signal(scenario.risk_level)
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_argument_runs_built_in_scenario() {
        assert_eq!(load_scenario(None).unwrap(), Scenario::default());
    }

    #[test]
    fn missing_scenario_file_is_reported() {
        let err = load_scenario(Some("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn default_scenario_output() {
        let scenario = Scenario::default();
        let mut out = Vec::new();
        print_series(&scenario.title, &scenario.series(), &mut out).unwrap();

        let expected = format!(
            "ILLUSTRATION: LOGGING BITCOIN/US DOLLAR TRANSACTIONS\n{}\n\
             Price: $96601.02 | Volume: 1.23 | Timestamp: 004500\n\
             Price: $96601.08 | Volume: 0.56 | Timestamp: 004501\n\
             Price: $96601.10 | Volume: 0.22 | Timestamp: 004502\n\
             Price: $96601.09 | Volume: 1.57 | Timestamp: 004503\n",
            "_".repeat(50)
        );
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
