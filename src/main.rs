use std::process::ExitCode;

use alpha_topos::config::{DEFAULT_RADIUS, DEFAULT_XMAX, DEFAULT_YMAX, ToposConfig};
use alpha_topos::report::ToposReport;
use clap::Parser;

/// Simple general topology using permutations of the ascii alphabet.
#[derive(Parser, Debug)]
#[command(name = "topos", version)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Range of the x axis of the grid
    #[arg(long, default_value_t = DEFAULT_XMAX)]
    xmax: i64,

    /// Range of the y axis of the grid
    #[arg(long, default_value_t = DEFAULT_YMAX)]
    ymax: i64,

    /// Radius of constructed subsets
    #[arg(short, long, default_value_t = DEFAULT_RADIUS)]
    radius: i64,

    /// Point to search for: two character string, lowercase
    #[arg(short, long)]
    find: Option<String>,

    /// Print the unique set of all points
    #[arg(short, long)]
    unique: bool,

    /// Print the intersected set of all points
    #[arg(short, long)]
    intersect: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl From<Cli> for ToposConfig {
    fn from(cli: Cli) -> Self {
        ToposConfig {
            xmax: cli.xmax,
            ymax: cli.ymax,
            radius: cli.radius,
            find: cli.find,
            unique: cli.unique,
            intersect: cli.intersect,
            json: cli.json,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let config = ToposConfig::from(Cli::parse());
    let report = match ToposReport::run(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    if config.json {
        match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{report}");
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_map_onto_config() {
        let cli = Cli::try_parse_from(["topos", "--xmax", "3", "-r", "-1", "-f", "ab", "-u", "-i"])
            .unwrap();
        let cfg = ToposConfig::from(cli);
        assert_eq!(cfg.xmax, 3);
        assert_eq!(cfg.ymax, DEFAULT_YMAX);
        assert_eq!(cfg.radius, -1);
        assert_eq!(cfg.find.as_deref(), Some("ab"));
        assert!(cfg.unique && cfg.intersect && !cfg.json);
    }
}
