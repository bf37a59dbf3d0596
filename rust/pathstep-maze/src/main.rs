use anyhow::Result;
use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

use pathstep_maze::{load_maze, solve, Args};

fn main() {
    let args = Args::parse();

    // Structured logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if args.log_json {
        fmt().with_env_filter(filter).with_writer(std::io::stderr).json().init();
    } else {
        fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    }

    match run(&args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            error!(error = %format!("{e:#}"), "pathstep-maze failed");
            std::process::exit(2);
        }
    }
}

fn run(args: &Args) -> Result<bool> {
    tracing::info!(core_version = %pathstep_core::version(), "starting pathstep-maze");
    let text = load_maze(args.maze.as_deref())?;
    let report = solve(&text, args.heuristic_scale, args.search_options(), args.mark)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if let Some(drawing) = &report.drawing {
        println!("{drawing}");
        println!("cost {} in {} steps", report.cost, report.steps);
    } else if let Some(reason) = &report.reason {
        println!("no solution: {reason}");
    }
    Ok(report.path.is_some())
}
