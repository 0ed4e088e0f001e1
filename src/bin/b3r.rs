//! Binary entry point: run B-tree operations scripts.
#![forbid(unsafe_code)]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use b3rtree::script::Interpreter;
use b3rtree::{Degree, DEFAULT_DEGREE};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "b3r",
    version,
    about = "Run B-tree operations scripts (c, i, d, mn, mx, s, nn, nk, b)"
)]
struct Cli {
    #[arg(value_name = "SCRIPT", help = "Script files to run in order; prompts when omitted")]
    scripts: Vec<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_DEGREE, help = "Maximum children per node (>= 3)")]
    degree: usize,

    #[arg(short, long, action = ArgAction::Count, help = "Log tree rebalancing (-v debug, -vv trace)")]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "b3rtree=debug",
        _ => "b3rtree=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> b3rtree::Result<()> {
    let mut interp = Interpreter::new(Degree::new(cli.degree)?);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.scripts.is_empty() {
        for path in &cli.scripts {
            interp.run_file(path, &mut out)?;
        }
        return Ok(());
    }

    // Interactive: keep asking for script names until an empty line.
    writeln!(out, "Welcome to the B3R tree operations")?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        write!(out, "Enter the name of the operations file (or press Enter to quit): ")?;
        out.flush()?;

        let mut name = String::new();
        if input.read_line(&mut name)? == 0 {
            break;
        }
        let name = name.trim();
        if name.is_empty() {
            break;
        }

        // A bad file should not end the session.
        if let Err(err) = interp.run_file(name, &mut out) {
            writeln!(out, "Error running {}: {}", name, err)?;
        }
    }
    writeln!(out, "Exiting program...")?;

    Ok(())
}
