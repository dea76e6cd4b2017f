use clap::{ArgAction, Parser, Subcommand};
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, Level};
use u_palette::experiment::Experiment;
use u_palette::ga::GaConfig;
use u_palette::problems::Graph;
use u_palette::reduction::ReductionConfig;

#[derive(Parser)]
#[command(name = "u-palette")]
#[command(author, version, about = "GA experiments: N-queens and graph color reduction")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Independent trials per experiment
    #[arg(short, long, default_value_t = 100)]
    runs: usize,

    /// Master seed; random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Board size for the queens experiment
    #[arg(short = 'n', long, default_value_t = 8)]
    queens: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Solve N-queens repeatedly and report success rate
    Queens,
    /// Color the demo graph and reduce the palette
    Coloring,
    /// Run both experiments
    All,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> u_palette::Result<()> {
    let command = cli.command.unwrap_or(Command::All);
    let experiment = Experiment::new(cli.runs, cli.seed.unwrap_or_else(rand::random));

    println!("=== GA experiments (seed {}) ===", experiment.seed);
    let started = Instant::now();

    if matches!(command, Command::Queens | Command::All) {
        let report = experiment.queens(&GaConfig::queens(cli.queens))?;
        println!("{report}");
    }
    if matches!(command, Command::Coloring | Command::All) {
        let report = experiment.coloring(&Graph::demo(), &ReductionConfig::default())?;
        println!("{report}");
    }

    println!("Time: {:.2} s", started.elapsed().as_secs_f64());
    Ok(())
}
