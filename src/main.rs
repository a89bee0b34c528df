//! Snake Cube Solver
//!
//! Folds a chain of unit cubes, split into straight segments, so that it fills
//! a cube. Solves the built-in puzzles or one given on the command line, prints
//! the fold as a sequence of N/S/E/W/U/D moves, and can show it in an
//! interactive 3D viewer.

mod visualization;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use snakecube::puzzles::{self, PuzzleDefinition, PUZZLES};
use snakecube::{grid, SearchOutcome, SnakePuzzle, Trajectory};

/// Solves snake cube puzzles.
#[derive(Parser)]
#[command(name = "snakecube")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve one puzzle, or every built-in puzzle, and print the folds.
    Solve {
        #[command(flatten)]
        target: PuzzleArgs,

        /// Also print the visit order slice by slice.
        #[arg(long)]
        grid: bool,
    },
    /// Solve a puzzle and show the fold in an interactive 3D viewer.
    Display {
        #[command(flatten)]
        target: PuzzleArgs,
    },
    /// List the built-in puzzles.
    List,
}

#[derive(Args, Clone)]
struct PuzzleArgs {
    /// Built-in puzzle name, or "all".
    #[arg(default_value = "all")]
    puzzle: String,

    /// Segment lengths of a custom snake; overrides the puzzle name.
    #[arg(long, value_delimiter = ',', requires = "width")]
    multipliers: Vec<usize>,

    /// Cube width of a custom snake.
    #[arg(long)]
    width: Option<usize>,

    /// Give up after this many expanded states.
    #[arg(long)]
    max_nodes: Option<u64>,
}

/// A puzzle resolved from the command line, built-in or custom.
struct Target {
    name: String,
    width: usize,
    multipliers: Vec<usize>,
}

impl Target {
    fn from_definition(definition: &PuzzleDefinition) -> Self {
        Self {
            name: definition.name.to_string(),
            width: definition.width,
            multipliers: definition.multipliers.to_vec(),
        }
    }

    fn build(&self) -> anyhow::Result<SnakePuzzle> {
        SnakePuzzle::new(&self.multipliers, self.width)
            .with_context(|| format!("invalid puzzle definition: {}", self.name))
    }
}

impl PuzzleArgs {
    fn targets(&self) -> anyhow::Result<Vec<Target>> {
        if !self.multipliers.is_empty() {
            let Some(width) = self.width else {
                bail!("--multipliers needs --width");
            };
            return Ok(vec![Target {
                name: "custom".to_string(),
                width,
                multipliers: self.multipliers.clone(),
            }]);
        }

        if self.puzzle.eq_ignore_ascii_case("all") {
            return Ok(PUZZLES.iter().map(Target::from_definition).collect());
        }

        match puzzles::find(&self.puzzle) {
            Some(definition) => Ok(vec![Target::from_definition(definition)]),
            None => bail!(
                "unknown puzzle '{}', expected one of: all, {}",
                self.puzzle,
                puzzle_names()
            ),
        }
    }
}

fn puzzle_names() -> String {
    PUZZLES
        .iter()
        .map(|definition| definition.name)
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Solve { target, grid }) => run_solver(&target, grid),
        Some(Command::Display { target }) => run_display(&target),
        Some(Command::List) => {
            run_list();
            Ok(())
        }
        None => {
            // default: solve every built-in puzzle
            let all = PuzzleArgs {
                puzzle: "all".to_string(),
                multipliers: Vec::new(),
                width: None,
                max_nodes: None,
            };
            run_solver(&all, false)
        }
    }
}

/// Searches one puzzle and logs the outcome; returns the fold if one was found.
fn search(target: &Target, max_nodes: Option<u64>) -> anyhow::Result<Option<Trajectory>> {
    let puzzle = target.build()?;
    let result = snakecube::depth_first_search(&puzzle, max_nodes);
    let stats = result.stats;

    match result.outcome {
        SearchOutcome::Solved(trajectory) => {
            info!(
                puzzle = %target.name,
                expanded = stats.expanded,
                elapsed_ms = stats.elapsed.as_millis() as u64,
                "solved"
            );
            Ok(Some(trajectory))
        }
        SearchOutcome::Exhausted => {
            warn!(puzzle = %target.name, expanded = stats.expanded, "no fold exists");
            Ok(None)
        }
        SearchOutcome::LimitReached => {
            warn!(
                puzzle = %target.name,
                expanded = stats.expanded,
                "node limit reached before a fold was found"
            );
            Ok(None)
        }
    }
}

/// Solves each requested puzzle and prints its fold.
fn run_solver(args: &PuzzleArgs, show_grid: bool) -> anyhow::Result<()> {
    for target in args.targets()? {
        if let Some(trajectory) = search(&target, args.max_nodes)? {
            println!("{}", report(&target.name, target.width, &trajectory, show_grid));
        }
    }
    Ok(())
}

/// Solves a single puzzle and opens the viewer on its fold.
fn run_display(args: &PuzzleArgs) -> anyhow::Result<()> {
    let mut targets = args.targets()?;
    if targets.len() != 1 {
        bail!("display shows one puzzle at a time, pick one of: {}", puzzle_names());
    }
    let target = targets.remove(0);
    let puzzle = target.build()?;

    match search(&target, args.max_nodes)? {
        Some(trajectory) => {
            println!("{}", report(&target.name, target.width, &trajectory, false));
            println!("Controls: Left/Right step through the fold, Up/Down explode, R reset");
            visualization::display(&puzzle, &trajectory);
        }
        None => println!("Nothing to display for {}", target.name),
    }
    Ok(())
}

/// Prints the built-in puzzle definitions.
fn run_list() {
    for definition in PUZZLES {
        let multipliers: Vec<String> = definition
            .multipliers
            .iter()
            .map(|m| m.to_string())
            .collect();
        println!(
            "{:<6} {w}x{w}x{w}  {}",
            definition.name,
            multipliers.join(","),
            w = definition.width
        );
    }
}

/// Formats a solved fold for printing.
fn report(name: &str, width: usize, trajectory: &Trajectory, show_grid: bool) -> String {
    let mut output = format!("{name}: {trajectory}");
    if show_grid {
        output.push_str("\n\n");
        output.push_str(&grid::format_solution(width, trajectory));
    }
    output
}
