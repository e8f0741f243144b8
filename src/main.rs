use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use conect::config::{AppConfig, DisplayConfig};
use conect::game::{BoardState, Color, Direction, GameOutcome, GameState, Line};

/// Evaluate Connect Four positions.
#[derive(Parser)]
#[command(name = "conect", about = "Evaluate Connect Four positions")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "conect.toml")]
    config: PathBuf,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play a sequence of columns from an empty board
    Replay {
        /// Columns (0-6), one per move, starting with the configured first player
        #[arg(required = true)]
        columns: Vec<usize>,

        /// Print the final board and outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate a board snapshot stored as JSON
    Eval {
        /// Snapshot file with a `rows` array, bottom row first
        file: PathBuf,
    },
}

#[derive(Serialize)]
struct ReplayReport<'a> {
    board: &'a BoardState,
    outcome: Option<GameOutcome>,
    winning_line: Option<Line>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    if cli.dump_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    match cli.command {
        Some(Command::Replay { columns, json }) => replay(&config, &columns, json),
        Some(Command::Eval { file }) => eval(&config.display, &file),
        None => bail!("no command given (try 'replay' or 'eval')"),
    }
}

fn replay(config: &AppConfig, columns: &[usize], json: bool) -> Result<()> {
    let mut game = GameState::new(config.game.first_player);

    for (i, &column) in columns.iter().enumerate() {
        let player = game.current_player();
        game.play(column)
            .with_context(|| format!("move {} ({} in column {})", i + 1, player.name(), column))?;
    }

    if json {
        let report = ReplayReport {
            board: game.board(),
            outcome: game.outcome(),
            winning_line: game.winning_line(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", game.board().render(|c| config.display.symbol(c)));
    match game.outcome() {
        Some(GameOutcome::Winner(player)) => {
            println!("{} wins", player.name());
            if let Some(line) = game.winning_line() {
                println!("Line: {:?} {:?}", line.direction, line.cells());
            }
        }
        Some(GameOutcome::Draw) => println!("Draw"),
        None => println!("{} to move", game.current_player().name()),
    }
    Ok(())
}

fn eval(display: &DisplayConfig, file: &Path) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    let board: BoardState = serde_json::from_str(&content)
        .with_context(|| format!("parsing board snapshot {}", file.display()))?;

    let name = |color: Color| match color {
        Color::Empty => "none",
        Color::PlayerA => "Player A",
        Color::PlayerB => "Player B",
    };

    print!("{}", board.render(|c| display.symbol(c)));
    println!("In a row:          {}", name(board.get_in_a_row_same_color_of_four()));
    println!("Forward diagonal:  {}", name(board.get_diagonal_same_color_of_four(true)));
    println!("Backward diagonal: {}", name(board.get_diagonal_same_color_of_four(false)));
    println!("Winner:            {}", name(board.is_won()));
    println!("Full:              {}", board.is_full());

    if let Some(line) = board.winning_line() {
        let direction = match line.direction {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
            Direction::Forward => "forward diagonal",
            Direction::Backward => "backward diagonal",
        };
        println!("Line:              {direction} {:?}", line.cells());
    }
    Ok(())
}
