mod input;

use clap::Parser;
use crossterm::style::Stylize;
use fifteen_core::{Board, LayoutError, MoveError};
use input::{parse_command, parse_layout, Command};
use rand::Rng;
use std::io::{self, Write};
use std::process::ExitCode;

/// Slide numbered tiles until 1-15 read in order, row by row.
#[derive(Parser)]
#[command(name = "fifteen", version, about)]
struct Args {
    /// Start from a seeded shuffle instead of the interactive dialog
    #[arg(long)]
    seed: Option<u64>,

    /// Start from an explicit ordering of 1-16, e.g. "1 2 3 ... 16"
    #[arg(long, conflicts_with = "seed")]
    layout: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> io::Result<ExitCode> {
    let board = match setup_board(&args)? {
        Some(board) => board,
        None => return Ok(ExitCode::SUCCESS), // input closed during the dialog
    };

    if !board.is_solvable() {
        println!("{}", "Game is not solvable. What a pity.".red());
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Game is solvable: Go ahead!".green());
    println!("{board}");
    play(board)
}

/// Build the starting board from the flags, or walk the interactive dialog.
/// `None` means stdin closed before a board was chosen.
fn setup_board(args: &Args) -> io::Result<Option<Board>> {
    if let Some(seed) = args.seed {
        return Ok(Some(Board::from_seed(seed)));
    }
    if let Some(line) = &args.layout {
        match layout_from_line(line) {
            Ok(board) => return Ok(Some(board)),
            Err(message) => {
                return Err(io::Error::new(io::ErrorKind::InvalidInput, message));
            }
        }
    }

    loop {
        let Some(choice) = read_line("Random initialization (y/n): ")? else {
            return Ok(None);
        };
        match choice.as_str() {
            "y" | "Y" => {
                let Some(seed_line) = read_line("Give a seed value or an empty line: ")?
                else {
                    return Ok(None);
                };
                if seed_line.is_empty() {
                    return Ok(Some(Board::from_seed(rand::thread_rng().gen())));
                }
                match seed_line.parse::<u64>() {
                    Ok(seed) => return Ok(Some(Board::from_seed(seed))),
                    Err(_) => println!("Invalid seed: {seed_line}"),
                }
            }
            "n" | "N" => {
                println!("Enter the numbers 1-16 in a desired order (16 means empty):");
                let Some(line) = read_line("")? else {
                    return Ok(None);
                };
                match layout_from_line(&line) {
                    Ok(board) => return Ok(Some(board)),
                    Err(message) => println!("{message}"),
                }
            }
            other => println!("Unknown choice: {other}"),
        }
    }
}

fn layout_from_line(line: &str) -> Result<Board, String> {
    let numbers = parse_layout(line)?;
    Board::from_layout(&numbers).map_err(|err| match err {
        LayoutError::Missing(tile) => format!("Number {tile} is missing"),
        LayoutError::WrongLength(_) => err.to_string(),
    })
}

/// The move loop: prompt, apply, report, reprint, until solved or quit.
fn play(mut board: Board) -> io::Result<ExitCode> {
    while !board.is_solved() {
        let Some(line) = read_line("Dir (command, number): ")? else {
            return Ok(ExitCode::SUCCESS);
        };

        match parse_command(&line) {
            Ok(Command::Quit) => return Ok(ExitCode::SUCCESS),
            Ok(Command::Move(dir, tile)) => match board.move_tile(dir, tile) {
                Ok(()) => {}
                Err(MoveError::InvalidTile(tile)) => println!("Invalid number: {tile}"),
                Err(MoveError::NotAdjacent { dir, .. }) => {
                    println!("Impossible direction: {dir}")
                }
            },
            Err(err) => println!("{err}"),
        }

        println!("{board}");
    }

    println!("{}", "You won!".green().bold());
    Ok(ExitCode::SUCCESS)
}

/// Prompt and read one trimmed line; `None` once stdin reaches end of input.
fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
