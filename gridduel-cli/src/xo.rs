//! Noughts-and-crosses series, against the computer or hot-seat.

use std::io::{self, BufRead};

use clap::{value_t, ArgMatches};

use gridduel::game::series::{CannotMarkReason, RoundOutcome, Series};
use gridduel::game::Player;
use gridduel::search::{Difficulty, Mark, Position};

use crate::input::InputReader;

/// Who plays the second seat.
enum Opponent {
    Computer(Difficulty),
    Human,
}

pub fn run(matches: &ArgMatches) -> io::Result<()> {
    let opponent = match matches.value_of("difficulty").unwrap() {
        "easy" => Opponent::Computer(Difficulty::Easy),
        "normal" => Opponent::Computer(Difficulty::Normal),
        "impossible" => Opponent::Computer(Difficulty::Impossible),
        "human" => Opponent::Human,
        _ => unreachable!(),
    };
    let margin = value_t!(matches, "margin", u32).unwrap_or_else(|e| e.exit());

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let mut rng = rand::thread_rng();

    let mut series = Series::new(margin, &mut rng);
    println!("The series ends at a lead of {} round wins.", margin);
    println!(
        "The dice give X and the first move to {}.",
        seat_name(series.current(), &opponent)
    );

    while series.winner().is_none() {
        let mover = series.current();
        show_position(series.board());

        let cell = match &opponent {
            Opponent::Computer(difficulty) if mover == Player::P2 => {
                let cell = difficulty
                    .choose_move(series.board(), series.mark_of(mover), &mut rng)
                    .unwrap();
                println!("The computer plays {}.", cell_to_numpad(cell));
                cell
            }
            _ => match read_move(&mut input, &series, &opponent)? {
                Some(cell) => cell,
                // Quit confirmed.
                None => return Ok(()),
            },
        };

        match series.play(cell, &mut rng) {
            Err(CannotMarkReason::Occupied) => println!("That cell is already taken."),
            Err(reason) => println!("Move rejected: {}", reason),
            Ok(RoundOutcome::Continue) => {}
            Ok(RoundOutcome::RoundWon(winner)) => {
                println!();
                println!("Round to {}!", seat_name(winner, &opponent));
                show_score(&series, &opponent);
                println!(
                    "X and the first move of the next round go to {}.",
                    seat_name(winner, &opponent)
                );
            }
            Ok(RoundOutcome::Draw) => {
                println!();
                println!("Drawn round.");
                show_score(&series, &opponent);
                println!(
                    "The dice give X and the first move to {}.",
                    seat_name(series.current(), &opponent)
                );
            }
            Ok(RoundOutcome::SeriesWon(winner)) => {
                println!();
                println!("Round to {}!", seat_name(winner, &opponent));
                show_score(&series, &opponent);
                println!(
                    "The series goes to {} by {} rounds!",
                    seat_name(winner, &opponent),
                    margin
                );
            }
        }
    }
    Ok(())
}

/// Prompt the current player for a move. `Ok(None)` means a confirmed quit.
fn read_move<B: BufRead>(
    input: &mut InputReader<B>,
    series: &Series,
    opponent: &Opponent,
) -> io::Result<Option<usize>> {
    enum Command {
        Move(usize),
        Quit,
    }
    let mover = series.current();
    let prompt = format!(
        "Move for {} ({}) [1-9, numpad layout; q quits]:",
        seat_name(mover, opponent),
        mark_glyph(series.mark_of(mover))
    );
    loop {
        let cmd = input.read_input_lower(&prompt, |line| match line {
            "q" | "quit" | "exit" => Some(Command::Quit),
            other => match other.parse::<usize>() {
                Ok(n) if (1..=9).contains(&n) => Some(Command::Move(numpad_to_cell(n))),
                _ => {
                    println!("Enter a digit 1-9 (numpad layout) or q.");
                    None
                }
            },
        })?;
        match cmd {
            Command::Move(cell) => return Ok(Some(cell)),
            Command::Quit => {
                let confirmed =
                    input.read_input_lower("Abandon the series? (y/N)", |line| match line {
                        "y" | "yes" => Some(true),
                        "n" | "no" | "" => Some(false),
                        _ => None,
                    })?;
                if confirmed {
                    return Ok(None);
                }
            }
        }
    }
}

/// Print the board. Empty cells show their numpad digit as an input hint.
fn show_position(position: &Position) {
    println!();
    for row in 0..3 {
        if row > 0 {
            println!("---+---+---");
        }
        let glyph = |col: usize| match position.get(row * 3 + col) {
            Some(mark) => mark_glyph(mark).to_string(),
            None => cell_to_numpad(row * 3 + col).to_string(),
        };
        println!(" {} | {} | {}", glyph(0), glyph(1), glyph(2));
    }
    println!();
}

fn show_score(series: &Series, opponent: &Opponent) {
    println!(
        "Score: {} {}, {} {}.",
        seat_name(Player::P1, opponent),
        series.wins(Player::P1),
        seat_name(Player::P2, opponent),
        series.wins(Player::P2)
    );
}

fn seat_name(player: Player, opponent: &Opponent) -> &'static str {
    match (player, opponent) {
        (Player::P1, Opponent::Human) => "player 1",
        (Player::P2, Opponent::Human) => "player 2",
        (Player::P1, Opponent::Computer(_)) => "you",
        (Player::P2, Opponent::Computer(_)) => "the computer",
    }
}

fn mark_glyph(mark: Mark) -> char {
    match mark {
        Mark::X => 'X',
        Mark::O => 'O',
    }
}

/// Map a numpad digit (1 bottom-left, 9 top-right) to a row-major cell index
/// with row 0 at the top.
fn numpad_to_cell(digit: usize) -> usize {
    let row = 2 - (digit - 1) / 3;
    let col = (digit - 1) % 3;
    row * 3 + col
}

/// Inverse of [`numpad_to_cell`], used for display hints.
fn cell_to_numpad(cell: usize) -> usize {
    let row = cell / 3;
    let col = cell % 3;
    (2 - row) * 3 + col + 1
}
