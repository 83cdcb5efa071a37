//! Sea battle against the computer: random fleets on both sides, letter+number
//! shot input, side-by-side boards.

use std::io::{self, BufRead};

use clap::{value_t, ArgMatches};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

use gridduel::board::{
    random_board, CannotShootReason, Cell, CellView, Dimensions, ShotOutcome,
};
use gridduel::game::combat::{random_shot, Battle};
use gridduel::game::{cast_lots, Player};
use gridduel::ships::Fleet;

use crate::input::InputReader;

/// Column labels, left to right. Covers the largest supported board.
const LETTERS: &[u8] = b"abcdefghij";

/// Matcher for shots: column letter then 1-based row number.
static SHOT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<col>[a-j])\s*(?P<row>[0-9]{1,2})$").unwrap());

pub fn run(matches: &ArgMatches) -> io::Result<()> {
    let size = value_t!(matches, "size", usize).unwrap_or_else(|e| e.exit());
    let budget = value_t!(matches, "budget", usize).unwrap_or_else(|e| e.exit());
    // The clap validator keeps size in the supported range.
    let dim = Dimensions::new(size).unwrap();
    let fleet = Fleet::scaled(&dim);

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let mut rng = rand::thread_rng();

    let first = match matches.value_of("first").unwrap() {
        "me" => Player::P1,
        "computer" => Player::P2,
        "lottery" => {
            let first = cast_lots(&mut rng);
            println!("The dice give the first shot to {}.", seat_name(first));
            first
        }
        _ => unreachable!(),
    };

    println!("Placing fleets: {} ships each.", fleet.len());
    let yours = random_board(dim, &fleet, &mut rng, budget);
    let theirs = random_board(dim, &fleet, &mut rng, budget);
    let mut battle = Battle::new(yours, theirs, first);

    while battle.winner().is_none() {
        match battle.current() {
            Player::P1 => human_turn(&mut battle, &mut input, dim)?,
            Player::P2 => computer_turn(&mut battle, &mut rng, dim),
        }
    }

    show_boards(&battle, true);
    match battle.winner().unwrap() {
        Player::P1 => println!("The enemy fleet is destroyed. You win!"),
        Player::P2 => println!("Your fleet is destroyed. The computer wins."),
    }
    Ok(())
}

/// Show the boards, prompt for a shot and fire it. Rejected shots re-prompt
/// without consuming the turn.
fn human_turn<B: BufRead>(
    battle: &mut Battle,
    input: &mut InputReader<B>,
    dim: Dimensions,
) -> io::Result<()> {
    show_boards(battle, false);
    loop {
        let cell = input.read_input_lower(
            "Your shot (column letter + row number, e.g. b3):",
            |line| match parse_shot(line, &dim) {
                Some(cell) => Some(cell),
                None => {
                    println!(
                        "Enter a column letter a-{} and a row number 1-{}.",
                        LETTERS[dim.size() - 1] as char,
                        dim.size()
                    );
                    None
                }
            },
        )?;
        match battle.fire(cell) {
            Ok(outcome) => {
                report(outcome, battle, Player::P1);
                return Ok(());
            }
            Err(CannotShootReason::AlreadyShot) => {
                println!("You already know what's at {}.", coord_name(cell));
            }
            Err(reason) => println!("Shot rejected: {}", reason),
        }
    }
}

/// Fire a uniform random shot, retrying silently past cells the computer has
/// already resolved.
fn computer_turn<R: Rng>(battle: &mut Battle, rng: &mut R, dim: Dimensions) {
    loop {
        let cell = random_shot(&dim, rng);
        match battle.fire(cell) {
            Ok(outcome) => {
                println!("The computer fires at {}.", coord_name(cell));
                report(outcome, battle, Player::P2);
                return;
            }
            Err(CannotShootReason::AlreadyShot) => continue,
            Err(reason) => unreachable!("in-bounds shot rejected mid-battle: {}", reason),
        }
    }
}

fn report(outcome: ShotOutcome, battle: &Battle, shooter: Player) {
    let target = battle.board(shooter.opponent());
    match outcome {
        ShotOutcome::Miss => println!("Miss. Next shot: {}.", seat_name(shooter.opponent())),
        ShotOutcome::Hit(_) => println!("Hit! Extra shot for {}.", seat_name(shooter)),
        ShotOutcome::Destroyed(_) => println!(
            "Ship destroyed, {} of {} down! Extra shot for {}.",
            target.destroyed(),
            target.fleet_size(),
            seat_name(shooter)
        ),
        ShotOutcome::Defeated(_) => println!("The last ship is down."),
    }
}

/// Parse a shot like `b3` into a cell, rejecting anything off the board.
fn parse_shot(line: &str, dim: &Dimensions) -> Option<Cell> {
    let captures = SHOT.captures(line)?;
    let col = (captures.name("col").unwrap().as_str().as_bytes()[0] - b'a') as usize;
    let row: usize = captures.name("row").unwrap().as_str().parse().ok()?;
    if row == 0 {
        return None;
    }
    dim.check_bounds(Cell::new(row - 1, col))
}

/// Name a cell the way shots are typed: column letter then 1-based row.
fn coord_name(cell: Cell) -> String {
    format!("{}{}", LETTERS[cell.col] as char, cell.row + 1)
}

/// Print both boards side by side: the player's own fleet revealed, the
/// enemy's hidden unless the battle is over.
fn show_boards(battle: &Battle, reveal_enemy: bool) {
    let yours = battle.board(Player::P1);
    let theirs = battle.board(Player::P2);
    let size = yours.dimensions().size();
    // Each board block is a 3-wide row label plus 2 chars per column; 4
    // spaces separate the blocks.
    let block = 3 + size * 2;

    println!();
    println!("{:<width$}    {}", "Your fleet", "Enemy waters", width = block);
    let header = || {
        print!("   ");
        for col in 0..size {
            print!("{} ", LETTERS[col] as char);
        }
    };
    header();
    print!("    ");
    header();
    println!();

    for (idx, (own_row, enemy_row)) in yours.iter_rows().zip(theirs.iter_rows()).enumerate() {
        print!("{:>2} ", idx + 1);
        for view in own_row {
            print!("{} ", glyph(view, false));
        }
        print!("    ");
        print!("{:>2} ", idx + 1);
        for view in enemy_row {
            print!("{} ", glyph(view, !reveal_enemy));
        }
        println!();
    }
    println!();
}

fn glyph(view: CellView, hide_ships: bool) -> char {
    match view {
        CellView::Empty => '.',
        CellView::Ship if hide_ships => '.',
        CellView::Ship => '#',
        CellView::Hit => 'X',
        CellView::Miss => 'o',
        CellView::Halo => '*',
    }
}

fn seat_name(player: Player) -> &'static str {
    match player {
        Player::P1 => "you",
        Player::P2 => "the computer",
    }
}
