use gridduel::search::{
    search, CannotMarkReason, Difficulty, Mark, Position, OPENING_CELLS, WIN_SCORE,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Build a position from lists of X and O cells.
fn position(xs: &[usize], os: &[usize]) -> Position {
    let mut pos = Position::new();
    for &cell in xs {
        pos.place(cell, Mark::X).unwrap();
    }
    for &cell in os {
        pos.place(cell, Mark::O).unwrap();
    }
    pos
}

#[test]
fn place_rejects_bad_cells() {
    let mut pos = Position::new();
    assert_eq!(
        pos.place(9, Mark::X).unwrap_err(),
        CannotMarkReason::OutOfBounds
    );
    pos.place(4, Mark::X).unwrap();
    assert_eq!(
        pos.place(4, Mark::O).unwrap_err(),
        CannotMarkReason::Occupied
    );
}

#[test]
fn winner_detects_rows_columns_and_diagonals() {
    assert_eq!(position(&[3, 4, 5], &[0, 8]).winner(), Some(Mark::X));
    assert_eq!(position(&[0, 8], &[1, 4, 7]).winner(), Some(Mark::O));
    assert_eq!(position(&[0, 4, 8], &[1, 2]).winner(), Some(Mark::X));
    assert_eq!(position(&[2, 4, 6], &[0, 1]).winner(), Some(Mark::X));
    assert_eq!(position(&[0, 1], &[3, 4]).winner(), None);
}

#[test]
fn empty_board_is_a_draw_under_perfect_play() {
    let (value, best) = search(&Position::new(), Mark::X);
    assert_eq!(value, 0);
    // Ties break toward the first empty cell.
    assert_eq!(best, Some(0));
}

#[test]
fn search_takes_an_immediate_win() {
    // X holds two of the top row; completing it wins.
    let pos = position(&[0, 1], &[3, 4]);
    let (value, best) = search(&pos, Mark::X);
    assert_eq!(value, WIN_SCORE);
    assert_eq!(best, Some(2));
}

#[test]
fn search_blocks_an_immediate_loss() {
    // X threatens the top row; O's only non-losing reply is the block.
    let pos = position(&[0, 1], &[4]);
    let (_, best) = search(&pos, Mark::O);
    assert_eq!(best, Some(2));
}

#[test]
fn search_is_terminal_on_decided_positions() {
    let won = position(&[0, 1, 2], &[3, 4]);
    assert_eq!(search(&won, Mark::X), (WIN_SCORE, None));
    assert_eq!(search(&won, Mark::O), (-WIN_SCORE, None));

    // Full board, no winner.
    let drawn = position(&[0, 2, 3, 7, 8], &[1, 4, 5, 6]);
    assert!(drawn.is_full());
    assert_eq!(drawn.winner(), None);
    assert_eq!(search(&drawn, Mark::X), (0, None));
}

#[test]
fn search_never_returns_an_occupied_cell() {
    let pos = position(&[0, 4], &[8]);
    let (_, best) = search(&pos, Mark::O);
    let best = best.unwrap();
    assert_eq!(pos.get(best), None);
}

#[test]
fn easy_picks_only_empty_cells() {
    let mut rng = StdRng::seed_from_u64(11);
    let pos = position(&[0, 4, 5], &[1, 8]);
    for _ in 0..100 {
        let cell = Difficulty::Easy.choose_move(&pos, Mark::O, &mut rng).unwrap();
        assert_eq!(pos.get(cell), None);
    }
}

#[test]
fn normal_opens_from_center_or_corners() {
    let mut rng = StdRng::seed_from_u64(23);
    let empty = Position::new();
    for _ in 0..100 {
        let cell = Difficulty::Normal
            .choose_move(&empty, Mark::X, &mut rng)
            .unwrap();
        assert!(OPENING_CELLS.contains(&cell));
    }

    // With one cell taken the opening policy still applies and avoids it.
    let pos = position(&[4], &[]);
    for _ in 0..100 {
        let cell = Difficulty::Normal
            .choose_move(&pos, Mark::O, &mut rng)
            .unwrap();
        assert!(OPENING_CELLS.contains(&cell));
        assert_ne!(cell, 4);
    }
}

#[test]
fn normal_searches_after_the_opening() {
    let mut rng = StdRng::seed_from_u64(5);
    // 7 cells remain, so normal plays the full search and takes the win.
    let pos = position(&[0, 1], &[3, 4]);
    let cell = Difficulty::Normal
        .choose_move(&pos, Mark::X, &mut rng)
        .unwrap();
    assert_eq!(cell, 2);
}

#[test]
fn impossible_takes_the_win() {
    let mut rng = StdRng::seed_from_u64(5);
    let pos = position(&[0, 1], &[3, 4]);
    let cell = Difficulty::Impossible
        .choose_move(&pos, Mark::X, &mut rng)
        .unwrap();
    assert_eq!(cell, 2);
}

#[test]
fn choose_move_is_none_on_terminal_positions() {
    let mut rng = StdRng::seed_from_u64(9);
    let won = position(&[0, 1, 2], &[3, 4]);
    for difficulty in &[Difficulty::Easy, Difficulty::Normal, Difficulty::Impossible] {
        assert_eq!(difficulty.choose_move(&won, Mark::O, &mut rng), None);
    }
    let drawn = position(&[0, 2, 3, 7, 8], &[1, 4, 5, 6]);
    assert_eq!(Difficulty::Easy.choose_move(&drawn, Mark::X, &mut rng), None);
}
