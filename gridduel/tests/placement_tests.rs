use gridduel::board::{
    random_board, BoardSetup, CannotPlaceReason, Cell, Dimensions, DEFAULT_PLACEMENT_BUDGET,
};
use gridduel::ships::{Fleet, Orientation, Ship};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn setup(size: usize, lengths: Vec<usize>) -> BoardSetup {
    BoardSetup::new(Dimensions::new(size).unwrap(), Fleet::new(lengths))
}

#[test]
fn place_rejects_out_of_bounds() {
    let mut setup = setup(6, vec![3]);
    // Cells (0,4),(0,5),(0,6): last one is off the board.
    let err = setup
        .place(0, Cell::new(0, 4), Orientation::Horizontal)
        .unwrap_err();
    assert_eq!(err.reason, CannotPlaceReason::OutOfBounds);
}

#[test]
fn place_rejects_overlap_and_adjacency() {
    let mut setup = setup(6, vec![2, 2, 2]);
    setup
        .place(0, Cell::new(0, 0), Orientation::Horizontal)
        .unwrap();

    // Direct overlap with (0,0).
    let err = setup
        .place(1, Cell::new(0, 0), Orientation::Vertical)
        .unwrap_err();
    assert_eq!(err.reason, CannotPlaceReason::Occupied);

    // (1,2) touches (0,1) diagonally, so the halo rejects it.
    let err = setup
        .place(1, Cell::new(1, 2), Orientation::Horizontal)
        .unwrap_err();
    assert_eq!(err.reason, CannotPlaceReason::Occupied);

    // Two rows of separation is enough.
    setup
        .place(1, Cell::new(3, 0), Orientation::Horizontal)
        .unwrap();
}

#[test]
fn place_rejects_double_placement() {
    let mut setup = setup(6, vec![2]);
    setup
        .place(0, Cell::new(0, 0), Orientation::Horizontal)
        .unwrap();
    let err = setup
        .place(0, Cell::new(4, 0), Orientation::Horizontal)
        .unwrap_err();
    assert_eq!(err.reason, CannotPlaceReason::AlreadyPlaced);
}

#[test]
fn failed_placement_commits_nothing() {
    let mut setup = setup(6, vec![2, 3]);
    setup
        .place(0, Cell::new(0, 0), Orientation::Horizontal)
        .unwrap();

    // Runs off the right edge through (4,6).
    let err = setup
        .place(1, Cell::new(4, 4), Orientation::Horizontal)
        .unwrap_err();
    assert_eq!(err.reason, CannotPlaceReason::OutOfBounds);

    // The failed attempt left (4,4) and (4,5) unoccupied, so a placement
    // covering them still goes through.
    setup
        .place(1, Cell::new(4, 3), Orientation::Horizontal)
        .unwrap();
}

#[test]
fn corner_halo_is_clipped() {
    let mut setup = setup(6, vec![1, 1, 1]);
    setup
        .place(0, Cell::new(0, 0), Orientation::Horizontal)
        .unwrap();

    // The three in-bounds neighbors of the corner are forbidden.
    for anchor in &[Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 1)] {
        let err = setup
            .place(1, *anchor, Orientation::Horizontal)
            .unwrap_err();
        assert_eq!(err.reason, CannotPlaceReason::Occupied);
    }
    // One cell beyond the halo is fine.
    setup
        .place(1, Cell::new(0, 2), Orientation::Horizontal)
        .unwrap();
}

#[test]
fn start_requires_all_ships_placed() {
    let mut setup = setup(6, vec![1, 1]);
    assert!(!setup.ready());
    setup
        .place(0, Cell::new(0, 0), Orientation::Horizontal)
        .unwrap();

    let mut setup = match setup.start() {
        Ok(_) => panic!("started with a ship unplaced"),
        Err(setup) => setup,
    };
    setup
        .place(1, Cell::new(4, 4), Orientation::Horizontal)
        .unwrap();
    assert!(setup.ready());

    let board = setup.start().unwrap();
    assert_eq!(board.fleet_size(), 2);
    assert_eq!(board.health(0), 1);
}

#[test]
fn scaled_fleet_drops_longest_first() {
    let six = Dimensions::new(6).unwrap();
    assert_eq!(Fleet::scaled(&six).lengths(), &[2, 2, 2, 1, 1, 1, 1]);

    let ten = Dimensions::new(10).unwrap();
    assert_eq!(Fleet::scaled(&ten).lengths(), &Fleet::REFERENCE[..]);

    let five = Dimensions::new(5).unwrap();
    assert_eq!(Fleet::scaled(&five).lengths(), &[2, 2, 1, 1, 1, 1]);
}

#[test]
fn random_board_succeeds_on_every_supported_size() {
    let mut rng = StdRng::seed_from_u64(42);
    for size in 5..=10 {
        let dim = Dimensions::new(size).unwrap();
        let fleet = Fleet::scaled(&dim);
        let board = random_board(dim, &fleet, &mut rng, DEFAULT_PLACEMENT_BUDGET);
        assert_eq!(board.fleet_size(), fleet.len());
        assert!(!board.defeated());
    }
}

#[test]
fn random_place_reports_exhaustion() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut setup = setup(5, vec![2, 2, 1, 1, 1, 1]);
    let err = setup.random_place(&mut rng, 0).unwrap_err();
    assert_eq!(err.attempts, 0);
}

#[test]
fn dimensions_reject_out_of_range_sizes() {
    assert!(Dimensions::new(4).is_err());
    assert!(Dimensions::new(11).is_err());
    assert!(Dimensions::new(5).is_ok());
    assert!(Dimensions::new(10).is_ok());
}

#[test]
fn linearize_round_trips() {
    let dim = Dimensions::new(6).unwrap();
    assert_eq!(dim.try_linearize(&Cell::new(2, 3)), Some(15));
    assert_eq!(dim.un_linearize(15), Cell::new(2, 3));
    assert_eq!(dim.try_linearize(&Cell::new(6, 0)), None);
    assert_eq!(dim.total_size(), 36);
}

#[test]
fn halo_is_clipped_at_edges_and_corners() {
    let dim = Dimensions::new(6).unwrap();
    assert_eq!(dim.halo(Cell::new(0, 0)).count(), 3);
    assert_eq!(dim.halo(Cell::new(0, 3)).count(), 5);
    assert_eq!(dim.halo(Cell::new(3, 3)).count(), 8);
    assert_eq!(dim.halo(Cell::new(5, 5)).count(), 3);
}

#[test]
fn ship_cells_follow_the_orientation() {
    let dim = Dimensions::new(6).unwrap();
    let ship = Ship::new(Cell::new(1, 2), 3, Orientation::Vertical);
    assert_eq!(ship.anchor(), Cell::new(1, 2));
    assert_eq!(ship.length(), 3);
    assert_eq!(ship.orientation(), Orientation::Vertical);
    let cells: Vec<Cell> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![Cell::new(1, 2), Cell::new(2, 2), Cell::new(3, 2)]
    );
    assert!(ship.in_bounds(&dim));
    assert!(!Ship::new(Cell::new(4, 0), 3, Orientation::Vertical).in_bounds(&dim));
}

#[test]
fn setup_reports_its_configuration() {
    let setup = setup(7, vec![3, 2]);
    assert_eq!(setup.dimensions().size(), 7);
    assert_eq!(setup.fleet().lengths(), &[3, 2]);
    assert!(!setup.fleet().is_empty());
    assert_eq!(Fleet::reference().len(), 10);
}
