use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use sea_battle::{try_place_fleet, BoardError, Point, Ship, ShotOutcome, BOARD_SIZE, FLEET_LENGTHS};

fn generated_board(seed: u64) -> sea_battle::Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    loop {
        if let Some(board) = try_place_fleet(&mut rng, BOARD_SIZE) {
            return board;
        }
    }
}

fn chebyshev(a: Point, b: Point) -> i32 {
    (a.row - b.row).abs().max((a.col - b.col).abs())
}

fn min_distance(a: &Ship, b: &Ship) -> i32 {
    a.cells()
        .flat_map(|ca| b.cells().map(move |cb| chebyshev(ca, cb)))
        .min()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_fleets_are_never_adjacent(seed in any::<u64>()) {
        let board = generated_board(seed);
        let ships = board.ships();
        prop_assert_eq!(ships.len(), FLEET_LENGTHS.len());
        for (i, a) in ships.iter().enumerate() {
            for b in &ships[i + 1..] {
                prop_assert!(
                    min_distance(a, b) >= 2,
                    "ships {:?} and {:?} touch",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn generated_fleets_stay_in_bounds(seed in any::<u64>()) {
        let board = generated_board(seed);
        let mut cell_count = 0;
        for ship in board.ships() {
            for cell in ship.cells() {
                prop_assert!(!board.is_out_of_bounds(cell));
                cell_count += 1;
            }
        }
        let expected: i32 = FLEET_LENGTHS.iter().sum();
        prop_assert_eq!(cell_count, expected);
    }

    #[test]
    fn repeated_shot_is_always_rejected(
        seed in any::<u64>(),
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
    ) {
        let mut board = generated_board(seed);
        let target = Point::new(row, col);
        board.shoot(target).unwrap();
        prop_assert_eq!(board.shoot(target).unwrap_err(), BoardError::AlreadyTargeted);
    }

    #[test]
    fn turn_repeat_law(seed in any::<u64>()) {
        let mut board = generated_board(seed);
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
        while !board.is_defeated() {
            let target = Point::new(
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            );
            match board.shoot(target) {
                Ok(ShotOutcome::Wound) => prop_assert!(ShotOutcome::Wound.repeat_turn()),
                Ok(outcome) => prop_assert!(!outcome.repeat_turn()),
                Err(BoardError::AlreadyTargeted) => {}
                Err(e) => prop_assert!(false, "unexpected error {:?}", e),
            }
        }
        prop_assert_eq!(board.sunk_count(), FLEET_LENGTHS.len());
    }

    #[test]
    fn sunk_iff_every_cell_hit(seed in any::<u64>()) {
        let mut board = generated_board(seed);
        let ship = board.ships()[0];
        let cells: Vec<_> = ship.cells().collect();
        for (i, &cell) in cells.iter().enumerate() {
            let outcome = board.shoot(cell).unwrap();
            if i + 1 < cells.len() {
                prop_assert_eq!(outcome, ShotOutcome::Wound);
                prop_assert!(!board.ships()[0].is_sunk());
            } else {
                prop_assert_eq!(outcome, ShotOutcome::Sunk);
                prop_assert!(board.ships()[0].is_sunk());
            }
        }
    }
}
