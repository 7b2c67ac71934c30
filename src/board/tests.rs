use super::*;

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::Human.opponent(), Mark::Computer);
    assert_eq!(Mark::Computer.opponent(), Mark::Human);
    assert_eq!(Mark::Empty.opponent(), Mark::Empty);
}

#[test]
fn test_coord_conversion() {
    let coord = Coord::new(1, 2);
    assert_eq!(coord.to_index(), 5);

    let coord2 = Coord::from_index(5);
    assert_eq!(coord2.row, 1);
    assert_eq!(coord2.col, 2);
}

#[test]
fn test_coord_bounds() {
    assert!(Coord::new(0, 0).in_bounds());
    assert!(Coord::new(2, 2).in_bounds());
    assert!(!Coord::new(3, 0).in_bounds());
    assert!(!Coord::new(0, 3).in_bounds());
}

#[test]
fn test_coord_ordering_is_row_major() {
    assert!(Coord::new(0, 0) < Coord::new(0, 1));
    assert!(Coord::new(0, 2) < Coord::new(1, 0));
    assert!(Coord::new(1, 2) < Coord::new(2, 0));
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    for row in 0..BOARD_SIZE as u8 {
        for col in 0..BOARD_SIZE as u8 {
            assert!(board.is_empty(Coord::new(row, col)));
        }
    }
    assert!(!board.is_full());
    assert_eq!(board.mark_count(), 0);
    assert_eq!(board.empty_cells().count(), TOTAL_CELLS);
}

#[test]
fn test_place_and_get() {
    let mut board = Board::new();
    board.place(Coord::new(1, 1), Mark::Human).unwrap();

    assert_eq!(board.get(Coord::new(1, 1)), Mark::Human);
    assert!(!board.is_empty(Coord::new(1, 1)));
    assert_eq!(board.mark_count(), 1);
}

#[test]
fn test_place_occupied_is_error() {
    let mut board = Board::new();
    board.place(Coord::new(0, 0), Mark::Human).unwrap();

    let err = board.place(Coord::new(0, 0), Mark::Computer).unwrap_err();
    assert_eq!(err, MoveError::Occupied { row: 0, col: 0 });
    // The original mark is untouched
    assert_eq!(board.get(Coord::new(0, 0)), Mark::Human);
}

#[test]
fn test_place_out_of_range_is_error() {
    let mut board = Board::new();
    let err = board.place(Coord::new(3, 1), Mark::Human).unwrap_err();
    assert_eq!(err, MoveError::OutOfRange { row: 3, col: 1 });
}

#[test]
fn test_set_and_clear_round_trip() {
    let mut board = Board::new();
    let before = board.clone();

    board.set(Coord::new(2, 0), Mark::Computer);
    assert_eq!(board.get(Coord::new(2, 0)), Mark::Computer);

    board.clear(Coord::new(2, 0));
    assert_eq!(board, before);
}

#[test]
fn test_is_full() {
    let mut board = Board::new();
    for idx in 0..TOTAL_CELLS {
        assert!(!board.is_full());
        let mark = if idx % 2 == 0 { Mark::Human } else { Mark::Computer };
        board.set(Coord::from_index(idx), mark);
    }
    assert!(board.is_full());
    assert_eq!(board.empty_cells().count(), 0);
}

#[test]
fn test_empty_cells_row_major() {
    let mut board = Board::new();
    board.set(Coord::new(0, 1), Mark::Human);
    board.set(Coord::new(1, 1), Mark::Computer);

    let cells: Vec<Coord> = board.empty_cells().collect();
    assert_eq!(
        cells,
        vec![
            Coord::new(0, 0),
            Coord::new(0, 2),
            Coord::new(1, 0),
            Coord::new(1, 2),
            Coord::new(2, 0),
            Coord::new(2, 1),
            Coord::new(2, 2),
        ]
    );
}

#[test]
fn test_reset() {
    let mut board = Board::new();
    board.place(Coord::new(0, 0), Mark::Human).unwrap();
    board.place(Coord::new(1, 1), Mark::Computer).unwrap();

    board.reset();
    assert_eq!(board, Board::new());
}
