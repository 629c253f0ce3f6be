use connect_four::{
    has_four_in_a_row, BitboardState, Cell, ColumnHeights, Player, CELLS, COLS, ROWS,
};

#[test]
fn test_place_keeps_layers_consistent() {
    let mut board = BitboardState::new();
    board.place(Player::A, Cell::new(0, 0)).unwrap();
    board.place(Player::B, Cell::new(0, 1)).unwrap();

    let a = board.player(Player::A);
    let b = board.player(Player::B);
    assert!((a & b).is_empty());
    assert_eq!(board.combined(), a | b);
    assert_eq!(board.piece_count(), 2);
    assert_eq!(board.cell(0, 0), Some(Player::A));
    assert_eq!(board.cell(0, 1), Some(Player::B));
    assert_eq!(board.cell(0, 2), None);
    assert_eq!(board.cell(ROWS, 0), None);
}

#[test]
fn test_place_off_board_is_error() {
    let mut board = BitboardState::new();
    assert!(board.place(Player::A, Cell::new(ROWS, 0)).is_err());
    assert_eq!(board.piece_count(), 0);
}

#[test]
fn test_is_full_after_every_cell() {
    let mut board = BitboardState::new();
    for idx in 0..CELLS {
        assert!(!board.is_full());
        let player = if idx % 2 == 0 { Player::A } else { Player::B };
        board.place(player, Cell::from_index(idx).unwrap()).unwrap();
    }
    assert!(board.is_full());
}

#[test]
fn test_reset_clears_all_layers() {
    let mut board = BitboardState::new();
    board.place(Player::A, Cell::new(3, 3)).unwrap();
    board.place(Player::B, Cell::new(0, 5)).unwrap();
    board.reset();
    assert!(board.player(Player::A).is_empty());
    assert!(board.player(Player::B).is_empty());
    assert!(board.combined().is_empty());
}

#[test]
fn test_four_drops_in_first_column_win() {
    let mut board = BitboardState::new();
    let mut heights = ColumnHeights::new();
    for _ in 0..4 {
        let cell = heights.next_slot(0).unwrap();
        board.place(Player::A, cell).unwrap();
        heights.record_placement(0);
    }
    let bits: Vec<_> = board
        .player(Player::A)
        .iter_set_bits()
        .map(|(r, c)| r * COLS + c)
        .collect();
    assert_eq!(bits, vec![0, 6, 12, 18]);
    assert!(has_four_in_a_row(board.player(Player::A)));
}

#[test]
fn test_cell_index_mapping() {
    assert_eq!(Cell::new(0, 0).index(), 0);
    assert_eq!(Cell::new(1, 0).index(), 6);
    assert_eq!(Cell::new(6, 5).index(), 41);
    assert_eq!(Cell::from_index(13), Some(Cell::new(2, 1)));
    assert_eq!(Cell::from_index(CELLS), None);
}
