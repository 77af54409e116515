use trapfive::{check_win, longest_run, run_length, Board, Cell, Color};

fn cell(x: u8, z: u8) -> Cell {
    Cell::new(x, z).unwrap()
}

fn board_with(color: Color, cells: &[(u8, u8)]) -> Board {
    let mut board = Board::new();
    for &(x, z) in cells {
        board.set(cell(x, z), color);
    }
    board
}

#[test]
fn horizontal_five_wins() {
    let board = board_with(Color::Black, &[(2, 4), (3, 4), (4, 4), (5, 4), (6, 4)]);
    assert!(check_win(&board, cell(4, 4), Color::Black));
    assert!(check_win(&board, cell(6, 4), Color::Black));
    assert!(!check_win(&board, cell(4, 4), Color::White));
}

#[test]
fn vertical_five_wins() {
    let board = board_with(Color::White, &[(7, 0), (7, 1), (7, 2), (7, 3), (7, 4)]);
    assert!(check_win(&board, cell(7, 0), Color::White));
}

#[test]
fn both_diagonals_win() {
    let rising = board_with(Color::Black, &[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
    assert!(check_win(&rising, cell(2, 2), Color::Black));

    let falling = board_with(Color::Black, &[(9, 0), (8, 1), (7, 2), (6, 3), (5, 4)]);
    assert!(check_win(&falling, cell(5, 4), Color::Black));
}

#[test]
fn four_in_a_row_does_not_win() {
    let board = board_with(Color::Black, &[(0, 9), (1, 9), (2, 9), (3, 9)]);
    assert!(!check_win(&board, cell(3, 9), Color::Black));
    assert_eq!(longest_run(&board, cell(0, 9), Color::Black), 4);
}

#[test]
fn gap_breaks_the_line() {
    let board = board_with(Color::Black, &[(0, 5), (1, 5), (3, 5), (4, 5), (5, 5)]);
    assert!(!check_win(&board, cell(3, 5), Color::Black));
    assert_eq!(run_length(&board, cell(3, 5), Color::Black, (1, 0)), 3);
}

#[test]
fn opponent_stone_blocks_the_line() {
    let mut board = board_with(Color::Black, &[(0, 0), (1, 0), (2, 0), (3, 0), (5, 0)]);
    board.set(cell(4, 0), Color::White);
    assert!(!check_win(&board, cell(3, 0), Color::Black));
    assert!(!check_win(&board, cell(5, 0), Color::Black));
}

#[test]
fn overline_counts_as_win() {
    let board = board_with(
        Color::White,
        &[(0, 3), (1, 3), (2, 3), (3, 3), (4, 3), (5, 3)],
    );
    assert!(check_win(&board, cell(5, 3), Color::White));
    assert_eq!(longest_run(&board, cell(2, 3), Color::White), 6);
}

#[test]
fn run_counts_the_cell_itself_when_empty() {
    // Scoring a candidate cell: neighbours on both sides join through it.
    let board = board_with(Color::Black, &[(3, 3), (4, 4), (6, 6), (7, 7)]);
    assert!(board.is_empty(cell(5, 5)));
    assert_eq!(longest_run(&board, cell(5, 5), Color::Black), 5);
}

#[test]
fn lines_stop_at_the_board_edge() {
    let board = board_with(Color::Black, &[(9, 9), (8, 8), (7, 7)]);
    assert_eq!(run_length(&board, cell(9, 9), Color::Black, (1, 1)), 3);
    assert_eq!(run_length(&board, cell(9, 9), Color::Black, (1, -1)), 1);
}
