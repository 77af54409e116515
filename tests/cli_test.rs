use trapfive::player::cli::{cell_label, parse_cell, parse_command, Command};
use trapfive::{Action, Cell};

fn cell(x: u8, z: u8) -> Cell {
    Cell::new(x, z).unwrap()
}

#[test]
fn parses_column_letter_and_row_number() {
    assert_eq!(parse_cell("A1"), Ok(cell(0, 0)));
    assert_eq!(parse_cell("j10"), Ok(cell(9, 9)));
    assert_eq!(parse_cell(" c7 "), Ok(cell(2, 6)));
}

#[test]
fn rejects_cells_off_the_board() {
    assert!(parse_cell("K1").is_err());
    assert!(parse_cell("A0").is_err());
    assert!(parse_cell("A11").is_err());
    assert!(parse_cell("5A").is_err());
    assert!(parse_cell("A").is_err());
}

#[test]
fn labels_match_parsing() {
    for c in Cell::all() {
        assert_eq!(parse_cell(&cell_label(c)), Ok(c));
    }
    assert_eq!(cell_label(cell(4, 9)), "E10");
}

#[test]
fn commands() {
    assert_eq!(parse_command("B3"), Ok(Command::Act(Action::piece(cell(1, 2)))));
    assert_eq!(parse_command("t B3"), Ok(Command::Act(Action::trap(cell(1, 2)))));
    assert_eq!(parse_command("TRAP b3\n"), Ok(Command::Act(Action::trap(cell(1, 2)))));
    assert_eq!(parse_command("?"), Ok(Command::Help));
    assert_eq!(parse_command("quit"), Ok(Command::Quit));
    assert!(parse_command("").is_err());
    assert!(parse_command("t").is_err());
    assert!(parse_command("B3 C4").is_err());
}
