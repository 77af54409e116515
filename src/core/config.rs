//! Rule constants for a trapfive match.

/// Width and height of the square board.
pub const BOARD_SIZE: u8 = 10;
/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;
/// Length of an unbroken run that wins the match.
pub const WIN_LENGTH: usize = 5;
/// Public traps seeded by the authority at the start of every match.
pub const PUBLIC_TRAP_COUNT: usize = 10;
/// Hidden traps each player may place per match.
pub const TRAP_BUDGET: u8 = 3;
/// Stones removed from the mover when a public and an opposing trap coincide.
pub const DOUBLE_TRAP_PENALTY: usize = 4;
/// Stones removed from the mover by a single public or opposing trap.
pub const SINGLE_TRAP_PENALTY: usize = 2;
/// How long the presentation layer keeps a trap alert on screen.
pub const ALERT_DURATION_SECS: u64 = 2;
