use std::time::{Duration, Instant};

use log::LevelFilter;
use trapfive::ui::{render_board, render_status};
use trapfive::{
    level_from, AlertBanner, Cell, Color, Message, Replica, AUTHORITY_PARTICIPANT,
    GUEST_PARTICIPANT,
};

#[test]
fn alert_disappears_after_its_duration() {
    let start = Instant::now();
    let mut banner = AlertBanner::new();
    assert_eq!(banner.current(start), None);

    banner.display("Public trap triggered! (2 stones removed)", start);
    assert_eq!(
        banner.current(start + Duration::from_millis(1999)),
        Some("Public trap triggered! (2 stones removed)")
    );
    assert_eq!(banner.current(start + Duration::from_secs(2)), None);
}

#[test]
fn new_alert_restarts_the_countdown() {
    let start = Instant::now();
    let mut banner = AlertBanner::with_duration(Duration::from_secs(2));
    banner.display("first", start);
    banner.display("second", start + Duration::from_millis(1500));
    assert_eq!(
        banner.current(start + Duration::from_millis(3000)),
        Some("second")
    );
    assert_eq!(banner.current(start + Duration::from_millis(3500)), None);
}

#[test]
fn board_shows_own_traps_only() {
    let mut host = Replica::new(AUTHORITY_PARTICIPANT);
    let mut guest = Replica::new(GUEST_PARTICIPANT);
    let trap = Message::TrapPlacedVisual {
        cell: Cell::new(0, 0).unwrap(),
        owner: AUTHORITY_PARTICIPANT,
    };
    let stone = Message::PieceSpawned {
        cell: Cell::new(1, 0).unwrap(),
        color: Color::Black,
    };
    for view in [&mut host, &mut guest] {
        view.apply(&Message::MatchStarted {
            host_color: Color::Black,
        });
        view.apply(&trap);
        view.apply(&stone);
    }

    let host_board = render_board(&host);
    let guest_board = render_board(&guest);
    let host_row = host_board.lines().nth(1).unwrap();
    let guest_row = guest_board.lines().nth(1).unwrap();
    assert!(host_row.contains("^ X"));
    assert!(!guest_row.contains('^'));
    assert!(guest_row.contains(". X"));

    assert!(render_status(&host).contains("host"));
    assert!(render_status(&guest).contains("White"));
}

#[test]
fn log_level_parsing() {
    assert_eq!(level_from(None), LevelFilter::Info);
    assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from(Some("OFF")), LevelFilter::Off);
    assert_eq!(level_from(Some("loud")), LevelFilter::Info);
}
