use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use trapfive::{Action, Cell, Color, Event, GameEngine, CELL_COUNT, TRAP_BUDGET};

fn random_action(rng: &mut SmallRng) -> (Color, Action) {
    let color = if rng.random_bool(0.5) {
        Color::Black
    } else {
        Color::White
    };
    let cell = Cell::from_index(rng.random_range(0..CELL_COUNT)).unwrap();
    let action = if rng.random_bool(0.2) {
        Action::trap(cell)
    } else {
        Action::piece(cell)
    };
    (color, action)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Random request streams: rejections never mutate state and accepted
    /// requests keep the board and trap layers consistent.
    #[test]
    fn engine_invariants_hold(seed in any::<u64>(), steps in 1usize..300) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut engine = GameEngine::new();
        engine.seed_public_traps(&mut rng);
        let public = engine.public_traps();

        for _ in 0..steps {
            let (color, action) = random_action(&mut rng);
            let before = engine.state();
            match engine.request_action(color, action, &mut rng) {
                Err(_) => prop_assert_eq!(engine.state(), before),
                Ok(events) => {
                    prop_assert_eq!(color, before.turn);
                    prop_assert!(before.winner.is_none());
                    let ends_turn = matches!(
                        events.last(),
                        Some(Event::TurnChanged(_)) | Some(Event::WinnerSet(_))
                    );
                    prop_assert!(ends_turn);
                    // Only the mover loses stones.
                    let opp = color.opponent();
                    prop_assert_eq!(
                        engine.board().stones(opp),
                        before.board.stones(opp)
                    );
                }
            }

            let state = engine.state();
            prop_assert!((state.board.stones(Color::Black) & state.board.stones(Color::White)).is_empty());
            for c in [Color::Black, Color::White] {
                prop_assert!(state.trap_budget[c.index()] <= TRAP_BUDGET);
                // A live hidden trap never sits under a stone.
                prop_assert!((state.hidden_traps.of(c) & state.board.occupied()).is_empty());
            }
            prop_assert_eq!(engine.public_traps(), public);
            if state.winner.is_some() {
                break;
            }
        }
    }

    /// Penalties remove at most the trigger's amount and never more stones
    /// than the mover had.
    #[test]
    fn penalties_are_bounded(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut engine = GameEngine::new();
        engine.seed_public_traps(&mut rng);

        for _ in 0..400 {
            let (_, action) = random_action(&mut rng);
            let mover = engine.turn();
            let before = engine.board().count(mover);
            let Ok(events) = engine.request_action(mover, action, &mut rng) else {
                continue;
            };
            let removed = events.iter().filter(|e| matches!(e, Event::PieceRemoved(_))).count();
            let penalty = events.iter().find_map(|e| match e {
                Event::TrapTriggered { trigger, .. } => Some(trigger.penalty()),
                _ => None,
            });
            prop_assert_eq!(removed, penalty.map_or(0, |p| p.min(before)));
            if engine.winner().is_some() {
                break;
            }
        }
    }
}
