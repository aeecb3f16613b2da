#![allow(clippy::float_cmp)]

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::test_support::FixedDraw;

fn labels_of(items: &[Item]) -> Vec<&str> {
    items.iter().map(|item| item.label.as_str()).collect()
}

fn assert_conserved(game: &GameController) {
    assert_eq!(game.pool().len() + game.history().len(), game.initial().len());
    let pool_ids = game.pool().iter().map(|item| item.id).collect::<HashSet<_>>();
    for item in game.history() {
        assert!(!pool_ids.contains(&item.id), "{:?} is in both pool and history", item.label);
    }
}

// =============================================================
// construction
// =============================================================

#[test]
fn defaults_load_twelve_shots_idle() {
    let game = GameController::default();
    assert_eq!(game.pool().len(), 12);
    assert!(game.history().is_empty());
    assert_eq!(game.phase(), &SpinPhase::Idle);
    assert_eq!(game.result(), None);
    assert_eq!(game.spin_duration_secs(), 3.0);
    assert_eq!(game.pool()[0].label, "Power Shot");
}

#[test]
fn ids_follow_initial_order() {
    let game = GameController::new(["A", "B", "C"]);
    let ids = game.pool().iter().map(|item| item.id).collect::<Vec<_>>();
    assert_eq!(ids, [ItemId(0), ItemId(1), ItemId(2)]);
}

// =============================================================
// spin / settle
// =============================================================

#[test]
fn two_item_scenario_settles_first_item() {
    let mut game = GameController::new(["A", "B"]);
    let mut rng = FixedDraw::new(&[0], &[5]);

    let Ok(start) = game.spin(&mut rng) else {
        panic!("spin should start");
    };
    assert_eq!(start.index, 0);
    assert_eq!(start.target_rotation, 2070.0);
    assert_eq!(start.duration_secs, 3.0);

    // Nothing is committed mid-spin.
    assert_eq!(labels_of(game.pool()), ["A", "B"]);
    assert!(game.history().is_empty());
    assert_eq!(game.result(), None);

    let settled = game.settle(start.ticket);
    assert_eq!(settled.map(|item| item.label), Ok("A".to_owned()));
    assert_eq!(labels_of(game.pool()), ["B"]);
    assert_eq!(labels_of(game.history()), ["A"]);
    assert_eq!(game.result(), Some("A"));
    assert_eq!(game.phase(), &SpinPhase::Idle);
}

#[test]
fn spinning_phase_freezes_target_and_pending() {
    let mut game = GameController::new(["A", "B", "C", "D"]);
    let mut rng = FixedDraw::new(&[2], &[6]);
    let Ok(start) = game.spin(&mut rng) else {
        panic!("spin should start");
    };
    let SpinPhase::Spinning(in_flight) = game.phase() else {
        panic!("expected spinning phase");
    };
    assert_eq!(in_flight.ticket, start.ticket);
    assert_eq!(in_flight.target_rotation, 6.0 * 360.0 + (360.0 - 225.0));
    assert_eq!(in_flight.pending.label, "C");
}

#[test]
fn spin_while_spinning_is_rejected_without_side_effects() {
    let mut game = GameController::new(["A", "B", "C"]);
    let mut rng = FixedDraw::new(&[1, 0], &[5, 5]);
    let Ok(first) = game.spin(&mut rng) else {
        panic!("spin should start");
    };
    let before = game.phase().clone();

    assert_eq!(game.spin(&mut rng), Err(SpinError::Busy));
    assert_eq!(game.phase(), &before);
    assert_eq!(game.pool().len(), 3);
    assert!(game.history().is_empty());

    // The first spin still settles normally.
    assert!(game.settle(first.ticket).is_ok());
    assert_eq!(labels_of(game.history()), ["B"]);
}

#[test]
fn settling_twice_commits_once() {
    let mut game = GameController::new(["A", "B"]);
    let mut rng = FixedDraw::new(&[1], &[5]);
    let Ok(start) = game.spin(&mut rng) else {
        panic!("spin should start");
    };
    assert!(game.settle(start.ticket).is_ok());
    assert_eq!(game.settle(start.ticket), Err(SpinError::StaleTicket(start.ticket.value())));
    assert_eq!(labels_of(game.pool()), ["A"]);
    assert_eq!(labels_of(game.history()), ["B"]);
}

#[test]
fn stale_ticket_does_not_settle_newer_spin() {
    let mut game = GameController::new(["A", "B", "C"]);
    let mut rng = FixedDraw::new(&[0, 0], &[5, 5]);
    let Ok(old) = game.spin(&mut rng) else {
        panic!("spin should start");
    };
    assert!(game.cancel());
    let Ok(new) = game.spin(&mut rng) else {
        panic!("spin should start");
    };
    assert_ne!(old.ticket, new.ticket);

    assert_eq!(game.settle(old.ticket), Err(SpinError::StaleTicket(old.ticket.value())));
    assert!(game.is_spinning());
    assert!(game.settle(new.ticket).is_ok());
}

#[test]
fn settle_without_spin_is_stale() {
    let mut game = GameController::new(["A"]);
    let mut rng = FixedDraw::new(&[0], &[5]);
    let Ok(start) = game.spin(&mut rng) else {
        panic!("spin should start");
    };
    assert!(game.cancel());
    assert_eq!(game.settle(start.ticket), Err(SpinError::StaleTicket(start.ticket.value())));
    assert_eq!(game.pool().len(), 1);
    assert!(game.history().is_empty());
}

#[test]
fn cancel_when_idle_reports_false() {
    let mut game = GameController::new(["A"]);
    assert!(!game.cancel());
}

#[test]
fn spin_on_empty_pool_fails() {
    let mut game = GameController::new(Vec::<String>::new());
    let mut rng = FixedDraw::default();
    assert_eq!(game.spin(&mut rng), Err(SpinError::EmptyPool));
    assert!(game.is_exhausted());
    assert_eq!(game.status_text(), Some(COMPLETED_MESSAGE));
    assert!(!game.can_spin());
}

#[test]
fn duplicate_labels_consume_one_item_per_spin() {
    let mut game = GameController::new(["Volley", "Volley", "Header"]);
    let mut rng = FixedDraw::new(&[1], &[5]);
    let Ok(start) = game.spin(&mut rng) else {
        panic!("spin should start");
    };
    let Ok(winner) = game.settle(start.ticket) else {
        panic!("settle should commit");
    };
    assert_eq!(winner.id, ItemId(1));
    assert_eq!(labels_of(game.pool()), ["Volley", "Header"]);
    assert_eq!(game.pool()[0].id, ItemId(0));
    assert_eq!(labels_of(game.history()), ["Volley"]);
    assert_conserved(&game);
}

#[test]
fn spinning_down_the_pool_draws_every_item_once() {
    let mut game = GameController::with_defaults();
    let mut rng = StdRng::seed_from_u64(2024);
    let total = game.pool().len();

    for _ in 0..total {
        let Ok(start) = game.spin(&mut rng) else {
            panic!("pool should still have items");
        };
        assert!(game.settle(start.ticket).is_ok());
        assert_conserved(&game);
    }

    assert!(game.pool().is_empty());
    assert!(game.is_exhausted());
    assert_eq!(game.spin(&mut rng), Err(SpinError::EmptyPool));

    let mut drawn = labels_of(game.history());
    drawn.sort_unstable();
    let mut expected = crate::consts::INITIAL_SHOTS.to_vec();
    expected.sort_unstable();
    assert_eq!(drawn, expected);
}

// =============================================================
// reset
// =============================================================

#[test]
fn reset_restores_initial_state() {
    let mut game = GameController::new(["A", "B", "C"]);
    let mut rng = FixedDraw::new(&[0, 0], &[5, 5]);
    for _ in 0..2 {
        let Ok(start) = game.spin(&mut rng) else {
            panic!("spin should start");
        };
        assert!(game.settle(start.ticket).is_ok());
    }

    assert_eq!(game.reset(), Ok(()));
    assert_eq!(labels_of(game.pool()), ["A", "B", "C"]);
    assert!(game.history().is_empty());
    assert_eq!(game.result(), None);
    assert_eq!(game.phase(), &SpinPhase::Idle);
    assert!(game.can_spin());
}

#[test]
fn reset_mid_spin_is_refused() {
    let mut game = GameController::new(["A", "B"]);
    let mut rng = FixedDraw::new(&[0], &[5]);
    let Ok(start) = game.spin(&mut rng) else {
        panic!("spin should start");
    };
    assert!(!game.can_reset());
    assert_eq!(game.reset(), Err(SpinError::Busy));
    assert!(game.is_spinning());
    assert!(game.settle(start.ticket).is_ok());
}

#[test]
fn reset_from_exhausted_game_allows_play_again() {
    let mut game = GameController::new(["A"]);
    let mut rng = FixedDraw::new(&[0], &[5]);
    let Ok(start) = game.spin(&mut rng) else {
        panic!("spin should start");
    };
    assert!(game.settle(start.ticket).is_ok());
    assert!(game.is_exhausted());

    assert_eq!(game.reset(), Ok(()));
    assert!(!game.is_exhausted());
    assert_eq!(game.status_text(), None);
}

// =============================================================
// scoreboard
// =============================================================

#[test]
fn scoreboard_starts_at_zero_of_total() {
    let game = GameController::with_defaults();
    assert_eq!(game.score(), (0, 12));
    assert_eq!(game.scoreboard_text(), "Shots Completed: 0 / 12");
}

#[test]
fn scoreboard_counts_settled_spins_only() {
    let mut game = GameController::new(["A", "B", "C"]);
    let mut rng = FixedDraw::new(&[0, 0], &[5, 5]);
    let Ok(first) = game.spin(&mut rng) else {
        panic!("spin should start");
    };
    assert_eq!(game.score(), (0, 3));
    assert!(game.settle(first.ticket).is_ok());
    assert_eq!(game.scoreboard_text(), "Shots Completed: 1 / 3");

    let Ok(second) = game.spin(&mut rng) else {
        panic!("spin should start");
    };
    assert!(game.settle(second.ticket).is_ok());
    assert_eq!(game.score(), (2, 3));

    assert_eq!(game.reset(), Ok(()));
    assert_eq!(game.scoreboard_text(), "Shots Completed: 0 / 3");
}

// =============================================================
// wheel props
// =============================================================

#[test]
fn wheel_props_at_rest() {
    let game = GameController::new(["A", "B"]);
    let props = game.wheel_props();
    assert_eq!(props.labels, ["A", "B"]);
    assert!(!props.is_spinning);
    assert_eq!(props.result_label, None);
    assert_eq!(props.target_rotation_degrees, 0.0);
    assert_eq!(props.spin_duration_seconds, 3.0);
    assert_eq!(props.motion(), crate::motion::WheelMotion::at_rest());
    assert_eq!(props.hub_text(), IDLE_PROMPT);
}

#[test]
fn wheel_props_while_spinning_then_back_to_baseline() {
    let mut game = GameController::new(["A", "B"]).with_spin_duration(1.5);
    let mut rng = FixedDraw::new(&[0], &[5]);
    let Ok(start) = game.spin(&mut rng) else {
        panic!("spin should start");
    };

    let spinning = game.wheel_props();
    assert!(spinning.is_spinning);
    assert_eq!(spinning.target_rotation_degrees, 2070.0);
    assert_eq!(spinning.motion(), crate::motion::WheelMotion::animate_to(2070.0, 1.5));
    assert_eq!(spinning.hub_text(), SPINNING_PROMPT);

    assert!(game.settle(start.ticket).is_ok());
    let settled = game.wheel_props();
    assert!(!settled.is_spinning);
    assert_eq!(settled.target_rotation_degrees, 0.0);
    assert_eq!(settled.motion().rotation_deg, 0.0);
    assert_eq!(settled.labels, ["B"]);
    assert_eq!(settled.hub_text(), "A");
}

#[test]
fn wheel_props_segments_follow_pool() {
    let game = GameController::new(["A", "B", "C"]);
    let segments = game.wheel_props().segments(&crate::wheel::WheelGeometry::default());
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[2].label, "C");
}
