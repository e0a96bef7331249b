//! Session state machine: fire, launch, per-frame tick, resolution
//!
//! Armed → Launching → Animating → Resolved. The platform layer calls
//! [`fire`] on click, [`begin_flight`] once the launch sound has settled and
//! the sprite is loaded, then [`tick`] once per display frame.

use glam::DVec2;

use super::flight::{BoardPlacement, FlightPlan, Viewport};
use super::grid::{Cell, GridModel, map_pointer_to_cell};
use super::messages::{self, HIT_MESSAGES, MISS_MESSAGES};
use super::overlay::OverlayKind;
use super::state::{GameEvent, Outcome, Session, SessionPhase, SoundCue};

/// What to draw this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    /// Nothing in flight
    Idle,
    /// Rocket centre for this frame
    Rocket(DVec2),
    /// Rocket arrived this frame; the shot has been resolved
    Landed(Outcome),
}

/// Handle a click on the board.
///
/// `board` is where the board sits on screen at the moment of the click.
/// Returns the targeted cell, or `None` if this session already fired.
pub fn fire(session: &mut Session, board: BoardPlacement, pointer: DVec2) -> Option<Cell> {
    if session.shot_fired() {
        log::debug!("Ignoring click at {:?}: shot already fired", pointer);
        return None;
    }

    session.board = board;
    let target = map_pointer_to_cell(pointer, board.origin, board.cell_size);
    session.mark_shot_fired();
    session.phase = SessionPhase::Launching { target };
    session.push_event(GameEvent::PlaySound(SoundCue::Rocket));
    log::info!("Shot fired at cell ({}, {})", target.col, target.row);
    Some(target)
}

/// Put the rocket in the air.
///
/// The rocket aims at the target's centre under `board` as placed now.
/// Only valid while launching; returns `false` otherwise.
pub fn begin_flight(
    session: &mut Session,
    board: BoardPlacement,
    viewport: &Viewport,
    now: f64,
) -> bool {
    let SessionPhase::Launching { target } = session.phase else {
        return false;
    };
    session.board = board;
    let plan = FlightPlan::plan(target, &board, viewport, now, session.rng());
    session.phase = SessionPhase::Animating(plan);
    true
}

/// Advance the session to `now`
pub fn tick(session: &mut Session, now: f64) -> Frame {
    let Some(plan) = session.flight() else {
        return Frame::Idle;
    };
    if !plan.is_complete(now) {
        return Frame::Rocket(plan.position_at(now));
    }

    let target = plan.target;
    session.push_event(GameEvent::ClearRocket);
    Frame::Landed(land(session, target, now))
}

/// Test a shot against the hidden ships
pub fn resolve(target: Cell, grid: &GridModel) -> Outcome {
    if grid.is_occupied(target) {
        Outcome::Hit
    } else {
        Outcome::Miss
    }
}

/// Apply the outcome: message, sound, overlay
fn land(session: &mut Session, target: Cell, now: f64) -> Outcome {
    let outcome = resolve(target, &session.grid);
    let (pool, cue, overlay) = match outcome {
        Outcome::Hit => (HIT_MESSAGES, SoundCue::Hit, OverlayKind::Explosion),
        Outcome::Miss => (MISS_MESSAGES, SoundCue::Miss, OverlayKind::MissMarker),
    };

    let message = messages::pick(pool, session.rng());
    session.message = Some(message);
    session.push_event(GameEvent::ShowMessage(message));
    session.push_event(GameEvent::PlaySound(cue));
    session.spawn_overlay(overlay, target, now);
    session.phase = SessionPhase::Resolved(outcome);

    log::info!("Shot at ({}, {}): {:?}", target.col, target.row, outcome);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> BoardPlacement {
        BoardPlacement::new(DVec2::new(100.0, 100.0), 200.0)
    }

    fn session_with_ship(ship: Cell) -> Session {
        let grid = GridModel::with_ships(2, vec![ship]).unwrap();
        Session::with_grid(12345, grid, board())
    }

    fn viewport() -> Viewport {
        Viewport::new(1024.0, 768.0)
    }

    #[test]
    fn test_fire_maps_click_and_queues_rocket_sound() {
        let mut session = session_with_ship(Cell::new(1, 0));
        let target = fire(&mut session, board(), DVec2::new(350.0, 150.0));
        assert_eq!(target, Some(Cell::new(1, 0)));
        assert!(session.shot_fired());
        assert_eq!(
            session.phase,
            SessionPhase::Launching {
                target: Cell::new(1, 0)
            }
        );
        assert_eq!(
            session.drain_events(),
            vec![GameEvent::PlaySound(SoundCue::Rocket)]
        );
    }

    #[test]
    fn test_second_click_is_ignored() {
        let mut session = session_with_ship(Cell::new(1, 0));
        assert!(fire(&mut session, board(), DVec2::new(150.0, 150.0)).is_some());
        session.drain_events();

        assert_eq!(fire(&mut session, board(), DVec2::new(350.0, 350.0)), None);
        assert!(session.drain_events().is_empty());
        assert_eq!(
            session.phase,
            SessionPhase::Launching {
                target: Cell::new(0, 0)
            }
        );

        // Still ignored mid-flight and after landing
        assert!(begin_flight(&mut session, board(), &viewport(), 0.0));
        assert_eq!(fire(&mut session, board(), DVec2::new(350.0, 350.0)), None);
        tick(&mut session, 2000.0);
        assert_eq!(fire(&mut session, board(), DVec2::new(350.0, 350.0)), None);
    }

    #[test]
    fn test_begin_flight_requires_launching() {
        let mut session = session_with_ship(Cell::new(1, 0));
        assert!(!begin_flight(&mut session, board(), &viewport(), 0.0));
        assert_eq!(tick(&mut session, 0.0), Frame::Idle);

        fire(&mut session, board(), DVec2::new(150.0, 150.0));
        assert!(begin_flight(&mut session, board(), &viewport(), 0.0));
        assert!(!begin_flight(&mut session, board(), &viewport(), 10.0));
    }

    #[test]
    fn test_flight_ends_on_target_centre() {
        let mut session = session_with_ship(Cell::new(1, 0));
        fire(&mut session, board(), DVec2::new(350.0, 350.0));
        begin_flight(&mut session, board(), &viewport(), 1000.0);

        let start = session.flight().unwrap().path.start;
        assert_eq!(tick(&mut session, 1000.0), Frame::Rocket(start));

        match tick(&mut session, 2999.0) {
            Frame::Rocket(p) => {
                let end = DVec2::new(400.0, 400.0);
                assert!((p - end).length() < 5.0);
            }
            other => panic!("expected rocket frame, got {:?}", other),
        }
        assert!(session.outcome().is_none());
    }

    #[test]
    fn test_board_moved_after_start() {
        // Layout shifted 200px right between Start and the click
        let mut session = session_with_ship(Cell::new(1, 0));
        let moved = BoardPlacement::new(DVec2::new(300.0, 100.0), 200.0);

        assert_eq!(
            fire(&mut session, moved, DVec2::new(350.0, 150.0)),
            Some(Cell::new(0, 0))
        );
        assert_eq!(session.board, moved);
    }

    #[test]
    fn test_flight_aims_at_board_placement_at_launch() {
        let mut session = session_with_ship(Cell::new(1, 0));
        fire(&mut session, board(), DVec2::new(350.0, 150.0));

        // Scrolled down 80px before the launch sound finished
        let scrolled = BoardPlacement::new(DVec2::new(100.0, 20.0), 200.0);
        assert!(begin_flight(&mut session, scrolled, &viewport(), 0.0));
        assert_eq!(session.flight().unwrap().path.end, DVec2::new(400.0, 120.0));
        assert_eq!(tick(&mut session, 2000.0), Frame::Landed(Outcome::Hit));
    }

    #[test]
    fn test_landing_fires_once() {
        let mut session = session_with_ship(Cell::new(1, 0));
        fire(&mut session, board(), DVec2::new(150.0, 350.0));
        begin_flight(&mut session, board(), &viewport(), 0.0);
        session.drain_events();

        assert_eq!(tick(&mut session, 2000.0), Frame::Landed(Outcome::Miss));
        assert_eq!(tick(&mut session, 2016.0), Frame::Idle);
        assert_eq!(tick(&mut session, 5000.0), Frame::Idle);

        let spawned = session
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::SpawnOverlay(_)))
            .count();
        assert_eq!(spawned, 1);
    }

    #[test]
    fn test_hit_event_order() {
        let mut session = session_with_ship(Cell::new(1, 0));
        fire(&mut session, board(), DVec2::new(350.0, 150.0));
        begin_flight(&mut session, board(), &viewport(), 0.0);
        tick(&mut session, 2500.0);

        let events = session.drain_events();
        assert_eq!(events.len(), 5);
        assert_eq!(events[0], GameEvent::PlaySound(SoundCue::Rocket));
        assert_eq!(events[1], GameEvent::ClearRocket);
        assert!(matches!(events[2], GameEvent::ShowMessage(m) if HIT_MESSAGES.contains(&m)));
        assert_eq!(events[3], GameEvent::PlaySound(SoundCue::Hit));
        match events[4] {
            GameEvent::SpawnOverlay(o) => {
                assert_eq!(o.kind, OverlayKind::Explosion);
                assert_eq!(o.cell, Cell::new(1, 0));
                assert_eq!(o.created_at, 2500.0);
            }
            ref other => panic!("expected overlay, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_is_exclusive_and_exhaustive() {
        for ship in GridModel::with_ships(2, vec![]).unwrap().cells() {
            let grid = GridModel::with_ships(2, vec![ship]).unwrap();
            for cell in grid.cells() {
                let expected = if cell == ship {
                    Outcome::Hit
                } else {
                    Outcome::Miss
                };
                assert_eq!(resolve(cell, &grid), expected);
            }
        }
    }
}
