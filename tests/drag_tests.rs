//! Drag state machine tests: full gesture sequences against a live session.

use amaze::codec::{MazeData, TileRecord};
use amaze::core::{BoardConfig, CellId, LineSegment};
use amaze::input::{Command, DragController, Outcome, Target};
use amaze::session::{GameSession, FLASH_TICKS};
use amaze::win;

use rustc_hash::FxHashMap;
use smallvec::smallvec;

fn maze_data(n: u32) -> MazeData {
    let mut records = FxHashMap::default();
    let mut order = Vec::new();
    for i in 0..n {
        order.push(i);
        records.insert(
            i,
            TileRecord {
                rotations: 0,
                segments: smallvec![LineSegment::new(0.0, 0.0, 50.0, 50.0)],
            },
        );
    }
    MazeData {
        played: false,
        elapsed_ticks: 0,
        order,
        records,
    }
}

fn new_game() -> (DragController, GameSession) {
    let config = BoardConfig::new(16, 100);
    let session = GameSession::create_new(config, &maze_data(16), 42);
    (DragController::new(&config), session)
}

/// Press (or rotate) at the center of a cell.
fn at(controller: &DragController, cell: CellId) -> (f32, f32) {
    controller
        .layout()
        .cell_rect(cell)
        .unwrap_or_else(|| panic!("no rect for {}", cell))
        .center()
}

fn press(controller: &mut DragController, session: &mut GameSession, cell: CellId) -> Outcome {
    let (x, y) = at(controller, cell);
    controller.dispatch(session, Command::Press { x, y })
}

fn release(controller: &mut DragController, session: &mut GameSession, cell: CellId) -> Outcome {
    let (x, y) = at(controller, cell);
    controller.dispatch(session, Command::Release { x, y })
}

fn rotate(controller: &mut DragController, session: &mut GameSession, cell: CellId) -> Outcome {
    let (x, y) = at(controller, cell);
    controller.dispatch(session, Command::Rotate { x, y })
}

#[test]
fn test_pick_up_then_drop_into_empty_grid_cell() {
    let (mut controller, mut session) = new_game();
    let tile = session.occupant(CellId::rack(0)).unwrap();

    let outcome = press(&mut controller, &mut session, CellId::rack(0));
    assert!(outcome.picked_up);
    assert_eq!(controller.held(), Some(tile));

    let outcome = press(&mut controller, &mut session, CellId::grid(0));
    assert!(outcome.moved);
    assert!(!outcome.solved);
    assert_eq!(controller.held(), None);

    assert_eq!(session.occupant(CellId::grid(0)), Some(tile));
    assert_eq!(session.occupant(CellId::rack(0)), None);
    // The vacated rack cell gains the border cue, the filled grid cell
    // loses it, and the first move starts the clock.
    assert!(session.is_bordered(CellId::rack(0)));
    assert!(!session.is_bordered(CellId::grid(0)));
    assert!(session.clock().is_running());
    assert!(session.is_played());
}

#[test]
fn test_press_on_empty_cell_while_idle_is_a_noop() {
    let (mut controller, mut session) = new_game();
    let outcome = press(&mut controller, &mut session, CellId::grid(5));
    assert_eq!(outcome, Outcome::default());
    assert_eq!(controller.held(), None);
    assert!(!session.clock().is_running());
}

#[test]
fn test_pressing_the_held_tile_cancels() {
    let (mut controller, mut session) = new_game();
    press(&mut controller, &mut session, CellId::rack(0));

    let outcome = press(&mut controller, &mut session, CellId::rack(0));
    assert!(outcome.cancelled);
    assert_eq!(controller.held(), None);
    // Nothing moved, nothing started.
    assert!(!session.is_played());
    assert!(!session.clock().is_running());
}

#[test]
fn test_full_click_pair_keeps_the_pickup() {
    // A UI forwarding both halves of one physical click must not undo
    // the pickup: the release lands on the held tile and is ignored.
    let (mut controller, mut session) = new_game();
    let tile = session.occupant(CellId::rack(0)).unwrap();

    let outcome = press(&mut controller, &mut session, CellId::rack(0));
    assert!(outcome.picked_up);
    let outcome = release(&mut controller, &mut session, CellId::rack(0));
    assert_eq!(outcome, Outcome::default());
    assert_eq!(controller.held(), Some(tile));

    // The second click's press drops the tile; its release is a no-op
    // too (a release never starts a hold).
    let outcome = press(&mut controller, &mut session, CellId::grid(0));
    assert!(outcome.moved);
    let outcome = release(&mut controller, &mut session, CellId::grid(0));
    assert_eq!(outcome, Outcome::default());
    assert_eq!(controller.held(), None);
    assert_eq!(session.occupant(CellId::grid(0)), Some(tile));
}

#[test]
fn test_press_drag_release_moves_the_tile() {
    let (mut controller, mut session) = new_game();
    let tile = session.occupant(CellId::rack(2)).unwrap();

    press(&mut controller, &mut session, CellId::rack(2));
    let outcome = release(&mut controller, &mut session, CellId::grid(6));
    assert!(outcome.moved);
    assert_eq!(controller.held(), None);
    assert_eq!(session.occupant(CellId::grid(6)), Some(tile));
}

#[test]
fn test_release_while_idle_never_picks_up() {
    let (mut controller, mut session) = new_game();
    let outcome = release(&mut controller, &mut session, CellId::rack(0));
    assert_eq!(outcome, Outcome::default());
    assert_eq!(controller.held(), None);
}

#[test]
fn test_dropping_outside_the_board_cancels() {
    let (mut controller, mut session) = new_game();
    let tile = session.occupant(CellId::rack(0)).unwrap();
    press(&mut controller, &mut session, CellId::rack(0));

    let outcome = controller.dispatch(&mut session, Command::Press { x: 50.0, y: 2.0 });
    assert!(outcome.cancelled);
    assert_eq!(controller.held(), None);
    assert_eq!(session.occupant(CellId::rack(0)), Some(tile));
}

#[test]
fn test_dropping_on_an_occupied_cell_flashes_and_aborts() {
    let (mut controller, mut session) = new_game();
    let held = session.occupant(CellId::rack(0)).unwrap();
    let blocker = session.occupant(CellId::rack(1)).unwrap();

    press(&mut controller, &mut session, CellId::rack(0));
    let outcome = press(&mut controller, &mut session, CellId::rack(1));
    assert!(outcome.collided);
    assert!(!outcome.moved);
    assert_eq!(controller.held(), None);

    // The blocking tile flashes and both tiles stay put.
    assert_eq!(session.flashing(), Some(blocker));
    assert_eq!(session.occupant(CellId::rack(0)), Some(held));
    assert_eq!(session.occupant(CellId::rack(1)), Some(blocker));

    // The flash clears itself on the tick timer.
    for _ in 0..FLASH_TICKS {
        session.tick();
    }
    assert_eq!(session.flashing(), None);
}

#[test]
fn test_rotate_acts_in_any_state() {
    let (mut controller, mut session) = new_game();
    let tile = session.occupant(CellId::rack(1)).unwrap();
    let before = session.tile(tile).orientation();

    // Rotating while holding another tile keeps the hold.
    press(&mut controller, &mut session, CellId::rack(0));
    let outcome = rotate(&mut controller, &mut session, CellId::rack(1));
    assert!(outcome.rotated);
    assert!(controller.held().is_some());
    assert_eq!(session.tile(tile).orientation(), (before + 1) % 4);
    assert!(session.clock().is_running());

    // Rotating empty space does nothing.
    let outcome = rotate(&mut controller, &mut session, CellId::grid(3));
    assert_eq!(outcome, Outcome::default());
}

#[test]
fn test_resolve_distinguishes_tile_cell_and_outside() {
    let (controller, session) = new_game();
    let (x, y) = at(&controller, CellId::rack(0));
    let tile = session.occupant(CellId::rack(0)).unwrap();
    assert_eq!(controller.resolve(&session, x, y), Target::Tile(tile));

    let (x, y) = at(&controller, CellId::grid(7));
    assert_eq!(controller.resolve(&session, x, y), Target::Cell(CellId::grid(7)));

    assert_eq!(controller.resolve(&session, 50.0, 2.0), Target::Outside);
}

#[test]
fn test_reset_restores_the_starting_layout() {
    let (mut controller, mut session) = new_game();
    let homes: Vec<_> = session
        .ordered_tiles()
        .map(|t| (t.home_cell(), t.home_rotation()))
        .collect();

    // Scramble: a few moves and rotations.
    press(&mut controller, &mut session, CellId::rack(0));
    press(&mut controller, &mut session, CellId::grid(0));
    press(&mut controller, &mut session, CellId::rack(3));
    press(&mut controller, &mut session, CellId::grid(9));
    rotate(&mut controller, &mut session, CellId::grid(0));
    rotate(&mut controller, &mut session, CellId::rack(5));
    for _ in 0..30 {
        session.tick();
    }
    assert!(session.is_played());

    controller.reset_all(&mut session);
    assert!(!session.is_played());
    assert_eq!(controller.held(), None);
    assert_eq!(session.clock().ticks(), 0);
    assert!(!session.clock().is_running());
    for (tile, (home, rotation)) in session.ordered_tiles().zip(&homes) {
        assert_eq!(tile.current_cell(), *home);
        assert_eq!(tile.orientation(), *rotation);
    }
    // The empty grid is fully bordered again, the racks are not.
    for i in 0..16 {
        assert!(session.is_bordered(CellId::grid(i)));
        assert!(!session.is_bordered(CellId::rack(i)));
    }
}

#[test]
fn test_reset_twice_equals_once() {
    let (mut controller, mut session) = new_game();
    press(&mut controller, &mut session, CellId::rack(2));
    press(&mut controller, &mut session, CellId::grid(4));

    controller.reset_all(&mut session);
    let first: Vec<_> = session.ordered_tiles().map(|t| t.current_cell()).collect();
    controller.reset_all(&mut session);
    let second: Vec<_> = session.ordered_tiles().map(|t| t.current_cell()).collect();
    assert_eq!(first, second);
}

#[test]
fn test_reset_untangles_a_tile_parked_in_anothers_home() {
    let (mut controller, mut session) = new_game();

    // Move rack 0's tile out, then park rack 1's tile in the vacated cell.
    press(&mut controller, &mut session, CellId::rack(0));
    press(&mut controller, &mut session, CellId::grid(0));
    press(&mut controller, &mut session, CellId::rack(1));
    press(&mut controller, &mut session, CellId::rack(0));

    controller.reset_all(&mut session);
    assert!(!session.is_played());
    for tile in session.ordered_tiles() {
        assert_eq!(tile.current_cell(), tile.home_cell());
    }
}

#[test]
fn test_teardown_empties_every_view() {
    let (mut controller, mut session) = new_game();
    press(&mut controller, &mut session, CellId::rack(0));
    controller.teardown_all(&mut session);

    assert_eq!(controller.held(), None);
    assert!(session.is_empty());
    assert!(session.shuffled_ids().is_empty());
    assert_eq!(session.flashing(), None);
    for i in 0..16 {
        assert_eq!(session.occupant(CellId::rack(i)), None);
        assert_eq!(session.occupant(CellId::grid(i)), None);
        assert!(session.is_bordered(CellId::grid(i)));
    }
}

#[test]
fn test_commands_serialize_for_replay_logs() {
    let command = Command::Rotate { x: 160.0, y: 55.0 };
    let json = serde_json::to_string(&command).unwrap();
    let back: Command = serde_json::from_str(&json).unwrap();
    assert_eq!(back, command);
}

#[test]
fn test_final_drop_reports_solved_and_stops_the_clock() {
    let (mut controller, mut session) = new_game();
    win::solve(&mut session);
    assert!(win::check(&session));

    // Pull the last piece back out, then drop it home again.
    press(&mut controller, &mut session, CellId::grid(0));
    let outcome = press(&mut controller, &mut session, CellId::rack(0));
    assert!(outcome.moved);
    assert!(!outcome.solved);

    press(&mut controller, &mut session, CellId::rack(0));
    let outcome = press(&mut controller, &mut session, CellId::grid(0));
    assert!(outcome.moved);
    assert!(outcome.solved);
    assert!(!session.clock().is_running());
}
