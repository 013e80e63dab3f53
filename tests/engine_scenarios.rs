extern crate lightcycles;
extern crate rand;
extern crate time;

use lightcycles::engine::{Game, GameStatus, Mode, Outcome, Controller};
use lightcycles::engine::agent::AgentId;
use lightcycles::engine::clock::ManualClock;
use lightcycles::engine::geometry::{Point, Heading};
use lightcycles::engine::settings::{GameSettings, Spawn};
use lightcycles::input::textmap;

use rand::SeedableRng;
use rand::prng::XorShiftRng;
use time::Duration;

fn rng() -> XorShiftRng {
    XorShiftRng::from_seed([7; 16])
}

fn facing_settings(p1: Point, p2: Point) -> GameSettings {
    GameSettings {
        height: 10,
        width: 10,
        spawns: Some([
            Spawn { position: p1, heading: Heading::Right },
            Spawn { position: p2, heading: Heading::Left }
        ]),
        ..GameSettings::default()
    }
}

fn board_game(map: &str, headings: [Heading; 2], mode: Mode) -> Game<ManualClock, XorShiftRng> {
    let board = textmap::read_board(map, headings).expect("Failed to read board");
    let mut settings = GameSettings::default();
    settings.policy.randomness = 0.0;
    board.into_game(settings, mode, ManualClock::new(), rng())
}

#[test]
fn agents_driving_into_each_other_draw() {
    let mut game = Game::new(facing_settings(Point::new(5, 2), Point::new(5, 7)), Mode::TwoPlayer, ManualClock::new(), rng())
        .expect("Failed to create game");

    assert_eq!(game.advance_tick().status, GameStatus::Running);
    assert_eq!(game.advance_tick().status, GameStatus::Running);

    let result = game.advance_tick();
    assert_eq!(result.status, GameStatus::Ended(Outcome::Draw));
    assert_eq!(result.agent(AgentId::Player1).position(), Point::new(5, 4));
    assert_eq!(result.agent(AgentId::Player2).position(), Point::new(5, 5));
    assert!(!result.agent(AgentId::Player1).is_alive());
    assert!(!result.agent(AgentId::Player2).is_alive());
}

#[test]
fn agents_entering_the_same_cell_both_crash() {
    let mut game = Game::new(facing_settings(Point::new(5, 2), Point::new(5, 8)), Mode::TwoPlayer, ManualClock::new(), rng())
        .expect("Failed to create game");

    game.advance_tick();
    game.advance_tick();
    let result = game.advance_tick();

    assert_eq!(result.outcome(), Outcome::Draw);
    assert_eq!(result.agent(AgentId::Player1).trail().len(), 3);
    assert_eq!(result.agent(AgentId::Player2).trail().len(), 3);
    assert!(!result.occupancy.contains(Point::new(5, 5)));
}

#[test]
fn driving_off_the_edge_loses() {
    let mut game = board_game("
        ......
        .....1
        ......
        .2....
        ......
    ", [Heading::Right, Heading::Up], Mode::TwoPlayer);

    let result = game.advance_tick();

    assert_eq!(result.outcome(), Outcome::Won(AgentId::Player2));
    let loser = result.agent(AgentId::Player1);
    assert!(!loser.is_alive());
    assert_eq!(loser.position(), Point::new(1, 5));
    assert_eq!(loser.trail(), &[Point::new(1, 5)]);
    assert_eq!(result.agent(AgentId::Player2).position(), Point::new(2, 1));
}

#[test]
fn driving_into_a_trail_loses() {
    let mut game = board_game("
        ......
        .1....
        .bbbb2
        ......
    ", [Heading::Right, Heading::Up], Mode::TwoPlayer);

    game.set_heading(AgentId::Player1, Some(Heading::Down));
    let result = game.advance_tick();

    assert_eq!(result.outcome(), Outcome::Won(AgentId::Player2));
}

#[test]
fn swapping_cells_is_a_draw() {
    let mut game = board_game("
        ......
        ..12..
        ......
    ", [Heading::Right, Heading::Left], Mode::TwoPlayer);

    assert_eq!(game.advance_tick().outcome(), Outcome::Draw);
}

#[test]
fn reversal_requests_are_ignored() {
    let map = "
        ..........
        ..1.......
        ..........
        .......2..
    ";
    let mut requested = board_game(map, [Heading::Right, Heading::Left], Mode::TwoPlayer);
    let mut untouched = board_game(map, [Heading::Right, Heading::Left], Mode::TwoPlayer);

    requested.set_heading(AgentId::Player1, Some(Heading::Left));
    let requested_result = requested.advance_tick();
    let untouched_result = untouched.advance_tick();

    assert_eq!(requested_result, untouched_result);
    assert_eq!(requested_result.agent(AgentId::Player1).heading(), Heading::Right);
    assert_eq!(requested_result.agent(AgentId::Player1).position(), Point::new(1, 3));
}

#[test]
fn withheld_input_keeps_the_last_request() {
    let mut game = board_game("
        ..........
        ..1.......
        ..........
        .......2..
    ", [Heading::Right, Heading::Left], Mode::TwoPlayer);

    game.set_heading(AgentId::Player1, Some(Heading::Down));
    game.set_heading(AgentId::Player1, None);
    let result = game.advance_tick();
    assert_eq!(result.agent(AgentId::Player1).position(), Point::new(2, 2));

    let result = game.advance_tick();
    assert_eq!(result.agent(AgentId::Player1).position(), Point::new(3, 2));
    assert_eq!(result.agent(AgentId::Player1).heading(), Heading::Down);
}

#[test]
fn surviving_agents_grow_by_one_cell() {
    let mut game = board_game("
        ..........
        ..1.......
        ..........
        .......2..
    ", [Heading::Right, Heading::Left], Mode::TwoPlayer);

    let before = game.snapshot();
    let after = game.advance_tick();

    for &id in AgentId::all().iter() {
        assert_eq!(after.agent(id).trail().len(), before.agent(id).trail().len() + 1);
        assert!(after.occupancy.contains(after.agent(id).position()));
    }
    assert_eq!(after.occupancy.len(), before.occupancy.len() + 2);
    assert_eq!(after.tick, 1);
}

#[test]
fn nothing_moves_after_the_game_ends() {
    let mut game = board_game("
        ......
        .....1
        ......
        .2....
        ......
    ", [Heading::Right, Heading::Up], Mode::TwoPlayer);

    let ended = game.advance_tick();
    game.set_heading(AgentId::Player2, Some(Heading::Left));
    let later = game.advance_tick();

    assert_eq!(ended, later);
}

#[test]
fn paused_games_do_not_advance() {
    let mut game = board_game("
        ..........
        ..1.......
        ..........
        .......2..
    ", [Heading::Right, Heading::Left], Mode::TwoPlayer);

    game.pause();
    let paused = game.advance_tick();
    assert_eq!(paused.status, GameStatus::Paused);
    assert_eq!(paused.tick, 0);
    assert_eq!(paused.agent(AgentId::Player1).position(), Point::new(1, 2));

    game.toggle_pause();
    let resumed = game.advance_tick();
    assert_eq!(resumed.status, GameStatus::Running);
    assert_eq!(resumed.agent(AgentId::Player1).position(), Point::new(1, 3));
}

#[test]
fn time_spent_paused_still_speeds_up_once() {
    let mut game = board_game("
        ..........
        ..1.......
        ..........
        .......2..
    ", [Heading::Right, Heading::Left], Mode::TwoPlayer);

    game.pause();
    game.clock().advance(Duration::milliseconds(20000));
    let paused = game.advance_tick();
    assert_eq!(paused.status, GameStatus::Paused);
    assert_eq!(paused.tick_interval, Duration::milliseconds(100));

    game.resume();
    let resumed = game.advance_tick();
    assert_eq!(resumed.status, GameStatus::Running);
    assert_eq!(resumed.tick_interval, Duration::milliseconds(95));
}

#[test]
fn boards_print_the_way_they_are_read() {
    let map = "......\n.aa1..\n....2b\n";
    let mut game = textmap::read_board(map, [Heading::Right, Heading::Left])
        .expect("Failed to read board")
        .into_game(GameSettings::default(), Mode::TwoPlayer, ManualClock::new(), rng());

    assert_eq!(game.snapshot().to_string(), map);

    let result = game.advance_tick();
    assert_eq!(result.status, GameStatus::Running);
    assert_eq!(result.to_string(), "......\n.aaa1.\n...2bb\n");
}

#[test]
fn restart_puts_everyone_back() {
    let mut game = Game::new(facing_settings(Point::new(5, 2), Point::new(5, 7)), Mode::TwoPlayer, ManualClock::new(), rng())
        .expect("Failed to create game");
    while !game.advance_tick().status.is_complete() {}

    game.restart();

    let result = game.snapshot();
    assert_eq!(result.status, GameStatus::Running);
    assert_eq!(result.tick, 0);
    assert_eq!(result.occupancy.len(), 2);
    assert_eq!(result.agent(AgentId::Player1).trail(), &[Point::new(5, 2)]);
    assert_eq!(result.agent(AgentId::Player2).trail(), &[Point::new(5, 7)]);
    assert_eq!(result.agent(AgentId::Player1).heading(), Heading::Right);
}

#[test]
fn restart_with_bad_settings_keeps_the_old_game() {
    let mut game = Game::new(facing_settings(Point::new(5, 2), Point::new(5, 7)), Mode::TwoPlayer, ManualClock::new(), rng())
        .expect("Failed to create game");
    game.advance_tick();
    let before = game.snapshot();

    let bad = GameSettings { height: 0, ..GameSettings::default() };
    assert!(game.restart_with(bad).is_err());
    assert_eq!(game.snapshot(), before);

    game.restart_with(GameSettings::default()).expect("Failed to restart");
    assert_eq!(game.grid().height(), 20);
    assert_eq!(game.grid().width(), 36);
}

#[test]
fn the_ai_turns_away_from_the_wall() {
    let mut game = board_game("
        .....
        ...1.
        ....2
    ", [Heading::Left, Heading::Right], Mode::SinglePlayer);
    assert_eq!(game.controller(AgentId::Player1), Controller::Human);
    assert_eq!(game.controller(AgentId::Player2), Controller::Ai);

    let result = game.advance_tick();

    assert_eq!(result.status, GameStatus::Running);
    assert_eq!(result.agent(AgentId::Player2).position(), Point::new(1, 4));
    assert_eq!(result.agent(AgentId::Player2).heading(), Heading::Up);
}

#[test]
fn ticks_get_faster_as_time_passes() {
    let clock = ManualClock::new();
    let board = textmap::read_board("
        1.2
        ...
        ...
        ...
        ...
        ...
        ...
        ...
        ...
        ...
        ...
        ...
        ...
        ...
        ...
        ...
        ...
        ...
        ...
        ...
        ...
        ...
    ", [Heading::Down, Heading::Down]).expect("Failed to read board");
    let mut game = board.into_game(GameSettings::default(), Mode::TwoPlayer, &clock, rng());

    assert_eq!(game.tick_interval(), Duration::milliseconds(100));

    clock.advance(Duration::milliseconds(8000));
    game.advance_tick();
    assert_eq!(game.tick_interval(), Duration::milliseconds(100));

    for step in 1..21 {
        clock.advance(Duration::milliseconds(8001));
        let result = game.advance_tick();
        assert_eq!(result.status, GameStatus::Running);
        let expected = std::cmp::max(30, 100 - 5 * step);
        assert_eq!(result.tick_interval, Duration::milliseconds(expected));
    }
}
