//! Agent integration tests: legality, determinism and tactical play.

use std::time::{Duration, Instant};

use push_battle::agents::{Agent, HeuristicAgent, HeuristicConfig, PolicyAgent, RandomAgent};
use push_battle::core::{Board, GameConfig, Move, Phase, Player, PlayerMap};
use push_battle::nn::{ActionSpace, EncodedState, PolicyNetwork, UniformPolicy};
use push_battle::rules::PushBattle;

fn position(rows: &[&str], current: Player, pieces_per_player: u8) -> PushBattle {
    let board = Board::from_rows(rows).unwrap();
    let placed = PlayerMap::new(|p| board.pieces(p).count() as u8);
    let config = GameConfig::new()
        .with_board_size(rows.len())
        .with_pieces_per_player(pieces_per_player);
    PushBattle::from_board(config, board, current, placed).unwrap()
}

fn later() -> Instant {
    Instant::now() + Duration::from_secs(5)
}

/// Let an agent play both sides until someone wins or `turns` run out.
fn self_play(agent: &mut dyn Agent, turns: u32) -> PushBattle {
    let mut game = PushBattle::standard();
    while game.turn_count() < turns {
        let request = agent.select_move(&game, later()).unwrap();
        let mv = game.validate(&request).unwrap();
        game.apply_move(&mv).unwrap();
        if game.check_winner().is_some() {
            break;
        }
        game.end_turn();
    }
    game
}

// =============================================================================
// Random Agent
// =============================================================================

#[test]
fn test_random_agent_plays_legal_games() {
    let mut agent = RandomAgent::new(11);
    let game = self_play(&mut agent, 60);
    assert!(game.turn_count() <= 60);
}

#[test]
fn test_random_agent_deterministic_with_seed() {
    let game = PushBattle::standard();
    let mut first = RandomAgent::new(99);
    let mut second = RandomAgent::new(99);

    for _ in 0..10 {
        assert_eq!(
            first.select_move(&game, later()).unwrap(),
            second.select_move(&game, later()).unwrap()
        );
    }
}

#[test]
fn test_random_agent_relocates_in_movement_phase() {
    let game = position(
        &[
            "X....", //
            "..O..", //
            ".....", //
            "X....", //
            "..O..", //
        ],
        Player::B,
        2,
    );
    let mut agent = RandomAgent::new(3);

    let request = agent.select_move(&game, later()).unwrap();
    let mv = game.validate(&request).unwrap();
    assert_eq!(mv.phase(), Phase::Movement);
}

// =============================================================================
// Heuristic Agent
// =============================================================================

#[test]
fn test_heuristic_finds_late_winning_move() {
    // The only wins sit on the last row, near the end of the move list.
    let mut game = position(
        &[
            "O.......", //
            "........", //
            "........", //
            "...O....", //
            "........", //
            "........", //
            "........", //
            ".....XX.", //
        ],
        Player::A,
        8,
    );
    let mut agent = HeuristicAgent::new(HeuristicConfig::default(), 5);

    let mv = agent.best_move(&game, later()).unwrap();
    assert!(matches!(
        mv,
        Move::Placement { row: 7, col: 4 } | Move::Placement { row: 7, col: 7 }
    ));

    game.apply_move(&mv).unwrap();
    assert_eq!(game.check_winner(), Some(Player::A));
}

#[test]
fn test_heuristic_scores_finite_without_decisive_moves() {
    // B threatens (0, 2), but no single A move completes a line for anyone.
    let game = position(
        &[
            "OO......", //
            "........", //
            "........", //
            "........", //
            "....X...", //
            "........", //
            "........", //
            "......X.", //
        ],
        Player::A,
        8,
    );
    let agent = HeuristicAgent::new(HeuristicConfig::default(), 1);

    for mv in game.legal_moves() {
        let score = agent.evaluate(&game, &mv).unwrap();
        assert!(score.is_finite(), "{mv} scored {score}");
    }
}

#[test]
fn test_heuristic_respects_short_budget() {
    let config = HeuristicConfig::default().with_time_budget_ms(1);
    let mut agent = HeuristicAgent::new(config, 2);
    let game = PushBattle::standard();

    let start = Instant::now();
    let mv = agent.best_move(&game, later()).unwrap();

    assert!(game.check_move(&mv).is_ok());
    assert!(start.elapsed() < Duration::from_secs(1));
}

// =============================================================================
// Policy Agent
// =============================================================================

/// Prefers the highest flat action index.
struct Ascending;

impl PolicyNetwork for Ascending {
    fn predict(&self, encoded: &EncodedState) -> Vec<f32> {
        let n = encoded.shape[1];
        (0..n * n * n * n).map(|i| i as f32).collect()
    }
}

#[test]
fn test_policy_agent_follows_network() {
    let game = PushBattle::standard();
    let mut agent = PolicyAgent::new(Ascending, 0);

    let request = agent.select_move(&game, later()).unwrap();
    let mv = game.validate(&request).unwrap();
    assert_eq!(mv, Move::Placement { row: 7, col: 7 });
}

#[test]
fn test_policy_agent_with_uniform_policy_plays_legal_games() {
    let space = ActionSpace::new(8);
    let mut agent = PolicyAgent::new(UniformPolicy::new(space.size()), 4).with_epsilon(0.3);

    let game = self_play(&mut agent, 40);
    assert!(game.turn_count() <= 40);
    assert_eq!(agent.name(), "PolicyAgent");
}
