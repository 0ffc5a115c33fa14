//! Turn engine integration tests.
//!
//! Every test drives a `Game` through its public inputs with a scripted
//! random source, so dice, quiz picks and tile draws are exact.

use dice_quiz::board::{Board, CellIndex, DiagonalPath, PathMode, TileType};
use dice_quiz::core::{LapRule, PathState, PlayerInput, ScriptedRng};
use dice_quiz::economy::Multiplier;
use dice_quiz::effects::FollowUp;
use dice_quiz::error::GameError;
use dice_quiz::events::GameEvent;
use dice_quiz::rules::{Game, GameBuilder, TurnPhase, TurnProgress};
use dice_quiz::InputOutcome;

fn scripted(values: &[u32]) -> Game<ScriptedRng> {
    Game::with_rng(ScriptedRng::new(values.iter().copied()))
}

fn build(builder: GameBuilder, values: &[u32]) -> Game<ScriptedRng> {
    builder
        .build_with_rng(ScriptedRng::new(values.iter().copied()))
        .unwrap()
}

fn kinds(events: &[GameEvent]) -> Vec<&'static str> {
    events.iter().map(GameEvent::kind).collect()
}

fn positions(events: &[GameEvent]) -> Vec<u8> {
    events
        .iter()
        .filter_map(|e| match e {
            GameEvent::StepMoved { position, .. } => Some(position.raw()),
            _ => None,
        })
        .collect()
}

/// Standard tiles with one outer cell replaced.
fn board_with(cell: usize, tile: TileType) -> Board {
    let standard = Board::standard();
    let mut tiles: Vec<TileType> = (0..standard.cell_count())
        .map(|i| standard.tile_type_at(CellIndex::new(i as u8)))
        .collect();
    tiles[cell] = tile;

    let paths = standard
        .branch_points()
        .into_iter()
        .filter_map(|b| standard.diagonal_path_for(b).cloned())
        .collect::<Vec<DiagonalPath>>();
    Board::new(tiles, standard.outer_cells(), standard.start(), paths).unwrap()
}

// =============================================================================
// Rolling and Doubles
// =============================================================================

#[test]
fn test_doubles_refund_heart_cost() {
    // 10 -> 6 (Coin), base draw 20
    let mut game = scripted(&[2, 2, 20]);
    let mut events: Vec<GameEvent> = Vec::new();

    let progress = game.request_roll(&mut events).unwrap();
    let result = progress.completed().unwrap();

    assert!(result.was_double);
    assert_eq!(result.heart_cost, 0);
    assert_eq!(result.final_position, CellIndex::new(6));
    assert_eq!(game.state().wallet.hearts(), 50);
    assert_eq!(game.state().wallet.coins(), 200);

    assert_eq!(
        kinds(&events),
        vec![
            "stats_changed",
            "dice_rolled",
            "hearts_refunded",
            "stats_changed",
            "step_moved",
            "step_moved",
            "step_moved",
            "step_moved",
            "tile_resolved",
            "stats_changed",
            "turn_completed",
        ]
    );
    assert_eq!(positions(&events), vec![9, 8, 7, 6]);
    assert_eq!(events[2], GameEvent::HeartsRefunded { amount: 10 });
}

#[test]
fn test_roll_rejected_without_hearts() {
    let mut game = build(GameBuilder::new().starting_hearts(9), &[1, 2]);
    let mut events: Vec<GameEvent> = Vec::new();
    let before = game.state().clone();

    assert_eq!(
        game.request_roll(&mut events),
        Err(GameError::InsufficientHearts {
            required: 10,
            available: 9
        })
    );
    assert_eq!(game.state(), &before);
    assert!(events.is_empty());

    // A cheaper bet makes the roll affordable: 10 -> 7 (Attack) at 1x.
    game.select_bet(1, &mut events).unwrap();
    let result = game.request_roll(&mut events).unwrap();
    assert_eq!(result.completed().unwrap().final_position, CellIndex::new(7));
    assert_eq!(game.state().wallet.hearts(), 9 - 1 + 7);
    assert_eq!(game.state().wallet.coins(), 100 + 150);
}

// =============================================================================
// Betting
// =============================================================================

#[test]
fn test_select_bet_validation() {
    let mut game = build(GameBuilder::new().starting_hearts(20), &[]);
    let mut events: Vec<GameEvent> = Vec::new();

    assert_eq!(game.select_bet(4, &mut events), Err(GameError::InvalidMultiplier(4)));
    assert_eq!(
        game.select_bet(10, &mut events),
        Err(GameError::InsufficientHearts {
            required: 25,
            available: 20
        })
    );
    assert_eq!(game.state().wallet.multiplier(), Multiplier::X5);
    assert!(events.is_empty());

    assert_eq!(game.select_bet(3, &mut events), Ok(Multiplier::X3));
    assert_eq!(
        events,
        vec![GameEvent::BetSelected {
            multiplier: Multiplier::X3,
            heart_cost: 5
        }]
    );
    // Nothing is charged until the roll.
    assert_eq!(game.state().wallet.hearts(), 20);
}

// =============================================================================
// Branch Points and Diagonals
// =============================================================================

#[test]
fn test_branch_point_suspends_turn() {
    // Turn 1: 10 -> 5 (Special). Turn 2 starts on the branch point.
    let mut game = scripted(&[3, 2, 1, 2]);
    let mut events: Vec<GameEvent> = Vec::new();

    game.request_roll(&mut events).unwrap();
    assert_eq!(game.position(), CellIndex::new(5));
    assert_eq!(game.state().wallet.hearts(), 50 - 10 + 50);

    events.clear();
    let progress = game.request_roll(&mut events).unwrap();
    assert_eq!(progress, TurnProgress::AwaitingPathChoice { at: CellIndex::new(5) });
    assert!(game.is_turn_in_progress());
    assert_eq!(
        events.last(),
        Some(&GameEvent::PathChoiceRequired { at: CellIndex::new(5) })
    );
    // The roll was charged before suspending.
    assert_eq!(game.state().wallet.hearts(), 80);

    // Nothing else is accepted while waiting.
    assert_eq!(game.request_roll(&mut events), Err(GameError::ReentrantTurn));
    assert_eq!(game.select_bet(1, &mut events), Err(GameError::ReentrantTurn));
    assert!(matches!(
        game.answer_quiz(0, &mut events),
        Err(GameError::UnexpectedInput { .. })
    ));

    // Outer: 5 -> 4, 3, 2 (Coin)
    game.rng_mut().extend([10]);
    let progress = game.choose_path(PathMode::Outer, &mut events).unwrap();
    let result = progress.completed().unwrap();
    assert_eq!(result.final_position, CellIndex::new(2));
    assert_eq!(result.tile.tile, TileType::Coin);
    assert_eq!(game.state().path, PathState::Outer);
    assert!(!game.is_turn_in_progress());
}

#[test]
fn test_diagonal_through_center_returns_to_start() {
    // 10 -> 5, then diagonal 3 steps: 23, 24, 20 (Center)
    let mut game = scripted(&[3, 2, 1, 2]);
    let mut events: Vec<GameEvent> = Vec::new();
    game.request_roll(&mut events).unwrap();

    events.clear();
    game.request_roll(&mut events).unwrap();
    let progress = game.choose_path(PathMode::Diagonal, &mut events).unwrap();
    let result = progress.completed().unwrap().clone();

    assert_eq!(positions(&events), vec![23, 24, 20]);
    assert_eq!(result.final_position, CellIndex::new(20));
    assert_eq!(result.tile.follow_up, FollowUp::ReturnToStart);
    assert_eq!(game.state().wallet.coins(), 100 + 1500 + 2500);
    assert_eq!(game.state().wallet.hearts(), 80 + 75);
    assert!(game.state().pending_center_return);
    assert!(events.contains(&GameEvent::CenterReturnScheduled { delay_ms: 2000 }));
    assert!(matches!(game.state().path, PathState::Diagonal { cursor: 3, .. }));

    // The renderer's timer fires.
    events.clear();
    assert!(game.complete_center_return(&mut events));
    assert_eq!(game.position(), CellIndex::new(10));
    assert_eq!(game.state().path, PathState::Outer);
    assert_eq!(
        events,
        vec![GameEvent::CenterReturned {
            position: CellIndex::new(10)
        }]
    );
    assert!(!game.complete_center_return(&mut events));
}

#[test]
fn test_roll_applies_pending_center_return_first() {
    let mut game = scripted(&[3, 2, 1, 2, 1, 2]);
    let mut events: Vec<GameEvent> = Vec::new();
    game.request_roll(&mut events).unwrap();
    game.request_roll(&mut events).unwrap();
    game.choose_path(PathMode::Diagonal, &mut events).unwrap();
    assert!(game.state().pending_center_return);

    // Rolling before the timer fires moves from the start cell: 10 -> 7.
    events.clear();
    let result = game.request_roll(&mut events).unwrap();
    assert_eq!(events[0].kind(), "center_returned");
    assert_eq!(result.completed().unwrap().final_position, CellIndex::new(7));
    assert!(!game.state().pending_center_return);
}

#[test]
fn test_diagonal_ending_on_start() {
    // 10 -> 5, then diagonal 6 steps to the exit (Start)
    let mut game = scripted(&[3, 2, 4, 2]);
    let mut events: Vec<GameEvent> = Vec::new();
    game.request_roll(&mut events).unwrap();
    game.request_roll(&mut events).unwrap();

    events.clear();
    let result = game.choose_path(PathMode::Diagonal, &mut events).unwrap();
    let result = result.completed().unwrap();

    assert_eq!(positions(&events), vec![23, 24, 20, 25, 26, 10]);
    assert_eq!(result.tile.tile, TileType::Start);
    assert!(!result.lap_completed);
    assert_eq!(game.state().path, PathState::Outer);
}

#[test]
fn test_diagonal_overrun_continues_on_ring() {
    // 10 -> 5, then 12 steps: six diagonal cells, snap to 10, five outer
    let mut game = scripted(&[3, 2, 6, 6]);
    let mut events: Vec<GameEvent> = Vec::new();
    game.request_roll(&mut events).unwrap();
    game.request_roll(&mut events).unwrap();

    events.clear();
    let result = game.choose_path(PathMode::Diagonal, &mut events).unwrap();
    let result = result.completed().unwrap();

    assert_eq!(
        positions(&events),
        vec![23, 24, 20, 25, 26, 10, 10, 9, 8, 7, 6, 5]
    );
    assert_eq!(result.final_position, CellIndex::new(5));
    assert!(result.was_double);
    assert_eq!(game.state().path, PathState::Outer);
}

// =============================================================================
// Quiz
// =============================================================================

#[test]
fn test_quiz_correct_answer_pays_thirty_per_multiplier() {
    // 10 -> 8 (Quiz) with doubles, question 0
    let mut game = scripted(&[1, 1, 0]);
    let mut events: Vec<GameEvent> = Vec::new();

    let progress = game.request_roll(&mut events).unwrap();
    let question = match progress {
        TurnProgress::AwaitingQuizAnswer { question, .. } => question,
        other => panic!("expected a quiz, got {other:?}"),
    };
    assert!(game.is_turn_in_progress());
    assert!(matches!(game.phase(), TurnPhase::AwaitingQuizAnswer { .. }));
    assert_eq!(game.pending_question(), Some(&question));
    assert_eq!(game.request_roll(&mut events), Err(GameError::ReentrantTurn));

    events.clear();
    let result = game.answer_quiz(question.correct, &mut events).unwrap();
    let result = result.completed().unwrap();

    assert_eq!(game.state().wallet.coins(), 100 + 150);
    assert_eq!(game.state().wallet.hearts(), 50);
    assert!(result.quiz.unwrap().correct);
    assert_eq!(
        events[0],
        GameEvent::QuizResolved {
            correct: true,
            coins: 150,
            hearts: 0
        }
    );
    assert!(!game.is_turn_in_progress());
}

#[test]
fn test_quiz_wrong_answer_costs_two_hearts() {
    let mut game = scripted(&[1, 1, 2]);
    let mut events: Vec<GameEvent> = Vec::new();
    game.request_roll(&mut events).unwrap();

    let question = game.pending_question().unwrap().clone();
    let wrong = (question.correct + 1) % question.options.len();
    let result = game.answer_quiz(wrong, &mut events).unwrap();

    assert_eq!(game.state().wallet.hearts(), 48);
    assert_eq!(game.state().wallet.coins(), 100);
    assert!(!result.completed().unwrap().quiz.unwrap().correct);
}

#[test]
fn test_quiz_invalid_option_keeps_question() {
    let mut game = scripted(&[1, 1, 0]);
    let mut events: Vec<GameEvent> = Vec::new();
    game.request_roll(&mut events).unwrap();

    let options = game.pending_question().unwrap().options.len();
    let before = game.state().clone();
    assert_eq!(
        game.answer_quiz(99, &mut events),
        Err(GameError::InvalidQuizOption { index: 99, options })
    );
    assert_eq!(game.state(), &before);
    assert!(game.is_turn_in_progress());
}

#[test]
fn test_wrong_answer_can_end_game() {
    // 12 hearts, 10 per roll: 10 -> 1 (Quiz) with 2 hearts left
    let mut game = build(GameBuilder::new().starting_hearts(12), &[4, 5, 1]);
    let mut events: Vec<GameEvent> = Vec::new();
    game.request_roll(&mut events).unwrap();

    // Game over waits for the answer.
    assert_eq!(game.state().wallet.hearts(), 2);
    assert!(!game.is_game_over());

    let question = game.pending_question().unwrap().clone();
    let wrong = (question.correct + 1) % question.options.len();
    let result = game.answer_quiz(wrong, &mut events).unwrap();

    assert!(result.completed().unwrap().game_over);
    assert!(game.is_game_over());
    assert_eq!(
        events.last(),
        Some(&GameEvent::GameOver {
            final_coins: 100,
            final_tile: TileType::Quiz
        })
    );
}

// =============================================================================
// Exchange and Game Over
// =============================================================================

#[test]
fn test_exchange_with_exactly_enough_hearts() {
    // 15 hearts - 10 per roll = 5 on arrival at the exchange tile
    let board = board_with(7, TileType::Exchange);
    let mut game = build(GameBuilder::new().board(board).starting_hearts(15), &[1, 2]);
    let mut events: Vec<GameEvent> = Vec::new();

    let result = game.request_roll(&mut events).unwrap();
    let result = result.completed().unwrap();

    assert_eq!(result.tile.tile, TileType::Exchange);
    assert_eq!(game.state().wallet.hearts(), 0);
    assert_eq!(game.state().wallet.coins(), 100 + 250);
    assert!(result.game_over);
    assert!(game.is_game_over());
}

#[test]
fn test_exchange_fails_one_heart_short() {
    let board = board_with(7, TileType::Exchange);
    let mut game = build(GameBuilder::new().board(board).starting_hearts(14), &[1, 2]);
    let mut events: Vec<GameEvent> = Vec::new();

    let result = game.request_roll(&mut events).unwrap();
    let result = result.completed().unwrap();

    assert!(result.tile.delta.is_empty());
    assert_eq!(game.state().wallet.hearts(), 4);
    assert_eq!(game.state().wallet.coins(), 100);
    assert!(!game.is_game_over());
}

#[test]
fn test_game_over_blocks_until_reset() {
    // 10 hearts at 5x: 10 -> 6 (Coin) leaves 0 hearts
    let mut game = build(GameBuilder::new().starting_hearts(10), &[1, 3, 10]);
    let mut events: Vec<GameEvent> = Vec::new();

    game.request_roll(&mut events).unwrap();
    assert!(game.is_game_over());
    assert_eq!(
        events.last(),
        Some(&GameEvent::GameOver {
            final_coins: 150,
            final_tile: TileType::Coin
        })
    );

    assert_eq!(game.request_roll(&mut events), Err(GameError::GameOver));
    assert_eq!(game.select_bet(1, &mut events), Err(GameError::GameOver));

    events.clear();
    game.reset(&mut events);
    assert!(!game.is_game_over());
    assert_eq!(game.position(), CellIndex::new(0));
    assert_eq!(game.state().wallet.hearts(), 10);
    assert_eq!(game.state().wallet.coins(), 100);
    assert!(game.state().history.is_empty());
    assert_eq!(events[0], GameEvent::GameReset);
}

// =============================================================================
// Laps
// =============================================================================

#[test]
fn test_lap_on_arrival_at_start() {
    let mut game = build(
        GameBuilder::new()
            .start_position(CellIndex::new(12))
            .lap_rule(LapRule::ArriveAtStart),
        &[1, 1],
    );
    let mut events: Vec<GameEvent> = Vec::new();

    let result = game.request_roll(&mut events).unwrap();
    let result = result.completed().unwrap();

    assert!(result.lap_completed);
    assert_eq!(game.state().wallet.lap_count(), 1);
    // Doubles refund, plus the lap bonus
    assert_eq!(game.state().wallet.hearts(), 55);
    // Landing on start pays 50 per multiplier
    assert_eq!(game.state().wallet.coins(), 350);
    assert!(events.contains(&GameEvent::LapCompleted {
        lap_count: 1,
        heart_bonus: 5
    }));
}

#[test]
fn test_default_lap_rule_ignores_descending_arrival() {
    let mut game = build(GameBuilder::new().start_position(CellIndex::new(12)), &[1, 1]);
    let mut events: Vec<GameEvent> = Vec::new();

    let result = game.request_roll(&mut events).unwrap();
    assert!(!result.completed().unwrap().lap_completed);
    assert_eq!(game.state().wallet.lap_count(), 0);
}

#[test]
fn test_lap_counted_once_per_turn() {
    // A 12-step roll on a 4-cell ring reaches the start cell three times.
    let tiles = vec![TileType::Start, TileType::Heart, TileType::Heart, TileType::Heart];
    let board = Board::new(tiles, 4, CellIndex::new(0), vec![]).unwrap();
    let mut game = build(
        GameBuilder::new()
            .board(board)
            .start_position(CellIndex::new(0))
            .lap_rule(LapRule::ArriveAtStart),
        &[6, 6],
    );
    let mut events: Vec<GameEvent> = Vec::new();

    let result = game.request_roll(&mut events).unwrap();
    let result = result.completed().unwrap();

    assert_eq!(positions(&events), vec![3, 2, 1, 0, 3, 2, 1, 0, 3, 2, 1, 0]);
    assert_eq!(result.final_position, CellIndex::new(0));
    assert!(result.lap_completed);

    let laps = events
        .iter()
        .filter(|e| matches!(e, GameEvent::LapCompleted { .. }))
        .count();
    assert_eq!(laps, 1);
    assert_eq!(game.state().wallet.lap_count(), 1);
    // Doubles refund, plus a single lap bonus
    assert_eq!(game.state().wallet.hearts(), 55);
}

// =============================================================================
// Input Dispatch and History
// =============================================================================

#[test]
fn test_handle_runs_a_full_turn() {
    let mut game = scripted(&[3, 2, 1, 2]);
    let mut events: Vec<GameEvent> = Vec::new();

    game.handle(PlayerInput::Roll, &mut events).unwrap();
    let outcome = game.handle(PlayerInput::Roll, &mut events).unwrap();
    assert_eq!(
        outcome,
        InputOutcome::Turn(TurnProgress::AwaitingPathChoice { at: CellIndex::new(5) })
    );

    let outcome = game
        .handle(PlayerInput::ChoosePath(PathMode::Diagonal), &mut events)
        .unwrap();
    assert!(matches!(outcome, InputOutcome::Turn(TurnProgress::Completed(_))));

    let history = &game.state().history;
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].number, 1);
    assert_eq!(history[1].final_position, CellIndex::new(20));
    assert_eq!(game.state().last_turn().map(|t| t.number), Some(2));
}

#[test]
fn test_suspended_state_serializes() {
    let mut game = scripted(&[1, 1, 0]);
    let mut events: Vec<GameEvent> = Vec::new();
    game.request_roll(&mut events).unwrap();

    let json = serde_json::to_string(game.state()).unwrap();
    let back: dice_quiz::GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, game.state());
    assert!(back.is_turn_in_progress());
}
