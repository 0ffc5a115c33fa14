//! Turn engine.
//!
//! `Game` owns the board, the quiz bank, the configuration, the state and
//! the random source. Every inbound operation takes `&mut self` and an
//! [`EventSink`]; a rejected operation returns a [`GameError`] and leaves
//! the state untouched.
//!
//! ```
//! use dice_quiz::prelude::*;
//!
//! let mut game = Game::new(7);
//! let mut events: Vec<GameEvent> = Vec::new();
//!
//! let mut progress = game.request_roll(&mut events).unwrap();
//! loop {
//!     progress = match progress {
//!         TurnProgress::Completed(_) => break,
//!         TurnProgress::AwaitingPathChoice { .. } => {
//!             game.choose_path(PathMode::Diagonal, &mut events).unwrap()
//!         }
//!         TurnProgress::AwaitingQuizAnswer { question, .. } => {
//!             game.answer_quiz(question.correct, &mut events).unwrap()
//!         }
//!     };
//! }
//! assert!(!game.is_turn_in_progress());
//! assert_eq!(game.state().history.len(), 1);
//! ```

use log::{debug, info, trace};

use super::movement;
use super::turn::{DiceRoll, PendingTurn, TurnPhase, TurnProgress, TurnResult};
use crate::board::{Board, CellIndex, PathMode};
use crate::core::{GameConfig, GameRng, GameState, InputOutcome, PathState, PlayerInput, RandomSource};
use crate::economy::Multiplier;
use crate::effects::{FollowUp, TileOutcome, TileResolver};
use crate::error::{GameError, GameResult, InputKind};
use crate::events::{EventSink, GameEvent};
use crate::quiz::{QuizBank, QuizQuestion, QuizVerdict};

/// A single-player game.
#[derive(Clone, Debug)]
pub struct Game<R: RandomSource = GameRng> {
    pub(crate) board: Board,
    pub(crate) quiz: QuizBank,
    pub(crate) config: GameConfig,
    pub(crate) state: GameState,
    pub(crate) rng: R,
}

impl Game<GameRng> {
    /// Standard board, standard questions, default rules.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Fork the game for "what if" exploration.
    ///
    /// The fork shares everything except its random stream, so it plays
    /// out differently from this game from now on.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self {
            board: self.board.clone(),
            quiz: self.quiz.clone(),
            config: self.config.clone(),
            state: self.state.clone(),
            rng: self.rng.fork(),
        }
    }
}

impl<R: RandomSource> Game<R> {
    /// Standard content and default rules with a custom random source.
    pub fn with_rng(rng: R) -> Self {
        let config = GameConfig::default();
        Self {
            board: Board::standard(),
            quiz: QuizBank::standard(),
            state: GameState::new(&config),
            config,
            rng,
        }
    }

    pub(crate) fn from_parts(board: Board, quiz: QuizBank, config: GameConfig, state: GameState, rng: R) -> Self {
        Self {
            board,
            quiz,
            config,
            state,
            rng,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn quiz_bank(&self) -> &QuizBank {
        &self.quiz
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The random source, e.g. to top up a scripted sequence.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Current cell.
    #[must_use]
    pub fn position(&self) -> CellIndex {
        self.state.position
    }

    #[must_use]
    pub fn phase(&self) -> &TurnPhase {
        &self.state.phase
    }

    #[must_use]
    pub fn is_turn_in_progress(&self) -> bool {
        self.state.is_turn_in_progress()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// The question waiting for an answer, if any.
    #[must_use]
    pub fn pending_question(&self) -> Option<&QuizQuestion> {
        match &self.state.phase {
            TurnPhase::AwaitingQuizAnswer { question, .. } => self.quiz.get(*question),
            _ => None,
        }
    }

    // === Inputs ===

    /// Dispatch any player input.
    pub fn handle(&mut self, input: PlayerInput, sink: &mut dyn EventSink) -> GameResult<InputOutcome> {
        match input {
            PlayerInput::Roll => self.request_roll(sink).map(InputOutcome::Turn),
            PlayerInput::SelectBet(value) => self.select_bet(value, sink).map(InputOutcome::BetSelected),
            PlayerInput::ChoosePath(mode) => self.choose_path(mode, sink).map(InputOutcome::Turn),
            PlayerInput::AnswerQuiz(option) => self.answer_quiz(option, sink).map(InputOutcome::Turn),
            PlayerInput::CompleteCenterReturn => Ok(InputOutcome::CenterReturn(self.complete_center_return(sink))),
            PlayerInput::Reset => {
                self.reset(sink);
                Ok(InputOutcome::Reset)
            }
        }
    }

    /// Make `value` the active bet multiplier.
    ///
    /// Rejected while a turn is running, after game over, for values outside
    /// {1, 2, 3, 5, 10}, and when one roll at that multiplier is
    /// unaffordable. Nothing is charged until the next roll.
    pub fn select_bet(&mut self, value: u32, sink: &mut dyn EventSink) -> GameResult<Multiplier> {
        let multiplier = Multiplier::try_from(value)?;
        self.ensure_idle()?;

        self.state.wallet.set_multiplier(multiplier)?;
        debug!("bet set to {multiplier} ({} hearts per roll)", multiplier.heart_cost());
        sink.publish(GameEvent::BetSelected {
            multiplier,
            heart_cost: multiplier.heart_cost(),
        });
        Ok(multiplier)
    }

    /// Roll the dice and run the turn as far as it can go.
    pub fn request_roll(&mut self, sink: &mut dyn EventSink) -> GameResult<TurnProgress> {
        self.ensure_idle()?;
        let multiplier = self.state.wallet.multiplier();
        if !self.state.wallet.can_afford(multiplier) {
            return Err(GameError::InsufficientHearts {
                required: multiplier.heart_cost(),
                available: self.state.wallet.hearts(),
            });
        }

        self.complete_center_return(sink);

        let heart_cost = self.state.wallet.charge_roll_cost()?;
        self.state.turn_number += 1;
        self.publish_stats(sink);

        let dice = DiceRoll::new(self.rng.roll_die(), self.rng.roll_die());
        debug!(
            "turn {}: rolled {}+{} at {} for {heart_cost} hearts",
            self.state.turn_number, dice.d1, dice.d2, multiplier
        );
        sink.publish(GameEvent::DiceRolled {
            d1: dice.d1,
            d2: dice.d2,
            is_double: dice.is_double(),
        });

        let mut turn = PendingTurn {
            number: self.state.turn_number,
            dice,
            heart_cost,
            refunded: 0,
            lap_completed: false,
        };

        if dice.is_double() {
            self.state.wallet.refund(heart_cost);
            turn.refunded = heart_cost;
            sink.publish(GameEvent::HeartsRefunded { amount: heart_cost });
            self.publish_stats(sink);
        }

        let at = self.state.position;
        if self.board.is_branch_point(at, self.state.path_mode()) {
            debug!("turn {}: branch point at {at}, waiting for path choice", turn.number);
            sink.publish(GameEvent::PathChoiceRequired { at });
            self.state.phase = TurnPhase::AwaitingPathChoice { turn };
            return Ok(TurnProgress::AwaitingPathChoice { at });
        }

        Ok(self.move_and_resolve(turn, sink))
    }

    /// Continue a turn suspended at a branch point.
    pub fn choose_path(&mut self, mode: PathMode, sink: &mut dyn EventSink) -> GameResult<TurnProgress> {
        let turn = match &self.state.phase {
            TurnPhase::AwaitingPathChoice { turn } => turn.clone(),
            other => return Err(unexpected(InputKind::PathChoice, other)),
        };

        let branch = self.state.position;
        self.state.path = match mode {
            PathMode::Diagonal if self.board.diagonal_path_for(branch).is_some() => {
                PathState::Diagonal { branch, cursor: 0 }
            }
            _ => PathState::Outer,
        };
        debug!("turn {}: took the {mode} path at {branch}", turn.number);
        sink.publish(GameEvent::PathChosen { mode });

        Ok(self.move_and_resolve(turn, sink))
    }

    /// Answer the pending quiz question.
    ///
    /// An index outside the question's options is rejected and the question
    /// stays pending.
    pub fn answer_quiz(&mut self, option: usize, sink: &mut dyn EventSink) -> GameResult<TurnProgress> {
        let (turn, tile, id) = match &self.state.phase {
            TurnPhase::AwaitingQuizAnswer { turn, tile, question } => (turn.clone(), tile.clone(), *question),
            other => return Err(unexpected(InputKind::QuizAnswer, other)),
        };
        let question = self
            .quiz
            .get(id)
            .ok_or(GameError::UnknownQuestion(id))?;

        let verdict = question.evaluate(option, self.state.wallet.multiplier())?;
        let applied = self.state.wallet.apply_delta(verdict.reward.coins, verdict.reward.hearts);
        let verdict = QuizVerdict {
            correct: verdict.correct,
            reward: applied,
        };

        debug!("turn {}: quiz answered, {}", turn.number, verdict.message());
        sink.publish(GameEvent::QuizResolved {
            correct: verdict.correct,
            coins: applied.coins,
            hearts: applied.hearts,
        });
        self.publish_stats(sink);

        Ok(TurnProgress::Completed(self.finish_turn(turn, tile, Some(verdict), sink)))
    }

    /// Apply a scheduled center return.
    ///
    /// Called by the renderer once the return delay has elapsed; a roll
    /// requested earlier applies it first. Returns false if nothing was
    /// pending.
    pub fn complete_center_return(&mut self, sink: &mut dyn EventSink) -> bool {
        if !self.state.pending_center_return {
            return false;
        }

        let start = self.board.start();
        self.state.pending_center_return = false;
        self.state.position = start;
        self.state.path = PathState::Outer;
        info!("returned to start from the center");
        sink.publish(GameEvent::CenterReturned { position: start });
        true
    }

    /// Reinitialize the game. Abandons any turn in progress.
    ///
    /// The piece restarts on the configured reset cell, which differs from
    /// the cell a new game starts on.
    pub fn reset(&mut self, sink: &mut dyn EventSink) {
        self.state = GameState::after_reset(&self.config);
        info!("game reset at {}", self.state.position);
        sink.publish(GameEvent::GameReset);
        self.publish_stats(sink);
    }

    // === Turn steps ===

    fn ensure_idle(&self) -> GameResult<()> {
        match self.state.phase {
            TurnPhase::Idle => Ok(()),
            TurnPhase::GameOver => Err(GameError::GameOver),
            TurnPhase::AwaitingPathChoice { .. } | TurnPhase::AwaitingQuizAnswer { .. } => {
                debug!("ignoring input while {}", self.state.phase.describe());
                Err(GameError::ReentrantTurn)
            }
        }
    }

    fn move_and_resolve(&mut self, mut turn: PendingTurn, sink: &mut dyn EventSink) -> TurnProgress {
        turn.lap_completed = self.walk(turn.dice.total(), sink);

        let tile = self.board.tile_type_at(self.state.position);
        let outcome = TileResolver::resolve(tile, &mut self.state.wallet, &mut self.rng);
        debug!("turn {}: landed on {tile} at {}: {}", turn.number, self.state.position, outcome.message);
        sink.publish(GameEvent::TileResolved(outcome.clone()));
        if !outcome.delta.is_empty() {
            self.publish_stats(sink);
        }

        match outcome.follow_up {
            FollowUp::Quiz => {
                let (id, question) = self.quiz.draw(&mut self.rng);
                let question = question.clone();
                sink.publish(GameEvent::QuizRequested {
                    id,
                    question: question.clone(),
                });
                self.state.phase = TurnPhase::AwaitingQuizAnswer {
                    turn,
                    tile: outcome,
                    question: id,
                };
                return TurnProgress::AwaitingQuizAnswer { id, question };
            }
            FollowUp::ReturnToStart => {
                self.state.pending_center_return = true;
                sink.publish(GameEvent::CenterReturnScheduled {
                    delay_ms: self.config.center_return_delay_ms,
                });
            }
            FollowUp::None => {}
        }

        TurnProgress::Completed(self.finish_turn(turn, outcome, None, sink))
    }

    /// Move `steps` cells one at a time. Returns true if a lap was recorded.
    fn walk(&mut self, steps: u32, sink: &mut dyn EventSink) -> bool {
        let start = self.board.start();
        let mut lap_completed = false;

        for _ in 0..steps {
            let previous = self.state.position;
            let (position, path) = movement::step(&self.board, previous, self.state.path);
            self.state.position = position;
            self.state.path = path;

            trace!("step {previous} -> {position} ({})", path.mode());
            sink.publish(GameEvent::StepMoved {
                position,
                mode: path.mode(),
            });

            if !lap_completed
                && path.mode() == PathMode::Outer
                && self.config.lap_rule.is_lap(previous, position, start)
            {
                lap_completed = true;
                self.record_lap(sink);
            }
        }

        self.state.path = movement::settle(&self.board, self.state.path);
        lap_completed
    }

    fn record_lap(&mut self, sink: &mut dyn EventSink) {
        let heart_bonus = self.config.lap_heart_bonus;
        let lap_count = self.state.wallet.record_lap(heart_bonus);
        info!("lap {lap_count} completed, +{heart_bonus} hearts");
        sink.publish(GameEvent::LapCompleted { lap_count, heart_bonus });
        self.publish_stats(sink);
    }

    fn finish_turn(
        &mut self,
        turn: PendingTurn,
        tile: TileOutcome,
        quiz: Option<QuizVerdict>,
        sink: &mut dyn EventSink,
    ) -> TurnResult {
        let game_over = self.state.wallet.is_broke();
        let result = TurnResult {
            number: turn.number,
            final_position: self.state.position,
            dice: turn.dice,
            was_double: turn.dice.is_double(),
            heart_cost: turn.heart_cost - turn.refunded,
            tile,
            quiz,
            lap_completed: turn.lap_completed,
            game_over,
        };

        self.state.history.push_back(result.clone());
        sink.publish(GameEvent::TurnCompleted(result.clone()));

        if game_over {
            let final_tile = self.board.tile_type_at(self.state.position);
            let final_coins = self.state.wallet.coins();
            info!("game over after turn {} on {final_tile} with {final_coins} coins", turn.number);
            self.state.phase = TurnPhase::GameOver;
            sink.publish(GameEvent::GameOver { final_coins, final_tile });
        } else {
            self.state.phase = TurnPhase::Idle;
        }

        result
    }

    fn publish_stats(&self, sink: &mut dyn EventSink) {
        sink.publish(GameEvent::StatsChanged {
            coins: self.state.wallet.coins(),
            hearts: self.state.wallet.hearts(),
        });
    }
}

fn unexpected(received: InputKind, phase: &TurnPhase) -> GameError {
    GameError::UnexpectedInput {
        received,
        phase: phase.describe().to_string(),
    }
}
