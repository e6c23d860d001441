//! Game session state shared by the GUI and console front ends

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{info, warn};

use crate::rules::{find_five_positions, outcome, Outcome};
use crate::{AIEngine, Board, MoveResult, Pos, SearchConfig, Stone, BOARD_SIZE, WIN_LENGTH};

/// Budget for PvP hints
const HINT_BUDGET: Duration = Duration::from_millis(500);

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_color: Stone },
    /// Player vs Player (hotseat)
    PvP { show_suggestions: bool },
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human_color: Stone::Black }
    }
}

/// Why a move from the player was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("game is over")]
    GameOver,
    #[error("not your turn")]
    NotYourTurn,
    #[error("AI is thinking")]
    AiThinking,
    #[error("position {0} is already taken")]
    Occupied(Pos),
    #[error("position ({row}, {col}) is off the board, use values between 0 and {max}", max = BOARD_SIZE - 1)]
    OutOfBounds { row: i64, col: i64 },
    #[error("could not read a move from {0:?}, enter two integers separated by a space")]
    Parse(String),
}

/// What a running search is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiTask {
    /// The AI's own move, committed when it arrives
    Move,
    /// A suggestion for the player to move, only displayed
    Hint,
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
        task: AiTask,
    },
    /// The engine came back without a playable move. No further search
    /// starts until the game is reset.
    Stalled,
}

/// Final state of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// `Win` or `Draw`, never `Ongoing`
    pub outcome: Outcome,
    pub winning_line: Option<[Pos; WIN_LENGTH]>,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Parse a `row col` pair typed by the player
pub fn parse_position(input: &str) -> Result<Pos, PlayError> {
    let parse_error = || PlayError::Parse(input.trim().to_string());

    let mut parts = input.split_whitespace();
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(parse_error());
    };
    let row: i64 = row.parse().map_err(|_| parse_error())?;
    let col: i64 = col.parse().map_err(|_| parse_error())?;

    let size = BOARD_SIZE as i64;
    if !(0..size).contains(&row) || !(0..size).contains(&col) {
        return Err(PlayError::OutOfBounds { row, col });
    }
    Ok(Pos::new(row as u8, col as u8))
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Stone,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Pos>,
    pub move_count: u32,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,

    search_config: SearchConfig,
}

impl GameState {
    pub fn new(mode: GameMode, search_config: SearchConfig) -> Self {
        Self {
            board: Board::new(),
            mode,
            current_turn: Stone::Black,
            game_over: None,
            last_move: None,
            move_count: 0,
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            search_config,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.mode, self.search_config.clone());
    }

    pub fn search_config(&self) -> &SearchConfig {
        &self.search_config
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn == human_color,
            GameMode::PvP { .. } => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn != human_color,
            GameMode::PvP { .. } => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    pub fn is_ai_stalled(&self) -> bool {
        matches!(self.ai_state, AiState::Stalled)
    }

    /// Attempt to place a stone for the human player
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), PlayError> {
        if self.game_over.is_some() {
            return Err(PlayError::GameOver);
        }
        if self.is_ai_thinking() {
            return Err(PlayError::AiThinking);
        }
        if !self.is_human_turn() {
            return Err(PlayError::NotYourTurn);
        }
        if !self.board.is_empty(pos) {
            return Err(PlayError::Occupied(pos));
        }

        self.execute_move(pos);
        Ok(())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) {
        let color = self.current_turn;

        self.board = self.board.with_move(pos, color);
        self.move_count += 1;
        self.last_move = Some(pos);
        self.suggested_move = None;
        self.message = None;
        self.move_timer.stop();

        match outcome(&self.board) {
            Outcome::Ongoing => {
                self.current_turn = color.opponent();
                self.move_timer.start();
            }
            finished => {
                info!(?finished, moves = self.move_count, "game over");
                self.game_over = Some(GameResult {
                    outcome: finished,
                    winning_line: finished
                        .winner()
                        .and_then(|winner| find_five_positions(&self.board, winner)),
                });
            }
        }
    }

    /// Apply a finished engine result. A missing move leaves the turn
    /// with the AI and shows a message.
    fn apply_ai_result(&mut self, result: MoveResult, elapsed: Duration) {
        self.move_timer.set_ai_time(elapsed);
        let best_move = result.best_move;
        self.last_ai_result = Some(result);

        match best_move {
            Some(pos) if self.board.is_empty(pos) => self.execute_move(pos),
            Some(pos) => {
                warn!(%pos, "engine returned an occupied cell");
                self.ai_state = AiState::Stalled;
                self.message = Some(PlayError::Occupied(pos).to_string());
            }
            None => {
                warn!("engine found no move within its budget");
                self.ai_state = AiState::Stalled;
                self.message = Some("AI could not find a move, start a new game".to_string());
            }
        }
    }

    /// Search `current_turn`'s move on a worker thread
    fn spawn_search(&mut self, config: SearchConfig, task: AiTask) {
        let board = self.board;
        let color = self.current_turn;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let engine = AIEngine::with_config(config);
            let result = engine.get_move_with_stats(&board, color);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
            task,
        };
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        let idle = matches!(self.ai_state, AiState::Idle);
        if !self.is_ai_turn() || !idle || self.game_over.is_some() {
            return;
        }
        self.spawn_search(self.search_config.clone(), AiTask::Move);
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let (move_result, elapsed, task) = match &self.ai_state {
            AiState::Thinking { receiver, start_time, task } => match receiver.try_recv() {
                Ok(result) => (result, start_time.elapsed(), *task),
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    let task = *task;
                    self.ai_state = match task {
                        AiTask::Move => AiState::Stalled,
                        AiTask::Hint => AiState::Idle,
                    };
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle | AiState::Stalled => return,
        };

        self.ai_state = AiState::Idle;
        match task {
            AiTask::Move => self.apply_ai_result(move_result, elapsed),
            AiTask::Hint => {
                self.suggested_move = move_result.best_move;
                self.last_ai_result = Some(move_result);
            }
        }
    }

    /// Run the AI on the calling thread and apply its move.
    /// Returns the move played, if any.
    pub fn play_ai_move_blocking(&mut self) -> Option<Pos> {
        if !self.is_ai_turn() || self.is_ai_stalled() || self.game_over.is_some() {
            return None;
        }
        let start = Instant::now();
        let result = AIEngine::with_config(self.search_config.clone())
            .get_move_with_stats(&self.board, self.current_turn);
        let before = self.move_count;
        self.apply_ai_result(result, start.elapsed());
        (self.move_count > before).then_some(self.last_move).flatten()
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle | AiState::Stalled => None,
        }
    }

    /// Request a move suggestion for the player to move. The search runs
    /// on a worker thread and lands in `suggested_move` via
    /// `check_ai_result`.
    pub fn request_suggestion(&mut self) {
        let idle = matches!(self.ai_state, AiState::Idle);
        if self.game_over.is_some() || !idle || !self.is_human_turn() {
            return;
        }
        let config = self.search_config.clone().with_time_budget(HINT_BUDGET);
        self.spawn_search(config, AiTask::Hint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_config() -> SearchConfig {
        SearchConfig::for_testing().with_max_iterations(50)
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("3 4"), Ok(Pos::new(3, 4)));
        assert_eq!(parse_position("  18   0 \n"), Ok(Pos::new(18, 0)));
        assert_eq!(
            parse_position("19 0"),
            Err(PlayError::OutOfBounds { row: 19, col: 0 })
        );
        assert_eq!(
            parse_position("-1 3"),
            Err(PlayError::OutOfBounds { row: -1, col: 3 })
        );
        assert_eq!(parse_position("a b"), Err(PlayError::Parse("a b".to_string())));
        assert_eq!(parse_position("7"), Err(PlayError::Parse("7".to_string())));
        assert_eq!(parse_position("1 2 3"), Err(PlayError::Parse("1 2 3".to_string())));
    }

    #[test]
    fn test_human_move_then_turn_passes() {
        let mut state = GameState::new(GameMode::default(), quick_config());
        assert!(state.is_human_turn());
        state.try_place_stone(Pos::center()).unwrap();
        assert_eq!(state.board.get(Pos::center()), Stone::Black);
        assert_eq!(state.current_turn, Stone::White);
        assert!(state.is_ai_turn());
        assert_eq!(state.try_place_stone(Pos::new(0, 0)), Err(PlayError::NotYourTurn));
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut state = GameState::new(GameMode::PvP { show_suggestions: false }, quick_config());
        state.try_place_stone(Pos::center()).unwrap();
        assert_eq!(
            state.try_place_stone(Pos::center()),
            Err(PlayError::Occupied(Pos::center()))
        );
    }

    #[test]
    fn test_five_ends_game_with_line() {
        let mut state = GameState::new(GameMode::PvP { show_suggestions: false }, quick_config());
        for col in 0..4 {
            state.try_place_stone(Pos::new(5, col)).unwrap();
            state.try_place_stone(Pos::new(6, col)).unwrap();
        }
        state.try_place_stone(Pos::new(5, 4)).unwrap();

        let result = state.game_over.unwrap();
        assert_eq!(result.outcome, Outcome::Win(Stone::Black));
        assert_eq!(result.winning_line.unwrap()[0], Pos::new(5, 0));
        assert_eq!(state.try_place_stone(Pos::new(7, 7)), Err(PlayError::GameOver));
    }

    #[test]
    fn test_ai_opens_in_center() {
        let mut state = GameState::new(GameMode::PvE { human_color: Stone::White }, quick_config());
        assert!(state.is_ai_turn());
        assert_eq!(state.play_ai_move_blocking(), Some(Pos::center()));
        assert_eq!(state.current_turn, Stone::White);
    }

    #[test]
    fn test_ai_reply_is_legal() {
        let mut state = GameState::new(GameMode::default(), quick_config());
        state.try_place_stone(Pos::new(4, 4)).unwrap();
        let reply = state.play_ai_move_blocking().unwrap();
        assert_ne!(reply, Pos::new(4, 4));
        assert_eq!(state.board.get(reply), Stone::White);
        assert_eq!(state.move_count, 2);
    }

    #[test]
    fn test_reset_keeps_mode() {
        let mode = GameMode::PvE { human_color: Stone::White };
        let mut state = GameState::new(mode, quick_config());
        state.play_ai_move_blocking();
        state.reset();
        assert_eq!(state.mode, mode);
        assert!(state.board.is_board_empty());
        assert_eq!(state.move_count, 0);
    }

    /// Poll the worker until it reports back or `limit` passes
    fn wait_for_worker(state: &mut GameState, limit: Duration) {
        let start = Instant::now();
        while state.is_ai_thinking() && start.elapsed() < limit {
            thread::sleep(Duration::from_millis(5));
            state.check_ai_result();
        }
    }

    #[test]
    fn test_ai_move_arrives_from_worker() {
        let mut state = GameState::new(GameMode::default(), quick_config());
        state.try_place_stone(Pos::new(4, 4)).unwrap();
        state.start_ai_thinking();
        assert!(state.is_ai_thinking());
        assert_eq!(state.try_place_stone(Pos::new(0, 0)), Err(PlayError::AiThinking));

        wait_for_worker(&mut state, Duration::from_secs(5));
        assert_eq!(state.move_count, 2);
        assert_eq!(state.current_turn, Stone::Black);
        assert!(state.last_ai_result.is_some());
    }

    #[test]
    fn test_hint_runs_off_the_calling_thread() {
        // no iteration cap, so the hint search takes its whole budget
        let config = SearchConfig::default();
        let mut state = GameState::new(GameMode::PvP { show_suggestions: true }, config);
        state.try_place_stone(Pos::center()).unwrap();

        let start = Instant::now();
        state.request_suggestion();
        assert!(start.elapsed() < HINT_BUDGET / 2);
        assert!(state.is_ai_thinking());

        wait_for_worker(&mut state, Duration::from_secs(10));
        let hint = state.suggested_move.unwrap();
        assert!(state.board.is_empty(hint));
        assert_eq!(state.move_count, 1);
        assert_eq!(state.current_turn, Stone::White);
    }

    #[test]
    fn test_no_move_stalls_the_ai() {
        let config = SearchConfig::for_testing().with_time_budget(Duration::ZERO);
        let mut state = GameState::new(GameMode::default(), config);
        state.try_place_stone(Pos::new(4, 4)).unwrap();

        assert_eq!(state.play_ai_move_blocking(), None);
        assert!(state.is_ai_turn());
        assert!(state.is_ai_stalled());
        assert!(state.message.is_some());

        state.start_ai_thinking();
        assert!(!state.is_ai_thinking());
        assert_eq!(state.play_ai_move_blocking(), None);

        state.reset();
        assert!(!state.is_ai_stalled());
        assert!(state.is_human_turn());
    }
}
