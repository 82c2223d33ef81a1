//! The Push Battle rules engine.
//!
//! `PushBattle` owns one `GameState` and applies the rules to it:
//! - Validity predicates for placements and relocations
//! - Move application followed by push resolution
//! - Win detection over all length-3 windows
//! - Exhaustive legal move generation
//!
//! Applying a move never switches the player to move. The caller checks for
//! a winner first and then calls `end_turn`.
//!
//! ```
//! use push_battle::core::Phase;
//! use push_battle::rules::PushBattle;
//!
//! let mut game = PushBattle::standard();
//! game.apply_placement(3, 3).unwrap();
//!
//! assert_eq!(game.check_winner(), None);
//! assert_eq!(game.phase(), Phase::Placement);
//! game.end_turn();
//! assert_eq!(game.turn_count(), 1);
//! ```

use tracing::warn;

use super::lines::{self, Window};
use super::push::{self, Pushes};
use crate::core::{Board, Cell, GameConfig, GameState, Move, MoveRequest, Phase, Player, PlayerMap};
use crate::error::{ConfigError, MoveError};

/// A single Push Battle game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PushBattle {
    config: GameConfig,
    state: GameState,
}

impl PushBattle {
    /// Start a fresh game.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: GameState::new(config.board_size),
        })
    }

    /// Fresh game on the standard 8x8 board with eight pieces each.
    #[must_use]
    pub fn standard() -> Self {
        let config = GameConfig::default();
        Self {
            config,
            state: GameState::new(config.board_size),
        }
    }

    /// Build a game from an arbitrary position.
    ///
    /// Pieces are never removed, so each player's count on the board must
    /// equal their placed count.
    pub fn from_board(
        config: GameConfig,
        board: Board,
        current_player: Player,
        pieces_placed: PlayerMap<u8>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if board.size() != config.board_size {
            return Err(ConfigError::Validation(format!(
                "board is {}x{} but game.board_size is {}",
                board.size(),
                board.size(),
                config.board_size
            )));
        }
        for (player, &placed) in pieces_placed.iter() {
            if placed > config.pieces_per_player {
                return Err(ConfigError::Validation(format!(
                    "{player} has placed {placed} pieces, limit is {}",
                    config.pieces_per_player
                )));
            }
            let on_board = board.pieces(player).count();
            if on_board != placed as usize {
                return Err(ConfigError::Validation(format!(
                    "{player} has {on_board} pieces on the board but {placed} placed"
                )));
            }
        }

        let mut state = GameState::new(config.board_size);
        state.board = board;
        state.current_player = current_player;
        state.pieces_placed = pieces_placed;
        Ok(Self { config, state })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    #[must_use]
    pub fn board_size(&self) -> usize {
        self.config.board_size
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.state.current_player
    }

    #[must_use]
    pub fn pieces_placed(&self, player: Player) -> u8 {
        self.state.pieces_placed[player]
    }

    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.state.turn_count
    }

    /// Phase for the player to move.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase_for(self.state.current_player)
    }

    /// Phase for `player`, decided by their placed-piece count alone.
    #[must_use]
    pub fn phase_for(&self, player: Player) -> Phase {
        if self.state.pieces_placed[player] < self.config.pieces_per_player {
            Phase::Placement
        } else {
            Phase::Movement
        }
    }

    // === Validity ===

    /// True iff the player to move is placing and (row, col) is an empty
    /// on-board cell.
    #[must_use]
    pub fn is_valid_placement(&self, row: i64, col: i64) -> bool {
        self.validate(&MoveRequest::from_coords(&[row, col]))
            .is_ok()
    }

    /// True iff the player to move is relocating, (r0, c0) holds one of
    /// their pieces, and (r1, c1) is empty. The two cells need not be
    /// adjacent.
    #[must_use]
    pub fn is_valid_relocation(&self, r0: i64, c0: i64, r1: i64, c1: i64) -> bool {
        self.validate(&MoveRequest::from_coords(&[r0, c0, r1, c1]))
            .is_ok()
    }

    /// Check a raw request: shape first, then the rules.
    pub fn validate(&self, request: &MoveRequest) -> Result<Move, MoveError> {
        let mv = request.to_move(self.phase(), self.board_size())?;
        self.check_move(&mv)?;
        Ok(mv)
    }

    /// Check a well-formed move against the current position.
    pub fn check_move(&self, mv: &Move) -> Result<(), MoveError> {
        let phase = self.phase();
        if mv.phase() != phase {
            return Err(MoveError::WrongPhase { phase });
        }

        let board = &self.state.board;
        let n = self.board_size();
        let off_board = |row: usize, col: usize| MoveError::OutOfBounds {
            row: row as i64,
            col: col as i64,
        };

        match *mv {
            Move::Placement { row, col } => {
                if row >= n || col >= n {
                    return Err(off_board(row, col));
                }
                if !board.get(row, col).is_empty() {
                    return Err(MoveError::Occupied { row, col });
                }
            }
            Move::Relocation {
                from_row,
                from_col,
                to_row,
                to_col,
            } => {
                if from_row >= n || from_col >= n {
                    return Err(off_board(from_row, from_col));
                }
                if to_row >= n || to_col >= n {
                    return Err(off_board(to_row, to_col));
                }
                if !board
                    .get(from_row, from_col)
                    .is_owned_by(self.state.current_player)
                {
                    return Err(MoveError::NotOwnPiece {
                        row: from_row,
                        col: from_col,
                    });
                }
                if !board.get(to_row, to_col).is_empty() {
                    return Err(MoveError::Occupied {
                        row: to_row,
                        col: to_col,
                    });
                }
            }
        }
        Ok(())
    }

    // === Application ===

    /// Place a piece for the player to move, then resolve pushes around it.
    pub fn apply_placement(&mut self, row: usize, col: usize) -> Result<Pushes, MoveError> {
        self.apply_move(&Move::Placement { row, col })
    }

    /// Move one of the mover's pieces, then resolve pushes around the
    /// destination.
    pub fn apply_relocation(
        &mut self,
        from_row: usize,
        from_col: usize,
        to_row: usize,
        to_col: usize,
    ) -> Result<Pushes, MoveError> {
        self.apply_move(&Move::Relocation {
            from_row,
            from_col,
            to_row,
            to_col,
        })
    }

    /// Apply any move. Nothing is mutated when the move is not legal.
    pub fn apply_move(&mut self, mv: &Move) -> Result<Pushes, MoveError> {
        self.check_move(mv)?;

        let player = self.state.current_player;
        let board = &mut self.state.board;
        match *mv {
            Move::Placement { row, col } => {
                board.set(row, col, Cell::Piece(player));
                self.state.pieces_placed[player] += 1;
            }
            Move::Relocation {
                from_row,
                from_col,
                to_row,
                to_col,
            } => {
                board.set(from_row, from_col, Cell::Empty);
                board.set(to_row, to_col, Cell::Piece(player));
            }
        }

        let (row, col) = mv.destination();
        Ok(push::resolve_pushes(&mut self.state.board, row, col))
    }

    /// Hand the turn to the other player and count the completed turn.
    pub fn end_turn(&mut self) {
        self.state.current_player = self.state.current_player.opponent();
        self.state.turn_count += 1;
    }

    // === Outcome ===

    /// The player owning a complete line, if any.
    ///
    /// A push can complete lines for both players at once. The player to
    /// move made that push, so they take the win.
    #[must_use]
    pub fn check_winner(&self) -> Option<Player> {
        let board = &self.state.board;
        let mover = self.state.current_player;
        match (
            lines::has_line(board, mover),
            lines::has_line(board, mover.opponent()),
        ) {
            (true, true) => {
                warn!(
                    mover = %mover,
                    turn = self.state.turn_count,
                    "both players completed a line; awarding the win to the mover"
                );
                Some(mover)
            }
            (true, false) => Some(mover),
            (false, true) => Some(mover.opponent()),
            (false, false) => None,
        }
    }

    /// Every complete line owned by `player`.
    #[must_use]
    pub fn winning_lines(&self, player: Player) -> Vec<Window> {
        lines::winning_lines(&self.state.board, player).collect()
    }

    /// Windows where `player` has two pieces and the third cell is empty.
    #[must_use]
    pub fn near_win_count(&self, player: Player) -> usize {
        lines::near_win_count(&self.state.board, player)
    }

    // === Move generation ===

    /// Every legal move for the player to move, row-major.
    ///
    /// Placement: one move per empty cell. Movement: every own piece paired
    /// with every empty cell.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let board = &self.state.board;
        match self.phase() {
            Phase::Placement => board
                .empty_cells()
                .map(|(row, col)| Move::Placement { row, col })
                .collect(),
            Phase::Movement => {
                let empty: Vec<_> = board.empty_cells().collect();
                board
                    .pieces(self.state.current_player)
                    .flat_map(|(from_row, from_col)| {
                        empty.iter().map(move |&(to_row, to_col)| Move::Relocation {
                            from_row,
                            from_col,
                            to_row,
                            to_col,
                        })
                    })
                    .collect()
            }
        }
    }
}

impl std::fmt::Display for PushBattle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "turn {} | {} to move ({}) | placed A={} B={}",
            self.state.turn_count,
            self.state.current_player,
            self.phase(),
            self.state.pieces_placed[Player::A],
            self.state.pieces_placed[Player::B],
        )?;
        write!(f, "{}", self.state.board)
    }
}
