//! A depth-limited minimax agent for Connect 4

use log::debug;
use rayon::prelude::*;

use crate::{bitboard::*, Score, MAX_DEPTH, SCORE_BOUND, WIDTH, WIN_BONUS};

/// An agent to score Connect 4 positions
///
/// # Notes
/// This agent performs a plain minimax search with alpha-beta pruning, to a
/// fixed number of plies. Moves are applied to and undone on the borrowed
/// board in place, the board is never copied during a search and is left
/// exactly as it was found when a search returns
///
/// # Position Scoring
/// Scores are from the point of view of the first player. A win for the first
/// player scores `WIN_BONUS` minus the number of tiles they placed, so faster
/// wins score higher. A win for the second player scores the negation of the
/// same quantity for their tiles. Draws and positions left unresolved at the
/// depth limit score 0
pub struct Solver<'a> {
    board: &'a mut BitBoard,
    max_depth: usize,

    /// The number of nodes searched by this `Solver` so far (for diagnostics only)
    pub node_count: usize,
}

impl<'a> Solver<'a> {
    /// Creates a new `Solver` searching `MAX_DEPTH` plies
    pub fn new(board: &'a mut BitBoard) -> Self {
        Self {
            board,
            max_depth: MAX_DEPTH,
            node_count: 0,
        }
    }

    /// Changes the number of plies searched from the root
    pub fn with_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn board(&self) -> &BitBoard {
        &*self.board
    }

    /// Score of a finished or depth-limited node, if the search stops here.
    ///
    /// Only the player who just moved can have completed an alignment, so
    /// the maximizing side only checks the second player and vice versa
    fn leaf_score(&self, depth: usize, maximizing: bool) -> Option<Score> {
        if !maximizing && BitBoard::check_win(self.board.bitmask_a()) {
            return Some(WIN_BONUS - self.board.moves_played_a() as Score);
        }
        if maximizing && BitBoard::check_win(self.board.bitmask_b()) {
            return Some(self.board.moves_played_b() as Score - WIN_BONUS);
        }
        if self.board.check_full() || depth == 0 {
            return Some(0);
        }
        None
    }

    fn play(&mut self, column: usize) {
        self.board
            .apply_move(column)
            .expect("search played a move in a full column");
    }

    fn unplay(&mut self, column: usize) {
        self.board
            .undo_move(column)
            .expect("search undid a move in an empty column");
    }

    /// Performs alpha-beta game tree search
    ///
    /// Returns the score of the position (see [Position Scoring])
    ///
    /// [Position Scoring]: #position-scoring
    pub fn evaluate(
        &mut self,
        depth: usize,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        debug_assert!(self.board.check_invariants());
        self.node_count += 1;

        if let Some(score) = self.leaf_score(depth, maximizing) {
            return score;
        }

        let mut best = if maximizing { -SCORE_BOUND } else { SCORE_BOUND };
        for column in 0..WIDTH {
            if !self.board.playable(column) {
                continue;
            }

            self.play(column);
            let score = self.evaluate(depth - 1, !maximizing, alpha, beta);
            self.unplay(column);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            // the opponent already has a better option elsewhere
            if beta <= alpha {
                break;
            }
        }
        best
    }

    /// Performs full minimax search without pruning.
    ///
    /// Always returns the same score as [`evaluate`](Self::evaluate) with an
    /// open window, at the cost of visiting every node
    pub fn minimax(&mut self, depth: usize, maximizing: bool) -> Score {
        self.node_count += 1;

        if let Some(score) = self.leaf_score(depth, maximizing) {
            return score;
        }

        let mut best = if maximizing { -SCORE_BOUND } else { SCORE_BOUND };
        for column in 0..WIDTH {
            if self.board.playable(column) {
                self.play(column);
                let score = self.minimax(depth - 1, !maximizing);
                self.unplay(column);

                best = if maximizing {
                    best.max(score)
                } else {
                    best.min(score)
                };
            }
        }
        best
    }

    /// Scores every legal move in the current position
    ///
    /// Each move is searched with a fresh window, so the scores are exact
    /// rather than bounds. Returns no moves if the game is already over,
    /// either because a player has four in a row or the board is full
    pub fn root_search(&mut self) -> Vec<(usize, Score)> {
        if self.board.is_terminal() {
            return Vec::new();
        }
        // the root move itself is the first ply
        let depth = self.max_depth.saturating_sub(1);

        let mut scores = Vec::with_capacity(WIDTH);
        for column in 0..WIDTH {
            if !self.board.playable(column) {
                continue;
            }
            let nodes_before = self.node_count;

            self.play(column);
            let maximizing = self.board.turn() == Player::A;
            let score = self.evaluate(depth, maximizing, -SCORE_BOUND, SCORE_BOUND);
            self.unplay(column);
            debug_assert!(self.board.check_invariants());

            debug!(
                "column {}: score {}, {} nodes",
                column + 1,
                score,
                self.node_count - nodes_before
            );
            scores.push((column, score));
        }
        scores
    }

    /// Calculates the best move for the player to move and its score
    ///
    /// Ties go to the leftmost column. Returns `None` if the game is over
    pub fn best_move(&mut self) -> Option<(usize, Score)> {
        let scores = self.root_search();
        pick_best(&scores, self.board.turn())
    }
}

/// Picks the best scored move for `player`, preferring the leftmost column on ties
pub fn pick_best(scores: &[(usize, Score)], player: Player) -> Option<(usize, Score)> {
    let mut best: Option<(usize, Score)> = None;
    for &(column, score) in scores {
        let better = match (best, player) {
            (None, _) => true,
            (Some((_, current)), Player::A) => score > current,
            (Some((_, current)), Player::B) => score < current,
        };
        if better {
            best = Some((column, score));
        }
    }
    best
}

/// Scores every legal move of `board` like [`Solver::root_search`], with the
/// root moves searched in parallel.
///
/// Each worker searches its own copy of the board, the scores are identical
/// to the single-threaded search
pub fn par_root_search(board: &BitBoard, max_depth: usize) -> Vec<(usize, Score)> {
    if board.is_terminal() {
        return Vec::new();
    }
    let columns: Vec<usize> = board.playable_columns().collect();

    columns
        .into_par_iter()
        .map(|column| {
            let mut next = *board;
            next.apply_move(column)
                .expect("search played a move in a full column");
            let maximizing = next.turn() == Player::A;

            let mut solver = Solver::new(&mut next).with_depth(max_depth);
            let score = solver.evaluate(
                max_depth.saturating_sub(1),
                maximizing,
                -SCORE_BOUND,
                SCORE_BOUND,
            );
            debug!(
                "column {}: score {}, {} nodes",
                column + 1,
                score,
                solver.node_count
            );
            (column, score)
        })
        .collect()
}
