use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::types::{Difficulty, GameOutcome, Mark, Position};
use super::win_detector::check_win;

const WIN_SCORE: i32 = 10;

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, current_mark: Mark) -> Self {
        Self { board, current_mark }
    }
}

/// Returns `None` when there is nothing to play: the board is decided or
/// full, or the bot was handed `Mark::Empty`.
pub fn calculate_move(
    difficulty: Difficulty,
    input: BotInput,
    rng: &mut SessionRng,
) -> Option<Position> {
    let outcome = input.board.outcome();
    if outcome != GameOutcome::InProgress {
        log!("Bot asked to move on a finished board ({}), ignoring", outcome);
        return None;
    }
    if input.current_mark.opponent().is_none() {
        log!("Bot asked to move without a mark, ignoring");
        return None;
    }

    match difficulty {
        Difficulty::Beginner => calculate_random_move(&input, rng),
        Difficulty::Moderate => calculate_winning_or_random_move(&input, rng),
        Difficulty::Advanced => calculate_minimax_move(&input),
    }
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = input.board.available_moves();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

fn calculate_winning_or_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<Position> {
    let mut board = input.board;
    find_winning_move(&mut board, input.current_mark)
        .or_else(|| calculate_random_move(input, rng))
}

/// First empty cell, row-major, that completes a line for `mark`.
fn find_winning_move(board: &mut Board, mark: Mark) -> Option<Position> {
    if mark == Mark::Empty {
        return None;
    }

    for pos in board.available_moves() {
        board.set(pos.row, pos.col, mark);
        let wins = check_win(board.cells(), mark);
        board.clear(pos.row, pos.col);

        if wins {
            return Some(pos);
        }
    }
    None
}

pub fn calculate_minimax_move(input: &BotInput) -> Option<Position> {
    let bot_mark = input.current_mark;
    bot_mark.opponent()?;
    let available_moves = input.board.available_moves();

    if available_moves.is_empty() {
        return None;
    }

    let mut board = input.board;

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for pos in available_moves {
        board.set(pos.row, pos.col, bot_mark);

        let score = minimax(&mut board, 1, false, bot_mark, i32::MIN, i32::MAX);

        board.clear(pos.row, pos.col);

        if score > best_score {
            best_score = score;
            best_move = Some(pos);
        }
    }

    best_move
}

fn minimax(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    bot_mark: Mark,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    let Some(opponent_mark) = bot_mark.opponent() else {
        return 0;
    };

    if check_win(board.cells(), bot_mark) {
        return WIN_SCORE - depth;
    }
    if check_win(board.cells(), opponent_mark) {
        return depth - WIN_SCORE;
    }

    let moves = board.available_moves();
    if moves.is_empty() {
        return 0;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for pos in moves {
            board.set(pos.row, pos.col, bot_mark);
            let eval = minimax(board, depth + 1, false, bot_mark, alpha, beta);
            board.clear(pos.row, pos.col);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for pos in moves {
            board.set(pos.row, pos.col, opponent_mark);
            let eval = minimax(board, depth + 1, true, bot_mark, alpha, beta);
            board.clear(pos.row, pos.col);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    fn input(rows: [[Mark; 3]; 3], mark: Mark) -> BotInput {
        BotInput::new(Board::from_rows(rows), mark)
    }

    /// Plain minimax without pruning, used to cross-check the pruned search.
    fn reference_value(board: &mut Board, depth: i32, to_move: Mark, bot_mark: Mark) -> i32 {
        match board.outcome() {
            GameOutcome::Win(mark) if mark == bot_mark => return WIN_SCORE - depth,
            GameOutcome::Win(_) => return depth - WIN_SCORE,
            GameOutcome::Draw => return 0,
            GameOutcome::InProgress => {}
        }
        let scores = board.available_moves().into_iter().map(|pos| {
            board.set(pos.row, pos.col, to_move);
            let score = reference_value(board, depth + 1, to_move.opponent().unwrap(), bot_mark);
            board.clear(pos.row, pos.col);
            score
        });
        let scores: Vec<i32> = scores.collect();
        if to_move == bot_mark {
            scores.into_iter().max().unwrap()
        } else {
            scores.into_iter().min().unwrap()
        }
    }

    #[test]
    fn test_advanced_takes_immediate_win() {
        let input = input([[X, X, E], [O, O, E], [E, E, E]], O);
        assert_eq!(calculate_minimax_move(&input), Some(Position::new(1, 2)));
    }

    #[test]
    fn test_advanced_blocks_opponent() {
        let input = input([[X, X, E], [E, O, E], [E, E, E]], O);
        assert_eq!(calculate_minimax_move(&input), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_advanced_does_not_mutate_input() {
        let input = input([[X, E, E], [E, O, E], [E, E, X]], O);
        let before = input.board;
        calculate_minimax_move(&input);
        assert_eq!(input.board, before);
    }

    #[test]
    fn test_advanced_never_loses_as_either_mark() {
        // Bot faces every possible opponent line from the empty board.
        fn explore(board: &mut Board, to_move: Mark, bot_mark: Mark) {
            match board.outcome() {
                GameOutcome::Win(mark) => {
                    assert_eq!(mark, bot_mark, "bot lost on\n{}", board);
                    return;
                }
                GameOutcome::Draw => return,
                GameOutcome::InProgress => {}
            }

            let next = to_move.opponent().unwrap();
            if to_move == bot_mark {
                let pos = calculate_minimax_move(&BotInput::new(*board, bot_mark)).unwrap();
                board.place(pos.row, pos.col, bot_mark).unwrap();
                explore(board, next, bot_mark);
                board.clear(pos.row, pos.col);
            } else {
                for pos in board.available_moves() {
                    board.place(pos.row, pos.col, to_move).unwrap();
                    explore(board, next, bot_mark);
                    board.clear(pos.row, pos.col);
                }
            }
        }

        explore(&mut Board::new(), X, O);
        explore(&mut Board::new(), X, X);
    }

    #[test]
    fn test_advanced_self_play_is_draw() {
        let mut board = Board::new();
        let mut rng = SessionRng::new(7);
        let mut mark = X;
        while board.outcome() == GameOutcome::InProgress {
            let pos = calculate_move(Difficulty::Advanced, BotInput::new(board, mark), &mut rng)
                .unwrap();
            board.place(pos.row, pos.col, mark).unwrap();
            mark = mark.opponent().unwrap();
        }
        assert_eq!(board.outcome(), GameOutcome::Draw);
    }

    #[test]
    fn test_pruned_scores_match_plain_minimax() {
        let positions = [
            [[X, E, E], [E, E, E], [E, E, E]],
            [[X, E, E], [E, O, E], [E, E, X]],
            [[X, O, X], [E, O, E], [E, X, E]],
            [[E, E, E], [E, X, E], [E, E, E]],
        ];
        for rows in positions {
            let mut board = Board::from_rows(rows);
            for pos in board.available_moves() {
                board.set(pos.row, pos.col, O);
                let pruned = minimax(&mut board, 1, false, O, i32::MIN, i32::MAX);
                let plain = reference_value(&mut board, 1, X, O);
                board.clear(pos.row, pos.col);
                assert_eq!(pruned, plain, "mismatch at {} on\n{}", pos, board);
            }
        }
    }

    #[test]
    fn test_moderate_completes_own_line() {
        let mut rng = SessionRng::new(1);
        let input = input([[O, O, E], [X, X, E], [E, E, E]], O);
        assert_eq!(
            calculate_move(Difficulty::Moderate, input, &mut rng),
            Some(Position::new(0, 2))
        );
    }

    #[test]
    fn test_moderate_prefers_first_winning_cell() {
        let mut rng = SessionRng::new(3);
        let input = input([[O, E, O], [E, X, X], [O, X, E]], O);
        // (0,1) and (1,0) both win; row-major scan finds (0,1) first.
        assert_eq!(
            calculate_move(Difficulty::Moderate, input, &mut rng),
            Some(Position::new(0, 1))
        );
    }

    #[test]
    fn test_moderate_does_not_block() {
        let board = Board::from_rows([[X, X, E], [E, O, E], [E, E, E]]);
        let mut blocked = 0;
        for seed in 0..200 {
            let mut rng = SessionRng::new(seed);
            let pos = calculate_move(Difficulty::Moderate, BotInput::new(board, O), &mut rng)
                .unwrap();
            assert!(board.is_valid_move(pos.row, pos.col));
            if pos == Position::new(0, 2) {
                blocked += 1;
            }
        }
        // Random fallback picks among 6 cells, so blocking is incidental.
        assert!(blocked < 100, "moderate blocked {} times out of 200", blocked);
    }

    #[test]
    fn test_beginner_is_roughly_uniform() {
        let mut rng = SessionRng::new(42);
        let mut counts = [[0usize; 3]; 3];
        let trials = 9000;
        for _ in 0..trials {
            let pos = calculate_move(Difficulty::Beginner, BotInput::new(Board::new(), O), &mut rng)
                .unwrap();
            counts[pos.row][pos.col] += 1;
        }
        for row in counts {
            for count in row {
                assert!(
                    (800..=1200).contains(&count),
                    "cell frequency {} too far from 1000",
                    count
                );
            }
        }
    }

    #[test]
    fn test_beginner_only_picks_empty_cells() {
        let board = Board::from_rows([[X, O, X], [O, E, X], [O, X, O]]);
        for seed in 0..20 {
            let mut rng = SessionRng::new(seed);
            assert_eq!(
                calculate_move(Difficulty::Beginner, BotInput::new(board, X), &mut rng),
                Some(Position::new(1, 1))
            );
        }
    }

    #[test]
    fn test_full_board_yields_no_move() {
        let mut rng = SessionRng::new(0);
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        assert_eq!(board.outcome(), GameOutcome::Draw);
        for difficulty in Difficulty::ALL {
            assert_eq!(
                calculate_move(difficulty, BotInput::new(board, O), &mut rng),
                None
            );
        }
    }

    #[test]
    fn test_decided_board_yields_no_move() {
        let mut rng = SessionRng::new(0);
        let board = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        for difficulty in Difficulty::ALL {
            assert_eq!(
                calculate_move(difficulty, BotInput::new(board, O), &mut rng),
                None
            );
        }
    }

    #[test]
    fn test_empty_mark_yields_no_move_at_any_difficulty() {
        let mut rng = SessionRng::new(0);
        for difficulty in Difficulty::ALL {
            assert_eq!(
                calculate_move(difficulty, input([[E; 3]; 3], E), &mut rng),
                None,
                "{}",
                difficulty
            );
        }
        assert_eq!(calculate_minimax_move(&input([[E; 3]; 3], E)), None);
    }
}
