use super::types::{Cells, Mark, Position, WinningLine, BOARD_SIZE};

const LINE_COUNT: usize = 2 * BOARD_SIZE + 2;

/// Every row, column and both diagonals as (row, col) triples.
const LINES: [[(usize, usize); BOARD_SIZE]; LINE_COUNT] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn check_win(cells: &Cells, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    LINES.iter().any(|line| is_line_owned_by(cells, line, mark))
}

pub fn find_winner(cells: &Cells) -> Option<Mark> {
    check_win_with_line(cells).map(|line| line.mark)
}

pub fn check_win_with_line(cells: &Cells) -> Option<WinningLine> {
    for line in &LINES {
        let (row, col) = line[0];
        let mark = cells[row][col];
        if mark == Mark::Empty {
            continue;
        }

        if is_line_owned_by(cells, line, mark) {
            let positions = line.map(|(row, col)| Position::new(row, col));
            return Some(WinningLine::new(mark, positions));
        }
    }

    None
}

fn is_line_owned_by(cells: &Cells, line: &[(usize, usize); BOARD_SIZE], mark: Mark) -> bool {
    line.iter().all(|&(row, col)| cells[row][col] == mark)
}
