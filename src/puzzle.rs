use std::fmt;
use std::str::FromStr;

use crate::error::MalformedBoardError;

/// Direction the blank travels when a tile slides into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Left,
    Right,
    Down,
}

impl Move {
    /// Enumeration order used by [`Board::legal_moves`].
    ///
    /// Matches a row-major scan of the tiles around the blank: above,
    /// left, right, below. Frontier tie-breaks depend on this order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Left, Move::Right, Move::Down];

    /// (row, column) offset of the tile the blank swaps with.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
            Move::Down => (1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Left => "Left",
            Move::Right => "Right",
            Move::Down => "Down",
        };
        write!(f, "{}", s)
    }
}

/// Canonical serialization of a board: row-major values joined by commas.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardKey(String);

impl BoardKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BoardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An N×N sliding-tile grid. `0` is the blank.
///
/// Boards are immutable values: every slide returns a new board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<u32>,
    blank: usize,
}

impl Board {
    /// Build a board from rows, validating shape and contents.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedBoardError`] if the grid is empty or not square,
    /// has no blank, or holds a value that is out of range or repeated.
    pub fn new(rows: Vec<Vec<u32>>) -> Result<Self, MalformedBoardError> {
        let size = rows.len();
        if size == 0 {
            return Err(MalformedBoardError::Empty);
        }

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != size {
                return Err(MalformedBoardError::NotSquare {
                    row,
                    len: cells.len(),
                    expected: size,
                });
            }
        }

        let cells: Vec<u32> = rows.into_iter().flatten().collect();
        let blank = cells
            .iter()
            .position(|&v| v == 0)
            .ok_or(MalformedBoardError::MissingBlank)?;

        let max = (cells.len() - 1) as u32;
        let mut seen = vec![false; cells.len()];
        for &value in &cells {
            if value > max {
                return Err(MalformedBoardError::OutOfRange { value, max });
            }
            if std::mem::replace(&mut seen[value as usize], true) {
                return Err(MalformedBoardError::Duplicate { value });
            }
        }

        Ok(Self { size, cells, blank })
    }

    /// The solved board: `1..N²-1` in row-major order, blank last.
    pub fn goal(size: usize) -> Self {
        let size = size.max(1);
        let len = size * size;
        let cells = (1..len as u32).chain(std::iter::once(0)).collect();

        Self {
            size,
            cells,
            blank: len - 1,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell values in row-major order.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.size)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// (row, column) of the blank.
    pub fn blank(&self) -> (usize, usize) {
        (self.blank / self.size, self.blank % self.size)
    }

    pub fn is_goal(&self) -> bool {
        let last = self.cells.len() - 1;
        self.cells
            .iter()
            .enumerate()
            .all(|(i, &value)| if i == last { value == 0 } else { value == i as u32 + 1 })
    }

    /// Slide the tile at `movement`'s offset into the blank.
    ///
    /// Returns `None` when that cell lies outside the grid.
    pub fn apply(&self, movement: Move) -> Option<Self> {
        let (dr, dc) = movement.as_offset();
        let (row, col) = self.blank();

        let new_row = row.checked_add_signed(dr)?;
        let new_col = col.checked_add_signed(dc)?;
        if new_row >= self.size || new_col >= self.size {
            return None;
        }

        let target = new_row * self.size + new_col;
        let mut cells = self.cells.clone();
        cells.swap(self.blank, target);

        Some(Self {
            size: self.size,
            cells,
            blank: target,
        })
    }

    /// Every in-bounds slide, in [`Move::ALL`] order.
    pub fn legal_moves(&self) -> Vec<(Move, Board)> {
        Move::ALL
            .iter()
            .filter_map(|&movement| self.apply(movement).map(|board| (movement, board)))
            .collect()
    }

    /// Sum of Manhattan distances of every tile from its goal cell.
    pub fn heuristic(&self) -> u32 {
        let size = self.size as u32;
        let mut distance = 0;

        for (index, &value) in self.cells.iter().enumerate() {
            if value == 0 {
                continue;
            }
            let row = index as u32 / size;
            let col = index as u32 % size;
            let target_row = (value - 1) / size;
            let target_col = (value - 1) % size;
            distance += row.abs_diff(target_row) + col.abs_diff(target_col);
        }

        distance
    }

    pub fn key(&self) -> BoardKey {
        let parts: Vec<String> = self.cells.iter().map(u32::to_string).collect();
        BoardKey(parts.join(","))
    }

    /// Whether the goal is reachable from this board at all.
    ///
    /// Odd widths need an even inversion count. Even widths need the
    /// inversion count plus the blank's row (from the top) to be odd.
    pub fn is_solvable(&self) -> bool {
        let inversions = count_inversions(&self.cells);

        if self.size % 2 == 1 {
            inversions % 2 == 0
        } else {
            let (blank_row, _) = self.blank();
            (inversions + blank_row) % 2 == 1
        }
    }
}

fn count_inversions(cells: &[u32]) -> usize {
    cells
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            cells[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count()
        })
        .sum()
}

impl FromStr for Board {
    type Err = MalformedBoardError;

    /// Rows are separated by `/`, `;` or newlines; cells by commas or
    /// whitespace. `"1 2 3/4 0 6/7 5 8"` is a 3×3 board.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .split(|c: char| c == '/' || c == ';' || c == '\n')
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .map(|row| {
                row.split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|cell| !cell.is_empty())
                    .map(|cell| {
                        cell.parse::<u32>()
                            .map_err(|_| MalformedBoardError::InvalidCell {
                                cell: cell.to_string(),
                            })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Board::new(rows)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.cells.len() - 1).to_string().len();
        for row in self.rows() {
            for &val in row {
                write!(f, "{:>width$} ", val, width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
