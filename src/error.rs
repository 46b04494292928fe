//! Board construction errors.

use thiserror::Error;

/// Raised when a grid cannot form a valid sliding-tile board.
///
/// Boards are validated once, at construction; everything downstream
/// (move generation, heuristic, search) assumes a well-formed grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedBoardError {
    #[error("board has no cells")]
    Empty,

    #[error("row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("value {value} is out of range (max {max})")]
    OutOfRange { value: u32, max: u32 },

    #[error("value {value} appears more than once")]
    Duplicate { value: u32 },

    #[error("board has no blank (0) cell")]
    MissingBlank,

    #[error("cannot parse cell '{cell}'")]
    InvalidCell { cell: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = MalformedBoardError::Duplicate { value: 4 };
        assert_eq!(err.to_string(), "value 4 appears more than once");

        let err = MalformedBoardError::NotSquare {
            row: 1,
            len: 2,
            expected: 3,
        };
        assert_eq!(err.to_string(), "row 1 has 2 cells, expected 3");
    }
}
