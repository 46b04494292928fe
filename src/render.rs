//! Text output for boards and solution paths.

use std::time::Duration;

use crossterm::style::Stylize;

use crate::node::SearchNode;
use crate::puzzle::Board;
use crate::search::Solution;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    Plain,
    /// Tiles already on their goal cell in green, blank dimmed.
    Color,
}

pub fn render_board(board: &Board, style: RenderStyle) -> String {
    if style == RenderStyle::Plain {
        return board.to_string();
    }

    let size = board.size();
    let width = (size * size - 1).to_string().len();
    let mut out = String::new();

    for (r, row) in board.rows().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            let cell = format!("{:>width$}", value, width = width);
            let index = r * size + c;
            let styled = if value == 0 {
                format!("{} ", cell.dark_grey())
            } else if value as usize == index + 1 {
                format!("{} ", cell.green().bold())
            } else {
                format!("{} ", cell)
            };
            out.push_str(&styled);
        }
        out.push('\n');
    }

    out
}

/// One path entry: its move label (or `Start`) followed by the board.
pub fn render_step(step: usize, node: &SearchNode, style: RenderStyle) -> String {
    let label = match node.mv {
        Some(mv) => format!("{}. {}", step, mv),
        None => "Start".to_string(),
    };
    let label = match style {
        RenderStyle::Plain => label,
        RenderStyle::Color => label.bold().to_string(),
    };
    format!("{}\n{}", label, render_board(&node.board, style))
}

pub fn render_solution(solution: &Solution, style: RenderStyle) -> String {
    solution
        .path
        .iter()
        .enumerate()
        .map(|(step, node)| render_step(step, node, style))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_summary(moves: usize, elapsed: Duration) -> String {
    format!(
        "Number of moves: {}\nSearch time: {:.6} second(s)",
        moves,
        elapsed.as_secs_f64()
    )
}
