//! Plain-text printouts of the board and standings.

use grandpas_dots::{Board, BoxCoord, Edge, GameSession, Phase, PlayerId, Standings};

const DOT: char = '+';
const ACROSS: &str = "---";
const DOWN: char = '|';
const GAP: &str = "   ";

fn owner_label(owner: Option<PlayerId>) -> String {
    owner.map_or_else(|| GAP.to_string(), |p| format!(" {} ", p.get()))
}

/// Draws the board with dots, claimed edges and box owner numbers.
///
/// ```text
///     0   1
///  0  +---+   +
///     | 1 |
///  1  +---+   +
/// ```
pub fn board(board: &Board) -> String {
    let n = board.size().get();
    let mut out = String::new();

    let header: String = (0..=n).map(|col| format!("{:<4}", col)).collect();
    out.push_str("    ");
    out.push_str(header.trim_end());
    out.push('\n');

    for row in 0..=n {
        out.push_str(&format!("{:>2}  {}", row, DOT));
        for col in 0..n {
            let edge = if board.is_claimed(Edge::horizontal(row, col)) { ACROSS } else { GAP };
            out.push_str(edge);
            out.push(DOT);
        }
        out.push('\n');

        if row < n {
            out.push_str("    ");
            for col in 0..=n {
                out.push(if board.is_claimed(Edge::vertical(row, col)) { DOWN } else { ' ' });
                if col < n {
                    out.push_str(&owner_label(board.box_owner(BoxCoord::new(row, col))));
                }
            }
            out.push('\n');
        }
    }
    out.trim_end().to_string()
}

/// One line per player: score and rank.
pub fn standings(standings: &Standings) -> String {
    standings
        .entries()
        .iter()
        .map(|entry| format!("  #{} {}: {}", entry.rank, entry.player, entry.score))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Status line for the current phase.
pub fn status(session: &GameSession) -> String {
    match session.phase() {
        Phase::Setup => format!(
            "Setup: {} board, {} players, {} ranking. Type 'start' to play.",
            session.board_size(),
            session.roster().len(),
            session.rank_policy()
        ),
        Phase::InProgress => match session.active_player() {
            Some(player) => format!("{} to move.", player),
            None => String::new(),
        },
        Phase::Over => match session.outcome() {
            Some(outcome) => format!("Game over. {}. Type 'new' to play again.", outcome),
            None => "Game over.".to_string(),
        },
    }
}
