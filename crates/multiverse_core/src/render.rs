//! Plain-text board diagrams.

use crate::board::BoardState;
use crate::multiverse::Multiverse;

/// Rows top rank first, `.` for blank squares.
pub fn render_board(board: &BoardState) -> String {
    let mut out = String::with_capacity((board.width() + 1) * board.height());
    for row in board.squares().chunks(board.width().max(1)).rev() {
        for sq in row {
            out.push(sq.map_or('.', |pc| pc.to_char()));
        }
        out.push('\n');
    }
    out
}

/// Present board of every timeline, lowest index first.
pub fn render_multiverse(mv: &Multiverse) -> String {
    let mut out = String::new();
    for tl in mv.timelines() {
        out.push_str(&format!(
            "L{} T{} ({} to move)\n",
            tl.index(),
            tl.last_turn_played(),
            tl.active_color()
        ));
        out.push_str(&render_board(tl.present()));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::parse_board;

    #[test]
    fn test_render_board_top_rank_first() {
        let board = parse_board("2k/3/K2", 3, 3).unwrap();
        assert_eq!(render_board(&board), "..k\n...\nK..\n");
    }

    #[test]
    fn test_render_multiverse_headers() {
        let board = parse_board("k/K", 1, 2).unwrap();
        let mv = Multiverse::new(1, 2, [(0, board)]).unwrap();
        assert_eq!(render_multiverse(&mv), "L0 T1 (white to move)\nk\nK\n\n");
    }
}
