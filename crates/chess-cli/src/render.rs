//! Plain-text board rendering.

use chess_core::{File, Rank};
use chess_engine::Board;

/// Draws the board with rank 8 at the top, `.` for empty squares and
/// upper-case letters for White.
pub fn board(board: &Board) -> String {
    let mut out = String::new();
    let mut squares = board.squares().peekable();
    for rank in Rank::ALL.into_iter().rev() {
        out.push(rank.to_char());
        out.push(' ');
        while let Some((_, piece)) = squares.next_if(|(sq, _)| sq.rank() == rank) {
            out.push(' ');
            out.push(piece.map_or('.', |p| p.symbol()));
        }
        out.push('\n');
    }
    out.push_str("  ");
    out.extend(File::ALL.into_iter().flat_map(|file| [' ', file.to_char()]));
    out.push('\n');
    out
}

/// Lists captured pieces in capture order, or `None` if nothing has been
/// taken yet.
pub fn captured(board: &Board) -> Option<String> {
    let taken = board.captured();
    if taken.is_empty() {
        return None;
    }
    Some(taken.iter().map(|p| p.symbol()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_the_starting_array() {
        let text = board(&Board::standard());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8  r n b q k b n r");
        assert_eq!(lines[4], "4  . . . . . . . .");
        assert_eq!(lines[7], "1  R N B Q K B N R");
        assert_eq!(lines[8], "   a b c d e f g h");
    }

    #[test]
    fn lists_captures() {
        let mut b = Board::from_piece_list("Ke1 qd5 pa7").unwrap();
        assert_eq!(captured(&b), None);
        b.remove_piece("d5".parse().unwrap()).unwrap();
        b.remove_piece("a7".parse().unwrap()).unwrap();
        assert_eq!(captured(&b).as_deref(), Some("qp"));
    }
}
