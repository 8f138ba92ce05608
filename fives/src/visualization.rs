use crate::Board;

/// Draws the board as a box of `●` (dot) and `·` (empty) characters,
/// with column indices (mod 10) on top and row indices on the left.
pub fn visualize_board(board: &Board) -> String {
    let size = board.size() as i32;

    // Draw the top of the box
    let mut result = String::from("   ");
    for x in 0..size {
        result += &format!("{:>2}", x % 10);
    }
    result += "\n   ╭";
    for _ in 0..size {
        result += "──";
    }
    result += "─╮\n";

    for y in 0..size {
        result += &format!("{:>2} │", y);
        for x in 0..size {
            result += if board.is_occupied(x, y) { "●" } else { "·" };
            result += " ";
        }
        result += " │\n";
    }

    // Draw the bottom of the box
    result += "   ╰";
    for _ in 0..size {
        result += "──";
    }
    result += "─╯";
    result
}
