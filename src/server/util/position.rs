//! Grid position labelling for storage boxes.
//!
//! Rows are rendered as letters starting at `A` for row 1 and columns as
//! 1-based numbers, so row 2 column 10 is labelled `B10`.

/// Maximum number of rows in a box, one per letter of the alphabet
pub const MAX_BOX_ROWS: i32 = 26;

/// Maximum number of columns in a box
pub const MAX_BOX_COLS: i32 = 99;

/// Returns true if a box may be sized with the provided dimensions
pub fn valid_box_dimensions(rows: i32, cols: i32) -> bool {
    (1..=MAX_BOX_ROWS).contains(&rows) && (1..=MAX_BOX_COLS).contains(&cols)
}

/// Letter for a 1-based row, `None` outside of `1..=26`
pub fn row_letter(row: i32) -> Option<char> {
    if !(1..=MAX_BOX_ROWS).contains(&row) {
        return None;
    }

    char::from_u32('A' as u32 + (row - 1) as u32)
}

/// Display label of a position, e.g. `A1`
///
/// Rows outside the lettered range fall back to `R{row}C{col}`.
pub fn position_label(row: i32, col: i32) -> String {
    match row_letter(row) {
        Some(letter) => format!("{}{}", letter, col),
        None => format!("R{}C{}", row, col),
    }
}
