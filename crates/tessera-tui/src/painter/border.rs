//! Border glyph sets

/// Border type for boxes and grids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum BorderType {
    /// No border
    #[default]
    None,
    /// Single line border (─ │ ┌ ┐ └ ┘)
    Single,
    /// Double line border (═ ║ ╔ ╗ ╚ ╝)
    Double,
    /// Rounded corners (─ │ ╭ ╮ ╰ ╯)
    Rounded,
    /// Heavy/thick border (━ ┃ ┏ ┓ ┗ ┛)
    Heavy,
}

/// Glyphs for every border position, including grid junctions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderChars {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    /// ┬
    pub top_tee: char,
    /// ┴
    pub bottom_tee: char,
    /// ├
    pub left_tee: char,
    /// ┤
    pub right_tee: char,
    /// ┼
    pub cross: char,
}

const SINGLE_JUNCTIONS: [char; 5] = ['┬', '┴', '├', '┤', '┼'];

impl BorderChars {
    const fn new(lines: [char; 2], corners: [char; 4], junctions: [char; 5]) -> Self {
        Self {
            horizontal: lines[0],
            vertical: lines[1],
            top_left: corners[0],
            top_right: corners[1],
            bottom_left: corners[2],
            bottom_right: corners[3],
            top_tee: junctions[0],
            bottom_tee: junctions[1],
            left_tee: junctions[2],
            right_tee: junctions[3],
            cross: junctions[4],
        }
    }
}

impl BorderType {
    /// Check if this type draws anything
    pub fn has_border(&self) -> bool {
        *self != BorderType::None
    }

    /// Get the border characters for this type
    pub fn chars(&self) -> BorderChars {
        match self {
            BorderType::None => BorderChars::new([' '; 2], [' '; 4], [' '; 5]),
            BorderType::Single => {
                BorderChars::new(['─', '│'], ['┌', '┐', '└', '┘'], SINGLE_JUNCTIONS)
            }
            BorderType::Double => {
                BorderChars::new(['═', '║'], ['╔', '╗', '╚', '╝'], ['╦', '╩', '╠', '╣', '╬'])
            }
            // No rounded junction glyphs exist; the single set joins cleanly
            BorderType::Rounded => {
                BorderChars::new(['─', '│'], ['╭', '╮', '╰', '╯'], SINGLE_JUNCTIONS)
            }
            BorderType::Heavy => {
                BorderChars::new(['━', '┃'], ['┏', '┓', '┗', '┛'], ['┳', '┻', '┣', '┫', '╋'])
            }
        }
    }
}
