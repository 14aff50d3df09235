//! Glyphs and escape sequences used when composing a bar.

/// Eighth-block glyphs indexed by eighths filled (0..=8).
pub const PARTIAL_BLOCKS: [char; 9] = [' ', '▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];

/// A fully filled cell.
pub const FULL_BLOCK: char = '█';

/// Default glyph for cells not yet reached.
pub const UNFILLED: char = '░';

/// SGR prefix for unfilled cells (dim gray foreground).
pub const UNFILLED_COLOR: &str = "\x1b[38;2;90;90;90m";

/// SGR reset.
pub const RESET: &str = "\x1b[0m";

/// Eighths per cell.
pub const EIGHTHS: usize = 8;

/// Glyph for a cell filled to `eighths` eighths, saturating at a full block.
#[must_use]
pub fn partial_block(eighths: usize) -> char {
    PARTIAL_BLOCKS[eighths.min(EIGHTHS)]
}
