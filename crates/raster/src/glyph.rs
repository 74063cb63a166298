//! The built-in 8x8 bitmap font.

/// A single 8x8 monochrome character bitmap.
///
/// Each byte is one row of pixels, top to bottom, with the most significant
/// bit being the leftmost pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph([u8; 8]);

/// Width of every glyph, in pixels.
pub const GLYPH_WIDTH: usize = 8;

/// Height of every glyph, in pixels.
pub const GLYPH_HEIGHT: usize = 8;

/// The first code point covered by [`GLYPHS`] (`' '`).
const FIRST_CODE_POINT: u32 = 0x20;

impl Glyph {
    /// The all-zero glyph substituted for characters outside the font.
    pub const BLANK: Self = Self([0; 8]);

    /// The packed pixels of row `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [`GLYPH_HEIGHT`].
    #[must_use]
    pub fn row(&self, index: usize) -> u8 {
        self.0[index]
    }

    /// All eight packed rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> [u8; 8] {
        self.0
    }
}

/// Look up the glyph for a code point.
///
/// This cannot fail: any code point outside the printable ASCII range
/// (`0x20..=0x7e`) maps to [`Glyph::BLANK`].
#[must_use]
pub fn lookup(code_point: u32) -> Glyph {
    code_point
        .checked_sub(FIRST_CODE_POINT)
        .and_then(|index| GLYPHS.get(index as usize))
        .map_or(Glyph::BLANK, |rows| Glyph(*rows))
}

/// Bitmaps for the printable ASCII range, indexed by `code point - 0x20`.
static GLYPHS: [[u8; 8]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x10, 0x10, 0x10, 0x10, 0x00, 0x10, 0x00], // '!'
    [0x00, 0x28, 0x28, 0x00, 0x00, 0x00, 0x00, 0x00], // '"'
    [0x00, 0x00, 0x28, 0x7c, 0x28, 0x7c, 0x28, 0x00], // '#'
    [0x00, 0x10, 0x3c, 0x50, 0x38, 0x14, 0x78, 0x10], // '$'
    [0x00, 0x00, 0x64, 0x48, 0x10, 0x24, 0x4c, 0x00], // '%'
    [0x00, 0x20, 0x50, 0x20, 0x54, 0x48, 0x34, 0x00], // '&'
    [0x00, 0x10, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00], // '\''
    [0x00, 0x08, 0x10, 0x10, 0x10, 0x10, 0x10, 0x08], // '('
    [0x00, 0x20, 0x10, 0x10, 0x10, 0x10, 0x10, 0x20], // ')'
    [0x00, 0x10, 0x54, 0x38, 0x38, 0x54, 0x10, 0x00], // '*'
    [0x00, 0x00, 0x10, 0x10, 0x7c, 0x10, 0x10, 0x00], // '+'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x10, 0x20], // ','
    [0x00, 0x00, 0x00, 0x00, 0x7c, 0x00, 0x00, 0x00], // '-'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x30, 0x00], // '.'
    [0x00, 0x00, 0x04, 0x08, 0x10, 0x20, 0x40, 0x00], // '/'
    [0x00, 0x38, 0x44, 0x54, 0x54, 0x44, 0x38, 0x00], // '0'
    [0x00, 0x08, 0x18, 0x08, 0x08, 0x08, 0x08, 0x00], // '1'
    [0x00, 0x38, 0x04, 0x38, 0x40, 0x40, 0x7c, 0x00], // '2'
    [0x00, 0x3c, 0x04, 0x18, 0x04, 0x04, 0x38, 0x00], // '3'
    [0x00, 0x08, 0x18, 0x28, 0x48, 0x7c, 0x08, 0x00], // '4'
    [0x00, 0x78, 0x40, 0x78, 0x04, 0x04, 0x78, 0x00], // '5'
    [0x00, 0x38, 0x40, 0x78, 0x44, 0x44, 0x38, 0x00], // '6'
    [0x00, 0x7c, 0x04, 0x08, 0x10, 0x10, 0x10, 0x00], // '7'
    [0x00, 0x38, 0x44, 0x38, 0x44, 0x44, 0x38, 0x00], // '8'
    [0x00, 0x38, 0x44, 0x3c, 0x04, 0x04, 0x04, 0x00], // '9'
    [0x00, 0x00, 0x30, 0x30, 0x00, 0x30, 0x30, 0x00], // ':'
    [0x00, 0x00, 0x30, 0x30, 0x00, 0x30, 0x10, 0x20], // ';'
    [0x00, 0x04, 0x08, 0x10, 0x20, 0x10, 0x08, 0x04], // '<'
    [0x00, 0x00, 0x00, 0x7c, 0x00, 0x7c, 0x00, 0x00], // '='
    [0x00, 0x40, 0x20, 0x10, 0x08, 0x10, 0x20, 0x40], // '>'
    [0x00, 0x38, 0x44, 0x08, 0x10, 0x00, 0x10, 0x00], // '?'
    [0x00, 0x38, 0x4c, 0x54, 0x5c, 0x40, 0x38, 0x00], // '@'
    [0x00, 0x38, 0x44, 0x7c, 0x44, 0x44, 0x44, 0x00], // 'A'
    [0x00, 0x78, 0x44, 0x78, 0x44, 0x44, 0x78, 0x00], // 'B'
    [0x00, 0x38, 0x44, 0x40, 0x40, 0x44, 0x38, 0x00], // 'C'
    [0x00, 0x70, 0x48, 0x44, 0x44, 0x48, 0x70, 0x00], // 'D'
    [0x00, 0x7c, 0x40, 0x78, 0x40, 0x40, 0x7c, 0x00], // 'E'
    [0x00, 0x7c, 0x40, 0x78, 0x40, 0x40, 0x40, 0x00], // 'F'
    [0x00, 0x38, 0x44, 0x40, 0x5c, 0x44, 0x3c, 0x00], // 'G'
    [0x00, 0x44, 0x44, 0x7c, 0x44, 0x44, 0x44, 0x00], // 'H'
    [0x00, 0x38, 0x10, 0x10, 0x10, 0x10, 0x38, 0x00], // 'I'
    [0x00, 0x3c, 0x04, 0x04, 0x04, 0x44, 0x38, 0x00], // 'J'
    [0x00, 0x44, 0x48, 0x70, 0x48, 0x44, 0x44, 0x00], // 'K'
    [0x00, 0x40, 0x40, 0x40, 0x40, 0x40, 0x7c, 0x00], // 'L'
    [0x00, 0x6c, 0x54, 0x54, 0x44, 0x44, 0x44, 0x00], // 'M'
    [0x00, 0x44, 0x64, 0x54, 0x4c, 0x44, 0x44, 0x00], // 'N'
    [0x00, 0x38, 0x44, 0x44, 0x44, 0x44, 0x38, 0x00], // 'O'
    [0x00, 0x78, 0x44, 0x78, 0x40, 0x40, 0x40, 0x00], // 'P'
    [0x00, 0x38, 0x44, 0x44, 0x44, 0x44, 0x3c, 0x02], // 'Q'
    [0x00, 0x78, 0x44, 0x78, 0x44, 0x44, 0x44, 0x00], // 'R'
    [0x00, 0x38, 0x40, 0x38, 0x04, 0x04, 0x78, 0x00], // 'S'
    [0x00, 0x7c, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00], // 'T'
    [0x00, 0x44, 0x44, 0x44, 0x44, 0x44, 0x3c, 0x00], // 'U'
    [0x00, 0x44, 0x44, 0x44, 0x44, 0x28, 0x10, 0x00], // 'V'
    [0x00, 0x44, 0x44, 0x54, 0x54, 0x54, 0x38, 0x00], // 'W'
    [0x00, 0x42, 0x24, 0x18, 0x18, 0x24, 0x42, 0x00], // 'X'
    [0x00, 0x44, 0x44, 0x38, 0x10, 0x10, 0x10, 0x00], // 'Y'
    [0x00, 0x7c, 0x08, 0x10, 0x20, 0x40, 0x7c, 0x00], // 'Z'
    [0x00, 0x38, 0x20, 0x20, 0x20, 0x20, 0x20, 0x38], // '['
    [0x00, 0x00, 0x40, 0x20, 0x10, 0x08, 0x04, 0x00], // '\\'
    [0x00, 0x38, 0x08, 0x08, 0x08, 0x08, 0x08, 0x38], // ']'
    [0x00, 0x10, 0x28, 0x44, 0x00, 0x00, 0x00, 0x00], // '^'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xfe, 0x00], // '_'
    [0x00, 0x40, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00], // '`'
    [0x00, 0x00, 0x38, 0x04, 0x3c, 0x44, 0x3c, 0x00], // 'a'
    [0x00, 0x40, 0x78, 0x44, 0x44, 0x44, 0x78, 0x00], // 'b'
    [0x00, 0x00, 0x38, 0x40, 0x40, 0x40, 0x38, 0x00], // 'c'
    [0x00, 0x04, 0x3c, 0x44, 0x44, 0x44, 0x3c, 0x00], // 'd'
    [0x00, 0x00, 0x38, 0x44, 0x7c, 0x40, 0x3c, 0x00], // 'e'
    [0x00, 0x18, 0x20, 0x38, 0x20, 0x20, 0x20, 0x00], // 'f'
    [0x00, 0x00, 0x3c, 0x44, 0x44, 0x3c, 0x04, 0x38], // 'g'
    [0x00, 0x40, 0x78, 0x44, 0x44, 0x44, 0x44, 0x00], // 'h'
    [0x00, 0x10, 0x00, 0x30, 0x10, 0x10, 0x10, 0x00], // 'i'
    [0x00, 0x10, 0x00, 0x30, 0x10, 0x10, 0x10, 0x20], // 'j'
    [0x00, 0x40, 0x40, 0x48, 0x70, 0x48, 0x44, 0x00], // 'k'
    [0x00, 0x30, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00], // 'l'
    [0x00, 0x00, 0x38, 0x54, 0x54, 0x44, 0x44, 0x00], // 'm'
    [0x00, 0x00, 0x78, 0x44, 0x44, 0x44, 0x44, 0x00], // 'n'
    [0x00, 0x00, 0x38, 0x44, 0x44, 0x44, 0x38, 0x00], // 'o'
    [0x00, 0x00, 0x78, 0x44, 0x44, 0x78, 0x40, 0x40], // 'p'
    [0x00, 0x00, 0x3c, 0x44, 0x44, 0x3c, 0x04, 0x06], // 'q'
    [0x00, 0x00, 0x1c, 0x20, 0x20, 0x20, 0x20, 0x00], // 'r'
    [0x00, 0x00, 0x3c, 0x40, 0x38, 0x04, 0x78, 0x00], // 's'
    [0x00, 0x20, 0x20, 0x38, 0x20, 0x20, 0x18, 0x00], // 't'
    [0x00, 0x00, 0x44, 0x44, 0x44, 0x44, 0x3c, 0x00], // 'u'
    [0x00, 0x00, 0x44, 0x44, 0x44, 0x28, 0x10, 0x00], // 'v'
    [0x00, 0x00, 0x44, 0x44, 0x54, 0x54, 0x38, 0x00], // 'w'
    [0x00, 0x00, 0x44, 0x28, 0x10, 0x28, 0x44, 0x00], // 'x'
    [0x00, 0x00, 0x44, 0x44, 0x44, 0x3c, 0x04, 0x38], // 'y'
    [0x00, 0x00, 0x7c, 0x08, 0x10, 0x20, 0x7c, 0x00], // 'z'
    [0x00, 0x18, 0x20, 0x20, 0x60, 0x20, 0x20, 0x18], // '{'
    [0x00, 0x10, 0x10, 0x10, 0x00, 0x10, 0x10, 0x10], // '|'
    [0x00, 0x30, 0x08, 0x08, 0x0c, 0x08, 0x08, 0x30], // '}'
    [0x00, 0x20, 0x54, 0x08, 0x00, 0x00, 0x00, 0x00], // '~'
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_glyphs_match_the_font_table() {
        assert_eq!(lookup(' ' as u32), Glyph::BLANK);
        assert_eq!(
            lookup('A' as u32).rows(),
            [0x00, 0x38, 0x44, 0x7c, 0x44, 0x44, 0x44, 0x00]
        );
        assert_eq!(
            lookup('0' as u32).rows(),
            [0x00, 0x38, 0x44, 0x54, 0x54, 0x44, 0x38, 0x00]
        );
        assert_eq!(
            lookup('~' as u32).rows(),
            [0x00, 0x20, 0x54, 0x08, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn every_printable_code_point_has_a_glyph() {
        // The space glyph is the only intentionally blank entry.
        for code_point in 0x21..=0x7e {
            assert_ne!(lookup(code_point), Glyph::BLANK, "code point {code_point}");
        }
    }

    #[test]
    fn unmapped_code_points_fall_back_to_blank() {
        for code_point in [0, 0x1f, 0x7f, 200, 0x1F600] {
            assert_eq!(lookup(code_point), Glyph::BLANK, "code point {code_point}");
        }
    }
}
