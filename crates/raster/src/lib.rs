//! Rasterizes text into packed 1-bit-per-pixel bitmaps.
//!
//! Text is rendered with a fixed 8x8 monospaced font: glyphs are tiled left
//! to right, lines top to bottom. The resulting [`Raster`] already uses the
//! packed row layout a 1-bit greyscale PNG expects, so an encoder can frame
//! the rows without touching individual pixels.

mod glyph;

pub use glyph::{lookup, Glyph, GLYPH_HEIGHT, GLYPH_WIDTH};

/// A monochrome bitmap with bit-packed rows.
///
/// Every row holds `width` pixels at one bit each, most significant bit
/// first, in exactly `width.div_ceil(8)` bytes. Set bits are white. The row
/// count always equals `height`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    rows: Vec<Vec<u8>>,
}

impl Raster {
    /// Width in pixels. Always a multiple of [`GLYPH_WIDTH`].
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels. Always a multiple of [`GLYPH_HEIGHT`].
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of bytes in each packed row.
    #[must_use]
    pub fn bytes_per_row(&self) -> usize {
        self.width.div_ceil(8)
    }

    /// The packed rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Consume the raster, yielding its packed rows top to bottom.
    pub fn into_rows(self) -> impl Iterator<Item = Vec<u8>> {
        self.rows.into_iter()
    }
}

/// Rasterize a single line of text.
///
/// Each character occupies an 8x8 cell; the raster is 8 pixels tall and
/// 8 pixels wide per character. Since every glyph row is a whole byte, the
/// packed output row is the plain left-to-right concatenation of the glyph
/// row bytes. An empty line yields a valid zero-width raster.
///
/// Line breaks are not interpreted here; a `'\n'` renders as a blank cell
/// like any other unmapped character. Use [`rasterize_message`] for
/// multi-line text.
#[must_use]
pub fn rasterize_line(line: &str) -> Raster {
    let glyphs: Vec<Glyph> = line.chars().map(|c| lookup(c as u32)).collect();

    let rows = (0..GLYPH_HEIGHT)
        .map(|row| glyphs.iter().map(|glyph| glyph.row(row)).collect())
        .collect();

    Raster {
        width: GLYPH_WIDTH * glyphs.len(),
        height: GLYPH_HEIGHT,
        rows,
    }
}

/// Rasterize a whole message, possibly spanning multiple lines.
///
/// The message is split on bare `'\n'` characters; carriage returns get no
/// special treatment. Shorter lines are padded on the right with spaces so
/// every line spans the full image width. A trailing newline therefore
/// produces a trailing blank line, and the empty message a single empty
/// line (a zero-width raster of height 8).
#[must_use]
pub fn rasterize_message(text: &str) -> Raster {
    let lines: Vec<&str> = text.split('\n').collect();
    let maxlen = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    log::debug!(
        "rasterizing {} line(s) into a {}x{} pixel image",
        lines.len(),
        GLYPH_WIDTH * maxlen,
        GLYPH_HEIGHT * lines.len()
    );

    let mut rows = Vec::with_capacity(GLYPH_HEIGHT * lines.len());
    for line in &lines {
        let length = line.chars().count();
        let mut justified = String::with_capacity(line.len() + (maxlen - length));
        justified.push_str(line);
        for _ in length..maxlen {
            justified.push(' ');
        }
        rows.extend(rasterize_line(&justified).into_rows());
    }

    Raster {
        width: GLYPH_WIDTH * maxlen,
        height: GLYPH_HEIGHT * lines.len(),
        rows,
    }
}
