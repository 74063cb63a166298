//! Frames a [`Raster`] as a 1-bit greyscale PNG.
//!
//! All container concerns (signature, chunk layout, compression, checksums)
//! are handled by the `png` crate. This module only declares the image shape
//! and hands over the packed rows, which are already in the bit layout PNG
//! uses for sub-byte depths.

use std::io::Write;

use anyhow::Result;
use raster::Raster;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("A {width}x{height} image has no pixels and cannot be encoded")]
    Empty { width: usize, height: usize },
}

/// Encode `raster` as a PNG and write it to `out`.
///
/// Set bits become white pixels. `out` is flushed after the trailing IEND
/// chunk has been written.
pub fn write_png<W: Write>(raster: &Raster, mut out: W) -> Result<()> {
    if raster.width() == 0 || raster.height() == 0 {
        return Err(EncodeError::Empty {
            width: raster.width(),
            height: raster.height(),
        }
        .into());
    }

    let mut encoder = png::Encoder::new(&mut out, raster.width() as u32, raster.height() as u32);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::One);

    let mut pixels = Vec::with_capacity(raster.height() * raster.bytes_per_row());
    for row in raster.rows() {
        pixels.extend_from_slice(row);
    }

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&pixels)?;
    writer.finish()?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use raster::rasterize_message;

    #[test]
    fn output_decodes_back_to_the_same_pixels() {
        let raster = rasterize_message("A\nBB");
        let mut encoded = Vec::new();
        write_png(&raster, &mut encoded).unwrap();

        let decoder = png::Decoder::new(encoded.as_slice());
        let mut reader = decoder.read_info().unwrap();
        let mut pixels = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut pixels).unwrap();

        assert_eq!(info.width, 16);
        assert_eq!(info.height, 16);
        assert_eq!(info.bit_depth, png::BitDepth::One);
        assert_eq!(info.color_type, png::ColorType::Grayscale);

        let expected: Vec<u8> = raster.rows().flatten().copied().collect();
        assert_eq!(&pixels[..info.buffer_size()], expected.as_slice());
    }

    #[test]
    fn zero_width_rasters_are_reported_not_panicked() {
        let raster = rasterize_message("");
        assert!(write_png(&raster, Vec::new()).is_err());
    }
}
