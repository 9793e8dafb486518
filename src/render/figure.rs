//! Figure sizing and PNG output
//!
//! Charts are drawn into an in-memory RGB buffer through plotters'
//! `BitMapBackend` and then encoded with the `png` crate, which lets the file
//! carry its DPI in a `pHYs` chunk.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use super::error::RenderError;

/// Resolution used when none is configured
pub const DEFAULT_DPI: u32 = 300;

const POINTS_PER_INCH: f64 = 72.0;
const METERS_PER_INCH: f64 = 0.0254;

/// Drawing surface handed to chart renderers, in pixel coordinates
pub type Canvas<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// A figure described the way print layouts are: inches plus a resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Figure {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
}

impl Figure {
    pub fn new(width_in: f64, height_in: f64, dpi: u32) -> Self {
        Self {
            width_in,
            height_in,
            dpi,
        }
    }

    /// Image size in pixels
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (self.width_in * self.dpi as f64).round() as u32,
            (self.height_in * self.dpi as f64).round() as u32,
        )
    }

    /// Convert a length in typographic points to pixels at this DPI
    pub fn pt(&self, points: f64) -> f64 {
        points * self.dpi as f64 / POINTS_PER_INCH
    }

    /// Like [`Figure::pt`], rounded and never below one pixel
    pub fn pt_px(&self, points: f64) -> u32 {
        (self.pt(points).round() as u32).max(1)
    }

    /// PNG `pHYs` density for this DPI
    pub fn pixels_per_meter(&self) -> u32 {
        (self.dpi as f64 / METERS_PER_INCH).round() as u32
    }

    /// Draw the figure on a white canvas and write it to `path` as PNG.
    pub fn render_png<F>(&self, path: &Path, draw: F) -> Result<(), RenderError>
    where
        F: FnOnce(&Canvas<'_>) -> Result<(), RenderError>,
    {
        let (width, height) = self.pixel_size();
        // the bitmap backend sizes its RGB buffer in u32
        let bytes = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(3))
            .filter(|&n| n > 0)
            .ok_or(RenderError::InvalidSize { width, height })?;

        let mut buffer = vec![0u8; bytes as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            root.fill(&WHITE)?;
            draw(&root)?;
            root.present()?;
        }

        self.write_png(path, width, height, &buffer)
    }

    fn write_png(
        &self,
        path: &Path,
        width: u32,
        height: u32,
        rgb: &[u8],
    ) -> Result<(), RenderError> {
        let file = File::create(path).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let encode_err = |source| RenderError::Encode {
            path: path.to_path_buf(),
            source,
        };

        let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let ppm = self.pixels_per_meter();
        encoder.set_pixel_dims(Some(png::PixelDimensions {
            xppu: ppm,
            yppu: ppm,
            unit: png::Unit::Meter,
        }));

        let mut writer = encoder.write_header().map_err(encode_err)?;
        writer.write_image_data(rgb).map_err(encode_err)?;
        writer.finish().map_err(encode_err)?;

        Ok(())
    }
}
