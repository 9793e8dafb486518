//! Colors shared by the charts and the sequential heatmap scale

use plotters::style::RGBColor;

pub const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
pub const ORANGE: RGBColor = RGBColor(255, 165, 0);
pub const GRAY: RGBColor = RGBColor(128, 128, 128);
pub const TEAL: RGBColor = RGBColor(0, 128, 128);
pub const TEXT: RGBColor = RGBColor(0, 0, 0);

/// Piecewise-linear color scale through evenly spaced stops
#[derive(Debug, Clone, Copy)]
pub struct SequentialScale {
    stops: &'static [RGBColor],
}

/// ColorBrewer BuGn, 9 classes (light blue-white to dark green)
pub const BU_GN: SequentialScale = SequentialScale {
    stops: &[
        RGBColor(0xf7, 0xfc, 0xfd),
        RGBColor(0xe5, 0xf5, 0xf9),
        RGBColor(0xcc, 0xec, 0xe6),
        RGBColor(0x99, 0xd8, 0xc9),
        RGBColor(0x66, 0xc2, 0xa4),
        RGBColor(0x41, 0xae, 0x76),
        RGBColor(0x23, 0x8b, 0x45),
        RGBColor(0x00, 0x6d, 0x2c),
        RGBColor(0x00, 0x44, 0x1b),
    ],
};

impl SequentialScale {
    /// Color at position `t`, clamped to `[0, 1]`
    pub fn at(&self, t: f64) -> RGBColor {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let last = self.stops.len() - 1;
        let scaled = t * last as f64;
        let i = (scaled.floor() as usize).min(last);
        if i == last {
            return self.stops[last];
        }

        let frac = scaled - i as f64;
        let (a, b) = (self.stops[i], self.stops[i + 1]);
        RGBColor(lerp(a.0, b.0, frac), lerp(a.1, b.1, frac), lerp(a.2, b.2, frac))
    }

    /// Color for `value` with `vmin` mapped to the first stop and `vmax` to the last.
    ///
    /// A degenerate range maps everything to the first stop.
    pub fn map(&self, value: f64, vmin: f64, vmax: f64) -> RGBColor {
        if vmax <= vmin {
            return self.at(0.0);
        }
        self.at((value - vmin) / (vmax - vmin))
    }
}

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round() as u8
}
