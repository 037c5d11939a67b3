//! Chart rendering to image buffers
//!
//! Paints a reordered value layout as the familiar WCS chart picture: the
//! achromatic pole column on the left, a gutter, then the 8x40 chromatic
//! core with rows B-I aligned against their pole counterparts. Scalar
//! values are normalized over their range and mapped through a fixed
//! gradient colormap. Geometric correctness lives in [`crate::layout`];
//! this module only turns a finished layout into pixels.

use crate::layout::{self, ChartLayout, LayoutError, CORE_COLUMNS, CORE_ROWS, POLE_ROWS};
use crate::registry::ChipRegistry;
use image::{Rgba, RgbaImage};

/// Background for the gutter and any unpainted margin
const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Gradient control points, dark violet through teal to yellow
/// (the matplotlib viridis anchors).
const COLORMAP: [[u8; 3]; 5] = [
    [68, 1, 84],
    [59, 82, 139],
    [33, 145, 140],
    [94, 201, 98],
    [253, 231, 37],
];

/// Pixel geometry for the rendered chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartStyle {
    /// Square cell edge in pixels per chip
    pub cell_size: u32,
    /// Horizontal gap between the pole column and the core panel
    pub gutter: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self { cell_size: 16, gutter: 8 }
    }
}

impl ChartStyle {
    /// Total output image dimensions in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        let width = self.cell_size + self.gutter + CORE_COLUMNS * self.cell_size;
        let height = POLE_ROWS.len() as u32 * self.cell_size;
        (width, height)
    }
}

/// Render per-chip scalar values as the WCS chart.
///
/// `values[chip - 1]` holds the value for chip number `chip`; the array
/// must cover the largest chip number in the registry. The scalar range is
/// normalized over all 330 chart chips before colormapping.
pub fn render_chart(
    values: &[f64],
    registry: &ChipRegistry,
    style: &ChartStyle,
) -> Result<RgbaImage, LayoutError> {
    let chart = layout::reorder(values, registry)?;
    Ok(paint(&chart, style))
}

/// Paint an already-reordered layout.
pub fn paint(chart: &ChartLayout<f64>, style: &ChartStyle) -> RgbaImage {
    let (width, height) = style.dimensions();
    let mut image = RgbaImage::from_pixel(width, height, BACKGROUND);

    let (lo, hi) = value_range(chart);
    let normalize = |v: f64| if hi > lo { (v - lo) / (hi - lo) } else { 0.5 };

    for (row, value) in chart.pole.iter().take(POLE_ROWS.len()).enumerate() {
        fill_cell(
            &mut image,
            0,
            row as u32 * style.cell_size,
            style.cell_size,
            colormap(normalize(*value)),
        );
    }

    let core_x = style.cell_size + style.gutter;
    // Core rows B-I sit one pole row down, level with their pole letters
    let core_y = style.cell_size;
    for row in 0..CORE_ROWS.len() as u32 {
        for column in 0..CORE_COLUMNS {
            let Some(&value) = chart.core.get((row * CORE_COLUMNS + column) as usize) else {
                return image;
            };
            fill_cell(
                &mut image,
                core_x + column * style.cell_size,
                core_y + row * style.cell_size,
                style.cell_size,
                colormap(normalize(value)),
            );
        }
    }

    image
}

/// Map a normalized value in [0, 1] through the gradient colormap.
pub fn colormap(t: f64) -> Rgba<u8> {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let scaled = t * (COLORMAP.len() - 1) as f64;
    let segment = (scaled.floor() as usize).min(COLORMAP.len() - 2);
    let frac = scaled - segment as f64;
    let lo = COLORMAP[segment];
    let hi = COLORMAP[segment + 1];
    let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * frac).round() as u8;
    Rgba([lerp(lo[0], hi[0]), lerp(lo[1], hi[1]), lerp(lo[2], hi[2]), 255])
}

fn value_range(chart: &ChartLayout<f64>) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for value in chart.pole.iter().chain(chart.core.iter()) {
        lo = lo.min(*value);
        hi = hi.max(*value);
    }
    (lo, hi)
}

fn fill_cell(image: &mut RgbaImage, x: u32, y: u32, size: u32, color: Rgba<u8>) {
    for dy in 0..size {
        for dx in 0..size {
            image.put_pixel(x + dx, y + dy, color);
        }
    }
}
