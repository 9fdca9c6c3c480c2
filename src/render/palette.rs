use crate::render::Color;

pub const PALETTE_LEN: usize = 10;

/// Alpha multiplier applied once per full pass through a palette.
pub const OPACITY_DECAY: f64 = 0.8;

/// Cycles over which faded alpha stays a normal `f64`; later cycles flatten
/// toward `0` as the decay underflows.
pub const DISTINCT_OPACITY_CYCLES: usize = 3_000;

/// Border darkening used for bar outlines.
pub const BORDER_DARKEN_PERCENT: f64 = 20.0;

pub const PRIMARY_PALETTE: [Color; PALETTE_LEN] = [
    Color::rgba(54, 162, 235, 0.7),
    Color::rgba(255, 99, 132, 0.7),
    Color::rgba(75, 192, 192, 0.7),
    Color::rgba(255, 206, 86, 0.7),
    Color::rgba(153, 102, 255, 0.7),
    Color::rgba(255, 159, 64, 0.7),
    Color::rgba(46, 204, 113, 0.7),
    Color::rgba(231, 76, 60, 0.7),
    Color::rgba(52, 73, 94, 0.7),
    Color::rgba(26, 188, 156, 0.7),
];

pub const ALTERNATE_PALETTE: [Color; PALETTE_LEN] = [
    Color::rgba(142, 68, 173, 0.7),
    Color::rgba(39, 174, 96, 0.7),
    Color::rgba(241, 196, 15, 0.7),
    Color::rgba(41, 128, 185, 0.7),
    Color::rgba(211, 84, 0, 0.7),
    Color::rgba(22, 160, 133, 0.7),
    Color::rgba(192, 57, 43, 0.7),
    Color::rgba(127, 140, 141, 0.7),
    Color::rgba(243, 156, 18, 0.7),
    Color::rgba(44, 62, 80, 0.7),
];

/// Returns exactly `count` fill colors.
///
/// Colors cycle through a ten-entry palette; every further cycle reuses the
/// palette with alpha scaled by [`OPACITY_DECAY`] once more, so later cycles
/// are strictly more transparent than earlier ones for the first
/// [`DISTINCT_OPACITY_CYCLES`] cycles. Past that alpha bottoms out at `0`
/// and never goes negative.
#[must_use]
pub fn generate_colors(count: usize, alternate: bool) -> Vec<Color> {
    let palette = if alternate {
        &ALTERNATE_PALETTE
    } else {
        &PRIMARY_PALETTE
    };

    (0..count)
        .map(|index| {
            let base = palette[index % PALETTE_LEN];
            let cycle = index / PALETTE_LEN;
            if cycle == 0 {
                return base;
            }
            let exponent = i32::try_from(cycle).unwrap_or(i32::MAX);
            base.with_alpha(base.alpha * OPACITY_DECAY.powi(exponent))
        })
        .collect()
}

/// Opaque, darkened outlines for a set of fill colors.
#[must_use]
pub fn border_colors(fills: &[Color]) -> Vec<Color> {
    fills
        .iter()
        .map(|fill| fill.darken(BORDER_DARKEN_PERCENT).with_alpha(1.0))
        .collect()
}
