use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

static RGBA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*rgba?\(\s*(\d+(?:\.\d+)?)\s*,\s*(\d+(?:\.\d+)?)\s*,\s*(\d+(?:\.\d+)?)\s*(?:,\s*(\d*\.?\d+)\s*)?\)\s*$",
    )
    .expect("rgba pattern is valid")
});

/// CSS-style color with 8-bit RGB channels and a `0..=1` alpha.
///
/// Serializes as its `rgba(r, g, b, a)` string form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    /// Parses `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    ///
    /// Channels are clamped into `[0, 255]` and alpha into `[0, 1]`.
    pub fn parse(input: &str) -> ChartResult<Self> {
        let captures = RGBA_PATTERN
            .captures(input)
            .ok_or_else(|| ChartError::InvalidData(format!("unrecognized color `{input}`")))?;

        let channel = |index: usize| -> ChartResult<u8> {
            let raw = captures.get(index).map_or("0", |m| m.as_str());
            let value: f64 = raw
                .parse()
                .map_err(|_| ChartError::InvalidData(format!("invalid color channel `{raw}`")))?;
            Ok(clamp_channel(value))
        };
        let alpha = match captures.get(4) {
            Some(m) => {
                let value: f64 = m.as_str().parse().map_err(|_| {
                    ChartError::InvalidData(format!("invalid alpha channel `{}`", m.as_str()))
                })?;
                value.clamp(0.0, 1.0)
            }
            None => 1.0,
        };

        Ok(Self::rgba(channel(1)?, channel(2)?, channel(3)?, alpha))
    }

    /// Scales each RGB channel by `1 - amount_percent / 100`; alpha is kept.
    ///
    /// Negative amounts lighten. Channels saturate at `0` and `255`.
    #[must_use]
    pub fn darken(self, amount_percent: f64) -> Self {
        let factor = 1.0 - amount_percent / 100.0;
        let scale = |c: u8| clamp_channel(f64::from(c) * factor);
        Self::rgba(
            scale(self.red),
            scale(self.green),
            scale(self.blue),
            self.alpha,
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(ChartError::InvalidData(
                "color alpha must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// String-level darkening for CSS color values.
///
/// Inputs that are not `rgb(...)`/`rgba(...)` are returned unchanged.
#[must_use]
pub fn darken_color(color: &str, amount_percent: f64) -> String {
    match Color::parse(color) {
        Ok(parsed) => parsed.darken(amount_percent).to_string(),
        Err(_) => color.to_owned(),
    }
}

fn clamp_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::{Color, darken_color};

    #[test]
    fn parse_accepts_rgb_and_rgba() {
        assert_eq!(
            Color::parse("rgb(1, 2, 3)").expect("rgb"),
            Color::rgb(1, 2, 3)
        );
        assert_eq!(
            Color::parse("rgba(54,162,235,.7)").expect("rgba"),
            Color::rgba(54, 162, 235, 0.7)
        );
    }

    #[test]
    fn parse_clamps_out_of_range_channels() {
        let color = Color::parse("rgba(300, 12.6, 0, 2)").expect("clamped");
        assert_eq!(color, Color::rgba(255, 13, 0, 1.0));
    }

    #[test]
    fn darken_color_passes_through_unknown_formats() {
        assert_eq!(darken_color("#ff0000", 20.0), "#ff0000");
        assert_eq!(darken_color("tomato", 20.0), "tomato");
    }
}
