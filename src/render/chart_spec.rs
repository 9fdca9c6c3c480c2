use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Doughnut,
}

/// How values are rendered in tooltips and on the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFormat {
    #[default]
    Plain,
    Currency,
    Days,
    Percent,
}

impl ValueFormat {
    #[must_use]
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Plain => trim_decimals(value),
            Self::Currency => format_currency(value),
            Self::Days => {
                let text = trim_decimals(value);
                if text == "1" {
                    "1 day".to_owned()
                } else {
                    format!("{text} days")
                }
            }
            Self::Percent => format!("{}%", trim_decimals(value)),
        }
    }
}

/// One series of values, aligned index-by-index with `ChartData::labels`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub values: SmallVec<[f64; 4]>,
    pub background_colors: Vec<Color>,
    pub border_colors: Vec<Color>,
    pub border_width: f64,
}

impl Dataset {
    #[must_use]
    pub fn new(label: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            label: label.into(),
            values: values.into_iter().collect(),
            background_colors: Vec::new(),
            border_colors: Vec::new(),
            border_width: 1.0,
        }
    }

    #[must_use]
    pub fn with_background_colors(mut self, colors: Vec<Color>) -> Self {
        self.background_colors = colors;
        self
    }

    #[must_use]
    pub fn with_border_colors(mut self, colors: Vec<Color>) -> Self {
        self.border_colors = colors;
        self
    }

    #[must_use]
    pub fn with_border_width(mut self, border_width: f64) -> Self {
        self.border_width = border_width;
        self
    }

    fn validate(&self, label_count: usize) -> ChartResult<()> {
        if self.values.len() != label_count {
            return Err(ChartError::InvalidData(format!(
                "dataset `{}` has {} values for {label_count} labels",
                self.label,
                self.values.len()
            )));
        }
        if self.values.iter().any(|v| !v.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "dataset `{}` values must be finite",
                self.label
            )));
        }
        for (name, colors) in [
            ("background", &self.background_colors),
            ("border", &self.border_colors),
        ] {
            if colors.len() > 1 && colors.len() != label_count {
                return Err(ChartError::InvalidData(format!(
                    "dataset `{}` {name} colors must be empty, a single color or one per label",
                    self.label
                )));
            }
            for color in colors {
                color.validate()?;
            }
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(ChartError::InvalidData(
                "dataset border width must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Labels plus datasets; the part of a chart replaced on every update.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    #[must_use]
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            labels,
            datasets: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.datasets.push(dataset);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        for dataset in &self.datasets {
            dataset.validate(self.labels.len())?;
        }
        Ok(())
    }

    #[must_use]
    pub fn values(&self, dataset_index: usize) -> Option<&[f64]> {
        self.datasets
            .get(dataset_index)
            .map(|dataset| dataset.values.as_slice())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub title: Option<String>,
    pub value_axis_title: Option<String>,
    pub value_format: ValueFormat,
    pub begin_at_zero: bool,
    pub show_legend: bool,
    /// Doughnut hole size in percent of the radius.
    pub cutout_percent: Option<f64>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: None,
            value_axis_title: None,
            value_format: ValueFormat::Plain,
            begin_at_zero: true,
            show_legend: false,
            cutout_percent: None,
        }
    }
}

/// Everything a backend needs to create one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartSpec {
    #[must_use]
    pub fn new(kind: ChartKind, data: ChartData) -> Self {
        Self {
            kind,
            data,
            options: ChartOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.data.validate()?;
        if self.kind == ChartKind::Doughnut {
            let negative = self
                .data
                .datasets
                .iter()
                .flat_map(|dataset| dataset.values.iter())
                .any(|value| *value < 0.0);
            if negative {
                return Err(ChartError::InvalidData(
                    "doughnut slices must be >= 0".to_owned(),
                ));
            }
        }
        if let Some(cutout) = self.options.cutout_percent {
            if !cutout.is_finite() || !(0.0..100.0).contains(&cutout) {
                return Err(ChartError::InvalidData(
                    "doughnut cutout must be finite and in [0, 100)".to_owned(),
                ));
            }
        }
        Ok(())
    }

    /// Tooltip text for one value, e.g. `Actual Cost: $1,250`.
    #[must_use]
    pub fn tooltip_label(&self, dataset_index: usize, value_index: usize) -> Option<String> {
        let value = *self.data.values(dataset_index)?.get(value_index)?;
        let label = self.data.labels.get(value_index)?;
        Some(format!(
            "{label}: {}",
            self.options.value_format.format(value)
        ))
    }
}

/// Formats whole dollars with thousands separators (`-$1,234`).
#[must_use]
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}")
}

fn trim_decimals(value: f64) -> String {
    let text = format!("{value:.1}");
    match text.strip_suffix(".0") {
        Some(whole) if whole == "-0" => "0".to_owned(),
        Some(whole) => whole.to_owned(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::{ValueFormat, format_currency};

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(1_234_567.0), "$1,234,567");
        assert_eq!(format_currency(-10_000.0), "-$10,000");
    }

    #[test]
    fn days_and_percent_trim_trailing_zero() {
        assert_eq!(ValueFormat::Days.format(1.0), "1 day");
        assert_eq!(ValueFormat::Days.format(12.5), "12.5 days");
        assert_eq!(ValueFormat::Percent.format(80.0), "80%");
        assert_eq!(ValueFormat::Plain.format(-0.01), "0");
    }
}
