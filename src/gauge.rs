//! Gauge readings and their data-to-presentation mapping.
//!
//! A gauge control visualizes a flame score as a colored fill bar. Its data
//! carries a percentage and a color; this module parses that into a reading
//! and maps it to CSS-ready style values. The mapping is one-way and
//! idempotent: applying it twice changes nothing.

use serde::{Deserialize, Serialize};

use crate::controls::DataSet;
use crate::{DATA_COLOR, DATA_WIDTH};

/// A gauge control's parsed data: fill percentage and fill color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeReading {
    pub percent: f64,
    pub color: String,
}

/// The CSS-ready values a reading maps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GaugeStyle {
    /// Fill width, e.g. `"42%"`.
    pub width: String,
    /// Fill color or gradient, passed through verbatim.
    pub background: String,
}

impl GaugeReading {
    /// Build a reading, clamping the percentage to `0.0..=100.0`.
    pub fn new(percent: f64, color: impl Into<String>) -> Self {
        let percent = if percent.is_finite() {
            percent.clamp(0.0, 100.0)
        } else {
            0.0
        };
        Self {
            percent,
            color: color.into(),
        }
    }

    /// Read width and color off a control's data attributes.
    ///
    /// Width text that does not parse as a number degrades to `0`; a missing
    /// color degrades to an empty string. Neither is an error.
    pub fn from_data(data: &DataSet) -> Self {
        let percent = data
            .get(DATA_WIDTH)
            .and_then(|w| w.trim().parse::<f64>().ok())
            .unwrap_or(0.0);
        let color = data.get(DATA_COLOR).unwrap_or("").to_string();
        Self::new(percent, color)
    }

    /// Map this reading to its presentation values.
    pub fn style(&self) -> GaugeStyle {
        GaugeStyle {
            width: format!("{}%", self.percent),
            background: self.color.clone(),
        }
    }
}

/// Fill gradient for a flame score, from calm green to full red.
pub fn color_for_score(score: f64) -> &'static str {
    if score <= 30.0 {
        "linear-gradient(90deg, #22c55e, #16a34a)"
    } else if score <= 60.0 {
        "linear-gradient(90deg, #eab308, #facc15)"
    } else if score <= 80.0 {
        "linear-gradient(90deg, #f97316, #ea580c)"
    } else {
        "linear-gradient(90deg, #ef4444, #b91c1c)"
    }
}
