//! Series catalog shared by the extract, transform and load stages.
//!
//! Every tracked statistic is a [`SeriesKey`] variant. The variant owns its
//! static [`SeriesDescriptor`], so the raw-file prefix, the export URL and the
//! metadata attached to standardized rows can never drift apart between
//! stages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Static configuration for one tracked series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesDescriptor {
    /// Internal slug (e.g. `cpih_l55o`).
    pub series_key: &'static str,
    /// Agency series code (CDID), e.g. `L55O`.
    pub series_id: &'static str,
    pub series_name: &'static str,
    pub unit: &'static str,
    pub source: &'static str,
    /// Raw files are named `{file_prefix}{timestamp}.csv`.
    pub file_prefix: &'static str,
    /// Generator export endpoint used by the extract stage.
    pub url: &'static str,
}

const CPIH_L55O: SeriesDescriptor = SeriesDescriptor {
    series_key: "cpih_l55o",
    series_id: "L55O",
    series_name: "CPIH annual rate (All items)",
    unit: "percent",
    source: "ONS",
    file_prefix: "cpih_l55o_",
    url: "https://www.ons.gov.uk/generator?format=csv&uri=%2Feconomy%2Finflationandpriceindices%2Ftimeseries%2Fl55o%2Fmm23",
};

const AWE_KAC3: SeriesDescriptor = SeriesDescriptor {
    series_key: "awe_kac3",
    series_id: "KAC3",
    series_name: "AWE YoY 3-month avg growth (Total pay ex arrears)",
    unit: "percent",
    source: "ONS",
    file_prefix: "awe_kac3_",
    url: "https://www.ons.gov.uk/generator?format=csv&uri=%2Femploymentandlabourmarket%2Fpeopleinwork%2Fearningsandworkinghours%2Ftimeseries%2Fkac3%2Flms",
};

/// Tracked series, in configuration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SeriesKey {
    /// CPIH annual rate, all items.
    #[serde(rename = "cpih_l55o")]
    CpihL55o,
    /// Average weekly earnings growth, total pay excluding arrears.
    #[serde(rename = "awe_kac3")]
    AweKac3,
}

impl SeriesKey {
    /// All series in configuration order.
    pub const ALL: [SeriesKey; 2] = [SeriesKey::CpihL55o, SeriesKey::AweKac3];

    #[must_use]
    pub const fn descriptor(self) -> &'static SeriesDescriptor {
        match self {
            Self::CpihL55o => &CPIH_L55O,
            Self::AweKac3 => &AWE_KAC3,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.descriptor().series_key
    }

    /// Comma-separated list of every known key, for error messages.
    #[must_use]
    pub fn known_keys() -> String {
        Self::ALL
            .iter()
            .map(|key| key.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeriesKey {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::UnknownSeriesKey(trimmed.to_string()))
    }
}

/// Resolve a series selection, falling back to the full catalog when empty.
///
/// Keys come back in catalog order with repeats dropped.
pub fn resolve_selection(selected: &[SeriesKey]) -> Vec<SeriesKey> {
    if selected.is_empty() {
        return SeriesKey::ALL.to_vec();
    }
    SeriesKey::ALL
        .into_iter()
        .filter(|key| selected.contains(key))
        .collect()
}
