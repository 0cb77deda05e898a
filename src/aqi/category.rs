//! AQI health categories and their display colours.

use core::fmt;

use serde::{Serialize, Serializer};

/// Advisory attached to every result above AQI 100, for both pollutants.
pub const SENSITIVE_GROUPS: &str =
    "People with heart or lung disease, older adults, children, and people of lower socioeconomic status";

/// AQI above which [`SENSITIVE_GROUPS`] applies.
pub const SENSITIVE_GROUP_THRESHOLD: i32 = 100;

/// EPA health category, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

/// One row of the classification table.
#[derive(Debug, Clone, Copy)]
pub struct CategoryBand {
    /// Highest AQI (inclusive) that still belongs to this category.
    pub aqi_threshold: i32,
    pub category: Category,
}

/// Ascending thresholds.  The last row also covers everything above 500.
pub const CATEGORY_BANDS: [CategoryBand; 6] = [
    CategoryBand {
        aqi_threshold: 50,
        category: Category::Good,
    },
    CategoryBand {
        aqi_threshold: 100,
        category: Category::Moderate,
    },
    CategoryBand {
        aqi_threshold: 150,
        category: Category::UnhealthyForSensitiveGroups,
    },
    CategoryBand {
        aqi_threshold: 200,
        category: Category::Unhealthy,
    },
    CategoryBand {
        aqi_threshold: 300,
        category: Category::VeryUnhealthy,
    },
    CategoryBand {
        aqi_threshold: 500,
        category: Category::Hazardous,
    },
];

impl Category {
    /// First band whose threshold is at or above `aqi`; Hazardous beyond 500.
    pub fn classify(aqi: i32) -> Self {
        CATEGORY_BANDS
            .iter()
            .find(|band| aqi <= band.aqi_threshold)
            .map_or(Self::Hazardous, |band| band.category)
    }

    /// EPA display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }

    /// EPA colour as a CSS `rgb()` string.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Good => "rgb(0,228,0)",
            Self::Moderate => "rgb(255,255,0)",
            Self::UnhealthyForSensitiveGroups => "rgb(255,126,0)",
            Self::Unhealthy => "rgb(255,0,0)",
            Self::VeryUnhealthy => "rgb(143,63,151)",
            Self::Hazardous => "rgb(126,0,35)",
        }
    }

    /// Human colour name used on EPA charts.
    pub const fn color_name(self) -> &'static str {
        match self {
            Self::Good => "Green",
            Self::Moderate => "Yellow",
            Self::UnhealthyForSensitiveGroups => "Orange",
            Self::Unhealthy => "Red",
            Self::VeryUnhealthy => "Purple",
            Self::Hazardous => "Maroon",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Advisory for `aqi`: [`SENSITIVE_GROUPS`] above 100, empty otherwise.
pub fn sensitive_group_note(aqi: i32) -> &'static str {
    if aqi > SENSITIVE_GROUP_THRESHOLD {
        SENSITIVE_GROUPS
    } else {
        ""
    }
}
