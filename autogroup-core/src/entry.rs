use serde::{Deserialize, Serialize};

/// Identifier of a catalog entry.
///
/// Ids are opaque: the only meaning attached to the numeric value is its
/// ordering, which group selection uses to pick a stable representative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u32);

impl EntryId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntryId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for EntryId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Format category of a catalog entry.
///
/// The numeric codes match the values stored in the catalog database.
/// Types never decide grouping; they are only available to representative
/// selection as a tie-break signal. Ordered by database code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    Movie,
    Ova,
    TvSeries,
    TvSpecial,
    Web,
    Other,
}

const ALL_ENTRY_TYPES: &[EntryType] = &[
    EntryType::Movie,
    EntryType::Ova,
    EntryType::TvSeries,
    EntryType::TvSpecial,
    EntryType::Web,
    EntryType::Other,
];

impl EntryType {
    /// Database code for this type.
    pub fn code(&self) -> i32 {
        match self {
            Self::Movie => 0,
            Self::Ova => 1,
            Self::TvSeries => 2,
            Self::TvSpecial => 3,
            Self::Web => 4,
            Self::Other => 5,
        }
    }

    /// Map a database code to a type. Unknown codes become [`EntryType::Other`].
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Movie,
            1 => Self::Ova,
            2 => Self::TvSeries,
            3 => Self::TvSpecial,
            4 => Self::Web,
            _ => Self::Other,
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::Ova => "OVA",
            Self::TvSeries => "TV Series",
            Self::TvSpecial => "TV Special",
            Self::Web => "Web",
            Self::Other => "Other",
        }
    }

    /// All accepted names for this type (lower-case, matched case-insensitively).
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Movie => &["movie", "film"],
            Self::Ova => &["ova", "oad"],
            Self::TvSeries => &["tv series", "tv", "tv_series", "series"],
            Self::TvSpecial => &["tv special", "special", "tv_special"],
            Self::Web => &["web", "ona"],
            Self::Other => &["other"],
        }
    }

    pub fn all() -> &'static [EntryType] {
        ALL_ENTRY_TYPES
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when a string cannot be parsed into an [`EntryType`].
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown entry type: '{0}'")]
pub struct EntryTypeParseError(pub String);

impl std::str::FromStr for EntryType {
    type Err = EntryTypeParseError;

    /// Parse a type from any alias (case-insensitive) or from its numeric code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if let Ok(code) = lower.parse::<i32>() {
            return Ok(Self::from_code(code));
        }
        ALL_ENTRY_TYPES
            .iter()
            .copied()
            .find(|t| t.aliases().contains(&lower.as_str()))
            .ok_or_else(|| EntryTypeParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/entry_tests.rs"]
mod tests;
