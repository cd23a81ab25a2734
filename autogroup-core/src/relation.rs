use serde::{Deserialize, Serialize};

use crate::entry::{EntryId, EntryType};

/// Storytelling relation between two catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    FullStory,
    Summary,
    ParentStory,
    SideStory,
    Prequel,
    Sequel,
    AlternativeSetting,
    AlternativeVersion,
    SameSetting,
    Character,
    Other,
}

const ALL_RELATION_KINDS: &[RelationKind] = &[
    RelationKind::FullStory,
    RelationKind::Summary,
    RelationKind::ParentStory,
    RelationKind::SideStory,
    RelationKind::Prequel,
    RelationKind::Sequel,
    RelationKind::AlternativeSetting,
    RelationKind::AlternativeVersion,
    RelationKind::SameSetting,
    RelationKind::Character,
    RelationKind::Other,
];

/// Whether a relation merges its two entries into one franchise group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationStrength {
    /// Both ends belong to the same franchise.
    Strong,
    /// Informational only; never merges groups.
    Weak,
}

impl RelationKind {
    /// Canonical lower-case label, as stored in the catalog database.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullStory => "full story",
            Self::Summary => "summary",
            Self::ParentStory => "parent story",
            Self::SideStory => "side story",
            Self::Prequel => "prequel",
            Self::Sequel => "sequel",
            Self::AlternativeSetting => "alternative setting",
            Self::AlternativeVersion => "alternative version",
            Self::SameSetting => "same setting",
            Self::Character => "character",
            Self::Other => "other",
        }
    }

    /// Map a free-text relation label to a kind.
    ///
    /// Matching is exact after lower-casing; anything not in the table is
    /// [`RelationKind::Other`].
    pub fn from_label(label: &str) -> Self {
        let lower = label.to_lowercase();
        ALL_RELATION_KINDS
            .iter()
            .copied()
            .find(|kind| kind.label() == lower)
            .unwrap_or(Self::Other)
    }

    pub fn strength(&self) -> RelationStrength {
        match self {
            Self::FullStory
            | Self::ParentStory
            | Self::SideStory
            | Self::Prequel
            | Self::Sequel
            | Self::AlternativeVersion => RelationStrength::Strong,

            Self::Summary
            | Self::AlternativeSetting
            | Self::SameSetting
            | Self::Character
            | Self::Other => RelationStrength::Weak,
        }
    }

    pub fn is_strong(&self) -> bool {
        self.strength() == RelationStrength::Strong
    }

    /// The same relation seen from the other entry.
    ///
    /// Strength is not preserved: `FullStory` is strong but its inverse
    /// `Summary` is weak.
    pub fn inverse(&self) -> Self {
        match self {
            Self::Sequel => Self::Prequel,
            Self::Prequel => Self::Sequel,
            Self::ParentStory => Self::SideStory,
            Self::SideStory => Self::ParentStory,
            Self::FullStory => Self::Summary,
            Self::Summary => Self::FullStory,
            Self::AlternativeSetting
            | Self::AlternativeVersion
            | Self::SameSetting
            | Self::Character
            | Self::Other => *self,
        }
    }

    /// All 11 relation kinds.
    pub fn all() -> &'static [RelationKind] {
        ALL_RELATION_KINDS
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A directed relation from one entry to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relation {
    pub from: EntryId,
    pub to: EntryId,
    pub from_type: EntryType,
    pub to_type: EntryType,
    pub kind: RelationKind,
}

impl Relation {
    pub fn new(
        from: impl Into<EntryId>,
        to: impl Into<EntryId>,
        from_type: EntryType,
        to_type: EntryType,
        kind: RelationKind,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            from_type,
            to_type,
            kind,
        }
    }

    /// A relation between two entries whose types are unknown.
    pub fn untyped(from: impl Into<EntryId>, to: impl Into<EntryId>, kind: RelationKind) -> Self {
        Self::new(from, to, EntryType::Other, EntryType::Other, kind)
    }

    /// Relations pointing from an entry to itself carry no information.
    pub fn is_self_referential(&self) -> bool {
        self.from == self.to
    }
}
