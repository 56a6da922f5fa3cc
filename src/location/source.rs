use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use crate::lib::{fmt, FromStr, String, ToString, Vec};
use crate::utils::{self, text, Unset};
use crate::ProcessingFormat;

/// Who produced a piece of data.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Source {
    #[serde(
        rename = "AgencyID",
        deserialize_with = "utils::string",
        skip_serializing_if = "Unset::is_unset"
    )]
    pub agency_id: Option<String>,
    #[serde(deserialize_with = "utils::string", skip_serializing_if = "Unset::is_unset")]
    pub author: Option<String>,
    /// One of the [`SourceType`] names; kept as text so that an unknown
    /// value survives a round trip and is reported by validation.
    #[serde(
        rename = "Type",
        deserialize_with = "utils::string",
        skip_serializing_if = "Unset::is_unset"
    )]
    pub source_type: Option<String>,
}

impl Source {
    pub fn new(agency_id: &str, author: &str, source_type: &str) -> Self {
        Self {
            agency_id: text(agency_id),
            author: text(author),
            source_type: text(source_type),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.agency_id.is_unset() && self.author.is_unset() && self.source_type.is_unset()
    }

    /// The parsed type, `None` when unset or not one of the known names.
    pub fn kind(&self) -> Option<SourceType> {
        self.source_type.as_deref()?.parse().ok()
    }
}

impl ProcessingFormat for Source {
    fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require!(errors, self.agency_id, "Empty AgencyID in Source class.");
        require!(errors, self.author, "Empty Author in Source class.");
        if self.source_type.is_unset() {
            errors.push("Empty Type in Source class.".to_string());
        } else if self.kind().is_none() {
            errors.push("Invalid Type in Source Class.".to_string());
        }
        errors
    }
}

/// The closed set of values accepted in [`Source::source_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceType {
    Unknown,
    LocalHuman,
    LocalAutomatic,
    ContributedHuman,
    ContributedAutomatic,
}

impl SourceType {
    pub const ALL: [SourceType; 5] = [
        SourceType::Unknown,
        SourceType::LocalHuman,
        SourceType::LocalAutomatic,
        SourceType::ContributedHuman,
        SourceType::ContributedAutomatic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Unknown => "Unknown",
            SourceType::LocalHuman => "LocalHuman",
            SourceType::LocalAutomatic => "LocalAutomatic",
            SourceType::ContributedHuman => "ContributedHuman",
            SourceType::ContributedAutomatic => "ContributedAutomatic",
        }
    }
}

impl FromStr for SourceType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SourceType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| anyhow!("unknown source type {:?}", s))
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
