//! Domain entities for the Artifacts domain
//!
//! An artifact is a stored unit of model, dataset, or code content plus
//! metadata. Artifacts are immutable once created: the registry never
//! mutates a record in place, it only clears the whole store on reset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use depot_common::{content_digest, Error, Result};

/// Artifact kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Model,
    Dataset,
    Code,
}

impl ArtifactKind {
    /// All recognized kinds, in canonical order
    pub const ALL: [ArtifactKind; 3] = [Self::Model, Self::Dataset, Self::Code];
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactKind::Model => write!(f, "model"),
            ArtifactKind::Dataset => write!(f, "dataset"),
            ArtifactKind::Code => write!(f, "code"),
        }
    }
}

impl std::str::FromStr for ArtifactKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "model" => Ok(ArtifactKind::Model),
            "dataset" => Ok(ArtifactKind::Dataset),
            "code" => Ok(ArtifactKind::Code),
            other => Err(Error::Validation(format!(
                "Unknown artifact kind '{other}', expected one of: model, dataset, code"
            ))),
        }
    }
}

/// Artifact entity — an immutable registry record
///
/// `(name, version)` is not required to be unique, across kinds or within
/// one; `id` alone identifies the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    pub id: String,
    pub kind: ArtifactKind,
    pub name: String,
    pub version: String,
    /// Opaque payload: raw bytes or a URI, caller's choice
    pub content: String,
    /// SHA-256 of `content`, computed once at creation
    pub digest: String,
    pub created_at: DateTime<Utc>,
}

/// Lightweight projection returned by name and regex search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    pub id: String,
    pub kind: ArtifactKind,
    pub name: String,
    pub version: String,
}

impl Artifact {
    /// Build a new artifact record.
    ///
    /// Fails with a validation error when `content` is empty; kind is
    /// already typed, so an unrecognized kind never reaches this point.
    pub fn new(
        id: String,
        kind: ArtifactKind,
        name: impl Into<String>,
        version: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self> {
        let content = content.into();
        if content.is_empty() {
            return Err(Error::Validation(
                "Artifact content must not be empty".to_string(),
            ));
        }

        let digest = content_digest(content.as_bytes());
        Ok(Self {
            id,
            kind,
            name: name.into(),
            version: version.into(),
            content,
            digest,
            created_at: Utc::now(),
        })
    }

    /// Metadata projection of this artifact
    pub fn metadata(&self) -> ArtifactMetadata {
        ArtifactMetadata {
            id: self.id.clone(),
            kind: self.kind,
            name: self.name.clone(),
            version: self.version.clone(),
        }
    }
}
