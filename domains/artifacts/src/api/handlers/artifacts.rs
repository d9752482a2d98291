//! Artifact management API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use depot_common::{Error, Pagination, RegistryToken, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::middleware::ArtifactsState;
use crate::domain::entities::{Artifact, ArtifactKind, ArtifactMetadata};

/// Request for creating an artifact
#[derive(Debug, Deserialize, Validate)]
pub struct CreateArtifactRequest {
    /// One of "model", "dataset", "code"
    #[validate(length(min = 1))]
    pub kind: String,

    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(min = 1, max = 100))]
    pub version: String,

    /// Opaque payload (raw bytes or a URI); must not be empty
    #[validate(length(min = 1))]
    pub content: String,
}

/// Request for regex search over artifact names
#[derive(Debug, Deserialize, Validate)]
pub struct ArtifactRegexRequest {
    #[validate(length(min = 1, max = 500))]
    pub regex: String,
}

/// Artifact response DTO
#[derive(Debug, Serialize)]
pub struct ArtifactResponse {
    pub id: String,
    pub kind: ArtifactKind,
    pub name: String,
    pub version: String,
    pub content: String,
    pub digest: String,
    pub created_at: DateTime<Utc>,
}

impl From<Artifact> for ArtifactResponse {
    fn from(a: Artifact) -> Self {
        Self {
            id: a.id,
            kind: a.kind,
            name: a.name,
            version: a.version,
            content: a.content,
            digest: a.digest,
            created_at: a.created_at,
        }
    }
}

/// Create an artifact. Requires a registry token (presence only).
pub async fn create_artifact(
    RegistryToken(_token): RegistryToken,
    State(state): State<ArtifactsState>,
    ValidatedJson(req): ValidatedJson<CreateArtifactRequest>,
) -> Result<(StatusCode, Json<ArtifactResponse>)> {
    let kind: ArtifactKind = req.kind.parse()?;
    let artifact = state
        .store
        .create(kind, &req.name, &req.version, &req.content)?;
    Ok((StatusCode::CREATED, Json(artifact.into())))
}

/// Get a single artifact by ID
pub async fn get_artifact(
    State(state): State<ArtifactsState>,
    Path(id): Path<String>,
) -> Result<Json<ArtifactResponse>> {
    let artifact = state.store.get(&id)?;
    Ok(Json(artifact.into()))
}

/// List artifacts in insertion order, paginated
pub async fn list_artifacts(
    State(state): State<ArtifactsState>,
    Query(pagination): Query<Pagination>,
) -> Json<Vec<ArtifactResponse>> {
    let offset = pagination.offset() as usize;
    let limit = pagination.limit_or(state.page_size) as usize;
    let artifacts = state.store.list_page(offset, limit);
    Json(artifacts.into_iter().map(Into::into).collect())
}

/// List metadata for artifacts with this exact name
pub async fn list_artifacts_by_name(
    State(state): State<ArtifactsState>,
    Path(name): Path<String>,
) -> Json<Vec<ArtifactMetadata>> {
    Json(state.store.find_by_name(&name))
}

/// Search artifact names by regular expression
pub async fn search_artifacts_by_regex(
    State(state): State<ArtifactsState>,
    ValidatedJson(req): ValidatedJson<ArtifactRegexRequest>,
) -> Result<Json<Vec<ArtifactMetadata>>> {
    let pattern = regex::Regex::new(&req.regex)
        .map_err(|e| Error::Validation(format!("Invalid regex: {e}")))?;
    Ok(Json(state.store.search_names(&pattern)))
}
