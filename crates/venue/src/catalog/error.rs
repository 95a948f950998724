use thiserror::Error;

/// Reasons a catalog document is rejected.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog has no floors")]
    Empty,
    #[error("floor id must be positive")]
    ZeroFloorId,
    #[error("duplicate floor id {0}")]
    DuplicateFloor(u32),
    #[error("floors must be listed in ascending id order ({previous} before {next})")]
    FloorOrder { previous: u32, next: u32 },
    #[error("duplicate zone id '{0}'")]
    DuplicateZone(String),
    #[error("zone '{zone}' has non-positive area {area}")]
    InvalidArea { zone: String, area: f32 },
    #[error("'{owner}' has invalid colour '{color}'")]
    InvalidColor { owner: String, color: String },
}
