use crate::error::PhotoError;
use crate::host::RelayHost;
use crate::http::AppState;
use axum::Json;
use axum::extract::{Multipart, State};
use camrelay_core::PhotoEvent;
use serde_json::{Value, json};
use tracing::{debug, info, warn};

const PHOTO_FIELD: &str = "photo";

/// `POST /upload-photo`: stores the `photo` field and announces it to admins.
pub async fn upload_photo<H: RelayHost>(
    State(state): State<AppState<H>>,
    mut multipart: Multipart,
) -> Result<Json<Value>, PhotoError> {
    let mut data = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(PHOTO_FIELD) {
            data = Some(field.bytes().await?);
            break;
        }
    }
    let data = data.ok_or(PhotoError::Missing)?;

    let photo = state.photos.store(data).await?;
    info!("Stored photo {} ({} bytes)", photo.filename, photo.size);

    match state.host.publish_photo(photo.clone()).await {
        Ok(admins) => debug!("Announced {} to {} admins", photo.filename, admins),
        Err(e) => warn!("Failed to announce {}: {}", photo.filename, e),
    }

    Ok(Json(json!({ "success": true, "photo": photo })))
}

/// `GET /api/photos`
pub async fn list_photos<H: RelayHost>(
    State(state): State<AppState<H>>,
) -> Result<Json<Vec<PhotoEvent>>, PhotoError> {
    Ok(Json(state.photos.list().await?))
}
