use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, gallery::GalleryDto},
    server::{error::AppError, state::AppState},
};

/// Tag for grouping gallery endpoints in OpenAPI documentation
pub static GALLERY_TAG: &str = "gallery";

/// List gallery images.
///
/// Served from the in-process cache while it is fresh. Empty when Cloudinary is
/// not configured.
#[utoipa::path(
    get,
    path = "/api/gallery",
    tag = GALLERY_TAG,
    responses(
        (status = 200, description = "Gallery images", body = GalleryDto),
        (status = 500, description = "Cloudinary request failed", body = ErrorDto)
    ),
)]
pub async fn get_gallery(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let images = state.gallery.images().await?;

    Ok((StatusCode::OK, Json(GalleryDto { images })))
}
