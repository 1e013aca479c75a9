use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::gallery::GalleryDto,
};

pub async fn get_gallery() -> Result<GalleryDto, ApiError> {
    let request = get("/api/gallery");
    let response = send_request(request).await?;
    parse_response(response).await
}
