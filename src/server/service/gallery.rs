//! Gallery images from Cloudinary, cached in-process.
//!
//! The image list changes rarely and the Cloudinary search API is rate limited, so the
//! last result is kept for ten minutes. Admins can drop it early through
//! `POST /api/admin/gallery/refresh`.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dioxus_logger::tracing;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::{
    model::gallery::GalleryImageDto,
    server::{config::CloudinaryConfig, error::AppError},
};

/// Time-to-live for the cached image list.
const GALLERY_TTL: Duration = Duration::from_secs(10 * 60);
const MAX_RESULTS: u32 = 400;

#[derive(Serialize)]
struct SearchRequest<'a> {
    expression: String,
    sort_by: [SortBy<'a>; 1],
    max_results: u32,
}

#[derive(Serialize)]
struct SortBy<'a> {
    public_id: &'a str,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    resources: Vec<SearchResource>,
}

#[derive(Deserialize)]
struct SearchResource {
    public_id: String,
    format: String,
    width: u32,
    height: u32,
}

#[derive(Clone)]
struct CachedImages {
    images: Vec<GalleryImageDto>,
    expires_at: Instant,
}

/// Shared, expiring copy of the last gallery search.
#[derive(Clone)]
pub struct GalleryCache {
    entry: Arc<RwLock<Option<CachedImages>>>,
    ttl: Duration,
}

impl GalleryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entry: Arc::new(RwLock::new(None)),
            ttl,
        }
    }

    /// Returns the cached images if they have not expired.
    pub async fn get(&self) -> Option<Vec<GalleryImageDto>> {
        let entry = self.entry.read().await;

        entry
            .as_ref()
            .filter(|cached| Instant::now() < cached.expires_at)
            .map(|cached| cached.images.clone())
    }

    /// Replaces the cached images and restarts the TTL.
    pub async fn store(&self, images: Vec<GalleryImageDto>) {
        *self.entry.write().await = Some(CachedImages {
            images,
            expires_at: Instant::now() + self.ttl,
        });
    }

    /// Drops the cached images so the next read fetches again.
    pub async fn invalidate(&self) {
        *self.entry.write().await = None;
    }
}

impl Default for GalleryCache {
    fn default() -> Self {
        Self::new(GALLERY_TTL)
    }
}

#[derive(Clone)]
pub struct GalleryService {
    http_client: reqwest::Client,
    config: Option<CloudinaryConfig>,
    cache: GalleryCache,
}

impl GalleryService {
    /// Creates a new GalleryService instance.
    ///
    /// # Arguments
    /// - `http_client` - Shared outbound HTTP client
    /// - `config` - Cloudinary credentials, `None` to serve an empty gallery
    /// - `cache` - Cache shared by every clone of the service
    pub fn new(
        http_client: reqwest::Client,
        config: Option<CloudinaryConfig>,
        cache: GalleryCache,
    ) -> Self {
        Self {
            http_client,
            config,
            cache,
        }
    }

    /// Returns the gallery images, fetching from Cloudinary when the cache is stale.
    ///
    /// # Returns
    /// - `Ok(Vec<GalleryImageDto>)` - Images newest public id first, empty when
    ///   Cloudinary is not configured
    /// - `Err(AppError)` - Cloudinary request failed
    pub async fn images(&self) -> Result<Vec<GalleryImageDto>, AppError> {
        let Some(config) = self.config.as_ref() else {
            return Ok(Vec::new());
        };

        if let Some(images) = self.cache.get().await {
            return Ok(images);
        }

        let images = self.fetch(config).await?;
        self.cache.store(images.clone()).await;

        Ok(images)
    }

    /// Drops the cached image list.
    pub async fn invalidate(&self) {
        self.cache.invalidate().await;
        tracing::info!("Gallery cache invalidated");
    }

    async fn fetch(&self, config: &CloudinaryConfig) -> Result<Vec<GalleryImageDto>, AppError> {
        let url = format!(
            "https://api.cloudinary.com/v1_1/{}/resources/search",
            config.cloud_name
        );

        let response = self
            .http_client
            .post(&url)
            .basic_auth(&config.api_key, Some(&config.api_secret))
            .json(&SearchRequest {
                expression: format!("folder:{}/*", config.folder),
                sort_by: [SortBy { public_id: "desc" }],
                max_results: MAX_RESULTS,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::InternalError(format!(
                "Cloudinary search failed ({}): {}",
                status, error_text
            )));
        }

        let body: SearchResponse = response.json().await?;

        tracing::info!("Fetched {} gallery images", body.resources.len());

        Ok(body
            .resources
            .into_iter()
            .map(|resource| to_image(&config.cloud_name, resource))
            .collect())
    }
}

fn to_image(cloud_name: &str, resource: SearchResource) -> GalleryImageDto {
    GalleryImageDto {
        url: format!(
            "https://res.cloudinary.com/{}/image/upload/{}.{}",
            cloud_name, resource.public_id, resource.format
        ),
        public_id: resource.public_id,
        width: resource.width,
        height: resource.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(public_id: &str) -> GalleryImageDto {
        GalleryImageDto {
            public_id: public_id.to_string(),
            url: format!("https://res.cloudinary.com/demo/image/upload/{}.jpg", public_id),
            width: 800,
            height: 600,
        }
    }

    /// Expected: stored images are served until invalidated
    #[tokio::test]
    async fn cache_serves_until_invalidated() {
        let cache = GalleryCache::default();
        assert!(cache.get().await.is_none());

        cache.store(vec![image("gallery/b"), image("gallery/a")]).await;
        let cached = cache.get().await.unwrap();
        assert_eq!(cached.len(), 2);
        assert_eq!(cached[0].public_id, "gallery/b");

        cache.invalidate().await;
        assert!(cache.get().await.is_none());
    }

    /// Expected: an entry past its TTL is treated as missing
    #[tokio::test]
    async fn cache_expires_entries() {
        let cache = GalleryCache::new(Duration::ZERO);
        cache.store(vec![image("gallery/a")]).await;

        assert!(cache.get().await.is_none());
    }

    /// Expected: clones share one cache
    #[tokio::test]
    async fn clones_share_cache() {
        let cache = GalleryCache::default();
        let clone = cache.clone();

        clone.store(vec![image("gallery/a")]).await;
        assert!(cache.get().await.is_some());
    }

    /// Expected: an unconfigured gallery is empty without any request
    #[tokio::test]
    async fn unconfigured_gallery_is_empty() {
        let service = GalleryService::new(reqwest::Client::new(), None, GalleryCache::default());

        let images = service.images().await.unwrap();
        assert!(images.is_empty());
    }

    /// Expected: delivery URLs combine cloud name, public id and format
    #[test]
    fn builds_delivery_url() {
        let image = to_image(
            "demo",
            SearchResource {
                public_id: "gallery/meetup-01".to_string(),
                format: "png".to_string(),
                width: 1200,
                height: 800,
            },
        );

        assert_eq!(
            image.url,
            "https://res.cloudinary.com/demo/image/upload/gallery/meetup-01.png"
        );
    }
}
