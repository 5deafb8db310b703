//! Image handles for carousel items, brand logos and product cards.
//!
//! Locators that are `http(s)` URLs are fetched once with `reqwest`; anything
//! else is treated as a path on disk and handed to iced directly.

use std::collections::HashMap;
use std::path::PathBuf;

use iced::widget::image;
use thiserror::Error;
use url::Url;

#[derive(Debug, Clone)]
pub enum ImageState {
    Loading,
    Loaded(image::Handle),
    Failed,
}

/// Where an image locator points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Remote(Url),
    Local(PathBuf),
}

impl ImageSource {
    pub fn parse(locator: &str) -> Self {
        match Url::parse(locator) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {
                ImageSource::Remote(url)
            }
            _ => ImageSource::Local(PathBuf::from(locator)),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, ImageSource::Remote(_))
    }
}

#[derive(Debug, Error)]
pub enum ImageFetchError {
    #[error("failed to fetch image {url}: {source}")]
    Http {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to fetch image {url}: {status}")]
    Status {
        url: Url,
        status: reqwest::StatusCode,
    },
}

/// Handles keyed by the locator string they were requested with.
#[derive(Debug, Clone, Default)]
pub struct ImageCache {
    entries: HashMap<String, ImageState>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&ImageState> {
        self.entries.get(key)
    }

    pub fn handle(&self, key: &str) -> Option<&image::Handle> {
        match self.entries.get(key) {
            Some(ImageState::Loaded(handle)) => Some(handle),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register `locator` and report the remote URL that still needs fetching.
    ///
    /// Local paths resolve immediately. Locators already known are skipped so
    /// each remote image is fetched at most once.
    pub fn request(&mut self, locator: &str) -> Option<Url> {
        if self.entries.contains_key(locator) {
            return None;
        }

        match ImageSource::parse(locator) {
            ImageSource::Local(path) => {
                self.entries.insert(
                    locator.to_string(),
                    ImageState::Loaded(image::Handle::from_path(path)),
                );
                None
            }
            ImageSource::Remote(url) => {
                self.entries
                    .insert(locator.to_string(), ImageState::Loading);
                Some(url)
            }
        }
    }

    pub fn set_loaded(&mut self, key: String, bytes: Vec<u8>) {
        self.entries
            .insert(key, ImageState::Loaded(image::Handle::from_bytes(bytes)));
    }

    pub fn set_failed(&mut self, key: String) {
        self.entries.insert(key, ImageState::Failed);
    }
}

/// Fetch an image from a URL
pub async fn fetch_image_from_url(url: Url) -> Result<Vec<u8>, ImageFetchError> {
    log::info!("Fetching image from URL: {}", url);

    let response =
        reqwest::get(url.clone())
            .await
            .map_err(|source| ImageFetchError::Http {
                url: url.clone(),
                source,
            })?;

    let status = response.status();
    if !status.is_success() {
        log::warn!("Failed to fetch image: {} - {}", url, status);
        return Err(ImageFetchError::Status { url, status });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|source| ImageFetchError::Http {
            url: url.clone(),
            source,
        })?;
    Ok(bytes.to_vec())
}

/// Fetch an image and return it with its cache key
pub async fn fetch_image_with_key(
    key: String,
    url: Url,
) -> (String, Result<Vec<u8>, String>) {
    let result = fetch_image_from_url(url).await.map_err(|e| e.to_string());
    (key, result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_locators_are_remote() {
        assert!(ImageSource::parse("https://cdn.example.com/pack.png").is_remote());
        assert!(ImageSource::parse("http://cdn.example.com/pack.png").is_remote());
        assert_eq!(
            ImageSource::parse("assets/brands/surya-pack-1.png"),
            ImageSource::Local(PathBuf::from("assets/brands/surya-pack-1.png"))
        );
        assert!(!ImageSource::parse("file:///tmp/pack.png").is_remote());
    }

    #[test]
    fn remote_images_are_requested_once() {
        let mut cache = ImageCache::new();
        let locator = "https://cdn.example.com/pack.png";

        assert!(cache.request(locator).is_some());
        assert!(matches!(cache.get(locator), Some(ImageState::Loading)));
        assert!(cache.request(locator).is_none());

        cache.set_failed(locator.to_string());
        assert!(cache.request(locator).is_none());
        assert!(cache.handle(locator).is_none());
    }

    #[test]
    fn local_images_resolve_without_fetching() {
        let mut cache = ImageCache::new();
        assert!(cache.request("assets/logo.png").is_none());
        assert!(cache.handle("assets/logo.png").is_some());
        assert_eq!(cache.len(), 1);
    }
}
