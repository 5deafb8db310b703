pub mod images;

pub use images::{ImageCache, ImageFetchError, ImageSource, ImageState};
