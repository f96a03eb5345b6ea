//! Seam for the external image host that stores product photos.

mod error;
mod traits;

pub use error::{AssetError, Result};
pub use traits::AssetHost;
