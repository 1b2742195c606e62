//! Optional decorative background
//!
//! The background image is cosmetic. Any failure to load it falls back to a
//! solid fill and is never fatal.

use std::path::{Path, PathBuf};

use image::ImageReader;
use thiserror::Error;

use crate::render::Rgb;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// What the frontend paints behind the balls
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    Image {
        width: u32,
        height: u32,
        /// Tightly packed RGBA8
        rgba: Vec<u8>,
    },
    Solid(Rgb),
}

impl Default for Background {
    fn default() -> Self {
        Background::Solid(Rgb::SLATE_GRAY)
    }
}

impl Background {
    /// Load the image at `path`, or fall back to slate gray
    pub fn load(path: impl AsRef<Path>) -> Self {
        match Self::try_load(path) {
            Ok(background) => background,
            Err(err) => {
                log::warn!("{err}; using solid background");
                Self::default()
            }
        }
    }

    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let reader = ImageReader::open(path).map_err(|source| AssetError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let decoded = reader.decode().map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let image = decoded.to_rgba8();
        log::info!(
            "Loaded background {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(Background::Image {
            width: image.width(),
            height: image.height(),
            rgba: image.into_raw(),
        })
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Background::Image { .. })
    }

    pub fn describe(&self) -> String {
        match self {
            Background::Image { width, height, .. } => format!("image {width}x{height}"),
            Background::Solid(Rgb(r, g, b)) => format!("solid #{r:02x}{g:02x}{b:02x}"),
        }
    }
}
