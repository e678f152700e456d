//! Format conversion for non-canonical images.
//!
//! A convertible image is decoded, re-encoded under its mapped canonical
//! extension, and the original is deleted. The new file is written before
//! the original is removed so a failed encode never loses data.

use image::{DynamicImage, ImageFormat};
use std::path::Path;

use crate::config::{split_name, FormatTable};
use crate::error::FileError;

/// Convert a non-canonical image to its mapped canonical format.
///
/// Returns the new file name on success. Decode and encode failures
/// propagate; the caller contains them at the per-file boundary.
pub fn convert(dir: &Path, name: &str, table: &FormatTable) -> Result<String, FileError> {
    let (stem, extension) = split_name(name);
    let path = dir.join(name);

    let target = table
        .conversion_target(extension)
        .ok_or_else(|| FileError::NoConversionTarget {
            path: path.clone(),
            extension: extension.to_string(),
        })?;

    let image = decode(&path)?;

    let new_name = format!("{stem}{target}");
    let new_path = dir.join(&new_name);
    encode(&image, &new_path, target)?;

    std::fs::remove_file(&path).map_err(|source| FileError::Remove {
        path: path.clone(),
        source,
    })?;

    tracing::info!("Converted {} to format {}", name, target);
    Ok(new_name)
}

/// Decode an image file, detecting the format from its content.
fn decode(path: &Path) -> Result<DynamicImage, FileError> {
    let reader = image::ImageReader::open(path)
        .map_err(|e| FileError::Decode {
            path: path.to_path_buf(),
            message: format!("Cannot open file: {e}"),
        })?
        .with_guessed_format()
        .map_err(|e| FileError::Decode {
            path: path.to_path_buf(),
            message: format!("Cannot detect image format: {e}"),
        })?;

    reader.decode().map_err(|e| FileError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Encode an image under the given canonical extension.
fn encode(image: &DynamicImage, path: &Path, extension: &str) -> Result<(), FileError> {
    let format = ImageFormat::from_extension(extension.trim_start_matches('.')).ok_or_else(
        || FileError::Encode {
            path: path.to_path_buf(),
            message: format!("No encoder for extension {extension}"),
        },
    )?;

    // JPEG has no alpha channel
    if format == ImageFormat::Jpeg {
        let flattened = DynamicImage::ImageRgb8(image.to_rgb8());
        return flattened
            .save_with_format(path, format)
            .map_err(|e| FileError::Encode {
                path: path.to_path_buf(),
                message: e.to_string(),
            });
    }

    image
        .save_with_format(path, format)
        .map_err(|e| FileError::Encode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}
