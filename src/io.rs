use image::codecs::png::PngEncoder;
use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, GrayImage, ImageEncoder, ImageError, ImageReader, RgbImage};
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;
use crate::detection::preprocessing;
use crate::error::{MapError, Result};

/// Load a map as a single-channel image. Color images are converted to luma.
pub fn load_map(path: &Path) -> Result<GrayImage> {
    let reader = match ImageReader::open(path) {
        Ok(reader) => reader,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(MapError::InputNotFound { path: path.to_path_buf() });
        }
        Err(e) => return Err(unreadable(path, ImageError::IoError(e))),
    };

    let img = reader
        .with_guessed_format()
        .map_err(|e| unreadable(path, ImageError::IoError(e)))?
        .decode()
        .map_err(|e| unreadable(path, e))?;

    Ok(preprocessing::to_grayscale(&img))
}

/// Write a binary (P5) portable graymap
pub fn save_map(map: &GrayImage, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    PnmEncoder::new(&mut writer)
        .with_subtype(PnmSubtype::Graymap(SampleEncoding::Binary))
        .write_image(map.as_raw(), map.width(), map.height(), ExtendedColorType::L8)
        .map_err(|source| MapError::Write { path: path.to_path_buf(), source })?;
    writer.flush()?;
    Ok(())
}

/// Write an RGB image as PNG
pub fn save_debug(img: &RgbImage, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    PngEncoder::new(&mut writer)
        .write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgb8)
        .map_err(|source| MapError::Write { path: path.to_path_buf(), source })?;
    writer.flush()?;
    Ok(())
}

fn unreadable(path: &Path, source: ImageError) -> MapError {
    MapError::Unreadable { path: path.to_path_buf(), source }
}
