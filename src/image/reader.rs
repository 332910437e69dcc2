use std::io::Cursor;
use std::path::{Path, PathBuf};

use ::image::{ImageError, ImageReader as FormatGuessingReader};

use super::{Image, ImageReader};
use crate::error::Error;

/// Decodes any format the `image` crate recognises from its content.
pub struct FileImageReader {
    path: PathBuf,
}

impl FileImageReader {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

impl ImageReader for FileImageReader {
    fn read_image(&mut self) -> crate::Result<Image> {
        if !self.path.is_file() {
            return Err(Error::InputFileNotFound(self.display_path()));
        }
        let decoded = FormatGuessingReader::open(&self.path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(ImageError::IoError)
            .and_then(|reader| reader.decode())
            .map_err(|e| Error::DecodeFailed(self.display_path(), e))?;
        log::info!(
            "decoded '{}' ({}x{}, {:?})",
            self.display_path(),
            decoded.width(),
            decoded.height(),
            decoded.color()
        );
        Ok(Image::from(decoded))
    }
}

pub struct MemoryImageReader<'a> {
    bytes: &'a [u8],
}

impl<'a> MemoryImageReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }
}

impl ImageReader for MemoryImageReader<'_> {
    fn read_image(&mut self) -> crate::Result<Image> {
        let decoded = FormatGuessingReader::new(Cursor::new(self.bytes))
            .with_guessed_format()
            .map_err(ImageError::IoError)
            .and_then(|reader| reader.decode())
            .map_err(|e| Error::DecodeFailed(String::from("<memory>"), e))?;
        Ok(Image::from(decoded))
    }
}
