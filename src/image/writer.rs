use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use ::image::codecs::png::PngEncoder;
use ::image::{ExtendedColorType, ImageEncoder, ImageError};

use super::{Image, ImageWriter};
use crate::error::Error;

pub struct PngImageWriter<T: Write> {
    writer: T,
    name: String,
}

impl<T: Write> PngImageWriter<T> {
    pub fn new(writer: T, name: &str) -> Self {
        Self {
            writer,
            name: name.to_owned(),
        }
    }
}

impl<T: Write> ImageWriter for PngImageWriter<T> {
    fn write_image(&mut self, image: &Image) -> crate::Result<()> {
        let bytes: Vec<u8> = image
            .pixels()
            .iter()
            .flat_map(|&pixel| <[u8; 4]>::from(pixel))
            .collect();
        let encoder = PngEncoder::new(&mut self.writer);
        encoder
            .write_image(
                &bytes,
                image.width(),
                image.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(|e| Error::FailedToWriteImage(self.name.clone(), e))?;
        self.writer
            .flush()
            .map_err(|e| Error::FailedToWriteImage(self.name.clone(), ImageError::IoError(e)))
    }
}

pub fn create_output_directory(path: &Path) -> crate::Result<()> {
    fs::create_dir_all(path)
        .map_err(|e| Error::UnableToCreateOutputDirectory(path.display().to_string(), e))
}

pub fn save_png(path: &Path, image: &Image) -> crate::Result<()> {
    let name = path.display().to_string();
    let file = File::create(path)
        .map_err(|e| Error::FailedToWriteImage(name.clone(), ImageError::IoError(e)))?;
    PngImageWriter::new(BufWriter::new(file), &name).write_image(image)?;
    log::info!("wrote {} ({})", name, image.size());
    Ok(())
}

#[cfg(test)]
mod test {
    use super::PngImageWriter;
    use crate::color::Rgba;
    use crate::image::{Image, ImageWriter};

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn write_png_signature() {
        let image = Image::new(2, 2, vec![Rgba::opaque_gray(42); 4]).unwrap();
        let mut buffer = Vec::new();
        PngImageWriter::new(&mut buffer, "buffer")
            .write_image(&image)
            .unwrap();
        assert_eq!(buffer[..8], PNG_SIGNATURE);
    }
}
