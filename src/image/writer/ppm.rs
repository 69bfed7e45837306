use std::io::Write;

use super::super::ImageWriter;
use super::super::Pixel;
use super::super::RawImage;
use crate::Error;

const PPM_MAGIC_NUMBER: &str = "P3";
const PPM_MAX_COLOR_VALUE: i64 = 255;

/// Writes raw image data as a plain (ASCII) PPM file. The inverse of the
/// PPM reader for every image the reader produces; channel values outside
/// [0, 255] are clamped into range on the way out.
pub struct PPMImageWriter<T: Write> {
    writer: T,
}

impl<T: Write> PPMImageWriter<T> {
    pub fn new(writer: T) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, image: &RawImage) -> crate::Result<()> {
        writeln!(self.writer, "{}", PPM_MAGIC_NUMBER)
            .and_then(|_| writeln!(self.writer, "{} {}", image.width(), image.height()))
            .and_then(|_| writeln!(self.writer, "{}", PPM_MAX_COLOR_VALUE))
            .map_err(|_| Error::FailedToWriteImageHeader)
    }

    fn write_rows(&mut self, image: &RawImage) -> crate::Result<()> {
        for row in image.rows() {
            self.write_row(row)?;
        }
        Ok(())
    }

    fn write_row(&mut self, row: &[Pixel]) -> crate::Result<()> {
        let components: Vec<String> = row
            .iter()
            .flat_map(|pixel| pixel.channels().iter())
            .map(|&value| Self::clamp_color_value(value).to_string())
            .collect();
        writeln!(self.writer, "{}", components.join(" "))
            .map_err(|_| Error::FailedToWriteImageData)
    }

    fn clamp_color_value(value: i64) -> i64 {
        value.clamp(0, PPM_MAX_COLOR_VALUE)
    }
}

impl<T: Write> ImageWriter for PPMImageWriter<T> {
    fn write_image(&mut self, image: &RawImage) -> crate::Result<()> {
        self.write_header(image)?;
        self.write_rows(image)?;
        self.writer
            .flush()
            .map_err(|_| Error::FailedToWriteImageData)
    }
}
