use std::io::Read;
use std::str;

use super::super::ImageReader;
use super::super::Pixel;
use super::super::RawImage;
use super::super::NUMBER_OF_COLOR_CHANNELS;
use crate::Error;

pub struct PPMImageReader<T: Read> {
    reader: T,
}

impl<T: Read> PPMImageReader<T> {
    pub fn new(reader: T) -> Self {
        Self { reader }
    }
}

impl<T: Read> ImageReader for PPMImageReader<T> {
    fn read_image(&mut self) -> crate::Result<RawImage> {
        let mut tokenizer = PPMTokenizer::new(&mut self.reader);
        let mut parser = PPMParser::new(&mut tokenizer);
        parser.parse_tokens()
    }
}

struct PPMTokenizer<'a, R: Read> {
    reader: &'a mut R,
    buffer: Vec<u8>,
}

impl<'a, R: Read> PPMTokenizer<'a, R> {
    pub fn new(reader: &'a mut R) -> Self {
        PPMTokenizer {
            reader,
            buffer: Vec::new(),
        }
    }
}

impl<R: Read> Iterator for PPMTokenizer<'_, R> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.clear();
        let mut byte = [0; 1];
        let mut in_comment = false;

        while self.reader.read(&mut byte).unwrap_or(0) > 0 {
            if in_comment {
                if byte[0] == b'\n' {
                    in_comment = false;
                }
                continue;
            }
            if byte[0] == b'#' {
                in_comment = true;
                continue;
            }
            if byte[0].is_ascii_whitespace() {
                if !self.buffer.is_empty() {
                    break;
                }
            } else {
                self.buffer.push(byte[0]);
            }
        }

        if self.buffer.is_empty() {
            return None;
        }

        let token = str::from_utf8(&self.buffer)
            .expect("Invalid UTF-8 sequence")
            .to_string();
        Some(token)
    }
}

const P3_HEADER_TOKEN_NAME: &str = "P3 Header";
const WIDTH_HEADER_TOKEN_NAME: &str = "Width Header";
const HEIGHT_HEADER_TOKEN_NAME: &str = "Height Header";
const MAX_VALUE_HEADER_TOKEN_NAME: &str = "Max Value Header";
const COLOR_COMPONENT_VALUE_TOKEN_NAME: &str = "Color Component Value";

/// Accumulates color component tokens until a full pixel is read.
struct ChannelAccumulator {
    buffer: [i64; NUMBER_OF_COLOR_CHANNELS],
    index: usize,
}

impl ChannelAccumulator {
    fn new() -> Self {
        Self {
            buffer: [i64::default(); NUMBER_OF_COLOR_CHANNELS],
            index: 0,
        }
    }

    fn push_color_component(&mut self, component: i64) {
        if self.is_complete() {
            return;
        }
        self.buffer[self.index] = component;
        self.index += 1;
    }

    fn is_complete(&self) -> bool {
        self.index == NUMBER_OF_COLOR_CHANNELS
    }

    fn is_empty(&self) -> bool {
        self.index == 0
    }

    fn take_pixel(&mut self) -> crate::Result<Pixel> {
        let pixel = Pixel::from_channels(&self.buffer[..self.index]);
        self.index = 0;
        pixel
    }
}

struct PPMParser<'a, T> {
    tokenizer: &'a mut T,
}

impl<'a, T> PPMParser<'a, T>
where
    T: Iterator<Item = String>,
{
    fn new(tokenizer: &'a mut T) -> Self {
        Self { tokenizer }
    }

    fn parse_tokens(&mut self) -> crate::Result<RawImage> {
        let header = self.parse_header()?;
        Self::check_header_version(&header)?;
        let width = self.parse_width()?;
        let height = self.parse_height()?;
        self.parse_max_value()?;
        let pixels = self.parse_all_pixels()?;
        Self::check_parsed_pixels_length_match_header_information(&pixels, width, height)?;
        Ok(Self::arrange_pixels_into_rows(pixels, width))
    }

    fn arrange_pixels_into_rows(pixels: Vec<Pixel>, width: u16) -> RawImage {
        if width == 0 {
            return RawImage::default();
        }
        let rows = pixels
            .chunks(width as usize)
            .map(|chunk| chunk.to_vec())
            .collect();
        RawImage::from_rows(rows)
    }

    fn check_parsed_pixels_length_match_header_information(
        pixels: &[Pixel],
        width: u16,
        height: u16,
    ) -> crate::Result<()> {
        let expected_number_of_pixels = width as usize * height as usize;
        if pixels.len() != expected_number_of_pixels {
            return Err(Error::MismatchOfSizeBetweenHeaderAndValues);
        }
        Ok(())
    }

    fn check_header_version(header: &str) -> crate::Result<()> {
        if header != "P3" {
            return Err(Error::PPMFileDoesNotContainRequiredToken(
                P3_HEADER_TOKEN_NAME,
            ));
        }
        Ok(())
    }

    fn parse_header(&mut self) -> crate::Result<String> {
        self.tokenizer
            .next()
            .ok_or(Error::PPMFileDoesNotContainRequiredToken(
                P3_HEADER_TOKEN_NAME,
            ))
    }

    fn parse_width(&mut self) -> crate::Result<u16> {
        self.tokenizer
            .next()
            .ok_or(Error::PPMFileDoesNotContainRequiredToken(
                WIDTH_HEADER_TOKEN_NAME,
            ))?
            .parse()
            .map_err(|_| Error::ParsingOfTokenFailed(WIDTH_HEADER_TOKEN_NAME))
    }

    fn parse_height(&mut self) -> crate::Result<u16> {
        self.tokenizer
            .next()
            .ok_or(Error::PPMFileDoesNotContainRequiredToken(
                HEIGHT_HEADER_TOKEN_NAME,
            ))?
            .parse()
            .map_err(|_| Error::ParsingOfTokenFailed(HEIGHT_HEADER_TOKEN_NAME))
    }

    fn parse_max_value(&mut self) -> crate::Result<u16> {
        self.tokenizer
            .next()
            .ok_or(Error::PPMFileDoesNotContainRequiredToken(
                MAX_VALUE_HEADER_TOKEN_NAME,
            ))?
            .parse()
            .map_err(|_| Error::ParsingOfTokenFailed(MAX_VALUE_HEADER_TOKEN_NAME))
    }

    fn parse_all_pixels(&mut self) -> crate::Result<Vec<Pixel>> {
        let mut accumulator = ChannelAccumulator::new();
        let mut pixels = Vec::new();
        for token in self.tokenizer.by_ref() {
            let component = Self::parse_color_value(&token)?;
            accumulator.push_color_component(component);
            if accumulator.is_complete() {
                pixels.push(accumulator.take_pixel()?);
            }
        }
        Self::check_pixel_was_complete(&accumulator)?;
        Ok(pixels)
    }

    fn check_pixel_was_complete(accumulator: &ChannelAccumulator) -> crate::Result<()> {
        if !accumulator.is_empty() {
            return Err(Error::IncompletePixelParsed(accumulator.index));
        }
        Ok(())
    }

    fn parse_color_value(token: &str) -> crate::Result<i64> {
        token
            .parse()
            .map_err(|_| Error::ParsingOfTokenFailed(COLOR_COMPONENT_VALUE_TOKEN_NAME))
    }
}
