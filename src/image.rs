use clap::builder::PossibleValue;
use clap::ValueEnum;

use crate::error::Error;
use crate::Arguments;

pub mod compress;
pub mod merge;
pub mod pixel_ops;
pub mod reader;
pub mod transformer;
pub mod writer;

pub const NUMBER_OF_COLOR_CHANNELS: usize = 3;

/// A single RGB dot of raw image data. Channels are conventionally in
/// [0, 255], but the transforms accept arbitrary integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pixel {
    channels: [i64; NUMBER_OF_COLOR_CHANNELS],
}

impl Pixel {
    pub const WHITE: Pixel = Pixel {
        channels: [255, 255, 255],
    };

    pub fn new(red: i64, green: i64, blue: i64) -> Self {
        Self {
            channels: [red, green, blue],
        }
    }

    /// Builds a pixel from a channel slice read at an input boundary.
    /// The slice must hold exactly the red, green and blue components.
    pub fn from_channels(channels: &[i64]) -> crate::Result<Self> {
        match *channels {
            [red, green, blue] => Ok(Self::new(red, green, blue)),
            _ => Err(Error::MalformedPixel(channels.len())),
        }
    }

    pub fn red(&self) -> i64 {
        self.channels[0]
    }

    pub fn green(&self) -> i64 {
        self.channels[1]
    }

    pub fn blue(&self) -> i64 {
        self.channels[2]
    }

    pub fn channels(&self) -> &[i64; NUMBER_OF_COLOR_CHANNELS] {
        &self.channels
    }
}

/// Raw image data as rows of pixels. Every row carries its own length, so
/// images whose rows differ in length are representable; merge relies on
/// that when it probes cells of two differently shaped inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawImage {
    rows: Vec<Vec<Pixel>>,
}

impl RawImage {
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Self {
        Self { rows }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Nominal width, measured as the length of the first row.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn rows(&self) -> &[Vec<Pixel>] {
        &self.rows
    }

    /// Bounds-checked cell lookup. Checks the row index against the row
    /// count and the column index against that specific row's length.
    pub fn pixel_at(&self, row_index: usize, column_index: usize) -> Option<&Pixel> {
        self.rows
            .get(row_index)
            .and_then(|row| row.get(column_index))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operation {
    Mirror,
    Grey,
    Invert,
    Merge,
    Compress,
}

impl ValueEnum for Operation {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Mirror,
            Self::Grey,
            Self::Invert,
            Self::Merge,
            Self::Compress,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Mirror => Some(PossibleValue::new("mirror")),
            Self::Grey => Some(PossibleValue::new("grey")),
            Self::Invert => Some(PossibleValue::new("invert")),
            Self::Merge => Some(PossibleValue::new("merge")),
            Self::Compress => Some(PossibleValue::new("compress")),
        }
    }
}

pub struct TransformationOptions {
    pub operations: Vec<Operation>,
}

impl From<&Arguments> for TransformationOptions {
    fn from(value: &Arguments) -> Self {
        Self {
            operations: value.operations.clone(),
        }
    }
}

pub trait ImageReader {
    fn read_image(&mut self) -> crate::Result<RawImage>;
}

pub trait ImageWriter {
    fn write_image(&mut self, image: &RawImage) -> crate::Result<()>;
}
