use std::{
    fs::{File, OpenOptions},
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

pub use cli::CLIParser;
use error::Error;
use image::{
    reader::ppm::PPMImageReader, transformer::RawImageTransformer, writer::ppm::PPMImageWriter,
    ImageReader, ImageWriter, Operation, RawImage, TransformationOptions,
};

mod cli;
mod error;
pub mod image;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: PathBuf,
    output_file: PathBuf,
    operations: Vec<Operation>,
    merge_file: Option<PathBuf>,
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.to_str().unwrap().to_owned(), e)
    })
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| {
            Error::UnableToOpenOutputFileForWriting(file_path.to_str().unwrap().to_owned(), e)
        })
}

fn read_ppm_image(file_path: &Path) -> Result<RawImage> {
    let input_file = open_input_file(file_path)?;
    let mut reader = PPMImageReader::new(BufReader::new(&input_file));
    reader.read_image()
}

pub fn transform_ppm_image(arguments: &Arguments) -> Result<()> {
    let image = read_ppm_image(&arguments.input_file)?;
    log::info!(
        "read input image of {}x{} pixels",
        image.width(),
        image.height()
    );
    let overlay = match &arguments.merge_file {
        Some(merge_file) => Some(read_ppm_image(merge_file)?),
        None => None,
    };
    let transformation_options = TransformationOptions::from(arguments);
    let transformer = match &overlay {
        Some(overlay_image) => {
            RawImageTransformer::with_overlay(&transformation_options, overlay_image)
        }
        None => RawImageTransformer::new(&transformation_options),
    };
    let output_image = transformer.transform(image)?;
    log::info!(
        "writing output image of {}x{} pixels",
        output_image.width(),
        output_image.height()
    );
    let output_file = open_output_file(&arguments.output_file)?;
    let mut writer = PPMImageWriter::new(BufWriter::new(&output_file));
    writer.write_image(&output_image)
}
