use std::env::args_os;

use rawpix::{transform_ppm_image, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match transform_ppm_image(&arguments) {
        Ok(_) => println!("Transformation successful"),
        Err(e) => eprintln!("Transformation failed because of: {}", e),
    }
}
