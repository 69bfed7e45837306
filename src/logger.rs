use crate::image::{Operation, RawImage};

#[ctor::ctor]
fn init() {
    use log4rs;
    log4rs::init_file("log4rs.yaml", Default::default()).unwrap();
}

pub fn log_applied_operation(operation: &Operation, image: &RawImage) {
    log::debug!(
        "applied {:?}, image is now {}x{} pixels",
        operation,
        image.width(),
        image.height()
    );
}
