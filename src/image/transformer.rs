use super::{Operation, RawImage, TransformationOptions};
use crate::error::Error;
use crate::logger;
use crate::Result;

pub struct RawImageTransformer<'a> {
    options: &'a TransformationOptions,
    overlay: Option<&'a RawImage>,
}

impl<'a> RawImageTransformer<'a> {
    pub fn new(options: &'a TransformationOptions) -> Self {
        RawImageTransformer {
            options,
            overlay: None,
        }
    }

    pub fn with_overlay(options: &'a TransformationOptions, overlay: &'a RawImage) -> Self {
        RawImageTransformer {
            options,
            overlay: Some(overlay),
        }
    }

    /// Applies the configured operations to the image, left to right.
    pub fn transform(&self, image: RawImage) -> Result<RawImage> {
        let mut image = image;
        for operation in &self.options.operations {
            image = self.apply_operation(operation, image)?;
            logger::log_applied_operation(operation, &image);
        }
        Ok(image)
    }

    fn apply_operation(&self, operation: &Operation, mut image: RawImage) -> Result<RawImage> {
        match operation {
            Operation::Mirror => {
                image.mirror();
                Ok(image)
            }
            Operation::Grey => {
                image.grey();
                Ok(image)
            }
            Operation::Invert => {
                image.invert();
                Ok(image)
            }
            Operation::Merge => {
                let overlay = self.overlay.ok_or(Error::MergeRequiresSecondImage)?;
                Ok(image.merge_with(overlay))
            }
            Operation::Compress => Ok(image.compress()),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::error::Error;
    use crate::image::{Operation, Pixel, RawImage, TransformationOptions};

    use super::RawImageTransformer;

    fn two_by_two() -> RawImage {
        RawImage::from_rows(vec![
            vec![Pixel::new(10, 20, 30), Pixel::new(40, 50, 60)],
            vec![Pixel::new(70, 80, 90), Pixel::new(100, 110, 120)],
        ])
    }

    #[test]
    fn transform_without_operations_returns_the_input() {
        let options = TransformationOptions { operations: vec![] };
        let transformer = RawImageTransformer::new(&options);
        let image = two_by_two();
        let result = transformer
            .transform(image.clone())
            .expect("empty operation list must not fail");
        assert_eq!(result, image);
    }

    #[test]
    fn transform_applies_operations_in_order() {
        let options = TransformationOptions {
            operations: vec![Operation::Grey, Operation::Mirror],
        };
        let transformer = RawImageTransformer::new(&options);
        let result = transformer
            .transform(two_by_two())
            .expect("transformation must succeed");

        let mut expected = two_by_two();
        expected.grey();
        expected.mirror();
        assert_eq!(result, expected);
    }

    #[test]
    fn transform_merges_with_the_overlay_image() {
        let options = TransformationOptions {
            operations: vec![Operation::Merge],
        };
        let overlay = RawImage::from_rows(vec![vec![Pixel::new(1, 2, 3)]]);
        let transformer = RawImageTransformer::with_overlay(&options, &overlay);
        let result = transformer
            .transform(two_by_two())
            .expect("merge with overlay must succeed");
        assert_eq!(result, two_by_two().merge_with(&overlay));
    }

    #[test]
    fn transform_rejects_merge_without_an_overlay_image() {
        let options = TransformationOptions {
            operations: vec![Operation::Merge],
        };
        let transformer = RawImageTransformer::new(&options);
        match transformer.transform(two_by_two()) {
            Err(Error::MergeRequiresSecondImage) => {}
            other => panic!("Missing overlay image not detected, got {:?}", other),
        }
    }

    #[test]
    fn transform_chains_compress_after_merge() {
        let options = TransformationOptions {
            operations: vec![Operation::Merge, Operation::Compress],
        };
        let overlay = two_by_two();
        let transformer = RawImageTransformer::with_overlay(&options, &overlay);
        let result = transformer
            .transform(two_by_two())
            .expect("transformation must succeed");
        assert_eq!(result, two_by_two().compress());
    }
}
