use std::cmp;

use super::{Pixel, RawImage};

impl RawImage {
    /// Combines two images into a freshly allocated one. The result is as
    /// tall as the taller input and as wide as the wider input. Rows with
    /// an even index prefer pixels of `self`, odd rows prefer pixels of
    /// `other`; a cell absent from both inputs becomes `Pixel::WHITE`.
    /// Cell existence is checked against each row's own length, so ragged
    /// inputs are handled. Neither input is mutated.
    pub fn merge_with(&self, other: &RawImage) -> RawImage {
        let height = cmp::max(self.height(), other.height());
        let width = cmp::max(self.width(), other.width());
        let mut rows = Vec::with_capacity(height);
        for row_index in 0..height {
            let (preferred, fallback) = if row_index % 2 == 0 {
                (self, other)
            } else {
                (other, self)
            };
            let mut row = Vec::with_capacity(width);
            for column_index in 0..width {
                let pixel = preferred
                    .pixel_at(row_index, column_index)
                    .or_else(|| fallback.pixel_at(row_index, column_index))
                    .copied()
                    .unwrap_or(Pixel::WHITE);
                row.push(pixel);
            }
            rows.push(row);
        }
        RawImage::from_rows(rows)
    }
}

#[cfg(test)]
mod test {
    use crate::image::{Pixel, RawImage};

    fn image_from_triples(rows: &[&[[i64; 3]]]) -> RawImage {
        RawImage::from_rows(
            rows.iter()
                .map(|row| {
                    row.iter()
                        .map(|&[red, green, blue]| Pixel::new(red, green, blue))
                        .collect()
                })
                .collect(),
        )
    }

    #[test]
    fn merge_rectangular_image_with_itself_returns_the_image() {
        let image = image_from_triples(&[
            &[[233, 100, 115], [0, 0, 0], [255, 255, 0]],
            &[[199, 201, 116], [1, 9, 0], [255, 100, 100]],
        ]);
        assert_eq!(image.merge_with(&image), image);
    }

    #[test]
    fn merge_takes_the_larger_dimension_on_each_axis() {
        let two_by_four = image_from_triples(&[
            &[[1, 1, 1], [2, 2, 2], [3, 3, 3], [4, 4, 4]],
            &[[5, 5, 5], [6, 6, 6], [7, 7, 7], [8, 8, 8]],
        ]);
        let three_by_one = image_from_triples(&[&[[9, 9, 9]], &[[10, 10, 10]], &[[11, 11, 11]]]);
        let merged = two_by_four.merge_with(&three_by_one);
        assert_eq!(merged.height(), 3, "height must be the taller input's");
        assert_eq!(merged.width(), 4, "width must be the wider input's");
    }

    #[test]
    fn merge_fills_cells_absent_from_both_inputs_with_white() {
        let one_row = image_from_triples(&[&[
            [233, 100, 115],
            [0, 0, 0],
            [255, 255, 0],
            [1, 2, 3],
        ]]);
        let one_column = image_from_triples(&[
            &[[199, 201, 116]],
            &[[1, 9, 0]],
            &[[255, 100, 100]],
        ]);
        let merged = one_row.merge_with(&one_column);
        let expected = image_from_triples(&[
            &[[233, 100, 115], [0, 0, 0], [255, 255, 0], [1, 2, 3]],
            &[[1, 9, 0], [255, 255, 255], [255, 255, 255], [255, 255, 255]],
            &[
                [255, 100, 100],
                [255, 255, 255],
                [255, 255, 255],
                [255, 255, 255],
            ],
        ]);
        assert_eq!(merged, expected);
    }

    #[test]
    fn merge_alternates_row_preference_between_inputs() {
        let first = image_from_triples(&[
            &[[233, 100, 115], [0, 0, 0], [255, 255, 0], [1, 2, 3]],
            &[[200, 200, 200], [1, 9, 0], [255, 100, 100], [99, 99, 0]],
        ]);
        let second = image_from_triples(&[
            &[[199, 201, 116], [2, 3, 4], [4, 5, 5]],
            &[[1, 9, 0], [5, 6, 6], [7, 7, 8]],
            &[[255, 100, 100], [8, 9, 10], [11, 12, 12]],
        ]);
        let merged = first.merge_with(&second);
        let expected = image_from_triples(&[
            &[[233, 100, 115], [0, 0, 0], [255, 255, 0], [1, 2, 3]],
            &[[1, 9, 0], [5, 6, 6], [7, 7, 8], [99, 99, 0]],
            &[
                [255, 100, 100],
                [8, 9, 10],
                [11, 12, 12],
                [255, 255, 255],
            ],
        ]);
        assert_eq!(merged, expected);
    }

    #[test]
    fn merge_probes_each_row_at_its_own_length() {
        // The first input's second row is longer than its nominal width.
        let ragged = RawImage::from_rows(vec![
            vec![Pixel::new(1, 1, 1)],
            vec![Pixel::new(2, 2, 2), Pixel::new(3, 3, 3), Pixel::new(4, 4, 4)],
        ]);
        let wide = image_from_triples(&[&[[5, 5, 5], [6, 6, 6]]]);
        let merged = ragged.merge_with(&wide);
        let expected = image_from_triples(&[
            &[[1, 1, 1], [6, 6, 6]],
            &[[2, 2, 2], [3, 3, 3]],
        ]);
        assert_eq!(merged, expected);
    }

    #[test]
    fn merge_with_empty_image_keeps_the_other_input() {
        let image = image_from_triples(&[&[[1, 2, 3], [4, 5, 6]]]);
        let empty = RawImage::default();
        assert_eq!(image.merge_with(&empty), image);
        assert_eq!(empty.merge_with(&image), image);
    }
}
