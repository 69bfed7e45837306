use super::{Pixel, RawImage, NUMBER_OF_COLOR_CHANNELS};

impl RawImage {
    /// Downsamples the image by averaging non-overlapping 2x2 blocks into
    /// single pixels. Blocks cut off by the right or bottom edge average
    /// only the pixels they actually cover, so the divisor is 4 in the
    /// interior, 2 along one odd-sized edge and 1 in an odd-sized corner.
    /// The input must be rectangular; the result is freshly allocated and
    /// has half the extent of the input on each axis, rounded up.
    pub fn compress(&self) -> RawImage {
        let outer_length = self.height();
        let inner_length = self.width();
        if outer_length == 0 || inner_length == 0 {
            return RawImage::default();
        }
        let mut rows = Vec::with_capacity((outer_length + 1) / 2);
        for block_row_start in (0..outer_length).step_by(2) {
            let mut row = Vec::with_capacity((inner_length + 1) / 2);
            for block_column_start in (0..inner_length).step_by(2) {
                row.push(self.block_average(block_row_start, block_column_start));
            }
            rows.push(row);
        }
        RawImage::from_rows(rows)
    }

    fn block_average(&self, block_row_start: usize, block_column_start: usize) -> Pixel {
        let mut channel_sums = [0_i64; NUMBER_OF_COLOR_CHANNELS];
        let mut number_of_pixels = 0_i64;
        for x in 0..2 {
            for y in 0..2 {
                let row_index = block_row_start + x;
                let column_index = block_column_start + y;
                if row_index < self.height() && column_index < self.width() {
                    let pixel = &self.rows[row_index][column_index];
                    for (sum, value) in channel_sums.iter_mut().zip(pixel.channels) {
                        *sum += value;
                    }
                    number_of_pixels += 1;
                }
            }
        }
        Pixel::new(
            channel_sums[0] / number_of_pixels,
            channel_sums[1] / number_of_pixels,
            channel_sums[2] / number_of_pixels,
        )
    }
}
