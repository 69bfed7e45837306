use super::{Pixel, RawImage};

impl Pixel {
    /// Replaces every channel with the truncated average of the three.
    /// The sum is divided once, after summation, not per channel.
    fn averaged(&self) -> Pixel {
        let average = (self.red() + self.green() + self.blue()) / 3;
        Pixel::new(average, average, average)
    }

    /// Swaps every channel holding the minimum value with the maximum
    /// value and vice versa. The minimum check runs first, so a pixel
    /// whose channels are all equal stays unchanged.
    fn extremes_swapped(&self) -> Pixel {
        let minimum = self.red().min(self.green()).min(self.blue());
        let maximum = self.red().max(self.green()).max(self.blue());
        let mut channels = self.channels;
        for value in channels.iter_mut() {
            if *value == minimum {
                *value = maximum;
            } else if *value == maximum {
                *value = minimum;
            }
        }
        Pixel { channels }
    }
}

impl RawImage {
    /// Reverses the pixel order of every row, in place.
    pub fn mirror(&mut self) {
        for row in self.rows.iter_mut() {
            row.reverse();
        }
    }

    /// Averages every pixel out to a grey tone, in place.
    pub fn grey(&mut self) {
        for row in self.rows.iter_mut() {
            for pixel in row.iter_mut() {
                *pixel = pixel.averaged();
            }
        }
    }

    /// Swaps the extreme channel values of every pixel, in place.
    pub fn invert(&mut self) {
        for row in self.rows.iter_mut() {
            for pixel in row.iter_mut() {
                *pixel = pixel.extremes_swapped();
            }
        }
    }
}
