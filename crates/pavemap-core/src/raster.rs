use ndarray::{s, Array2, Array3, ArrayView1};

/// A decoded color image.
/// Channel values are f32 in [0.0, 1.0], ordered R, G, B (and optionally more).
#[derive(Clone, Debug)]
pub struct RasterImage {
    /// Pixel data, row-major, shape = (height, width, channels)
    pub data: Array3<f32>,
}

impl RasterImage {
    pub fn new(data: Array3<f32>) -> Self {
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn channels(&self) -> usize {
        self.data.dim().2
    }

    /// Channel values of a single pixel.
    pub fn pixel(&self, row: usize, col: usize) -> ArrayView1<'_, f32> {
        self.data.slice(s![row, col, ..])
    }
}

/// Foreground/background classification of every pixel.
pub type BinaryMask = Array2<bool>;

/// Component id per cell; 0 is background.
pub type LabelGrid = Array2<u32>;
