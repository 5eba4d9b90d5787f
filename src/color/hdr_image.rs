use super::Color;

/// A row-major grid of float-RGB pixels. File I/O (PFM) and LDR export live
/// outside this crate; only the in-memory buffer and its pure numeric
/// transforms (normalize, clamp) live here.
#[derive(Debug, Clone)]
pub struct HdrImage {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl HdrImage {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn valid_indices(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    fn pixel_offset(&self, row: usize, col: usize) -> Option<usize> {
        if self.valid_indices(row, col) {
            Some(row * self.width + col)
        } else {
            None
        }
    }

    pub fn get_pixel(&self, row: usize, col: usize) -> Option<Color> {
        self.pixel_offset(row, col).map(|i| self.pixels[i])
    }

    pub fn set_pixel(&mut self, row: usize, col: usize, color: Color) -> Option<()> {
        let offset = self.pixel_offset(row, col)?;
        self.pixels[offset] = color;
        Some(())
    }

    /// Geometric mean of per-pixel luminosity, floored by `delta` to avoid
    /// taking the log of zero.
    pub fn average_luminosity(&self, delta: f32) -> f32 {
        let sum: f32 = self
            .pixels
            .iter()
            .map(|p| (delta + p.luminosity()).ln())
            .sum();
        (sum / self.pixels.len() as f32).exp()
    }

    pub fn normalize_image(&mut self, factor: f32) {
        let avg = self.average_luminosity(1e-10);
        let scale = factor / avg;
        for p in &mut self.pixels {
            *p = *p * scale;
        }
    }

    pub fn clamp_image(&mut self) {
        for p in &mut self.pixels {
            *p = Color::new(clamp_channel(p.r), clamp_channel(p.g), clamp_channel(p.b));
        }
    }
}

fn clamp_channel(x: f32) -> f32 {
    x / (1.0 + x)
}
