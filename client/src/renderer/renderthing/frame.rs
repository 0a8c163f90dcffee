pub const PIXEL_BYTES: usize = 4;

pub type Color = [u8; PIXEL_BYTES];

/// A borrowed RGBA8 pixel buffer for one frame.
pub struct RenderFrame<'a> {
    pub width: u32,
    pub height: u32,
    pub buffer: &'a mut [u8],
}

impl RenderFrame<'_> {
    pub fn pixel_mut(&mut self, x: u32, y: u32) -> Option<&mut [u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = (x as usize + y as usize * self.width as usize) * PIXEL_BYTES;
        self.buffer.get_mut(index..index + PIXEL_BYTES)
    }

    pub fn draw_pixel(&mut self, x: u32, y: u32, color: Color) {
        if let Some(pixel) = self.pixel_mut(x, y) {
            pixel.copy_from_slice(&color);
        }
    }

    pub fn draw_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Color) {
        for y in y..y.saturating_add(height) {
            for x in x..x.saturating_add(width) {
                self.draw_pixel(x, y, color);
            }
        }
    }

    pub fn fill(&mut self, color: Color) {
        for pixel in self.buffer.chunks_exact_mut(PIXEL_BYTES) {
            pixel.copy_from_slice(&color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = [255, 0, 0, 255];

    #[test]
    fn draw_rect_clips_to_frame() {
        let mut buffer = vec![0; 4 * 3 * PIXEL_BYTES];
        let mut frame = RenderFrame {
            width: 4,
            height: 3,
            buffer: &mut buffer,
        };

        frame.draw_rect(2, 1, 10, 10, RED);

        assert_eq!(frame.pixel_mut(3, 2).map(|pixel| pixel.to_vec()), Some(RED.to_vec()));
        assert_eq!(frame.pixel_mut(1, 1).map(|pixel| pixel.to_vec()), Some(vec![0; 4]));
        assert!(frame.pixel_mut(4, 0).is_none());
    }

    #[test]
    fn last_pixel_is_addressable() {
        let mut buffer = vec![0; 2 * 2 * PIXEL_BYTES];
        let mut frame = RenderFrame {
            width: 2,
            height: 2,
            buffer: &mut buffer,
        };

        frame.draw_pixel(1, 1, RED);

        assert_eq!(&buffer[12..16], &RED);
    }
}
