// MIT/Apache2 License

use crate::Error;

/// The format that an `Image` can have.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ImageFormat {
    /// Grayscale format. Each element of the byte slice is a pixel representing how bright it is.
    Grayscale,
    /// Every three elements of the byte slice is an array of channels consisting of red, green and blue.
    Rgb,
    /// Every four elements of the byte slice is an array of channels consisting of red, green, blue and alpha.
    Rgba,
}

impl ImageFormat {
    /// Does this `ImageFormat` carry transparency?
    #[inline]
    pub fn is_transparent(self) -> bool {
        matches!(self, ImageFormat::Rgba)
    }

    /// Get the quantum (i.e. bytes per pixel) for this image.
    #[inline]
    pub fn quantum(self) -> usize {
        match self {
            ImageFormat::Grayscale => 1,
            ImageFormat::Rgb => 3,
            ImageFormat::Rgba => 4,
        }
    }

    /// Convert one pixel of this format to red, green, blue and alpha channels.
    #[inline]
    fn to_rgba(self, pixel: &[u8]) -> [u8; 4] {
        match self {
            ImageFormat::Grayscale => [pixel[0], pixel[0], pixel[0], 255],
            ImageFormat::Rgb => [pixel[0], pixel[1], pixel[2], 255],
            ImageFormat::Rgba => [pixel[0], pixel[1], pixel[2], pixel[3]],
        }
    }
}

/// A client-side image: an array of pixels that the program has direct access to.
///
/// Decoding images from files is left to other crates; the bytes of an already decoded image (for instance, the
/// `as_raw()` of an `ImageBuffer`) can be wrapped in this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Image {
    width: u32,
    height: u32,
    format: ImageFormat,
    // invariant: bytes.len() == width * height * format.quantum()
    bytes: Vec<u8>,
}

impl Image {
    /// Wrap a buffer of pixels. The buffer must hold exactly `width * height` pixels of the given format.
    #[inline]
    pub fn new(width: u32, height: u32, format: ImageFormat, bytes: Vec<u8>) -> crate::Result<Image> {
        let expected = width as usize * height as usize * format.quantum();
        if bytes.len() != expected {
            return Err(Error::ImageSize {
                expected,
                actual: bytes.len(),
            });
        }

        Ok(Image {
            width,
            height,
            format,
            bytes,
        })
    }

    /// Create an image where every pixel is the same RGBA color.
    #[inline]
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Image {
        let count = width as usize * height as usize;
        Image {
            width,
            height,
            format: ImageFormat::Rgba,
            bytes: rgba.iter().copied().cycle().take(count * 4).collect(),
        }
    }

    /// The width of this image, in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The height of this image, in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The format of this image.
    #[inline]
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// The raw bytes of this image.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Take the raw bytes out of this image.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Iterate over the pixels of this image, row by row.
    #[inline]
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.bytes.chunks(self.format.quantum())
    }

    /// Get the pixel at `(x, y)` as RGBA, if it is inside the image.
    #[inline]
    pub fn rgba_at(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let quantum = self.format.quantum();
        let start = (y as usize * self.width as usize + x as usize) * quantum;
        Some(self.format.to_rgba(&self.bytes[start..start + quantum]))
    }

    /// Convert this image to the RGBA format.
    #[inline]
    pub fn to_rgba(&self) -> Image {
        if self.format == ImageFormat::Rgba {
            return self.clone();
        }

        Image {
            width: self.width,
            height: self.height,
            format: ImageFormat::Rgba,
            bytes: self
                .pixels()
                .flat_map(|pixel| self.format.to_rgba(pixel).to_vec())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_size_is_checked() {
        assert!(Image::new(2, 2, ImageFormat::Rgb, vec![0; 12]).is_ok());
        assert_eq!(
            Image::new(2, 2, ImageFormat::Rgba, vec![0; 12]),
            Err(Error::ImageSize {
                expected: 16,
                actual: 12
            })
        );
    }

    #[test]
    fn rgba_conversion() {
        let gray = Image::new(2, 1, ImageFormat::Grayscale, vec![10, 200]).unwrap();
        let rgba = gray.to_rgba();
        assert_eq!(rgba.format(), ImageFormat::Rgba);
        assert_eq!(rgba.as_bytes(), &[10, 10, 10, 255, 200, 200, 200, 255]);
        assert_eq!(gray.rgba_at(1, 0), Some([200, 200, 200, 255]));
        assert_eq!(gray.rgba_at(2, 0), None);
    }

    #[test]
    fn filled_images() {
        let image = Image::filled(3, 2, [1, 2, 3, 4]);
        assert_eq!(image.pixels().count(), 6);
        assert!(image.pixels().all(|p| p == [1, 2, 3, 4]));
    }
}
