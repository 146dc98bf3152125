// MIT/Apache2 License

use crate::{FillRule, Image, ImageFormat, MaskRegion, Polygon, Rasterizer};

/// Clip an image to the inside of a polygon.
///
/// The polygon is rasterized over the frame of the image, `(0, 0)` to `(width, height)`. The result is an RGBA
/// image where each pixel's alpha has been scaled by how much of that pixel the polygon covers; pixels outside of
/// the polygon become fully transparent.
pub fn clip_image<R: Rasterizer + ?Sized>(
    rasterizer: &mut R,
    image: &Image,
    polygon: &Polygon,
    fill_rule: FillRule,
) -> crate::Result<Image> {
    let region = MaskRegion::with_size(image.width(), image.height());
    let mask = rasterizer.rasterize_region(polygon, fill_rule, region)?;

    log::debug!(
        "Clipping {}x{} image; {} of {} pixels visible",
        image.width(),
        image.height(),
        mask.covered_pixels(),
        region.area()
    );

    let rgba = image.to_rgba();
    let bytes = rgba
        .as_bytes()
        .chunks(4)
        .zip(mask.as_bytes())
        .flat_map(|(pixel, &coverage)| {
            let alpha = (u16::from(pixel[3]) * u16::from(coverage) + 127) / 255;
            [pixel[0], pixel[1], pixel[2], alpha as u8]
        })
        .collect();

    Image::new(image.width(), image.height(), ImageFormat::Rgba, bytes)
}
