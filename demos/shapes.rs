// MIT/Apache2 License

use maskpath::{
    arrow_path, bottom_right_triangled_path, centered_square, dialog_balloon_path,
    geometry::rect, oval_path, shape_mask, top_right_triangled_path, FillRule, Mask, Orientation,
    Polygon, Rasterizer, Result, ScanlineRasterizer, DEFAULT_STROKE_WIDTH,
};

const SHADES: &[u8] = b" .:-=+*#%@";

fn print_mask(name: &str, mask: &Mask) {
    println!("{} ({}x{})", name, mask.width(), mask.height());
    for row in mask.as_bytes().chunks(mask.width().max(1) as usize) {
        let line: String = row
            .iter()
            .map(|&c| SHADES[c as usize * (SHADES.len() - 1) / 255] as char)
            .collect();
        println!("|{}|", line);
    }
    println!();
}

fn show<R: Rasterizer>(
    rasterizer: &mut R,
    name: &str,
    polygon: &Polygon,
    stroke_width: f64,
) -> Result {
    let mask = shape_mask(rasterizer, polygon, FillRule::EvenOdd, stroke_width)?;
    print_mask(name, &mask);
    Ok(())
}

fn main() -> Result {
    env_logger::init();

    let mut rasterizer = ScanlineRasterizer::with_samples(4)?;
    let frame = rect(0.0, 0.0, 32.0, 16.0);

    show(&mut rasterizer, "bottom right cut", &bottom_right_triangled_path(frame), 0.0)?;
    show(&mut rasterizer, "top right cut", &top_right_triangled_path(frame), 0.0)?;
    show(
        &mut rasterizer,
        "circle",
        &oval_path(centered_square(frame), 0.25),
        DEFAULT_STROKE_WIDTH,
    )?;

    // the arrow is 40x75; shrink it by rasterizing at its native size and printing every fifth row
    let arrow = shape_mask(
        &mut rasterizer,
        &arrow_path(),
        FillRule::NonZero,
        DEFAULT_STROKE_WIDTH,
    )?;
    println!("arrow ({}x{}, every fifth row)", arrow.width(), arrow.height());
    for row in arrow.as_bytes().chunks(arrow.width() as usize).step_by(5) {
        let line: String = row
            .iter()
            .step_by(2)
            .map(|&c| if c > 127 { '#' } else { ' ' })
            .collect();
        println!("|{}|", line);
    }
    println!();

    for &orientation in &[
        Orientation::Up,
        Orientation::Down,
        Orientation::Left,
        Orientation::Right,
    ] {
        let balloon = dialog_balloon_path(rect(0.0, 0.0, 24.0, 16.0), orientation, 4.0);
        show(&mut rasterizer, &format!("{:?} balloon", orientation), &balloon, 0.0)?;
    }

    Ok(())
}
