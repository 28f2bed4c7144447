use std::fmt::Write as _;

use super::canvas::{BitmapRect, CornerRadii, DrawCommand};
use super::color::Color;

fn fill_attrs(color: Color, alpha: f64) -> String {
    let opacity = (color.a * alpha).clamp(0.0, 1.0);
    format!(
        "fill=\"rgb({},{},{})\" fill-opacity=\"{:.3}\"",
        color.r, color.g, color.b, opacity
    )
}

/// Path for a rectangle with independent corner radii.
fn rounded_path(rect: BitmapRect, radii: CornerRadii) -> String {
    let (x, y) = (rect.x as f64, rect.y as f64);
    let (w, h) = (rect.width as f64, rect.height as f64);
    let cap = (w / 2.0).min(h / 2.0);
    let tl = radii.top_left.clamp(0.0, cap);
    let tr = radii.top_right.clamp(0.0, cap);
    let br = radii.bottom_right.clamp(0.0, cap);
    let bl = radii.bottom_left.clamp(0.0, cap);

    format!(
        "M{:.2},{:.2} H{:.2} A{tr:.2},{tr:.2} 0 0 1 {:.2},{:.2} V{:.2} A{br:.2},{br:.2} 0 0 1 {:.2},{:.2} H{:.2} A{bl:.2},{bl:.2} 0 0 1 {:.2},{:.2} V{:.2} A{tl:.2},{tl:.2} 0 0 1 {:.2},{:.2} Z",
        x + tl,
        y,
        x + w - tr,
        x + w,
        y + tr,
        y + h - br,
        x + w - br,
        y + h,
        x + bl,
        x,
        y + h - bl,
        y + tl,
        x + tl,
        y,
    )
}

/// Serialize recorded draw commands into a standalone SVG document sized in
/// device pixels.
pub fn to_svg(commands: &[DrawCommand], width: i32, height: i32, background: Option<Color>) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    );
    if let Some(bg) = background {
        let _ = writeln!(
            svg,
            "  <rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\" {}/>",
            fill_attrs(bg, 1.0)
        );
    }

    for cmd in commands {
        match cmd {
            DrawCommand::Rect { rect, color, alpha } => {
                let _ = writeln!(
                    svg,
                    "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {}/>",
                    rect.x,
                    rect.y,
                    rect.width,
                    rect.height,
                    fill_attrs(*color, *alpha)
                );
            }
            DrawCommand::RoundedRect {
                rect,
                radii,
                color,
                alpha,
            } => {
                if radii.is_square() {
                    let _ = writeln!(
                        svg,
                        "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {}/>",
                        rect.x,
                        rect.y,
                        rect.width,
                        rect.height,
                        fill_attrs(*color, *alpha)
                    );
                } else {
                    let _ = writeln!(
                        svg,
                        "  <path d=\"{}\" {}/>",
                        rounded_path(*rect, *radii),
                        fill_attrs(*color, *alpha)
                    );
                }
            }
        }
    }

    svg.push_str("</svg>\n");
    svg
}
