use image::{Rgba, RgbaImage};

const CORNER_RADIUS: f32 = 0.22;
const RIM_WIDTH: f32 = 0.010;

// Waveform bars: (center x, half height), both as a fraction of the edge.
const BARS: [(f32, f32); 5] = [
    (0.30, 0.10),
    (0.40, 0.20),
    (0.50, 0.28),
    (0.60, 0.20),
    (0.70, 0.10),
];
const BAR_HALF_WIDTH: f32 = 0.035;

// Generate the app logo: rounded gradient square with a white waveform glyph
pub fn generate_icon(size: u32) -> RgbaImage {
    let s = size as f32;
    let top = [124.0, 92.0, 255.0];
    let bottom = [38.0, 24.0, 112.0];

    RgbaImage::from_fn(size, size, |x, y| {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;

        let edge = rounded_rect_distance(px, py, s, s * CORNER_RADIUS);
        if edge > 0.0 {
            return Rgba([0, 0, 0, 0]);
        }

        // Vertical gradient, lighter at the top
        let t = py / s;
        let mut rgb = [
            lerp(top[0], bottom[0], t),
            lerp(top[1], bottom[1], t),
            lerp(top[2], bottom[2], t),
        ];

        // Faint white rim along the inside of the edge
        if -edge <= s * RIM_WIDTH {
            for c in rgb.iter_mut() {
                *c = lerp(*c, 255.0, 0.10);
            }
        }

        if in_waveform(px / s, py / s) {
            rgb = [255.0, 255.0, 255.0];
        }

        Rgba([rgb[0] as u8, rgb[1] as u8, rgb[2] as u8, 255])
    })
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 { a + (b - a) * t }

/// Signed distance from a point to a `size` square with rounded corners.
/// Negative inside.
fn rounded_rect_distance(px: f32, py: f32, size: f32, radius: f32) -> f32 {
    let half = size * 0.5;
    let qx = (px - half).abs() - (half - radius);
    let qy = (py - half).abs() - (half - radius);
    let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
    let inside = qx.max(qy).min(0.0);
    outside + inside - radius
}

// Each bar is a vertical capsule centred on the middle row
fn in_waveform(u: f32, v: f32) -> bool {
    BARS.iter().any(|&(cx, half_h)| {
        let dx = (u - cx).abs();
        let dy = ((v - 0.5).abs() - half_h).max(0.0);
        dx * dx + dy * dy <= BAR_HALF_WIDTH * BAR_HALF_WIDTH
    })
}
