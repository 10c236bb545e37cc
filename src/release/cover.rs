//! Deterministic geometric cover art
//!
//! Concentric outlined polygons on black. The palette rotates with the day
//! of month so consecutive releases get distinct covers; the same date always
//! renders the same pixels.

use std::f32::consts::PI;
use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::draw_hollow_polygon_mut;
use imageproc::point::Point;

use crate::error::AppError;
use crate::utils::ensure_dir;

pub(crate) const COVER_SIZE: u32 = 1024;
const RINGS: u32 = 24;

pub(crate) fn cover_path(out_dir: &Path, stamp: &str) -> PathBuf {
    out_dir.join(format!("cover-{stamp}.png"))
}

/// Day of month from a `YYYYMMDD` stamp, 0 when the stamp isn't numeric.
fn day_offset(stamp: &str) -> u32 {
    if !stamp.chars().all(|c| c.is_ascii_digit()) {
        return 0;
    }
    stamp
        .get(stamp.len().saturating_sub(2)..)
        .and_then(|day| day.parse().ok())
        .unwrap_or(0)
}

fn channel(hue: f32) -> u8 {
    (128.0 + 127.0 * (hue * PI / 180.0).sin()) as u8
}

fn ring_color(hue: u32) -> Rgb<u8> {
    let hue = hue as f32;
    Rgb([channel(hue), channel(hue + 120.0), channel(hue + 240.0)])
}

/// Vertices of ring `k`: `3 + k % 9` corners, radius growing with `k`,
/// slightly pinched by a cosine lobe.
fn ring_points(k: u32) -> Vec<Point<f32>> {
    let center = (COVER_SIZE / 2) as f32;
    let radius = (80 + k * 16) as f32;
    let sides = 3 + k % 9;
    let rotation = (k * 7) as f32;

    (0..sides)
        .map(|i| {
            let angle = (rotation + i as f32 * 360.0 / sides as f32) * PI / 180.0;
            let lobe = (sides as f32 * angle / 2.0).cos().abs().powf(0.7);
            let r = radius * (0.78 + 0.22 * lobe);
            Point::new(center + angle.cos() * r, center + angle.sin() * r)
        })
        .collect()
}

pub(crate) fn render_cover(stamp: &str) -> RgbImage {
    let mut img = RgbImage::new(COVER_SIZE, COVER_SIZE);
    let day = day_offset(stamp);

    for k in 0..RINGS {
        let hue = (k * 15 + day * 3) % 360;
        draw_hollow_polygon_mut(&mut img, &ring_points(k), ring_color(hue));
    }
    img
}

/// Render and save `cover-<stamp>.png` into `out_dir`.
pub(crate) fn write_cover(out_dir: &Path, stamp: &str) -> Result<PathBuf, AppError> {
    ensure_dir(out_dir)?;
    let path = cover_path(out_dir, stamp);
    render_cover(stamp)
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|source| AppError::Render {
            path: path.clone(),
            source,
        })?;
    tracing::debug!(path = %path.display(), "cover written");
    Ok(path)
}
