//! Egg shape and shading
//!
//! The outline is the classic egg curve:
//!
//! ```text
//! x = a cos t
//! y = -(sqrt(b² - d² cos² t) + d sin t) sin t
//! ```
//!
//! sampled once per degree. The shell fades from cream to red as the boil
//! progresses.

use egui::{Color32, Pos2};

/// Half-width of the egg.
pub const EGG_A: f32 = 110.0;
/// Half-height of the egg before the asymmetry is applied.
pub const EGG_B: f32 = 150.0;
/// Asymmetry between the pointed and the round end.
pub const EGG_D: f32 = 20.0;

/// Height reserved for the egg in the layout.
pub const EGG_AREA_HEIGHT: f32 = 375.0;

/// Shell color before boiling starts.
pub const RAW_SHELL: Color32 = Color32::from_rgb(255, 239, 174);

/// Outline of the egg around `center`, one point per degree from 0° to 360°.
/// The first and last points coincide.
pub fn egg_outline(center: Pos2) -> Vec<Pos2> {
    let a = EGG_A as f64;
    let b = EGG_B as f64;
    let d = EGG_D as f64;

    (0..=360)
        .map(|deg| {
            let rad = (deg as f64).to_radians();
            let (sin_t, cos_t) = rad.sin_cos();
            let x = a * cos_t;
            let y = -((b * b - d * d * cos_t * cos_t).sqrt() + d * sin_t) * sin_t;
            Pos2::new(center.x + x as f32, center.y + y as f32)
        })
        .collect()
}

/// Shell color at `progress`: green and blue drain away as the egg cooks.
pub fn egg_color(progress: f32) -> Color32 {
    let remaining = 1.0 - progress.clamp(0.0, 1.0);
    Color32::from_rgb(
        RAW_SHELL.r(),
        (RAW_SHELL.g() as f32 * remaining) as u8,
        (RAW_SHELL.b() as f32 * remaining) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Pos2, b: Pos2) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    #[test]
    fn test_outline_sample_count() {
        assert_eq!(egg_outline(Pos2::ZERO).len(), 361);
    }

    #[test]
    fn test_outline_extremes() {
        let center = Pos2::new(200.0, 150.0);
        let points = egg_outline(center);
        assert!(close(points[0], Pos2::new(310.0, 150.0)));
        assert!(close(points[360], points[0]));
        // Top (90°) is the taller end: b + d above center.
        assert!(close(points[90], Pos2::new(200.0, 150.0 - 170.0)));
        // Bottom (270°): b - d below center.
        assert!(close(points[270], Pos2::new(200.0, 150.0 + 130.0)));
        assert!(close(points[180], Pos2::new(90.0, 150.0)));
    }

    #[test]
    fn test_outline_within_bounds() {
        for p in egg_outline(Pos2::ZERO) {
            assert!(p.x.abs() <= EGG_A + 1e-3);
            assert!(p.y >= -(EGG_B + EGG_D) - 1e-3);
            assert!(p.y <= EGG_B + 1e-3);
        }
    }

    #[test]
    fn test_color_fades_to_red() {
        assert_eq!(egg_color(0.0), RAW_SHELL);
        assert_eq!(egg_color(1.0), Color32::from_rgb(255, 0, 0));
        assert_eq!(egg_color(0.5), Color32::from_rgb(255, 119, 87));
        // Out-of-range progress is clamped.
        assert_eq!(egg_color(-1.0), RAW_SHELL);
        assert_eq!(egg_color(3.0), Color32::from_rgb(255, 0, 0));
    }
}
