//! HSV to RGB conversion for the rainbow scheme.

use fractalscope_core::Rgb;

/// Convert HSV to RGB.
///
/// `hue` is in degrees and wraps; `saturation` and `value` are in `[0, 1]`.
/// Channels are floored, so `value = 1` maps to 255 exactly.
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Rgb {
    let hue = hue.rem_euclid(360.0) / 60.0;
    let s = saturation.clamp(0.0, 1.0);
    let v = value.clamp(0.0, 1.0);

    let sector = hue.floor();
    let f = hue - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match sector as u32 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb::new(to_channel(r), to_channel(g), to_channel(b))
}

fn to_channel(c: f64) -> u8 {
    (c * 255.0).floor().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Rgb::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), Rgb::new(0, 255, 0));
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), Rgb::new(0, 0, 255));
    }

    #[test]
    fn secondary_hues() {
        assert_eq!(hsv_to_rgb(60.0, 1.0, 1.0), Rgb::new(255, 255, 0));
        assert_eq!(hsv_to_rgb(180.0, 1.0, 1.0), Rgb::new(0, 255, 255));
        assert_eq!(hsv_to_rgb(300.0, 1.0, 1.0), Rgb::new(255, 0, 255));
    }

    #[test]
    fn hue_wraps() {
        assert_eq!(hsv_to_rgb(360.0, 1.0, 1.0), hsv_to_rgb(0.0, 1.0, 1.0));
        assert_eq!(hsv_to_rgb(-120.0, 1.0, 1.0), hsv_to_rgb(240.0, 1.0, 1.0));
    }

    #[test]
    fn zero_saturation_is_gray() {
        assert_eq!(hsv_to_rgb(200.0, 0.0, 0.5), Rgb::gray(127));
        assert_eq!(hsv_to_rgb(10.0, 1.0, 0.0), Rgb::BLACK);
    }

    #[test]
    fn mid_sector_interpolates() {
        // h = 30: r = 1, g rises halfway
        assert_eq!(hsv_to_rgb(30.0, 1.0, 1.0), Rgb::new(255, 127, 0));
    }
}
