/// Page background, `#EFCFE3`.
pub const BACKGROUND: Rgba = Rgba::opaque(239, 207, 227);

/// 8-bit colour with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Hue in degrees, saturation and brightness in percent.
    pub fn from_hsb(hue: f64, saturation: f64, brightness: f64) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let s = (saturation / 100.0).clamp(0.0, 1.0);
        let v = (brightness / 100.0).clamp(0.0, 1.0);

        let chroma = v * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = v - chroma;
        let channel = |c: f64| ((c + m) * 255.0).round() as u8;
        Self::opaque(channel(r), channel(g), channel(b))
    }

    /// Composite over an opaque backdrop.
    pub fn over(self, backdrop: Rgba) -> Rgba {
        let alpha = f64::from(self.a) / 255.0;
        let mix = |top: u8, bottom: u8| {
            (f64::from(top) * alpha + f64::from(bottom) * (1.0 - alpha)).round() as u8
        };
        Rgba::opaque(
            mix(self.r, backdrop.r),
            mix(self.g, backdrop.g),
            mix(self.b, backdrop.b),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsb_primaries() {
        assert_eq!(Rgba::from_hsb(0.0, 100.0, 100.0), Rgba::opaque(255, 0, 0));
        assert_eq!(Rgba::from_hsb(120.0, 100.0, 100.0), Rgba::opaque(0, 255, 0));
        assert_eq!(Rgba::from_hsb(240.0, 100.0, 100.0), Rgba::opaque(0, 0, 255));
        assert_eq!(Rgba::from_hsb(360.0, 100.0, 100.0), Rgba::opaque(255, 0, 0));
        assert_eq!(Rgba::from_hsb(42.0, 0.0, 100.0), Rgba::opaque(255, 255, 255));
    }

    #[test]
    fn compositing_respects_alpha() {
        let red = Rgba::opaque(255, 0, 0);
        assert_eq!(red.over(BACKGROUND), red);
        assert_eq!(red.with_alpha(0).over(BACKGROUND), BACKGROUND);
        let half = Rgba::new(255, 255, 255, 128).over(Rgba::opaque(0, 0, 0));
        assert_eq!(half, Rgba::opaque(128, 128, 128));
    }
}
