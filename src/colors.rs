//! Packed colors for raw-copy pixel writes.
//!
//! Colors are authored as `0xRRGGBB` and packed exactly once, when a definition is
//! configured. A packed color keeps its bytes in `R, G, B, pad` order in memory, so
//! writing a pixel is a plain byte copy of the leading three bytes regardless of the
//! host byte order.

use image::RgbImage;
use std::fmt;

/// Sentinel color for entries nobody authored a color for (magenta).
pub const DEFAULT_RGB: u32 = 0xFF00FF;

/// A 24-bit color stored in image byte order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PackedColor(u32);

impl PackedColor {
    pub const DEFAULT: PackedColor = PackedColor::pack(DEFAULT_RGB);

    /// Packs a `0xRRGGBB` value. Bits above the low 24 are ignored.
    pub const fn pack(rgb: u32) -> Self {
        let r = ((rgb >> 16) & 0xFF) as u8;
        let g = ((rgb >> 8) & 0xFF) as u8;
        let b = (rgb & 0xFF) as u8;
        Self(u32::from_ne_bytes([r, g, b, 0]))
    }

    /// Inverse of [`PackedColor::pack`].
    pub const fn unpack(self) -> u32 {
        let [r, g, b, _] = self.0.to_ne_bytes();
        ((r as u32) << 16) | ((g as u32) << 8) | b as u32
    }

    /// The stored bytes, in the order they land in an image buffer.
    pub const fn as_bytes(self) -> [u8; 4] {
        self.0.to_ne_bytes()
    }

    /// The raw stored value. Only meaningful on the host that packed it.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Copies this color into `buf` at byte offset `offset` (three bytes).
    ///
    /// Returns `false` if the destination does not hold a full pixel.
    #[inline]
    pub fn write_rgb(self, buf: &mut [u8], offset: usize) -> bool {
        match offset.checked_add(3).and_then(|end| buf.get_mut(offset..end)) {
            Some(dst) => {
                dst.copy_from_slice(&self.as_bytes()[..3]);
                true
            }
            None => false,
        }
    }
}

impl Default for PackedColor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u32> for PackedColor {
    fn from(rgb: u32) -> Self {
        Self::pack(rgb)
    }
}

impl fmt::Display for PackedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.unpack())
    }
}

/// Packs a `0xRRGGBB` value; see [`PackedColor::pack`].
pub const fn pack(rgb: u32) -> PackedColor {
    PackedColor::pack(rgb)
}

/// Writes `color` at pixel (`x`, `y`) by copying the packed bytes straight into the
/// image's backing buffer. Clipping is the caller's job: out-of-range pixels are
/// skipped and reported with `false`.
pub fn write_pixel(img: &mut RgbImage, x: u32, y: u32, color: PackedColor) -> bool {
    if x >= img.width() || y >= img.height() {
        return false;
    }
    let offset = (y as usize * img.width() as usize + x as usize) * 3;
    let pixels: &mut [u8] = img;
    color.write_rgb(pixels, offset)
}

/// Parses color text from a definition document into `0xRRGGBB`.
///
/// Accepts `#rrggbb`, `#rgb`, `0xrrggbb` and a handful of color names.
pub fn color_text_to_rgb(text: &str) -> Option<u32> {
    let text = text.trim();
    full_hex_color_to_rgb(text)
        .or_else(|| short_hex_color_to_rgb(text))
        .or_else(|| prefixed_hex_color_to_rgb(text))
        .or_else(|| color_name_to_rgb(text))
}

fn full_hex_color_to_rgb(text: &str) -> Option<u32> {
    let digits = text.strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

fn short_hex_color_to_rgb(text: &str) -> Option<u32> {
    let digits = text.strip_prefix('#')?;
    if digits.len() != 3 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let mut rgb = 0u32;
    for c in digits.chars() {
        let v = c.to_digit(16)?;
        rgb = (rgb << 8) | (v << 4) | v;
    }
    Some(rgb)
}

fn prefixed_hex_color_to_rgb(text: &str) -> Option<u32> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))?;
    if digits.is_empty() || digits.len() > 6 {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

fn color_name_to_rgb(text: &str) -> Option<u32> {
    Some(match text.to_ascii_lowercase().as_str() {
        "aqua" | "cyan" => 0x00FFFF,
        "black" => 0x000000,
        "blue" => 0x0000FF,
        "brown" => 0x804000,
        "fuchsia" | "magenta" => 0xFF00FF,
        "gray" | "grey" => 0x808080,
        "green" => 0x008000,
        "lime" => 0x00FF00,
        "maroon" => 0x800000,
        "navy" => 0x000080,
        "olive" => 0x808000,
        "orange" => 0xFF8000,
        "purple" => 0x800080,
        "red" => 0xFF0000,
        "silver" => 0xC0C0C0,
        "white" => 0xFFFFFF,
        "yellow" => 0xFFFF00,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_packed_byte_order() {
        assert_eq!(pack(0x123456).as_bytes(), [0x12, 0x34, 0x56, 0x00]);
        assert_eq!(pack(0x888888).as_bytes(), [0x88, 0x88, 0x88, 0x00]);
        // bits above 24 are dropped
        assert_eq!(pack(0xAB123456), pack(0x123456));
    }

    #[test]
    fn test_pack_unpack_is_stable() {
        for rgb in [0x000000, 0xFFFFFF, 0xFF00FF, 0x010203, 0x7D7D7D, 0xC0FFEE] {
            let packed = pack(rgb);
            assert_eq!(packed.unpack(), rgb);
            assert_eq!(pack(packed.unpack()), packed);
        }
        // walk the whole 24-bit space with a coarse stride
        for rgb in (0..=0xFF_FFFFu32).step_by(0x1_0101) {
            assert_eq!(pack(pack(rgb).unpack()), pack(rgb));
        }
    }

    #[test]
    fn test_default_is_magenta() {
        assert_eq!(PackedColor::default().unpack(), 0xFF00FF);
        assert_eq!(PackedColor::DEFAULT.to_string(), "#ff00ff");
    }

    #[test]
    fn test_write_pixel_raw_copy() {
        let mut img = RgbImage::from_pixel(4, 3, Rgb([255, 255, 255]));
        assert!(write_pixel(&mut img, 2, 1, pack(0x336699)));
        assert_eq!(*img.get_pixel(2, 1), Rgb([0x33, 0x66, 0x99]));
        assert_eq!(*img.get_pixel(1, 1), Rgb([255, 255, 255]));

        assert!(!write_pixel(&mut img, 4, 0, pack(0x000000)));
        assert!(!write_pixel(&mut img, 0, 3, pack(0x000000)));
    }

    #[test]
    fn test_write_rgb_short_buffer() {
        let mut buf = [0u8; 5];
        assert!(pack(0x010203).write_rgb(&mut buf, 2));
        assert_eq!(buf, [0, 0, 1, 2, 3]);
        assert!(!pack(0x010203).write_rgb(&mut buf, 3));
        // offsets near the top of the address range must not wrap
        assert!(!pack(0x010203).write_rgb(&mut buf, usize::MAX - 1));
        assert!(!pack(0x010203).write_rgb(&mut buf, usize::MAX));
        assert_eq!(buf, [0, 0, 1, 2, 3]);
    }

    #[test]
    fn test_color_text() {
        assert_eq!(color_text_to_rgb("#a0b1c2"), Some(0xA0B1C2));
        assert_eq!(color_text_to_rgb("#fa0"), Some(0xFFAA00));
        assert_eq!(color_text_to_rgb("0x7d7d7d"), Some(0x7D7D7D));
        assert_eq!(color_text_to_rgb(" Magenta "), Some(0xFF00FF));
        assert_eq!(color_text_to_rgb("#12345"), None);
        assert_eq!(color_text_to_rgb("0x1234567"), None);
        assert_eq!(color_text_to_rgb("notacolor"), None);
    }
}
