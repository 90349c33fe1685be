use crate::colors::PackedColor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiomeInfo {
    id: i32,
    name: String,
    color: PackedColor,
    color_set: bool,
}

impl BiomeInfo {
    /// A biome drawn with the sentinel color.
    pub fn new(id: i32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            color: PackedColor::DEFAULT,
            color_set: false,
        }
    }

    pub fn with_color(id: i32, name: &str, rgb: u32) -> Self {
        let mut biome = Self::new(id, name);
        biome.set_color(rgb);
        biome
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> PackedColor {
        self.color
    }

    pub fn is_color_set(&self) -> bool {
        self.color_set
    }

    pub fn set_name(&mut self, name: &str) -> &mut Self {
        self.name = name.to_string();
        self
    }

    pub fn set_color(&mut self, rgb: u32) -> &mut Self {
        self.color = PackedColor::pack(rgb);
        self.color_set = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_biome_color_flag() {
        let plain = BiomeInfo::new(1, "Plains");
        assert!(!plain.is_color_set());
        assert_eq!(plain.color().unpack(), 0xFF00FF);

        let ocean = BiomeInfo::with_color(0, "Ocean", 0x000070);
        assert!(ocean.is_color_set());
        assert_eq!(ocean.color().as_bytes(), [0x00, 0x00, 0x70, 0x00]);
    }
}
