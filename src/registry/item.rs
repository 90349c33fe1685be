use super::scratch::Scratch;
use super::VariantMatch;
use log::warn;

/// An item type. Variants are keyed by the item's extra data.
#[derive(Debug)]
pub struct ItemInfo {
    id: i32,
    name: String,
    variants: Vec<ItemVariant>,
    scratch: Scratch,
}

impl ItemInfo {
    pub(crate) fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            variants: Vec::new(),
            scratch: Scratch::default(),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn variants(&self) -> &[ItemVariant] {
        &self.variants
    }

    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }

    pub fn scratch(&self) -> &Scratch {
        &self.scratch
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn add_variant(&mut self, extra_data: i32, name: impl Into<String>) -> &mut ItemVariant {
        self.variants.push(ItemVariant {
            extra_data,
            name: name.into(),
            scratch: Scratch::default(),
        });
        let last = self.variants.len() - 1;
        &mut self.variants[last]
    }

    pub fn find_variant(&self, extra_data: i32) -> Option<&ItemVariant> {
        self.variants.iter().find(|v| v.extra_data == extra_data)
    }

    pub fn lookup_variant(&self, extra_data: i32) -> VariantMatch<'_, ItemVariant> {
        if self.variants.is_empty() {
            return VariantMatch::NoVariants;
        }
        match self.find_variant(extra_data) {
            Some(variant) => VariantMatch::Matched(variant),
            None => VariantMatch::Fallback,
        }
    }

    /// Variant name for `extra_data`, or the base name.
    pub fn resolve_name(&self, extra_data: i32) -> &str {
        match self.lookup_variant(extra_data) {
            VariantMatch::Matched(variant) => &variant.name,
            VariantMatch::Fallback => {
                warn!(
                    "did not find extradata {} (0x{:x}) for item '{}' (id {})",
                    extra_data, extra_data, self.name, self.id
                );
                &self.name
            }
            VariantMatch::NoVariants => &self.name,
        }
    }
}

#[derive(Debug)]
pub struct ItemVariant {
    extra_data: i32,
    name: String,
    scratch: Scratch,
}

impl ItemVariant {
    pub fn extra_data(&self) -> i32 {
        self.extra_data
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scratch(&self) -> &Scratch {
        &self.scratch
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_variants() {
        let mut dye = ItemInfo::new(351, "dye");
        dye.add_variant(0, "ink sac");
        dye.add_variant(4, "lapis lazuli");

        assert_eq!(dye.resolve_name(4), "lapis lazuli");
        assert_eq!(dye.resolve_name(0), "ink sac");
        assert_eq!(dye.resolve_name(99), "dye");
        assert!(matches!(dye.lookup_variant(99), VariantMatch::Fallback));
    }

    #[test]
    fn test_item_without_variants() {
        let item = ItemInfo::new(256, "iron shovel");
        assert!(!item.has_variants());
        assert_eq!(item.resolve_name(12), "iron shovel");
        assert!(matches!(item.lookup_variant(12), VariantMatch::NoVariants));
    }

    #[test]
    fn test_first_matching_variant_wins() {
        let mut item = ItemInfo::new(373, "potion");
        item.add_variant(1, "first");
        item.add_variant(1, "second");
        assert_eq!(item.resolve_name(1), "first");
    }
}
