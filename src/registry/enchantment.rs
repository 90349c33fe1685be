#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnchantmentInfo {
    id: i32,
    name: String,
    official_name: Option<String>,
}

impl EnchantmentInfo {
    pub fn new(id: i32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            official_name: None,
        }
    }

    pub fn with_official_name(mut self, official_name: &str) -> Self {
        self.official_name = Some(official_name.to_string());
        self
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    /// Internal name, as stored in the save.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn official_name(&self) -> Option<&str> {
        self.official_name.as_deref()
    }

    /// The official name when there is one.
    pub fn display_name(&self) -> &str {
        self.official_name().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let e = EnchantmentInfo::new(9, "fire");
        assert_eq!(e.display_name(), "fire");
        let e = e.with_official_name("Fire Aspect");
        assert_eq!(e.display_name(), "Fire Aspect");
        assert_eq!(e.name(), "fire");
    }
}
