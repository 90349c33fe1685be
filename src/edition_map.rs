//! Java/Bedrock id translation
//!
//! Legacy numeric block and item ids differ between the two editions. Four
//! independent tables map ids across: each direction is populated on its own and
//! may have gaps or disagree with its reverse. A missing key means the target
//! edition has no known equivalent and the id should be treated as native.

use fnv::FnvHashMap;

/// World format edition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Edition {
    Java,
    Bedrock,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TranslationTable {
    JavaToBedrockBlock,
    BedrockToJavaBlock,
    JavaToBedrockItem,
    BedrockToJavaItem,
}

impl TranslationTable {
    pub const ALL: [TranslationTable; 4] = [
        TranslationTable::JavaToBedrockBlock,
        TranslationTable::BedrockToJavaBlock,
        TranslationTable::JavaToBedrockItem,
        TranslationTable::BedrockToJavaItem,
    ];

    /// Block table for a `from` -> `to` translation; `None` when the editions match.
    pub fn blocks(from: Edition, to: Edition) -> Option<Self> {
        match (from, to) {
            (Edition::Java, Edition::Bedrock) => Some(Self::JavaToBedrockBlock),
            (Edition::Bedrock, Edition::Java) => Some(Self::BedrockToJavaBlock),
            _ => None,
        }
    }

    pub fn items(from: Edition, to: Edition) -> Option<Self> {
        match (from, to) {
            (Edition::Java, Edition::Bedrock) => Some(Self::JavaToBedrockItem),
            (Edition::Bedrock, Edition::Java) => Some(Self::BedrockToJavaItem),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::JavaToBedrockBlock => "java_to_bedrock_block",
            Self::BedrockToJavaBlock => "bedrock_to_java_block",
            Self::JavaToBedrockItem => "java_to_bedrock_item",
            Self::BedrockToJavaItem => "bedrock_to_java_item",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    fn index(self) -> usize {
        match self {
            Self::JavaToBedrockBlock => 0,
            Self::BedrockToJavaBlock => 1,
            Self::JavaToBedrockItem => 2,
            Self::BedrockToJavaItem => 3,
        }
    }
}

/// The four translation tables.
#[derive(Debug, Clone, Default)]
pub struct EditionTranslator {
    tables: [FnvHashMap<i32, i32>; 4],
}

impl EditionTranslator {
    /// Empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tables filled from the built-in id pairs.
    pub fn builtin() -> Self {
        let mut translator = Self::new();
        translator.extend(TranslationTable::JavaToBedrockBlock, JAVA_TO_BEDROCK_BLOCKS);
        translator.extend(TranslationTable::BedrockToJavaBlock, BEDROCK_TO_JAVA_BLOCKS);
        translator.extend(TranslationTable::JavaToBedrockItem, JAVA_TO_BEDROCK_ITEMS);
        translator.extend(TranslationTable::BedrockToJavaItem, BEDROCK_TO_JAVA_ITEMS);
        translator
    }

    /// Adds one mapping, returning the value it replaced.
    pub fn insert(&mut self, table: TranslationTable, from: i32, to: i32) -> Option<i32> {
        self.tables[table.index()].insert(from, to)
    }

    pub fn extend(&mut self, table: TranslationTable, pairs: &[(i32, i32)]) {
        self.tables[table.index()].extend(pairs.iter().copied());
    }

    pub fn translate(&self, table: TranslationTable, id: i32) -> Option<i32> {
        self.tables[table.index()].get(&id).copied()
    }

    /// Translation with the native fallback: an id without an equivalent comes back
    /// unchanged.
    pub fn translate_or_native(&self, table: TranslationTable, id: i32) -> i32 {
        self.translate(table, id).unwrap_or(id)
    }

    /// Block id as seen by `to`. Same-edition lookups return `id` as is.
    pub fn translate_block(&self, from: Edition, to: Edition, id: i32) -> Option<i32> {
        match TranslationTable::blocks(from, to) {
            Some(table) => self.translate(table, id),
            None => Some(id),
        }
    }

    pub fn translate_item(&self, from: Edition, to: Edition, id: i32) -> Option<i32> {
        match TranslationTable::items(from, to) {
            Some(table) => self.translate(table, id),
            None => Some(id),
        }
    }

    pub fn len(&self, table: TranslationTable) -> usize {
        self.tables[table.index()].len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.iter().all(|t| t.is_empty())
    }
}

// Legacy (pre-flattening) numeric ids.
const JAVA_TO_BEDROCK_BLOCKS: &[(i32, i32)] = &[
    (95, 241),  // stained glass
    (125, 157), // double wooden slab
    (126, 158), // wooden slab
    (157, 126), // activator rail
    (158, 125), // dropper
    (166, 95),  // barrier
    (198, 208), // end rod
    (199, 240), // chorus plant
    (202, 201), // purpur pillar
    (204, 181), // purpur double slab
    (205, 182), // purpur slab
    (207, 244), // beetroots
    (208, 198), // grass path
    (210, 188), // repeating command block
    (211, 189), // chain command block
    (212, 207), // frosted ice
    (255, 252), // structure block
];

const BEDROCK_TO_JAVA_BLOCKS: &[(i32, i32)] = &[
    (241, 95),
    (157, 125),
    (158, 126),
    (126, 157),
    (125, 158),
    (95, 166),
    (208, 198),
    (240, 199),
    (201, 202),
    (244, 207),
    (198, 208),
    (188, 210),
    (189, 211),
    (207, 212),
    (252, 255),
    // no counterpart in the other direction
    (243, 3),  // podzol
    (247, 49), // nether reactor core
    (248, 1),  // update block
    (249, 1),  // ate!upd
];

const JAVA_TO_BEDROCK_ITEMS: &[(i32, i32)] = &[
    (416, 425), // armor stand
    (425, 446), // banner
    (434, 457), // beetroot
    (435, 458), // beetroot seeds
    (436, 459), // beetroot soup
    (443, 444), // elytra
    (422, 443), // minecart with command block
];

const BEDROCK_TO_JAVA_ITEMS: &[(i32, i32)] = &[
    (425, 416),
    (446, 425),
    (457, 434),
    (458, 435),
    (459, 436),
    (444, 443),
    (443, 422),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_blocks() {
        let t = EditionTranslator::builtin();
        assert_eq!(t.translate(TranslationTable::JavaToBedrockBlock, 125), Some(157));
        assert_eq!(t.translate(TranslationTable::BedrockToJavaBlock, 157), Some(125));
        assert_eq!(t.translate(TranslationTable::JavaToBedrockBlock, 1), None);
    }

    #[test]
    fn test_asymmetric_tables() {
        let t = EditionTranslator::builtin();
        // podzol only translates one way
        assert_eq!(t.translate(TranslationTable::BedrockToJavaBlock, 243), Some(3));
        assert_eq!(t.translate(TranslationTable::JavaToBedrockBlock, 3), None);
    }

    #[test]
    fn test_missing_reverse_key() {
        let mut t = EditionTranslator::new();
        t.insert(TranslationTable::JavaToBedrockItem, 700, 800);
        assert_eq!(t.translate(TranslationTable::JavaToBedrockItem, 700), Some(800));
        assert_eq!(t.translate(TranslationTable::BedrockToJavaItem, 700), None);
        assert_eq!(t.translate(TranslationTable::BedrockToJavaItem, 800), None);
        assert_eq!(t.translate_or_native(TranslationTable::BedrockToJavaItem, 800), 800);
    }

    #[test]
    fn test_edition_dispatch() {
        let t = EditionTranslator::builtin();
        assert_eq!(t.translate_block(Edition::Java, Edition::Bedrock, 208), Some(198));
        assert_eq!(t.translate_block(Edition::Bedrock, Edition::Java, 198), Some(208));
        assert_eq!(t.translate_block(Edition::Java, Edition::Java, 9999), Some(9999));
        assert_eq!(t.translate_item(Edition::Bedrock, Edition::Java, 446), Some(425));
        assert_eq!(t.translate_item(Edition::Java, Edition::Bedrock, 1), None);
    }

    #[test]
    fn test_table_names() {
        for table in TranslationTable::ALL {
            assert_eq!(TranslationTable::from_name(table.name()), Some(table));
        }
        assert_eq!(TranslationTable::from_name("bogus"), None);
    }

    #[test]
    fn test_insert_overwrites() {
        let mut t = EditionTranslator::new();
        assert!(t.is_empty());
        assert_eq!(t.insert(TranslationTable::JavaToBedrockBlock, 1, 2), None);
        assert_eq!(t.insert(TranslationTable::JavaToBedrockBlock, 1, 3), Some(2));
        assert_eq!(t.len(TranslationTable::JavaToBedrockBlock), 1);
        assert_eq!(t.len(TranslationTable::BedrockToJavaBlock), 0);
    }
}
