/// Namespace assumed for identifier codes written without one.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// An entity type. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityInfo {
    id: i32,
    identifier: String,
    id_string: String,
    name: String,
    etype: String,
}

impl EntityInfo {
    /// `identifier` is the namespaced code (`minecraft:zombie`); a bare code gets the
    /// default namespace. `id_string` is the legacy id string (`Zombie`).
    pub fn new(id: i32, identifier: &str, id_string: &str, name: &str, etype: &str) -> Self {
        Self {
            id,
            identifier: normalize_identifier(identifier),
            id_string: id_string.to_string(),
            name: name.to_string(),
            etype: etype.to_string(),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn id_string(&self) -> &str {
        &self.id_string
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn etype(&self) -> &str {
        &self.etype
    }
}

/// Adds the default namespace to a bare identifier code.
pub fn normalize_identifier(code: &str) -> String {
    let code = code.trim();
    if code.contains(':') {
        code.to_string()
    } else {
        format!("{DEFAULT_NAMESPACE}:{code}")
    }
}
