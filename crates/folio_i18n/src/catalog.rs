use serde_json::Value;
use thiserror::Error;

/// A translation catalog for one language: a nested JSON document whose
/// string leaves are addressed by dot-separated key paths.
///
/// Both plain dot notation and array-index notation resolve:
/// - `"contact.title"`
/// - `"ai.services[0].title"` (equivalent to `"ai.services.0.title"`)
///
/// Catalogs are loaded wholesale at startup and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct Catalog {
    root: Value,
}

impl Catalog {
    /// Parse a catalog from JSON source. The top level must be an object.
    pub fn parse(src: &str) -> Result<Self, CatalogError> {
        let root: Value = serde_json::from_str(src)?;
        Self::from_value(root)
    }

    pub fn from_value(root: Value) -> Result<Self, CatalogError> {
        if !root.is_object() {
            return Err(CatalogError::NotAnObject);
        }
        Ok(Self { root })
    }

    /// Look up a key path, returning the leaf only when it is a string.
    ///
    /// Absent keys, intermediate non-containers, and non-string leaves all
    /// yield `None`; the caller's fallback chain handles the miss.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let mut node = &self.root;
        for seg in key_segments(key) {
            node = match node {
                Value::Object(map) => map.get(seg)?,
                Value::Array(items) => {
                    let idx: usize = seg.parse().ok()?;
                    items.get(idx)?
                }
                _ => return None,
            };
        }
        node.as_str()
    }

    /// Key paths of every string leaf, in array-index notation
    /// (`"process.steps[0].title"`). Used by the catalog checker to diff
    /// languages against the default one.
    pub fn string_paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_string_paths(&self.root, String::new(), &mut out);
        out.sort_unstable();
        out
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog root must be a JSON object")]
    NotAnObject,
}

/// Split a key path into segments, unfolding `name[3]` into `name`, `3`.
fn key_segments(key: &str) -> impl Iterator<Item = &str> {
    key.split('.').flat_map(|piece| {
        let mut segs = Vec::new();
        let mut rest = piece;
        loop {
            match rest.find('[') {
                None => {
                    if !rest.is_empty() {
                        segs.push(rest);
                    }
                    break;
                }
                Some(open) => {
                    if open > 0 {
                        segs.push(&rest[..open]);
                    }
                    match rest[open..].find(']') {
                        Some(close) => {
                            segs.push(&rest[open + 1..open + close]);
                            rest = &rest[open + close + 1..];
                        }
                        None => {
                            // Unterminated bracket: keep it literal.
                            segs.push(&rest[open..]);
                            break;
                        }
                    }
                }
            }
        }
        segs
    })
}

fn collect_string_paths(node: &Value, prefix: String, out: &mut Vec<String>) {
    match node {
        Value::String(_) => out.push(prefix),
        Value::Object(map) => {
            for (k, v) in map {
                let path = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                collect_string_paths(v, path, out);
            }
        }
        Value::Array(items) => {
            for (i, v) in items.iter().enumerate() {
                collect_string_paths(v, format!("{prefix}[{i}]"), out);
            }
        }
        _ => {}
    }
}
