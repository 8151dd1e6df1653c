//! Raw sidebar normalization.
//!
//! Converts the loose JSON sidebar description into the canonical
//! [`SidebarItem`] tree, validating shape as it goes. A raw item comes in
//! three forms:
//!
//! - a bare string, a document reference
//! - an object without a `type` key, category shorthand: every key is a
//!   category label whose value must be an array of items
//! - an explicitly tagged object (`doc`, `ref`, `link`, `category`)
//!
//! Normalizing one raw item can produce zero or more canonical items
//! (shorthand expands to one category per key), so item normalization
//! returns a `Vec` and parents flatten. Normalization is all-or-nothing: the
//! first malformed entry aborts with a [`ValidationError`] carrying the
//! offending item.

use serde_json::{Map, Value};

use crate::item::{Sidebar, SidebarCollection, SidebarItem};

/// Keys permitted on an explicit `category` object.
const CATEGORY_KEYS: &[&str] = &["type", "label", "collapsed", "items"];
/// Keys permitted on `doc` and `ref` objects.
const DOC_KEYS: &[&str] = &["type", "id"];
/// Keys permitted on a `link` object.
const LINK_KEYS: &[&str] = &["type", "href", "label"];

/// Fatal sidebar shape error.
///
/// Every variant carries the offending item (rendered as compact JSON) so
/// the author can find it without a line number.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// Top-level value is not an object mapping names to sidebars.
    #[error("sidebars must be a mapping of sidebar names to sidebars, got {found}")]
    InvalidCollection {
        /// JSON type of the value found.
        found: &'static str,
    },
    /// A named sidebar is neither an array nor a shorthand mapping.
    #[error("sidebar `{name}` must be an array of items or a mapping of category labels to arrays, got {found}")]
    InvalidSidebar {
        /// Sidebar name.
        name: String,
        /// JSON type of the value found.
        found: &'static str,
    },
    /// An item is neither a string nor an object.
    #[error("sidebar item must be a string or an object, got: {item}")]
    UnexpectedShape {
        /// Offending value.
        item: String,
    },
    /// An explicitly tagged item has an unrecognized `type`.
    #[error("unknown sidebar item type `{found}` in: {item}")]
    UnknownType {
        /// The unrecognized type value.
        found: String,
        /// Offending item.
        item: String,
    },
    /// The legacy `subcategory` spelling.
    #[error("sidebar item type `subcategory` was renamed to `category`, in: {item}")]
    RenamedType {
        /// Offending item.
        item: String,
    },
    /// A tagged item carries keys outside its allowed set.
    #[error("unknown keys [{keys}] on `{kind}` item: {item}")]
    UnknownKeys {
        /// Comma-separated unknown key names.
        keys: String,
        /// Item type.
        kind: String,
        /// Offending item.
        item: String,
    },
    /// A required field is absent.
    #[error("`{kind}` item is missing required field `{field}`: {item}")]
    MissingField {
        /// Field name.
        field: &'static str,
        /// Item type.
        kind: String,
        /// Offending item.
        item: String,
    },
    /// A field is present but has the wrong type or an empty value.
    #[error("field `{field}` on `{kind}` item must be {expected}, in: {item}")]
    InvalidField {
        /// Field name.
        field: String,
        /// Item type.
        kind: String,
        /// Description of the expected shape.
        expected: &'static str,
        /// Offending item.
        item: String,
    },
}

/// Normalize a raw sidebar collection.
///
/// The input must be an object mapping sidebar names to sidebar values; a
/// sidebar value is either an array of items or a plain mapping (category
/// shorthand applied at the top level). Key order is preserved as the
/// collection's insertion order.
///
/// # Errors
///
/// Returns [`ValidationError`] on the first malformed entry; nothing is
/// partially normalized.
pub fn normalize(raw: &Value) -> Result<SidebarCollection, ValidationError> {
    let Value::Object(map) = raw else {
        return Err(ValidationError::InvalidCollection {
            found: json_kind(raw),
        });
    };

    let mut sidebars = SidebarCollection::new();
    for (name, value) in map {
        sidebars.insert(name.clone(), normalize_sidebar(name, value)?);
    }
    Ok(sidebars)
}

/// Normalize one named sidebar value.
fn normalize_sidebar(name: &str, raw: &Value) -> Result<Sidebar, ValidationError> {
    match raw {
        Value::Array(items) => normalize_items(items),
        Value::Object(map) => expand_shorthand(map),
        other => Err(ValidationError::InvalidSidebar {
            name: name.to_owned(),
            found: json_kind(other),
        }),
    }
}

/// Flatten-map normalization over a raw item sequence.
///
/// One raw item may expand to several canonical siblings, so results are
/// concatenated rather than mapped one-to-one.
fn normalize_items(raw: &[Value]) -> Result<Vec<SidebarItem>, ValidationError> {
    let mut items = Vec::with_capacity(raw.len());
    for value in raw {
        items.extend(normalize_item(value)?);
    }
    Ok(items)
}

/// Normalize a single raw item into zero or more canonical items.
fn normalize_item(raw: &Value) -> Result<Vec<SidebarItem>, ValidationError> {
    match raw {
        Value::String(id) => {
            if id.is_empty() {
                return Err(ValidationError::InvalidField {
                    field: "id".to_owned(),
                    kind: "doc".to_owned(),
                    expected: "a non-empty string",
                    item: raw.to_string(),
                });
            }
            Ok(vec![SidebarItem::doc(id.clone())])
        }
        Value::Object(map) => match map.get("type") {
            None => expand_shorthand(map),
            Some(Value::String(kind)) => normalize_tagged(kind, map, raw),
            Some(_) => Err(ValidationError::InvalidField {
                field: "type".to_owned(),
                kind: "sidebar".to_owned(),
                expected: "a string",
                item: raw.to_string(),
            }),
        },
        other => Err(ValidationError::UnexpectedShape {
            item: other.to_string(),
        }),
    }
}

/// Expand a category-shorthand object: one category per key, collapsed by
/// default, with the key's array value as children.
fn expand_shorthand(map: &Map<String, Value>) -> Result<Vec<SidebarItem>, ValidationError> {
    let mut categories = Vec::with_capacity(map.len());
    for (label, value) in map {
        let Value::Array(raw_items) = value else {
            return Err(ValidationError::InvalidField {
                field: label.clone(),
                kind: "category shorthand".to_owned(),
                expected: "an array of items",
                item: value.to_string(),
            });
        };
        categories.push(SidebarItem::Category {
            label: label.clone(),
            collapsed: true,
            items: normalize_items(raw_items)?,
        });
    }
    Ok(categories)
}

/// Normalize an explicitly tagged item object.
fn normalize_tagged(
    kind: &str,
    map: &Map<String, Value>,
    raw: &Value,
) -> Result<Vec<SidebarItem>, ValidationError> {
    match kind {
        "category" => {
            check_keys(map, CATEGORY_KEYS, kind, raw)?;
            let label = require_string(map, "label", kind, raw)?;
            let collapsed = match map.get("collapsed") {
                None => true,
                Some(Value::Bool(value)) => *value,
                Some(_) => {
                    return Err(ValidationError::InvalidField {
                        field: "collapsed".to_owned(),
                        kind: kind.to_owned(),
                        expected: "a boolean",
                        item: raw.to_string(),
                    });
                }
            };
            let items = match map.get("items") {
                Some(Value::Array(raw_items)) => normalize_items(raw_items)?,
                Some(_) => {
                    return Err(ValidationError::InvalidField {
                        field: "items".to_owned(),
                        kind: kind.to_owned(),
                        expected: "an array of items",
                        item: raw.to_string(),
                    });
                }
                None => {
                    return Err(ValidationError::MissingField {
                        field: "items",
                        kind: kind.to_owned(),
                        item: raw.to_string(),
                    });
                }
            };
            Ok(vec![SidebarItem::Category {
                label,
                collapsed,
                items,
            }])
        }
        "doc" | "ref" => {
            check_keys(map, DOC_KEYS, kind, raw)?;
            let id = require_string(map, "id", kind, raw)?;
            Ok(vec![SidebarItem::Doc { id }])
        }
        "link" => {
            check_keys(map, LINK_KEYS, kind, raw)?;
            let href = require_string(map, "href", kind, raw)?;
            let label = require_string(map, "label", kind, raw)?;
            Ok(vec![SidebarItem::Link { href, label }])
        }
        "subcategory" => Err(ValidationError::RenamedType {
            item: raw.to_string(),
        }),
        other => Err(ValidationError::UnknownType {
            found: other.to_owned(),
            item: raw.to_string(),
        }),
    }
}

/// Reject keys outside the allowed set, naming the offenders.
fn check_keys(
    map: &Map<String, Value>,
    allowed: &[&str],
    kind: &str,
    raw: &Value,
) -> Result<(), ValidationError> {
    let unknown: Vec<&str> = map
        .keys()
        .map(String::as_str)
        .filter(|key| !allowed.contains(key))
        .collect();
    if unknown.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::UnknownKeys {
            keys: unknown.join(", "),
            kind: kind.to_owned(),
            item: raw.to_string(),
        })
    }
}

/// Extract a required non-empty string field.
fn require_string(
    map: &Map<String, Value>,
    field: &'static str,
    kind: &str,
    raw: &Value,
) -> Result<String, ValidationError> {
    match map.get(field) {
        Some(Value::String(value)) if !value.is_empty() => Ok(value.clone()),
        Some(_) => Err(ValidationError::InvalidField {
            field: field.to_owned(),
            kind: kind.to_owned(),
            expected: "a non-empty string",
            item: raw.to_string(),
        }),
        None => Err(ValidationError::MissingField {
            field,
            kind: kind.to_owned(),
            item: raw.to_string(),
        }),
    }
}

/// JSON type name for error messages.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
