// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field definition and per-artifact derivation.
//!
//! A [`Field`] is read once from the datamodel and never mutated. Each
//! artifact that needs a changed view (optional in update, list-typed in
//! the filter input, retyped as a relation input) calls [`Field::derive`]
//! with a [`FieldPatch`] and gets a fresh value back.
//!
//! # DMMF Kinds
//!
//! | JSON `kind` | `relationName` | [`FieldKind`] |
//! |-------------|----------------|---------------|
//! | `scalar` | - | `Scalar` |
//! | `unsupported` | - | `Scalar` |
//! | `enum` | - | `Enum` |
//! | `object` | present | `Relation` |
//! | `object` | absent | `Embedded` |

use serde::Deserialize;
use serde_json::{Number, Value};

/// What a field's `type_name` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Built-in scalar (`String`, `Int`, `DateTime`, `Json`, ...).
    Scalar,

    /// Enum declared in the datamodel.
    Enum,

    /// Another model, linked through a relation.
    Relation,

    /// Composite type embedded in the owning model.
    Embedded,

    /// Class generated alongside the artifact (unique or relation input).
    /// The type name is used verbatim.
    InputType
}

/// Default value declared in the schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    /// Array default, e.g. `["a", "b"]`.
    List(Vec<Value>),

    /// Boolean literal.
    Bool(bool),

    /// Numeric literal.
    Number(Number),

    /// String or enum literal.
    String(String),

    /// Database function such as `autoincrement()` or `now()`.
    Function {
        /// Function name.
        name: String,
        /// Function arguments.
        #[serde(default)]
        args: Vec<Value>
    },

    /// Any other shape; never rendered.
    Other(Value)
}

impl DefaultValue {
    /// Text rendered into decorators, or `None` for unrecognised shapes.
    ///
    /// Lists are serialized as compact JSON, functions pass their name.
    /// Whole floats drop their fraction (`1.0` renders as `1`).
    #[must_use]
    pub fn literal(&self) -> Option<String> {
        match self {
            Self::List(values) => serde_json::to_string(values).ok(),
            Self::Bool(b) => Some(b.to_string()),
            Self::Number(n) => Some(match n.as_f64() {
                Some(float) if n.is_f64() => float.to_string(),
                _ => n.to_string()
            }),
            Self::String(s) => Some(s.clone()),
            Self::Function {
                name, ..
            } => Some(name.clone()),
            Self::Other(_) => None
        }
    }
}

/// A field of a model or composite type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawField")]
pub struct Field {
    /// Field name, unique within its model.
    pub name:                 String,
    /// Scalar, enum, model or type name.
    pub type_name:            String,
    /// What `type_name` refers to.
    pub kind:                 FieldKind,
    /// Field holds a list.
    pub is_list:              bool,
    /// Field is required in the schema.
    pub is_required:          bool,
    /// Field is the single-column identifier.
    pub is_id:                bool,
    /// Field carries a single-column unique constraint.
    pub is_unique:            bool,
    /// Field is read-only in the schema (relation scalars).
    pub is_read_only:         bool,
    /// Field is maintained by `@updatedAt`.
    pub is_updated_at:        bool,
    /// Field declares a default value.
    pub has_default_value:    bool,
    /// Declared default, if any.
    pub default:              Option<DefaultValue>,
    /// Documentation comment, markers included.
    pub documentation:        Option<String>,
    /// Relation name for relation fields.
    pub relation_name:        Option<String>,
    /// Scalar fields backing the relation on this side.
    pub relation_from_fields: Vec<String>,
    /// Referenced fields on the other side.
    pub relation_to_fields:   Vec<String>
}

/// Overrides applied by [`Field::derive`]. `None` keeps the source value.
#[derive(Debug, Clone, Default)]
pub struct FieldPatch {
    /// New name.
    pub name:              Option<String>,
    /// New type name.
    pub type_name:         Option<String>,
    /// New kind.
    pub kind:              Option<FieldKind>,
    /// New list flag.
    pub is_list:           Option<bool>,
    /// New required flag.
    pub is_required:       Option<bool>,
    /// New default flag; clearing it also drops the default value.
    pub has_default_value: Option<bool>,
    /// New documentation.
    pub documentation:     Option<String>
}

impl Field {
    /// Create a field with every flag cleared.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            kind,
            is_list: false,
            is_required: false,
            is_id: false,
            is_unique: false,
            is_read_only: false,
            is_updated_at: false,
            has_default_value: false,
            default: None,
            documentation: None,
            relation_name: None,
            relation_from_fields: Vec::new(),
            relation_to_fields: Vec::new()
        }
    }

    /// Shorthand for a scalar field.
    #[must_use]
    pub fn scalar(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::new(name, type_name, FieldKind::Scalar)
    }

    /// Mark as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    /// Mark as list.
    #[must_use]
    pub fn list(mut self) -> Self {
        self.is_list = true;
        self
    }

    /// Mark as identifier.
    #[must_use]
    pub fn id(mut self) -> Self {
        self.is_id = true;
        self
    }

    /// Mark as unique.
    #[must_use]
    pub fn unique(mut self) -> Self {
        self.is_unique = true;
        self
    }

    /// Mark as read-only.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.is_read_only = true;
        self
    }

    /// Mark as `@updatedAt`.
    #[must_use]
    pub fn updated_at(mut self) -> Self {
        self.is_updated_at = true;
        self
    }

    /// Attach a default value.
    #[must_use]
    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.has_default_value = true;
        self.default = Some(default);
        self
    }

    /// Attach documentation.
    #[must_use]
    pub fn documented(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    /// Link as relation, with the local scalars backing it.
    #[must_use]
    pub fn relation(mut self, name: impl Into<String>, from: &[&str], to: &[&str]) -> Self {
        self.kind = FieldKind::Relation;
        self.relation_name = Some(name.into());
        self.relation_from_fields = from.iter().map(|s| (*s).to_string()).collect();
        self.relation_to_fields = to.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Documentation text, empty when absent.
    #[must_use]
    pub fn doc(&self) -> &str {
        self.documentation.as_deref().unwrap_or_default()
    }

    /// Produce a patched copy. `self` is left untouched.
    #[must_use]
    pub fn derive(&self, patch: FieldPatch) -> Self {
        let mut field = self.clone();
        if let Some(name) = patch.name {
            field.name = name;
        }
        if let Some(type_name) = patch.type_name {
            field.type_name = type_name;
        }
        if let Some(kind) = patch.kind {
            field.kind = kind;
        }
        if let Some(is_list) = patch.is_list {
            field.is_list = is_list;
        }
        if let Some(is_required) = patch.is_required {
            field.is_required = is_required;
        }
        if let Some(has_default) = patch.has_default_value {
            field.has_default_value = has_default;
            if !has_default {
                field.default = None;
            }
        }
        if let Some(documentation) = patch.documentation {
            field.documentation = Some(documentation);
        }
        field
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawKind {
    Scalar,
    Enum,
    Object,
    Unsupported
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawField {
    name:                 String,
    kind:                 RawKind,
    #[serde(rename = "type")]
    type_name:            String,
    #[serde(default)]
    is_list:              bool,
    #[serde(default)]
    is_required:          bool,
    #[serde(default)]
    is_id:                bool,
    #[serde(default)]
    is_unique:            bool,
    #[serde(default)]
    is_read_only:         bool,
    #[serde(default)]
    is_updated_at:        bool,
    #[serde(default)]
    has_default_value:    bool,
    #[serde(default)]
    default:              Option<DefaultValue>,
    #[serde(default)]
    documentation:        Option<String>,
    #[serde(default)]
    relation_name:        Option<String>,
    #[serde(default)]
    relation_from_fields: Option<Vec<String>>,
    #[serde(default)]
    relation_to_fields:   Option<Vec<String>>
}

impl From<RawField> for Field {
    fn from(raw: RawField) -> Self {
        let kind = match raw.kind {
            RawKind::Scalar | RawKind::Unsupported => FieldKind::Scalar,
            RawKind::Enum => FieldKind::Enum,
            RawKind::Object if raw.relation_name.is_some() => FieldKind::Relation,
            RawKind::Object => FieldKind::Embedded
        };
        Self {
            name: raw.name,
            type_name: raw.type_name,
            kind,
            is_list: raw.is_list,
            is_required: raw.is_required,
            is_id: raw.is_id,
            is_unique: raw.is_unique,
            is_read_only: raw.is_read_only,
            is_updated_at: raw.is_updated_at,
            has_default_value: raw.has_default_value,
            default: raw.default,
            documentation: raw.documentation,
            relation_name: raw.relation_name,
            relation_from_fields: raw.relation_from_fields.unwrap_or_default(),
            relation_to_fields: raw.relation_to_fields.unwrap_or_default()
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(value: Value) -> Field {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn object_with_relation_name_is_relation() {
        let field = parse(json!({
            "name": "author",
            "kind": "object",
            "type": "User",
            "relationName": "PostToUser",
            "relationFromFields": ["authorId"],
            "relationToFields": ["id"]
        }));
        assert_eq!(field.kind, FieldKind::Relation);
        assert_eq!(field.relation_from_fields, vec!["authorId"]);
    }

    #[test]
    fn object_without_relation_name_is_embedded() {
        let field = parse(json!({ "name": "address", "kind": "object", "type": "Address" }));
        assert_eq!(field.kind, FieldKind::Embedded);
    }

    #[test]
    fn unsupported_is_scalar() {
        let field = parse(json!({ "name": "geo", "kind": "unsupported", "type": "point" }));
        assert_eq!(field.kind, FieldKind::Scalar);
    }

    #[test]
    fn null_relation_lists_become_empty() {
        let field = parse(json!({
            "name": "id",
            "kind": "scalar",
            "type": "Int",
            "relationFromFields": null
        }));
        assert!(field.relation_from_fields.is_empty());
    }

    #[test]
    fn default_shapes() {
        let list: DefaultValue = serde_json::from_value(json!(["a", "b"])).unwrap();
        assert_eq!(list.literal().as_deref(), Some(r#"["a","b"]"#));

        let number: DefaultValue = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(number.literal().as_deref(), Some("42"));

        let whole: DefaultValue = serde_json::from_value(json!(1.0)).unwrap();
        assert_eq!(whole.literal().as_deref(), Some("1"));

        let fraction: DefaultValue = serde_json::from_value(json!(2.5)).unwrap();
        assert_eq!(fraction.literal().as_deref(), Some("2.5"));

        let negative: DefaultValue = serde_json::from_value(json!(-3)).unwrap();
        assert_eq!(negative.literal().as_deref(), Some("-3"));

        let flag: DefaultValue = serde_json::from_value(json!(false)).unwrap();
        assert_eq!(flag.literal().as_deref(), Some("false"));

        let text: DefaultValue = serde_json::from_value(json!("USER")).unwrap();
        assert_eq!(text.literal().as_deref(), Some("USER"));

        let function: DefaultValue =
            serde_json::from_value(json!({ "name": "autoincrement", "args": [] })).unwrap();
        assert_eq!(function.literal().as_deref(), Some("autoincrement"));

        let other: DefaultValue = serde_json::from_value(json!({ "weird": true })).unwrap();
        assert_eq!(other.literal(), None);
    }

    #[test]
    fn derive_leaves_source_untouched() {
        let source = Field::scalar("title", "String")
            .required()
            .with_default(DefaultValue::String("x".into()));
        let derived = source.derive(FieldPatch {
            name: Some("titleList".into()),
            is_list: Some(true),
            is_required: Some(false),
            has_default_value: Some(false),
            ..FieldPatch::default()
        });

        assert_eq!(derived.name, "titleList");
        assert!(derived.is_list);
        assert!(!derived.is_required);
        assert!(derived.default.is_none());

        assert_eq!(source.name, "title");
        assert!(source.is_required);
        assert!(source.default.is_some());
    }
}
