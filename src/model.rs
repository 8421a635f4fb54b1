// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Datamodel input.
//!
//! The generator consumes the `datamodel` section of a Prisma DMMF
//! document. Only the parts needed for DTO generation are decoded; unknown
//! keys are ignored.
//!
//! # Data Structures
//!
//! ```text
//! Datamodel
//! ├── models: Vec<Model>      (top-level entities, kind = Model)
//! ├── types:  Vec<Model>      (composite types, kind = Type)
//! └── enums:  Vec<EnumDef>
//!     Model
//!     ├── name, documentation
//!     ├── fields: Vec<Field>
//!     ├── primary_key: Option<UniqueIndex>
//!     ├── unique_indexes: Vec<UniqueIndex>
//!     └── output: OutputLocator   (assigned by the generator)
//! ```

mod field;

pub use field::{DefaultValue, Field, FieldKind, FieldPatch};
use serde::Deserialize;

use crate::{artifact::ArtifactKind, error::Result};

/// Distinguishes top-level models from embeddable composite types.
///
/// Types never get connect or entity artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelKind {
    /// Top-level entity with identity.
    #[default]
    Model,

    /// Composite value type embedded in other models.
    Type
}

/// Compound identifier: a named (or anonymous) list of field names.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct UniqueIndex {
    /// Index name; anonymous indexes are named after their fields.
    #[serde(default)]
    pub name: Option<String>,

    /// Field names in index order.
    #[serde(default)]
    pub fields: Vec<String>
}

impl UniqueIndex {
    /// Name used for the generated unique input: the declared name, or the
    /// field names joined with `_`.
    #[must_use]
    pub fn compound_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.fields.join("_")
        }
    }
}

/// Output directories of a model's artifacts.
///
/// Opaque to the field pipeline; only used to compute relative import
/// paths and file locations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutputLocator {
    /// Directory of connect/create/update/plain DTOs.
    pub dto:    String,
    /// Directory of the filter input.
    pub input:  String,
    /// Directory of the entity class.
    pub entity: String
}

impl OutputLocator {
    /// Directory holding artifacts of `kind`.
    #[must_use]
    pub fn dir(&self, kind: ArtifactKind) -> &str {
        match kind {
            ArtifactKind::Entity => &self.entity,
            ArtifactKind::Input => &self.input,
            _ => &self.dto
        }
    }
}

/// A model or composite type.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Model name as written in the schema (e.g. `User`).
    pub name: String,

    /// Documentation comment of the model.
    #[serde(default)]
    pub documentation: Option<String>,

    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<Field>,

    /// Compound primary key, if the model declares one.
    #[serde(default)]
    pub primary_key: Option<UniqueIndex>,

    /// Compound unique indexes.
    #[serde(default)]
    pub unique_indexes: Vec<UniqueIndex>,

    /// Whether this is a model or a composite type.
    #[serde(skip)]
    pub kind: ModelKind,

    /// Output directories, assigned by the generator.
    #[serde(skip)]
    pub output: OutputLocator
}

impl Model {
    /// Create a model with the given fields and no indexes.
    #[must_use]
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            documentation: None,
            fields,
            primary_key: None,
            unique_indexes: Vec::new(),
            kind: ModelKind::Model,
            output: OutputLocator::default()
        }
    }

    /// Look up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check if this is a composite type.
    #[must_use]
    pub fn is_type(&self) -> bool {
        self.kind == ModelKind::Type
    }
}

/// One value of an enum.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnumValue {
    /// Value name (e.g. `ADMIN`).
    pub name: String
}

/// Enum definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnumDef {
    /// Enum name (e.g. `Role`).
    pub name: String,

    /// Values in declaration order.
    #[serde(default)]
    pub values: Vec<EnumValue>
}

impl EnumDef {
    /// Create an enum from value names.
    #[must_use]
    pub fn new(name: impl Into<String>, values: &[&str]) -> Self {
        Self {
            name:   name.into(),
            values: values
                .iter()
                .map(|v| EnumValue {
                    name: (*v).to_string()
                })
                .collect()
        }
    }
}

/// The complete input snapshot of one generation run.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Datamodel {
    /// Top-level models.
    #[serde(default)]
    pub models: Vec<Model>,

    /// Composite types.
    #[serde(default)]
    pub types: Vec<Model>,

    /// Enums.
    #[serde(default)]
    pub enums: Vec<EnumDef>
}

/// Accepts either a full DMMF document or its bare `datamodel` section.
#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Wrapped { datamodel: Datamodel },
    Bare(Datamodel)
}

impl Datamodel {
    /// Build a datamodel, marking every entry of `types` as a composite type.
    #[must_use]
    pub fn new(models: Vec<Model>, types: Vec<Model>, enums: Vec<EnumDef>) -> Self {
        let mut datamodel = Self {
            models,
            types,
            enums
        };
        datamodel.mark_kinds();
        datamodel
    }

    /// Decode a DMMF document (or its `datamodel` section) from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Datamodel`] if the JSON does not match the
    /// expected shape.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut datamodel = match serde_json::from_str::<Document>(json)? {
            Document::Wrapped {
                datamodel
            } => datamodel,
            Document::Bare(datamodel) => datamodel
        };
        datamodel.mark_kinds();
        Ok(datamodel)
    }

    /// Look up a model by name.
    #[must_use]
    pub fn find_model(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.name == name)
    }

    /// Look up a composite type by name.
    #[must_use]
    pub fn find_type(&self, name: &str) -> Option<&Model> {
        self.types.iter().find(|m| m.name == name)
    }

    fn mark_kinds(&mut self) {
        for model in &mut self.models {
            model.kind = ModelKind::Model;
        }
        for ty in &mut self.types {
            ty.kind = ModelKind::Type;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compound_name_defaults_to_joined_fields() {
        let index = UniqueIndex {
            name:   None,
            fields: vec!["a".to_string(), "b".to_string()]
        };
        assert_eq!(index.compound_name(), "a_b");

        let named = UniqueIndex {
            name:   Some("ab".to_string()),
            fields: vec!["a".to_string(), "b".to_string()]
        };
        assert_eq!(named.compound_name(), "ab");
    }

    #[test]
    fn from_json_accepts_wrapped_document() {
        let json = r#"{
            "datamodel": {
                "models": [{ "name": "User", "fields": [] }],
                "types": [{ "name": "Address", "fields": [] }],
                "enums": [{ "name": "Role", "values": [{ "name": "USER" }] }]
            }
        }"#;
        let datamodel = Datamodel::from_json(json).unwrap();
        assert_eq!(datamodel.models.len(), 1);
        assert_eq!(datamodel.types[0].kind, ModelKind::Type);
        assert_eq!(datamodel.enums[0].values[0].name, "USER");
    }

    #[test]
    fn from_json_accepts_bare_datamodel() {
        let json = r#"{ "models": [{ "name": "Post", "fields": [] }] }"#;
        let datamodel = Datamodel::from_json(json).unwrap();
        assert!(datamodel.find_model("Post").is_some());
        assert!(datamodel.find_type("Post").is_none());
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert!(Datamodel::from_json("[1, 2]").is_err());
    }

    #[test]
    fn new_marks_types() {
        let datamodel = Datamodel::new(
            vec![Model::new("User", vec![])],
            vec![Model::new("Address", vec![])],
            vec![]
        );
        assert!(!datamodel.models[0].is_type());
        assert!(datamodel.types[0].is_type());
    }
}
