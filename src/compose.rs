// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-artifact field sets.
//!
//! Each composer derives the fields of one artifact from a model, patches
//! them for that artifact and plans their decorations. The result is a
//! [`Composition`]: everything the import resolver and the assembler need.
//!
//! | Artifact | Composer | Keeps |
//! |----------|----------|-------|
//! | connect | [`connect`] | ids, uniques, compound uniques |
//! | create, update | [`mutation`] | writable fields, relation inputs |
//! | entity, plain | [`read`] | all visible fields (entity: relations too) |
//! | input | [`filter`] | scalars and enums, plus `<field>List` twins |

pub mod connect;
pub mod filter;
pub mod mutation;
pub mod read;
pub mod relation;
pub mod types;

use crate::{
    artifact::ArtifactKind,
    config::Config,
    decorate::{Decorations, Include},
    error::{Error, Result},
    imports::{self, ImportStatement},
    model::{Datamodel, Field, FieldPatch, Model},
    naming::Naming
};

/// A field resolved for one artifact.
///
/// A nullable view is never required.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    /// Patched field.
    pub field:       Field,
    /// Property accepts `null`.
    pub is_nullable: bool,
    /// TypeScript type, without list brackets.
    pub ts_type:     String,
    /// Planned decorators.
    pub decorations: Decorations
}

impl FieldView {
    /// Wrap `field`, clearing `is_required` when the view is nullable.
    #[must_use]
    pub fn new(field: Field, is_nullable: bool) -> Self {
        let field = if is_nullable && field.is_required {
            field.derive(FieldPatch {
                is_required: Some(false),
                ..FieldPatch::default()
            })
        } else {
            field
        };
        Self {
            field,
            is_nullable,
            ts_type: String::new(),
            decorations: Decorations::default()
        }
    }

    /// Set the TypeScript type.
    #[must_use]
    pub fn typed(mut self, ts_type: impl Into<String>) -> Self {
        self.ts_type = ts_type.into();
        self
    }

    /// Set the decorations.
    #[must_use]
    pub fn decorated(mut self, decorations: Decorations) -> Self {
        self.decorations = decorations;
        self
    }
}

/// Helper class emitted in the same file before the main class.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtraClass {
    /// Class name.
    pub name:   String,
    /// Properties.
    pub fields: Vec<FieldView>
}

/// Composed content of one artifact.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    /// Artifact kind.
    pub kind:          ArtifactKind,
    /// Main class name.
    pub class_name:    String,
    /// Class the main class extends.
    pub base:          Option<String>,
    /// Properties of the main class.
    pub fields:        Vec<FieldView>,
    /// Helper classes.
    pub extra_classes: Vec<ExtraClass>,
    /// Imports of other generated artifacts.
    pub related:       Vec<ImportStatement>
}

impl Composition {
    /// Empty composition of `kind` for `model`.
    #[must_use]
    pub fn new(kind: ArtifactKind, model: &Model, naming: &Naming<'_>) -> Self {
        Self {
            kind,
            class_name: naming.class(kind, &model.name),
            base: None,
            fields: Vec::new(),
            extra_classes: Vec::new(),
            related: Vec::new()
        }
    }

    /// Properties of every class in the artifact.
    pub fn all_fields(&self) -> impl Iterator<Item = &FieldView> {
        self.fields
            .iter()
            .chain(self.extra_classes.iter().flat_map(|c| c.fields.iter()))
    }
}

/// Read-only inputs shared by all composers of one run.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    /// Models and types with output locators assigned.
    pub datamodel: &'a Datamodel,
    /// Generator options.
    pub config:    &'a Config,
    /// Name builder.
    pub naming:    Naming<'a>
}

impl<'a> Context<'a> {
    /// Bind a datamodel and a configuration.
    #[must_use]
    pub const fn new(datamodel: &'a Datamodel, config: &'a Config) -> Self {
        Self {
            datamodel,
            config,
            naming: Naming::new(config)
        }
    }

    /// Planner toggles honoring `outputApiPropertyType`.
    #[must_use]
    pub fn include(&self) -> Include {
        Include {
            ty: self.config.output_api_property_type,
            ..Include::default()
        }
    }

    /// Model targeted by a relation field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RelatedModelNotFound`] if the model is unknown.
    pub fn related_model(&self, owner: &Model, field: &Field) -> Result<&'a Model> {
        self.datamodel
            .find_model(&field.type_name)
            .ok_or_else(|| Error::RelatedModelNotFound {
                model:   owner.name.clone(),
                field:   field.name.clone(),
                related: field.type_name.clone()
            })
    }

    /// Composite type embedded by a field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RelatedTypeNotFound`] if the type is unknown.
    pub fn related_type(&self, owner: &Model, field: &Field) -> Result<&'a Model> {
        self.datamodel
            .find_type(&field.type_name)
            .ok_or_else(|| Error::RelatedTypeNotFound {
                model:   owner.name.clone(),
                field:   field.name.clone(),
                related: field.type_name.clone()
            })
    }

    /// Import of `target`'s artifact of `kind` into a file located in
    /// `from_dir`.
    #[must_use]
    pub fn import_artifact(&self, from_dir: &str, target: &Model, kind: ArtifactKind) -> ImportStatement {
        let path = imports::relative(
            from_dir,
            target.output.dir(kind),
            &self.naming.file_stem(kind, &target.name)
        );
        ImportStatement::named(path, [self.naming.class(kind, &target.name)])
    }
}

#[cfg(test)]
mod tests;
