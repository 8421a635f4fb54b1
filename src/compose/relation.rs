// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Nested relation inputs for create and update DTOs.
//!
//! A relation field marked `@DtoRelationCanCreateOnCreate` and/or
//! `@DtoRelationCanConnectOnCreate` (or the `OnUpdate` pair) is replaced by
//! a property typed as a generated wrapper class:
//!
//! ```text
//! /// @DtoRelationCanCreateOnCreate
//! /// @DtoRelationCanConnectOnCreate
//! author User @relation(...)
//!
//! class CreatePostAuthorRelationInputDto {
//!   create?: CreateUserDto;
//!   connect?: ConnectUserDto;
//! }
//! author: CreatePostAuthorRelationInputDto;
//! ```
//!
//! With a single operation the inner property is required. Inner
//! properties are lists when the relation is.

use super::{Context, ExtraClass, FieldView, types};
use crate::{
    annotation::{Marker, classify},
    artifact::ArtifactKind,
    error::Result,
    imports::ImportStatement,
    model::{Field, FieldKind, FieldPatch, Model}
};

/// Replacement of one relation field.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationInput {
    /// The relation field retyped as the wrapper class.
    pub field:   Field,
    /// The wrapper class.
    pub class:   ExtraClass,
    /// Imports of the related DTOs.
    pub imports: Vec<ImportStatement>
}

fn markers(kind: ArtifactKind) -> (Marker, Marker) {
    match kind {
        ArtifactKind::Update => (
            Marker::RelationCanCreateOnUpdate,
            Marker::RelationCanConnectOnUpdate
        ),
        _ => (
            Marker::RelationCanCreateOnCreate,
            Marker::RelationCanConnectOnCreate
        )
    }
}

/// Check whether `field` asks for a relation input in `kind`.
#[must_use]
pub fn is_requested(field: &Field, kind: ArtifactKind) -> bool {
    let (create, connect) = markers(kind);
    classify::has(field, create) || classify::has(field, connect)
}

/// Build the relation input of `field` for a create or update DTO.
///
/// Returns `None` when the field carries no relation-input marker for
/// `kind`.
///
/// # Errors
///
/// Returns [`crate::Error::RelatedModelNotFound`] if the related model is
/// unknown.
pub fn build(
    model: &Model,
    field: &Field,
    kind: ArtifactKind,
    ctx: &Context<'_>
) -> Result<Option<RelationInput>> {
    let (create_marker, connect_marker) = markers(kind);
    let operations: Vec<(&str, ArtifactKind)> = [
        (classify::has(field, create_marker), "create", ArtifactKind::Create),
        (classify::has(field, connect_marker), "connect", ArtifactKind::Connect)
    ]
    .into_iter()
    .filter(|(enabled, ..)| *enabled)
    .map(|(_, name, target)| (name, target))
    .collect();
    if operations.is_empty() {
        return Ok(None);
    }

    let related = ctx.related_model(model, field)?;
    let required = operations.len() == 1;
    let from_dir = model.output.dir(kind);

    let mut members = Vec::with_capacity(operations.len());
    let mut imports = Vec::new();
    for (name, target) in operations {
        let mut inner = Field::new(name, ctx.naming.class(target, &related.name), FieldKind::InputType);
        inner.is_list = field.is_list;
        inner.is_required = required;
        members.push(types::finish(
            FieldView::new(inner, !required),
            kind,
            ctx,
            ctx.include()
        ));
        if !(related.name == model.name && target == kind) {
            imports.push(ctx.import_artifact(from_dir, related, target));
        }
    }

    let class_name = ctx.naming.relation_input(kind, &model.name, &field.name);
    let replaced = field.derive(FieldPatch {
        type_name: Some(class_name.clone()),
        kind: Some(FieldKind::InputType),
        is_list: Some(false),
        ..FieldPatch::default()
    });

    Ok(Some(RelationInput {
        field: replaced,
        class: ExtraClass {
            name:   class_name,
            fields: members
        },
        imports
    }))
}
