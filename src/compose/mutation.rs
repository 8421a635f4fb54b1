// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Create and update DTOs.
//!
//! # Field Selection
//!
//! | Field | Create | Update |
//! |-------|--------|--------|
//! | `@Dto{Create,Update}Hidden` | dropped | dropped |
//! | relation | relation input or dropped | relation input or dropped |
//! | relation scalar | dropped unless `@DtoRelationIncludeId` | same |
//! | read-only | dropped unless forced optional/required | same |
//! | id with default | dropped unless forced | same |
//! | `@updatedAt` | dropped unless forced | same |
//! | required with default | dropped, or optional with `showDefaultValues` | same |
//! | embedded type | typed as the type's create/update DTO | same |
//! | anything else | as declared | optional |
//!
//! `@DtoCreateOptional` / `@DtoCreateRequired` (and the update pair) have
//! the last word on optionality.

use super::{Composition, Context, FieldView, relation, types};
use crate::{
    annotation::{Marker, classify},
    artifact::ArtifactKind,
    error::Result,
    model::{FieldKind, FieldPatch, Model}
};

struct Markers {
    hidden:      Marker,
    optional:    Marker,
    required:    Marker,
    validate_if: Marker
}

fn markers(kind: ArtifactKind) -> Markers {
    match kind {
        ArtifactKind::Update => Markers {
            hidden:      Marker::UpdateHidden,
            optional:    Marker::UpdateOptional,
            required:    Marker::UpdateRequired,
            validate_if: Marker::UpdateValidateIf
        },
        _ => Markers {
            hidden:      Marker::CreateHidden,
            optional:    Marker::CreateOptional,
            required:    Marker::CreateRequired,
            validate_if: Marker::CreateValidateIf
        }
    }
}

/// Compose the create or update DTO of a model or composite type.
///
/// # Errors
///
/// Returns a lookup error when a relation input or an embedded field
/// references an unknown model or type.
pub fn compose(model: &Model, kind: ArtifactKind, ctx: &Context<'_>) -> Result<Composition> {
    let m = markers(kind);
    let mut composition = Composition::new(kind, model, &ctx.naming);
    let relation_scalars = classify::relation_scalars(&model.fields);
    let from_dir = model.output.dir(kind);

    for source in &model.fields {
        if classify::has(source, m.hidden) {
            continue;
        }
        let forced_optional = classify::has(source, m.optional);
        let forced_required = classify::has(source, m.required);

        let mut field = match source.kind {
            FieldKind::Relation => match relation::build(model, source, kind, ctx)? {
                Some(input) => {
                    composition.extra_classes.push(input.class);
                    composition.related.extend(input.imports);
                    input.field
                }
                None => continue
            },
            FieldKind::Embedded => {
                let related = ctx.related_type(model, source)?;
                if related.name != model.name {
                    composition
                        .related
                        .push(ctx.import_artifact(from_dir, related, kind));
                }
                source.derive(FieldPatch {
                    type_name: Some(ctx.naming.class(kind, &related.name)),
                    kind: Some(FieldKind::InputType),
                    ..FieldPatch::default()
                })
            }
            _ if relation_scalars.contains_key(source.name.as_str()) => {
                if !classify::has(source, Marker::RelationIncludeId) {
                    continue;
                }
                source.clone()
            }
            _ => {
                if classify::is_read_only(source) && !forced_optional && !forced_required {
                    continue;
                }
                source.clone()
            }
        };

        let mut is_required = field.is_required;
        if !forced_optional && !forced_required {
            if classify::is_id_with_default(&field) || field.is_updated_at {
                continue;
            }
            if classify::is_required_with_default(&field) {
                if !ctx.config.show_default_values {
                    continue;
                }
                is_required = false;
            }
        }
        if kind == ArtifactKind::Update || forced_optional {
            is_required = false;
        }
        if forced_required {
            is_required = true;
        }

        field = field.derive(FieldPatch {
            is_required: Some(is_required),
            ..FieldPatch::default()
        });
        field = types::apply_validate_if(field, m.validate_if, ctx);

        let view = FieldView::new(field, !is_required);
        composition
            .fields
            .push(types::finish(view, kind, ctx, ctx.include()));
    }

    Ok(composition)
}
