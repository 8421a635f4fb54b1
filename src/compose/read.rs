// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity and plain DTOs: what a read returns.
//!
//! Every kept property is declared present; properties the schema leaves
//! optional become nullable instead. Relations only appear in the entity,
//! where Prisma may or may not have selected them:
//!
//! | Relation | required | nullable |
//! |----------|----------|----------|
//! | list | `@DtoRelationRequired` | no |
//! | required | `@DtoRelationRequired` | no |
//! | optional | `@DtoRelationRequired` | unless `@DtoRelationRequired` |

use super::{Composition, Context, FieldView, types};
use crate::{
    annotation::{Marker, classify},
    artifact::ArtifactKind,
    decorate::{self, Decorations, Include, PropValue, TypeExpr, Validator, validator},
    error::Result,
    model::{Field, FieldKind, FieldPatch, Model}
};

fn relation_flags(field: &Field) -> (bool, bool) {
    let forced = classify::has(field, Marker::RelationRequired);
    let nullable = !field.is_list && !field.is_required && !forced;
    (forced, nullable)
}

fn scalar_nullable(model: &Model, relations: &[&str]) -> bool {
    !relations.iter().filter_map(|name| model.field(name)).any(|relation| {
        relation.is_required || classify::has(relation, Marker::RelationRequired)
    })
}

/// Response validators. Nested values are checked against the generated
/// class the property is typed with.
fn validators(view: &FieldView, ts_type: &str) -> Vec<Validator> {
    let nested = matches!(view.field.kind, FieldKind::Relation | FieldKind::Embedded);
    validator::validators(&view.field.derive(FieldPatch {
        type_name: nested.then(|| ts_type.to_string()),
        ..FieldPatch::default()
    }))
}

/// Compose the entity or plain DTO of a model or composite type.
///
/// # Errors
///
/// Returns a lookup error when a relation or an embedded field references
/// an unknown model or type.
pub fn compose(model: &Model, kind: ArtifactKind, ctx: &Context<'_>) -> Result<Composition> {
    let mut composition = Composition::new(kind, model, &ctx.naming);
    let relation_scalars = classify::relation_scalars(&model.fields);
    let from_dir = model.output.dir(kind);
    let include = Include {
        default: false,
        ty: ctx.config.output_api_property_type,
        ..Include::default()
    };

    for field in &model.fields {
        if classify::has(field, Marker::EntityHidden) {
            continue;
        }

        let (is_required, is_nullable) = match field.kind {
            FieldKind::Relation if kind == ArtifactKind::Plain => continue,
            FieldKind::Relation => {
                if field.type_name != model.name && !classify::is_fully_cast(field) {
                    let related = ctx.related_model(model, field)?;
                    composition.related.push(ctx.import_artifact(
                        from_dir,
                        related,
                        ArtifactKind::Entity
                    ));
                }
                relation_flags(field)
            }
            FieldKind::Embedded => {
                if field.type_name != model.name && !classify::is_fully_cast(field) {
                    let related = ctx.related_type(model, field)?;
                    composition.related.push(ctx.import_artifact(
                        from_dir,
                        related,
                        ArtifactKind::Plain
                    ));
                }
                (true, !field.is_required)
            }
            _ => match relation_scalars.get(field.name.as_str()) {
                Some(_) if !classify::has(field, Marker::RelationIncludeId) => continue,
                Some(relations) if kind == ArtifactKind::Entity => {
                    (true, scalar_nullable(model, relations))
                }
                _ => (true, !field.is_required)
            }
        };

        let patched = field.derive(FieldPatch {
            is_required: Some(is_required),
            ..FieldPatch::default()
        });
        let view = FieldView::new(patched, is_nullable);

        let mut decorations = if classify::has(field, Marker::ApiHidden)
            || classify::has(field, Marker::ExcludePlainOnly)
        {
            Decorations::hidden()
        } else {
            let documented = view.field.derive(FieldPatch {
                is_required: Some(
                    ctx.config.required_response_api_property && view.field.is_required
                ),
                ..FieldPatch::default()
            });
            let mut decorations = decorate::plan(&documented, Some(is_nullable), include, kind);
            types::object_for_unmapped(&mut decorations, field);
            let bare = matches!(
                decorations.api_type(),
                Some(PropValue::Code(name)) if *name == field.type_name
            );
            let class = match field.kind {
                FieldKind::Relation => Some(ArtifactKind::Entity),
                FieldKind::Embedded => Some(ArtifactKind::Plain),
                _ => None
            };
            if bare && let Some(class) = class {
                let name = ctx.naming.class(class, &field.type_name);
                decorations.set_api_type(PropValue::Thunk(TypeExpr::Class(name)));
            }
            decorations
        };

        let ts_type = types::ts_type(&view.field, kind, &ctx.naming);
        if ctx.config.class_validation {
            decorations.validators = validators(&view, &ts_type);
        }
        composition
            .fields
            .push(view.typed(ts_type).decorated(decorations));
    }

    Ok(composition)
}
