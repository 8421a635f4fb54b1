// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Connect DTO: the ways to reference an existing record.
//!
//! Candidates are ids, then single-field uniques, then compounds (primary
//! key first). Each compound becomes a helper class and one property typed
//! as that class:
//!
//! ```text
//! @@unique([slug, authorId])
//!
//! class PostSlugAuthorIdUniqueInputType { slug: string; authorId: number; }
//! class ConnectPostDto {
//!   id?: number;
//!   slug_authorId?: PostSlugAuthorIdUniqueInputType;
//! }
//! ```
//!
//! With more than one candidate every property is optional. Callers must
//! still pass exactly one; that constraint is not expressed in the output.

use super::{Composition, Context, ExtraClass, FieldView, types};
use crate::{
    annotation::{Marker, classify},
    artifact::ArtifactKind,
    decorate::Include,
    model::{Field, FieldKind, FieldPatch, Model}
};

fn include(ctx: &Context<'_>) -> Include {
    Include {
        default: false,
        ..ctx.include()
    }
}

fn candidates(model: &Model) -> Vec<&Field> {
    let visible = |f: &&Field| !classify::has(f, Marker::ConnectHidden);
    let mut list: Vec<&Field> = model.fields.iter().filter(visible).filter(|f| f.is_id).collect();
    for field in model.fields.iter().filter(visible).filter(|f| f.is_unique) {
        if !list.iter().any(|c| c.name == field.name) {
            list.push(field);
        }
    }
    list
}

/// Compose the connect DTO of `model`.
#[must_use]
pub fn compose(model: &Model, ctx: &Context<'_>) -> Composition {
    let kind = ArtifactKind::Connect;
    let mut composition = Composition::new(kind, model, &ctx.naming);

    let mut fields: Vec<Field> = candidates(model).into_iter().cloned().collect();

    let compounds = model.primary_key.iter().chain(model.unique_indexes.iter());
    let mut synthetic = Vec::new();
    for index in compounds {
        let compound_name = index.compound_name();
        let class_name = ctx.naming.unique_input(&model.name, &compound_name);
        let members = index
            .fields
            .iter()
            .filter_map(|name| model.field(name))
            .map(|f| {
                let required = f.derive(FieldPatch {
                    is_required: Some(true),
                    ..FieldPatch::default()
                });
                types::finish(FieldView::new(required, false), kind, ctx, include(ctx))
            })
            .collect();
        composition.extra_classes.push(ExtraClass {
            name:   class_name.clone(),
            fields: members
        });
        synthetic.push(
            Field::new(compound_name, class_name, FieldKind::InputType)
                .required()
                .read_only()
        );
    }

    let all_optional = fields.len() + synthetic.len() > 1;
    fields.extend(synthetic);

    composition.fields = fields
        .into_iter()
        .map(|field| {
            let field = if all_optional {
                field.derive(FieldPatch {
                    is_required: Some(false),
                    ..FieldPatch::default()
                })
            } else {
                field
            };
            let nullable = !field.is_required;
            types::finish(FieldView::new(field, nullable), kind, ctx, include(ctx))
        })
        .collect();

    composition
}
