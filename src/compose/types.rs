// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Property typing shared by all composers.

use super::{Context, FieldView};
use crate::{
    annotation::{Marker, classify, marker},
    artifact::ArtifactKind,
    decorate::{self, Decorations, Include, PropValue, TypeExpr, scalar, validator},
    model::{Field, FieldKind, FieldPatch},
    naming::Naming
};

/// TypeScript type of a property, without list brackets.
///
/// `@DtoCastType(T, ...)` (or `@DtoOverrideType`) wins; unknown scalars
/// become `unknown`.
#[must_use]
pub fn ts_type(field: &Field, kind: ArtifactKind, naming: &Naming<'_>) -> String {
    if let Some(cast) = classify::type_cast(field).and_then(|m| classify::first_param(field, m)) {
        return cast.to_string();
    }
    match field.kind {
        FieldKind::Scalar => scalar::ts_type(&field.type_name, kind.is_mutation())
            .unwrap_or("unknown")
            .to_string(),
        FieldKind::Enum | FieldKind::InputType => field.type_name.clone(),
        FieldKind::Relation => naming.class(ArtifactKind::Entity, &field.type_name),
        FieldKind::Embedded => naming.class(ArtifactKind::Plain, &field.type_name)
    }
}

/// Document unmapped scalars (`Json`, unsupported types) as `() => Object`.
pub fn object_for_unmapped(decorations: &mut Decorations, field: &Field) {
    let bare = matches!(
        decorations.api_type(),
        Some(PropValue::Code(name)) if *name == field.type_name
    );
    if field.kind == FieldKind::Scalar && bare {
        decorations.set_api_type(PropValue::Thunk(TypeExpr::Ref("Object".to_string())));
    }
}

/// Rewrite a `@Dto...ValidateIf(..)` marker into `@ValidateIf(..)` when
/// class validation is on.
#[must_use]
pub fn apply_validate_if(field: Field, marker_kind: Marker, ctx: &Context<'_>) -> Field {
    if !ctx.config.class_validation || !classify::has(&field, marker_kind) {
        return field;
    }
    let documentation = marker::rewrite(field.doc(), marker_kind, "@ValidateIf");
    field.derive(FieldPatch {
        documentation: Some(documentation),
        ..FieldPatch::default()
    })
}

/// Plan decorations, validators and the TypeScript type of a view.
#[must_use]
pub fn finish(view: FieldView, kind: ArtifactKind, ctx: &Context<'_>, include: Include) -> FieldView {
    let mut decorations = decorate::plan(&view.field, Some(view.is_nullable), include, kind);
    object_for_unmapped(&mut decorations, &view.field);
    if ctx.config.class_validation && kind.validates() {
        decorations.validators = validator::validators(&view.field);
    }
    let ts_type = ts_type(&view.field, kind, &ctx.naming);
    view.typed(ts_type).decorated(decorations)
}
