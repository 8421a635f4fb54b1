// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Pure predicates over fields.

use std::collections::BTreeMap;

use super::marker::{self, Marker};
use crate::model::{Field, FieldKind, Model};

/// Check if the field carries `marker`.
#[must_use]
pub fn has(field: &Field, marker: Marker) -> bool {
    marker::contains(field.doc(), marker)
}

/// Parameter string of `marker` on the field.
#[must_use]
pub fn params(field: &Field, marker: Marker) -> Option<&str> {
    marker::params(field.doc(), marker)
}

/// First parameter of `marker` on the field.
#[must_use]
pub fn first_param(field: &Field, marker: Marker) -> Option<&str> {
    marker::first_param(field.doc(), marker)
}

/// Marker overriding the TypeScript property type, `@DtoCastType` first.
///
/// Only a marker with a non-empty type parameter counts.
#[must_use]
pub fn type_cast(field: &Field) -> Option<Marker> {
    [Marker::CastType, Marker::OverrideType]
        .into_iter()
        .find(|&marker| first_param(field, marker).is_some())
}

/// Both the property type and the API type are overridden, so the
/// declared type of the field is never referenced.
#[must_use]
pub fn is_fully_cast(field: &Field) -> bool {
    type_cast(field).is_some() && first_param(field, Marker::OverrideApiPropertyType).is_some()
}

/// Check if the model documentation carries `marker`.
#[must_use]
pub fn model_has(model: &Model, marker: Marker) -> bool {
    marker::contains(model.documentation.as_deref().unwrap_or_default(), marker)
}

/// Field references another model.
#[must_use]
pub fn is_relation(field: &Field) -> bool {
    field.kind == FieldKind::Relation
}

/// Field embeds a composite type.
#[must_use]
pub fn is_type(field: &Field) -> bool {
    field.kind == FieldKind::Embedded
}

/// Field is read-only in the schema or marked `@DtoReadOnly`.
#[must_use]
pub fn is_read_only(field: &Field) -> bool {
    field.is_read_only || has(field, Marker::ReadOnly)
}

/// Identifier with a generated default (`autoincrement()`, `uuid()`).
#[must_use]
pub fn is_id_with_default(field: &Field) -> bool {
    field.is_id && field.has_default_value
}

/// Required field that the database fills in when omitted.
#[must_use]
pub fn is_required_with_default(field: &Field) -> bool {
    field.is_required && field.has_default_value
}

/// Maps each relation scalar to the relation fields it backs.
///
/// ```text
/// author   User  @relation(fields: [authorId])
/// authorId Int                                  -> { "authorId": ["author"] }
/// ```
#[must_use]
pub fn relation_scalars(fields: &[Field]) -> BTreeMap<&str, Vec<&str>> {
    let mut scalars: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for field in fields.iter().filter(|f| is_relation(f)) {
        for scalar in &field.relation_from_fields {
            scalars
                .entry(scalar.as_str())
                .or_default()
                .push(field.name.as_str());
        }
    }
    scalars
}
