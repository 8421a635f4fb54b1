// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Decoration planning.
//!
//! [`plan`] decides which entries a field carries in `@ApiProperty` (API
//! docs) and `@Field` (GraphQL). Rules apply in a fixed order and only ever
//! append:
//!
//! | # | Rule | `@ApiProperty` | `@Field` |
//! |---|------|----------------|----------|
//! | 1 | documentation (`doc`) | `description`, `minimum`, ... | |
//! | 2 | type (`ty`) | `type`, `format`, `isArray` | `type`, `format` or `enum` |
//! | 3 | enum (`enumeration`) | `enum`, `enumName` | |
//! | 4 | default (`default`) | `default` | `defaultValue` |
//! | 5 | required/nullable | `required`, `nullable` | `nullable` |
//! | 6 | fallback | `dummy` | `dummy` |
//!
//! The type rule picks exactly one branch:
//!
//! ```text
//! @DtoOverrideApiPropertyType(T) ─► type: () => T        | type: () => T / [T]
//! mapped scalar (Int, DateTime…) ─► type: 'integer' ...  | type: () => Int ...
//! anything but an enum           ─► type: Name           | enum: () => Name / [Name]
//! ```

pub mod property;
pub mod scalar;
pub mod validator;

pub use property::{ApiKey, GqlKey, PropValue, Property, TypeExpr, encapsulate};
pub use validator::Validator;

use crate::{
    annotation::{Marker, classify, doc},
    artifact::ArtifactKind,
    model::{Field, FieldKind}
};

/// Rule toggles of [`plan`]. All enabled by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Include {
    /// Documentation-derived entries.
    pub doc:         bool,
    /// Type entries.
    pub ty:          bool,
    /// Enum entries.
    pub enumeration: bool,
    /// Default value entries.
    pub default:     bool
}

impl Default for Include {
    fn default() -> Self {
        Self {
            doc:         true,
            ty:          true,
            enumeration: true,
            default:     true
        }
    }
}

/// Everything the emitter renders around one property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decorations {
    /// `@ApiProperty` entries.
    pub api:        Vec<Property<ApiKey>>,
    /// `@Field` entries.
    pub gql:        Vec<Property<GqlKey>>,
    /// class-validator / class-transformer decorators.
    pub validators: Vec<Validator>,
    /// Hidden from API docs and excluded from serialization.
    pub hidden:     bool
}

impl Decorations {
    /// Decorations of a hidden property.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            hidden: true,
            ..Self::default()
        }
    }

    /// `@ApiProperty` `type` entry, if any.
    #[must_use]
    pub fn api_type(&self) -> Option<&PropValue> {
        self.api
            .iter()
            .find(|p| p.key == ApiKey::Type)
            .map(|p| &p.value)
    }

    /// Replace the `@ApiProperty` `type` entry value.
    pub fn set_api_type(&mut self, value: PropValue) {
        if let Some(entry) = self.api.iter_mut().find(|p| p.key == ApiKey::Type) {
            entry.value = value;
        }
    }
}

/// Plan decorator entries for `field` within an artifact of `kind`.
///
/// `is_nullable` overrides the default nullability, which is the inverse
/// of `is_required`.
#[must_use]
pub fn plan(field: &Field, is_nullable: Option<bool>, include: Include, kind: ArtifactKind) -> Decorations {
    let mut api: Vec<Property<ApiKey>> = Vec::new();
    let mut gql: Vec<Property<GqlKey>> = Vec::new();

    if include.doc {
        for (key, value) in doc::extract_all(field.doc()) {
            api.push(Property::literal(key.into(), value));
        }
    }

    if include.ty {
        let is_list = field.is_list;
        let mapped = (field.kind == FieldKind::Scalar)
            .then(|| scalar::format_of(&field.type_name))
            .flatten();

        if let Some(cast) = classify::first_param(field, Marker::OverrideApiPropertyType) {
            api.push(Property::thunk(ApiKey::Type, TypeExpr::Ref(cast.to_string())));
            gql.push(Property::thunk(GqlKey::Type, TypeExpr::wrap(cast, is_list)).with_base(cast));
        } else if let Some(format) = mapped {
            api.push(Property::literal(ApiKey::Type, format.ty));
            gql.push(
                Property::thunk(
                    GqlKey::Type,
                    TypeExpr::wrap(scalar::gql_primitive(format.ty), is_list)
                )
                .with_base(format.ty)
            );
            if let Some(fmt) = format.format {
                api.push(Property::literal(ApiKey::Format, fmt));
                gql.push(
                    Property::thunk(GqlKey::Format, TypeExpr::wrap(scalar::gql_primitive(fmt), is_list))
                        .with_base(fmt)
                );
            }
        } else if field.kind != FieldKind::Enum {
            api.push(Property::code(ApiKey::Type, &field.type_name));
            gql.push(Property::thunk(
                GqlKey::Enum,
                TypeExpr::wrap(scalar::gql_reference(&field.type_name), is_list)
            ));
        }

        if is_list {
            api.push(Property::literal(ApiKey::IsArray, "true"));
        }
    }

    if include.enumeration && field.kind == FieldKind::Enum {
        api.push(Property::code(ApiKey::Enum, &field.type_name));
        api.push(Property::literal(ApiKey::EnumName, &field.type_name));
    }

    if include.default
        && field.has_default_value
        && let Some(value) = field.default.as_ref().and_then(|d| d.literal())
    {
        api.push(Property::literal(ApiKey::Default, &value));
        gql.push(Property::literal(GqlKey::DefaultValue, value));
    }

    if !field.is_required {
        api.push(Property::literal(ApiKey::Required, "false"));
    }

    if is_nullable.unwrap_or(!field.is_required) {
        api.push(Property::literal(ApiKey::Nullable, "true"));
        gql.push(Property::literal(GqlKey::Nullable, "true"));
    }

    if kind.is_mutation() {
        for entry in &mut api {
            if entry.value.as_literal() == Some(scalar::DATE_TIME) {
                entry.value = PropValue::Literal("string".to_string());
            }
        }
    }

    if api.is_empty() {
        api.push(Property::literal(ApiKey::Dummy, ""));
    }
    if gql.is_empty() {
        gql.push(Property::literal(GqlKey::Dummy, ""));
    }

    Decorations {
        api,
        gql,
        validators: Vec::new(),
        hidden: false
    }
}
