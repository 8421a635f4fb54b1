// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Control markers embedded in documentation comments.
//!
//! A marker is `@Token` or `@Token(params)` and may appear anywhere on any
//! line. Matching is whole-word: `@DtoReadOnly` does not match inside
//! `@DtoReadOnlyX`.
//!
//! ```text
//! /// Primary author.
//! /// @DtoRelationCanConnectOnCreate
//! /// @DtoOverrideApiPropertyType(AuthorRef, ./author-ref)
//!     └──────────── token ────────┘└──────── params ───────┘
//! ```

/// Closed set of recognised markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Skip the whole model or type.
    IgnoreModel,
    /// Treat the field as read-only.
    ReadOnly,
    /// Drop from create.
    CreateHidden,
    /// Drop from update.
    UpdateHidden,
    /// Force optional in create.
    CreateOptional,
    /// Force optional in update.
    UpdateOptional,
    /// Force required in create.
    CreateRequired,
    /// Force required in update.
    UpdateRequired,
    /// Conditional validation in create.
    CreateValidateIf,
    /// Conditional validation in update.
    UpdateValidateIf,
    /// Drop from the filter input.
    InputHidden,
    /// Force optional in the filter input.
    InputOptional,
    /// Force required in the filter input.
    InputRequired,
    /// Conditional validation in the filter input.
    InputValidateIf,
    /// Not a connect candidate.
    ConnectHidden,
    /// Drop from entity and plain.
    EntityHidden,
    /// Hide from API docs in entity and plain.
    ApiHidden,
    /// Hide from API docs and exclude on serialization.
    ExcludePlainOnly,
    /// Relation is always present in the entity.
    RelationRequired,
    /// Keep the relation scalar in entity, plain, create and update.
    RelationIncludeId,
    /// Allow nested create in the create DTO.
    RelationCanCreateOnCreate,
    /// Allow connect in the create DTO.
    RelationCanConnectOnCreate,
    /// Allow nested create in the update DTO.
    RelationCanCreateOnUpdate,
    /// Allow connect in the update DTO.
    RelationCanConnectOnUpdate,
    /// Replace the decorator type with a class reference.
    OverrideApiPropertyType,
    /// Replace the property type and import it from a module.
    CastType,
    /// Older spelling of [`Marker::CastType`].
    OverrideType
}

impl Marker {
    /// Every marker, in declaration order.
    pub const ALL: [Self; 27] = [
        Self::IgnoreModel,
        Self::ReadOnly,
        Self::CreateHidden,
        Self::UpdateHidden,
        Self::CreateOptional,
        Self::UpdateOptional,
        Self::CreateRequired,
        Self::UpdateRequired,
        Self::CreateValidateIf,
        Self::UpdateValidateIf,
        Self::InputHidden,
        Self::InputOptional,
        Self::InputRequired,
        Self::InputValidateIf,
        Self::ConnectHidden,
        Self::EntityHidden,
        Self::ApiHidden,
        Self::ExcludePlainOnly,
        Self::RelationRequired,
        Self::RelationIncludeId,
        Self::RelationCanCreateOnCreate,
        Self::RelationCanConnectOnCreate,
        Self::RelationCanCreateOnUpdate,
        Self::RelationCanConnectOnUpdate,
        Self::OverrideApiPropertyType,
        Self::CastType,
        Self::OverrideType
    ];

    /// Token as written in documentation, including the `@`.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::IgnoreModel => "@DtoIgnoreModel",
            Self::ReadOnly => "@DtoReadOnly",
            Self::CreateHidden => "@DtoCreateHidden",
            Self::UpdateHidden => "@DtoUpdateHidden",
            Self::CreateOptional => "@DtoCreateOptional",
            Self::UpdateOptional => "@DtoUpdateOptional",
            Self::CreateRequired => "@DtoCreateRequired",
            Self::UpdateRequired => "@DtoUpdateRequired",
            Self::CreateValidateIf => "@DtoCreateValidateIf",
            Self::UpdateValidateIf => "@DtoUpdateValidateIf",
            Self::InputHidden => "@DtoInputHidden",
            Self::InputOptional => "@DtoInputOptional",
            Self::InputRequired => "@DtoInputRequired",
            Self::InputValidateIf => "@DtoInputValidateIf",
            Self::ConnectHidden => "@DtoConnectHidden",
            Self::EntityHidden => "@DtoEntityHidden",
            Self::ApiHidden => "@DtoApiHidden",
            Self::ExcludePlainOnly => "@DtoExcludePlainOnly",
            Self::RelationRequired => "@DtoRelationRequired",
            Self::RelationIncludeId => "@DtoRelationIncludeId",
            Self::RelationCanCreateOnCreate => "@DtoRelationCanCreateOnCreate",
            Self::RelationCanConnectOnCreate => "@DtoRelationCanConnectOnCreate",
            Self::RelationCanCreateOnUpdate => "@DtoRelationCanCreateOnUpdate",
            Self::RelationCanConnectOnUpdate => "@DtoRelationCanConnectOnUpdate",
            Self::OverrideApiPropertyType => "@DtoOverrideApiPropertyType",
            Self::CastType => "@DtoCastType",
            Self::OverrideType => "@DtoOverrideType"
        }
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Byte range of the first whole-word occurrence of `token`.
fn locate(doc: &str, token: &str) -> Option<(usize, usize)> {
    let mut from = 0;
    while let Some(pos) = doc[from..].find(token) {
        let start = from + pos;
        let end = start + token.len();
        if doc[end..].chars().next().is_none_or(|c| !is_ident_char(c)) {
            return Some((start, end));
        }
        from = end;
    }
    None
}

/// Byte offset of the `)` closing the group opened at `open`.
pub(crate) fn closing_paren(doc: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, c) in doc[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset);
                }
            }
            '\n' => return None,
            _ => {}
        }
    }
    None
}

/// Check whether `doc` carries `marker`.
#[must_use]
pub fn contains(doc: &str, marker: Marker) -> bool {
    locate(doc, marker.token()).is_some()
}

/// Trimmed parameter string of `marker`, if present with parentheses.
///
/// ```text
/// "@DtoCastType(Foo, ./foo)"  ->  Some("Foo, ./foo")
/// "@DtoCastType"              ->  None
/// ```
#[must_use]
pub fn params(doc: &str, marker: Marker) -> Option<&str> {
    let (_, end) = locate(doc, marker.token())?;
    if !doc[end..].starts_with('(') {
        return None;
    }
    let close = closing_paren(doc, end)?;
    Some(doc[end + 1..close].trim())
}

/// First parameter of `marker`: everything before the first comma.
///
/// An empty first parameter counts as absent.
#[must_use]
pub fn first_param(doc: &str, marker: Marker) -> Option<&str> {
    params(doc, marker)
        .map(|p| p.split(',').next().unwrap_or(p).trim())
        .filter(|p| !p.is_empty())
}

/// Replace the first occurrence of `marker`'s token with `replacement`,
/// keeping any parameters.
#[must_use]
pub fn rewrite(doc: &str, marker: Marker, replacement: &str) -> String {
    match locate(doc, marker.token()) {
        Some((start, end)) => format!("{}{}{}", &doc[..start], replacement, &doc[end..]),
        None => doc.to_string()
    }
}
