// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Decorator entries and their value rendering.
//!
//! Each decorator system has a closed key vocabulary ([`ApiKey`] for
//! `@ApiProperty`, [`GqlKey`] for `@Field`). Values are typed so the
//! emitter never has to guess whether text is a literal or code:
//!
//! | [`PropValue`] | Rendered as |
//! |---------------|-------------|
//! | `Literal("42")` | `42` |
//! | `Literal("Alice")` | `'Alice'` |
//! | `Code("Role")` | `Role` |
//! | `Thunk(List("Int"))` | `() => [Int]` |

use std::fmt;

use crate::annotation::DocKey;

/// Keys of `@ApiProperty({...})`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiKey {
    Description,
    Minimum,
    Maximum,
    ExclusiveMinimum,
    ExclusiveMaximum,
    MinLength,
    MaxLength,
    MinItems,
    MaxItems,
    Example,
    Type,
    Format,
    IsArray,
    Enum,
    EnumName,
    Default,
    Required,
    Nullable,
    Dummy
}

impl ApiKey {
    /// Key as written in the decorator object.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::Minimum => "minimum",
            Self::Maximum => "maximum",
            Self::ExclusiveMinimum => "exclusiveMinimum",
            Self::ExclusiveMaximum => "exclusiveMaximum",
            Self::MinLength => "minLength",
            Self::MaxLength => "maxLength",
            Self::MinItems => "minItems",
            Self::MaxItems => "maxItems",
            Self::Example => "example",
            Self::Type => "type",
            Self::Format => "format",
            Self::IsArray => "isArray",
            Self::Enum => "enum",
            Self::EnumName => "enumName",
            Self::Default => "default",
            Self::Required => "required",
            Self::Nullable => "nullable",
            Self::Dummy => "dummy"
        }
    }
}

impl From<DocKey> for ApiKey {
    fn from(key: DocKey) -> Self {
        match key {
            DocKey::Description => Self::Description,
            DocKey::Minimum => Self::Minimum,
            DocKey::Maximum => Self::Maximum,
            DocKey::ExclusiveMinimum => Self::ExclusiveMinimum,
            DocKey::ExclusiveMaximum => Self::ExclusiveMaximum,
            DocKey::MinLength => Self::MinLength,
            DocKey::MaxLength => Self::MaxLength,
            DocKey::MinItems => Self::MinItems,
            DocKey::MaxItems => Self::MaxItems,
            DocKey::Example => Self::Example
        }
    }
}

/// Keys of `@Field(...)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GqlKey {
    Type,
    Format,
    Enum,
    DefaultValue,
    Nullable,
    Dummy
}

impl GqlKey {
    /// Key as written in the decorator options.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Format => "format",
            Self::Enum => "enum",
            Self::DefaultValue => "defaultValue",
            Self::Nullable => "nullable",
            Self::Dummy => "dummy"
        }
    }

    /// Keys that resolve to the type argument of `@Field`.
    #[must_use]
    pub const fn is_type_like(self) -> bool {
        matches!(self, Self::Type | Self::Format | Self::Enum)
    }
}

/// Type reference inside a thunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// Bare reference: `X`.
    Ref(String),

    /// List reference: `[X]`.
    List(String),

    /// Reference to a class generated by this crate: `X`.
    Class(String)
}

impl TypeExpr {
    /// `List(name)` for lists, `Ref(name)` otherwise.
    #[must_use]
    pub fn wrap(name: impl Into<String>, is_list: bool) -> Self {
        if is_list {
            Self::List(name.into())
        } else {
            Self::Ref(name.into())
        }
    }

    /// Referenced name without list brackets.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Ref(name) | Self::List(name) | Self::Class(name) => name
        }
    }

    /// Same shape, different name.
    #[must_use]
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        match self {
            Self::Ref(_) => Self::Ref(name.into()),
            Self::List(_) => Self::List(name.into()),
            Self::Class(_) => Self::Class(name.into())
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ref(name) | Self::Class(name) => f.write_str(name),
            Self::List(name) => write!(f, "[{name}]")
        }
    }
}

/// Value of a decorator entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropValue {
    /// Text subject to [`encapsulate`].
    Literal(String),

    /// Code emitted verbatim.
    Code(String),

    /// `() => X` type thunk, emitted verbatim.
    Thunk(TypeExpr)
}

impl PropValue {
    /// Literal text, if this is a literal.
    #[must_use]
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(text) => Some(text),
            _ => None
        }
    }

    /// Check whether the value bypasses quoting.
    #[must_use]
    pub const fn no_encapsulation(&self) -> bool {
        !matches!(self, Self::Literal(_))
    }

    /// Final text of the value.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Literal(text) => encapsulate(text),
            Self::Code(code) => code.clone(),
            Self::Thunk(expr) => format!("() => {expr}")
        }
    }
}

/// One decorator entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property<K> {
    /// Entry key.
    pub key:   K,
    /// Entry value.
    pub value: PropValue,
    /// Unmapped scalar type or format this entry was derived from.
    pub base:  Option<String>
}

impl<K> Property<K> {
    /// Literal entry.
    pub fn literal(key: K, value: impl Into<String>) -> Self {
        Self {
            key,
            value: PropValue::Literal(value.into()),
            base: None
        }
    }

    /// Verbatim code entry.
    pub fn code(key: K, value: impl Into<String>) -> Self {
        Self {
            key,
            value: PropValue::Code(value.into()),
            base: None
        }
    }

    /// Type thunk entry.
    pub fn thunk(key: K, expr: TypeExpr) -> Self {
        Self {
            key,
            value: PropValue::Thunk(expr),
            base: None
        }
    }

    /// Attach the pre-mapping base value.
    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }
}

fn is_number(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    let (int, frac) = match digits.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (digits, None)
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(int) && frac.is_none_or(all_digits)
}

fn is_list_literal(value: &str) -> bool {
    value.starts_with('[') && value.ends_with(']') && !value.contains('\n')
}

/// Quote `value` unless it already reads as a TypeScript literal.
///
/// Booleans, `null`, numbers and single-line bracket lists pass through;
/// everything else is wrapped in `'...'` with inner quotes escaped.
#[must_use]
pub fn encapsulate(value: &str) -> String {
    if matches!(value, "true" | "false" | "null") || is_number(value) || is_list_literal(value) {
        return value.to_string();
    }
    format!("'{}'", value.replace('\'', "\\'"))
}
