// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Static scalar tables.
//!
//! # OpenAPI Formats
//!
//! | Scalar | type | format |
//! |--------|------|--------|
//! | String | string | |
//! | Boolean | boolean | |
//! | Int | integer | int32 |
//! | BigInt | integer | int64 |
//! | Float | number | float |
//! | Decimal | string | Decimal.js |
//! | DateTime | string | date-time |
//!
//! `Decimal.js` is a sentinel that keeps decimals apart from real strings
//! when translating to GraphQL primitives.
//!
//! # TypeScript Types
//!
//! | Scalar | Read | Input |
//! |--------|------|-------|
//! | String | string | string |
//! | Boolean | boolean | boolean |
//! | Int, Float | number | number |
//! | BigInt | bigint | bigint |
//! | Decimal | Prisma.Decimal | Prisma.Decimal |
//! | DateTime | Date | Date |
//! | Json | Prisma.JsonValue | Prisma.InputJsonValue |
//! | Bytes | Buffer | Uint8Array |

/// Format of the `date-time` scalar mapping.
pub const DATE_TIME: &str = "date-time";

/// Format of the `Decimal` scalar mapping.
pub const DECIMAL: &str = "Decimal.js";

/// OpenAPI type and format of a scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalarFormat {
    /// OpenAPI `type`.
    pub ty:     &'static str,
    /// OpenAPI `format`, if any.
    pub format: Option<&'static str>
}

const FORMATS: &[(&str, ScalarFormat)] = &[
    ("String", ScalarFormat {
        ty:     "string",
        format: None
    }),
    ("Boolean", ScalarFormat {
        ty:     "boolean",
        format: None
    }),
    ("Int", ScalarFormat {
        ty:     "integer",
        format: Some("int32")
    }),
    ("BigInt", ScalarFormat {
        ty:     "integer",
        format: Some("int64")
    }),
    ("Float", ScalarFormat {
        ty:     "number",
        format: Some("float")
    }),
    ("Decimal", ScalarFormat {
        ty:     "string",
        format: Some(DECIMAL)
    }),
    ("DateTime", ScalarFormat {
        ty:     "string",
        format: Some(DATE_TIME)
    })
];

/// OpenAPI mapping of a scalar, `None` for unmapped scalars.
#[must_use]
pub fn format_of(scalar: &str) -> Option<ScalarFormat> {
    FORMATS
        .iter()
        .find(|(name, _)| *name == scalar)
        .map(|(_, format)| *format)
}

/// GraphQL primitive for an OpenAPI type or format.
#[must_use]
pub fn gql_primitive(value: &str) -> &'static str {
    match value.to_lowercase().as_str() {
        "date-time" => "Date",
        "decimal.js" | "float" | "number" => "Float",
        "int32" | "integer" => "Int",
        "boolean" => "Boolean",
        _ => "String"
    }
}

/// GraphQL stand-in for a bare type name. `Json` has no GraphQL
/// counterpart and is exposed as `String`.
#[must_use]
pub fn gql_reference(type_name: &str) -> &str {
    if type_name.eq_ignore_ascii_case("json") {
        "String"
    } else {
        type_name
    }
}

/// TypeScript type of a scalar. `input` selects the write-side type for
/// create and update payloads.
#[must_use]
pub fn ts_type(scalar: &str, input: bool) -> Option<&'static str> {
    let ty = match scalar {
        "String" => "string",
        "Boolean" => "boolean",
        "Int" | "Float" => "number",
        "BigInt" => "bigint",
        "Decimal" => "Prisma.Decimal",
        "DateTime" => "Date",
        "Json" if input => "Prisma.InputJsonValue",
        "Json" => "Prisma.JsonValue",
        "Bytes" if input => "Uint8Array",
        "Bytes" => "Buffer",
        _ => return None
    };
    Some(ty)
}

/// Scalars whose TypeScript type lives in the `Prisma` namespace.
#[must_use]
pub fn needs_prisma_namespace(scalar: &str) -> bool {
    matches!(scalar, "Decimal" | "Json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapped_scalars() {
        assert_eq!(
            format_of("Int"),
            Some(ScalarFormat {
                ty:     "integer",
                format: Some("int32")
            })
        );
        assert_eq!(format_of("Decimal").and_then(|f| f.format), Some(DECIMAL));
        assert_eq!(format_of("Json"), None);
        assert_eq!(format_of("Bytes"), None);
    }

    #[test]
    fn primitives() {
        assert_eq!(gql_primitive("date-time"), "Date");
        assert_eq!(gql_primitive("Decimal.js"), "Float");
        assert_eq!(gql_primitive("float"), "Float");
        assert_eq!(gql_primitive("number"), "Float");
        assert_eq!(gql_primitive("int64"), "String");
        assert_eq!(gql_primitive("integer"), "Int");
        assert_eq!(gql_primitive("boolean"), "Boolean");
        assert_eq!(gql_primitive("string"), "String");
    }

    #[test]
    fn json_reference() {
        assert_eq!(gql_reference("Json"), "String");
        assert_eq!(gql_reference("Address"), "Address");
    }

    #[test]
    fn typescript_types() {
        assert_eq!(ts_type("Json", false), Some("Prisma.JsonValue"));
        assert_eq!(ts_type("Json", true), Some("Prisma.InputJsonValue"));
        assert_eq!(ts_type("Bytes", true), Some("Uint8Array"));
        assert_eq!(ts_type("DateTime", true), Some("Date"));
        assert_eq!(ts_type("Point", false), None);
    }
}
