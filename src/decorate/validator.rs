// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! class-validator and class-transformer decorators.
//!
//! Validators are derived from the field shape first, then extended with
//! any class-validator directive written in the documentation:
//!
//! ```text
//! /// @IsEmail()
//! /// @MaxLength(120)
//! email String?
//!
//! @IsOptional()
//! @IsString()
//! @IsEmail()
//! @MaxLength(120)
//! ```

use crate::{annotation::marker, model::{Field, FieldKind}};

/// Directives copied from documentation when written with parentheses.
const DIRECTIVES: &[&str] = &[
    "ArrayMaxSize",
    "ArrayMinSize",
    "ArrayNotEmpty",
    "Contains",
    "Equals",
    "IsAlpha",
    "IsAlphanumeric",
    "IsDefined",
    "IsEmail",
    "IsHexColor",
    "IsIn",
    "IsIP",
    "IsISO8601",
    "IsJSON",
    "IsLowercase",
    "IsNegative",
    "IsNotEmpty",
    "IsNotIn",
    "IsPhoneNumber",
    "IsPositive",
    "IsUppercase",
    "IsUrl",
    "IsUUID",
    "Length",
    "Matches",
    "Max",
    "MaxLength",
    "Min",
    "MinLength",
    "NotEquals",
    "ValidateIf"
];

/// Package a validator decorator is imported from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatorSource {
    /// `class-validator`
    ClassValidator,
    /// `class-transformer`
    ClassTransformer
}

/// One validator decorator call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validator {
    /// Decorator name without `@`.
    pub name: String,
    /// Arguments, emitted verbatim.
    pub args: Vec<String>
}

impl Validator {
    fn new(name: &str, args: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            args
        }
    }

    /// Package the decorator comes from.
    #[must_use]
    pub fn source(&self) -> ValidatorSource {
        match self.name.as_str() {
            "Type" | "Exclude" => ValidatorSource::ClassTransformer,
            _ => ValidatorSource::ClassValidator
        }
    }

    /// Decorator line, e.g. `@IsEnum(Role, { each: true })`.
    #[must_use]
    pub fn render(&self) -> String {
        format!("@{}({})", self.name, self.args.join(", "))
    }
}

fn scalar_validator(scalar: &str) -> Option<&'static str> {
    let name = match scalar {
        "String" => "IsString",
        "Boolean" => "IsBoolean",
        "Int" | "BigInt" => "IsInt",
        "Float" => "IsNumber",
        "Decimal" => "IsDecimal",
        "DateTime" => "IsDateString",
        _ => return None
    };
    Some(name)
}

/// Directives written in documentation, in document order.
fn directives(doc: &str) -> Vec<Validator> {
    let mut found = Vec::new();
    let mut from = 0;
    while let Some(pos) = doc[from..].find('@') {
        let start = from + pos + 1;
        let ident_len = doc[start..]
            .find(|c: char| !(c.is_alphanumeric() || c == '_'))
            .unwrap_or(doc.len() - start);
        let name = &doc[start..start + ident_len];
        let open = start + ident_len;
        from = open;
        if !DIRECTIVES.contains(&name) || !doc[open..].starts_with('(') {
            continue;
        }
        if let Some(close) = marker::closing_paren(doc, open) {
            let args = doc[open + 1..close].trim();
            let args = if args.is_empty() {
                Vec::new()
            } else {
                vec![args.to_string()]
            };
            found.push(Validator::new(name, args));
            from = close;
        }
    }
    found
}

/// Validators for a field, derived from its shape and documentation.
#[must_use]
pub fn validators(field: &Field) -> Vec<Validator> {
    let each = || {
        if field.is_list {
            vec!["{ each: true }".to_string()]
        } else {
            Vec::new()
        }
    };

    let mut list = Vec::new();
    if !field.is_required {
        list.push(Validator::new("IsOptional", Vec::new()));
    }
    if field.is_list {
        list.push(Validator::new("IsArray", Vec::new()));
    }
    match field.kind {
        FieldKind::Scalar => {
            if let Some(name) = scalar_validator(&field.type_name) {
                list.push(Validator::new(name, each()));
            }
        }
        FieldKind::Enum => {
            let mut args = vec![field.type_name.clone()];
            args.extend(each());
            list.push(Validator::new("IsEnum", args));
        }
        FieldKind::Relation | FieldKind::Embedded | FieldKind::InputType => {
            list.push(Validator::new("ValidateNested", each()));
            list.push(Validator::new(
                "Type",
                vec![format!("() => {}", field.type_name)]
            ));
        }
    }
    for directive in directives(field.doc()) {
        if !list.iter().any(|v| v.name == directive.name) {
            list.push(directive);
        }
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(field: &Field) -> Vec<String> {
        validators(field).iter().map(Validator::render).collect()
    }

    #[test]
    fn optional_string_with_directives() {
        let field = Field::scalar("email", "String").documented("@IsEmail()\n@MaxLength(120)");
        assert_eq!(
            rendered(&field),
            vec!["@IsOptional()", "@IsString()", "@IsEmail()", "@MaxLength(120)"]
        );
    }

    #[test]
    fn enum_list() {
        let field = Field::new("roles", "Role", FieldKind::Enum).list().required();
        assert_eq!(
            rendered(&field),
            vec!["@IsArray()", "@IsEnum(Role, { each: true })"]
        );
    }

    #[test]
    fn nested_input() {
        let field = Field::new("address", "CreateAddressDto", FieldKind::InputType).required();
        let list = validators(&field);
        assert_eq!(list[0].render(), "@ValidateNested()");
        assert_eq!(list[1].render(), "@Type(() => CreateAddressDto)");
        assert_eq!(list[1].source(), ValidatorSource::ClassTransformer);
        assert_eq!(list[0].source(), ValidatorSource::ClassValidator);
    }

    #[test]
    fn unknown_directives_and_markers_are_ignored() {
        let field = Field::scalar("n", "Json")
            .required()
            .documented("@DtoReadOnly\n@Whatever(1)\n@IsNotEmpty");
        assert!(validators(&field).is_empty());
    }

    #[test]
    fn validate_if_keeps_arguments() {
        let field = Field::scalar("code", "String")
            .required()
            .documented("@ValidateIf((o) => o.kind === 'x')");
        assert_eq!(
            rendered(&field),
            vec!["@IsString()", "@ValidateIf((o) => o.kind === 'x')"]
        );
    }
}
