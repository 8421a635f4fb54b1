// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Enum files.
//!
//! ```text
//! enum Role { ADMIN user }
//!
//! export const role = ['ADMIN', 'user'] as const;
//! export enum RoleEnum { ADMIN = 'ADMIN', USER = 'USER' }
//! registerEnumType(Role, { name: 'Role' });
//! ```

use crate::{
    config::Config,
    imports::ImportStatement,
    model::EnumDef,
    naming::{camel, pascal}
};

/// Source of one enum file.
#[must_use]
pub fn render(def: &EnumDef, config: &Config) -> String {
    let quoted: Vec<String> = def.values.iter().map(|v| format!("'{}'", v.name)).collect();
    let pascal_name = pascal(&def.name);

    let mut lines = vec![
        ImportStatement::named("@nestjs/graphql", ["registerEnumType"]).render(),
        ImportStatement::named(&config.prisma_client_import_path, [def.name.as_str()]).render(),
        String::new(),
        format!("export const {} = [{}] as const;", camel(&def.name), quoted.join(", ")),
        String::new(),
        format!("export enum {pascal_name}Enum {{"),
    ];
    lines.extend(def.values.iter().map(|v| {
        let member = v.name.to_uppercase();
        format!("  {member} = '{member}',")
    }));
    lines.push("}".to_string());
    lines.push(String::new());
    lines.push(format!("registerEnumType({}, {{", def.name));
    lines.push(format!("  name: '{pascal_name}',"));
    lines.push("});".to_string());

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_enum() {
        let def = EnumDef::new("Role", &["ADMIN", "user"]);
        let expected = "\
import { registerEnumType } from '@nestjs/graphql';
import { Role } from '@prisma/client';

export const role = ['ADMIN', 'user'] as const;

export enum RoleEnum {
  ADMIN = 'ADMIN',
  USER = 'USER',
}

registerEnumType(Role, {
  name: 'Role',
});
";
        assert_eq!(render(&def, &Config::default()), expected);
    }

    #[test]
    fn custom_client_path() {
        let config = Config {
            prisma_client_import_path: "../prisma/client".into(),
            ..Config::default()
        };
        let text = render(&EnumDef::new("post_status", &["DRAFT"]), &config);
        assert!(text.contains("import { post_status } from '../prisma/client';"));
        assert!(text.contains("export const postStatus = ['DRAFT'] as const;"));
        assert!(text.contains("export enum PostStatusEnum {"));
        assert!(text.contains("  name: 'PostStatus',"));
    }
}
