// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Documentation-derived metadata.
//!
//! Lines of the form `@<key> <value>` attach API metadata to a field. The
//! key set is closed; the value is the rest of the line, trimmed. When a
//! key appears twice the first line wins.
//!
//! ```text
//! /// @description Display name
//! /// @minLength 3
//! /// @example Alice
//! ```

/// Recognised documentation keys, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocKey {
    /// `@description`
    Description,
    /// `@minimum`
    Minimum,
    /// `@maximum`
    Maximum,
    /// `@exclusiveMinimum`
    ExclusiveMinimum,
    /// `@exclusiveMaximum`
    ExclusiveMaximum,
    /// `@minLength`
    MinLength,
    /// `@maxLength`
    MaxLength,
    /// `@minItems`
    MinItems,
    /// `@maxItems`
    MaxItems,
    /// `@example`
    Example
}

impl DocKey {
    /// Every key in output order.
    pub const ALL: [Self; 10] = [
        Self::Description,
        Self::Minimum,
        Self::Maximum,
        Self::ExclusiveMinimum,
        Self::ExclusiveMaximum,
        Self::MinLength,
        Self::MaxLength,
        Self::MinItems,
        Self::MaxItems,
        Self::Example
    ];

    /// Key name without the `@`.
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
            Self::Example => "example"
        }
    }
}

/// Value of `key` on a single line, if the line carries it.
fn scan_line(line: &str, key: DocKey) -> Option<&str> {
    let needle = key.name();
    let mut rest = line;
    while let Some(at) = rest.find('@') {
        let after = &rest[at + 1..];
        if let Some(tail) = after.strip_prefix(needle)
            && tail.starts_with([' ', '\t'])
        {
            let value = tail.trim();
            if !value.is_empty() {
                return Some(value);
            }
        }
        rest = after;
    }
    None
}

/// Value of a single key; `None` when no line carries it.
#[must_use]
pub fn extract(doc: &str, key: DocKey) -> Option<&str> {
    doc.lines().find_map(|line| scan_line(line, key))
}

/// Every present key with its value, in [`DocKey::ALL`] order.
#[must_use]
pub fn extract_all(doc: &str) -> Vec<(DocKey, &str)> {
    DocKey::ALL
        .iter()
        .filter_map(|&key| extract(doc, key).map(|value| (key, value)))
        .collect()
}
