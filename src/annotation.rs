// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field classification and documentation parsing.
//!
//! Documentation comments are the only per-field control channel. Two
//! grammars live there side by side:
//!
//! | Grammar | Example | Module |
//! |---------|---------|--------|
//! | Marker | `@DtoCreateOptional`, `@DtoCastType(Foo, ./foo)` | [`marker`] |
//! | Metadata | `@minLength 3`, `@description Display name` | [`doc`] |
//!
//! [`classify`] combines markers with the structural flags of a field into
//! the predicates the composers consume.

pub mod classify;
pub mod doc;
pub mod marker;

pub use doc::DocKey;
pub use marker::Marker;
