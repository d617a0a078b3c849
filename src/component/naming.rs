//! Import identifier derivation.
//!
//! `my-button.ts` → `MyButton`. The derivation only looks at the file stem,
//! so it is stable across runs, machines and directory listing order.

use std::path::Path;

use convert_case::{Case, Casing};

/// Words that cannot be used as a module binding.
const RESERVED: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Strip the extension from a file name.
///
/// Only the last extension is removed: `card.stories.ts` → `card.stories`.
pub fn base_name(file_name: &str) -> &str {
    Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name)
}

/// Derive the PascalCase import identifier for a component file.
///
/// Every character that is not an ASCII letter or digit separates words, so
/// `card.stories.ts` → `CardStories` and `my-button (copy).ts` → `MyButtonCopy`.
pub fn import_name(file_name: &str) -> String {
    let words: String = deunicode::deunicode(base_name(file_name))
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    words.to_case(Case::Pascal)
}

/// Check that `ident` is usable as `import * as <ident>`.
pub fn is_valid_identifier(ident: &str) -> bool {
    let mut chars = ident.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    let head_ok = first.is_ascii_alphabetic() || first == '_' || first == '$';
    let tail_ok = chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');

    head_ok && tail_ok && !RESERVED.contains(&ident)
}
