//! Source text generation.
//!
//! Pure functions: the same components and prefix always produce the same
//! bytes. Nothing here touches the filesystem.
//!
//! | Function           | Output                                   |
//! |--------------------|------------------------------------------|
//! | `render_registry`  | module importing and listing components  |
//! | `render_types`     | JSX `IntrinsicElements` augmentation     |
//! | `render_entry`     | browser entry defining custom elements   |
//! | `render_app_shell` | Fresh `_app.tsx` loading the bundle      |

mod template;

use std::fmt::Write;

use crate::component::Component;
use template::{APP_TSX, AppShellVars, ENTRY_TS, EntryVars};

/// Default module whose JSX namespace is augmented.
pub const DEFAULT_JSX_MODULE: &str = "https://esm.sh/preact@10.10.0";

/// `import * as <Ident> from '<prefix><path>'`, one per line.
fn render_imports(components: &[Component], prefix: &str) -> String {
    components
        .iter()
        .map(|c| {
            let specifier = escape_single_quoted(&format!("{prefix}{}", c.path));
            format!("import * as {} from '{}'", c.import_name, specifier)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escape text for a single-quoted JS string literal.
fn escape_single_quoted(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Render the registry module.
///
/// Each list entry is a whole module namespace; consumers read its `name`
/// and `default` exports.
pub fn render_registry(components: &[Component], prefix: &str) -> String {
    let imports = render_imports(components, prefix);
    let entries = components
        .iter()
        .map(|c| format!("  {}", c.import_name))
        .collect::<Vec<_>>()
        .join(",\n");

    let mut out = String::new();
    if !imports.is_empty() {
        out.push_str(&imports);
        out.push_str("\n\n");
    }
    out.push_str("const c: { default: any, name: string }[] = [\n");
    if !entries.is_empty() {
        out.push_str(&entries);
        out.push('\n');
    }
    out.push_str("]\n\nexport default c\n");
    out
}

/// Render the type-declaration module.
pub fn render_types(components: &[Component], prefix: &str, jsx_module: &str) -> String {
    let imports = render_imports(components, prefix);

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "/// <reference types=\"{jsx_module}\" />");
    if !imports.is_empty() {
        out.push_str(&imports);
        out.push('\n');
    }
    out.push('\n');
    let _ = writeln!(out, "declare module '{jsx_module}' {{");
    out.push_str("  namespace JSX {\n");
    out.push_str("    interface IntrinsicElements {\n");
    for c in components {
        let _ = writeln!(
            out,
            "      [{ident}.name]: {ident}.props;",
            ident = c.import_name
        );
    }
    out.push_str("    }\n");
    out.push_str("  }\n");
    out.push_str("}\n");
    out
}

/// Render the browser entry module.
pub fn render_entry(registry_module: &str) -> String {
    ENTRY_TS.render(&EntryVars { registry_module })
}

/// Render the app shell that loads `bundle_url`.
pub fn render_app_shell(bundle_url: &str) -> String {
    APP_TSX.render(&AppShellVars { bundle_url })
}
