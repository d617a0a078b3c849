//! Template types for typed variable injection.

use std::marker::PhantomData;

/// Trait for template variable sets
pub trait TemplateVars {
    fn apply(&self, content: &str) -> String;
}

/// Template with typed variable injection
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    content: &'static str,
    _marker: PhantomData<V>,
}

impl<V> Template<V> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _marker: PhantomData,
        }
    }
}

impl<V: TemplateVars> Template<V> {
    pub fn render(&self, vars: &V) -> String {
        vars.apply(self.content)
    }
}

/// Variables for the browser entry module.
pub struct EntryVars<'a> {
    /// Import specifier of the registry module, relative to the entry module.
    pub registry_module: &'a str,
}

impl TemplateVars for EntryVars<'_> {
    fn apply(&self, content: &str) -> String {
        content.replace("__REGISTRY_MODULE__", self.registry_module)
    }
}

/// Variables for the app shell.
pub struct AppShellVars<'a> {
    pub bundle_url: &'a str,
}

impl TemplateVars for AppShellVars<'_> {
    fn apply(&self, content: &str) -> String {
        content.replace("__BUNDLE_URL__", self.bundle_url)
    }
}

/// Registers every registry entry as a custom element.
pub const ENTRY_TS: Template<EntryVars<'static>> = Template::new(include_str!("templates/entry.ts"));

/// Fresh `_app.tsx` loading the compiled bundle.
pub const APP_TSX: Template<AppShellVars<'static>> =
    Template::new(include_str!("templates/app.tsx"));
