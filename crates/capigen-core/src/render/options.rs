//! Rendering options
//!
//! Defaults reproduce the richer output layout: banner comment, `extern "C"`
//! block, `<stddef.h>` include, and a titled document with an intro line.

use serde::{Deserialize, Serialize};

/// Options for both emitters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub header: HeaderOptions,
    pub doc: DocOptions,
}

/// Header emitter options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderOptions {
    /// Text of the generation banner comment
    pub banner: String,
    /// Wrap declarations in an `extern "C"` block for C++ consumers
    pub extern_c: bool,
    /// System headers to include, e.g. `stddef.h`
    pub includes: Vec<String>,
}

/// Markdown emitter options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocOptions {
    /// Document title; derived from the library name when unset
    pub title: Option<String>,
    /// Intro sentence; derived from the library name when unset, omitted when empty
    pub intro: Option<String>,
    /// Emit a table of contents linking every type and function
    pub toc: bool,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            banner: "Auto-generated C API Header File".to_string(),
            extern_c: true,
            includes: vec!["stddef.h".to_string()],
        }
    }
}

impl DocOptions {
    /// Effective title for a library
    pub fn title_for(&self, library: Option<&str>) -> String {
        match (&self.title, library) {
            (Some(title), _) => title.clone(),
            (None, Some(library)) => format!("📘 {} API Documentation", library),
            (None, None) => "📘 API Documentation".to_string(),
        }
    }

    /// Effective intro sentence for a library; `None` when suppressed
    pub fn intro_for(&self, library: Option<&str>) -> Option<String> {
        match (&self.intro, library) {
            (Some(intro), _) if intro.trim().is_empty() => None,
            (Some(intro), _) => Some(intro.clone()),
            (None, Some(library)) => Some(format!(
                "This document describes the C API for the {} library.",
                library
            )),
            (None, None) => Some("This document describes the C API.".to_string()),
        }
    }
}
