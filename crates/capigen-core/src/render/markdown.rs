//! Markdown reference emitter
//!
//! Layout: title, intro, optional table of contents, a "Data Types" section
//! when the model declares types, then a "Functions" section with one
//! subsection per function in input order.

use crate::model::{ApiModel, FunctionDef, TypeDef};
use crate::render::options::DocOptions;
use crate::render::prototype;
use std::collections::HashMap;

/// Render the complete Markdown reference for a model
pub fn render_markdown(model: &ApiModel, options: &DocOptions) -> String {
    let library = model.library.as_deref();
    let title = options.title_for(library);
    let mut doc = String::new();

    doc.push_str(&format!("# {}\n\n", title));
    if let Some(intro) = options.intro_for(library) {
        doc.push_str(&format!("{}\n\n", intro));
    }

    if options.toc {
        doc.push_str(&table_of_contents(model, &title));
    }

    if !model.types.is_empty() {
        doc.push_str("## Data Types\n\n");
        for type_def in &model.types {
            doc.push_str(&type_section(type_def));
        }
    }

    doc.push_str("## Functions\n\n");
    let count = model.functions.len();
    for (index, func) in model.functions.iter().enumerate() {
        doc.push_str(&function_section(func));
        if index + 1 < count {
            doc.push('\n');
        }
    }

    doc
}

fn type_section(type_def: &TypeDef) -> String {
    format!(
        "### {}\n{}\n```c\n{};\n```\n\n",
        type_def.name, type_def.description, type_def.ty
    )
}

fn function_section(func: &FunctionDef) -> String {
    let mut section = String::new();

    section.push_str(&format!("### `{}`\n", func.name));
    section.push_str(&format!("**Description:** {}\n\n", func.description));
    section.push_str(&format!("**Declaration:**\n```c\n{}\n```\n\n", prototype(func)));

    if !func.params.is_empty() {
        section.push_str("**Parameters:**\n");
        for param in &func.params {
            section.push_str(&format!(
                "- `{}` ({}): {}\n",
                param.name, param.ty, param.description
            ));
        }
        section.push('\n');
    }

    section.push_str("**Returns:**\n");
    match &func.return_description {
        Some(description) => {
            section.push_str(&format!("- `{}`: {}\n\n", func.return_type, description))
        }
        None => section.push_str(&format!("- `{}`\n\n", func.return_type)),
    }
    section.push_str("---\n");

    section
}

fn table_of_contents(model: &ApiModel, title: &str) -> String {
    // Anchors are claimed in document order so repeated names get the same
    // `-1`, `-2` suffixes a Markdown renderer would assign.
    let mut anchors = Anchors::default();
    anchors.claim(title);
    anchors.claim("Contents");

    let mut toc = String::from("## Contents\n\n");

    if !model.types.is_empty() {
        toc.push_str(&format!("- [Data Types](#{})\n", anchors.claim("Data Types")));
        for type_def in &model.types {
            toc.push_str(&format!(
                "  - [{}](#{})\n",
                type_def.name,
                anchors.claim(&type_def.name)
            ));
        }
    }

    toc.push_str(&format!("- [Functions](#{})\n", anchors.claim("Functions")));
    for func in &model.functions {
        toc.push_str(&format!(
            "  - [`{}`](#{})\n",
            func.name,
            anchors.claim(&func.name)
        ));
    }
    toc.push('\n');

    toc
}

/// Heading anchor allocator
#[derive(Debug, Default)]
struct Anchors {
    seen: HashMap<String, usize>,
}

impl Anchors {
    fn claim(&mut self, heading: &str) -> String {
        let base = slugify(heading);
        let count = self.seen.entry(base.clone()).or_insert(0);
        let anchor = if *count == 0 {
            base
        } else {
            format!("{}-{}", base, count)
        };
        *count += 1;
        anchor
    }
}

/// GitHub-style heading slug: lowercase, spaces to `-`, other punctuation dropped
fn slugify(heading: &str) -> String {
    heading
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            '-' | '_' => Some(c),
            c if c.is_alphanumeric() => Some(c),
            _ => None,
        })
        .flat_map(char::to_lowercase)
        .collect()
}
