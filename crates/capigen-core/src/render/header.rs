//! C header emitter

use crate::model::{ApiModel, FunctionDef, TypeDef};
use crate::render::options::HeaderOptions;
use crate::render::prototype;
use std::path::Path;

/// Include-guard token for a header path: the file name with `.` replaced by
/// `_`, upper-cased (`out/api.h` becomes `API_H`)
pub fn guard_token(path: &Path) -> String {
    let base = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());
    base.replace('.', "_").to_uppercase()
}

/// Render the complete header text for a model
pub fn render_header(model: &ApiModel, options: &HeaderOptions) -> String {
    let guard = guard_token(&model.header);
    let mut out = String::new();

    if !options.banner.is_empty() {
        out.push_str(&format!("/* {} */\n", options.banner));
    }
    out.push_str(&format!("#ifndef {guard}\n#define {guard}\n\n"));

    if options.extern_c {
        out.push_str("#ifdef __cplusplus\n");
        out.push_str("extern \"C\" {\n");
        out.push_str("#endif\n");
    }
    for include in &options.includes {
        out.push_str(&format!("#include <{}>\n", include));
    }
    if options.extern_c || !options.includes.is_empty() {
        out.push('\n');
    }

    for type_def in &model.types {
        out.push_str(&type_declaration(type_def));
    }

    for func in &model.functions {
        out.push_str(&doc_comment(func));
        out.push_str(&prototype(func));
        out.push_str("\n\n");
    }

    if options.extern_c {
        out.push_str("#ifdef __cplusplus\n");
        out.push_str(&format!("}} // extern \"C\" {guard}\n"));
        out.push_str("#endif\n\n");
    }
    out.push_str(&format!("#endif // {guard}\n"));

    out
}

fn type_declaration(type_def: &TypeDef) -> String {
    format!("// {}\n{};\n\n", type_def.description, type_def.ty)
}

/// Doxygen block preceding a prototype
fn doc_comment(func: &FunctionDef) -> String {
    let mut lines = vec![
        "/**".to_string(),
        format!(" * @brief {}", func.description),
        " *".to_string(),
    ];
    for param in &func.params {
        lines.push(format!(" * @param {} {}", param.name, param.description));
    }
    lines.push(format!(" * @return {}", func.return_text()));
    lines.push(" */".to_string());

    let mut block = lines.join("\n");
    block.push('\n');
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParamDef;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn sample_model() -> ApiModel {
        ApiModel {
            header: PathBuf::from("include/vsdk_client.h"),
            doc_output: None,
            library: Some("VSDKClient".to_string()),
            types: vec![TypeDef {
                name: "vsdk_ctx_t".to_string(),
                description: "Opaque client context.".to_string(),
                ty: "typedef struct vsdk_ctx vsdk_ctx_t".to_string(),
            }],
            functions: vec![
                FunctionDef {
                    name: "vsdk_init".to_string(),
                    description: "Initialize the client.".to_string(),
                    return_type: "int".to_string(),
                    return_description: Some("0 on success, negative on error.".to_string()),
                    params: vec![ParamDef {
                        name: "flags".to_string(),
                        ty: "int".to_string(),
                        description: "Init flags.".to_string(),
                    }],
                },
                FunctionDef {
                    name: "vsdk_shutdown".to_string(),
                    description: "Release all resources.".to_string(),
                    return_type: "void".to_string(),
                    return_description: None,
                    params: Vec::new(),
                },
            ],
        }
    }

    #[test]
    fn test_guard_token() {
        assert_eq!(guard_token(Path::new("out/api.h")), "API_H");
        assert_eq!(guard_token(Path::new("a/b/vsdk.client.h")), "VSDK_CLIENT_H");
        assert_eq!(guard_token(Path::new("api.h")), "API_H");
    }

    #[test]
    fn test_full_header_layout() {
        let expected = r#"/* Auto-generated C API Header File */
#ifndef VSDK_CLIENT_H
#define VSDK_CLIENT_H

#ifdef __cplusplus
extern "C" {
#endif
#include <stddef.h>

// Opaque client context.
typedef struct vsdk_ctx vsdk_ctx_t;

/**
 * @brief Initialize the client.
 *
 * @param flags Init flags.
 * @return 0 on success, negative on error.
 */
int vsdk_init(int flags);

/**
 * @brief Release all resources.
 *
 * @return void
 */
void vsdk_shutdown();

#ifdef __cplusplus
} // extern "C" VSDK_CLIENT_H
#endif

#endif // VSDK_CLIENT_H
"#;
        assert_eq!(render_header(&sample_model(), &HeaderOptions::default()), expected);
    }

    #[test]
    fn test_closers_repeat_guard_token() {
        let mut model = sample_model();
        model.header = PathBuf::from("include/net.h");
        let header = render_header(&model, &HeaderOptions::default());
        assert!(header.contains("\n} // extern \"C\" NET_H\n"));
        assert!(header.ends_with("#endif // NET_H\n"));
    }

    #[test]
    fn test_plain_header_without_linkage_block() {
        let mut model = sample_model();
        model.types.clear();
        model.functions.truncate(1);
        let options = HeaderOptions {
            extern_c: false,
            includes: Vec::new(),
            ..HeaderOptions::default()
        };

        let expected = r#"/* Auto-generated C API Header File */
#ifndef VSDK_CLIENT_H
#define VSDK_CLIENT_H

/**
 * @brief Initialize the client.
 *
 * @param flags Init flags.
 * @return 0 on success, negative on error.
 */
int vsdk_init(int flags);

#endif // VSDK_CLIENT_H
"#;
        assert_eq!(render_header(&model, &options), expected);
    }

    #[test]
    fn test_custom_includes_and_banner() {
        let options = HeaderOptions {
            banner: "Generated by capigen - do not edit".to_string(),
            extern_c: true,
            includes: vec!["stddef.h".to_string(), "stdint.h".to_string()],
        };
        let header = render_header(&sample_model(), &options);
        assert!(header.starts_with("/* Generated by capigen - do not edit */\n"));
        assert!(header.contains("#include <stddef.h>\n#include <stdint.h>\n"));
    }
}
