// src/output/language.rs

//! Maps file extensions and well-known filenames to fence language hints.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;

static EXTENSION_HINTS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("py", "python"),
        ("js", "javascript"),
        ("jsx", "jsx"),
        ("ts", "typescript"),
        ("tsx", "tsx"),
        ("java", "java"),
        ("c", "c"),
        ("cpp", "cpp"),
        ("h", "c"),
        ("hpp", "cpp"),
        ("cs", "csharp"),
        ("go", "go"),
        ("php", "php"),
        ("rb", "ruby"),
        ("swift", "swift"),
        ("kt", "kotlin"),
        ("rs", "rust"),
        ("scala", "scala"),
        ("pl", "perl"),
        ("sh", "bash"),
        ("bash", "bash"),
        ("zsh", "zsh"),
        ("ps1", "powershell"),
        ("bat", "batch"),
        ("cmd", "batch"),
        ("html", "html"),
        ("htm", "html"),
        ("css", "css"),
        ("scss", "scss"),
        ("less", "less"),
        ("json", "json"),
        ("yaml", "yaml"),
        ("yml", "yaml"),
        ("xml", "xml"),
        ("toml", "toml"),
        ("md", "markdown"),
        ("rst", "rst"),
        ("txt", "text"),
        ("sql", "sql"),
        ("graphql", "graphql"),
        ("dockerfile", "dockerfile"),
    ])
});

/// Returns the fence language hint for a file path.
///
/// Well-known extensionless filenames get dedicated hints; unknown
/// extensions get an empty hint, which renders as a plain fence.
pub fn language_hint(path: &Path) -> &'static str {
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        match name {
            "Dockerfile" => return "dockerfile",
            ".gitignore" => return "gitignore",
            ".gitattributes" => return "gitattributes",
            ".editorconfig" => return "editorconfig",
            "LICENSE" => return "text",
            _ => {}
        }
    }
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .and_then(|e| EXTENSION_HINTS.get(e.as_str()).copied())
        .unwrap_or("")
}
