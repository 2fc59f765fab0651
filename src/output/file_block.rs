// src/output/file_block.rs

use crate::output::language::language_hint;
use std::path::Path;

/// Renders a single file's header and fenced content block.
///
/// The layout is the stable compatibility surface for downstream consumers:
/// one `## File:` header line, a fence opened with a language hint and closed
/// identically, and the file's exact text content in between. A trailing
/// newline is appended only when the content does not already end with one,
/// so the closing fence sits on its own line.
pub fn render_file_block(relative_path: &Path, content: &str) -> String {
    let display_path = relative_path.to_string_lossy().replace('\\', "/");
    let hint = language_hint(relative_path);

    let mut block =
        String::with_capacity(content.len() + display_path.len() + hint.len() + 24);
    block.push_str("## File: ");
    block.push_str(&display_path);
    block.push_str("\n```");
    block.push_str(hint);
    block.push('\n');
    block.push_str(content);
    if !content.is_empty() && !content.ends_with('\n') {
        block.push('\n');
    }
    block.push_str("```\n");
    block
}
