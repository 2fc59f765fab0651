// src/constants.rs

/// Warn when the estimated output exceeds this many characters.
pub const DEFAULT_WARN_THRESHOLD: usize = 500_000;

/// Include specs applied when the caller does not disable the defaults.
///
/// An entry starting with `.` that has an extension component matches files
/// by suffix; the rest (`Dockerfile`, `LICENSE`, `.gitignore`, ...) match by
/// exact filename.
pub const DEFAULT_INCLUDE_SPECS: &[&str] = &[
    ".py", ".js", ".jsx", ".ts", ".tsx", ".java", ".c", ".cpp", ".h", ".hpp",
    ".cs", ".go", ".php", ".rb", ".swift", ".kt", ".rs", ".scala", ".pl", ".pm",
    ".sh", ".bash", ".zsh", ".ps1", ".bat", ".cmd",
    ".html", ".htm", ".css", ".scss", ".less",
    ".json", ".yaml", ".yml", ".xml", ".toml",
    ".md", ".rst", ".txt", ".sql", ".graphql", ".dockerfile", "Dockerfile",
    ".gitignore", ".gitattributes", ".editorconfig", ".env.example", "LICENSE",
];

/// Exclude patterns (gitignore syntax) applied when the caller does not
/// disable the defaults. Covers VCS metadata, dependency caches, build
/// output, binary assets, and editor state.
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &[
    ".git/", ".svn/", ".hg/", "venv/", ".venv/", "env/", "ENV/", "__pycache__/",
    "*.pyc", "*.pyo", "*.pyd", "build/", "dist/", "sdist/", "wheelhouse/",
    "*.egg-info/", ".eggs/", "node_modules/", "package-lock.json", "yarn.lock",
    ".vscode/", ".idea/", "*.sublime-project", "*.sublime-workspace", ".DS_Store",
    "Thumbs.db", "bin/", "obj/", "target/", "out/", "*.png", "*.jpg", "*.jpeg",
    "*.gif", "*.bmp", "*.svg", "*.ico", "*.mp3", "*.wav", "*.ogg", "*.mp4",
    "*.mov", "*.avi", "*.wmv", "*.pdf", "*.doc", "*.docx", "*.xls", "*.xlsx",
    "*.ppt", "*.pptx", "*.zip", "*.tar", "*.gz", "*.bz2", "*.7z", "*.rar",
    "*.db", "*.sqlite", "*.sqlite3", "*.log", "*.lock", "data/", "logs/",
    "coverage/", ".pytest_cache/", ".mypy_cache/", ".tox/",
];

/// Name of the repository ignore file looked up directly under the root when
/// the option is enabled.
pub const REPO_IGNORE_FILENAME: &str = ".gitignore";
