// src/cli.rs

//! Command-line argument definitions and their mapping onto `Config`.

use crate::config::ConfigBuilder;
use crate::constants::DEFAULT_WARN_THRESHOLD;
use clap::Parser;
use std::path::PathBuf;

/// Concatenates selected source files into one labeled Markdown document.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory to scan.
    #[arg(default_value = ".")]
    pub path: String,

    /// Additional include spec: an extension like ".proto" or an exact
    /// filename like "Justfile". Repeatable.
    #[arg(short = 'e', long = "include", value_name = "SPEC")]
    pub include: Vec<String>,

    /// Additional exclude pattern in gitignore syntax. Repeatable; later
    /// patterns override earlier ones, so "!name" re-includes.
    #[arg(short = 'x', long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Do not read the .gitignore file under the root.
    #[arg(long = "no-gitignore")]
    pub no_gitignore: bool,

    /// Start from empty include/exclude lists instead of the built-in
    /// defaults.
    #[arg(long = "no-defaults")]
    pub no_defaults: bool,

    /// Write the combined document to FILE instead of stdout. The file is
    /// excluded from its own scan.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Warn when the estimated output exceeds this many characters.
    #[arg(long = "warn-threshold", value_name = "CHARS", default_value_t = DEFAULT_WARN_THRESHOLD)]
    pub warn_threshold: usize,

    /// List the files that would be combined without writing their content.
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,
}

impl ConfigBuilder {
    /// Seeds a builder from parsed CLI arguments.
    pub fn from_cli(cli: Cli) -> Self {
        let mut builder = ConfigBuilder::new()
            .root(cli.path)
            .include_specs(cli.include)
            .exclude_patterns(cli.exclude)
            .use_defaults(!cli.no_defaults)
            .use_gitignore(!cli.no_gitignore)
            .warn_threshold(cli.warn_threshold)
            .dry_run(cli.dry_run);
        if let Some(path) = cli.output {
            builder = builder.output_file(path);
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputDestination;

    #[test]
    fn test_cli_defaults_map_onto_config() {
        let cli = Cli::parse_from(["codecat"]);
        let config = ConfigBuilder::from_cli(cli).build().unwrap();
        assert_eq!(config.root, PathBuf::from("."));
        assert!(config.use_gitignore);
        assert!(!config.dry_run);
        assert_eq!(config.output, OutputDestination::Stdout);
        assert_eq!(config.warn_threshold, DEFAULT_WARN_THRESHOLD);
    }

    #[test]
    fn test_cli_flags_map_onto_config() {
        let cli = Cli::parse_from([
            "codecat",
            "src",
            "-e",
            ".proto",
            "-x",
            "gen/",
            "--no-gitignore",
            "-o",
            "out.md",
            "--warn-threshold",
            "1000",
            "--dry-run",
        ]);
        let config = ConfigBuilder::from_cli(cli).build().unwrap();
        assert_eq!(config.root, PathBuf::from("src"));
        assert!(config.include_specs.iter().any(|s| s == ".proto"));
        assert_eq!(config.exclude_patterns.last().unwrap(), "gen/");
        assert!(!config.use_gitignore);
        assert_eq!(
            config.output,
            OutputDestination::File(PathBuf::from("out.md"))
        );
        assert_eq!(config.warn_threshold, 1000);
        assert!(config.dry_run);
    }
}
