//! Compiles gitignore-syntax rules and matches them against relative paths.
//!
//! This is a self-contained evaluator with explicit gitignore precedence:
//! rules are evaluated in file order and the *last* matching rule decides,
//! so a later `!pattern` re-includes a path excluded by an earlier rule.
//! Ancestor-directory exclusion is not handled here; the walker enforces it
//! by pruning, which means descendants of an excluded directory are never
//! evaluated at all.
//!
//! Supported syntax:
//! - blank lines and `#` comments are ignored
//! - leading `!` negates (re-include)
//! - trailing `/` restricts the rule to directories
//! - `*` matches within a path segment, `**` across segments, `?` one character
//! - a pattern without a separator matches the basename at any depth; a
//!   pattern containing a separator is anchored at the root the set was
//!   loaded against (a leading `/` anchors explicitly)
//!
//! Anything else (e.g. character classes) is treated as literal text, and a
//! pattern that reduces to nothing compiles to a rule that never matches.
//! Matching never fails on bad input.

mod glob;

use glob::match_segments;

/// A single compiled pattern plus its derived metadata.
///
/// Immutable once compiled.
#[derive(Debug, Clone)]
pub struct Rule {
    /// The pattern line as it appeared in the source.
    pub raw: String,
    /// `true` if the rule re-includes rather than excludes.
    pub negated: bool,
    /// `true` if the rule only applies to directories (trailing `/`).
    pub dir_only: bool,
    /// `true` if the rule is matched against the full relative path rather
    /// than the basename.
    pub anchored: bool,
    /// The pattern split on `/`. Empty for malformed patterns, which never
    /// match.
    segments: Vec<String>,
}

impl Rule {
    /// Parses one pattern line. Returns `None` for blanks and comments.
    fn parse(line: &str) -> Option<Rule> {
        let line = line.trim_end();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        let raw = line.to_string();

        let (negated, rest) = match line.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, line),
        };
        let (dir_only, rest) = match rest.strip_suffix('/') {
            Some(rest) => (true, rest),
            None => (false, rest),
        };
        let (anchored, rest) = match rest.strip_prefix('/') {
            Some(rest) => (true, rest),
            None => (rest.contains('/'), rest),
        };

        // A pattern that reduces to nothing ("!", "/", "!/") is malformed;
        // it compiles to a rule with no segments, which never matches.
        let segments = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split('/').map(str::to_string).collect()
        };

        Some(Rule {
            raw,
            negated,
            dir_only,
            anchored,
            segments,
        })
    }

    /// Returns `true` if this rule's pattern matches `relative_path`.
    ///
    /// `relative_path` must use `/` separators. The negation flag is not
    /// consulted here; [`PatternSet::matches`] interprets it.
    fn matches_path(&self, relative_path: &str, is_dir: bool) -> bool {
        if self.segments.is_empty() {
            return false;
        }
        if self.dir_only && !is_dir {
            return false;
        }
        if !self.anchored && self.segments.len() == 1 {
            // Separator-free pattern: basename at any depth.
            let basename = relative_path.rsplit('/').next().unwrap_or(relative_path);
            return match_segments(&self.segments, &[basename]);
        }
        let path_segments: Vec<&str> = relative_path.split('/').collect();
        match_segments(&self.segments, &path_segments)
    }
}

/// An ordered sequence of [`Rule`]s with last-match-wins semantics.
///
/// # Examples
///
/// ```
/// use codecat::matcher::PatternSet;
///
/// let set = PatternSet::compile(["*.log", "!keep.log", "target/"]);
/// assert!(set.matches("app.log", false));
/// assert!(!set.matches("keep.log", false));
/// assert!(set.matches("target", true));
/// assert!(!set.matches("target", false)); // dir-only rule
/// ```
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    rules: Vec<Rule>,
}

impl PatternSet {
    /// Compiles an ordered sequence of raw pattern lines.
    ///
    /// Never fails: blanks and comments are dropped, malformed patterns
    /// become rules that cannot match.
    pub fn compile<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rules = lines
            .into_iter()
            .filter_map(|line| Rule::parse(line.as_ref()))
            .collect();
        Self { rules }
    }

    /// Returns `true` if the set excludes `relative_path`, net of negations.
    ///
    /// Iterates rules in order; the last rule whose pattern matches decides.
    /// If no rule matches, the path is not excluded by this set.
    pub fn matches(&self, relative_path: &str, is_dir: bool) -> bool {
        let mut excluded = None;
        for rule in &self.rules {
            if rule.matches_path(relative_path, is_dir) {
                excluded = Some(!rule.negated);
            }
        }
        excluded.unwrap_or(false)
    }

    /// Returns `true` if the set contains no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The compiled rules, in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_and_comments_are_ignored() {
        let set = PatternSet::compile(["", "   ", "# a comment", "#foo"]);
        assert!(set.is_empty());
        assert!(!set.matches("foo", false));
    }

    #[test]
    fn test_basename_match_at_any_depth() {
        let set = PatternSet::compile(["*.pyc"]);
        assert!(set.matches("cache.pyc", false));
        assert!(set.matches("deep/nested/cache.pyc", false));
        assert!(!set.matches("cache.py", false));
    }

    #[test]
    fn test_literal_basename() {
        let set = PatternSet::compile(["Thumbs.db"]);
        assert!(set.matches("Thumbs.db", false));
        assert!(set.matches("images/Thumbs.db", false));
        assert!(!set.matches("thumbs.db", false)); // case-sensitive
    }

    #[test]
    fn test_last_match_wins_negation() {
        let set = PatternSet::compile(["*.log", "!keep.log"]);
        assert!(set.matches("app.log", false));
        assert!(!set.matches("keep.log", false));
        assert!(!set.matches("sub/keep.log", false));
    }

    #[test]
    fn test_negation_then_re_exclusion() {
        let set = PatternSet::compile(["*.log", "!keep.log", "keep.log"]);
        assert!(set.matches("keep.log", false));
    }

    #[test]
    fn test_negation_without_prior_exclusion_is_not_an_exclusion() {
        let set = PatternSet::compile(["!keep.log"]);
        assert!(!set.matches("keep.log", false));
        assert!(!set.matches("other.log", false));
    }

    #[test]
    fn test_directory_only_rule() {
        let set = PatternSet::compile(["build/"]);
        assert!(set.matches("build", true));
        assert!(!set.matches("build", false)); // a *file* named build
        assert!(set.matches("sub/build", true));
    }

    #[test]
    fn test_anchored_by_separator() {
        let set = PatternSet::compile(["src/generated.rs"]);
        assert!(set.matches("src/generated.rs", false));
        assert!(!set.matches("other/src/generated.rs", false));
    }

    #[test]
    fn test_anchored_by_leading_slash() {
        let set = PatternSet::compile(["/README.md"]);
        assert!(set.matches("README.md", false));
        assert!(!set.matches("docs/README.md", false));
    }

    #[test]
    fn test_double_star_crosses_separators() {
        let set = PatternSet::compile(["**/fixtures"]);
        assert!(set.matches("fixtures", false));
        assert!(set.matches("tests/fixtures", false));
        assert!(set.matches("a/b/c/fixtures", false));
        assert!(!set.matches("fixtures.rs", false));
    }

    #[test]
    fn test_double_star_in_the_middle() {
        let set = PatternSet::compile(["a/**/b"]);
        assert!(set.matches("a/b", false));
        assert!(set.matches("a/x/b", false));
        assert!(set.matches("a/x/y/b", false));
        assert!(!set.matches("a/x", false));
    }

    #[test]
    fn test_trailing_double_star_matches_inside_only() {
        let set = PatternSet::compile(["vendor/**"]);
        assert!(set.matches("vendor/lib.rs", false));
        assert!(set.matches("vendor/deep/lib.rs", false));
        assert!(!set.matches("vendor", true));
    }

    #[test]
    fn test_single_star_does_not_cross_separator() {
        let set = PatternSet::compile(["src/*.rs"]);
        assert!(set.matches("src/main.rs", false));
        assert!(!set.matches("src/deep/main.rs", false));
    }

    #[test]
    fn test_question_mark_matches_one_character() {
        let set = PatternSet::compile(["file?.txt"]);
        assert!(set.matches("file1.txt", false));
        assert!(!set.matches("file.txt", false));
        assert!(!set.matches("file12.txt", false));
    }

    #[test]
    fn test_malformed_patterns_never_match_and_never_abort() {
        let set = PatternSet::compile(["!", "/", "!/", "normal.txt"]);
        assert!(!set.matches("anything", false));
        assert!(!set.matches("!", false));
        assert!(set.matches("normal.txt", false));
    }

    #[test]
    fn test_character_class_is_literal() {
        let set = PatternSet::compile(["file[0-9].txt"]);
        assert!(!set.matches("file1.txt", false));
        assert!(set.matches("file[0-9].txt", false));
    }

    #[test]
    fn test_rule_metadata() {
        let set = PatternSet::compile(["!sub/dir/"]);
        let rule = &set.rules()[0];
        assert!(rule.negated);
        assert!(rule.dir_only);
        assert!(rule.anchored);
        assert_eq!(rule.raw, "!sub/dir/");
    }

    #[test]
    fn test_trailing_whitespace_is_stripped() {
        let set = PatternSet::compile(["*.log   "]);
        assert!(set.matches("app.log", false));
    }

    #[test]
    fn test_evaluation_is_order_dependent() {
        let first = PatternSet::compile(["!keep.log", "*.log"]);
        assert!(first.matches("keep.log", false)); // exclusion comes last

        let second = PatternSet::compile(["*.log", "!keep.log"]);
        assert!(!second.matches("keep.log", false)); // negation comes last
    }
}
