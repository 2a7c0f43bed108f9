//! # Properties Linter Module
//!
//! The compiler never rejects configuration: unknown keys, non-boolean flags and
//! orphan options are skipped silently. This module reports those cases so a
//! user can find out why an annotation is missing before running generation.
//!
//! ## Checks Performed
//!
//! 1. **unknown_feature** - Top-level key that names no feature
//! 2. **non_boolean_flag** - Feature key whose value is neither `true` nor `false`
//! 3. **orphan_option** - `<feature>.<option>` key without an enabled owner
//! 4. **default_feature_flag** - Key naming `data`, which is always on
//! 5. **unbalanced_braces** - Option value whose `{` and `}` do not pair up
//!
//! ## Usage
//!
//! ```rust
//! use annogen::linter::{lint_properties, LintSeverity};
//! use annogen::properties::Properties;
//!
//! let props: Properties = [("frobnicate", "true")].into_iter().collect();
//! let issues = lint_properties(&props);
//! assert_eq!(issues[0].kind, "unknown_feature");
//! assert_eq!(issues[0].severity, LintSeverity::Warning);
//! ```

use serde::Serialize;
use std::fmt;

use crate::feature::{FeatureDef, FEATURES};
use crate::properties::Properties;


/// Severity level for lint issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LintSeverity {
    /// Error - Generated source will not compile
    Error,
    /// Warning - Configuration is silently ignored
    Warning,
    /// Info - Harmless but redundant configuration
    Info,
}

impl fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintSeverity::Error => f.write_str("error"),
            LintSeverity::Warning => f.write_str("warning"),
            LintSeverity::Info => f.write_str("info"),
        }
    }
}

/// A lint issue found in plugin properties
#[derive(Debug, Clone, Serialize)]
pub struct LintIssue {
    /// Property key the issue is about
    pub location: String,
    /// Severity of the issue
    pub severity: LintSeverity,
    /// Type of lint issue (e.g., "unknown_feature", "orphan_option")
    pub kind: String,
    /// Human-readable description of the problem
    pub message: String,
    /// Optional suggestion for how to fix it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl LintIssue {
    /// Create a new lint issue
    pub fn new(
        location: impl Into<String>,
        severity: LintSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LintIssue {
            location: location.into(),
            severity,
            kind: kind.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Add a suggestion for fixing the issue
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Lint plugin properties.
///
/// Issues are returned in property order.
pub fn lint_properties(props: &Properties) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    for (key, value) in props.iter() {
        match key.split_once('.') {
            None => lint_flag(&mut issues, key, value),
            Some((owner, _)) => lint_option(&mut issues, props, key, owner, value),
        }
    }
    issues
}

fn lint_flag(issues: &mut Vec<LintIssue>, key: &str, value: &str) {
    let Some(def) = FeatureDef::lookup(key) else {
        let known: Vec<_> = FEATURES.iter().map(|f| f.key).collect();
        issues.push(
            LintIssue::new(
                key,
                LintSeverity::Warning,
                "unknown_feature",
                format!("'{key}' does not name a feature and is ignored"),
            )
            .with_suggestion(format!("Use one of: {}", known.join(", "))),
        );
        return;
    };

    if def.is_default() {
        issues.push(LintIssue::new(
            key,
            LintSeverity::Info,
            "default_feature_flag",
            format!("{} is always attached; '{key}' has no effect on selection", def.name),
        ));
    }

    if !value.eq_ignore_ascii_case("true") && !value.eq_ignore_ascii_case("false") {
        issues.push(
            LintIssue::new(
                key,
                LintSeverity::Warning,
                "non_boolean_flag",
                format!("'{value}' is not a boolean; {} stays disabled", def.name),
            )
            .with_suggestion(format!("Set {key} = \"true\" to enable {}", def.name)),
        );
    }
}

fn lint_option(
    issues: &mut Vec<LintIssue>,
    props: &Properties,
    key: &str,
    owner: &str,
    value: &str,
) {
    let enabled = props
        .get(owner)
        .is_some_and(|flag| flag.eq_ignore_ascii_case("true"))
        && FeatureDef::lookup(owner).is_some();
    if !enabled {
        let mut issue = LintIssue::new(
            key,
            LintSeverity::Info,
            "orphan_option",
            format!("'{owner}' is not enabled, so '{key}' is ignored"),
        );
        if let Some(def) = FeatureDef::lookup(owner) {
            issue = issue.with_suggestion(format!("Add {} = \"true\"", def.key));
        }
        issues.push(issue);
    }

    let opens = value.matches('{').count();
    let closes = value.matches('}').count();
    if opens != closes {
        issues.push(LintIssue::new(
            key,
            LintSeverity::Error,
            "unbalanced_braces",
            format!("'{value}' has {opens} '{{' but {closes} '}}'; the annotation will not compile"),
        ));
    }
}

/// Whether any issue has error severity.
pub fn has_errors(issues: &[LintIssue]) -> bool {
    issues.iter().any(|i| i.severity == LintSeverity::Error)
}

/// Print lint issues grouped by severity
pub fn print_lint_issues(issues: &[LintIssue]) {
    if issues.is_empty() {
        println!("✅ No lint issues found!");
        return;
    }

    let groups = [
        (LintSeverity::Error, "❌ Errors (must fix):"),
        (LintSeverity::Warning, "⚠️  Warnings (should fix):"),
        (LintSeverity::Info, "ℹ️  Info:"),
    ];
    let count = |severity: LintSeverity| issues.iter().filter(|i| i.severity == severity).count();

    println!("\n📋 Lint Results:");
    println!(
        "   {} error(s), {} warning(s), {} info(s)\n",
        count(LintSeverity::Error),
        count(LintSeverity::Warning),
        count(LintSeverity::Info)
    );

    for (severity, heading) in groups {
        if count(severity) == 0 {
            continue;
        }
        println!("{heading}");
        for issue in issues.iter().filter(|i| i.severity == severity) {
            println!("   [{}] {}", issue.kind, issue.location);
            println!("      {}", issue.message);
            if let Some(suggestion) = &issue.suggestion {
                println!("      💡 Suggestion: {}", suggestion);
            }
        }
        println!();
    }
}
