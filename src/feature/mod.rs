//! # Feature Module
//!
//! The feature module holds the fixed catalog of annotations the plugin knows how
//! to attach, and the per-run [`SelectedFeature`] values that carry options.
//!
//! ## Catalog
//!
//! | key                  | annotation            | import                          |
//! |----------------------|-----------------------|---------------------------------|
//! | `data`               | `@Data`               | `lombok.Data`                   |
//! | `builder`            | `@Builder`            | `lombok.Builder`                |
//! | `allArgsConstructor` | `@AllArgsConstructor` | `lombok.AllArgsConstructor`     |
//! | `noArgsConstructor`  | `@NoArgsConstructor`  | `lombok.NoArgsConstructor`      |
//! | `accessors`          | `@Accessors`          | `lombok.experimental.Accessors` |
//! | `toString`           | `@ToString`           | `lombok.ToString`               |
//!
//! `data` is always selected. `allArgsConstructor` pulls in `noArgsConstructor`.
//!
//! ## Rendering
//!
//! A selected feature renders as its bare name when it has no options,
//! otherwise as `Name(opt1, opt2, ...)`:
//!
//! ```rust
//! use annogen::feature::{FeatureDef, SelectedFeature};
//!
//! let accessors = FeatureDef::lookup("accessors").unwrap();
//! let mut selected = SelectedFeature::new(accessors);
//! selected.push_option("prefix=\"get\"");
//! assert_eq!(selected.render(), "@Accessors(prefix=\"get\")");
//! ```
//!
//! The catalog is immutable. Option lists live on [`SelectedFeature`], which is
//! created fresh for every compile run, so independent runs never share state.

use serde::Serialize;
use std::fmt;


/// A single annotation the plugin can attach to a generated class.
#[derive(Debug, PartialEq, Eq, Hash, Serialize)]
pub struct FeatureDef {
    /// Configuration key, matched case-insensitively
    pub key: &'static str,
    /// Literal annotation head, including the leading `@`
    pub name: &'static str,
    /// Fully-qualified type added to the target's import list
    pub import: &'static str,
    /// Keys of the features this one requires
    pub depends_on: &'static [&'static str],
}

/// Key of the mandatory default feature.
pub const DEFAULT_FEATURE_KEY: &str = "data";

/// The built-in catalog, in declaration order.
pub static FEATURES: [FeatureDef; 6] = [
    FeatureDef {
        key: DEFAULT_FEATURE_KEY,
        name: "@Data",
        import: "lombok.Data",
        depends_on: &[],
    },
    FeatureDef {
        key: "builder",
        name: "@Builder",
        import: "lombok.Builder",
        depends_on: &[],
    },
    FeatureDef {
        key: "allArgsConstructor",
        name: "@AllArgsConstructor",
        import: "lombok.AllArgsConstructor",
        depends_on: &["noArgsConstructor"],
    },
    FeatureDef {
        key: "noArgsConstructor",
        name: "@NoArgsConstructor",
        import: "lombok.NoArgsConstructor",
        depends_on: &[],
    },
    FeatureDef {
        key: "accessors",
        name: "@Accessors",
        import: "lombok.experimental.Accessors",
        depends_on: &[],
    },
    FeatureDef {
        key: "toString",
        name: "@ToString",
        import: "lombok.ToString",
        depends_on: &[],
    },
];

impl FeatureDef {
    /// Find the catalog entry whose key matches `key`, ignoring ASCII case.
    pub fn lookup(key: &str) -> Option<&'static FeatureDef> {
        FEATURES.iter().find(|f| f.key.eq_ignore_ascii_case(key))
    }

    /// The feature that is selected regardless of configuration.
    pub fn default_feature() -> &'static FeatureDef {
        &FEATURES[0]
    }

    /// Whether this is the mandatory default feature.
    pub fn is_default(&self) -> bool {
        self.key == DEFAULT_FEATURE_KEY
    }

    /// Direct dependencies of this feature, in declared order.
    ///
    /// Dependency keys always name catalog entries; a key that does not resolve
    /// is skipped.
    pub fn dependencies(&self) -> impl Iterator<Item = &'static FeatureDef> + '_ {
        self.depends_on.iter().filter_map(|key| FeatureDef::lookup(key))
    }
}

impl fmt::Display for FeatureDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key)
    }
}

/// A catalog feature chosen for one generation run, with its rendered options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFeature {
    def: &'static FeatureDef,
    options: Vec<String>,
}

impl SelectedFeature {
    /// Select `def` with an empty option list.
    pub fn new(def: &'static FeatureDef) -> Self {
        Self {
            def,
            options: Vec::new(),
        }
    }

    /// The catalog entry this selection refers to.
    pub fn def(&self) -> &'static FeatureDef {
        self.def
    }

    pub fn key(&self) -> &'static str {
        self.def.key
    }

    pub fn name(&self) -> &'static str {
        self.def.name
    }

    pub fn import(&self) -> &'static str {
        self.def.import
    }

    /// Option fragments (`key=value`) in the order they were attached.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Append an already-rendered `key=value` fragment.
    pub fn push_option(&mut self, option: impl Into<String>) {
        self.options.push(option.into());
    }

    /// Render the annotation literal: `@Name` or `@Name(opt1, opt2, ...)`.
    pub fn render(&self) -> String {
        if self.options.is_empty() {
            return self.def.name.to_string();
        }
        format!("{}({})", self.def.name, self.options.join(", "))
    }
}

impl fmt::Display for SelectedFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
