//! # annogen
//!
//! **annogen** is a code-generator plugin that attaches boilerplate-eliminating
//! annotations (`@Data`, `@Builder`, `@AllArgsConstructor`, `@NoArgsConstructor`,
//! `@Accessors`, `@ToString`) to generated data-model classes, and suppresses the
//! generator's own getters and setters so the annotations supply them instead.
//!
//! ## Overview
//!
//! The plugin is configured with a flat key/value namespace:
//!
//! ```text
//! builder            = true
//! builder.toBuilder  = true
//! allArgsConstructor = TRUE
//! toString.exclude   = password,salt
//! ```
//!
//! which compiles to:
//!
//! ```text
//! @Data
//! @Builder(toBuilder=true)
//! @AllArgsConstructor
//! @NoArgsConstructor
//! ```
//!
//! (`toString.exclude` is ignored because `toString` is not enabled.)
//!
//! ## Architecture
//!
//! - **[`feature`]** - Fixed catalog of annotations and the per-run selected form
//! - **[`quoting`]** - Turns raw option values into annotation literals
//! - **[`compiler`]** - Properties → ordered, dependency-closed [`Selection`]
//! - **[`augment`]** - Appends imports and annotations to a generated class
//! - **[`plugin`]** - Generation checkpoints a host calls
//! - **[`properties`]** - Ordered flat configuration, loadable from TOML/YAML/JSON
//! - **[`linter`]** - Diagnostics for configuration the compiler ignores
//! - **[`cli`]** - The `annogen` command-line tool
//! - **[`logging`]** - `tracing` subscriber setup
//!
//! ```mermaid
//! flowchart LR
//!     P[Properties] --> C[compiler::compile]
//!     C --> S[Selection]
//!     S --> A[augment::augment]
//!     A --> G[GeneratedClass]
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use annogen::augment::GeneratedClass;
//! use annogen::plugin::{AnnotationPlugin, IntrospectedTable, Plugin};
//! use annogen::properties::Properties;
//!
//! let props: Properties = [("allArgsConstructor", "true")].into_iter().collect();
//! let plugin = AnnotationPlugin::with_properties(&props);
//!
//! let mut class = GeneratedClass::new("User");
//! plugin.model_base_record_class_generated(&mut class, &IntrospectedTable::new("users"));
//! assert_eq!(
//!     class.annotations,
//!     vec!["@Data", "@AllArgsConstructor", "@NoArgsConstructor"]
//! );
//! ```

pub mod augment;
pub mod cli;
pub mod compiler;
pub mod feature;
pub mod linter;
pub mod logging;
pub mod plugin;
pub mod properties;
pub mod quoting;

pub use augment::{augment, AnnotationTarget, GeneratedClass, GeneratedInterface};
pub use compiler::{compile, Selection};
pub use feature::{FeatureDef, SelectedFeature, FEATURES};
pub use plugin::{AnnotationPlugin, Plugin};
pub use properties::{load_properties, Properties};
