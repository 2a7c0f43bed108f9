//! # Compiler Module
//!
//! Turns flat plugin [`Properties`] into a [`Selection`]: the ordered,
//! dependency-closed list of annotations to attach to every generated class.
//!
//! ## Algorithm
//!
//! 1. Start with `@Data`, which is always present.
//! 2. Walk the top-level keys (no `.`) in insertion order. A key is used when it
//!    names a catalog feature (any case) and its value is `true` (any case).
//! 3. For a used key, collect every `<key>.<option>` entry as a quoted
//!    `option=value` fragment, then add the feature's dependencies.
//!
//! Unknown keys, disabled features and orphan options are skipped without
//! error. Every call builds a fresh selection, so compiling the same properties
//! twice gives the same result.
//!
//! ```rust
//! use annogen::compiler::compile;
//! use annogen::properties::Properties;
//!
//! let props: Properties = [("builder", "true"), ("builder.toBuilder", "true")]
//!     .into_iter()
//!     .collect();
//! let selection = compile(&props);
//! assert_eq!(selection.annotations(), vec!["@Data", "@Builder(toBuilder=true)"]);
//! ```

mod selection;

pub use selection::Selection;

use tracing::{debug, info};

use crate::feature::FeatureDef;
use crate::properties::Properties;
use crate::quoting::option_entry;

/// Compile plugin properties into a selection. Never fails.
pub fn compile(props: &Properties) -> Selection {
    let mut selection = Selection::new();

    for (key, value) in props.iter() {
        if key.contains('.') {
            continue;
        }
        let Some(def) = FeatureDef::lookup(key) else {
            debug!(key = %key, "Ignoring unknown feature key");
            continue;
        };
        if !value.eq_ignore_ascii_case("true") {
            debug!(key = %key, value = %value, "Feature disabled");
            continue;
        }

        let prefix = format!("{key}.");
        let selected = selection.select(def);
        for (option_key, option_value) in props.iter() {
            if let Some(option) = option_key.strip_prefix(&prefix) {
                selected.push_option(option_entry(option, option_value));
            }
        }
        selection.select_dependencies(def);
    }

    info!(
        features = ?selection.keys(),
        properties_count = props.len(),
        "Compiled annotation selection"
    );
    selection
}
