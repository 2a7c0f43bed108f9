//! # Augment Module
//!
//! Appends the compiled annotations to the representation of a generated class.
//!
//! The host owns the class model. All this module needs is somewhere to append
//! imports and annotation literals, expressed by [`AnnotationTarget`].
//! [`GeneratedClass`] and [`GeneratedInterface`] are minimal models used by the
//! bundled plugin adapter and CLI.

use std::fmt;

use tracing::debug;

use crate::compiler::Selection;


/// Anything that can receive imports and annotations.
pub trait AnnotationTarget {
    /// Append a fully-qualified type to the import list.
    fn add_import(&mut self, import: &str);
    /// Append an annotation literal such as `@Data`.
    fn add_annotation(&mut self, annotation: String);
}

/// A generated top-level class (model record, primary key, record with BLOBs).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedClass {
    pub name: String,
    pub imports: Vec<String>,
    pub annotations: Vec<String>,
}

impl GeneratedClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl AnnotationTarget for GeneratedClass {
    fn add_import(&mut self, import: &str) {
        self.imports.push(import.to_string());
    }

    fn add_annotation(&mut self, annotation: String) {
        self.annotations.push(annotation);
    }
}

/// Header text: imports, a blank line, annotations, then the class line.
impl fmt::Display for GeneratedClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, &self.imports, &self.annotations)?;
        write!(f, "public class {} {{\n}}", self.name)
    }
}

/// A generated client (data-access mapper) interface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedInterface {
    pub name: String,
    pub imports: Vec<String>,
    pub annotations: Vec<String>,
}

impl GeneratedInterface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl AnnotationTarget for GeneratedInterface {
    fn add_import(&mut self, import: &str) {
        self.imports.push(import.to_string());
    }

    fn add_annotation(&mut self, annotation: String) {
        self.annotations.push(annotation);
    }
}

impl fmt::Display for GeneratedInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, &self.imports, &self.annotations)?;
        write!(f, "public interface {} {{\n}}", self.name)
    }
}

fn write_header(f: &mut fmt::Formatter<'_>, imports: &[String], annotations: &[String]) -> fmt::Result {
    for import in imports {
        writeln!(f, "import {import};")?;
    }
    if !imports.is_empty() {
        writeln!(f)?;
    }
    for annotation in annotations {
        writeln!(f, "{annotation}")?;
    }
    Ok(())
}

/// Append every selected feature's import and rendered annotation to `target`,
/// in selection order.
///
/// Nothing is deduplicated: augmenting the same target twice appends twice.
pub fn augment<T: AnnotationTarget + ?Sized>(selection: &Selection, target: &mut T) {
    for feature in selection {
        target.add_import(feature.import());
        target.add_annotation(feature.render());
    }
    debug!(count = selection.len(), "Attached annotations");
}
