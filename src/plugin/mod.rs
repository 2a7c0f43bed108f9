//! # Plugin Module
//!
//! Host-facing adapter. A code generator drives a [`Plugin`] through a fixed
//! sequence of checkpoints:
//!
//! ```text
//! set_properties ─▶ validate ─▶ (per table)
//!                                ├─ model_base_record_class_generated
//!                                ├─ model_primary_key_class_generated
//!                                ├─ model_record_with_blobs_class_generated
//!                                ├─ model_getter_method_generated   (per column)
//!                                ├─ model_setter_method_generated   (per column)
//!                                └─ client_generated
//! ```
//!
//! Every checkpoint returns `true` to keep the generated element and `false`
//! to drop it. [`AnnotationPlugin`] compiles its properties once, annotates
//! every model class, drops generated accessors and marks client interfaces
//! as mappers.
//!
//! ## Concurrency
//!
//! Configuration takes `&mut self`; checkpoints take `&self`. Once configured,
//! a plugin can be shared across threads that generate classes in parallel,
//! and the borrow checker rules out reconfiguring it while they run.

mod annotation;
#[cfg(test)]
mod tests;

pub use annotation::{AnnotationPlugin, MAPPER_ANNOTATION, MAPPER_IMPORT};

use crate::augment::{GeneratedClass, GeneratedInterface};
use crate::properties::Properties;

/// Table metadata the host introspected from the database.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntrospectedTable {
    /// Fully-qualified table name, e.g. `public.users`
    pub name: String,
}

impl IntrospectedTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Column metadata the host introspected from the database.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntrospectedColumn {
    pub name: String,
    /// Java property name derived from the column
    pub property: String,
}

/// A generated accessor method.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Method {
    pub name: String,
}

/// Which model class a getter or setter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelClassType {
    PrimaryKey,
    BaseRecord,
    RecordWithBlobs,
}

/// Generation checkpoints a host calls on its plugins.
///
/// The default implementations keep everything and ignore configuration.
pub trait Plugin {
    /// Receive the plugin's flat configuration. Called once, before any checkpoint.
    fn set_properties(&mut self, _properties: &Properties) {}

    /// Report configuration problems. Returning `false` disables the plugin.
    fn validate(&self, _warnings: &mut Vec<String>) -> bool {
        true
    }

    fn model_base_record_class_generated(
        &self,
        _class: &mut GeneratedClass,
        _table: &IntrospectedTable,
    ) -> bool {
        true
    }

    fn model_primary_key_class_generated(
        &self,
        _class: &mut GeneratedClass,
        _table: &IntrospectedTable,
    ) -> bool {
        true
    }

    fn model_record_with_blobs_class_generated(
        &self,
        _class: &mut GeneratedClass,
        _table: &IntrospectedTable,
    ) -> bool {
        true
    }

    fn model_getter_method_generated(
        &self,
        _method: &Method,
        _class: &GeneratedClass,
        _column: &IntrospectedColumn,
        _table: &IntrospectedTable,
        _kind: ModelClassType,
    ) -> bool {
        true
    }

    fn model_setter_method_generated(
        &self,
        _method: &Method,
        _class: &GeneratedClass,
        _column: &IntrospectedColumn,
        _table: &IntrospectedTable,
        _kind: ModelClassType,
    ) -> bool {
        true
    }

    fn client_generated(
        &self,
        _interface: &mut GeneratedInterface,
        _table: &IntrospectedTable,
    ) -> bool {
        true
    }
}
