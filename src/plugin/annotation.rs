use tracing::debug;

use super::{IntrospectedColumn, IntrospectedTable, Method, ModelClassType, Plugin};
use crate::augment::{augment, AnnotationTarget, GeneratedClass, GeneratedInterface};
use crate::compiler::{compile, Selection};
use crate::properties::Properties;

/// Import added to every generated client interface.
pub const MAPPER_IMPORT: &str = "org.apache.ibatis.annotations.Mapper";
/// Annotation added to every generated client interface.
pub const MAPPER_ANNOTATION: &str = "@Mapper";

/// Plugin that replaces generated accessors with annotations.
///
/// Until [`Plugin::set_properties`] is called the plugin behaves as if it had
/// been configured with no properties, attaching `@Data` only.
#[derive(Debug, Clone, Default)]
pub struct AnnotationPlugin {
    selection: Selection,
}

impl AnnotationPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a plugin already configured with `properties`.
    pub fn with_properties(properties: &Properties) -> Self {
        let mut plugin = Self::new();
        plugin.set_properties(properties);
        plugin
    }

    /// The compiled selection applied to model classes.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    fn annotate(&self, class: &mut GeneratedClass, table: &IntrospectedTable) -> bool {
        debug!(class = %class.name, table = %table.name, "Annotating model class");
        augment(&self.selection, class);
        true
    }
}

impl Plugin for AnnotationPlugin {
    fn set_properties(&mut self, properties: &Properties) {
        self.selection = compile(properties);
    }

    fn validate(&self, _warnings: &mut Vec<String>) -> bool {
        true
    }

    fn model_base_record_class_generated(
        &self,
        class: &mut GeneratedClass,
        table: &IntrospectedTable,
    ) -> bool {
        self.annotate(class, table)
    }

    fn model_primary_key_class_generated(
        &self,
        class: &mut GeneratedClass,
        table: &IntrospectedTable,
    ) -> bool {
        self.annotate(class, table)
    }

    fn model_record_with_blobs_class_generated(
        &self,
        class: &mut GeneratedClass,
        table: &IntrospectedTable,
    ) -> bool {
        self.annotate(class, table)
    }

    fn model_getter_method_generated(
        &self,
        _method: &Method,
        _class: &GeneratedClass,
        _column: &IntrospectedColumn,
        _table: &IntrospectedTable,
        _kind: ModelClassType,
    ) -> bool {
        false
    }

    fn model_setter_method_generated(
        &self,
        _method: &Method,
        _class: &GeneratedClass,
        _column: &IntrospectedColumn,
        _table: &IntrospectedTable,
        _kind: ModelClassType,
    ) -> bool {
        false
    }

    fn client_generated(
        &self,
        interface: &mut GeneratedInterface,
        _table: &IntrospectedTable,
    ) -> bool {
        interface.add_import(MAPPER_IMPORT);
        interface.add_annotation(MAPPER_ANNOTATION.to_string());
        true
    }
}
