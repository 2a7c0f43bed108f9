#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use std::sync::Arc;
use std::thread;

fn configured(entries: &[(&str, &str)]) -> AnnotationPlugin {
    let props: Properties = entries.iter().copied().collect();
    AnnotationPlugin::with_properties(&props)
}

/// A plugin relying entirely on the trait defaults.
struct PassThrough;

impl Plugin for PassThrough {}

#[test]
fn test_unconfigured_plugin_attaches_data() {
    let plugin = AnnotationPlugin::new();
    let mut class = GeneratedClass::new("User");
    assert!(plugin.model_base_record_class_generated(&mut class, &IntrospectedTable::new("users")));
    assert_eq!(class.annotations, vec!["@Data"]);
    assert_eq!(class.imports, vec!["lombok.Data"]);
}

#[test]
fn test_all_model_checkpoints_annotate() {
    let plugin = configured(&[("builder", "true")]);
    let table = IntrospectedTable::new("users");

    let mut base = GeneratedClass::new("User");
    let mut key = GeneratedClass::new("UserKey");
    let mut blobs = GeneratedClass::new("UserWithBLOBs");
    assert!(plugin.model_base_record_class_generated(&mut base, &table));
    assert!(plugin.model_primary_key_class_generated(&mut key, &table));
    assert!(plugin.model_record_with_blobs_class_generated(&mut blobs, &table));

    for class in [&base, &key, &blobs] {
        assert_eq!(class.annotations, vec!["@Data", "@Builder"]);
    }
}

#[test]
fn test_accessors_are_suppressed() {
    let plugin = configured(&[]);
    let class = GeneratedClass::new("User");
    let column = IntrospectedColumn {
        name: "user_name".into(),
        property: "userName".into(),
    };
    let table = IntrospectedTable::new("users");
    let getter = Method {
        name: "getUserName".into(),
    };
    let setter = Method {
        name: "setUserName".into(),
    };

    for kind in [
        ModelClassType::BaseRecord,
        ModelClassType::PrimaryKey,
        ModelClassType::RecordWithBlobs,
    ] {
        assert!(!plugin.model_getter_method_generated(&getter, &class, &column, &table, kind));
        assert!(!plugin.model_setter_method_generated(&setter, &class, &column, &table, kind));
    }
}

#[test]
fn test_client_marked_as_mapper() {
    let plugin = configured(&[("builder", "true"), ("toString", "true")]);
    let mut iface = GeneratedInterface::new("UserMapper");
    assert!(plugin.client_generated(&mut iface, &IntrospectedTable::new("users")));
    assert_eq!(iface.imports, vec![MAPPER_IMPORT]);
    assert_eq!(iface.annotations, vec![MAPPER_ANNOTATION]);
}

#[test]
fn test_validate_always_passes() {
    let plugin = configured(&[("frobnicate", "true")]);
    let mut warnings = Vec::new();
    assert!(plugin.validate(&mut warnings));
    assert!(warnings.is_empty());
}

#[test]
fn test_reconfigure_replaces_selection() {
    let mut plugin = configured(&[("builder", "true"), ("builder.toBuilder", "true")]);
    assert_eq!(
        plugin.selection().annotations(),
        vec!["@Data", "@Builder(toBuilder=true)"]
    );

    let props: Properties = [("toString", "true")].into_iter().collect();
    plugin.set_properties(&props);
    assert_eq!(plugin.selection().annotations(), vec!["@Data", "@ToString"]);
}

#[test]
fn test_same_properties_twice_do_not_accumulate_options() {
    let props: Properties = [("accessors", "true"), ("accessors.fluent", "true")]
        .into_iter()
        .collect();
    let mut plugin = AnnotationPlugin::new();
    plugin.set_properties(&props);
    plugin.set_properties(&props);
    assert_eq!(
        plugin.selection().annotations(),
        vec!["@Data", "@Accessors(fluent=true)"]
    );
}

#[test]
fn test_checkpoints_shared_across_threads() {
    let plugin = Arc::new(configured(&[("allArgsConstructor", "true")]));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let plugin = Arc::clone(&plugin);
            thread::spawn(move || {
                let mut class = GeneratedClass::new(format!("Model{i}"));
                plugin.model_base_record_class_generated(
                    &mut class,
                    &IntrospectedTable::new(format!("t{i}")),
                );
                class.annotations
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(
            handle.join().unwrap(),
            vec!["@Data", "@AllArgsConstructor", "@NoArgsConstructor"]
        );
    }
}

#[test]
fn test_trait_defaults_keep_everything() {
    let mut plugin = PassThrough;
    plugin.set_properties(&Properties::new());
    let table = IntrospectedTable::new("users");
    let mut class = GeneratedClass::new("User");
    let mut iface = GeneratedInterface::new("UserMapper");

    assert!(plugin.validate(&mut Vec::new()));
    assert!(plugin.model_base_record_class_generated(&mut class, &table));
    assert!(plugin.model_getter_method_generated(
        &Method::default(),
        &class,
        &IntrospectedColumn::default(),
        &table,
        ModelClassType::BaseRecord,
    ));
    assert!(plugin.client_generated(&mut iface, &table));
    assert!(class.annotations.is_empty());
    assert!(iface.annotations.is_empty());
}
