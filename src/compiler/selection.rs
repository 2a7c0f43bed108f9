use indexmap::IndexMap;

use crate::feature::{FeatureDef, SelectedFeature};

/// The ordered, dependency-closed set of features chosen for one generation run.
///
/// Features appear in the order they were selected; that order is the order
/// annotations are written into generated classes. Once [`compile`] returns, a
/// selection is only read, so it can be shared freely between checkpoints.
///
/// [`compile`]: crate::compiler::compile
#[derive(Debug, Clone)]
pub struct Selection {
    features: IndexMap<&'static str, SelectedFeature>,
}

impl Selection {
    /// A selection holding only the mandatory default feature.
    pub fn new() -> Self {
        let default = FeatureDef::default_feature();
        let mut features = IndexMap::new();
        features.insert(default.key, SelectedFeature::new(default));
        Self { features }
    }

    /// Add `def` if absent and return its entry. An existing entry keeps its position.
    pub(crate) fn select(&mut self, def: &'static FeatureDef) -> &mut SelectedFeature {
        self.features
            .entry(def.key)
            .or_insert_with(|| SelectedFeature::new(def))
    }

    /// Add every dependency of `def`, depth-first, without options.
    pub(crate) fn select_dependencies(&mut self, def: &'static FeatureDef) {
        for dep in def.dependencies() {
            if self.features.contains_key(dep.key) {
                continue;
            }
            self.select(dep);
            self.select_dependencies(dep);
        }
    }

    /// Whether the feature named by `key` (any case) is selected.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// The selected feature named by `key` (any case).
    pub fn get(&self, key: &str) -> Option<&SelectedFeature> {
        let def = FeatureDef::lookup(key)?;
        self.features.get(def.key)
    }

    /// Selected features in rendering order.
    pub fn iter(&self) -> impl Iterator<Item = &SelectedFeature> {
        self.features.values()
    }

    /// Canonical keys in rendering order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.features.keys().copied().collect()
    }

    /// Import identifiers in rendering order.
    pub fn imports(&self) -> Vec<&'static str> {
        self.iter().map(SelectedFeature::import).collect()
    }

    /// Rendered annotation literals in rendering order.
    pub fn annotations(&self) -> Vec<String> {
        self.iter().map(SelectedFeature::render).collect()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Always false: the default feature is never removed.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Equal when the same features, with the same options, appear in the same order.
impl PartialEq for Selection {
    fn eq(&self, other: &Self) -> bool {
        self.features.values().eq(other.features.values())
    }
}

impl Eq for Selection {}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a SelectedFeature;
    type IntoIter = indexmap::map::Values<'a, &'static str, SelectedFeature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.values()
    }
}
