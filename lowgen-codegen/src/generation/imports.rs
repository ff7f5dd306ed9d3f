//! Import and dependency collection utilities.

use std::collections::{BTreeSet, HashMap};

use indexmap::IndexMap;

/// Tracks component imports per module path and deduplicates them.
///
/// Modules keep first-seen order; symbols within a module are kept sorted.
///
/// # Example
///
/// ```
/// use lowgen_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("@tarojs/components", "View");
/// imports.add("@tarojs/components", "Text");
/// imports.add("@tarojs/components", "View");
///
/// for (module, symbols) in imports.iter() {
///     let symbols: Vec<&str> = symbols.iter().map(|s| s.as_str()).collect();
///     println!("import {{ {} }} from \"{}\";", symbols.join(", "), module);
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportCollector {
    /// Module path -> set of symbols (sorted for deterministic output)
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a module.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Add a side-effect module import (`import "module";`).
    pub fn add_module(&mut self, module: &str) {
        self.imports.entry(module.to_string()).or_default();
    }

    /// Check if a specific symbol is imported from a module.
    pub fn has_symbol(&self, module: &str, symbol: &str) -> bool {
        self.imports
            .get(module)
            .is_some_and(|symbols| symbols.contains(symbol))
    }

    /// Get the symbols imported from a module.
    pub fn symbols(&self, module: &str) -> Option<&BTreeSet<String>> {
        self.imports.get(module)
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over all imports sorted by module path.
    pub fn sorted(&self) -> Vec<(&str, &BTreeSet<String>)> {
        let mut imports: Vec<_> = self.iter().collect();
        imports.sort_by_key(|(module, _)| *module);
        imports
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Get the number of modules.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}

/// Specification for an npm dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySpec {
    /// Version range (e.g. "^3.6.0", "*")
    pub version: String,
    /// Whether this belongs in `devDependencies`
    pub dev: bool,
}

impl DependencySpec {
    /// Create a runtime dependency.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            dev: false,
        }
    }

    /// Any version.
    pub fn any() -> Self {
        Self::new("*")
    }

    /// Mark as a development dependency.
    pub fn dev(mut self) -> Self {
        self.dev = true;
        self
    }
}

/// Tracks npm packages required by generated code.
///
/// # Example
///
/// ```
/// use lowgen_codegen::generation::{DependencyCollector, DependencySpec};
///
/// let mut deps = DependencyCollector::new();
/// deps.add("@acme/ui", DependencySpec::new("^2.0.0"));
/// deps.add_import_path("dayjs/plugin/utc");
///
/// for (name, spec) in deps.sorted() {
///     println!("\"{}\": \"{}\"", name, spec.version);
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencyCollector {
    deps: HashMap<String, DependencySpec>,
}

impl DependencyCollector {
    /// Create a new empty dependency collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dependency. If it already exists, this is a no-op.
    pub fn add(&mut self, name: impl Into<String>, spec: DependencySpec) {
        let name = name.into();
        self.deps.entry(name).or_insert(spec);
    }

    /// Record the package an import path belongs to.
    ///
    /// Relative and absolute paths refer to project files and are ignored.
    pub fn add_import_path(&mut self, import_path: &str) {
        if let Some(package) = package_name(import_path) {
            self.add(package, DependencySpec::any());
        }
    }

    /// Merge another collector; existing entries win.
    pub fn merge(&mut self, other: &DependencyCollector) {
        for (name, spec) in &other.deps {
            self.add(name.clone(), spec.clone());
        }
    }

    /// Check if a dependency exists.
    pub fn has(&self, name: &str) -> bool {
        self.deps.contains_key(name)
    }

    /// Get a dependency spec.
    pub fn get(&self, name: &str) -> Option<&DependencySpec> {
        self.deps.get(name)
    }

    /// Iterate over all dependencies.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DependencySpec)> {
        self.deps.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get dependencies sorted by name for deterministic output.
    pub fn sorted(&self) -> Vec<(&str, &DependencySpec)> {
        let mut deps: Vec<_> = self.iter().collect();
        deps.sort_by_key(|(name, _)| *name);
        deps
    }

    /// Sorted package names.
    pub fn names(&self) -> Vec<String> {
        self.sorted()
            .into_iter()
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.deps.is_empty()
    }

    /// Get the number of dependencies.
    pub fn len(&self) -> usize {
        self.deps.len()
    }
}

/// npm package name of a bare import specifier.
///
/// `@scope/pkg/sub` gives `@scope/pkg`, `pkg/sub` gives `pkg`.
pub fn package_name(import_path: &str) -> Option<String> {
    if import_path.is_empty() || import_path.starts_with('.') || import_path.starts_with('/') {
        return None;
    }
    let mut segments = import_path.split('/');
    let first = segments.next()?;
    if first.starts_with('@') {
        let second = segments.next().filter(|s| !s.is_empty())?;
        Some(format!("{first}/{second}"))
    } else {
        Some(first.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_collector_basic() {
        let mut imports = ImportCollector::new();
        imports.add("@tarojs/components", "View");
        imports.add("@tarojs/components", "Text");
        imports.add("@tarojs/components", "View");
        imports.add("@acme/ui", "Card");

        assert!(imports.symbols("@tarojs/components").is_some());
        assert!(imports.has_symbol("@tarojs/components", "Text"));
        assert!(!imports.has_symbol("@tarojs/components", "Image"));
        assert_eq!(imports.len(), 2);

        let symbols: Vec<_> = imports
            .symbols("@tarojs/components")
            .unwrap()
            .iter()
            .collect();
        assert_eq!(symbols, vec!["Text", "View"]);
    }

    #[test]
    fn test_import_collector_order() {
        let mut imports = ImportCollector::new();
        imports.add("@tarojs/components", "View");
        imports.add("@acme/ui", "Card");

        let modules: Vec<_> = imports.iter().map(|(m, _)| m).collect();
        assert_eq!(modules, vec!["@tarojs/components", "@acme/ui"]);

        let sorted: Vec<_> = imports.sorted().into_iter().map(|(m, _)| m).collect();
        assert_eq!(sorted, vec!["@acme/ui", "@tarojs/components"]);
    }

    #[test]
    fn test_dependency_collector() {
        let mut deps = DependencyCollector::new();
        deps.add("dayjs", DependencySpec::new("^1.11.0"));
        deps.add("typescript", DependencySpec::new("^5.0.0").dev());
        deps.add("dayjs", DependencySpec::new("^2.0.0"));

        assert!(deps.has("dayjs"));
        assert!(!deps.has("lodash"));
        assert_eq!(deps.get("dayjs").unwrap().version, "^1.11.0");
        assert!(deps.get("typescript").unwrap().dev);
        assert_eq!(deps.names(), vec!["dayjs", "typescript"]);
    }

    #[test]
    fn test_dependency_from_import_path() {
        let mut deps = DependencyCollector::new();
        deps.add_import_path("@acme/ui/card");
        deps.add_import_path("react-native-svg");
        deps.add_import_path("./components/Card");
        deps.add_import_path("");

        assert_eq!(deps.names(), vec!["@acme/ui", "react-native-svg"]);
    }

    #[test]
    fn test_package_name() {
        assert_eq!(package_name("@tarojs/components").as_deref(), Some("@tarojs/components"));
        assert_eq!(package_name("lodash/fp").as_deref(), Some("lodash"));
        assert_eq!(package_name("@broken"), None);
        assert_eq!(package_name("/abs/path"), None);
    }
}
