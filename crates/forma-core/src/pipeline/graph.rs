//! Dependency graph: build, cycle detection, deterministic ordering.
//!
//! Everything here is a pure function of the plugin set and its declared
//! edges, never of input sequence. BTree containers guarantee that
//! traversal visits nodes and dependency sets in ascending-id order, so
//! the same graph always yields the same order and the same cycle text.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::Plugin;
use crate::pipeline::error::PipelineError;
use crate::pipeline::registry::PluginRegistry;

/// Directed graph over plugin ids.
///
/// `nodes` includes ids referenced only as dependencies, so dangling
/// dependencies stay visible to the cycle and missing-dependency checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    nodes: BTreeSet<String>,
    edges: BTreeMap<String, BTreeSet<String>>,
}

impl DependencyGraph {
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }

    /// Dependencies of `id`, in ascending-id order.
    pub fn dependencies_of(&self, id: &str) -> impl Iterator<Item = &str> {
        self.edges
            .get(id)
            .into_iter()
            .flat_map(|deps| deps.iter().map(String::as_str))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Build the graph over a candidate plugin set.
pub fn build_dependency_graph(plugins: &[&dyn Plugin]) -> DependencyGraph {
    let mut graph = DependencyGraph::default();
    for plugin in plugins {
        graph.nodes.insert(plugin.id().to_owned());
        let entry = graph.edges.entry(plugin.id().to_owned()).or_default();
        for dep in plugin.dependencies() {
            graph.nodes.insert(dep.clone());
            entry.insert(dep);
        }
    }
    graph
}

/// Depth-first cycle detection with an active-stack set.
///
/// Returns one description per cycle found: the path from where the
/// revisited node first appeared back to itself, e.g. `a -> b -> a`.
pub fn detect_cycles(graph: &DependencyGraph) -> Vec<String> {
    let mut visited: BTreeSet<String> = BTreeSet::new();
    let mut cycles = Vec::new();

    for node in graph.nodes() {
        if !visited.contains(node) {
            let mut stack: Vec<String> = Vec::new();
            let mut on_stack: BTreeSet<String> = BTreeSet::new();
            walk(graph, node, &mut visited, &mut stack, &mut on_stack, &mut cycles);
        }
    }

    cycles
}

fn walk(
    graph: &DependencyGraph,
    node: &str,
    visited: &mut BTreeSet<String>,
    stack: &mut Vec<String>,
    on_stack: &mut BTreeSet<String>,
    cycles: &mut Vec<String>,
) {
    visited.insert(node.to_owned());
    stack.push(node.to_owned());
    on_stack.insert(node.to_owned());

    for dep in graph.dependencies_of(node) {
        if on_stack.contains(dep) {
            let start = stack.iter().position(|n| n == dep).unwrap_or(0);
            let mut path: Vec<String> = stack[start..].to_vec();
            path.push(dep.to_owned());
            cycles.push(path.join(" -> "));
        } else if !visited.contains(dep) {
            walk(graph, dep, visited, stack, on_stack, cycles);
        }
    }

    stack.pop();
    on_stack.remove(node);
}

/// Resolve a deterministic execution order for the candidate set.
///
/// 1. Every candidate id must be registered.
/// 2. The induced graph must be acyclic (ALL cycles reported at once).
/// 3. Every declared dependency id must be registered; a distinct error
///    from step 1.
/// 4. Post-order DFS: top-level plugins and each plugin's dependencies
///    are both visited in ascending-id order, so independent plugins end
///    up sorted by id for any permutation of the input list.
///
/// A dependency that is registered but not in the candidate set (i.e. not
/// applicable to this config) participates in the checks but is skipped
/// in the output order.
pub fn resolve_plugin_order<'a>(
    plugins: &[&'a dyn Plugin],
    registry: &PluginRegistry,
) -> Result<Vec<&'a dyn Plugin>, PipelineError> {
    let by_id: BTreeMap<&str, &'a dyn Plugin> =
        plugins.iter().map(|plugin| (plugin.id(), *plugin)).collect();

    // 1. Candidates must resolve to registered plugins.
    for id in by_id.keys() {
        if registry.get(id).is_none() {
            return Err(PipelineError::UnknownPlugin { id: (*id).to_owned() });
        }
    }

    // 2. Acyclicity over the candidate-induced graph.
    let graph = build_dependency_graph(plugins);
    let cycles = detect_cycles(&graph);
    if !cycles.is_empty() {
        return Err(PipelineError::DependencyCycle { cycles });
    }

    // 3. Declared dependencies must resolve to registered plugins.
    for (id, plugin) in &by_id {
        let mut deps = plugin.dependencies();
        deps.sort();
        for dep in deps {
            if registry.get(&dep).is_none() {
                return Err(PipelineError::MissingDependency {
                    plugin: (*id).to_owned(),
                    dependency: dep,
                });
            }
        }
    }

    // 4. Deterministic topological order.
    let mut visited: BTreeSet<String> = BTreeSet::new();
    let mut order: Vec<&'a dyn Plugin> = Vec::with_capacity(plugins.len());
    for id in by_id.keys() {
        visit(id, &by_id, &mut visited, &mut order);
    }

    Ok(order)
}

fn visit<'a>(
    id: &str,
    by_id: &BTreeMap<&str, &'a dyn Plugin>,
    visited: &mut BTreeSet<String>,
    order: &mut Vec<&'a dyn Plugin>,
) {
    if visited.contains(id) {
        return;
    }
    visited.insert(id.to_owned());

    if let Some(plugin) = by_id.get(id) {
        let mut deps = plugin.dependencies();
        deps.sort();
        for dep in &deps {
            visit(dep, by_id, visited, order);
        }
        order.push(*plugin);
    }
    // Non-candidate ids (registered but not applicable) are marked
    // visited so they are not revisited, and contribute nothing.
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GenerationContext, PluginError, ProjectConfig};

    #[derive(Debug)]
    struct Node {
        id: &'static str,
        deps: Vec<&'static str>,
    }

    impl Node {
        fn new(id: &'static str, deps: &[&'static str]) -> Self {
            Self {
                id,
                deps: deps.to_vec(),
            }
        }
    }

    impl Plugin for Node {
        fn id(&self) -> &str {
            self.id
        }
        fn version(&self) -> &str {
            "1.0.0"
        }
        fn dependencies(&self) -> Vec<String> {
            self.deps.iter().map(|d| (*d).to_owned()).collect()
        }
        fn applies_to(&self, _config: &ProjectConfig) -> bool {
            true
        }
        fn apply(&self, _ctx: &mut GenerationContext<'_>) -> Result<(), PluginError> {
            Ok(())
        }
    }

    fn registry_of(nodes: &[(&'static str, &[&'static str])]) -> PluginRegistry {
        let mut registry = PluginRegistry::new();
        for (id, deps) in nodes {
            registry.register(Box::new(Node::new(id, deps))).unwrap();
        }
        registry
    }

    fn ids(order: &[&dyn Plugin]) -> Vec<String> {
        order.iter().map(|p| p.id().to_owned()).collect()
    }

    #[test]
    fn graph_includes_dangling_dependency_nodes() {
        let a = Node::new("a", &["ghost"]);
        let plugins: Vec<&dyn Plugin> = vec![&a];
        let graph = build_dependency_graph(&plugins);

        assert_eq!(graph.node_count(), 2);
        assert!(graph.nodes().any(|n| n == "ghost"));
    }

    #[test]
    fn dependency_order_is_respected() {
        let registry = registry_of(&[("b", &["a"]), ("a", &[])]);
        // B depends on A: [A, B] regardless of input order.
        for perm in [["a", "b"], ["b", "a"]] {
            let plugins: Vec<&dyn Plugin> =
                perm.iter().map(|id| registry.get(id).unwrap()).collect();
            let order = resolve_plugin_order(&plugins, &registry).unwrap();
            assert_eq!(ids(&order), ["a", "b"]);
        }
    }

    #[test]
    fn independent_plugins_sort_by_id() {
        let registry = registry_of(&[("c", &[]), ("b", &[]), ("a", &[])]);
        let plugins: Vec<&dyn Plugin> = ["c", "b", "a"]
            .iter()
            .map(|id| registry.get(id).unwrap())
            .collect();

        let order = resolve_plugin_order(&plugins, &registry).unwrap();
        assert_eq!(ids(&order), ["a", "b", "c"]);
    }

    #[test]
    fn order_is_pure_function_of_the_set() {
        let registry = registry_of(&[("lint", &["base"]), ("base", &[]), ("ci", &["lint"])]);
        let mut reference: Option<Vec<String>> = None;

        for perm in [
            ["base", "lint", "ci"],
            ["ci", "base", "lint"],
            ["lint", "ci", "base"],
        ] {
            let plugins: Vec<&dyn Plugin> =
                perm.iter().map(|id| registry.get(id).unwrap()).collect();
            let order = ids(&resolve_plugin_order(&plugins, &registry).unwrap());
            match &reference {
                Some(expected) => assert_eq!(&order, expected),
                None => reference = Some(order),
            }
        }

        assert_eq!(reference.unwrap(), ["base", "lint", "ci"]);
    }

    #[test]
    fn two_node_cycle_is_reported() {
        let registry = registry_of(&[("a", &["b"]), ("b", &["a"])]);
        let plugins: Vec<&dyn Plugin> = vec![registry.get("a").unwrap(), registry.get("b").unwrap()];

        let err = resolve_plugin_order(&plugins, &registry).unwrap_err();
        match err {
            PipelineError::DependencyCycle { cycles } => {
                assert!(!cycles.is_empty());
                assert_eq!(cycles[0], "a -> b -> a");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn cycle_text_is_stable_across_input_order() {
        let registry = registry_of(&[("a", &["b"]), ("b", &["a"])]);
        let forward: Vec<&dyn Plugin> =
            vec![registry.get("a").unwrap(), registry.get("b").unwrap()];
        let backward: Vec<&dyn Plugin> =
            vec![registry.get("b").unwrap(), registry.get("a").unwrap()];

        let e1 = resolve_plugin_order(&forward, &registry).unwrap_err();
        let e2 = resolve_plugin_order(&backward, &registry).unwrap_err();
        assert_eq!(e1, e2);
    }

    #[test]
    fn self_dependency_is_a_cycle() {
        let registry = registry_of(&[("loop", &["loop"])]);
        let plugins: Vec<&dyn Plugin> = vec![registry.get("loop").unwrap()];

        let err = resolve_plugin_order(&plugins, &registry).unwrap_err();
        assert!(matches!(err, PipelineError::DependencyCycle { .. }));
    }

    #[test]
    fn missing_dependency_is_distinct_error() {
        let registry = registry_of(&[("a", &["ghost"])]);
        let plugins: Vec<&dyn Plugin> = vec![registry.get("a").unwrap()];

        let err = resolve_plugin_order(&plugins, &registry).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::MissingDependency { plugin, dependency }
                if plugin == "a" && dependency == "ghost"
        ));
    }

    #[test]
    fn unregistered_candidate_is_rejected() {
        let registry = registry_of(&[]);
        let stray = Node::new("stray", &[]);
        let plugins: Vec<&dyn Plugin> = vec![&stray];

        let err = resolve_plugin_order(&plugins, &registry).unwrap_err();
        assert!(matches!(err, PipelineError::UnknownPlugin { id } if id == "stray"));
    }

    #[test]
    fn registered_but_inapplicable_dependency_is_skipped_in_order() {
        // "base" is registered but not part of the candidate set.
        let registry = registry_of(&[("base", &[]), ("lint", &["base"])]);
        let plugins: Vec<&dyn Plugin> = vec![registry.get("lint").unwrap()];

        let order = resolve_plugin_order(&plugins, &registry).unwrap();
        assert_eq!(ids(&order), ["lint"]);
    }

    #[test]
    fn diamond_resolves_without_duplicates() {
        let registry = registry_of(&[
            ("d", &["b", "c"]),
            ("b", &["a"]),
            ("c", &["a"]),
            ("a", &[]),
        ]);
        let plugins: Vec<&dyn Plugin> = ["d", "c", "b", "a"]
            .iter()
            .map(|id| registry.get(id).unwrap())
            .collect();

        let order = ids(&resolve_plugin_order(&plugins, &registry).unwrap());
        assert_eq!(order, ["a", "b", "c", "d"]);
    }
}
