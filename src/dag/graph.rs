// src/dag/graph.rs

use std::collections::{HashMap, HashSet};

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;

use crate::dag::step::{Step, StepName};

/// Forward adjacency plus in-degree counts for a list of steps.
///
/// Edge direction is dependency -> dependent. For a step `B` with
/// `dependencies = ["A"]` we record `A -> B` and bump `B`'s in-degree.
///
/// Every declared step gets an explicit in-degree entry (possibly 0).
/// Names that only appear as dependency targets get adjacency entries but no
/// in-degree entry, which is how undeclared references are told apart.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    adjacency: HashMap<StepName, Vec<StepName>>,
    in_degree: HashMap<StepName, usize>,
}

/// Build the dependency graph for `steps`.
///
/// Does not check referential integrity; a dangling dependency simply leaves
/// its dependent with an in-degree that can never reach zero.
pub fn build_graph(steps: &[Step]) -> DependencyGraph {
    let mut adjacency: HashMap<StepName, Vec<StepName>> = HashMap::new();
    let mut in_degree: HashMap<StepName, usize> = HashMap::with_capacity(steps.len());

    // First pass: every declared step starts with no unmet prerequisites.
    for step in steps {
        in_degree.insert(step.name.clone(), 0);
    }

    // Second pass: forward edges and prerequisite counts.
    for step in steps {
        for dep in step.dependencies.iter() {
            adjacency
                .entry(dep.clone())
                .or_default()
                .push(step.name.clone());

            if let Some(count) = in_degree.get_mut(&step.name) {
                *count += 1;
            }
        }
    }

    DependencyGraph {
        adjacency,
        in_degree,
    }
}

impl DependencyGraph {
    /// Steps that list `name` as a dependency, in input order.
    pub fn dependents_of(&self, name: &str) -> &[StepName] {
        self.adjacency
            .get(name)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Number of declared dependencies of `name` (0 for unknown names).
    pub fn in_degree_of(&self, name: &str) -> usize {
        self.in_degree.get(name).copied().unwrap_or(0)
    }

    /// Whether `name` was declared as a step (as opposed to only referenced).
    pub fn is_declared(&self, name: &str) -> bool {
        self.in_degree.contains_key(name)
    }

    pub fn adjacency(&self) -> &HashMap<StepName, Vec<StepName>> {
        &self.adjacency
    }

    pub fn in_degree(&self) -> &HashMap<StepName, usize> {
        &self.in_degree
    }

    /// Names referenced as dependencies but never declared, sorted.
    pub fn undeclared_dependencies(&self) -> Vec<StepName> {
        let mut missing: Vec<StepName> = self
            .adjacency
            .keys()
            .filter(|name| !self.is_declared(name))
            .cloned()
            .collect();
        missing.sort();
        missing
    }

    /// Dependency cycles restricted to the given step names.
    ///
    /// Each cycle is a strongly connected component with more than one member,
    /// or a single step that depends on itself. Names inside a cycle and the
    /// cycles themselves are sorted so diagnostics are stable.
    pub fn cycles_among<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Vec<Vec<StepName>> {
        let members: HashSet<&str> = names.into_iter().collect();
        let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

        for name in members.iter() {
            graph.add_node(*name);
        }
        for (dep, dependents) in self.adjacency.iter() {
            if !members.contains(dep.as_str()) {
                continue;
            }
            for dependent in dependents {
                if members.contains(dependent.as_str()) {
                    graph.add_edge(dep.as_str(), dependent.as_str(), ());
                }
            }
        }

        let mut cycles: Vec<Vec<StepName>> = tarjan_scc(&graph)
            .into_iter()
            .filter(|component| {
                component.len() > 1
                    || component
                        .first()
                        .is_some_and(|n| graph.contains_edge(*n, *n))
            })
            .map(|component| {
                let mut names: Vec<StepName> =
                    component.into_iter().map(|n| n.to_string()).collect();
                names.sort();
                names
            })
            .collect();
        cycles.sort();
        cycles
    }
}
