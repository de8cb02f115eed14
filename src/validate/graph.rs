//! Cycle detection over a workflow's `depends_on` edges.

use crate::team::Step;
use std::collections::{HashMap, HashSet};

/// Find dependency cycles among `steps`.
///
/// Each cycle is returned as the step names along it, with the first name
/// repeated at the end (`["a", "b", "a"]`). References to unknown steps are
/// ignored here. When names repeat, the first step with a name wins.
///
/// The search keeps its own stack, so chain length is not bounded by the
/// thread's stack size.
pub fn find_cycles(steps: &[Step]) -> Vec<Vec<&str>> {
    let mut index: HashMap<&str, &Step> = HashMap::new();
    for step in steps {
        index.entry(step.name.as_str()).or_insert(step);
    }

    let mut done = HashSet::new();
    let mut cycles = Vec::new();
    for step in steps {
        dfs_cycle(step.name.as_str(), &index, &mut done, &mut cycles);
    }
    cycles
}

/// Depth-first search from `start`. Each frame is a node and the index of
/// the next dependency to visit.
fn dfs_cycle<'a>(
    start: &'a str,
    index: &HashMap<&'a str, &'a Step>,
    done: &mut HashSet<&'a str>,
    cycles: &mut Vec<Vec<&'a str>>,
) {
    if done.contains(start) {
        return;
    }

    let mut path: Vec<&'a str> = vec![start];
    let mut on_path: HashSet<&'a str> = HashSet::from([start]);
    let mut stack: Vec<(&'a str, usize)> = vec![(start, 0)];

    while let Some(frame) = stack.last_mut() {
        let (node, next) = *frame;
        let deps = index
            .get(node)
            .copied()
            .map(Step::depends_on)
            .unwrap_or_default();

        let Some(dep) = deps.get(next) else {
            stack.pop();
            path.pop();
            on_path.remove(node);
            done.insert(node);
            continue;
        };
        frame.1 += 1;
        let dep = dep.as_str();

        if on_path.contains(dep) {
            let start = path.iter().position(|n| *n == dep).unwrap_or_default();
            let mut cycle = path[start..].to_vec();
            cycle.push(dep);
            cycles.push(cycle);
            continue;
        }
        if done.contains(dep) {
            continue;
        }

        path.push(dep);
        on_path.insert(dep);
        stack.push((dep, 0));
    }
}
