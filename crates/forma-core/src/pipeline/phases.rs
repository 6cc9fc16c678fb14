//! Phase scheduling: partition an ordered plugin list into the four
//! fixed execution buckets.
//!
//! Grouping does NOT preserve the dependency-topological order. If a
//! dependent and its dependency share a phase, both execute in id order
//! within that phase; cross-phase dependencies are the only ordering a
//! plugin author can rely on across phases.

use crate::domain::{Phase, Plugin};

/// The four execution buckets of one render, each sorted by plugin id.
pub struct PhasePlan<'a> {
    buckets: [Vec<&'a dyn Plugin>; 4],
}

impl<'a> PhasePlan<'a> {
    pub fn bucket(&self, phase: Phase) -> &[&'a dyn Plugin] {
        &self.buckets[phase.index()]
    }

    /// Buckets in fixed execution order: pre, render, post, ci.
    pub fn iter(&self) -> impl Iterator<Item = (Phase, &[&'a dyn Plugin])> {
        Phase::ALL.iter().map(move |phase| (*phase, self.bucket(*phase)))
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
}

/// Group plugins into phase buckets; plugins with no declared phase land
/// in `render`. All four buckets always exist, possibly empty.
pub fn group_plugins_by_phase<'a>(ordered: &[&'a dyn Plugin]) -> PhasePlan<'a> {
    let mut buckets: [Vec<&'a dyn Plugin>; 4] = [Vec::new(), Vec::new(), Vec::new(), Vec::new()];

    for plugin in ordered {
        buckets[plugin.phase().index()].push(*plugin);
    }
    for bucket in &mut buckets {
        bucket.sort_by(|a, b| a.id().cmp(b.id()));
    }

    PhasePlan { buckets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GenerationContext, PluginError, ProjectConfig};

    #[derive(Debug)]
    struct Phased {
        id: &'static str,
        phase: Option<Phase>,
    }

    impl Plugin for Phased {
        fn id(&self) -> &str {
            self.id
        }
        fn version(&self) -> &str {
            "1.0.0"
        }
        fn phase(&self) -> Phase {
            self.phase.unwrap_or_default()
        }
        fn applies_to(&self, _config: &ProjectConfig) -> bool {
            true
        }
        fn apply(&self, _ctx: &mut GenerationContext<'_>) -> Result<(), PluginError> {
            Ok(())
        }
    }

    #[test]
    fn all_four_buckets_exist_even_when_empty() {
        let plan = group_plugins_by_phase(&[]);
        for phase in Phase::ALL {
            assert!(plan.bucket(phase).is_empty());
        }
        assert_eq!(plan.total(), 0);
    }

    #[test]
    fn undeclared_phase_defaults_to_render() {
        let p = Phased {
            id: "anon",
            phase: None,
        };
        let plugins: Vec<&dyn Plugin> = vec![&p];
        let plan = group_plugins_by_phase(&plugins);

        assert_eq!(plan.bucket(Phase::Render).len(), 1);
        assert!(plan.bucket(Phase::Pre).is_empty());
    }

    #[test]
    fn buckets_are_sorted_by_id() {
        let z = Phased {
            id: "zeta",
            phase: Some(Phase::Ci),
        };
        let a = Phased {
            id: "alpha",
            phase: Some(Phase::Ci),
        };
        let m = Phased {
            id: "mid",
            phase: Some(Phase::Ci),
        };
        let plugins: Vec<&dyn Plugin> = vec![&z, &a, &m];
        let plan = group_plugins_by_phase(&plugins);

        let ids: Vec<&str> = plan.bucket(Phase::Ci).iter().map(|p| p.id()).collect();
        assert_eq!(ids, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn iter_yields_fixed_phase_order() {
        let plan = group_plugins_by_phase(&[]);
        let phases: Vec<Phase> = plan.iter().map(|(phase, _)| phase).collect();
        assert_eq!(phases, [Phase::Pre, Phase::Render, Phase::Post, Phase::Ci]);
    }
}
