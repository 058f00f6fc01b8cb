//! Policy registry -- the catalog of timing policies a session can bind.

use std::collections::BTreeMap;

use super::{Species, TimingPolicy};

/// A collection of registered [`TimingPolicy`] implementations, keyed by
/// species.
///
/// # Example
///
/// ```
/// use sprout_core::policy::{PolicyRegistry, Species, TimingPolicy};
///
/// let registry = PolicyRegistry::with_defaults();
/// let rose = registry.get(Species::Rose).unwrap();
/// assert_eq!(rose.species(), Species::Rose);
/// ```
#[derive(Default)]
pub struct PolicyRegistry {
    policies: BTreeMap<Species, Box<dyn TimingPolicy>>,
}

impl PolicyRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in policy for every species.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for species in Species::ALL {
            registry.policies.insert(species, species.builtin_policy());
        }
        registry
    }

    /// Register a policy under the species it reports.
    ///
    /// Replaces and returns any policy already registered for that species.
    pub fn register(&mut self, policy: impl TimingPolicy + 'static) -> Option<Box<dyn TimingPolicy>> {
        self.policies.insert(policy.species(), Box::new(policy))
    }

    pub fn get(&self, species: Species) -> Option<&dyn TimingPolicy> {
        self.policies.get(&species).map(|b| b.as_ref())
    }

    /// Iterate over registered policies in species order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn TimingPolicy> {
        self.policies.values().map(|b| b.as_ref())
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

impl std::fmt::Debug for PolicyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicyRegistry")
            .field("species", &self.policies.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::care::CareAction;
    use crate::policy::DurationTable;

    struct FlatRose;

    const FLAT: DurationTable = DurationTable::from_secs(9, 9, 9, 9);

    impl TimingPolicy for FlatRose {
        fn species(&self) -> Species {
            Species::Rose
        }

        fn durations(&self) -> &DurationTable {
            &FLAT
        }
    }

    #[test]
    fn registry_starts_empty() {
        let registry = PolicyRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.get(Species::Cactus).is_none());
    }

    #[test]
    fn defaults_cover_every_species() {
        let registry = PolicyRegistry::with_defaults();
        assert_eq!(registry.len(), Species::ALL.len());
        for species in Species::ALL {
            assert_eq!(registry.get(species).unwrap().species(), species);
        }
    }

    #[test]
    fn iter_is_in_species_order() {
        let registry = PolicyRegistry::with_defaults();
        let order: Vec<Species> = registry.iter().map(|p| p.species()).collect();
        assert_eq!(order, Species::ALL.to_vec());
    }

    #[test]
    fn register_replaces_existing() {
        let mut registry = PolicyRegistry::with_defaults();
        let old = registry.register(FlatRose);
        assert_eq!(old.unwrap().duration_for(CareAction::Water).as_secs(), 3);
        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry
                .get(Species::Rose)
                .unwrap()
                .duration_for(CareAction::Water)
                .as_secs(),
            9
        );
    }

    #[test]
    fn registry_debug_shows_species() {
        let registry = PolicyRegistry::with_defaults();
        let debug = format!("{registry:?}");
        assert!(debug.contains("Cactus"));
        assert!(debug.contains("Tomato"));
    }
}
