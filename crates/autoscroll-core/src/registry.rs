//! Page-wide singletons (one progress bar, one particle layer, one set of
//! light rays) shared by every container on the page.

use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Singleton {
    ProgressBar,
    ParticleLayer,
    LightRays,
}

#[derive(Debug)]
pub struct SingletonRegistry<V> {
    entries: FnvHashMap<Singleton, V>,
}

impl<V> Default for SingletonRegistry<V> {
    fn default() -> Self {
        Self {
            entries: FnvHashMap::default(),
        }
    }
}

impl<V> SingletonRegistry<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: Singleton) -> Option<&V> {
        self.entries.get(&key)
    }

    pub fn contains(&self, key: Singleton) -> bool {
        self.entries.contains_key(&key)
    }

    /// Return the entry for `key`, creating it with `create` if absent.
    ///
    /// The flag is `true` when this call created the entry. A failing
    /// `create` leaves the registry untouched so a later call can retry.
    pub fn get_or_try_insert_with<E>(
        &mut self,
        key: Singleton,
        create: impl FnOnce() -> Result<V, E>,
    ) -> Result<(&V, bool), E> {
        use std::collections::hash_map::Entry;
        match self.entries.entry(key) {
            Entry::Occupied(e) => Ok((e.into_mut(), false)),
            Entry::Vacant(e) => {
                let value = create()?;
                Ok((e.insert(value), true))
            }
        }
    }

    pub fn remove(&mut self, key: Singleton) -> Option<V> {
        self.entries.remove(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
