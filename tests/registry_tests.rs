// Host-side tests for the page-wide singleton registry.

use autoscroll_core::{Singleton, SingletonRegistry};

#[test]
fn creates_once_and_reuses() {
    let mut reg = SingletonRegistry::new();
    let mut created = 0;
    let mut fresh_calls = 0;
    for _ in 0..3 {
        let (value, fresh) = reg
            .get_or_try_insert_with(Singleton::ProgressBar, || {
                created += 1;
                Ok::<_, ()>("bar")
            })
            .unwrap();
        assert_eq!(*value, "bar");
        if fresh {
            fresh_calls += 1;
        }
    }
    assert_eq!(created, 1);
    assert_eq!(fresh_calls, 1);
    assert_eq!(reg.len(), 1);
    assert!(reg.contains(Singleton::ProgressBar));
}

#[test]
fn failed_creation_leaves_slot_empty() {
    let mut reg: SingletonRegistry<&str> = SingletonRegistry::new();
    let err = reg.get_or_try_insert_with(Singleton::LightRays, || Err("detached"));
    assert_eq!(err.err(), Some("detached"));
    assert!(reg.is_empty());

    let (value, fresh) = reg
        .get_or_try_insert_with(Singleton::LightRays, || Ok::<_, &str>("rays"))
        .unwrap();
    assert_eq!((*value, fresh), ("rays", true));
}

#[test]
fn keys_are_independent() {
    let mut reg = SingletonRegistry::new();
    for key in [Singleton::ProgressBar, Singleton::ParticleLayer, Singleton::LightRays] {
        reg.get_or_try_insert_with(key, || Ok::<_, ()>(format!("{key:?}")))
            .unwrap();
    }
    assert_eq!(reg.len(), 3);
    assert_eq!(reg.get(Singleton::ParticleLayer).map(String::as_str), Some("ParticleLayer"));
    assert_eq!(reg.remove(Singleton::ParticleLayer).as_deref(), Some("ParticleLayer"));
    assert!(!reg.contains(Singleton::ParticleLayer));
    assert_eq!(reg.len(), 2);
}
