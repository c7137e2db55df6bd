// Random Mix: the one intentionally non-deterministic, non-reversible
// transform. The actual mixing lives in `Registry::random_mix`; this module
// just registers the spec that routes there.

use crate::registry::{
    Algorithm, Category, MixOptions, Registry, TransformSpec, spec::PRIORITY_LOW,
};

pub(super) fn register(reg: &mut Registry) {
    reg.register(
        TransformSpec::new(
            "Random Mix",
            Category::Special,
            Algorithm::RandomMix(MixOptions::default()),
        )
        .priority(PRIORITY_LOW),
    )
    .expect("built-in registration");
}

#[cfg(test)]
mod tests {
    use crate::registry::MixOptions;
    use crate::transforms::builtin;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn registered_as_encode_only() {
        let reg = builtin();
        let t = reg.get("random_mix").expect("registered");
        assert!(!t.can_decode());
        assert_eq!(t.priority(), 20);
    }

    #[test]
    fn mix_records_per_word_choices() {
        let reg = builtin();
        let mut rng = StdRng::seed_from_u64(42);
        let outcome = reg.random_mix("mix this up, please!", &mut rng, &MixOptions::default());
        let applied: Vec<_> = outcome
            .segments
            .iter()
            .filter_map(|s| s.transform)
            .collect();
        assert_eq!(applied.len(), 4);
        // Choices never include the mix itself.
        assert!(applied.iter().all(|name| *name != "Random Mix"));
        assert!(outcome.text.ends_with('!'));
    }

    #[test]
    fn mix_through_registry_encode() {
        let reg = builtin();
        let out = reg.encode("random_mix", "hello world").unwrap();
        assert!(!out.is_empty());
        assert!(out.contains(' ') || out.len() >= "hello world".len());
    }
}
