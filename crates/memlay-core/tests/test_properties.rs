//! Property tests for layout strategies

use memlay_core::{LayoutStrategy, TypeRegistry};
use proptest::prelude::*;

/// (size, alignment) pairs with power-of-two alignment and size a multiple of it
fn natural_atomic() -> impl Strategy<Value = (i64, i64)> {
    (0u32..4, 1i64..4).prop_map(|(shift, count)| {
        let alignment = 1i64 << shift;
        (alignment * count, alignment)
    })
}

fn build(atomics: &[(i64, i64)], picks: &[usize]) -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    for (i, &(size, alignment)) in atomics.iter().enumerate() {
        registry
            .register_atomic(&format!("t{i}"), size, alignment)
            .unwrap();
    }
    let members: Vec<String> = picks
        .iter()
        .map(|&p| format!("t{}", p % atomics.len()))
        .collect();
    registry.register_struct("s", members.as_slice()).unwrap();
    registry
}

proptest! {
    #[test]
    fn optimal_never_larger_than_default(
        atomics in prop::collection::vec(natural_atomic(), 1..6),
        picks in prop::collection::vec(any::<usize>(), 0..12),
    ) {
        let registry = build(&atomics, &picks);
        let default = registry.layout("s", LayoutStrategy::Default).unwrap();
        let optimal = registry.layout("s", LayoutStrategy::Optimal).unwrap();
        prop_assert!(optimal.size <= default.size);
        prop_assert!(optimal.waste <= default.waste);
    }

    #[test]
    fn packed_with_unit_alignment_is_sum(
        sizes in prop::collection::vec(1i64..16, 0..10),
    ) {
        let atomics: Vec<(i64, i64)> = sizes.iter().map(|&s| (s, 1)).collect();
        let picks: Vec<usize> = (0..atomics.len()).collect();
        let mut registry = TypeRegistry::new();
        for (i, &(size, alignment)) in atomics.iter().enumerate() {
            registry.register_atomic(&format!("t{i}"), size, alignment).unwrap();
        }
        let members: Vec<String> = picks.iter().map(|p| format!("t{p}")).collect();
        registry.register_struct("s", members.as_slice()).unwrap();
        registry.register_union("u", members.as_slice()).unwrap();

        let packed = registry.layout("s", LayoutStrategy::Packed).unwrap();
        prop_assert_eq!(packed.size, sizes.iter().sum::<i64>() as u64);
        prop_assert_eq!(packed.waste, 0);

        let union = registry.lookup("u").unwrap();
        prop_assert_eq!(union.size(), sizes.iter().copied().max().unwrap_or(0) as u64);
    }

    #[test]
    fn atomic_registration_accepts_iff_positive(size in -4i64..5, alignment in -4i64..5) {
        let mut registry = TypeRegistry::new();
        let result = registry.register_atomic("t", size, alignment);
        prop_assert_eq!(result.is_ok(), size > 0 && alignment > 0);
        if result.is_ok() {
            let def = registry.lookup("t").unwrap();
            prop_assert_eq!(def.size(), size as u64);
            prop_assert_eq!(def.alignment(), alignment as u64);
        }
    }
}
