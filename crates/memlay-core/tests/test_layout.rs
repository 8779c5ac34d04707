//! Integration tests for struct and union layout

use memlay_core::{LayoutStrategy, TypeRegistry};

fn registry_with_primitives() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry.register_atomic("char", 1, 1).unwrap();
    registry.register_atomic("short", 2, 2).unwrap();
    registry.register_atomic("int", 4, 4).unwrap();
    registry.register_atomic("double", 8, 8).unwrap();
    registry
}

fn totals(registry: &TypeRegistry, name: &str, strategy: LayoutStrategy) -> (u64, u64) {
    registry.layout(name, strategy).unwrap().totals()
}

#[test]
fn test_char_int_struct() {
    let mut registry = registry_with_primitives();
    registry.register_struct("s", &["char", "int"]).unwrap();

    assert_eq!(totals(&registry, "s", LayoutStrategy::Default), (8, 3));
    assert_eq!(totals(&registry, "s", LayoutStrategy::Packed), (5, 0));
    // Already in a good order: reordering gains nothing
    assert_eq!(totals(&registry, "s", LayoutStrategy::Optimal), (8, 3));
}

#[test]
fn test_optimal_reorders_fields() {
    let mut registry = registry_with_primitives();
    registry
        .register_struct("s2", &["char", "double", "char"])
        .unwrap();

    assert_eq!(totals(&registry, "s2", LayoutStrategy::Default), (24, 14));
    assert_eq!(totals(&registry, "s2", LayoutStrategy::Optimal), (16, 6));

    let layout = registry.layout("s2", LayoutStrategy::Optimal).unwrap();
    let names: Vec<&str> = layout.placements.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["double", "char", "char"]);
    assert_eq!(layout.trailing_padding, 6);
}

#[test]
fn test_union_size_and_alignment() {
    let mut registry = registry_with_primitives();
    let id = registry.register_union("u", &["char", "double"]).unwrap();

    assert_eq!(registry.size_of(id), Some(8));
    assert_eq!(registry.alignment_of(id), Some(8));
}

#[test]
fn test_nested_struct_default() {
    let mut registry = registry_with_primitives();
    registry.register_struct("inner", &["char", "int"]).unwrap();
    registry.register_struct("outer", &["char", "inner"]).unwrap();

    // char@0, 3 bytes padding, inner@4 (size 8)
    assert_eq!(totals(&registry, "outer", LayoutStrategy::Default), (12, 3));
    let layout = registry.layout("outer", LayoutStrategy::Default).unwrap();
    assert_eq!(layout.placements[1].offset, 4);
    assert_eq!(layout.placements[1].size, 8);
}

#[test]
fn test_nested_struct_packed_recurses() {
    let mut registry = registry_with_primitives();
    registry.register_struct("inner", &["char", "int"]).unwrap();
    registry.register_struct("outer", &["char", "inner"]).unwrap();

    // 1 + packed(inner) = 1 + 5
    assert_eq!(totals(&registry, "outer", LayoutStrategy::Packed), (6, 0));
}

#[test]
fn test_packed_reaches_every_nesting_level() {
    let mut registry = registry_with_primitives();
    registry.register_struct("a", &["char", "double"]).unwrap();
    registry.register_struct("b", &["a", "char"]).unwrap();
    registry.register_struct("c", &["char", "b"]).unwrap();

    // a: 9, b: 9 + 1, c: 1 + 10
    assert_eq!(totals(&registry, "c", LayoutStrategy::Packed), (11, 0));
    assert_eq!(totals(&registry, "c", LayoutStrategy::Default), (32, 7));
}

#[test]
fn test_packed_keeps_union_size() {
    let mut registry = registry_with_primitives();
    registry.register_union("u", &["char", "int"]).unwrap();
    registry.register_struct("s", &["char", "u"]).unwrap();

    assert_eq!(totals(&registry, "s", LayoutStrategy::Packed), (5, 0));
}

#[test]
fn test_struct_containing_union() {
    let mut registry = registry_with_primitives();
    registry.register_union("u_int", &["int", "char"]).unwrap();
    let id = registry.register_struct("s_mix", &["char", "u_int"]).unwrap();

    assert_eq!(registry.size_of(id), Some(8));
}

#[test]
fn test_empty_struct() {
    let mut registry = TypeRegistry::new();
    let id = registry.register_struct::<&str>("empty", &[]).unwrap();

    assert_eq!(registry.alignment_of(id), Some(1));
    for strategy in LayoutStrategy::ALL {
        assert_eq!(totals(&registry, "empty", strategy), (0, 0));
    }
}

#[test]
fn test_empty_union() {
    let mut registry = TypeRegistry::new();
    let id = registry.register_union::<&str>("empty", &[]).unwrap();

    assert_eq!(registry.size_of(id), Some(0));
    assert_eq!(registry.alignment_of(id), Some(1));
}

#[test]
fn test_short_after_char() {
    let mut registry = registry_with_primitives();
    registry.register_struct("s1", &["char", "short"]).unwrap();

    assert_eq!(totals(&registry, "s1", LayoutStrategy::Default), (4, 1));
}

#[test]
fn test_non_power_of_two_alignment() {
    let mut registry = TypeRegistry::new();
    registry.register_atomic("tri", 3, 3).unwrap();
    registry.register_atomic("byte", 1, 1).unwrap();
    registry.register_struct("s", &["byte", "tri"]).unwrap();

    // byte@0, 2 bytes padding, tri@3, total 6 (multiple of 3)
    assert_eq!(totals(&registry, "s", LayoutStrategy::Default), (6, 2));
}
