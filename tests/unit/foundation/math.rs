use super::*;

#[test]
fn smoothstep_boundary_values_are_exact() {
    assert_eq!(smoothstep(0.2, 0.8, 0.2), 0.0);
    assert_eq!(smoothstep(0.2, 0.8, 0.8), 1.0);
    assert_eq!(smoothstep(0.0, 1.0, 0.5), 0.5);
}

#[test]
fn smoothstep_clamps_outside_the_edges() {
    assert_eq!(smoothstep(0.2, 0.8, -1.0), 0.0);
    assert_eq!(smoothstep(0.2, 0.8, 2.0), 1.0);
}

#[test]
fn smoothstep_is_monotonic_between_edges() {
    let mut prev = 0.0f32;
    for i in 0..=100 {
        let x = 0.2 + 0.6 * (i as f32 / 100.0);
        let y = smoothstep(0.2, 0.8, x);
        assert!(y >= prev);
        prev = y;
    }
}

#[test]
fn smoothstep_degenerate_edges_become_a_step() {
    // edge0 == edge1
    assert_eq!(smoothstep(0.5, 0.5, 0.4), 0.0);
    assert_eq!(smoothstep(0.5, 0.5, 0.5), 1.0);
    // inverted edges
    assert_eq!(smoothstep(0.8, 0.2, 0.1), 0.0);
    assert_eq!(smoothstep(0.8, 0.2, 0.9), 1.0);
}

#[test]
fn rng_is_deterministic_per_seed() {
    let mut a = Rng64::new(42);
    let mut b = Rng64::new(42);
    for _ in 0..16 {
        assert_eq!(a.next_u64(), b.next_u64());
    }

    let mut c = Rng64::new(43);
    assert_ne!(Rng64::new(42).next_u64(), c.next_u64());
}

#[test]
fn rng_unit_floats_stay_in_range() {
    let mut rng = Rng64::new(7);
    for _ in 0..1000 {
        let v = rng.next_f32_01();
        assert!((0.0..1.0).contains(&v));
    }
}
