use super::*;

#[test]
fn regenerate_yields_exactly_the_requested_count() {
    let mut field = PointField::with_seed(1);
    for count in [0usize, 1, 150] {
        field.regenerate(count, 1.0).unwrap();
        assert_eq!(field.len(), count);
    }
}

#[test]
fn coordinates_respect_their_axis_ranges() {
    let mut field = PointField::with_seed(2);
    field.regenerate(150, 0.25).unwrap();
    for p in field.points().iter() {
        assert!((0.0..1.0).contains(&p.x));
        assert!((0.0..1.0).contains(&p.y));
        assert!((0.0..0.25).contains(&p.z));
    }
}

#[test]
fn zero_spread_collapses_to_a_2d_pattern() {
    let mut field = PointField::with_seed(3);
    field.regenerate(50, 0.0).unwrap();
    assert!(field.points().iter().all(|p| p.z == 0.0));
}

#[test]
fn same_seed_reproduces_the_same_points() {
    let mut a = PointField::with_seed(9);
    let mut b = PointField::with_seed(9);
    a.regenerate(20, 0.5).unwrap();
    b.regenerate(20, 0.5).unwrap();
    assert_eq!(a.points().as_ref(), b.points().as_ref());
}

#[test]
fn generation_increments_on_every_swap() {
    let mut field = PointField::with_seed(4);
    assert_eq!(field.generation(), 0);
    field.regenerate(10, 1.0).unwrap();
    assert_eq!(field.generation(), 1);
    field.set_preset();
    assert_eq!(field.generation(), 2);
}

#[test]
fn old_set_survives_until_the_new_one_is_published() {
    let mut field = PointField::with_seed(5);
    field.regenerate(10, 1.0).unwrap();
    let before = field.points();
    field.regenerate(20, 1.0).unwrap();
    // The snapshot taken before the swap still holds the complete old set.
    assert_eq!(before.len(), 10);
    assert_eq!(field.len(), 20);
}

#[test]
fn preset_constellation_has_thirty_points() {
    let points = preset_constellation();
    assert_eq!(points.len(), 30);
    assert!(points.iter().all(|p| (-0.5..=0.5).contains(&p.z)));
}
