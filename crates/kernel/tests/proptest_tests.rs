//! Property-based tests for CSG invariants using the `proptest` crate.
//!
//! Coordinates are small rationals (integer numerators over a handful of
//! denominators) so that points regularly land exactly on faces, edges and
//! corners, which is where exact classification matters.

use proptest::prelude::*;

use timber_csg::geometry::{frac, num};
use timber_csg::{
    CsgNode, Difference, HalfSpace, Orientation, PointClassification, PointQuery,
    RectangularPrism, SolidUnion, Transform, Vec2, Vec3,
};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Arbitrary rational coordinate in [-8, 8] with denominator 1, 2 or 4.
fn arb_coord() -> impl Strategy<Value = (i64, i64)> {
    prop_oneof![Just(1i64), Just(2), Just(4)].prop_flat_map(|d| (-8 * d..=8 * d, Just(d)))
}

fn arb_point() -> impl Strategy<Value = Vec3> {
    (arb_coord(), arb_coord(), arb_coord())
        .prop_map(|((x, dx), (y, dy), (z, dz))| Vec3::new(frac(x, dx), frac(y, dy), frac(z, dz)))
}

/// Arbitrary non-zero integer vector.
fn arb_normal() -> impl Strategy<Value = Vec3> {
    (-3i64..=3, -3i64..=3, -3i64..=3)
        .prop_filter("normal must be non-zero", |(x, y, z)| (*x, *y, *z) != (0, 0, 0))
        .prop_map(|(x, y, z)| Vec3::from_i64(x, y, z))
}

fn arb_orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![
        Just(Orientation::identity()),
        Just(Orientation::west()),
        Just(Orientation::north()),
        Just(Orientation::south()),
        Just(Orientation::up()),
        Just(Orientation::down()),
    ]
}

fn arb_transform() -> impl Strategy<Value = Transform> {
    ((-5i64..=5, -5i64..=5, -5i64..=5), arb_orientation())
        .prop_map(|((x, y, z), o)| Transform::new(Vec3::from_i64(x, y, z), o))
}

/// Arbitrary axis-aligned-in-its-frame box with integer extents.
fn arb_prism() -> impl Strategy<Value = CsgNode> {
    (1i64..=6, 1i64..=6, -4i64..=2, 1i64..=6, arb_transform()).prop_map(|(w, h, start, len, t)| {
        RectangularPrism::new(Vec2::from_i64(w, h), t, Some(num(start)), Some(num(start + len)))
            .expect("positive extents and ordered bounds")
            .into()
    })
}

fn arb_half_space() -> impl Strategy<Value = CsgNode> {
    (arb_normal(), -4i64..=4).prop_map(|(n, offset)| {
        HalfSpace::new(n, num(offset))
            .expect("non-zero normal")
            .into()
    })
}

fn arb_leaf() -> impl Strategy<Value = CsgNode> {
    prop_oneof![arb_prism(), arb_half_space()]
}

// ---------------------------------------------------------------------------
// 1. Half-space membership is exactly the sign of p . n - offset
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn half_space_matches_plane_equation(
        n in arb_normal(),
        offset in -4i64..=4,
        p in arb_point(),
    ) {
        let h = HalfSpace::new(n.clone(), num(offset)).unwrap();
        let d = p.dot(&n);
        prop_assert_eq!(h.contains_point(&p), d >= num(offset));
        prop_assert_eq!(h.is_point_on_boundary(&p), d == num(offset));
    }
}

// ---------------------------------------------------------------------------
// 2. Union containment does not depend on child order
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn union_is_commutative(
        a in arb_leaf(),
        b in arb_leaf(),
        c in arb_leaf(),
        p in arb_point(),
    ) {
        let abc: CsgNode = SolidUnion::new(vec![a.clone(), b.clone(), c.clone()]).into();
        let cab: CsgNode = SolidUnion::new(vec![c.clone(), a.clone(), b.clone()]).into();
        let nested: CsgNode =
            SolidUnion::new(vec![SolidUnion::new(vec![a, b]).into(), c]).into();
        prop_assert_eq!(abc.contains_point(&p), cab.contains_point(&p));
        prop_assert_eq!(abc.contains_point(&p), nested.contains_point(&p));
        prop_assert_eq!(abc.is_point_on_boundary(&p), cab.is_point_on_boundary(&p));
    }
}

// ---------------------------------------------------------------------------
// 3. Subtracting nothing is the identity
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn empty_difference_is_identity(base in arb_leaf(), p in arb_point()) {
        let d: CsgNode = Difference::new(base.clone(), Vec::new()).into();
        prop_assert_eq!(d.contains_point(&p), base.contains_point(&p));
        prop_assert_eq!(d.is_point_on_boundary(&p), base.is_point_on_boundary(&p));
        if base.is_point_on_boundary(&p) {
            prop_assert_eq!(d.get_outward_normal(&p), base.get_outward_normal(&p));
        }
    }
}

// ---------------------------------------------------------------------------
// 4. A prism minus itself contains nothing
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prism_minus_itself_is_empty(prism in arb_prism(), p in arb_point()) {
        let empty: CsgNode = Difference::new(prism.clone(), vec![prism]).into();
        prop_assert!(!empty.contains_point(&p), "point {} survived self-subtraction", p);
    }
}

// ---------------------------------------------------------------------------
// 5. Difference never contains more than its base
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn difference_is_subset_of_base(
        base in arb_leaf(),
        cut in arb_leaf(),
        p in arb_point(),
    ) {
        let d: CsgNode = Difference::new(base.clone(), vec![cut.clone()]).into();
        if d.contains_point(&p) {
            prop_assert!(base.contains_point(&p));
            prop_assert_ne!(cut.classify(&p), PointClassification::Inside);
        }
    }
}

// ---------------------------------------------------------------------------
// 6. Rigid transforms preserve every query
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn transformed_tree_agrees_with_untransformed(
        base in arb_prism(),
        cut in arb_leaf(),
        t in arb_transform(),
        p in arb_point(),
    ) {
        let tree: CsgNode = Difference::new(base, vec![cut]).into();
        let moved = tree.transformed(&t);
        let q = t.local_to_global(&p);
        prop_assert_eq!(moved.contains_point(&q), tree.contains_point(&p));
        prop_assert_eq!(moved.is_point_on_boundary(&q), tree.is_point_on_boundary(&p));
        if tree.is_point_on_boundary(&p) {
            prop_assert_eq!(
                moved.get_outward_normal(&q),
                tree.get_outward_normal(&p).map(|n| n.rotated(&t.orientation))
            );
        }
    }
}
