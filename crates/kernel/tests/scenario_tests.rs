//! End-to-end timber joinery scenarios exercising the public query surface.

use timber_csg::geometry::{frac, num};
use timber_csg::{
    classify_point, ConvexPolygonExtrusion, CsgNode, Cylinder, Difference, Direction, HalfSpace,
    Orientation, PointClassification, PointQuery, RectangularPrism, SolidUnion, Transform, Vec2,
    Vec3,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn prism(w: i64, h: i64, start: i64, end: i64) -> CsgNode {
    RectangularPrism::new(
        Vec2::from_i64(w, h),
        Transform::identity(),
        Some(num(start)),
        Some(num(end)),
    )
    .unwrap()
    .into()
}

fn prism_at(x: i64, y: i64, start: i64, end: i64) -> CsgNode {
    RectangularPrism::new(
        Vec2::from_i64(4, 4),
        Transform::from_position(Vec3::from_i64(x, y, 0)),
        Some(num(start)),
        Some(num(end)),
    )
    .unwrap()
    .into()
}

fn p(x: i64, y: i64, z: i64) -> Vec3 {
    Vec3::from_i64(x, y, z)
}

// ---------------------------------------------------------------------------
// Primitives
// ---------------------------------------------------------------------------

#[test]
fn prism_corners_are_boundary_points() {
    let post = prism(4, 4, 0, 10);
    for x in [-2, 2] {
        for y in [-2, 2] {
            for z in [0, 10] {
                assert!(post.contains_point(&p(x, y, z)));
                assert!(post.is_point_on_boundary(&p(x, y, z)));
            }
        }
    }
}

#[test]
fn cylinder_surface_and_axis() {
    let r = 3;
    let length = 8;
    let peg: CsgNode = Cylinder::new(Vec3::unit_z(), num(r), Vec3::zero(), Some(num(0)), Some(num(length)))
        .unwrap()
        .into();

    let on_surface = p(r, 0, length / 2);
    assert!(peg.is_point_on_boundary(&on_surface));
    assert_eq!(peg.get_outward_normal(&on_surface), Some(Direction::x()));
    assert_eq!(
        peg.get_outward_normal(&on_surface).and_then(|n| n.unit()),
        Some(Vec3::unit_x())
    );

    let on_axis = p(0, 0, length / 2);
    assert!(peg.contains_point(&on_axis));
    assert!(!peg.is_point_on_boundary(&on_axis));
}

#[test]
fn half_space_is_exact_at_fractional_offsets() {
    let h = HalfSpace::new(Vec3::from_i64(0, 0, 3), num(1)).unwrap();
    let plane = Vec3::new(num(5), num(-5), frac(1, 3));
    assert!(h.is_point_on_boundary(&plane));
    let just_below = Vec3::new(num(0), num(0), frac(1, 3) - frac(1, 1_000_000_000));
    assert!(!h.contains_point(&just_below));
}

#[test]
fn extrusion_validity() {
    let square = vec![
        Vec2::from_i64(0, 0),
        Vec2::from_i64(1, 0),
        Vec2::from_i64(1, 1),
        Vec2::from_i64(0, 1),
    ];
    let ok = ConvexPolygonExtrusion::new(square.clone(), Transform::identity(), Some(num(0)), Some(num(1)));
    assert!(ok.is_valid());

    let two = ConvexPolygonExtrusion::new(square[..2].to_vec(), Transform::identity(), Some(num(0)), Some(num(1)));
    assert!(!two.is_valid());

    let crossed = vec![square[0].clone(), square[2].clone(), square[1].clone(), square[3].clone()];
    let bow_tie = ConvexPolygonExtrusion::new(crossed, Transform::identity(), Some(num(0)), Some(num(1)));
    assert!(!bow_tie.is_valid());

    let inverted = ConvexPolygonExtrusion::new(square, Transform::identity(), Some(num(1)), Some(num(0)));
    assert!(!inverted.is_valid());
}

// ---------------------------------------------------------------------------
// Unions
// ---------------------------------------------------------------------------

#[test]
fn union_of_touching_prisms_hides_shared_face() {
    let pair: CsgNode = SolidUnion::new(vec![prism_at(0, 0, 0, 10), prism_at(4, 0, 0, 10)]).into();

    let shared = p(2, 1, 5);
    assert!(pair.contains_point(&shared));
    assert!(!pair.is_point_on_boundary(&shared));

    for outer in [p(-2, 0, 5), p(6, -1, 3), p(1, 2, 5), p(5, -2, 5), p(0, 0, 10), p(4, 0, 0)] {
        assert!(pair.is_point_on_boundary(&outer), "outer point {outer}");
    }
}

#[test]
fn union_side_faces_continue_across_shared_face() {
    let pair: CsgNode = SolidUnion::new(vec![prism_at(0, 0, 0, 10), prism_at(4, 0, 0, 10)]).into();
    assert!(!pair.is_point_on_boundary(&p(2, 0, 5)));
    assert!(pair.is_point_on_boundary(&p(2, 2, 5)));
    assert!(pair.is_point_on_boundary(&p(2, -2, 5)));
    assert_eq!(pair.get_outward_normal(&p(2, 2, 5)), Some(Direction::y()));
    assert_eq!(pair.get_outward_normal(&p(2, -2, 5)), Some(-Direction::y()));
    assert_eq!(pair.get_outward_normal(&p(2, 0, 10)), Some(Direction::z()));
}

#[test]
fn rebate_along_a_joined_pair_removes_the_whole_face() {
    // Two posts side by side, with an 8x2 rebate flush with their +Y faces.
    let pair: CsgNode = SolidUnion::new(vec![prism_at(0, 0, 0, 10), prism_at(4, 0, 0, 10)]).into();
    let rebate: CsgNode = RectangularPrism::new(
        Vec2::from_i64(8, 2),
        Transform::from_position(p(2, 1, 0)),
        Some(num(0)),
        Some(num(10)),
    )
    .unwrap()
    .into();
    let rebated: CsgNode = Difference::new(pair, vec![rebate]).into();

    for x in 0..=4 {
        assert!(!rebated.contains_point(&p(x, 2, 5)), "face point ({x}, 2, 5)");
    }
    assert!(!rebated.contains_point(&p(2, 1, 5)));

    let floor = p(2, 0, 5);
    assert!(rebated.contains_point(&floor));
    assert!(rebated.is_point_on_boundary(&floor));
    assert_eq!(rebated.get_outward_normal(&floor), Some(Direction::y()));

    let back = p(2, -2, 5);
    assert!(rebated.is_point_on_boundary(&back));
    assert_eq!(rebated.get_outward_normal(&back), Some(-Direction::y()));
}

#[test]
fn union_membership_ignores_child_order() {
    let a = prism_at(0, 0, 0, 10);
    let b = prism_at(3, 0, 5, 15);
    let ab: CsgNode = SolidUnion::new(vec![a.clone(), b.clone()]).into();
    let ba: CsgNode = SolidUnion::new(vec![b, a]).into();
    for z in -1..=16 {
        for x in -3..=6 {
            let q = p(x, 0, z);
            assert_eq!(ab.contains_point(&q), ba.contains_point(&q), "{q}");
            assert_eq!(ab.is_point_on_boundary(&q), ba.is_point_on_boundary(&q), "{q}");
        }
    }
}

// ---------------------------------------------------------------------------
// Differences
// ---------------------------------------------------------------------------

#[test]
fn lopping_off_the_top_of_a_post() {
    let cut: CsgNode = Difference::new(prism(4, 4, 0, 10), vec![prism(4, 4, 5, 10)]).into();
    let remaining = prism(4, 4, 0, 5);

    let top_centre = p(0, 0, 5);
    assert!(cut.is_point_on_boundary(&top_centre));
    assert_eq!(cut.get_outward_normal(&top_centre), Some(Direction::z()));

    for z in 0..=10 {
        for x in -2..=2 {
            let q = p(x, 0, z);
            assert_eq!(cut.contains_point(&q), remaining.contains_point(&q), "contains {q}");
        }
    }
}

#[test]
fn difference_without_subtracts_is_base() {
    let base = prism(4, 4, 0, 10);
    let same: CsgNode = Difference::new(base.clone(), Vec::new()).into();
    for q in [p(0, 0, 0), p(2, 2, 10), p(1, 1, 1), p(3, 3, 3), p(2, 0, 5)] {
        assert_eq!(same.classify(&q), base.classify(&q));
        assert_eq!(same.get_outward_normal(&q), base.get_outward_normal(&q));
    }
}

#[test]
fn shape_minus_itself_is_empty() {
    let post = prism(4, 4, 0, 10);
    let nothing: CsgNode = Difference::new(post.clone(), vec![post]).into();
    for q in [p(0, 0, 5), p(2, 0, 5), p(0, -2, 5), p(0, 0, 0), p(0, 0, 10), p(2, 2, 10)] {
        assert!(!nothing.contains_point(&q), "{q} should be removed");
        assert_eq!(classify_point(&nothing, &q), PointClassification::Outside);
    }
}

#[test]
fn mortise_in_a_post() {
    // 2x6 mortise, 3 deep, cut into the +X face of a 4x8 post.
    let post = prism(4, 8, 0, 20);
    let pocket: CsgNode = RectangularPrism::new(
        Vec2::from_i64(2, 6),
        Transform::new(Vec3::from_i64(2, 0, 10), Orientation::down()),
        Some(num(0)),
        Some(num(3)),
    )
    .unwrap()
    .into();
    let mortised: CsgNode = Difference::new(post, vec![pocket]).into();

    // Inside the pocket.
    assert!(!mortised.contains_point(&p(1, 0, 10)));
    // Floor of the pocket.
    let floor = p(-1, 0, 10);
    assert!(mortised.is_point_on_boundary(&floor));
    assert_eq!(mortised.get_outward_normal(&floor), Some(Direction::x()));
    // Cheek of the pocket faces into the hole.
    let cheek = p(0, 3, 10);
    assert!(mortised.is_point_on_boundary(&cheek));
    assert_eq!(mortised.get_outward_normal(&cheek), Some(-Direction::y()));
    // Untouched face of the post.
    assert!(mortised.is_point_on_boundary(&p(2, 0, 15)));
    assert!(mortised.contains_point(&p(0, 0, 15)));
}

#[test]
fn drilled_peg_hole_through_tenon() {
    let tenon = prism(2, 4, 0, 6);
    let hole: CsgNode = Cylinder::new(Vec3::unit_x(), num(1), Vec3::from_i64(0, 0, 3), None, None)
        .unwrap()
        .into();
    let drilled: CsgNode = Difference::new(tenon, vec![hole]).into();
    assert!(!drilled.contains_point(&p(0, 0, 3)));
    let wall = p(0, 1, 3);
    assert!(drilled.is_point_on_boundary(&wall));
    assert_eq!(drilled.get_outward_normal(&wall), Some(-Direction::y()));
    assert!(drilled.contains_point(&p(0, 2, 3)));
}

// ---------------------------------------------------------------------------
// Reframing
// ---------------------------------------------------------------------------

#[test]
fn cut_moves_with_its_timber() {
    let cut: CsgNode = Difference::new(prism(4, 4, 0, 10), vec![prism(4, 4, 5, 10)]).into();
    let placement = Transform::new(Vec3::from_i64(100, 50, 0), Orientation::north());
    let placed = cut.transformed(&placement);
    let local = p(0, 0, 5);
    let global = placement.local_to_global(&local);
    assert!(placed.is_point_on_boundary(&global));
    assert_eq!(placed.get_outward_normal(&global), Some(Direction::z()));
    assert!(!placed.contains_point(&placement.local_to_global(&p(0, 0, 7))));
}
