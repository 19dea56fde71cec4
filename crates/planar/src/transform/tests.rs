use super::*;
use crate::gen::generate;
use crate::shape::{Point, ShapeKind};
use nalgebra::vector;
use rand::{rngs::StdRng, SeedableRng};

fn poly(points: &[(f64, f64)]) -> Polygon {
    let pts: Vec<Point> = points.iter().map(|&(x, y)| vector![x, y]).collect();
    Polygon::from_points(pts, ShapeKind::Rectangle).unwrap()
}

fn coords(p: &Polygon) -> Vec<(f64, f64)> {
    p.points().iter().map(|v| (v.x, v.y)).collect()
}

#[test]
fn reflect_square_over_x_axis() {
    let sq = poly(&[(2.0, 3.0), (4.0, 3.0), (4.0, 5.0), (2.0, 5.0)]);
    let r = reflect(&sq, Axis::X);
    assert_eq!(
        coords(&r),
        vec![(2.0, -3.0), (4.0, -3.0), (4.0, -5.0), (2.0, -5.0)]
    );
    assert_eq!(r.quadrant(), Quadrant::Fourth);
    assert_eq!(r.kind(), ShapeKind::Rectangle);
}

#[test]
fn reflect_over_y_axis_moves_to_second() {
    let sq = poly(&[(2.0, 3.0), (4.0, 3.0), (4.0, 5.0), (2.0, 5.0)]);
    let r = reflect(&sq, Axis::Y);
    assert_eq!(coords(&r)[0], (-2.0, 3.0));
    assert_eq!(r.quadrant(), Quadrant::Second);
}

#[test]
fn rotate_point_quarter_ccw() {
    let p = poly(&[(3.0, 2.0), (5.0, 2.0), (4.0, 4.0)]);
    let r = rotate(&p, Rotation::Ccw90);
    assert_eq!(coords(&r)[0], (-2.0, 3.0));
    assert_eq!(r.quadrant(), Quadrant::Second);
}

#[test]
fn rotation_formulas() {
    let p = poly(&[(3.0, 2.0), (5.0, 2.0), (4.0, 4.0)]);
    assert_eq!(coords(&rotate(&p, Rotation::Cw90))[0], (2.0, -3.0));
    assert_eq!(coords(&rotate(&p, Rotation::Half))[0], (-3.0, -2.0));
    assert_eq!(rotate(&p, Rotation::Cw90).quadrant(), Quadrant::Fourth);
    assert_eq!(rotate(&p, Rotation::Half).quadrant(), Quadrant::Third);
}

#[test]
fn inverse_pairs_round_trip() {
    let mut rng = StdRng::seed_from_u64(2024);
    let cfg = GridCfg::default();
    for _ in 0..50 {
        let q = Quadrant::ALL[rand::Rng::gen_range(&mut rng, 0..4)];
        let p = generate(&cfg, q, None, &mut rng).unwrap();
        assert_eq!(rotate(&rotate(&p, Rotation::Cw90), Rotation::Ccw90), p);
        assert_eq!(rotate(&rotate(&p, Rotation::Ccw90), Rotation::Cw90), p);
        assert_eq!(rotate(&rotate(&p, Rotation::Half), Rotation::Half), p);
        assert_eq!(reflect(&reflect(&p, Axis::X), Axis::X), p);
        assert_eq!(reflect(&reflect(&p, Axis::Y), Axis::Y), p);
    }
}

#[test]
fn equivalent_labels_give_identical_polygons() {
    let p = poly(&[(3.0, 2.0), (6.0, 2.0), (6.0, 5.0), (3.0, 5.0)]);
    let a = Transform::Rotate(RotationLabel::Ccw90).apply(&p).unwrap();
    let b = Transform::Rotate(RotationLabel::Cw270).apply(&p).unwrap();
    assert_eq!(a, b);
    let c = Transform::Rotate(RotationLabel::Cw90).apply(&p).unwrap();
    let d = Transform::Rotate(RotationLabel::Ccw270).apply(&p).unwrap();
    assert_eq!(c, d);
    assert_ne!(a, c);
}

#[test]
fn quadrant_move_lands_elsewhere_and_replays_vector() {
    let cfg = GridCfg::default();
    let mut rng = StdRng::seed_from_u64(17);
    for q in Quadrant::ALL {
        for _ in 0..40 {
            let p = generate(&cfg, q, None, &mut rng).unwrap();
            let mv = translate_to_random_quadrant(&p, &cfg, &mut rng).unwrap();
            assert_eq!(mv.from, q);
            assert_ne!(mv.to, q);
            assert_eq!(mv.polygon.quadrant(), mv.to);
            assert!(mv.polygon.points().iter().all(|v| mv.to.contains(*v)));
            // Integer shapes move by integer vectors.
            assert_eq!(mv.vector.x, mv.vector.x.round());
            assert_eq!(mv.vector.y, mv.vector.y.round());
            let replay: Vec<_> = p
                .points()
                .iter()
                .map(|v| ((v.x + mv.vector.x).round(), (v.y + mv.vector.y).round()))
                .collect();
            assert_eq!(coords(&mv.polygon), replay);
            assert_eq!(translate(&p, mv.vector).unwrap().points(), mv.polygon.points());
        }
    }
}

#[test]
fn quadrant_move_preserves_shape() {
    let cfg = GridCfg::default();
    let mut rng = StdRng::seed_from_u64(8);
    let p = generate(&cfg, Quadrant::Second, Some(ShapeKind::Trapezoid), &mut rng).unwrap();
    let mv = translate_to_random_quadrant(&p, &cfg, &mut rng).unwrap();
    let (a, b) = (p.bbox(), mv.polygon.bbox());
    assert_eq!(a.width(), b.width());
    assert_eq!(a.height(), b.height());
    assert_eq!(mv.polygon.kind(), ShapeKind::Trapezoid);
}

#[test]
fn non_finite_translation_is_rejected() {
    let tri = poly(&[(1.0, 1.0), (3.0, 1.0), (2.0, 3.0)]);
    assert_eq!(
        translate(&tri, vector![f64::NAN, f64::INFINITY]),
        Err(ShapeError::NonFinite { index: 0 })
    );
    assert!(matches!(
        translate(&tri, vector![f64::MAX, 0.0]).and_then(|p| translate(&p, vector![f64::MAX, 0.0])),
        Err(ShapeError::NonFinite { .. })
    ));
    assert!(Transform::Translate(vector![0.0, f64::NEG_INFINITY])
        .apply(&tri)
        .is_err());
    let ok = translate(&tri, vector![-5.0, 0.0]).unwrap();
    assert_eq!(ok.points()[0], vector![-4.0, 1.0]);
    assert_eq!(ok.quadrant(), Quadrant::Second);
}

#[test]
fn oversized_polygon_cannot_move() {
    let cfg = GridCfg::default();
    let mut rng = StdRng::seed_from_u64(1);
    let big = poly(&[(1.0, 1.0), (15.0, 1.0), (8.0, 6.0)]);
    assert!(matches!(
        translate_to_random_quadrant(&big, &cfg, &mut rng),
        Err(ShapeError::DoesNotFit { .. })
    ));
}

#[test]
fn affine_maps_are_isometries() {
    for f in [
        Affine2::mirror_x(),
        Affine2::mirror_y(),
        Affine2::quarter_ccw(),
        Affine2::quarter_cw(),
        Affine2::half_turn(),
        Affine2::translation(vector![3.0, -2.0]),
    ] {
        assert!(f.is_isometry());
        let inv = f.inverse().unwrap();
        assert_eq!(f.compose(&inv), Affine2::identity());
    }
    assert!(!Affine2::mirror_x().is_orientation_preserving());
    assert!(Affine2::quarter_cw().is_orientation_preserving());
    assert_eq!(
        Affine2::quarter_ccw().compose(&Affine2::quarter_ccw()),
        Affine2::half_turn()
    );
}

#[test]
fn rules_read_like_the_textbook() {
    assert_eq!(Transform::Reflect(Axis::X).rule(), "(x, y) → (x, −y)");
    assert_eq!(Transform::Reflect(Axis::Y).rule(), "(x, y) → (−x, y)");
    assert_eq!(
        Transform::Rotate(RotationLabel::Cw270).rule(),
        "(x, y) → (−y, x)"
    );
    assert_eq!(
        Transform::Rotate(RotationLabel::Ccw270).rule(),
        "(x, y) → (y, −x)"
    );
    assert_eq!(
        Transform::Rotate(RotationLabel::Half).rule(),
        "(x, y) → (−x, −y)"
    );
    assert_eq!(
        Transform::Translate(vector![3.0, -2.0]).rule(),
        "(x, y) → (x + 3, y − 2)"
    );
    assert_eq!(
        Transform::Translate(vector![-0.5, 0.0]).rule(),
        "(x, y) → (x − 0.5, y)"
    );
}

#[test]
fn descriptions() {
    assert_eq!(
        Transform::Reflect(Axis::Y).describe(),
        "reflection over the y-axis"
    );
    assert_eq!(
        Transform::Rotate(RotationLabel::Cw270).describe(),
        "rotation 270° clockwise about the origin"
    );
    assert_eq!(
        Transform::Rotate(RotationLabel::Half).describe(),
        "rotation 180° about the origin"
    );
    assert_eq!(
        Transform::Translate(vector![-4.0, 6.0]).describe(),
        "translation by ⟨−4, 6⟩"
    );
}

#[test]
fn axis_parsing() {
    assert_eq!("X".parse::<Axis>().unwrap(), Axis::X);
    assert_eq!("y-axis".parse::<Axis>().unwrap(), Axis::Y);
    assert!("z".parse::<Axis>().is_err());
}
