use super::*;
use nalgebra::vector;

#[test]
fn strict_quadrants() {
    assert_eq!(Quadrant::of(vector![2.0, 3.0]), Quadrant::First);
    assert_eq!(Quadrant::of(vector![-2.0, 3.0]), Quadrant::Second);
    assert_eq!(Quadrant::of(vector![-2.0, -3.0]), Quadrant::Third);
    assert_eq!(Quadrant::of(vector![2.0, -3.0]), Quadrant::Fourth);
}

#[test]
fn axis_fallback() {
    assert_eq!(Quadrant::of(vector![5.0, 0.0]), Quadrant::First);
    assert_eq!(Quadrant::of(vector![-5.0, 0.0]), Quadrant::Second);
    assert_eq!(Quadrant::of(vector![0.0, -5.0]), Quadrant::Third);
    assert_eq!(Quadrant::of(vector![0.0, 5.0]), Quadrant::Fourth);
    assert_eq!(Quadrant::of(vector![0.0, 0.0]), Quadrant::Fourth);
    assert_eq!(Quadrant::of(vector![-0.0, 0.0]), Quadrant::Fourth);
}

#[test]
fn quadrant_conversions() {
    for q in Quadrant::ALL {
        assert_eq!(Quadrant::try_from(q.index()).unwrap(), q);
        assert_eq!(q.to_string().parse::<Quadrant>().unwrap(), q);
        assert!(q.contains(q.sign()));
        assert!(!q.others().contains(&q));
    }
    assert_eq!("Q3".parse::<Quadrant>().unwrap(), Quadrant::Third);
    assert_eq!(
        Quadrant::try_from(0),
        Err(ShapeError::BadQuadrant { value: 0 })
    );
    assert!("five".parse::<Quadrant>().is_err());
}

#[test]
fn polygon_rejects_bad_input() {
    let two = vec![vector![1.0, 1.0], vector![2.0, 2.0]];
    assert_eq!(
        Polygon::from_points(two, ShapeKind::Triangle),
        Err(ShapeError::TooFewVertices { got: 2 })
    );
    let nan = vec![vector![1.0, 1.0], vector![f64::NAN, 2.0], vector![3.0, 1.0]];
    assert_eq!(
        Polygon::from_points(nan, ShapeKind::Triangle),
        Err(ShapeError::NonFinite { index: 1 })
    );
}

#[test]
fn from_points_tags_first_vertex() {
    let p = Polygon::from_points(
        vec![vector![-3.0, 2.0], vector![3.0, 2.0], vector![0.0, 5.0]],
        ShapeKind::Triangle,
    )
    .unwrap();
    assert_eq!(p.quadrant(), Quadrant::Second);
}

#[test]
fn bbox_and_center() {
    let p = Polygon::from_points(
        vec![vector![1.0, 2.0], vector![4.0, 2.0], vector![2.0, 7.0]],
        ShapeKind::Triangle,
    )
    .unwrap();
    let bb = p.bbox();
    assert_eq!(bb.min, vector![1.0, 2.0]);
    assert_eq!(bb.max, vector![4.0, 7.0]);
    assert_eq!(bb.width(), 3.0);
    assert_eq!(bb.height(), 5.0);
    assert_eq!(bb.center(), vector![2.5, 4.5]);
}

#[test]
fn snapping_rounds_half_away_and_drops_negative_zero() {
    let p = Polygon::snapped(
        vec![vector![2.5, -2.5], vector![-0.2, 0.4], vector![1.49, 3.0]],
        ShapeKind::Triangle,
        Quadrant::First,
    );
    let pts = p.points();
    assert_eq!(pts[0], vector![3.0, -3.0]);
    assert!(pts[1].x.is_sign_positive());
    assert_eq!(pts[1], vector![0.0, 0.0]);
    assert_eq!(pts[2], vector![1.0, 3.0]);
}

#[test]
fn kind_names() {
    for k in ShapeKind::ALL {
        assert_eq!(k.to_string().parse::<ShapeKind>().unwrap(), k);
    }
    assert_eq!("Square".parse::<ShapeKind>().unwrap(), ShapeKind::Square);
    assert!("hexagon".parse::<ShapeKind>().is_err());
}

#[test]
fn labels() {
    assert_eq!(vertex_label(0, 0), "A");
    assert_eq!(vertex_label(2, 1), "C′");
    assert_eq!(vertex_label(1, 2), "B′′");
    assert_eq!(vertex_label(26, 0), "A1");
    assert_eq!(vertex_label(27, 0), "B1");
}

#[test]
fn edges_wrap_around() {
    let p = Polygon::from_points(
        vec![vector![1.0, 1.0], vector![3.0, 1.0], vector![2.0, 3.0]],
        ShapeKind::Triangle,
    )
    .unwrap();
    let e: Vec<_> = p.edges().collect();
    assert_eq!(e.len(), 3);
    assert_eq!(e[2], (vector![2.0, 3.0], vector![1.0, 1.0]));
}
