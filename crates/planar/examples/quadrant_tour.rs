//! Walk one shape through a short, seeded sequence of rigid motions.
//!
//! Usage:
//!   cargo run -p planar --example quadrant_tour -- [seed]

use planar::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(2025);
    let cfg = GridCfg::default();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut session = Session::generate(&cfg, Quadrant::First, None, &mut rng)
        .expect("default grid config is valid");
    print_shape("start", &session);

    session.reflect(Axis::X);
    print_last(&session);
    session.rotate_next();
    print_last(&session);
    session
        .translate_random(&cfg, &mut rng)
        .expect("generated shapes fit every quadrant");
    print_last(&session);
    session.rotate(RotationLabel::Half);
    print_last(&session);
}

fn print_last(session: &Session) {
    if let Some(step) = session.history().last() {
        let (from, to) = step.quadrants();
        println!(
            "{}: {}  [Q{from} -> Q{to}]",
            step.transform.describe(),
            step.transform.rule()
        );
    }
    print_shape("  now", session);
}

fn print_shape(tag: &str, session: &Session) {
    let shape = session.current();
    let verts: Vec<String> = session
        .labels()
        .into_iter()
        .zip(shape.points())
        .map(|(l, p)| format!("{l}({}, {})", p.x, p.y))
        .collect();
    println!("{tag} {} Q{}: {}", shape.kind(), shape.quadrant(), verts.join(" "));
}
