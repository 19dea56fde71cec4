mod provenance;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use planar::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "planar-cli")]
#[command(about = "Generate shapes and apply rigid motions on a quadrant grid")]
struct Cmd {
    /// Also write the JSON output here, with a provenance sidecar next to it
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(flatten)]
    grid: GridArgs,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args)]
struct GridArgs {
    #[arg(long, global = true, default_value_t = GridCfg::default().extent)]
    extent: i64,
    #[arg(long, global = true, default_value_t = GridCfg::default().margin)]
    margin: i64,
    #[arg(long, global = true, default_value_t = GridCfg::default().size_min)]
    size_min: i64,
    #[arg(long, global = true, default_value_t = GridCfg::default().size_max)]
    size_max: i64,
}

impl GridArgs {
    fn to_cfg(&self) -> Result<GridCfg> {
        let cfg = GridCfg {
            extent: self.extent,
            margin: self.margin,
            size_min: self.size_min,
            size_max: self.size_max,
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

#[derive(Subcommand)]
enum Action {
    /// Draw a random shape inside a quadrant
    Generate {
        #[arg(long)]
        quadrant: Quadrant,
        /// triangle, rectangle, square, or trapezoid; random if omitted
        #[arg(long)]
        kind: Option<ShapeKind>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Reflect a polygon over the x- or y-axis
    Reflect {
        #[arg(long)]
        axis: Axis,
        #[command(flatten)]
        shape: ShapeArgs,
    },
    /// Rotate a polygon about the origin (90ccw, 90cw, 270ccw, 270cw, 180)
    Rotate {
        #[arg(long)]
        angle: RotationLabel,
        #[command(flatten)]
        shape: ShapeArgs,
    },
    /// Move a polygon into a random other quadrant
    Translate {
        #[command(flatten)]
        shape: ShapeArgs,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Generate a shape and apply a seeded sequence of random motions
    Drill {
        #[arg(long, default_value_t = 5)]
        steps: usize,
        #[arg(long, default_value = "1")]
        quadrant: Quadrant,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
struct ShapeArgs {
    /// One vertex per flag as an `x,y` pair, e.g. `-p 2,3 -p -4,3 -p -4,5`
    #[arg(
        long = "point",
        short = 'p',
        required = true,
        value_parser = parse_point,
        allow_hyphen_values = true
    )]
    points: Vec<Vec2<f64>>,
    #[arg(long, default_value = "rectangle")]
    kind: ShapeKind,
}

impl ShapeArgs {
    fn polygon(&self) -> Result<Polygon> {
        Ok(Polygon::from_points(self.points.clone(), self.kind)?)
    }
}

fn parse_point(s: &str) -> Result<Vec2<f64>> {
    let (x, y) = s
        .trim_matches(|c| c == '(' || c == ')')
        .split_once(',')
        .with_context(|| format!("expected `x,y`, got {s:?}"))?;
    let x: f64 = x.trim().parse().with_context(|| format!("bad x in {s:?}"))?;
    let y: f64 = y.trim().parse().with_context(|| format!("bad y in {s:?}"))?;
    if !(x.is_finite() && y.is_finite()) {
        bail!("non-finite coordinate in {s:?}");
    }
    Ok(Vec2::new(x, y))
}

#[derive(Serialize)]
struct ShapeOut {
    kind: String,
    quadrant: u8,
    points: Vec<[f64; 2]>,
    labels: Vec<String>,
}

impl ShapeOut {
    fn new(poly: &Polygon, primes: usize) -> Self {
        Self {
            kind: poly.kind().to_string(),
            quadrant: poly.quadrant().index(),
            points: poly.points().iter().map(|p| [p.x, p.y]).collect(),
            labels: (0..poly.points().len())
                .map(|i| vertex_label(i, primes))
                .collect(),
        }
    }
}

#[derive(Serialize)]
struct StepOut {
    transform: String,
    rule: String,
    from: u8,
    to: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    vector: Option<[f64; 2]>,
    shape: ShapeOut,
}

impl StepOut {
    fn new(step: &Step, primes: usize) -> Self {
        let (from, to) = step.quadrants();
        let vector = match step.transform {
            Transform::Translate(v) => Some([v.x, v.y]),
            _ => None,
        };
        Self {
            transform: step.transform.describe(),
            rule: step.transform.rule(),
            from: from.index(),
            to: to.index(),
            vector,
            shape: ShapeOut::new(&step.after, primes),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = cmd.grid.to_cfg()?;
    let (body, payload) = match cmd.action {
        Action::Generate {
            quadrant,
            kind,
            seed,
        } => generate_cmd(&cfg, quadrant, kind, seed)?,
        Action::Reflect { axis, shape } => {
            single_step(shape.polygon()?, Transform::Reflect(axis), "reflect")?
        }
        Action::Rotate { angle, shape } => {
            single_step(shape.polygon()?, Transform::Rotate(angle), "rotate")?
        }
        Action::Translate { shape, seed } => translate_cmd(&cfg, shape.polygon()?, seed)?,
        Action::Drill {
            steps,
            quadrant,
            seed,
        } => drill(&cfg, steps, quadrant, seed)?,
        Action::Report => report(),
    };
    println!("{}", serde_json::to_string_pretty(&body)?);
    if let Some(out) = cmd.out {
        let prov = provenance::write_artifact(&out, &body, payload)?;
        tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote artifact");
    }
    Ok(())
}

/// Use the given seed, or draw one so the run can still be replayed.
fn seeded(seed: Option<u64>) -> (u64, StdRng) {
    let seed = seed.unwrap_or_else(rand::random);
    (seed, StdRng::seed_from_u64(seed))
}

fn generate_cmd(
    cfg: &GridCfg,
    quadrant: Quadrant,
    kind: Option<ShapeKind>,
    seed: Option<u64>,
) -> Result<(Value, Payload)> {
    let (seed, mut rng) = seeded(seed);
    let poly = generate(cfg, quadrant, kind, &mut rng)?;
    tracing::info!(
        quadrant = quadrant.index(),
        kind = %poly.kind(),
        seed,
        "generate"
    );
    let body = serde_json::to_value(ShapeOut::new(&poly, 0))?;
    let payload = Payload::new(
        "generate",
        json!({ "quadrant": quadrant.index(), "kind": kind.map(|k| k.to_string()) }),
    )
    .with_seed(Some(seed));
    Ok((body, payload))
}

fn single_step(poly: Polygon, transform: Transform, name: &'static str) -> Result<(Value, Payload)> {
    let mut session = Session::new(poly);
    let step = session.apply(transform)?;
    tracing::info!(
        transform = %step.transform.describe(),
        from = step.before.quadrant().index(),
        to = step.after.quadrant().index(),
        command = name,
        "single step"
    );
    let body = serde_json::to_value(StepOut::new(step, 1))?;
    let payload = Payload::new(name, json!({ "rule": step.transform.rule() }));
    Ok((body, payload))
}

fn translate_cmd(cfg: &GridCfg, poly: Polygon, seed: Option<u64>) -> Result<(Value, Payload)> {
    let (seed, mut rng) = seeded(seed);
    let mut session = Session::new(poly);
    let step = session.translate_random(cfg, &mut rng)?;
    let (from, to) = step.quadrants();
    tracing::info!(from = from.index(), to = to.index(), seed, "translate");
    let body = serde_json::to_value(StepOut::new(step, 1))?;
    let payload = Payload::new("translate", json!({ "from": from.index() })).with_seed(Some(seed));
    Ok((body, payload))
}

fn drill(
    cfg: &GridCfg,
    steps: usize,
    quadrant: Quadrant,
    seed: Option<u64>,
) -> Result<(Value, Payload)> {
    let (seed, mut rng) = seeded(seed);
    let mut session = Session::generate(cfg, quadrant, None, &mut rng)?;
    let start = ShapeOut::new(session.current(), 0);
    let mut out = Vec::with_capacity(steps);
    for k in 0..steps {
        let step = match rng.gen_range(0..5) {
            0 => session.reflect(Axis::X),
            1 => session.reflect(Axis::Y),
            2 => session.rotate_next(),
            3 => session.rotate(RotationLabel::Half),
            _ => session.translate_random(cfg, &mut rng)?,
        };
        tracing::debug!(k, rule = %step.transform.rule(), "drill step");
        out.push(StepOut::new(step, k + 1));
    }
    tracing::info!(steps, seed, quadrant = quadrant.index(), "drill");
    let body = json!({ "start": start, "steps": out });
    let payload = Payload::new(
        "drill",
        json!({ "steps": steps, "quadrant": quadrant.index() }),
    )
    .with_seed(Some(seed));
    Ok((body, payload))
}

fn report() -> (Value, Payload) {
    let body = json!({
        "code_rev": provenance::current_git_rev(),
        "planar_version": planar::VERSION,
        "grid_default": {
            "extent": GridCfg::default().extent,
            "margin": GridCfg::default().margin,
            "size_min": GridCfg::default().size_min,
            "size_max": GridCfg::default().size_max
        }
    });
    (body, Payload::new("report", json!({})))
}
