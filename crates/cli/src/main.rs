use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use planar::{Ellipse, Line, Point, Rectangle, Square, Translate, Triangle};
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod report;

use report::Report;

#[derive(Parser)]
#[command(name = "planar-cli")]
#[command(about = "Build a shape, optionally translate it, and print its measurements")]
struct Cmd {
    /// Translation applied along x after construction
    #[arg(long, global = true, default_value_t = 0.0, allow_negative_numbers = true)]
    dx: f64,
    /// Translation applied along y after construction
    #[arg(long, global = true, default_value_t = 0.0, allow_negative_numbers = true)]
    dy: f64,

    #[command(subcommand)]
    shape: Shape,
}

#[derive(Args, Clone, Copy)]
struct P1 {
    #[arg(long, allow_negative_numbers = true)]
    x1: f64,
    #[arg(long, allow_negative_numbers = true)]
    y1: f64,
}

#[derive(Args, Clone, Copy)]
struct P2 {
    #[arg(long, allow_negative_numbers = true)]
    x2: f64,
    #[arg(long, allow_negative_numbers = true)]
    y2: f64,
}

#[derive(Args, Clone, Copy)]
struct P3 {
    #[arg(long, allow_negative_numbers = true)]
    x3: f64,
    #[arg(long, allow_negative_numbers = true)]
    y3: f64,
}

#[derive(Subcommand)]
enum Shape {
    /// A single point
    Point {
        #[command(flatten)]
        p1: P1,
    },
    /// Segment from (x1,y1) to (x2,y2)
    Line {
        #[command(flatten)]
        p1: P1,
        #[command(flatten)]
        p2: P2,
    },
    /// Ellipse centered at (x1,y1)
    Ellipse {
        #[command(flatten)]
        center: P1,
        #[arg(long, allow_negative_numbers = true)]
        rx: f64,
        #[arg(long, allow_negative_numbers = true)]
        ry: f64,
    },
    /// Circle centered at (x1,y1)
    Circle {
        #[command(flatten)]
        center: P1,
        #[arg(long, allow_negative_numbers = true)]
        r: f64,
    },
    /// Axis-aligned rectangle with opposite corners (x1,y1), (x2,y2)
    Rectangle {
        #[command(flatten)]
        p1: P1,
        #[command(flatten)]
        p2: P2,
    },
    /// Axis-aligned square with opposite corners (x1,y1), (x2,y2)
    Square {
        #[command(flatten)]
        p1: P1,
        #[command(flatten)]
        p2: P2,
    },
    /// Triangle with vertices (x1,y1), (x2,y2), (x3,y3)
    Triangle {
        #[command(flatten)]
        p1: P1,
        #[command(flatten)]
        p2: P2,
        #[command(flatten)]
        p3: P3,
    },
}

impl From<P1> for Point {
    fn from(p: P1) -> Self {
        Point::new(p.x1, p.y1)
    }
}
impl From<P2> for Point {
    fn from(p: P2) -> Self {
        Point::new(p.x2, p.y2)
    }
}
impl From<P3> for Point {
    fn from(p: P3) -> Self {
        Point::new(p.x3, p.y3)
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let report = run(cmd.shape, cmd.dx, cmd.dy)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run(shape: Shape, dx: f64, dy: f64) -> Result<Report> {
    let report = match shape {
        Shape::Point { p1 } => {
            let mut p = Point::from(p1);
            tracing::info!(point = %p, dx, dy, "point");
            p.translate(dx, dy);
            Report::point(&p)
        }
        Shape::Line { p1, p2 } => {
            let mut l = Line::new(Point::from(p1), Point::from(p2))?;
            tracing::info!(a = %l.a(), b = %l.b(), dx, dy, "line");
            l.translate(dx, dy);
            Report::line(&l)
        }
        Shape::Ellipse { center, rx, ry } => {
            let mut e = Ellipse::new(Point::from(center), rx, ry)?;
            tracing::info!(center = %e.center(), rx, ry, dx, dy, "ellipse");
            e.translate(dx, dy);
            Report::ellipse(&e)
        }
        Shape::Circle { center, r } => {
            let mut e = Ellipse::circle(Point::from(center), r)?;
            tracing::info!(center = %e.center(), r, dx, dy, "circle");
            e.translate(dx, dy);
            Report::ellipse(&e)
        }
        Shape::Rectangle { p1, p2 } => {
            let mut r = Rectangle::new(Point::from(p1), Point::from(p2))?;
            tracing::info!(p1 = %r.p1(), p2 = %r.p2(), dx, dy, "rectangle");
            r.translate(dx, dy);
            Report::rectangle(&r)
        }
        Shape::Square { p1, p2 } => {
            let mut sq = Square::new(Point::from(p1), Point::from(p2))?;
            tracing::info!(p1 = %sq.p1(), p2 = %sq.p2(), dx, dy, "square");
            sq.translate(dx, dy);
            Report::square(&sq)
        }
        Shape::Triangle { p1, p2, p3 } => {
            let mut t = Triangle::new(Point::from(p1), Point::from(p2), Point::from(p3))?;
            tracing::info!(p1 = %t.p1(), p2 = %t.p2(), p3 = %t.p3(), dx, dy, "triangle");
            t.translate(dx, dy);
            Report::triangle(&t)
        }
    };
    Ok(report)
}
