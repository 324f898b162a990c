//! JSON measurement report for a single shape.

use planar::{Area, Ellipse, Line, Point, PointRef, Rectangle, Square, Triangle};
use serde::{Serialize, Serializer};

/// What the CLI prints after building (and optionally translating) a shape.
#[derive(Debug, Serialize)]
pub struct Report {
    pub kind: &'static str,
    pub version: &'static str,
    pub points: Vec<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radii: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_slope"
    )]
    pub slope: Option<f64>,
}

// JSON has no infinity; a vertical line reports "inf".
fn serialize_slope<S: Serializer>(slope: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
    match slope {
        Some(v) if v.is_infinite() => s.serialize_str(if *v > 0.0 { "inf" } else { "-inf" }),
        Some(v) => s.serialize_f64(*v),
        None => s.serialize_none(),
    }
}

fn xy(p: &PointRef) -> [f64; 2] {
    [p.x(), p.y()]
}

impl Report {
    fn new(kind: &'static str, points: Vec<[f64; 2]>) -> Self {
        Self {
            kind,
            version: planar::VERSION,
            points,
            radii: None,
            area: None,
            length: None,
            slope: None,
        }
    }

    pub fn point(p: &Point) -> Self {
        Self::new("point", vec![[p.x(), p.y()]])
    }

    pub fn line(l: &Line) -> Self {
        Self {
            length: Some(l.length()),
            slope: Some(l.slope()),
            ..Self::new("line", vec![xy(l.a()), xy(l.b())])
        }
    }

    pub fn ellipse(e: &Ellipse) -> Self {
        let kind = if e.is_circle() { "circle" } else { "ellipse" };
        Self {
            radii: Some([e.radius_x(), e.radius_y()]),
            area: Some(e.area()),
            ..Self::new(kind, vec![xy(e.center())])
        }
    }

    pub fn rectangle(r: &Rectangle) -> Self {
        Self {
            area: Some(r.area()),
            ..Self::new("rectangle", vec![xy(r.p1()), xy(r.p2())])
        }
    }

    pub fn square(sq: &Square) -> Self {
        Self {
            kind: "square",
            ..Self::rectangle(sq.as_rectangle())
        }
    }

    pub fn triangle(t: &Triangle) -> Self {
        Self {
            area: Some(t.area()),
            ..Self::new("triangle", vec![xy(t.p1()), xy(t.p2()), xy(t.p3())])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn vertical_line_reports_inf_slope() {
        let line = Line::new(Point::new(2.0, 0.0), Point::new(2.0, 7.0)).unwrap();
        let v: Value = serde_json::to_value(Report::line(&line)).unwrap();
        assert_eq!(v["kind"], "line");
        assert_eq!(v["slope"], "inf");
        assert_eq!(v["length"], json!(7.0));
        assert!(v.get("area").is_none());
    }

    #[test]
    fn square_report_keeps_rectangle_metrics() {
        let sq = Square::new(Point::new(0.0, 0.0), Point::new(3.0, 3.0)).unwrap();
        let v: Value = serde_json::to_value(Report::square(&sq)).unwrap();
        assert_eq!(v["kind"], "square");
        assert_eq!(v["area"], json!(9.0));
        assert_eq!(v["points"], json!([[0.0, 0.0], [3.0, 3.0]]));
    }

    #[test]
    fn circle_is_labelled() {
        let c = Ellipse::circle(Point::new(1.0, 1.0), 2.0).unwrap();
        let r = Report::ellipse(&c);
        assert_eq!(r.kind, "circle");
        assert_eq!(r.radii, Some([2.0, 2.0]));
    }
}
