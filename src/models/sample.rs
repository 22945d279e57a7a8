use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// One pen-contact observation.
///
/// `t` is seconds since the start of the stroke the sample belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
    pub t: f64,
}

impl SamplePoint {
    pub fn new(x: f64, y: f64, t: f64) -> Self {
        Self { x, y, t }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Samples of one continuous pen contact, in capture order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stroke {
    points: Vec<SamplePoint>,
}

impl Stroke {
    pub fn new(points: Vec<SamplePoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<SamplePoint>> for Stroke {
    fn from(points: Vec<SamplePoint>) -> Self {
        Self::new(points)
    }
}

/// The archived freeform drawing of a trial: strokes in the order drawn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drawing {
    strokes: Vec<Stroke>,
}

impl Drawing {
    pub fn new(strokes: Vec<Stroke>) -> Self {
        Self { strokes }
    }

    /// A drawing made of a single stroke.
    pub fn single_stroke(points: Vec<SamplePoint>) -> Self {
        Self::new(vec![Stroke::new(points)])
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// All samples flattened across strokes; stroke boundaries are dropped.
    pub fn points(&self) -> Vec<SamplePoint> {
        self.strokes
            .iter()
            .flat_map(|stroke| stroke.points().iter().copied())
            .collect()
    }

    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(Stroke::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }
}
