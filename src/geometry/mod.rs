mod point;

pub use point::{centroid, normalize_angle, Point};
