use glam::Vec2;

/// A coordinate in drawing-surface space (y grows downwards).
pub type Point = Vec2;

/// Ordered polyline; adjacent points form the drawn line segments.
///
/// Joined sub-sequences never repeat their shared vertex.
pub type PointSequence = Vec<Point>;

/// A base edge as `(start, end)`.
pub type Segment = (Point, Point);
