use crate::geometry::Point;

/// The ordered points recorded during one gesture.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    pub fn new() -> Self {
        Self {
            points: Vec::with_capacity(256),
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn push(&mut self, p: Point) {
        self.points.push(p);
    }
}

impl From<Vec<Point>> for Stroke {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

/// Convert client (viewport) coordinates into canvas-local coordinates,
/// given the canvas bounding rect's top-left corner.
pub fn client_to_canvas(client: Point, canvas_origin: Point) -> Point {
    client - canvas_origin
}

/// Accumulates pointer samples into a stroke while a gesture is active.
///
/// Only one gesture exists at a time: `begin` throws away whatever was
/// recorded before. After `end` the stroke stays available for drawing
/// until the next `begin` or `reset`.
#[derive(Debug, Default)]
pub struct StrokeCapture {
    stroke: Stroke,
    drawing: bool,
}

impl StrokeCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new gesture at `p`.
    pub fn begin(&mut self, p: Point) {
        self.stroke = Stroke::new();
        self.stroke.push(p);
        self.drawing = true;
    }

    /// Append `p` if a gesture is in progress. Returns whether it was recorded.
    pub fn extend(&mut self, p: Point) -> bool {
        if self.drawing {
            self.stroke.push(p);
        }
        self.drawing
    }

    /// Finish the gesture and return a copy of the frozen stroke.
    /// `None` if no gesture was active.
    pub fn end(&mut self) -> Option<Stroke> {
        if !self.drawing {
            return None;
        }
        self.drawing = false;
        Some(self.stroke.clone())
    }

    /// Drop the stroke and any gesture in progress.
    pub fn reset(&mut self) {
        self.stroke = Stroke::new();
        self.drawing = false;
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Points of the current stroke, in progress or frozen.
    pub fn points(&self) -> &[Point] {
        self.stroke.points()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gesture_records_points_in_order() {
        let mut cap = StrokeCapture::new();
        cap.begin(Point::new(1.0, 1.0));
        assert!(cap.extend(Point::new(2.0, 1.0)));
        assert!(cap.extend(Point::new(3.0, 2.0)));
        let stroke = cap.end().unwrap();
        assert_eq!(
            stroke.points(),
            &[Point::new(1.0, 1.0), Point::new(2.0, 1.0), Point::new(3.0, 2.0)]
        );
        assert!(!cap.is_drawing());
        // Frozen stroke stays visible.
        assert_eq!(cap.points().len(), 3);
    }

    #[test]
    fn moves_outside_a_gesture_are_ignored() {
        let mut cap = StrokeCapture::new();
        assert!(!cap.extend(Point::new(5.0, 5.0)));
        assert!(cap.points().is_empty());

        cap.begin(Point::ZERO);
        cap.end();
        assert!(!cap.extend(Point::new(5.0, 5.0)));
        assert_eq!(cap.points().len(), 1);
    }

    #[test]
    fn end_without_begin_yields_nothing() {
        let mut cap = StrokeCapture::new();
        assert!(cap.end().is_none());
        cap.begin(Point::ZERO);
        assert!(cap.end().is_some());
        assert!(cap.end().is_none());
    }

    #[test]
    fn begin_discards_previous_stroke() {
        let mut cap = StrokeCapture::new();
        cap.begin(Point::ZERO);
        cap.extend(Point::ONE);
        cap.begin(Point::new(9.0, 9.0));
        assert_eq!(cap.points(), &[Point::new(9.0, 9.0)]);
    }

    #[test]
    fn reset_clears_everything() {
        let mut cap = StrokeCapture::new();
        cap.begin(Point::ZERO);
        cap.extend(Point::ONE);
        cap.reset();
        assert!(!cap.is_drawing());
        assert!(cap.points().is_empty());
        assert!(cap.end().is_none());
    }

    #[test]
    fn client_coordinates_are_offset_by_canvas_origin() {
        let p = client_to_canvas(Point::new(120.0, 90.0), Point::new(20.0, 40.0));
        assert_eq!(p, Point::new(100.0, 50.0));
    }
}
