use std::ops::{Add, Sub};

/// A position in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Free-form drag of a widget by its handle. No bounds are enforced; the
/// widget may leave the screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragState {
    dragging: bool,
    offset: Point,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer pressed on the handle at `pointer` while the widget sits at
    /// `origin`.
    pub fn pointer_down(&mut self, pointer: Point, origin: Point) {
        self.dragging = true;
        self.offset = pointer - origin;
    }

    /// New widget origin for a pointer at `pointer`, or `None` when not
    /// dragging.
    pub fn pointer_move(&self, pointer: Point) -> Option<Point> {
        self.dragging.then(|| pointer - self.offset)
    }

    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn offset(&self) -> Point {
        self.offset
    }
}
