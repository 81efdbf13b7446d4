#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector; `y` grows downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Integer grid coordinate of a snake segment or of the food.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    pub x: i32,
    pub y: i32,
}

impl Segment {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn moved(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Whether the segment lies in `[0, size)` on both axes.
    pub fn in_bounds(self, size: i32) -> bool {
        (0..size).contains(&self.x) && (0..size).contains(&self.y)
    }
}
