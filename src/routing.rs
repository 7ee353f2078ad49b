//! Link routing geometry.
//!
//! Links are drawn as orthogonal connectors with a single 45° cut: a straight
//! leg, a diagonal leg, then a straight leg of the same length as the first.
//! Pairs that are already aligned (same column, same row, or exact diagonal)
//! get one straight segment.
//!
//! The endpoint with the greater x always acts as the origin, so a link looks
//! the same whichever endpoint the user started from.

const SHAPE_TOLERANCE: f64 = 1e-9;

/// One relative move of a routed path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Leg {
    Horizontal(f64),
    Vertical(f64),
    Diagonal(f64, f64),
}

impl Leg {
    pub fn delta(&self) -> (f64, f64) {
        match *self {
            Self::Horizontal(dx) => (dx, 0.0),
            Self::Vertical(dy) => (0.0, dy),
            Self::Diagonal(dx, dy) => (dx, dy),
        }
    }

    /// Extent along the leg's axis (for diagonals, the per-axis extent)
    pub fn length(&self) -> f64 {
        match *self {
            Self::Horizontal(d) | Self::Vertical(d) => d.abs(),
            Self::Diagonal(dx, _) => dx.abs(),
        }
    }
}

/// Routed path between two grid positions.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkPath {
    Straight {
        from: (f64, f64),
        to: (f64, f64),
    },
    Elbow {
        from: (f64, f64),
        legs: [Leg; 3],
    },
}

impl LinkPath {
    pub fn is_straight(&self) -> bool {
        matches!(self, Self::Straight { .. })
    }

    pub fn legs(&self) -> &[Leg] {
        match self {
            Self::Straight { .. } => &[],
            Self::Elbow { legs, .. } => legs,
        }
    }

    /// Absolute vertices from origin to end
    pub fn vertices(&self) -> Vec<(f64, f64)> {
        match self {
            Self::Straight { from, to } => vec![*from, *to],
            Self::Elbow { from, legs } => {
                let mut at = *from;
                let mut vertices = Vec::with_capacity(legs.len() + 1);
                vertices.push(at);
                for leg in legs {
                    let (dx, dy) = leg.delta();
                    at = (at.0 + dx, at.1 + dy);
                    vertices.push(at);
                }
                vertices
            }
        }
    }

    /// Same polyline, traversed in either direction
    pub fn same_shape(&self, other: &LinkPath) -> bool {
        let a = self.vertices();
        let mut b = other.vertices();
        if a.len() != b.len() {
            return false;
        }
        let close = |a: &[(f64, f64)], b: &[(f64, f64)]| {
            a.iter().zip(b).all(|(p, q)| {
                (p.0 - q.0).abs() < SHAPE_TOLERANCE && (p.1 - q.1).abs() < SHAPE_TOLERANCE
            })
        };
        if close(&a, &b) {
            return true;
        }
        b.reverse();
        close(&a, &b)
    }

    /// SVG path data
    pub fn to_svg(&self) -> String {
        match self {
            Self::Straight { from, to } => {
                format!("M{},{}L{},{}", from.0, from.1, to.0, to.1)
            }
            Self::Elbow { from, legs } => {
                let mut d = format!("M{},{}", from.0, from.1);
                for leg in legs {
                    d.push_str(&match *leg {
                        Leg::Horizontal(dx) => format!("h{dx}"),
                        Leg::Vertical(dy) => format!("v{dy}"),
                        Leg::Diagonal(dx, dy) => format!("l{dx},{dy}"),
                    });
                }
                d
            }
        }
    }
}

/// Route a link between `(x1, y1)` and `(x2, y2)`.
pub fn route(x1: f64, y1: f64, x2: f64, y2: f64) -> LinkPath {
    crate::profile_scope!("route");

    let (x1, y1, x2, y2) = if x1 > x2 {
        (x1, y1, x2, y2)
    } else {
        (x2, y2, x1, y1)
    };

    let w = (x1 - x2).abs();
    let h = (y1 - y2).abs();
    if x1 == x2 || y1 == y2 || w == h {
        return LinkPath::Straight {
            from: (x1, y1),
            to: (x2, y2),
        };
    }

    // `x1 > x2` here, so every horizontal move is negative
    let e = -w.min(h);
    let t = (w.max(h) + e) / -2.0;
    let legs = if y1 > y2 {
        if h > w {
            [Leg::Vertical(t), Leg::Diagonal(e, e), Leg::Vertical(t)]
        } else {
            [Leg::Horizontal(t), Leg::Diagonal(e, e), Leg::Horizontal(t)]
        }
    } else if h > w {
        [Leg::Vertical(-t), Leg::Diagonal(e, -e), Leg::Vertical(-t)]
    } else {
        [Leg::Horizontal(t), Leg::Diagonal(e, -e), Leg::Horizontal(t)]
    };

    LinkPath::Elbow {
        from: (x1, y1),
        legs,
    }
}
