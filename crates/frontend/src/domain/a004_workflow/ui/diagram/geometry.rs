use contracts::domain::a004_workflow::Position;

pub const CANVAS_WIDTH: f64 = 600.0;
pub const CANVAS_HEIGHT: f64 = 400.0;
pub const NODE_WIDTH: f64 = 160.0;
pub const NODE_HEIGHT: f64 = 56.0;

/// Keeps a node box fully inside the canvas
pub fn clamp_to_canvas(position: Position) -> Position {
    Position::new(
        position.x.clamp(0.0, CANVAS_WIDTH - NODE_WIDTH),
        position.y.clamp(0.0, CANVAS_HEIGHT - NODE_HEIGHT),
    )
}

/// Cubic curve from the bottom centre of `source` to the top centre of `target`
pub fn edge_path(source: Position, target: Position) -> String {
    let (x1, y1) = (source.x + NODE_WIDTH / 2.0, source.y + NODE_HEIGHT);
    let (x2, y2) = (target.x + NODE_WIDTH / 2.0, target.y);
    let bend = ((y2 - y1).abs() / 2.0).max(24.0);
    format!(
        "M {x1} {y1} C {x1} {c1}, {x2} {c2}, {x2} {y2}",
        c1 = y1 + bend,
        c2 = y2 - bend,
    )
}

/// Pointer offset inside the grabbed node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grab {
    pub dx: f64,
    pub dy: f64,
}

impl Grab {
    pub fn at(pointer: Position, node: Position) -> Self {
        Self {
            dx: pointer.x - node.x,
            dy: pointer.y - node.y,
        }
    }

    /// Node position that keeps the grab point under `pointer`
    pub fn follow(&self, pointer: Position) -> Position {
        clamp_to_canvas(Position::new(pointer.x - self.dx, pointer.y - self.dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_keeps_node_inside() {
        let clamped = clamp_to_canvas(Position::new(-40.0, CANVAS_HEIGHT));
        assert_eq!(clamped, Position::new(0.0, CANVAS_HEIGHT - NODE_HEIGHT));
        let inside = Position::new(10.0, 20.0);
        assert_eq!(clamp_to_canvas(inside), inside);
    }

    #[test]
    fn test_grab_follows_pointer() {
        let grab = Grab::at(Position::new(120.0, 130.0), Position::new(100.0, 100.0));
        assert_eq!(grab.follow(Position::new(220.0, 230.0)), Position::new(200.0, 200.0));
    }

    #[test]
    fn test_edge_path_endpoints() {
        let path = edge_path(Position::new(0.0, 0.0), Position::new(0.0, 200.0));
        assert!(path.starts_with("M 80 56 C"));
        assert!(path.ends_with("80 200"));
    }
}
