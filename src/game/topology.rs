//! Stateless geometry of the cube net.
//!
//! The six `n x n` faces are unfolded into a `3n x 4n` sheet: the middle row
//! band holds a ring of four faces, the top and bottom bands hold one face
//! each over column band `[n, 2n)`. Stepping off a face edge lands on the
//! neighboring face of the folded cube, usually with a quarter turn.

use super::types::{Direction, Point};

/// Whether `pos` lies on the cross footprint of the net for the given face
/// size.
pub fn is_on_net(face_size: usize, pos: Point) -> bool {
    let n = face_size;
    if pos.row >= 3 * n || pos.col >= 4 * n {
        return false;
    }
    (n..2 * n).contains(&pos.row) || (n..2 * n).contains(&pos.col)
}

/// Steps one cell from `pos` in `dir`, resolving face crossings.
///
/// Total for every live cell and direction.
pub fn step(face_size: usize, pos: Point, dir: Direction) -> (Point, Direction) {
    if let Some(crossed) = boundary_step(face_size, pos, dir) {
        return crossed;
    }

    // Interior step. The column wrap is the seam of the middle four-face
    // ring; rows never wrap here because rows 0 and 3n-1 are handled by the
    // boundary rules. Underflow on the row arithmetic would mean a hole in
    // the rules.
    let width = 4 * face_size;
    let Point { row, col } = pos;
    let next = match dir {
        Direction::Up => Point::new(row - 1, col),
        Direction::Right => Point::new(row, (col + 1) % width),
        Direction::Down => Point::new(row + 1, col),
        Direction::Left => Point::new(row, (col + width - 1) % width),
    };
    (next, dir)
}

/// Whether stepping from `pos` in `dir` leaves the current face.
pub fn is_boundary(face_size: usize, pos: Point, dir: Direction) -> bool {
    if boundary_step(face_size, pos, dir).is_some() {
        return true;
    }
    // The seam of the middle ring keeps its heading but still changes face.
    (dir == Direction::Left && pos.col == 0)
        || (dir == Direction::Right && pos.col == 4 * face_size - 1)
}

/// The twelve edge-crossing rules, checked in order with the first match
/// winning; the order is what disambiguates the exact corner cells where two
/// edges meet.
fn boundary_step(face_size: usize, pos: Point, dir: Direction) -> Option<(Point, Direction)> {
    let n = face_size;
    let Point { row, col } = pos;

    // Crossings where row and column swap roles, with a quarter turn.
    if dir == Direction::Up && row == n && col < n {
        return Some((Point::new(col, row), Direction::Right));
    }
    if dir == Direction::Left && col == n && row < n {
        return Some((Point::new(col, row), Direction::Down));
    }
    if dir == Direction::Down && row == 2 * n - 1 && (2 * n..3 * n).contains(&col) {
        return Some((Point::new(col, row), Direction::Left));
    }
    if dir == Direction::Right && col == 2 * n - 1 && row >= 2 * n {
        return Some((Point::new(col, row), Direction::Up));
    }

    // Crossings into the far face of the middle ring, whose "up" axis runs
    // perpendicular to the top and bottom faces once folded; both
    // coordinates reflect and the heading reverses.
    if dir == Direction::Up && (row == 0 || (row == n && col >= 3 * n)) {
        return Some((Point::new(n - row, 5 * n - col - 1), Direction::Down));
    }
    if dir == Direction::Down && (row == 3 * n - 1 || (row == 2 * n - 1 && col >= 3 * n)) {
        return Some((Point::new(5 * n - 2 - row, 5 * n - col - 1), Direction::Up));
    }

    // Remaining quarter-turn crossings around the top and bottom faces.
    if dir == Direction::Right && col == 2 * n - 1 && row < n {
        return Some((Point::new(n, 3 * n - 1 - row), Direction::Down));
    }
    if dir == Direction::Up && row == n && (2 * n..3 * n).contains(&col) {
        return Some((Point::new(3 * n - 1 - col, 2 * n - 1), Direction::Left));
    }
    if dir == Direction::Left && col == n && row >= 2 * n {
        return Some((Point::new(2 * n - 1, 3 * n - 1 - row), Direction::Up));
    }
    if dir == Direction::Down && row == 2 * n - 1 && col < n {
        return Some((Point::new(3 * n - 1 - col, n), Direction::Right));
    }

    None
}
