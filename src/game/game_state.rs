use std::fmt;

use crate::log;

use super::game_rng::GameRng;
use super::settings::CubeSettings;
use super::snake::Snake;
use super::topology;
use super::types::{Cell, Command, Direction, Point};

/// The board: the cross net of a cube with `face_size` cells per face edge,
/// plus the single snake living on it.
///
/// Commands mutate the state in place; once the snake dies the state is
/// terminal and every further command is inert.
#[derive(Clone, Debug)]
pub struct CubeGameState {
    cells: Vec<Cell>,
    face_size: usize,
    snake: Snake,
    alive: bool,
}

impl CubeGameState {
    pub fn new(face_size: usize) -> Self {
        let rows = 3 * face_size;
        let cols = 4 * face_size;
        let mut cells = vec![Cell::NotExist; rows * cols];
        for row in 0..rows {
            for col in 0..cols {
                if topology::is_on_net(face_size, Point::new(row, col)) {
                    cells[row * cols + col] = Cell::Empty;
                }
            }
        }

        // Three segments on the central row of the leftmost middle face,
        // heading rightward.
        let start_row = rows / 2;
        let segments = [
            Point::new(start_row, face_size + 2),
            Point::new(start_row, face_size + 1),
            Point::new(start_row, face_size),
        ];
        let snake = Snake::new(&segments, Direction::Right);

        let mut state = Self {
            cells,
            face_size,
            snake,
            alive: true,
        };
        for segment in segments {
            state.set_cell(segment, Cell::Occupied);
        }
        state
    }

    pub fn from_settings(settings: &CubeSettings) -> Self {
        Self::new(settings.face_size)
    }

    pub fn face_size(&self) -> usize {
        self.face_size
    }

    pub fn row_count(&self) -> usize {
        3 * self.face_size
    }

    pub fn col_count(&self) -> usize {
        4 * self.face_size
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn head(&self) -> Option<Point> {
        self.snake.segments().front().copied()
    }

    pub fn head_direction(&self) -> Direction {
        self.snake.head_dir
    }

    pub fn reference_direction(&self) -> Direction {
        self.snake.ref_dir
    }

    pub fn body(&self) -> impl Iterator<Item = Point> + '_ {
        self.snake.segments().iter().copied()
    }

    pub fn body_len(&self) -> usize {
        self.snake.len()
    }

    pub fn get(&self, pos: Point) -> Option<Cell> {
        if pos.row >= self.row_count() || pos.col >= self.col_count() {
            return None;
        }
        Some(self.cell(pos))
    }

    fn cell(&self, pos: Point) -> Cell {
        self.cells[pos.row * self.col_count() + pos.col]
    }

    fn set_cell(&mut self, pos: Point, cell: Cell) {
        let index = pos.row * self.col_count() + pos.col;
        self.cells[index] = cell;
    }

    pub fn process(&mut self, command: Command) {
        if !self.alive {
            return;
        }

        match command {
            Command::TurnLeft => self.apply_turn(self.snake.head_dir.turned_left()),
            Command::TurnRight => self.apply_turn(self.snake.head_dir.turned_right()),
            Command::Forward => self.advance(),
        }
    }

    /// Flips a cell between `Empty` and `Food`; any other cell state is left
    /// alone. Returns whether anything changed. This is the only mutation
    /// hook the input collaborator needs besides `process`.
    pub fn toggle_food(&mut self, pos: Point) -> bool {
        match self.get(pos) {
            Some(Cell::Empty) => {
                self.set_cell(pos, Cell::Food);
                true
            }
            Some(Cell::Food) => {
                self.set_cell(pos, Cell::Empty);
                true
            }
            _ => false,
        }
    }

    /// Places food on a random empty cell, trying up to 100 positions.
    pub fn spawn_food(&mut self, rng: &mut GameRng) -> Option<Point> {
        for _ in 0..100 {
            let row = rng.random_range(0..self.row_count());
            let col = rng.random_range(0..self.col_count());
            let pos = Point::new(row, col);

            if self.cell(pos) == Cell::Empty {
                self.set_cell(pos, Cell::Food);
                log!("Food spawned at ({}, {})", pos.row, pos.col);
                return Some(pos);
            }
        }
        None
    }

    fn apply_turn(&mut self, candidate: Direction) {
        // Reversing into the neck is rejected silently. "Backwards" is
        // judged against the reference frame, not the current heading; the
        // frame rotates with the snake as it crosses between faces.
        if !candidate.is_opposite(&self.snake.ref_dir) {
            self.snake.head_dir = candidate;
        }
    }

    fn advance(&mut self) {
        let (next, next_dir) =
            topology::step(self.face_size, self.snake.head(), self.snake.head_dir);

        // Crossing an edge redefines forward for both rendering and turn
        // validity.
        self.snake.head_dir = next_dir;
        self.snake.ref_dir = next_dir;

        match self.cell(next) {
            Cell::Occupied => self.die(next),
            Cell::Empty => {
                let tail = self
                    .snake
                    .pop_tail()
                    .expect("Snake body should never be empty");
                self.set_cell(tail, Cell::Empty);
                self.push_head(next);
            }
            Cell::Food => {
                self.push_head(next);
                log!(
                    "Ate food at ({}, {}). Length: {}",
                    next.row,
                    next.col,
                    self.snake.len()
                );
            }
            cell @ (Cell::NotExist | Cell::Dead) => {
                unreachable!(
                    "Topology step landed on {:?} at ({}, {})",
                    cell, next.row, next.col
                )
            }
        }
    }

    fn push_head(&mut self, next: Point) {
        self.snake.push_head(next);
        self.set_cell(next, Cell::Occupied);
    }

    fn die(&mut self, at: Point) {
        self.alive = false;
        log!("Snake collided with itself at ({}, {})", at.row, at.col);
        while let Some(segment) = self.snake.pop_tail() {
            self.set_cell(segment, Cell::Dead);
        }
    }
}

impl fmt::Display for CubeGameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head = if self.alive { self.head() } else { None };
        for row in 0..self.row_count() {
            for col in 0..self.col_count() {
                let pos = Point::new(row, col);
                if head == Some(pos) {
                    write!(f, "{}", self.snake.head_dir.glyph())?;
                } else {
                    write!(f, "{}", self.cell(pos).glyph())?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
