use std::collections::{HashSet, VecDeque};

use super::types::{Direction, Point};

/// The snake body, front = head. The set mirrors the deque for O(1)
/// occupancy checks; a duplicate position while the snake lives means the
/// geometry table is wrong, so insertion asserts.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
    pub head_dir: Direction,
    pub ref_dir: Direction,
}

impl Snake {
    /// `segments` are given head-first.
    pub fn new(segments: &[Point], direction: Direction) -> Self {
        let mut snake = Self {
            body: VecDeque::new(),
            body_set: HashSet::new(),
            head_dir: direction,
            ref_dir: direction,
        };
        for &segment in segments.iter().rev() {
            snake.push_head(segment);
        }
        snake
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn segments(&self) -> &VecDeque<Point> {
        &self.body
    }

    pub fn occupies(&self, pos: Point) -> bool {
        self.body_set.contains(&pos)
    }

    pub fn push_head(&mut self, pos: Point) {
        assert!(
            self.body_set.insert(pos),
            "Duplicate body position at ({}, {})",
            pos.row,
            pos.col
        );
        self.body.push_front(pos);
    }

    pub fn pop_tail(&mut self) -> Option<Point> {
        let tail = self.body.pop_back()?;
        self.body_set.remove(&tail);
        Some(tail)
    }
}
