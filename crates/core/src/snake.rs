//! Snake body - ordered segments, tail at the front, head at the back.

use std::collections::VecDeque;

use crate::types::Pos;

#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    segments: VecDeque<Pos>,
}

impl Snake {
    /// A single-segment snake at `start`
    pub fn new(start: Pos) -> Self {
        let mut segments = VecDeque::with_capacity(64);
        segments.push_back(start);
        Self { segments }
    }

    /// Build a snake from segments ordered tail first, head last
    ///
    /// Returns `None` for an empty list.
    pub fn from_segments(segments: impl IntoIterator<Item = Pos>) -> Option<Self> {
        let segments: VecDeque<Pos> = segments.into_iter().collect();
        if segments.is_empty() {
            return None;
        }
        Some(Self { segments })
    }

    pub fn head(&self) -> Pos {
        // Never empty: every constructor and `pop_tail` keep one segment.
        self.segments[self.segments.len() - 1]
    }

    pub fn tail(&self) -> Pos {
        self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments from tail to head
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = Pos> + ExactSizeIterator + '_ {
        self.segments.iter().copied()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.segments.contains(&pos)
    }

    pub fn push_head(&mut self, pos: Pos) {
        self.segments.push_back(pos);
    }

    /// Drop the tail segment
    ///
    /// The last remaining segment is never removed.
    pub fn pop_tail(&mut self) -> Option<Pos> {
        if self.segments.len() <= 1 {
            return None;
        }
        self.segments.pop_front()
    }

    /// Shrink back to a single segment at `start`
    pub fn reset(&mut self, start: Pos) {
        self.segments.clear();
        self.segments.push_back(start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_is_last_tail_is_first() {
        let snake =
            Snake::from_segments([Pos::new(1, 1), Pos::new(2, 1), Pos::new(3, 1)]).unwrap();
        assert_eq!(snake.tail(), Pos::new(1, 1));
        assert_eq!(snake.head(), Pos::new(3, 1));
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn pop_tail_keeps_last_segment() {
        let mut snake = Snake::new(Pos::new(5, 5));
        assert_eq!(snake.pop_tail(), None);
        assert_eq!(snake.len(), 1);

        snake.push_head(Pos::new(6, 5));
        assert_eq!(snake.pop_tail(), Some(Pos::new(5, 5)));
        assert_eq!(snake.head(), Pos::new(6, 5));
    }

    #[test]
    fn from_segments_rejects_empty() {
        assert!(Snake::from_segments(Vec::new()).is_none());
    }

    #[test]
    fn reset_returns_to_one_segment() {
        let mut snake = Snake::from_segments([Pos::new(0, 0), Pos::new(1, 0)]).unwrap();
        snake.reset(Pos::new(9, 9));
        assert_eq!(snake.segments().collect::<Vec<_>>(), vec![Pos::new(9, 9)]);
    }
}
