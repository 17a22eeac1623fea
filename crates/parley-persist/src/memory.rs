use parley_types::Turn;
use std::collections::VecDeque;

/// Number of recent turns a thread remembers.
pub const MEMORY_WINDOW_CAPACITY: usize = 5;

/// Bounded FIFO of the most recent turns in a thread
///
/// Pushing onto a full window evicts the oldest turn first, so the length
/// never exceeds the capacity.
#[derive(Debug, Clone)]
pub struct MemoryWindow {
    turns: VecDeque<Turn>,
    capacity: usize,
}

impl MemoryWindow {
    pub fn new() -> Self {
        Self::with_capacity(MEMORY_WINDOW_CAPACITY)
    }

    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            turns: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a turn, returning the evicted one if the window was full
    pub fn push(&mut self, turn: Turn) -> Option<Turn> {
        let evicted = if self.turns.len() == self.capacity {
            self.turns.pop_front()
        } else {
            None
        };
        self.turns.push_back(turn);
        evicted
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter()
    }

    /// Oldest-first copy of the window
    pub fn snapshot(&self) -> Vec<Turn> {
        self.turns.iter().cloned().collect()
    }
}

impl Default for MemoryWindow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(n: usize) -> Turn {
        Turn::new(format!("m{}", n), format!("r{}", n))
    }

    #[test]
    fn test_window_fills_up_to_capacity() {
        let mut window = MemoryWindow::new();
        for n in 0..MEMORY_WINDOW_CAPACITY {
            assert_eq!(window.push(turn(n)), None);
        }
        assert_eq!(window.len(), MEMORY_WINDOW_CAPACITY);
    }

    #[test]
    fn test_window_evicts_oldest_first() {
        let mut window = MemoryWindow::with_capacity(3);
        for n in 0..3 {
            window.push(turn(n));
        }

        assert_eq!(window.push(turn(3)), Some(turn(0)));
        assert_eq!(window.push(turn(4)), Some(turn(1)));
        assert_eq!(window.snapshot(), vec![turn(2), turn(3), turn(4)]);
    }

    #[test]
    fn test_window_never_exceeds_capacity() {
        let mut window = MemoryWindow::new();
        for n in 0..50 {
            window.push(turn(n));
            assert!(window.len() <= window.capacity());
        }
        assert_eq!(window.iter().next(), Some(&turn(45)));
    }

    #[test]
    fn test_zero_capacity_is_raised() {
        let mut window = MemoryWindow::with_capacity(0);
        window.push(turn(0));
        window.push(turn(1));
        assert_eq!(window.capacity(), 1);
        assert_eq!(window.snapshot(), vec![turn(1)]);
    }
}
