//! Accumulator stack holding the displayed value and any pending operands.

use smallvec::SmallVec;

use crate::engine::MaskConfig;

const INLINE_CAPACITY: usize = 4;

#[derive(Debug, Clone, Default)]
pub struct NumberStack {
    values: SmallVec<[u64; INLINE_CAPACITY]>,
}

impl NumberStack {
    pub fn new() -> Self {
        Self {
            values: SmallVec::new(),
        }
    }

    /// Appends `value`. Capacity doubles once the inline slots are used up.
    pub fn push(&mut self, value: u64) {
        self.values.push(value);
    }

    /// Removes the top value; `None` on an empty stack is a normal outcome.
    pub fn pop(&mut self) -> Option<u64> {
        self.values.pop()
    }

    pub fn top(&self) -> Option<u64> {
        self.values.last().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    /// Drops every value but keeps the allocation.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Re-masks every stored value with `cfg`, bottom to top, without reordering.
    pub fn remask(&mut self, cfg: MaskConfig) {
        for value in self.values.iter_mut() {
            *value = cfg.apply(*value);
        }
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_is_lifo() {
        let mut stack = NumberStack::new();
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.top(), Some(2));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.top(), None);
    }

    #[test]
    fn grows_past_inline_capacity() {
        let mut stack = NumberStack::new();
        for value in 0..10 {
            stack.push(value);
        }
        assert_eq!(stack.len(), 10);
        assert!(stack.capacity() >= stack.len());
        assert_eq!(stack.as_slice()[9], 9);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut stack = NumberStack::new();
        for value in 0..8 {
            stack.push(value);
        }
        let capacity = stack.capacity();
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.capacity(), capacity);
    }

    #[test]
    fn remask_preserves_order() {
        let mut stack = NumberStack::new();
        stack.push(0x1FF);
        stack.push(0xABC);
        stack.remask(MaskConfig::with_width(4));
        assert_eq!(stack.as_slice(), &[0xF, 0xC]);
    }
}
