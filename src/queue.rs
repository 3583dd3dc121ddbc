use crate::cursors::RingCursors;
use crate::error::RingQueueError;

/// Fixed-capacity FIFO queue of integers backed by `capacity + 1` slots.
/// One slot stays reserved so a full queue and an empty queue never have
/// equal cursors.
#[derive(Clone, Debug)]
pub struct RingQueue {
    cursors: RingCursors,
    slots: Box<[i64]>,
}

impl RingQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            cursors: RingCursors::default(),
            slots: vec![0; capacity + 1].into_boxed_slice(),
        }
    }

    #[inline]
    fn ring_len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len() - 1
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cursors.len(self.ring_len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Stores `value` at the write cursor and echoes it back. The caller
    /// must ensure `len() < capacity()`; writing into a full queue advances
    /// the write cursor over unread slots.
    pub fn put(&mut self, value: i64) -> i64 {
        self.slots[self.cursors.head()] = value;
        self.cursors.head_forward(self.ring_len());

        value
    }

    /// Returns the slot at the read cursor and advances past it. The caller
    /// must ensure `len() > 0`; reading an empty queue yields whatever the
    /// slot last held.
    pub fn get(&mut self) -> i64 {
        let value = self.slots[self.cursors.tail()];
        self.cursors.tail_forward(self.ring_len());

        value
    }

    pub fn try_put(&mut self, value: i64) -> Result<i64, RingQueueError> {
        if self.is_full() {
            return Err(RingQueueError::QueueFullInsertionError(value));
        }

        Ok(self.put(value))
    }

    pub fn try_get(&mut self) -> Result<i64, RingQueueError> {
        if self.is_empty() {
            return Err(RingQueueError::QueueEmptyError);
        }

        Ok(self.get())
    }

    /// Rewinds both cursors to slot 0. Slot contents are left as-is; stale
    /// values become unreachable and are overwritten by later puts.
    #[inline]
    pub fn clear(&mut self) {
        self.cursors.reset();
    }
}
