#[derive(Clone, Copy, Debug)]
pub(crate) struct RingCursors {
    head: usize,
    tail: usize,
}

impl RingCursors {
    #[inline(always)]
    pub const fn head(&self) -> usize {
        self.head
    }

    #[inline(always)]
    pub const fn tail(&self) -> usize {
        self.tail
    }

    #[inline(always)]
    pub const fn len(&self, ring_len: usize) -> usize {
        (self.head + ring_len - self.tail) % ring_len
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    #[inline(always)]
    pub fn head_forward(&mut self, ring_len: usize) {
        self.head = (self.head + 1) % ring_len;
    }

    #[inline(always)]
    pub fn tail_forward(&mut self, ring_len: usize) {
        self.tail = (self.tail + 1) % ring_len;
    }

    #[inline(always)]
    pub fn reset(&mut self) {
        self.head = 0;
        self.tail = 0;
    }
}

impl Default for RingCursors {
    fn default() -> Self {
        Self { head: 0, tail: 0 }
    }
}
