use std::hint::black_box;

/// Side-effect consumer that keeps workload results observable.
///
/// Every value produced by a benchmark body is routed through
/// [`Sink::consume`] or [`Sink::fold`], so the optimizer cannot prove the
/// work is dead and drop it. One sink is created per measured case.
#[derive(Debug, Default)]
pub struct Sink {
    checksum: u64,
    consumed: u64,
}

impl Sink {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            checksum: 0,
            consumed: 0,
        }
    }

    /// Pass a value through an opaque barrier and hand it back.
    #[inline]
    pub fn consume<T>(&mut self, value: T) -> T {
        self.consumed = self.consumed.wrapping_add(1);
        black_box(value)
    }

    /// Mix a value into the running checksum.
    #[inline]
    pub fn fold(&mut self, value: u64) {
        let mixed = black_box(value);
        self.checksum = self
            .checksum
            .rotate_left(5)
            .wrapping_add(mixed)
            .wrapping_mul(0x9E37_79B9_7F4A_7C15);
        self.consumed = self.consumed.wrapping_add(1);
    }

    #[must_use]
    pub const fn checksum(&self) -> u64 {
        self.checksum
    }

    /// Number of values routed through this sink.
    #[must_use]
    pub const fn consumed(&self) -> u64 {
        self.consumed
    }
}
