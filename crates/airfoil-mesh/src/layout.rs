//! Index arithmetic for the lofted vertex ring.
//!
//! The vertex buffer holds four runs of `n` vertices, one per station:
//! top/front, bottom/front, top/back, bottom/back.

/// Named accessors into a `4n` vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingLayout {
    n: usize,
}

impl RingLayout {
    /// `n` is the station count and must be at least 3.
    pub fn new(n: usize) -> Self {
        debug_assert!(n >= 3, "need at least 3 stations, got {n}");
        Self { n }
    }

    pub fn stations(self) -> usize {
        self.n
    }

    pub fn top_front(self, i: usize) -> usize {
        i
    }

    pub fn bottom_front(self, i: usize) -> usize {
        self.n + i
    }

    pub fn top_back(self, i: usize) -> usize {
        2 * self.n + i
    }

    pub fn bottom_back(self, i: usize) -> usize {
        3 * self.n + i
    }

    /// Offset from a front-cap vertex to its back-cap twin.
    pub fn back_offset(self) -> usize {
        2 * self.n
    }

    pub fn vertex_count(self) -> usize {
        4 * self.n
    }

    /// Two strips of `n - 1` quads, two triangles each.
    pub fn index_count(self) -> usize {
        3 * 4 * (self.n - 1)
    }
}
