//! Triangle indices for the two side strips of the lofted ring.

use crate::RingLayout;

/// Emit `12(n - 1)` indices: the whole upper strip, then the whole lower strip.
///
/// Triangles wind counter-clockwise seen from outside, so their geometric
/// normals agree with the vertex normals. The leading and trailing edges are
/// zero-width and get no faces of their own.
pub fn face_indices(layout: RingLayout) -> Vec<u32> {
    let mut indices = Vec::with_capacity(layout.index_count());
    let mut push = |tri: [usize; 3]| indices.extend(tri.map(|i| i as u32));
    let segments = layout.stations() - 1;

    for i in 0..segments {
        let (front, back) = (layout.top_front(i), layout.top_back(i));
        push([front, back, back + 1]);
        push([back + 1, front + 1, front]);
    }
    for i in 0..segments {
        let (front, back) = (layout.bottom_front(i), layout.bottom_back(i));
        push([back, front, front + 1]);
        push([front + 1, back + 1, back]);
    }

    indices
}
