//! Extrude a 2D profile into the front and back caps of a prism.

use airfoil_math::{dvec3, DVec3};
use airfoil_profile::Profile;
use tracing::debug;

use crate::RingLayout;

/// Z of the front cap.
pub const FRONT_Z: f64 = -1.0;
/// Z of the back cap.
pub const BACK_Z: f64 = 1.0;

/// Place the upper and lower surface of `profile` at both caps.
///
/// Back-cap vertices copy x and y bit-for-bit from their front-cap twins.
pub fn vertex_locations(profile: &Profile) -> Vec<DVec3> {
    let layout = RingLayout::new(profile.len());
    let mut positions = vec![DVec3::ZERO; layout.vertex_count()];

    for i in 0..layout.stations() {
        let top = profile.upper(i);
        let bottom = profile.lower(i);
        positions[layout.top_front(i)] = dvec3(top.x, top.y, FRONT_Z);
        positions[layout.bottom_front(i)] = dvec3(bottom.x, bottom.y, FRONT_Z);
    }

    let back = layout.back_offset();
    for i in 0..back {
        positions[i + back] = positions[i].with_z(BACK_Z);
    }

    debug!(vertices = positions.len(), "lofted profile");
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use airfoil_profile::AirfoilRequest;

    #[test]
    fn test_symmetric_locations() {
        let req = AirfoilRequest::parse("0012", "3").unwrap();
        let profile = Profile::generate(&req);
        let locs = vertex_locations(&profile);
        let t = profile.thickness[1];

        assert_eq!(locs.len(), 12);
        assert_eq!(locs[0], dvec3(0.0, 0.0, -1.0));
        assert_eq!(locs[1], dvec3(0.25, t, -1.0));
        assert_eq!(locs[2], dvec3(1.0, 0.0, -1.0));
        assert_eq!(locs[3], dvec3(0.0, 0.0, -1.0));
        assert_eq!(locs[4], dvec3(0.25, -t, -1.0));
        assert_eq!(locs[5], dvec3(1.0, 0.0, -1.0));
        assert_eq!(locs[7], dvec3(0.25, t, 1.0));
        assert_eq!(locs[10], dvec3(0.25, -t, 1.0));
    }
}
