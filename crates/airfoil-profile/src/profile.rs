//! Sampled 2D section: thickness, camber, and surface offsets per station.

use airfoil_math::{dvec2, DVec2};
use tracing::debug;

use crate::formula::{camber_at, camber_slope_at, thickness_at};
use crate::AirfoilRequest;

/// A NACA section sampled at `n` chord stations.
///
/// Every array has one entry per station. The first and last stations always
/// have zero thickness and zero camber, so the upper and lower surfaces meet
/// at the leading and trailing edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Chord positions `x_i`, increasing from 0 to 1.
    pub stations: Vec<f64>,
    /// Half-thickness at each station.
    pub thickness: Vec<f64>,
    /// Mean line height at each station.
    pub camber: Vec<f64>,
    /// Displacement of the upper surface from the mean line; the lower surface
    /// uses the negation.
    pub offsets: Vec<DVec2>,
}

impl Profile {
    pub fn generate(request: &AirfoilRequest) -> Self {
        let n = request.resolution.get();
        let code = request.code;
        let spacing = request.options.spacing;
        let t = code.thickness();
        let (m, p) = (code.max_camber(), code.camber_position());

        let stations: Vec<f64> = (0..n).map(|i| spacing.station(i, n)).collect();
        let interior = |i: usize| i > 0 && i < n - 1;

        let thickness: Vec<f64> = stations
            .iter()
            .enumerate()
            .map(|(i, &x)| if interior(i) { thickness_at(t, x) } else { 0.0 })
            .collect();

        let (camber, offsets): (Vec<f64>, Vec<DVec2>) = if code.is_symmetric() {
            let offsets = thickness.iter().map(|&ti| dvec2(0.0, ti)).collect();
            (vec![0.0; n], offsets)
        } else {
            let camber = stations
                .iter()
                .enumerate()
                .map(|(i, &x)| if interior(i) { camber_at(m, p, x) } else { 0.0 })
                .collect();
            let offsets = stations
                .iter()
                .zip(&thickness)
                .map(|(&x, &ti)| {
                    let (sin, cos) = camber_slope_at(m, p, x).atan().sin_cos();
                    dvec2(-ti * sin, ti * cos)
                })
                .collect();
            (camber, offsets)
        };

        debug!(
            code = %code,
            stations = n,
            symmetric = code.is_symmetric(),
            "generated airfoil profile"
        );

        Self {
            stations,
            thickness,
            camber,
            offsets,
        }
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Upper surface point at station `i`.
    pub fn upper(&self, i: usize) -> DVec2 {
        dvec2(self.stations[i], self.camber[i]) + self.offsets[i]
    }

    /// Lower surface point at station `i`.
    pub fn lower(&self, i: usize) -> DVec2 {
        dvec2(self.stations[i], self.camber[i]) - self.offsets[i]
    }
}
