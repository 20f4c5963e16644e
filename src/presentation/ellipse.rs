use std::f64::consts::TAU;

use nalgebra::{UnitQuaternion, Vector3};

use super::sink::{BodyId, PresentationSink, Transform};
use crate::orbital::OrbitalElements;

/// Vertex count of the orbit line overlay.
pub const DEFAULT_VERTEX_COUNT: usize = 256;

/// Transform that maps the unit circle in the XY plane onto an orbit ellipse
/// with the central body at one focus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitEllipse {
    pub scale: Vector3<f64>,  // (b, a, 1)
    pub offset: Vector3<f64>, // ellipse centre relative to the focus
    pub rotation: UnitQuaternion<f64>,
}

impl OrbitEllipse {
    /// `None` when the elements do not describe a drawable ellipse
    /// (unbound, negative semi-major axis, or non-finite angles).
    pub fn from_elements(elements: &OrbitalElements) -> Option<Self> {
        let angles_finite = elements.inclination.is_finite()
            && elements.ascending_node.is_finite()
            && elements.argument_of_perihelion.is_finite();
        if !elements.is_bound() || !angles_finite {
            return None;
        }

        let a = elements.semimajor_axis;
        let rotation = elements.orbit_rotation();

        Some(OrbitEllipse {
            scale: Vector3::new(elements.semiminor_axis(), a, 1.0),
            offset: rotation * Vector3::new(0.0, -a * elements.eccentricity, 0.0),
            rotation,
        })
    }

    pub fn transform(&self) -> Transform {
        Transform {
            position: self.offset,
            rotation: self.rotation,
            scale: self.scale,
        }
    }

    /// Push scale, position and rotation to the overlay node `id`.
    pub fn publish(&self, sink: &mut dyn PresentationSink, id: BodyId) {
        sink.set_local_scale(id, self.scale);
        sink.set_local_position(id, self.offset);
        sink.set_local_rotation(id, self.rotation);
    }

    /// Closed polyline of the orbit in the reference frame.
    pub fn outline(&self, vertex_count: usize) -> Vec<Vector3<f64>> {
        let t = self.transform();
        unit_circle(vertex_count).iter().map(|p| t.apply(p)).collect()
    }
}

/// Unit circle in the XY plane; the last vertex repeats the first.
pub fn unit_circle(vertex_count: usize) -> Vec<Vector3<f64>> {
    let segments = vertex_count.saturating_sub(1).max(1) as f64;
    (0..vertex_count)
        .map(|i| {
            let theta = i as f64 * TAU / segments;
            Vector3::new(theta.cos(), theta.sin(), 0.0)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbital::elements_to_state;
    use crate::physics::gravity::GM_SUN;
    use crate::presentation::sink::TransformSink;

    fn mars_like() -> OrbitalElements {
        OrbitalElements::from_degrees(0.0934, 1.85, 49.56, 286.5, 1.524).unwrap()
    }

    #[test]
    fn perihelion_vertex_matches_initial_state() {
        let elements = mars_like();
        let ellipse = OrbitEllipse::from_elements(&elements).unwrap();
        let state = elements_to_state(&elements, GM_SUN);

        // (0, 1, 0) on the unit circle is the perihelion end of the major axis
        let p = ellipse.transform().apply(&Vector3::y());
        assert!((p - state.position).norm() < 1e-12, "{:?} vs {:?}", p, state.position);
    }

    #[test]
    fn outline_points_lie_on_focal_ellipse() {
        let elements = mars_like();
        let ellipse = OrbitEllipse::from_elements(&elements).unwrap();
        let a = elements.semimajor_axis;
        // Second focus sits 2ae from the Sun along the apse line
        let other_focus = ellipse.offset * 2.0;

        let outline = ellipse.outline(DEFAULT_VERTEX_COUNT);
        assert_eq!(outline.len(), DEFAULT_VERTEX_COUNT);
        for p in &outline {
            let sum = p.norm() + (p - other_focus).norm();
            assert!((sum - 2.0 * a).abs() < 1e-9, "focal sum {} != {}", sum, 2.0 * a);
        }
        assert!((outline[0] - outline[DEFAULT_VERTEX_COUNT - 1]).norm() < 1e-12, "outline must close");
    }

    #[test]
    fn circle_has_no_offset() {
        let elements = OrbitalElements::from_degrees(0.0, 10.0, 20.0, 30.0, 1.0).unwrap();
        let ellipse = OrbitEllipse::from_elements(&elements).unwrap();
        assert!(ellipse.offset.norm() < 1e-15);
        assert!((ellipse.scale - Vector3::new(1.0, 1.0, 1.0)).norm() < 1e-15);
    }

    #[test]
    fn unbound_orbit_is_not_drawn() {
        let mut elements = mars_like();
        elements.semimajor_axis = -3.0;
        elements.eccentricity = 1.4;
        assert!(OrbitEllipse::from_elements(&elements).is_none());
    }

    #[test]
    fn publish_sets_all_three_components() {
        let ellipse = OrbitEllipse::from_elements(&mars_like()).unwrap();
        let mut sink = TransformSink::new();
        ellipse.publish(&mut sink, BodyId(7));
        assert_eq!(sink.get(BodyId(7)), Some(&ellipse.transform()));
        assert_eq!(sink.writes(), 3);
    }

    #[test]
    fn unit_circle_endpoints() {
        let c = unit_circle(5);
        assert!((c[0] - Vector3::x()).norm() < 1e-15);
        assert!((c[1] - Vector3::y()).norm() < 1e-15);
        assert!((c[4] - Vector3::x()).norm() < 1e-12);
        assert_eq!(unit_circle(1).len(), 1);
    }
}
