use nalgebra::Vector3;

/// Exponent per unit of scroll delta.
pub const ZOOM_RATE: f64 = 0.01;

/// Camera that zooms toward or away from a tracked body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomCamera {
    pub position: Vector3<f64>,
}

impl ZoomCamera {
    pub fn new(position: Vector3<f64>) -> Self {
        Self { position }
    }

    /// Move the camera rigidly, e.g. by the tracked body's displacement.
    pub fn translate(&mut self, offset: &Vector3<f64>) {
        self.position += offset;
    }

    pub fn distance_to(&self, target: &Vector3<f64>) -> f64 {
        (self.position - target).norm()
    }

    /// Rescale the distance to `target` by `exp(scroll_delta * ZOOM_RATE)`,
    /// keeping the viewing direction. Positive deltas zoom out.
    ///
    /// Returns the new distance, or `None` when the delta is zero or the camera
    /// sits on the target and has no direction to move along.
    pub fn apply_zoom(&mut self, target: &Vector3<f64>, scroll_delta: f64) -> Option<f64> {
        if scroll_delta == 0.0 || !scroll_delta.is_finite() {
            return None;
        }
        let offset = self.position - target;
        let distance = offset.norm();
        if distance == 0.0 {
            return None;
        }

        let new_distance = distance * (scroll_delta * ZOOM_RATE).exp();
        self.position = target + offset * (new_distance / distance);
        log::debug!("camera distance {:.6} -> {:.6}", distance, new_distance);
        Some(new_distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_is_multiplicative() {
        let target = Vector3::new(1.0, 0.0, 0.0);
        let mut cam = ZoomCamera::new(Vector3::new(1.0, 0.0, 2.0));

        let d = cam.apply_zoom(&target, 100.0).unwrap();
        assert!((d - 2.0 * std::f64::consts::E).abs() < 1e-12);

        // Zooming back by the same delta restores the distance
        cam.apply_zoom(&target, -100.0);
        assert!((cam.position - Vector3::new(1.0, 0.0, 2.0)).norm() < 1e-12);
    }

    #[test]
    fn zoom_keeps_direction() {
        let target = Vector3::zeros();
        let mut cam = ZoomCamera::new(Vector3::new(3.0, 4.0, 0.0));
        cam.apply_zoom(&target, -30.0);
        let dir = cam.position.normalize();
        assert!((dir - Vector3::new(0.6, 0.8, 0.0)).norm() < 1e-12);
        assert!(cam.distance_to(&target) < 5.0);
    }

    #[test]
    fn following_the_target_keeps_distance() {
        let mut target = Vector3::new(1.0, 0.0, 0.0);
        let mut cam = ZoomCamera::new(target + Vector3::new(0.0, 0.0, 3.0));

        for step in 0..50 {
            let angle = step as f64 * 0.1;
            let next = Vector3::new(angle.cos(), angle.sin(), 0.0);
            cam.translate(&(next - target));
            target = next;
            assert!((cam.distance_to(&target) - 3.0).abs() < 1e-12);
        }

        // Only scrolling changes the distance
        cam.apply_zoom(&target, -50.0);
        assert!((cam.distance_to(&target) - 3.0 * (-0.5f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn zero_delta_is_a_no_op() {
        let mut cam = ZoomCamera::new(Vector3::new(0.0, 0.0, 5.0));
        assert_eq!(cam.apply_zoom(&Vector3::zeros(), 0.0), None);
        assert_eq!(cam.position, Vector3::new(0.0, 0.0, 5.0));

        let mut on_target = ZoomCamera::new(Vector3::zeros());
        assert_eq!(on_target.apply_zoom(&Vector3::zeros(), 10.0), None);
    }
}
