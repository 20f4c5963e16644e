use std::collections::HashMap;

use nalgebra::{UnitQuaternion, Vector3};

/// Handle of a scene node driven by the simulation (a body or its orbit overlay).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

/// Receiver of per-tick transform updates.
///
/// Implemented by whatever owns the scene graph. The simulation only ever
/// writes through this trait and never reads back.
pub trait PresentationSink {
    fn set_local_position(&mut self, id: BodyId, position: Vector3<f64>);
    fn set_local_rotation(&mut self, id: BodyId, rotation: UnitQuaternion<f64>);
    fn set_local_scale(&mut self, id: BodyId, scale: Vector3<f64>);
}

/// Local transform of one node: scale, then rotate, then translate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vector3<f64>,
    pub rotation: UnitQuaternion<f64>,
    pub scale: Vector3<f64>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            rotation: UnitQuaternion::identity(),
            scale: Vector3::repeat(1.0),
        }
    }
}

impl Transform {
    /// Map a point from node-local to parent coordinates.
    pub fn apply(&self, local: &Vector3<f64>) -> Vector3<f64> {
        self.position + self.rotation * local.component_mul(&self.scale)
    }
}

/// Sink that keeps the latest transform of every node it has been sent.
#[derive(Debug, Default)]
pub struct TransformSink {
    nodes: HashMap<BodyId, Transform>,
    writes: usize,
}

impl TransformSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: BodyId) -> Option<&Transform> {
        self.nodes.get(&id)
    }

    /// Total number of setter calls received.
    pub fn writes(&self) -> usize {
        self.writes
    }

    fn node(&mut self, id: BodyId) -> &mut Transform {
        self.writes += 1;
        self.nodes.entry(id).or_default()
    }
}

impl PresentationSink for TransformSink {
    fn set_local_position(&mut self, id: BodyId, position: Vector3<f64>) {
        self.node(id).position = position;
    }

    fn set_local_rotation(&mut self, id: BodyId, rotation: UnitQuaternion<f64>) {
        self.node(id).rotation = rotation;
    }

    fn set_local_scale(&mut self, id: BodyId, scale: Vector3<f64>) {
        self.node(id).scale = scale;
    }
}

/// Discards every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl PresentationSink for NullSink {
    fn set_local_position(&mut self, _id: BodyId, _position: Vector3<f64>) {}
    fn set_local_rotation(&mut self, _id: BodyId, _rotation: UnitQuaternion<f64>) {}
    fn set_local_scale(&mut self, _id: BodyId, _scale: Vector3<f64>) {}
}
