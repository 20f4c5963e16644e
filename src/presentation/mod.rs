pub mod camera;
pub mod ellipse;
pub mod sink;

pub use camera::ZoomCamera;
pub use ellipse::{unit_circle, OrbitEllipse};
pub use sink::{BodyId, NullSink, PresentationSink, Transform, TransformSink};
