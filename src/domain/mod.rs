// Domain layer: core models and ports (interfaces). No dependencies on
// the concrete pipeline, storage or chart implementations.

pub mod model;
pub mod ports;
