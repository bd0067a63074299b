// Domain layer: billing models, the money type and the ports (interfaces) implemented by adapters.

pub mod model;
pub mod money;
pub mod ports;
