// Domain layer: game models and the ports the job talks to.

pub mod model;
pub mod ports;
