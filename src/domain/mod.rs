// Domain layer: record schema, per-file header and the ports the generator talks to.

pub mod model;
pub mod ports;
