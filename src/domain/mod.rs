// Domain layer: the tour's types and the ports lessons print through.

pub mod model;
pub mod ports;
