// Domain layer: value types, response envelopes and ports. No HTTP types here.

pub mod model;
pub mod ports;
