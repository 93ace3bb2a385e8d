// Domain layer: records, normalization rules and the ports adapters implement.

pub mod fallback;
pub mod model;
pub mod ports;
pub mod services;
