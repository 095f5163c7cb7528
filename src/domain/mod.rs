// Domain layer: result records, categories and the ports the core talks through.

pub mod model;
pub mod ports;
