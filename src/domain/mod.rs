// Domain layer: query model and the catalog port. No I/O here.

pub mod model;
pub mod ports;
