// Domain layer: models and ports. Concrete page, HTTP and config implementations live elsewhere.

pub mod model;
pub mod ports;
