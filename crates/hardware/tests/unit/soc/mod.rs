/// Bus routing, device dispatch and interrupt aggregation.
pub mod interconnect;

/// RAM storage, byte order and image loading.
pub mod ram;
