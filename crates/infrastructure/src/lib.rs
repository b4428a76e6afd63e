//! mockdns infrastructure: the hickory-server request handler, UDP/TCP
//! listeners, upstream transports and on-disk loaders.
pub mod dns;
pub mod system;
pub mod zone_loader;

pub use zone_loader::ZoneLoader;
