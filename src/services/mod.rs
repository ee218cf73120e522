// Service exports
pub mod profile;
pub mod transport;

pub use profile::ProfileClient;
pub use transport::{ReqwestTransport, Transport, TransportError, TransportFailure};
