pub mod protocol;

pub use protocol::{Chain, ProtocolKind};
