pub mod response;
pub mod risk;
pub mod snapshot;

pub use response::*;
pub use risk::*;
pub use snapshot::*;
