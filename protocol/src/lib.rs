mod export;
mod jsonrpc_lite;
mod protocol;

pub use export::generate_ts;
pub use jsonrpc_lite::*;
pub use protocol::*;
