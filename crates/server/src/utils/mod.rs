pub mod caller;
pub mod shutdown;
