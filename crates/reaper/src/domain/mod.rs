#![forbid(unsafe_code)]

mod descriptor;
mod pid;
mod signature;

pub use descriptor::Descriptor;
pub use pid::parse_pid;
pub use signature::TargetSignature;
