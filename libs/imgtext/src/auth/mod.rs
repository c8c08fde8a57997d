mod gate;
mod types;

pub use gate::AccessGate;
pub use types::Credentials;
