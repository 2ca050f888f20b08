pub mod error;

// Judicial domain modules (canonical locations for all domain types)
pub mod alerta;
pub mod archivo;
pub mod common;
pub mod expediente;
pub mod reniec;
pub mod sesion;
pub mod usuario;

pub use error::*;

// Re-export all domain types
pub use alerta::*;
pub use archivo::*;
pub use common::*;
pub use expediente::*;
pub use reniec::*;
pub use sesion::*;
pub use usuario::*;
