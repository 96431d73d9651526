pub mod charset;
pub mod error;
pub mod generator;
pub mod kdf;
pub mod profile;

pub use error::{Error, Result};
pub use generator::{generate_password, render_password, PasswordGenerator};
pub use kdf::derive_entropy;
pub use profile::{Digest, PasswordProfile, ProfileOverrides};
