//! The generator functions
//!
//! Each generator maps a random source and an options record to a string.
//! Fields the generator does not use are ignored; unset fields fall back to
//! the generator's default.

pub mod encoded;
pub mod identifier;
pub mod text;

pub use encoded::{base64_string, hex_color, jwt_secret};
pub use identifier::{mac_address, uuid, uuid_v1_at, uuid_v4};
pub use text::{alphanumeric, api_key, numeric, password, random_string, secret_key};

/// Default lengths, in characters unless noted
pub mod defaults {
    /// `secret-key`
    pub const SECRET_KEY_LENGTH: usize = 32;
    /// `api-key`
    pub const API_KEY_LENGTH: usize = 40;
    /// `password`
    pub const PASSWORD_LENGTH: usize = 16;
    /// `jwt-secret`, in random bytes before encoding
    pub const JWT_SECRET_BYTES: usize = 64;
    /// `random-string`
    pub const RANDOM_STRING_LENGTH: usize = 20;
    /// `base64`
    pub const BASE64_LENGTH: usize = 32;
    /// `alphanumeric`
    pub const ALPHANUMERIC_LENGTH: usize = 20;
    /// `numeric`
    pub const NUMERIC_LENGTH: usize = 10;
}
