//! Generator registry
//!
//! [`GeneratorKind`] names every generator and carries the metadata a front
//! end needs to present it: id, display name, description, default options
//! and the suggested length range.

use crate::entropy::{RandomSource, SystemRandom};
use crate::generators::{self, defaults};
use crate::options::{GeneratorOptions, MacFormat, StringFormat, UuidVersion};
use crate::{KeyError, Result};
use keyforge_common::LoggingTransformer;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Every available generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorKind {
    /// Secret key over alphanumerics and `+/`
    SecretKey,
    /// Alphanumeric API key with optional prefix
    ApiKey,
    /// Password from selectable character groups
    Password,
    /// Base64url JWT signing secret
    JwtSecret,
    /// RFC 4122 UUID
    Uuid,
    /// Random string with a selectable alphabet
    RandomString,
    /// `#rrggbb` colour
    HexColor,
    /// Base64 text
    Base64,
    /// Alphanumeric string
    Alphanumeric,
    /// Digit string
    Numeric,
    /// MAC address
    MacAddress,
}

impl GeneratorKind {
    /// All generators in presentation order
    pub const ALL: [Self; 11] = [
        Self::SecretKey,
        Self::ApiKey,
        Self::Password,
        Self::JwtSecret,
        Self::Uuid,
        Self::RandomString,
        Self::HexColor,
        Self::Base64,
        Self::Alphanumeric,
        Self::Numeric,
        Self::MacAddress,
    ];

    /// Stable identifier, e.g. `api-key`
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::SecretKey => "secret-key",
            Self::ApiKey => "api-key",
            Self::Password => "password",
            Self::JwtSecret => "jwt-secret",
            Self::Uuid => "uuid",
            Self::RandomString => "random-string",
            Self::HexColor => "hex-color",
            Self::Base64 => "base64",
            Self::Alphanumeric => "alphanumeric",
            Self::Numeric => "numeric",
            Self::MacAddress => "mac-address",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SecretKey => "Secret Key",
            Self::ApiKey => "API Key",
            Self::Password => "Password",
            Self::JwtSecret => "JWT Secret",
            Self::Uuid => "UUID",
            Self::RandomString => "Random String",
            Self::HexColor => "Hex Color",
            Self::Base64 => "Base64",
            Self::Alphanumeric => "Alphanumeric",
            Self::Numeric => "Numeric",
            Self::MacAddress => "MAC Address",
        }
    }

    /// One-line description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::SecretKey => "Generate cryptographically secure secret keys",
            Self::ApiKey => "Generate random API keys for applications",
            Self::Password => "Generate strong random passwords",
            Self::JwtSecret => "Generate secure keys for JWT token signing",
            Self::Uuid => "Generate RFC 4122 compliant UUIDs",
            Self::RandomString => "Generate random strings with custom character sets",
            Self::HexColor => "Generate random hexadecimal color codes",
            Self::Base64 => "Generate random Base64 encoded strings",
            Self::Alphanumeric => "Generate random alphanumeric strings",
            Self::Numeric => "Generate random numeric strings",
            Self::MacAddress => "Generate random MAC addresses",
        }
    }

    /// Options used when the caller sets nothing
    #[must_use]
    pub fn default_options(self) -> GeneratorOptions {
        let with_length = |length| GeneratorOptions {
            length: Some(length),
            ..GeneratorOptions::default()
        };
        let with_format = |format: &str| GeneratorOptions {
            format: Some(format.to_owned()),
            ..GeneratorOptions::default()
        };

        match self {
            Self::SecretKey => with_length(defaults::SECRET_KEY_LENGTH),
            Self::ApiKey => GeneratorOptions {
                prefix: Some(String::new()),
                ..with_length(defaults::API_KEY_LENGTH)
            },
            Self::Password => GeneratorOptions {
                include_symbols: Some(true),
                include_numbers: Some(true),
                include_uppercase: Some(true),
                include_lowercase: Some(true),
                ..with_length(defaults::PASSWORD_LENGTH)
            },
            Self::JwtSecret => with_length(defaults::JWT_SECRET_BYTES),
            Self::Uuid => with_format(UuidVersion::default().as_str()),
            Self::RandomString => GeneratorOptions {
                format: Some(StringFormat::default().as_str().to_owned()),
                ..with_length(defaults::RANDOM_STRING_LENGTH)
            },
            Self::HexColor => GeneratorOptions::default(),
            Self::Base64 => with_length(defaults::BASE64_LENGTH),
            Self::Alphanumeric => with_length(defaults::ALPHANUMERIC_LENGTH),
            Self::Numeric => with_length(defaults::NUMERIC_LENGTH),
            Self::MacAddress => with_format(MacFormat::default().as_str()),
        }
    }

    /// Suggested length range, or `None` when length is not an option
    #[must_use]
    pub fn length_range(self) -> Option<RangeInclusive<usize>> {
        match self {
            Self::Uuid | Self::HexColor | Self::MacAddress => None,
            Self::Password => Some(8..=64),
            Self::JwtSecret => Some(32..=128),
            _ => Some(8..=128),
        }
    }

    /// Values accepted by the `format` option, empty if unused
    #[must_use]
    pub fn formats(self) -> Vec<&'static str> {
        match self {
            Self::Uuid => UuidVersion::ALL.iter().map(|v| v.as_str()).collect(),
            Self::RandomString => StringFormat::ALL.iter().map(|v| v.as_str()).collect(),
            Self::MacAddress => MacFormat::ALL.iter().map(|v| v.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    /// Generate with the system random source
    ///
    /// `options` is layered over [`Self::default_options`].
    ///
    /// # Errors
    ///
    /// Returns an error for invalid options.
    pub fn generate(self, options: &GeneratorOptions) -> Result<String> {
        self.generate_with(&mut SystemRandom::new(), options)
    }

    /// Generate with the given random source
    ///
    /// # Errors
    ///
    /// Returns an error for invalid options.
    pub fn generate_with<R: RandomSource + ?Sized>(
        self,
        source: &mut R,
        options: &GeneratorOptions,
    ) -> Result<String> {
        let options = self.default_options().merge(options);

        let output = match self {
            Self::SecretKey => generators::secret_key(source, &options),
            Self::ApiKey => generators::api_key(source, &options),
            Self::Password => generators::password(source, &options),
            Self::JwtSecret => generators::jwt_secret(source, &options),
            Self::Uuid => generators::uuid(source, &options),
            Self::RandomString => generators::random_string(source, &options),
            Self::HexColor => Ok(generators::hex_color(source)),
            Self::Base64 => generators::base64_string(source, &options),
            Self::Alphanumeric => generators::alphanumeric(source, &options),
            Self::Numeric => generators::numeric(source, &options),
            Self::MacAddress => generators::mac_address(source, &options),
        }?;

        LoggingTransformer::log_generation(self.id(), &output);
        Ok(output)
    }
}

impl FromStr for GeneratorKind {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self> {
        let id = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == id)
            .ok_or_else(|| KeyError::UnknownGenerator(s.to_owned()))
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
