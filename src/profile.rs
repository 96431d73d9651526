use std::fmt;
use std::str::FromStr;

use crate::charset::{Rule, RULES};
use crate::error::{Error, Result};

/// Hash primitive driving the key derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Digest {
    Sha256,
    Sha512,
}

impl Digest {
    pub fn as_str(self) -> &'static str {
        match self {
            Digest::Sha256 => "sha256",
            Digest::Sha512 => "sha512",
        }
    }
}

impl FromStr for Digest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sha256" => Ok(Digest::Sha256),
            "sha512" => Ok(Digest::Sha512),
            other => Err(Error::InvalidDigest(other.to_string())),
        }
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully resolved derivation parameters. Immutable once resolved; every
/// generation call reads one of these and mutates nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordProfile {
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub digest: Digest,
    pub iterations: u32,
    /// Derived-key length in raw bytes. The KDF output is hex-encoded, so
    /// the entropy string holds twice this many characters.
    pub key_length: usize,
    /// Final password length in characters.
    pub length: usize,
    /// Site rotation index; varies the salt without touching the master
    /// password.
    pub counter: u32,
    /// Algorithm version, informational only.
    pub version: u32,
}

impl Default for PasswordProfile {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            numbers: true,
            symbols: true,
            digest: Digest::Sha256,
            iterations: 100_000,
            key_length: 32,
            length: 16,
            counter: 1,
            version: 2,
        }
    }
}

impl PasswordProfile {
    /// Returns a copy of this profile with every `Some` field of
    /// `overrides` substituted in.
    pub fn apply(&self, overrides: &ProfileOverrides) -> Self {
        Self {
            lowercase: overrides.lowercase.unwrap_or(self.lowercase),
            uppercase: overrides.uppercase.unwrap_or(self.uppercase),
            numbers: overrides.numbers.unwrap_or(self.numbers),
            symbols: overrides.symbols.unwrap_or(self.symbols),
            digest: overrides.digest.unwrap_or(self.digest),
            iterations: overrides.iterations.unwrap_or(self.iterations),
            key_length: overrides.key_length.unwrap_or(self.key_length),
            length: overrides.length.unwrap_or(self.length),
            counter: overrides.counter.unwrap_or(self.counter),
            version: overrides.version.unwrap_or(self.version),
        }
    }

    /// The enabled character classes, in fixed rule order.
    pub fn active_rules(&self) -> Vec<Rule> {
        RULES
            .into_iter()
            .filter(|rule| self.rule_enabled(*rule))
            .collect()
    }

    fn rule_enabled(&self, rule: Rule) -> bool {
        match rule {
            Rule::Lowercase => self.lowercase,
            Rule::Uppercase => self.uppercase,
            Rule::Numbers => self.numbers,
            Rule::Symbols => self.symbols,
        }
    }

    /// Rejects profiles that cannot produce a compliant password. Runs
    /// before any derivation work; generation never fails mid-computation.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(Error::InvalidIterationCount(self.iterations));
        }

        let rule_count = self.active_rules().len();
        if rule_count == 0 {
            return Err(Error::NoCharacterClassEnabled);
        }

        // One position is reserved per enabled class, so the requested
        // length must cover at least the mandatory characters.
        if self.length < rule_count {
            return Err(Error::InvalidLength {
                length: self.length,
                minimum: rule_count,
            });
        }

        Ok(())
    }
}

/// Partial profile used for instance-level configuration and per-call
/// overrides. `None` fields fall through to the layer below; resolution
/// order is defaults, then instance, then per-call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileOverrides {
    pub lowercase: Option<bool>,
    pub uppercase: Option<bool>,
    pub numbers: Option<bool>,
    pub symbols: Option<bool>,
    pub digest: Option<Digest>,
    pub iterations: Option<u32>,
    pub key_length: Option<usize>,
    pub length: Option<usize>,
    pub counter: Option<u32>,
    pub version: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = PasswordProfile::default();
        assert!(profile.lowercase && profile.uppercase && profile.numbers && profile.symbols);
        assert_eq!(profile.digest, Digest::Sha256);
        assert_eq!(profile.iterations, 100_000);
        assert_eq!(profile.key_length, 32);
        assert_eq!(profile.length, 16);
        assert_eq!(profile.counter, 1);
        assert_eq!(profile.version, 2);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_apply_overrides_field_by_field() {
        let base = PasswordProfile::default();
        let overrides = ProfileOverrides {
            length: Some(20),
            symbols: Some(false),
            ..Default::default()
        };

        let resolved = base.apply(&overrides);
        assert_eq!(resolved.length, 20);
        assert!(!resolved.symbols);
        // Untouched fields keep the base values.
        assert!(resolved.lowercase);
        assert_eq!(resolved.iterations, 100_000);
        assert_eq!(resolved.counter, 1);
    }

    #[test]
    fn test_apply_is_non_destructive() {
        let base = PasswordProfile::default();
        let overrides = ProfileOverrides {
            counter: Some(7),
            ..Default::default()
        };

        let _ = base.apply(&overrides);
        assert_eq!(base.counter, 1);
    }

    #[test]
    fn test_active_rules_order() {
        let profile = PasswordProfile::default();
        assert_eq!(
            profile.active_rules(),
            vec![Rule::Lowercase, Rule::Uppercase, Rule::Numbers, Rule::Symbols]
        );

        let digits_and_symbols = PasswordProfile {
            lowercase: false,
            uppercase: false,
            ..PasswordProfile::default()
        };
        assert_eq!(
            digits_and_symbols.active_rules(),
            vec![Rule::Numbers, Rule::Symbols]
        );
    }

    #[test]
    fn test_validate_rejects_zero_iterations() {
        let profile = PasswordProfile {
            iterations: 0,
            ..PasswordProfile::default()
        };
        assert_eq!(profile.validate(), Err(Error::InvalidIterationCount(0)));
    }

    #[test]
    fn test_validate_rejects_no_classes() {
        let profile = PasswordProfile {
            lowercase: false,
            uppercase: false,
            numbers: false,
            symbols: false,
            ..PasswordProfile::default()
        };
        assert_eq!(profile.validate(), Err(Error::NoCharacterClassEnabled));
    }

    #[test]
    fn test_validate_rejects_length_below_rule_count() {
        let profile = PasswordProfile {
            length: 3,
            ..PasswordProfile::default()
        };
        assert_eq!(
            profile.validate(),
            Err(Error::InvalidLength {
                length: 3,
                minimum: 4
            })
        );

        let boundary = PasswordProfile {
            length: 4,
            ..PasswordProfile::default()
        };
        assert!(boundary.validate().is_ok());
    }

    #[test]
    fn test_digest_parsing() {
        assert_eq!("sha256".parse::<Digest>().unwrap(), Digest::Sha256);
        assert_eq!("sha512".parse::<Digest>().unwrap(), Digest::Sha512);
        assert_eq!(
            "md5".parse::<Digest>(),
            Err(Error::InvalidDigest("md5".to_string()))
        );
        assert_eq!(Digest::Sha512.to_string(), "sha512");
    }
}
