use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::ToPrimitive;
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::kdf;
use crate::profile::{PasswordProfile, ProfileOverrides};

/// Derivation front end carrying an instance-level profile.
///
/// Holds no other state; every call is a pure function of its inputs and
/// any number of generators may run concurrently.
#[derive(Debug, Clone, Default)]
pub struct PasswordGenerator {
    profile: PasswordProfile,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a generator whose instance profile is the defaults patched
    /// by `overrides`.
    pub fn with_profile(overrides: &ProfileOverrides) -> Self {
        Self {
            profile: PasswordProfile::default().apply(overrides),
        }
    }

    pub fn profile(&self) -> &PasswordProfile {
        &self.profile
    }

    /// Derives the password for `site`/`login` under the master password.
    ///
    /// Resolution order is defaults, then the instance profile, then
    /// `overrides`, later layers winning field by field. The resolved
    /// profile is validated up front; past that point derivation cannot
    /// fail.
    pub fn generate_password(
        &self,
        site: &str,
        login: &str,
        master_password: &str,
        overrides: Option<&ProfileOverrides>,
    ) -> Result<Zeroizing<String>> {
        let profile = match overrides {
            Some(overrides) => self.profile.apply(overrides),
            None => self.profile.clone(),
        };
        profile.validate()?;

        let entropy = kdf::derive_entropy(site, login, master_password, &profile)?;
        render_password(&entropy, &profile)
    }
}

/// One-shot derivation with the default instance profile.
pub fn generate_password(
    site: &str,
    login: &str,
    master_password: &str,
    overrides: Option<&ProfileOverrides>,
) -> Result<Zeroizing<String>> {
    PasswordGenerator::new().generate_password(site, login, master_password, overrides)
}

/// Expands a hex entropy string into the final password.
///
/// The entropy is one big base-16 integer consumed destructively by
/// repeated divmod, least-significant digit first: a bulk fill over the
/// combined active character set, then one mandatory character per
/// active rule, then pseudo-random insertion of those characters so they
/// do not sit at fixed positions.
pub fn render_password(entropy_hex: &str, profile: &PasswordProfile) -> Result<Zeroizing<String>> {
    let rules = profile.active_rules();
    if rules.is_empty() {
        return Err(Error::NoCharacterClassEnabled);
    }

    let full_set: String = rules.iter().map(|rule| rule.subset()).collect();
    let mut entropy =
        BigUint::parse_bytes(entropy_hex.as_bytes(), 16).ok_or(Error::InvalidEntropy)?;

    // Bulk phase. One position per active rule is reserved for the
    // mandatory characters, the rest comes straight off the entropy.
    let bulk_len = profile.length.saturating_sub(rules.len());
    let mut password: Zeroizing<Vec<u8>> = Zeroizing::new(Vec::with_capacity(profile.length));
    for _ in 0..bulk_len {
        let index = next_digit(&mut entropy, full_set.len());
        password.push(full_set.as_bytes()[index]);
    }

    // One character per rule, drawn from that rule's own subset so every
    // enabled class is represented regardless of what the bulk produced.
    let mut mandatory: Zeroizing<Vec<u8>> = Zeroizing::new(Vec::with_capacity(rules.len()));
    for rule in &rules {
        let subset = rule.subset().as_bytes();
        let index = next_digit(&mut entropy, subset.len());
        mandatory.push(subset[index]);
    }

    // Scatter the mandatory characters through the buffer, the insertion
    // point itself coming off the remaining entropy. An empty buffer
    // (length equal to the rule count) takes the first character as-is.
    for &ch in mandatory.iter() {
        if password.is_empty() {
            password.push(ch);
            continue;
        }
        let index = next_digit(&mut entropy, password.len());
        password.insert(index, ch);
    }

    Ok(Zeroizing::new(
        password.iter().map(|&b| char::from(b)).collect(),
    ))
}

/// Extracts one base-`modulus` digit, advancing the quotient. The
/// remainder is strictly below `modulus`, so the narrowing conversion
/// cannot lose information.
fn next_digit(entropy: &mut BigUint, modulus: usize) -> usize {
    let (quotient, remainder) = entropy.div_rem(&BigUint::from(modulus));
    *entropy = quotient;
    remainder.to_usize().unwrap_or(0)
}
