use pbkdf2::pbkdf2_hmac;
use sha2::{Sha256, Sha512};
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::profile::{Digest, PasswordProfile};

/// Derives the entropy pool for one password.
///
/// The salt is `site`, `login` and the lowercase hex of the counter,
/// concatenated without separators. That exact layout is what makes the
/// output reproducible across implementations, so it must never change.
/// The derived key is returned hex-encoded: `key_length * 2` hex
/// characters that the renderer consumes as one base-16 integer.
pub fn derive_entropy(
    site: &str,
    login: &str,
    master_password: &str,
    profile: &PasswordProfile,
) -> Result<Zeroizing<String>> {
    if profile.iterations == 0 {
        return Err(Error::InvalidIterationCount(profile.iterations));
    }

    let salt = Zeroizing::new(format!("{}{}{:x}", site, login, profile.counter));
    let mut derived = Zeroizing::new(vec![0u8; profile.key_length]);

    match profile.digest {
        Digest::Sha256 => pbkdf2_hmac::<Sha256>(
            master_password.as_bytes(),
            salt.as_bytes(),
            profile.iterations,
            &mut derived,
        ),
        Digest::Sha512 => pbkdf2_hmac::<Sha512>(
            master_password.as_bytes(),
            salt.as_bytes(),
            profile.iterations,
            &mut derived,
        ),
    }

    Ok(Zeroizing::new(hex::encode(&derived)))
}
