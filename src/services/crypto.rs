use crate::errors::InternalError;
use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::{self, SaltString},
};

fn argon2_with_pepper(pepper: &str) -> Result<Argon2<'_>, InternalError> {
    Argon2::new_with_secret(
        pepper.as_bytes(),
        Algorithm::Argon2id,
        Version::V0x13,
        Params::default(),
    )
    .map_err(|e| InternalError::crypto("argon2_init", e.to_string()))
}

/// Hash a password with Argon2id, a random salt and the pepper as secret
///
/// Returns the PHC string stored in `admin.password_hash`.
pub fn hash_password(pepper: &str, password: &str) -> Result<String, InternalError> {
    let salt = SaltString::generate(&mut rand_core::OsRng);
    let argon2 = argon2_with_pepper(pepper)?;

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| InternalError::crypto("hash_password", e.to_string()))?;

    Ok(hash.to_string())
}

/// Check a password against a stored PHC string
///
/// A mismatch is `Ok(false)`. A malformed hash or bad pepper is an error.
pub fn verify_password(
    pepper: &str,
    password: &str,
    stored_hash: &str,
) -> Result<bool, InternalError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| InternalError::crypto("parse_password_hash", e.to_string()))?;
    let argon2 = argon2_with_pepper(pepper)?;

    match argon2.verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(InternalError::crypto("verify_password", e.to_string())),
    }
}
