/**
 * Password Hashing
 *
 * Thin wrappers over bcrypt. The cost factor comes from `Settings`, so
 * tests can hash at the minimum cost.
 */

use bcrypt::BcryptError;

/// Hash a plaintext password
pub fn hash_password(plain: &str, cost: u32) -> Result<String, BcryptError> {
    bcrypt::hash(plain, cost)
}

/// Check a plaintext password against a stored hash
///
/// A malformed stored hash is an error, not a mismatch.
pub fn verify_password(plain: &str, hashed: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(plain, hashed)
}
