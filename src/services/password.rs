//! Argon2id password hashing.
//!
//! Hashing is CPU-intensive, so the async helpers run it on the blocking pool.

use anyhow::{Context, Result};
use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use tokio::task;

use crate::config::SecurityConfig;

#[derive(Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    pub fn new(config: &SecurityConfig) -> Result<Self> {
        let params = Params::new(
            config.argon2_memory_cost_kib,
            config.argon2_time_cost,
            config.argon2_parallelism,
            None,
        )
        .map_err(|e| anyhow::anyhow!("Invalid Argon2 params: {e}"))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash with a fresh random salt. Returns a PHC string.
    pub fn hash(&self, plaintext: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {e}"))?;

        Ok(hash.to_string())
    }

    /// Parameters are read back from the digest, so hashes made with older
    /// settings still verify. The comparison is constant-time.
    pub fn verify(&self, plaintext: &str, digest: &str) -> Result<bool> {
        let parsed = PasswordHash::new(digest)
            .map_err(|e| anyhow::anyhow!("Invalid password hash format: {e}"))?;

        Ok(self
            .argon2()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok())
    }

    pub async fn hash_blocking(&self, plaintext: &str) -> Result<String> {
        let hasher = self.clone();
        let plaintext = plaintext.to_string();

        task::spawn_blocking(move || hasher.hash(&plaintext))
            .await
            .context("Password hashing task panicked")?
    }

    pub async fn verify_blocking(&self, plaintext: &str, digest: &str) -> Result<bool> {
        let hasher = self.clone();
        let plaintext = plaintext.to_string();
        let digest = digest.to_string();

        task::spawn_blocking(move || hasher.verify(&plaintext, &digest))
            .await
            .context("Password verification task panicked")?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(&SecurityConfig {
            argon2_memory_cost_kib: 1024,
            argon2_time_cost: 1,
            ..SecurityConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = hasher();
        let digest = hasher.hash("hunter2").unwrap();

        assert!(digest.starts_with("$argon2id$"));
        assert!(!digest.contains("hunter2"));
        assert!(hasher.verify("hunter2", &digest).unwrap());
        assert!(!hasher.verify("hunter3", &digest).unwrap());
    }

    #[test]
    fn test_salt_differs_per_call() {
        let hasher = hasher();
        let a = hasher.hash("same").unwrap();
        let b = hasher.hash("same").unwrap();
        assert_ne!(a, b);
        assert!(hasher.verify("same", &a).unwrap());
        assert!(hasher.verify("same", &b).unwrap());
    }

    #[test]
    fn test_verify_rejects_garbage_digest() {
        assert!(hasher().verify("pw", "not-a-phc-string").is_err());
    }

    #[test]
    fn test_invalid_params() {
        let config = SecurityConfig {
            argon2_time_cost: 0,
            ..SecurityConfig::default()
        };
        assert!(PasswordHasher::new(&config).is_err());
    }

    #[tokio::test]
    async fn test_blocking_helpers() {
        let hasher = hasher();
        let digest = hasher.hash_blocking("async-pw").await.unwrap();
        assert!(hasher.verify_blocking("async-pw", &digest).await.unwrap());
        assert!(!hasher.verify_blocking("wrong", &digest).await.unwrap());
    }
}
