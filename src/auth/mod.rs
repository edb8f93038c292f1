use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("bcrypt failure: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("hashing task aborted: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

/// One-way hash and verify for author passwords, bcrypt with a fixed cost.
///
/// Both operations run on the blocking thread pool: bcrypt at cost 10 takes
/// tens of milliseconds, long enough to stall an async worker.
#[derive(Clone)]
pub struct PasswordHasher {
    cost: u32,
    dummy_hash: String,
}

impl PasswordHasher {
    /// Fails if the cost is outside bcrypt's 4..=31 range, so a bad
    /// PRENSA_BCRYPT_COST stops the process at startup instead of breaking
    /// every registration later.
    pub fn new(cost: u32) -> Result<Self, AuthError> {
        // Hash of a fixed throwaway string. Login verifies against it when
        // the email has no match, keeping both 401 paths on the same timing.
        let dummy_hash = bcrypt::hash("prensa-dummy-password", cost)?;
        Ok(Self { cost, dummy_hash })
    }

    pub async fn hash(&self, password: String) -> Result<String, AuthError> {
        let cost = self.cost;
        let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
        Ok(hashed)
    }

    pub async fn verify(&self, password: String, hash: String) -> Result<bool, AuthError> {
        let ok = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
        Ok(ok)
    }

    /// Verifies against the precomputed dummy hash and discards the result.
    pub async fn burn_verify(&self, password: String) {
        let hash = self.dummy_hash.clone();
        let _ = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // bcrypt's minimum cost keeps these fast; the production cost comes from
    // config. The crate does not export its MIN_COST constant, so mirror it.
    const MIN_COST: u32 = 4;

    #[tokio::test]
    async fn hash_then_verify_roundtrip() -> Result<(), AuthError> {
        let hasher = PasswordHasher::new(MIN_COST)?;
        let hash = hasher.hash("secreto123".to_string()).await?;
        assert_ne!(hash, "secreto123");
        assert!(hasher.verify("secreto123".to_string(), hash.clone()).await?);
        assert!(!hasher.verify("otra-cosa".to_string(), hash).await?);
        Ok(())
    }

    #[tokio::test]
    async fn rehashing_the_same_password_yields_a_different_hash() -> Result<(), AuthError> {
        let hasher = PasswordHasher::new(MIN_COST)?;
        let first = hasher.hash("secreto123".to_string()).await?;
        let second = hasher.hash("secreto123".to_string()).await?;
        assert_ne!(first, second);
        Ok(())
    }

    #[test]
    fn out_of_range_cost_is_rejected() {
        assert!(PasswordHasher::new(99).is_err());
    }
}
