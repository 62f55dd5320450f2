//! 密码哈希
//!
//! [`HashedPassword`] 只能通过哈希明文密码或从数据库加载 PHC 字符串获得，
//! 因此用户模型中不可能出现明文密码。

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 占位哈希：argon2id 默认参数 (m=19456, t=2, p=1)，不对应任何密码。
///
/// 登录时用户不存在也对它做一次校验，耗时与真实用户一致。
const PLACEHOLDER_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c3RhZmYtcGxhY2Vob2xkcg$AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8";

/// Argon2 PHC-encoded password hash
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Hash a plaintext password using argon2 with a random salt
    pub fn hash(password: &str) -> Result<Self, argon2::password_hash::Error> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(Self(password_hash.to_string()))
    }

    /// Verify a plaintext password against this hash
    ///
    /// `Ok(false)` means a mismatch; `Err` means the stored hash itself is unusable.
    pub fn verify(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        let parsed_hash = PasswordHash::new(&self.0)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash that matches no password, for equal-cost verification of unknown users
    pub fn placeholder() -> Self {
        Self(PLACEHOLDER_HASH.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for HashedPassword {
    type Error = argon2::password_hash::Error;

    /// Accept only well-formed PHC strings (stored hashes)
    fn try_from(value: String) -> Result<Self, Self::Error> {
        PasswordHash::new(&value)?;
        Ok(Self(value))
    }
}

impl From<HashedPassword> for String {
    fn from(value: HashedPassword) -> Self {
        value.0
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HashedPassword(<redacted>)")
    }
}
