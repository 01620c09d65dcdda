//! Credentials and the password check seam.
//!
//! Credentials live in a single registry list. A [`PasswordPolicy`] decides how
//! a new password is stored: the default [`Plaintext`] policy keeps the raw
//! text, [`Sha256Digest`] keeps a hex digest. Each [`Credential`] records its
//! [`PasswordForm`], so verification never guesses from the stored text and
//! switching the configured scheme does not lock out existing users.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// How [`Credential::password`] is encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordForm {
    /// Raw text. Registry entries without a `form` field are plain.
    #[default]
    Plain,
    /// Lowercase hex of an unsalted SHA-256 digest.
    Sha256,
}

impl PasswordForm {
    #[must_use]
    pub fn is_plain(&self) -> bool {
        *self == Self::Plain
    }
}

/// A registered username and its stored password.
///
/// Plain credentials serialize as `{username, password}`; other forms add a
/// `form` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Unique, case-sensitive.
    pub username: String,
    pub password: String,

    #[serde(default, skip_serializing_if = "PasswordForm::is_plain")]
    pub form: PasswordForm,
}

impl Credential {
    /// Plaintext credential, as stored by the default policy.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            form: PasswordForm::Plain,
        }
    }

    /// Checks a login attempt against the stored password.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        match self.form {
            PasswordForm::Plain => self.password == candidate,
            PasswordForm::Sha256 => self.password == sha256_hex(candidate),
        }
    }
}

/// Strategy for storing new passwords and checking login attempts.
pub trait PasswordPolicy: Send + Sync {
    /// Builds the registry entry for a new user.
    fn seal(&self, username: &str, password: &str) -> Credential;

    /// Checks a login attempt. The stored form decides, not the policy.
    fn verify(&self, stored: &Credential, candidate: &str) -> bool {
        stored.matches(candidate)
    }
}

/// Stores passwords as given.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plaintext;

impl PasswordPolicy for Plaintext {
    fn seal(&self, username: &str, password: &str) -> Credential {
        Credential::new(username, password)
    }
}

/// Stores unsalted SHA-256 digests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Digest;

impl PasswordPolicy for Sha256Digest {
    fn seal(&self, username: &str, password: &str) -> Credential {
        Credential {
            username: username.to_string(),
            password: sha256_hex(password),
            form: PasswordForm::Sha256,
        }
    }
}

fn sha256_hex(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}
