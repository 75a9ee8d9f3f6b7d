//! The credential-verification boundary. The engine never compares a
//! plaintext password itself; it hands credentials to a verifier and
//! gets back a user record or nothing. A real deployment swaps
//! [`DemoAccounts`] for an implementation backed by an identity
//! provider or backend call.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use atku_common::user::{User, UserId, UserRole};

/// Demo credentials preloaded into [`DemoAccounts`].
pub const DEMO_ADMIN_EMAIL: &str = "admin@atku.com";
pub const DEMO_ADMIN_PASSWORD: &str = "admin123";
pub const DEMO_CUSTOMER_EMAIL: &str = "user@example.com";
pub const DEMO_CUSTOMER_PASSWORD: &str = "user123";

/// Verifies and registers account credentials.
pub trait CredentialVerifier: Send + Sync {
    /// The account's user record when the credentials match, else `None`.
    fn verify(&self, email: &str, password: &str) -> Option<User>;

    /// Create an account and return its fresh user record.
    fn register(&mut self, name: &str, email: &str, password: &str) -> User;
}

struct Account {
    user: User,
    /// Argon2id hash in PHC string format.
    password_hash: String,
}

/// In-memory account book seeded with one admin and one customer.
/// Registration always succeeds and performs no uniqueness or strength
/// checks; registered accounts live for the process only.
pub struct DemoAccounts {
    accounts: Vec<Account>,
}

impl DemoAccounts {
    pub fn new() -> Self {
        let mut book = Self {
            accounts: Vec::new(),
        };
        book.insert("Admin User", DEMO_ADMIN_EMAIL, DEMO_ADMIN_PASSWORD, UserRole::Admin);
        book.insert(
            "Regular User",
            DEMO_CUSTOMER_EMAIL,
            DEMO_CUSTOMER_PASSWORD,
            UserRole::Customer,
        );
        book
    }

    fn insert(&mut self, name: &str, email: &str, password: &str, role: UserRole) -> User {
        let user = User {
            id: UserId::new(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            phone: None,
            address: None,
        };
        self.accounts.push(Account {
            user: user.clone(),
            password_hash: hash_password(password),
        });
        user
    }
}

impl Default for DemoAccounts {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialVerifier for DemoAccounts {
    fn verify(&self, email: &str, password: &str) -> Option<User> {
        let account = self.accounts.iter().find(|a| a.user.email == email)?;
        verify_password(password, &account.password_hash).then(|| account.user.clone())
    }

    fn register(&mut self, name: &str, email: &str, password: &str) -> User {
        self.insert(name, email, password, UserRole::Customer)
    }
}

fn hash_password(password: &str) -> String {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .expect("argon2 hashing with default params should not fail")
        .to_string()
}

fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}
