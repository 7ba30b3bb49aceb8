use async_trait::async_trait;

/// An authenticated principal, as embedded in issued tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub username: String,
    pub role: String,
}

/// Identity lookup used by the token service.
///
/// Returns the matching identity, or `None` when the username is unknown or
/// the password does not match.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn authenticate(&self, username: &str, password: &str) -> Option<Identity>;
}

/// Single hard-coded demo account
#[derive(Debug, Clone)]
pub struct DemoCredentials {
    identity: Identity,
    password: String,
}

impl DemoCredentials {
    pub fn new(identity: Identity, password: impl Into<String>) -> Self {
        Self {
            identity,
            password: password.into(),
        }
    }
}

impl Default for DemoCredentials {
    fn default() -> Self {
        Self::new(
            Identity {
                id: "u1".to_string(),
                username: "admin".to_string(),
                role: "admin".to_string(),
            },
            "password123",
        )
    }
}

#[async_trait]
impl CredentialStore for DemoCredentials {
    async fn authenticate(&self, username: &str, password: &str) -> Option<Identity> {
        (username == self.identity.username && password == self.password)
            .then(|| self.identity.clone())
    }
}
