//! SecretSource port - where the manager's application secret comes from

/// Produces the `APPLICATION_SECRET` for manager containers
pub trait SecretSource {
    fn generate(&self) -> String;
}

/// Always returns the same secret. Used for `--manager-secret` and in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSecret(pub String);

impl SecretSource for FixedSecret {
    fn generate(&self) -> String {
        self.0.clone()
    }
}
