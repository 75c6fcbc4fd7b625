/// Identity established by the bearer middleware, available to protected
/// handlers through request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub username: String,
}
