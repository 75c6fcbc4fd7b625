use super::credentials::CredentialStore;
use super::interface::AuthError;
use crate::services::jwt::{IssuedToken, JwtService};

pub struct AuthService {
    credentials: CredentialStore,
    jwt_service: JwtService,
}

impl AuthService {
    pub fn new(credentials: CredentialStore, jwt_service: JwtService) -> Self {
        Self {
            credentials,
            jwt_service,
        }
    }

    pub fn login(&self, username: &str, password: &str) -> Result<IssuedToken, AuthError> {
        if !self.credentials.verify(username, password) {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(self.jwt_service.issue(username)?)
    }

    pub fn jwt(&self) -> &JwtService {
        &self.jwt_service
    }
}
