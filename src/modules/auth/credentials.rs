use std::collections::BTreeMap;

/// Fixed username/password table loaded from the settings profile.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    users: BTreeMap<String, String>,
}

impl CredentialStore {
    pub fn new(users: BTreeMap<String, String>) -> Self {
        Self { users }
    }

    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .is_some_and(|expected| expected == password)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CredentialStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
