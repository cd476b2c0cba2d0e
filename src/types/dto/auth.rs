use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Login form submitted by the admin page
///
/// Both fields are required; they are optional here so a missing one is
/// answered with the login page's HTML error instead of a parse error.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginForm {
    /// Admin username
    pub username: Option<String>,

    /// Admin password
    pub password: Option<String>,
}

impl LoginForm {
    /// Username and password, if both are present and non-blank
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let username = self.username.as_deref().filter(|u| !u.trim().is_empty())?;
        let password = self.password.as_deref().filter(|p| !p.is_empty())?;
        Some((username, password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(username: Option<&str>, password: Option<&str>) -> LoginForm {
        LoginForm {
            username: username.map(str::to_string),
            password: password.map(str::to_string),
        }
    }

    #[test]
    fn test_credentials_need_both_fields() {
        assert_eq!(
            form(Some("fouzi"), Some("secret")).credentials(),
            Some(("fouzi", "secret"))
        );
        assert_eq!(form(Some("fouzi"), None).credentials(), None);
        assert_eq!(form(None, Some("secret")).credentials(), None);
        assert_eq!(form(Some("  "), Some("secret")).credentials(), None);
        assert_eq!(form(Some("fouzi"), Some("")).credentials(), None);
    }
}
