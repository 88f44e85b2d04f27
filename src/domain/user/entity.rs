//! User entity and related types

use serde::Serialize;
use serde_json::{Map, Value};

/// Registration payload as sent by the client
///
/// Every field defaults to an empty string. Absence is reported by
/// validation, never by parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

impl RegistrationRequest {
    /// Decode a request body.
    ///
    /// Keys match case-insensitively and the last matching key in the
    /// document wins. Malformed JSON or non-string values leave the
    /// affected fields empty.
    pub fn from_body(body: &[u8]) -> Self {
        let object = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(object)) => object,
            _ => return Self::default(),
        };

        Self {
            name: string_field(&object, "name"),
            email: string_field(&object, "email"),
            password: string_field(&object, "password"),
            password_confirm: string_field(&object, "passwordConfirm"),
        }
    }

    /// Required fields with their wire names, in the order they are checked
    pub fn required_fields(&self) -> [(&'static str, &str); 4] {
        [
            ("Name", self.name.as_str()),
            ("Email", self.email.as_str()),
            ("Password", self.password.as_str()),
            ("PasswordConfirm", self.password_confirm.as_str()),
        ]
    }
}

fn string_field(object: &Map<String, Value>, key: &str) -> String {
    // `Map` keeps document order (preserve_order)
    let value = object
        .iter()
        .filter(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v)
        .last();

    match value {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// Persisted user
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Email")]
    email: String,
    /// Hasher output - never exposed in serialization
    #[serde(skip_serializing)]
    password_hash: String,
}

impl UserRecord {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

impl std::fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRecord")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"[hidden]")
            .finish()
    }
}

/// A freshly registered user paired with its signed token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredUser {
    #[serde(rename = "User")]
    pub user: UserRecord,
    #[serde(rename = "Token")]
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_body_all_fields() {
        let body = br#"{"name":"any-name","email":"email@mail.com","password":"password123","passwordConfirm":"password123"}"#;
        let request = RegistrationRequest::from_body(body);

        assert_eq!(request.name, "any-name");
        assert_eq!(request.email, "email@mail.com");
        assert_eq!(request.password, "password123");
        assert_eq!(request.password_confirm, "password123");
    }

    #[test]
    fn test_from_body_missing_field_is_empty() {
        let body = br#"{"email":"e@mail.com","password":"p","passwordConfirm":"p"}"#;
        let request = RegistrationRequest::from_body(body);

        assert_eq!(request.name, "");
        assert_eq!(request.email, "e@mail.com");
    }

    #[test]
    fn test_from_body_case_insensitive_keys() {
        let body = br#"{"Name":"n","EMAIL":"e","Password":"p","passwordconfirm":"p"}"#;
        let request = RegistrationRequest::from_body(body);

        assert_eq!(request.name, "n");
        assert_eq!(request.email, "e");
        assert_eq!(request.password, "p");
        assert_eq!(request.password_confirm, "p");
    }

    #[test]
    fn test_from_body_last_matching_key_wins() {
        let request = RegistrationRequest::from_body(br#"{"name":"a","NAME":"b"}"#);
        assert_eq!(request.name, "b");

        let request = RegistrationRequest::from_body(br#"{"NAME":"upper","name":"exact"}"#);
        assert_eq!(request.name, "exact");
    }

    #[test]
    fn test_from_body_non_string_value_is_empty() {
        let body = br#"{"name":42,"email":"e","password":null,"passwordConfirm":"p"}"#;
        let request = RegistrationRequest::from_body(body);

        assert_eq!(request.name, "");
        assert_eq!(request.email, "e");
        assert_eq!(request.password, "");
    }

    #[test]
    fn test_from_body_malformed() {
        assert_eq!(
            RegistrationRequest::from_body(b"{not json"),
            RegistrationRequest::default()
        );
        assert_eq!(
            RegistrationRequest::from_body(b"[1, 2]"),
            RegistrationRequest::default()
        );
    }

    #[test]
    fn test_required_fields_order() {
        let request = RegistrationRequest::default();
        let names: Vec<&str> = request.required_fields().iter().map(|(n, _)| *n).collect();

        assert_eq!(names, vec!["Name", "Email", "Password", "PasswordConfirm"]);
    }

    #[test]
    fn test_user_record_serialization_hides_hash() {
        let user = UserRecord::new("any-name", "email@mail.com", "hashed_password");
        let json = serde_json::to_string(&user).unwrap();

        assert_eq!(json, r#"{"Name":"any-name","Email":"email@mail.com"}"#);
    }

    #[test]
    fn test_user_record_debug_hides_hash() {
        let user = UserRecord::new("any-name", "email@mail.com", "hashed_password");
        let debug = format!("{:?}", user);

        assert!(!debug.contains("hashed_password"));
        assert!(debug.contains("any-name"));
    }

    #[test]
    fn test_registered_user_serialization() {
        let registered = RegisteredUser {
            user: UserRecord::new("any-name", "email@mail.com", "hashed_password"),
            token: "signed_token".to_string(),
        };
        let json = serde_json::to_string(&registered).unwrap();

        assert_eq!(
            json,
            r#"{"User":{"Name":"any-name","Email":"email@mail.com"},"Token":"signed_token"}"#
        );
    }
}
