// 👤 Partial Profile Updates - Non-destructive shallow merges
// The base record is only ever borrowed; updates always build a new value

use crate::property::{Field, Record};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// PROFILE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub email: String,
}

fn profile_name(profile: &Profile) -> &String {
    &profile.name
}

fn profile_age(profile: &Profile) -> &u32 {
    &profile.age
}

fn profile_email(profile: &Profile) -> &String {
    &profile.email
}

impl Profile {
    pub const NAME: Field<Profile, String> = Field::new("name", profile_name);
    pub const AGE: Field<Profile, u32> = Field::new("age", profile_age);
    pub const EMAIL: Field<Profile, String> = Field::new("email", profile_email);

    pub const FIELDS: [&'static str; 3] = ["name", "age", "email"];

    pub fn new(name: impl Into<String>, age: u32, email: impl Into<String>) -> Self {
        Profile {
            name: name.into(),
            age,
            email: email.into(),
        }
    }
}

impl Record for Profile {
    fn has_field(&self, name: &str) -> bool {
        Self::FIELDS.contains(&name)
    }
}

// ============================================================================
// PROFILE PATCH
// ============================================================================

/// Any subset of `Profile` fields. `None` means "leave as is".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ProfilePatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: overwrite name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder: overwrite age
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Builder: overwrite email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.email.is_none()
    }
}

// ============================================================================
// UPDATES
// ============================================================================

/// New profile equal to `base` with every field set in `patch` overwritten.
pub fn update_profile(base: &Profile, patch: &ProfilePatch) -> Profile {
    Profile {
        name: patch.name.clone().unwrap_or_else(|| base.name.clone()),
        age: patch.age.unwrap_or(base.age),
        email: patch.email.clone().unwrap_or_else(|| base.email.clone()),
    }
}

/// Shallow merge of two dynamic records: keys in `patch` win.
///
/// A `null` in the patch is a present value and overwrites the base.
pub fn merge_records(base: &Map<String, Value>, patch: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = base.clone();
    for (key, value) in patch {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{get_property, has_all_keys};
    use serde_json::json;

    fn create_test_profile() -> Profile {
        Profile::new("Alice", 25, "alice@example.com")
    }

    #[test]
    fn test_update_profile_age_only() {
        let base = create_test_profile();
        let updated = update_profile(&base, &ProfilePatch::new().with_age(26));

        assert_eq!(updated, Profile::new("Alice", 26, "alice@example.com"));
    }

    #[test]
    fn test_update_profile_leaves_base_untouched() {
        let base = create_test_profile();
        let _ = update_profile(&base, &ProfilePatch::new().with_name("Bob").with_age(40));

        assert_eq!(base, create_test_profile());
    }

    #[test]
    fn test_update_profile_empty_patch_copies_base() {
        let base = create_test_profile();
        let patch = ProfilePatch::new();

        assert!(patch.is_empty());
        assert_eq!(update_profile(&base, &patch), base);
    }

    #[test]
    fn test_update_profile_every_field() {
        let base = create_test_profile();
        let patch = ProfilePatch::new()
            .with_name("Bob")
            .with_age(31)
            .with_email("bob@example.com");

        assert_eq!(update_profile(&base, &patch), Profile::new("Bob", 31, "bob@example.com"));
    }

    #[test]
    fn test_patch_from_partial_json() {
        let patch: ProfilePatch = serde_json::from_value(json!({"email": "new@example.com"})).unwrap();
        let updated = update_profile(&create_test_profile(), &patch);

        assert_eq!(updated.email, "new@example.com");
        assert_eq!(updated.name, "Alice");
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({"email": "new@example.com"}));
    }

    #[test]
    fn test_profile_fields_and_keys() {
        let profile = create_test_profile();

        assert_eq!(get_property(&profile, Profile::EMAIL), "alice@example.com");
        assert!(has_all_keys(&profile, &["name", "age"]));
        assert!(!has_all_keys(&profile, &["name", "age", "address"]));
    }

    #[test]
    fn test_merge_records() {
        let base = json!({"name": "Alice", "age": 25, "email": "alice@example.com"});
        let patch = json!({"age": 26, "nickname": null});

        let base = base.as_object().unwrap();
        let merged = merge_records(base, patch.as_object().unwrap());

        assert_eq!(
            Value::Object(merged),
            json!({"name": "Alice", "age": 26, "email": "alice@example.com", "nickname": null})
        );
        assert_eq!(base.get("age"), Some(&json!(25)));
        assert!(!base.contains_key("nickname"));
    }
}
