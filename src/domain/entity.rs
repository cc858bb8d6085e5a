use uuid::Uuid;

use crate::primitives::{Actor, Resource};
use crate::types::ResourceType;

// ─────────────────────────────────────────────────────────────────────────────
// Accounts
// ─────────────────────────────────────────────────────────────────────────────

/// A user account as the persistence layer hands it over.
///
/// `id` is `None` until the record is saved.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub id: Option<Uuid>,
    pub email: String,
    #[serde(default)]
    pub admin: bool,
}

impl User {
    /// An unsaved account.
    pub fn new(email: impl Into<String>) -> Self {
        User { id: None, email: email.into(), admin: false }
    }

    pub fn is_new_record(&self) -> bool {
        self.id.is_none()
    }

    /// Role flags for the ability engine. The admin flag only counts once the
    /// account is saved.
    pub fn actor(&self) -> Actor {
        Actor::from_flags(self.admin, !self.is_new_record())
    }
}

impl From<Option<&User>> for Actor {
    fn from(user: Option<&User>) -> Self {
        user.map(User::actor).unwrap_or_default()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Contacts
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneType {
    Home,
    Office,
    Mobile,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Phone {
    pub id: Option<Uuid>,
    pub phone_type: PhoneType,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Contact {
    pub id: Option<Uuid>,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    #[serde(default)]
    pub phones: Vec<Phone>,
}

impl Contact {
    /// An empty contact with a blank home, office and mobile phone, as the
    /// `new` form expects.
    pub fn blank() -> Self {
        let phones = [PhoneType::Home, PhoneType::Office, PhoneType::Mobile]
            .into_iter()
            .map(|phone_type| Phone { id: None, phone_type, phone: String::new() })
            .collect();
        Contact { phones, ..Contact::default() }
    }

    pub fn name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// News
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NewsRelease {
    pub id: Option<Uuid>,
    pub released_on: String, // ISO-8601 date, e.g. "2013-07-29"
    pub title: String,
    pub body: String,
}

impl NewsRelease {
    /// The one-line listing shown on the news index.
    pub fn title_with_date(&self) -> String {
        format!("{}: {}", self.released_on, self.title)
    }
}

impl Resource for User {
    fn resource_type(&self) -> ResourceType {
        ResourceType::User
    }
}

impl Resource for Contact {
    fn resource_type(&self) -> ResourceType {
        ResourceType::Contact
    }
}

impl Resource for Phone {
    fn resource_type(&self) -> ResourceType {
        ResourceType::Phone
    }
}

impl Resource for NewsRelease {
    fn resource_type(&self) -> ResourceType {
        ResourceType::NewsRelease
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsaved_admin_is_guest() {
        let mut user = User::new("admin@example.com");
        user.admin = true;
        assert!(user.is_new_record());
        assert_eq!(user.actor(), Actor::guest());

        user.id = Some(Uuid::new_v4());
        assert_eq!(user.actor(), Actor::administrator());
    }

    #[test]
    fn test_actor_from_optional_user() {
        assert_eq!(Actor::from(None::<&User>), Actor::guest());
        let user = User { id: Some(Uuid::new_v4()), email: "a@example.com".into(), admin: false };
        assert_eq!(Actor::from(Some(&user)), Actor::registered());
    }

    #[test]
    fn test_blank_contact_has_three_phones() {
        let contact = Contact::blank();
        let kinds: Vec<PhoneType> = contact.phones.iter().map(|p| p.phone_type).collect();
        assert_eq!(kinds, vec![PhoneType::Home, PhoneType::Office, PhoneType::Mobile]);
    }

    #[test]
    fn test_display_helpers() {
        let contact = Contact { firstname: "Jane".into(), lastname: "Doe".into(), ..Contact::default() };
        assert_eq!(contact.name(), "Jane Doe");

        let release = NewsRelease {
            id: None,
            released_on: "2013-07-29".into(),
            title: "BigCo switches to Rails".into(),
            body: String::new(),
        };
        assert_eq!(release.title_with_date(), "2013-07-29: BigCo switches to Rails");
    }

    #[test]
    fn test_user_deserialises_without_admin_flag() {
        let user: User = serde_json::from_str(r#"{"id":null,"email":"x@example.com"}"#).unwrap();
        assert!(!user.admin);
        assert!(user.is_new_record());
    }
}
