#![cfg(test)]

use uuid::Uuid;

use crate::config::{GuardConfig, GuardMode};
use crate::domain::{Contact, User};
use crate::error::GuardError;
use crate::guard::core::{ControllerAction, Guard, GuardRequest, Outcome};
use crate::guard::identity::{SessionUser, StaticIdentity};
use crate::primitives::Actor;
use crate::types::{Action, ResourceType};

// --- Test Utilities ---

const CONTACT_ACTIONS: [ControllerAction; 7] = [
    ControllerAction::Index,
    ControllerAction::Show,
    ControllerAction::New,
    ControllerAction::Edit,
    ControllerAction::Create,
    ControllerAction::Update,
    ControllerAction::Destroy,
];

fn saved_user(admin: bool) -> User {
    User { id: Some(Uuid::new_v4()), email: "someone@example.com".to_string(), admin }
}

fn login_redirect(return_to: &str) -> Outcome {
    Outcome::RedirectToLogin { login_path: "/login".to_string(), return_to: return_to.to_string() }
}

fn forbidden_redirect() -> Outcome {
    Outcome::RedirectToForbidden { path: "/".to_string() }
}

fn request(action: ControllerAction, resource: ResourceType) -> GuardRequest {
    GuardRequest::new(action, resource, "/requested")
}

// --- Thread safety ---

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_engine_types_are_send_sync() {
    assert_send_sync::<crate::access::Ability>();
    assert_send_sync::<Guard>();
    assert_send_sync::<GuardConfig>();
    assert_send_sync::<GuardRequest>();
    assert_send_sync::<Outcome>();
}

#[test]
fn test_guard_shared_across_threads() {
    let guard = std::sync::Arc::new(Guard::default());
    let handles: Vec<_> = [None, Some(Actor::registered()), Some(Actor::administrator())]
        .into_iter()
        .map(|actor| {
            let guard = std::sync::Arc::clone(&guard);
            std::thread::spawn(move || guard.check(actor.as_ref(), &request(ControllerAction::Index, ResourceType::User)))
        })
        .collect();
    let outcomes: Vec<Outcome> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(outcomes, vec![login_redirect("/requested"), forbidden_redirect(), Outcome::Proceed]);
}

// --- Alias mapping ---

#[test]
fn test_controller_aliases() {
    assert_eq!(ControllerAction::Index.ability_action(), Action::Read);
    assert_eq!(ControllerAction::Show.ability_action(), Action::Read);
    assert_eq!(ControllerAction::New.ability_action(), Action::Create);
    assert_eq!(ControllerAction::Create.ability_action(), Action::Create);
    assert_eq!(ControllerAction::Edit.ability_action(), Action::Update);
    assert_eq!(ControllerAction::Update.ability_action(), Action::Update);
    assert_eq!(ControllerAction::Destroy.ability_action(), Action::Delete);
}

#[test]
fn test_unknown_controller_action_rejected() {
    let guard = Guard::default();
    let result = guard.check_named(None, "publish", ResourceType::Contact, "/contacts/1/publish");
    assert_eq!(result, Err(GuardError::UnknownControllerAction("publish".to_string())));
}

// --- Contacts ---

#[test]
fn test_guest_reads_contacts() {
    let guard = Guard::default();
    assert_eq!(guard.check(None, &request(ControllerAction::Index, ResourceType::Contact)), Outcome::Proceed);
    assert_eq!(guard.check(None, &request(ControllerAction::Show, ResourceType::Contact)), Outcome::Proceed);
}

#[test]
fn test_guest_writes_to_contacts_require_login() {
    let guard = Guard::default();
    for action in [ControllerAction::New, ControllerAction::Create, ControllerAction::Update, ControllerAction::Destroy] {
        let outcome = guard.check(None, &GuardRequest::new(action, ResourceType::Contact, "/contacts/new"));
        assert_eq!(outcome, login_redirect("/contacts/new"), "action {:?}", action);
    }
}

#[test]
fn test_user_and_admin_have_full_contact_access() {
    let guard = Guard::default();
    for actor in [Actor::registered(), Actor::administrator()] {
        for action in CONTACT_ACTIONS {
            let outcome = guard.check(Some(&actor), &request(action, ResourceType::Contact));
            assert!(outcome.is_proceed(), "{:?} {:?} -> {:?}", actor, action, outcome);
        }
    }
}

#[test]
fn test_contact_record_request() {
    let guard = Guard::default();
    let contact = Contact { firstname: "Lawrence".into(), lastname: "Smith".into(), ..Contact::default() };
    let req = GuardRequest::for_record(ControllerAction::Edit, &contact, "/contacts/7/edit");
    assert_eq!(req.resource, ResourceType::Contact);
    assert_eq!(guard.check(None, &req), login_redirect("/contacts/7/edit"));
}

// --- Users ---

#[test]
fn test_guest_user_management_requires_login() {
    let guard = Guard::default();
    for action in [ControllerAction::Index, ControllerAction::New, ControllerAction::Create] {
        assert_eq!(guard.check(None, &request(action, ResourceType::User)), login_redirect("/requested"));
    }
}

#[test]
fn test_registered_user_management_denied() {
    let guard = Guard::default();
    let user = Actor::registered();
    for action in [ControllerAction::Index, ControllerAction::New, ControllerAction::Create] {
        assert_eq!(guard.check(Some(&user), &request(action, ResourceType::User)), forbidden_redirect());
    }
}

#[test]
fn test_admin_manages_users() {
    let guard = Guard::default();
    let admin = Actor::administrator();
    for action in CONTACT_ACTIONS {
        assert!(guard.check(Some(&admin), &request(action, ResourceType::User)).is_proceed());
    }
}

// --- News releases ---

#[test]
fn test_news_releases_require_login_for_writes() {
    let guard = Guard::default();
    assert_eq!(guard.check(None, &request(ControllerAction::New, ResourceType::NewsRelease)), login_redirect("/requested"));
    assert_eq!(
        guard.check(None, &request(ControllerAction::Create, ResourceType::NewsRelease)),
        login_redirect("/requested")
    );
    assert!(guard.check(None, &request(ControllerAction::Index, ResourceType::NewsRelease)).is_proceed());
}

#[test]
fn test_registered_user_adds_news_release() {
    let guard = Guard::default();
    let user = Actor::registered();
    assert!(guard.check(Some(&user), &request(ControllerAction::New, ResourceType::NewsRelease)).is_proceed());
    assert!(guard.check(Some(&user), &request(ControllerAction::Create, ResourceType::NewsRelease)).is_proceed());
}

#[test]
fn test_news_releases_under_authorize_mode() {
    let mut config = GuardConfig::default();
    config.modes.insert(ResourceType::NewsRelease, GuardMode::Authorize);
    let guard = Guard::new(config);

    // The registered tier has no grant on news releases at all.
    let user = Actor::registered();
    assert_eq!(guard.check(Some(&user), &request(ControllerAction::Create, ResourceType::NewsRelease)), forbidden_redirect());
    assert_eq!(guard.check(Some(&user), &request(ControllerAction::Index, ResourceType::NewsRelease)), forbidden_redirect());
}

// --- Configuration and identity sources ---

#[test]
fn test_configured_paths_used() {
    let config = GuardConfig::from_json_str(r#"{"login_path":"/signin","forbidden_path":"/home"}"#).unwrap();
    let guard = Guard::new(config);

    let outcome = guard.check(None, &GuardRequest::new(ControllerAction::New, ResourceType::Contact, "/contacts/new"));
    assert_eq!(
        outcome,
        Outcome::RedirectToLogin { login_path: "/signin".to_string(), return_to: "/contacts/new".to_string() }
    );
    assert_eq!(outcome.location(), Some("/signin"));

    let denied = guard.check(Some(&Actor::registered()), &request(ControllerAction::Index, ResourceType::User));
    assert_eq!(denied.location(), Some("/home"));
}

#[test]
fn test_session_user_identity() {
    let guard = Guard::default();
    let req = request(ControllerAction::Index, ResourceType::User);

    assert_eq!(guard.check_with(&SessionUser(None), &req), login_redirect("/requested"));
    assert_eq!(guard.check_with(&SessionUser(Some(saved_user(false))), &req), forbidden_redirect());
    assert!(guard.check_with(&SessionUser(Some(saved_user(true))), &req).is_proceed());

    // An unsaved record is still a guest, admin flag or not.
    let mut unsaved = User::new("new@example.com");
    unsaved.admin = true;
    assert_eq!(guard.check_with(&SessionUser(Some(unsaved)), &req), login_redirect("/requested"));
}

#[test]
fn test_static_identity_matches_explicit_actor() {
    let guard = Guard::default();
    for actor in [None, Some(Actor::guest()), Some(Actor::registered()), Some(Actor::administrator())] {
        for resource in ResourceType::ALL {
            for action in CONTACT_ACTIONS {
                let req = request(action, resource);
                assert_eq!(guard.check_with(&StaticIdentity(actor), &req), guard.check(actor.as_ref(), &req));
            }
        }
    }
}
