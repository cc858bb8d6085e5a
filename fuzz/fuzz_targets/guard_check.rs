#![no_main]

// Harness: guard_check
// Focus: arbitrary controller action names and paths never panic the guard.

use libfuzzer_sys::fuzz_target;
use arbitrary::Arbitrary;
use contact_ability::{
    guard::Guard,
    primitives::Actor,
    types::ResourceType,
};

#[derive(Arbitrary, Debug, Clone)]
struct GuardFrame {
    admin: bool,
    registered: bool,
    action: String,
    resource: u8,
    path: String,
}

fuzz_target!(|frame: GuardFrame| {
    let guard = Guard::default();
    let actor = Actor::from_flags(frame.admin, frame.registered);
    let resource = ResourceType::ALL[frame.resource as usize % ResourceType::ALL.len()];

    if let Ok(outcome) = guard.check_named(Some(&actor), &frame.action, resource, &frame.path) {
        if let Some(location) = outcome.location() {
            assert!(location.starts_with('/'));
        }
    }
});
