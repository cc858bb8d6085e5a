#![no_main]

// Harness: evaluate
// Focus: any flag combination, action and resource yields a decision, and a
// denial kind that matches the actor's registration.

use libfuzzer_sys::fuzz_target;
use arbitrary::Arbitrary;
use contact_ability::{
    access::{evaluate, Ability},
    primitives::{Actor, Decision, DenialKind},
    types::{Action, ResourceType},
};

#[derive(Arbitrary, Debug, Clone)]
struct EvalFrame {
    present: bool,
    admin: bool,
    registered: bool,
    action: u8,
    resource: u8,
}

fuzz_target!(|frame: EvalFrame| {
    let actor = frame.present.then(|| Actor::from_flags(frame.admin, frame.registered));
    let action = Action::ALL[frame.action as usize % Action::ALL.len()];
    let resource = ResourceType::ALL[frame.resource as usize % ResourceType::ALL.len()];

    let decision = evaluate(actor.as_ref(), action, &resource);
    assert_eq!(decision, Ability::for_actor(actor.as_ref()).evaluate(action, &resource));

    if let Decision::Denied(kind) = decision {
        let registered = actor.map(|a| a.is_registered()).unwrap_or(false);
        assert_eq!(kind == DenialKind::AuthorizationDenied, registered);
    }
});
