//! The capability evaluator.
//!
//! An `Ability` is the ordered rule set granted to one actor. Rules are kept
//! in declaration order and scanned newest-first, so a `cannot` declared after
//! a `can` overrides it wherever their scopes overlap. The first matching rule
//! decides; no match is a denial.

use crate::error::AccessError;
use crate::primitives::{Actor, Decision, DenialKind, PolicyRule, Polarity, Resource};
use crate::rights::core;
use crate::types::{Action, ActionMask, ResourceType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ability {
    actor: Actor,
    rules: Vec<PolicyRule>, // declaration order
}

impl Ability {
    /// An ability with no rules. Every request is denied.
    pub fn empty(actor: Actor) -> Self {
        Ability { actor, rules: Vec::new() }
    }

    /// Derives the grant set for an actor from its role flags.
    ///
    /// A missing actor is a fresh guest.
    pub fn for_actor(actor: Option<&Actor>) -> Self {
        let actor = actor.copied().unwrap_or_default();
        let mut ability = Ability::empty(actor);

        if actor.is_administrator() {
            ability.can(core::MANAGE, ResourceType::All);
        } else if actor.is_registered() {
            ability.can(core::MANAGE, ResourceType::Contact);
            // Redundant under newest-first scanning, kept so the grant set
            // reads the same as the declared policy.
            ability.cannot(core::MANAGE, ResourceType::User);
        } else {
            ability.can(core::READ, ResourceType::All);
        }
        ability
    }

    /// Declares an allow rule.
    pub fn can(&mut self, actions: ActionMask, resource: ResourceType) -> &mut Self {
        self.rules.push(PolicyRule::allow(actions, resource));
        self
    }

    /// Declares a deny rule. It overrides every earlier rule it overlaps.
    pub fn cannot(&mut self, actions: ActionMask, resource: ResourceType) -> &mut Self {
        self.rules.push(PolicyRule::deny(actions, resource));
        self
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    /// Rules in declaration order.
    pub fn rules(&self) -> &[PolicyRule] {
        &self.rules
    }

    /// The rule that decides a request, if any.
    pub fn relevant_rule(&self, action: Action, resource: ResourceType) -> Option<&PolicyRule> {
        self.rules.iter().rev().find(|rule| rule.matches(action, resource))
    }

    /// Evaluates a request against this ability. Never fails.
    pub fn evaluate<R: Resource + ?Sized>(&self, action: Action, resource: &R) -> Decision {
        let resource_type = resource.resource_type();
        let decision = match self.relevant_rule(action, resource_type) {
            Some(rule) if rule.polarity == Polarity::Allow => Decision::Allowed,
            _ => Decision::Denied(self.denial_kind()),
        };
        tracing::debug!(
            actor = ?self.actor,
            %action,
            resource = %resource_type,
            ?decision,
            "ability evaluated"
        );
        decision
    }

    /// Shorthand for `evaluate(..).is_allowed()`.
    pub fn permits<R: Resource + ?Sized>(&self, action: Action, resource: &R) -> bool {
        self.evaluate(action, resource).is_allowed()
    }

    /// `evaluate` as a `Result`, for callers that propagate with `?`.
    pub fn authorize<R: Resource + ?Sized>(&self, action: Action, resource: &R) -> Result<(), AccessError> {
        let resource = resource.resource_type();
        match self.evaluate(action, &resource) {
            Decision::Allowed => Ok(()),
            Decision::Denied(DenialKind::AuthenticationRequired) => {
                Err(AccessError::AuthenticationRequired { action, resource })
            }
            Decision::Denied(DenialKind::AuthorizationDenied) => {
                Err(AccessError::AuthorizationDenied { action, resource })
            }
        }
    }

    fn denial_kind(&self) -> DenialKind {
        if self.actor.is_registered() {
            DenialKind::AuthorizationDenied
        } else {
            DenialKind::AuthenticationRequired
        }
    }
}

/// evaluate(actor, action, resource) → Decision
///
/// Derives the actor's grants and evaluates one request. Grants are not
/// cached; each call starts from the actor's current flags.
pub fn evaluate<R: Resource + ?Sized>(actor: Option<&Actor>, action: Action, resource: &R) -> Decision {
    Ability::for_actor(actor).evaluate(action, resource)
}
