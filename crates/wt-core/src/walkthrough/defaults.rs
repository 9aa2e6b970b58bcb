//! Built-in walkthrough step catalogs.
//!
//! Default step content for both roles, plus [`StaticStepCatalog`], the
//! in-memory [`StepCatalogPort`] implementation. Step content is
//! configuration data: deployments may replace it wholesale (see the
//! JSON catalog loader in the infrastructure crate) without touching the
//! engine.

use crate::ports::StepCatalogPort;

use super::model::{UserRole, WalkthroughStep};

fn step(
    id: &str,
    target_id: &str,
    title: &str,
    body: &str,
    route: Option<&str>,
) -> WalkthroughStep {
    WalkthroughStep {
        id: id.to_string(),
        target_id: target_id.to_string(),
        title: title.to_string(),
        body: body.to_string(),
        route: route.map(str::to_string),
    }
}

/// Default customer tour: post a job, compare offers, chat, complete, rate.
pub fn customer_steps() -> Vec<WalkthroughStep> {
    vec![
        step(
            "customer-step-1",
            "customer-post-job-cta",
            "Request a Mechanic",
            "Describe the issue, location, and preferred time.",
            Some("/(customer)/(tabs)"),
        ),
        step(
            "customer-step-2",
            "customer-offers-list",
            "Compare Offers",
            "Review price, ratings, and response time.",
            Some("/(customer)/(tabs)/jobs"),
        ),
        step(
            "customer-step-3",
            "customer-chat-button",
            "Chat Safely",
            "Keep communication protected inside the app.",
            Some("/(customer)/(tabs)/inbox"),
        ),
        step(
            "customer-step-4",
            "customer-confirm-completion",
            "Complete the Job",
            "Confirm work is done to close out the job.",
            None,
        ),
        step(
            "customer-step-5",
            "customer-rate-mechanic",
            "Rate Your Mechanic",
            "Ratings help the best mechanics stand out.",
            None,
        ),
    ]
}

/// Default mechanic tour: browse leads, offer, message, navigate, earnings.
pub fn mechanic_steps() -> Vec<WalkthroughStep> {
    vec![
        step(
            "mechanic-step-1",
            "mechanic-leads-list",
            "Browse Leads",
            "Find nearby jobs that match your skills.",
            Some("/(mechanic)/(tabs)"),
        ),
        step(
            "mechanic-step-2",
            "mechanic-send-offer",
            "Send an Offer",
            "Set your price and availability.",
            None,
        ),
        step(
            "mechanic-step-3",
            "mechanic-inbox-tab",
            "Message Customers",
            "Coordinate details right inside the app.",
            Some("/(mechanic)/(tabs)/inbox"),
        ),
        step(
            "mechanic-step-4",
            "mechanic-job-location",
            "Get There Fast",
            "Use job location to plan your route.",
            None,
        ),
        step(
            "mechanic-step-5",
            "mechanic-earnings-tab",
            "Track Earnings",
            "See booked jobs and payments in one place.",
            Some("/(mechanic)/(tabs)/jobs"),
        ),
    ]
}

/// In-memory step catalog holding one ordered list per role.
#[derive(Debug)]
pub struct StaticStepCatalog {
    customer: Vec<WalkthroughStep>,
    mechanic: Vec<WalkthroughStep>,
}

impl StaticStepCatalog {
    pub fn new(customer: Vec<WalkthroughStep>, mechanic: Vec<WalkthroughStep>) -> Self {
        Self { customer, mechanic }
    }
}

impl Default for StaticStepCatalog {
    fn default() -> Self {
        Self::new(customer_steps(), mechanic_steps())
    }
}

impl StepCatalogPort for StaticStepCatalog {
    fn steps(&self, role: UserRole) -> &[WalkthroughStep] {
        match role {
            UserRole::Customer => &self.customer,
            UserRole::Mechanic => &self.mechanic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn both_default_tours_have_five_steps() {
        let catalog = StaticStepCatalog::default();
        assert_eq!(catalog.steps(UserRole::Customer).len(), 5);
        assert_eq!(catalog.steps(UserRole::Mechanic).len(), 5);
    }

    #[test]
    fn default_step_and_target_ids_are_unique() {
        let catalog = StaticStepCatalog::default();
        for role in [UserRole::Customer, UserRole::Mechanic] {
            let steps = catalog.steps(role);
            let ids: HashSet<_> = steps.iter().map(|s| s.id.as_str()).collect();
            let targets: HashSet<_> = steps.iter().map(|s| s.target_id.as_str()).collect();
            assert_eq!(ids.len(), steps.len());
            assert_eq!(targets.len(), steps.len());
        }
    }

    #[test]
    fn default_steps_carry_title_and_body() {
        let catalog = StaticStepCatalog::default();
        for role in [UserRole::Customer, UserRole::Mechanic] {
            for step in catalog.steps(role) {
                assert!(!step.title.is_empty());
                assert!(!step.body.is_empty());
            }
        }
    }

    #[test]
    fn empty_catalog_is_allowed() {
        let catalog = StaticStepCatalog::new(Vec::new(), Vec::new());
        assert!(catalog.steps(UserRole::Customer).is_empty());
    }
}
