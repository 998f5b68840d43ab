//! Subscription plans and the checkout modal.
//!
//! The payment provider is not modelled: proceeding simply starts a fixed
//! "processing" delay, after which the app closes the modal and reports
//! success.

use tracing::warn;

use crate::toggle::ToggleGroup;

pub const PAYMENT_READY_MESSAGE: &str = "Payment system ready! We'll contact you to complete the subscription setup. Thank you for choosing PixelPerfect Graphix!";

/// Toggle item backing the modal's visibility
const MODAL: &str = "payment-modal";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub key: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub features: [&'static str; 4],
}

pub static PLANS: [Plan; 3] = [
    Plan {
        key: "monthly",
        name: "Monthly Plan",
        price: "₹49/month",
        features: [
            "100+ Templates",
            "Basic Customization",
            "Standard Support",
            "HD Downloads",
        ],
    },
    Plan {
        key: "quarterly",
        name: "Quarterly Plan",
        price: "₹99/3 months",
        features: [
            "300+ Templates",
            "Advanced Customization",
            "Priority Support",
            "Commercial License",
        ],
    },
    Plan {
        key: "annual",
        name: "Annual Plan",
        price: "₹299/year",
        features: [
            "500+ Templates",
            "Premium Customization",
            "Dedicated Support",
            "Brand Consultation",
        ],
    },
];

pub fn find_plan(key: &str) -> Option<&'static Plan> {
    PLANS.iter().find(|plan| plan.key == key)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutStatus {
    #[default]
    Idle,
    Processing,
}

#[derive(Debug, Clone)]
pub struct PaymentModal {
    visibility: ToggleGroup,
    plan: Option<&'static Plan>,
    status: CheckoutStatus,
}

impl PaymentModal {
    pub fn new() -> Self {
        Self {
            visibility: ToggleGroup::independent([MODAL]),
            plan: None,
            status: CheckoutStatus::Idle,
        }
    }

    pub fn is_open(&self) -> bool {
        self.visibility.is_active(MODAL)
    }

    pub fn plan(&self) -> Option<&'static Plan> {
        self.plan
    }

    pub fn status(&self) -> CheckoutStatus {
        self.status
    }

    pub fn is_processing(&self) -> bool {
        self.status == CheckoutStatus::Processing
    }

    /// Show the modal for `plan_key`. Unknown plans are ignored.
    pub fn open(&mut self, plan_key: &str) -> Option<&'static Plan> {
        let plan = find_plan(plan_key)?;
        self.plan = Some(plan);
        if let Err(e) = self.visibility.set_active(MODAL) {
            warn!(error = %e, "payment modal visibility not updated");
        }
        Some(plan)
    }

    /// Hide the modal. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        !self.visibility.deactivate_all().is_empty()
    }

    /// Start checkout. Returns false if closed or already processing.
    pub fn proceed(&mut self) -> bool {
        if !self.is_open() || self.is_processing() {
            return false;
        }
        self.status = CheckoutStatus::Processing;
        true
    }

    /// Finish checkout: close the modal and reset. Returns false if nothing
    /// was processing.
    pub fn complete(&mut self) -> bool {
        if !self.is_processing() {
            return false;
        }
        self.status = CheckoutStatus::Idle;
        self.close();
        true
    }
}

impl Default for PaymentModal {
    fn default() -> Self {
        Self::new()
    }
}
