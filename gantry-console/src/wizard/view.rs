//! Wizard step state

use serde::{Deserialize, Serialize};

/// The currently mounted wizard step
///
/// Transitions are linear except for the per-card edit jumps out of the
/// final review; SUCCESS is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WizardView {
    #[default]
    Calculate,
    #[serde(rename = "BILLINGINFO")]
    BillingInfo,
    PaymentMethod,
    #[serde(rename = "FINALREVIEW")]
    FinalReview,
    Success,
}

impl WizardView {
    /// The previous step, if a back transition exists
    ///
    /// Back transitions carry no precondition; there is none out of the
    /// first step or out of SUCCESS.
    pub fn back(self) -> Option<WizardView> {
        match self {
            WizardView::Calculate => None,
            WizardView::BillingInfo => Some(WizardView::Calculate),
            WizardView::PaymentMethod => Some(WizardView::BillingInfo),
            WizardView::FinalReview => Some(WizardView::PaymentMethod),
            WizardView::Success => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == WizardView::Success
    }
}

/// Edit targets reachable from the final review's sub-cards
///
/// These jump directly to the owning step, skipping the steps in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewEdit {
    /// Plan and quantities card, jumps to CALCULATE
    Plan,
    /// Billing contact card, jumps to BILLINGINFO
    BillingContact,
}

impl ReviewEdit {
    pub fn target(self) -> WizardView {
        match self {
            ReviewEdit::Plan => WizardView::Calculate,
            ReviewEdit::BillingContact => WizardView::BillingInfo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_walks_the_linear_chain() {
        assert_eq!(WizardView::FinalReview.back(), Some(WizardView::PaymentMethod));
        assert_eq!(WizardView::PaymentMethod.back(), Some(WizardView::BillingInfo));
        assert_eq!(WizardView::BillingInfo.back(), Some(WizardView::Calculate));
        assert_eq!(WizardView::Calculate.back(), None);
    }

    #[test]
    fn success_is_terminal() {
        assert!(WizardView::Success.is_terminal());
        assert_eq!(WizardView::Success.back(), None);
    }

    #[test]
    fn review_edits_skip_intermediate_steps() {
        assert_eq!(ReviewEdit::BillingContact.target(), WizardView::BillingInfo);
        assert_eq!(ReviewEdit::Plan.target(), WizardView::Calculate);
    }

    #[test]
    fn view_serializes_like_the_wire() {
        assert_eq!(
            serde_json::to_string(&WizardView::BillingInfo).unwrap(),
            "\"BILLINGINFO\""
        );
        assert_eq!(
            serde_json::to_string(&WizardView::PaymentMethod).unwrap(),
            "\"PAYMENT_METHOD\""
        );
    }
}
