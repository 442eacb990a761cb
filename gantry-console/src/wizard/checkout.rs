//! Step control and checkout orchestration
//!
//! `SubscriptionWizard` owns the view, the draft and the service handles.
//! The payment submission is the one place with real failure concerns: two
//! sequenced remote calls whose second request body depends on the first
//! response, with a deliberate at-least-once retry model instead of a
//! transactional rollback.

use std::sync::Arc;

use shared::error::{AppError, ErrorCode};
use shared::models::{
    BillingContact, CardDetails, LinkPaymentMethodRequest, SubscriptionRequest, UsageSummary,
};
use uuid::Uuid;

use crate::pricing::{self, PlanQuote, recommended_quantity};
use crate::services::{BillingApi, TokenizationProvider};

use super::{
    CheckoutError, DraftAction, ReviewEdit, SubscriptionDraft, WizardError, WizardView, reducer,
};

/// Account and module the wizard operates on
#[derive(Debug, Clone)]
pub struct AccountScope {
    pub account_id: String,
    pub module: String,
}

/// The subscription purchase wizard
pub struct SubscriptionWizard {
    billing: Arc<dyn BillingApi>,
    tokenizer: Arc<dyn TokenizationProvider>,
    scope: AccountScope,
    /// Client-side idempotency key for create-subscription, one per wizard
    /// session
    session_key: String,
    view: WizardView,
    draft: SubscriptionDraft,
    usage: UsageSummary,
    submitting: bool,
}

impl SubscriptionWizard {
    /// Mount the wizard: fetch the price catalog and usage once, seed the
    /// draft with defaults
    pub async fn mount(
        billing: Arc<dyn BillingApi>,
        tokenizer: Arc<dyn TokenizationProvider>,
        scope: AccountScope,
    ) -> Result<Self, WizardError> {
        let catalog = billing
            .fetch_price_catalog(&scope.account_id, &scope.module)
            .await
            .map_err(CheckoutError::from_api)?;
        let usage = billing
            .fetch_usage(&scope.account_id, &scope.module)
            .await
            .map_err(CheckoutError::from_api)?;

        tracing::debug!(
            account_id = %scope.account_id,
            module = %scope.module,
            monthly_prices = catalog.monthly_prices.len(),
            yearly_prices = catalog.yearly_prices.len(),
            "subscription wizard mounted"
        );

        Ok(Self {
            billing,
            tokenizer,
            scope,
            session_key: Uuid::new_v4().to_string(),
            view: WizardView::default(),
            draft: SubscriptionDraft::new(catalog),
            usage,
            submitting: false,
        })
    }

    pub fn view(&self) -> WizardView {
        self.view
    }

    pub fn draft(&self) -> &SubscriptionDraft {
        &self.draft
    }

    pub fn usage(&self) -> &UsageSummary {
        &self.usage
    }

    /// Whether a submission is in flight; the UI disables its controls on
    /// this
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Apply a draft action through the reducer
    pub fn dispatch(&mut self, action: DraftAction) {
        self.draft = reducer::apply(&self.draft, action);
    }

    /// Seat quantity in effect: the slider value, or the recommendation
    pub fn effective_developer_seats(&self) -> u64 {
        self.draft.quantities.developer_seats.unwrap_or_else(|| {
            recommended_quantity(self.usage.developers.active, self.usage.developers.subscribed)
        })
    }

    /// Metered quantity in effect: the slider value, or the recommendation
    pub fn effective_monthly_active_units(&self) -> u64 {
        self.draft.quantities.monthly_active_units.unwrap_or_else(|| {
            recommended_quantity(
                self.usage.monthly_active_units.active,
                self.usage.monthly_active_units.subscribed,
            )
        })
    }

    /// Cost summary for the current selection
    pub fn quote(&self) -> Result<PlanQuote, WizardError> {
        Ok(pricing::quote(
            &self.draft.price_catalog,
            self.draft.edition,
            self.draft.payment_frequency,
            self.effective_developer_seats(),
            self.effective_monthly_active_units(),
            self.draft.premium_support_selected,
        )?)
    }

    /// CALCULATE -> BILLINGINFO, gated on the selection pricing cleanly
    pub fn review_plan(&mut self) -> Result<(), WizardError> {
        if self.view != WizardView::Calculate {
            return Err(WizardError::InvalidTransition(self.view));
        }
        self.quote()?;
        self.view = WizardView::BillingInfo;
        Ok(())
    }

    /// BILLINGINFO -> PAYMENT_METHOD, gated on the form's synchronous
    /// validation
    pub fn submit_billing_contact(&mut self, contact: BillingContact) -> Result<(), WizardError> {
        if self.view != WizardView::BillingInfo {
            return Err(WizardError::InvalidTransition(self.view));
        }
        if !contact.is_complete() {
            return Err(WizardError::IncompleteBillingContact);
        }
        self.dispatch(DraftAction::SetBillingContact(contact));
        self.view = WizardView::PaymentMethod;
        Ok(())
    }

    /// Whether the payment step's "next" control is enabled
    pub fn can_submit_payment(&self) -> bool {
        self.view == WizardView::PaymentMethod
            && !self.submitting
            && self.draft.payment_form_valid
            && self.draft.billing_contact_complete()
    }

    /// PAYMENT_METHOD -> FINALREVIEW: tokenize the card, then link the
    /// payment method
    ///
    /// A failed tokenization leaves the draft untouched. A failed link
    /// leaves the tokenized method in the draft; the retry path re-runs
    /// the whole flow and re-tokenizes.
    pub async fn submit_payment(&mut self, card: &CardDetails) -> Result<(), WizardError> {
        if self.view != WizardView::PaymentMethod {
            return Err(WizardError::InvalidTransition(self.view));
        }
        if self.submitting {
            return Err(WizardError::SubmissionInFlight);
        }
        if !self.draft.payment_form_valid {
            return Err(WizardError::PaymentFormIncomplete);
        }
        if !self.draft.billing_contact_complete() {
            return Err(WizardError::IncompleteBillingContact);
        }

        self.submitting = true;
        let result = self.run_payment_flow(card).await;
        self.submitting = false;
        result.map_err(WizardError::from)
    }

    async fn run_payment_flow(&mut self, card: &CardDetails) -> Result<(), CheckoutError> {
        // Step 1: tokenize. The draft is not touched until this resolves.
        let tokenized = match self
            .tokenizer
            .create_payment_method(card, &self.draft.billing_contact)
            .await
        {
            Ok(tokenized) => tokenized,
            Err(e) => {
                tracing::warn!(code = %e.code, "card tokenization rejected");
                return Err(CheckoutError::from_provider(e));
            }
        };

        // The provider's canonical fields replace the form input; it may
        // have normalized or corrected the address.
        self.dispatch(DraftAction::SetBillingContact(
            tokenized.billing_contact.clone(),
        ));
        self.dispatch(DraftAction::SetPaymentMethod(tokenized.payment_method()));

        // Step 2 depends on step 1's response and is never issued before
        // it resolves.
        let request = LinkPaymentMethodRequest {
            payment_method_id: tokenized.payment_method_id.clone(),
            billing_contact: tokenized.billing_contact.clone(),
        };
        if let Err(e) = self
            .billing
            .link_payment_method(&self.scope.account_id, &request)
            .await
        {
            // The draft now holds a token that is not linked server-side.
            // Accepted transient inconsistency: the user retries and the
            // flow re-tokenizes.
            tracing::error!(code = %e.code, "failed to link payment method");
            return Err(CheckoutError::from_api(e));
        }

        tracing::debug!(last4 = %tokenized.last4, "payment method linked");
        self.view = WizardView::FinalReview;
        Ok(())
    }

    /// FINALREVIEW -> SUCCESS: create the subscription once, then pay the
    /// invoice
    ///
    /// A retry after create succeeded but pay failed reuses the stored ids
    /// instead of creating a second subscription.
    pub async fn confirm(&mut self) -> Result<(), WizardError> {
        if self.view != WizardView::FinalReview {
            return Err(WizardError::InvalidTransition(self.view));
        }
        if self.submitting {
            return Err(WizardError::SubmissionInFlight);
        }

        self.submitting = true;
        let result = self.run_confirm_flow().await;
        self.submitting = false;
        result.map_err(WizardError::from)
    }

    async fn run_confirm_flow(&mut self) -> Result<(), CheckoutError> {
        if self.draft.subscription_id.is_none() {
            let request = SubscriptionRequest {
                edition: self.draft.edition,
                payment_frequency: self.draft.payment_frequency,
                premium_support: self.draft.premium_support_selected,
                developer_seats: self.effective_developer_seats(),
                monthly_active_units: self.effective_monthly_active_units(),
                billing_contact: self.draft.billing_contact.clone(),
                idempotency_key: self.session_key.clone(),
            };
            let created = self
                .billing
                .create_subscription(&self.scope.account_id, &request)
                .await
                .map_err(CheckoutError::from_api)?;
            tracing::debug!(subscription_id = %created.subscription_id, "subscription created");
            self.dispatch(DraftAction::AttachSubscription {
                subscription_id: created.subscription_id,
                invoice_id: created.invoice_id,
            });
        }

        let invoice_id = match &self.draft.invoice_id {
            Some(id) => id.clone(),
            // AttachSubscription stores both ids; a subscription without an
            // invoice cannot be produced through the reducer.
            None => return Err(CheckoutError::Api(AppError::new(ErrorCode::InternalError))),
        };

        self.billing
            .pay_invoice(&self.scope.account_id, &invoice_id)
            .await
            .map_err(|e| {
                tracing::error!(code = %e.code, invoice_id = %invoice_id, "invoice payment failed");
                CheckoutError::from_api(e)
            })?;

        self.view = WizardView::Success;
        Ok(())
    }

    /// Unconditional back transition along the linear chain
    pub fn back(&mut self) -> Result<(), WizardError> {
        match self.view.back() {
            Some(prev) => {
                self.view = prev;
                Ok(())
            }
            None => Err(WizardError::InvalidTransition(self.view)),
        }
    }

    /// Per-card edit jump out of the final review
    pub fn edit_from_review(&mut self, target: ReviewEdit) -> Result<(), WizardError> {
        if self.view != WizardView::FinalReview {
            return Err(WizardError::InvalidTransition(self.view));
        }
        self.view = target.target();
        Ok(())
    }
}
