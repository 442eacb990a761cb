//! Subscription purchase wizard
//!
//! A linear five-step flow (calculate, billing info, payment method, final
//! review, success) over a single in-memory draft aggregate. Steps mutate
//! the draft only through [`DraftAction`] and the reducer; the checkout
//! orchestrator in [`SubscriptionWizard`] owns the two-call payment
//! submission and the final confirmation against the platform API.

mod actions;
mod checkout;
mod draft;
mod error;
mod reducer;
mod view;

pub use actions::DraftAction;
pub use checkout::{AccountScope, SubscriptionWizard};
pub use draft::{Quantities, SubscriptionDraft};
pub use error::{CheckoutError, ErrorSurface, WizardError};
pub use reducer::apply;
pub use view::{ReviewEdit, WizardView};
