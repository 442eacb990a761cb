// gantry-client/examples/cost_preview.rs
// Mounts the subscription wizard against a live platform and prints the
// recommended TEAM plan cost for an account.

use std::sync::Arc;

use gantry_client::{CardVaultClient, ClientConfig, PlatformClient};
use gantry_console::wizard::{AccountScope, DraftAction, SubscriptionWizard};
use shared::models::{Edition, PaymentFrequency};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gantry_client=debug,gantry_console=debug".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        println!("Usage: {} <account_id> <module>", args[0]);
        println!("  Example: {} acct_42 ci", args[0]);
        return Ok(());
    }

    let config = ClientConfig::from_env();
    let platform = Arc::new(PlatformClient::new(&config)?);
    let vault = Arc::new(CardVaultClient::new(&config)?);

    let scope = AccountScope {
        account_id: args[1].clone(),
        module: args[2].clone(),
    };
    let mut wizard = SubscriptionWizard::mount(platform, vault, scope).await?;

    wizard.dispatch(DraftAction::SetEdition(Edition::Team));
    wizard.dispatch(DraftAction::SetPaymentFrequency(PaymentFrequency::Yearly));

    tracing::info!(
        seats = wizard.effective_developer_seats(),
        units = wizard.effective_monthly_active_units(),
        "recommended quantities"
    );

    let quote = wizard.quote()?;
    println!(
        "TEAM yearly: {}/month ({} seats, {} units), {} due per term",
        quote.monthly_total, quote.developer_seats, quote.monthly_active_units, quote.total_due
    );

    Ok(())
}
