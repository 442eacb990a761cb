//! Card vault integration via REST API (no SDK dependency)
//!
//! The vault speaks form-encoded requests with secret-key basic auth. Its
//! response carries the canonical card metadata and billing details; where
//! the vault normalized an address field, the returned value wins over the
//! submitted one.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use gantry_console::services::TokenizationProvider;
use shared::error::{AppError, ErrorCode};
use shared::models::{BillingContact, CardDetails, TokenizedCard};

use crate::ClientConfig;
use crate::http::transport_error;

/// REST client for the external card vault
#[derive(Debug, Clone)]
pub struct CardVaultClient {
    client: Client,
    base_url: String,
    secret_key: String,
}

impl CardVaultClient {
    pub fn new(config: &ClientConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| transport_error(&e))?;
        Ok(Self {
            client,
            base_url: config.vault_url.trim_end_matches('/').to_string(),
            secret_key: config.vault_secret_key.clone(),
        })
    }
}

#[async_trait]
impl TokenizationProvider for CardVaultClient {
    async fn create_payment_method(
        &self,
        card: &CardDetails,
        contact: &BillingContact,
    ) -> Result<TokenizedCard, AppError> {
        let form = [
            ("type", "card".to_string()),
            ("card[number]", card.number.clone()),
            ("card[exp_month]", card.exp_month.to_string()),
            ("card[exp_year]", card.exp_year.to_string()),
            ("card[cvc]", card.cvc.clone()),
            ("billing_details[name]", card.name_on_card.clone()),
            ("billing_details[email]", contact.email.clone()),
            ("billing_details[address][line1]", contact.address.clone()),
            ("billing_details[address][city]", contact.city.clone()),
            ("billing_details[address][state]", contact.state.clone()),
            ("billing_details[address][postal_code]", contact.zip_code.clone()),
            ("billing_details[address][country]", contact.country.clone()),
        ];

        let response = self
            .client
            .post(format!("{}/v1/payment_methods", self.base_url))
            .basic_auth(&self.secret_key, None::<&str>)
            .form(&form)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        let status = response.status();
        let body: Value = response.json().await.map_err(|e| transport_error(&e))?;
        if !status.is_success() {
            return Err(vault_error(&body));
        }
        parse_payment_method(&body, card, contact)
    }
}

/// Classify a vault error body
///
/// Card and validation errors belong next to the card fields; anything
/// else is a setup failure.
fn vault_error(body: &Value) -> AppError {
    let kind = body["error"]["type"].as_str().unwrap_or("");
    let message = body["error"]["message"]
        .as_str()
        .unwrap_or("payment method creation failed");
    match kind {
        "card_error" | "validation_error" => {
            AppError::with_detail(ErrorCode::CardDeclined, message)
        }
        _ => AppError::with_detail(ErrorCode::PaymentSetupFailed, message),
    }
}

/// Build the tokenized card from the vault's response
///
/// The token id is mandatory; card metadata and billing details fall back
/// to the submitted values when the vault omits them.
fn parse_payment_method(
    body: &Value,
    card: &CardDetails,
    submitted: &BillingContact,
) -> Result<TokenizedCard, AppError> {
    let payment_method_id = body["id"]
        .as_str()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| {
            AppError::with_detail(
                ErrorCode::PaymentSetupFailed,
                "vault response carried no payment method id",
            )
        })?
        .to_string();

    let card_meta = &body["card"];
    let details = &body["billing_details"];
    let address = &details["address"];

    let mut contact = submitted.clone();
    if let Some(v) = details["email"].as_str() {
        contact.email = v.to_string();
    }
    if let Some(v) = address["line1"].as_str() {
        contact.address = v.to_string();
    }
    if let Some(v) = address["city"].as_str() {
        contact.city = v.to_string();
    }
    if let Some(v) = address["state"].as_str() {
        contact.state = v.to_string();
    }
    if let Some(v) = address["postal_code"].as_str() {
        contact.zip_code = v.to_string();
    }
    if let Some(v) = address["country"].as_str() {
        contact.country = v.to_string();
    }

    Ok(TokenizedCard {
        payment_method_id,
        card_brand: card_meta["brand"].as_str().unwrap_or("unknown").to_string(),
        expiry_month: card_meta["exp_month"].as_u64().unwrap_or(card.exp_month as u64) as u32,
        expiry_year: card_meta["exp_year"].as_u64().unwrap_or(card.exp_year as u64) as u32,
        last4: card_meta["last4"].as_str().unwrap_or_default().to_string(),
        name_on_card: details["name"]
            .as_str()
            .unwrap_or(&card.name_on_card)
            .to_string(),
        billing_contact: contact,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_card() -> CardDetails {
        CardDetails {
            number: "4242424242424242".to_string(),
            exp_month: 4,
            exp_year: 2030,
            cvc: "123".to_string(),
            name_on_card: "A. Customer".to_string(),
        }
    }

    fn make_contact() -> BillingContact {
        BillingContact {
            company_name: "Acme Ltd".to_string(),
            email: "billing@acme.test".to_string(),
            country: "es".to_string(),
            address: "Calle Mayor 1".to_string(),
            city: "Madrid".to_string(),
            state: "Madrid".to_string(),
            zip_code: "28001".to_string(),
        }
    }

    #[test]
    fn card_errors_map_to_card_declined() {
        let body = json!({
            "error": { "type": "card_error", "message": "incorrect card number" }
        });
        let err = vault_error(&body);
        assert_eq!(err.code, ErrorCode::CardDeclined);
        assert_eq!(err.message(), "incorrect card number");
    }

    #[test]
    fn other_errors_map_to_setup_failed() {
        let body = json!({
            "error": { "type": "api_error", "message": "temporarily unavailable" }
        });
        assert_eq!(vault_error(&body).code, ErrorCode::PaymentSetupFailed);

        let body = json!({});
        let err = vault_error(&body);
        assert_eq!(err.code, ErrorCode::PaymentSetupFailed);
        assert_eq!(err.message(), "payment method creation failed");
    }

    #[test]
    fn normalized_address_fields_override_the_submitted_contact() {
        let body = json!({
            "id": "pm_1",
            "card": { "brand": "visa", "exp_month": 4, "exp_year": 2030, "last4": "4242" },
            "billing_details": {
                "name": "A. Customer",
                "address": { "country": "ES", "postal_code": "28001" }
            }
        });
        let tokenized = parse_payment_method(&body, &make_card(), &make_contact()).unwrap();

        assert_eq!(tokenized.payment_method_id, "pm_1");
        assert_eq!(tokenized.card_brand, "visa");
        assert_eq!(tokenized.last4, "4242");
        // Country was normalized, the untouched fields carried over
        assert_eq!(tokenized.billing_contact.country, "ES");
        assert_eq!(tokenized.billing_contact.city, "Madrid");
        assert_eq!(tokenized.billing_contact.company_name, "Acme Ltd");
    }

    #[test]
    fn missing_token_id_is_a_setup_failure() {
        let body = json!({ "card": { "brand": "visa" } });
        let err = parse_payment_method(&body, &make_card(), &make_contact()).unwrap_err();
        assert_eq!(err.code, ErrorCode::PaymentSetupFailed);
    }
}
