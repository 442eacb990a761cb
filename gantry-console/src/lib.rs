//! Gantry console engine
//!
//! Drives the subscription purchase wizard (plan calculation, billing
//! contact, payment method, final review) and the health-source metric
//! path configuration flow of the Gantry console. All backend interaction
//! goes through the service traits in [`services`]; see `gantry-client`
//! for the REST implementations.

pub mod health;
pub mod pricing;
pub mod services;
pub mod wizard;
