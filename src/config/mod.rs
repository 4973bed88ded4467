//! Process configuration.
//!
//! All environment reads happen in one place, at process start, producing
//! an immutable configuration value. Business logic never consults the
//! environment directly. Every custom-field mapping is independently
//! overridable and falls back to a hard-coded default identifier.

use crate::delivery::adapters::clickup::DEFAULT_BASE_URL;
use crate::delivery::domain::{ApiToken, CustomFieldId, ListId};
use std::env;

/// Default bind address for the HTTP surface.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Immutable process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address the HTTP server binds to.
    pub bind_addr: String,
    /// External tracker configuration.
    pub clickup: ClickUpConfig,
}

impl Config {
    /// Loads configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            bind_addr: env_or("LEADRELAY_BIND_ADDR", DEFAULT_BIND_ADDR),
            clickup: ClickUpConfig::from_env(),
        }
    }
}

/// Tracker credentials, target list, and field mappings.
///
/// The token and list identifier have no defaults; when either is absent
/// the pipeline stores leads but skips delivery, which is the designed
/// degraded mode.
#[derive(Debug, Clone)]
pub struct ClickUpConfig {
    /// API credential; absent means delivery is unconfigured.
    pub api_token: Option<ApiToken>,
    /// Target list; absent means delivery is unconfigured.
    pub list_id: Option<ListId>,
    /// REST API base URL.
    pub base_url: String,
    /// Lead-field to tracker-field identifier mappings.
    pub fields: FieldMappings,
}

impl ClickUpConfig {
    /// Loads tracker configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_token: env_opt("CLICKUP_API_TOKEN").map(ApiToken::new),
            list_id: env_opt("CLICKUP_LIST_ID").map(ListId::new),
            base_url: env_or("CLICKUP_API_BASE_URL", DEFAULT_BASE_URL),
            fields: FieldMappings::from_env(),
        }
    }

    /// Returns the credential pair when delivery is fully configured.
    #[must_use]
    pub fn credentials(&self) -> Option<(&ApiToken, &ListId)> {
        Some((self.api_token.as_ref()?, self.list_id.as_ref()?))
    }
}

/// Tracker custom-field identifiers for the nine lead fields and five
/// attribution fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMappings {
    /// Contact name field.
    pub name: CustomFieldId,
    /// Email field.
    pub email: CustomFieldId,
    /// Company field.
    pub company: CustomFieldId,
    /// Role field.
    pub role: CustomFieldId,
    /// Country field.
    pub country: CustomFieldId,
    /// Phone field.
    pub phone: CustomFieldId,
    /// Location-count field.
    pub number_of_locations: CustomFieldId,
    /// POS-system field.
    pub primary_pos: CustomFieldId,
    /// Message field.
    pub message: CustomFieldId,
    /// CTA-label attribution field.
    pub cta_label: CustomFieldId,
    /// Source-page attribution field.
    pub source_page: CustomFieldId,
    /// UTM source attribution field.
    pub utm_source: CustomFieldId,
    /// UTM medium attribution field.
    pub utm_medium: CustomFieldId,
    /// UTM campaign attribution field.
    pub utm_campaign: CustomFieldId,
}

impl FieldMappings {
    /// Loads field mappings from the environment, falling back to the
    /// defaults for the production list.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            name: field_env_or("CLICKUP_FIELD_NAME", defaults::NAME),
            email: field_env_or("CLICKUP_FIELD_EMAIL", defaults::EMAIL),
            company: field_env_or("CLICKUP_FIELD_COMPANY", defaults::COMPANY),
            role: field_env_or("CLICKUP_FIELD_ROLE", defaults::ROLE),
            country: field_env_or("CLICKUP_FIELD_COUNTRY", defaults::COUNTRY),
            phone: field_env_or("CLICKUP_FIELD_PHONE", defaults::PHONE),
            number_of_locations: field_env_or(
                "CLICKUP_FIELD_NUMBER_OF_LOCATIONS",
                defaults::NUMBER_OF_LOCATIONS,
            ),
            primary_pos: field_env_or("CLICKUP_FIELD_PRIMARY_POS", defaults::PRIMARY_POS),
            message: field_env_or("CLICKUP_FIELD_MESSAGE", defaults::MESSAGE),
            cta_label: field_env_or("CLICKUP_FIELD_CTA_LABEL", defaults::CTA_LABEL),
            source_page: field_env_or("CLICKUP_FIELD_SOURCE_PAGE", defaults::SOURCE_PAGE),
            utm_source: field_env_or("CLICKUP_FIELD_UTM_SOURCE", defaults::UTM_SOURCE),
            utm_medium: field_env_or("CLICKUP_FIELD_UTM_MEDIUM", defaults::UTM_MEDIUM),
            utm_campaign: field_env_or("CLICKUP_FIELD_UTM_CAMPAIGN", defaults::UTM_CAMPAIGN),
        }
    }
}

impl Default for FieldMappings {
    fn default() -> Self {
        Self {
            name: CustomFieldId::new(defaults::NAME),
            email: CustomFieldId::new(defaults::EMAIL),
            company: CustomFieldId::new(defaults::COMPANY),
            role: CustomFieldId::new(defaults::ROLE),
            country: CustomFieldId::new(defaults::COUNTRY),
            phone: CustomFieldId::new(defaults::PHONE),
            number_of_locations: CustomFieldId::new(defaults::NUMBER_OF_LOCATIONS),
            primary_pos: CustomFieldId::new(defaults::PRIMARY_POS),
            message: CustomFieldId::new(defaults::MESSAGE),
            cta_label: CustomFieldId::new(defaults::CTA_LABEL),
            source_page: CustomFieldId::new(defaults::SOURCE_PAGE),
            utm_source: CustomFieldId::new(defaults::UTM_SOURCE),
            utm_medium: CustomFieldId::new(defaults::UTM_MEDIUM),
            utm_campaign: CustomFieldId::new(defaults::UTM_CAMPAIGN),
        }
    }
}

/// Fallback field identifiers for the production lead list.
mod defaults {
    pub const NAME: &str = "5f9a1c2e-7b4d-4e0a-9c3f-1d2e3f4a5b6c";
    pub const EMAIL: &str = "8c1d2e3f-4a5b-6c7d-8e9f-0a1b2c3d4e5f";
    pub const COMPANY: &str = "2b3c4d5e-6f7a-8b9c-0d1e-2f3a4b5c6d7e";
    pub const ROLE: &str = "9d8c7b6a-5f4e-3d2c-1b0a-9f8e7d6c5b4a";
    pub const COUNTRY: &str = "4e5f6a7b-8c9d-0e1f-2a3b-4c5d6e7f8a9b";
    pub const PHONE: &str = "1a2b3c4d-5e6f-7a8b-9c0d-1e2f3a4b5c6d";
    pub const NUMBER_OF_LOCATIONS: &str = "6c7d8e9f-0a1b-2c3d-4e5f-6a7b8c9d0e1f";
    pub const PRIMARY_POS: &str = "3f4a5b6c-7d8e-9f0a-1b2c-3d4e5f6a7b8c";
    pub const MESSAGE: &str = "7b8c9d0e-1f2a-3b4c-5d6e-7f8a9b0c1d2e";
    pub const CTA_LABEL: &str = "0e1f2a3b-4c5d-6e7f-8a9b-0c1d2e3f4a5b";
    pub const SOURCE_PAGE: &str = "5d6e7f8a-9b0c-1d2e-3f4a-5b6c7d8e9f0a";
    pub const UTM_SOURCE: &str = "2c3d4e5f-6a7b-8c9d-0e1f-2a3b4c5d6e7f";
    pub const UTM_MEDIUM: &str = "8e9f0a1b-2c3d-4e5f-6a7b-8c9d0e1f2a3b";
    pub const UTM_CAMPAIGN: &str = "4a5b6c7d-8e9f-0a1b-2c3d-4e5f6a7b8c9d";
}

fn env_opt(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn env_or(name: &str, default: &str) -> String {
    env_opt(name).unwrap_or_else(|| default.to_owned())
}

fn field_env_or(name: &str, default: &str) -> CustomFieldId {
    CustomFieldId::new(env_or(name, default))
}
