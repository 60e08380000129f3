use uuid::Uuid;

use super::errors::UserPreferencesError;
use super::value_objects::{Currency, Language};
use crate::domain::shared::value_objects::{UserId, parse_optional};
use crate::domain::store::model::Store;

#[derive(Debug, Clone, PartialEq)]
pub struct UserPreferences {
    pub uuid: Uuid,
    pub owner: UserId,
    pub currency: Currency,
    pub language: Language,
    pub location: String,
    pub notification_enabled: bool,
    pub email_alerts: bool,
    /// Distinct stores, ordered by name.
    pub preferred_stores: Vec<Store>,
}

/// Sparse update of a user's preferences; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPreferencesPatch {
    pub currency: Option<Currency>,
    pub language: Option<Language>,
    pub location: Option<String>,
    pub notification_enabled: Option<bool>,
    pub email_alerts: Option<bool>,
}

impl UserPreferencesPatch {
    /// Builds a patch from raw request values. Currency and language must
    /// name a member of their enum; anything else is rejected here, before
    /// the patch can be applied.
    pub fn new(
        currency: Option<&str>,
        language: Option<&str>,
        location: Option<String>,
        notification_enabled: Option<bool>,
        email_alerts: Option<bool>,
    ) -> Result<Self, UserPreferencesError> {
        Ok(Self {
            currency: parse_optional(currency, || UserPreferencesError::InvalidCurrency)?,
            language: parse_optional(language, || UserPreferencesError::InvalidLanguage)?,
            location,
            notification_enabled,
            email_alerts,
        })
    }
}

impl UserPreferences {
    /// Fresh preferences for a user that has none stored yet.
    pub fn defaults_for(owner: UserId) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            owner,
            currency: Currency::default(),
            language: Language::default(),
            location: String::new(),
            notification_enabled: false,
            email_alerts: false,
            preferred_stores: Vec::new(),
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        uuid: Uuid,
        owner: UserId,
        currency: Currency,
        language: Language,
        location: String,
        notification_enabled: bool,
        email_alerts: bool,
        preferred_stores: Vec<Store>,
    ) -> Self {
        let mut preferences = Self {
            uuid,
            owner,
            currency,
            language,
            location,
            notification_enabled,
            email_alerts,
            preferred_stores: Vec::new(),
        };
        preferences.replace_preferred_stores(preferred_stores);
        preferences
    }

    pub fn apply_patch(&mut self, patch: &UserPreferencesPatch) {
        if let Some(currency) = patch.currency {
            self.currency = currency;
        }
        if let Some(language) = patch.language {
            self.language = language;
        }
        if let Some(location) = &patch.location {
            self.location = location.clone();
        }
        if let Some(enabled) = patch.notification_enabled {
            self.notification_enabled = enabled;
        }
        if let Some(enabled) = patch.email_alerts {
            self.email_alerts = enabled;
        }
    }

    /// Overwrites every scalar preference with its default. The preferred
    /// store set is kept.
    pub fn reset_to_defaults(&mut self) {
        self.currency = Currency::default();
        self.language = Language::default();
        self.location = String::new();
        self.notification_enabled = false;
        self.email_alerts = false;
    }

    pub fn replace_preferred_stores(&mut self, mut stores: Vec<Store>) {
        stores.sort_by(|a, b| a.name.cmp(&b.name).then(a.uuid.cmp(&b.uuid)));
        stores.dedup_by_key(|store| store.uuid);
        self.preferred_stores = stores;
    }
}
