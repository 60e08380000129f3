use uuid::Uuid;

use super::errors::StoreError;
use crate::domain::shared::value_objects::non_blank;

#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    pub uuid: Uuid,
    pub name: String,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StorePatch {
    pub name: Option<String>,
    pub location: Option<String>,
}

impl StorePatch {
    pub fn new(name: Option<String>, location: Option<String>) -> Result<Self, StoreError> {
        let name = match name {
            Some(n) => Some(non_blank(n).ok_or(StoreError::NameEmpty)?),
            None => None,
        };
        Ok(Self { name, location })
    }
}

impl Store {
    pub fn new(name: String, location: Option<String>) -> Result<Self, StoreError> {
        let name = non_blank(name).ok_or(StoreError::NameEmpty)?;
        Ok(Self {
            uuid: Uuid::new_v4(),
            name,
            location,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(uuid: Uuid, name: String, location: Option<String>) -> Self {
        Self {
            uuid,
            name,
            location,
        }
    }

    pub fn apply_patch(&mut self, patch: &StorePatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(location) = &patch.location {
            self.location = Some(location.clone());
        }
    }
}
