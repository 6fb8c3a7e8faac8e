//! The ZipCode resource: a serviced postal code with its city and state.

use serde::{Deserialize, Serialize};

use crate::resource::{Draft, OptionItem, Resource, truncate_chars};

pub const ZIP_CODE_CHARS: usize = 5;
pub const CITY_MAX_CHARS: usize = 20;
pub const STATE_MAX_CHARS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZipCode {
    #[serde(rename = "_id")]
    pub id: String,
    pub zip_code: String,
    pub city: String,
    pub state: String,
}

impl ZipCode {
    /// `{label: zipCode, value: _id}` projection for selection fields.
    #[must_use]
    pub fn option(&self) -> OptionItem {
        OptionItem {
            label: self.zip_code.clone(),
            value: self.id.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZipCodeDraft {
    pub zip_code: String,
    pub city: String,
    pub state: String,
}

impl Draft for ZipCodeDraft {
    fn is_complete(&self) -> bool {
        !self.zip_code.is_empty() && !self.city.is_empty() && !self.state.is_empty()
    }

    fn clamp(&mut self) {
        truncate_chars(&mut self.zip_code, ZIP_CODE_CHARS);
        truncate_chars(&mut self.city, CITY_MAX_CHARS);
        truncate_chars(&mut self.state, STATE_MAX_CHARS);
    }
}

impl Resource for ZipCode {
    type Draft = ZipCodeDraft;
    const COLLECTION_PATH: &'static str = "/zip-codes";
    const NOUN: &'static str = "Zip code";

    fn id(&self) -> &str {
        &self.id
    }

    fn draft(&self) -> ZipCodeDraft {
        ZipCodeDraft {
            zip_code: self.zip_code.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
        }
    }
}
