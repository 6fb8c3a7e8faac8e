//! The Plan resource: a named service tier with a short description.

use serde::{Deserialize, Serialize};

use crate::resource::{Draft, OptionItem, Resource, truncate_chars};

pub const NAME_MAX_CHARS: usize = 20;
pub const DESCRIPTION_MAX_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
}

impl Plan {
    /// `{label: name, value: _id}` projection for selection fields.
    #[must_use]
    pub fn option(&self) -> OptionItem {
        OptionItem {
            label: self.name.clone(),
            value: self.id.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDraft {
    pub name: String,
    pub description: String,
}

impl Draft for PlanDraft {
    fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.description.is_empty()
    }

    fn clamp(&mut self) {
        truncate_chars(&mut self.name, NAME_MAX_CHARS);
        truncate_chars(&mut self.description, DESCRIPTION_MAX_CHARS);
    }
}

impl Resource for Plan {
    type Draft = PlanDraft;
    const COLLECTION_PATH: &'static str = "/plans";
    const NOUN: &'static str = "Plan";

    fn id(&self) -> &str {
        &self.id
    }

    fn draft(&self) -> PlanDraft {
        PlanDraft {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}
