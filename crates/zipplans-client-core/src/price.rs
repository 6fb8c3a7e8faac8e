//! The Price resource: binds a plan to a zip code with a yearly amount.
//!
//! Prices are the one resource with shape duality: the read path returns
//! hydrated `zipCode`/`plan` objects for display, the write path takes bare
//! ids. [`PriceView::draft`] is the total conversion between the two.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::page::ResourcePage;
use crate::plan::Plan;
use crate::resource::{Draft, OptionItem, Resource};
use crate::zip_code::ZipCode;
use zipplans_api_client::{Gateway, Method};

/// Hydrated read shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceView {
    #[serde(rename = "_id")]
    pub id: String,
    pub price: f64,
    pub zip_code: ZipCode,
    pub plan: Plan,
}

/// Id-keyed write shape. `zip_code` and `plan` are foreign keys into the
/// other two collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceDraft {
    pub price: f64,
    pub zip_code: String,
    pub plan: String,
}

impl Draft for PriceDraft {
    fn is_complete(&self) -> bool {
        self.price > 0.0 && !self.zip_code.is_empty() && !self.plan.is_empty()
    }

    fn clamp(&mut self) {}
}

impl Resource for PriceView {
    type Draft = PriceDraft;
    const COLLECTION_PATH: &'static str = "/prices";
    const NOUN: &'static str = "Price";

    fn id(&self) -> &str {
        &self.id
    }

    /// Flattens the hydrated references to bare ids. Mandatory before
    /// seeding an update form: the selection fields operate on ids.
    fn draft(&self) -> PriceDraft {
        PriceDraft {
            price: self.price,
            zip_code: self.zip_code.id.clone(),
            plan: self.plan.id.clone(),
        }
    }
}

/// Display-only monthly amount: yearly / 12, rounded to 2 decimals. Never
/// persisted.
#[must_use]
pub fn monthly_amount(yearly: f64) -> f64 {
    (yearly / 12.0 * 100.0).round() / 100.0
}

/// The prices page: the price collection plus the dependent option lists the
/// create/update forms need for their selection fields.
#[derive(Debug, Default)]
pub struct PricesPage {
    pub page: ResourcePage<PriceView>,
    pub plan_options: Vec<OptionItem>,
    pub zip_code_options: Vec<OptionItem>,
}

impl PricesPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches prices, plans, and zip codes concurrently on page
    /// activation; none blocks the others, and a failed option fetch leaves
    /// the previous list unchanged.
    pub async fn activate(&mut self, gateway: &dyn Gateway) {
        let (plans, zip_codes, ()) = futures::join!(
            fetch_options::<Plan>(gateway, Plan::option),
            fetch_options::<ZipCode>(gateway, ZipCode::option),
            self.page.load(gateway),
        );
        if let Some(plans) = plans {
            self.plan_options = plans;
        }
        if let Some(zip_codes) = zip_codes {
            self.zip_code_options = zip_codes;
        }
    }
}

async fn fetch_options<R: Resource>(
    gateway: &dyn Gateway,
    project: impl Fn(&R) -> OptionItem,
) -> Option<Vec<OptionItem>> {
    let response = gateway.send(Method::Get, R::COLLECTION_PATH, None).await;
    if !response.is(200) {
        tracing::warn!(
            resource = R::NOUN,
            status = response.http_status,
            message = %response.message,
            "failed to load options"
        );
        return None;
    }

    let data = response.data.unwrap_or_else(|| Value::Array(Vec::new()));
    match serde_json::from_value::<Vec<R>>(data) {
        Ok(records) => Some(records.iter().map(project).collect()),
        Err(err) => {
            tracing::warn!(resource = R::NOUN, %err, "failed to decode options");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_view() -> PriceView {
        PriceView {
            id: "p1".to_string(),
            price: 500.0,
            zip_code: ZipCode {
                id: "z1".to_string(),
                zip_code: "37207".to_string(),
                city: "Nashville".to_string(),
                state: "TN".to_string(),
            },
            plan: Plan {
                id: "pl1".to_string(),
                name: "Small".to_string(),
                description: "0.5m".to_string(),
            },
        }
    }

    #[test]
    fn draft_flattens_hydrated_references_to_ids() {
        let draft = sample_view().draft();
        assert_eq!(
            draft,
            PriceDraft {
                price: 500.0,
                zip_code: "z1".to_string(),
                plan: "pl1".to_string(),
            }
        );
    }

    #[test]
    fn draft_body_carries_bare_ids_on_the_wire() {
        let body = serde_json::to_value(sample_view().draft()).expect("body");
        assert_eq!(body["zipCode"], "z1");
        assert_eq!(body["plan"], "pl1");
        assert_eq!(body["price"], 500.0);
    }

    #[test]
    fn draft_requires_a_positive_price_and_both_ids() {
        let mut draft = PriceDraft::default();
        assert!(!draft.is_complete());

        draft.price = 500.0;
        draft.zip_code = "z1".to_string();
        assert!(!draft.is_complete());

        draft.plan = "pl1".to_string();
        assert!(draft.is_complete());

        draft.price = 0.0;
        assert!(!draft.is_complete());
    }

    #[test]
    fn monthly_amount_rounds_to_two_decimals() {
        assert!((monthly_amount(1200.0) - 100.0).abs() < f64::EPSILON);
        assert!((monthly_amount(1000.0) - 83.33).abs() < f64::EPSILON);
    }

    #[test]
    fn hydrated_wire_shape_decodes() {
        let view: PriceView = serde_json::from_str(
            r#"{
                "_id": "p1",
                "price": 500,
                "zipCode": {"_id": "z1", "zipCode": "37207", "city": "Nashville", "state": "TN"},
                "plan": {"_id": "pl1", "name": "Small", "description": "0.5m"}
            }"#,
        )
        .expect("price view");
        assert_eq!(view.zip_code.id, "z1");
        assert_eq!(view.plan.id, "pl1");
    }
}
