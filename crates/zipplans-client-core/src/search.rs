//! Anonymous plan lookup by zip code, with a yearly/monthly display toggle.

use serde::Deserialize;

use crate::notify::{NotificationSink, Severity};
use crate::price::monthly_amount;
use crate::resource::{ListRender, render_list, truncate_chars};
use crate::zip_code::ZIP_CODE_CHARS;
use zipplans_api_client::{Gateway, Method};

/// One row of the public lookup: a plan with its yearly price for the
/// searched zip code.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlanQuote {
    #[serde(rename = "_id")]
    pub id: String,
    pub plan: QuotedPlan,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuotedPlan {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingPeriod {
    Yearly,
    Monthly,
}

/// State for the public landing page's search flow.
#[derive(Debug)]
pub struct SearchPage {
    pub zip_code: String,
    pub period: BillingPeriod,
    pub loading: bool,
    pub quotes: Vec<PlanQuote>,
}

impl Default for SearchPage {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchPage {
    #[must_use]
    pub fn new() -> Self {
        Self {
            zip_code: String::new(),
            period: BillingPeriod::Yearly,
            loading: false,
            quotes: Vec::new(),
        }
    }

    pub fn set_zip_code(&mut self, value: &str) {
        self.zip_code = value.to_string();
        truncate_chars(&mut self.zip_code, ZIP_CODE_CHARS);
    }

    pub fn toggle_period(&mut self) {
        self.period = match self.period {
            BillingPeriod::Yearly => BillingPeriod::Monthly,
            BillingPeriod::Monthly => BillingPeriod::Yearly,
        };
    }

    /// Looks up plan prices for the entered zip code. A success replaces the
    /// quote list wholesale; a failure surfaces the server message and
    /// leaves the list unchanged.
    pub async fn submit(&mut self, gateway: &dyn Gateway, notifier: &dyn NotificationSink) {
        self.loading = true;
        let path = format!("/public/plans-prices/{}", self.zip_code);
        let response = gateway.send(Method::Get, &path, None).await;

        if response.is(200) {
            let data = response
                .data
                .unwrap_or_else(|| serde_json::Value::Array(Vec::new()));
            match serde_json::from_value::<Vec<PlanQuote>>(data) {
                Ok(quotes) => self.quotes = quotes,
                Err(err) => tracing::warn!(%err, "failed to decode plan quotes"),
            }
        } else {
            notifier.notify("Error", &response.message, Severity::Danger);
        }
        self.loading = false;
    }

    /// Price shown for a quote under the current period toggle. The monthly
    /// value is derived on the client and never persisted.
    #[must_use]
    pub fn display_price(&self, quote: &PlanQuote) -> f64 {
        match self.period {
            BillingPeriod::Yearly => quote.price,
            BillingPeriod::Monthly => monthly_amount(quote.price),
        }
    }

    /// Same three-way branch the management lists use.
    #[must_use]
    pub fn render(&self) -> ListRender<'_, PlanQuote> {
        render_list(self.loading, &self.quotes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(price: f64) -> PlanQuote {
        PlanQuote {
            id: "q1".to_string(),
            plan: QuotedPlan {
                name: "Small".to_string(),
                description: "0.5m".to_string(),
            },
            price,
        }
    }

    #[test]
    fn display_price_follows_the_period_toggle() {
        let mut page = SearchPage::new();
        let quote = quote(1200.0);
        assert!((page.display_price(&quote) - 1200.0).abs() < f64::EPSILON);

        page.toggle_period();
        assert!((page.display_price(&quote) - 100.0).abs() < f64::EPSILON);

        page.toggle_period();
        assert!((page.display_price(&quote) - 1200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn monthly_display_rounds_to_two_decimals() {
        let mut page = SearchPage::new();
        page.toggle_period();
        assert!((page.display_price(&quote(1000.0)) - 83.33).abs() < f64::EPSILON);
    }

    #[test]
    fn zip_code_input_is_capped_at_five_characters() {
        let mut page = SearchPage::new();
        page.set_zip_code("372071");
        assert_eq!(page.zip_code, "37207");
    }

    #[test]
    fn quote_wire_shape_decodes() {
        let parsed: PlanQuote = serde_json::from_str(
            r#"{"_id": "q1", "plan": {"name": "Small", "description": "0.5m"}, "price": 500}"#,
        )
        .expect("quote");
        assert_eq!(parsed.plan.name, "Small");
        assert!((parsed.price - 500.0).abs() < f64::EPSILON);
    }
}
