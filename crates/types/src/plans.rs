//! Plans: recurring pricing attached to a product.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{
    common::{
        Deleted, EmptyParams, ExpandParams, Expandable, ListParams, Metadata, Object, Product,
        RangeQuery, Timestamp,
    },
    lit::Inf,
};

lit_str!(PlanObject, "plan");

pub type DeletedPlan = Deleted<PlanObject>;

// ============================================================================
// Enum Types
// ============================================================================

/// How metered usage is summarized over a billing period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregateUsage {
    LastDuringPeriod,
    LastEver,
    Max,
    Sum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingScheme {
    PerUnit,
    Tiered,
}

/// Billing frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanInterval {
    Day,
    Month,
    Week,
    Year,
}

impl PlanInterval {
    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanInterval::Day => "day",
            PlanInterval::Month => "month",
            PlanInterval::Week => "week",
            PlanInterval::Year => "year",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TiersMode {
    Graduated,
    Volume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformRound {
    Down,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageType {
    Licensed,
    Metered,
}

// ============================================================================
// Plan
// ============================================================================

/// The Plan object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub object: PlanObject,
    /// Whether the plan is currently available for new subscriptions.
    pub active: bool,
    #[serde(default)]
    pub aggregate_usage: Option<AggregateUsage>,
    /// The amount in the smallest currency unit to be charged, represented as a whole integer if possible.
    #[serde(default)]
    pub amount: Option<i64>,
    #[serde(default)]
    pub amount_decimal: Option<String>,
    #[serde(default)]
    pub billing_scheme: Option<BillingScheme>,
    pub created: Timestamp,
    pub currency: String,
    pub interval: PlanInterval,
    /// The number of intervals between subscription billings.
    pub interval_count: u32,
    pub livemode: bool,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub nickname: Option<String>,
    /// The product whose pricing this plan determines.
    #[serde(default)]
    pub product: Option<Expandable<Product>>,
    #[serde(default)]
    pub tiers: Option<Vec<PlanTier>>,
    #[serde(default)]
    pub tiers_mode: Option<TiersMode>,
    #[serde(default)]
    pub transform_usage: Option<TransformUsage>,
    #[serde(default)]
    pub trial_period_days: Option<u32>,
    pub usage_type: UsageType,
}

impl Object for Plan {
    fn id(&self) -> &str {
        &self.id
    }

    fn object(&self) -> &str {
        PlanObject::VALUE
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanTier {
    #[serde(default)]
    pub flat_amount: Option<i64>,
    #[serde(default)]
    pub flat_amount_decimal: Option<String>,
    #[serde(default)]
    pub unit_amount: Option<i64>,
    #[serde(default)]
    pub unit_amount_decimal: Option<String>,
    /// Upper bound of this tier; `None` on the last, unbounded tier.
    #[serde(default)]
    pub up_to: Option<u64>,
}

/// Applied to reported usage before it is billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformUsage {
    pub divide_by: u64,
    pub round: TransformRound,
}

// ============================================================================
// Parameters
// ============================================================================

/// Upper bound of a tier in a create request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UpTo {
    Inf(Inf),
    Bounded(u64),
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanTierParams {
    pub flat_amount: Option<i64>,
    pub flat_amount_decimal: Option<String>,
    pub unit_amount: Option<i64>,
    pub unit_amount_decimal: Option<String>,
    pub up_to: UpTo,
}

/// A product to create alongside the plan.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineProductParams {
    pub active: Option<bool>,
    pub id: Option<String>,
    pub metadata: Option<Metadata>,
    /// The product's name, meant to be displayable to the customer.
    pub name: String,
    pub statement_descriptor: Option<String>,
    pub unit_label: Option<String>,
}

/// Either the id of an existing product or an inline product definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlanProductParams {
    Id(String),
    Inline(Box<InlineProductParams>),
}

impl From<&str> for PlanProductParams {
    fn from(id: &str) -> Self {
        PlanProductParams::Id(id.to_string())
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanCreateParams {
    pub active: Option<bool>,
    pub aggregate_usage: Option<AggregateUsage>,
    pub amount: Option<i64>,
    pub amount_decimal: Option<String>,
    pub billing_scheme: Option<BillingScheme>,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    /// An identifier randomly generated by Stripe when omitted.
    pub id: Option<String>,
    pub interval: PlanInterval,
    pub interval_count: Option<u32>,
    pub metadata: Option<Metadata>,
    pub nickname: Option<String>,
    pub product: Option<PlanProductParams>,
    pub tiers: Option<Vec<PlanTierParams>>,
    pub tiers_mode: Option<TiersMode>,
    pub transform_usage: Option<TransformUsage>,
    pub trial_period_days: Option<u32>,
    pub usage_type: Option<UsageType>,
}

impl PlanCreateParams {
    pub fn new(currency: impl Into<String>, interval: PlanInterval) -> Self {
        Self {
            active: None,
            aggregate_usage: None,
            amount: None,
            amount_decimal: None,
            billing_scheme: None,
            currency: currency.into(),
            expand: Vec::new(),
            id: None,
            interval,
            interval_count: None,
            metadata: None,
            nickname: None,
            product: None,
            tiers: None,
            tiers_mode: None,
            transform_usage: None,
            trial_period_days: None,
            usage_type: None,
        }
    }
}

pub type PlanDeleteParams = EmptyParams;
pub type PlanRetrieveParams = ExpandParams;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanListParams {
    /// Only return plans that are active or inactive.
    pub active: Option<bool>,
    pub created: Option<RangeQuery>,
    #[serde(flatten)]
    pub page: ListParams,
    /// Only return plans for the given product.
    pub product: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanUpdateParams {
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    pub metadata: Option<Metadata>,
    pub nickname: Option<String>,
    /// The product the plan belongs to. Only the id of an existing product is accepted.
    pub product: Option<String>,
    pub trial_period_days: Option<u32>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn plan_json() -> serde_json::Value {
        json!({
            "id": "gold",
            "object": "plan",
            "active": true,
            "aggregate_usage": null,
            "amount": 2000,
            "amount_decimal": "2000",
            "billing_scheme": "per_unit",
            "created": 1573000000,
            "currency": "usd",
            "interval": "month",
            "interval_count": 1,
            "livemode": false,
            "metadata": {},
            "nickname": null,
            "product": "prod_1",
            "tiers": null,
            "tiers_mode": null,
            "transform_usage": null,
            "trial_period_days": null,
            "usage_type": "licensed"
        })
    }

    #[test]
    fn test_created_plan_echoes_create_fields() {
        let mut params = PlanCreateParams::new("usd", PlanInterval::Month);
        params.amount = Some(2000);
        params.id = Some("gold".to_string());
        params.product = Some("prod_1".into());

        let plan: Plan = serde_json::from_value(plan_json()).unwrap();
        assert_eq!(plan.currency, params.currency);
        assert_eq!(plan.interval, params.interval);
        assert_eq!(plan.amount, params.amount);
        assert_eq!(plan.id(), params.id.as_deref().unwrap());
        assert_eq!(plan.product.as_ref().map(|p| p.id()), Some("prod_1"));
    }

    #[test]
    fn test_interval_is_closed() {
        let mut value = plan_json();
        value["interval"] = json!("fortnight");
        assert!(serde_json::from_value::<Plan>(value).is_err());

        let params = json!({ "currency": "usd", "interval": "quarter" });
        assert!(serde_json::from_value::<PlanCreateParams>(params).is_err());
    }

    #[test]
    fn test_create_requires_currency_and_interval() {
        assert!(serde_json::from_value::<PlanCreateParams>(json!({ "currency": "usd" })).is_err());
        assert!(
            serde_json::from_value::<PlanCreateParams>(json!({ "interval": "month" })).is_err()
        );
    }

    #[test]
    fn test_tiers_end_with_inf() {
        let mut params = PlanCreateParams::new("usd", PlanInterval::Month);
        params.billing_scheme = Some(BillingScheme::Tiered);
        params.tiers_mode = Some(TiersMode::Graduated);
        params.tiers = Some(vec![
            PlanTierParams {
                flat_amount: None,
                flat_amount_decimal: None,
                unit_amount: Some(500),
                unit_amount_decimal: None,
                up_to: UpTo::Bounded(10),
            },
            PlanTierParams {
                flat_amount: None,
                flat_amount_decimal: None,
                unit_amount: Some(400),
                unit_amount_decimal: None,
                up_to: UpTo::Inf(Inf),
            },
        ]);

        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value["tiers"],
            json!([
                { "unit_amount": 500, "up_to": 10 },
                { "unit_amount": 400, "up_to": "inf" }
            ])
        );

        let parsed: PlanTierParams = serde_json::from_value(json!({ "up_to": "inf" })).unwrap();
        assert_eq!(parsed.up_to, UpTo::Inf(Inf));
        assert!(serde_json::from_value::<PlanTierParams>(json!({ "up_to": "max" })).is_err());
    }

    #[test]
    fn test_inline_product_requires_name() {
        let inline = json!({ "currency": "usd", "interval": "year", "product": { "name": "Gold" } });
        let params: PlanCreateParams = serde_json::from_value(inline).unwrap();
        match params.product {
            Some(PlanProductParams::Inline(product)) => assert_eq!(product.name, "Gold"),
            other => panic!("expected inline product, got {other:?}"),
        }

        let nameless = json!({ "currency": "usd", "interval": "year", "product": { "active": true } });
        assert!(serde_json::from_value::<PlanCreateParams>(nameless).is_err());
    }

    #[test]
    fn test_deleted_plan() {
        let deleted = DeletedPlan::new("gold");
        assert_eq!(
            serde_json::to_value(&deleted).unwrap(),
            json!({ "id": "gold", "object": "plan", "deleted": true })
        );
    }
}
