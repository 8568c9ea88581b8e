//! Shapes shared by every resource family: the list wrapper, expandable
//! references, tombstones, addresses and the write-side helpers for
//! clearing a field or filtering on a time range.

use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_with::skip_serializing_none;

use crate::lit::{EmptyString, ListObject, LitTrue};

/// Seconds since the Unix epoch.
pub type Timestamp = i64;

/// Caller-defined key/value annotations attached to a resource.
pub type Metadata = IndexMap<String, String>;

/// Implemented by every resource that carries an identifier.
pub trait Object {
    /// Unique identifier for the object.
    fn id(&self) -> &str;

    /// String representing the object's type.
    fn object(&self) -> &str;
}

/// Stripe-compatible list response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List<T> {
    pub object: ListObject,
    pub data: Vec<T>,
    pub has_more: bool,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
}

impl<T> List<T> {
    pub fn new(url: impl Into<String>, data: Vec<T>, has_more: bool) -> Self {
        Self {
            object: ListObject,
            data,
            has_more,
            url: url.into(),
            total_count: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new("", Vec::new(), false)
    }
}

/// A reference that is either a bare identifier or, when requested through
/// `expand`, the full object inlined.
///
/// The variant is picked by the JSON shape: a string is an id, an object is
/// the expanded resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expandable<T> {
    Id(String),
    Object(Box<T>),
}

impl<T: Object> Expandable<T> {
    /// The referenced identifier, whether or not the object was expanded.
    pub fn id(&self) -> &str {
        match self {
            Expandable::Id(id) => id,
            Expandable::Object(object) => object.id(),
        }
    }
}

impl<T> Expandable<T> {
    pub fn is_expanded(&self) -> bool {
        matches!(self, Expandable::Object(_))
    }

    pub fn as_object(&self) -> Option<&T> {
        match self {
            Expandable::Id(_) => None,
            Expandable::Object(object) => Some(object),
        }
    }

    pub fn into_object(self) -> Option<T> {
        match self {
            Expandable::Id(_) => None,
            Expandable::Object(object) => Some(*object),
        }
    }
}

impl<T> From<String> for Expandable<T> {
    fn from(id: String) -> Self {
        Expandable::Id(id)
    }
}

impl<T> From<&str> for Expandable<T> {
    fn from(id: &str) -> Self {
        Expandable::Id(id.to_string())
    }
}

/// The record left behind once a resource is deleted.
///
/// Carries exactly the identifier, the resource's discriminator and the
/// `deleted: true` literal; anything else in the payload is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Deleted<L> {
    pub id: String,
    pub object: L,
    pub deleted: LitTrue,
}

impl<L: Default> Deleted<L> {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            object: L::default(),
            deleted: LitTrue,
        }
    }
}

impl<L: AsRef<str>> Object for Deleted<L> {
    fn id(&self) -> &str {
        &self.id
    }

    fn object(&self) -> &str {
        self.object.as_ref()
    }
}

/// An expanded object whose shape is declared elsewhere in the API.
///
/// Keeps `id` and `object` typed and everything else as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiObject {
    pub id: String,
    pub object: String,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl ApiObject {
    pub fn get(&self, field: &str) -> Option<&serde_json::Value> {
        self.fields.get(field)
    }
}

impl Object for ApiObject {
    fn id(&self) -> &str {
        &self.id
    }

    fn object(&self) -> &str {
        &self.object
    }
}

pub type BalanceTransaction = ApiObject;
pub type Charge = ApiObject;
pub type Coupon = ApiObject;
pub type Customer = ApiObject;
pub type File = ApiObject;
pub type PaymentIntent = ApiObject;
pub type PaymentMethod = ApiObject;
pub type Product = ApiObject;
pub type SetupIntent = ApiObject;
pub type Sku = ApiObject;
pub type Subscription = ApiObject;
pub type TaxRate = ApiObject;

lit_str!(DiscountObject, "discount");

/// A coupon applied to a customer or subscription. Discounts carry no id of
/// their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub object: DiscountObject,
    pub coupon: Coupon,
    #[serde(default)]
    pub customer: Option<Expandable<Customer>>,
    /// When the discount stops applying; `None` for forever coupons.
    #[serde(default)]
    pub end: Option<Timestamp>,
    pub start: Timestamp,
    #[serde(default)]
    pub subscription: Option<String>,
}

/// A write-side value that may also be sent as `""` to clear the field.
#[derive(Debug, Clone, PartialEq)]
pub enum Emptyable<T> {
    Set(T),
    Unset,
}

impl<T> From<T> for Emptyable<T> {
    fn from(value: T) -> Self {
        Emptyable::Set(value)
    }
}

impl<T> Emptyable<T> {
    pub fn as_set(&self) -> Option<&T> {
        match self {
            Emptyable::Set(value) => Some(value),
            Emptyable::Unset => None,
        }
    }
}

impl<T: Serialize> Serialize for Emptyable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Emptyable::Set(value) => value.serialize(serializer),
            Emptyable::Unset => EmptyString.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Emptyable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr<T> {
            Empty(EmptyString),
            Set(T),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Empty(_) => Emptyable::Unset,
            Repr::Set(value) => Emptyable::Set(value),
        })
    }
}

/// A union with known members that also accepts any other string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Open<T> {
    Known(T),
    Other(String),
}

impl<T> From<T> for Open<T> {
    fn from(value: T) -> Self {
        Open::Known(value)
    }
}

impl<T> Open<T> {
    /// The known member, if the value is one.
    pub fn known(&self) -> Option<&T> {
        match self {
            Open::Known(value) => Some(value),
            Open::Other(_) => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Open<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Open::Known(value) => fmt::Display::fmt(value, f),
            Open::Other(raw) => f.write_str(raw),
        }
    }
}

/// Filter on a timestamp field: an exact value or a set of bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RangeQuery {
    Exact(Timestamp),
    Bounds(RangeBounds),
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeBounds {
    /// Minimum value to filter by (exclusive)
    pub gt: Option<Timestamp>,
    /// Minimum value to filter by (inclusive)
    pub gte: Option<Timestamp>,
    /// Maximum value to filter by (exclusive)
    pub lt: Option<Timestamp>,
    /// Maximum value to filter by (inclusive)
    pub lte: Option<Timestamp>,
}

impl RangeQuery {
    pub fn exact(at: DateTime<Utc>) -> Self {
        RangeQuery::Exact(at.timestamp())
    }

    /// Everything at or after `from`.
    pub fn since(from: DateTime<Utc>) -> Self {
        RangeQuery::Bounds(RangeBounds {
            gte: Some(from.timestamp()),
            ..Default::default()
        })
    }

    /// Everything strictly before `until`.
    pub fn before(until: DateTime<Utc>) -> Self {
        RangeQuery::Bounds(RangeBounds {
            lt: Some(until.timestamp()),
            ..Default::default()
        })
    }

    /// Half-open window `[from, until)`.
    pub fn between(from: DateTime<Utc>, until: DateTime<Utc>) -> Self {
        RangeQuery::Bounds(RangeBounds {
            gte: Some(from.timestamp()),
            lt: Some(until.timestamp()),
            ..Default::default()
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// City/District/Suburb/Town/Village.
    #[serde(default)]
    pub city: Option<String>,
    /// 2-letter country code.
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub line1: Option<String>,
    #[serde(default)]
    pub line2: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    /// State/County/Province/Region.
    #[serde(default)]
    pub state: Option<String>,
}

/// Kana or kanji variation of an address (Japan only).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JapanAddress {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub line1: Option<String>,
    #[serde(default)]
    pub line2: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    /// Town/cho-me.
    #[serde(default)]
    pub town: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressParams {
    pub city: Option<String>,
    pub country: Option<String>,
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JapanAddressParams {
    pub city: Option<String>,
    pub country: Option<String>,
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
    pub town: Option<String>,
}

/// Front/back file ids of an identity document upload.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentParams {
    pub back: Option<String>,
    pub front: Option<String>,
}

/// Parameters shared by every retrieve-style call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpandParams {
    /// Specifies which fields in the response should be expanded.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

/// Parameters for calls that take no input at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmptyParams {}

/// Cursor parameters shared by every list call.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListParams {
    /// Object id to page backwards from.
    pub ending_before: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    /// Between 1 and 100, defaults to 10.
    pub limit: Option<u64>,
    /// Object id to page forwards from.
    pub starting_after: Option<String>,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    lit_str!(WidgetObject, "widget");

    #[test]
    fn test_expandable_narrows_on_shape() {
        let id: Expandable<ApiObject> = serde_json::from_value(json!("ch_123")).unwrap();
        assert_eq!(id, Expandable::Id("ch_123".to_string()));
        assert_eq!(id.id(), "ch_123");
        assert!(!id.is_expanded());

        let expanded: Expandable<ApiObject> = serde_json::from_value(json!({
            "id": "ch_123",
            "object": "charge",
            "amount": 1000
        }))
        .unwrap();
        assert!(expanded.is_expanded());
        assert_eq!(expanded.id(), "ch_123");
        let charge = expanded.as_object().unwrap();
        assert_eq!(charge.object, "charge");
        assert_eq!(charge.get("amount"), Some(&json!(1000)));
    }

    #[test]
    fn test_deleted_has_exactly_three_fields() {
        let tombstone: Deleted<WidgetObject> = Deleted::new("wd_1");
        assert_eq!(
            serde_json::to_value(&tombstone).unwrap(),
            json!({ "id": "wd_1", "object": "widget", "deleted": true })
        );

        let extra = json!({ "id": "wd_1", "object": "widget", "deleted": true, "name": "x" });
        assert!(serde_json::from_value::<Deleted<WidgetObject>>(extra).is_err());

        let not_deleted = json!({ "id": "wd_1", "object": "widget", "deleted": false });
        assert!(serde_json::from_value::<Deleted<WidgetObject>>(not_deleted).is_err());

        let wrong_object = json!({ "id": "wd_1", "object": "gadget", "deleted": true });
        assert!(serde_json::from_value::<Deleted<WidgetObject>>(wrong_object).is_err());
    }

    #[test]
    fn test_emptyable_clears_with_empty_string() {
        let unset: Emptyable<Vec<String>> = Emptyable::Unset;
        assert_eq!(serde_json::to_value(&unset).unwrap(), json!(""));

        let set: Emptyable<Vec<String>> = vec!["txr_1".to_string()].into();
        assert_eq!(serde_json::to_value(&set).unwrap(), json!(["txr_1"]));

        let parsed: Emptyable<f64> = serde_json::from_value(json!("")).unwrap();
        assert_eq!(parsed, Emptyable::Unset);
        let parsed: Emptyable<f64> = serde_json::from_value(json!(12.5)).unwrap();
        assert_eq!(parsed.as_set(), Some(&12.5));
    }

    #[test]
    fn test_range_query_shapes() {
        let from = Utc.with_ymd_and_hms(2019, 11, 1, 0, 0, 0).unwrap();
        let until = Utc.with_ymd_and_hms(2019, 12, 1, 0, 0, 0).unwrap();

        assert_eq!(
            serde_json::to_value(RangeQuery::between(from, until)).unwrap(),
            json!({ "gte": 1572566400, "lt": 1575158400 })
        );
        assert_eq!(
            serde_json::to_value(RangeQuery::exact(from)).unwrap(),
            json!(1572566400)
        );

        let parsed: RangeQuery = serde_json::from_value(json!({ "lte": 10 })).unwrap();
        assert_eq!(
            parsed,
            RangeQuery::Bounds(RangeBounds {
                lte: Some(10),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_list_wrapper() {
        let list: List<ApiObject> = serde_json::from_value(json!({
            "object": "list",
            "data": [{ "id": "ch_1", "object": "charge" }],
            "has_more": true,
            "url": "/v1/charges"
        }))
        .unwrap();
        assert_eq!(list.data.len(), 1);
        assert!(list.has_more);
        assert_eq!(list.total_count, None);

        let not_a_list = json!({ "object": "charge", "data": [], "has_more": false, "url": "" });
        assert!(serde_json::from_value::<List<ApiObject>>(not_a_list).is_err());
    }

    #[test]
    fn test_list_params_skip_unset_fields() {
        let params = ListParams {
            limit: Some(3),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&params).unwrap(), json!({ "limit": 3 }));
    }
}
