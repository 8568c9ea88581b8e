//! Terminal readers: in-person card readers registered to an account.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::common::{Deleted, Object, Open};

lit_str!(ReaderObject, "terminal.reader");

pub type DeletedReader = Deleted<ReaderObject>;

/// Type of reader hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum DeviceType {
    #[serde(rename = "bbpos_chipper2x")]
    BbposChipper2x,
    #[serde(rename = "verifone_P400")]
    VerifoneP400,
}

/// Network status of a reader, as used by the list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReaderStatus {
    Offline,
    Online,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reader {
    pub id: String,
    pub object: ReaderObject,
    /// The current software version of the reader.
    #[serde(default)]
    pub device_sw_version: Option<String>,
    pub device_type: DeviceType,
    #[serde(default)]
    pub ip_address: Option<String>,
    /// Custom label given to the reader for easier identification.
    pub label: String,
    /// The location identifier of the reader.
    #[serde(default)]
    pub location: Option<String>,
    pub serial_number: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl Object for Reader {
    fn id(&self) -> &str {
        &self.id
    }

    fn object(&self) -> &str {
        ReaderObject::VALUE
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderCreateParams {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    pub label: Option<String>,
    pub location: Option<String>,
    /// To group objects on your platform account by connected account.
    pub operator_account: Option<String>,
    /// A code generated by the reader used for registering to an account.
    pub registration_code: String,
}

impl ReaderCreateParams {
    pub fn new(registration_code: impl Into<String>) -> Self {
        Self {
            expand: Vec::new(),
            label: None,
            location: None,
            operator_account: None,
            registration_code: registration_code.into(),
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderDeleteParams {
    pub operator_account: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderListParams {
    pub device_type: Option<Open<DeviceType>>,
    pub ending_before: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    pub limit: Option<u64>,
    pub location: Option<String>,
    pub operator_account: Option<String>,
    pub starting_after: Option<String>,
    pub status: Option<Open<ReaderStatus>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderRetrieveParams {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    pub operator_account: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderUpdateParams {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    pub label: Option<String>,
    pub operator_account: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_reader_deserializes() {
        let reader: Reader = serde_json::from_value(json!({
            "id": "tmr_1",
            "object": "terminal.reader",
            "device_sw_version": null,
            "device_type": "verifone_P400",
            "ip_address": "192.168.2.2",
            "label": "Front desk",
            "location": null,
            "serial_number": "123-456-789",
            "status": "online"
        }))
        .unwrap();
        assert_eq!(reader.device_type, DeviceType::VerifoneP400);
        assert_eq!(reader.device_sw_version, None);
        assert_eq!(reader.object(), "terminal.reader");
    }

    #[test]
    fn test_device_type_is_closed_on_the_resource() {
        let value = json!({
            "id": "tmr_1",
            "object": "terminal.reader",
            "device_type": "wisepos_e",
            "label": "Front desk",
            "serial_number": "123"
        });
        assert!(serde_json::from_value::<Reader>(value).is_err());
    }

    #[test]
    fn test_list_filters_are_open() {
        let params: ReaderListParams = serde_json::from_value(json!({
            "device_type": "wisepos_e",
            "status": "online"
        }))
        .unwrap();
        assert_eq!(params.device_type, Some(Open::Other("wisepos_e".to_string())));
        assert_eq!(params.status, Some(Open::Known(ReaderStatus::Online)));

        let params = ReaderListParams {
            device_type: Some(DeviceType::BbposChipper2x.into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({ "device_type": "bbpos_chipper2x" })
        );
    }

    #[test]
    fn test_create_requires_registration_code() {
        assert!(serde_json::from_value::<ReaderCreateParams>(json!({ "label": "x" })).is_err());
        let params: ReaderCreateParams =
            serde_json::from_value(json!({ "registration_code": "puppies-plug-could" })).unwrap();
        assert_eq!(params, ReaderCreateParams::new("puppies-plug-could"));
    }

    #[test]
    fn test_deleted_reader() {
        let deleted: DeletedReader = serde_json::from_value(json!({
            "id": "tmr_1",
            "object": "terminal.reader",
            "deleted": true
        }))
        .unwrap();
        assert_eq!(deleted.object(), "terminal.reader");
    }
}
