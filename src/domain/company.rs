use serde::{Deserialize, Serialize};

/// Best effort record of a company's legal and contact details. Every field
/// is optional since most pages only carry a subset of them.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::CompanyInfo;

    #[test]
    fn empty_record_serializes_to_empty_object() {
        let record = CompanyInfo::default();
        let json = serde_json::to_string_pretty(&record).unwrap();

        assert_eq!(json, "{}");
    }

    #[test]
    fn populated_fields_serialize_under_their_names() {
        let record = CompanyInfo {
            company_name: Some("Acme Corp".to_string()),
            registration_number: Some("HRB 12345".to_string()),
            ..CompanyInfo::default()
        };
        let json = serde_json::to_string(&record).unwrap();

        assert_eq!(
            json,
            r#"{"company_name":"Acme Corp","registration_number":"HRB 12345"}"#
        );
    }

    #[test]
    fn unknown_fields_are_ignored_on_deserialize() {
        let json = r#"{"company_name": "Acme Corp", "headquarters": "Springfield"}"#;
        let record: CompanyInfo = serde_json::from_str(json).unwrap();

        assert_eq!(record.company_name, Some("Acme Corp".to_string()));
        assert_eq!(record.address, None);
    }
}
