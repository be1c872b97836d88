//! The report row shared by every export format.

use serde::{Deserialize, Serialize};

use crate::classify::ClassificationResult;

/// Column headers, in export order.
pub const REPORT_HEADERS: [&str; 8] = [
    "Institution",
    "Domain",
    "Entity",
    "MX Records",
    "SPF Records",
    "DMARC Records",
    "Detected Provider",
    "Disposable",
];

/// One classified domain, rendered for presentation.
///
/// Every field is already a display string except `disposable`, which is
/// serialized as `Yes`/`No`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "Institution")]
    pub institution: String,
    #[serde(rename = "Domain")]
    pub domain: String,
    #[serde(rename = "Entity")]
    pub entity: String,
    #[serde(rename = "MX Records")]
    pub mx_records: String,
    #[serde(rename = "SPF Records")]
    pub spf_records: String,
    #[serde(rename = "DMARC Records")]
    pub dmarc_records: String,
    #[serde(rename = "Detected Provider")]
    pub detected_provider: String,
    #[serde(rename = "Disposable", with = "yes_no")]
    pub disposable: bool,
}

impl ReportRow {
    /// Renders a classification, attaching the caller's metadata unchanged.
    ///
    /// Failed lookups render their failure reason; successful ones render the
    /// matched providers joined with `", "` (empty when nothing matched).
    pub fn from_classification(
        result: &ClassificationResult,
        institution: impl Into<String>,
        entity: impl Into<String>,
    ) -> Self {
        Self {
            institution: institution.into(),
            domain: result.domain.clone(),
            entity: entity.into(),
            mx_records: result.mx.to_string(),
            spf_records: result.spf.to_string(),
            dmarc_records: result.dmarc.to_string(),
            detected_provider: result.detected_provider.to_string(),
            disposable: result.is_disposable,
        }
    }

    /// Field values in [`REPORT_HEADERS`] order.
    pub fn fields(&self) -> [&str; 8] {
        [
            &self.institution,
            &self.domain,
            &self.entity,
            &self.mx_records,
            &self.spf_records,
            &self.dmarc_records,
            &self.detected_provider,
            yes_no::label(self.disposable),
        ]
    }
}

/// `bool` as `"Yes"` / `"No"`.
pub(crate) mod yes_no {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn label(value: bool) -> &'static str {
        if value {
            "Yes"
        } else {
            "No"
        }
    }

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(label(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.trim().to_ascii_lowercase().as_str() {
            "yes" => Ok(true),
            "no" => Ok(false),
            other => Err(de::Error::custom(format!(
                "expected \"Yes\" or \"No\", got {other:?}"
            ))),
        }
    }
}
