//! Request types for the Daily Rate Engine API.
//!
//! This module defines the JSON request structures for the `/calculate` and
//! `/simulate` endpoints. Rate configuration writes reuse
//! [`NewRateConfig`](crate::config::NewRateConfig).

use serde::{Deserialize, Serialize};

use crate::models::{BedType, PaymentType};

/// Request body for the `/calculate` and `/simulate` endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateQueryRequest {
    /// The payer category of the admission.
    pub payment_type: PaymentType,
    /// The bed type of the admission.
    pub bed_type: BedType,
    /// The length of stay in days. Not validated.
    pub days: i64,
    /// Whether `/simulate` should include the audit trace.
    #[serde(default)]
    pub include_audit: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_request() {
        let json = r#"{
            "payment_type": "PRIVATE",
            "bed_type": "ICU",
            "days": 20
        }"#;

        let request: RateQueryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.payment_type, PaymentType::Private);
        assert_eq!(request.bed_type, BedType::Icu);
        assert_eq!(request.days, 20);
        assert!(!request.include_audit);
    }

    #[test]
    fn test_negative_days_are_accepted() {
        let json = r#"{"payment_type": "SUS", "bed_type": "STANDARD", "days": -3}"#;
        let request: RateQueryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.days, -3);
    }

    #[test]
    fn test_unknown_bed_type_is_rejected() {
        let json = r#"{"payment_type": "SUS", "bed_type": "SUITE", "days": 3}"#;
        assert!(serde_json::from_str::<RateQueryRequest>(json).is_err());
    }
}
