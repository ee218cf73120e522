use serde::{Deserialize, Serialize};

/// Save a like on a profile
///
/// `POST api/MobilSoegProfiles/{mobilSoegProfileId}/likes` with form `{item_id, value}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveLikeRequest {
    #[serde(alias = "profile_id", rename = "mobilSoegProfileId")]
    pub profile_id: String,
    pub item_id: String,
    pub value: i32,
}

/// Change the value of an existing like
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateLikeRequest {
    #[serde(alias = "profile_id", rename = "mobilSoegProfileId")]
    pub profile_id: String,
    #[serde(alias = "like_id", rename = "id")]
    pub like_id: String,
    pub value: i32,
}

/// Remove a single like
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveLikeRequest {
    #[serde(alias = "profile_id", rename = "mobilSoegProfileId")]
    pub profile_id: String,
    #[serde(alias = "like_id", rename = "id")]
    pub like_id: String,
}

/// Remove every like on a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveAllLikesRequest {
    #[serde(alias = "profile_id", rename = "mobilSoegProfileId")]
    pub profile_id: String,
}

/// Set the agency a patron picks up materials from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePickupAgencyRequest {
    #[serde(alias = "profile_id", rename = "mobilSoegProfileId")]
    pub profile_id: String,
    pub pickup_agency: String,
}

/// Look up a profile by library affiliation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindProfileRequest {
    #[serde(alias = "agency_id", rename = "agencyid")]
    pub agency_id: String,
    #[serde(alias = "loaner_id", rename = "loanerid")]
    pub loaner_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_like_from_service_keys() {
        let req: SaveLikeRequest = serde_json::from_str(
            r#"{"mobilSoegProfileId": "42", "item_id": "item-1", "value": 1}"#,
        )
        .unwrap();
        assert_eq!(req.profile_id, "42");
        assert_eq!(req.item_id, "item-1");
        assert_eq!(req.value, 1);
    }

    #[test]
    fn test_find_profile_serializes_lowercase_keys() {
        let req = FindProfileRequest {
            agency_id: "710100".to_string(),
            loaner_id: "0101001234".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["agencyid"], "710100");
        assert_eq!(json["loanerid"], "0101001234");
    }

    #[test]
    fn test_snake_case_aliases_accepted() {
        let req: RemoveLikeRequest =
            serde_json::from_str(r#"{"profile_id": "7", "like_id": "3"}"#).unwrap();
        assert_eq!(req.profile_id, "7");
        assert_eq!(req.like_id, "3");
    }
}
