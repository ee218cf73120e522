/// Collection all MobilSoeg profile resources live under
const PROFILES_PATH: &str = "api/MobilSoegProfiles";

/// URL of a single profile
///
/// The endpoint and ids are used verbatim; the endpoint must already end
/// with whatever separator makes `{endpoint}api/...` a valid URL.
///
/// # Arguments
/// * `endpoint` - Base URL of the profile service
/// * `profile_id` - MobilSoeg profile id
///
/// # Returns
/// `{endpoint}api/MobilSoegProfiles/{profile_id}`
pub fn profile_url(endpoint: &str, profile_id: &str) -> String {
    format!("{}{}/{}", endpoint, PROFILES_PATH, profile_id)
}

/// URL of the likes collection on a profile
pub fn likes_url(endpoint: &str, profile_id: &str) -> String {
    format!("{}/likes", profile_url(endpoint, profile_id))
}

/// URL of one like on a profile
pub fn like_url(endpoint: &str, profile_id: &str, like_id: &str) -> String {
    format!("{}/{}", likes_url(endpoint, profile_id), like_id)
}

/// URL of the lookup-by-agency/loaner remote method
pub fn find_profile_url(endpoint: &str) -> String {
    format!("{}{}/findMobilSoegProfile", endpoint, PROFILES_PATH)
}
