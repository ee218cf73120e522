use crate::config::{ClientConfig, ConfigurationError};
use crate::core::urls;
use crate::models::{
    FindProfileRequest, Operation, ProfileRequest, RawResponse, RemoveAllLikesRequest,
    RemoveLikeRequest, RequestBody, SaveLikeRequest, UpdateLikeRequest,
    UpdatePickupAgencyRequest,
};
use crate::services::transport::{ReqwestTransport, Transport, TransportError, TransportFailure};
use serde_json::json;

/// Client for the MobilSoeg part of the profile service
///
/// Holds the service endpoint and a transport. Every operation issues
/// exactly one request and hands the raw response back; nothing is parsed,
/// retried or cached. The endpoint never changes after construction, so a
/// client can be shared across tasks freely.
///
/// Error handling differs between operations:
/// - `save_like`, `remove_like`, `remove_all_likes` and `update_like` drop
///   transport errors and return whatever response there was, if any
/// - `update_pickup_agency` returns the transport error
/// - `find_profile` returns the transport error paired with the response
#[derive(Debug, Clone)]
pub struct ProfileClient<T = ReqwestTransport> {
    endpoint: String,
    transport: T,
}

impl ProfileClient<ReqwestTransport> {
    /// Create a client over a default reqwest transport
    ///
    /// Fails when no config is given or its endpoint is missing or empty.
    pub fn new(config: Option<&ClientConfig>) -> Result<Self, ConfigurationError> {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T: Transport> ProfileClient<T> {
    /// Create a client that sends through the given transport
    pub fn with_transport(
        config: Option<&ClientConfig>,
        transport: T,
    ) -> Result<Self, ConfigurationError> {
        let config = config.ok_or(ConfigurationError::MissingEndpoint)?;
        let endpoint = config.validated_endpoint()?.to_string();

        tracing::debug!("Profile client configured for endpoint: {}", endpoint);

        Ok(Self {
            endpoint,
            transport,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Save a like on a profile
    ///
    /// POST `api/MobilSoegProfiles/{profile}/likes` with form `{item_id, value}`
    pub async fn save_like(&self, params: &SaveLikeRequest) -> Option<RawResponse> {
        let request = ProfileRequest::new(
            Operation::SaveLike,
            urls::likes_url(&self.endpoint, &params.profile_id),
            RequestBody::Form(vec![
                ("item_id".to_string(), params.item_id.clone()),
                ("value".to_string(), params.value.to_string()),
            ]),
        );

        // Existing callers rely on this never failing; transport errors are dropped
        swallow(Operation::SaveLike, self.dispatch(request).await)
    }

    /// Remove a single like from a profile
    ///
    /// DELETE `api/MobilSoegProfiles/{profile}/likes/{id}` with an empty form
    pub async fn remove_like(&self, params: &RemoveLikeRequest) -> Option<RawResponse> {
        let request = ProfileRequest::new(
            Operation::RemoveLike,
            urls::like_url(&self.endpoint, &params.profile_id, &params.like_id),
            RequestBody::empty_form(),
        );

        // Transport errors are dropped, same as save_like
        swallow(Operation::RemoveLike, self.dispatch(request).await)
    }

    /// Remove every like on a profile
    ///
    /// DELETE `api/MobilSoegProfiles/{profile}/likes` with an empty form
    pub async fn remove_all_likes(&self, params: &RemoveAllLikesRequest) -> Option<RawResponse> {
        let request = ProfileRequest::new(
            Operation::RemoveAllLikes,
            urls::likes_url(&self.endpoint, &params.profile_id),
            RequestBody::empty_form(),
        );

        // Transport errors are dropped, same as save_like
        swallow(Operation::RemoveAllLikes, self.dispatch(request).await)
    }

    /// Change the value of an existing like
    ///
    /// PUT `api/MobilSoegProfiles/{profile}/likes/{id}` with form `{value}`
    pub async fn update_like(&self, params: &UpdateLikeRequest) -> Option<RawResponse> {
        let request = ProfileRequest::new(
            Operation::UpdateLike,
            urls::like_url(&self.endpoint, &params.profile_id, &params.like_id),
            RequestBody::Form(vec![("value".to_string(), params.value.to_string())]),
        );

        // Transport errors are dropped, same as save_like
        swallow(Operation::UpdateLike, self.dispatch(request).await)
    }

    /// Set the pickup agency on a profile
    ///
    /// PUT `api/MobilSoegProfiles/{profile}` with form `{pickup_agency}`
    pub async fn update_pickup_agency(
        &self,
        params: &UpdatePickupAgencyRequest,
    ) -> Result<RawResponse, TransportError> {
        let request = ProfileRequest::new(
            Operation::UpdatePickupAgency,
            urls::profile_url(&self.endpoint, &params.profile_id),
            RequestBody::Form(vec![(
                "pickup_agency".to_string(),
                params.pickup_agency.clone(),
            )]),
        );

        self.dispatch(request).await.map_err(|failure| failure.error)
    }

    /// Look up a profile by agency and loaner id
    ///
    /// GET `api/MobilSoegProfiles/findMobilSoegProfile` carrying the JSON
    /// document `{agencyid, loanerid}` as its body. On failure the error
    /// comes back together with any response that was received.
    pub async fn find_profile(
        &self,
        params: &FindProfileRequest,
    ) -> Result<RawResponse, TransportFailure> {
        let request = ProfileRequest::new(
            Operation::FindProfile,
            urls::find_profile_url(&self.endpoint),
            RequestBody::Json(json!({
                "agencyid": params.agency_id,
                "loanerid": params.loaner_id,
            })),
        );

        self.dispatch(request).await
    }

    async fn dispatch(&self, request: ProfileRequest) -> Result<RawResponse, TransportFailure> {
        tracing::debug!(
            operation = %request.operation,
            method = %request.method,
            url = %request.url,
            "Sending profile service request"
        );

        self.transport.send(request).await
    }
}

fn swallow(
    operation: Operation,
    outcome: Result<RawResponse, TransportFailure>,
) -> Option<RawResponse> {
    match outcome {
        Ok(response) => Some(response),
        Err(failure) => {
            tracing::debug!("Ignoring transport error for {}: {}", operation, failure.error);
            failure.response
        }
    }
}
