// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Method, Operation, ProfileRequest, RequestBody};
pub use requests::{
    FindProfileRequest, RemoveAllLikesRequest, RemoveLikeRequest, SaveLikeRequest,
    UpdateLikeRequest, UpdatePickupAgencyRequest,
};
pub use responses::RawResponse;
