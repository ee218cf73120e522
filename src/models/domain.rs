use std::fmt;

/// HTTP verbs used against the profile service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// The client operations, used to tag outbound requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    SaveLike,
    RemoveLike,
    RemoveAllLikes,
    UpdateLike,
    UpdatePickupAgency,
    FindProfile,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::SaveLike => "save_like",
            Operation::RemoveLike => "remove_like",
            Operation::RemoveAllLikes => "remove_all_likes",
            Operation::UpdateLike => "update_like",
            Operation::UpdatePickupAgency => "update_pickup_agency",
            Operation::FindProfile => "find_profile",
        }
    }

    /// Verb each operation is sent with
    pub fn method(&self) -> Method {
        match self {
            Operation::SaveLike => Method::Post,
            Operation::RemoveLike | Operation::RemoveAllLikes => Method::Delete,
            Operation::UpdateLike | Operation::UpdatePickupAgency => Method::Put,
            Operation::FindProfile => Method::Get,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Payload attached to an outbound request
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// `application/x-www-form-urlencoded` pairs, possibly empty
    Form(Vec<(String, String)>),
    /// JSON document, used by the profile lookup even though it is a GET
    Json(serde_json::Value),
}

impl RequestBody {
    pub fn empty_form() -> Self {
        RequestBody::Form(Vec::new())
    }

    /// Value of a form field, if this is a form body carrying it
    pub fn form_value(&self, key: &str) -> Option<&str> {
        match self {
            RequestBody::Form(pairs) => pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
            RequestBody::Json(_) => None,
        }
    }
}

/// A single request to the profile service, fully resolved
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRequest {
    pub operation: Operation,
    pub method: Method,
    pub url: String,
    pub body: RequestBody,
}

impl ProfileRequest {
    pub fn new(operation: Operation, url: String, body: RequestBody) -> Self {
        Self {
            operation,
            method: operation.method(),
            url,
            body,
        }
    }
}
