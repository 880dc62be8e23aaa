use anyhow::{Context, anyhow};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::domain::{House, HouseId, HouseType, SavedEntity, User, WeekendType};
use crate::query::{Fetch, QueryKey};

use super::error::{MutationError, Rejection};
use super::http::{HttpRequest, HttpResponse, Method, Transport};
use super::mutation::{CreateHouse, MutationService};

pub const API_BASE: &str = "/api/client";

fn houses_path() -> String {
    format!("{API_BASE}/house")
}

fn house_path(id: HouseId) -> String {
    format!("{API_BASE}/house/{id}")
}

fn house_types_path() -> String {
    format!("{API_BASE}/house-types")
}

fn weekend_types_path() -> String {
    format!("{API_BASE}/weekend-types")
}

fn profile_path() -> String {
    format!("{API_BASE}/profile")
}

fn logout_path() -> String {
    format!("{API_BASE}/profile/logout")
}

/// Bearer-authenticated JSON client for the dashboard API. Implements the
/// mutation seam and the remote reads; the transport itself is pluggable.
#[derive(Debug)]
pub struct ApiClient<T: Transport> {
    transport: T,
    token: String,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, token: impl Into<String>) -> Self {
        Self {
            transport,
            token: token.into(),
        }
    }

    fn request(&self, method: Method, path: String, body: Option<Value>) -> HttpRequest {
        HttpRequest {
            method,
            path,
            headers: vec![
                (
                    "Authorization".to_string(),
                    format!("Bearer {}", self.token),
                ),
                ("Content-Type".to_string(), "application/json".to_string()),
            ],
            body,
        }
    }

    fn send(&mut self, request: &HttpRequest) -> Result<HttpResponse, MutationError> {
        self.transport
            .execute(request)
            .map_err(MutationError::Transport)
    }

    fn read<Out: DeserializeOwned>(&mut self, path: String) -> anyhow::Result<Out> {
        let request = self.request(Method::Get, path, None);
        let response = self.transport.execute(&request)?;
        if !response.is_success() {
            return Err(anyhow!(
                "{} {} returned status {}",
                request.method.as_str(),
                request.path,
                response.status
            ));
        }
        let body = response
            .body
            .with_context(|| format!("{} returned an empty body", request.path))?;
        serde_json::from_value(body)
            .with_context(|| format!("{} returned a malformed body", request.path))
    }

    /// Ends the session. Success tells the caller to redirect to the login
    /// view; failures are logged only, with no retry and nothing user-facing.
    pub fn logout(&mut self) -> bool {
        let request = self.request(Method::Delete, logout_path(), None);
        match self.transport.execute(&request) {
            Ok(response) if response.is_success() => true,
            Ok(response) => {
                warn!(status = response.status, "logout rejected");
                false
            }
            Err(err) => {
                warn!(error = %err, "logout failed");
                false
            }
        }
    }
}

fn reject(response: HttpResponse) -> MutationError {
    MutationError::Rejected(Rejection::from_body(response.body.as_ref()))
}

impl<T: Transport> MutationService for ApiClient<T> {
    fn create_house(&mut self, request: &CreateHouse) -> Result<SavedEntity, MutationError> {
        let body = serde_json::to_value(request)
            .map_err(|err| MutationError::Transport(err.into()))?;
        let request = self.request(Method::Post, houses_path(), Some(body));
        let response = self.send(&request)?;
        if !response.is_success() {
            return Err(reject(response));
        }
        let body = response
            .body
            .ok_or_else(|| MutationError::Transport(anyhow!("create returned an empty body")))?;
        serde_json::from_value(body)
            .map_err(|err| MutationError::Transport(anyhow!("malformed create payload: {err}")))
    }

    fn update_house(&mut self, id: HouseId, payload: &Value) -> Result<SavedEntity, MutationError> {
        let request = self.request(Method::Put, house_path(id), Some(payload.clone()));
        let response = self.send(&request)?;
        if !response.is_success() {
            return Err(reject(response));
        }
        // Update responses are not guaranteed to echo the entity.
        let saved = response
            .body
            .and_then(|body| serde_json::from_value(body).ok())
            .unwrap_or(SavedEntity { uuid: id });
        Ok(saved)
    }

    fn delete_house(&mut self, id: HouseId) -> Result<(), MutationError> {
        let request = self.request(Method::Delete, house_path(id), None);
        let response = self.send(&request)?;
        if response.is_success() {
            Ok(())
        } else {
            Err(reject(response))
        }
    }
}

impl<T: Transport> Fetch<House> for ApiClient<T> {
    fn fetch(&mut self, key: &QueryKey) -> anyhow::Result<House> {
        let id = key
            .id()
            .with_context(|| format!("query {key} carries no house id"))?;
        self.read(house_path(HouseId::new(id)))
    }
}

impl<T: Transport> Fetch<Vec<House>> for ApiClient<T> {
    fn fetch(&mut self, _key: &QueryKey) -> anyhow::Result<Vec<House>> {
        self.read(houses_path())
    }
}

impl<T: Transport> Fetch<Vec<HouseType>> for ApiClient<T> {
    fn fetch(&mut self, _key: &QueryKey) -> anyhow::Result<Vec<HouseType>> {
        self.read(house_types_path())
    }
}

impl<T: Transport> Fetch<Vec<WeekendType>> for ApiClient<T> {
    fn fetch(&mut self, _key: &QueryKey) -> anyhow::Result<Vec<WeekendType>> {
        self.read(weekend_types_path())
    }
}

impl<T: Transport> Fetch<User> for ApiClient<T> {
    fn fetch(&mut self, _key: &QueryKey) -> anyhow::Result<User> {
        self.read(profile_path())
    }
}
