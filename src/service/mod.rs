mod client;
mod error;
mod http;
mod mutation;

pub use client::{API_BASE, ApiClient};
pub use error::{MutationError, Rejection};
pub use http::{HttpRequest, HttpResponse, Method, Transport};
pub use mutation::{CreateHouse, MutationService};
