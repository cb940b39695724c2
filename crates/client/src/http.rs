//! # HTTP Source
//!
//! [`BookingSource`] over the marketplace's JSON API.
//!
//! ## Endpoints
//!
//! | Operation             | Request                                   |
//! |-----------------------|-------------------------------------------|
//! | categories            | `GET /api/categories`                     |
//! | businesses            | `GET /api/businesses?category=<slug>`     |
//! | business              | `GET /api/businesses/<id>`                |
//! | pending_businesses    | `GET /api/businesses?status=pending`      |
//! | set_business_status   | `PUT /api/businesses/<id>/status`         |
//! | bookings_by_user      | `GET /api/bookings?user_email=<email>`    |
//! | booked_times          | `GET /api/businesses/<id>/bookings?date=` |
//! | create_booking        | `POST /api/bookings`                      |
//! | current_user          | `GET /api/me`                             |
//!
//! Non-success statuses are mapped onto [`BookingError`]: 404 to `NotFound`,
//! 401 to `Authentication`, 403 to `Authorization`, 400/422 to `Validation`
//! and anything else to `Transport` carrying the response body.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use slotbook_core::{
    BookingError, BookingResult,
    models::{
        booking::{BookedTimesResponse, Booking, CreateBookingRequest},
        business::{Business, BusinessStatus, UpdateBusinessStatusRequest},
        category::Category,
        user::User,
    },
};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::{config::ClientConfig, source::BookingSource};

#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    config: ClientConfig,
}

impl HttpSource {
    /// # Errors
    ///
    /// * `BookingError::Transport` - the HTTP client could not be built
    pub fn new(config: ClientConfig) -> BookingResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(transport)?;
        Ok(Self { client, config })
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.get(self.config.url(path)))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

fn transport(err: reqwest::Error) -> BookingError {
    BookingError::Transport(eyre::Report::new(err))
}

/// Sends a request and decodes a JSON body, mapping failure statuses.
async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> BookingResult<T> {
    let response = request.send().await.map_err(transport)?;
    let response = check_status(response).await?;
    response.json::<T>().await.map_err(transport)
}

async fn check_status(response: Response) -> BookingResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // Path only: query strings may hold user emails
    let path = response.url().path().to_string();
    let body = response.text().await.unwrap_or_default();
    debug!(%status, %path, "request failed");

    Err(match status {
        StatusCode::NOT_FOUND => BookingError::NotFound(format!("{} ({})", path, body)),
        StatusCode::UNAUTHORIZED => BookingError::Authentication(body),
        StatusCode::FORBIDDEN => BookingError::Authorization(body),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            BookingError::Validation(body)
        }
        _ => BookingError::Transport(eyre::eyre!("{} returned {}: {}", path, status, body)),
    })
}

#[async_trait]
impl BookingSource for HttpSource {
    #[instrument(skip(self))]
    async fn categories(&self) -> BookingResult<Vec<Category>> {
        send_json(self.get("/api/categories")).await
    }

    #[instrument(skip(self))]
    async fn businesses(&self, category: Option<Category>) -> BookingResult<Vec<Business>> {
        let mut request = self.get("/api/businesses");
        if let Some(category) = category {
            request = request.query(&[("category", category.slug())]);
        }
        send_json(request).await
    }

    #[instrument(skip(self))]
    async fn business(&self, id: Uuid) -> BookingResult<Business> {
        send_json(self.get(&format!("/api/businesses/{}", id))).await
    }

    #[instrument(skip(self))]
    async fn pending_businesses(&self) -> BookingResult<Vec<Business>> {
        send_json(self.get("/api/businesses").query(&[("status", "pending")])).await
    }

    #[instrument(skip(self))]
    async fn set_business_status(
        &self,
        id: Uuid,
        status: BusinessStatus,
    ) -> BookingResult<Business> {
        let url = self.config.url(&format!("/api/businesses/{}/status", id));
        let request = self
            .authorize(self.client.put(url))
            .json(&UpdateBusinessStatusRequest { status });
        send_json(request).await
    }

    #[instrument(skip_all)]
    async fn bookings_by_user(&self, email: &str) -> BookingResult<Vec<Booking>> {
        send_json(self.get("/api/bookings").query(&[("user_email", email)])).await
    }

    #[instrument(skip(self))]
    async fn booked_times(&self, business_id: Uuid, date: NaiveDate) -> BookingResult<Vec<String>> {
        let request = self
            .get(&format!("/api/businesses/{}/bookings", business_id))
            .query(&[("date", date.to_string())]);
        let response: BookedTimesResponse = send_json(request).await?;
        Ok(response.times)
    }

    #[instrument(skip(self, request), fields(business_id = %request.business_id))]
    async fn create_booking(&self, request: CreateBookingRequest) -> BookingResult<Booking> {
        let url = self.config.url("/api/bookings");
        send_json(self.authorize(self.client.post(url)).json(&request)).await
    }

    #[instrument(skip_all)]
    async fn current_user(&self, token: &str) -> BookingResult<User> {
        let request = self.client.get(self.config.url("/api/me")).bearer_auth(token);
        send_json(request).await
    }
}
