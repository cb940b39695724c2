//! # Query Cache
//!
//! Keeps recently fetched query results as JSON payloads so that pages which
//! ask for the same data (a business, the booked times of a day) do not hit
//! the API again until the entry goes stale.
//!
//! [`CachedSource`] layers the cache over any [`BookingSource`] and drops
//! the entries a mutation makes outdated.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Serialize, de::DeserializeOwned};
use slotbook_core::{
    BookingError, BookingResult,
    models::{
        booking::{Booking, CreateBookingRequest},
        business::{Business, BusinessStatus},
        category::Category,
        user::User,
    },
};
use std::{collections::HashMap, future::Future, time::Duration};
use tokio::{sync::RwLock, time::Instant};
use tracing::debug;
use uuid::Uuid;

use crate::source::BookingSource;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Categories,
    Businesses(Option<Category>),
    Business(Uuid),
    PendingBusinesses,
    UserBookings(String),
    BookedTimes(Uuid, NaiveDate),
}

#[derive(Debug)]
struct Entry {
    fetched_at: Instant,
    payload: serde_json::Value,
}

#[derive(Debug)]
pub struct QueryCache {
    ttl: Duration,
    entries: RwLock<HashMap<QueryKey, Entry>>,
}

fn internal(err: serde_json::Error) -> BookingError {
    BookingError::Internal(Box::new(err))
}

impl QueryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the cached value for `key` while it is fresh, otherwise runs
    /// `fetch` and stores its result. Errors are never cached.
    pub async fn get_or_fetch<T, F, Fut>(&self, key: QueryKey, fetch: F) -> BookingResult<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = BookingResult<T>>,
    {
        if let Some(payload) = self.fresh(&key).await {
            debug!(?key, "cache hit");
            return serde_json::from_value(payload).map_err(internal);
        }

        debug!(?key, "cache miss");
        let value = fetch().await?;
        let payload = serde_json::to_value(&value).map_err(internal)?;

        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| entry.fetched_at.elapsed() < self.ttl);
        entries.insert(
            key,
            Entry {
                fetched_at: Instant::now(),
                payload,
            },
        );
        Ok(value)
    }

    async fn fresh(&self, key: &QueryKey) -> Option<serde_json::Value> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| entry.fetched_at.elapsed() < self.ttl)
            .map(|entry| entry.payload.clone())
    }

    pub async fn contains(&self, key: &QueryKey) -> bool {
        self.fresh(key).await.is_some()
    }

    /// Number of stored entries, stale ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn invalidate(&self, key: &QueryKey) {
        self.entries.write().await.remove(key);
    }

    pub async fn invalidate_where(&self, predicate: impl Fn(&QueryKey) -> bool) {
        self.entries.write().await.retain(|key, _| !predicate(key));
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

/// A [`BookingSource`] that answers reads from a [`QueryCache`].
pub struct CachedSource<S> {
    inner: S,
    cache: QueryCache,
}

impl<S: BookingSource> CachedSource<S> {
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            cache: QueryCache::new(ttl),
        }
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: BookingSource> BookingSource for CachedSource<S> {
    async fn categories(&self) -> BookingResult<Vec<Category>> {
        self.cache
            .get_or_fetch(QueryKey::Categories, || self.inner.categories())
            .await
    }

    async fn businesses(&self, category: Option<Category>) -> BookingResult<Vec<Business>> {
        self.cache
            .get_or_fetch(QueryKey::Businesses(category), || {
                self.inner.businesses(category)
            })
            .await
    }

    async fn business(&self, id: Uuid) -> BookingResult<Business> {
        self.cache
            .get_or_fetch(QueryKey::Business(id), || self.inner.business(id))
            .await
    }

    async fn pending_businesses(&self) -> BookingResult<Vec<Business>> {
        self.cache
            .get_or_fetch(QueryKey::PendingBusinesses, || {
                self.inner.pending_businesses()
            })
            .await
    }

    async fn set_business_status(
        &self,
        id: Uuid,
        status: BusinessStatus,
    ) -> BookingResult<Business> {
        let business = self.inner.set_business_status(id, status).await?;
        self.cache
            .invalidate_where(|key| {
                matches!(
                    key,
                    QueryKey::Businesses(_) | QueryKey::PendingBusinesses
                ) || *key == QueryKey::Business(id)
            })
            .await;
        Ok(business)
    }

    async fn bookings_by_user(&self, email: &str) -> BookingResult<Vec<Booking>> {
        self.cache
            .get_or_fetch(QueryKey::UserBookings(email.to_string()), || {
                self.inner.bookings_by_user(email)
            })
            .await
    }

    async fn booked_times(&self, business_id: Uuid, date: NaiveDate) -> BookingResult<Vec<String>> {
        self.cache
            .get_or_fetch(QueryKey::BookedTimes(business_id, date), || {
                self.inner.booked_times(business_id, date)
            })
            .await
    }

    async fn reload_booked_times(
        &self,
        business_id: Uuid,
        date: NaiveDate,
    ) -> BookingResult<Vec<String>> {
        let key = QueryKey::BookedTimes(business_id, date);
        self.cache.invalidate(&key).await;
        self.cache
            .get_or_fetch(key, || self.inner.reload_booked_times(business_id, date))
            .await
    }

    async fn create_booking(&self, request: CreateBookingRequest) -> BookingResult<Booking> {
        let booked_times = QueryKey::BookedTimes(request.business_id, request.date);
        let user_bookings = QueryKey::UserBookings(request.user_email.clone());

        let booking = self.inner.create_booking(request).await?;
        self.cache.invalidate(&booked_times).await;
        self.cache.invalidate(&user_bookings).await;
        Ok(booking)
    }

    async fn current_user(&self, token: &str) -> BookingResult<User> {
        self.inner.current_user(token).await
    }
}
