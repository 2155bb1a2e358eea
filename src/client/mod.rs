//! HTTP access to the gym admin backend
//!
//! [`GymClient`] is the entry point: it owns one [`RestClient`] (and with it
//! the bearer token) and hands out typed API handles that share it.

pub mod auth;
pub mod collection;
pub mod gym_info;
pub mod http;
pub mod reports;

pub use auth::{AuthApi, LoginResponse, MessageResponse, PasswordReset, Registration};
pub use collection::RestCollection;
pub use gym_info::GymInfoApi;
pub use http::{RestClient, TokenStore};
pub use reports::ReportsApi;

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::core::entity::Entity;
use crate::core::error::GymError;
use crate::core::notice::Notifier;
use crate::entities::{Member, Payment, Plan};
use crate::list::ListSession;

/// Configured backend connection
#[derive(Debug, Clone)]
pub struct GymClient {
    http: RestClient,
    config: ClientConfig,
}

impl GymClient {
    pub fn new(config: ClientConfig) -> Result<Self, GymError> {
        let http = RestClient::from_config(&config)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn tokens(&self) -> &TokenStore {
        self.http.tokens()
    }

    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.http.clone())
    }

    /// Report endpoints, with the renewal window from the configuration
    pub fn reports(&self) -> ReportsApi {
        ReportsApi::new(self.http.clone(), self.config.renewal_window_days)
    }

    pub fn gym_info(&self) -> GymInfoApi {
        GymInfoApi::new(self.http.clone())
    }

    pub fn collection<T: Entity>(&self) -> RestCollection<T> {
        RestCollection::new(self.http.clone())
    }

    /// A list session for `T` backed by this connection
    pub fn session<T: Entity>(&self, notifier: Arc<dyn Notifier>) -> ListSession<T> {
        ListSession::from_config(Arc::new(self.collection::<T>()), notifier, &self.config)
    }

    pub fn members(&self, notifier: Arc<dyn Notifier>) -> ListSession<Member> {
        self.session(notifier)
    }

    pub fn payments(&self, notifier: Arc<dyn Notifier>) -> ListSession<Payment> {
        self.session(notifier)
    }

    pub fn plans(&self, notifier: Arc<dyn Notifier>) -> ListSession<Plan> {
        self.session(notifier)
    }
}
