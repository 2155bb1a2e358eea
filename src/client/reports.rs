//! Server-side renewal lists and dashboard

use crate::client::http::RestClient;
use crate::core::error::GymError;
use crate::entities::Member;
use crate::reports::DashboardStats;
use crate::reports::renewals::check_window;

#[derive(Debug, Clone)]
pub struct ReportsApi {
    client: RestClient,
    window_days: u32,
}

impl ReportsApi {
    /// `window_days` is the look-ahead used by [`ReportsApi::upcoming_renewals`]
    pub fn new(client: RestClient, window_days: u32) -> Self {
        Self {
            client,
            window_days,
        }
    }

    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    /// Members renewing within the configured window
    pub async fn upcoming_renewals(&self) -> Result<Vec<Member>, GymError> {
        self.upcoming(self.window_days).await
    }

    /// Members renewing within `days` days (1 to 30)
    pub async fn upcoming(&self, days: u32) -> Result<Vec<Member>, GymError> {
        let days = check_window(days)?;
        let members = self
            .client
            .get_query("renewals/7days", &[("days", days.to_string())])
            .await?;
        Ok(members)
    }

    pub async fn expired(&self) -> Result<Vec<Member>, GymError> {
        Ok(self.client.get("renewals/exp").await?)
    }

    pub async fn due_today(&self) -> Result<Vec<Member>, GymError> {
        Ok(self.client.get("renewals/today").await?)
    }

    pub async fn dashboard(&self) -> Result<DashboardStats, GymError> {
        Ok(self.client.get("dashboard/").await?)
    }
}
