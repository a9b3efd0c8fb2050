//! Activity API operations.

use super::StravaClient;
use crate::error::Result;
use strava_core::activity::{Activity, CreateActivityRequest};

impl StravaClient {
    /// Get an activity by ID.
    pub async fn get_activity(&self, id: u64) -> Result<Activity> {
        let path = format!("/activities/{}", id);
        tracing::debug!(%path, "GET");
        let response = self
            .client
            .get(self.url(&path))
            .bearer_auth(&self.access_token)
            .send()
            .await?;
        self.handle_response(&path, response).await
    }

    /// Create a manual activity.
    pub async fn create_activity(&self, req: &CreateActivityRequest) -> Result<Activity> {
        let path = "/activities";
        tracing::debug!(path, sport_type = %req.sport_type, "POST");
        let response = self
            .client
            .post(self.url(path))
            .bearer_auth(&self.access_token)
            .form(req)
            .send()
            .await?;
        self.handle_response(path, response).await
    }
}
