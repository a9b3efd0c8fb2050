//! Command runners.
//!
//! Each runner writes to the given writer so the binary can pass stdout and
//! tests can capture output.

use std::io::Write;

use strava_core::activity::CreateActivityRequest;

use crate::client::StravaClient;
use crate::error::Result;
use crate::output::OutputCtx;

/// Fetch and print activities in order, one blank line between results.
///
/// Stops at the first failure. Activities printed before the failure stay
/// printed and the remaining IDs are not fetched.
pub async fn get_activities<W: Write>(
    client: &StravaClient,
    activity_ids: &[u64],
    ctx: &OutputCtx,
    out: &mut W,
) -> Result<()> {
    for (index, id) in activity_ids.iter().enumerate() {
        let activity = client.get_activity(*id).await.inspect_err(|e| {
            tracing::warn!(activity_id = id, error = %e, "failed to fetch activity");
        })?;
        if index > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", ctx.render_activity(&activity))?;
        out.flush()?;
    }
    Ok(())
}

/// Create an activity and print the record returned by the API.
pub async fn post_activity<W: Write>(
    client: &StravaClient,
    req: &CreateActivityRequest,
    ctx: &OutputCtx,
    out: &mut W,
) -> Result<()> {
    let activity = client.create_activity(req).await?;
    tracing::info!(id = ?activity.get("id"), "activity created");
    writeln!(out, "{}", ctx.render_activity(&activity))?;
    Ok(())
}
