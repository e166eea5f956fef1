use tracing::{debug, info, instrument, warn};
use crate::actor_framework::ResourceClient;
use crate::domain::Activity;
use crate::roster_actor::{
    validate_catalog, ActivityCatalog, ActivityError, Confirmation, RosterAction, RosterActionResult,
};

/// Client for interacting with the roster actor.
///
/// Cheap to clone; every clone talks to the same catalog.
#[derive(Clone)]
pub struct RosterClient {
    inner: ResourceClient<Activity>,
}

impl_basic_client!(RosterClient, Activity, ActivityError, activity);

impl RosterClient {
    /// Snapshot of every activity, in catalog order.
    #[instrument(skip(self))]
    pub async fn list_activities(&self) -> Result<ActivityCatalog, ActivityError> {
        debug!("Sending request");
        let activities = self.inner.list().await?;
        Ok(activities.into_iter().collect())
    }

    #[instrument(skip(self))]
    pub async fn signup(&self, activity: String, email: String) -> Result<Confirmation, ActivityError> {
        debug!("Sending request");
        let confirmation = Confirmation::signed_up(&email, &activity);
        match self.inner.perform_action(activity, RosterAction::Signup(email)).await {
            Ok(RosterActionResult::SignedUp) => {
                info!("Signup accepted");
                Ok(confirmation)
            }
            Ok(other) => Err(unexpected(other)),
            Err(e) => {
                let e = ActivityError::from(e);
                warn!(error = %e, "Signup rejected");
                Err(e)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn unregister(&self, activity: String, email: String) -> Result<Confirmation, ActivityError> {
        debug!("Sending request");
        let confirmation = Confirmation::unregistered(&email, &activity);
        match self.inner.perform_action(activity, RosterAction::Unregister(email)).await {
            Ok(RosterActionResult::Unregistered) => {
                info!("Unregister accepted");
                Ok(confirmation)
            }
            Ok(other) => Err(unexpected(other)),
            Err(e) => {
                let e = ActivityError::from(e);
                warn!(error = %e, "Unregister rejected");
                Err(e)
            }
        }
    }

    /// Clears the catalog and loads `activities` in its place.
    ///
    /// The live catalog is left untouched when validation fails.
    #[instrument(skip(self, activities), fields(count = activities.len()))]
    #[allow(dead_code)]
    pub async fn reload(&self, activities: Vec<Activity>) -> Result<usize, ActivityError> {
        debug!("Sending request");
        validate_catalog(&activities)?;
        let count = self.inner.replace(activities).await?;
        info!(count, "Catalog reloaded");
        Ok(count)
    }
}

fn unexpected(result: RosterActionResult) -> ActivityError {
    ActivityError::ActorCommunicationError(format!("Unexpected result: {result:?}"))
}
