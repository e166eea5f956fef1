use tracing::{error, info};
use crate::actor_framework::ResourceActor;
use crate::clients::RosterClient;
use crate::domain::Activity;

/// Mailbox size used when the caller does not configure one.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// Owns the roster actor task and hands out clients to it.
pub struct RosterSystem {
    pub roster_client: RosterClient,
    handle: tokio::task::JoinHandle<()>,
}

impl RosterSystem {
    /// Starts the roster actor with `activities` as the initial catalog.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(activities: Vec<Activity>, channel_capacity: usize) -> Self {
        let (actor, resource_client) = ResourceActor::<Activity>::new(channel_capacity, activities);
        let roster_client = RosterClient::new(resource_client);
        let handle = tokio::spawn(actor.run());
        info!("Roster system started");

        Self { roster_client, handle }
    }

    /// Waits for the actor to stop.
    ///
    /// The actor keeps running while any clone of the client is alive, so
    /// callers must drop theirs first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down roster system...");
        drop(self.roster_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("Roster system shutdown complete.");
        Ok(())
    }
}
