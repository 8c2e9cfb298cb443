use std::sync::Arc;

use meeting::{MeetingWindowValidator, SystemClock};

use super::{
    config::Config,
    database::{init_postgres, PgWindowStore},
};

pub struct AppState {
    pub config: Config,
    pub validator: MeetingWindowValidator<PgWindowStore, SystemClock>,
}

impl AppState {
    pub async fn new() -> Arc<Self> {
        let config = Config::load();

        let pool = init_postgres(&config.database_url).await;

        let validator = MeetingWindowValidator::new(
            PgWindowStore::new(pool),
            SystemClock,
            config.meeting_zone,
            config.owner_contact.clone(),
        );

        Arc::new(Self { config, validator })
    }
}
