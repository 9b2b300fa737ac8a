pub mod apartment;
pub mod building;
pub mod schema;

use std::sync::Arc;

use diesel::{Connection, PgConnection};

use crate::config::Config;
use crate::error::Error;

pub fn establish_connection(config: &Arc<Config>) -> Result<PgConnection, Error> {
    let connection = PgConnection::establish(&config.database_url)?;
    Ok(connection)
}
