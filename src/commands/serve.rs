//! Serve command

use crate::{
    api::{self, ServerConfig},
    storage::HeroDatabase,
    Result,
};

/// Handle the serve command
pub async fn handle_serve(db: HeroDatabase, bind: String, port: u16) -> Result<()> {
    println!("Starting hero API on {}:{} ...", bind, port);
    api::serve(db, ServerConfig { host: bind, port }).await
}
