// III-IV
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! REST service that exposes player records stored in a PostgreSQL database.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use crate::config::AppConfig;
use crate::driver::Driver;
use crate::lifecycle::Service;
use log::{info, warn};
use players_core::db::Db;
use players_core::db::postgres::PostgresDb;
use std::error::Error;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

pub mod config;
mod db;
pub mod driver;
pub mod lifecycle;
pub mod model;
mod rest;

/// Maximum time to wait for in-flight requests to complete when shutting down.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// Instantiates all resources to serve the application as described by `config` and serves it
/// until `shutdown` completes.
///
/// While it'd be nice to push this responsibility to `main`, doing so would force us to expose many
/// crate-internal types to the public, which in turn would make dead code detection harder.
pub async fn serve<F>(config: AppConfig, shutdown: F) -> Result<(), Box<dyn Error>>
where
    F: Future<Output = ()>,
{
    let db = Arc::new(PostgresDb::connect(config.db_config().postgres_conn())?);
    let driver = Driver::new(db.clone());
    let service = Service::new(Arc::new(driver));

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, *config.server().port()));
    let handle = match service.start(addr).await {
        Ok(handle) => handle,
        Err(e) => {
            db.close().await;
            return Err(format!("Cannot listen on {}: {}", addr, e).into());
        }
    };

    shutdown.await;
    info!("Shutdown requested");

    let result = handle.stop(SHUTDOWN_GRACE).await;
    if tokio::time::timeout(SHUTDOWN_GRACE, db.close()).await.is_err() {
        warn!("Database connections did not close within {:?}", SHUTDOWN_GRACE);
    }
    result?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    /// Builds a configuration that points to a database nobody listens on.
    fn unreachable_db_config(port: u16) -> AppConfig {
        AppConfig::parse(&format!(
            "dbConfig:\n  postgresconn: postgres://u:p@127.0.0.1:1/none\nserver:\n  port: {}\n",
            port
        ))
        .unwrap()
    }

    #[tokio::test]
    async fn test_serve_shutdown_without_database() {
        serve(unreachable_db_config(0), async {}).await.unwrap();
    }

    #[tokio::test]
    async fn test_serve_port_in_use() {
        let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, 0)).await.unwrap();
        let port = listener.local_addr().unwrap().port();

        match serve(unreachable_db_config(port), std::future::pending()).await {
            Err(e) => assert!(e.to_string().contains("Cannot listen on")),
            Ok(()) => panic!("Must have failed to bind to a used port"),
        }
    }

    #[tokio::test]
    async fn test_serve_invalid_connection_string() {
        let config = AppConfig::parse("dbConfig:\n  postgresconn: not a url\n").unwrap();
        assert!(serve(config, std::future::pending()).await.is_err());
    }
}
