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

//! Test utilities for the business layer.

use crate::db;
use crate::driver::Driver;
use crate::model::PlayerId;
use players_core::db::Db;
use players_core::db::sqlite::testutils::setup;
use std::sync::Arc;
use time::OffsetDateTime;

/// State of a running test.
pub(crate) struct TestContext {
    /// The database backing the driver.
    db: Arc<dyn Db + Send + Sync>,

    /// The driver under test.
    driver: Driver,
}

impl TestContext {
    /// Initializes the driver using an in-memory database with the schema already applied.
    pub(crate) async fn setup() -> Self {
        let db: Arc<dyn Db + Send + Sync> = Arc::new(setup().await);
        db::init_schema(&mut db.ex().await.unwrap()).await.unwrap();
        let driver = Driver::new(db.clone());
        Self { db, driver }
    }

    /// Returns a copy of the driver under test.
    pub(crate) fn driver(&self) -> Driver {
        self.driver.clone()
    }

    /// Inserts a player directly into the database and returns its identifier.
    pub(crate) async fn put_player(&self, name: &str, score: i32) -> PlayerId {
        let now = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        db::put_player(&mut self.db.ex().await.unwrap(), name, score, now).await.unwrap()
    }

    /// Closes the database so that further operations fail as if it were unreachable.
    pub(crate) async fn close_db(&self) {
        self.db.close().await;
    }
}
