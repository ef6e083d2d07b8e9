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

//! Business logic for the service.

use crate::model::{Player, PlayerId};
use async_trait::async_trait;
use players_core::db::Db;
use players_core::driver::DriverResult;
use std::sync::Arc;

mod players;
#[cfg(test)]
mod testutils;

/// Operations on player records that the REST layer needs.
///
/// Handlers only ever see this interface, which keeps them independent of the storage backend.
#[async_trait]
pub trait PlayerService {
    /// Gets the player identified by `id`.
    async fn get_player(&self, id: PlayerId) -> DriverResult<Player>;

    /// Gets all players in the order in which the storage returns them.
    async fn get_all_players(&self) -> DriverResult<Vec<Player>>;
}

/// Handle to a `PlayerService` that can be shared across request handlers.
pub type SharedPlayerService = Arc<dyn PlayerService + Send + Sync>;

/// Business logic backed by a database.
///
/// Every operation obtains its own connection from the pool and returns it once done, so there
/// is no state shared across calls other than the pool itself.
#[derive(Clone)]
pub struct Driver {
    /// The database that the driver uses for persistence.
    db: Arc<dyn Db + Send + Sync>,
}

impl Driver {
    /// Creates a new driver backed by the given injected components.
    pub fn new(db: Arc<dyn Db + Send + Sync>) -> Self {
        Self { db }
    }
}
