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

//! API to show the featured player.

use crate::driver::SharedPlayerService;
use crate::model::PlayerId;
use axum::extract::State;
use axum::response::IntoResponse;
use log::error;
use players_core::rest::RestResult;

/// Identifier of the player shown by this API.
const FEATURED_PLAYER_ID: i32 = 1;

/// API handler.
pub(crate) async fn handler(
    State(players): State<SharedPlayerService>,
) -> RestResult<impl IntoResponse> {
    let id = PlayerId::new(FEATURED_PLAYER_ID);
    let player = players.get_player(id).await.map_err(|e| {
        error!("Cannot get player {}: {}", id, e);
        e
    })?;
    Ok(format!("Player: {}", player.name()))
}
