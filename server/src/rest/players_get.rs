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

//! API to get all players.

use crate::driver::SharedPlayerService;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use log::error;
use players_core::rest::RestResult;

/// API handler.
pub(crate) async fn handler(
    State(players): State<SharedPlayerService>,
) -> RestResult<impl IntoResponse> {
    let players = players.get_all_players().await.map_err(|e| {
        error!("Cannot get players: {}", e);
        e
    })?;
    let body = serde_json::to_vec(&players).map_err(|e| {
        error!("Cannot serialize players: {}", e);
        e
    })?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}
