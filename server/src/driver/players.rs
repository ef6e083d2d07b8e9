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

//! Operations on players.

use crate::db;
use crate::driver::{Driver, PlayerService};
use crate::model::{Player, PlayerId};
use async_trait::async_trait;
use log::info;
use players_core::driver::DriverResult;

#[async_trait]
impl PlayerService for Driver {
    async fn get_player(&self, id: PlayerId) -> DriverResult<Player> {
        let player = db::get_player(&mut self.db.ex().await?, id).await?;
        info!("Fetched player {}", id);
        Ok(player)
    }

    async fn get_all_players(&self) -> DriverResult<Vec<Player>> {
        let players = db::get_players(&mut self.db.ex().await?).await?;
        info!("Fetched {} players", players.len());
        Ok(players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::testutils::*;
    use players_core::driver::DriverError;

    #[tokio::test]
    async fn test_get_player_ok() {
        let context = TestContext::setup().await;

        context.put_player("ignored", 3).await;
        let id = context.put_player("the player", 42).await;

        let player = context.driver().get_player(id).await.unwrap();
        assert!(Player::new(id, "the player", 42).same_record(&player));
        assert_eq!(&id, player.id());

        context.close_db().await;
    }

    #[tokio::test]
    async fn test_get_player_not_found() {
        let context = TestContext::setup().await;

        assert_eq!(
            DriverError::NotFound("Entity not found".to_owned()),
            context.driver().get_player(PlayerId::new(1)).await.unwrap_err()
        );

        context.close_db().await;
    }

    #[tokio::test]
    async fn test_get_player_db_closed() {
        let context = TestContext::setup().await;
        let id = context.put_player("unreachable", 1).await;

        context.close_db().await;

        match context.driver().get_player(id).await {
            Err(DriverError::BackendError(_)) => (),
            e => panic!("Must have failed with a BackendError but got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_get_all_players_empty() {
        let context = TestContext::setup().await;

        assert!(context.driver().get_all_players().await.unwrap().is_empty());

        context.close_db().await;
    }

    #[tokio::test]
    async fn test_get_all_players_ok() {
        let context = TestContext::setup().await;

        let mut exp_players = vec![];
        for (name, score) in [("one", 1), ("two", 20), ("three", 300)] {
            let id = context.put_player(name, score).await;
            exp_players.push(Player::new(id, name, score));
        }

        let mut players = context.driver().get_all_players().await.unwrap();
        players.sort_by_key(|p| *p.id());
        assert_eq!(exp_players.len(), players.len());
        for (exp_player, player) in exp_players.iter().zip(players.iter()) {
            assert!(exp_player.same_record(player), "{:?} != {:?}", exp_player, player);
        }

        context.close_db().await;
    }

    #[tokio::test]
    async fn test_get_all_players_json_round_trip() {
        let context = TestContext::setup().await;

        context.put_player("alpha", 7).await;
        context.put_player("beta", 8).await;

        let players = context.driver().get_all_players().await.unwrap();
        let json = serde_json::to_vec(&players).unwrap();
        let decoded: Vec<Player> = serde_json::from_slice(&json).unwrap();
        assert_eq!(players.len(), decoded.len());
        for (player, decoded) in players.iter().zip(decoded.iter()) {
            assert!(player.same_record(decoded));
        }

        context.close_db().await;
    }

    #[tokio::test]
    async fn test_get_all_players_db_closed() {
        let context = TestContext::setup().await;

        context.close_db().await;

        match context.driver().get_all_players().await {
            Err(DriverError::BackendError(_)) => (),
            e => panic!("Must have failed with a BackendError but got: {:?}", e),
        }
    }
}
