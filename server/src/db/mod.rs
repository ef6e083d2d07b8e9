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

//! Database abstraction in terms of the operations needed by the server.

use crate::model::{Player, PlayerId};
use futures::TryStreamExt;
use players_core::db::postgres;
#[cfg(test)]
use players_core::db::sqlite::{self, build_timestamp};
use players_core::db::{DbError, DbResult, Executor};
use sqlx::Row;
use sqlx::postgres::PgRow;
#[cfg(test)]
use sqlx::sqlite::SqliteRow;
use time::OffsetDateTime;


/// Initializes the database schema.
///
/// The service never calls this on its own: the schema files are meant to be applied by the
/// operator before deploying the service.
#[cfg(test)]
pub(crate) async fn init_schema(ex: &mut Executor) -> DbResult<()> {
    match ex {
        Executor::Postgres(ex) => postgres::run_schema(ex, include_str!("postgres.sql")).await,

        Executor::Sqlite(ex) => sqlite::run_schema(ex, include_str!("sqlite.sql")).await,

        #[allow(unused)]
        _ => unreachable!(),
    }
}

impl TryFrom<PgRow> for Player {
    type Error = DbError;

    fn try_from(row: PgRow) -> DbResult<Self> {
        let id: i32 = row.try_get("id").map_err(postgres::map_sqlx_error)?;
        let name: String = row.try_get("name").map_err(postgres::map_sqlx_error)?;
        let score: i32 = row.try_get("score").map_err(postgres::map_sqlx_error)?;
        let created_at: OffsetDateTime =
            row.try_get("created_at").map_err(postgres::map_sqlx_error)?;
        let updated_at: OffsetDateTime =
            row.try_get("updated_at").map_err(postgres::map_sqlx_error)?;

        Ok(Player::new(PlayerId::new(id), name, score).with_timestamps(created_at, updated_at))
    }
}

#[cfg(test)]
impl TryFrom<SqliteRow> for Player {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let id: i32 = row.try_get("id").map_err(sqlite::map_sqlx_error)?;
        let name: String = row.try_get("name").map_err(sqlite::map_sqlx_error)?;
        let score: i32 = row.try_get("score").map_err(sqlite::map_sqlx_error)?;
        let created_at_secs: i64 =
            row.try_get("created_at_secs").map_err(sqlite::map_sqlx_error)?;
        let created_at_nsecs: i64 =
            row.try_get("created_at_nsecs").map_err(sqlite::map_sqlx_error)?;
        let updated_at_secs: i64 =
            row.try_get("updated_at_secs").map_err(sqlite::map_sqlx_error)?;
        let updated_at_nsecs: i64 =
            row.try_get("updated_at_nsecs").map_err(sqlite::map_sqlx_error)?;

        let created_at = build_timestamp(created_at_secs, created_at_nsecs)?;
        let updated_at = build_timestamp(updated_at_secs, updated_at_nsecs)?;

        Ok(Player::new(PlayerId::new(id), name, score).with_timestamps(created_at, updated_at))
    }
}

/// Gets the player identified by `id`.
///
/// Returns `DbError::NotFound` if there is no such player.
pub(crate) async fn get_player(ex: &mut Executor, id: PlayerId) -> DbResult<Player> {
    match ex {
        Executor::Postgres(ex) => {
            let query_str =
                "SELECT id, name, score, created_at, updated_at FROM players WHERE id = $1";
            let row = sqlx::query(query_str)
                .bind(id.as_i32())
                .fetch_one(&mut **ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            Player::try_from(row)
        }

        #[cfg(test)]
        Executor::Sqlite(ex) => {
            let query_str = "
                SELECT
                    id, name, score,
                    created_at_secs, created_at_nsecs, updated_at_secs, updated_at_nsecs
                FROM players
                WHERE id = ?";
            let row = sqlx::query(query_str)
                .bind(id.as_i32())
                .fetch_one(&mut **ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            Player::try_from(row)
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Gets all players in the order in which the database returns them.
pub(crate) async fn get_players(ex: &mut Executor) -> DbResult<Vec<Player>> {
    let mut players = vec![];
    match ex {
        Executor::Postgres(ex) => {
            let query_str = "SELECT id, name, score, created_at, updated_at FROM players";
            let mut rows = sqlx::query(query_str).fetch(&mut **ex);
            while let Some(row) = rows.try_next().await.map_err(postgres::map_sqlx_error)? {
                players.push(Player::try_from(row)?);
            }
        }

        #[cfg(test)]
        Executor::Sqlite(ex) => {
            let query_str = "
                SELECT
                    id, name, score,
                    created_at_secs, created_at_nsecs, updated_at_secs, updated_at_nsecs
                FROM players";
            let mut rows = sqlx::query(query_str).fetch(&mut **ex);
            while let Some(row) = rows.try_next().await.map_err(sqlite::map_sqlx_error)? {
                players.push(Player::try_from(row)?);
            }
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
    Ok(players)
}

/// Inserts a new player with `name` and `score`, recording `now` as both its creation and
/// modification times, and returns the identifier the database assigned to it.
#[cfg(test)]
pub(crate) async fn put_player(
    ex: &mut Executor,
    name: &str,
    score: i32,
    now: OffsetDateTime,
) -> DbResult<PlayerId> {
    match ex {
        Executor::Postgres(ex) => {
            let query_str = "
                INSERT INTO players (name, score, created_at, updated_at)
                VALUES ($1, $2, $3, $3)
                RETURNING id";
            let row = sqlx::query(query_str)
                .bind(name)
                .bind(score)
                .bind(now)
                .fetch_one(&mut **ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            let id: i32 = row.try_get("id").map_err(postgres::map_sqlx_error)?;
            Ok(PlayerId::new(id))
        }

        Executor::Sqlite(ex) => {
            let (now_secs, now_nsecs) = sqlite::unpack_timestamp(now)?;

            let query_str = "
                INSERT INTO players (
                    name, score,
                    created_at_secs, created_at_nsecs, updated_at_secs, updated_at_nsecs
                )
                VALUES (?, ?, ?, ?, ?, ?)";
            let done = sqlx::query(query_str)
                .bind(name)
                .bind(score)
                .bind(now_secs)
                .bind(now_nsecs)
                .bind(now_secs)
                .bind(now_nsecs)
                .execute(&mut **ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            match i32::try_from(done.last_insert_rowid()) {
                Ok(id) => Ok(PlayerId::new(id)),
                Err(e) => Err(DbError::DataIntegrityError(format!("Invalid player id: {}", e))),
            }
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}
