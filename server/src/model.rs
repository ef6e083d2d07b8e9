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

//! High-level data types.

use derive_getters::Getters;
use derive_more::{Constructor, Display};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Newtype pattern for the identifier of a player.  This is the primary key of the player in the
/// database and never changes once assigned.
#[derive(
    Clone, Constructor, Copy, Debug, Deserialize, Display, Eq, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub struct PlayerId(i32);

impl PlayerId {
    /// Returns the identifier as an `i32`, which is what the database stores.
    pub fn as_i32(self) -> i32 {
        self.0
    }
}

/// A player record.
///
/// The timestamps are owned by the database and are never part of the JSON representation, so a
/// `Player` deserialized from JSON carries none.
#[derive(Clone, Debug, Deserialize, Getters, PartialEq, Serialize)]
pub struct Player {
    /// Unique identifier of the player.
    #[serde(rename = "Id")]
    id: PlayerId,

    /// Display name of the player.
    #[serde(rename = "Name")]
    name: String,

    /// Current score of the player.
    #[serde(rename = "Score")]
    score: i32,

    /// When the record was created, if known.
    #[serde(skip)]
    created_at: Option<OffsetDateTime>,

    /// When the record was last modified, if known.
    #[serde(skip)]
    updated_at: Option<OffsetDateTime>,
}

impl Player {
    /// Creates a new player without timestamps.
    pub fn new<N: Into<String>>(id: PlayerId, name: N, score: i32) -> Self {
        Self { id, name: name.into(), score, created_at: None, updated_at: None }
    }

    /// Attaches the `created_at` and `updated_at` timestamps recorded by the database.
    pub fn with_timestamps(self, created_at: OffsetDateTime, updated_at: OffsetDateTime) -> Self {
        Self { created_at: Some(created_at), updated_at: Some(updated_at), ..self }
    }

    /// Returns true if `other` describes the same record as `self`, ignoring timestamps.
    #[cfg(test)]
    pub(crate) fn same_record(&self, other: &Player) -> bool {
        self.id == other.id && self.name == other.name && self.score == other.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_display() {
        assert_eq!("42", PlayerId::new(42).to_string());
        assert_eq!(-3, PlayerId::new(-3).as_i32());
    }

    #[test]
    fn test_player_serialize_field_names() {
        let player = Player::new(PlayerId::new(1), "Alice", 5);
        assert_eq!(
            r#"{"Id":1,"Name":"Alice","Score":5}"#,
            serde_json::to_string(&player).unwrap()
        );
    }

    #[test]
    fn test_player_serialize_omits_timestamps() {
        let ts = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        let player = Player::new(PlayerId::new(7), "Bob", -2).with_timestamps(ts, ts);
        assert_eq!(
            r#"{"Id":7,"Name":"Bob","Score":-2}"#,
            serde_json::to_string(&player).unwrap()
        );
    }

    #[test]
    fn test_player_json_round_trip() {
        let ts = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        let player = Player::new(PlayerId::new(3), "Carol", 12).with_timestamps(ts, ts);

        let json = serde_json::to_vec(&player).unwrap();
        let decoded: Player = serde_json::from_slice(&json).unwrap();

        assert!(player.same_record(&decoded));
        assert_eq!(&None, decoded.created_at());
        assert_eq!(&None, decoded.updated_at());
        assert_ne!(player, decoded);
    }

    #[test]
    fn test_player_deserialize_ignores_timestamps() {
        let player: Player = serde_json::from_str(
            r#"{"Id":9,"Name":"Dan","Score":0,"created_at":"2020-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(Player::new(PlayerId::new(9), "Dan", 0), player);
    }
}
