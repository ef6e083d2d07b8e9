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

//! API to check that the service is up.

use axum::http::StatusCode;
use axum::response::IntoResponse;

/// API handler.
///
/// This never touches the database so that it reports the status of the service alone.
pub(crate) async fn handler() -> impl IntoResponse {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use crate::rest::testutils::*;
    use axum::http;
    use players_core::rest::testutils::*;

    fn route() -> (http::Method, String) {
        (http::Method::GET, "/health".to_owned())
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.app(), route()).send_empty().await.expect_empty().await;

        context.close_db().await;
    }

    #[tokio::test]
    async fn test_ok_without_database() {
        let context = TestContext::setup().await;
        context.close_db().await;

        OneShotBuilder::new(context.app(), route()).send_empty().await.expect_empty().await;
    }

    #[tokio::test]
    async fn test_wrong_method() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.app(), (http::Method::POST, "/health"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::METHOD_NOT_ALLOWED)
            .expect_empty()
            .await;

        context.close_db().await;
    }
}
