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

//! Rudimentary framework to build database-backed web services.
//!
//! Services built on this crate adhere to the following layered architecture and should structure
//! their code to have these modules as well:
//!
//! 1.  `model`: The base layer, providing high-level data types that represent concepts in the
//!     domain of the application.  There should be no logic in here.
//!
//! 1.  `db`: The persistence layer.  Services expose free functions that take an `Executor` and
//!     translate domain-level requests into queries for each supported database.
//!
//! 1.  `driver`: The business logic layer.  Services provide their own `Driver` type holding the
//!     injected dependencies and implementing the operations that the REST layer needs.
//!
//! 1.  `rest`: The HTTP layer.  Services provide an `axum::Router` whose handlers delegate to the
//!     driver.
//!
//! 1.  `main`: The app launcher.  Its sole purpose is to gather configuration and call into the
//!     library to instantiate and run the service.
//!
//! Every layer has its own result and error types, such as `DbResult` and `DbError`.  Errors
//! float to the top of the app using the `?` operator and are translated to HTTP status codes
//! once returned from the REST layer.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

pub mod db;
pub mod driver;
pub mod env;
pub mod rest;
