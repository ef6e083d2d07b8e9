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

//! Start and stop hooks for the HTTP listener.
//!
//! A `Service` holds the routes of the application and turns into a `ServerHandle` once it starts
//! listening.  The handle is the only way to stop the listener, so a stopped service cannot be
//! restarted by accident.

use crate::driver::SharedPlayerService;
use crate::rest::app;
use axum::Router;
use axum_server::Handle;
use log::info;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::task::JoinHandle;

/// An HTTP service with all of its routes registered but not yet listening.
pub struct Service {
    /// Router with all the APIs of the service.
    router: Router,
}

impl Service {
    /// Registers the routes of the service backed by `players`.
    pub fn new(players: SharedPlayerService) -> Self {
        info!("Starting router instance");
        Self { router: app(players) }
    }

    /// Binds to `addr` and starts serving requests in a background task.
    ///
    /// `addr` may use port 0 to let the system pick a free port, in which case the handle reports
    /// the actual address.
    pub async fn start(self, addr: SocketAddr) -> io::Result<ServerHandle> {
        let handle = Handle::new();
        let server = axum_server::bind(addr).handle(handle.clone());
        let task = tokio::spawn(server.serve(self.router.into_make_service()));

        let local_addr = match handle.listening().await {
            Some(local_addr) => local_addr,
            None => {
                // The server loop only gives up before listening if it failed to bind.
                return match task.await {
                    Ok(Err(e)) => Err(e),
                    Ok(Ok(())) => Err(io::Error::other(format!("Server on {} exited early", addr))),
                    Err(e) => Err(io::Error::other(e)),
                };
            }
        };

        info!("Listening on {}", local_addr);
        Ok(ServerHandle { local_addr, handle, task })
    }
}

/// A running HTTP service.
pub struct ServerHandle {
    /// Address the listener is bound to.
    local_addr: SocketAddr,

    /// Control handle of the server loop.
    handle: Handle,

    /// Task running the server loop.
    task: JoinHandle<io::Result<()>>,
}

impl ServerHandle {
    /// Returns the address the listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stops accepting new connections and waits up to `grace` for in-flight requests to finish.
    ///
    /// Connections still open after `grace` are closed, which cancels the requests they carry.
    pub async fn stop(self, grace: Duration) -> io::Result<()> {
        let ServerHandle { local_addr, handle, task } = self;

        info!("Stopping server on {}", local_addr);
        handle.graceful_shutdown(Some(grace));

        match task.await {
            Ok(result) => {
                info!("Server on {} stopped", local_addr);
                result
            }
            Err(e) => Err(io::Error::other(e)),
        }
    }
}
