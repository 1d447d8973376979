// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A gRPC transport for the [Secret Manager API].
//!
//! This crate creates authenticated channels to the service and exposes its
//! unary methods as typed stubs. It does not implement retries, resource name
//! helpers, or pagination, applications needing a full featured client should
//! use a client library built on top of this transport.
//!
//! ## Example
//! ```no_run
//! # use google_cloud_secretmanager_grpc::transport::SecretManagerTransport;
//! # use types::model::GetSecretRequest;
//! # tokio_test::block_on(async {
//! let transport = SecretManagerTransport::builder().build().await?;
//! let secret = transport
//!     .get_secret()?
//!     .call(GetSecretRequest {
//!         name: "projects/my-project/secrets/my-secret".into(),
//!     })
//!     .await?;
//! println!("secret {}", secret.name);
//! # anyhow::Ok(()) });
//! ```
//!
//! [Secret Manager API]: https://cloud.google.com/secret-manager

mod api_header;
pub mod builder;
pub mod channel;
pub mod error;
pub mod methods;
pub mod stub;
pub mod transport;

pub use transport::SecretManagerTransport;
