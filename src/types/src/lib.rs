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

//! Message types for the Secret Manager gRPC transport.
//!
//! The messages in this crate track the wire format of the
//! `google.cloud.secretmanager.v1` and `google.iam.v1` protobuf packages.
//! They are plain [prost] messages: the transport crate binds them to RPC
//! paths, this crate only defines their encoding.

/// Messages in the `google.cloud.secretmanager.v1` package.
pub mod model;

/// The subset of the `google.iam.v1` package used by Secret Manager.
pub mod iam;

/// Well-known protobuf types used in the service surface.
pub mod protobuf {
    /// `google.protobuf.Empty`, represented by prost as the unit type.
    pub type Empty = ();
}
