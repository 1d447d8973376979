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

//! Resource and request messages for `google.cloud.secretmanager.v1`.

/// A logical secret whose value and versions can be accessed.
///
/// A [Secret] is made up of zero or more [SecretVersion]s that represent the
/// secret data.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Secret {
    /// Output only. The resource name of the secret in the format
    /// `projects/*/secrets/*`.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// Required. Immutable. The replication policy of the secret data attached
    /// to the secret.
    #[prost(message, optional, tag = "2")]
    pub replication: ::core::option::Option<Replication>,
    /// Output only. The time at which the secret was created.
    #[prost(message, optional, tag = "3")]
    pub create_time: ::core::option::Option<::prost_types::Timestamp>,
    /// The labels assigned to this secret.
    #[prost(map = "string, string", tag = "4")]
    pub labels: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        ::prost::alloc::string::String,
    >,
    /// Optional. Etag of the currently stored secret.
    #[prost(string, tag = "8")]
    pub etag: ::prost::alloc::string::String,
}

/// A policy that defines the replication and encryption configuration of data.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Replication {
    /// The replication policy for this secret.
    #[prost(oneof = "replication::Replication", tags = "1, 2")]
    pub replication: ::core::option::Option<replication::Replication>,
}
/// Nested message and enum types in `Replication`.
pub mod replication {
    /// A replication policy that replicates the secret data without any
    /// restrictions.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Automatic {}
    /// A replication policy that replicates the secret data into the locations
    /// specified in `replicas`.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct UserManaged {
        /// Required. The list of replicas for this secret.
        #[prost(message, repeated, tag = "1")]
        pub replicas: ::prost::alloc::vec::Vec<user_managed::Replica>,
    }
    /// Nested message and enum types in `UserManaged`.
    pub mod user_managed {
        /// Represents a replica for this secret.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Replica {
            /// The canonical ID of the location to replicate data, for example
            /// `"us-east1"`.
            #[prost(string, tag = "1")]
            pub location: ::prost::alloc::string::String,
        }
    }
    /// The replication policy for this secret.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Replication {
        /// The secret data is replicated without any restrictions.
        #[prost(message, tag = "1")]
        Automatic(Automatic),
        /// The secret data is replicated into the locations specified.
        #[prost(message, tag = "2")]
        UserManaged(UserManaged),
    }
}

/// A secret version resource in the Secret Manager API.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SecretVersion {
    /// Output only. The resource name of the version in the format
    /// `projects/*/secrets/*/versions/*`.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// Output only. The time at which the version was created.
    #[prost(message, optional, tag = "2")]
    pub create_time: ::core::option::Option<::prost_types::Timestamp>,
    /// Output only. The time this version was destroyed. Only present if
    /// `state` is `DESTROYED`.
    #[prost(message, optional, tag = "3")]
    pub destroy_time: ::core::option::Option<::prost_types::Timestamp>,
    /// Output only. The current state of the version.
    #[prost(enumeration = "secret_version::State", tag = "4")]
    pub state: i32,
}
/// Nested message and enum types in `SecretVersion`.
pub mod secret_version {
    /// The state of a secret version, indicating if it can be accessed.
    #[derive(
        Clone,
        Copy,
        Debug,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        ::prost::Enumeration,
    )]
    #[repr(i32)]
    pub enum State {
        /// Not specified. This value is unused and invalid.
        Unspecified = 0,
        /// The version may be accessed.
        Enabled = 1,
        /// The version may not be accessed, but the secret data is still
        /// available and can be placed back into the `ENABLED` state.
        Disabled = 2,
        /// The version is destroyed and the secret data is no longer stored.
        Destroyed = 3,
    }
}

/// A secret payload resource in the Secret Manager API. This includes the
/// sensitive secret data that is associated with a version.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SecretPayload {
    /// The secret data. Must be no larger than 64KiB.
    #[prost(bytes = "vec", tag = "1")]
    pub data: ::prost::alloc::vec::Vec<u8>,
    /// Optional. If specified, the checksum of the data is computed and
    /// compared by the service.
    #[prost(int64, optional, tag = "2")]
    pub data_crc32c: ::core::option::Option<i64>,
}

/// Request message for `SecretManagerService.ListSecrets`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListSecretsRequest {
    /// Required. The resource name of the project in the format `projects/*`.
    #[prost(string, tag = "1")]
    pub parent: ::prost::alloc::string::String,
    /// Optional. The maximum number of results to be returned in a single
    /// page.
    #[prost(int32, tag = "2")]
    pub page_size: i32,
    /// Optional. Pagination token, returned earlier via
    /// [ListSecretsResponse::next_page_token].
    #[prost(string, tag = "3")]
    pub page_token: ::prost::alloc::string::String,
    /// Optional. Filter string, adhering to the rules in List-operation
    /// filtering.
    #[prost(string, tag = "4")]
    pub filter: ::prost::alloc::string::String,
}

/// Response message for `SecretManagerService.ListSecrets`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListSecretsResponse {
    /// The list of secrets sorted in reverse by create_time (newest first).
    #[prost(message, repeated, tag = "1")]
    pub secrets: ::prost::alloc::vec::Vec<Secret>,
    /// A token to retrieve the next page of results.
    #[prost(string, tag = "2")]
    pub next_page_token: ::prost::alloc::string::String,
    /// The total number of secrets.
    #[prost(int32, tag = "3")]
    pub total_size: i32,
}

/// Request message for `SecretManagerService.CreateSecret`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateSecretRequest {
    /// Required. The resource name of the project to associate with the
    /// secret, in the format `projects/*`.
    #[prost(string, tag = "1")]
    pub parent: ::prost::alloc::string::String,
    /// Required. This must be unique within the project.
    #[prost(string, tag = "2")]
    pub secret_id: ::prost::alloc::string::String,
    /// Required. The secret data to create.
    #[prost(message, optional, tag = "3")]
    pub secret: ::core::option::Option<Secret>,
}

/// Request message for `SecretManagerService.AddSecretVersion`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddSecretVersionRequest {
    /// Required. The resource name of the secret in the format
    /// `projects/*/secrets/*`.
    #[prost(string, tag = "1")]
    pub parent: ::prost::alloc::string::String,
    /// Required. The secret payload to attach to the secret.
    #[prost(message, optional, tag = "2")]
    pub payload: ::core::option::Option<SecretPayload>,
}

/// Request message for `SecretManagerService.GetSecret`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetSecretRequest {
    /// Required. The resource name of the secret in the format
    /// `projects/*/secrets/*`.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

/// Request message for `SecretManagerService.UpdateSecret`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateSecretRequest {
    /// Required. The secret resource with updated field values.
    #[prost(message, optional, tag = "1")]
    pub secret: ::core::option::Option<Secret>,
    /// Required. Specifies the fields to be updated.
    #[prost(message, optional, tag = "2")]
    pub update_mask: ::core::option::Option<::prost_types::FieldMask>,
}

/// Request message for `SecretManagerService.DeleteSecret`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteSecretRequest {
    /// Required. The resource name of the secret to delete in the format
    /// `projects/*/secrets/*`.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

/// Request message for `SecretManagerService.ListSecretVersions`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListSecretVersionsRequest {
    /// Required. The resource name of the secret in the format
    /// `projects/*/secrets/*`.
    #[prost(string, tag = "1")]
    pub parent: ::prost::alloc::string::String,
    /// Optional. The maximum number of results to be returned in a single
    /// page.
    #[prost(int32, tag = "2")]
    pub page_size: i32,
    /// Optional. Pagination token, returned earlier via
    /// [ListSecretVersionsResponse::next_page_token].
    #[prost(string, tag = "3")]
    pub page_token: ::prost::alloc::string::String,
    /// Optional. Filter string, adhering to the rules in List-operation
    /// filtering.
    #[prost(string, tag = "4")]
    pub filter: ::prost::alloc::string::String,
}

/// Response message for `SecretManagerService.ListSecretVersions`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListSecretVersionsResponse {
    /// The list of versions sorted in reverse by create_time (newest first).
    #[prost(message, repeated, tag = "1")]
    pub versions: ::prost::alloc::vec::Vec<SecretVersion>,
    /// A token to retrieve the next page of results.
    #[prost(string, tag = "2")]
    pub next_page_token: ::prost::alloc::string::String,
    /// The total number of versions.
    #[prost(int32, tag = "3")]
    pub total_size: i32,
}

/// Request message for `SecretManagerService.GetSecretVersion`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetSecretVersionRequest {
    /// Required. The resource name of the version in the format
    /// `projects/*/secrets/*/versions/*`.
    ///
    /// `projects/*/secrets/*/versions/latest` is an alias to the most recently
    /// created version.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

/// Request message for `SecretManagerService.AccessSecretVersion`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AccessSecretVersionRequest {
    /// Required. The resource name of the version in the format
    /// `projects/*/secrets/*/versions/*`.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

/// Response message for `SecretManagerService.AccessSecretVersion`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AccessSecretVersionResponse {
    /// The resource name of the version in the format
    /// `projects/*/secrets/*/versions/*`.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// The secret payload.
    #[prost(message, optional, tag = "2")]
    pub payload: ::core::option::Option<SecretPayload>,
}

/// Request message for `SecretManagerService.DisableSecretVersion`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DisableSecretVersionRequest {
    /// Required. The resource name of the version to disable in the format
    /// `projects/*/secrets/*/versions/*`.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

/// Request message for `SecretManagerService.EnableSecretVersion`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EnableSecretVersionRequest {
    /// Required. The resource name of the version to enable in the format
    /// `projects/*/secrets/*/versions/*`.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

/// Request message for `SecretManagerService.DestroySecretVersion`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DestroySecretVersionRequest {
    /// Required. The resource name of the version to destroy in the format
    /// `projects/*/secrets/*/versions/*`.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn get_secret_request_wire_format() {
        let request = GetSecretRequest {
            name: "projects/p/secrets/s".into(),
        };
        let got = request.encode_to_vec();
        // Field 1, wire type LEN, followed by the name bytes.
        let mut want = vec![0x0a, 0x14];
        want.extend_from_slice(b"projects/p/secrets/s");
        assert_eq!(got, want);
    }

    #[test]
    fn secret_version_state() {
        use secret_version::State;
        assert_eq!(State::try_from(0), Ok(State::Unspecified));
        assert_eq!(State::try_from(1), Ok(State::Enabled));
        assert_eq!(State::try_from(2), Ok(State::Disabled));
        assert_eq!(State::try_from(3), Ok(State::Destroyed));
        assert!(State::try_from(42).is_err());

        let version = SecretVersion {
            name: "projects/p/secrets/s/versions/1".into(),
            state: State::Disabled as i32,
            ..Default::default()
        };
        let decoded = SecretVersion::decode(version.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded.state, State::Disabled as i32);
    }

    #[test]
    fn replication_oneof() {
        let secret = Secret {
            name: "projects/p/secrets/s".into(),
            replication: Some(Replication {
                replication: Some(replication::Replication::Automatic(
                    replication::Automatic {},
                )),
            }),
            ..Default::default()
        };
        let decoded = Secret::decode(secret.encode_to_vec().as_slice()).unwrap();
        assert!(matches!(
            decoded.replication.and_then(|r| r.replication),
            Some(replication::Replication::Automatic(_))
        ));
    }

    #[test]
    fn payload_checksum_is_optional() {
        let payload = SecretPayload {
            data: b"super secret".to_vec(),
            data_crc32c: None,
        };
        let decoded = SecretPayload::decode(payload.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded.data, b"super secret");
        assert_eq!(decoded.data_crc32c, None);
    }
}
