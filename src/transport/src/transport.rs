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

//! The gRPC transport for `SecretManagerService`.

use crate::builder::Builder;
use crate::error::{Error, Result};
use crate::methods;
use crate::stub::{InnerClient, Stub};
use auth::credentials::Credentials;
use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use types::iam::{
    GetIamPolicyRequest, Policy, SetIamPolicyRequest, TestIamPermissionsRequest,
    TestIamPermissionsResponse,
};
use types::model::{
    AccessSecretVersionRequest, AccessSecretVersionResponse, AddSecretVersionRequest,
    CreateSecretRequest, DeleteSecretRequest, DestroySecretVersionRequest,
    DisableSecretVersionRequest, EnableSecretVersionRequest, GetSecretRequest,
    GetSecretVersionRequest, ListSecretVersionsRequest, ListSecretVersionsResponse,
    ListSecretsRequest, ListSecretsResponse, Secret, SecretVersion, UpdateSecretRequest,
};
use types::protobuf::Empty;

/// A gRPC transport for `SecretManagerService`.
///
/// The transport owns a channel and credentials, and hands out typed
/// [Stub]s for the unary methods of the service. Stubs are created on first
/// use and memoized, requesting the same method twice returns the same stub.
pub struct SecretManagerTransport {
    inner: InnerClient,
    credentials: Credentials,
    host: String,
    user_agent: Option<String>,
    stubs: Mutex<HashMap<&'static str, Arc<dyn Any + Send + Sync>>>,
}

impl SecretManagerTransport {
    /// Returns a builder to configure and create a transport.
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub(crate) fn new(
        channel: tonic::transport::Channel,
        credentials: Credentials,
        host: String,
        user_agent: Option<String>,
    ) -> Self {
        // Message sizes are limited by the service, not by this client.
        let inner = tonic::client::Grpc::new(channel)
            .max_decoding_message_size(usize::MAX)
            .max_encoding_message_size(usize::MAX);
        Self {
            inner,
            credentials,
            host,
            user_agent,
            stubs: Mutex::new(HashMap::new()),
        }
    }

    /// The host this transport sends requests to, including the port.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the stub for `name`, creating it on first use.
    ///
    /// Returns an error if `name` is not a method of the service, or if the
    /// stub for `name` was first created with different request or response
    /// types.
    pub fn stub<Request, Response>(&self, name: &str) -> Result<Arc<Stub<Request, Response>>>
    where
        Request: prost::Message + 'static,
        Response: prost::Message + Default + 'static,
    {
        let method = methods::find(name).ok_or_else(|| Error::unknown_method(name))?;
        let stub = {
            let mut stubs = self.stubs.lock().expect("stub cache lock is poisoned");
            stubs
                .entry(method.name)
                .or_insert_with(|| {
                    Arc::new(Stub::<Request, Response>::new(
                        self.inner.clone(),
                        self.credentials.clone(),
                        method,
                        self.user_agent.clone(),
                    )) as Arc<dyn Any + Send + Sync>
                })
                .clone()
        };
        stub.downcast::<Stub<Request, Response>>()
            .map_err(|_| Error::mismatched_stub(name))
    }

    /// The stub for `ListSecrets`.
    pub fn list_secrets(&self) -> Result<Arc<Stub<ListSecretsRequest, ListSecretsResponse>>> {
        self.stub("ListSecrets")
    }

    /// The stub for `CreateSecret`.
    pub fn create_secret(&self) -> Result<Arc<Stub<CreateSecretRequest, Secret>>> {
        self.stub("CreateSecret")
    }

    /// The stub for `AddSecretVersion`.
    pub fn add_secret_version(
        &self,
    ) -> Result<Arc<Stub<AddSecretVersionRequest, SecretVersion>>> {
        self.stub("AddSecretVersion")
    }

    /// The stub for `GetSecret`.
    pub fn get_secret(&self) -> Result<Arc<Stub<GetSecretRequest, Secret>>> {
        self.stub("GetSecret")
    }

    /// The stub for `UpdateSecret`.
    pub fn update_secret(&self) -> Result<Arc<Stub<UpdateSecretRequest, Secret>>> {
        self.stub("UpdateSecret")
    }

    /// The stub for `DeleteSecret`.
    pub fn delete_secret(&self) -> Result<Arc<Stub<DeleteSecretRequest, Empty>>> {
        self.stub("DeleteSecret")
    }

    /// The stub for `ListSecretVersions`.
    pub fn list_secret_versions(
        &self,
    ) -> Result<Arc<Stub<ListSecretVersionsRequest, ListSecretVersionsResponse>>> {
        self.stub("ListSecretVersions")
    }

    /// The stub for `GetSecretVersion`.
    pub fn get_secret_version(
        &self,
    ) -> Result<Arc<Stub<GetSecretVersionRequest, SecretVersion>>> {
        self.stub("GetSecretVersion")
    }

    /// The stub for `AccessSecretVersion`.
    pub fn access_secret_version(
        &self,
    ) -> Result<Arc<Stub<AccessSecretVersionRequest, AccessSecretVersionResponse>>> {
        self.stub("AccessSecretVersion")
    }

    /// The stub for `DisableSecretVersion`.
    pub fn disable_secret_version(
        &self,
    ) -> Result<Arc<Stub<DisableSecretVersionRequest, SecretVersion>>> {
        self.stub("DisableSecretVersion")
    }

    /// The stub for `EnableSecretVersion`.
    pub fn enable_secret_version(
        &self,
    ) -> Result<Arc<Stub<EnableSecretVersionRequest, SecretVersion>>> {
        self.stub("EnableSecretVersion")
    }

    /// The stub for `DestroySecretVersion`.
    pub fn destroy_secret_version(
        &self,
    ) -> Result<Arc<Stub<DestroySecretVersionRequest, SecretVersion>>> {
        self.stub("DestroySecretVersion")
    }

    /// The stub for `SetIamPolicy`.
    pub fn set_iam_policy(&self) -> Result<Arc<Stub<SetIamPolicyRequest, Policy>>> {
        self.stub("SetIamPolicy")
    }

    /// The stub for `GetIamPolicy`.
    pub fn get_iam_policy(&self) -> Result<Arc<Stub<GetIamPolicyRequest, Policy>>> {
        self.stub("GetIamPolicy")
    }

    /// The stub for `TestIamPermissions`.
    pub fn test_iam_permissions(
        &self,
    ) -> Result<Arc<Stub<TestIamPermissionsRequest, TestIamPermissionsResponse>>> {
        self.stub("TestIamPermissions")
    }
}

impl std::fmt::Debug for SecretManagerTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretManagerTransport")
            .field("host", &self.host)
            .finish()
    }
}
