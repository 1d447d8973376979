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

//! The unary method surface of `SecretManagerService`.

/// The fully-qualified service name.
pub const SERVICE: &str = "google.cloud.secretmanager.v1.SecretManagerService";

/// A unary method in the service definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Method {
    /// The short method name, e.g. `GetSecret`.
    pub name: &'static str,
    /// The request path, e.g.
    /// `/google.cloud.secretmanager.v1.SecretManagerService/GetSecret`.
    pub path: &'static str,
}

macro_rules! method {
    ($name:literal) => {
        Method {
            name: $name,
            path: concat!(
                "/google.cloud.secretmanager.v1.SecretManagerService/",
                $name
            ),
        }
    };
}

/// All unary methods exposed by the service, including the IAM methods.
pub const METHODS: &[Method] = &[
    method!("ListSecrets"),
    method!("CreateSecret"),
    method!("AddSecretVersion"),
    method!("GetSecret"),
    method!("UpdateSecret"),
    method!("DeleteSecret"),
    method!("ListSecretVersions"),
    method!("GetSecretVersion"),
    method!("AccessSecretVersion"),
    method!("DisableSecretVersion"),
    method!("EnableSecretVersion"),
    method!("DestroySecretVersion"),
    method!("SetIamPolicy"),
    method!("GetIamPolicy"),
    method!("TestIamPermissions"),
];

/// Find a method by its short name.
pub fn find(name: &str) -> Option<&'static Method> {
    METHODS.iter().find(|m| m.name == name)
}
