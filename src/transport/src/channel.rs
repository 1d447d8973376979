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

//! Channel construction for the Secret Manager transport.

use crate::error::{BuildResult, BuilderError};
use tonic::transport::{Channel, ClientTlsConfig, Endpoint, Identity};

/// The default service address.
pub const DEFAULT_HOST: &str = "secretmanager.googleapis.com";

/// Appends the default gRPC port when the host does not name one.
///
/// A host that already contains a port, such as `example.com:8443`, is
/// returned unchanged.
pub(crate) fn normalize_host(host: &str) -> String {
    if host.contains(':') {
        host.to_string()
    } else {
        format!("{host}:443")
    }
}

/// Creates a channel using the system root certificates.
pub(crate) fn create(authority: &str) -> BuildResult<Channel> {
    let tls = ClientTlsConfig::new().with_enabled_roots();
    create_with_tls(authority, tls)
}

/// Creates a channel that presents a client certificate for mutual TLS.
pub(crate) fn create_mtls(
    authority: &str,
    client_cert: &[u8],
    client_key: &[u8],
) -> BuildResult<Channel> {
    let tls = ClientTlsConfig::new()
        .with_enabled_roots()
        .identity(Identity::from_pem(client_cert, client_key));
    create_with_tls(authority, tls)
}

fn create_with_tls(authority: &str, tls: ClientTlsConfig) -> BuildResult<Channel> {
    let endpoint = Endpoint::from_shared(format!("https://{authority}"))
        .map_err(BuilderError::transport)?
        .tls_config(tls)
        .map_err(BuilderError::transport)?;
    // The channel connects on first use. Connecting eagerly would make
    // transport construction fail in environments without network access,
    // where the application may only want the stub surface.
    Ok(endpoint.connect_lazy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("example.com", "example.com:443")]
    #[test_case("example.com:8443", "example.com:8443")]
    #[test_case("secretmanager.googleapis.com", "secretmanager.googleapis.com:443")]
    #[test_case("localhost:1", "localhost:1")]
    fn normalize(input: &str, want: &str) {
        assert_eq!(normalize_host(input), want);
    }

    #[tokio::test]
    async fn create_does_not_connect() {
        // `localhost:1` is not listening, a lazy channel must still build.
        let channel = create("localhost:1");
        assert!(channel.is_ok(), "{channel:?}");
    }

    #[tokio::test]
    async fn create_rejects_bad_authority() {
        let channel = create("invalid authority");
        let err = channel.unwrap_err();
        assert!(err.is_transport(), "{err:?}");
    }
}
