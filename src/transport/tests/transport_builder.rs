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

use google_cloud_secretmanager_grpc::SecretManagerTransport;

fn anonymous() -> auth::credentials::Credentials {
    auth::credentials::anonymous::Builder::new().build()
}

#[tokio::test]
async fn default_host_gets_default_port() -> anyhow::Result<()> {
    let transport = SecretManagerTransport::builder()
        .with_credentials(anonymous())
        .build()
        .await?;
    assert_eq!(transport.host(), "secretmanager.googleapis.com:443");
    Ok(())
}

#[tokio::test]
async fn explicit_port_is_preserved() -> anyhow::Result<()> {
    let transport = SecretManagerTransport::builder()
        .with_host("example.com:8443")
        .with_credentials(anonymous())
        .build()
        .await?;
    assert_eq!(transport.host(), "example.com:8443");
    Ok(())
}

#[tokio::test]
async fn duplicate_credentials_fail() {
    let err = SecretManagerTransport::builder()
        .with_credentials(anonymous())
        .with_credentials_file("/this/file/does/not/exist")
        .build()
        .await
        .unwrap_err();
    assert!(err.is_duplicate_credentials(), "{err:?}");
}

#[tokio::test]
async fn provided_channel_skips_credential_resolution() -> anyhow::Result<()> {
    let channel = tonic::transport::Endpoint::from_static("https://localhost:1").connect_lazy();
    // The conflicting credential options are ignored on this path.
    let transport = SecretManagerTransport::builder()
        .with_channel(channel)
        .with_credentials(anonymous())
        .with_credentials_file("/this/file/does/not/exist")
        .build()
        .await?;
    let stub = transport.get_secret()?;
    assert_eq!(
        stub.method().path,
        "/google.cloud.secretmanager.v1.SecretManagerService/GetSecret"
    );
    Ok(())
}
