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
use std::sync::Arc;
use types::model::{DeleteSecretRequest, GetSecretRequest, Secret, SecretVersion};
use types::protobuf::Empty;

async fn test_transport() -> anyhow::Result<SecretManagerTransport> {
    let transport = SecretManagerTransport::builder()
        .with_host("test.local")
        .with_credentials(auth::credentials::anonymous::Builder::new().build())
        .build()
        .await?;
    Ok(transport)
}

#[tokio::test]
async fn stubs_are_memoized() -> anyhow::Result<()> {
    let transport = test_transport().await?;
    let first = transport.get_secret()?;
    let second = transport.get_secret()?;
    assert!(Arc::ptr_eq(&first, &second));
    Ok(())
}

#[tokio::test]
async fn typed_accessor_and_lookup_share_the_stub() -> anyhow::Result<()> {
    let transport = test_transport().await?;
    let typed = transport.get_secret()?;
    let looked_up = transport.stub::<GetSecretRequest, Secret>("GetSecret")?;
    assert!(Arc::ptr_eq(&typed, &looked_up));
    Ok(())
}

#[tokio::test]
async fn different_methods_get_different_stubs() -> anyhow::Result<()> {
    let transport = test_transport().await?;
    let disable = transport.disable_secret_version()?;
    let enable = transport.enable_secret_version()?;
    assert_ne!(disable.method().path, enable.method().path);
    Ok(())
}

#[tokio::test]
async fn unknown_method_fails() -> anyhow::Result<()> {
    let transport = test_transport().await?;
    let stub = transport.stub::<GetSecretRequest, Secret>("FrobnicateSecret");
    let err = stub.unwrap_err();
    assert!(err.is_unknown_method(), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn mismatched_types_fail() -> anyhow::Result<()> {
    let transport = test_transport().await?;
    let _ = transport.get_secret()?;
    let stub = transport.stub::<GetSecretRequest, SecretVersion>("GetSecret");
    let err = stub.unwrap_err();
    assert!(err.is_mismatched_stub(), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn delete_secret_returns_empty() -> anyhow::Result<()> {
    let transport = test_transport().await?;
    let stub: Arc<_> = transport.delete_secret()?;
    let same = transport.stub::<DeleteSecretRequest, Empty>("DeleteSecret")?;
    assert!(Arc::ptr_eq(&stub, &same));
    assert_eq!(
        stub.method().path,
        "/google.cloud.secretmanager.v1.SecretManagerService/DeleteSecret"
    );
    Ok(())
}

#[tokio::test]
async fn call_on_unreachable_host_reports_an_error() -> anyhow::Result<()> {
    // Nothing listens on this port, the call must fail without panicking.
    let transport = SecretManagerTransport::builder()
        .with_host("localhost:1")
        .with_credentials(auth::credentials::anonymous::Builder::new().build())
        .build()
        .await?;
    let stub = transport.get_secret()?;
    let err = stub
        .call(GetSecretRequest {
            name: "projects/p/secrets/s".into(),
        })
        .await
        .unwrap_err();
    assert!(err.status().is_some() || err.is_transport(), "{err:?}");
    Ok(())
}
