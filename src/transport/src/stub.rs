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

//! Typed callables for the unary methods of the service.

use crate::error::{Error, Result};
use crate::methods::{Method, SERVICE};
use auth::credentials::{CacheableResource, Credentials};
use http::HeaderMap;
use std::marker::PhantomData;
use std::sync::LazyLock;

pub(crate) type InnerClient = tonic::client::Grpc<tonic::transport::Channel>;

static API_CLIENT_HEADER: LazyLock<String> = LazyLock::new(crate::api_header::value);

/// A typed callable for one unary method.
///
/// A stub pairs a method in the service definition with its request and
/// response message types. Stubs are created and memoized by
/// [SecretManagerTransport][crate::transport::SecretManagerTransport], they
/// cannot be created directly.
#[derive(Clone, Debug)]
pub struct Stub<Request, Response> {
    inner: InnerClient,
    credentials: Credentials,
    method: &'static Method,
    user_agent: Option<String>,
    _marker: PhantomData<fn(Request) -> Response>,
}

impl<Request, Response> Stub<Request, Response>
where
    Request: prost::Message + 'static,
    Response: prost::Message + Default + 'static,
{
    pub(crate) fn new(
        inner: InnerClient,
        credentials: Credentials,
        method: &'static Method,
        user_agent: Option<String>,
    ) -> Self {
        Self {
            inner,
            credentials,
            method,
            user_agent,
            _marker: PhantomData,
        }
    }

    /// The method this stub invokes.
    pub fn method(&self) -> &'static Method {
        self.method
    }

    /// Sends a request.
    pub async fn call(&self, request: Request) -> Result<Response> {
        let mut headers = HeaderMap::new();
        headers.append(
            http::header::HeaderName::from_static("x-goog-api-client"),
            http::header::HeaderValue::from_str(API_CLIENT_HEADER.as_str())
                .map_err(Error::other)?,
        );
        if let Some(user_agent) = &self.user_agent {
            headers.append(
                http::header::USER_AGENT,
                http::header::HeaderValue::from_str(user_agent).map_err(Error::other)?,
            );
        }
        let cached_auth_headers = self
            .credentials
            .headers(http::Extensions::new())
            .await
            .map_err(Error::authentication)?;
        let auth_headers = match cached_auth_headers {
            CacheableResource::New { data, .. } => data,
            CacheableResource::NotModified => {
                unreachable!("headers are not cached");
            }
        };
        for (key, value) in auth_headers.iter() {
            headers.append(key, value.clone());
        }

        let mut extensions = tonic::Extensions::new();
        extensions.insert(tonic::GrpcMethod::new(SERVICE, self.method.name));
        let metadata = tonic::metadata::MetadataMap::from_headers(headers);
        let request = tonic::Request::from_parts(metadata, extensions, request);

        let path = http::uri::PathAndQuery::from_static(self.method.path);
        let codec = tonic_prost::ProstCodec::default();
        let mut inner = self.inner.clone();
        inner.ready().await.map_err(Error::transport)?;
        let response: tonic::Response<Response> = inner
            .unary(request, path, codec)
            .await
            .map_err(Error::service)?;
        Ok(response.into_inner())
    }
}
