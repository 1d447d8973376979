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

//! Error types for transport construction and RPC invocation.

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The result type used by RPC invocations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for RPC invocations and stub lookups.
///
/// Applications rarely need to create instances of this type. The exceptions
/// may include tests mocking the behavior of a transport.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// The request could not be authenticated.
    pub fn authentication<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Authentication,
            source: Some(source.into()),
        }
    }

    /// If true, the request could not be authenticated.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// The service returned a [Status][tonic::Status].
    pub fn service(status: tonic::Status) -> Self {
        Self {
            kind: ErrorKind::Service(Box::new(status)),
            source: None,
        }
    }

    /// The [Status][tonic::Status] returned by the service, if any.
    pub fn status(&self) -> Option<&tonic::Status> {
        match &self.kind {
            ErrorKind::Service(status) => Some(status.as_ref()),
            _ => None,
        }
    }

    /// A problem in the transport layer, such as a broken connection.
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Transport,
            source: Some(source.into()),
        }
    }

    /// If true, the problem was in the transport layer.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport)
    }

    /// The requested method name is not part of the service definition.
    pub fn unknown_method<T: Into<String>>(name: T) -> Self {
        Self {
            kind: ErrorKind::UnknownMethod(name.into()),
            source: None,
        }
    }

    /// If true, the requested method name is not part of the service
    /// definition.
    pub fn is_unknown_method(&self) -> bool {
        matches!(self.kind, ErrorKind::UnknownMethod(_))
    }

    /// A cached stub for this method exists, but with different request or
    /// response types.
    pub fn mismatched_stub<T: Into<String>>(name: T) -> Self {
        Self {
            kind: ErrorKind::MismatchedStub(name.into()),
            source: None,
        }
    }

    /// If true, a cached stub for this method exists with different request
    /// or response types.
    pub fn is_mismatched_stub(&self) -> bool {
        matches!(self.kind, ErrorKind::MismatchedStub(_))
    }

    /// A catch-all for problems without a more specific category.
    pub fn other<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Other,
            source: Some(source.into()),
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Authentication,
    Service(Box<tonic::Status>),
    Transport,
    UnknownMethod(String),
    MismatchedStub(String),
    Other,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ErrorKind::Authentication => {
                write!(f, "cannot create the authentication headers")
            }
            ErrorKind::Service(status) => {
                write!(f, "the service reports an error: {status}")
            }
            ErrorKind::Transport => write!(f, "the transport reports an error"),
            ErrorKind::UnknownMethod(name) => {
                write!(f, "unknown method name {name}")
            }
            ErrorKind::MismatchedStub(name) => write!(
                f,
                "the cached stub for {name} has different request or response types"
            ),
            ErrorKind::Other => write!(f, "the transport client reports an error"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as _)
    }
}

/// The result type for transport construction.
pub type BuildResult<T> = std::result::Result<T, BuilderError>;

/// Indicates a problem while constructing a transport.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct BuilderError(BuilderErrorKind);

impl BuilderError {
    /// If true, the mutually exclusive credentials options were both set.
    pub fn is_duplicate_credentials(&self) -> bool {
        matches!(&self.0, BuilderErrorKind::DuplicateCredentials)
    }

    /// If true, the transport could not initialize the credentials.
    pub fn is_credentials(&self) -> bool {
        matches!(&self.0, BuilderErrorKind::Credentials(_))
    }

    /// If true, the transport could not initialize the channel.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, BuilderErrorKind::Transport(_))
    }

    pub(crate) fn duplicate_credentials() -> Self {
        Self(BuilderErrorKind::DuplicateCredentials)
    }

    pub(crate) fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(BuilderErrorKind::Credentials(source.into()))
    }

    pub(crate) fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(BuilderErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum BuilderErrorKind {
    #[error("credentials and a credentials file are mutually exclusive")]
    DuplicateCredentials,
    #[error("could not create the credentials")]
    Credentials(#[source] BoxError),
    #[error("could not initialize the transport channel")]
    Transport(#[source] BoxError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service() {
        let error = Error::service(tonic::Status::not_found("missing secret"));
        assert!(error.status().is_some(), "{error:?}");
        let got = format!("{error}");
        assert!(got.contains("missing secret"), "{got}");
    }

    #[test]
    fn unknown_method() {
        let error = Error::unknown_method("FrobnicateSecret");
        assert!(error.is_unknown_method(), "{error:?}");
        assert!(error.status().is_none(), "{error:?}");
        let got = format!("{error}");
        assert!(got.contains("FrobnicateSecret"), "{got}");
    }

    #[test]
    fn mismatched_stub() {
        let error = Error::mismatched_stub("GetSecret");
        assert!(error.is_mismatched_stub(), "{error:?}");
        let got = format!("{error}");
        assert!(got.contains("GetSecret"), "{got}");
    }

    #[test]
    fn authentication_preserves_source() {
        use std::error::Error as _;
        let error = Error::authentication("simulated auth problem");
        assert!(error.is_authentication(), "{error:?}");
        let source = error.source().map(|e| e.to_string());
        assert_eq!(source.as_deref(), Some("simulated auth problem"));
    }

    #[test]
    fn builder_predicates() {
        let error = BuilderError::duplicate_credentials();
        assert!(error.is_duplicate_credentials(), "{error:?}");

        let error = BuilderError::cred("simulated");
        assert!(error.is_credentials(), "{error:?}");

        let error = BuilderError::transport("simulated");
        assert!(error.is_transport(), "{error:?}");
    }
}
