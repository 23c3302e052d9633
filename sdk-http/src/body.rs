/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::{HeaderMap, HeaderValue};
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::BoxError;

/// SdkBody type
///
/// This is the body used for dispatching all HTTP requests. Every operation
/// in this workspace builds its body fully in memory before signing, so a
/// single-shot body is all that is needed.
#[derive(Debug)]
pub enum SdkBody {
    /// A body that yields its bytes exactly once.
    Once(Option<Bytes>),
}

impl SdkBody {
    /// An empty body.
    pub fn empty() -> Self {
        SdkBody::Once(Some(Bytes::new()))
    }

    /// The bytes of this body, if it has not yet been polled.
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            SdkBody::Once(Some(bytes)) => Some(bytes),
            SdkBody::Once(None) => None,
        }
    }

    /// Clone this body if it has not yet been polled. Signing and request
    /// capture both rely on this.
    pub fn try_clone(&self) -> Option<SdkBody> {
        match self {
            SdkBody::Once(Some(bytes)) => Some(SdkBody::Once(Some(bytes.clone()))),
            SdkBody::Once(None) => None,
        }
    }

    fn poll_inner(&mut self) -> Poll<Option<Result<Bytes, BoxError>>> {
        match self {
            SdkBody::Once(ref mut opt) => match opt.take() {
                Some(bytes) if bytes.is_empty() => Poll::Ready(None),
                Some(bytes) => Poll::Ready(Some(Ok(bytes))),
                None => Poll::Ready(None),
            },
        }
    }
}

impl From<&str> for SdkBody {
    fn from(s: &str) -> Self {
        SdkBody::Once(Some(Bytes::copy_from_slice(s.as_bytes())))
    }
}

impl From<String> for SdkBody {
    fn from(s: String) -> Self {
        SdkBody::Once(Some(Bytes::from(s)))
    }
}

impl From<Bytes> for SdkBody {
    fn from(bytes: Bytes) -> Self {
        SdkBody::Once(Some(bytes))
    }
}

impl From<Vec<u8>> for SdkBody {
    fn from(data: Vec<u8>) -> Self {
        Self::from(Bytes::from(data))
    }
}

impl http_body::Body for SdkBody {
    type Data = Bytes;
    type Error = BoxError;

    fn poll_data(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Self::Data, Self::Error>>> {
        self.poll_inner()
    }

    fn poll_trailers(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Result<Option<HeaderMap<HeaderValue>>, Self::Error>> {
        Poll::Ready(Ok(None))
    }

    fn size_hint(&self) -> http_body::SizeHint {
        match self.bytes() {
            Some(bytes) => http_body::SizeHint::with_exact(bytes.len() as u64),
            None => http_body::SizeHint::default(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::SdkBody;

    #[test]
    fn bytes_are_visible_before_polling() {
        let body = SdkBody::from("hello world");
        assert_eq!(body.bytes(), Some(b"hello world".as_ref()));
    }

    #[test]
    fn try_clone_preserves_contents() {
        let body = SdkBody::from("payload");
        let cloned = body.try_clone().expect("unread body is cloneable");
        assert_eq!(cloned.bytes(), body.bytes());
    }
}
