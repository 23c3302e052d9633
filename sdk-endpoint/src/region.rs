/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// The region to send requests to.
///
/// A region must be configured on every client unless an endpoint override is
/// installed. See <http://docs.aws.amazon.com/general/latest/gr/rande.html>
/// for the catalog of regions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region(
    // Regions are almost always known statically. However, as an escape hatch for when they
    // are not, allow for an owned region
    Cow<'static, str>,
);

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Region {
    /// Creates a region from a dynamically loaded string.
    pub fn new(region: impl Into<Cow<'static, str>>) -> Self {
        Self(region.into())
    }

    /// Creates a region from a static string.
    pub const fn from_static(region: &'static str) -> Self {
        Self(Cow::Borrowed(region))
    }
}

/// The region to use when signing requests.
///
/// Usually identical to [`Region`], but cross-region presigned URLs are
/// signed for the source region rather than the client's own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningRegion(Cow<'static, str>);

impl AsRef<str> for SigningRegion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Region> for SigningRegion {
    fn from(inp: Region) -> Self {
        SigningRegion(inp.0)
    }
}

impl SigningRegion {
    /// Creates a signing region from a static string.
    pub const fn from_static(region: &'static str) -> Self {
        SigningRegion(Cow::Borrowed(region))
    }
}

#[cfg(test)]
mod test {
    use super::{Region, SigningRegion};

    #[test]
    fn signing_region_inherits_the_region_name() {
        let signing = SigningRegion::from(Region::new("us-west-2"));
        assert_eq!(signing.as_ref(), "us-west-2");
        assert_eq!(signing, SigningRegion::from_static("us-west-2"));
    }
}
