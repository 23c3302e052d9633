/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Percent-encoding for query strings and form bodies.
//!
//! Keys and values are encoded with the unreserved character set
//! (`A-Z a-z 0-9 - _ . ~`), which is the encoding both the Query protocol
//! and SigV4 canonicalization require.

/// Encode `value` for use in a query string or `x-www-form-urlencoded` body.
pub fn fmt_string<T: AsRef<str>>(value: T) -> String {
    urlencoding::encode(value.as_ref())
}

#[cfg(test)]
mod test {
    use super::fmt_string;

    #[test]
    fn unreserved_characters_pass_through() {
        assert_eq!(fmt_string("abcABC012-_.~"), "abcABC012-_.~");
    }

    #[test]
    fn reserved_characters_are_encoded() {
        assert_eq!(fmt_string("a b/c=d&e"), "a%20b%2Fc%3Dd%26e");
        assert_eq!(fmt_string("val%ue"), "val%25ue");
    }
}
