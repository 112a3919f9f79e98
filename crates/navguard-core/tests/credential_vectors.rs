//! Credential validator vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use navguard_core::credential::{decode_claims, is_valid};

use vector_loader::load;

const FILES: [&str; 7] = [
    "cred_live.json",
    "cred_exact_expiry.json",
    "cred_expired.json",
    "cred_two_segments.json",
    "cred_bad_base64.json",
    "cred_missing_exp.json",
    "cred_standard_alphabet.json",
];

#[test]
fn credential_vectors() {
    for f in FILES {
        let v = load(f);
        let res = decode_claims(&v.token);

        if let Some(code) = &v.expect_error {
            let e = res.expect_err("expected decode error");
            assert_eq!(e.code(), code.as_str(), "vector={}", v.description);
        } else {
            res.expect("expected claims");
        }

        assert_eq!(
            is_valid(Some(v.token.as_str()), v.now()),
            v.expect_valid,
            "vector={}",
            v.description
        );
    }
}

#[test]
fn decode_is_deterministic() {
    for f in FILES {
        let v = load(f);
        assert_eq!(is_valid(Some(v.token.as_str()), v.now()), is_valid(Some(v.token.as_str()), v.now()));
    }
}
