use versia_canonical::{build, encode_path, BodyDigest, SignedAt, SigningContext, ValidationError};

#[test]
fn empty_body_digest_matches_known_value() {
    assert_eq!(
        BodyDigest::compute(b"").as_str(),
        "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU="
    );
}

#[test]
fn json_body_digest_matches_known_value() {
    let digest = BodyDigest::compute(br#"{"key":"value"}"#);
    assert_eq!(digest.as_str(), "5Dq88zdSRIOcAS+WM/lYYtIyqVsA1bxzSLMJi5/tfzI=");

    let raw = hex::decode("e43abcf3375244839c012f9633f95862d232a95b00d5bc7348b3098b9fed7f32")
        .unwrap();
    let hash: [u8; 32] = raw.try_into().unwrap();
    assert_eq!(BodyDigest::from_hash(hash), digest);
}

#[test]
fn digest_serializes_as_plain_string() {
    let digest = BodyDigest::compute(b"");
    assert_eq!(
        serde_json::to_string(&digest).unwrap(),
        r#""47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=""#
    );
}

#[test]
fn digest_parse_rejects_wrong_shape() {
    assert!(BodyDigest::parse("47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=").is_ok());
    assert!(matches!(
        BodyDigest::parse("47DEQpj8HBSa-_TImW-5JCeuQeRkm5NMpJWZG3hSuFU"),
        Err(ValidationError::PatternMismatch { field: "body_digest", .. })
    ));
    assert!(BodyDigest::parse("Zm9vYmFy").is_err());
}

#[test]
fn canonical_string_matches_template() {
    let canonical = build(
        "GET",
        "/",
        1549312452,
        "5Dq88zdSRIOcAS+WM/lYYtIyqVsA1bxzSLMJi5/tfzI=",
    );
    assert_eq!(
        canonical.as_str(),
        "get / 1549312452 5Dq88zdSRIOcAS+WM/lYYtIyqVsA1bxzSLMJi5/tfzI="
    );
    assert!(!canonical.as_str().contains('\n'));
}

#[test]
fn canonical_string_encodes_path() {
    let canonical = build("POST", "/users/a b/inbox", 10, "d");
    assert_eq!(canonical.as_str(), "post /users/a%20b/inbox 10 d");
    assert_eq!(encode_path("/users/a b/inbox"), "/users/a%20b/inbox");
}

#[test]
fn canonical_string_is_deterministic() {
    let ctx = SigningContext::for_body(
        "PATCH",
        "/notes/ü",
        SignedAt::from_secs(1_700_000_000),
        b"{}",
    );
    let first = ctx.canonical_string();
    let second = ctx.clone().canonical_string();
    assert_eq!(first.as_bytes(), second.as_bytes());
    assert_eq!(
        first,
        build(
            "patch",
            "/notes/ü",
            1_700_000_000,
            BodyDigest::compute(b"{}").as_str()
        )
    );
}

#[test]
fn signing_context_keeps_raw_inputs() {
    let ctx = SigningContext::for_body("Post", "/inbox", SignedAt::from_secs(5), b"body");
    assert_eq!(ctx.method(), "Post");
    assert_eq!(ctx.path(), "/inbox");
    assert_eq!(ctx.signed_at().as_secs(), 5);
    assert_eq!(ctx.body_digest(), &BodyDigest::compute(b"body"));
    assert!(ctx.canonical_string().as_str().starts_with("post /inbox 5 "));
}

#[test]
fn signed_at_parses_decimal_seconds() {
    assert_eq!(SignedAt::parse("1549312452").unwrap().as_secs(), 1549312452);
    assert_eq!(SignedAt::from_secs(42).to_string(), "42");
}

#[test]
fn signed_at_keeps_fractional_text() {
    let at = SignedAt::parse("1718131234.567").unwrap();
    assert_eq!(at.as_secs(), 1718131234);
    assert_eq!(at.as_str(), "1718131234.567");
    assert_eq!(at.to_string(), "1718131234.567");

    let trailing_zero = SignedAt::parse("1718131234.50").unwrap();
    assert_eq!(trailing_zero.to_string(), "1718131234.50");
    assert_ne!(trailing_zero, SignedAt::parse("1718131234.5").unwrap());
}

#[test]
fn signed_at_negative_values_round_trip() {
    let at = SignedAt::from_secs(-5);
    assert_eq!(at.to_string(), "-5");
    assert_eq!(SignedAt::parse(&at.to_string()).unwrap(), at);

    let min = SignedAt::from_secs(i64::MIN);
    assert_eq!(SignedAt::parse(min.as_str()).unwrap(), min);
    assert_eq!(SignedAt::parse("-0.5").unwrap().as_secs(), 0);
}

#[test]
fn signed_at_rejects_non_decimal_values() {
    for value in ["", "-", "+5", "12.", ".5", "1e9", " 12", "12 ", "abc", "--5"] {
        assert!(
            matches!(
                SignedAt::parse(value),
                Err(ValidationError::PatternMismatch { field: "signed_at", .. })
            ),
            "{value:?} should be rejected"
        );
    }
    assert!(matches!(
        SignedAt::parse("99999999999999999999"),
        Err(ValidationError::OutOfBounds { .. })
    ));
}

#[test]
fn canonical_string_uses_timestamp_text_verbatim() {
    let at = SignedAt::parse("1718131234.567").unwrap();
    let digest = BodyDigest::compute(br#"{"key":"value"}"#);
    let ctx = SigningContext::new("POST", "/inbox", at.clone(), digest.clone());

    let expected = "post /inbox 1718131234.567 5Dq88zdSRIOcAS+WM/lYYtIyqVsA1bxzSLMJi5/tfzI=";
    assert_eq!(ctx.canonical_string().as_str(), expected);
    assert_eq!(build("POST", "/inbox", &at, digest.as_str()).as_str(), expected);
}

#[test]
fn signed_at_serializes_as_header_text() {
    let at = SignedAt::parse("1718131234.567").unwrap();
    assert_eq!(serde_json::to_string(&at).unwrap(), r#""1718131234.567""#);
    let back: SignedAt = serde_json::from_str(r#""1718131234.567""#).unwrap();
    assert_eq!(back, at);
    assert!(serde_json::from_str::<SignedAt>(r#""soon""#).is_err());
}
