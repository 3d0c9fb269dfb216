use http::{HeaderMap, HeaderValue, Method, Request};
use std::sync::Arc;
use versia_signatures::{
    CryptoProvider, Ed25519Provider, Keypair, PrivateKey, PublicKey, SignatureConstructor,
    SignatureError, SignatureValidator, SignedAt, UnsupportedEnvironment, VERSIA_SIGNATURE,
    VERSIA_SIGNED_AT, VERSIA_SIGNED_BY,
};

const ACTOR: &str = "https://bob.org/users/6a18f2c3-120e-4949-bda4-2aa4c8264d51";
const BODY: &str = r#"{"key":"value"}"#;

fn make_pair() -> (SignatureConstructor, SignatureValidator) {
    let keys = Keypair::generate();
    let signer = SignatureConstructor::new(keys.private().clone(), ACTOR).unwrap();
    let validator = SignatureValidator::new(keys.public().clone()).unwrap();
    (signer, validator)
}

fn make_request(headers: &HeaderMap, body: &str) -> Request<Vec<u8>> {
    let mut builder = Request::builder()
        .method(Method::GET)
        .uri("https://example.com");
    for (name, value) in headers {
        builder = builder.header(name, value);
    }
    builder.body(body.as_bytes().to_vec()).unwrap()
}

fn signed_headers(signer: &SignatureConstructor) -> HeaderMap {
    signer
        .sign_components(&Method::GET, "/", Some(BODY.as_bytes()), None, None)
        .unwrap()
        .headers
}

#[test]
fn signed_headers_contain_signature_and_timestamp() {
    let (signer, _) = make_pair();
    let headers = signed_headers(&signer);
    assert!(headers.contains_key(&VERSIA_SIGNATURE));
    assert!(headers.contains_key(&VERSIA_SIGNED_AT));
    assert_eq!(headers.get(&VERSIA_SIGNED_BY).unwrap(), ACTOR);
}

#[test]
fn valid_signature_verifies() {
    let (signer, validator) = make_pair();
    let request = make_request(&signed_headers(&signer), BODY);
    assert!(validator.validate_request(&request).unwrap());
}

#[test]
fn different_body_does_not_verify() {
    let (signer, validator) = make_pair();
    let request = make_request(&signed_headers(&signer), "different");
    assert!(!validator.validate_request(&request).unwrap());
}

#[test]
fn different_path_or_method_does_not_verify() {
    let (signer, validator) = make_pair();
    let signed = signer
        .sign_components(&Method::POST, "/inbox", Some(BODY.as_bytes()), None, None)
        .unwrap();
    let signature = &signed.envelope.signature;
    let at = &signed.envelope.signed_at;

    assert!(validator
        .validate_components(signature, at.clone(), &Method::POST, "/inbox", BODY.as_bytes())
        .unwrap());
    assert!(!validator
        .validate_components(signature, at.clone(), &Method::POST, "/outbox", BODY.as_bytes())
        .unwrap());
    assert!(!validator
        .validate_components(signature, at.clone(), &Method::PUT, "/inbox", BODY.as_bytes())
        .unwrap());
    assert!(!validator
        .validate_components(
            signature,
            SignedAt::from_secs(at.as_secs() + 1),
            &Method::POST,
            "/inbox",
            BODY.as_bytes()
        )
        .unwrap());
}

#[test]
fn wrong_key_does_not_verify() {
    let (signer, _) = make_pair();
    let other = SignatureValidator::new(Keypair::generate().public().clone()).unwrap();
    let request = make_request(&signed_headers(&signer), BODY);
    assert!(!other.validate_request(&request).unwrap());
}

#[test]
fn garbage_base64_signature_does_not_verify() {
    let (signer, validator) = make_pair();
    let mut headers = signed_headers(&signer);
    headers.insert(VERSIA_SIGNATURE, HeaderValue::from_static("invalid"));
    let request = make_request(&headers, BODY);
    assert!(!validator.validate_request(&request).unwrap());
}

#[test]
fn non_base64_signature_is_an_error() {
    let (signer, validator) = make_pair();
    let mut headers = signed_headers(&signer);
    headers.insert(VERSIA_SIGNATURE, HeaderValue::from_static("not-base64!!"));
    let request = make_request(&headers, BODY);
    assert!(matches!(
        validator.validate_request(&request),
        Err(SignatureError::MalformedSignature(_))
    ));
}

#[test]
fn missing_timestamp_header_is_named() {
    let (signer, validator) = make_pair();
    let mut headers = signed_headers(&signer);
    headers.remove(&VERSIA_SIGNED_AT);
    let request = make_request(&headers, BODY);

    let err = validator.validate_request(&request).unwrap_err();
    match &err {
        SignatureError::MissingHeaders { headers } => {
            assert_eq!(headers, &vec!["Versia-Signed-At"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("Versia-Signed-At"));
}

#[test]
fn missing_both_headers_are_named() {
    let (_, validator) = make_pair();
    let request = make_request(&HeaderMap::new(), BODY);
    let err = validator.validate_request(&request).unwrap_err();
    assert_eq!(
        err.to_string(),
        "headers are missing in request: Versia-Signature, Versia-Signed-At"
    );
}

#[test]
fn empty_signature_headers_count_as_missing() {
    let (signer, validator) = make_pair();
    let mut headers = signed_headers(&signer);
    headers.insert(VERSIA_SIGNATURE, HeaderValue::from_static(""));
    let request = make_request(&headers, BODY);
    match validator.validate_request(&request).unwrap_err() {
        SignatureError::MissingHeaders { headers } => {
            assert_eq!(headers, vec!["Versia-Signature"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    headers.insert(VERSIA_SIGNED_AT, HeaderValue::from_static(""));
    let request = make_request(&headers, BODY);
    match validator.validate_request(&request).unwrap_err() {
        SignatureError::MissingHeaders { headers } => {
            assert_eq!(headers, vec!["Versia-Signature", "Versia-Signed-At"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn negative_timestamp_round_trips() {
    let (signer, validator) = make_pair();
    for secs in [-5, 0, i64::MIN] {
        let signed = signer
            .sign_components(
                &Method::GET,
                "/",
                Some(BODY.as_bytes()),
                None,
                Some(SignedAt::from_secs(secs)),
            )
            .unwrap();
        assert_eq!(
            signed.headers.get(&VERSIA_SIGNED_AT).unwrap(),
            secs.to_string().as_str()
        );
        let request = make_request(&signed.headers, BODY);
        assert!(validator.validate_request(&request).unwrap(), "{secs}");
    }
}

#[test]
fn malformed_timestamp_is_an_error() {
    let (signer, validator) = make_pair();
    let mut headers = signed_headers(&signer);
    headers.insert(VERSIA_SIGNED_AT, HeaderValue::from_static("yesterday"));
    let request = make_request(&headers, BODY);
    assert!(matches!(
        validator.validate_request(&request),
        Err(SignatureError::MalformedTimestamp(_))
    ));
}

#[test]
fn fixed_timestamp_gives_deterministic_output() {
    let (signer, _) = make_pair();
    let at = SignedAt::from_secs(1549312452);
    let first = signer
        .sign_components(&Method::GET, "/", Some(BODY.as_bytes()), None, Some(at.clone()))
        .unwrap();
    let second = signer
        .sign_components(&Method::GET, "/", Some(BODY.as_bytes()), None, Some(at))
        .unwrap();

    assert_eq!(
        first.canonical_string.as_str(),
        "get / 1549312452 5Dq88zdSRIOcAS+WM/lYYtIyqVsA1bxzSLMJi5/tfzI="
    );
    assert_eq!(first.canonical_string, second.canonical_string);
    // Ed25519 signatures are deterministic.
    assert_eq!(first.envelope.signature, second.envelope.signature);
    assert_eq!(first.headers.get(&VERSIA_SIGNED_AT).unwrap(), "1549312452");
}

#[test]
fn absent_body_signs_empty_digest() {
    let (signer, validator) = make_pair();
    let signed = signer
        .sign_components(&Method::GET, "/users/1", None, None, None)
        .unwrap();
    assert!(signed
        .canonical_string
        .as_str()
        .ends_with(" 47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU="));
    assert!(validator
        .validate_components(
            &signed.envelope.signature,
            signed.envelope.signed_at,
            &Method::GET,
            "/users/1",
            b""
        )
        .unwrap());
}

#[test]
fn existing_headers_are_merged_without_mutation() {
    let (signer, _) = make_pair();
    let mut existing = HeaderMap::new();
    existing.insert("content-type", HeaderValue::from_static("application/json"));
    existing.insert(VERSIA_SIGNATURE, HeaderValue::from_static("stale"));

    let signed = signer
        .sign_components(&Method::POST, "/inbox", Some(b"{}"), Some(&existing), None)
        .unwrap();

    assert_eq!(existing.len(), 2);
    assert_eq!(existing.get(&VERSIA_SIGNATURE).unwrap(), "stale");
    assert_eq!(signed.headers.get("content-type").unwrap(), "application/json");
    assert_ne!(signed.headers.get(&VERSIA_SIGNATURE).unwrap(), "stale");
    assert_eq!(signed.headers.len(), 4);
}

#[test]
fn sign_request_returns_signed_copy() {
    let (signer, validator) = make_pair();
    let original = Request::builder()
        .method(Method::POST)
        .uri("https://example.com/users/1/inbox")
        .header("content-type", "application/json")
        .body(BODY.as_bytes().to_vec())
        .unwrap();

    let signed = signer.sign_request(&original).unwrap();

    assert!(!original.headers().contains_key(&VERSIA_SIGNATURE));
    assert_eq!(original.body(), BODY.as_bytes());
    assert_eq!(signed.request.body(), original.body());
    assert_eq!(signed.request.method(), &Method::POST);
    assert_eq!(signed.request.uri(), original.uri());
    assert_eq!(
        signed.request.headers().get("content-type").unwrap(),
        "application/json"
    );
    assert!(signed
        .canonical_string
        .as_str()
        .starts_with("post /users/1/inbox "));
    assert!(validator.validate_request(&signed.request).unwrap());
}

#[test]
fn sign_request_reuses_existing_timestamp() {
    let (signer, validator) = make_pair();
    let original = Request::builder()
        .method(Method::GET)
        .uri("https://example.com/notes/1")
        .header(VERSIA_SIGNED_AT, "1700000000")
        .body(Vec::new())
        .unwrap();

    let signed = signer.sign_request(&original).unwrap();
    assert_eq!(
        signed.request.headers().get(&VERSIA_SIGNED_AT).unwrap(),
        "1700000000"
    );
    assert!(signed
        .canonical_string
        .as_str()
        .starts_with("get /notes/1 1700000000 "));
    assert!(validator.validate_request(&signed.request).unwrap());
}

#[test]
fn base64_constructors_round_trip() {
    let keys = Keypair::generate();
    let signer = SignatureConstructor::from_base64_key(
        &keys.private().to_pkcs8_base64().unwrap(),
        ACTOR,
    )
    .unwrap();
    let validator =
        SignatureValidator::from_base64_key(&keys.public().to_spki_base64().unwrap()).unwrap();

    assert_eq!(signer.actor(), ACTOR);
    assert_eq!(&signer.public_key(), validator.public_key());
    let request = make_request(&signed_headers(&signer), BODY);
    assert!(validator.validate_request(&request).unwrap());
}

#[test]
fn bad_key_text_is_a_key_import_error() {
    assert!(matches!(
        SignatureConstructor::from_base64_key("AAAA", ACTOR),
        Err(SignatureError::KeyImport(_))
    ));
    assert!(matches!(
        SignatureValidator::from_base64_key("AAAA"),
        Err(SignatureError::KeyImport(_))
    ));
}

#[test]
fn actor_must_be_a_valid_header_value() {
    let keys = Keypair::generate();
    assert!(matches!(
        SignatureConstructor::new(keys.private().clone(), "https://example.com/\nuser"),
        Err(SignatureError::InvalidHeaderValue { name: "Versia-Signed-By", .. })
    ));
}

#[derive(Debug)]
struct MissingCrypto;

impl CryptoProvider for MissingCrypto {
    fn name(&self) -> &str {
        "missing"
    }

    fn ensure_supported(&self) -> Result<(), UnsupportedEnvironment> {
        Err(UnsupportedEnvironment {
            provider: self.name().to_string(),
            reason: "no Ed25519 support".to_string(),
        })
    }

    fn sha256(&self, _data: &[u8]) -> [u8; 32] {
        unreachable!("unsupported provider must not be used")
    }

    fn sign(&self, _key: &PrivateKey, _message: &[u8]) -> [u8; 64] {
        unreachable!("unsupported provider must not be used")
    }

    fn verify(&self, _key: &PublicKey, _message: &[u8], _signature: &[u8; 64]) -> bool {
        unreachable!("unsupported provider must not be used")
    }
}

#[test]
fn unsupported_provider_fails_at_construction() {
    let keys = Keypair::generate();
    let provider: Arc<dyn CryptoProvider> = Arc::new(MissingCrypto);

    assert!(matches!(
        SignatureConstructor::with_provider(keys.private().clone(), ACTOR, provider.clone()),
        Err(SignatureError::UnsupportedEnvironment(_))
    ));
    assert!(matches!(
        SignatureValidator::with_provider(keys.public().clone(), provider.clone()),
        Err(SignatureError::UnsupportedEnvironment(_))
    ));
    // Checked before the key text is even looked at.
    assert!(matches!(
        SignatureValidator::from_base64_key_with_provider("AAAA", provider),
        Err(SignatureError::UnsupportedEnvironment(_))
    ));
}

#[test]
fn custom_provider_is_used_for_both_sides() {
    let keys = Keypair::generate();
    let provider: Arc<dyn CryptoProvider> = Arc::new(Ed25519Provider);
    let signer =
        SignatureConstructor::with_provider(keys.private().clone(), ACTOR, provider.clone())
            .unwrap();
    let validator = SignatureValidator::with_provider(keys.public().clone(), provider).unwrap();
    let request = make_request(&signed_headers(&signer), BODY);
    assert!(validator.validate_request(&request).unwrap());
}

#[test]
fn validator_is_shared_across_threads() {
    let (signer, validator) = make_pair();
    let good = make_request(&signed_headers(&signer), BODY);
    let tampered = make_request(&signed_headers(&signer), "different");

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let validator = &validator;
                let request = if i % 2 == 0 { &good } else { &tampered };
                scope.spawn(move || (i, validator.validate_request(request).unwrap()))
            })
            .collect();
        for handle in handles {
            let (i, valid) = handle.join().unwrap();
            assert_eq!(valid, i % 2 == 0);
        }
    });
}
