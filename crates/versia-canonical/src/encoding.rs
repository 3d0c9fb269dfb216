use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes left untouched when encoding a path: alphanumerics plus the URI
/// reserved and mark characters `; , / ? : @ & = + $ - _ . ! ~ * ' ( ) #`.
///
/// Everything else, `%` included, is escaped as `%XX` over its UTF-8 bytes.
const PATH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

/// Percent-encodes a request path for inclusion in the canonical string.
///
/// This is the only encoding routine used on either side of a signature.
/// Already-escaped sequences are escaped again (`%20` becomes `%2520`).
pub fn encode_path(path: &str) -> String {
    utf8_percent_encode(path, PATH_ENCODE_SET).to_string()
}
