// Byte-oriented encodings: positional bases, bit-packed bases, percent and
// entity escapes, and the Private-Use-Area invisible text.
//
// Every codec here runs over UTF-8 bytes, never UTF-16 code units, so emoji
// and other multi-byte characters round-trip losslessly. Decoders skip
// characters outside their alphabet and decode what remains; when nothing is
// recoverable they return the input unchanged.

use crate::registry::{
    Algorithm, Category, Registry, TransformSpec,
    spec::{
        PRIORITY_BASE32_FAMILY, PRIORITY_BASE58_FAMILY, PRIORITY_BASE64_FAMILY,
        PRIORITY_EXCLUSIVE_SET, PRIORITY_GENERIC, PRIORITY_HEX_LIKE, PRIORITY_UNICODE_RANGE,
    },
};
use crate::stego::invisible;
use crate::text::lossy_utf8;

pub(super) fn register(reg: &mut Registry) {
    let specs = [
        TransformSpec::new(
            "Binary",
            Category::Encoding,
            Algorithm::Custom {
                encode: encode_binary,
                decode: Some(decode_binary),
            },
        )
        .priority(PRIORITY_EXCLUSIVE_SET)
        .detect(detect_binary),
        TransformSpec::new(
            "Hexadecimal",
            Category::Encoding,
            Algorithm::Custom {
                encode: encode_hex,
                decode: Some(decode_hex),
            },
        )
        .priority(PRIORITY_HEX_LIKE)
        .detect(detect_hex),
        TransformSpec::new(
            "Base32",
            Category::Encoding,
            Algorithm::Custom {
                encode: encode_base32,
                decode: Some(decode_base32),
            },
        )
        .priority(PRIORITY_BASE32_FAMILY)
        .detect(detect_base32),
        TransformSpec::new(
            "Base45",
            Category::Encoding,
            Algorithm::Custom {
                encode: encode_base45,
                decode: Some(decode_base45),
            },
        )
        .priority(PRIORITY_HEX_LIKE),
        TransformSpec::new(
            "Base58",
            Category::Encoding,
            Algorithm::Custom {
                encode: encode_base58,
                decode: Some(decode_base58),
            },
        )
        .priority(PRIORITY_BASE58_FAMILY)
        .detect(detect_base58)
        .preview(preview_base58),
        TransformSpec::new(
            "Base62",
            Category::Encoding,
            Algorithm::Custom {
                encode: encode_base62,
                decode: Some(decode_base62),
            },
        )
        .priority(PRIORITY_HEX_LIKE),
        TransformSpec::new(
            "Base64",
            Category::Encoding,
            Algorithm::Custom {
                encode: encode_base64,
                decode: Some(decode_base64),
            },
        )
        .priority(PRIORITY_BASE64_FAMILY)
        .detect(detect_base64)
        .preview(preview_base64),
        TransformSpec::new(
            "Base64 URL",
            Category::Encoding,
            Algorithm::Custom {
                encode: encode_base64url,
                decode: Some(decode_base64url),
            },
        )
        .priority(PRIORITY_BASE64_FAMILY)
        .detect(detect_base64url),
        TransformSpec::new(
            "ASCII85",
            Category::Encoding,
            Algorithm::Custom {
                encode: encode_ascii85,
                decode: Some(decode_ascii85),
            },
        )
        .priority(PRIORITY_HEX_LIKE)
        .detect(detect_ascii85),
        TransformSpec::new(
            "URL Encode",
            Category::Encoding,
            Algorithm::Custom {
                encode: encode_url,
                decode: Some(decode_url),
            },
        )
        .priority(PRIORITY_GENERIC)
        .detect(detect_url),
        TransformSpec::new(
            "HTML Entities",
            Category::Encoding,
            Algorithm::Custom {
                encode: encode_html,
                decode: Some(decode_html),
            },
        )
        .priority(PRIORITY_GENERIC)
        .detect(detect_html),
        TransformSpec::new(
            "Invisible Text",
            Category::Encoding,
            Algorithm::Custom {
                encode: encode_invisible,
                decode: Some(decode_invisible),
            },
        )
        .priority(PRIORITY_UNICODE_RANGE)
        .detect(detect_invisible),
    ];
    for spec in specs {
        reg.register(spec).expect("built-in registration");
    }
}

// ---------------------------------------------------------------------------
// Binary / hex
// ---------------------------------------------------------------------------

fn encode_binary(text: &str) -> String {
    text.bytes()
        .map(|b| format!("{b:08b}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn decode_binary(text: &str) -> String {
    let bits: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes: Vec<u8> = bits
        .as_bytes()
        .chunks(8)
        .filter(|chunk| chunk.len() == 8)
        .filter_map(|chunk| u8::from_str_radix(std::str::from_utf8(chunk).ok()?, 2).ok())
        .collect();
    lossy_utf8(bytes)
}

fn detect_binary(text: &str) -> bool {
    let cleaned = text.trim();
    let digits = cleaned.chars().filter(|c| !c.is_whitespace()).count();
    digits >= 8
        && !cleaned.is_empty()
        && cleaned.chars().all(|c| c == '0' || c == '1' || c.is_whitespace())
}

fn encode_hex(text: &str) -> String {
    text.bytes()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn decode_hex(text: &str) -> String {
    let digits: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes: Vec<u8> = digits
        .as_bytes()
        .chunks(2)
        .filter(|chunk| chunk.len() == 2)
        .filter_map(|chunk| u8::from_str_radix(std::str::from_utf8(chunk).ok()?, 16).ok())
        .collect();
    lossy_utf8(bytes)
}

fn detect_hex(text: &str) -> bool {
    let cleaned: String = text.trim().chars().filter(|c| !c.is_whitespace()).collect();
    cleaned.len() >= 4 && cleaned.chars().all(|c| c.is_ascii_hexdigit())
}

// ---------------------------------------------------------------------------
// Base32 (RFC 4648 alphabet, 5-bit groups)
// ---------------------------------------------------------------------------

const BASE32_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

fn encode_base32(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    let mut acc: u32 = 0;
    let mut bits = 0u32;
    for b in text.bytes() {
        acc = (acc << 8) | b as u32;
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(BASE32_ALPHABET[((acc >> bits) & 0x1F) as usize] as char);
        }
    }
    if bits > 0 {
        out.push(BASE32_ALPHABET[((acc << (5 - bits)) & 0x1F) as usize] as char);
    }
    while out.len() % 8 != 0 {
        out.push('=');
    }
    out
}

fn decode_base32(text: &str) -> String {
    let mut bytes = Vec::new();
    let mut acc: u32 = 0;
    let mut bits = 0u32;
    for c in text.chars() {
        let c = c.to_ascii_uppercase();
        let Some(idx) = BASE32_ALPHABET.iter().position(|&a| a as char == c) else {
            continue; // padding, whitespace, anything invalid
        };
        acc = (acc << 5) | idx as u32;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            bytes.push(((acc >> bits) & 0xFF) as u8);
        }
    }
    lossy_utf8(bytes)
}

fn detect_base32(text: &str) -> bool {
    let cleaned: String = text.trim().chars().filter(|c| !c.is_whitespace()).collect();
    cleaned.len() >= 8
        && cleaned
            .chars()
            .all(|c| c.is_ascii_uppercase() || ('2'..='7').contains(&c) || c == '=')
}

// ---------------------------------------------------------------------------
// Base45 (RFC 9285: 2-byte groups, 3 digits, least significant first)
// ---------------------------------------------------------------------------

const BASE45_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

fn encode_base45(text: &str) -> String {
    let alphabet: Vec<char> = BASE45_ALPHABET.chars().collect();
    let bytes = text.as_bytes();
    let mut out = String::new();
    for pair in bytes.chunks(2) {
        if pair.len() == 2 {
            let x = 256 * pair[0] as u32 + pair[1] as u32;
            out.push(alphabet[(x % 45) as usize]);
            out.push(alphabet[(x / 45 % 45) as usize]);
            out.push(alphabet[(x / 45 / 45) as usize]);
        } else {
            let x = pair[0] as u32;
            out.push(alphabet[(x % 45) as usize]);
            out.push(alphabet[(x / 45) as usize]);
        }
    }
    out
}

fn decode_base45(text: &str) -> String {
    let codes: Vec<u32> = text
        .chars()
        .filter_map(|c| BASE45_ALPHABET.chars().position(|a| a == c))
        .map(|i| i as u32)
        .collect();
    let mut bytes = Vec::new();
    for group in codes.chunks(3) {
        match group {
            [e, d, c] => {
                let x = e + d * 45 + c * 45 * 45;
                bytes.push((x >> 8) as u8);
                bytes.push((x & 0xFF) as u8);
            }
            [e, d] => {
                let x = e + d * 45;
                bytes.push((x & 0xFF) as u8);
            }
            _ => {}
        }
    }
    lossy_utf8(bytes)
}

// ---------------------------------------------------------------------------
// Base58 / Base62 (arbitrary-precision long division over byte vectors)
// ---------------------------------------------------------------------------

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
const BASE62_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Big-endian bytes to little-endian radix digits. Empty when the value is 0.
fn radix_digits(bytes: &[u8], radix: u32) -> Vec<u8> {
    let mut digits: Vec<u8> = Vec::new();
    for &b in bytes {
        let mut carry = b as u32;
        for d in digits.iter_mut() {
            carry += (*d as u32) << 8;
            *d = (carry % radix) as u8;
            carry /= radix;
        }
        while carry > 0 {
            digits.push((carry % radix) as u8);
            carry /= radix;
        }
    }
    digits
}

/// Radix digit indices (most significant first) back to big-endian bytes.
fn radix_bytes(indices: &[u32], radix: u32) -> Vec<u8> {
    let mut bytes: Vec<u8> = Vec::new(); // little-endian while building
    for &v in indices {
        let mut carry = v;
        for b in bytes.iter_mut() {
            carry += (*b as u32) * radix;
            *b = (carry & 0xFF) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push((carry & 0xFF) as u8);
            carry >>= 8;
        }
    }
    bytes.reverse();
    bytes
}

fn encode_base58(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let bytes = text.as_bytes();
    let zeros = bytes.iter().take_while(|&&b| b == 0).count();
    let alphabet: Vec<char> = BASE58_ALPHABET.chars().collect();
    let digits = radix_digits(bytes, 58);
    let mut out: String = std::iter::repeat_n('1', zeros).collect();
    for &d in digits.iter().rev() {
        out.push(alphabet[d as usize]);
    }
    out
}

fn decode_base58(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let zeros = text.chars().take_while(|&c| c == '1').count();
    let indices: Vec<u32> = text
        .chars()
        .filter_map(|c| BASE58_ALPHABET.chars().position(|a| a == c))
        .map(|i| i as u32)
        .collect();
    // Leading zero digits contribute nothing to the value; the explicit
    // zero-byte prefix restores them.
    let mut bytes = vec![0u8; zeros];
    bytes.extend(radix_bytes(&indices, 58));
    lossy_utf8(bytes)
}

fn detect_base58(text: &str) -> bool {
    let cleaned: String = text.trim().chars().filter(|c| !c.is_whitespace()).collect();
    cleaned.len() >= 4 && cleaned.chars().all(|c| BASE58_ALPHABET.contains(c))
}

fn encode_base62(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let digits = radix_digits(text.as_bytes(), 62);
    if digits.is_empty() {
        return "0".to_string();
    }
    let alphabet: Vec<char> = BASE62_ALPHABET.chars().collect();
    digits.iter().rev().map(|&d| alphabet[d as usize]).collect()
}

fn decode_base62(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let indices: Vec<u32> = text
        .chars()
        .filter_map(|c| BASE62_ALPHABET.chars().position(|a| a == c))
        .map(|i| i as u32)
        .collect();
    let mut bytes = radix_bytes(&indices, 62);
    if bytes.is_empty() {
        bytes.push(0);
    }
    lossy_utf8(bytes)
}

/// Long base outputs get elided in pickers.
fn ellipt(full: String, max: usize) -> String {
    if full.chars().count() <= max {
        return full;
    }
    let cut: String = full.chars().take(max).collect();
    format!("{cut}...")
}

fn preview_base58(text: &str) -> String {
    ellipt(encode_base58(text), 12)
}

fn preview_base64(text: &str) -> String {
    ellipt(encode_base64(text), 12)
}

// ---------------------------------------------------------------------------
// Base64 / Base64 URL (6-bit groups)
// ---------------------------------------------------------------------------

const BASE64_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

fn encode_base64(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(bytes.len().div_ceil(3) * 4);
    for group in bytes.chunks(3) {
        let b0 = group[0] as u32;
        let b1 = group.get(1).copied().unwrap_or(0) as u32;
        let b2 = group.get(2).copied().unwrap_or(0) as u32;
        let n = (b0 << 16) | (b1 << 8) | b2;
        out.push(BASE64_ALPHABET[(n >> 18) as usize & 0x3F] as char);
        out.push(BASE64_ALPHABET[(n >> 12) as usize & 0x3F] as char);
        out.push(if group.len() > 1 {
            BASE64_ALPHABET[(n >> 6) as usize & 0x3F] as char
        } else {
            '='
        });
        out.push(if group.len() > 2 {
            BASE64_ALPHABET[n as usize & 0x3F] as char
        } else {
            '='
        });
    }
    out
}

fn decode_base64(text: &str) -> String {
    decode_base64_core(text)
        .map(lossy_utf8)
        .unwrap_or_else(|| text.to_string())
}

/// None when the input carries no Base64 symbols at all.
fn decode_base64_core(text: &str) -> Option<Vec<u8>> {
    let mut bytes = Vec::new();
    let mut acc: u32 = 0;
    let mut bits = 0u32;
    let mut seen = false;
    for c in text.chars() {
        let Some(idx) = BASE64_ALPHABET.iter().position(|&a| a as char == c) else {
            continue; // '=', whitespace, and anything invalid
        };
        seen = true;
        acc = (acc << 6) | idx as u32;
        bits += 6;
        if bits >= 8 {
            bits -= 8;
            bytes.push(((acc >> bits) & 0xFF) as u8);
        }
    }
    seen.then_some(bytes)
}

fn detect_base64(text: &str) -> bool {
    let cleaned: String = text.trim().chars().filter(|c| !c.is_whitespace()).collect();
    cleaned.len() >= 4
        && cleaned
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '=')
}

fn encode_base64url(text: &str) -> String {
    encode_base64(text)
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            c => c,
        })
        .collect()
}

fn decode_base64url(text: &str) -> String {
    let std_form: String = text
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            c => c,
        })
        .collect();
    decode_base64(&std_form)
}

fn detect_base64url(text: &str) -> bool {
    let cleaned: String = text.trim().chars().filter(|c| !c.is_whitespace()).collect();
    cleaned.len() >= 4
        && cleaned
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '=')
}

// ---------------------------------------------------------------------------
// ASCII85 (Adobe form: <~ ~> wrapper, big-endian 4-byte groups, z shortcut)
// ---------------------------------------------------------------------------

fn encode_ascii85(text: &str) -> String {
    let mut out = String::from("<~");
    for group in text.as_bytes().chunks(4) {
        let mut n: u32 = 0;
        for i in 0..4 {
            n = (n << 8) | group.get(i).copied().unwrap_or(0) as u32;
        }
        if n == 0 && group.len() == 4 {
            out.push('z');
            continue;
        }
        let mut digits = ['!'; 5];
        let mut v = n;
        for d in digits.iter_mut().rev() {
            *d = (b'!' + (v % 85) as u8) as char;
            v /= 85;
        }
        out.extend(&digits[..group.len() + 1]);
    }
    out.push_str("~>");
    out
}

fn decode_ascii85(text: &str) -> String {
    let body = text
        .trim()
        .trim_start_matches("<~")
        .trim_end_matches("~>");
    let mut bytes = Vec::new();
    let mut group: Vec<u32> = Vec::with_capacity(5);
    let mut flush = |group: &mut Vec<u32>, bytes: &mut Vec<u8>, len: usize| {
        if len < 2 {
            return;
        }
        let mut padded = group.clone();
        padded.resize(5, 84); // pad with 'u'
        let mut n: u64 = 0;
        for &d in &padded {
            n = n * 85 + d as u64;
        }
        let word = n as u32;
        for i in 0..len - 1 {
            bytes.push((word >> (24 - 8 * i)) as u8);
        }
    };
    for c in body.chars() {
        if c == 'z' && group.is_empty() {
            bytes.extend_from_slice(&[0, 0, 0, 0]);
            continue;
        }
        if !('!'..='u').contains(&c) {
            continue; // whitespace and anything invalid
        }
        group.push(c as u32 - '!' as u32);
        if group.len() == 5 {
            flush(&mut group, &mut bytes, 5);
            group.clear();
        }
    }
    let rest = group.len();
    flush(&mut group, &mut bytes, rest);
    lossy_utf8(bytes)
}

fn detect_ascii85(text: &str) -> bool {
    let t = text.trim();
    t.starts_with("<~") && t.ends_with("~>")
}

// ---------------------------------------------------------------------------
// URL percent-encoding
// ---------------------------------------------------------------------------

/// Characters `encodeURIComponent` leaves unescaped.
fn url_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '!' | '~' | '*' | '\'' | '(' | ')')
}

fn encode_url(text: &str) -> String {
    let mut out = String::new();
    for c in text.chars() {
        if url_unreserved(c) {
            out.push(c);
        } else {
            let mut buf = [0u8; 4];
            for b in c.encode_utf8(&mut buf).bytes() {
                out.push('%');
                out.push_str(&format!("{b:02X}"));
            }
        }
    }
    out
}

/// Malformed escapes or invalid UTF-8 leave the input unchanged.
fn decode_url(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut bytes = Vec::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '%' {
            let (Some(&h), Some(&l)) = (chars.get(i + 1), chars.get(i + 2)) else {
                return text.to_string();
            };
            let (Some(h), Some(l)) = (h.to_digit(16), l.to_digit(16)) else {
                return text.to_string();
            };
            bytes.push((h * 16 + l) as u8);
            i += 3;
        } else {
            let mut buf = [0u8; 4];
            bytes.extend_from_slice(chars[i].encode_utf8(&mut buf).as_bytes());
            i += 1;
        }
    }
    String::from_utf8(bytes).unwrap_or_else(|_| text.to_string())
}

fn detect_url(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    chars
        .windows(3)
        .any(|w| w[0] == '%' && w[1].is_ascii_hexdigit() && w[2].is_ascii_hexdigit())
}

// ---------------------------------------------------------------------------
// HTML entities
// ---------------------------------------------------------------------------

fn encode_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn decode_html(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

fn detect_html(text: &str) -> bool {
    if !text.contains('&') || !text.contains(';') {
        return false;
    }
    // &name; or &#39; — an ampersand, a non-empty alnum/# run, a semicolon.
    let chars: Vec<char> = text.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if c != '&' {
            continue;
        }
        let mut j = i + 1;
        while j < chars.len() && (chars[j].is_ascii_alphanumeric() || chars[j] == '#') {
            j += 1;
        }
        if j > i + 1 && chars.get(j) == Some(&';') {
            return true;
        }
    }
    false
}

// ---------------------------------------------------------------------------
// Invisible text (Private Use Area)
// ---------------------------------------------------------------------------

fn encode_invisible(text: &str) -> String {
    invisible::encode(text)
}

/// The raw decode: the registry transform must round-trip payloads exactly,
/// so it skips the steganography module's `@`-artifact scrub.
fn decode_invisible(text: &str) -> String {
    invisible::decode(text)
}

fn detect_invisible(text: &str) -> bool {
    text.chars()
        .any(|c| ('\u{E0000}'..='\u{E00FF}').contains(&c))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const CORPUS: &[&str] = &["hello world", "Hello World. <3 🌞", "", "a", "ÅÄÖ 你好"];

    #[test]
    fn binary_roundtrip() {
        assert_eq!(encode_binary("AB"), "01000001 01000010");
        for s in CORPUS {
            assert_eq!(decode_binary(&encode_binary(s)), *s);
        }
    }

    #[test]
    fn hex_roundtrip() {
        assert_eq!(encode_hex("hi"), "68 69");
        for s in CORPUS {
            assert_eq!(decode_hex(&encode_hex(s)), *s);
        }
    }

    #[test]
    fn base32_known_vector() {
        assert_eq!(encode_base32("foobar"), "MZXW6YTBOI======");
        assert_eq!(decode_base32("MZXW6YTBOI======"), "foobar");
    }

    #[test]
    fn base32_roundtrip() {
        for s in CORPUS {
            assert_eq!(decode_base32(&encode_base32(s)), *s);
        }
    }

    #[test]
    fn base45_roundtrip() {
        for s in CORPUS {
            assert_eq!(decode_base45(&encode_base45(s)), *s);
        }
    }

    #[test]
    fn base58_leading_zeros() {
        let input = "\0\0abc";
        let encoded = encode_base58(input);
        assert!(encoded.starts_with("11"));
        assert!(!encoded.starts_with("111"));
        assert_eq!(decode_base58(&encoded), input);
    }

    #[test]
    fn base58_roundtrip() {
        for s in CORPUS {
            assert_eq!(decode_base58(&encode_base58(s)), *s);
        }
    }

    #[test]
    fn base62_roundtrip() {
        for s in CORPUS {
            assert_eq!(decode_base62(&encode_base62(s)), *s);
        }
    }

    #[test]
    fn base64_known_vector() {
        assert_eq!(encode_base64("hello world"), "aGVsbG8gd29ybGQ=");
        assert_eq!(decode_base64("aGVsbG8gd29ybGQ="), "hello world");
    }

    #[test]
    fn base64_roundtrip() {
        for s in CORPUS {
            assert_eq!(decode_base64(&encode_base64(s)), *s);
        }
    }

    #[test]
    fn base64_malformed_returns_input() {
        assert_eq!(decode_base64("!!!"), "!!!");
    }

    #[test]
    fn base64url_roundtrip_no_padding() {
        let encoded = encode_base64url("ab?~");
        assert!(!encoded.contains('='));
        assert!(!encoded.contains('+'));
        for s in CORPUS {
            assert_eq!(decode_base64url(&encode_base64url(s)), *s);
        }
    }

    #[test]
    fn ascii85_wrapper_and_roundtrip() {
        let encoded = encode_ascii85("hello world");
        assert!(encoded.starts_with("<~") && encoded.ends_with("~>"));
        for s in CORPUS {
            assert_eq!(decode_ascii85(&encode_ascii85(s)), *s);
        }
    }

    #[test]
    fn ascii85_zero_group_shortcut() {
        let encoded = encode_ascii85("\0\0\0\0");
        assert_eq!(encoded, "<~z~>");
        assert_eq!(decode_ascii85(&encoded), "\0\0\0\0");
    }

    #[test]
    fn url_roundtrip() {
        assert_eq!(encode_url("a b&c"), "a%20b%26c");
        for s in CORPUS {
            assert_eq!(decode_url(&encode_url(s)), *s);
        }
        // Malformed escape is left alone.
        assert_eq!(decode_url("100%!"), "100%!");
    }

    #[test]
    fn html_roundtrip() {
        assert_eq!(encode_html("a<b>&'\""), "a&lt;b&gt;&amp;&#39;&quot;");
        for s in CORPUS {
            assert_eq!(decode_html(&encode_html(s)), *s);
        }
    }

    #[test]
    fn invisible_roundtrip_is_invisible() {
        let encoded = encode_invisible("secret");
        assert!(encoded.chars().all(|c| ('\u{E0000}'..='\u{E00FF}').contains(&c)));
        assert_eq!(decode_invisible(&encoded), "secret");
        assert!(detect_invisible(&encoded));
        assert!(!detect_invisible("plain"));
    }

    #[test]
    fn previews_elide_long_output() {
        assert_eq!(preview_base64("hi"), "aGk=");
        let long = preview_base64("a long enough input string");
        assert_eq!(long.chars().count(), 15);
        assert!(long.ends_with("..."));
    }

    #[test]
    fn detectors_accept_own_output() {
        assert!(detect_binary(&encode_binary("hi")));
        assert!(detect_hex(&encode_hex("hi")));
        assert!(detect_base32(&encode_base32("hello")));
        assert!(detect_base58(&encode_base58("hello")));
        assert!(detect_base64(&encode_base64("hello")));
        assert!(detect_base64url(&encode_base64url("hello")));
        assert!(detect_ascii85(&encode_ascii85("hello")));
        assert!(detect_url(&encode_url("a b")));
        assert!(detect_html(&encode_html("a<b")));
    }
}
