//! Known-vector tests over the full 32-byte reference sequence in all five
//! representations, plus the concrete conversion scenarios.

use convex::{codec_for, convert, decode_auto, normalize, Format};
use rstest::rstest;

const BYTES: [u8; 32] = [
    32, 149, 119, 189, 166, 191, 75, 88, 4, 189, 70, 248, 98, 21, 128, 221, 109, 78, 139, 250, 45,
    25, 14, 28, 80, 233, 50, 73, 43, 172, 160, 125,
];

const STRING: &str = "209577bda6bf4b5804bd46f8621580dd6d4e8bfa2d190e1c50e932492baca07d";
const C: &str = "0x209577bdu, 0xa6bf4b58u, 0x04bd46f8u, 0x621580ddu, 0x6d4e8bfau, 0x2d190e1cu, 0x50e93249u, 0x2baca07du";
const COQ: &str = "32%Z; 149%Z; 119%Z; 189%Z; 166%Z; 191%Z; 75%Z; 88%Z; 4%Z; 189%Z; 70%Z; 248%Z; 98%Z; 21%Z; 128%Z; 221%Z; 109%Z; 78%Z; 139%Z; 250%Z; 45%Z; 25%Z; 14%Z; 28%Z; 80%Z; 233%Z; 50%Z; 73%Z; 43%Z; 172%Z; 160%Z; 125%Z";
const RUST: &str = "0x20, 0x95, 0x77, 0xbd, 0xa6, 0xbf, 0x4b, 0x58, 0x04, 0xbd, 0x46, 0xf8, 0x62, 0x15, 0x80, 0xdd, 0x6d, 0x4e, 0x8b, 0xfa, 0x2d, 0x19, 0x0e, 0x1c, 0x50, 0xe9, 0x32, 0x49, 0x2b, 0xac, 0xa0, 0x7d";
const JSON: &str = "32, 149, 119, 189, 166, 191, 75, 88, 4, 189, 70, 248, 98, 21, 128, 221, 109, 78, 139, 250, 45, 25, 14, 28, 80, 233, 50, 73, 43, 172, 160, 125";

#[rstest]
#[case::string(Format::String, STRING)]
#[case::c(Format::C, C)]
#[case::coq(Format::Coq, COQ)]
#[case::rust(Format::Rust, RUST)]
#[case::json(Format::Json, JSON)]
fn decodes_reference_vector(#[case] format: Format, #[case] text: &str) {
    let cleaned = normalize(text);
    assert_eq!(codec_for(format).decode(&cleaned), Ok(BYTES.to_vec()));
}

#[rstest]
#[case::string(Format::String, STRING)]
#[case::c(Format::C, C)]
#[case::coq(Format::Coq, COQ)]
#[case::rust(Format::Rust, RUST)]
#[case::json(Format::Json, JSON)]
fn encodes_reference_vector_byte_for_byte(#[case] format: Format, #[case] text: &str) {
    assert_eq!(codec_for(format).encode(&BYTES), Ok(text.to_string()));
}

#[rstest]
#[case::string(Format::String, STRING)]
#[case::c(Format::C, C)]
#[case::coq(Format::Coq, COQ)]
#[case::rust(Format::Rust, RUST)]
#[case::json(Format::Json, JSON)]
fn auto_detect_agrees_with_explicit_decode(#[case] format: Format, #[case] text: &str) {
    let cleaned = normalize(text);
    assert_eq!(decode_auto(&cleaned), codec_for(format).decode(&cleaned));
}

#[rstest]
#[case::to_string(None, STRING)]
#[case::to_c(Some(Format::C), C)]
#[case::to_coq(Some(Format::Coq), COQ)]
#[case::to_rust(Some(Format::Rust), RUST)]
#[case::to_json(Some(Format::Json), JSON)]
fn converts_reference_string_to_every_target(#[case] target: Option<Format>, #[case] expected: &str) {
    assert_eq!(convert(STRING, None, target, false), Ok(expected.to_string()));
}

#[test]
fn convert_small_vector_to_rust() {
    assert_eq!(
        convert("209577bd", None, Some(Format::Rust), false),
        Ok("0x20, 0x95, 0x77, 0xbd".to_string())
    );
}

#[test]
fn convert_small_vector_to_rust_reversed() {
    assert_eq!(
        convert("209577bd", None, Some(Format::Rust), true),
        Ok("0xbd, 0x77, 0x95, 0x20".to_string())
    );
}

#[test]
fn cross_format_reencode_preserves_bytes() {
    // decode C, re-encode as Coq, decode again: same sequence
    let bytes = codec_for(Format::C)
        .decode(&normalize(C))
        .expect("reference C vector decodes");
    let coq = codec_for(Format::Coq).encode(&bytes).expect("Coq encode is total");
    assert_eq!(codec_for(Format::Coq).decode(&normalize(&coq)), Ok(bytes));
}

#[test]
fn reference_vectors_are_mutually_exclusive() {
    let texts = [STRING, C, COQ, RUST, JSON];
    let formats = [
        Format::String,
        Format::C,
        Format::Coq,
        Format::Rust,
        Format::Json,
    ];
    for (text, own) in texts.iter().zip(formats) {
        let cleaned = normalize(text);
        for format in formats {
            assert_eq!(
                codec_for(format).recognize(&cleaned),
                format == own,
                "{} vector vs {} grammar",
                own,
                format
            );
        }
    }
}
