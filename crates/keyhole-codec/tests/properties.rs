//! Black-box property tests for the codec: round-tripping, minimum
//! length, alphabet closure, diffusion, and rejection of everything the
//! encoder never produced.

use keyhole_codec::{Codec, CodecSettings, InvalidCode, DEFAULT_ALPHABET};

fn codec() -> Codec {
    Codec::new(CodecSettings::builder().salt("url-shortener-secret-key").build()).unwrap()
}

#[test]
fn round_trip_over_a_dense_range() {
    let codec = codec();
    for id in 0..2_000 {
        let code = codec.encode(id);
        assert_eq!(codec.decode(&code), Ok(id), "id {id}");
    }
}

#[test]
fn round_trip_over_the_deployment_id_range() {
    // The allocator of the reference deployment starts at 62^5 so codes
    // begin life at six characters.
    let codec = codec();
    for id in 916_132_832..916_132_932 {
        let code = codec.encode(id);
        assert_eq!(codec.decode(&code), Ok(id), "id {id}");
    }
}

#[test]
fn codes_never_fall_below_the_minimum_length() {
    let codec = codec();
    for id in (0..50_000).step_by(61) {
        assert!(codec.encode(id).len() >= 6, "id {id}");
    }
}

#[test]
fn codes_only_use_configured_alphabet_symbols() {
    let codec = codec();
    for id in [0, 1, 99, 61_234, 916_132_832, u64::MAX] {
        let code = codec.encode(id);
        assert!(
            code.chars().all(|c| DEFAULT_ALPHABET.contains(c)),
            "id {id} produced {code}"
        );
    }
}

#[test]
fn sequential_ids_do_not_produce_sequential_codes() {
    let codec = codec();
    for id in 916_132_832..916_132_852 {
        let a = codec.encode(id);
        let b = codec.encode(id + 1);
        assert_ne!(a, b);

        // Visually sequential codes would agree everywhere except a
        // trailing digit; require at least two differing positions.
        let same = a.bytes().zip(b.bytes()).filter(|(x, y)| x == y).count();
        assert!(
            same <= a.len().saturating_sub(2),
            "codes for {id} and {} are near-sequential: {a} vs {b}",
            id + 1
        );
    }
}

#[test]
fn encoding_is_deterministic() {
    let codec = codec();
    for id in [0, 42, 916_132_832] {
        assert_eq!(codec.encode(id), codec.encode(id));
    }
}

#[test]
fn garbage_is_rejected() {
    let codec = codec();
    assert_eq!(codec.decode(""), Err(InvalidCode));
    assert_eq!(codec.decode("invalid!@#"), Err(InvalidCode));
    assert_eq!(codec.decode(" "), Err(InvalidCode));
    assert_eq!(codec.decode("with space"), Err(InvalidCode));
    assert_eq!(codec.decode("héllo"), Err(InvalidCode));
}

#[test]
fn separator_runs_are_structurally_invalid() {
    // Single-identifier codes never contain separator symbols in the
    // numeral run, whatever the salt, so these are rejected before the
    // round-trip comparison even happens.
    let codec = codec();
    for s in ["cfhistu", "tshifc", "CFHISTU", "cf", "cccccc"] {
        assert_eq!(codec.decode(s), Err(InvalidCode), "input {s}");
    }
}

#[test]
fn mechanical_decodes_must_survive_re_encoding() {
    // Same salt and alphabet, different minimum lengths: both codecs
    // derive identical alphabets, so a short code from one peels cleanly
    // in the other and yields a candidate identifier. Only the re-encode
    // comparison catches that the padding differs.
    let short = Codec::new(
        CodecSettings::builder()
            .salt("url-shortener-secret-key")
            .min_length(0)
            .build(),
    )
    .unwrap();
    let long = Codec::new(
        CodecSettings::builder()
            .salt("url-shortener-secret-key")
            .min_length(20)
            .build(),
    )
    .unwrap();

    for id in [0, 1, 42, 9_999] {
        let code = short.encode(id);
        assert!(code.len() < 20);
        assert_eq!(short.decode(&code), Ok(id));
        assert_eq!(long.decode(&code), Err(InvalidCode), "id {id}");
    }
}

#[test]
fn minimum_lengths_beyond_one_extension_round_still_hold() {
    // A single halved-alphabet extension adds one working alphabet's
    // worth of padding (44 characters for the default alphabet), so
    // these minimums force the padding loop through several rounds.
    for min_length in [64, 150] {
        let codec = Codec::new(
            CodecSettings::builder()
                .salt("url-shortener-secret-key")
                .min_length(min_length)
                .build(),
        )
        .unwrap();

        for id in [0, 42, 916_132_832] {
            let code = codec.encode(id);
            assert!(
                code.len() >= min_length,
                "id {id} gave {} chars for minimum {min_length}",
                code.len()
            );
            assert!(
                code.chars().all(|c| DEFAULT_ALPHABET.contains(c)),
                "id {id} produced a foreign character"
            );
            assert_eq!(codec.decode(&code), Ok(id), "id {id} at minimum {min_length}");
        }
    }
}

#[test]
fn tampered_codes_never_decode_to_the_original_identifier() {
    let codec = codec();
    let id = 916_132_832;
    let code = codec.encode(id);

    for pos in 0..code.len() {
        let mut bytes = code.clone().into_bytes();
        bytes[pos] = if bytes[pos] == b'a' { b'b' } else { b'a' };
        let tampered = String::from_utf8(bytes).unwrap();
        if tampered == code {
            continue;
        }
        assert_ne!(codec.decode(&tampered), Ok(id), "pos {pos}");
    }

    assert_ne!(codec.decode(&code[1..]), Ok(id));
    assert_ne!(codec.decode(&code[..code.len() - 1]), Ok(id));
    assert_ne!(codec.decode(&format!("{code}a")), Ok(id));
}

#[test]
fn codes_from_one_salt_are_invalid_under_another() {
    let codec_a = Codec::new(CodecSettings::builder().salt("salt-a").build()).unwrap();
    let codec_b = Codec::new(CodecSettings::builder().salt("salt-b").build()).unwrap();

    for id in [0_u64, 916_132_832] {
        let code = codec_a.encode(id);
        assert_eq!(codec_b.decode(&code), Err(InvalidCode), "id {id}");
        assert_eq!(codec_a.decode(&code), Ok(id));
    }
}

#[test]
fn distinct_ids_yield_distinct_codes() {
    let codec = codec();
    let mut seen = std::collections::HashSet::new();
    for id in 0..5_000 {
        assert!(seen.insert(codec.encode(id)), "collision at id {id}");
    }
}
