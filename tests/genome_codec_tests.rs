use symbios_archive::{Bitstring, Codon, GenomeError, Intstring, NumericVector, Realstring};

// ============================================================================
// Token stream layout
// ============================================================================

#[test]
fn test_encode_int_genome() {
    let g = Intstring::from(vec![3, -1, 0, 42]);
    assert_eq!(g.encode_genome(), "4 3 -1 0 42");
}

#[test]
fn test_decode_preserves_gene_order() {
    let g = Intstring::decode_genome("4 3 -1 0 42").unwrap();
    assert_eq!(g.as_slice(), &[3, -1, 0, 42]);
}

#[test]
fn test_empty_genome_is_just_the_count() {
    let g = Realstring::new();
    assert_eq!(g.encode_genome(), "0");
    assert!(Realstring::decode_genome("0").unwrap().is_empty());
}

#[test]
fn test_encoding_has_count_plus_one_tokens() {
    let g: Realstring = (0..17).map(|i| i as f64 * 0.1).collect();
    assert_eq!(g.encode_genome().split_whitespace().count(), 18);
}

#[test]
fn test_real_codons_round_trip_exactly() {
    let g = Realstring::from(vec![0.1, -2.5e-300, f64::MAX, 1.0 / 3.0, f64::MIN_POSITIVE]);
    let back = Realstring::decode_genome(&g.encode_genome()).unwrap();
    assert_eq!(back, g);
}

#[test]
fn test_short_genome_rejected() {
    assert_eq!(
        Intstring::decode_genome("4 3 -1 0"),
        Err(GenomeError::CountMismatch {
            declared: 4,
            found: 3
        })
    );
}

#[test]
fn test_long_genome_rejected() {
    assert_eq!(
        Intstring::decode_genome("4 3 -1 0 42 7"),
        Err(GenomeError::CountMismatch {
            declared: 4,
            found: 5
        })
    );
}

#[test]
fn test_bad_tokens_rejected() {
    assert_eq!(Intstring::decode_genome("   "), Err(GenomeError::MissingCount));
    assert_eq!(
        Intstring::decode_genome("-2 1 2"),
        Err(GenomeError::InvalidCount {
            token: "-2".into()
        })
    );
    assert_eq!(
        Intstring::decode_genome("2 1 x"),
        Err(GenomeError::InvalidCodon {
            index: 1,
            token: "x".into()
        })
    );
    // Reals are not valid integer codons
    assert!(Intstring::decode_genome("1 2.5").is_err());
}

#[test]
fn test_huge_declared_count_fails_without_allocating() {
    let err = Intstring::decode_genome("18446744073709551615 1").unwrap_err();
    assert!(matches!(err, GenomeError::CountMismatch { found: 1, .. }));
}

#[test]
fn test_with_len_is_default_filled() {
    let mut g = Bitstring::with_len(5);
    assert_eq!(g.as_slice(), &[0; 5]);
    g[2] = 1;
    g.push(1);
    assert_eq!(g.encode_genome(), "6 0 0 1 0 0 1");
}

#[test]
fn test_serde_shape_is_single_genome_field() {
    let g = Intstring::from(vec![1, 2]);
    let json = serde_json::to_string(&g).unwrap();
    assert_eq!(json, r#"{"genome":"2 1 2"}"#);
    assert_eq!(serde_json::from_str::<Intstring>(&json).unwrap(), g);
}

#[test]
fn test_serde_surfaces_genome_errors() {
    let err = serde_json::from_str::<Intstring>(r#"{"genome":"3 1 2"}"#).unwrap_err();
    assert!(err.to_string().contains("declares 3 codons but carries 2"));

    assert!(serde_json::from_str::<Intstring>(r#"{"genome":"1 1","extra":0}"#).is_err());
    assert!(serde_json::from_str::<Intstring>(r#"{}"#).is_err());
}

// ============================================================================
// Sign handling
// ============================================================================

#[test]
fn test_plus_signed_tokens_rejected() {
    assert_eq!(
        Intstring::decode_genome("+2 1 2"),
        Err(GenomeError::InvalidCount {
            token: "+2".into()
        })
    );
    assert_eq!(
        Intstring::decode_genome("2 1 +2"),
        Err(GenomeError::InvalidCodon {
            index: 1,
            token: "+2".into()
        })
    );
    assert!(Realstring::decode_genome("1 +0.5").is_err());
    assert!(Realstring::decode_genome("1 +inf").is_err());
}

#[test]
fn test_negative_tokens_still_accepted() {
    let g = Realstring::decode_genome("2 -0.5 -inf").unwrap();
    assert_eq!(g.as_slice(), &[-0.5, f64::NEG_INFINITY]);
}

// ============================================================================
// Compact real codons
// ============================================================================

#[test]
fn test_extreme_reals_use_exponent_form() {
    let g = Realstring::from(vec![5e-324, -2.5e-300, 1.5, f64::MAX]);
    assert_eq!(
        g.encode_genome(),
        "4 5e-324 -2.5e-300 1.5 1.7976931348623157e308"
    );
    assert_eq!(Realstring::decode_genome(&g.encode_genome()).unwrap(), g);
}

#[test]
fn test_ordinary_reals_keep_plain_form() {
    let g = Realstring::from(vec![1.0, 2.5, -0.001, 123456.75, 0.0]);
    assert_eq!(g.encode_genome(), "5 1 2.5 -0.001 123456.75 0");
}

#[test]
fn test_real_tokens_stay_short() {
    let g = Realstring::from(vec![f64::MIN_POSITIVE, 1e-300, 1e300, -f64::MAX, 5e-324]);
    let encoded = g.encode_genome();
    for token in encoded.split_whitespace() {
        assert!(token.len() <= 24, "token {token:?} is not compact");
    }
    assert_eq!(Realstring::decode_genome(&encoded).unwrap(), g);
}

#[test]
fn test_f32_codons_round_trip() {
    let g: NumericVector<f32> = vec![0.1f32, 1e-40, f32::MAX, -3.25].into();
    let back = NumericVector::<f32>::decode_genome(&g.encode_genome()).unwrap();
    assert_eq!(back, g);
}

#[test]
fn test_non_finite_codons_round_trip() {
    let g = Realstring::from(vec![f64::INFINITY, f64::NEG_INFINITY]);
    assert_eq!(g.encode_genome(), "2 inf -inf");
    let back = Realstring::decode_genome("1 NaN").unwrap();
    assert!(back[0].is_nan());
}

#[test]
fn test_write_codon_appends_one_token() {
    let mut out = String::from("x");
    (-7i64).write_codon(&mut out);
    1e-7f64.write_codon(&mut out);
    assert_eq!(out, "x-71e-7");
}
