// file to be included in tests modules

/// Run binary digit-buffer strategy and compare with expected digits
///
/// Digits are written least significant first, as stored.
///
macro_rules! call_func {
    ( $strategy:expr, [ $($a:literal),* ] [ $($b:literal),* ] [ $($c:literal),* ]) => {{
        let mut a = DigitBuffer::from_vec(vec![ $( $a ),* ]);
        let b = DigitBuffer::from_vec(vec![ $( $b ),* ]);
        let expected: &[Digit] = &[ $( $c ),* ];

        $strategy.calculate(&mut a, &b);
        assert_eq!(a.as_slice(), expected);
    }};
}

/// Render digit buffer most-significant first
#[allow(dead_code)]
fn digits_to_string(v: &DigitBuffer) -> String {
    v.iter().rev().map(|d| char::from(b'0' + d)).collect()
}
