include!("../test_macros.rs");

macro_rules! impl_case {
    ( $name:ident: [$($a:literal),*] * [$($b:literal),*] == [$($c:literal),*] ) => {
        #[test]
        fn $name() {
            call_func!(Multiplication, [$($a),*] [$($b),*] [$($c),*]);
            call_func!(Multiplication, [$($b),*] [$($a),*] [$($c),*]);
        }
    };
}

// 32 * 32 = 1024
impl_case!(case_same_length: [2, 3] * [2, 3] == [4, 2, 0, 1]);
impl_case!(case_0_0: [0] * [0] == [0]);
// 1234 * 56789 = 70077626
impl_case!(case_1234_56789: [4, 3, 2, 1] * [9, 8, 7, 6, 5] == [6, 2, 6, 7, 7, 0, 0, 7]);
// 99 * 99 = 9801
impl_case!(case_99_99: [9, 9] * [9, 9] == [1, 0, 8, 9]);
// 99999 * 99999 = 9999800001
impl_case!(case_99999_99999: [9, 9, 9, 9, 9] * [9, 9, 9, 9, 9] == [1, 0, 0, 0, 0, 8, 9, 9, 9, 9]);
// 1234 * 0 = 0
impl_case!(case_1234_0: [4, 3, 2, 1] * [0] == [0]);
// 7 * 1000 = 7000
impl_case!(case_7_1000: [7] * [0, 0, 0, 1] == [0, 0, 0, 7]);
impl_case!(case_empty_123: [] * [3, 2, 1] == []);


#[test]
fn test_123456789_987654321() {
    let mut a = DigitBuffer::from_u128(123456789);
    let b = DigitBuffer::from_u128(987654321);
    Multiplication.calculate(&mut a, &b);
    assert_eq!(digits_to_string(&a), "121932631112635269");
}

#[test]
fn test_product_of_1_to_25() {
    let mut value = DigitBuffer::from_u128(1);
    for n in 2..=25u128 {
        Multiplication.calculate(&mut value, &DigitBuffer::from_u128(n));
        assert!(value.is_valid());
    }
    assert_eq!(digits_to_string(&value), "15511210043330985984000000");
}

#[test]
fn multiply_digits_into_reuses_buffer() {
    let mut result = DigitBuffer::from_vec(vec![1, 2, 3, 4, 5, 6]);
    multiply_digits_into(&[5], &[5], &mut result);
    assert_eq!(result.as_slice(), &[5, 2]);
}
