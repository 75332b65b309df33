include!("../test_macros.rs");

macro_rules! impl_case {
    ( $name:ident: [$($a:literal),*] + [$($b:literal),*] == [$($c:literal),*] ) => {
        #[test]
        fn $name() {
            call_func!(Sum, [$($a),*] [$($b),*] [$($c),*]);
            call_func!(Sum, [$($b),*] [$($a),*] [$($c),*]);
        }
    };
}

// 1024 + 2048 = 3072
impl_case!(case_same_length: [4, 2, 0, 1] + [8, 4, 0, 2] == [2, 7, 0, 3]);
// 9999 + 9999 = 19998
impl_case!(case_same_length_grows: [9, 9, 9, 9] + [9, 9, 9, 9] == [8, 9, 9, 9, 1]);
// 1 + 123 = 124
impl_case!(case_1_123: [1] + [3, 2, 1] == [4, 2, 1]);
// 99 + 1 = 100
impl_case!(case_carry_through_longer_operand: [9, 9] + [1] == [0, 0, 1]);
// 9991 + 9 = 10000
impl_case!(case_9991_9: [1, 9, 9, 9] + [9] == [0, 0, 0, 0, 1]);
impl_case!(case_0_0: [0] + [0] == [0]);
impl_case!(case_empty_123: [] + [3, 2, 1] == [3, 2, 1]);
impl_case!(case_empty_empty: [] + [] == []);
// 5 + 5 = 10
impl_case!(case_5_5: [5] + [5] == [0, 1]);


#[test]
fn power_of_two_by_doubling() {
    let mut value = DigitBuffer::from_vec(vec![1]);
    for _ in 0..300 {
        let copy = value.clone();
        Sum.calculate(&mut value, &copy);
    }

    let expected = "2037035976334486086268445688409378161051468393665936250636140449354381299763336706183397376";
    assert_eq!(digits_to_string(&value), expected);
}

#[test]
fn result_digits_stay_in_range() {
    let mut value = DigitBuffer::from_vec(vec![9; 50]);
    let other = DigitBuffer::from_vec(vec![9; 75]);
    Sum.calculate(&mut value, &other);
    assert!(value.is_valid());
    assert_eq!(value.len(), 76);
}
