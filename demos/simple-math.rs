extern crate decimal_bigint;
use decimal_bigint::*;
use std::str::FromStr;

fn main() {
    println!("Hello, Big Integers!");

    // nothing is registered until configure() runs
    let n = BigInteger::from(32u32);
    match n.checked_mul(&n) {
        Ok(product) => println!("unexpected product {}", product),
        Err(err) => println!("before configure: {}", err),
    }

    configure();

    let square = &n * &n;
    println!("square {}", square);
    println!("sum {}", square + BigInteger::from(1024u32));

    let input = "123456789123456789123456789";
    let big = BigInteger::from_str(input).unwrap();
    println!("{} * {} = {}", big, big, &big * &big);

    let mut acc = BigInteger::from(7u8);
    acc += BigInteger::from(993u32);
    println!("sum mut: {} ({} digits)", acc, acc.digit_count());

    let product: BigInteger = (1..=30u32).map(BigInteger::from).product();
    println!("30! = {}", product);
    println!("debug: {:?}", product);

    let registry = registry();
    {
        let original = registry.find(&Operation::Sum).unwrap();
        let _logged = ScopedOverride::with(&registry, Operation::Sum, move || {
            println!("  (creating sum strategy)");
            original.create()
        });
        println!("sum with override: {}", BigInteger::from(2u8) + BigInteger::from(3u8));
    }
    println!("sum restored: {}", BigInteger::from(2u8) + BigInteger::from(3u8));

    if BigInteger::zero() != BigInteger::from(vec![0, 0, 0]) {
        println!("000 is not equal to zero");
    } else {
        println!("000 IS equal to zero");
    }
}
