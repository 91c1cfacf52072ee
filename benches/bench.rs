#![feature(test)]

extern crate test;

use largeint::{LargeInteger, Multiplier};
use test::Bencher;

fn operand(limbs: usize) -> LargeInteger {
    // Dense bit pattern with every limb populated.
    let mut x = LargeInteger::from(0x9E37_79B9_7F4A_7C15u64);
    while x.size() < limbs {
        x = x.times(&x).plus(&LargeInteger::from(limbs));
    }
    x.shift_right((x.size() - limbs) * 64)
}

fn bench_times(b: &mut Bencher, limbs: usize, multiplier: Multiplier) {
    let x = operand(limbs);
    let y = operand(limbs).plus(&LargeInteger::one());
    b.iter(|| x.times_with(&y, &multiplier));
}

#[bench]
fn bench_times_conventional_256(b: &mut Bencher) {
    bench_times(b, 256, Multiplier::new(usize::MAX, usize::MAX));
}

#[bench]
fn bench_times_karatsuba_256(b: &mut Bencher) {
    bench_times(b, 256, Multiplier::new(32, usize::MAX));
}

#[bench]
fn bench_times_concurrent_256(b: &mut Bencher) {
    bench_times(b, 256, Multiplier::default());
}

#[bench]
fn bench_times_concurrent_4096(b: &mut Bencher) {
    bench_times(b, 4096, Multiplier::default());
}

#[bench]
fn bench_divide_2048_by_1024(b: &mut Bencher) {
    let x = operand(2048);
    let y = operand(1024);
    b.iter(|| x.divide(&y).unwrap());
}

#[bench]
fn bench_divide_word(b: &mut Bencher) {
    let x = operand(1024);
    b.iter(|| x.divide_word(1_000_000_007).unwrap());
}

#[bench]
fn bench_mod_pow_2048_bits(b: &mut Bencher) {
    let m = operand(32).plus(&LargeInteger::one());
    let base = operand(31);
    let exp = operand(32);
    b.iter(|| base.mod_pow(&exp, &m).unwrap());
}

#[bench]
fn bench_to_string(b: &mut Bencher) {
    let x = operand(1024);
    b.bytes = x.digit_length() as u64;
    b.iter(|| x.to_string());
}

#[bench]
fn bench_from_str(b: &mut Bencher) {
    let s = operand(1024).to_string();
    b.bytes = s.len() as u64;
    b.iter(|| s.parse::<LargeInteger>().unwrap());
}
