use lib::prelude::*;
use y2024::memory::Scanner;

#[entry(input = "d03.txt", expect = (174960292, 56275602))]
fn main(input: IStr) -> Result<(u64, u64)> {
    let scanner = Scanner::new()?;
    let memory = input.as_data();
    Ok((scanner.sum_products(memory), scanner.sum_enabled_products(memory)))
}
