//! Day 3: scanning corrupted memory for instructions.

use lib::prelude::BStr;
use log::warn;
use regex::bytes::{Captures, Regex};

/// Matches `mul(X,Y)`, `do()` and `don't()`, in that order of alternatives.
const PATTERN: &str = r"mul\(([0-9]+),([0-9]+)\)|do\(\)|don't\(\)";

/// Errors raised when setting up a [Scanner].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid instruction pattern")]
    Pattern(#[from] regex::Error),
}

/// An instruction found in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Multiply two operands.
    Mul(u32, u32),
    /// Enable multiplications.
    Do,
    /// Disable multiplications.
    Dont,
}

/// Scanner for instructions embedded in memory.
pub struct Scanner {
    pattern: Regex,
}

impl Scanner {
    /// Construct a new scanner.
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            pattern: Regex::new(PATTERN)?,
        })
    }

    /// Iterate over all instructions in order of appearance.
    ///
    /// Matches never overlap, anything which doesn't match is noise.
    pub fn instructions<'a>(
        &'a self,
        memory: &'a [u8],
    ) -> impl Iterator<Item = Instruction> + 'a {
        self.pattern.captures_iter(memory).filter_map(instruction)
    }

    /// Operands of every `mul` instruction, in order of appearance.
    pub fn matches(&self, memory: &[u8]) -> Vec<(u32, u32)> {
        self.instructions(memory)
            .filter_map(|i| match i {
                Instruction::Mul(a, b) => Some((a, b)),
                _ => None,
            })
            .collect()
    }

    /// Sum the products of every `mul` instruction.
    pub fn sum_products(&self, memory: &[u8]) -> u64 {
        self.matches(memory)
            .into_iter()
            .map(|(a, b)| u64::from(a) * u64::from(b))
            .sum()
    }

    /// Sum the products of `mul` instructions which are enabled.
    ///
    /// Multiplications start out enabled, `don't()` disables them and `do()`
    /// enables them again.
    pub fn sum_enabled_products(&self, memory: &[u8]) -> u64 {
        let (_, sum) = self
            .instructions(memory)
            .fold((true, 0u64), |(enabled, sum), i| match i {
                Instruction::Do => (true, sum),
                Instruction::Dont => (false, sum),
                Instruction::Mul(a, b) if enabled => (true, sum + u64::from(a) * u64::from(b)),
                Instruction::Mul(..) => (enabled, sum),
            });

        sum
    }
}

fn instruction(captures: Captures<'_>) -> Option<Instruction> {
    if let (Some(a), Some(b)) = (captures.get(1), captures.get(2)) {
        return Some(Instruction::Mul(operand(a.as_bytes())?, operand(b.as_bytes())?));
    }

    match captures.get(0)?.as_bytes() {
        b"do()" => Some(Instruction::Do),
        _ => Some(Instruction::Dont),
    }
}

fn operand(digits: &[u8]) -> Option<u32> {
    let value = std::str::from_utf8(digits).ok()?.parse().ok();

    if value.is_none() {
        warn!("operand `{}` out of range, skipping", BStr::new(digits));
    }

    value
}

#[cfg(test)]
mod tests {
    use super::{Instruction, Scanner};

    const EXAMPLE: &[u8] = b"xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";

    #[test]
    fn test_matches() {
        let scanner = Scanner::new().unwrap();
        assert_eq!(scanner.matches(EXAMPLE), [(2, 4), (5, 5), (11, 8), (8, 5)]);
    }

    #[test]
    fn test_example() {
        let scanner = Scanner::new().unwrap();
        assert_eq!(scanner.sum_products(EXAMPLE), 161);
        assert_eq!(scanner.sum_enabled_products(EXAMPLE), 48);
    }

    #[test]
    fn test_instructions() {
        let scanner = Scanner::new().unwrap();
        let instructions = scanner.instructions(EXAMPLE).collect::<Vec<_>>();

        assert_eq!(
            instructions,
            [
                Instruction::Mul(2, 4),
                Instruction::Dont,
                Instruction::Mul(5, 5),
                Instruction::Mul(11, 8),
                Instruction::Do,
                Instruction::Mul(8, 5),
            ]
        );
    }

    #[test]
    fn test_malformed() {
        let scanner = Scanner::new().unwrap();
        let memory = b"mul(abc,2) mul(4*  mul ( 2 , 3 ) mul(-1,2) mul(,3) mul(7,3)";
        assert_eq!(scanner.matches(memory), [(7, 3)]);
    }

    #[test]
    fn test_toggles_repeat() {
        let scanner = Scanner::new().unwrap();
        let memory = b"don't()don't()mul(1,1)do()do()mul(2,2)don't()mul(3,3)do()mul(4,4)";
        assert_eq!(scanner.sum_products(memory), 1 + 4 + 9 + 16);
        assert_eq!(scanner.sum_enabled_products(memory), 4 + 16);
    }

    #[test]
    fn test_toggle_inside_noise() {
        let scanner = Scanner::new().unwrap();
        let memory = b"don'tmul(2,2)do(mul(3,3)don't()\nmul(4,4)\ndo()mul(5,5)";
        assert_eq!(scanner.sum_enabled_products(memory), 4 + 9 + 25);
    }

    #[test]
    fn test_operand_overflow() {
        let scanner = Scanner::new().unwrap();
        let memory = b"mul(99999999999,2)mul(2,3)";
        assert_eq!(scanner.matches(memory), [(2, 3)]);
    }

    #[test]
    fn test_idempotent() {
        let scanner = Scanner::new().unwrap();
        assert_eq!(
            scanner.sum_enabled_products(EXAMPLE),
            scanner.sum_enabled_products(EXAMPLE)
        );
    }
}
