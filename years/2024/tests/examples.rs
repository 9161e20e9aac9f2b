//! Worked examples from the puzzle descriptions.

use lib::input::IStr;
use y2024::distance::Columns;
use y2024::memory::Scanner;
use y2024::reports;

mod day1 {
    use super::*;

    #[test]
    fn example() {
        let input = IStr::from_static(b"3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n");
        let mut columns = Columns::parse(input);
        assert_eq!(columns.total_distance().unwrap(), 11);
        assert_eq!(columns.similarity().unwrap(), 31);
    }

    #[test]
    fn crlf_line_endings() {
        let input = IStr::from_static(b"3   4\r\n4   3\r\n2   5\r\n1   3\r\n3   9\r\n3   3\r\n");
        let mut columns = Columns::parse(input);
        assert_eq!(columns.total_distance().unwrap(), 11);
        assert_eq!(columns.similarity().unwrap(), 31);
    }

    #[test]
    fn rerun_is_identical() {
        let input = IStr::from_static(b"3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n");
        let mut a = Columns::parse(input);
        let mut b = Columns::parse(input);
        assert_eq!(a.total_distance().unwrap(), b.total_distance().unwrap());
        assert_eq!(a.similarity().unwrap(), b.similarity().unwrap());
    }
}

mod day2 {
    use super::*;

    const EXAMPLE: &[u8] = b"7 6 4 2 1\n1 2 7 8 9\n9 7 6 2 1\n1 3 2 4 5\n8 6 4 4 1\n1 3 6 7 9\n";

    #[test]
    fn example() {
        let reports = reports::parse(IStr::from_static(EXAMPLE));
        assert_eq!(reports::count_safe(&reports), 2);
        assert_eq!(reports::count_tolerable(&reports), 4);
    }

    #[test]
    fn single_removal_restores_safety() {
        assert!(!reports::is_safe(&[1, 3, 2, 4, 5]));
        assert!(reports::can_be_safe(&[1, 3, 2, 4, 5]));
        assert!(reports::is_safe(&[1, 2, 4, 5]));
    }

    #[test]
    fn single_level_is_safe() {
        assert!(reports::is_safe(&[42]));
    }
}

mod day3 {
    use super::*;

    #[test]
    fn example_part1() {
        let scanner = Scanner::new().unwrap();
        let memory = b"xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
        assert_eq!(scanner.sum_products(memory), 161);
    }

    #[test]
    fn example_part2() {
        let scanner = Scanner::new().unwrap();
        let memory = b"xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";
        assert_eq!(scanner.sum_products(memory), 161);
        assert_eq!(scanner.sum_enabled_products(memory), 48);
    }

    #[test]
    fn from_input() {
        let scanner = Scanner::new().unwrap();
        let input = IStr::from_static(b"mul(1,2)\ndon't()\nmul(3,4)\n");
        assert_eq!(scanner.sum_products(input.as_data()), 14);
        assert_eq!(scanner.sum_enabled_products(input.as_data()), 2);
    }
}
