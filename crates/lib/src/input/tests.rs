use super::{ErrorKind, IStr};

#[test]
fn test_pairs() {
    let mut input = IStr::from_static(b"3   4\n4   3\n");
    let values = input.iter::<(i64, i64)>().collect::<Result<Vec<_>, _>>().unwrap();
    assert_eq!(values, [(3, 4), (4, 3)]);
    assert!(input.is_empty());
}

#[test]
fn test_lines_keep_empty() {
    let mut input = IStr::from_static(b"1 2\n\n3\n");
    let lines = input
        .lines()
        .map(|line| (line.index().get(), line.as_data()))
        .collect::<Vec<_>>();

    assert_eq!(lines, [(0, &b"1 2"[..]), (4, &b""[..]), (5, &b"3"[..])]);
}

#[test]
fn test_lines_without_trailing_newline() {
    let mut input = IStr::from_static(b"a\nb");
    let lines = input.lines().map(|l| l.as_data()).collect::<Vec<_>>();
    assert_eq!(lines, [&b"a"[..], &b"b"[..]]);
}

#[test]
fn test_vec_of_integers() {
    let mut input = IStr::from_static(b"7 6 4 2 1");
    let values = input.next::<Vec<i64>>().unwrap();
    assert_eq!(values, [7, 6, 4, 2, 1]);
}

#[test]
fn test_negative_integers() {
    let mut input = IStr::from_static(b"-3 12");
    assert_eq!(input.next::<(i64, i64)>().unwrap(), (-3, 12));
}

#[test]
fn test_not_integer() {
    let mut input = IStr::from_static(b"1 2\n3 x4");
    let mut lines = input.lines();
    lines.next();
    let mut line = lines.next().unwrap();

    let error = line.next::<(i64, i64)>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::NotInteger("x4")));
    assert_eq!(error.span().start.get(), 6);
}

#[test]
fn test_missing_tuple_element() {
    let mut input = IStr::from_static(b"42");
    assert!(input.try_next::<(i64, i64)>().unwrap().is_none());

    let mut input = IStr::from_static(b"42");
    let error = input.next::<(i64, i64)>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::ExpectedTuple(2)));
}

#[test]
fn test_try_next_trailing_whitespace() {
    let mut input = IStr::from_static(b"5 6 \r");
    assert_eq!(input.try_next::<(i64, i64)>().unwrap(), Some((5, 6)));
    assert_eq!(input.try_next::<(i64, i64)>().unwrap(), None);
    assert!(input.is_empty());
}

#[test]
fn test_blank() {
    assert!(IStr::from_static(b"  \t\r").is_blank());
    assert!(!IStr::from_static(b" 1 ").is_blank());
}

#[test]
fn test_integer_overflow() {
    let mut input = IStr::from_static(b"99999999999999999999");
    let error = input.next::<i64>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::NotInteger("99999999999999999999")));
}
