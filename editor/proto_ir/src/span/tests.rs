use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert!(span.contains(15));
    assert!(!span.contains(20));
}

#[test]
fn test_span_forward_ownership_includes_start() {
    let span = Span::new(3, 6);
    assert!(!span.contains(2));
    assert!(span.contains(3));
    assert!(span.contains(5));
    assert!(!span.contains(6));
}

#[test]
fn test_span_trailing_ownership_includes_end() {
    let span = Span::new(3, 6);
    assert!(!span.contains_trailing(3));
    assert!(span.contains_trailing(4));
    assert!(span.contains_trailing(6));
    assert!(!span.contains_trailing(7));
}

#[test]
fn test_point_span_owns_nothing() {
    let span = Span::point(4);
    assert!(span.is_empty());
    assert!(!span.contains(4));
    assert!(!span.contains_trailing(4));
}

#[test]
fn test_span_from_range_success() {
    let span = Span::from_range(100..200);
    assert_eq!(span.start, 100);
    assert_eq!(span.end, 200);
    assert_eq!(span.to_range(), 100..200);
}

#[test]
fn test_span_try_from_range_start_too_large() {
    let large_start = u32::MAX as usize + 1;
    let result = Span::try_from_range(large_start..large_start + 10);
    assert!(matches!(result, Err(SpanError::StartTooLarge(_))));
}

#[test]
fn test_span_try_from_range_end_too_large() {
    let large_end = u32::MAX as usize + 1;
    let result = Span::try_from_range(0..large_end);
    assert!(matches!(result, Err(SpanError::EndTooLarge(_))));
}

#[test]
fn test_span_error_display() {
    let err = SpanError::StartTooLarge(0x1_0000_0000);
    let msg = format!("{err}");
    assert!(msg.contains("start"));
    assert!(msg.contains("0x100000000"));

    let err = SpanError::EndTooLarge(0x2_0000_0000);
    let msg = format!("{err}");
    assert!(msg.contains("end"));
    assert!(msg.contains("0x200000000"));
}

#[test]
fn test_span_debug_and_display() {
    let span = Span::new(1, 4);
    assert_eq!(format!("{span:?}"), "1..4");
    assert_eq!(format!("{span}"), "1..4");
}
