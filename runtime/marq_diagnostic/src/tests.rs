use pretty_assertions::assert_eq;

use super::*;

// Display format

#[test]
fn test_error_display_prefixes_kind() {
    assert_eq!(unknown_tag("p").to_string(), "ParseError: unknown tag 'p'");
    assert_eq!(stack_empty().to_string(), "StackError: stack empty");
    assert_eq!(
        undefined_variable("x").to_string(),
        "VariableError: variable 'x' not found"
    );
    assert_eq!(
        unsupported_operand("subtraction", "String").to_string(),
        "TypeError: subtraction is not defined for String values"
    );
}

#[test]
fn test_kind_names() {
    assert_eq!(ErrorKind::Parse.as_str(), "ParseError");
    assert_eq!(ErrorKind::Stack.as_str(), "StackError");
    assert_eq!(ErrorKind::Variable.as_str(), "VariableError");
    assert_eq!(ErrorKind::Type.as_str(), "TypeError");
}

// Factory functions

#[test]
fn test_parse_factories() {
    assert_eq!(
        missing_text_child("s"),
        Error::new(ErrorKind::Parse, "<s> element has no text child")
    );
    assert_eq!(
        missing_attribute("value"),
        Error::new(ErrorKind::Parse, "attribute 'value' not found")
    );
    assert_eq!(
        invalid_number("abc"),
        Error::new(ErrorKind::Parse, "value 'abc' is not a valid number")
    );
    assert_eq!(
        list_item_outside_list(),
        Error::new(ErrorKind::Parse, "<li> element outside of <ol>")
    );
    assert_eq!(
        expected_list_item("div"),
        Error::new(ErrorKind::Parse, "expected <li> inside <ol>, found <div>")
    );
}

#[test]
fn test_stack_too_shallow_pluralizes() {
    assert_eq!(
        stack_too_shallow(2, 1).message,
        "stack holds 1 value, need 2"
    );
    assert_eq!(
        stack_too_shallow(2, 0).message,
        "stack holds 0 values, need 2"
    );
}

#[test]
fn test_binary_type_mismatch_names_both_sides() {
    let err = binary_type_mismatch("addition", "Number", "String");
    assert_eq!(err.kind, ErrorKind::Type);
    assert_eq!(err.message, "cannot apply addition to Number and String");
}

// ErrorList

#[test]
fn test_empty_list_into_result_is_ok() {
    let list = ErrorList::new();
    assert!(list.is_empty());
    assert_eq!(list.into_result(7), Ok(7));
}

#[test]
fn test_nonempty_list_into_result_is_err() {
    let mut list = ErrorList::new();
    list.push(unknown_tag("p"));
    let result: Result<(), ErrorList> = list.into_result(());
    assert!(result.is_err());
}

#[test]
fn test_join_concatenates_messages_in_order() {
    let mut list = ErrorList::new();
    list.push(unknown_tag("p"));
    list.push(unknown_tag("em"));
    list.push(missing_attribute("value"));

    let joined = list.join();
    assert_eq!(joined.kind, ErrorKind::Parse);
    assert_eq!(
        joined.message,
        "unknown tag 'p'\nunknown tag 'em'\nattribute 'value' not found"
    );
    assert_eq!(
        joined.to_string(),
        "ParseError: unknown tag 'p'\nunknown tag 'em'\nattribute 'value' not found"
    );
}

#[test]
fn test_merge_preserves_order() {
    let mut child = ErrorList::new();
    child.push(unknown_tag("b"));
    child.push(unknown_tag("i"));

    let mut parent = ErrorList::new();
    parent.push(unknown_tag("a"));
    parent.merge(child);

    assert_eq!(parent.len(), 3);
    assert_eq!(parent.errors()[0], unknown_tag("a"));
    assert_eq!(parent.errors()[1], unknown_tag("b"));
    assert_eq!(parent.errors()[2], unknown_tag("i"));
}

#[test]
fn test_single_error_converts_to_list_of_one() {
    let list = ErrorList::from(stack_empty());
    assert_eq!(list.len(), 1);
    assert_eq!(list.errors()[0], stack_empty());
}
