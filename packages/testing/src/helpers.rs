use cosmwasm_std::{Event, StdError, StdResult};

/// Assert elements in vecs one by one in order to get a more meaningful error
/// when debugging tests
pub fn assert_eq_vec<T: std::fmt::Debug + PartialEq>(expected: Vec<T>, actual: Vec<T>) {
    assert_eq!(expected.len(), actual.len());

    for (i, element) in expected.iter().enumerate() {
        assert_eq!(*element, actual[i]);
    }
}

/// Assert StdError::GenericErr message with expected_msg
pub fn assert_generic_error_message<T>(response: StdResult<T>, expected_msg: &str) {
    match response {
        Err(StdError::GenericErr {
            msg,
            ..
        }) => assert_eq!(msg, expected_msg),
        Err(other_err) => panic!("Unexpected error: {other_err:?}"),
        Ok(_) => panic!("SHOULD NOT ENTER HERE!"),
    }
}

/// Value of the first attribute named `key` on the first event of type `ty`
pub fn event_attribute<'a>(events: &'a [Event], ty: &str, key: &str) -> Option<&'a str> {
    events
        .iter()
        .filter(|event| event.ty == ty)
        .flat_map(|event| event.attributes.iter())
        .find(|attr| attr.key == key)
        .map(|attr| attr.value.as_str())
}
