macro_rules! assert_err {
    ($result:expr, starts_with $prefix:literal) => {
        match $result {
            Ok(_) => panic!("Expected an error but got Ok"),
            Err(err) => {
                let message = err.to_string();
                assert!(
                    message.starts_with($prefix),
                    "Expected error starting with {:?}, got {:?}",
                    $prefix,
                    message
                );
            }
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(_) => panic!("Expected an error but got Ok"),
            Err(err) => assert_eq!($message, err.to_string()),
        }
    };
}

pub(crate) use assert_err;
