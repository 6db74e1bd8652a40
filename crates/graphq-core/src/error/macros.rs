//! Error macros for graphq

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GraphError::UsageError($msg.to_string()))
    };
}

/// Macro for rejecting a malformed line in a graph or query file
#[macro_export]
macro_rules! bail_malformed {
    ($line:expr, $($arg:tt)*) => {
        return Err($crate::error::GraphError::malformed($line, format!($($arg)*)))
    };
}

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_value($context, $value))
    };
}
