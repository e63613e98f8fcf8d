//! Error macros for pathways

/// Macro for mapping a failed read of a dataset or config file
#[macro_export]
macro_rules! map_io_err {
    ($op:expr, $path:expr, $error:expr) => {
        $crate::error::PathwaysError::io_operation($op, $path.display(), $error)
    };
}
