/// Install `env_logger` as the global logger, configured by `RUST_LOG`.
///
/// Fails if another global logger has already been installed.
pub fn set_default_logger() -> crate::Result<()> {
    env_logger::try_init().map_err(err_map!(Unexpected, "Error initializing logger"))?;
    debug!("Initialized default logger");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_logger_once() {
        // the first call may race other tests in the same process
        let _ = set_default_logger();
        let err = set_default_logger().unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Unexpected);
    }
}
