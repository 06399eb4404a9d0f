use log::error;

pub(crate) fn unwrap_or_def_verbose<T, E>(result: Result<T, E>) -> T
where
    T: Default,
    E: std::fmt::Display,
{
    result
        .inspect_err(|e| {
            error!("ERROR: {e:#}");
        })
        .unwrap_or_default()
}
