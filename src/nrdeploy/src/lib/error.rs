/// The type to represent nrdeploy results.
pub type NrResult<T = ()> = anyhow::Result<T>;
