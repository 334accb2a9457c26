mod property_partition;
mod recognizers;
pub(crate) mod utils;
