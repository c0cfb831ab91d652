pub(crate) mod compute;
