pub(crate) mod bits;
