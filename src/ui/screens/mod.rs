pub(crate) mod charts;
pub(crate) mod rules;
pub(crate) mod statements;
pub(crate) mod transactions;
