// Regular expressions compiled once on first use

mod cache;

pub(crate) use cache::regex;
