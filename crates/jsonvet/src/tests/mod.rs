
mod parse_bad;
mod parse_good;
