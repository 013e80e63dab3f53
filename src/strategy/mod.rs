pub mod lookahead;
pub mod series;
