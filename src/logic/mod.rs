//! Tournament business logic: rankings and group seeding.

mod ranking;
mod seeding;

pub use ranking::{rank_filtered, rank_overall, PlayerRanking, RankingError};
pub use seeding::{group_name, snake_draft};
