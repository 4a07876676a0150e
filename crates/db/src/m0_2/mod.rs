mod budget_preference;
mod cost_record;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "kitcha",
    "m0_2",
    vec_box![crate::m0_1::Migration],
    vec_box![
        budget_preference::CreateTable,
        cost_record::CreateTable,
        cost_record::CreateUserOccurredIdx
    ]
);
