use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::Plan;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Plan::Table)
        .col(
            ColumnDef::new(Plan::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(Plan::HouseholdId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(
            ColumnDef::new(Plan::WeekStart)
                .string()
                .not_null()
                .string_len(10),
        )
        .col(
            ColumnDef::new(Plan::WeekEnd)
                .string()
                .not_null()
                .string_len(10),
        )
        .col(ColumnDef::new(Plan::Days).text().not_null().default("[]"))
        .col(
            ColumnDef::new(Plan::Status)
                .string()
                .not_null()
                .string_len(15)
                .default("draft"),
        )
        .col(ColumnDef::new(Plan::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(Plan::UpdatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Plan::Table).to_owned()
}

operation!(CreateTable, create_table, drop_table);

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_plan_household_week")
        .table(Plan::Table)
        .col(Plan::HouseholdId)
        .col(Plan::WeekStart)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_plan_household_week")
        .table(Plan::Table)
        .to_owned()
}

operation!(CreateIdx1, create_idx_1, drop_idx_1);
