use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Household;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Household::Table)
        .col(
            ColumnDef::new(Household::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(Household::Name)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(
            ColumnDef::new(Household::Settings)
                .text()
                .not_null()
                .default("{}"),
        )
        .col(ColumnDef::new(Household::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(Household::UpdatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Household::Table).to_owned()
}

operation!(CreateTable, create_table, drop_table);
