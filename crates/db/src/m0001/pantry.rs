use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::Pantry;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Pantry::Table)
        .col(
            ColumnDef::new(Pantry::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(Pantry::HouseholdId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(
            ColumnDef::new(Pantry::Item)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(ColumnDef::new(Pantry::Quantity).double())
        .col(ColumnDef::new(Pantry::Unit).string().string_len(15))
        .col(ColumnDef::new(Pantry::Category).string().string_len(25))
        .col(ColumnDef::new(Pantry::LastUpdated).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Pantry::Table).to_owned()
}

operation!(CreateTable, create_table, drop_table);

fn create_uk_1() -> IndexCreateStatement {
    Index::create()
        .name("uk_pantry_household_item")
        .table(Pantry::Table)
        .unique()
        .col(Pantry::HouseholdId)
        .col(Pantry::Item)
        .to_owned()
}

fn drop_uk_1() -> IndexDropStatement {
    Index::drop()
        .name("uk_pantry_household_item")
        .table(Pantry::Table)
        .to_owned()
}

operation!(CreateUk1, create_uk_1, drop_uk_1);
