use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::ShoppingList;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(ShoppingList::Table)
        .col(
            ColumnDef::new(ShoppingList::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(ShoppingList::HouseholdId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(ColumnDef::new(ShoppingList::PlanId).string().string_len(26))
        .col(
            ColumnDef::new(ShoppingList::Items)
                .text()
                .not_null()
                .default("[]"),
        )
        .col(
            ColumnDef::new(ShoppingList::Status)
                .string()
                .not_null()
                .string_len(15)
                .default("active"),
        )
        .col(
            ColumnDef::new(ShoppingList::CreatedAt)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(ShoppingList::UpdatedAt)
                .big_integer()
                .not_null(),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(ShoppingList::Table).to_owned()
}

operation!(CreateTable, create_table, drop_table);

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_shopping_list_household_id")
        .table(ShoppingList::Table)
        .col(ShoppingList::HouseholdId)
        .col(ShoppingList::CreatedAt)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_shopping_list_household_id")
        .table(ShoppingList::Table)
        .to_owned()
}

operation!(CreateIdx1, create_idx_1, drop_idx_1);
